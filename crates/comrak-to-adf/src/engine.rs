/*
 * engine.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The conversion engine: a visitor that builds an ADF tree from
 * enter/exit events.
 *
 * The engine keeps two stacks. The node stack holds the block ancestors
 * still being built, outermost first; closing a scope appends the finished
 * node to its parent (or to the document). The mark stack holds the inline
 * formatting spans currently open; every text node emitted receives a copy
 * of it.
 *
 * Images in external media mode are the one place where a block node has
 * to appear in inline flow. The enclosing paragraph is closed, the
 * `mediaSingle` is appended to the nearest block scope, and a continuation
 * paragraph is opened for whatever inline content follows. A continuation
 * that is closed without content is dropped.
 */

use crate::config::{Config, ImageRequest};
use crate::error::{RenderError, Result};
use crate::source::{SourceNode, Visitor, WalkStatus};
use adf_types::{Document, Mark, Node, SubSupType};
use std::mem;

/// A node on the open-node stack.
#[derive(Debug)]
struct OpenNode {
    node: Node,
    /// Opened after a media splice to collect the remaining inline content.
    continuation: bool,
}

/// The state of one conversion.
///
/// A `Conversion` is created per walk and consumed by [`Conversion::finish`].
/// Entering a `Document` event resets it, so feeding several documents
/// through the same value yields independent results.
#[derive(Debug)]
pub struct Conversion<'c> {
    config: &'c Config,
    document: Document,
    node_stack: Vec<OpenNode>,
    mark_stack: Vec<Mark>,
    /// The last node appended was text emitted by [`Conversion::emit_text`].
    text_run: bool,
    finished: Option<Document>,
}

impl<'c> Conversion<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            document: Document::new(),
            node_stack: Vec::new(),
            mark_stack: Vec::new(),
            text_run: false,
            finished: None,
        }
    }

    /// Take the document completed by the last `Document` exit event.
    pub fn finish(self) -> Result<Document> {
        self.finished.ok_or(RenderError::Unfinished)
    }

    fn reset(&mut self) {
        self.document = Document::new();
        self.node_stack.clear();
        self.mark_stack.clear();
        self.text_run = false;
        self.finished = None;
    }

    /// Open a new block scope.
    fn push(&mut self, node: Node) {
        self.text_run = false;
        self.node_stack.push(OpenNode {
            node,
            continuation: false,
        });
    }

    /// Close the innermost block scope and append it to its parent.
    fn pop(&mut self) {
        self.text_run = false;
        let Some(open) = self.node_stack.pop() else {
            return;
        };
        if open.continuation && open.node.content().is_empty() {
            tracing::trace!(node = open.node.node_type(), "Dropping empty continuation");
            return;
        }
        self.append_leaf(open.node);
    }

    /// Append a finished node to the innermost open scope, or to the document.
    fn append_leaf(&mut self, node: Node) {
        self.text_run = false;
        match self.node_stack.last_mut() {
            Some(parent) => parent.node.append_child(node),
            None => self.document.push(node),
        }
    }

    fn push_mark(&mut self, mark: Mark) {
        self.mark_stack.push(mark);
    }

    fn pop_mark(&mut self) {
        self.mark_stack.pop();
    }

    /// Emit a text node carrying a snapshot of the open marks.
    ///
    /// Consecutive segments with the same marks (a soft break between two
    /// words, for instance) are merged into one node.
    fn emit_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.text_run {
            let previous = self
                .node_stack
                .last_mut()
                .and_then(|open| open.node.last_child_mut());
            if let Some(previous) = previous {
                let same_marks = previous.marks() == self.mark_stack.as_slice();
                if previous.text_content().is_some() && same_marks {
                    previous.push_text(text);
                    return;
                }
            }
        }
        let node = Node::text_with_marks(text, self.mark_stack.clone());
        self.append_leaf(node);
        self.text_run = true;
    }

    fn finalize(&mut self) {
        while !self.node_stack.is_empty() {
            self.pop();
        }
        self.mark_stack.clear();
        let document = mem::take(&mut self.document);
        tracing::debug!(blocks = document.content.len(), "Finished ADF document");
        self.finished = Some(document);
    }

    fn render_code_block(&mut self, fenced: bool, language: Option<&str>, lines: &[&str]) {
        let language = if fenced { language.unwrap_or("") } else { "" };
        let mut code_block = Node::code_block(language);
        let text = lines.concat();
        if !text.is_empty() {
            code_block.append_child(Node::text(text));
        }
        self.append_leaf(code_block);
    }

    fn render_image(&mut self, destination: &str, title: &str, alt: &str) {
        let request = ImageRequest {
            destination,
            alt: if alt.is_empty() { destination } else { alt },
            title,
        };

        if let Some(handler) = &self.config.image_handler {
            let node = handler(&request);
            self.append_leaf(node);
        } else if self.config.external_media {
            let mut media_single = Node::media_single(self.config.image_layout);
            media_single.append_child(Node::external_media(destination, alt));
            if !title.is_empty() {
                media_single.append_child(Node::caption(title));
            }
            self.splice_block(media_single);
        } else {
            let link = Mark::link(destination, title);
            self.append_leaf(Node::text_with_marks(request.alt, vec![link]));
        }
    }

    /// Insert a block node at the current position of the inline flow.
    ///
    /// If the innermost scope holds inline content it is closed first (and
    /// dropped when it is still empty), the block is appended to the scope
    /// below it, and an empty continuation of the same kind is reopened.
    fn splice_block(&mut self, block: Node) {
        let continuation = match self.node_stack.last() {
            // Code blocks and captions are never open scopes
            Some(open) if open.node.holds_inlines() => open.node.empty_like(),
            _ => None,
        };

        if continuation.is_some() {
            if let Some(open) = self.node_stack.pop() {
                if open.node.content().is_empty() {
                    tracing::trace!(node = open.node.node_type(), "Dropping empty scope before splice");
                } else {
                    self.append_leaf(open.node);
                }
            }
        }

        tracing::debug!(
            block = block.node_type(),
            depth = self.node_stack.len(),
            "Splicing block node out of inline content"
        );
        self.append_leaf(block);

        if let Some(node) = continuation {
            self.node_stack.push(OpenNode {
                node,
                continuation: true,
            });
        }
    }
}

impl Visitor for Conversion<'_> {
    fn enter(&mut self, node: &SourceNode<'_>) -> Result<WalkStatus> {
        match node {
            SourceNode::Document => {
                tracing::debug!("Converting document to ADF");
                self.reset();
            }

            SourceNode::Heading { level } => self.push(Node::heading(*level)),
            SourceNode::Blockquote => self.push(Node::blockquote()),
            SourceNode::List { ordered, start } => {
                if *ordered {
                    self.push(Node::ordered_list(*start));
                } else {
                    self.push(Node::bullet_list());
                }
            }
            SourceNode::ListItem => self.push(Node::list_item()),
            SourceNode::Paragraph | SourceNode::TextBlock => self.push(Node::paragraph()),

            SourceNode::CodeBlock {
                fenced,
                language,
                lines,
            } => {
                self.render_code_block(*fenced, *language, lines);
                return Ok(WalkStatus::SkipChildren);
            }

            SourceNode::ThematicBreak => self.append_leaf(Node::rule()),

            // ADF has no passthrough for raw markup
            SourceNode::HtmlBlock | SourceNode::RawHtml => return Ok(WalkStatus::SkipChildren),

            SourceNode::AutoLink { url, label } => {
                let text = Node::text_with_marks(*label, vec![Mark::link(*url, "")]);
                self.append_leaf(text);
                return Ok(WalkStatus::SkipChildren);
            }

            SourceNode::CodeSpan => self.push_mark(Mark::code()),
            SourceNode::Emphasis { level } => {
                if *level == 2 {
                    self.push_mark(Mark::strong());
                } else {
                    self.push_mark(Mark::em());
                }
            }
            SourceNode::Link { destination, title } => {
                self.push_mark(Mark::link(*destination, *title));
            }
            SourceNode::Strikethrough => self.push_mark(Mark::strike()),
            SourceNode::Superscript => self.push_mark(Mark::subsup(SubSupType::Sup)),

            SourceNode::Image {
                destination,
                title,
                alt,
            } => {
                self.render_image(destination, title, alt);
                return Ok(WalkStatus::SkipChildren);
            }

            SourceNode::Text {
                segment,
                hard_line_break,
            } => {
                self.emit_text(segment);
                if *hard_line_break {
                    self.append_leaf(Node::hard_break());
                }
            }
            SourceNode::Literal { value } => self.emit_text(value),

            SourceNode::Table => self.push(Node::table(self.config.table_layout)),
            SourceNode::TableHeader | SourceNode::TableRow => self.push(Node::table_row()),
            SourceNode::TableCell { header } => {
                if *header {
                    self.push(Node::table_header());
                } else {
                    self.push(Node::table_cell());
                }
                // Cell content must be block-level
                self.push(Node::paragraph());
            }

            SourceNode::TaskCheckBox { checked } => {
                let text = if *checked { "[x] " } else { "[ ] " };
                self.append_leaf(Node::text(text));
            }
        }
        Ok(WalkStatus::Continue)
    }

    fn exit(&mut self, node: &SourceNode<'_>) -> Result<()> {
        match node {
            SourceNode::Document => self.finalize(),

            SourceNode::Heading { .. }
            | SourceNode::Blockquote
            | SourceNode::List { .. }
            | SourceNode::ListItem
            | SourceNode::Paragraph
            | SourceNode::TextBlock
            | SourceNode::Table
            | SourceNode::TableHeader
            | SourceNode::TableRow => self.pop(),

            SourceNode::TableCell { .. } => {
                // The implicit paragraph, then the cell
                self.pop();
                self.pop();
            }

            SourceNode::CodeSpan
            | SourceNode::Emphasis { .. }
            | SourceNode::Link { .. }
            | SourceNode::Strikethrough
            | SourceNode::Superscript => self.pop_mark(),

            SourceNode::CodeBlock { .. }
            | SourceNode::HtmlBlock
            | SourceNode::ThematicBreak
            | SourceNode::AutoLink { .. }
            | SourceNode::Image { .. }
            | SourceNode::RawHtml
            | SourceNode::Text { .. }
            | SourceNode::Literal { .. }
            | SourceNode::TaskCheckBox { .. } => {}
        }
        Ok(())
    }
}
