/*
 * walk.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Drive a `Visitor` over comrak's arena AST.
 */

use crate::error::Result;
use crate::source::{SourceNode, Visitor, WalkStatus};
use comrak::arena_tree::Node;
use comrak::nodes::{Ast, ListType, NodeLink, NodeValue};
use std::cell::RefCell;

/// Walk `root` and its descendants in document order.
///
/// Every mapped node is entered, its children walked unless the visitor
/// returns [`WalkStatus::SkipChildren`], and then exited. Nodes with no
/// counterpart are not reported: their inline children are walked in place,
/// block subtrees are skipped.
pub fn walk<'a, V: Visitor>(root: &'a Node<'a, RefCell<Ast>>, visitor: &mut V) -> Result<()> {
    walk_node(root, visitor, None)
}

/// `checkbox` is set for the first paragraph of a task list item.
fn walk_node<'a, V: Visitor>(
    node: &'a Node<'a, RefCell<Ast>>,
    visitor: &mut V,
    checkbox: Option<bool>,
) -> Result<()> {
    let ast = node.data.borrow();

    let Some(source) = describe(node, &ast.value) else {
        if ast.value.block() {
            tracing::trace!(node = ?ast.value, "Skipping unsupported block");
            return Ok(());
        }
        tracing::trace!(node = ?ast.value, "Unwrapping unsupported inline");
        for child in node.children() {
            walk_node(child, visitor, None)?;
        }
        return Ok(());
    };

    if visitor.enter(&source)? == WalkStatus::Continue {
        if let Some(checked) = checkbox {
            leaf(visitor, &SourceNode::TaskCheckBox { checked })?;
        }

        match &ast.value {
            NodeValue::Code(code) => {
                leaf(visitor, &SourceNode::Literal { value: &code.literal })?;
            }
            NodeValue::TaskItem(mark) => {
                let mut pending = Some(mark.is_some());
                for child in node.children() {
                    let is_paragraph = matches!(child.data.borrow().value, NodeValue::Paragraph);
                    let checkbox = if is_paragraph { pending.take() } else { None };
                    walk_node(child, visitor, checkbox)?;
                }
            }
            _ => {
                for child in node.children() {
                    walk_node(child, visitor, None)?;
                }
            }
        }
    }

    visitor.exit(&source)
}

fn leaf<V: Visitor>(visitor: &mut V, node: &SourceNode<'_>) -> Result<()> {
    visitor.enter(node)?;
    visitor.exit(node)
}

/// Map a comrak node to its event payload. Returns `None` for node kinds
/// the engine has no rule for.
fn describe<'a, 'v>(
    node: &'a Node<'a, RefCell<Ast>>,
    value: &'v NodeValue,
) -> Option<SourceNode<'v>> {
    let source = match value {
        NodeValue::Document => SourceNode::Document,

        NodeValue::Heading(heading) => SourceNode::Heading {
            level: heading.level,
        },
        NodeValue::BlockQuote => SourceNode::Blockquote,
        NodeValue::CodeBlock(code_block) => SourceNode::CodeBlock {
            fenced: code_block.fenced,
            language: if code_block.fenced {
                code_block.info.split_whitespace().next()
            } else {
                None
            },
            lines: code_block.literal.split_inclusive('\n').collect(),
        },
        NodeValue::HtmlBlock(_) => SourceNode::HtmlBlock,
        NodeValue::List(list) => SourceNode::List {
            ordered: list.list_type == ListType::Ordered,
            start: list.start,
        },
        NodeValue::Item(_) | NodeValue::TaskItem(_) => SourceNode::ListItem,
        NodeValue::Paragraph => SourceNode::Paragraph,
        NodeValue::ThematicBreak => SourceNode::ThematicBreak,

        NodeValue::Text(text) => SourceNode::Text {
            segment: text,
            hard_line_break: false,
        },
        NodeValue::SoftBreak => SourceNode::Text {
            segment: " ",
            hard_line_break: false,
        },
        NodeValue::LineBreak => SourceNode::Text {
            segment: "",
            hard_line_break: true,
        },
        NodeValue::Code(_) => SourceNode::CodeSpan,
        NodeValue::HtmlInline(_) => SourceNode::RawHtml,
        NodeValue::Emph => SourceNode::Emphasis { level: 1 },
        NodeValue::Strong => SourceNode::Emphasis { level: 2 },
        NodeValue::Strikethrough => SourceNode::Strikethrough,
        NodeValue::Superscript => SourceNode::Superscript,
        NodeValue::Link(link) => match autolink_label(node, link) {
            Some(label) => SourceNode::AutoLink {
                url: &link.url,
                label,
            },
            None => SourceNode::Link {
                destination: &link.url,
                title: &link.title,
            },
        },
        NodeValue::Image(link) => SourceNode::Image {
            destination: &link.url,
            title: &link.title,
            alt: collect_text(node),
        },

        NodeValue::Table(_) => SourceNode::Table,
        NodeValue::TableRow(true) => SourceNode::TableHeader,
        NodeValue::TableRow(false) => SourceNode::TableRow,
        NodeValue::TableCell => SourceNode::TableCell {
            header: node
                .parent()
                .is_some_and(|row| matches!(row.data.borrow().value, NodeValue::TableRow(true))),
        },

        _ => return None,
    };
    Some(source)
}

/// If the link is an autolink, return its label as a slice of its URL.
///
/// Comrak represents `<https://x>` and bare GFM autolinks as ordinary links
/// whose only child is the text of the URL, possibly without the scheme that
/// was added (`mailto:` for addresses, `http://` for `www.` links). An
/// explicit `[https://x](https://x)` has the same shape, so the source span
/// decides: an autolink spans at most its label plus the angle brackets.
fn autolink_label<'a, 'u>(
    node: &'a Node<'a, RefCell<Ast>>,
    link: &'u NodeLink,
) -> Option<&'u str> {
    if !link.title.is_empty() {
        return None;
    }
    let child = node.first_child()?;
    if child.next_sibling().is_some() {
        return None;
    }
    let ast = child.data.borrow();
    let NodeValue::Text(text) = &ast.value else {
        return None;
    };
    let text: &str = text;
    let url = link.url.as_str();
    let matches = url == text
        || url.strip_prefix("mailto:") == Some(text)
        || url.strip_prefix("http://") == Some(text);
    if !matches || text.is_empty() || spans_explicit_link(node, text.len()) {
        return None;
    }
    Some(&url[url.len() - text.len()..])
}

fn spans_explicit_link<'a>(node: &'a Node<'a, RefCell<Ast>>, label_len: usize) -> bool {
    let sourcepos = node.data.borrow().sourcepos;
    if sourcepos.start.line != sourcepos.end.line {
        return true;
    }
    let span = (sourcepos.end.column + 1).saturating_sub(sourcepos.start.column);
    span > label_len + 2
}

/// The plain text of all descendants, used as image alt text.
fn collect_text<'a>(node: &'a Node<'a, RefCell<Ast>>) -> String {
    let mut text = String::new();
    for descendant in node.descendants().skip(1) {
        match &descendant.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}
