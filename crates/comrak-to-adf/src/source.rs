/*
 * source.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The event interface between a source-AST walker and the conversion engine.
 *
 * A walker owns the traversal of a parsed markdown tree. For every node it
 * calls `Visitor::enter`, walks the node's children unless the visitor asked
 * to skip them, then calls `Visitor::exit`. The node itself is described by a
 * `SourceNode`, which carries the payload the engine needs and nothing else.
 */

use crate::error::Result;

/// Describes one source-AST node, independent of the parser that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceNode<'a> {
    Document,

    // Blocks
    Heading {
        level: u8,
    },
    Blockquote,
    /// A fenced or indented code block. `lines` include their line endings.
    CodeBlock {
        fenced: bool,
        language: Option<&'a str>,
        lines: Vec<&'a str>,
    },
    HtmlBlock,
    List {
        ordered: bool,
        start: usize,
    },
    ListItem,
    Paragraph,
    /// A paragraph without paragraph spacing, as found in tight lists.
    TextBlock,
    ThematicBreak,

    // Inlines
    AutoLink {
        url: &'a str,
        label: &'a str,
    },
    CodeSpan,
    /// Level 1 is emphasis, level 2 is strong emphasis.
    Emphasis {
        level: u8,
    },
    Image {
        destination: &'a str,
        title: &'a str,
        /// Concatenated text of the image description.
        alt: String,
    },
    Link {
        destination: &'a str,
        title: &'a str,
    },
    RawHtml,
    Text {
        segment: &'a str,
        hard_line_break: bool,
    },
    /// A literal already resolved by the parser (code span content, entities).
    Literal {
        value: &'a str,
    },

    // Extensions
    Table,
    TableHeader,
    TableRow,
    TableCell {
        /// Whether the cell's parent is the table's header row.
        header: bool,
    },
    Strikethrough,
    Superscript,
    TaskCheckBox {
        checked: bool,
    },
}

impl SourceNode<'_> {
    /// A short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceNode::Document => "Document",
            SourceNode::Heading { .. } => "Heading",
            SourceNode::Blockquote => "Blockquote",
            SourceNode::CodeBlock { .. } => "CodeBlock",
            SourceNode::HtmlBlock => "HtmlBlock",
            SourceNode::List { .. } => "List",
            SourceNode::ListItem => "ListItem",
            SourceNode::Paragraph => "Paragraph",
            SourceNode::TextBlock => "TextBlock",
            SourceNode::ThematicBreak => "ThematicBreak",
            SourceNode::AutoLink { .. } => "AutoLink",
            SourceNode::CodeSpan => "CodeSpan",
            SourceNode::Emphasis { .. } => "Emphasis",
            SourceNode::Image { .. } => "Image",
            SourceNode::Link { .. } => "Link",
            SourceNode::RawHtml => "RawHtml",
            SourceNode::Text { .. } => "Text",
            SourceNode::Literal { .. } => "Literal",
            SourceNode::Table => "Table",
            SourceNode::TableHeader => "TableHeader",
            SourceNode::TableRow => "TableRow",
            SourceNode::TableCell { .. } => "TableCell",
            SourceNode::Strikethrough => "Strikethrough",
            SourceNode::Superscript => "Superscript",
            SourceNode::TaskCheckBox { .. } => "TaskCheckBox",
        }
    }
}

/// What the walker should do after a node has been entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    Continue,
    /// Do not visit the node's children; its exit is still reported.
    SkipChildren,
}

/// Receives enter/exit notifications in document order.
pub trait Visitor {
    fn enter(&mut self, node: &SourceNode<'_>) -> Result<WalkStatus>;

    fn exit(&mut self, node: &SourceNode<'_>) -> Result<()>;
}
