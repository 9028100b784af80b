/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attrs::{MediaLayout, MediaType, TableLayout};
use crate::mark::Mark;

/*
 * A tagged representation of ADF nodes.
 *
 * Block nodes own an ordered list of children; whether those children are
 * blocks or inlines is fixed per variant (a paragraph only holds inlines,
 * a bulletList only holds listItems, and so on). Inline nodes are leaves.
 */

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Paragraph(Paragraph),
    Heading(Heading),
    Blockquote(Blockquote),
    CodeBlock(CodeBlock),
    Rule,
    BulletList(BulletList),
    OrderedList(OrderedList),
    ListItem(ListItem),
    Table(Table),
    TableRow(TableRow),
    TableHeader(TableCell),
    TableCell(TableCell),
    MediaSingle(MediaSingle),
    Media(Media),
    Caption(Caption),

    Text(Text),
    HardBreak,
}

pub type Nodes = Vec<Node>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: u8,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Blockquote {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulletList {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedList {
    /// Number of the first item. Only serialized when it is not 1.
    pub order: usize,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub is_number_column_enabled: bool,
    pub layout: TableLayout,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub content: Nodes,
}

/// Shared by `tableHeader` and `tableCell`; the variant carries the distinction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaSingle {
    pub layout: MediaLayout,
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub media_type: MediaType,
    pub id: Option<String>,
    pub collection: Option<String>,
    pub url: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Caption {
    pub content: Nodes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub marks: Vec<Mark>,
}

impl Node {
    pub fn paragraph() -> Self {
        Node::Paragraph(Paragraph::default())
    }

    /// Create a heading node with the specified level (1-6).
    pub fn heading(level: u8) -> Self {
        Node::Heading(Heading {
            level,
            content: Vec::new(),
        })
    }

    pub fn blockquote() -> Self {
        Node::Blockquote(Blockquote::default())
    }

    /// Create a code block. An empty language is treated as no language.
    pub fn code_block(language: impl Into<String>) -> Self {
        let language = language.into();
        Node::CodeBlock(CodeBlock {
            language: (!language.is_empty()).then_some(language),
            content: Vec::new(),
        })
    }

    pub fn rule() -> Self {
        Node::Rule
    }

    pub fn bullet_list() -> Self {
        Node::BulletList(BulletList::default())
    }

    pub fn ordered_list(start: usize) -> Self {
        Node::OrderedList(OrderedList {
            order: start,
            content: Vec::new(),
        })
    }

    pub fn list_item() -> Self {
        Node::ListItem(ListItem::default())
    }

    pub fn table(layout: TableLayout) -> Self {
        Node::Table(Table {
            is_number_column_enabled: false,
            layout,
            content: Vec::new(),
        })
    }

    pub fn table_row() -> Self {
        Node::TableRow(TableRow::default())
    }

    pub fn table_header() -> Self {
        Node::TableHeader(TableCell::default())
    }

    pub fn table_cell() -> Self {
        Node::TableCell(TableCell::default())
    }

    pub fn media_single(layout: MediaLayout) -> Self {
        Node::MediaSingle(MediaSingle {
            layout,
            content: Vec::new(),
        })
    }

    /// Create an `external` media node pointing at `url`.
    pub fn external_media(url: impl Into<String>, alt: impl Into<String>) -> Self {
        let alt = alt.into();
        Node::Media(Media {
            media_type: MediaType::External,
            id: None,
            collection: None,
            url: Some(url.into()),
            alt: (!alt.is_empty()).then_some(alt),
        })
    }

    /// Create a `file` media node referencing an uploaded attachment.
    pub fn file_media(id: impl Into<String>, collection: impl Into<String>) -> Self {
        Node::Media(Media {
            media_type: MediaType::File,
            id: Some(id.into()),
            collection: Some(collection.into()),
            url: None,
            alt: None,
        })
    }

    /// Create a caption holding `text` as a single unmarked text node.
    pub fn caption(text: impl Into<String>) -> Self {
        Node::Caption(Caption {
            content: vec![Node::text(text)],
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(Text {
            text: text.into(),
            marks: Vec::new(),
        })
    }

    pub fn text_with_marks(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Node::Text(Text {
            text: text.into(),
            marks,
        })
    }

    pub fn hard_break() -> Self {
        Node::HardBreak
    }

    /// The ADF `type` discriminator of this node.
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Paragraph(_) => "paragraph",
            Node::Heading(_) => "heading",
            Node::Blockquote(_) => "blockquote",
            Node::CodeBlock(_) => "codeBlock",
            Node::Rule => "rule",
            Node::BulletList(_) => "bulletList",
            Node::OrderedList(_) => "orderedList",
            Node::ListItem(_) => "listItem",
            Node::Table(_) => "table",
            Node::TableRow(_) => "tableRow",
            Node::TableHeader(_) => "tableHeader",
            Node::TableCell(_) => "tableCell",
            Node::MediaSingle(_) => "mediaSingle",
            Node::Media(_) => "media",
            Node::Caption(_) => "caption",
            Node::Text(_) => "text",
            Node::HardBreak => "hardBreak",
        }
    }

    /// Whether this node's children are inline nodes.
    pub fn holds_inlines(&self) -> bool {
        matches!(
            self,
            Node::Paragraph(_) | Node::Heading(_) | Node::CodeBlock(_) | Node::Caption(_)
        )
    }

    /// The children of this node; empty for leaves.
    pub fn content(&self) -> &[Node] {
        match self {
            Node::Paragraph(n) => &n.content,
            Node::Heading(n) => &n.content,
            Node::Blockquote(n) => &n.content,
            Node::CodeBlock(n) => &n.content,
            Node::BulletList(n) => &n.content,
            Node::OrderedList(n) => &n.content,
            Node::ListItem(n) => &n.content,
            Node::Table(n) => &n.content,
            Node::TableRow(n) => &n.content,
            Node::TableHeader(n) | Node::TableCell(n) => &n.content,
            Node::MediaSingle(n) => &n.content,
            Node::Caption(n) => &n.content,
            Node::Rule | Node::Media(_) | Node::Text(_) | Node::HardBreak => &[],
        }
    }

    fn content_mut(&mut self) -> Option<&mut Nodes> {
        match self {
            Node::Paragraph(n) => Some(&mut n.content),
            Node::Heading(n) => Some(&mut n.content),
            Node::Blockquote(n) => Some(&mut n.content),
            Node::CodeBlock(n) => Some(&mut n.content),
            Node::BulletList(n) => Some(&mut n.content),
            Node::OrderedList(n) => Some(&mut n.content),
            Node::ListItem(n) => Some(&mut n.content),
            Node::Table(n) => Some(&mut n.content),
            Node::TableRow(n) => Some(&mut n.content),
            Node::TableHeader(n) | Node::TableCell(n) => Some(&mut n.content),
            Node::MediaSingle(n) => Some(&mut n.content),
            Node::Caption(n) => Some(&mut n.content),
            Node::Rule | Node::Media(_) | Node::Text(_) | Node::HardBreak => None,
        }
    }

    /// Append a child node to this node's content.
    ///
    /// # Panics
    /// Panics if this node is a leaf (rule, media, text, hardBreak).
    pub fn append_child(&mut self, child: Node) {
        let node_type = self.node_type();
        match self.content_mut() {
            Some(content) => content.push(child),
            None => panic!("{} nodes cannot hold children", node_type),
        }
    }

    /// The most recently appended child, if any.
    pub fn last_child_mut(&mut self) -> Option<&mut Node> {
        self.content_mut()?.last_mut()
    }

    /// Extend the literal of a text node. Other nodes are left unchanged.
    pub fn push_text(&mut self, more: &str) {
        if let Node::Text(text) = self {
            text.text.push_str(more);
        }
    }

    /// The marks of a text node; empty for every other node.
    pub fn marks(&self) -> &[Mark] {
        match self {
            Node::Text(text) => &text.marks,
            _ => &[],
        }
    }

    /// The literal text of a text node.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.text),
            _ => None,
        }
    }

    /// A container of the same kind and attributes, without children.
    ///
    /// Returns `None` for leaves.
    pub fn empty_like(&self) -> Option<Node> {
        let node = match self {
            Node::Paragraph(_) => Node::paragraph(),
            Node::Heading(h) => Node::heading(h.level),
            Node::Blockquote(_) => Node::blockquote(),
            Node::CodeBlock(c) => Node::CodeBlock(CodeBlock {
                language: c.language.clone(),
                content: Vec::new(),
            }),
            Node::BulletList(_) => Node::bullet_list(),
            Node::OrderedList(l) => Node::ordered_list(l.order),
            Node::ListItem(_) => Node::list_item(),
            Node::Table(t) => Node::Table(Table {
                is_number_column_enabled: t.is_number_column_enabled,
                layout: t.layout,
                content: Vec::new(),
            }),
            Node::TableRow(_) => Node::table_row(),
            Node::TableHeader(_) => Node::table_header(),
            Node::TableCell(_) => Node::table_cell(),
            Node::MediaSingle(m) => Node::media_single(m.layout),
            Node::Caption(_) => Node::Caption(Caption::default()),
            Node::Rule | Node::Media(_) | Node::Text(_) | Node::HardBreak => return None,
        };
        Some(node)
    }
}
