/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Atlassian Document Format (ADF) type definitions.
 *
 * This crate provides the data model produced by the markdown converter:
 * a document envelope, a tagged node tree and inline marks. Nodes carry
 * strongly-typed fields; they are flattened into ADF's generic
 * `{type, attrs, content, marks, text}` shape only when serialized.
 */

pub mod attrs;
pub mod document;
pub mod mark;
pub mod node;
mod wire;

// Re-export commonly used types at the crate root
pub use attrs::{MediaLayout, MediaType, SubSupType, TableLayout, UnknownVariant};
pub use document::{ADF_VERSION, Document};
pub use mark::{LinkMark, Mark};
pub use node::{
    Blockquote, BulletList, Caption, CodeBlock, Heading, ListItem, Media, MediaSingle, Node,
    Nodes, OrderedList, Paragraph, Table, TableCell, TableRow, Text,
};
pub use wire::Attrs;
