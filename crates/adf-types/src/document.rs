/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::node::{Node, Nodes};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::io;

/// The ADF format version written into every document.
pub const ADF_VERSION: u32 = 1;

/// The root of an ADF document.
///
/// Every ADF document has a version (always 1), a type of "doc", and a
/// content array containing the top-level block nodes. Only the content is
/// stored; the envelope is written during serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub content: Nodes,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.content.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to JSON indented with two spaces.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize directly into a writer.
    pub fn to_writer<W: io::Write>(&self, writer: W, pretty: bool) -> serde_json::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        }
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Document", 3)?;
        state.serialize_field("version", &ADF_VERSION)?;
        state.serialize_field("type", "doc")?;
        state.serialize_field("content", &self.content)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::Mark;

    #[test]
    fn test_empty_document_keeps_content_array() {
        let doc = Document::new();
        assert_eq!(
            doc.to_json().unwrap(),
            r#"{"version":1,"type":"doc","content":[]}"#
        );
    }

    #[test]
    fn test_pretty_output_matches_reference_layout() {
        let mut para = Node::paragraph();
        para.append_child(Node::text("Hello "));
        para.append_child(Node::text_with_marks("world", vec![Mark::strong()]));
        let mut doc = Document::new();
        doc.push(para);

        let expected = r#"{
  "version": 1,
  "type": "doc",
  "content": [
    {
      "type": "paragraph",
      "content": [
        {
          "type": "text",
          "text": "Hello "
        },
        {
          "type": "text",
          "marks": [
            {
              "type": "strong"
            }
          ],
          "text": "world"
        }
      ]
    }
  ]
}"#;
        assert_eq!(doc.to_json_pretty().unwrap(), expected);
    }

    #[test]
    fn test_to_writer() {
        let mut doc = Document::new();
        doc.push(Node::rule());
        let mut buf = Vec::new();
        doc.to_writer(&mut buf, false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"{"version":1,"type":"doc","content":[{"type":"rule"}]}"#
        );
    }
}
