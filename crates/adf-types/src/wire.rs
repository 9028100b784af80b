/*
 * wire.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Serialization of typed nodes and marks into ADF's generic JSON shape.
 *
 * Every node serializes as `{type, attrs?, content?, marks?, text?}` in
 * that key order. Empty attribute bags, child lists and mark lists are
 * omitted rather than written as null or empty collections.
 */

use crate::mark::Mark;
use crate::node::Node;
use hashlink::LinkedHashMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// The generic attribute bag of a serialized node or mark.
///
/// Keys keep insertion order so the output is stable across runs.
pub type Attrs = LinkedHashMap<&'static str, Value>;

#[derive(Serialize)]
struct WireNode<'a> {
    #[serde(rename = "type")]
    node_type: &'static str,
    #[serde(skip_serializing_if = "LinkedHashMap::is_empty")]
    attrs: Attrs,
    #[serde(skip_serializing_if = "is_empty_slice")]
    content: &'a [Node],
    #[serde(skip_serializing_if = "is_empty_slice")]
    marks: &'a [Mark],
    #[serde(skip_serializing_if = "is_empty_str")]
    text: &'a str,
}

#[derive(Serialize)]
struct WireMark {
    #[serde(rename = "type")]
    mark_type: &'static str,
    #[serde(skip_serializing_if = "LinkedHashMap::is_empty")]
    attrs: Attrs,
}

fn is_empty_slice<T>(items: &&[T]) -> bool {
    items.is_empty()
}

fn is_empty_str(text: &&str) -> bool {
    text.is_empty()
}

impl Node {
    /// The attribute bag this node serializes with.
    pub fn attrs(&self) -> Attrs {
        let mut attrs = Attrs::new();
        match self {
            Node::Heading(heading) => {
                attrs.insert("level", Value::from(heading.level));
            }
            Node::CodeBlock(code_block) => {
                if let Some(language) = &code_block.language {
                    attrs.insert("language", Value::from(language.as_str()));
                }
            }
            Node::OrderedList(list) if list.order != 1 => {
                attrs.insert("order", Value::from(list.order));
            }
            Node::Table(table) => {
                attrs.insert(
                    "isNumberColumnEnabled",
                    Value::from(table.is_number_column_enabled),
                );
                attrs.insert("layout", Value::from(table.layout.as_str()));
            }
            Node::MediaSingle(media_single) => {
                attrs.insert("layout", Value::from(media_single.layout.as_str()));
            }
            Node::Media(media) => {
                attrs.insert("type", Value::from(media.media_type.as_str()));
                let optional = [
                    ("id", &media.id),
                    ("collection", &media.collection),
                    ("url", &media.url),
                    ("alt", &media.alt),
                ];
                for (key, value) in optional {
                    if let Some(value) = value {
                        attrs.insert(key, Value::from(value.as_str()));
                    }
                }
            }
            _ => {}
        }
        attrs
    }
}

impl Mark {
    /// The attribute bag this mark serializes with.
    pub fn attrs(&self) -> Attrs {
        let mut attrs = Attrs::new();
        match self {
            Mark::Link(link) => {
                attrs.insert("href", Value::from(link.href.as_str()));
                if let Some(title) = &link.title {
                    attrs.insert("title", Value::from(title.as_str()));
                }
            }
            Mark::SubSup(kind) => {
                attrs.insert("type", Value::from(kind.as_str()));
            }
            Mark::TextColor(color) => {
                attrs.insert("color", Value::from(color.as_str()));
            }
            Mark::Strong | Mark::Em | Mark::Code | Mark::Strike | Mark::Underline => {}
        }
        attrs
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (marks, text) = match self {
            Node::Text(text) => (text.marks.as_slice(), text.text.as_str()),
            _ => (&[][..], ""),
        };
        WireNode {
            node_type: self.node_type(),
            attrs: self.attrs(),
            content: self.content(),
            marks,
            text,
        }
        .serialize(serializer)
    }
}

impl Serialize for Mark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireMark {
            mark_type: self.mark_type(),
            attrs: self.attrs(),
        }
        .serialize(serializer)
    }
}
