/*
 * media.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Image rendering: link fallback, external media splicing and custom
 * image handlers.
 */

use adf_types::{MediaLayout, Node};
use comrak_to_adf::{Config, Converter};
use serde_json::{Value, json};

fn convert(config: Config, markdown: &str) -> Value {
    let json = Converter::with_gfm(config).convert(markdown).unwrap();
    if let Err(errors) = adf_schema::validate_str(&json) {
        panic!("Invalid ADF for {:?}: {}\n{}", markdown, errors, json);
    }
    serde_json::from_str(&json).unwrap()
}

fn external(markdown: &str) -> Value {
    convert(Config::new().with_external_media(true), markdown)
}

fn types(nodes: &Value) -> Vec<&str> {
    nodes
        .as_array()
        .unwrap()
        .iter()
        .map(|node| node["type"].as_str().unwrap())
        .collect()
}

/// Every node in the tree, depth first.
fn all_nodes(node: &Value) -> Vec<&Value> {
    let mut nodes = vec![node];
    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            nodes.extend(all_nodes(child));
        }
    }
    nodes
}

fn assert_no_empty_paragraphs(doc: &Value) {
    for node in all_nodes(doc) {
        if node["type"] == "paragraph" {
            assert!(
                node.get("content").is_some(),
                "Unexpected empty paragraph in {}",
                doc
            );
        }
    }
}

#[test]
fn test_image_between_text_is_spliced() {
    let doc = external("Before image ![img](https://example.com/image.png) after image");
    assert_eq!(
        doc["content"],
        json!([
            {"type": "paragraph", "content": [{"type": "text", "text": "Before image "}]},
            {
                "type": "mediaSingle",
                "attrs": {"layout": "center"},
                "content": [{
                    "type": "media",
                    "attrs": {"type": "external", "url": "https://example.com/image.png", "alt": "img"}
                }]
            },
            {"type": "paragraph", "content": [{"type": "text", "text": " after image"}]}
        ])
    );
}

#[test]
fn test_image_only_paragraph_has_no_empty_paragraphs() {
    let doc = external("![alt](https://example.com/a.png)");
    assert_eq!(types(&doc["content"]), vec!["mediaSingle"]);
}

#[test]
fn test_consecutive_images() {
    let doc = external("![a](https://x/1.png)![b](https://x/2.png)\n\n![c](https://x/3.png)");
    assert_eq!(
        types(&doc["content"]),
        vec!["mediaSingle", "mediaSingle", "mediaSingle"]
    );
    assert_no_empty_paragraphs(&doc);
}

#[test]
fn test_blockquote_image_has_no_trailing_paragraph() {
    let doc = external("> Quote with ![image](https://example.com/q.png)");
    assert_eq!(types(&doc["content"]), vec!["blockquote"]);
    let quote = &doc["content"][0];
    assert_eq!(types(&quote["content"]), vec!["paragraph", "mediaSingle"]);
    assert_eq!(
        quote["content"][0]["content"],
        json!([{"type": "text", "text": "Quote with "}])
    );
}

#[test]
fn test_image_in_list_item() {
    let doc = external("- ![icon](https://x/i.png) item text\n- plain\n");
    let items = &doc["content"][0]["content"];
    assert_eq!(types(&items[0]["content"]), vec!["mediaSingle", "paragraph"]);
    assert_eq!(
        items[0]["content"][1]["content"],
        json!([{"type": "text", "text": " item text"}])
    );
    assert_eq!(types(&items[1]["content"]), vec!["paragraph"]);
}

#[test]
fn test_image_in_table_cell() {
    let doc = external("| A |\n|---|\n| see ![i](https://x/i.png) |\n");
    let cell = &doc["content"][0]["content"][1]["content"][0];
    assert_eq!(cell["type"], "tableCell");
    assert_eq!(types(&cell["content"]), vec!["paragraph", "mediaSingle"]);
}

#[test]
fn test_image_only_table_cell() {
    let doc = external("| A |\n|---|\n| ![i](https://x/i.png) |\n");
    let cell = &doc["content"][0]["content"][1]["content"][0];
    assert_eq!(types(&cell["content"]), vec!["mediaSingle"]);
}

#[test]
fn test_image_in_heading() {
    let doc = external("## Logo ![logo](https://x/logo.png) and more");
    assert_eq!(
        types(&doc["content"]),
        vec!["heading", "mediaSingle", "heading"]
    );
    assert_eq!(doc["content"][0]["attrs"], json!({"level": 2}));
    assert_eq!(doc["content"][2]["attrs"], json!({"level": 2}));
    assert_eq!(
        doc["content"][2]["content"],
        json!([{"type": "text", "text": " and more"}])
    );
}

#[test]
fn test_image_inside_emphasis_keeps_marks_after_splice() {
    let doc = external("*a ![i](https://x/i.png) b*");
    assert_eq!(
        doc["content"][2]["content"],
        json!([{"type": "text", "text": " b", "marks": [{"type": "em"}]}])
    );
}

#[test]
fn test_title_becomes_caption() {
    let config = Config::new()
        .with_external_media(true)
        .with_image_layout(MediaLayout::FullWidth);
    let doc = convert(config, "![](https://x/i.png \"A caption\")");
    assert_eq!(
        doc["content"],
        json!([{
            "type": "mediaSingle",
            "attrs": {"layout": "full-width"},
            "content": [
                {"type": "media", "attrs": {"type": "external", "url": "https://x/i.png"}},
                {"type": "caption", "content": [{"type": "text", "text": "A caption"}]}
            ]
        }])
    );
}

#[test]
fn test_link_fallback() {
    let doc = convert(
        Config::new(),
        "See ![diagram](https://x/d.png \"Diagram\") and ![](https://x/e.png)",
    );
    assert_eq!(
        doc["content"][0]["content"],
        json!([
            {"type": "text", "text": "See "},
            {
                "type": "text",
                "text": "diagram",
                "marks": [{"type": "link", "attrs": {"href": "https://x/d.png", "title": "Diagram"}}]
            },
            {"type": "text", "text": " and "},
            {
                "type": "text",
                "text": "https://x/e.png",
                "marks": [{"type": "link", "attrs": {"href": "https://x/e.png"}}]
            }
        ])
    );
}

#[test]
fn test_link_fallback_ignores_enclosing_marks() {
    let doc = convert(Config::new(), "**![i](https://x/i.png)**");
    assert_eq!(
        doc["content"][0]["content"][0]["marks"],
        json!([{"type": "link", "attrs": {"href": "https://x/i.png"}}])
    );
}

#[test]
fn test_image_handler_takes_precedence() {
    let config = Config::new()
        .with_external_media(true)
        .with_image_handler(|image| {
            let mut media = Node::media_single(MediaLayout::Wide);
            media.append_child(Node::file_media(image.destination, "attachments"));
            media
        });
    let doc = Converter::with_gfm(config)
        .to_document("![x](abc-123)")
        .unwrap()
        .to_value()
        .unwrap();
    // The handler's node is placed as is, without splicing
    assert_eq!(
        doc["content"],
        json!([{
            "type": "paragraph",
            "content": [{
                "type": "mediaSingle",
                "attrs": {"layout": "wide"},
                "content": [{
                    "type": "media",
                    "attrs": {"type": "file", "id": "abc-123", "collection": "attachments"}
                }]
            }]
        }])
    );
}

#[test]
fn test_image_handler_receives_alt_and_title() {
    let config = Config::new().with_image_handler(|image| {
        Node::text(format!(
            "{} / {} / {}",
            image.destination, image.alt, image.title
        ))
    });
    let doc = convert(config, "![*alt* text](pic.png \"Title\") ![](bare.png)");
    assert_eq!(
        doc["content"][0]["content"],
        json!([
            {"type": "text", "text": "pic.png / alt text / Title"},
            {"type": "text", "text": " "},
            {"type": "text", "text": "bare.png / bare.png / "}
        ])
    );
}

#[test]
fn test_modes_are_exclusive() {
    let markdown = "a ![i](https://x/i.png) b ![j](https://x/j.png)";

    let fallback = convert(Config::new(), markdown);
    assert!(
        all_nodes(&fallback)
            .iter()
            .all(|node| node["type"] != "mediaSingle")
    );

    let media = external(markdown);
    for node in all_nodes(&media) {
        assert!(node.get("marks").is_none(), "Unexpected marks in {}", media);
    }
}
