/*
 * snapshots.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Full-document snapshots of the pretty-printed output.
 */

use comrak_to_adf::{Config, Converter};

fn pretty(converter: &Converter, markdown: &str) -> String {
    converter.convert_pretty(markdown).unwrap()
}

#[test]
fn snapshot_strong() {
    insta::assert_snapshot!(pretty(&Converter::default(), "Hello **world**"), @r###"
    {
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
    }
    "###);
}

#[test]
fn snapshot_gfm_strikethrough() {
    let converter = Converter::with_gfm(Config::default());
    insta::assert_snapshot!(pretty(&converter, "Hello ~~world~~"), @r###"
    {
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
                  "type": "strike"
                }
              ],
              "text": "world"
            }
          ]
        }
      ]
    }
    "###);
}

#[test]
fn snapshot_external_media_in_blockquote() {
    let converter = Converter::new(Config::new().with_external_media(true));
    insta::assert_snapshot!(
        pretty(&converter, "> Quote with ![image](https://example.com/q.png)"),
        @r###"
    {
      "version": 1,
      "type": "doc",
      "content": [
        {
          "type": "blockquote",
          "content": [
            {
              "type": "paragraph",
              "content": [
                {
                  "type": "text",
                  "text": "Quote with "
                }
              ]
            },
            {
              "type": "mediaSingle",
              "attrs": {
                "layout": "center"
              },
              "content": [
                {
                  "type": "media",
                  "attrs": {
                    "type": "external",
                    "url": "https://example.com/q.png",
                    "alt": "image"
                  }
                }
              ]
            }
          ]
        }
      ]
    }
    "###
    );
}

#[test]
fn snapshot_code_block() {
    insta::assert_snapshot!(
        pretty(&Converter::default(), "```rust\nfn main() {}\n```"),
        @r###"
    {
      "version": 1,
      "type": "doc",
      "content": [
        {
          "type": "codeBlock",
          "attrs": {
            "language": "rust"
          },
          "content": [
            {
              "type": "text",
              "text": "fn main() {}\n"
            }
          ]
        }
      ]
    }
    "###
    );
}
