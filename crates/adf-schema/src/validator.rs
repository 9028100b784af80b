// ADF validation engine

use crate::error::{
    InstancePath, ValidationError, ValidationErrorKind, ValidationErrors, ValidationResult,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

type Object = Map<String, Value>;

/// Blocks allowed at the top level of a document.
const DOC_CONTENT: &[&str] = &[
    "paragraph",
    "heading",
    "blockquote",
    "codeBlock",
    "rule",
    "bulletList",
    "orderedList",
    "table",
    "mediaSingle",
];

const BLOCKQUOTE_CONTENT: &[&str] = &[
    "paragraph",
    "bulletList",
    "orderedList",
    "codeBlock",
    "mediaSingle",
];

const LIST_ITEM_CONTENT: &[&str] = &[
    "paragraph",
    "bulletList",
    "orderedList",
    "codeBlock",
    "mediaSingle",
];

const TABLE_CELL_CONTENT: &[&str] = &[
    "paragraph",
    "heading",
    "blockquote",
    "bulletList",
    "orderedList",
    "codeBlock",
    "rule",
    "mediaSingle",
];

const INLINE_CONTENT: &[&str] = &["text", "hardBreak"];

const KNOWN_NODES: &[&str] = &[
    "paragraph",
    "heading",
    "blockquote",
    "codeBlock",
    "rule",
    "bulletList",
    "orderedList",
    "listItem",
    "table",
    "tableRow",
    "tableHeader",
    "tableCell",
    "mediaSingle",
    "media",
    "caption",
    "text",
    "hardBreak",
];

const TABLE_LAYOUTS: &[&str] = &[
    "default",
    "center",
    "wide",
    "full-width",
    "align-start",
    "align-end",
];

const MEDIA_LAYOUTS: &[&str] = &[
    "center",
    "wide",
    "full-width",
    "wrap-left",
    "wrap-right",
    "align-start",
    "align-end",
];

const MEDIA_TYPES: &[&str] = &["file", "link", "external"];

const MARK_TYPES: &[&str] = &[
    "strong",
    "em",
    "code",
    "strike",
    "underline",
    "link",
    "subsup",
    "textColor",
];

/// Marks that may accompany `code` on the same text node.
const CODE_COMPATIBLE_MARKS: &[&str] = &["code", "link"];

static COLOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("color pattern is a valid regex"));

/// Validates a parsed ADF document
pub fn validate_value(value: &Value) -> ValidationResult<()> {
    let mut context = ValidationContext::new();
    validate_document(value, &mut context);
    context.into_result()
}

/// Validation context tracks state during validation
#[derive(Debug, Default)]
pub struct ValidationContext {
    /// Current instance path (e.g., ["content", 0, "attrs"])
    instance_path: InstancePath,
    /// Collected validation errors
    errors: Vec<ValidationError>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error at the current path
    pub fn add_error(&mut self, kind: ValidationErrorKind) {
        self.errors
            .push(ValidationError::new(kind, self.instance_path.clone()));
    }

    /// Execute a function with a new key segment
    pub fn with_key<F, R>(&mut self, key: &str, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.instance_path.push_key(key);
        let result = f(self);
        self.instance_path.pop();
        result
    }

    /// Execute a function with a new index segment
    pub fn with_index<F, R>(&mut self, index: usize, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.instance_path.push_index(index);
        let result = f(self);
        self.instance_path.pop();
        result
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_result(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(self.errors))
        }
    }
}

/// Validate the `{version, type, content}` envelope and everything below it.
pub fn validate_document(value: &Value, ctx: &mut ValidationContext) {
    let Some(doc) = expect_object(value, ctx) else {
        return;
    };

    match doc.get("version") {
        Some(version) => ctx.with_key("version", |ctx| {
            check_integer(version, Some(1), Some(1), ctx);
        }),
        None => missing(ctx, "version"),
    }

    match doc.get("type") {
        Some(doc_type) => ctx.with_key("type", |ctx| check_enum(doc_type, &["doc"], ctx)),
        None => missing(ctx, "type"),
    }

    match doc.get("content") {
        Some(content) => ctx.with_key("content", |ctx| {
            validate_children(content, "doc", DOC_CONTENT, 0, ctx);
        }),
        None => missing(ctx, "content"),
    }
}

fn validate_children(
    content: &Value,
    parent: &str,
    allowed: &[&str],
    min_items: usize,
    ctx: &mut ValidationContext,
) {
    let Some(items) = expect_array(content, ctx) else {
        return;
    };
    if items.len() < min_items {
        ctx.add_error(ValidationErrorKind::ArrayLengthInvalid {
            length: items.len(),
            min_items: Some(min_items),
            max_items: None,
        });
    }
    for (index, child) in items.iter().enumerate() {
        ctx.with_index(index, |ctx| validate_node(child, parent, allowed, ctx));
    }
}

fn validate_node(value: &Value, parent: &str, allowed: &[&str], ctx: &mut ValidationContext) {
    let Some(node) = expect_object(value, ctx) else {
        return;
    };

    let node_type = match node.get("type") {
        Some(Value::String(node_type)) => node_type.as_str(),
        Some(other) => {
            ctx.with_key("type", |ctx| type_mismatch(ctx, "string", other));
            return;
        }
        None => {
            missing(ctx, "type");
            return;
        }
    };

    if !KNOWN_NODES.contains(&node_type) {
        ctx.with_key("type", |ctx| {
            ctx.add_error(ValidationErrorKind::UnknownNodeType {
                node_type: node_type.to_string(),
            })
        });
        return;
    }
    if !allowed.contains(&node_type) {
        ctx.add_error(ValidationErrorKind::NodeNotAllowed {
            node_type: node_type.to_string(),
            parent: parent.to_string(),
        });
    }

    let attrs = match node.get("attrs") {
        Some(Value::Object(attrs)) => Some(attrs),
        Some(other) => {
            ctx.with_key("attrs", |ctx| type_mismatch(ctx, "object", other));
            None
        }
        None => None,
    };

    match node_type {
        "paragraph" | "caption" => validate_content(node, node_type, INLINE_CONTENT, 0, ctx),
        "heading" => {
            if let Some(level) = require_attr(attrs, "level", ctx) {
                with_attr(ctx, "level", |ctx| check_integer(level, Some(1), Some(6), ctx));
            }
            validate_content(node, node_type, INLINE_CONTENT, 0, ctx);
        }
        "blockquote" => validate_content(node, node_type, BLOCKQUOTE_CONTENT, 1, ctx),
        "codeBlock" => {
            if let Some(language) = attr(attrs, "language") {
                with_attr(ctx, "language", |ctx| check_string(language, ctx));
            }
            validate_content(node, node_type, &["text"], 0, ctx);
        }
        "bulletList" => validate_content(node, node_type, &["listItem"], 1, ctx),
        "orderedList" => {
            if let Some(order) = attr(attrs, "order") {
                with_attr(ctx, "order", |ctx| check_integer(order, Some(0), None, ctx));
            }
            validate_content(node, node_type, &["listItem"], 1, ctx);
        }
        "listItem" => validate_content(node, node_type, LIST_ITEM_CONTENT, 1, ctx),
        "table" => {
            if let Some(enabled) = attr(attrs, "isNumberColumnEnabled") {
                if !enabled.is_boolean() {
                    with_attr(ctx, "isNumberColumnEnabled", |ctx| {
                        type_mismatch(ctx, "boolean", enabled)
                    });
                }
            }
            if let Some(layout) = attr(attrs, "layout") {
                with_attr(ctx, "layout", |ctx| check_enum(layout, TABLE_LAYOUTS, ctx));
            }
            validate_content(node, node_type, &["tableRow"], 1, ctx);
        }
        "tableRow" => validate_content(node, node_type, &["tableCell", "tableHeader"], 1, ctx),
        "tableCell" | "tableHeader" => {
            validate_content(node, node_type, TABLE_CELL_CONTENT, 1, ctx)
        }
        "mediaSingle" => validate_media_single(node, attrs, ctx),
        "media" => validate_media(attrs, ctx),
        "text" => validate_text(node, parent, ctx),
        // rule, hardBreak
        _ => forbid_content(node, ctx),
    }

    if node_type != "text" {
        if let Some(marks) = node.get("marks") {
            if marks.as_array().is_none_or(|marks| !marks.is_empty()) {
                ctx.with_key("marks", |ctx| {
                    ctx.add_error(ValidationErrorKind::MarksNotAllowed {
                        node_type: node_type.to_string(),
                    })
                });
            }
        }
    }
}

fn validate_content(
    node: &Object,
    node_type: &str,
    allowed: &[&str],
    min_items: usize,
    ctx: &mut ValidationContext,
) {
    match node.get("content") {
        Some(content) => ctx.with_key("content", |ctx| {
            validate_children(content, node_type, allowed, min_items, ctx)
        }),
        None if min_items > 0 => missing(ctx, "content"),
        None => {}
    }
}

fn forbid_content(node: &Object, ctx: &mut ValidationContext) {
    if let Some(content) = node.get("content") {
        ctx.with_key("content", |ctx| {
            if let Some(items) = expect_array(content, ctx) {
                if !items.is_empty() {
                    ctx.add_error(ValidationErrorKind::ArrayLengthInvalid {
                        length: items.len(),
                        min_items: None,
                        max_items: Some(0),
                    });
                }
            }
        });
    }
}

/// `mediaSingle` holds exactly one `media`, optionally followed by a
/// `caption`.
fn validate_media_single(node: &Object, attrs: Option<&Object>, ctx: &mut ValidationContext) {
    if let Some(layout) = attr(attrs, "layout") {
        with_attr(ctx, "layout", |ctx| check_enum(layout, MEDIA_LAYOUTS, ctx));
    }

    let Some(content) = node.get("content") else {
        missing(ctx, "content");
        return;
    };
    ctx.with_key("content", |ctx| {
        let Some(items) = expect_array(content, ctx) else {
            return;
        };
        if items.is_empty() || items.len() > 2 {
            ctx.add_error(ValidationErrorKind::ArrayLengthInvalid {
                length: items.len(),
                min_items: Some(1),
                max_items: Some(2),
            });
        }
        for (index, child) in items.iter().enumerate() {
            let allowed: &[&str] = if index == 0 { &["media"] } else { &["caption"] };
            ctx.with_index(index, |ctx| validate_node(child, "mediaSingle", allowed, ctx));
        }
    });
}

fn validate_media(attrs: Option<&Object>, ctx: &mut ValidationContext) {
    let Some(media_type) = require_attr(attrs, "type", ctx) else {
        return;
    };
    with_attr(ctx, "type", |ctx| check_enum(media_type, MEDIA_TYPES, ctx));

    let required: &[&str] = match media_type.as_str() {
        Some("external") => &["url"],
        Some("file") | Some("link") => &["id", "collection"],
        _ => &[],
    };
    for key in required {
        if let Some(value) = require_attr(attrs, key, ctx) {
            with_attr(ctx, key, |ctx| check_string(value, ctx));
        }
    }
    if let Some(alt) = attr(attrs, "alt") {
        with_attr(ctx, "alt", |ctx| check_string(alt, ctx));
    }
}

fn validate_text(node: &Object, parent: &str, ctx: &mut ValidationContext) {
    match node.get("text") {
        Some(Value::String(text)) => {
            if text.is_empty() {
                ctx.with_key("text", |ctx| {
                    ctx.add_error(ValidationErrorKind::StringLengthInvalid {
                        length: 0,
                        min_length: 1,
                    })
                });
            }
        }
        Some(other) => ctx.with_key("text", |ctx| type_mismatch(ctx, "string", other)),
        None => missing(ctx, "text"),
    }

    let Some(marks) = node.get("marks") else {
        return;
    };
    ctx.with_key("marks", |ctx| {
        if parent == "codeBlock" && marks.as_array().is_none_or(|marks| !marks.is_empty()) {
            ctx.add_error(ValidationErrorKind::MarksNotAllowed {
                node_type: "text".to_string(),
            });
            return;
        }
        validate_marks(marks, ctx);
    });
}

fn validate_marks(marks: &Value, ctx: &mut ValidationContext) {
    let Some(items) = expect_array(marks, ctx) else {
        return;
    };

    let mut seen = Vec::new();
    for (index, mark) in items.iter().enumerate() {
        if let Some(mark_type) = ctx.with_index(index, |ctx| validate_mark(mark, ctx)) {
            seen.push((index, mark_type));
        }
    }

    if seen.iter().any(|(_, mark_type)| *mark_type == "code") {
        for (index, mark_type) in &seen {
            if !CODE_COMPATIBLE_MARKS.contains(mark_type) {
                ctx.with_index(*index, |ctx| {
                    ctx.add_error(ValidationErrorKind::IncompatibleMarks {
                        mark: "code".to_string(),
                        other: (*mark_type).to_string(),
                    })
                });
            }
        }
    }
}

/// Returns the mark's type when it is a known one.
fn validate_mark<'v>(value: &'v Value, ctx: &mut ValidationContext) -> Option<&'v str> {
    let mark = expect_object(value, ctx)?;
    let mark_type = match mark.get("type") {
        Some(Value::String(mark_type)) => mark_type.as_str(),
        Some(other) => {
            ctx.with_key("type", |ctx| type_mismatch(ctx, "string", other));
            return None;
        }
        None => {
            missing(ctx, "type");
            return None;
        }
    };
    if !MARK_TYPES.contains(&mark_type) {
        ctx.with_key("type", |ctx| {
            ctx.add_error(ValidationErrorKind::UnknownMarkType {
                mark_type: mark_type.to_string(),
            })
        });
        return None;
    }

    let attrs = match mark.get("attrs") {
        Some(Value::Object(attrs)) => Some(attrs),
        Some(other) => {
            ctx.with_key("attrs", |ctx| type_mismatch(ctx, "object", other));
            return Some(mark_type);
        }
        None => None,
    };

    match mark_type {
        "link" => {
            if let Some(href) = require_attr(attrs, "href", ctx) {
                with_attr(ctx, "href", |ctx| check_string(href, ctx));
            }
            if let Some(title) = attr(attrs, "title") {
                with_attr(ctx, "title", |ctx| check_string(title, ctx));
            }
        }
        "subsup" => {
            if let Some(kind) = require_attr(attrs, "type", ctx) {
                with_attr(ctx, "type", |ctx| check_enum(kind, &["sub", "sup"], ctx));
            }
        }
        "textColor" => {
            if let Some(color) = require_attr(attrs, "color", ctx) {
                with_attr(ctx, "color", |ctx| check_pattern(color, &COLOR_PATTERN, ctx));
            }
        }
        _ => {}
    }
    Some(mark_type)
}

fn attr<'v>(attrs: Option<&'v Object>, key: &str) -> Option<&'v Value> {
    attrs.and_then(|attrs| attrs.get(key))
}

/// Look up a required attribute, reporting it (and a missing `attrs`
/// object) when absent.
fn require_attr<'v>(
    attrs: Option<&'v Object>,
    key: &str,
    ctx: &mut ValidationContext,
) -> Option<&'v Value> {
    let Some(attrs) = attrs else {
        missing(ctx, "attrs");
        return None;
    };
    let value = attrs.get(key);
    if value.is_none() {
        ctx.with_key("attrs", |ctx| missing(ctx, key));
    }
    value
}

fn with_attr<F>(ctx: &mut ValidationContext, key: &str, f: F)
where
    F: FnOnce(&mut ValidationContext),
{
    ctx.with_key("attrs", |ctx| ctx.with_key(key, f));
}

fn expect_object<'v>(value: &'v Value, ctx: &mut ValidationContext) -> Option<&'v Object> {
    let object = value.as_object();
    if object.is_none() {
        type_mismatch(ctx, "object", value);
    }
    object
}

fn expect_array<'v>(value: &'v Value, ctx: &mut ValidationContext) -> Option<&'v Vec<Value>> {
    let array = value.as_array();
    if array.is_none() {
        type_mismatch(ctx, "array", value);
    }
    array
}

fn check_string(value: &Value, ctx: &mut ValidationContext) {
    if !value.is_string() {
        type_mismatch(ctx, "string", value);
    }
}

fn check_integer(value: &Value, minimum: Option<i64>, maximum: Option<i64>, ctx: &mut ValidationContext) {
    let Some(number) = value.as_i64() else {
        type_mismatch(ctx, "integer", value);
        return;
    };
    let below = minimum.is_some_and(|min| number < min);
    let above = maximum.is_some_and(|max| number > max);
    if below || above {
        ctx.add_error(ValidationErrorKind::NumberOutOfRange {
            value: number as f64,
            minimum: minimum.map(|min| min as f64),
            maximum: maximum.map(|max| max as f64),
        });
    }
}

fn check_enum(value: &Value, allowed: &[&str], ctx: &mut ValidationContext) {
    match value.as_str() {
        Some(s) if allowed.contains(&s) => {}
        Some(s) => ctx.add_error(ValidationErrorKind::InvalidEnumValue {
            value: s.to_string(),
            allowed: allowed.iter().map(|a| a.to_string()).collect(),
        }),
        None => type_mismatch(ctx, "string", value),
    }
}

fn check_pattern(value: &Value, pattern: &Regex, ctx: &mut ValidationContext) {
    match value.as_str() {
        Some(s) if pattern.is_match(s) => {}
        Some(s) => ctx.add_error(ValidationErrorKind::StringPatternMismatch {
            value: s.to_string(),
            pattern: pattern.as_str().to_string(),
        }),
        None => type_mismatch(ctx, "string", value),
    }
}

fn missing(ctx: &mut ValidationContext, property: &str) {
    ctx.add_error(ValidationErrorKind::MissingRequiredProperty {
        property: property.to_string(),
    });
}

fn type_mismatch(ctx: &mut ValidationContext, expected: &str, got: &Value) {
    ctx.add_error(ValidationErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: json_type(got).to_string(),
    });
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn errors(value: Value) -> Vec<ValidationError> {
        match validate_value(&value) {
            Ok(()) => vec![],
            Err(errors) => errors.into_iter().collect(),
        }
    }

    fn doc(content: Value) -> Value {
        json!({"version": 1, "type": "doc", "content": content})
    }

    #[test]
    fn test_minimal_document() {
        assert!(errors(doc(json!([]))).is_empty());
    }

    #[test]
    fn test_envelope_errors() {
        let errs = errors(json!({"type": "doc", "content": []}));
        assert_eq!(errs.len(), 1);
        assert_eq!(
            errs[0].kind,
            ValidationErrorKind::MissingRequiredProperty {
                property: "version".to_string()
            }
        );

        let errs = errors(json!({"version": 2, "type": "invalid", "content": []}));
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].path.to_string(), "version");
        assert_eq!(errs[1].path.to_string(), "type");
        assert!(matches!(
            errs[1].kind,
            ValidationErrorKind::InvalidEnumValue { .. }
        ));
    }

    #[test]
    fn test_not_an_object() {
        let errs = errors(json!([1, 2]));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].error_code(), "ADF-1-11");
    }

    #[test]
    fn test_heading_level_range() {
        let errs = errors(doc(json!([{"type": "heading", "attrs": {"level": 7}}])));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path.to_string(), "content.0.attrs.level");
        match &errs[0].kind {
            ValidationErrorKind::NumberOutOfRange { value, .. } => assert_eq!(*value, 7.0),
            other => panic!("Expected NumberOutOfRange, got {:?}", other),
        }

        let errs = errors(doc(json!([{"type": "heading"}])));
        assert_eq!(
            errs[0].kind,
            ValidationErrorKind::MissingRequiredProperty {
                property: "attrs".to_string()
            }
        );
    }

    #[test]
    fn test_node_placement() {
        let errs = errors(doc(json!([{"type": "text", "text": "loose"}])));
        assert_eq!(errs.len(), 1);
        assert_eq!(
            errs[0].kind,
            ValidationErrorKind::NodeNotAllowed {
                node_type: "text".to_string(),
                parent: "doc".to_string()
            }
        );

        let errs = errors(doc(json!([{
            "type": "blockquote",
            "content": [{"type": "heading", "attrs": {"level": 1}}]
        }])));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path.to_string(), "content.0.content.0");
    }

    #[test]
    fn test_unknown_node_type() {
        let errs = errors(doc(json!([{"type": "panel", "content": []}])));
        assert_eq!(
            errs[0].kind,
            ValidationErrorKind::UnknownNodeType {
                node_type: "panel".to_string()
            }
        );
    }

    #[test]
    fn test_min_items() {
        let errs = errors(doc(json!([{"type": "bulletList", "content": []}])));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].error_code(), "ADF-1-13");

        let errs = errors(doc(json!([{"type": "blockquote"}])));
        assert_eq!(
            errs[0].kind,
            ValidationErrorKind::MissingRequiredProperty {
                property: "content".to_string()
            }
        );
    }

    #[test]
    fn test_empty_text_rejected() {
        let errs = errors(doc(json!([{
            "type": "paragraph",
            "content": [{"type": "text", "text": ""}]
        }])));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path.to_string(), "content.0.content.0.text");
    }

    #[test]
    fn test_marks() {
        let text = |marks: Value| {
            doc(json!([{
                "type": "paragraph",
                "content": [{"type": "text", "text": "x", "marks": marks}]
            }]))
        };

        assert!(errors(text(json!([
            {"type": "link", "attrs": {"href": "https://example.com"}},
            {"type": "code"}
        ])))
        .is_empty());

        let errs = errors(text(json!([{"type": "strong"}, {"type": "code"}])));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path.to_string(), "content.0.content.0.marks.0");
        assert_eq!(
            errs[0].kind,
            ValidationErrorKind::IncompatibleMarks {
                mark: "code".to_string(),
                other: "strong".to_string()
            }
        );

        let errs = errors(text(json!([{"type": "link"}])));
        assert_eq!(
            errs[0].kind,
            ValidationErrorKind::MissingRequiredProperty {
                property: "attrs".to_string()
            }
        );

        let errs = errors(text(json!([{"type": "subsup", "attrs": {"type": "super"}}])));
        assert!(matches!(
            errs[0].kind,
            ValidationErrorKind::InvalidEnumValue { .. }
        ));

        let errs = errors(text(json!([{"type": "textColor", "attrs": {"color": "red"}}])));
        assert_eq!(errs[0].error_code(), "ADF-1-14");

        let errs = errors(text(json!([{"type": "blink"}])));
        assert_eq!(errs[0].error_code(), "ADF-2-3");
    }

    #[test]
    fn test_code_block_text_has_no_marks() {
        let errs = errors(doc(json!([{
            "type": "codeBlock",
            "content": [{"type": "text", "text": "x", "marks": [{"type": "strong"}]}]
        }])));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].error_code(), "ADF-2-4");
    }

    #[test]
    fn test_media_single() {
        let valid = doc(json!([{
            "type": "mediaSingle",
            "attrs": {"layout": "center"},
            "content": [
                {"type": "media", "attrs": {"type": "external", "url": "https://x/i.png"}},
                {"type": "caption", "content": [{"type": "text", "text": "Caption"}]}
            ]
        }]));
        assert!(errors(valid).is_empty());

        let errs = errors(doc(json!([{
            "type": "mediaSingle",
            "attrs": {"layout": "sideways"},
            "content": [{"type": "media", "attrs": {"type": "external"}}]
        }])));
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].path.to_string(), "content.0.attrs.layout");
        assert_eq!(errs[1].path.to_string(), "content.0.content.0.attrs");

        let errs = errors(doc(json!([{
            "type": "mediaSingle",
            "content": [{"type": "caption", "content": []}]
        }])));
        assert_eq!(
            errs[0].kind,
            ValidationErrorKind::NodeNotAllowed {
                node_type: "caption".to_string(),
                parent: "mediaSingle".to_string()
            }
        );
    }

    #[test]
    fn test_file_media_requires_id_and_collection() {
        let errs = errors(doc(json!([{
            "type": "mediaSingle",
            "content": [{"type": "media", "attrs": {"type": "file", "id": "abc"}}]
        }])));
        assert_eq!(errs.len(), 1);
        assert_eq!(
            errs[0].kind,
            ValidationErrorKind::MissingRequiredProperty {
                property: "collection".to_string()
            }
        );
    }

    #[test]
    fn test_table() {
        let valid = doc(json!([{
            "type": "table",
            "attrs": {"isNumberColumnEnabled": false, "layout": "default"},
            "content": [{
                "type": "tableRow",
                "content": [{
                    "type": "tableHeader",
                    "attrs": {},
                    "content": [{"type": "paragraph", "content": [{"type": "text", "text": "H"}]}]
                }]
            }]
        }]));
        assert!(errors(valid).is_empty());

        let errs = errors(doc(json!([{
            "type": "table",
            "attrs": {"isNumberColumnEnabled": "no", "layout": "huge"},
            "content": [{"type": "tableRow", "content": [{"type": "tableCell", "content": []}]}]
        }])));
        assert_eq!(errs.len(), 3);
    }

    #[test]
    fn test_marks_on_block_node() {
        let errs = errors(doc(json!([{"type": "rule", "marks": [{"type": "strong"}]}])));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path.to_string(), "content.0.marks");
    }

    #[test]
    fn test_collects_all_errors() {
        let errs = errors(doc(json!([
            {"type": "heading", "attrs": {"level": 0}},
            {"type": "paragraph", "content": [{"type": "text"}]},
            {"type": "rule", "content": [{"type": "text", "text": "x"}]}
        ])));
        let paths: Vec<String> = errs.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(
            paths,
            vec!["content.0.attrs.level", "content.1.content.0", "content.2.content"]
        );
    }
}
