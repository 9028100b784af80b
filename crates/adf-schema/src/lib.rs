/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Structural validation of Atlassian Document Format (ADF) JSON.
 *
 * The validator checks the document envelope, which node types may appear
 * inside which parents, required and enumerated attributes, and the marks
 * allowed on text. It covers the node and mark vocabulary produced by the
 * markdown converter; other ADF node types are reported as unknown.
 *
 * Validation never stops at the first problem: every error is collected
 * together with the path of the offending value.
 */

pub mod error;
pub mod validator;

pub use error::{
    InstancePath, PathSegment, ValidationError, ValidationErrorKind, ValidationErrors,
    ValidationResult,
};
pub use validator::{ValidationContext, validate_document, validate_value};

/// Validate ADF JSON bytes.
pub fn validate(data: &[u8]) -> ValidationResult<()> {
    match serde_json::from_slice::<serde_json::Value>(data) {
        Ok(value) => validate_value(&value),
        Err(err) => Err(ValidationErrors::new(vec![ValidationError::new(
            ValidationErrorKind::InvalidJson {
                message: err.to_string(),
            },
            InstancePath::new(),
        )])),
    }
}

/// Validate an ADF JSON string.
pub fn validate_str(json: &str) -> ValidationResult<()> {
    validate(json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_paragraph_document() {
        let doc = br#"{
            "version": 1,
            "type": "doc",
            "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "Hello world"}]}
            ]
        }"#;
        assert!(validate(doc).is_ok());
    }

    #[test]
    fn test_invalid_json() {
        let errors = validate_str("{not json").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].error_code(), "ADF-1-1");
    }
}
