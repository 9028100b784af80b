// Error types for ADF validation

use std::fmt;
use thiserror::Error;

/// Result type for validation operations.
///
/// The error side holds every problem found, in document order.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Structured validation error kinds
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ValidationErrorKind {
    /// The input is not JSON
    InvalidJson { message: String },

    /// Type mismatch
    TypeMismatch { expected: String, got: String },

    /// Missing required property
    MissingRequiredProperty { property: String },

    /// Value not in enum
    InvalidEnumValue { value: String, allowed: Vec<String> },

    /// Number out of range
    NumberOutOfRange {
        value: f64,
        minimum: Option<f64>,
        maximum: Option<f64>,
    },

    /// String length invalid
    StringLengthInvalid { length: usize, min_length: usize },

    /// String doesn't match pattern
    StringPatternMismatch { value: String, pattern: String },

    /// Array length invalid
    ArrayLengthInvalid {
        length: usize,
        min_items: Option<usize>,
        max_items: Option<usize>,
    },

    /// Node type not defined by the format
    UnknownNodeType { node_type: String },

    /// Node type defined but not allowed in its parent
    NodeNotAllowed { node_type: String, parent: String },

    /// Mark type not defined by the format
    UnknownMarkType { mark_type: String },

    /// Marks on a node that cannot carry them
    MarksNotAllowed { node_type: String },

    /// Two marks that cannot appear on the same text node
    IncompatibleMarks { mark: String, other: String },
}

impl ValidationErrorKind {
    /// Get the error code for this error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationErrorKind::InvalidJson { .. } => "ADF-1-1",
            ValidationErrorKind::MissingRequiredProperty { .. } => "ADF-1-10",
            ValidationErrorKind::TypeMismatch { .. } => "ADF-1-11",
            ValidationErrorKind::InvalidEnumValue { .. } => "ADF-1-12",
            ValidationErrorKind::ArrayLengthInvalid { .. } => "ADF-1-13",
            ValidationErrorKind::StringPatternMismatch { .. } => "ADF-1-14",
            ValidationErrorKind::NumberOutOfRange { .. } => "ADF-1-15",
            ValidationErrorKind::StringLengthInvalid { .. } => "ADF-1-20",
            ValidationErrorKind::UnknownNodeType { .. } => "ADF-2-1",
            ValidationErrorKind::NodeNotAllowed { .. } => "ADF-2-2",
            ValidationErrorKind::UnknownMarkType { .. } => "ADF-2-3",
            ValidationErrorKind::MarksNotAllowed { .. } => "ADF-2-4",
            ValidationErrorKind::IncompatibleMarks { .. } => "ADF-2-5",
        }
    }

    /// Format a human-readable message from this error kind
    pub fn message(&self) -> String {
        match self {
            ValidationErrorKind::InvalidJson { message } => {
                format!("Invalid JSON: {}", message)
            }
            ValidationErrorKind::TypeMismatch { expected, got } => {
                format!("Expected {}, got {}", expected, got)
            }
            ValidationErrorKind::MissingRequiredProperty { property } => {
                format!("Missing required property '{}'", property)
            }
            ValidationErrorKind::InvalidEnumValue { value, allowed } => {
                format!(
                    "Value must be one of: {}, got '{}'",
                    allowed.join(", "),
                    value
                )
            }
            ValidationErrorKind::NumberOutOfRange {
                value,
                minimum,
                maximum,
            } => match (minimum, maximum) {
                (Some(min), Some(max)) => {
                    format!("Number {} is not between {} and {}", value, min, max)
                }
                (Some(min), None) => format!("Number {} is less than minimum {}", value, min),
                (None, Some(max)) => format!("Number {} is greater than maximum {}", value, max),
                (None, None) => format!("Number {} is out of range", value),
            },
            ValidationErrorKind::StringLengthInvalid { length, min_length } => {
                format!("String length {} is less than minimum {}", length, min_length)
            }
            ValidationErrorKind::StringPatternMismatch { value, pattern } => {
                format!("String '{}' does not match pattern '{}'", value, pattern)
            }
            ValidationErrorKind::ArrayLengthInvalid {
                length,
                min_items,
                max_items,
            } => {
                if let Some(min) = min_items.filter(|min| length < min) {
                    format!("Array length {} is less than minimum {}", length, min)
                } else if let Some(max) = max_items {
                    format!("Array length {} is greater than maximum {}", length, max)
                } else {
                    format!("Array length {} is invalid", length)
                }
            }
            ValidationErrorKind::UnknownNodeType { node_type } => {
                format!("Unknown node type '{}'", node_type)
            }
            ValidationErrorKind::NodeNotAllowed { node_type, parent } => {
                format!("Node '{}' is not allowed inside '{}'", node_type, parent)
            }
            ValidationErrorKind::UnknownMarkType { mark_type } => {
                format!("Unknown mark type '{}'", mark_type)
            }
            ValidationErrorKind::MarksNotAllowed { node_type } => {
                format!("Node '{}' cannot carry marks", node_type)
            }
            ValidationErrorKind::IncompatibleMarks { mark, other } => {
                format!("Mark '{}' cannot be combined with '{}'", mark, other)
            }
        }
    }
}

/// A single validation failure and where it occurred
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationError {
    /// The structured error kind
    pub kind: ValidationErrorKind,
    /// Path to the offending value (e.g., content.0.content.1.marks.0)
    pub path: InstancePath,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Validation error at {}: {}",
            self.error_code(),
            self.path,
            self.kind.message()
        )
    }
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, path: InstancePath) -> Self {
        Self { kind, path }
    }

    /// Get the human-readable message for this error
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }
}

/// Every error found in one document
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "no validation errors"),
            [only] => write!(f, "{}", only),
            [first, rest @ ..] => {
                write!(f, "{} (and {} more)", first, rest.len())
            }
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Instance path (e.g., ["content", 0, "attrs", "level"])
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Push a key segment onto the path
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    /// Push an index segment onto the path
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(root)")
        } else {
            for (i, segment) in self.segments.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{}", segment)?;
            }
            Ok(())
        }
    }
}

/// A segment in an instance path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}
