//! Error types for comrak-to-adf

use thiserror::Error;

/// Errors that abort a conversion.
///
/// A failed conversion never returns a partial document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize ADF document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Conversion ended before the document was finished")]
    Unfinished,
}

/// Errors raised while building a renderer configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownVariant(#[from] adf_types::UnknownVariant),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
