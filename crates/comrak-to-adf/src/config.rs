/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Renderer configuration.
 */

use crate::error::ConfigError;
use adf_types::{MediaLayout, Node, TableLayout};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// The source data of an image, as handed to a custom [`ImageHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest<'a> {
    pub destination: &'a str,
    /// Alt text; falls back to the destination when the image has none.
    pub alt: &'a str,
    /// Image title; empty when the source has no title.
    pub title: &'a str,
}

/// Builds the node that replaces an image.
///
/// The returned node is appended to the current block scope as is.
pub type ImageHandler = Arc<dyn Fn(&ImageRequest<'_>) -> Node + Send + Sync>;

/// Options consumed by the renderer.
///
/// A configuration is resolved once when a renderer is built and never
/// changes for the lifetime of that renderer.
#[derive(Clone, Default)]
pub struct Config {
    /// Custom image rendering. Takes precedence over both built-in modes.
    pub image_handler: Option<ImageHandler>,

    /// Layout of every table.
    pub table_layout: TableLayout,

    /// Render images as `mediaSingle` nodes holding external media instead
    /// of link-marked text.
    pub external_media: bool,

    /// Layout of `mediaSingle` nodes in external media mode.
    pub image_layout: MediaLayout,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ImageRequest<'_>) -> Node + Send + Sync + 'static,
    {
        self.image_handler = Some(Arc::new(handler));
        self
    }

    pub fn with_table_layout(mut self, layout: TableLayout) -> Self {
        self.table_layout = layout;
        self
    }

    pub fn with_external_media(mut self, enabled: bool) -> Self {
        self.external_media = enabled;
        self
    }

    pub fn with_image_layout(mut self, layout: MediaLayout) -> Self {
        self.image_layout = layout;
        self
    }

    /// Parse a configuration from TOML.
    ///
    /// Every key is optional:
    ///
    /// ```toml
    /// table-layout = "wide"
    /// external-media = true
    /// image-layout = "full-width"
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::default().merge_toml_str(source)
    }

    /// Override the options present in a TOML document, keeping the rest.
    pub fn merge_toml_str(mut self, source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        if let Some(layout) = file.table_layout {
            self.table_layout = layout.parse()?;
        }
        if let Some(enabled) = file.external_media {
            self.external_media = enabled;
        }
        if let Some(layout) = file.image_layout {
            self.image_layout = layout.parse()?;
        }
        Ok(self)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "image_handler",
                &self.image_handler.as_ref().map(|_| "<fn>"),
            )
            .field("table_layout", &self.table_layout)
            .field("external_media", &self.external_media)
            .field("image_layout", &self.image_layout)
            .finish()
    }
}

/// On-disk form of [`Config`]. Layout names are kept as strings so that
/// unknown names report the accepted values.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    table_layout: Option<String>,
    external_media: Option<bool>,
    image_layout: Option<String>,
}
