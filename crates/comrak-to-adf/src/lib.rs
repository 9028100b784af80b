/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert comrak's CommonMark AST to Atlassian Document Format.
 *
 * The conversion is split in two. `walk` owns the traversal of comrak's
 * arena and reports every node as a pair of enter/exit events; the engine
 * in `engine` consumes those events and builds an `adf_types::Document`.
 * `Renderer` ties the two together for a parsed document, and `Converter`
 * adds the markdown parsing step.
 */

pub mod config;
pub mod engine;
pub mod error;
pub mod renderer;
pub mod source;
pub mod walk;

pub use config::{Config, ImageHandler, ImageRequest};
pub use engine::Conversion;
pub use error::{ConfigError, RenderError, Result};
pub use renderer::Renderer;
pub use source::{SourceNode, Visitor, WalkStatus};
pub use walk::walk;

use adf_types::Document;
use comrak::{Arena, Options, parse_document};

/// Markdown to ADF in one step.
///
/// A converter pairs a [`Renderer`] with a set of parser options. Like the
/// renderer it is immutable and can be reused.
pub struct Converter {
    renderer: Renderer,
    options: Options<'static>,
}

impl Converter {
    /// A converter for plain CommonMark.
    pub fn new(config: Config) -> Self {
        Self {
            renderer: Renderer::new(config),
            options: Options::default(),
        }
    }

    /// A converter with the GitHub Flavored Markdown extensions that have an
    /// ADF counterpart: tables, strikethrough, autolinks, task lists and
    /// superscript.
    pub fn with_gfm(config: Config) -> Self {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.superscript = true;
        Self {
            renderer: Renderer::new(config),
            options,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn to_document(&self, markdown: &str) -> Result<Document> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &self.options);
        self.renderer.render_document(root)
    }

    /// Convert markdown to compact ADF JSON.
    pub fn convert(&self, markdown: &str) -> Result<String> {
        Ok(self.to_document(markdown)?.to_json()?)
    }

    /// Convert markdown to indented ADF JSON.
    pub fn convert_pretty(&self, markdown: &str) -> Result<String> {
        Ok(self.to_document(markdown)?.to_json_pretty()?)
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("renderer", &self.renderer)
            .field("table", &self.options.extension.table)
            .finish_non_exhaustive()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Convert CommonMark to ADF JSON with the default configuration.
pub fn convert(markdown: &str) -> Result<String> {
    Converter::default().convert(markdown)
}

/// Convert GitHub Flavored Markdown to ADF JSON with the default
/// configuration.
pub fn convert_with_gfm(markdown: &str) -> Result<String> {
    Converter::with_gfm(Config::default()).convert(markdown)
}
