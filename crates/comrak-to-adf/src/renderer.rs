/*
 * renderer.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * A reusable renderer from comrak ASTs to ADF.
 */

use crate::config::Config;
use crate::engine::Conversion;
use crate::error::Result;
use crate::walk::walk;
use adf_types::Document;
use comrak::arena_tree::Node;
use comrak::nodes::Ast;
use std::cell::RefCell;
use std::io::Write;

/// Renders comrak documents to ADF.
///
/// The renderer only holds its configuration. Each call builds a fresh
/// [`Conversion`], so one renderer can be shared between threads and
/// reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: Config,
}

impl Renderer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert a parsed document into an ADF tree.
    pub fn render_document<'a>(&self, root: &'a Node<'a, RefCell<Ast>>) -> Result<Document> {
        let mut conversion = Conversion::new(&self.config);
        walk(root, &mut conversion)?;
        conversion.finish()
    }

    /// Convert a parsed document into compact ADF JSON.
    pub fn render<'a>(&self, root: &'a Node<'a, RefCell<Ast>>) -> Result<String> {
        Ok(self.render_document(root)?.to_json()?)
    }

    /// Convert a parsed document and write the JSON to `writer`.
    ///
    /// Nothing is written if the conversion fails.
    pub fn render_to_writer<'a, W: Write>(
        &self,
        root: &'a Node<'a, RefCell<Ast>>,
        writer: W,
        pretty: bool,
    ) -> Result<()> {
        let document = self.render_document(root)?;
        document.to_writer(writer, pretty)?;
        Ok(())
    }
}
