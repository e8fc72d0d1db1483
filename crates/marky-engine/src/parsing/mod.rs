//! # Parsing
//!
//! Text goes through two tokenizer stages. The block stage splits lines into
//! headings, list items, quotes, fences and text blocks. The tree builder then
//! groups, promotes and recurses: block-containing tokens are reparsed as
//! blocks, phrasing tokens go through the inline stage.
//!
//! ## Modules
//!
//! - [`schema`]: the `Schema` trait, patterns and the registry
//! - [`tokenizer`]: the leftmost-match scanner shared by both stages
//! - [`blocks`]: built-in block schemas and container grouping
//! - [`inline`]: built-in inline schemas
//! - [`text`]: backslash escape handling for literal text

pub mod blocks;
pub mod inline;
pub mod schema;
pub mod text;
pub mod tokenizer;
mod tree;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use crate::error::{RenderError, SchemaError};
use crate::models::{Node, Token};
use crate::render::Renderer;
use schema::{Registry, Schema, Stage};
use tokenizer::Tokenizer;
use tree::TreeBuilder;

/// Parser options.
#[derive(Clone, Default)]
pub struct Options {
    /// Turn bare `http(s)://` URLs into links.
    pub auto_link: bool,
    /// Caller schemas merged over the defaults, in order. A known id replaces
    /// the built-in schema in its slot.
    pub schemas: Vec<(String, Arc<dyn Schema>)>,
}

impl Options {
    pub fn auto_link(mut self, enabled: bool) -> Self {
        self.auto_link = enabled;
        self
    }

    pub fn schema(mut self, id: impl Into<String>, schema: impl Schema + 'static) -> Self {
        let schema: Arc<dyn Schema> = Arc::new(schema);
        self.schemas.push((id.into(), schema));
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("auto_link", &self.auto_link)
            .field(
                "schemas",
                &self.schemas.iter().map(|(id, _)| id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A parser with its schemas compiled. Cheap to share between threads.
pub struct Marky {
    registry: Registry,
    blocks: Tokenizer,
    inlines: Tokenizer,
}

impl Marky {
    /// Compiles the default schemas plus `options.schemas`. Fails when a
    /// schema pattern does not compile or lacks its capture key.
    pub fn new(options: Options) -> Result<Self, SchemaError> {
        let mut registry = Registry::with_defaults(options.auto_link);
        for (id, schema) in options.schemas {
            registry.merge(id, schema);
        }
        let blocks = Tokenizer::build(&registry, Stage::Block)?;
        let inlines = Tokenizer::build(&registry, Stage::Inline)?;
        Ok(Self {
            registry,
            blocks,
            inlines,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parses `text` into a node tree. Absent or empty input gives no nodes.
    pub fn parse<'a>(&self, text: impl Into<Option<&'a str>>) -> Vec<Node> {
        let Some(text) = text.into().filter(|text| !text.is_empty()) else {
            return Vec::new();
        };
        self.builder().block_nodes(&Token::root(text))
    }

    /// Parses `text` and hands the tree to `renderer`.
    pub fn render<'a, R>(
        &self,
        text: impl Into<Option<&'a str>>,
        renderer: &R,
    ) -> Result<String, RenderError>
    where
        R: Renderer + ?Sized,
    {
        renderer.render(&self.parse(text))
    }

    fn builder(&self) -> TreeBuilder<'_> {
        TreeBuilder {
            registry: &self.registry,
            blocks: &self.blocks,
            inlines: &self.inlines,
        }
    }
}

impl fmt::Debug for Marky {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marky")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`Marky::new`].
pub fn create(options: Options) -> Result<Marky, SchemaError> {
    Marky::new(options)
}
