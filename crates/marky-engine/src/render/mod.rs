//! # Rendering
//!
//! Renderers turn a parsed node tree into output text. Each one walks the
//! tree bottom-up: children are rendered first and the result is handed to
//! the parent as its inner text.
//!
//! Any node type can be overridden. An override sees the node, its rendered
//! inner text and its depth, and either returns replacement output or `None`
//! to fall back to the default rendering.
//!
//! ## Modules
//!
//! - [`html`]: HTML markup, optionally one block per line
//! - [`plain`]: plain text with emphasis stripped
//! - [`messaging`]: chat-app markup (`*bold*`, `_italic_`, `~strike~`)

pub mod html;
pub mod messaging;
pub mod plain;

use std::collections::HashMap;
use std::fmt;

use crate::error::RenderError;
use crate::models::{Node, NodeKind};

pub use html::{HtmlOptions, HtmlRenderer};
pub use messaging::MessagingRenderer;
pub use plain::{PlainOptions, PlainRenderer};

/// Turns a node sequence into output.
pub trait Renderer {
    fn render(&self, nodes: &[Node]) -> Result<String, RenderError>;
}

/// A node as seen by an override.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    pub kind: &'a NodeKind,
    /// Rendered children. `None` for leaf nodes.
    pub inner: Option<&'a str>,
    /// Nesting depth, 0 for top-level nodes.
    pub depth: usize,
}

impl Element<'_> {
    pub fn inner(&self) -> &str {
        self.inner.unwrap_or_default()
    }
}

pub type Override = Box<dyn Fn(&Element<'_>) -> anyhow::Result<Option<String>> + Send + Sync>;

/// Per node type rendering overrides, keyed by the node's type name.
#[derive(Default)]
pub struct Overrides {
    by_type: HashMap<String, Override>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `render` for nodes named `node_type`, e.g. `code_block`.
    pub fn on(
        mut self,
        node_type: impl Into<String>,
        render: impl Fn(&Element<'_>) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    ) -> Self {
        self.by_type.insert(node_type.into(), Box::new(render));
        self
    }

    pub(crate) fn apply(&self, element: &Element<'_>) -> Result<Option<String>, RenderError> {
        let name = element.kind.name();
        let Some(render) = self.by_type.get(name) else {
            return Ok(None);
        };
        render(element).map_err(|source| RenderError::Element {
            element: name.to_string(),
            source,
        })
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.by_type.keys().collect();
        names.sort();
        f.debug_set().entries(names).finish()
    }
}

pub fn html(options: HtmlOptions) -> HtmlRenderer {
    HtmlRenderer::new(options)
}

pub fn plain(options: PlainOptions) -> PlainRenderer {
    PlainRenderer::new(options)
}

pub fn messaging(options: PlainOptions) -> MessagingRenderer {
    MessagingRenderer::new(options)
}
