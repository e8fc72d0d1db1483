//! # Inline Parsing
//!
//! Inline schemas run over phrasing text (paragraphs, headings, emphasis
//! content). There is no grouping step: every token maps straight to a node,
//! and the text between matches becomes literal text with backslash escapes
//! resolved.
//!
//! ## Precedence
//!
//! The leftmost match wins. At equal positions the earlier schema wins, in
//! this order: bold, italic, strike-through, auto link, angle link,
//! link/image, code, line break. Code spans therefore only shield their
//! content when they start first: `` `<http://x>` `` stays code.

pub mod kinds;

use std::sync::Arc;

use crate::parsing::blocks::entry;
use crate::parsing::schema::Schema;

pub use kinds::{AutoLink, Bold, CodeSpan, Italic, LineBreak, Link, Object, StrikeThrough};

/// Id of the bare URL schema, which is left out unless auto-linking is on.
pub const AUTO_LINK: &str = "auto_link";

/// Built-in inline schemas in precedence order.
pub fn default_schemas() -> Vec<(&'static str, Arc<dyn Schema>)> {
    vec![
        entry("bold", Bold),
        entry("italic", Italic),
        entry("strike_through", StrikeThrough),
        entry(AUTO_LINK, AutoLink),
        entry("link", Link),
        entry("object", Object),
        entry("code", CodeSpan),
        entry("line_break", LineBreak),
    ]
}
