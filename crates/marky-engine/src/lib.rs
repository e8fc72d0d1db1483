pub mod error;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use error::{PatternError, RenderError, SchemaError};
pub use models::{Contains, Node, NodeKind, Token, TokenKind};
pub use parsing::schema::{CustomSchema, Membership, Schema, Stage};
pub use parsing::{Marky, Options, create};
pub use render::{
    Element, HtmlOptions, Overrides, PlainOptions, Renderer, html, messaging, plain,
};
