//! Inline schema types.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::{CodeSpan, LineBreak};
pub use emphasis::{Bold, Italic, StrikeThrough};
pub use link::{AutoLink, Link, Object};
