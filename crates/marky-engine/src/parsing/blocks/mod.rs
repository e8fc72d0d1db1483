//! # Block Parsing
//!
//! Block schemas split text into line-oriented tokens. The tree builder then
//! folds them into nodes:
//!
//! 1. **Grouping**: tokens that name a group schema (list items) are
//!    collected into one container while the group's `is_child` accepts the
//!    next token.
//! 2. **Promotion**: a text block becomes a paragraph when its parent allows
//!    paragraph text, otherwise its inline children are spliced into the
//!    parent.
//! 3. **Recursion**: block-containing tokens reparse their text as blocks,
//!    phrasing tokens go through the inline stage.
//!
//! ## Modules
//!
//! - [`kinds`]: the built-in block schemas
//! - [`grouping`]: the pending-container state used while folding tokens

pub mod grouping;
pub mod kinds;

use std::sync::Arc;

use crate::parsing::schema::Schema;

pub use kinds::{
    BlockQuote, CodeBlock, Heading, Hrule, LIST, List, ListItem, SetextHeading, TextBlock,
    WhiteSpace,
};

/// Built-in block and group schemas in precedence order.
pub fn default_schemas() -> Vec<(&'static str, Arc<dyn Schema>)> {
    vec![
        entry("heading", Heading),
        entry("hrule", Hrule),
        entry("setext_heading", SetextHeading),
        entry(LIST, List),
        entry("list_item", ListItem),
        entry("block_quote", BlockQuote),
        entry("code_block", CodeBlock),
        entry("text_block", TextBlock),
        entry("white_space", WhiteSpace),
    ]
}

pub(crate) fn entry(
    id: &'static str,
    schema: impl Schema + 'static,
) -> (&'static str, Arc<dyn Schema>) {
    let schema: Arc<dyn Schema> = Arc::new(schema);
    (id, schema)
}
