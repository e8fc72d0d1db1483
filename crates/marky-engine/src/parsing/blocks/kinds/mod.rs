//! Block schema types.
//!
//! Each kind owns its pattern, its token factory and, where the construct
//! spans several lines, its append rule.

pub mod block_quote;
pub mod code_block;
pub mod heading;
pub mod list;
pub mod text_block;

pub use block_quote::BlockQuote;
pub use code_block::CodeBlock;
pub use heading::{Heading, Hrule, SetextHeading};
pub use list::{LIST, List, ListItem};
pub use text_block::{TextBlock, WhiteSpace};
