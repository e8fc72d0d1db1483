pub mod node;
pub mod token;

pub use node::{Node, NodeKind};
pub use token::{Contains, Token, TokenKind};
