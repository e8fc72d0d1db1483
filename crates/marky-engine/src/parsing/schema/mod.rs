//! # Schemas
//!
//! A schema describes one recognised construct: the pattern that finds it,
//! the token it produces and, optionally, how it absorbs following tokens
//! (multi-line constructs) or collects siblings into a container (lists).
//!
//! ## Modules
//!
//! - [`pattern`]: compiled patterns with trailing context and preceding-char
//!   guards
//! - [`registry`]: ordered catalog of schemas keyed by id
//! - [`custom`]: closure-backed schemas supplied by callers

pub mod custom;
pub mod pattern;
pub mod registry;

use regex::Captures;

use crate::error::PatternError;
use crate::models::{Token, TokenKind};

pub use custom::CustomSchema;
pub use pattern::{Hit, Pattern};
pub use registry::{Entry, Registry};

/// Which tokenizer a schema belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Block,
    Inline,
    /// Never matched directly; only builds containers for grouped tokens.
    Group,
}

/// Answer of a group schema when offered the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// The token does not belong; the group closes.
    Outside,
    Member,
    /// A single blank line followed by a member. The blank line is consumed
    /// and the container becomes loose.
    LooseMember,
}

/// A recognised construct.
///
/// Only [`Schema::stage`] is required. Matching schemas provide
/// [`Schema::pattern`] and [`Schema::token`]; group schemas provide
/// [`Schema::container`] and [`Schema::is_child`].
pub trait Schema: Send + Sync {
    fn stage(&self) -> Stage;

    /// Compiles the pattern for this schema. `None` for group schemas.
    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Ok(None)
    }

    /// Builds a token from an accepted match. `full` is the matched text.
    fn token(&self, _captures: &Captures<'_>, full: &str) -> Token {
        Token::new(TokenKind::TextBlock).with_text(full)
    }

    /// Whether tokens of this schema stay open for [`Schema::append`].
    fn has_append(&self) -> bool {
        false
    }

    /// Offers `next` to the still-open token `open`. Returns `true` when
    /// `next` was absorbed and must not be emitted.
    fn append(&self, _open: &mut Token, _next: &Token, _full: &str) -> bool {
        false
    }

    /// Container token for a group opened by `first`.
    fn container(&self, _first: &Token) -> Option<Token> {
        None
    }

    /// Decides whether `next` continues the group. `peek` is the token after
    /// `next`, if any.
    fn is_child(&self, _container: &Token, _next: &Token, _peek: Option<&Token>) -> Membership {
        Membership::Outside
    }
}
