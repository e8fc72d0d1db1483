use regex::Captures;

use crate::error::PatternError;
use crate::models::{Contains, NodeKind, Token};
use crate::parsing::schema::{
    Pattern, Schema, Stage,
    pattern::{first_group, group},
};

/// Escape character that disables an opening marker.
const ESCAPE: &str = "\\";

/// `**bold**` or `__bold__` (also `*_x*_` and `_*x_*`).
///
/// The opening and closing markers are the same two characters, the content
/// starts and ends with a non-blank character that is not an escape, and the
/// closing marker must not be followed by another `*` or `_`. The shortest
/// content wins.
pub struct Bold;

impl Bold {
    const PATTERN: &'static str = concat!(
        r"(?s)(?P<bold>",
        r"\*\*(?P<b0>[^\s\\]|\S.*?[^\s\\])\*\*",
        r"|__(?P<b1>[^\s\\]|\S.*?[^\s\\])__",
        r"|\*_(?P<b2>[^\s\\]|\S.*?[^\s\\])\*_",
        r"|_\*(?P<b3>[^\s\\]|\S.*?[^\s\\])_\*",
        r")(?P<ahead>[^*_]|\z)"
    );
    const CONTENT: [&'static str; 4] = ["b0", "b1", "b2", "b3"];
}

impl Schema for Bold {
    fn stage(&self) -> Stage {
        Stage::Inline
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Ok(Some(
            Pattern::new(Self::PATTERN, "bold")?
                .with_trailing("ahead")?
                .not_preceded_by(ESCAPE),
        ))
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        Token::node(NodeKind::Bold)
            .with_text(first_group(captures, &Self::CONTENT))
            .containing(Contains::Phrasing)
    }
}

/// `*italic*` or `_italic_`. Same rules as [`Bold`] with a single marker,
/// except that the longest content wins.
pub struct Italic;

impl Italic {
    const PATTERN: &'static str = concat!(
        r"(?s)(?P<italic>",
        r"\*(?P<i0>\S.*[^\s\\]|[^\s\\])\*",
        r"|_(?P<i1>\S.*[^\s\\]|[^\s\\])_",
        r")(?P<ahead>[^*_]|\z)"
    );
    const CONTENT: [&'static str; 2] = ["i0", "i1"];
}

impl Schema for Italic {
    fn stage(&self) -> Stage {
        Stage::Inline
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Ok(Some(
            Pattern::new(Self::PATTERN, "italic")?
                .with_trailing("ahead")?
                .not_preceded_by(ESCAPE),
        ))
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        Token::node(NodeKind::Italic)
            .with_text(first_group(captures, &Self::CONTENT))
            .containing(Contains::Phrasing)
    }
}

/// `~~strike~~`.
pub struct StrikeThrough;

impl StrikeThrough {
    const PATTERN: &'static str = r"(?s)~~(?P<strike>\S|\S.*?\S)~~";
}

impl Schema for StrikeThrough {
    fn stage(&self) -> Stage {
        Stage::Inline
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "strike").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        Token::node(NodeKind::StrikeThrough)
            .with_text(group(captures, "strike"))
            .containing(Contains::Phrasing)
    }
}
