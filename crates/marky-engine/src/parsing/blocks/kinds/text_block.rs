use regex::Captures;

use crate::error::PatternError;
use crate::models::{Contains, Token, TokenKind};
use crate::parsing::schema::{Pattern, Schema, Stage, pattern::group};

/// Any other non-blank line. Consecutive lines join into one block.
pub struct TextBlock;

impl TextBlock {
    const PATTERN: &'static str = r"(?m)^[ \t]*(?P<text>\S.*?)$";
}

impl Schema for TextBlock {
    fn stage(&self) -> Stage {
        Stage::Block
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "text").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        Token::new(TokenKind::TextBlock)
            .with_text(group(captures, "text").trim())
            .containing(Contains::Phrasing)
    }

    fn has_append(&self) -> bool {
        true
    }

    fn append(&self, open: &mut Token, next: &Token, _full: &str) -> bool {
        if next.kind != TokenKind::TextBlock {
            return false;
        }
        open.text.push('\n');
        open.text.push_str(&next.text);
        true
    }
}

/// A run of blank lines. `lines` is the newline count minus one, so a single
/// empty line between two blocks has `lines == 1`.
pub struct WhiteSpace;

impl WhiteSpace {
    const PATTERN: &'static str = r"(?:\A|\n)(?P<blank>[ \t\n]*)(?:\n|\z)";
}

impl Schema for WhiteSpace {
    fn stage(&self) -> Stage {
        Stage::Block
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "blank").map(Some)
    }

    fn token(&self, _captures: &Captures<'_>, full: &str) -> Token {
        let newlines = full.matches('\n').count();
        Token::new(TokenKind::WhiteSpace {
            lines: newlines.saturating_sub(1),
        })
    }
}
