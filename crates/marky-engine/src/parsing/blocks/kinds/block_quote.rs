use regex::Captures;

use crate::error::PatternError;
use crate::models::{Contains, NodeKind, Token, TokenKind};
use crate::parsing::schema::{Pattern, Schema, Stage, pattern::group};

/// Block quote line: `> text`, `>> nested` or a bare `>`.
///
/// Only the first marker is consumed. Deeper markers are put back in front
/// of the text, so `>> x` and `> > x` both reparse to a nested quote.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    const PATTERN: &'static str = r"(?m)^[ \t]*(?P<level>>+) ?(?P<text>(?:\S.*?)?)$";
}

impl Schema for BlockQuote {
    fn stage(&self) -> Stage {
        Stage::Block
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "text").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        let markers = group(captures, "level");
        let level = markers.chars().count();
        let text = group(captures, "text");
        let text = if level > 1 {
            format!("{} {text}", &markers[Self::PREFIX.len_utf8()..])
        } else {
            text.to_string()
        };
        Token::node(NodeKind::BlockQuote { level })
            .with_text(text)
            .containing(Contains::Blocks)
            .with_paragraph_text()
    }

    fn has_append(&self) -> bool {
        true
    }

    fn append(&self, open: &mut Token, next: &Token, full: &str) -> bool {
        let addition = match &next.kind {
            TokenKind::Node(NodeKind::BlockQuote { .. }) | TokenKind::TextBlock => {
                next.text.as_str()
            }
            TokenKind::Node(
                NodeKind::ListItem { .. } | NodeKind::Heading { .. } | NodeKind::Hrule,
            ) => full,
            _ => return false,
        };
        open.text.push('\n');
        open.text.push_str(addition);
        true
    }
}
