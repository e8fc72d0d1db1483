use regex::Captures;

use crate::error::PatternError;
use crate::models::{Contains, NodeKind, Token};
use crate::parsing::schema::{Pattern, Schema, Stage, pattern::group};

/// ATX heading: `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    const PATTERN: &'static str = r"(?m)^[ \t]*(?P<level>#{1,6}) (?P<text>\S.*?)$";
}

impl Schema for Heading {
    fn stage(&self) -> Stage {
        Stage::Block
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "text").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        let level = group(captures, "level").len() as u8;
        Token::node(NodeKind::Heading { level })
            .with_text(group(captures, "text"))
            .containing(Contains::Phrasing)
    }
}

/// Setext heading: a line of text underlined with `==` (level 1) or `--`
/// (level 2).
pub struct SetextHeading;

impl SetextHeading {
    pub const LEVEL_ONE: char = '=';

    const PATTERN: &'static str = r"(?m)^[ \t]*(?P<text>\S[^\n]*?)\n[ \t]*(?P<underline>[=-]{2,})$";
}

impl Schema for SetextHeading {
    fn stage(&self) -> Stage {
        Stage::Block
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "text").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        let level = if group(captures, "underline").starts_with(Self::LEVEL_ONE) {
            1
        } else {
            2
        };
        Token::node(NodeKind::Heading { level })
            .with_text(group(captures, "text"))
            .containing(Contains::Phrasing)
    }
}

/// Thematic break: a line of exactly `---` or `___`.
pub struct Hrule;

impl Hrule {
    const PATTERN: &'static str = r"(?m)^[ \t]*(?P<rule>---|___)[ \t]*$";
}

impl Schema for Hrule {
    fn stage(&self) -> Stage {
        Stage::Block
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "rule").map(Some)
    }

    fn token(&self, _captures: &Captures<'_>, _full: &str) -> Token {
        Token::node(NodeKind::Hrule)
    }
}
