use regex::Captures;

use crate::error::PatternError;
use crate::models::{Contains, NodeKind, Token};
use crate::parsing::schema::{Pattern, Schema, Stage, pattern::first_group};

/// Code span opened and closed by the same run of one to three backticks.
/// Its content is kept verbatim.
pub struct CodeSpan;

impl CodeSpan {
    const PATTERN: &'static str = concat!(
        r"(?s)(?P<code>",
        r"```(?P<c3>[^\s`]|[^\s`].*?[^\s`])```",
        r"|``(?P<c2>[^\s`]|[^\s`].*?[^\s`])``",
        r"|`(?P<c1>[^\s`]|[^\s`].*?[^\s`])`",
        r")"
    );
    const CONTENT: [&'static str; 3] = ["c3", "c2", "c1"];
}

impl Schema for CodeSpan {
    fn stage(&self) -> Stage {
        Stage::Inline
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "code").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        Token::node(NodeKind::Code)
            .with_text(first_group(captures, &Self::CONTENT))
            .containing(Contains::Text)
    }
}

/// Hard break: a newline, two trailing spaces and a newline, or `<br>`.
pub struct LineBreak;

impl LineBreak {
    const PATTERN: &'static str = r"(?P<break>\n|  \n|<br>)";
}

impl Schema for LineBreak {
    fn stage(&self) -> Stage {
        Stage::Inline
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "break").map(Some)
    }

    fn token(&self, _captures: &Captures<'_>, _full: &str) -> Token {
        Token::node(NodeKind::LineBreak)
    }
}
