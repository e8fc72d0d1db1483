use regex::Captures;

use crate::error::PatternError;
use crate::models::{Contains, NodeKind, Token};
use crate::parsing::schema::{Pattern, Schema, Stage, pattern::group};

/// Fenced code block delimited by triple backticks, with an optional syntax
/// word after the opening fence. The closing fence must end its line.
pub struct CodeBlock;

impl CodeBlock {
    pub const FENCE: &'static str = "```";

    const PATTERN: &'static str = r"(?sm)^[ \t]*```(?P<syntax>\w*?)\n(?P<code>.+?)```$";
}

impl Schema for CodeBlock {
    fn stage(&self) -> Stage {
        Stage::Block
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "code").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        let syntax = Some(group(captures, "syntax"))
            .filter(|syntax| !syntax.is_empty())
            .map(str::to_string);
        Token::node(NodeKind::CodeBlock { syntax })
            .with_text(group(captures, "code"))
            .containing(Contains::Text)
    }
}
