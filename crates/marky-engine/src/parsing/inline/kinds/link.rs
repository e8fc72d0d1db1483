use regex::Captures;

use crate::error::PatternError;
use crate::models::{Contains, NodeKind, Token};
use crate::parsing::schema::{Pattern, Schema, Stage, pattern::group};

/// Characters accepted in the body of a URL.
macro_rules! url_chars {
    () => {
        r"[:@/\w.\-+%?&;=#,~$*]+"
    };
}

const MAILTO: &str = "mailto:";

/// A bare `http://` or `https://` URL. Not registered unless auto-linking is
/// enabled, and never fires inside `(...)` or `<...>`.
pub struct AutoLink;

impl AutoLink {
    const PATTERN: &'static str = concat!(r"(?P<url>https?://", url_chars!(), ")");
}

impl Schema for AutoLink {
    fn stage(&self) -> Stage {
        Stage::Inline
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Ok(Some(Pattern::new(Self::PATTERN, "url")?.not_preceded_by("(<")))
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        let url = group(captures, "url");
        Token::node(NodeKind::Link {
            url: url.to_string(),
            title: None,
        })
        .with_text(url)
        .containing(Contains::Text)
    }
}

/// `<https://example.com>` or `<someone@example.com>`. Addresses without a
/// scheme link through `mailto:`.
pub struct Link;

impl Link {
    const PATTERN: &'static str = concat!(
        r"<(?P<url>(?:https?://|[/\w.\-+%?&]+@)",
        url_chars!(),
        ")>"
    );
}

impl Schema for Link {
    fn stage(&self) -> Stage {
        Stage::Inline
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "url").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        let address = group(captures, "url");
        let url = if address.starts_with("http") {
            address.to_string()
        } else {
            format!("{MAILTO}{address}")
        };
        Token::node(NodeKind::Link { url, title: None })
            .with_text(address)
            .containing(Contains::Text)
    }
}

/// `[label](url "title")` links and `![alt](url "title")` images.
///
/// The bracketed label is optional; a bare `(url)` links with the URL as
/// its text.
pub struct Object;

impl Object {
    const PATTERN: &'static str = concat!(
        r#"(?s)(?:(?P<bang>!)?\[(?P<label>.*?)\])?"#,
        r#"\((?P<url>(?:https?://|mailto:|[/\w.\-+%?&]+@)"#,
        url_chars!(),
        r#")(?: "(?P<title>.*?)")?\)"#
    );
}

impl Schema for Object {
    fn stage(&self) -> Stage {
        Stage::Inline
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "url").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        let url = group(captures, "url").to_string();
        let title = captures.name("title").map(|m| m.as_str().to_string());
        let label = captures.name("label").map(|m| m.as_str());

        if captures.name("bang").is_some() {
            let alt = label.filter(|alt| !alt.is_empty()).map(str::to_string);
            return Token::node(NodeKind::Image { url, alt, title });
        }

        let text = label.map_or_else(|| url.clone(), str::to_string);
        Token::node(NodeKind::Link { url, title })
            .with_text(text)
            .containing(Contains::Text)
    }
}
