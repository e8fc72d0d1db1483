use regex::Captures;

use crate::error::PatternError;
use crate::models::{Contains, NodeKind, Token, TokenKind};
use crate::parsing::schema::{Membership, Pattern, Schema, Stage, pattern::group};

/// Id of the group schema list items are collected by.
pub const LIST: &str = "list";

/// One list item line: `- text`, `* text` or `N. text`.
///
/// Items absorb the lines that belong to them so nested content is reparsed
/// as blocks: deeper-indented items, block quotes, headings and rules keep
/// their full source line; plain text lines join by their text.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 2] = ["*", "-"];

    const PATTERN: &'static str = r"(?m)^(?P<indent>[ \t]*)(?P<bullet>[*-]|[0-9]+\.) (?P<text>\S.*?)$";

    fn is_bullet(bullet: &str) -> bool {
        Self::BULLETS.contains(&bullet)
    }
}

impl Schema for ListItem {
    fn stage(&self) -> Stage {
        Stage::Block
    }

    fn pattern(&self) -> Result<Option<Pattern>, PatternError> {
        Pattern::new(Self::PATTERN, "text").map(Some)
    }

    fn token(&self, captures: &Captures<'_>, _full: &str) -> Token {
        let bullet = group(captures, "bullet");
        let ordered = !Self::is_bullet(bullet);
        // ASCII digits, so only overflow fails to parse; such numbers saturate.
        let start = ordered.then(|| {
            bullet
                .trim_end_matches('.')
                .parse::<u64>()
                .unwrap_or(u64::MAX)
        });
        Token::node(NodeKind::ListItem {
            ordered,
            bullet: bullet.to_string(),
            indent: group(captures, "indent").chars().count(),
            start,
        })
        .with_text(group(captures, "text"))
        .containing(Contains::Blocks)
        .grouped_by(LIST)
    }

    fn has_append(&self) -> bool {
        true
    }

    fn append(&self, open: &mut Token, next: &Token, full: &str) -> bool {
        let Some(NodeKind::ListItem { indent, .. }) = open.node_kind() else {
            return false;
        };
        let indent = *indent;
        let addition = match &next.kind {
            TokenKind::Node(NodeKind::ListItem { indent: deeper, .. }) if *deeper > indent => full,
            TokenKind::Node(
                NodeKind::BlockQuote { .. } | NodeKind::Heading { .. } | NodeKind::Hrule,
            ) => full,
            TokenKind::TextBlock => next.text.as_str(),
            _ => return false,
        };
        open.text.push('\n');
        open.text.push_str(addition);
        true
    }
}

/// Collects consecutive compatible list items into a `list` container.
///
/// Items are compatible when both are ordered, or both are unordered with the
/// same bullet. A single blank line between compatible items keeps the list
/// going and makes it loose; anything else closes it.
pub struct List;

impl List {
    fn compatible(container: &Token, next: &Token) -> bool {
        match (container.node_kind(), next.node_kind()) {
            (
                Some(NodeKind::List {
                    ordered, bullet, ..
                }),
                Some(NodeKind::ListItem {
                    ordered: next_ordered,
                    bullet: next_bullet,
                    ..
                }),
            ) => ordered == next_ordered && (*ordered || bullet == next_bullet),
            _ => false,
        }
    }
}

impl Schema for List {
    fn stage(&self) -> Stage {
        Stage::Group
    }

    fn container(&self, first: &Token) -> Option<Token> {
        match first.node_kind()? {
            NodeKind::ListItem {
                ordered,
                bullet,
                start,
                ..
            } => Some(Token::node(NodeKind::List {
                ordered: *ordered,
                bullet: bullet.clone(),
                start: *start,
            })),
            _ => None,
        }
    }

    fn is_child(&self, container: &Token, next: &Token, peek: Option<&Token>) -> Membership {
        match (&next.kind, peek) {
            (TokenKind::WhiteSpace { lines: 1 }, Some(peek)) if Self::compatible(container, peek) => {
                Membership::LooseMember
            }
            _ if Self::compatible(container, next) => Membership::Member,
            _ => Membership::Outside,
        }
    }
}
