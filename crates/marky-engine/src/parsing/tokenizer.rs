use std::sync::Arc;

use super::schema::pattern::next_boundary;
use super::schema::{Hit, Pattern, Registry, Schema, Stage};
use super::text::unescape;
use crate::error::SchemaError;
use crate::models::{NodeKind, Token};

struct Matcher {
    id: String,
    schema: Arc<dyn Schema>,
    pattern: Pattern,
}

/// Scanner for one stage's schemas.
///
/// At each step the leftmost match of any schema wins, and among schemas
/// matching at the same position the one registered first wins. Each
/// schema's next match is kept until the cursor moves past it, so every
/// pattern scans the text once.
pub struct Tokenizer {
    stage: Stage,
    matchers: Vec<Matcher>,
}

impl Tokenizer {
    pub fn build(registry: &Registry, stage: Stage) -> Result<Self, SchemaError> {
        let mut matchers = Vec::new();
        for entry in registry.stage(stage) {
            let pattern = entry
                .schema
                .pattern()
                .map_err(|source| SchemaError::Pattern {
                    id: entry.id.clone(),
                    source,
                })?;
            if let Some(pattern) = pattern {
                matchers.push(Matcher {
                    id: entry.id.clone(),
                    schema: Arc::clone(&entry.schema),
                    pattern,
                });
            }
        }
        log::debug!(
            "{stage:?} tokenizer built from [{}]",
            matchers
                .iter()
                .map(|m| m.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Self { stage, matchers })
    }

    /// Splits `text` into tokens.
    ///
    /// Inline tokenizers also emit the unmatched gaps as literal text
    /// tokens. A token whose schema can append stays open and is offered
    /// each following match before that match is emitted on its own.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        if text.is_empty() {
            return tokens;
        }

        let literal_gaps = self.stage == Stage::Inline;
        let mut next_hits: Vec<Option<Option<Hit<'_>>>> =
            self.matchers.iter().map(|_| None).collect();
        // Index into `tokens` of the open token, and the matcher it came from.
        let mut open: Option<(usize, usize)> = None;
        let mut cursor = 0;
        let mut gap_start = 0;

        while cursor <= text.len() {
            let mut best: Option<(usize, usize)> = None;
            for (i, matcher) in self.matchers.iter().enumerate() {
                let stale = match &next_hits[i] {
                    None => true,
                    Some(Some(hit)) => hit.start < cursor,
                    Some(None) => false,
                };
                if stale {
                    next_hits[i] = Some(matcher.pattern.find_at(text, cursor));
                }
                if let Some(Some(hit)) = &next_hits[i] {
                    if best.is_none_or(|(start, _)| hit.start < start) {
                        best = Some((hit.start, i));
                    }
                }
            }

            let Some((_, index)) = best else { break };
            let Some(Some(hit)) = next_hits[index].take() else {
                break;
            };
            let matcher = &self.matchers[index];

            if literal_gaps && gap_start < hit.start {
                tokens.push(literal(&text[gap_start..hit.start]));
            }

            let full = hit.full(text);
            let token = matcher.schema.token(&hit.captures, full);
            log::trace!("{} matched {:?} at {}", matcher.id, full, hit.start);

            let absorbed = match open {
                Some((at, owner)) => self.matchers[owner]
                    .schema
                    .append(&mut tokens[at], &token, full),
                None => false,
            };
            if !absorbed {
                open = matcher
                    .schema
                    .has_append()
                    .then_some((tokens.len(), index));
                tokens.push(token);
            }

            gap_start = hit.end;
            cursor = if hit.end > hit.start {
                hit.end
            } else {
                match next_boundary(text, hit.end) {
                    Some(next) => next,
                    None => break,
                }
            };
        }

        if literal_gaps && gap_start < text.len() {
            tokens.push(literal(&text[gap_start..]));
        }
        tokens
    }
}

/// Unmatched inline text, with backslash escapes resolved.
fn literal(text: &str) -> Token {
    Token::node(NodeKind::Text {
        value: unescape(text).into_owned(),
    })
}
