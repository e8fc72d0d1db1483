use regex::{Captures, Regex};

use crate::error::PatternError;

/// A compiled schema pattern.
///
/// `regex` has no look-around, so the few constructs that need it are spelled
/// out here instead:
/// - line anchors use `(?m)^` and `(?m)$`;
/// - a *trailing context* group is matched but left out of the reported
///   match, standing in for a look-ahead;
/// - a set of characters that must not sit right before the match stands in
///   for a negative look-behind.
///
/// A match only counts when the capture key took part in it.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    key: String,
    trailing: Option<String>,
    not_after: Vec<char>,
}

/// One accepted match of a [`Pattern`].
#[derive(Debug)]
pub struct Hit<'t> {
    pub captures: Captures<'t>,
    /// Byte offset where the match begins.
    pub start: usize,
    /// Byte offset where the match ends, trailing context excluded.
    pub end: usize,
}

impl Hit<'_> {
    pub fn full<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

impl Pattern {
    pub fn new(source: &str, key: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(source)?;
        require_group(&regex, key)?;
        Ok(Self {
            regex,
            key: key.to_string(),
            trailing: None,
            not_after: Vec::new(),
        })
    }

    /// Marks `group` as trailing context: it must match, but the reported
    /// match ends where it starts.
    pub fn with_trailing(mut self, group: &str) -> Result<Self, PatternError> {
        require_group(&self.regex, group)?;
        self.trailing = Some(group.to_string());
        Ok(self)
    }

    /// Rejects matches whose preceding character is one of `chars`.
    pub fn not_preceded_by(mut self, chars: &str) -> Self {
        self.not_after = chars.chars().collect();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Leftmost accepted match starting at or after `from`.
    pub fn find_at<'t>(&self, text: &'t str, from: usize) -> Option<Hit<'t>> {
        let mut from = from;
        while from <= text.len() {
            let captures = self.regex.captures_at(text, from)?;
            let whole = captures.get(0)?;
            let start = whole.start();

            if captures.name(&self.key).is_some() && !self.rejected_at(text, start) {
                let end = self
                    .trailing
                    .as_deref()
                    .and_then(|group| captures.name(group))
                    .map_or(whole.end(), |m| m.start());
                return Some(Hit {
                    captures,
                    start,
                    end,
                });
            }

            from = next_boundary(text, start)?;
        }
        None
    }

    fn rejected_at(&self, text: &str, start: usize) -> bool {
        if self.not_after.is_empty() {
            return false;
        }
        text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| self.not_after.contains(&c))
    }
}

fn require_group(regex: &Regex, name: &str) -> Result<(), PatternError> {
    if regex.capture_names().flatten().any(|n| n == name) {
        Ok(())
    } else {
        Err(PatternError::MissingCapture(name.to_string()))
    }
}

/// Byte offset of the character after the one at `at`, if there is one.
pub(crate) fn next_boundary(text: &str, at: usize) -> Option<usize> {
    text[at..].chars().next().map(|c| at + c.len_utf8())
}

/// Text of a named group, or `""` when it did not take part in the match.
pub fn group<'t>(captures: &Captures<'t>, name: &str) -> &'t str {
    captures.name(name).map_or("", |m| m.as_str())
}

/// Text of the first of `names` that took part in the match.
pub fn first_group<'t>(captures: &Captures<'t>, names: &[&str]) -> &'t str {
    names
        .iter()
        .find_map(|name| captures.name(name))
        .map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_rejected() {
        let err = Pattern::new(r"(?P<a>x)", "b").unwrap_err();
        assert!(matches!(err, PatternError::MissingCapture(name) if name == "b"));
    }

    #[test]
    fn invalid_regex_is_rejected() {
        let err = Pattern::new(r"(?P<a>x", "a").unwrap_err();
        assert!(matches!(err, PatternError::Regex(_)));
    }

    #[test]
    fn trailing_group_is_excluded_from_match() {
        let pattern = Pattern::new(r"(?P<a>ab)(?P<ahead>c)", "a")
            .unwrap()
            .with_trailing("ahead")
            .unwrap();
        let hit = pattern.find_at("xabc", 0).unwrap();
        assert_eq!((hit.start, hit.end), (1, 3));
        assert_eq!(hit.full("xabc"), "ab");
    }

    #[test]
    fn preceded_match_is_skipped_for_a_later_one() {
        let pattern = Pattern::new(r"(?P<star>\*)", "star")
            .unwrap()
            .not_preceded_by("\\");
        let hit = pattern.find_at(r"\* *", 0).unwrap();
        assert_eq!(hit.start, 3);
    }

    #[test]
    fn non_participating_key_is_no_match() {
        let pattern = Pattern::new(r"(?P<a>a)|b", "a").unwrap();
        let hit = pattern.find_at("ba", 0).unwrap();
        assert_eq!(hit.start, 1);
    }

    #[test]
    fn line_anchor_respects_context_before_start() {
        let pattern = Pattern::new(r"(?m)^(?P<x>x)", "x").unwrap();
        assert!(pattern.find_at("ax", 1).is_none());
        assert_eq!(pattern.find_at("a\nx", 1).unwrap().start, 2);
    }

    #[test]
    fn multibyte_text_advances_on_char_boundaries() {
        let pattern = Pattern::new(r"(?P<b>b)", "b").unwrap().not_preceded_by("é");
        assert!(pattern.find_at("éb", 0).is_none());
        assert_eq!(pattern.find_at("ébb", 0).unwrap().start, 3);
    }
}
