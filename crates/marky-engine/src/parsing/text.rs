use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Characters that lose their meaning when preceded by a backslash.
pub const ESCAPABLE: &str = r"\`*_{}[]<>()#+,-.!|~";

static ESCAPE_REGEX: OnceLock<Regex> = OnceLock::new();

fn escape_regex() -> &'static Regex {
    ESCAPE_REGEX.get_or_init(|| {
        Regex::new(&format!(r"\\([{}])", regex::escape(ESCAPABLE)))
            .expect("escape regex should compile")
    })
}

/// Collapses `\x` to `x` for every escapable `x`. Borrows when there is
/// nothing to do.
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    escape_regex().replace_all(text, "$1")
}
