//! Line break tag normalization.
//!
//! Message text may force a break with `<br>`, written in any case and
//! optionally as `<br/>` or `<br />`. A single space after the tag belongs
//! to the tag. Every spelling becomes one `\n`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br ?/?> ?").expect("break tag pattern should compile"));

/// Replace every break tag in `text` with `\n`.
///
/// Returns the input unchanged (borrowed) when it holds no tag, which makes
/// repeated normalization free.
#[must_use]
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !has_break_tag(text) {
        return Cow::Borrowed(text);
    }
    BREAK_TAG.replace_all(text, "\n")
}

/// Whether `text` contains a break tag.
#[must_use]
pub fn has_break_tag(text: &str) -> bool {
    // Cheap reject before running the regex.
    text.contains('<') && BREAK_TAG.is_match(text)
}
