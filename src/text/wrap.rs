//! Greedy word wrapping on printed (pixel) width.
//!
//! Each paragraph (text between `\n`) is packed independently. The current
//! candidate line starts as the whole remaining paragraph and is shortened
//! to its last space until its printed width fits. A candidate with no space
//! left is a single token wider than the box; it is then shortened one unit
//! at a time, where a unit is a grapheme cluster or a whole escape token, and
//! never below one unit. Every iteration therefore consumes at least one
//! unit, even when the width is smaller than any glyph.

use crate::metrics::{TextMeasurer, printed_width};
use crate::text::escape::{self, Segment};
use crate::unicode::grapheme_indices;

/// Wrap width used when the configured percentage is missing or too small.
pub const DEFAULT_WRAP_WIDTH_PERCENT: f32 = 99.5;

/// Smallest wrap width percentage accepted from configuration.
pub const MIN_WRAP_WIDTH_PERCENT: f32 = 10.0;

/// Resolve the width to wrap at.
///
/// A positive finite `requested` width is used as is. Otherwise the width is
/// `inner_width * percent / 100`, with `percent` replaced by
/// [`DEFAULT_WRAP_WIDTH_PERCENT`] when it is below
/// [`MIN_WRAP_WIDTH_PERCENT`] or not finite.
#[must_use]
pub fn effective_wrap_width(requested: Option<f32>, inner_width: f32, percent: f32) -> f32 {
    if let Some(width) = requested.filter(|w| w.is_finite() && *w > 0.0) {
        return width;
    }
    let percent = if percent.is_finite() && percent >= MIN_WRAP_WIDTH_PERCENT {
        percent
    } else {
        DEFAULT_WRAP_WIDTH_PERCENT
    };
    inner_width.max(0.0) * percent / 100.0
}

/// Word wrapper bound to a measurer and a maximum printed width.
///
/// # Examples
///
/// ```
/// use textbox_layout::metrics::MonospaceMeasurer;
/// use textbox_layout::text::LineWrapper;
///
/// let measurer = MonospaceMeasurer::new(1.0);
/// let lines = LineWrapper::new(&measurer, 15.0).wrap("The quick brown fox jumps");
/// assert_eq!(lines, vec!["The quick brown", "fox jumps"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LineWrapper<'a, M: ?Sized> {
    measurer: &'a M,
    max_width: f32,
}

impl<'a, M: TextMeasurer + ?Sized> LineWrapper<'a, M> {
    /// Create a wrapper for `max_width` pixels.
    #[must_use]
    pub const fn new(measurer: &'a M, max_width: f32) -> Self {
        Self {
            measurer,
            max_width,
        }
    }

    #[must_use]
    pub const fn max_width(&self) -> f32 {
        self.max_width
    }

    /// Wrap `text` into lines. Paragraph breaks (`\n`) are kept as line
    /// breaks and empty paragraphs become empty lines.
    #[must_use]
    pub fn wrap(&self, text: &str) -> Vec<String> {
        text.split('\n')
            .flat_map(|paragraph| self.wrap_paragraph(paragraph))
            .collect()
    }

    /// Wrap `text` and join the lines with `\n`.
    #[must_use]
    pub fn wrap_to_string(&self, text: &str) -> String {
        self.wrap(text).join("\n")
    }

    /// Wrap a single paragraph, which must not contain `\n`.
    #[must_use]
    pub fn wrap_paragraph(&self, paragraph: &str) -> Vec<String> {
        if paragraph.is_empty() {
            return vec![String::new()];
        }

        let mut lines = Vec::new();
        let mut start = 0usize;
        while start < paragraph.len() {
            let rest = &paragraph[start..];
            let end = self.fit_at_spaces(rest).unwrap_or_else(|| self.fit_by_units(rest));
            lines.push(rest[..end].trim_end().to_string());

            start += end;
            // The separating space is consumed with the line it ends.
            if paragraph[start..].starts_with(' ') {
                start += 1;
            }
        }
        lines
    }

    fn fits(&self, candidate: &str) -> bool {
        printed_width(self.measurer, candidate) <= self.max_width
    }

    /// Longest prefix of `rest` ending at a space (or at the end) that fits.
    ///
    /// Returns `None` when a candidate without any space is still too wide.
    fn fit_at_spaces(&self, rest: &str) -> Option<usize> {
        let mut end = rest.len();
        while !self.fits(&rest[..end]) {
            end = rest[..end].rfind(' ')?;
        }
        Some(end)
    }

    /// Longest prefix of `rest` made of whole units that fits, but at least
    /// one unit.
    fn fit_by_units(&self, rest: &str) -> usize {
        let bounds = unit_boundaries(rest);
        let mut idx = bounds.len() - 1;
        while idx > 1 && !self.fits(&rest[..bounds[idx]]) {
            idx -= 1;
        }
        bounds[idx]
    }
}

/// Wrap `text` to `max_width` pixels using `measurer`.
#[must_use]
pub fn wrap<M: TextMeasurer + ?Sized>(text: &str, max_width: f32, measurer: &M) -> Vec<String> {
    LineWrapper::new(measurer, max_width).wrap(text)
}

/// Byte offsets between break units: grapheme clusters in printable runs
/// and whole escape tokens. Includes `0` and `text.len()`.
fn unit_boundaries(text: &str) -> Vec<usize> {
    let mut bounds = vec![0];
    let mut offset = 0usize;
    for seg in escape::segments(text) {
        match seg {
            Segment::Text(run) => {
                bounds.extend(grapheme_indices(run).skip(1).map(|(i, _)| offset + i));
                offset += run.len();
            }
            Segment::Token(token) => offset = token.end(),
        }
        bounds.push(offset);
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMeasurer;

    fn mono() -> MonospaceMeasurer {
        MonospaceMeasurer::new(1.0)
    }

    #[test]
    fn test_fits_on_one_line() {
        assert_eq!(wrap("hello world", 20.0, &mono()), vec!["hello world"]);
    }

    #[test]
    fn test_breaks_at_last_space() {
        let lines = wrap("The quick brown fox jumps", 15.0, &mono());
        assert_eq!(lines, vec!["The quick brown", "fox jumps"]);
    }

    #[test]
    fn test_exact_width_is_one_line() {
        let text = "The quick brown";
        assert_eq!(wrap(text, 15.0, &mono()), vec![text]);
        assert_eq!(wrap(text, 14.0, &mono()), vec!["The quick", "brown"]);
    }

    #[test]
    fn test_overlong_word_split_by_characters() {
        let lines = wrap("Supercalifragilisticexpialidocious", 5.0, &mono());
        assert_eq!(
            lines,
            vec!["Super", "calif", "ragil", "istic", "expia", "lidoc", "ious"]
        );
    }

    #[test]
    fn test_overlong_word_after_short_word() {
        let lines = wrap("a abcdefgh ij", 5.0, &mono());
        assert_eq!(lines, vec!["a", "abcde", "fgh", "ij"]);
    }

    #[test]
    fn test_width_smaller_than_any_character() {
        let lines = wrap("abc", 0.5, &mono());
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_and_negative_width_terminate() {
        assert_eq!(wrap("ab cd", 0.0, &mono()), vec!["a", "b", "c", "d"]);
        assert_eq!(wrap("ab", -3.0, &mono()), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_paragraphs_preserved() {
        assert_eq!(wrap("a\n\nb", 10.0, &mono()), vec!["a", "", "b"]);
        assert_eq!(wrap("", 10.0, &mono()), vec![""]);
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(wrap("abc   ", 10.0, &mono()), vec!["abc"]);
    }

    #[test]
    fn test_escape_codes_do_not_count() {
        let text = "\x1bC[2]The\x1bC[0] quick brown";
        let lines = wrap(text, 9.0, &mono());
        assert_eq!(lines, vec!["\x1bC[2]The\x1bC[0] quick", "brown"]);
    }

    #[test]
    fn test_icon_is_never_split() {
        // Icon slot is 32 + 4 = 36 wide, wider than the box.
        let lines = wrap("\x1bI[5]ab", 2.0, &mono());
        assert_eq!(lines, vec!["\x1bI[5]", "ab"]);
    }

    #[test]
    fn test_grapheme_clusters_are_not_split() {
        let lines = wrap("e\u{0301}e\u{0301}", 1.0, &mono());
        assert_eq!(lines, vec!["e\u{0301}", "e\u{0301}"]);
    }

    #[test]
    fn test_wrapping_wrapped_text_is_stable() {
        let measurer = mono();
        let w = LineWrapper::new(&measurer, 12.0);
        let once = w.wrap_to_string("lorem ipsum dolor sit amet consectetur adipiscing elit");
        let twice = w.wrap_to_string(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_effective_wrap_width() {
        assert_eq!(effective_wrap_width(Some(100.0), 500.0, 50.0), 100.0);
        assert_eq!(effective_wrap_width(None, 200.0, 50.0), 100.0);
        assert_eq!(effective_wrap_width(Some(0.0), 200.0, 5.0), 199.0);
        assert_eq!(effective_wrap_width(Some(f32::NAN), 200.0, f32::NAN), 199.0);
        assert_eq!(effective_wrap_width(Some(-1.0), -50.0, 100.0), 0.0);
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(unit_boundaries("ab"), vec![0, 1, 2]);
        assert_eq!(unit_boundaries("a\x1bC[1]b"), vec![0, 1, 6, 7]);
        assert_eq!(unit_boundaries(""), vec![0]);
    }
}
