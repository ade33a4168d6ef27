//! Horizontal alignment of wrapped lines.

use crate::metrics::{TextMeasurer, printed_width};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where lines sit inside the text area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Parse an alignment keyword, ignoring case and surrounding space.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" | "centre" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| format!("unknown text alignment: {s}"))
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The line that starts at byte `index`: up to the next `\n` or the end of
/// the text, without trailing whitespace.
#[must_use]
pub fn line_at(text: &str, index: usize) -> &str {
    let rest = text.get(index..).unwrap_or("");
    let line = rest.split('\n').next().unwrap_or("");
    line.trim_end()
}

/// X offset for a line of text.
///
/// `area_width` is the width available to text (the wrap width), and
/// `padding_left` the extra left padding inside the box. Left alignment
/// ignores the line entirely.
pub fn line_start_x<M: TextMeasurer + ?Sized>(
    measurer: &M,
    line: &str,
    area_width: f32,
    align: TextAlign,
    padding_left: f32,
) -> f32 {
    let spare = || area_width - printed_width(measurer, line);
    match align {
        TextAlign::Left => padding_left,
        TextAlign::Right => padding_left + spare(),
        TextAlign::Center => padding_left + spare() / 2.0,
    }
}

/// X offset for the line starting at byte `index` of `text`.
pub fn line_start_x_at<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    index: usize,
    area_width: f32,
    align: TextAlign,
    padding_left: f32,
) -> f32 {
    line_start_x(measurer, line_at(text, index), area_width, align, padding_left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMeasurer;

    #[test]
    fn test_left_is_padding() {
        let m = MonospaceMeasurer::new(10.0);
        assert_eq!(line_start_x(&m, "anything", 300.0, TextAlign::Left, 6.0), 6.0);
        assert_eq!(line_start_x(&m, "", 300.0, TextAlign::Left, 0.0), 0.0);
    }

    #[test]
    fn test_right_and_center() {
        let m = MonospaceMeasurer::new(10.0);
        assert_eq!(line_start_x(&m, "abcd", 100.0, TextAlign::Right, 0.0), 60.0);
        assert_eq!(line_start_x(&m, "abcd", 100.0, TextAlign::Center, 0.0), 30.0);
        assert_eq!(line_start_x(&m, "abcd", 100.0, TextAlign::Center, 5.0), 35.0);
    }

    #[test]
    fn test_escape_codes_ignored_for_alignment() {
        let m = MonospaceMeasurer::new(10.0);
        let x = line_start_x(&m, "\x1bC[3]ab\x1bC[0]", 100.0, TextAlign::Right, 0.0);
        assert_eq!(x, 80.0);
    }

    #[test]
    fn test_line_at() {
        let text = "first line  \nsecond\n";
        assert_eq!(line_at(text, 0), "first line");
        assert_eq!(line_at(text, 13), "second");
        assert_eq!(line_at(text, 20), "");
        assert_eq!(line_at(text, 99), "");
    }

    #[test]
    fn test_line_start_x_at_uses_current_line_only() {
        let m = MonospaceMeasurer::new(1.0);
        let text = "ab\nabcdef";
        assert_eq!(line_start_x_at(&m, text, 0, 10.0, TextAlign::Right, 0.0), 8.0);
        assert_eq!(line_start_x_at(&m, text, 3, 10.0, TextAlign::Right, 0.0), 4.0);
    }

    #[test]
    fn test_keyword_parsing() {
        assert_eq!(TextAlign::from_keyword(" Center "), Some(TextAlign::Center));
        assert_eq!("RIGHT".parse::<TextAlign>(), Ok(TextAlign::Right));
        assert!("middle".parse::<TextAlign>().is_err());
        assert_eq!(TextAlign::Left.to_string(), "left");
    }
}
