//! Grapheme cluster boundaries.
//!
//! An overlong word is split between clusters, never inside one, so a
//! combining accent or a ZWJ emoji sequence stays on a single line.

use unicode_segmentation::UnicodeSegmentation;

/// Extended grapheme clusters of `s` with their byte offsets.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(s: &str) -> Vec<usize> {
        grapheme_indices(s).map(|(i, _)| i).collect()
    }

    #[test]
    fn test_ascii_offsets() {
        assert_eq!(offsets("abc"), vec![0, 1, 2]);
    }

    #[test]
    fn test_combining_mark_stays_attached() {
        // "e" + combining acute, then "x"
        assert_eq!(offsets("e\u{0301}x"), vec![0, 3]);
    }

    #[test]
    fn test_zwj_sequence_is_one_cluster() {
        let family = "👨‍👩‍👧";
        assert_eq!(offsets(&format!("{family}!")), vec![0, family.len()]);
    }
}
