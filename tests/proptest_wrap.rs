//! Property-based tests for wrapping, normalization and alignment.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use proptest::prelude::*;
use textbox_layout::metrics::MonospaceMeasurer;
use textbox_layout::text::{
    LineWrapper, TextAlign, line_start_x, normalize_line_breaks, strip_escapes,
};
use textbox_layout::printed_width;

// ============================================================================
// Strategies
// ============================================================================

/// Words of lowercase letters joined by single spaces.
fn sentence(max_word: usize) -> impl Strategy<Value = String> {
    let word = prop::string::string_regex(&format!("[a-z]{{1,{max_word}}}"))
        .expect("word pattern should be a valid regex");
    prop::collection::vec(word, 1..30).prop_map(|w| w.join(" "))
}

/// A sentence with color codes and icons sprinkled between words.
fn sentence_with_codes() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,10}",
            Just("\x1bC[3]".to_string()),
            Just("\x1bC[0]".to_string()),
            Just("\x1bI[64]".to_string()),
            Just("\x1b{".to_string()),
        ],
        1..30,
    )
    .prop_map(|parts| parts.join(" "))
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

// ============================================================================
// Wrapping Properties
// ============================================================================

proptest! {
    /// Every line fits the width. Sentences have no breaks and every single
    /// character fits, so no line needs the single-unit fallback.
    #[test]
    fn wrapped_lines_fit(text in sentence(20), width in 1u32..60) {
        let measurer = MonospaceMeasurer::new(1.0);
        let width = width as f32;
        for line in LineWrapper::new(&measurer, width).wrap(&text) {
            prop_assert!(
                printed_width(&measurer, &line) <= width,
                "line {:?} wider than {}", line, width
            );
        }
    }

    /// Lines wider than the box are always a single icon.
    #[test]
    fn only_single_tokens_overflow(text in sentence_with_codes(), width in 1u32..60) {
        let measurer = MonospaceMeasurer::new(1.0);
        let width = width as f32;
        for line in LineWrapper::new(&measurer, width).wrap(&text) {
            if printed_width(&measurer, &line) > width {
                prop_assert_eq!(line.as_str(), "\x1bI[64]");
            }
        }
    }

    /// Wrapping wrapped text with the same width changes nothing.
    #[test]
    fn rewrapping_is_stable(text in sentence(20), width in 1u32..60) {
        let measurer = MonospaceMeasurer::new(1.0);
        let wrapper = LineWrapper::new(&measurer, width as f32);
        let once = wrapper.wrap_to_string(&text);
        let twice = wrapper.wrap_to_string(&once);
        prop_assert_eq!(once, twice);
    }

    /// Words that fit on a line come back whole and in order.
    #[test]
    fn words_round_trip(text in sentence(8), width in 8u32..60) {
        let measurer = MonospaceMeasurer::new(1.0);
        let lines = LineWrapper::new(&measurer, width as f32).wrap(&text);
        prop_assert_eq!(words(&lines.join(" ")), words(&text));
    }

    /// Overlong words are split, but no character is lost or reordered.
    #[test]
    fn characters_round_trip(text in sentence_with_codes(), width in 1u32..20) {
        let measurer = MonospaceMeasurer::new(1.0);
        let lines = LineWrapper::new(&measurer, width as f32).wrap(&text);
        let squeeze = |s: &str| s.chars().filter(|c| *c != ' ').collect::<String>();
        prop_assert_eq!(squeeze(&lines.concat()), squeeze(&text));
    }

    /// Escape codes never change where lines break.
    #[test]
    fn color_codes_do_not_move_breaks(text in sentence(12), width in 4u32..40) {
        let measurer = MonospaceMeasurer::new(1.0);
        let wrapper = LineWrapper::new(&measurer, width as f32);
        let colored = format!("\x1bC[2]{text}\x1bC[0]");
        let plain: Vec<String> = wrapper.wrap(&text);
        let stripped: Vec<String> = wrapper
            .wrap(&colored)
            .iter()
            .map(|l| strip_escapes(l).into_owned())
            .collect();
        prop_assert_eq!(plain, stripped);
    }
}

// ============================================================================
// Normalization and Alignment Properties
// ============================================================================

proptest! {
    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn normalize_is_idempotent(text in "[a-z <>/brBR\n]{0,60}") {
        let once = normalize_line_breaks(&text).into_owned();
        let twice = normalize_line_breaks(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    /// Text without break tags passes through untouched.
    #[test]
    fn normalize_without_tags_is_identity(text in "[a-z \n]{0,60}") {
        let normalized = normalize_line_breaks(&text);
        prop_assert_eq!(normalized.as_ref(), text.as_str());
    }

    /// Left alignment depends only on the padding.
    #[test]
    fn left_offset_is_padding(line in "\\PC{0,40}", area in 0f32..800.0, padding in -60f32..60.0) {
        let measurer = MonospaceMeasurer::new(7.0);
        prop_assert_eq!(line_start_x(&measurer, &line, area, TextAlign::Left, padding), padding);
    }

    /// Right-aligned lines end at the right edge of the area.
    #[test]
    fn right_aligned_lines_end_at_edge(line in "[a-z]{0,40}", area in 0u32..800) {
        let measurer = MonospaceMeasurer::new(2.0);
        let area = area as f32;
        let x = line_start_x(&measurer, &line, area, TextAlign::Right, 0.0);
        prop_assert_eq!(x + printed_width(&measurer, &line), area);
    }
}
