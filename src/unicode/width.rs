//! Cell counts for the monospace measurer.
//!
//! Hosts with real font metrics never reach this module; they measure
//! through their own [`TextMeasurer`](crate::metrics::TextMeasurer).

use std::sync::atomic::{AtomicBool, Ordering};
use unicode_width::UnicodeWidthStr;

/// How East Asian ambiguous-width characters are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// Ambiguous characters take one cell, as in most Western fonts.
    #[default]
    WcWidth,
    /// Ambiguous characters take two cells, as in CJK fonts.
    Unicode,
}

static AMBIGUOUS_WIDE: AtomicBool = AtomicBool::new(false);

/// Choose the process-wide width method.
pub fn set_width_method(method: WidthMethod) {
    AMBIGUOUS_WIDE.store(method == WidthMethod::Unicode, Ordering::Relaxed);
}

#[must_use]
pub fn width_method() -> WidthMethod {
    if AMBIGUOUS_WIDE.load(Ordering::Relaxed) {
        WidthMethod::Unicode
    } else {
        WidthMethod::WcWidth
    }
}

/// Cells taken by `s` under the process-wide method.
#[must_use]
pub fn display_width(s: &str) -> usize {
    display_width_with_method(s, width_method())
}

#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => s.width(),
        WidthMethod::Unicode => s.width_cjk(),
    }
}
