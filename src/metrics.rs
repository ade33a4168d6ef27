//! Text measurement.
//!
//! The layout engine never rasterizes glyphs. It asks a [`TextMeasurer`]
//! for the pixel width of printable text and adds icon slots itself, so the
//! measurer only ever sees text with escape tokens removed.

use crate::text::escape::{self, Segment};
use crate::unicode::display_width;

/// Default icon width of the host's icon sheet, in pixels.
pub const DEFAULT_ICON_WIDTH: f32 = 32.0;

/// Host capability: measure the rendered width of plain text.
pub trait TextMeasurer {
    /// Pixel width of `text`. The text contains no escape tokens.
    fn measure(&self, text: &str) -> f32;

    /// Pixel width of one icon, without the trailing gap.
    fn icon_width(&self) -> f32 {
        DEFAULT_ICON_WIDTH
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str) -> f32 {
        (**self).measure(text)
    }

    fn icon_width(&self) -> f32 {
        (**self).icon_width()
    }
}

/// Measurer for fixed-pitch fonts: cell count times cell width.
///
/// Wide (CJK, emoji) characters count as two cells and combining marks as
/// zero, following `unicode-width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    pub cell_width: f32,
    pub icon_width: f32,
}

impl MonospaceMeasurer {
    #[must_use]
    pub const fn new(cell_width: f32) -> Self {
        Self {
            cell_width,
            icon_width: DEFAULT_ICON_WIDTH,
        }
    }

    #[must_use]
    pub const fn with_icon_width(mut self, icon_width: f32) -> Self {
        self.icon_width = icon_width;
        self
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str) -> f32 {
        display_width(text) as f32 * self.cell_width
    }

    fn icon_width(&self) -> f32 {
        self.icon_width
    }
}

/// Adapts a closure into a [`TextMeasurer`].
///
/// ```
/// use textbox_layout::metrics::{FnMeasurer, TextMeasurer};
///
/// let measurer = FnMeasurer::new(|s: &str| s.len() as f32 * 10.0);
/// assert_eq!(measurer.measure("abc"), 30.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnMeasurer<F> {
    measure: F,
    icon_width: f32,
}

impl<F: Fn(&str) -> f32> FnMeasurer<F> {
    pub const fn new(measure: F) -> Self {
        Self {
            measure,
            icon_width: DEFAULT_ICON_WIDTH,
        }
    }

    #[must_use]
    pub const fn with_icon_width(mut self, icon_width: f32) -> Self {
        self.icon_width = icon_width;
        self
    }
}

impl<F: Fn(&str) -> f32> TextMeasurer for FnMeasurer<F> {
    fn measure(&self, text: &str) -> f32 {
        (self.measure)(text)
    }

    fn icon_width(&self) -> f32 {
        self.icon_width
    }
}

/// Borrows another measurer and replaces its icon width.
///
/// Sessions measure through this so the configured icon width wins over
/// whatever the host measurer reports.
#[derive(Clone, Copy, Debug)]
pub struct IconWidthOverride<'a, M: ?Sized> {
    inner: &'a M,
    icon_width: f32,
}

impl<'a, M: TextMeasurer + ?Sized> IconWidthOverride<'a, M> {
    #[must_use]
    pub const fn new(inner: &'a M, icon_width: f32) -> Self {
        Self { inner, icon_width }
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for IconWidthOverride<'_, M> {
    fn measure(&self, text: &str) -> f32 {
        self.inner.measure(text)
    }

    fn icon_width(&self) -> f32 {
        self.icon_width
    }
}

/// Printed width of `text`: glyphs plus icon slots, control codes excluded.
pub fn printed_width<M: TextMeasurer + ?Sized>(measurer: &M, text: &str) -> f32 {
    if !text.contains(escape::ESCAPE) {
        return measurer.measure(text);
    }
    let icon_width = measurer.icon_width();
    let mut printable = String::with_capacity(text.len());
    let mut token_width = 0.0;
    for seg in escape::segments(text) {
        match seg {
            Segment::Text(run) => printable.push_str(run),
            Segment::Token(token) => token_width += token.visible_width(icon_width),
        }
    }
    token_width + measurer.measure(&printable)
}
