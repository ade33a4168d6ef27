//! Render-pass layout: positions for every line, split into pages.
//!
//! A [`TextState`] walks prepared text (already normalized and wrapped) one
//! line at a time, the way the host's message renderer does. At the start of
//! every line the alignment resolver recomputes the x offset.

use crate::metrics::{TextMeasurer, printed_width};
use crate::text::align::{TextAlign, line_at, line_start_x};
use serde::Serialize;

/// Space between a face graphic and the text area, in pixels.
pub const FACE_SPACING: f32 = 16.0;

/// Horizontal extent of the text inside a box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextArea {
    /// Box width minus the window padding on both sides.
    pub inner_width: f32,
    /// X where the host starts drawing a line, before message padding.
    pub origin_x: f32,
    /// Extra left padding for message and help text.
    pub padding_left: f32,
    /// Extra right padding for message and help text.
    pub padding_right: f32,
    /// Width of the face graphic, when one is shown.
    pub face_width: Option<f32>,
}

impl TextArea {
    #[must_use]
    pub const fn new(inner_width: f32) -> Self {
        Self {
            inner_width,
            origin_x: 0.0,
            padding_left: 0.0,
            padding_right: 0.0,
            face_width: None,
        }
    }

    #[must_use]
    pub const fn with_padding(mut self, left: f32, right: f32) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    #[must_use]
    pub const fn with_origin(mut self, origin_x: f32) -> Self {
        self.origin_x = origin_x;
        self
    }

    #[must_use]
    pub const fn with_face(mut self, face_width: f32) -> Self {
        self.face_width = Some(face_width);
        self
    }

    /// Width available to a line of text.
    #[must_use]
    pub fn wrap_width(&self) -> f32 {
        let face = self.face_width.map_or(0.0, |w| w + FACE_SPACING);
        self.inner_width - self.padding_left - self.padding_right - face
    }
}

/// Vertical metrics and fine position nudges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    pub line_height: f32,
    pub x_adjust: f32,
    pub y_adjust: f32,
}

impl Default for LineMetrics {
    fn default() -> Self {
        Self {
            line_height: 36.0,
            x_adjust: 0.0,
            y_adjust: 0.0,
        }
    }
}

/// Cursor over prepared text during one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TextState {
    pub text: String,
    /// Byte index of the next unread character.
    pub index: usize,
    /// X where the current line starts.
    pub x: f32,
    /// Y of the current line within the page.
    pub y: f32,
    /// Height accumulated by completed lines on the current page.
    pub height: f32,
}

impl TextState {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            index: 0,
            x: 0.0,
            y: 0.0,
            height: 0.0,
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.index > self.text.len()
    }

    /// The line at the cursor, right-trimmed.
    #[must_use]
    pub fn current_line(&self) -> &str {
        line_at(&self.text, self.index)
    }

    /// Move past the current line and its newline.
    pub fn advance_line(&mut self, line_height: f32) {
        let rest = self.text.get(self.index..).unwrap_or("");
        self.index += rest.find('\n').map_or(rest.len() + 1, |i| i + 1);
        self.y += line_height;
        self.height += line_height;
    }

    /// Start a new page at the top of the box.
    pub fn new_page(&mut self) {
        self.y = 0.0;
        self.height = 0.0;
    }
}

/// One positioned line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LaidOutLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Printed width of `text`.
    pub width: f32,
}

/// One screenful of lines.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Page {
    pub lines: Vec<LaidOutLine>,
    /// Total height of the page's lines.
    pub height: f32,
}

/// Lays out prepared text into positioned, paginated lines.
#[derive(Clone, Copy, Debug)]
pub struct TextLayout<'a, M: ?Sized> {
    measurer: &'a M,
    area: TextArea,
    align: TextAlign,
    metrics: LineMetrics,
    lines_per_page: usize,
}

impl<'a, M: TextMeasurer + ?Sized> TextLayout<'a, M> {
    #[must_use]
    pub fn new(measurer: &'a M, area: TextArea) -> Self {
        Self {
            measurer,
            area,
            align: TextAlign::Left,
            metrics: LineMetrics::default(),
            lines_per_page: usize::MAX,
        }
    }

    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub const fn metrics(mut self, metrics: LineMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Lines shown before a page break; `0` is treated as `1`.
    #[must_use]
    pub fn lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines.max(1);
        self
    }

    /// X offset for `line`, including origin and nudges.
    pub fn line_x(&self, line: &str) -> f32 {
        self.area.origin_x
            + line_start_x(
                self.measurer,
                line,
                self.area.wrap_width(),
                self.align,
                self.area.padding_left,
            )
            + self.metrics.x_adjust
    }

    /// Position every line of `text` and split the result into pages.
    #[must_use]
    pub fn layout(&self, text: &str) -> Vec<Page> {
        let mut pages = Vec::new();
        let mut page = Page::default();
        let mut state = TextState::new(text);

        while !state.is_done() {
            if page.lines.len() == self.lines_per_page {
                pages.push(std::mem::take(&mut page));
                state.new_page();
            }
            let line = state.current_line().to_string();
            state.x = self.line_x(&line);
            page.lines.push(LaidOutLine {
                width: printed_width(self.measurer, &line),
                x: state.x,
                y: state.y + self.metrics.y_adjust,
                text: line,
            });
            state.advance_line(self.metrics.line_height);
            page.height = state.height;
        }
        pages.push(page);
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MonospaceMeasurer;

    #[test]
    fn test_wrap_width_subtracts_padding_and_face() {
        let area = TextArea::new(500.0).with_padding(10.0, 20.0);
        assert_eq!(area.wrap_width(), 470.0);
        assert_eq!(area.with_face(144.0).wrap_width(), 310.0);
    }

    #[test]
    fn test_text_state_walks_lines() {
        let mut state = TextState::new("ab\ncd");
        assert_eq!(state.current_line(), "ab");
        state.advance_line(10.0);
        assert_eq!(state.current_line(), "cd");
        assert_eq!(state.y, 10.0);
        assert!(!state.is_done());
        state.advance_line(10.0);
        assert!(state.is_done());
        assert_eq!(state.height, 20.0);
    }

    #[test]
    fn test_layout_positions_and_pages() {
        let m = MonospaceMeasurer::new(10.0);
        let area = TextArea::new(100.0).with_origin(4.0);
        let pages = TextLayout::new(&m, area)
            .align(TextAlign::Right)
            .metrics(LineMetrics {
                line_height: 36.0,
                x_adjust: 1.0,
                y_adjust: 2.0,
            })
            .lines_per_page(2)
            .layout("aaaa\nbb\nc");

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), 2);
        assert_eq!(pages[0].height, 72.0);
        assert_eq!(pages[0].lines[0].x, 4.0 + 60.0 + 1.0);
        assert_eq!(pages[0].lines[1].x, 4.0 + 80.0 + 1.0);
        assert_eq!(pages[0].lines[1].y, 38.0);
        assert_eq!(pages[1].lines[0].text, "c");
        assert_eq!(pages[1].lines[0].y, 2.0);
        assert_eq!(pages[1].height, 36.0);
    }

    #[test]
    fn test_layout_empty_text_is_one_empty_line() {
        let m = MonospaceMeasurer::new(10.0);
        let pages = TextLayout::new(&m, TextArea::new(100.0)).layout("");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines.len(), 1);
        assert_eq!(pages[0].lines[0].text, "");
    }

    #[test]
    fn test_left_align_offset_is_constant() {
        let m = MonospaceMeasurer::new(10.0);
        let area = TextArea::new(100.0).with_padding(7.0, 0.0);
        let pages = TextLayout::new(&m, area).layout("short\nmuch longer line\n");
        for line in &pages[0].lines {
            assert_eq!(line.x, 7.0);
        }
    }
}
