//! Text preparation and layout for message boxes.
//!
//! Text flows through an explicit pipeline, each stage a plain function or
//! small value type:
//!
//! 1. [`normalize_line_breaks`] turns `<br>` tags into `\n`
//! 2. [`LineWrapper`] wraps each paragraph to the text area width
//! 3. [`TextLayout`] positions every line per [`TextAlign`] and paginates
//!
//! Width is always the *printed* width: escape tokens found by the
//! [`escape`] scanner are skipped, icons count as one icon slot.
//!
//! # Examples
//!
//! ```
//! use textbox_layout::metrics::MonospaceMeasurer;
//! use textbox_layout::text::{normalize_line_breaks, LineWrapper, TextAlign, TextArea, TextLayout};
//!
//! let measurer = MonospaceMeasurer::new(10.0);
//! let area = TextArea::new(120.0);
//!
//! let text = normalize_line_breaks("Hello there, traveller.<br>Welcome!");
//! let wrapped = LineWrapper::new(&measurer, area.wrap_width()).wrap_to_string(&text);
//! assert_eq!(wrapped, "Hello there,\ntraveller.\nWelcome!");
//!
//! let pages = TextLayout::new(&measurer, area)
//!     .align(TextAlign::Center)
//!     .layout(&wrapped);
//! assert_eq!(pages[0].lines[2].x, 20.0);
//! ```

pub mod align;
pub mod escape;
pub mod layout;
pub mod normalize;
pub mod wrap;

pub use align::{TextAlign, line_at, line_start_x, line_start_x_at};
pub use escape::{EscapeToken, TokenKind, count_icons, scan, strip_escapes};
pub use layout::{FACE_SPACING, LaidOutLine, LineMetrics, Page, TextArea, TextLayout, TextState};
pub use normalize::{has_break_tag, normalize_line_breaks};
pub use wrap::{LineWrapper, effective_wrap_width, wrap};
