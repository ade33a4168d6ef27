//! `textbox_layout` - text layout for fixed-size message boxes
//!
//! Wraps, aligns and paginates message text that carries inline escape
//! codes, and tracks the window style presets that decide how message boxes
//! are sized, tinted and placed on screen.
//!
//! The host supplies a [`TextMeasurer`] for its font and draws the
//! [`MessageLayout`] a [`Session`] produces.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Pixel and count conversions
#![allow(clippy::cast_sign_loss)] // Pixel and count conversions
#![allow(clippy::cast_precision_loss)] // Line counts as pixel heights
#![allow(clippy::module_name_repetitions)] // Allow StyleState in style etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::float_cmp)] // Exact pixel values in tests
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::struct_excessive_bools)] // Style state is a bundle of flags

pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod metrics;
pub mod placement;
pub mod session;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use command::Command;
pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use message::{Message, MessageHeader, TextCommand};
pub use metrics::{MonospaceMeasurer, TextMeasurer, printed_width};
pub use placement::{AdaptiveTarget, HorizontalAnchor, ScreenSize, ScreenTarget, VerticalBand};
pub use session::{MessageLayout, PageStyle, Session};
pub use style::{PresetCatalog, RgbTone, StylePreset, StyleState};
pub use text::{LineWrapper, TextAlign, normalize_line_breaks, wrap};
pub use unicode::{WidthMethod, set_width_method};
