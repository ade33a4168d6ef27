//! Unicode helpers for the monospace measurer and the character-level
//! fallback split.

mod grapheme;
mod width;

pub use grapheme::grapheme_indices;
pub use width::{WidthMethod, display_width, display_width_with_method, set_width_method};
