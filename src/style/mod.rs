//! Window style presets and the live style state machine.
//!
//! A [`PresetCatalog`] is built once from configuration and shared
//! read-only. Each session owns a [`StyleState`] that presets and commands
//! mutate.

pub mod catalog;
pub mod preset;
pub mod state;

pub use catalog::PresetCatalog;
pub use preset::{BUILTIN_PRESET_NAMES, DEFAULT_PRESET_NAME, RgbTone, StylePreset};
pub use state::{CURRENT_SETTINGS_NAME, StyleState};
