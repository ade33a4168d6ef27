//! Style commands a host can issue between messages.
//!
//! Hosts map their own command names onto [`Command`] values; the engine
//! never parses command strings.

use crate::placement::{AdaptiveTarget, HorizontalAnchor};
use std::fmt;

/// One style change requested by an event script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Return to the default preset.
    ResetToDefault,
    /// Apply the named preset.
    UsePreset(String),
    /// Make the named preset the new default.
    SavePresetAsDefault(String),
    /// Make the current settings the new default.
    SaveCurrentAsDefault,
    WordWrap(bool),
    Position(HorizontalAnchor),
    AdaptiveTarget(AdaptiveTarget),
    InstantText(bool),
    /// Whether consecutive text commands start new pages.
    PageBreak(bool),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResetToDefault => f.write_str("reset to default"),
            Self::UsePreset(name) => write!(f, "use preset '{name}'"),
            Self::SavePresetAsDefault(name) => write!(f, "save preset '{name}' as default"),
            Self::SaveCurrentAsDefault => f.write_str("save current settings as default"),
            Self::WordWrap(on) => write!(f, "word wrap {}", on_off(*on)),
            Self::Position(anchor) => write!(f, "position {anchor}"),
            Self::AdaptiveTarget(target) => write!(f, "adaptive position {target}"),
            Self::InstantText(on) => write!(f, "instant text {}", on_off(*on)),
            Self::PageBreak(on) => write!(f, "page break between commands {}", on_off(*on)),
        }
    }
}

const fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}
