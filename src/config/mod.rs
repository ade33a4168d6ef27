//! Layout configuration.
//!
//! [`LayoutConfig`] is read from JSON. Field names are accepted in camelCase
//! and under the parameter names the host editor uses (`"Line Height"`,
//! `"Window Style Presets"`, ...). Numbers and booleans may be strings, and
//! preset structs may be JSON nested inside strings; see [`loose`].

pub mod loose;

use crate::event::warn;
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

const PADDING_RANGE: RangeInclusive<f32> = -60.0..=60.0;
const ADJUST_RANGE: RangeInclusive<f32> = -30.0..=30.0;
const LINE_HEIGHT_RANGE: RangeInclusive<f32> = 4.0..=90.0;
const ITEM_HEIGHT_RANGE: RangeInclusive<f32> = 12.0..=102.0;

/// Engine-wide settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Starting default preset, as raw preset JSON.
    #[serde(alias = "Default Window Style")]
    pub default_preset: Option<Value>,
    /// Named presets, as a raw JSON list (possibly string encoded).
    #[serde(alias = "Window Style Presets")]
    pub presets: Value,
    /// Revert to the default style when an event finishes.
    #[serde(
        alias = "Auto-Revert to Default Style",
        deserialize_with = "loose::de_bool"
    )]
    pub auto_revert: bool,
    /// Preset applied when a battle starts.
    #[serde(alias = "Default Battle Message Style")]
    pub battle_preset: String,
    /// Wrap help window text.
    #[serde(alias = "Word Wrap Help Window", deserialize_with = "loose::de_bool")]
    pub word_wrap_help_window: bool,
    #[serde(alias = "Message Padding Left", deserialize_with = "loose::de_f32")]
    pub padding_left: f32,
    #[serde(alias = "Message Padding Right", deserialize_with = "loose::de_f32")]
    pub padding_right: f32,
    #[serde(alias = "Text X Adjust", deserialize_with = "loose::de_f32")]
    pub text_x_adjust: f32,
    #[serde(alias = "Text Y Adjust", deserialize_with = "loose::de_f32")]
    pub text_y_adjust: f32,
    #[serde(alias = "Line Height", deserialize_with = "loose::de_f32")]
    pub line_height: f32,
    /// Height of one selectable row in list windows.
    #[serde(alias = "Selectable Item Height", deserialize_with = "loose::de_f32")]
    pub item_height: f32,
    /// Bare space around the box area on every side.
    #[serde(alias = "Window Margin", deserialize_with = "loose::de_f32")]
    pub window_margin: f32,
    /// Space between a box edge and its text.
    #[serde(alias = "Window Padding", deserialize_with = "loose::de_f32")]
    pub window_padding: f32,
    #[serde(alias = "Word Wrap Width Percent", deserialize_with = "loose::de_f32")]
    pub wrap_width_percent: f32,
    #[serde(deserialize_with = "loose::de_f32")]
    pub icon_width: f32,
    #[serde(deserialize_with = "loose::de_f32")]
    pub face_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_preset: None,
            presets: Value::Array(Vec::new()),
            auto_revert: true,
            battle_preset: "Short".to_string(),
            word_wrap_help_window: true,
            padding_left: 0.0,
            padding_right: 0.0,
            text_x_adjust: 0.0,
            text_y_adjust: 0.0,
            line_height: 36.0,
            item_height: 44.0,
            window_margin: 4.0,
            window_padding: 12.0,
            wrap_width_percent: crate::text::wrap::DEFAULT_WRAP_WIDTH_PERCENT,
            icon_width: crate::metrics::DEFAULT_ICON_WIDTH,
            face_width: 144.0,
        }
    }
}

impl LayoutConfig {
    /// Parse configuration JSON and clamp out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(Error::InvalidConfig(
                "configuration must be a JSON object".to_string(),
            ));
        }
        let config: Self = serde_json::from_value(value)?;
        Ok(config.validated())
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Clamp numeric fields into their accepted ranges, warning for each
    /// value that had to change.
    #[must_use]
    pub fn validated(mut self) -> Self {
        clamp_field("padding_left", &mut self.padding_left, PADDING_RANGE);
        clamp_field("padding_right", &mut self.padding_right, PADDING_RANGE);
        clamp_field("text_x_adjust", &mut self.text_x_adjust, ADJUST_RANGE);
        clamp_field("text_y_adjust", &mut self.text_y_adjust, ADJUST_RANGE);
        clamp_field("line_height", &mut self.line_height, LINE_HEIGHT_RANGE);
        clamp_field("item_height", &mut self.item_height, ITEM_HEIGHT_RANGE);
        clamp_field("window_margin", &mut self.window_margin, 0.0..=f32::MAX);
        clamp_field("window_padding", &mut self.window_padding, 0.0..=f32::MAX);
        clamp_field("icon_width", &mut self.icon_width, 0.0..=f32::MAX);
        clamp_field("face_width", &mut self.face_width, 0.0..=f32::MAX);
        self
    }
}

fn clamp_field(name: &str, value: &mut f32, range: RangeInclusive<f32>) {
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != *value {
        warn(&format!(
            "config '{name}' = {value} is outside {}..={}; using {clamped}",
            range.start(),
            range.end()
        ));
        *value = clamped;
    }
}
