//! Live message style settings.

use crate::placement::{AdaptiveTarget, HorizontalAnchor};
use crate::style::preset::{RgbTone, StylePreset};
use crate::text::TextAlign;
use serde::{Deserialize, Serialize};

/// Name given to presets captured from the live settings.
pub const CURRENT_SETTINGS_NAME: &str = "Current Settings";

/// The current message style, one per session.
///
/// Every setter clears [`is_default`](Self::is_default). Setters given
/// `None` (or `0` for sizes) take the value from the default preset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleState {
    default_preset: StylePreset,
    width: f32,
    line_count: u32,
    tone: RgbTone,
    text_align: TextAlign,
    word_wrap: bool,
    adaptive_target: AdaptiveTarget,
    instant_text: bool,
    page_break: bool,
    position: HorizontalAnchor,
    is_default: bool,
}

impl StyleState {
    /// Start from `default_preset`.
    ///
    /// A default without a position is given the starting one, so a reset
    /// always puts the box back where it began.
    #[must_use]
    pub fn new(mut default_preset: StylePreset) -> Self {
        default_preset.position.get_or_insert_default();
        let mut state = Self {
            width: default_preset.width,
            line_count: default_preset.line_count.max(1),
            tone: default_preset.color,
            text_align: default_preset.text_align,
            word_wrap: default_preset.word_wrap,
            adaptive_target: default_preset.adaptive_target,
            instant_text: default_preset.instant_text,
            page_break: default_preset.page_break_between_commands,
            position: default_preset.position.unwrap_or_default(),
            is_default: false,
            default_preset,
        };
        state.reset_to_default();
        state
    }

    /// Take every field from `preset`. The horizontal position only
    /// changes when the preset sets one.
    pub fn apply_preset(&mut self, preset: &StylePreset) {
        self.set_width(preset.width);
        self.set_line_count(preset.line_count);
        self.set_tone(Some(preset.color));
        self.set_text_align(Some(preset.text_align));
        self.set_word_wrap(Some(preset.word_wrap));
        self.set_adaptive_target(Some(preset.adaptive_target));
        self.set_instant_text(Some(preset.instant_text));
        self.set_page_break(Some(preset.page_break_between_commands));
        if preset.position.is_some() {
            self.set_position(preset.position);
        }
    }

    /// Apply the default preset unless the settings are already default.
    pub fn reset_to_default(&mut self) {
        if !self.is_default {
            let preset = self.default_preset.clone();
            self.apply_preset(&preset);
            self.is_default = true;
        }
    }

    /// Replace the default preset. Current settings are left as they are.
    ///
    /// A preset without a position keeps the old default's position.
    pub fn set_default_preset(&mut self, mut preset: StylePreset) {
        if preset.position.is_none() {
            preset.position = self.default_preset.position;
        }
        self.default_preset = preset;
        self.is_default = false;
    }

    /// The current settings as a preset.
    #[must_use]
    pub fn snapshot(&self) -> StylePreset {
        StylePreset {
            name: CURRENT_SETTINGS_NAME.to_string(),
            width: self.width,
            line_count: self.line_count,
            color: self.tone,
            text_align: self.text_align,
            word_wrap: self.word_wrap,
            adaptive_target: self.adaptive_target,
            instant_text: self.instant_text,
            page_break_between_commands: self.page_break,
            position: Some(self.position),
        }
    }

    /// Box width, or `0` for the host default.
    pub fn set_width(&mut self, width: f32) {
        self.width = if width.is_finite() && width > 0.0 {
            width
        } else {
            self.default_preset.width
        };
        self.is_default = false;
    }

    pub fn set_line_count(&mut self, count: u32) {
        self.line_count = match count {
            0 if self.default_preset.line_count > 0 => self.default_preset.line_count,
            0 => 4,
            n => n,
        };
        self.is_default = false;
    }

    pub fn set_tone(&mut self, tone: Option<RgbTone>) {
        self.tone = tone.unwrap_or(self.default_preset.color);
        self.is_default = false;
    }

    pub fn set_text_align(&mut self, align: Option<TextAlign>) {
        self.text_align = align.unwrap_or(self.default_preset.text_align);
        self.is_default = false;
    }

    pub fn set_word_wrap(&mut self, enabled: Option<bool>) {
        self.word_wrap = enabled.unwrap_or(self.default_preset.word_wrap);
        self.is_default = false;
    }

    pub fn set_adaptive_target(&mut self, target: Option<AdaptiveTarget>) {
        self.adaptive_target = target.unwrap_or(self.default_preset.adaptive_target);
        self.is_default = false;
    }

    pub fn set_instant_text(&mut self, enabled: Option<bool>) {
        self.instant_text = enabled.unwrap_or(self.default_preset.instant_text);
        self.is_default = false;
    }

    pub fn set_page_break(&mut self, enabled: Option<bool>) {
        self.page_break = enabled.unwrap_or(self.default_preset.page_break_between_commands);
        self.is_default = false;
    }

    /// `None` takes the default preset's position, or left if it has none.
    pub fn set_position(&mut self, position: Option<HorizontalAnchor>) {
        self.position = position
            .or(self.default_preset.position)
            .unwrap_or(HorizontalAnchor::Left);
        self.is_default = false;
    }

    #[must_use]
    pub const fn default_preset(&self) -> &StylePreset {
        &self.default_preset
    }

    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }

    /// Configured width, `0` meaning the host box width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Width of the message box on a host whose box area is `host_width`.
    #[must_use]
    pub fn message_width(&self, host_width: f32) -> f32 {
        if self.width > 0.0 { self.width } else { host_width }
    }

    #[must_use]
    pub const fn line_count(&self) -> u32 {
        self.line_count
    }

    #[must_use]
    pub const fn tone(&self) -> RgbTone {
        self.tone
    }

    #[must_use]
    pub const fn text_align(&self) -> TextAlign {
        self.text_align
    }

    #[must_use]
    pub const fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    #[must_use]
    pub const fn adaptive_target(&self) -> AdaptiveTarget {
        self.adaptive_target
    }

    #[must_use]
    pub const fn instant_text(&self) -> bool {
        self.instant_text
    }

    #[must_use]
    pub const fn page_break(&self) -> bool {
        self.page_break
    }

    #[must_use]
    pub const fn position(&self) -> HorizontalAnchor {
        self.position
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self::new(StylePreset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_default() {
        let state = StyleState::default();
        assert!(state.is_default());
        assert_eq!(state.line_count(), 4);
        assert!(state.word_wrap());
        assert_eq!(state.position(), HorizontalAnchor::Center);
    }

    #[test]
    fn test_apply_then_reset_restores_default() {
        let mut state = StyleState::default();
        let before = state.clone();
        let preset = StylePreset {
            name: "Centered".to_string(),
            text_align: TextAlign::Center,
            word_wrap: false,
            ..StylePreset::default()
        };

        state.apply_preset(&preset);
        assert!(!state.is_default());
        assert_eq!(state.text_align(), TextAlign::Center);
        assert!(!state.word_wrap());

        state.reset_to_default();
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_is_noop_when_default() {
        let mut state = StyleState::default();
        state.set_position(Some(HorizontalAnchor::Right));
        state.reset_to_default();
        assert_eq!(state.position(), HorizontalAnchor::Center);
        assert!(state.is_default());

        let snapshot = state.clone();
        state.reset_to_default();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_setters_fall_back_to_default() {
        let default = StylePreset {
            width: 600.0,
            line_count: 3,
            ..StylePreset::default()
        };
        let mut state = StyleState::new(default);
        state.set_width(300.0);
        state.set_line_count(9);
        state.set_width(0.0);
        state.set_line_count(0);
        assert_eq!(state.width(), 600.0);
        assert_eq!(state.line_count(), 3);

        state.set_word_wrap(Some(false));
        state.set_word_wrap(None);
        assert!(state.word_wrap());

        state.set_position(Some(HorizontalAnchor::Right));
        state.set_position(None);
        assert_eq!(state.position(), HorizontalAnchor::Center);
        assert!(!state.is_default());
    }

    #[test]
    fn test_reset_undoes_preset_position() {
        let mut state = StyleState::default();
        state.set_position(Some(HorizontalAnchor::Left));
        state.set_default_preset(state.snapshot());
        state.reset_to_default();
        assert_eq!(state.position(), HorizontalAnchor::Left);

        let centered = StylePreset {
            name: "Center".to_string(),
            position: Some(HorizontalAnchor::Center),
            ..StylePreset::default()
        };
        state.apply_preset(&centered);
        assert_eq!(state.position(), HorizontalAnchor::Center);
        state.reset_to_default();
        assert_eq!(state.position(), HorizontalAnchor::Left);
    }

    #[test]
    fn test_starting_position_survives_preset() {
        let mut state = StyleState::default();
        let right = StylePreset {
            position: Some(HorizontalAnchor::Right),
            ..StylePreset::default()
        };
        state.apply_preset(&right);
        state.reset_to_default();
        assert_eq!(state.position(), HorizontalAnchor::Center);

        // A new default without a position keeps the old one.
        state.set_default_preset(StylePreset::default());
        state.set_position(Some(HorizontalAnchor::Right));
        state.reset_to_default();
        assert_eq!(state.position(), HorizontalAnchor::Center);
    }

    #[test]
    fn test_set_default_preset_keeps_current_fields() {
        let mut state = StyleState::default();
        let wide = StylePreset {
            width: 700.0,
            ..StylePreset::default()
        };
        state.set_default_preset(wide);
        assert_eq!(state.width(), 0.0);
        assert!(!state.is_default());

        state.reset_to_default();
        assert_eq!(state.width(), 700.0);
    }

    #[test]
    fn test_message_width_and_snapshot() {
        let mut state = StyleState::default();
        assert_eq!(state.message_width(808.0), 808.0);
        state.set_width(500.0);
        assert_eq!(state.message_width(808.0), 500.0);

        let preset = state.snapshot();
        assert_eq!(preset.name, CURRENT_SETTINGS_NAME);
        assert_eq!(preset.width, 500.0);
        assert_eq!(preset.position, Some(HorizontalAnchor::Center));
    }

    #[test]
    fn test_serde_round_trip_for_save_data() {
        let mut state = StyleState::default();
        state.set_instant_text(Some(true));
        let json = serde_json::to_string(&state).unwrap();
        let restored: StyleState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
