//! Box placement on screen.
//!
//! The vertical band comes from the text command, optionally flipped
//! between top and bottom so the box does not cover a tracked character.
//! The horizontal anchor comes from the style state. Both are resolved every
//! time a box is shown and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Height assumed for a tracked character sprite, in pixels.
pub const DEFAULT_TARGET_HEIGHT: f32 = 48.0;

/// Extra height the message box gets beyond its text lines.
pub const MESSAGE_BOX_EXTRA_HEIGHT: f32 = 8.0;

/// Vertical band of the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalBand {
    Top,
    Middle,
    #[default]
    Bottom,
}

impl VerticalBand {
    /// Band position as a multiple of half the free vertical space.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Top => 0,
            Self::Middle => 1,
            Self::Bottom => 2,
        }
    }

    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Top),
            1 => Some(Self::Middle),
            2 => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Horizontal anchor of a box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalAnchor {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalAnchor {
    /// Parse a position keyword, ignoring case and surrounding space.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" | "centre" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for HorizontalAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| format!("unknown window position: {s}"))
    }
}

impl fmt::Display for HorizontalAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which character the box avoids covering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdaptiveTarget {
    #[default]
    None,
    /// The event whose script is running.
    Event,
    Player,
}

impl AdaptiveTarget {
    /// Parse a target keyword. Matching is by substring, so `"Active Event"`
    /// reads as `Event` and `"none"` / `"Non"` as `None`.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        if s.contains("non") || s == "off" {
            Some(Self::None)
        } else if s.contains("player") {
            Some(Self::Player)
        } else if s.contains("event") {
            Some(Self::Event)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Event => "event",
            Self::Player => "player",
        }
    }
}

impl fmt::Display for AdaptiveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen position of a tracked character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTarget {
    /// Y of the character's bottom edge.
    pub bottom_y: f32,
    pub height: f32,
}

impl ScreenTarget {
    #[must_use]
    pub const fn new(bottom_y: f32) -> Self {
        Self {
            bottom_y,
            height: DEFAULT_TARGET_HEIGHT,
        }
    }

    #[must_use]
    pub const fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

/// Resolved placement of one box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlacementState {
    pub band: VerticalBand,
    pub anchor: HorizontalAnchor,
}

/// A box rectangle in screen pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BoxRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Size of the drawable UI area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Box area for a UI area with `margin` pixels left bare on every side.
    #[must_use]
    pub fn from_ui_area(ui_width: f32, ui_height: f32, margin: f32) -> Self {
        Self {
            width: ui_width - margin * 2.0,
            height: ui_height - margin * 2.0,
        }
    }
}

/// Pick the vertical band for a box.
///
/// Middle boxes, boxes without a target and boxes shown in combat keep the
/// requested band. Otherwise the box goes to whichever of top and bottom
/// overlaps the target less; a tie keeps the requested band.
#[must_use]
pub fn resolve_vertical_band(
    requested: VerticalBand,
    box_height: f32,
    target: AdaptiveTarget,
    tracked: Option<ScreenTarget>,
    screen_height: f32,
    in_combat: bool,
) -> VerticalBand {
    if requested == VerticalBand::Middle || target == AdaptiveTarget::None || in_combat {
        return requested;
    }
    let Some(tracked) = tracked else {
        return requested;
    };

    let extent = tracked.height.max(0.0);
    let bottom_overlap =
        (tracked.bottom_y - (screen_height - box_height)).clamp(0.0, extent);
    let top_overlap = (box_height - (tracked.bottom_y - extent)).clamp(0.0, extent);

    if bottom_overlap > top_overlap {
        VerticalBand::Top
    } else if top_overlap > bottom_overlap {
        VerticalBand::Bottom
    } else {
        requested
    }
}

/// Y of a box in `band`.
#[must_use]
pub fn box_y(band: VerticalBand, box_height: f32, screen_height: f32) -> f32 {
    f32::from(band.index()) * (screen_height - box_height) / 2.0
}

/// X of a box with `anchor`.
#[must_use]
pub fn box_x(anchor: HorizontalAnchor, box_width: f32, screen_width: f32) -> f32 {
    match anchor {
        HorizontalAnchor::Left => 0.0,
        HorizontalAnchor::Center => (screen_width - box_width) / 2.0,
        HorizontalAnchor::Right => screen_width - box_width,
    }
}

/// Height of a box that fits `lines` lines of text.
#[must_use]
pub fn fitting_height(lines: u32, line_height: f32, window_padding: f32) -> f32 {
    lines as f32 * line_height + window_padding * 2.0
}

/// Y for a choice list shown with a message box.
///
/// A list that would start at or below the bottom of the screen is moved to
/// sit directly above the message box.
#[must_use]
pub fn choice_list_y(
    proposed_y: f32,
    list_height: f32,
    message_box_y: f32,
    screen_height: f32,
) -> f32 {
    if proposed_y >= screen_height {
        message_box_y - list_height
    } else {
        proposed_y
    }
}

/// Width of the speaker name box, widened by the message padding.
#[must_use]
pub fn name_box_width(base_width: f32, padding_left: f32, padding_right: f32, screen_width: f32) -> f32 {
    if base_width > 0.0 {
        (base_width + padding_left + padding_right).min(screen_width)
    } else {
        base_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN_H: f32 = 624.0;

    #[test]
    fn test_middle_never_moves() {
        let band = resolve_vertical_band(
            VerticalBand::Middle,
            200.0,
            AdaptiveTarget::Player,
            Some(ScreenTarget::new(SCREEN_H - 10.0)),
            SCREEN_H,
            false,
        );
        assert_eq!(band, VerticalBand::Middle);
    }

    #[test]
    fn test_no_target_or_combat_keeps_request() {
        let near_bottom = Some(ScreenTarget::new(SCREEN_H - 10.0));
        let none = resolve_vertical_band(
            VerticalBand::Bottom,
            200.0,
            AdaptiveTarget::None,
            near_bottom,
            SCREEN_H,
            false,
        );
        assert_eq!(none, VerticalBand::Bottom);

        let combat = resolve_vertical_band(
            VerticalBand::Bottom,
            200.0,
            AdaptiveTarget::Player,
            near_bottom,
            SCREEN_H,
            true,
        );
        assert_eq!(combat, VerticalBand::Bottom);

        let untracked = resolve_vertical_band(
            VerticalBand::Bottom,
            200.0,
            AdaptiveTarget::Event,
            None,
            SCREEN_H,
            false,
        );
        assert_eq!(untracked, VerticalBand::Bottom);
    }

    #[test]
    fn test_bottom_box_flips_to_top() {
        let band = resolve_vertical_band(
            VerticalBand::Bottom,
            180.0,
            AdaptiveTarget::Player,
            Some(ScreenTarget::new(600.0)),
            SCREEN_H,
            false,
        );
        assert_eq!(band, VerticalBand::Top);
    }

    #[test]
    fn test_top_box_flips_to_bottom() {
        let band = resolve_vertical_band(
            VerticalBand::Top,
            180.0,
            AdaptiveTarget::Event,
            Some(ScreenTarget::new(100.0)),
            SCREEN_H,
            false,
        );
        assert_eq!(band, VerticalBand::Bottom);
    }

    #[test]
    fn test_no_overlap_keeps_request() {
        let band = resolve_vertical_band(
            VerticalBand::Top,
            180.0,
            AdaptiveTarget::Player,
            Some(ScreenTarget::new(350.0)),
            SCREEN_H,
            false,
        );
        assert_eq!(band, VerticalBand::Top);
    }

    #[test]
    fn test_full_screen_box() {
        // Sprite partly below the screen edge: the top band overlaps less.
        let band = resolve_vertical_band(
            VerticalBand::Bottom,
            SCREEN_H,
            AdaptiveTarget::Player,
            Some(ScreenTarget::new(SCREEN_H + 16.0)),
            SCREEN_H,
            false,
        );
        assert_eq!(band, VerticalBand::Top);

        // Sprite fully on screen: both bands cover all of it.
        let band = resolve_vertical_band(
            VerticalBand::Bottom,
            SCREEN_H,
            AdaptiveTarget::Player,
            Some(ScreenTarget::new(SCREEN_H - 1.0)),
            SCREEN_H,
            false,
        );
        assert_eq!(band, VerticalBand::Bottom);
    }

    #[test]
    fn test_box_coordinates() {
        assert_eq!(box_y(VerticalBand::Top, 200.0, 600.0), 0.0);
        assert_eq!(box_y(VerticalBand::Middle, 200.0, 600.0), 200.0);
        assert_eq!(box_y(VerticalBand::Bottom, 200.0, 600.0), 400.0);

        assert_eq!(box_x(HorizontalAnchor::Left, 400.0, 800.0), 0.0);
        assert_eq!(box_x(HorizontalAnchor::Center, 400.0, 800.0), 200.0);
        assert_eq!(box_x(HorizontalAnchor::Right, 400.0, 800.0), 400.0);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(fitting_height(4, 36.0, 12.0), 168.0);
        assert_eq!(choice_list_y(700.0, 100.0, 300.0, 624.0), 200.0);
        assert_eq!(choice_list_y(100.0, 100.0, 300.0, 624.0), 100.0);
        assert_eq!(name_box_width(120.0, 10.0, 10.0, 800.0), 140.0);
        assert_eq!(name_box_width(790.0, 10.0, 10.0, 800.0), 800.0);
        assert_eq!(name_box_width(0.0, 10.0, 10.0, 800.0), 0.0);
        let screen = ScreenSize::from_ui_area(816.0, 624.0, 4.0);
        assert_eq!(screen, ScreenSize::new(808.0, 616.0));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(AdaptiveTarget::from_keyword("Active Event"), Some(AdaptiveTarget::Event));
        assert_eq!(AdaptiveTarget::from_keyword("None"), Some(AdaptiveTarget::None));
        assert_eq!(AdaptiveTarget::from_keyword("PLAYER"), Some(AdaptiveTarget::Player));
        assert_eq!(AdaptiveTarget::from_keyword("follower"), None);
        assert_eq!("left".parse::<HorizontalAnchor>(), Ok(HorizontalAnchor::Left));
        assert_eq!(VerticalBand::from_index(1), Some(VerticalBand::Middle));
        assert_eq!(VerticalBand::from_index(3), None);
    }
}
