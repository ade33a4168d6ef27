//! Validated window style presets.

use crate::config::loose;
use crate::event::warn;
use crate::placement::{AdaptiveTarget, HorizontalAnchor};
use crate::text::TextAlign;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the preset used when configuration provides none.
pub const DEFAULT_PRESET_NAME: &str = "Default";

/// Names of the presets every catalog provides.
pub const BUILTIN_PRESET_NAMES: [&str; 8] = [
    "Center",
    "Center Large",
    "Poem",
    "Black",
    "Wood",
    "Book",
    "Stone",
    "Sandstone",
];

/// Additive tone shift applied to a window's background, per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbTone {
    pub red: i16,
    pub green: i16,
    pub blue: i16,
}

impl RgbTone {
    pub const MIN: i16 = -255;
    pub const MAX: i16 = 255;

    /// Create a tone, clamping each channel to `-255..=255`.
    #[must_use]
    pub fn new(red: i16, green: i16, blue: i16) -> Self {
        Self {
            red: red.clamp(Self::MIN, Self::MAX),
            green: green.clamp(Self::MIN, Self::MAX),
            blue: blue.clamp(Self::MIN, Self::MAX),
        }
    }

    #[must_use]
    pub const fn to_array(self) -> [i16; 3] {
        [self.red, self.green, self.blue]
    }

    /// Read a tone from `{"red", "green", "blue"}`, `[r, g, b]`, or either
    /// form encoded as a JSON string. Missing channels are 0.
    fn from_value(value: &Value) -> Option<Self> {
        let decoded = loose::decode_nested(value);
        let [red, green, blue] = match &decoded {
            Value::Object(map) => [map.get("red"), map.get("green"), map.get("blue")],
            Value::Array(items) if items.len() <= 3 => [items.first(), items.get(1), items.get(2)],
            _ => return None,
        };
        Some(Self::new(channel(red)?, channel(green)?, channel(blue)?))
    }
}

fn channel(value: Option<&Value>) -> Option<i16> {
    match value.and_then(loose::number) {
        None => Some(0),
        Some(Ok(n)) => {
            let n = n.round().clamp(f64::from(RgbTone::MIN), f64::from(RgbTone::MAX));
            Some(n as i16)
        }
        Some(Err(_)) => None,
    }
}

/// A named bundle of box style attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreset {
    pub name: String,
    /// Box width in pixels; `0` means the host's box width.
    pub width: f32,
    pub line_count: u32,
    pub color: RgbTone,
    pub text_align: TextAlign,
    pub word_wrap: bool,
    pub adaptive_target: AdaptiveTarget,
    pub instant_text: bool,
    pub page_break_between_commands: bool,
    /// Horizontal anchor, when the preset sets one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<HorizontalAnchor>,
}

impl Default for StylePreset {
    fn default() -> Self {
        Self {
            name: DEFAULT_PRESET_NAME.to_string(),
            width: 0.0,
            line_count: 4,
            color: RgbTone::default(),
            text_align: TextAlign::Left,
            word_wrap: true,
            adaptive_target: AdaptiveTarget::None,
            instant_text: false,
            page_break_between_commands: true,
            position: None,
        }
    }
}

impl StylePreset {
    /// Parse a preset from loosely typed JSON.
    ///
    /// `value` is an object or a string holding one. Fields that are missing
    /// or blank take their value from `base`; the name is required. Present
    /// but unreadable fields are an [`Error::InvalidField`]. An unknown
    /// adaptive target only warns and reads as [`AdaptiveTarget::None`].
    pub fn from_value(value: &Value, base: &Self) -> Result<Self> {
        let map = loose::as_object(value).ok_or_else(|| {
            Error::InvalidConfig(format!("preset is not an object: {}", loose::raw_text(value)))
        })?;
        let name = map
            .get("name")
            .and_then(loose::text)
            .ok_or_else(|| Error::InvalidField {
                preset: "<unnamed>".to_string(),
                field: "name",
                value: map.get("name").map_or_else(String::new, loose::raw_text),
            })?
            .to_string();

        let fields = PresetFields { name: &name, map: &map };
        let width = fields.number("width")?.map_or(Ok(base.width), |w| {
            if w >= 0.0 {
                Ok(w as f32)
            } else {
                Err(fields.invalid("width"))
            }
        })?;
        let line_count = fields.number("lineCount")?.map_or(Ok(base.line_count), |n| {
            if n >= 1.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) {
                Ok(n as u32)
            } else {
                Err(fields.invalid("lineCount"))
            }
        })?;
        let color = match fields.present("color") {
            None => base.color,
            Some(v) => RgbTone::from_value(v).ok_or_else(|| fields.invalid("color"))?,
        };
        let text_align = match fields.text("textAlign") {
            None => base.text_align,
            Some(s) => TextAlign::from_keyword(s).ok_or_else(|| fields.invalid("textAlign"))?,
        };
        let position = match fields.text("position") {
            None => base.position,
            Some(s) => Some(HorizontalAnchor::from_keyword(s).ok_or_else(|| fields.invalid("position"))?),
        };
        let adaptive_target = match fields.text("adaptivePositionTarget") {
            None => base.adaptive_target,
            Some(s) => AdaptiveTarget::from_keyword(s).unwrap_or_else(|| {
                warn(&format!(
                    "preset '{name}': unrecognized adaptive position target '{s}', using none"
                ));
                AdaptiveTarget::None
            }),
        };

        Ok(Self {
            width,
            line_count,
            color,
            text_align,
            word_wrap: fields.boolean("wordWrap")?.unwrap_or(base.word_wrap),
            adaptive_target,
            instant_text: fields.boolean("instantText")?.unwrap_or(base.instant_text),
            page_break_between_commands: fields
                .boolean("pageBreakBetweenTextCommands")?
                .unwrap_or(base.page_break_between_commands),
            position,
            name,
        })
    }

    /// The built-in preset called `name`, with unset fields taken from
    /// `base`.
    #[must_use]
    pub fn builtin(name: &str, base: &Self) -> Option<Self> {
        let mut preset = Self {
            name: name.to_string(),
            ..base.clone()
        };
        match name {
            "Center" | "Center Large" => {
                if name == "Center Large" {
                    preset.line_count = 12;
                }
                preset.text_align = TextAlign::Center;
                preset.position = Some(HorizontalAnchor::Center);
                preset.word_wrap = false;
                preset.adaptive_target = AdaptiveTarget::None;
            }
            "Poem" => preset.word_wrap = false,
            "Black" => preset.color = RgbTone::new(-255, -255, -255),
            "Wood" | "Stone" | "Sandstone" => {
                preset.color = match name {
                    "Wood" => RgbTone::new(68, 51, 34),
                    "Stone" => RgbTone::new(34, 34, 51),
                    _ => RgbTone::new(100, 35, 0),
                };
                preset.text_align = TextAlign::Center;
                preset.instant_text = true;
            }
            "Book" => {
                preset.line_count = 16;
                preset.color = RgbTone::new(68, 51, 34);
                preset.width = 720.0;
                preset.instant_text = true;
            }
            _ => return None,
        }
        Some(preset)
    }
}

struct PresetFields<'a> {
    name: &'a str,
    map: &'a Map<String, Value>,
}

impl PresetFields<'_> {
    fn invalid(&self, field: &'static str) -> Error {
        Error::InvalidField {
            preset: self.name.to_string(),
            field,
            value: self.map.get(field).map_or_else(String::new, loose::raw_text),
        }
    }

    fn present(&self, field: &str) -> Option<&Value> {
        self.map.get(field).filter(|v| match v {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
    }

    fn number(&self, field: &'static str) -> Result<Option<f64>> {
        self.map
            .get(field)
            .and_then(loose::number)
            .transpose()
            .map_err(|_| self.invalid(field))
    }

    fn boolean(&self, field: &'static str) -> Result<Option<bool>> {
        self.map
            .get(field)
            .and_then(loose::boolean)
            .transpose()
            .map_err(|_| self.invalid(field))
    }

    fn text(&self, field: &str) -> Option<&str> {
        self.map.get(field).and_then(loose::text)
    }
}
