//! Preset catalog built once from configuration.

use crate::config::{LayoutConfig, loose};
use crate::event::{LogLevel, emit_log, warn};
use crate::style::preset::{BUILTIN_PRESET_NAMES, StylePreset};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Read-only lookup of presets by name and by configuration index.
///
/// Parse problems are reported once, while the catalog is built. Afterwards
/// every name in the catalog maps to a fully validated [`StylePreset`].
#[derive(Clone, Debug)]
pub struct PresetCatalog {
    default: StylePreset,
    /// Presets in insertion order: default, configured, then built-ins.
    presets: Vec<StylePreset>,
    by_name: HashMap<String, usize>,
    /// Catalog position of each configured preset, by list index.
    configured: Vec<usize>,
}

impl PresetCatalog {
    /// Build a catalog from the starting default and a raw preset list.
    ///
    /// `raw_presets` is a JSON array, or a string holding one, whose items
    /// are preset objects or strings holding them. A preset that fails to
    /// parse is replaced by the built-in preset of the same name or, failing
    /// that, by the default preset renamed. Later duplicates of a name are
    /// dropped. Built-in presets missing from the list are added.
    #[must_use]
    pub fn new(default: StylePreset, raw_presets: &Value) -> Self {
        let mut catalog = Self {
            by_name: HashMap::from([(default.name.clone(), 0)]),
            presets: vec![default.clone()],
            configured: Vec::new(),
            default,
        };

        let items = if raw_presets.is_null() {
            Vec::new()
        } else {
            loose::as_array(raw_presets).unwrap_or_else(|| {
                warn(&format!(
                    "preset list is not a JSON array, ignoring it: {}",
                    loose::raw_text(raw_presets)
                ));
                Vec::new()
            })
        };

        for (index, item) in items.iter().enumerate() {
            let preset = match StylePreset::from_value(item, &catalog.default) {
                Ok(preset) => preset,
                Err(err) => {
                    warn(&format!("preset #{index} is invalid, using fallback: {err}"));
                    catalog.fallback_for(item, index)
                }
            };
            let position = catalog.insert(preset);
            catalog.configured.push(position);
        }

        for name in BUILTIN_PRESET_NAMES {
            if !catalog.by_name.contains_key(name) {
                emit_log(
                    LogLevel::Info,
                    &format!("{name} preset is missing, using built-in settings"),
                );
                if let Some(preset) = StylePreset::builtin(name, &catalog.default) {
                    catalog.insert(preset);
                }
            }
        }
        catalog
    }

    /// Build the catalog described by `config`.
    ///
    /// A missing or malformed default preset falls back to
    /// [`StylePreset::default`] with a warning.
    #[must_use]
    pub fn from_config(config: &LayoutConfig) -> Self {
        let default = match &config.default_preset {
            None => StylePreset::default(),
            Some(value) => StylePreset::from_value(value, &StylePreset::default())
                .unwrap_or_else(|err| {
                    warn(&format!("default preset is invalid, using built-in default: {err}"));
                    StylePreset::default()
                }),
        };
        Self::new(default, &config.presets)
    }

    /// The starting default preset.
    #[must_use]
    pub const fn default_preset(&self) -> &StylePreset {
        &self.default
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StylePreset> {
        self.by_name.get(name).map(|&i| &self.presets[i])
    }

    /// The preset at `index` in the configured list.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&StylePreset> {
        self.configured.get(index).map(|&i| &self.presets[i])
    }

    /// Like [`get`](Self::get), but a missing name is an error.
    pub fn lookup(&self, name: &str) -> Result<&StylePreset> {
        self.get(name)
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Preset names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    fn insert(&mut self, preset: StylePreset) -> usize {
        if let Some(&existing) = self.by_name.get(&preset.name) {
            warn(&format!(
                "duplicate preset name '{}', keeping the first one",
                preset.name
            ));
            return existing;
        }
        let position = self.presets.len();
        self.by_name.insert(preset.name.clone(), position);
        self.presets.push(preset);
        position
    }

    fn fallback_for(&self, item: &Value, index: usize) -> StylePreset {
        let name = loose::as_object(item)
            .and_then(|map| map.get("name").and_then(loose::text).map(str::to_string))
            .unwrap_or_else(|| format!("Preset {index}"));
        StylePreset::builtin(&name, &self.default).unwrap_or_else(|| StylePreset {
            name,
            ..self.default.clone()
        })
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::new(StylePreset::default(), &Value::Null)
    }
}
