//! Application settings document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use soundtab_storage::{load_json, save_json, StorageLayout};
use tracing::debug;

use crate::{LibraryError, Result};

/// Contents of `data/settings.json`
///
/// Unknown keys are kept in `extra` so they survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_volume")]
    pub volume: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_tab: Option<String>,
    #[serde(default)]
    pub tab_order: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_device: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            last_tab: None,
            tab_order: Vec::new(),
            output_device: None,
            extra: Map::new(),
        }
    }
}

fn default_volume() -> f32 {
    1.0
}

impl AppSettings {
    /// Load settings, falling back to defaults on any problem
    pub fn load(layout: &StorageLayout) -> Self {
        load_json(layout.app_settings_path(), Self::default())
    }

    /// Save settings
    pub fn save(&self, layout: &StorageLayout) -> Result<()> {
        let path = layout.app_settings_path();
        debug!("Saving settings to {:?}", path);
        save_json(&path, self)?;
        Ok(())
    }

    /// Look up a top-level key, known or not
    pub fn get(&self, key: &str) -> Option<Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => map.remove(key),
            _ => None,
        }
    }

    /// Set a top-level key. Known keys must keep their type.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let invalid = |e: serde_json::Error| LibraryError::InvalidSetting {
            key: key.to_string(),
            reason: e.to_string(),
        };

        let mut map = match serde_json::to_value(&*self).map_err(invalid)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        map.insert(key.to_string(), value);
        *self = serde_json::from_value(Value::Object(map)).map_err(invalid)?;
        Ok(())
    }

    /// Volume clamped to `0.0..=1.0`
    pub fn effective_volume(&self) -> f32 {
        if self.volume.is_nan() {
            return default_volume();
        }
        self.volume.clamp(0.0, 1.0)
    }
}
