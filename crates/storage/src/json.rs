//! JSON document persistence

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use crate::Result;

/// Write `data` as indented JSON, replacing whatever was at `path`
pub fn save_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let path = path.as_ref();
    debug!("Saving JSON to {:?}", path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Read a JSON document, reporting why it could not be read.
///
/// A missing file is `Ok(None)`.
pub fn try_load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Option<T>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&content)?;
    Ok(Some(data))
}

/// Read a JSON document, falling back to `default` when it is missing,
/// unreadable, or malformed.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>, default: T) -> T {
    let path = path.as_ref();
    match try_load_json(path) {
        Ok(Some(data)) => {
            debug!("Loaded JSON from {:?}", path);
            data
        }
        Ok(None) => {
            debug!("No JSON at {:?}, using default", path);
            default
        }
        Err(e) => {
            warn!("Failed to load {:?}, using default: {}", path, e);
            default
        }
    }
}

/// Untyped [`load_json`]; a `None` default is an empty object
pub fn load_json_value(path: impl AsRef<Path>, default: Option<Value>) -> Value {
    load_json(path, default.unwrap_or_else(|| Value::Object(Default::default())))
}
