//! Application layout and path utilities

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Result, StorageError};

/// Environment variable overriding the application root
pub const ROOT_ENV_VAR: &str = "SOUNDTAB_HOME";

const DATA_DIR: &str = "data";
const SOUNDS_DIR: &str = "sounds";
const SETTINGS_FILE: &str = "settings.json";
const FAVORITES_SUFFIX: &str = "_favorites.json";

/// Ensure directory exists, returning the same path
pub fn ensure_dir_exists(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.is_dir() {
        debug!("Creating directory {:?}", path);
        std::fs::create_dir_all(path)?;
    }
    Ok(path.to_path_buf())
}

/// Sanitize a user supplied name for use as a file or directory name.
///
/// Keeps letters, digits, space, `-` and `_`, then trims surrounding
/// whitespace. Distinct inputs may collapse to the same result, and the
/// result may be empty.
pub fn create_safe_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// On-disk layout rooted at a single application directory
///
/// ```text
/// <root>/data/settings.json
/// <root>/data/<tab>_favorites.json
/// <root>/sounds/<tab>/...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    /// Bind the layout to an explicit root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the default root: `$SOUNDTAB_HOME`, else `~/.soundtab`
    pub fn discover() -> Result<Self> {
        if let Some(root) = std::env::var_os(ROOT_ENV_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::new(root));
        }
        let home = dirs::home_dir().ok_or(StorageError::NoHomeDir)?;
        Ok(Self::new(home.join(".soundtab")))
    }

    /// Application root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Data directory, created if missing
    pub fn data_dir(&self) -> Result<PathBuf> {
        ensure_dir_exists(self.root.join(DATA_DIR))
    }

    /// Sounds directory, created if missing
    pub fn sounds_dir(&self) -> Result<PathBuf> {
        ensure_dir_exists(self.root.join(SOUNDS_DIR))
    }

    /// Directory for a tab's sounds, or the sounds directory itself for `None`
    pub fn tab_dir(&self, tab_name: Option<&str>) -> Result<PathBuf> {
        let sounds = self.sounds_dir()?;
        match tab_name {
            None => Ok(sounds),
            Some(name) => ensure_dir_exists(sounds.join(name)),
        }
    }

    /// Location of a tab's favorites document
    pub fn tab_favorites_path(&self, tab_name: &str) -> PathBuf {
        self.root
            .join(DATA_DIR)
            .join(format!("{}{}", tab_name, FAVORITES_SUFFIX))
    }

    /// Location of the application settings document
    pub fn app_settings_path(&self) -> PathBuf {
        self.root.join(DATA_DIR).join(SETTINGS_FILE)
    }
}

/// Data directory under the default root
pub fn data_dir() -> Result<PathBuf> {
    StorageLayout::discover()?.data_dir()
}

/// Sounds directory under the default root
pub fn sounds_dir() -> Result<PathBuf> {
    StorageLayout::discover()?.sounds_dir()
}

/// Tab directory under the default root
pub fn tab_dir(tab_name: Option<&str>) -> Result<PathBuf> {
    StorageLayout::discover()?.tab_dir(tab_name)
}

/// Favorites document for a tab under the default root
pub fn tab_favorites_path(tab_name: &str) -> Result<PathBuf> {
    Ok(StorageLayout::discover()?.tab_favorites_path(tab_name))
}

/// Settings document under the default root
pub fn app_settings_path() -> Result<PathBuf> {
    Ok(StorageLayout::discover()?.app_settings_path())
}
