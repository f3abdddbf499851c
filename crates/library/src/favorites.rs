//! Per-tab favorites

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use soundtab_storage::{delete_file_safely, load_json, save_json, StorageLayout};
use tracing::debug;

use crate::Result;

/// A sound marked as favorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    /// Sound file name inside the tab directory
    pub file: String,
    /// When it was marked
    pub added_at: DateTime<Local>,
}

/// Contents of `data/<tab>_favorites.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabFavorites {
    pub tab: String,
    #[serde(default)]
    pub items: Vec<Favorite>,
}

impl TabFavorites {
    /// Empty favorites for a tab
    pub fn new(tab: impl Into<String>) -> Self {
        Self {
            tab: tab.into(),
            items: Vec::new(),
        }
    }

    /// Load a tab's favorites; missing or damaged files give an empty list
    pub fn load(layout: &StorageLayout, tab: &str) -> Self {
        let mut favorites = load_json(layout.tab_favorites_path(tab), Self::new(tab));
        // The file name is authoritative
        favorites.tab = tab.to_string();
        favorites
    }

    /// Save, overwriting the previous document
    pub fn save(&self, layout: &StorageLayout) -> Result<()> {
        save_json(layout.tab_favorites_path(&self.tab), self)?;
        debug!("Saved {} favorites for tab {}", self.items.len(), self.tab);
        Ok(())
    }

    /// Remove the favorites document. Returns `false` if there was none.
    pub fn delete(layout: &StorageLayout, tab: &str) -> bool {
        delete_file_safely(layout.tab_favorites_path(tab))
    }

    pub fn contains(&self, file: &str) -> bool {
        self.items.iter().any(|f| f.file == file)
    }

    /// Mark a file. Returns `false` if it was already a favorite.
    pub fn add(&mut self, file: impl Into<String>) -> bool {
        let file = file.into();
        if self.contains(&file) {
            return false;
        }
        self.items.push(Favorite {
            file,
            added_at: Local::now(),
        });
        true
    }

    /// Unmark a file. Returns `false` if it was not a favorite.
    pub fn remove(&mut self, file: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|f| f.file != file);
        self.items.len() != before
    }

    /// Favorite file names in the order they were added
    pub fn files(&self) -> Vec<&str> {
        self.items.iter().map(|f| f.file.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
