//! Tabs and the sound files inside them

use soundtab_storage::{
    create_safe_filename, delete_file_safely, move_file_safely, StorageError, StorageLayout,
};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

use crate::{AppSettings, LibraryError, Result, TabFavorites};

/// Manages tab directories and the sounds they hold
#[derive(Debug, Clone)]
pub struct SoundLibrary {
    layout: StorageLayout,
}

impl SoundLibrary {
    pub fn new(layout: StorageLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// Create the data and sounds directories and a settings file if absent
    pub fn init(&self) -> Result<AppSettings> {
        self.layout.data_dir()?;
        self.layout.sounds_dir()?;

        let settings_path = self.layout.app_settings_path();
        if settings_path.exists() {
            warn!("Settings already present at {:?}", settings_path);
        } else {
            AppSettings::default().save(&self.layout)?;
            info!("Created settings at {:?}", settings_path);
        }
        Ok(AppSettings::load(&self.layout))
    }

    /// Tab names, sorted
    pub fn list_tabs(&self) -> Result<Vec<String>> {
        let sounds = self.layout.sounds_dir()?;
        let mut tabs = list_entries(&sounds, |p| p.is_dir())?;
        tabs.sort();
        Ok(tabs)
    }

    /// Create a tab from a user supplied name, returning the sanitized name
    pub fn create_tab(&self, name: &str) -> Result<String> {
        let tab = sanitize_tab(name)?;
        let dir = self.layout.tab_dir(Some(&tab))?;
        info!("Tab {} ready at {:?}", tab, dir);
        Ok(tab)
    }

    /// Remove a tab directory and its favorites.
    ///
    /// Returns `false` if the tab did not exist. A tab that still holds
    /// sounds is only removed with `force`.
    pub fn remove_tab(&self, name: &str, force: bool) -> Result<bool> {
        let tab = sanitize_tab(name)?;
        let dir = self.layout.sounds_dir()?.join(&tab);
        if !dir.is_dir() {
            return Ok(false);
        }

        let has_entries = std::fs::read_dir(&dir)
            .map_err(StorageError::from)?
            .next()
            .is_some();
        if has_entries && !force {
            return Err(LibraryError::TabNotEmpty(tab));
        }

        std::fs::remove_dir_all(&dir).map_err(StorageError::from)?;
        TabFavorites::delete(&self.layout, &tab);
        info!("Removed tab {}", tab);
        Ok(true)
    }

    /// Sound file names in a tab (or loose in the sounds directory), sorted
    pub fn list_sounds(&self, tab: Option<&str>) -> Result<Vec<String>> {
        let dir = self.existing_tab_dir(tab)?;
        let mut sounds = list_entries(&dir, |p| p.is_file())?;
        sounds.sort();
        Ok(sounds)
    }

    /// Bring an outside file into a tab.
    ///
    /// The stored name is `name` (or the source's stem) passed through
    /// [`create_safe_filename`], keeping the source extension.
    pub fn import_sound(
        &self,
        src: &Path,
        tab: Option<&str>,
        name: Option<&str>,
        copy: bool,
    ) -> Result<PathBuf> {
        let stem = match name {
            Some(name) => name.to_string(),
            None => src
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let file_name = safe_sound_name(&stem, src.extension().and_then(|e| e.to_str()))?;

        let dir = match tab {
            Some(tab) => self.layout.tab_dir(Some(&sanitize_tab(tab)?))?,
            None => self.layout.tab_dir(None)?,
        };
        let dst = dir.join(&file_name);

        if !move_file_safely(src, &dst, copy) {
            return Err(LibraryError::TransferFailed {
                from: src.to_path_buf(),
                to: dst,
            });
        }
        info!("Imported {:?} as {:?}", src, dst);
        Ok(dst)
    }

    /// Delete a sound and drop it from the tab's favorites.
    /// Returns `false` if nothing was deleted.
    pub fn delete_sound(&self, tab: Option<&str>, file: &str) -> Result<bool> {
        let tab = tab.map(sanitize_tab).transpose()?;
        let file = sound_file_name(file)?;
        let dir = self.existing_tab_dir(tab.as_deref())?;
        if !delete_file_safely(dir.join(file)) {
            return Ok(false);
        }

        if let Some(tab) = tab {
            let mut favorites = TabFavorites::load(&self.layout, &tab);
            if favorites.remove(file) {
                favorites.save(&self.layout)?;
            }
        }
        Ok(true)
    }

    /// Move a sound between tabs, carrying its favorite mark along.
    /// Returns `false` if the move did not happen.
    pub fn move_sound(&self, file: &str, from: &str, to: &str) -> Result<bool> {
        let file = sound_file_name(file)?;
        let from = sanitize_tab(from)?;
        let src_dir = self.existing_tab_dir(Some(&from))?;
        let to = sanitize_tab(to)?;
        let dst_dir = self.layout.tab_dir(Some(&to))?;

        if !move_file_safely(src_dir.join(file), dst_dir.join(file), false) {
            return Ok(false);
        }

        // Target first: a failed save must not lose the mark
        let mut source_favorites = TabFavorites::load(&self.layout, &from);
        if source_favorites.contains(file) {
            let mut target_favorites = TabFavorites::load(&self.layout, &to);
            target_favorites.add(file);
            if let Err(e) = target_favorites.save(&self.layout) {
                warn!("Moved {} to {} but could not carry its favorite mark: {}", file, to, e);
                return Err(e);
            }
            source_favorites.remove(file);
            if let Err(e) = source_favorites.save(&self.layout) {
                warn!("Favorite {} left behind in tab {}: {}", file, from, e);
                return Err(e);
            }
        }
        debug!("Moved {} from {} to {}", file, from, to);
        Ok(true)
    }

    /// Mark a sound in a tab as favorite.
    /// Returns `false` if it already was one.
    pub fn add_favorite(&self, tab: &str, file: &str) -> Result<bool> {
        let file = sound_file_name(file)?;
        let tab = sanitize_tab(tab)?;
        let dir = self.existing_tab_dir(Some(&tab))?;
        if !dir.join(file).is_file() {
            return Err(StorageError::SourceMissing(dir.join(file)).into());
        }

        let mut favorites = TabFavorites::load(&self.layout, &tab);
        let added = favorites.add(file);
        if added {
            favorites.save(&self.layout)?;
        }
        Ok(added)
    }

    /// Unmark a favorite. Returns `false` if it was not one.
    pub fn remove_favorite(&self, tab: &str, file: &str) -> Result<bool> {
        let file = sound_file_name(file)?;
        let mut favorites = TabFavorites::load(&self.layout, &sanitize_tab(tab)?);
        let removed = favorites.remove(file);
        if removed {
            favorites.save(&self.layout)?;
        }
        Ok(removed)
    }

    pub fn favorites(&self, tab: &str) -> Result<TabFavorites> {
        Ok(TabFavorites::load(&self.layout, &sanitize_tab(tab)?))
    }

    fn existing_tab_dir(&self, tab: Option<&str>) -> Result<PathBuf> {
        let sounds = self.layout.sounds_dir()?;
        match tab {
            None => Ok(sounds),
            Some(tab) => {
                let dir = sounds.join(sanitize_tab(tab)?);
                if dir.is_dir() {
                    Ok(dir)
                } else {
                    Err(LibraryError::UnknownTab(tab.to_string()))
                }
            }
        }
    }
}

fn sanitize_tab(name: &str) -> Result<String> {
    let tab = create_safe_filename(name);
    if tab.is_empty() {
        return Err(LibraryError::InvalidName(name.to_string()));
    }
    Ok(tab)
}

/// Accept only a bare file name, never a path
fn sound_file_name(file: &str) -> Result<&str> {
    let mut components = Path::new(file).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == file => Ok(file),
        _ => Err(LibraryError::InvalidName(file.to_string())),
    }
}

fn safe_sound_name(stem: &str, extension: Option<&str>) -> Result<String> {
    let safe_stem = create_safe_filename(stem);
    if safe_stem.is_empty() {
        return Err(LibraryError::InvalidName(stem.to_string()));
    }
    match extension.map(create_safe_filename).filter(|e| !e.is_empty()) {
        Some(ext) => Ok(format!("{}.{}", safe_stem, ext)),
        None => Ok(safe_stem),
    }
}

fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(StorageError::from)?;
    for entry in entries.flatten() {
        let path = entry.path();
        if !keep(&path) {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
