//! SoundTab command implementations

use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use soundtab_library::{AppSettings, SoundLibrary};
use soundtab_storage::StorageLayout;

/// Resolved layout shared by all commands
pub struct Context {
    layout: StorageLayout,
    library: SoundLibrary,
}

impl Context {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let layout = match root {
            Some(root) => StorageLayout::new(root),
            None => StorageLayout::discover().context("Failed to resolve application root")?,
        };
        debug!("Using root {:?}", layout.root());
        let library = SoundLibrary::new(layout.clone());
        Ok(Self { layout, library })
    }
}

/// Initialize directories and settings
pub fn init_command(ctx: &Context) -> Result<()> {
    ctx.library.init().context("Failed to initialize storage")?;
    println!("✓ Initialized at {}", ctx.layout.root().display());
    Ok(())
}

/// Show resolved paths
pub fn paths_command(ctx: &Context) -> Result<()> {
    let layout = &ctx.layout;
    println!("Root:     {}", layout.root().display());
    println!("Data:     {}", layout.data_dir()?.display());
    println!("Sounds:   {}", layout.sounds_dir()?.display());
    println!("Settings: {}", layout.app_settings_path().display());
    Ok(())
}

/// List tabs
pub fn tab_list_command(ctx: &Context) -> Result<()> {
    let tabs = ctx.library.list_tabs()?;
    if tabs.is_empty() {
        println!("No tabs");
    } else {
        for tab in tabs {
            println!("{}", tab);
        }
    }
    Ok(())
}

/// Create a tab
pub fn tab_add_command(ctx: &Context, name: &str) -> Result<()> {
    let tab = ctx.library.create_tab(name)?;
    println!("✓ Tab {} ready", tab);
    Ok(())
}

/// Remove a tab
pub fn tab_remove_command(ctx: &Context, name: &str, force: bool) -> Result<()> {
    if ctx.library.remove_tab(name, force)? {
        println!("✓ Tab {} removed", name);
    } else {
        println!("✗ Tab {} not found", name);
    }
    Ok(())
}

/// List sounds in a tab
pub fn sound_list_command(ctx: &Context, tab: Option<&str>) -> Result<()> {
    let sounds = ctx.library.list_sounds(tab)?;
    let favorites = match tab {
        Some(tab) => Some(ctx.library.favorites(tab)?),
        None => None,
    };

    if sounds.is_empty() {
        println!("No sounds");
    }
    for sound in sounds {
        let favorite = favorites.as_ref().is_some_and(|f| f.contains(&sound));
        let marker = if favorite { "★" } else { " " };
        println!("{} {}", marker, sound);
    }
    Ok(())
}

/// Import a sound file
pub fn sound_import_command(
    ctx: &Context,
    file: &Path,
    tab: Option<&str>,
    name: Option<&str>,
    copy: bool,
) -> Result<()> {
    let stored = ctx
        .library
        .import_sound(file, tab, name, copy)
        .with_context(|| format!("Failed to import {}", file.display()))?;
    println!("✓ Stored {}", stored.display());
    Ok(())
}

/// Delete a sound
pub fn sound_delete_command(ctx: &Context, file: &str, tab: Option<&str>) -> Result<()> {
    if ctx.library.delete_sound(tab, file)? {
        println!("✓ Deleted {}", file);
    } else {
        println!("✗ Could not delete {}", file);
    }
    Ok(())
}

/// Move a sound between tabs
pub fn sound_move_command(ctx: &Context, file: &str, from: &str, to: &str) -> Result<()> {
    if ctx.library.move_sound(file, from, to)? {
        println!("✓ Moved {} to {}", file, to);
    } else {
        println!("✗ Could not move {}", file);
    }
    Ok(())
}

/// List favorites of a tab
pub fn fav_list_command(ctx: &Context, tab: &str) -> Result<()> {
    let favorites = ctx.library.favorites(tab)?;
    if favorites.is_empty() {
        println!("No favorites in {}", tab);
    }
    for item in &favorites.items {
        println!("★ {} (added {})", item.file, item.added_at.format("%Y-%m-%d %H:%M"));
    }
    Ok(())
}

/// Mark a favorite
pub fn fav_add_command(ctx: &Context, tab: &str, file: &str) -> Result<()> {
    if ctx.library.add_favorite(tab, file)? {
        println!("✓ {} added to favorites", file);
    } else {
        println!("{} is already a favorite", file);
    }
    Ok(())
}

/// Unmark a favorite
pub fn fav_remove_command(ctx: &Context, tab: &str, file: &str) -> Result<()> {
    if ctx.library.remove_favorite(tab, file)? {
        println!("✓ {} removed from favorites", file);
    } else {
        println!("✗ {} is not a favorite", file);
    }
    Ok(())
}

/// Print all settings
pub fn settings_show_command(ctx: &Context) -> Result<()> {
    let settings = AppSettings::load(&ctx.layout);
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

/// Print one setting
pub fn settings_get_command(ctx: &Context, key: &str) -> Result<()> {
    let settings = AppSettings::load(&ctx.layout);
    match settings.get(key) {
        Some(value) => println!("{}", value),
        None => println!("✗ {} is not set", key),
    }
    Ok(())
}

/// Change one setting
pub fn settings_set_command(ctx: &Context, key: &str, raw: &str) -> Result<()> {
    let value = parse_setting_value(raw);
    let mut settings = AppSettings::load(&ctx.layout);
    settings.set(key, value)?;
    settings
        .save(&ctx.layout)
        .context("Failed to save settings")?;
    println!("✓ {} updated", key);
    Ok(())
}

/// JSON if it parses, otherwise a plain string
fn parse_setting_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
