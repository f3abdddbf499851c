//! Storage helpers for SoundTab
//!
//! Resolves the on-disk layout (data and sounds directories), persists JSON
//! documents and moves sound files around without crashing the caller.
//!
//! Two error policies coexist here. Loading, deleting and moving are
//! fail-soft: they return a default or `false` and log what went wrong.
//! Saving and directory creation are fail-loud: they return [`StorageError`].

use std::path::PathBuf;
use thiserror::Error;

pub mod files;
pub mod json;
pub mod paths;

pub use files::{
    copy_file_safely, delete_file_safely, move_file_safely, try_delete_file, try_move_file,
};
pub use json::{load_json, load_json_value, save_json, try_load_json};
pub use paths::{
    app_settings_path, create_safe_filename, data_dir, ensure_dir_exists, sounds_dir, tab_dir,
    tab_favorites_path, StorageLayout, ROOT_ENV_VAR,
};

/// Errors raised by the storage layer
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not locate the home directory (set SOUNDTAB_HOME)")]
    NoHomeDir,

    #[error("source file not found: {0}")]
    SourceMissing(PathBuf),

    #[error("source and destination are the same file: {0}")]
    SameFile(PathBuf),
}

pub type Result<T> = std::result::Result<T, StorageError>;
