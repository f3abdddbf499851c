//! Typed documents and the tab/sound catalog for SoundTab
//!
//! Everything here is stored through `soundtab-storage`, so the same
//! fail-soft reads and fail-loud writes apply.

use std::path::PathBuf;
use thiserror::Error;

pub mod catalog;
pub mod favorites;
pub mod settings;

pub use catalog::SoundLibrary;
pub use favorites::{Favorite, TabFavorites};
pub use settings::AppSettings;

/// Errors in library operations
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error(transparent)]
    Storage(#[from] soundtab_storage::StorageError),

    #[error("invalid name: {0:?}")]
    InvalidName(String),

    #[error("tab not found: {0}")]
    UnknownTab(String),

    #[error("tab {0} is not empty")]
    TabNotEmpty(String),

    #[error("could not transfer {from:?} to {to:?}")]
    TransferFailed { from: PathBuf, to: PathBuf },

    #[error("invalid value for setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, LibraryError>;
