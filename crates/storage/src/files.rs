//! Safe delete/move/copy for sound files

use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{Result, StorageError};

/// Delete a file, reporting why it could not be deleted
pub fn try_delete_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(StorageError::SourceMissing(path.to_path_buf()));
    }
    fs::remove_file(path)?;
    debug!("Deleted {:?}", path);
    Ok(())
}

/// Delete a file if it exists. Returns `true` only if it was removed.
pub fn delete_file_safely(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match try_delete_file(path) {
        Ok(()) => true,
        Err(StorageError::SourceMissing(_)) => {
            debug!("Nothing to delete at {:?}", path);
            false
        }
        Err(e) => {
            warn!("Failed to delete {:?}: {}", path, e);
            false
        }
    }
}

/// Move or copy a file, creating the destination directory as needed.
///
/// Returns the final location of the file. When `dst` is an existing
/// directory the file keeps its name inside it.
pub fn try_move_file(src: impl AsRef<Path>, dst: impl AsRef<Path>, copy: bool) -> Result<PathBuf> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    if !src.exists() {
        return Err(StorageError::SourceMissing(src.to_path_buf()));
    }

    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let target = match src.file_name() {
        Some(name) if dst.is_dir() => dst.join(name),
        _ => dst.to_path_buf(),
    };

    if is_same_file(src, &target) {
        return Err(StorageError::SameFile(target));
    }

    if copy {
        copy_with_metadata(src, &target)?;
        debug!("Copied {:?} -> {:?}", src, target);
    } else {
        move_file(src, &target)?;
        debug!("Moved {:?} -> {:?}", src, target);
    }
    Ok(target)
}

/// Move (`copy = false`) or copy (`copy = true`) a file.
/// Returns `false` if the source is missing or the operation fails.
pub fn move_file_safely(src: impl AsRef<Path>, dst: impl AsRef<Path>, copy: bool) -> bool {
    let src = src.as_ref();
    let dst = dst.as_ref();
    match try_move_file(src, dst, copy) {
        Ok(_) => true,
        Err(StorageError::SourceMissing(_)) => {
            debug!("Source {:?} does not exist", src);
            false
        }
        Err(e) => {
            let op = if copy { "copy" } else { "move" };
            warn!("Failed to {} {:?} to {:?}: {}", op, src, dst, e);
            false
        }
    }
}

/// Copy a file, keeping the source in place
pub fn copy_file_safely(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> bool {
    move_file_safely(src, dst, true)
}

/// Both paths exist and resolve to the same file
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn move_file(src: &Path, dst: &Path) -> std::io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) => {
            // rename cannot cross filesystems
            debug!("Rename failed ({}), falling back to copy + delete", e);
            copy_with_metadata(src, dst)?;
            fs::remove_file(src)
        }
    }
}

/// Copy contents and permissions, then carry over access/modification times
fn copy_with_metadata(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::copy(src, dst)?;

    let meta = fs::metadata(src)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    File::open(dst)?.set_times(times)
}
