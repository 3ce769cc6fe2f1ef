//! Folder operations: create, list, move/rename, delete.
//!
//! A folder is nothing but a directory under the root; there is no
//! metadata file. User-created structure is preserved: folder operations
//! never prune empty directories elsewhere in the tree.

use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};
use walkdir::WalkDir;

use super::sandbox::{ResolveRules, resolve_user_path};
use super::{StoreError, to_posix};

/// Creates a folder and any missing ancestors. Idempotent.
pub fn create_folder(root: &Path, folder_path: &str) -> Result<(), StoreError> {
    let full = resolve_user_path(root, folder_path, ResolveRules::folder())?;

    fs::create_dir_all(&full).map_err(|source| StoreError::Io { path: full, source })
}

/// Lists every folder under the root, empty ones included, as sorted
/// root-relative paths.
///
/// Only relative paths starting with `.` are excluded, so a hidden
/// directory nested below a visible one is still listed.
pub fn list_folders(root: &Path) -> Vec<String> {
    let mut folders: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(to_posix))
        .filter(|rel| !rel.is_empty() && !rel.starts_with('.'))
        .collect();

    folders.sort();
    folders
}

/// Moves a folder and its whole subtree to a new relative path.
///
/// Fails with [`StoreError::NotFound`] when the source is missing or not a
/// directory and with [`StoreError::Conflict`] when the destination already
/// exists. A same-filesystem move is a single rename; a cross-device move
/// falls back to copy-then-delete, and a failed copy is removed so the
/// source is left untouched.
pub fn move_folder(root: &Path, from: &str, to: &str) -> Result<(), StoreError> {
    let old_full = resolve_user_path(root, from, ResolveRules::folder())?;
    let new_full = resolve_user_path(root, to, ResolveRules::folder())?;

    if !old_full.is_dir() {
        return Err(StoreError::NotFound { path: old_full });
    }
    if new_full.exists() {
        return Err(StoreError::Conflict { path: new_full });
    }

    if let Some(parent) = new_full.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    match fs::rename(&old_full, &new_full) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            if let Err(source) = copy_tree(&old_full, &new_full) {
                // Leave the source intact; drop whatever partial copy exists.
                let _ = fs::remove_dir_all(&new_full);
                return Err(StoreError::Io {
                    path: new_full,
                    source,
                });
            }
            fs::remove_dir_all(&old_full).map_err(|source| StoreError::Io {
                path: old_full,
                source,
            })
        }
        Err(source) => Err(StoreError::Io {
            path: old_full,
            source,
        }),
    }
}

/// Renames a folder. Same mechanics as [`move_folder`]; a rename is a move
/// whose destination shares the parent.
pub fn rename_folder(root: &Path, from: &str, to: &str) -> Result<(), StoreError> {
    move_folder(root, from, to)
}

/// Deletes a folder and everything below it.
///
/// Failure detail is logged here (the caller only sees the error kind),
/// mirroring the diagnostics the consuming layer expects for destructive
/// folder operations.
pub fn delete_folder(root: &Path, folder_path: &str) -> Result<(), StoreError> {
    let full = match resolve_user_path(root, folder_path, ResolveRules::folder()) {
        Ok(full) => full,
        Err(rejection) => {
            warn!("invalid folder path {:?}: {}", folder_path, rejection);
            return Err(rejection.into());
        }
    };

    if !full.exists() {
        warn!("folder does not exist: {}", full.display());
        return Err(StoreError::NotFound { path: full });
    }
    if !full.is_dir() {
        warn!("path is not a directory: {}", full.display());
        return Err(StoreError::NotFound { path: full });
    }

    match fs::remove_dir_all(&full) {
        Ok(()) => {
            info!("deleted folder {}", full.display());
            Ok(())
        }
        Err(source) => {
            warn!("failed to delete folder {}: {}", full.display(), source);
            Err(StoreError::Io { path: full, source })
        }
    }
}

fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
