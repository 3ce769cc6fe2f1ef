//! Note operations: read, save, delete, move, list, metadata.
//!
//! A note is any `.md` file under the root. Identity is the relative path;
//! attributes are derived from the filesystem on demand, never cached.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use super::sandbox::{ResolveRules, resolve_user_path};
use super::{StoreError, to_posix};
use crate::domain::{NoteMetadata, NoteSummary};

/// Reads the raw content of a note.
///
/// # Errors
///
/// [`StoreError::Rejected`] for a refused path, [`StoreError::NotFound`]
/// when the target is missing or not a regular file.
pub fn read_note(root: &Path, note_path: &str) -> Result<String, StoreError> {
    let full = resolve_user_path(root, note_path, ResolveRules::markdown())?;

    if !full.is_file() {
        return Err(StoreError::NotFound { path: full });
    }

    fs::read_to_string(&full).map_err(|source| StoreError::Io { path: full, source })
}

/// Creates or overwrites a note with `content`, verbatim.
///
/// A bare name is accepted; resolution appends the `.md` extension. Missing
/// parent folders are created. The write is a plain overwrite: last writer
/// wins, no atomic-rename guarantee.
pub fn save_note(root: &Path, note_path: &str, content: &str) -> Result<(), StoreError> {
    let full = resolve_user_path(root, note_path, ResolveRules::markdown())?;

    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&full, content).map_err(|source| StoreError::Io { path: full, source })
}

/// Deletes a note, then opportunistically prunes its parent folder.
///
/// `remove_dir` refuses non-empty directories, so a parent that still holds
/// entries survives; every prune failure is ignored, pruning is cleanup,
/// not a guarantee.
pub fn delete_note(root: &Path, note_path: &str) -> Result<(), StoreError> {
    let full = resolve_user_path(root, note_path, ResolveRules::markdown())?;

    if !full.exists() {
        return Err(StoreError::NotFound { path: full });
    }

    fs::remove_file(&full).map_err(|source| StoreError::Io {
        path: full.clone(),
        source,
    })?;

    if let Some(parent) = full.parent() {
        let _ = fs::remove_dir(parent);
    }

    Ok(())
}

/// Moves a note to a new relative path.
///
/// A single rename: the body is never read, and the move is atomic when
/// both paths live on one filesystem. The old parent folder is left in
/// place even when the move empties it, unlike [`delete_note`].
pub fn move_note(root: &Path, from: &str, to: &str) -> Result<(), StoreError> {
    let old_full = resolve_user_path(root, from, ResolveRules::markdown())?;
    let new_full = resolve_user_path(root, to, ResolveRules::markdown())?;

    if !old_full.exists() {
        return Err(StoreError::NotFound { path: old_full });
    }

    if let Some(parent) = new_full.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::rename(&old_full, &new_full).map_err(|source| StoreError::Io {
        path: old_full,
        source,
    })
}

/// Lists every note under the root, most recently modified first.
///
/// Entries sharing a modification time keep whatever order the directory
/// walk produced; that order is not part of the contract.
pub fn list_notes(root: &Path) -> Vec<NoteSummary> {
    let mut notes: Vec<NoteSummary> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"))
        .filter_map(|entry| summarize(root, entry.path()))
        .collect();

    notes.sort_by(|a, b| b.modified.cmp(&a.modified));
    notes
}

fn summarize(root: &Path, path: &Path) -> Option<NoteSummary> {
    let rel = path.strip_prefix(root).ok()?;
    let meta = path.metadata().ok()?;
    let modified = meta.modified().ok().map(DateTime::<Utc>::from)?;

    Some(NoteSummary {
        name: path.file_stem()?.to_string_lossy().into_owned(),
        path: to_posix(rel),
        folder: rel.parent().map(to_posix).unwrap_or_default(),
        modified,
        size: meta.len(),
    })
}

/// Returns timestamps, size, and line count for a note.
///
/// A refused path or missing note yields `None` rather than an error; the
/// caller treats absence as a normal negative result.
pub fn note_metadata(root: &Path, note_path: &str) -> Option<NoteMetadata> {
    let full = resolve_user_path(root, note_path, ResolveRules::markdown()).ok()?;

    let meta = full.metadata().ok()?;
    if !meta.is_file() {
        return None;
    }

    let modified = meta.modified().ok().map(DateTime::<Utc>::from)?;
    // Not every filesystem reports a creation time; fall back to mtime.
    let created = meta
        .created()
        .ok()
        .map(DateTime::<Utc>::from)
        .unwrap_or(modified);

    let content = fs::read_to_string(&full).ok()?;

    Some(NoteMetadata {
        created,
        modified,
        size: meta.len(),
        lines: content.lines().count(),
    })
}
