//! Filesystem-backed operations: the confinement gate, note and folder
//! stores, and the scan-based search.

mod folders;
mod notes;
mod sandbox;
mod search;

pub use folders::{create_folder, delete_folder, list_folders, move_folder, rename_folder};
pub use notes::{delete_note, list_notes, move_note, note_metadata, read_note, save_note};
pub use sandbox::{PathRejection, ResolveRules, resolve_user_path};
pub use search::search_notes;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure modes shared by the note and folder operations.
///
/// Expected negative outcomes (refused path, missing target, occupied
/// destination) are plain variants so the consuming layer can branch on
/// them; raw filesystem faults are wrapped in [`StoreError::Io`] instead of
/// propagating.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Rejected(#[from] PathRejection),

    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    #[error("destination already exists: {path}")]
    Conflict { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// True when the failure is a refused input path rather than a
    /// filesystem condition.
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Rejected(_))
    }
}

/// Renders a root-relative path with forward slashes on every host OS.
pub(crate) fn to_posix(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
