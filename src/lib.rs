//! nook - sandboxed markdown note storage rooted at a single directory
//!
//! Notes are plain `.md` files and folders are plain directories under one
//! configured root. Every operation resolves its caller-supplied relative
//! path through a single confinement gate that rejects absolute paths,
//! `..` traversal, null bytes, and symlink escapes before any disk access.
//! On top of that gate sit note and folder CRUD, a recursive listing pass,
//! a naive substring search with line-numbered context snippets, and
//! wiki-link token extraction.
//!
//! The crate is a library boundary: it defines no CLI, no transport, and no
//! persistent index. Expected negative outcomes (bad path, missing target,
//! occupied destination) come back as [`StoreError`] variants or absent
//! results, never as panics.

pub mod domain;
pub mod infra;

pub use domain::{NoteMetadata, NoteSummary, SearchHit, SearchMatch, extract_wiki_links};
pub use infra::{
    PathRejection, ResolveRules, StoreError, create_folder, delete_folder, delete_note,
    list_folders, list_notes, move_folder, move_note, note_metadata, read_note, rename_folder,
    resolve_user_path, save_note, search_notes,
};
