//! Records handed across the library boundary.
//!
//! All relative paths in these records use forward-slash separators
//! regardless of host OS. Timestamps serialize as RFC 3339 strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One entry in the recursive note listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteSummary {
    /// Filename without the `.md` extension.
    pub name: String,
    /// Path relative to the notes root.
    pub path: String,
    /// Parent folder relative to the root; empty for root-level notes.
    pub folder: String,
    /// Last modification time.
    pub modified: DateTime<Utc>,
    /// Size in bytes.
    pub size: u64,
}

/// Timestamps and size details for a single note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteMetadata {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    /// Size in bytes.
    pub size: u64,
    /// Line count; a final line without a terminator still counts.
    pub lines: usize,
}

/// A note containing at least one match for a search query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Filename without the `.md` extension.
    pub name: String,
    /// Path relative to the notes root.
    pub path: String,
    /// Up to three matches, in file order.
    pub matches: Vec<SearchMatch>,
}

/// A single matched line inside a note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    /// 1-indexed line number of the matched line.
    pub line_number: usize,
    /// The matched line plus up to one line either side, truncated to 200
    /// characters.
    pub context: String,
}
