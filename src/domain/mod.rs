//! Boundary records and pure text helpers, no filesystem access.

mod records;
mod wikilink;

pub use records::{NoteMetadata, NoteSummary, SearchHit, SearchMatch};
pub use wikilink::extract_wiki_links;
