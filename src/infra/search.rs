//! Naive full-text search: a direct scan over note bodies, no index.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::to_posix;
use crate::domain::{SearchHit, SearchMatch};

/// Reported matches per note are capped at the first three in file order.
const MAX_MATCHES_PER_NOTE: usize = 3;

/// Context snippets are clipped to this many characters.
const MAX_CONTEXT_CHARS: usize = 200;

/// Case-insensitive substring search across every note under the root.
///
/// Returns one entry per note with at least one matching line, in whatever
/// order the directory walk produces (not contractual). A note that cannot
/// be read is skipped, not reported.
pub fn search_notes(root: &Path, query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"));

    for entry in walker {
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        if !content.to_lowercase().contains(&needle) {
            continue;
        }

        let lines: Vec<&str> = content.split('\n').collect();
        let matches: Vec<SearchMatch> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.to_lowercase().contains(&needle))
            .map(|(index, _)| SearchMatch {
                line_number: index + 1,
                context: context_snippet(&lines, index),
            })
            .take(MAX_MATCHES_PER_NOTE)
            .collect();

        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        hits.push(SearchHit {
            name: entry
                .path()
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: to_posix(rel),
            matches,
        });
    }

    hits
}

/// The matched line plus one line either side, clipped at the buffer edges
/// and truncated to [`MAX_CONTEXT_CHARS`] characters.
fn context_snippet(lines: &[&str], index: usize) -> String {
    let start = index.saturating_sub(1);
    let end = (index + 2).min(lines.len());
    lines[start..end]
        .join("\n")
        .chars()
        .take(MAX_CONTEXT_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::save_note;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn root() -> TempDir {
        TempDir::new().unwrap()
    }

    // ===========================================
    // Matching
    // ===========================================

    #[test]
    fn finds_substring_with_line_number_and_context() {
        let dir = root();
        let body = (1..=10)
            .map(|n| {
                if n == 5 {
                    format!("line {} has Foo in it", n)
                } else {
                    format!("line {}", n)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        save_note(dir.path(), "note.md", &body).unwrap();

        let hits = search_notes(dir.path(), "foo");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "note");
        assert_eq!(hits[0].path, "note.md");
        assert_eq!(hits[0].matches.len(), 1);
        assert_eq!(hits[0].matches[0].line_number, 5);
        assert_eq!(
            hits[0].matches[0].context,
            "line 4\nline 5 has Foo in it\nline 6"
        );
    }

    #[test]
    fn search_is_case_insensitive_both_ways() {
        let dir = root();
        save_note(dir.path(), "note.md", "Contains FOO here").unwrap();

        assert_eq!(search_notes(dir.path(), "foo").len(), 1);
        assert_eq!(search_notes(dir.path(), "Foo").len(), 1);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let dir = root();
        save_note(dir.path(), "note.md", "nothing relevant").unwrap();
        assert!(search_notes(dir.path(), "absent").is_empty());
    }

    #[test]
    fn non_markdown_files_are_not_searched() {
        let dir = root();
        std::fs::write(dir.path().join("notes.txt"), "contains target").unwrap();
        assert!(search_notes(dir.path(), "target").is_empty());
    }

    #[test]
    fn one_hit_per_note_with_multiple_matching_notes() {
        let dir = root();
        save_note(dir.path(), "a.md", "target here").unwrap();
        save_note(dir.path(), "sub/b.md", "also target").unwrap();

        let mut paths: Vec<String> = search_notes(dir.path(), "target")
            .into_iter()
            .map(|hit| hit.path)
            .collect();
        // Walk order is not contractual; sort before comparing.
        paths.sort();
        assert_eq!(paths, vec!["a.md", "sub/b.md"]);
    }

    // ===========================================
    // Context edges
    // ===========================================

    #[test]
    fn match_on_first_line_clips_context_at_start() {
        let dir = root();
        save_note(dir.path(), "note.md", "target first\nsecond\nthird").unwrap();

        let hits = search_notes(dir.path(), "target");
        assert_eq!(hits[0].matches[0].line_number, 1);
        assert_eq!(hits[0].matches[0].context, "target first\nsecond");
    }

    #[test]
    fn match_on_last_line_clips_context_at_end() {
        let dir = root();
        save_note(dir.path(), "note.md", "first\nsecond\ntarget last").unwrap();

        let hits = search_notes(dir.path(), "target");
        assert_eq!(hits[0].matches[0].line_number, 3);
        assert_eq!(hits[0].matches[0].context, "second\ntarget last");
    }

    #[test]
    fn context_is_truncated_to_200_chars() {
        let dir = root();
        let long_line = "x".repeat(300);
        save_note(dir.path(), "note.md", &format!("{}target", long_line)).unwrap();

        let hits = search_notes(dir.path(), "target");
        assert_eq!(hits[0].matches[0].context.chars().count(), 200);
    }

    #[test]
    fn matches_are_capped_at_three_per_note() {
        let dir = root();
        let body = (1..=6)
            .map(|n| format!("target on line {}", n))
            .collect::<Vec<_>>()
            .join("\n");
        save_note(dir.path(), "note.md", &body).unwrap();

        let hits = search_notes(dir.path(), "target");
        assert_eq!(hits[0].matches.len(), 3);
        // First three in file order.
        assert_eq!(hits[0].matches[0].line_number, 1);
        assert_eq!(hits[0].matches[1].line_number, 2);
        assert_eq!(hits[0].matches[2].line_number, 3);
    }

    #[test]
    fn single_line_note_context_is_just_that_line() {
        let dir = root();
        save_note(dir.path(), "note.md", "only target line").unwrap();

        let hits = search_notes(dir.path(), "target");
        assert_eq!(hits[0].matches[0].context, "only target line");
    }
}
