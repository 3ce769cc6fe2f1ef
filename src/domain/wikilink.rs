//! Extraction of `[[Target]]` wiki-link tokens from note text.

use once_cell::sync::Lazy;
use regex::Regex;

static WIKI_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("wiki-link pattern is valid"));

/// Returns the targets of all `[[Target]]` tokens in order of appearance.
///
/// Duplicates are preserved. Nesting is not interpreted: the pattern
/// captures everything up to the first closing bracket.
pub fn extract_wiki_links(text: &str) -> Vec<String> {
    WIKI_LINK
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
