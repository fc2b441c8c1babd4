//! Listing and substring search over a built index.
//!
//! Pure functions over [`DocIndex`]: no I/O, no ranking. Search is
//! case-insensitive substring containment over heading texts and key-section
//! names, deduplicated by `(path, anchor)` so the same link is never
//! reported twice.

use std::collections::HashSet;

use crate::entry::DocIndex;
use skimdex_core::slug::slugify;

/// One summary line per entry, in index order.
pub fn list_entries(index: &DocIndex) -> Vec<String> {
    index
        .entries
        .iter()
        .map(|entry| {
            format!(
                "{} — {} (exported {}, doc_count={})",
                entry.title, entry.path, entry.exported_at, entry.doc_count
            )
        })
        .collect()
}

/// Case-insensitive substring search over headings and key sections.
///
/// Results follow entry order, then heading order, then key-section order.
/// Key-section anchors are derived with the same slug rule as headings, so
/// a key section naming a slug-anchored heading collapses into one result.
pub fn search_entries(index: &DocIndex, term: &str) -> Vec<String> {
    let term_lower = term.to_lowercase();
    let mut results = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for entry in &index.entries {
        for heading in &entry.headings {
            if heading.text.to_lowercase().contains(&term_lower) {
                let key = format!("{}#{}", entry.path, heading.anchor);
                if !seen.insert(key.clone()) {
                    continue;
                }
                results.push(format!("{}: {} — {}", entry.title, heading.text, key));
            }
        }
        for section in &entry.key_sections {
            if section.to_lowercase().contains(&term_lower) {
                let key = format!("{}#{}", entry.path, slugify(section));
                if !seen.insert(key.clone()) {
                    continue;
                }
                results.push(format!("{}: {} — {}", entry.title, section, key));
            }
        }
    }

    results
}

// ============================================================================
// Tests
// ============================================================================
