//! Key-section filtering and derivation.
//!
//! Key sections surviving the stopword filter go back into the rebuilt
//! header. When nothing survives, replacements are derived from the
//! document's own TOC-style link lines.

use regex::Regex;

use crate::stopwords::StopwordSet;

/// Cap on derived replacement sections.
const DERIVE_LIMIT: usize = 10;

/// Drop stopword titles and `Overview`, deduplicating in order.
pub fn filter_key_sections(sections: &[String], stopwords: &StopwordSet) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for title in sections {
        let lower = title.to_lowercase();
        if stopwords.contains(title) || lower == "overview" {
            continue;
        }
        if cleaned.contains(title) {
            continue;
        }
        cleaned.push(title.clone());
    }
    cleaned
}

/// Derive up to 10 section titles from `- [Title](…)` link lines.
///
/// Applied when filtering left no key sections at all; the same stopword,
/// `Overview`, and dedup rules apply.
pub fn derive_key_sections(body: &[String], stopwords: &StopwordSet) -> Vec<String> {
    let link_pattern = Regex::new(r"^- \[(.+?)\]").expect("Invalid TOC link regex");

    let mut derived: Vec<String> = Vec::new();
    for line in body {
        let Some(caps) = link_pattern.captures(line.trim()) else {
            continue;
        };
        let title = caps[1].to_string();
        let lower = title.to_lowercase();
        if stopwords.contains(&title) || lower == "overview" {
            continue;
        }
        if derived.contains(&title) {
            continue;
        }
        derived.push(title);
        if derived.len() >= DERIVE_LIMIT {
            break;
        }
    }
    derived
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ------------------------------------------------------------------------
    // filter_key_sections
    // ------------------------------------------------------------------------

    #[test]
    fn test_filter_drops_stopwords_any_case() {
        let sections = strings(&["Topics", "DISCUSSION", "See Also", "Classes"]);
        let cleaned = filter_key_sections(&sections, &StopwordSet::default());
        assert_eq!(cleaned, strings(&["Topics", "Classes"]));
    }

    #[test]
    fn test_filter_drops_overview_any_case() {
        let sections = strings(&["Overview", "overview", "Topics"]);
        let cleaned = filter_key_sections(&sections, &StopwordSet::default());
        assert_eq!(cleaned, strings(&["Topics"]));
    }

    #[test]
    fn test_filter_deduplicates_in_order() {
        let sections = strings(&["Topics", "Classes", "Topics"]);
        let cleaned = filter_key_sections(&sections, &StopwordSet::default());
        assert_eq!(cleaned, strings(&["Topics", "Classes"]));
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_key_sections(&[], &StopwordSet::default()).is_empty());
    }

    // ------------------------------------------------------------------------
    // derive_key_sections
    // ------------------------------------------------------------------------

    #[test]
    fn test_derive_from_link_lines() {
        let body = strings(&[
            "## Table of Contents",
            "- [Overview](#overview)",
            "- [Topics](#topics)",
            "- [Discussion](#discussion)",
            "- [Classes](#classes)",
            "plain text",
        ]);
        let derived = derive_key_sections(&body, &StopwordSet::default());
        assert_eq!(derived, strings(&["Topics", "Classes"]));
    }

    #[test]
    fn test_derive_honors_limit() {
        let body: Vec<String> = (0..20).map(|i| format!("- [Section {i}](#s{i})")).collect();
        let derived = derive_key_sections(&body, &StopwordSet::default());
        assert_eq!(derived.len(), 10);
        assert_eq!(derived[0], "Section 0");
        assert_eq!(derived[9], "Section 9");
    }

    #[test]
    fn test_derive_trims_indented_lines() {
        // Indented link lines count too once trimmed.
        let body = strings(&["  - [Nested](#nested)"]);
        let derived = derive_key_sections(&body, &StopwordSet::default());
        assert_eq!(derived, strings(&["Nested"]));
    }

    #[test]
    fn test_derive_ignores_non_link_bullets() {
        let body = strings(&["- plain bullet", "- [Real](#real)"]);
        let derived = derive_key_sections(&body, &StopwordSet::default());
        assert_eq!(derived, strings(&["Real"]));
    }
}
