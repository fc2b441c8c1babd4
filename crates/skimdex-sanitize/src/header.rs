//! Canonical front-matter rebuilding.
//!
//! The sanitizer does not echo the header it parsed; it re-emits known
//! fields in a fixed order, appends the filtered key sections, and stamps a
//! `sanitizer:` block recording when and with what settings the document
//! was rewritten.

use chrono::Utc;

use crate::stopwords::StopwordSet;
use skimdex_content::frontmatter::FrontMatter;

/// Scalar header fields, in canonical output order.
const SCALAR_FIELDS: [&str; 5] = [
    "title",
    "docset_version",
    "exported_at",
    "doc_count",
    "file_size",
];

/// Cap on emitted key sections.
const KEY_SECTION_LIMIT: usize = 20;

/// Number of key sections summarized into the `summary` field.
const SUMMARY_LIMIT: usize = 6;

/// Build the rewritten header block, delimiters included.
///
/// Scalar fields absent from the parsed header are omitted, not emitted
/// empty. `key_sections:` is always present, holding at most 20 items.
pub fn build_front_matter(
    meta: &FrontMatter,
    key_sections: &[String],
    toc_depth: usize,
    stopwords: &StopwordSet,
) -> Vec<String> {
    let mut lines = vec!["---".to_string()];

    for field in SCALAR_FIELDS {
        if let Some(value) = meta.get_display(field) {
            if !value.is_empty() {
                lines.push(format!("{field}: {value}"));
            }
        }
    }

    let summary: Vec<&str> = key_sections
        .iter()
        .take(SUMMARY_LIMIT)
        .map(String::as_str)
        .collect();
    if !summary.is_empty() {
        lines.push(format!("summary: {}", summary.join(", ")));
    }

    lines.push("key_sections:".to_string());
    for section in key_sections.iter().take(KEY_SECTION_LIMIT) {
        lines.push(format!("  - {section}"));
    }

    lines.push("sanitizer:".to_string());
    lines.push(format!("  generated_at: {}", Utc::now().to_rfc3339()));
    lines.push(format!("  toc_depth: {toc_depth}"));
    lines.push("  stopwords:".to_string());
    for phrase in stopwords.sorted() {
        lines.push(format!("    - {phrase}"));
    }

    lines.push("---".to_string());
    lines
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use skimdex_content::frontmatter::{parse_lines, ParserOptions};

    fn meta(lines: &[&str]) -> FrontMatter {
        parse_lines(lines, &ParserOptions::default()).front_matter
    }

    fn sections(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_canonical_field_order() {
        let fm = meta(&[
            "---",
            "doc_count: 3",
            "title: Demo",
            "file_size: 100",
            "exported_at: 2025-11-12T00:00:00Z",
            "docset_version: 123",
            "---",
        ]);
        let lines = build_front_matter(&fm, &sections(&["Topics"]), 2, &StopwordSet::default());

        let fields: Vec<&str> = lines
            .iter()
            .filter_map(|l| l.split_once(':').map(|(k, _)| k))
            .filter(|k| SCALAR_FIELDS.contains(k))
            .collect();
        assert_eq!(
            fields,
            vec!["title", "docset_version", "exported_at", "doc_count", "file_size"]
        );
    }

    #[test]
    fn test_absent_fields_omitted() {
        let fm = meta(&["---", "title: Demo", "---"]);
        let lines = build_front_matter(&fm, &[], 2, &StopwordSet::default());
        assert!(lines.iter().any(|l| l == "title: Demo"));
        assert!(!lines.iter().any(|l| l.starts_with("docset_version")));
        assert!(!lines.iter().any(|l| l.starts_with("summary")));
    }

    #[test]
    fn test_summary_joins_first_six_sections() {
        let fm = meta(&["---", "title: Demo", "---"]);
        let names: Vec<String> = (1..=8).map(|i| format!("S{i}")).collect();
        let lines = build_front_matter(&fm, &names, 2, &StopwordSet::default());
        assert!(lines.contains(&"summary: S1, S2, S3, S4, S5, S6".to_string()));
    }

    #[test]
    fn test_key_sections_capped_at_twenty() {
        let fm = meta(&["---", "title: Demo", "---"]);
        let names: Vec<String> = (0..30).map(|i| format!("S{i}")).collect();
        let lines = build_front_matter(&fm, &names, 2, &StopwordSet::default());
        let items = lines.iter().filter(|l| l.starts_with("  - ")).count();
        assert_eq!(items, 20);
    }

    #[test]
    fn test_key_sections_header_present_even_when_empty() {
        let fm = meta(&["---", "title: Demo", "---"]);
        let lines = build_front_matter(&fm, &[], 2, &StopwordSet::default());
        assert!(lines.contains(&"key_sections:".to_string()));
    }

    #[test]
    fn test_sanitizer_stamp_block() {
        let fm = meta(&["---", "title: Demo", "---"]);
        let lines = build_front_matter(&fm, &[], 3, &StopwordSet::default());

        let stamp_at = lines.iter().position(|l| l == "sanitizer:").unwrap();
        assert!(lines[stamp_at + 1].starts_with("  generated_at: "));
        assert_eq!(lines[stamp_at + 2], "  toc_depth: 3");
        assert_eq!(lines[stamp_at + 3], "  stopwords:");
        assert_eq!(lines[stamp_at + 4], "    - discussion");
        assert_eq!(*lines.last().unwrap(), "---");
    }

    #[test]
    fn test_delimiters_bound_the_block() {
        let fm = meta(&["---", "title: Demo", "---"]);
        let lines = build_front_matter(&fm, &[], 2, &StopwordSet::default());
        assert_eq!(lines[0], "---");
        assert_eq!(*lines.last().unwrap(), "---");
    }
}
