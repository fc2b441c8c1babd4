//! Index records and the front-matter defaulting step.
//!
//! `DocEntry::from_front_matter` is the single place where header keys map
//! to entry fields, so the schema coupling between the two lives in one
//! pure, independently testable function.

use std::path::Path;

use serde::{Deserialize, Serialize};

use skimdex_content::frontmatter::FrontMatter;
use skimdex_content::headings::HeadingRecord;
use skimdex_core::slug::title_from_path;

/// One document's indexed metadata plus its headings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocEntry {
    /// Path the document was enumerated under.
    pub path: String,
    /// Header title, or the filename stem when absent.
    pub title: String,
    /// Version stamp from the header; string or integer, kept as written.
    pub docset_version: serde_json::Value,
    /// Export timestamp from the header, empty when absent.
    pub exported_at: String,
    /// Document count from the header.
    pub doc_count: i64,
    /// Exported file size from the header (not measured on disk).
    pub file_size: i64,
    /// Key section names from the header, in header order.
    pub key_sections: Vec<String>,
    /// Headings in document order.
    pub headings: Vec<HeadingRecord>,
}

impl DocEntry {
    /// Assemble an entry from a parsed header, applying field defaults:
    /// title falls back to the filename stem, numeric fields to 0,
    /// `docset_version` to `"unknown"`, `key_sections` to empty.
    pub fn from_front_matter(
        path: &Path,
        front_matter: &FrontMatter,
        headings: Vec<HeadingRecord>,
    ) -> Self {
        let title = front_matter
            .get_display("title")
            .or_else(|| title_from_path(path))
            .unwrap_or_else(|| "untitled".to_string());

        let docset_version = front_matter
            .get("docset_version")
            .and_then(|v| serde_json::to_value(v).ok())
            .unwrap_or_else(|| serde_json::Value::String("unknown".to_string()));

        Self {
            path: path.display().to_string(),
            title,
            docset_version,
            exported_at: front_matter.get_display("exported_at").unwrap_or_default(),
            doc_count: front_matter.get_int("doc_count").unwrap_or(0),
            file_size: front_matter.get_int("file_size").unwrap_or(0),
            key_sections: front_matter.get_string_list("key_sections"),
            headings,
        }
    }
}

/// The whole index: one entry per document, in path order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocIndex {
    /// UTC build stamp, second precision.
    pub generated_at: String,
    /// Directory the entries were enumerated from.
    pub docs_root: String,
    /// Entries ordered by document path.
    pub entries: Vec<DocEntry>,
}

// ============================================================================
// Tests
// ============================================================================
