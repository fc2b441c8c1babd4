//! Index building and JSON persistence.
//!
//! The index is rebuilt whole: every `*.md` under the docs root is parsed,
//! documents without front matter are skipped, and the result is written
//! over the previous index file. Loading commands go through
//! [`ensure_index`], which builds on first use when no index file exists.

use std::path::Path;

use chrono::Utc;

use crate::entry::{DocEntry, DocIndex};
use skimdex_content::frontmatter::{self, ParserOptions};
use skimdex_content::headings::collect_headings;
use skimdex_core::{Error, Result};

/// Recognized document extension.
const DOC_GLOB: &str = "*.md";

/// Enumerate the documents under a docs root, in sorted path order.
pub fn enumerate_docs(docs_root: &Path) -> Result<Vec<std::path::PathBuf>> {
    let pattern = docs_root.join(DOC_GLOB);
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::operation(format!("Non-UTF-8 docs root: {}", docs_root.display())))?;

    let mut paths = Vec::new();
    let matches =
        glob::glob(pattern).map_err(|e| Error::operation(format!("Bad glob pattern: {e}")))?;
    for entry in matches {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => log::warn!("Skipping unreadable path during enumeration: {e}"),
        }
    }
    paths.sort();
    Ok(paths)
}

/// Build the index from every document under `docs_root` and write it to
/// `index_path` (parent directories are created as needed).
///
/// Documents with missing or empty front matter are skipped, not errors.
/// The same inputs produce equivalent entries on every run; only the
/// `generated_at` stamp differs.
pub fn build_index(docs_root: &Path, index_path: &Path) -> Result<DocIndex> {
    let mut entries = Vec::new();
    for path in enumerate_docs(docs_root)? {
        let content =
            std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        let lines: Vec<&str> = content.lines().collect();

        let parsed = frontmatter::parse_lines(&lines, &ParserOptions::default());
        if !parsed.has_front_matter() {
            log::debug!("no front matter, skipping {}", path.display());
            continue;
        }

        let headings = collect_headings(&lines, parsed.consumed);
        entries.push(DocEntry::from_front_matter(
            &path,
            &parsed.front_matter,
            headings,
        ));
    }

    let index = DocIndex {
        generated_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        docs_root: docs_root.display().to_string(),
        entries,
    };
    write_index(&index, index_path)?;

    log::info!(
        "indexed {} documents from {}",
        index.entries.len(),
        docs_root.display()
    );
    Ok(index)
}

/// Write the index as pretty-printed JSON.
pub fn write_index(index: &DocIndex, index_path: &Path) -> Result<()> {
    if let Some(parent) = index_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }
    }
    let content = serde_json::to_string_pretty(index)
        .map_err(|e| Error::operation(format!("Failed to serialize index: {e}")))?;
    std::fs::write(index_path, content).map_err(|e| Error::io_with_path(e, index_path))?;
    Ok(())
}

/// Load a previously written index file.
pub fn load_index(index_path: &Path) -> Result<DocIndex> {
    let content =
        std::fs::read_to_string(index_path).map_err(|e| Error::io_with_path(e, index_path))?;
    serde_json::from_str(&content).map_err(|e| Error::parse(format!("Invalid index JSON: {e}")))
}

/// Load the index, building it first when the file does not exist yet.
pub fn ensure_index(docs_root: &Path, index_path: &Path) -> Result<DocIndex> {
    if index_path.exists() {
        return load_index(index_path);
    }
    build_index(docs_root, index_path)
}

// ============================================================================
// Tests
// ============================================================================
