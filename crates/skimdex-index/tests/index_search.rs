//! End-to-end index tests: build from a docs directory, persist, search.

use std::path::Path;

use tempfile::TempDir;

use skimdex_index::{build_index, ensure_index, load_index, search_entries};

fn write_doc(root: &Path, name: &str, content: &str) {
    std::fs::create_dir_all(root).unwrap();
    std::fs::write(root.join(name), content).unwrap();
}

const DEMO: &str = "---\n\
title: Demo\n\
docset_version: 123\n\
exported_at: 2025-11-12T00:00:00Z\n\
doc_count: 1\n\
file_size: 100\n\
key_sections:\n\
\x20 - Demo Section\n\
---\n\
## Table of Contents\n\
- [Demo Section](#demo-section)\n\
<a id=\"demo-section\"></a>\n\
## Demo Section\n";

#[test]
fn test_build_then_search_round_trip() {
    let tmp = TempDir::new().unwrap();
    let docs_root = tmp.path().join("docs");
    let index_path = tmp.path().join("build/index.json");
    write_doc(&docs_root, "demo.md", DEMO);

    let index = build_index(&docs_root, &index_path).unwrap();
    assert!(index_path.exists());
    assert_eq!(index.entries.len(), 1);

    let entry = &index.entries[0];
    assert_eq!(entry.title, "Demo");
    assert_eq!(entry.doc_count, 1);
    assert_eq!(entry.key_sections, vec!["Demo Section"]);
    let demo_heading = entry
        .headings
        .iter()
        .find(|h| h.text == "Demo Section")
        .expect("Demo Section heading indexed");
    assert_eq!(demo_heading.anchor, "demo-section");
    assert_eq!(demo_heading.level, 2);

    let results = search_entries(&index, "demo");
    assert!(results.iter().any(|r| r.contains("Demo Section")));
}

#[test]
fn test_search_over_reloaded_index_matches_built() {
    let tmp = TempDir::new().unwrap();
    let docs_root = tmp.path().join("docs");
    let index_path = tmp.path().join("index.json");
    write_doc(&docs_root, "demo.md", DEMO);

    let built = build_index(&docs_root, &index_path).unwrap();
    let loaded = load_index(&index_path).unwrap();

    assert_eq!(search_entries(&built, "demo"), search_entries(&loaded, "demo"));
}

#[test]
fn test_ensure_index_recovers_from_missing_file() {
    let tmp = TempDir::new().unwrap();
    let docs_root = tmp.path().join("docs");
    let index_path = tmp.path().join("state/index.json");
    write_doc(&docs_root, "demo.md", DEMO);

    // First use: no index file yet, ensure builds one.
    let index = ensure_index(&docs_root, &index_path).unwrap();
    assert!(index_path.exists());

    let results = search_entries(&index, "demo section");
    assert!(!results.is_empty());
}
