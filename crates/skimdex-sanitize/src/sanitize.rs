//! Whole-file sanitize operation.
//!
//! Re-parses a document's front matter, trims its TOC block, filters its
//! key sections (deriving replacements when none survive), and writes the
//! rebuilt document to the output path.

use std::path::Path;

use crate::header::build_front_matter;
use crate::sections::{derive_key_sections, filter_key_sections};
use crate::stopwords::StopwordSet;
use crate::toc::rebuild_toc;
use skimdex_content::frontmatter::{parse_lines, ParserOptions};
use skimdex_content::toc::TOC_MARKER;
use skimdex_core::{Error, Result};

/// Sanitizer knobs.
#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    /// Maximum TOC nesting depth to keep.
    pub toc_depth: usize,
    /// Phrase set for section filtering.
    pub stopwords: StopwordSet,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            toc_depth: 2,
            stopwords: StopwordSet::default(),
        }
    }
}

/// Sanitize one document, writing the result to `output`.
///
/// `output` may equal `input` for in-place rewriting. The body outside the
/// TOC block is preserved verbatim; the header is rebuilt canonically.
pub fn sanitize_file(input: &Path, output: &Path, options: &SanitizeOptions) -> Result<()> {
    let content = std::fs::read_to_string(input).map_err(|e| Error::io_with_path(e, input))?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();

    let parsed = parse_lines(&lines, &ParserOptions::default());
    let mut rest: Vec<String> = lines[parsed.consumed..].to_vec();

    // Trim the TOC in place, but only when the block is properly bounded by
    // a following level-2 heading.
    if let Some((toc_start, toc_end)) = locate_toc(&rest) {
        let trimmed = rebuild_toc(
            &rest[toc_start + 1..toc_end],
            options.toc_depth,
            &options.stopwords,
        );
        let mut rebuilt = rest[..=toc_start].to_vec();
        rebuilt.extend(trimmed);
        rebuilt.extend_from_slice(&rest[toc_end..]);
        rest = rebuilt;
    }

    let mut key_sections = filter_key_sections(
        &parsed.front_matter.get_string_list("key_sections"),
        &options.stopwords,
    );
    if key_sections.is_empty() {
        key_sections = derive_key_sections(&rest, &options.stopwords);
        if !key_sections.is_empty() {
            log::debug!(
                "derived {} key sections for {}",
                key_sections.len(),
                input.display()
            );
        }
    }

    let header = build_front_matter(
        &parsed.front_matter,
        &key_sections,
        options.toc_depth,
        &options.stopwords,
    );

    let mut sanitized = header.join("\n");
    if !rest.is_empty() {
        sanitized.push('\n');
        sanitized.push_str(&rest.join("\n"));
    }
    sanitized.push('\n');

    std::fs::write(output, sanitized).map_err(|e| Error::io_with_path(e, output))?;
    log::info!("sanitized {} -> {}", input.display(), output.display());
    Ok(())
}

/// Find the TOC block bounds in body lines: the marker index and the index
/// of the next level-2 heading after it. A later marker before any heading
/// re-anchors the block.
fn locate_toc(body: &[String]) -> Option<(usize, usize)> {
    let mut toc_start: Option<usize> = None;
    for (i, line) in body.iter().enumerate() {
        if line.trim() == TOC_MARKER {
            toc_start = Some(i);
            continue;
        }
        if let Some(start) = toc_start {
            if line.starts_with("## ") && i > start {
                return Some((start, i));
            }
        }
    }
    None
}

// ============================================================================
// Tests
// ============================================================================
