//! Streaming metadata peek for a single document.
//!
//! `peek_markdown` reads just enough of a file to report its front matter
//! and, on request, its Table of Contents block. Without the TOC request
//! only the header prefix is read; with it, reading stops at the TOC
//! boundary or the scan budget. The remainder of the file is never
//! materialized.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::frontmatter::{self, FrontMatter, ParserOptions};
use crate::stream::IoLines;
use crate::toc::{self, DEFAULT_MAX_LINES};
use skimdex_core::{Error, Result};

/// Knobs for a peek call.
#[derive(Debug, Clone)]
pub struct PeekOptions {
    /// Also scan for the TOC block after the front matter.
    pub include_toc: bool,
    /// Line budget for the TOC scan (0 disables the budget).
    pub max_lines: usize,
}

impl Default for PeekOptions {
    fn default() -> Self {
        Self {
            include_toc: false,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// Metadata snapshot of one document.
///
/// `toc` is `None` when TOC extraction was not requested; it serializes as
/// `null` so consumers can distinguish "not asked" from "not found".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeekResult {
    /// The path as given by the caller.
    pub path: String,
    /// True when at least one front-matter key was parsed.
    pub has_front_matter: bool,
    /// Parsed header mapping (nested dialect).
    pub front_matter: FrontMatter,
    /// Raw header lines between the delimiters.
    pub front_matter_raw: Vec<String>,
    /// True when the TOC marker was reached within the scan budget.
    pub toc_found: bool,
    /// True when the scan budget ran out first.
    pub toc_truncated: bool,
    /// Collected TOC lines, marker first.
    pub toc: Option<Vec<String>>,
}

/// Peek one document's front matter and optional TOC block.
///
/// Fails when the file cannot be opened (a missing path surfaces as a
/// not-found error; batch callers report it and continue). Parse anomalies
/// inside the file never fail.
pub fn peek_markdown(path: &Path, options: &PeekOptions) -> Result<PeekResult> {
    let file = File::open(path).map_err(|e| Error::io_with_path(e, path))?;
    let mut source = IoLines::new(BufReader::new(file), path);

    let header = frontmatter::parse_stream(&mut source, &ParserOptions::nested())?;

    let mut toc_found = false;
    let mut toc_truncated = false;
    let mut toc_lines = None;
    if options.include_toc {
        let block = toc::scan_toc(&mut source, header.carry, options.max_lines)?;
        toc_found = block.found();
        toc_truncated = block.truncated;
        toc_lines = Some(block.lines);
    }

    log::debug!(
        "peeked {}: {} header keys, toc_found={}",
        path.display(),
        header.front_matter.len(),
        toc_found
    );

    Ok(PeekResult {
        path: path.display().to_string(),
        has_front_matter: !header.front_matter.is_empty(),
        front_matter: header.front_matter,
        front_matter_raw: header.raw_lines,
        toc_found,
        toc_truncated,
        toc: toc_lines,
    })
}

// ============================================================================
// Tests
// ============================================================================
