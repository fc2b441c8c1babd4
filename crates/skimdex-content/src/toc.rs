//! Bounded Table of Contents scanning.
//!
//! The TOC block in an exported document starts at a literal
//! `## Table of Contents` heading and runs until the next level-2 heading.
//! Files can be very large, so the scan carries a hard line budget: once the
//! budget is spent the scan stops and reports truncation, whether or not the
//! block was found or finished.

use crate::stream::LineSource;
use skimdex_core::Result;

/// The exact (trimmed) heading line that opens a TOC block.
pub const TOC_MARKER: &str = "## Table of Contents";

/// Default scan budget, in lines.
pub const DEFAULT_MAX_LINES: usize = 800;

/// Outcome of a TOC scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocBlock {
    /// Collected block lines, marker first. Empty when the marker was never
    /// reached.
    pub lines: Vec<String>,
    /// True when the line budget ran out before the block ended.
    pub truncated: bool,
}

impl TocBlock {
    /// True when the marker was found within the scan budget.
    pub fn found(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// Scan for the TOC block after front matter.
///
/// `carry` is the look-ahead line the front-matter parser may have consumed;
/// it is processed before pulling from `source`. A `max_lines` of 0 disables
/// the budget. Blank lines inside the block are skipped, and collected lines
/// keep their original indentation.
pub fn scan_toc<S: LineSource>(
    source: &mut S,
    carry: Option<String>,
    max_lines: usize,
) -> Result<TocBlock> {
    let mut block = TocBlock::default();
    let mut started = false;
    let mut scanned = 0usize;
    let mut carry = carry;

    loop {
        let raw = match carry.take() {
            Some(line) => line,
            None => match source.next_line()? {
                Some(line) => line,
                None => break,
            },
        };

        scanned += 1;
        if max_lines > 0 && scanned > max_lines {
            block.truncated = true;
            break;
        }

        let stripped = raw.trim();
        if !started {
            if stripped == TOC_MARKER {
                started = true;
                block.lines.push(TOC_MARKER.to_string());
            }
            continue;
        }
        if stripped.starts_with("## ") && stripped != TOC_MARKER {
            break;
        }
        if stripped.is_empty() {
            continue;
        }
        block.lines.push(raw);
    }

    Ok(block)
}

// ============================================================================
// Tests
// ============================================================================
