//! Line sources for streaming parsers.
//!
//! The front-matter parser and TOC scanner consume lines one at a time and
//! may stop pulling at any point. [`LineSource`] captures that contract:
//! a finite, non-restartable sequence of lines, so a caller that stops early
//! never pays for the remainder of a large file.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use skimdex_core::{Error, Result};

/// A finite, non-restartable source of lines.
///
/// Lines are yielded without their trailing newline. Consumers may stop
/// pulling at any point without reading the remainder.
pub trait LineSource {
    /// Pull the next line. `Ok(None)` signals end of input.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// [`LineSource`] over any buffered reader.
///
/// Read failures carry the originating path for diagnostics.
pub struct IoLines<R: BufRead> {
    reader: R,
    path: PathBuf,
}

impl<R: BufRead> IoLines<R> {
    /// Wrap a buffered reader; `path` is only used in error context.
    pub fn new(reader: R, path: &Path) -> Self {
        Self {
            reader,
            path: path.to_path_buf(),
        }
    }
}

impl<R: BufRead> LineSource for IoLines<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| Error::io_with_path(e, &self.path))?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// In-memory [`LineSource`], used by tests and by callers that already hold
/// the lines.
pub struct SliceLines {
    iter: std::vec::IntoIter<String>,
}

impl SliceLines {
    /// Build from anything that yields string-like items.
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            iter: lines
                .iter()
                .map(|l| l.as_ref().to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineSource for SliceLines {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.iter.next())
    }
}

// ============================================================================
// Tests
// ============================================================================
