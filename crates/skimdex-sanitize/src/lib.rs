//! Docset export sanitizer.
//!
//! Large docset exports carry noisy headers and deeply nested Tables of
//! Contents. This crate rewrites a document in place (or to a new path):
//! the front matter is rebuilt in canonical field order, key sections pass
//! through a stopword filter (with derivation from TOC links as fallback),
//! and the TOC block is trimmed to a maximum nesting depth.
//!
//! # Modules
//!
//! - [`stopwords`]: the phrase set driving section filtering
//! - [`sections`]: key-section filtering and derivation
//! - [`toc`]: TOC block trimming
//! - [`header`]: canonical front-matter rebuilding
//! - [`sanitize`]: the whole-file operation
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skimdex_sanitize::{sanitize_file, SanitizeOptions};
//!
//! let options = SanitizeOptions::default();
//! sanitize_file(Path::new("docs/export.md"), Path::new("docs/export.md"), &options)?;
//! # Ok::<(), skimdex_core::Error>(())
//! ```

pub mod header;
pub mod sanitize;
pub mod sections;
pub mod stopwords;
pub mod toc;

// Re-export key types and functions
pub use sanitize::{sanitize_file, SanitizeOptions};
pub use stopwords::{StopwordSet, STOPWORDS_DEFAULT};
