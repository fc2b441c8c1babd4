//! Front-matter parsing, heading extraction, and TOC skimming.
//!
//! This crate holds the parsing core of Skimdex. Every consumer of exported
//! docset files — the index builder, the document peeker, the sanitizer —
//! goes through the single front-matter implementation here, configured via
//! [`frontmatter::ParserOptions`] instead of growing its own dialect.
//!
//! # Modules
//!
//! - [`frontmatter`]: tolerant line-oriented header parsing
//! - [`headings`]: heading extraction with explicit-anchor pairing
//! - [`toc`]: bounded Table of Contents scanning
//! - [`peek`]: streaming per-file metadata snapshot
//! - [`stream`]: the line-source seam shared by the streaming parsers
//!
//! # Example
//!
//! ```rust
//! use skimdex_content::frontmatter::{parse_lines, ParserOptions};
//! use skimdex_content::headings::collect_headings;
//!
//! let lines = [
//!     "---",
//!     "title: Demo",
//!     "---",
//!     "<a id=\"demo-section\"></a>",
//!     "## Demo Section",
//! ];
//! let parsed = parse_lines(&lines, &ParserOptions::default());
//! assert_eq!(parsed.front_matter.get_str("title"), Some("Demo"));
//!
//! let headings = collect_headings(&lines, parsed.consumed);
//! assert_eq!(headings[0].anchor, "demo-section");
//! ```

pub mod frontmatter;
pub mod headings;
pub mod peek;
pub mod stream;
pub mod toc;

// Re-export key types and functions
pub use frontmatter::{parse_lines, parse_stream, FrontMatter, ParserOptions, Value};
pub use headings::{collect_headings, HeadingRecord};
pub use peek::{peek_markdown, PeekOptions, PeekResult};
pub use stream::{IoLines, LineSource, SliceLines};
pub use toc::{scan_toc, TocBlock, DEFAULT_MAX_LINES, TOC_MARKER};
