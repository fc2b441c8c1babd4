//! Heading extraction with explicit-anchor pairing.
//!
//! Exported docsets mark linkable headings with a standalone anchor line
//! immediately before the heading:
//!
//! ```markdown
//! <a id="url-session"></a>
//! ## URLSession
//! ```
//!
//! The marker binds to the next heading only; a heading with no preceding
//! marker gets a slug derived from its text.

use regex::Regex;
use serde::{Deserialize, Serialize};

use skimdex_core::slug::slugify;

/// One heading occurrence, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    /// Heading text with the `#` prefix and surrounding whitespace removed.
    pub text: String,
    /// Explicit anchor id, or a slug derived from the text.
    pub anchor: String,
    /// Heading depth, clamped to 6.
    pub level: u8,
}

/// Collect headings from document lines, starting after the front-matter
/// offset.
///
/// A line matching `<a id="…"></a>` (after trim) sets a pending anchor that
/// the next heading consumes; intervening body text does not clear it. A
/// heading is any line whose left-trimmed content starts with `#` and has
/// non-empty text after the hashes.
pub fn collect_headings<S: AsRef<str>>(lines: &[S], start: usize) -> Vec<HeadingRecord> {
    let anchor_pattern = Regex::new(r#"^<a id="([^"]+)"></a>"#).expect("Invalid anchor regex");

    let mut headings = Vec::new();
    let mut pending_anchor: Option<String> = None;

    for raw in lines.iter().skip(start) {
        let raw = raw.as_ref();
        let stripped = raw.trim();
        if let Some(caps) = anchor_pattern.captures(stripped) {
            pending_anchor = Some(caps[1].to_string());
            continue;
        }

        let content = raw.trim_start();
        if !content.starts_with('#') {
            continue;
        }
        let level = content.chars().take_while(|&c| c == '#').count();
        let text = content[level..].trim();
        if text.is_empty() {
            continue;
        }

        let anchor = pending_anchor.take().unwrap_or_else(|| slugify(text));
        headings.push(HeadingRecord {
            text: text.to_string(),
            anchor,
            level: level.min(6) as u8,
        });
    }

    headings
}

// ============================================================================
// Tests
// ============================================================================
