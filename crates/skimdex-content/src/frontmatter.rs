//! Front-matter extraction from exported docset files.
//!
//! Front matter is metadata at the start of a document, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Foundation
//! docset_version: 123
//! key_sections:
//!   - Overview
//!   - Details
//! ---
//!
//! ## Table of Contents
//! ```
//!
//! This is not a YAML parser. Exported headers are frequently malformed or
//! cut short, so the parser is a tolerant line-by-line reader: it classifies
//! each line as a list item, a `key: value` pair, or noise, and never fails.
//! A missing closing delimiter consumes the rest of the input; unparseable
//! lines are skipped.
//!
//! One implementation serves every caller. The index builder and the
//! sanitizer run it flat; the document peeker enables
//! [`ParserOptions::allow_nested_mapping`] to additionally fold indented
//! `key: value` lines under their parent key (the `sanitizer:` block written
//! by the sanitize operation is the main producer of that shape).
//!
//! # Usage
//!
//! ```rust
//! use skimdex_content::frontmatter::{parse_lines, ParserOptions};
//!
//! let lines = ["---", "title: Demo", "doc_count: 3", "---", "body"];
//! let parsed = parse_lines(&lines, &ParserOptions::default());
//!
//! assert!(parsed.has_front_matter());
//! assert_eq!(parsed.front_matter.get_str("title"), Some("Demo"));
//! assert_eq!(parsed.front_matter.get_int("doc_count"), Some(3));
//! assert_eq!(parsed.consumed, 4); // body starts at line 4
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stream::LineSource;
use skimdex_core::Result;

/// Header delimiter line.
pub const DELIMITER: &str = "---";

/// A front-matter value.
///
/// Scalars that fully parse as integers become [`Value::Int`]; an empty
/// value, `[]`, or `null` becomes an empty [`Value::List`] ready to receive
/// item lines; nested mappings only appear when
/// [`ParserOptions::allow_nested_mapping`] is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer scalar
    Int(i64),
    /// String scalar
    Scalar(String),
    /// Ordered sequence of strings
    List(Vec<String>),
    /// Nested mapping (peek variant only)
    Map(BTreeMap<String, NestedValue>),
}

/// A value inside a nested mapping: one level only, scalar or sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedValue {
    /// String scalar
    Scalar(String),
    /// Ordered sequence of strings
    List(Vec<String>),
}

/// Parsed front-matter mapping.
///
/// Keys are unique; a key present with an empty value holds an empty
/// sequence. Immutable once returned from a parse call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    map: BTreeMap<String, Value>,
}

impl FrontMatter {
    /// True when no keys were parsed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Raw value lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// String scalar lookup. Integers are not coerced.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.map.get(key) {
            Some(Value::Scalar(s)) => Some(s),
            _ => None,
        }
    }

    /// Integer scalar lookup.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.map.get(key) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Scalar lookup rendered to a string (integers included).
    pub fn get_display(&self, key: &str) -> Option<String> {
        match self.map.get(key) {
            Some(Value::Scalar(s)) => Some(s.clone()),
            Some(Value::Int(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Sequence lookup. Missing keys and non-sequence values yield an empty
    /// vec.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.map.get(key) {
            Some(Value::List(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Iterate over entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.map.iter()
    }
}

/// Parser capability flags.
///
/// The defaults give the flat dialect shared by the index builder and the
/// sanitizer. The peeker turns on `allow_nested_mapping`.
#[derive(Debug, Clone, Default)]
pub struct ParserOptions {
    /// Fold indented `key: value` lines under their top-level parent,
    /// converting the parent's sequence into a nested mapping.
    pub allow_nested_mapping: bool,
}

impl ParserOptions {
    /// Options for the peek path.
    pub fn nested() -> Self {
        Self {
            allow_nested_mapping: true,
        }
    }
}

/// Result of parsing a header from a slice of lines.
#[derive(Debug, Clone, Default)]
pub struct HeaderParse {
    /// Parsed mapping; empty when absent or content-free.
    pub front_matter: FrontMatter,
    /// Number of leading lines consumed (opening and closing delimiters
    /// included). Body content starts at this index.
    pub consumed: usize,
    /// Whether an opening delimiter was found at all.
    pub had_delimiter: bool,
}

impl HeaderParse {
    /// True when a delimiter was present and at least one key parsed.
    pub fn has_front_matter(&self) -> bool {
        self.had_delimiter && !self.front_matter.is_empty()
    }
}

/// Result of parsing a header from a line stream.
#[derive(Debug, Clone, Default)]
pub struct StreamedHeader {
    /// Parsed mapping; empty when absent or content-free.
    pub front_matter: FrontMatter,
    /// Raw header lines between the delimiters (delimiters excluded).
    pub raw_lines: Vec<String>,
    /// A look-ahead line consumed while probing for the opening delimiter.
    /// Callers scanning further content must process this line first.
    pub carry: Option<String>,
}

/// Parse front matter from a slice of document lines.
///
/// If the first line is not a `---` delimiter, reports no front matter and
/// consumes nothing. Otherwise consumes lines until the closing delimiter or
/// end of input, whichever comes first. Never fails: malformed lines are
/// skipped.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], options: &ParserOptions) -> HeaderParse {
    let Some(first) = lines.first() else {
        return HeaderParse::default();
    };
    if first.as_ref().trim() != DELIMITER {
        return HeaderParse::default();
    }

    let mut state = HeaderState::new(options);
    let mut idx = 1;
    while idx < lines.len() {
        let raw = lines[idx].as_ref();
        idx += 1;
        if raw.trim() == DELIMITER {
            break;
        }
        state.feed(raw);
    }

    HeaderParse {
        front_matter: state.finish(),
        consumed: idx,
        had_delimiter: true,
    }
}

/// Parse front matter from a line stream, pulling only the header prefix.
///
/// The first line is consumed to probe for the opening delimiter; if it is
/// not one, it is returned as [`StreamedHeader::carry`] so the caller can
/// resume scanning without losing it. Raw header lines are captured for
/// callers that report them (the peeker).
pub fn parse_stream<S: LineSource>(
    source: &mut S,
    options: &ParserOptions,
) -> Result<StreamedHeader> {
    let mut out = StreamedHeader::default();

    let Some(first) = source.next_line()? else {
        return Ok(out);
    };
    if first.trim() != DELIMITER {
        out.carry = Some(first);
        return Ok(out);
    }

    let mut state = HeaderState::new(options);
    while let Some(raw) = source.next_line()? {
        if raw.trim() == DELIMITER {
            break;
        }
        out.raw_lines.push(raw.clone());
        state.feed(&raw);
    }

    out.front_matter = state.finish();
    Ok(out)
}

// ============================================================================
// Line classification
// ============================================================================

/// Per-parse state: the mapping under construction plus the append targets.
///
/// `current_key` is the most recent top-level key and receives `- ` item
/// lines. `parent_key`/`nested_key` only participate when nested mappings
/// are enabled.
struct HeaderState<'a> {
    map: BTreeMap<String, Value>,
    current_key: Option<String>,
    parent_key: Option<String>,
    nested_key: Option<String>,
    options: &'a ParserOptions,
}

impl<'a> HeaderState<'a> {
    fn new(options: &'a ParserOptions) -> Self {
        Self {
            map: BTreeMap::new(),
            current_key: None,
            parent_key: None,
            nested_key: None,
            options,
        }
    }

    fn finish(self) -> FrontMatter {
        FrontMatter { map: self.map }
    }

    /// Classify one header line. Order matters: nested handling first, then
    /// list items, then `key: value`, then noise.
    fn feed(&mut self, raw: &str) {
        let stripped = raw.trim();
        let indent = raw.len() - raw.trim_start_matches(' ').len();

        if self.options.allow_nested_mapping && indent > 0 {
            if let Some(parent) = self.parent_key.clone() {
                if self.feed_nested(&parent, stripped) {
                    return;
                }
            }
        }
        self.nested_key = None;

        if let Some(item) = stripped.strip_prefix("- ") {
            if let Some(key) = self.current_key.clone() {
                self.append_item(&key, item.trim());
                return;
            }
        }

        // A colon anywhere makes this a key: value line, whatever the
        // indentation. Re-parsing a sanitized header in flat mode therefore
        // surfaces nested keys (generated_at, toc_depth) at the top level.
        if let Some((key, value)) = raw.split_once(':') {
            let key = key.trim().to_string();
            let value = value.trim();
            self.current_key = Some(key.clone());
            if indent == 0 {
                self.parent_key = Some(key.clone());
            }
            self.map.insert(key, parse_scalar(value));
            return;
        }

        // Anything else is noise, skipped without complaint.
    }

    /// Indented-line handling under an active parent. Returns true when the
    /// line was consumed here.
    fn feed_nested(&mut self, parent: &str, stripped: &str) -> bool {
        let Some(entry) = self.map.get_mut(parent) else {
            return false;
        };
        match entry {
            Value::List(items) => {
                if let Some(item) = stripped.strip_prefix("- ") {
                    items.push(item.trim().to_string());
                    return true;
                }
                if let Some((key, value)) = stripped.split_once(':') {
                    // The parent stops being a sequence: its indented body
                    // turned out to be a mapping. Items collected so far are
                    // discarded, matching the shape the producer intended.
                    let key = key.trim().to_string();
                    let value = value.trim();
                    let nested = if value.is_empty() {
                        NestedValue::List(Vec::new())
                    } else {
                        NestedValue::Scalar(value.to_string())
                    };
                    let mut map = BTreeMap::new();
                    map.insert(key.clone(), nested);
                    *entry = Value::Map(map);
                    self.nested_key = Some(key);
                    return true;
                }
                false
            }
            Value::Map(map) => {
                if let Some(item) = stripped.strip_prefix("- ") {
                    if let Some(nested_key) = self.nested_key.clone() {
                        let slot = map
                            .entry(nested_key)
                            .or_insert_with(|| NestedValue::List(Vec::new()));
                        let promoted = match slot {
                            NestedValue::List(items) => {
                                items.push(item.trim().to_string());
                                None
                            }
                            NestedValue::Scalar(prev) => {
                                Some(vec![std::mem::take(prev), item.trim().to_string()])
                            }
                        };
                        if let Some(items) = promoted {
                            *slot = NestedValue::List(items);
                        }
                    }
                    // An item with no nested key to attach to is dropped.
                    return true;
                }
                if let Some((key, value)) = stripped.split_once(':') {
                    let key = key.trim().to_string();
                    let value = value.trim();
                    let nested = if value.is_empty() {
                        NestedValue::List(Vec::new())
                    } else {
                        NestedValue::Scalar(value.to_string())
                    };
                    map.insert(key.clone(), nested);
                    self.nested_key = Some(key);
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    /// Append an item to a top-level key, promoting scalars to sequences.
    ///
    /// A scalar-valued key stays appendable until the next `key: value`
    /// line: the scalar becomes the first element of the sequence.
    fn append_item(&mut self, key: &str, item: &str) {
        let entry = self
            .map
            .entry(key.to_string())
            .or_insert_with(|| Value::List(Vec::new()));
        let promoted = match entry {
            Value::List(items) => {
                items.push(item.to_string());
                None
            }
            Value::Scalar(prev) => Some(vec![std::mem::take(prev), item.to_string()]),
            Value::Int(prev) => Some(vec![prev.to_string(), item.to_string()]),
            Value::Map(_) => None,
        };
        if let Some(items) = promoted {
            *entry = Value::List(items);
        }
    }
}

/// Scalar conversion: empty, `[]`, and `null` start an empty sequence;
/// anything that fully parses as an integer becomes one; the rest stays a
/// string.
fn parse_scalar(value: &str) -> Value {
    if value.is_empty() || value == "[]" || value == "null" {
        return Value::List(Vec::new());
    }
    match value.parse::<i64>() {
        Ok(n) => Value::Int(n),
        Err(_) => Value::Scalar(value.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
