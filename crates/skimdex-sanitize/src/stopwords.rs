//! Stopword phrases for section filtering.
//!
//! Exported docsets repeat boilerplate section titles ("Discussion",
//! "Parameters", "See Also") in every document. The sanitizer drops those
//! from key-section lists and TOC blocks. Unlike a search-engine stopword
//! list this is a small, closed set of phrases matched against whole titles,
//! case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use skimdex_sanitize::stopwords::StopwordSet;
//!
//! let set = StopwordSet::default();
//! assert!(set.contains("See Also"));
//! assert!(!set.contains("Error Handling"));
//!
//! let extended = StopwordSet::with_extra(["Deprecated"]);
//! assert!(extended.contains("deprecated"));
//! ```

use std::collections::HashSet;

/// Boilerplate section titles dropped by default.
pub const STOPWORDS_DEFAULT: [&str; 5] = [
    "return value",
    "discussion",
    "special considerations",
    "parameters",
    "see also",
];

/// Case-insensitive phrase set.
#[derive(Clone)]
pub struct StopwordSet {
    phrases: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self {
            phrases: STOPWORDS_DEFAULT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StopwordSet {
    /// The default set plus caller-supplied phrases (lowercased on entry).
    pub fn with_extra<S: AsRef<str>>(extra: impl IntoIterator<Item = S>) -> Self {
        let mut phrases: HashSet<String> =
            STOPWORDS_DEFAULT.iter().map(|s| s.to_string()).collect();
        for phrase in extra {
            phrases.insert(phrase.as_ref().to_lowercase());
        }
        Self { phrases }
    }

    /// Whole-phrase membership, case-insensitive.
    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(&phrase.to_lowercase())
    }

    /// Number of phrases in the set.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// True when the set is empty (only possible via an emptied custom set).
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrases in sorted order, for stable output in the sanitizer stamp.
    pub fn sorted(&self) -> Vec<&str> {
        let mut phrases: Vec<&str> = self.phrases.iter().map(String::as_str).collect();
        phrases.sort_unstable();
        phrases
    }
}

impl std::fmt::Debug for StopwordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopwordSet")
            .field("phrase_count", &self.phrases.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
