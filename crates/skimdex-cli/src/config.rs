//! CLI defaults and path handling.
//!
//! Behavior is configured entirely through flags; there are no environment
//! variables. The constants here are the documented defaults.

use std::path::PathBuf;

/// Default directory containing exported docset files.
pub const DEFAULT_DOCS_ROOT: &str = "docs";

/// Default index file path.
pub const DEFAULT_INDEX_PATH: &str = ".skimdex/index.json";

/// Expand `~` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

// ============================================================================
// Tests
// ============================================================================
