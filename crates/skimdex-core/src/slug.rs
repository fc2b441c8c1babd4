//! Anchor slugs and fallback titles.
//!
//! Provides the slug rule shared by heading extraction, key-section search,
//! and anything else that needs a URL-safe identifier derived from display
//! text. The same rule must be used everywhere so that a key section and the
//! heading it names collide on the same anchor.

use std::path::Path;

/// Derive a URL-safe slug from display text.
///
/// Performs the following transformations:
/// 1. Keeps alphanumerics, lowercased
/// 2. Maps `/`, `-`, and `_` to `-`
/// 3. Drops every other character
/// 4. Collapses runs of `-` and trims leading/trailing `-`
///
/// An input that reduces to nothing yields the literal `"section"`, so a
/// heading always has a non-empty anchor.
///
/// Slugs are a fixed point: slugifying a slug returns it unchanged.
///
/// Note that whitespace is dropped, not mapped: `"Demo Section"` becomes
/// `"demosection"`. Anchors with word separators come from explicit
/// `<a id="…">` markers in the documents, not from this rule.
///
/// # Examples
///
/// ```
/// use skimdex_core::slug::slugify;
///
/// assert_eq!(slugify("Demo Section"), "demosection");
/// assert_eq!(slugify("init(coder:)"), "initcoder");
/// assert_eq!(slugify("URL/Session_Config"), "url-session-config");
/// assert_eq!(slugify("???"), "section");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if matches!(ch, '/' | '-' | '_') {
            slug.push('-');
        }
    }
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "section".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Fallback title from a file path's stem.
///
/// Extracts the file stem (filename without extension) as-is; no case or
/// separator normalization is applied, since the stem stands in for a
/// human-facing title. Returns `None` if the path has no file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use skimdex_core::slug::title_from_path;
///
/// assert_eq!(
///     title_from_path(Path::new("docs/foundation.md")),
///     Some("foundation".to_string())
/// );
/// assert_eq!(title_from_path(Path::new("/")), None);
/// ```
pub fn title_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // slugify tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Overview"), "overview");
    }

    #[test]
    fn test_slugify_spaces_dropped() {
        // Whitespace is dropped outright; dashes come only from /-_
        assert_eq!(slugify("Demo Section"), "demosection");
    }

    #[test]
    fn test_slugify_separators() {
        assert_eq!(slugify("URL/Session_Config"), "url-session-config");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("a-_-b"), "a-b");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("-edge-"), "edge");
        assert_eq!(slugify("/leading"), "leading");
    }

    #[test]
    fn test_slugify_drops_punctuation() {
        assert_eq!(slugify("init(coder:)"), "initcoder");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify(""), "section");
        assert_eq!(slugify("???"), "section");
        assert_eq!(slugify("---"), "section");
    }

    #[test]
    fn test_slugify_idempotent() {
        for input in ["Demo Section", "URL/Session_Config", "???", "Already-Slugged"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    // -------------------------------------------------------------------------
    // title_from_path tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_title_from_path_simple() {
        assert_eq!(
            title_from_path(Path::new("docs/foundation.md")),
            Some("foundation".to_string())
        );
    }

    #[test]
    fn test_title_from_path_keeps_case() {
        assert_eq!(
            title_from_path(Path::new("/docs/CoreAudio.md")),
            Some("CoreAudio".to_string())
        );
    }

    #[test]
    fn test_title_from_path_no_stem() {
        assert_eq!(title_from_path(Path::new("/")), None);
    }
}
