//! TOC block trimming.
//!
//! Rewrites the lines between `## Table of Contents` and the next level-2
//! heading: entries nested too deep, stopword titles, and nested `Overview`
//! entries are dropped. Nesting depth is computed from indentation as
//! `indent / 2 + 1`, i.e. two spaces per level.

use regex::Regex;

use crate::stopwords::StopwordSet;

/// Nesting depth of a TOC line with the given indentation.
pub fn depth_for_indent(indent: usize) -> usize {
    indent / 2 + 1
}

/// Filter a TOC block down to `toc_depth` levels.
///
/// Only `- [Title](…)` link lines survive; anything else inside the block
/// (prose, stray bullets) is dropped. Kept lines are right-trimmed but keep
/// their indentation.
pub fn rebuild_toc(block: &[String], toc_depth: usize, stopwords: &StopwordSet) -> Vec<String> {
    let link_pattern = Regex::new(r"^(\s*)- \[(.+?)\]").expect("Invalid TOC link regex");

    let mut result = Vec::new();
    for line in block {
        let Some(caps) = link_pattern.captures(line) else {
            continue;
        };
        let depth = depth_for_indent(caps[1].len());
        let title = caps[2].trim().to_string();
        let lower = title.to_lowercase();

        if depth > toc_depth {
            continue;
        }
        if stopwords.contains(&title) {
            continue;
        }
        if lower == "overview" && depth > 1 {
            continue;
        }
        result.push(line.trim_end().to_string());
    }
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ------------------------------------------------------------------------
    // Depth arithmetic
    // ------------------------------------------------------------------------

    #[test]
    fn test_depth_for_indent() {
        assert_eq!(depth_for_indent(0), 1);
        assert_eq!(depth_for_indent(2), 2);
        assert_eq!(depth_for_indent(3), 2); // odd indents round down
        assert_eq!(depth_for_indent(4), 3);
    }

    // ------------------------------------------------------------------------
    // rebuild_toc
    // ------------------------------------------------------------------------

    #[test]
    fn test_depth_trimming() {
        let block = strings(&[
            "- [Top](#top)",
            "  - [Second](#second)",
            "    - [Third](#third)",
        ]);
        let kept = rebuild_toc(&block, 2, &StopwordSet::default());
        assert_eq!(kept, strings(&["- [Top](#top)", "  - [Second](#second)"]));
    }

    #[test]
    fn test_stopword_titles_dropped_at_any_depth() {
        let block = strings(&["- [Discussion](#discussion)", "  - [See Also](#see-also)"]);
        let kept = rebuild_toc(&block, 3, &StopwordSet::default());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_overview_kept_at_top_level_only() {
        let block = strings(&["- [Overview](#overview)", "  - [Overview](#overview-2)"]);
        let kept = rebuild_toc(&block, 3, &StopwordSet::default());
        assert_eq!(kept, strings(&["- [Overview](#overview)"]));
    }

    #[test]
    fn test_non_link_lines_dropped() {
        let block = strings(&["prose", "- bare bullet", "- [Kept](#kept)"]);
        let kept = rebuild_toc(&block, 2, &StopwordSet::default());
        assert_eq!(kept, strings(&["- [Kept](#kept)"]));
    }

    #[test]
    fn test_kept_lines_right_trimmed() {
        let block = strings(&["- [Kept](#kept)   "]);
        let kept = rebuild_toc(&block, 2, &StopwordSet::default());
        assert_eq!(kept, strings(&["- [Kept](#kept)"]));
    }

    #[test]
    fn test_custom_stopwords_apply() {
        let block = strings(&["- [History](#history)", "- [Kept](#kept)"]);
        let set = StopwordSet::with_extra(["History"]);
        let kept = rebuild_toc(&block, 2, &set);
        assert_eq!(kept, strings(&["- [Kept](#kept)"]));
    }
}
