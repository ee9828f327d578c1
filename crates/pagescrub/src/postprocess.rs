// ABOUTME: Post-processor: strips residual feedback-widget boilerplate and drops headings with no body.
// ABOUTME: Both rewrites operate on the normalized text with fenced segments masked out.

use regex::Regex;

use crate::rules::ScrubRules;
use crate::text::{mask_fences, unmask_fences};

/// Delete known UI feedback phrases and keyboard-shortcut glyphs.
///
/// Patterns are applied case-insensitively against the prose; fenced code is
/// exempt.
pub fn remove_feedback(text: &str, rules: &ScrubRules) -> String {
    let (mut masked, blocks) = mask_fences(text);
    for pattern in &rules.feedback_patterns {
        if let Ok(re) = Regex::new(&format!("(?i){}", pattern)) {
            masked = re.replace_all(&masked, "").into_owned();
        }
    }
    unmask_fences(&masked, &blocks)
}

/// Drop heading lines that introduce no content.
///
/// A heading is elided when the next non-blank line is end-of-text or
/// another heading. This runs on the final line sequence, after all
/// conversions, since heading adjacency only exists there. Lines inside
/// fenced code are never treated as headings.
pub fn drop_empty_headings(text: &str) -> String {
    let (masked, blocks) = mask_fences(text);
    let lines: Vec<&str> = masked.split('\n').collect();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if is_heading(line) {
            let mut j = i + 1;
            while j < lines.len() && lines[j].trim().is_empty() {
                j += 1;
            }
            if j >= lines.len() || is_heading(lines[j]) {
                i += 1;
                continue;
            }
        }
        kept.push(line);
        i += 1;
    }

    unmask_fences(&kept.join("\n"), &blocks)
}

fn is_heading(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rules() -> ScrubRules {
        ScrubRules::default()
    }

    #[test]
    fn removes_helpful_prompt_case_insensitively() {
        let out = remove_feedback("Intro\n\nwas this page helpful? Yes No\n\nOutro", &rules());
        assert!(!out.to_lowercase().contains("helpful"));
        assert!(!out.contains("Yes"));
        assert!(out.contains("Intro"));
        assert!(out.contains("Outro"));
    }

    #[test]
    fn removes_edit_this_page_to_end_of_line() {
        let out = remove_feedback("Body\nEdit this page on GitHub\nMore", &rules());
        assert!(!out.contains("GitHub"));
        assert!(out.contains("Body"));
        assert!(out.contains("More"));
    }

    #[test]
    fn removes_shortcut_glyphs() {
        let out = remove_feedback("Press ⌘K to search", &rules());
        assert!(!out.contains("⌘K"));
    }

    #[test]
    fn fenced_code_is_exempt_from_feedback_patterns() {
        let text = "prose\n\n```\nRate this page.internal() call\n```";
        let out = remove_feedback(text, &rules());
        assert!(out.contains("Rate this page.internal() call"));
    }

    #[test]
    fn heading_followed_by_heading_is_dropped() {
        let text = "# Kept\n\nbody\n\n## Empty\n\n## Also kept\n\nmore body";
        let out = drop_empty_headings(text);
        assert!(!out.contains("## Empty"));
        assert!(out.contains("# Kept"));
        assert!(out.contains("## Also kept"));
    }

    #[test]
    fn trailing_heading_is_dropped() {
        let out = drop_empty_headings("body\n\n## Dangling\n\n");
        assert!(!out.contains("Dangling"));
        assert!(out.contains("body"));
    }

    #[test]
    fn heading_with_following_content_is_kept() {
        let text = "## Section\n\ncontent";
        assert_eq!(drop_empty_headings(text), text);
    }

    #[test]
    fn consecutive_empty_headings_all_drop() {
        let out = drop_empty_headings("# A\n\n## B\n\n### C");
        assert_eq!(out.trim(), "");
    }

    #[test]
    fn heading_before_code_block_is_kept() {
        let text = "## Example\n\n```\n# not a heading\n```";
        let out = drop_empty_headings(text);
        assert!(out.contains("## Example"));
        assert!(out.contains("# not a heading"));
    }
}
