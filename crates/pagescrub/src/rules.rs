// ABOUTME: Fixed pattern tables driving the conversion pipeline and the render-need detector.
// ABOUTME: Held in one immutable ScrubRules value passed into each component, never ambient globals.

/// The rule tables consumed by the filter, converter, post-processor, and
/// render-need detector.
///
/// `ScrubRules::default()` supplies the production tables; tests construct
/// variants to exercise individual components in isolation.
#[derive(Debug, Clone)]
pub struct ScrubRules {
    /// Tags that never represent primary content; removed with their subtrees.
    pub excluded_tags: Vec<String>,
    /// Substrings that mark an element's class attribute as UI chrome.
    pub chrome_class_patterns: Vec<String>,
    /// Substrings that mark an element's id attribute as UI chrome.
    pub chrome_id_patterns: Vec<String>,
    /// Tags that must survive pattern matching regardless of class/id.
    pub protected_tags: Vec<String>,
    /// Inline wrappers that are unwrapped with spacing applied.
    pub inline_tags: Vec<String>,
    /// Block-level tags that get blank-line padding around their text.
    pub block_tags: Vec<String>,
    /// Case-insensitive regex patterns for feedback-widget boilerplate.
    pub feedback_patterns: Vec<String>,
    /// Substrings in raw markup that indicate a client-side framework.
    pub framework_markers: Vec<String>,
    /// Element ids that well-known SPA frameworks mount into.
    pub spa_root_ids: Vec<String>,
    /// Minimum visible characters for a main container to count as rendered.
    pub min_content_len: usize,
    /// Indentation emitted per list nesting level.
    pub list_indent: String,
}

impl Default for ScrubRules {
    fn default() -> Self {
        Self {
            excluded_tags: to_vec(&[
                "script", "style", "nav", "footer", "header", "aside", "table", "noscript",
                "iframe", "button",
            ]),
            chrome_class_patterns: to_vec(&[
                "sidebar",
                "toc",
                "table-of-contents",
                "breadcrumb",
                "navigation",
                "nav-",
                "menu",
                "search",
                "skip-to",
                "toolbar",
            ]),
            chrome_id_patterns: to_vec(&[
                "sidebar",
                "toc",
                "table-of-contents",
                "navigation",
                "breadcrumb",
                "menu",
                "search",
            ]),
            protected_tags: to_vec(&["body", "main", "article", "section"]),
            inline_tags: to_vec(&["code", "strong", "em", "b", "i", "span"]),
            block_tags: to_vec(&["p", "div", "section", "article", "blockquote"]),
            feedback_patterns: to_vec(&[
                r"Was this page helpful\??\s*",
                r"\bYes\s*No\b",
                r"YesNo\b",
                r"Rate this page.*",
                r"Give feedback.*",
                r"Edit this page.*",
                r"⌘[A-Z]",
            ]),
            framework_markers: to_vec(&[
                "/_app/immutable/",
                "__sveltekit",
                "__NEXT_DATA__",
                "id=\"__next\"",
                "window.__NUXT__",
                "ng-version=",
                "___gatsby",
                "webpackJsonp",
            ]),
            spa_root_ids: to_vec(&["app", "root", "__next", "___gatsby"]),
            min_content_len: 100,
            list_indent: "    ".to_string(),
        }
    }
}

fn to_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_populated() {
        let rules = ScrubRules::default();
        assert!(rules.excluded_tags.iter().any(|t| t == "script"));
        assert!(rules.chrome_class_patterns.iter().any(|p| p == "sidebar"));
        assert!(rules.protected_tags.iter().any(|t| t == "main"));
        assert_eq!(rules.min_content_len, 100);
        assert_eq!(rules.list_indent, "    ");
    }

    #[test]
    fn feedback_patterns_compile() {
        for pattern in ScrubRules::default().feedback_patterns {
            assert!(regex::Regex::new(&format!("(?i){}", pattern)).is_ok());
        }
    }
}
