// ABOUTME: Content filter: removes non-content tags and UI chrome identified by class/id patterns.
// ABOUTME: Mutates the document in place; a fixed set of structural tags is protected from pattern removal.

use dom_query::{Document, NodeRef, Selection};

use crate::dom::tag_name;
use crate::rules::ScrubRules;

/// Remove every element whose tag never represents primary content
/// (scripts, styles, navigation, tables, and friends), subtrees included.
///
/// Comment nodes carry no extractable text, so they can never surface in the
/// flattened output and need no dedicated pass.
pub fn remove_non_content(doc: &Document, rules: &ScrubRules) {
    if rules.excluded_tags.is_empty() {
        return;
    }
    let selector = rules.excluded_tags.join(", ");
    doc.select(&selector).remove();
}

/// Remove elements whose class or id marks them as UI chrome
/// (sidebars, tables of contents, breadcrumbs, menus, search widgets).
///
/// Matching is case-insensitive substring containment. Structural tags in
/// `rules.protected_tags` survive even when a pattern matches, so an
/// over-broad class name cannot delete the page's content container.
pub fn remove_ui_chrome(doc: &Document, rules: &ScrubRules) {
    let mut doomed: Vec<NodeRef> = Vec::new();

    collect_chrome(doc, "[class]", "class", &rules.chrome_class_patterns, rules, &mut doomed);
    collect_chrome(doc, "[id]", "id", &rules.chrome_id_patterns, rules, &mut doomed);

    // Removal happens after collection; removing an element whose ancestor
    // already went is a harmless no-op on a detached subtree.
    for node in doomed {
        Selection::from(node).remove();
    }
}

fn collect_chrome<'a>(
    doc: &'a Document,
    selector: &str,
    attr: &str,
    patterns: &[String],
    rules: &ScrubRules,
    doomed: &mut Vec<NodeRef<'a>>,
) {
    if patterns.is_empty() {
        return;
    }
    for node in doc.select(selector).nodes().iter().cloned() {
        let sel = Selection::from(node.clone());
        if let Some(tag) = tag_name(&sel) {
            if rules.protected_tags.iter().any(|t| *t == tag) {
                continue;
            }
        }
        let value = match sel.attr(attr) {
            Some(v) => v.to_lowercase(),
            None => continue,
        };
        if patterns.iter().any(|p| value.contains(p.as_str())) {
            doomed.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ScrubRules {
        ScrubRules::default()
    }

    #[test]
    fn removes_excluded_tags_with_subtrees() {
        let doc = Document::from(
            "<html><body><script>alert(1)</script><nav><a href=\"/\">Home</a></nav>\
             <p>Kept</p><table><tr><td>cell</td></tr></table></body></html>",
        );
        remove_non_content(&doc, &rules());
        let text = doc.select("body").text().to_string();
        assert!(!text.contains("alert"));
        assert!(!text.contains("Home"));
        assert!(!text.contains("cell"));
        assert!(text.contains("Kept"));
    }

    #[test]
    fn removes_chrome_by_class_pattern() {
        let doc = Document::from(
            "<html><body><div class=\"Left-Sidebar\">links</div>\
             <div class=\"content\">body text</div></body></html>",
        );
        remove_ui_chrome(&doc, &rules());
        let text = doc.select("body").text().to_string();
        assert!(!text.contains("links"));
        assert!(text.contains("body text"));
    }

    #[test]
    fn removes_chrome_by_id_pattern() {
        let doc = Document::from(
            "<html><body><div id=\"page-toc\">jump list</div><p>prose</p></body></html>",
        );
        remove_ui_chrome(&doc, &rules());
        let text = doc.select("body").text().to_string();
        assert!(!text.contains("jump list"));
        assert!(text.contains("prose"));
    }

    #[test]
    fn protected_tags_survive_pattern_match() {
        let doc = Document::from(
            "<html><body><main class=\"menu\"><p>primary</p></main></body></html>",
        );
        remove_ui_chrome(&doc, &rules());
        assert!(doc.select("main").exists());
        assert!(doc.select("body").text().contains("primary"));
    }

    #[test]
    fn nested_chrome_inside_removed_chrome_is_fine() {
        let doc = Document::from(
            "<html><body><div class=\"sidebar\"><div id=\"search-box\">find</div></div>\
             <p>kept</p></body></html>",
        );
        remove_ui_chrome(&doc, &rules());
        assert!(!doc.select("body").text().contains("find"));
        assert!(doc.select("body").text().contains("kept"));
    }

    #[test]
    fn no_matches_is_a_no_op() {
        let doc = Document::from("<html><body><p>plain page</p></body></html>");
        remove_non_content(&doc, &rules());
        remove_ui_chrome(&doc, &rules());
        assert_eq!(doc.select("body").text().trim(), "plain page");
    }
}
