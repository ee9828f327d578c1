// ABOUTME: Render-need detector: flags documents that look like unrendered single-page-application shells.
// ABOUTME: Pure heuristic over the raw markup and a fresh parse; inconclusive always means false.

use aho_corasick::AhoCorasick;
use dom_query::{Document, Selection};

use crate::rules::ScrubRules;

/// Selector priority for locating the most plausible main-content container.
const CONTAINER_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[class*=\"main-content\"]",
    "[id*=\"content\"]",
];

/// Decide whether the document's visible content was never materialized and
/// a scripted render would be needed to obtain it.
///
/// The decision combines three signals:
/// 1. a cheap gate: none of the framework markers in the raw markup means no;
/// 2. the first main-content container holding fewer visible characters than
///    the threshold means yes;
/// 3. a well-known SPA root element that exists but is empty means yes.
///
/// The tree handed in must be a fresh parse of `raw_html`, untouched by any
/// filtering pass. False negatives and false positives are accepted
/// tradeoffs; this function never errors and reports `false` when
/// inconclusive.
pub fn looks_js_rendered(raw_html: &str, doc: &Document, rules: &ScrubRules) -> bool {
    if rules.framework_markers.is_empty() {
        return false;
    }
    let markers = match AhoCorasick::new(&rules.framework_markers) {
        Ok(ac) => ac,
        Err(_) => return false,
    };
    if !markers.is_match(raw_html) {
        return false;
    }

    if let Some(len) = main_container_text_len(doc) {
        if len < rules.min_content_len {
            return true;
        }
    }

    for id in &rules.spa_root_ids {
        let sel = doc.select(&format!("[id=\"{}\"]", id));
        if sel.exists() && sel.text().trim().is_empty() {
            return true;
        }
    }

    false
}

/// Visible character count of the first candidate container, by fixed
/// priority, after discarding nested scripts and styles. Only the first
/// match is inspected even when several candidates exist.
fn main_container_text_len(doc: &Document) -> Option<usize> {
    for css in CONTAINER_SELECTORS {
        let sel = doc.select(css);
        let Some(node) = sel.nodes().first().cloned() else {
            continue;
        };
        let container = Selection::from(node);
        let shadow = Document::from(container.html().to_string());
        shadow.select("script, style").remove();
        let text = shadow.select("html").text();
        let visible: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
        return Some(visible.chars().count());
    }
    None
}
