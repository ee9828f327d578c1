// ABOUTME: DOM passes of the conversion pipeline: content filtering and structural rewriting.
// ABOUTME: Shared helpers for tag lookup, text escaping, and whitespace collapsing live here.

pub mod convert;
pub mod filter;

use dom_query::{NodeRef, Selection};

/// Lowercased tag name of the first node in a selection, if it is an element.
pub(crate) fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_lowercase())
}

/// Lowercased tag name of a node, if it is an element.
pub(crate) fn node_tag(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_lowercase())
}

/// Escape a text fragment so that re-parsing it yields a single text node.
///
/// Replacement fragments travel through the HTML parser; without this, text
/// containing `<` or `&` would come back as markup.
pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Collapse runs of whitespace to single spaces and trim.
pub(crate) fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
