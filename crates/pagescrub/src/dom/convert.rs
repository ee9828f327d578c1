// ABOUTME: Structural converter: ordered in-place rewrites turning elements into markdown text fragments.
// ABOUTME: Pass order matters; later passes consume text produced by earlier ones.

use dom_query::{Document, NodeRef, Selection};

use crate::dom::{collapse_ws, escape_text, node_tag};
use crate::rules::ScrubRules;

/// Pull the text of the first `<title>` element and remove it from the tree.
///
/// The caller renders the returned text as the top-level heading after the
/// body has been flattened.
pub fn extract_title(doc: &Document) -> Option<String> {
    let node = doc.select("title").nodes().first().cloned()?;
    let sel = Selection::from(node);
    let text = collapse_ws(&sel.text());
    sel.remove();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Unwrap every anchor in place, keeping its children.
///
/// The visible link text survives; the hyperlink markup does not.
pub fn strip_links(doc: &Document) {
    doc.select("html").strip_elements(&["a"]);
}

/// Unwrap inline emphasis/code-span wrappers, inserting a space on either
/// side when the adjacent sibling text would otherwise concatenate with the
/// wrapper's content.
///
/// Each element is rewritten individually and the tree re-queried, so
/// wrappers nested inside wrappers get their own spacing decision once they
/// surface.
pub fn space_inline(doc: &Document, rules: &ScrubRules) {
    for tag in &rules.inline_tags {
        loop {
            let Some(node) = doc.select(tag.as_str()).nodes().first().cloned() else {
                break;
            };
            let pad_before = needs_space_before(&node);
            let pad_after = needs_space_after(&node);
            let sel = Selection::from(node);
            let mut replacement = sel.inner_html().to_string();
            if pad_before {
                replacement.insert(0, ' ');
            }
            if pad_after {
                replacement.push(' ');
            }
            if replacement.is_empty() {
                sel.remove();
            } else {
                sel.replace_with_html(replacement.as_str());
            }
        }
    }
}

fn needs_space_before(node: &NodeRef) -> bool {
    match node.prev_sibling() {
        Some(prev) if prev.is_text() => {
            let text = prev.text();
            matches!(text.chars().last(), Some(c) if !c.is_whitespace())
        }
        _ => false,
    }
}

fn needs_space_after(node: &NodeRef) -> bool {
    match node.next_sibling() {
        Some(next) if next.is_text() => {
            let text = next.text();
            matches!(text.chars().next(), Some(c) if !c.is_whitespace())
        }
        _ => false,
    }
}

/// Replace each `<pre>` block with its raw text wrapped in fence delimiters.
///
/// Interior whitespace is carried verbatim; the normalizer later exempts
/// fenced segments from collapsing.
pub fn convert_code_blocks(doc: &Document) {
    loop {
        let Some(node) = doc.select("pre").nodes().first().cloned() else {
            break;
        };
        let sel = Selection::from(node);
        let code = sel.text().to_string();
        let fragment = format!("\n\n```\n{}\n```\n\n", code);
        sel.replace_with_html(escape_text(&fragment).as_str());
    }
}

/// Replace h1..h6 with `#`-prefixed text fragments surrounded by blank lines.
///
/// A heading with no text content is deleted outright rather than emitted
/// as an empty fragment.
pub fn convert_headings(doc: &Document) {
    for level in 1..=6usize {
        let tag = format!("h{}", level);
        loop {
            let Some(node) = doc.select(tag.as_str()).nodes().first().cloned() else {
                break;
            };
            let sel = Selection::from(node);
            let text = collapse_ws(&sel.text());
            if text.is_empty() {
                sel.remove();
            } else {
                let fragment = format!("\n\n{} {}\n\n", "#".repeat(level), text);
                sel.replace_with_html(escape_text(&fragment).as_str());
            }
        }
    }
}

/// Convert lists to markdown with nesting support.
///
/// Only top-level lists are processed here; lists nested inside another
/// list are rendered recursively by their ancestor. Ordered items number
/// from 1 within their own list. An item contributing no direct text and
/// no nested content is omitted.
pub fn convert_lists(doc: &Document, rules: &ScrubRules) {
    convert_top_level_lists(doc, "ul", false, rules);
    convert_top_level_lists(doc, "ol", true, rules);
}

fn convert_top_level_lists(doc: &Document, tag: &str, ordered: bool, rules: &ScrubRules) {
    loop {
        let candidates = doc.select(tag);
        let Some(node) = candidates
            .nodes()
            .iter()
            .cloned()
            .find(|n| !has_list_ancestor(n))
        else {
            break;
        };
        let lines = render_list(&node, 0, ordered, rules);
        let sel = Selection::from(node);
        if lines.is_empty() {
            sel.remove();
        } else {
            let fragment = format!("\n{}\n", lines.join("\n"));
            sel.replace_with_html(escape_text(&fragment).as_str());
        }
    }
}

fn has_list_ancestor(node: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if let Some(tag) = node_tag(&ancestor) {
            if tag == "ul" || tag == "ol" {
                return true;
            }
        }
        current = ancestor.parent();
    }
    false
}

fn render_list(list: &NodeRef, depth: usize, ordered: bool, rules: &ScrubRules) -> Vec<String> {
    let mut lines = Vec::new();
    // Ordinals follow item position within this list, rendered or not.
    let mut index = 0usize;
    for child in list.children() {
        if node_tag(&child).as_deref() != Some("li") {
            continue;
        }
        index += 1;
        lines.extend(render_item(&child, depth, ordered, index, rules));
    }
    lines
}

fn render_item(
    item: &NodeRef,
    depth: usize,
    ordered: bool,
    index: usize,
    rules: &ScrubRules,
) -> Vec<String> {
    let mut lines = Vec::new();

    let direct = direct_text(item);
    if !direct.is_empty() {
        let indent = rules.list_indent.repeat(depth);
        let marker = if ordered {
            format!("{}.", index)
        } else {
            "-".to_string()
        };
        lines.push(format!("{}{} {}", indent, marker, direct));
    }

    for child in item.children() {
        match node_tag(&child).as_deref() {
            Some("ul") => lines.extend(render_list(&child, depth + 1, false, rules)),
            Some("ol") => lines.extend(render_list(&child, depth + 1, true, rules)),
            _ => {}
        }
    }

    lines
}

/// Collect an item's direct text: immediate text children plus the text of
/// immediate non-list children, never text living inside a nested list.
fn direct_text(item: &NodeRef) -> String {
    let mut parts: Vec<String> = Vec::new();
    for child in item.children() {
        if child.is_text() {
            let text = child.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        } else if child.is_element() {
            match node_tag(&child).as_deref() {
                Some("ul") | Some("ol") => continue,
                _ => {}
            }
            let text = collapse_ws(&text_outside_lists(&child));
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }
    parts.join(" ").trim().to_string()
}

/// Text of a subtree with any nested lists excluded.
fn text_outside_lists(node: &NodeRef) -> String {
    let sel = Selection::from(node.clone());
    if sel.select("ul, ol").is_empty() {
        return sel.text().to_string();
    }
    let shadow = Document::from(sel.html().to_string());
    shadow.select("ul, ol").remove();
    shadow.select("html").text().to_string()
}

/// Turn `<br>` into a single newline, then wrap block-level elements' text
/// in blank-line padding.
///
/// Line breaks go first so a break inside a paragraph survives into the
/// paragraph's text snapshot. Blocks are rewritten outermost-first, so a
/// nested block collapses into the snapshot of its ancestor.
pub fn space_blocks(doc: &Document, rules: &ScrubRules) {
    loop {
        let Some(node) = doc.select("br").nodes().first().cloned() else {
            break;
        };
        Selection::from(node).replace_with_html("\n");
    }

    for tag in &rules.block_tags {
        loop {
            let Some(node) = doc.select(tag.as_str()).nodes().first().cloned() else {
                break;
            };
            let sel = Selection::from(node);
            let text = sel.text().to_string();
            let fragment = format!("\n\n{}\n\n", text);
            sel.replace_with_html(escape_text(&fragment).as_str());
        }
    }
}
