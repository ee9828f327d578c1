// ABOUTME: Text normalizer: flattens the rewritten tree and canonicalizes whitespace.
// ABOUTME: Fenced code segments are masked during collapsing so their interiors survive verbatim.

use dom_query::Document;
use once_cell::sync::Lazy;
use regex::Regex;

static FENCED_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());
static PADDED_NEWLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\n *").unwrap());
static EXTRA_NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Placeholder for a masked fenced block. NUL cannot come out of the HTML
/// parser's text nodes, so it is safe as an interior sentinel.
const FENCE_SENTINEL: char = '\u{0}';

/// Concatenate all remaining text in document order.
pub fn flatten(doc: &Document) -> String {
    let body = doc.select("body");
    if body.exists() {
        body.text().to_string()
    } else {
        doc.select("html").text().to_string()
    }
}

/// Collapse whitespace into canonical paragraph/line structure.
///
/// Outside fenced segments: non-newline whitespace runs become one space,
/// spaces touching a newline are stripped, runs of 3+ newlines become a
/// paragraph break, and the whole result is trimmed. Running the normalizer
/// on its own output is a no-op.
pub fn normalize(text: &str) -> String {
    let (masked, blocks) = mask_fences(text);
    let step = INLINE_WS_RE.replace_all(&masked, " ");
    let step = PADDED_NEWLINE_RE.replace_all(&step, "\n");
    let step = EXTRA_NEWLINES_RE.replace_all(&step, "\n\n");
    unmask_fences(step.trim(), &blocks)
}

/// Replace each fenced block with a sentinel, returning the masked text and
/// the blocks in order of appearance.
pub(crate) fn mask_fences(text: &str) -> (String, Vec<String>) {
    if !text.contains("```") {
        return (text.to_string(), Vec::new());
    }
    let mut blocks = Vec::new();
    let masked = FENCED_BLOCK_RE
        .replace_all(text, |caps: &regex::Captures| {
            blocks.push(caps[0].to_string());
            FENCE_SENTINEL.to_string()
        })
        .into_owned();
    (masked, blocks)
}

/// Substitute masked fenced blocks back in order.
pub(crate) fn unmask_fences(text: &str, blocks: &[String]) -> String {
    if blocks.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + blocks.iter().map(String::len).sum::<usize>());
    let mut pending = blocks.iter();
    for ch in text.chars() {
        if ch == FENCE_SENTINEL {
            if let Some(block) = pending.next() {
                out.push_str(block);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_interior_whitespace_runs() {
        assert_eq!(normalize("a  \t  b"), "a b");
    }

    #[test]
    fn collapses_newline_runs_to_paragraph_break() {
        assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn strips_space_padding_around_newlines() {
        assert_eq!(normalize("a   \n   b"), "a\nb");
    }

    #[test]
    fn trims_whole_result() {
        assert_eq!(normalize("  \n a \n  "), "a");
    }

    #[test]
    fn newline_runs_with_interleaved_spaces_still_collapse() {
        assert_eq!(normalize("a\n \n \n b"), "a\n\nb");
    }

    #[test]
    fn fenced_interiors_survive_untouched() {
        let text = "intro\n\n```\nline1\n  line2\n```\n\noutro";
        let normalized = normalize(text);
        assert!(normalized.contains("```\nline1\n  line2\n```"));
        assert!(normalized.starts_with("intro"));
        assert!(normalized.ends_with("outro"));
    }

    #[test]
    fn idempotent_on_plain_text() {
        let once = normalize("  a   b\n\n\n\nc \n d  ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn idempotent_around_fences() {
        let once = normalize("x\n\n\n```\n  keep   this\n```\n\n\n\ny");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn flatten_concatenates_in_document_order() {
        let doc = Document::from("<html><body><p>one</p><p>two</p></body></html>");
        let flat = flatten(&doc);
        let one = flat.find("one").unwrap();
        let two = flat.find("two").unwrap();
        assert!(one < two);
    }

    #[test]
    fn mask_and_unmask_round_trip() {
        let text = "a\n```\ncode\n```\nb\n```\nmore\n```\nc";
        let (masked, blocks) = mask_fences(text);
        assert_eq!(blocks.len(), 2);
        assert!(!masked.contains("code"));
        assert_eq!(unmask_fences(&masked, &blocks), text);
    }

    #[test]
    fn unpaired_fence_is_left_in_prose() {
        let (masked, blocks) = mask_fences("a\n```\nno closer");
        assert!(blocks.is_empty());
        assert!(masked.contains("no closer"));
    }
}
