// ABOUTME: ScrubResult struct holding the converted markdown and provenance flags for one document.
// ABOUTME: Assembles the final output: notice line, optional title heading, body.

use serde::{Deserialize, Serialize};

/// Notice emitted when the markup came from the headless-browser renderer.
pub const RENDERED_NOTICE: &str = "> [This file was converted from HTML rendered in a headless browser. Non-primary content has been removed while trying to preserve structure.]";

/// Notice emitted when the detector flagged the page but no rendering occurred.
pub const WARNING_NOTICE: &str = "> [This file is converted from HTML. Non-primary content has been removed while trying to preserve structure. Warning: this page appears to rely on JavaScript to render its main content, so the conversion may be incomplete.]";

/// Notice emitted for a plain conversion.
pub const PLAIN_NOTICE: &str = "> [This file is converted from HTML. Non-primary content has been removed while trying to preserve structure.]";

/// The result of converting one document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScrubResult {
    /// The URL or file path the markup came from.
    pub source: String,
    /// Title extracted from the document's `<title>`, if any.
    pub title: Option<String>,
    /// The final markdown: provenance notice, blank line, optional title
    /// heading, body.
    pub markdown: String,
    /// True when the render-need detector flagged the original markup.
    pub looks_js_rendered: bool,
    /// True when the markup was produced by the headless-browser renderer.
    pub rendered: bool,
    /// Whitespace-separated token count of the body.
    pub word_count: i32,
}

impl ScrubResult {
    /// Assemble a result from the pipeline output and provenance flags.
    pub fn assemble(
        source: impl Into<String>,
        title: Option<String>,
        body: &str,
        looks_js_rendered: bool,
        rendered: bool,
    ) -> Self {
        let notice = if rendered {
            RENDERED_NOTICE
        } else if looks_js_rendered {
            WARNING_NOTICE
        } else {
            PLAIN_NOTICE
        };

        let mut markdown = String::with_capacity(notice.len() + body.len() + 64);
        markdown.push_str(notice);
        markdown.push_str("\n\n");
        if let Some(ref title) = title {
            markdown.push_str("# ");
            markdown.push_str(title);
            markdown.push_str("\n\n");
        }
        markdown.push_str(body);
        let markdown = markdown.trim_end().to_string();

        Self {
            source: source.into(),
            title,
            markdown,
            looks_js_rendered,
            rendered,
            word_count: word_count(body),
        }
    }

    /// Returns true if the result carries no title and no body text.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.word_count == 0
    }
}

/// Count whitespace-separated tokens.
pub fn word_count(text: &str) -> i32 {
    text.split_whitespace().count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_notice_then_title_then_body() {
        let result = ScrubResult::assemble("page.html", Some("T".to_string()), "body", false, false);
        assert_eq!(
            result.markdown,
            format!("{}\n\n# T\n\nbody", PLAIN_NOTICE)
        );
        assert_eq!(result.word_count, 1);
    }

    #[test]
    fn warning_notice_when_detector_fired_without_render() {
        let result = ScrubResult::assemble("u", None, "b", true, false);
        assert!(result.markdown.starts_with(WARNING_NOTICE));
    }

    #[test]
    fn rendered_notice_wins_over_detector() {
        let result = ScrubResult::assemble("u", None, "b", true, true);
        assert!(result.markdown.starts_with(RENDERED_NOTICE));
    }

    #[test]
    fn notice_is_a_single_line_followed_by_blank() {
        for result in [
            ScrubResult::assemble("u", None, "body", false, false),
            ScrubResult::assemble("u", None, "body", true, false),
            ScrubResult::assemble("u", None, "body", false, true),
        ] {
            let mut lines = result.markdown.lines();
            let first = lines.next().unwrap_or_default();
            assert!(first.starts_with("> ["));
            assert_eq!(lines.next(), Some(""));
        }
    }

    #[test]
    fn empty_body_without_title_is_just_the_notice() {
        let result = ScrubResult::assemble("u", None, "", false, false);
        assert_eq!(result.markdown, PLAIN_NOTICE);
        assert!(result.is_empty());
    }

    #[test]
    fn serializes_to_json_with_flags() {
        let result = ScrubResult::assemble("u", None, "b", true, false);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"looks_js_rendered\":true"));
        assert!(json.contains("\"rendered\":false"));
    }
}
