// ABOUTME: The ordered conversion pipeline: filter stages, structural rewrites, flatten, normalize, post-process.
// ABOUTME: Stage order is a correctness requirement and is fixed in exactly one place, here.

use dom_query::Document;

use crate::dom::{convert, filter};
use crate::postprocess;
use crate::rules::ScrubRules;
use crate::text;

/// What the pipeline hands back: the extracted page title (if any) and the
/// cleaned body text.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub title: Option<String>,
    pub body: String,
}

/// Run every stage over the document in the required order.
///
/// The tree is mutated destructively and should be discarded afterwards.
/// Later stages consume text fragments produced by earlier ones, so the
/// sequence below is not reorderable:
/// chrome removal must precede the rewrites (or removed subtrees would leak
/// fragments), inline unwrapping must precede code/heading/list conversion
/// (their text snapshots assume wrappers are gone), and block spacing runs
/// last so its snapshots include every earlier fragment.
pub fn run(doc: &Document, rules: &ScrubRules) -> PipelineOutput {
    filter::remove_non_content(doc, rules);
    filter::remove_ui_chrome(doc, rules);

    let title = convert::extract_title(doc);
    convert::strip_links(doc);
    convert::space_inline(doc, rules);
    convert::convert_code_blocks(doc);
    convert::convert_headings(doc);
    convert::convert_lists(doc, rules);
    convert::space_blocks(doc, rules);

    let flat = text::flatten(doc);
    let normalized = text::normalize(&flat);
    let without_feedback = postprocess::remove_feedback(&normalized, rules);
    let body = postprocess::drop_empty_headings(&without_feedback);

    PipelineOutput { title, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_on(html: &str) -> PipelineOutput {
        let doc = Document::from(html);
        run(&doc, &ScrubRules::default())
    }

    #[test]
    fn full_pipeline_produces_clean_markdown() {
        let html = "<html><head><title>Doc</title><style>.x{}</style></head>\
                    <body><nav>skip me</nav>\
                    <h1>Welcome</h1>\
                    <p>Read <a href=\"/x\">the guide</a> for <strong>details</strong>.</p>\
                    <ul><li>alpha</li><li>beta</li></ul>\
                    </body></html>";
        let out = run_on(html);
        assert_eq!(out.title, Some("Doc".to_string()));
        assert!(out.body.contains("# Welcome"));
        assert!(out.body.contains("the guide"));
        assert!(out.body.contains("details"));
        assert!(out.body.contains("- alpha"));
        assert!(!out.body.contains("skip me"));
        assert!(!out.body.contains(".x{}"));
        assert!(!out.body.contains("href"));
    }

    #[test]
    fn paragraphs_and_inline_text_stay_separated() {
        let out = run_on("<html><body><p>A</p><strong>B</strong><p>C</p></body></html>");
        assert!(out.body.contains("A\n\nB\n\nC"), "got: {:?}", out.body);
    }

    #[test]
    fn title_is_not_part_of_the_body() {
        let out = run_on("<html><head><title>Only Title</title></head><body><p>x</p></body></html>");
        assert_eq!(out.title, Some("Only Title".to_string()));
        assert!(!out.body.contains("Only Title"));
    }

    #[test]
    fn empty_document_yields_empty_body() {
        let out = run_on("<html><body></body></html>");
        assert_eq!(out.body, "");
        assert_eq!(out.title, None);
    }

    #[test]
    fn heading_with_no_section_body_is_elided() {
        let html = "<html><body><h2>Empty Section</h2><h2>Full Section</h2><p>text</p></body></html>";
        let out = run_on(html);
        assert!(!out.body.contains("Empty Section"));
        assert!(out.body.contains("## Full Section"));
    }
}
