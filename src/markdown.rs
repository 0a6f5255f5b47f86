//! Markdown rendering: the upstream side of the conversion pipeline.
//!
//! Renders Markdown to HTML with `pulldown-cmark`, then hands the result to
//! the tree rewriter. Tables and heading attributes are enabled; fenced
//! code blocks are core CommonMark. Syntax-highlighting and anchor markup
//! would be rewritten away by the filter regardless, so no highlighter is
//! wired in.

use pulldown_cmark::{html, Options, Parser};

use crate::error::ConvertResult;
use crate::filter::filter_html;

/// Parser options for rendering.
fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    // Closest equivalent of an attr_list extension; the attributes it
    // produces are stripped by the tag policy anyway.
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

/// Render Markdown source text to raw, unfiltered HTML.
pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new_ext(text.trim(), markdown_options());
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Convert Markdown text to filtered HTML.
pub fn convert_document(text: &str) -> ConvertResult<String> {
    filter_html(&markdown_to_html(text))
}
