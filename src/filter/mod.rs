//! The tree rewriter: HTML tag filtering, sanitization, and structure cleanup.
//!
//! Takes the arbitrary HTML produced by the Markdown renderer and rewrites
//! it, in place, into the small vocabulary the LMS understands:
//! h2, h3, p, strong, em, quote, table, thead, tbody, tr, th, td.
//!
//! Passes run in a fixed order over the parsed document's `<body>`:
//! 1. list flattening (`lists`)
//! 2. tag normalization against the policy tables (`tags`)
//! 3. nested-paragraph flattening (`paragraphs`)
//! 4. inline emphasis-marker repair (`emphasis`)
//! 5. empty-paragraph pruning and whitespace collapse (`paragraphs`)
//! 6. table thead/tbody synthesis (`tables`)
//!
//! Each pass is idempotent and a no-op on structures it does not recognize,
//! so re-running the pipeline on its own output changes nothing.

pub mod emphasis;
pub mod lists;
pub mod paragraphs;
pub mod policy;
pub mod tables;
pub mod tags;

use html5ever::{namespace_url, ns, LocalName, QualName};
use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;

use crate::error::{ConvertError, ConvertResult};

/// Rewrite a parsed document in place so that it satisfies the tag policy.
///
/// Mutates and returns the same tree. Total over well-formed trees: passes
/// degrade gracefully (skip, never raise) on structures they cannot
/// interpret, e.g. a table with no rows.
pub fn sanitize(document: NodeRef) -> NodeRef {
    // The parser always wraps fragments in html/head/body; the policy only
    // governs content, so the passes operate on the body subtree.
    let root = document
        .select_first("body")
        .map(|body| body.as_node().clone())
        .unwrap_or_else(|()| document.clone());

    lists::flatten_lists(&root);
    tags::normalize_tags(&root);
    paragraphs::flatten_nested_paragraphs(&root);
    emphasis::fix_marker_misclassification(&root);
    paragraphs::prune_paragraphs(&root);
    tables::normalize_table_structure(&root);

    document
}

/// Filter an HTML string to only the allowed tags and attributes.
///
/// Parses, runs [`sanitize`], and serializes the body content back to a
/// string. The serialization form (attribute quoting, self-closing tags) is
/// whatever the html5ever serializer produces.
pub fn filter_html(html: &str) -> ConvertResult<String> {
    let document = kuchiki::parse_html().one(html);
    let document = sanitize(document);

    let body = document
        .select_first("body")
        .map_err(|()| ConvertError::ParseFailure {
            message: "sanitized document has no body element".to_string(),
        })?;

    let mut bytes = Vec::new();
    for child in body.as_node().children() {
        child
            .serialize(&mut bytes)
            .map_err(|e| ConvertError::ParseFailure {
                message: format!("failed to serialize sanitized tree: {e}"),
            })?;
    }
    String::from_utf8(bytes).map_err(|e| ConvertError::ParseFailure {
        message: format!("serialized HTML is not valid UTF-8: {e}"),
    })
}

// ============================================================================
// Shared DOM helpers
// ============================================================================

/// Collect every element under `root` matching a hardcoded selector.
///
/// Matches are collected before any mutation because the passes detach and
/// re-insert nodes while iterating.
pub(crate) fn select_all(root: &NodeRef, selector: &str) -> Vec<NodeRef> {
    match root.select(selector) {
        Ok(matches) => matches.map(|m| m.as_node().clone()).collect(),
        Err(()) => Vec::new(),
    }
}

/// True if `node` is an element with the given local tag name.
pub(crate) fn has_name(node: &NodeRef, name: &str) -> bool {
    node.as_element()
        .is_some_and(|e| e.name.local.as_ref() == name)
}

/// Create a fresh, attribute-less element in the HTML namespace.
pub(crate) fn new_element(name: &str) -> NodeRef {
    NodeRef::new_element(
        QualName::new(None, ns!(html), LocalName::from(name)),
        Vec::new(),
    )
}

/// True if `node` still hangs off `root`. Nodes inside a subtree that an
/// earlier rewrite detached must not be rewritten again.
pub(crate) fn is_attached(node: &NodeRef, root: &NodeRef) -> bool {
    node.ancestors().any(|ancestor| ancestor == *root)
}

/// Trim and collapse all internal whitespace runs (including newlines and
/// tabs) to single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Move all children of `from` onto the end of `to`, preserving order.
pub(crate) fn move_children(from: &NodeRef, to: &NodeRef) {
    let children: Vec<NodeRef> = from.children().collect();
    for child in children {
        to.append(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_html_returns_body_content_only() {
        let result = filter_html("<p>Hello</p>").unwrap();
        assert_eq!(result, "<p>Hello</p>");
    }

    #[test]
    fn sanitize_is_idempotent_on_mixed_input() {
        let html = "<h1>Title</h1><ul><li>One</li><li>Two</li></ul>\
                    <div><span>wrapped</span></div><p>   </p>";
        let once = filter_html(html).unwrap();
        let twice = filter_html(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn collapse_whitespace_flattens_runs() {
        assert_eq!(collapse_whitespace("  a\n\t b   c "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
