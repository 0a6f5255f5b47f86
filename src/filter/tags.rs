//! Tag normalization: applies the tag policy to every element.
//!
//! Exactly one of three rules per element, decided only by the element's
//! own name and attributes:
//! 1. allowed tag: strip attributes outside its whitelist, keep children;
//! 2. mapped tag: rename to the allowed substitute, drop all attributes,
//!    keep children;
//! 3. anything else: replace with a `<p>` holding the element's collapsed
//!    text content (empty `<p>` if there is none; the pruner removes it).

use kuchiki::NodeRef;

use super::policy;
use super::{collapse_whitespace, is_attached, move_children, new_element, select_all};

/// Normalize every element under `root` against the policy tables.
pub fn normalize_tags(root: &NodeRef) {
    for node in select_all(root, "*") {
        if node == *root {
            continue;
        }
        // Generic replacement detaches whole subtrees; skip elements that
        // are no longer part of the document.
        if !is_attached(&node, root) {
            continue;
        }

        let name = match node.as_element() {
            Some(element) => element.name.local.as_ref().to_string(),
            None => continue,
        };

        if policy::is_allowed(&name) {
            strip_disallowed_attributes(&node, &name);
        } else if let Some(substitute) = policy::replacement_for(&name) {
            replace_mapped(&node, substitute);
        } else {
            replace_generic(&node);
        }
    }
}

/// Rule 1: keep the element, retain only whitelisted attributes.
fn strip_disallowed_attributes(node: &NodeRef, name: &str) {
    let whitelist = policy::allowed_attributes(name);
    if let Some(element) = node.as_element() {
        let mut attributes = element.attributes.borrow_mut();
        attributes
            .map
            .retain(|attr, _| whitelist.contains(&attr.local.as_ref()));
    }
}

/// Rule 2: rename to the mapped tag, discarding all attributes. The mapped
/// target is always directly allowed (enforced by a policy test), so the
/// new element needs no re-evaluation.
fn replace_mapped(node: &NodeRef, substitute: &str) {
    let replacement = new_element(substitute);
    move_children(node, &replacement);
    node.insert_before(replacement);
    node.detach();
}

/// Rule 3: replace an unknown element with a paragraph carrying its full
/// text content, trimmed and whitespace-collapsed. Elements with no
/// significant text leave an empty paragraph for the pruner.
fn replace_generic(node: &NodeRef) {
    let text = collapse_whitespace(&node.text_contents());
    let replacement = new_element("p");
    if !text.is_empty() {
        replacement.append(NodeRef::new_text(text));
    }
    node.insert_before(replacement);
    node.detach();
}

#[cfg(test)]
mod tests {
    use crate::filter::filter_html;

    #[test]
    fn h1_maps_to_h2() {
        let result = filter_html("<h1>Title</h1>").unwrap();
        assert_eq!(result, "<h2>Title</h2>");
    }

    #[test]
    fn deep_headings_map_downward() {
        assert_eq!(filter_html("<h4>A</h4>").unwrap(), "<h3>A</h3>");
        assert_eq!(filter_html("<h5>B</h5>").unwrap(), "<h3>B</h3>");
        assert_eq!(filter_html("<h6>C</h6>").unwrap(), "<p>C</p>");
    }

    #[test]
    fn blockquote_maps_to_quote() {
        let result = filter_html("<blockquote>Hi</blockquote>").unwrap();
        assert_eq!(result, "<quote>Hi</quote>");
    }

    #[test]
    fn mapped_tags_lose_their_attributes() {
        let result = filter_html(r#"<h1 id="top" class="big">Title</h1>"#).unwrap();
        assert_eq!(result, "<h2>Title</h2>");
    }

    #[test]
    fn allowed_tags_keep_only_whitelisted_attributes() {
        let result = filter_html(
            r#"<table border="1" cellpadding="2" class="wide"><tr><td>A</td></tr></table>"#,
        )
        .unwrap();
        assert!(result.contains("border=\"1\""));
        assert!(result.contains("cellpadding=\"2\""));
        assert!(!result.contains("class"));
    }

    #[test]
    fn quote_keeps_cite_and_author() {
        let result =
            filter_html(r#"<blockquote cite="x" author="y" style="z">Said</blockquote>"#).unwrap();
        // blockquote itself is mapped, so its attributes are discarded...
        assert_eq!(result, "<quote>Said</quote>");
        // ...but a quote that is already well-formed keeps its whitelist.
        let direct = filter_html(r#"<quote cite="x" author="y" style="z">Said</quote>"#).unwrap();
        assert!(direct.contains(r#"cite="x""#));
        assert!(direct.contains(r#"author="y""#));
        assert!(!direct.contains("style"));
    }

    #[test]
    fn wrapper_markup_collapses_to_single_paragraph() {
        let result = filter_html(r#"<div class="x"><span>x</span></div>"#).unwrap();
        assert_eq!(result, "<p>x</p>");
    }

    #[test]
    fn unknown_tag_text_is_collapsed() {
        let result = filter_html("<section>  spaced \n  out  </section>").unwrap();
        assert_eq!(result, "<p>spaced out</p>");
    }

    #[test]
    fn empty_unknown_tag_is_pruned() {
        let result = filter_html("<p>keep</p><figure></figure>").unwrap();
        assert_eq!(result, "<p>keep</p>");
    }

    #[test]
    fn anchors_become_emphasis() {
        let result = filter_html(r#"<p>See <a href="http://x">here</a></p>"#).unwrap();
        assert_eq!(result, "<p>See <em>here</em></p>");
    }

    #[test]
    fn code_becomes_emphasis() {
        let result = filter_html("<p>run <code>make</code></p>").unwrap();
        assert_eq!(result, "<p>run <em>make</em></p>");
    }
}
