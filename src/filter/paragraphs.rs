//! Paragraph cleanup: nested-`p` flattening, empty-`p` pruning, and
//! whitespace normalization.
//!
//! Replacement and list flattening can leave paragraphs inside paragraphs,
//! which the LMS renderer rejects. Flattening splices each nested `<p>`'s
//! children into the parent at the nested paragraph's former position, so
//! leaf content keeps its original relative order.

use kuchiki::NodeRef;

use super::{collapse_whitespace, has_name, select_all};

/// Collapse every nested paragraph under `root` to a single level.
///
/// Applied top-down over the whole tree; a paragraph is re-scanned until no
/// direct-child `<p>` remains, so hoisting a paragraph that itself contains
/// paragraphs still converges.
pub fn flatten_nested_paragraphs(root: &NodeRef) {
    if has_name(root, "p") {
        loop {
            let nested: Vec<NodeRef> = root
                .children()
                .filter(|child| has_name(child, "p"))
                .collect();
            if nested.is_empty() {
                break;
            }
            for paragraph in nested {
                splice_in_place(&paragraph);
            }
        }
    }

    let children: Vec<NodeRef> = root.children().collect();
    for child in children {
        if child.as_element().is_some() {
            flatten_nested_paragraphs(&child);
        }
    }
}

/// Replace an element with its own children at the same position.
fn splice_in_place(node: &NodeRef) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        node.insert_before(child);
    }
    node.detach();
}

/// Remove paragraphs with no significant text; collapse whitespace runs in
/// single-text paragraphs.
pub fn prune_paragraphs(root: &NodeRef) {
    for paragraph in select_all(root, "p") {
        if paragraph.text_contents().trim().is_empty() {
            paragraph.detach();
            continue;
        }

        let children: Vec<NodeRef> = paragraph.children().collect();
        if children.len() == 1 {
            if let Some(text) = children[0].as_text() {
                let collapsed = collapse_whitespace(&text.borrow());
                *text.borrow_mut() = collapsed;
            }
        }
    }
}
