//! Inline emphasis repair: fixes `em`/`strong` elements whose single text
//! child still carries literal Markdown markers.
//!
//! Some renderer edge cases leave `**text**` inside `<em>` (should be
//! strong) or `*text*` inside `<strong>` (should be em). Only elements
//! whose content is exactly one text node are touched; mixed content is
//! left alone.

use kuchiki::NodeRef;

use super::{new_element, select_all};

/// Repair marker/tag mismatches in every `em`/`strong` under `root`.
pub fn fix_marker_misclassification(root: &NodeRef) {
    for node in select_all(root, "em, strong") {
        let children: Vec<NodeRef> = node.children().collect();
        if children.len() != 1 {
            continue;
        }
        let text = match children[0].as_text() {
            Some(cell) => cell.borrow().clone(),
            None => continue,
        };
        let name = match node.as_element() {
            Some(element) => element.name.local.as_ref().to_string(),
            None => continue,
        };

        if name == "em" && text.len() >= 4 && text.starts_with("**") && text.ends_with("**") {
            // **text** inside <em> should be <strong>; a ***text*** payload
            // still carries a single marker pair after the strip, which
            // would flip the element back on a re-run.
            rebuild(&node, "strong", strip_single_markers(&text[2..text.len() - 2]));
        } else if name == "strong"
            && text.len() >= 2
            && text.starts_with('*')
            && text.ends_with('*')
            && !text.starts_with("**")
        {
            // *text* inside <strong> should be <em>
            rebuild(&node, "em", strip_single_markers(&text[1..text.len() - 1]));
        }
    }
}

/// Strip one remaining single-asterisk pair so repaired text never matches
/// a repair rule again. Double markers are left alone; they are the
/// untouched-content case, not a misclassification.
fn strip_single_markers(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('*') && text.ends_with('*') && !text.starts_with("**") {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

fn rebuild(node: &NodeRef, name: &str, text: &str) {
    let replacement = new_element(name);
    replacement.append(NodeRef::new_text(text));
    node.insert_before(replacement);
    node.detach();
}
