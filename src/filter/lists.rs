//! List flattening: `ul`/`ol` structures become flat runs of `<p>` siblings.
//!
//! Each list item's children move (not copy) into a new paragraph inserted
//! after the list, in list order; the emptied list is then removed. Nested
//! lists are flattened bottom-up, so by the time a list is processed its
//! items only carry already-flattened content. No list attributes survive.

use kuchiki::NodeRef;

use super::{move_children, new_element, select_all};

/// Flatten every list under `root` into sequential paragraphs.
pub fn flatten_lists(root: &NodeRef) {
    let lists = select_all(root, "ul, ol");

    // Document order puts ancestors before descendants; processing in
    // reverse flattens innermost lists first.
    for list in lists.iter().rev() {
        let items = select_all(list, "li");

        // A paragraph per item, inserted after the list in list order.
        let mut anchor = list.clone();
        for item in items {
            let paragraph = new_element("p");
            move_children(&item, &paragraph);
            anchor.insert_after(paragraph.clone());
            anchor = paragraph;
        }

        list.detach();
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::filter_html;

    #[test]
    fn list_items_become_sequential_paragraphs() {
        let result = filter_html("<ul><li>One</li><li>Two</li></ul>").unwrap();
        assert_eq!(result, "<p>One</p><p>Two</p>");
    }

    #[test]
    fn ordered_lists_flatten_the_same_way() {
        let result = filter_html("<ol><li>First</li><li>Second</li><li>Third</li></ol>").unwrap();
        assert_eq!(result, "<p>First</p><p>Second</p><p>Third</p>");
    }

    #[test]
    fn empty_list_disappears() {
        let result = filter_html("<p>before</p><ul></ul><p>after</p>").unwrap();
        assert_eq!(result, "<p>before</p><p>after</p>");
    }

    #[test]
    fn list_attributes_do_not_survive() {
        let result = filter_html(r#"<ul class="fancy"><li id="x">Item</li></ul>"#).unwrap();
        assert_eq!(result, "<p>Item</p>");
    }

    #[test]
    fn nested_list_content_is_preserved() {
        let result =
            filter_html("<ul><li>Outer<ul><li>Inner</li></ul></li><li>Last</li></ul>").unwrap();
        assert!(result.contains("Outer"));
        assert!(result.contains("Inner"));
        assert!(result.contains("Last"));
        assert!(!result.contains("<ul"));
        assert!(!result.contains("<li"));
    }

    #[test]
    fn inline_markup_inside_items_is_kept() {
        let result = filter_html("<ul><li>Has <strong>bold</strong> text</li></ul>").unwrap();
        assert_eq!(result, "<p>Has <strong>bold</strong> text</p>");
    }
}
