//! Table structure normalization: every headerless table gets an explicit
//! `thead`/`tbody` split.
//!
//! For a table without a `thead`, the first row becomes the header (its
//! `td` cells forced to `th`) wrapped in a new `thead`; all remaining rows
//! move into a single `tbody`. Tables that already carry a `thead` are left
//! structurally untouched; tag policy still applies to their contents via
//! the normalizer pass.
//!
//! The presence check is on `thead` alone: the HTML parser wraps bare rows
//! in an implicit `tbody`, so a source table without explicit sections is
//! indistinguishable from one with a bare `tbody` by the time it reaches
//! this pass.

use kuchiki::NodeRef;

use super::{has_name, move_children, new_element, select_all};

/// Ensure every table under `root` has header/body sections.
pub fn normalize_table_structure(root: &NodeRef) {
    for table in select_all(root, "table") {
        let has_thead = table.children().any(|child| has_name(&child, "thead"));
        if has_thead {
            continue;
        }

        let rows = select_all(&table, "tr");
        if rows.is_empty() {
            // A table with no rows is a no-op, never an error.
            continue;
        }

        let first_row = &rows[0];
        for cell in select_all(first_row, "td") {
            let header_cell = new_element("th");
            move_children(&cell, &header_cell);
            cell.insert_before(header_cell);
            cell.detach();
        }

        let thead = new_element("thead");
        thead.append(first_row.clone());

        let body_rows = &rows[1..];
        let tbody = if body_rows.is_empty() {
            None
        } else {
            let tbody = new_element("tbody");
            for row in body_rows {
                tbody.append(row.clone());
            }
            Some(tbody)
        };

        // Appending the rows above emptied the parser-inserted wrappers;
        // drop any section that no longer holds a row.
        let leftovers: Vec<NodeRef> = table
            .children()
            .filter(|child| has_name(child, "tbody") || has_name(child, "thead"))
            .collect();
        for leftover in leftovers {
            if select_all(&leftover, "tr").is_empty() {
                leftover.detach();
            }
        }

        table.prepend(thead);
        if let Some(tbody) = tbody {
            table.append(tbody);
        }
    }
}
