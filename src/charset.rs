//! Character-level sanitization for HTML output.
//!
//! A pure string pass, independent of the tree rewriter: typographic
//! characters and well-known mojibake artifacts are replaced with plain
//! ASCII so the output prints cleanly in restricted environments, and stray
//! asterisks left over from emphasis markers are dropped.

/// Ordered replacement table. Multi-byte mojibake sequences come before the
/// single characters they contain so longer matches win.
pub const CHARACTER_REPLACEMENTS: &[(&str, &str)] = &[
    // Non-breaking space, raw and as the entity the serializer emits
    ("\u{a0}", " "),
    ("&nbsp;", " "),
    // UTF-8-as-latin1 mojibake artifacts
    ("\u{e2}\u{20ac}\u{153}", "\""),  // left double quote
    ("\u{e2}\u{20ac}\u{9d}", "\""),   // right double quote
    ("\u{e2}\u{20ac}\u{2122}", "'"),  // right single quote
    ("\u{e2}\u{20ac}\u{2dc}", "'"),   // left single quote
    ("\u{e2}\u{20ac}\u{201c}", "-"),  // en dash
    ("\u{e2}\u{20ac}\u{201d}", "-"),  // em dash
    ("\u{e2}\u{20ac}\u{a6}", "..."),  // ellipsis
    // Bare two-character remainder, after every longer sequence above
    ("\u{e2}\u{20ac}", "\""),
    // Replacement character from earlier decode corruption
    ("\u{fffd}", "\""),
    // Smart quotes
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
    ("\u{2018}", "'"),
    ("\u{2019}", "'"),
    // Dashes
    ("\u{2013}", "-"),
    ("\u{2014}", "-"),
    // Ellipsis
    ("\u{2026}", "..."),
    // Stray emphasis markers
    ("*", ""),
];

/// Apply the replacement table to HTML output.
pub fn sanitize_html_characters(content: &str) -> String {
    let mut result = content.to_string();
    for (from, to) in CHARACTER_REPLACEMENTS {
        if result.contains(from) {
            result = result.replace(from, to);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_quotes_become_straight_quotes() {
        assert_eq!(
            sanitize_html_characters("\u{201c}hi\u{201d} and \u{2018}there\u{2019}"),
            "\"hi\" and 'there'"
        );
    }

    #[test]
    fn dashes_and_ellipsis_are_asciified() {
        assert_eq!(
            sanitize_html_characters("a \u{2013} b \u{2014} c\u{2026}"),
            "a - b - c..."
        );
    }

    #[test]
    fn non_breaking_space_becomes_space() {
        assert_eq!(sanitize_html_characters("a\u{a0}b"), "a b");
    }

    #[test]
    fn stray_asterisks_are_removed() {
        assert_eq!(sanitize_html_characters("<p>*almost* bold</p>"), "<p>almost bold</p>");
    }

    #[test]
    fn plain_ascii_is_untouched() {
        let text = "<p>Nothing to fix here.</p>";
        assert_eq!(sanitize_html_characters(text), text);
    }

    #[test]
    fn sanitization_is_idempotent() {
        let text = "\u{201c}x\u{201d} \u{2014} *y*\u{2026}";
        let once = sanitize_html_characters(text);
        assert_eq!(sanitize_html_characters(&once), once);
    }
}
