//! Tag policy: the approved output vocabulary and the replacement map.
//!
//! Two static tables drive the whole rewriter:
//! - `ALLOWED_ATTRIBUTES`: presence of a tag name means the tag is kept;
//!   the value is its attribute whitelist (usually empty).
//! - `TAG_REPLACEMENTS`: disallowed tags with a semantic substitute.
//!
//! Tags in neither table fall through to the generic text-preserving
//! replacement in the tag normalizer. Every replacement target must itself
//! be a key of `ALLOWED_ATTRIBUTES` so a single normalization pass reaches
//! a fixpoint (no replacement chains).

use std::collections::HashMap;
use std::sync::LazyLock;

const NO_ATTRIBUTES: &[&str] = &[];

/// Allowed tags mapped to their allowed attribute names.
pub static ALLOWED_ATTRIBUTES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        HashMap::from([
            ("h2", NO_ATTRIBUTES),
            ("h3", NO_ATTRIBUTES),
            ("p", NO_ATTRIBUTES),
            ("strong", NO_ATTRIBUTES),
            ("em", NO_ATTRIBUTES),
            // Custom attributes for <quote>
            ("quote", &["cite", "author"][..]),
            ("table", &["border", "cellpadding", "cellspacing"][..]),
            ("thead", NO_ATTRIBUTES),
            ("tbody", NO_ATTRIBUTES),
            ("tr", NO_ATTRIBUTES),
            ("th", NO_ATTRIBUTES),
            ("td", NO_ATTRIBUTES),
        ])
    });

/// Disallowed tags mapped to their allowed substitute.
pub static TAG_REPLACEMENTS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("h1", "h2"),
        ("h4", "h3"),
        ("h5", "h3"),
        ("h6", "p"),
        ("ul", "p"),
        ("ol", "p"),
        ("li", "p"),
        // Custom mapping to <quote>
        ("blockquote", "quote"),
        ("code", "em"),
        ("pre", "p"),
        ("span", "p"),
        ("div", "p"),
        ("a", "em"),
        ("img", "p"),
        // Convert line breaks to paragraphs
        ("br", "p"),
    ])
});

/// True if `tag` is part of the approved output vocabulary.
pub fn is_allowed(tag: &str) -> bool {
    ALLOWED_ATTRIBUTES.contains_key(tag)
}

/// The attribute whitelist for an allowed tag (empty slice for unknown tags).
pub fn allowed_attributes(tag: &str) -> &'static [&'static str] {
    ALLOWED_ATTRIBUTES.get(tag).copied().unwrap_or(NO_ATTRIBUTES)
}

/// The substitute tag for a disallowed-but-mapped tag.
pub fn replacement_for(tag: &str) -> Option<&'static str> {
    TAG_REPLACEMENTS.get(tag).copied()
}
