//! md2lms: convert Markdown documents into the constrained HTML subset
//! accepted by LMS description fields.
//!
//! The pipeline per document:
//! 1. decode the input file with encoding fallback ([`encoding`])
//! 2. render Markdown to HTML ([`markdown`])
//! 3. rewrite the HTML tree to the approved tag vocabulary ([`filter`])
//! 4. character-sanitize the serialized output ([`charset`])
//!
//! [`batch`] drives the per-directory conversion loop with per-document
//! failure isolation.

pub mod batch;
pub mod charset;
pub mod config;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod markdown;

pub use batch::{batch_convert_directory, process_single_file, BatchReport};
pub use charset::sanitize_html_characters;
pub use encoding::read_with_encoding_fallback;
pub use error::{ConvertError, ConvertResult};
pub use filter::{filter_html, sanitize};
pub use markdown::{convert_document, markdown_to_html};
