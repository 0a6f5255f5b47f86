//! Error types for document conversion.
//!
//! Failures originate in collaborators (parsing, encoding, I/O); the tree
//! rewriter itself is total over well-formed trees. Errors propagate
//! per-document so one failing file never aborts a batch.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Error types for conversion operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The rendered HTML could not be parsed or serialized
    #[error("HTML processing failed: {message}")]
    ParseFailure { message: String },

    /// The document bytes decode under none of the configured fallbacks
    #[error("could not decode {path} with any supported encoding")]
    UnsupportedEncoding { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
