//! Encoding-fallback file reading.
//!
//! Input files are read as UTF-8 first (BOM-aware), then retried with
//! windows-1252. The encoding actually used is reported so the batch layer
//! can log non-UTF-8 inputs.

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::error::{ConvertError, ConvertResult};

/// Fallback order for decoding input files.
pub const ENCODING_FALLBACKS: &[&Encoding] = &[UTF_8, WINDOWS_1252];

/// Read a file, trying each configured encoding in order.
///
/// Returns the decoded content and the name of the encoding used.
pub fn read_with_encoding_fallback(path: &Path) -> ConvertResult<(String, &'static str)> {
    let bytes = fs::read(path)?;
    decode_with_fallback(&bytes).ok_or_else(|| ConvertError::UnsupportedEncoding {
        path: path.to_path_buf(),
    })
}

/// Decode a byte buffer with the configured fallback chain.
pub fn decode_with_fallback(bytes: &[u8]) -> Option<(String, &'static str)> {
    for encoding in ENCODING_FALLBACKS {
        // decode() sniffs BOMs, so UTF-16 input with a BOM also lands in
        // the first round.
        let (text, used, had_errors) = encoding.decode(bytes);
        if !had_errors {
            return Some((text.into_owned(), used.name()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8_decodes_as_utf8() {
        let (text, encoding) = decode_with_fallback("héllo".as_bytes()).unwrap();
        assert_eq!(text, "héllo");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn utf8_bom_is_consumed() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("hi".as_bytes());
        let (text, _) = decode_with_fallback(&bytes).unwrap();
        assert_eq!(text, "hi");
    }

    #[test]
    fn latin1_bytes_fall_back_to_windows_1252() {
        // "café" encoded as latin-1: the 0xE9 byte is invalid UTF-8.
        let bytes = [0x63, 0x61, 0x66, 0xE9];
        let (text, encoding) = decode_with_fallback(&bytes).unwrap();
        assert_eq!(text, "café");
        assert_eq!(encoding, "windows-1252");
    }

    #[test]
    fn smart_quote_bytes_decode_under_windows_1252() {
        // cp1252 0x93/0x94 are curly quotes.
        let bytes = [0x93, 0x68, 0x69, 0x94];
        let (text, encoding) = decode_with_fallback(&bytes).unwrap();
        assert_eq!(text, "\u{201c}hi\u{201d}");
        assert_eq!(encoding, "windows-1252");
    }
}
