//! Central configuration for the converter: file-type tables and default
//! directory names.

use std::path::Path;

/// Input extensions the batch converter picks up.
pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Extension given to converted output files.
pub const OUTPUT_EXTENSION: &str = "html";

/// Extensions treated as HTML during output re-sanitization.
pub const HTML_FILE_EXTENSIONS: &[&str] = &["html", "htm"];

/// Binary extensions skipped during output re-sanitization.
pub const BINARY_FILE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "zip", "rar", "7z", "tar", "gz", "mp4", "avi",
    "mov", "wmv", "flv", "pdf", "doc", "docx", "xls", "xlsx", "exe", "dll", "so", "dylib",
];

/// Default input directory when none is given on the command line.
pub const DEFAULT_INPUT_DIR: &str = "md-downloads";

/// Default output directory when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "converted-html-descriptions";

fn extension_matches(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.contains(&ext.as_str())
        })
}

/// True if the path looks like a supported Markdown input file.
pub fn is_supported_input(path: &Path) -> bool {
    extension_matches(path, SUPPORTED_INPUT_EXTENSIONS)
}

/// True if the path should get HTML-specific character sanitization.
pub fn is_html_file(path: &Path) -> bool {
    extension_matches(path, HTML_FILE_EXTENSIONS)
}

/// True if the path is binary and must be skipped by text passes.
pub fn is_binary_file(path: &Path) -> bool {
    extension_matches(path, BINARY_FILE_EXTENSIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn input_detection_is_case_insensitive() {
        assert!(is_supported_input(&PathBuf::from("notes.MD")));
        assert!(is_supported_input(&PathBuf::from("a/b/readme.markdown")));
        assert!(!is_supported_input(&PathBuf::from("image.png")));
        assert!(!is_supported_input(&PathBuf::from("no_extension")));
    }

    #[test]
    fn html_and_binary_classification() {
        assert!(is_html_file(&PathBuf::from("out/page.Htm")));
        assert!(is_binary_file(&PathBuf::from("out/archive.ZIP")));
        assert!(!is_binary_file(&PathBuf::from("out/page.html")));
    }
}
