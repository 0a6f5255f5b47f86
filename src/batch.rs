//! File processing: individual conversions and batch directory runs.
//!
//! Each document converts in isolation; a failure is counted and logged
//! but never aborts the batch. Output is written through a temp file and
//! renamed into place, so a failed conversion leaves no partial file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::charset::sanitize_html_characters;
use crate::config;
use crate::encoding::read_with_encoding_fallback;
use crate::error::ConvertResult;
use crate::markdown::convert_document;

/// Per-batch outcome counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchReport {
    /// Documents converted and written
    pub converted: usize,
    /// Documents that failed (decode, convert, or write)
    pub failed: usize,
    /// Output files re-encoded/sanitized by the final directory pass
    pub resanitized: usize,
}

/// Convert a single Markdown file to filtered HTML.
pub fn process_single_file(input: &Path, output: &Path) -> ConvertResult<()> {
    let (markdown, encoding) = read_with_encoding_fallback(input)?;
    if encoding != "UTF-8" {
        log::info!("read {} using {} encoding", input.display(), encoding);
    }

    let html = convert_document(&markdown)?;
    let html = sanitize_html_characters(&html);

    write_atomic(output, &html)?;
    Ok(())
}

/// Convert every supported file in `input_dir`, writing results into
/// `output_dir` (created if missing).
pub fn batch_convert_directory(input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
    if !input_dir.exists() {
        bail!("input directory '{}' does not exist", input_dir.display());
    }
    if !input_dir.is_dir() {
        bail!("'{}' is not a directory", input_dir.display());
    }
    fs::create_dir_all(output_dir).with_context(|| {
        format!("failed to create output directory '{}'", output_dir.display())
    })?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && config::is_supported_input(path))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        log::warn!("no Markdown files found in '{}'", input_dir.display());
        return Ok(BatchReport::default());
    }
    log::info!("found {} Markdown files to convert", inputs.len());

    let mut report = BatchReport::default();
    for input in &inputs {
        let Some(stem) = input.file_stem() else {
            continue;
        };
        let output = output_dir.join(stem).with_extension(config::OUTPUT_EXTENSION);

        match process_single_file(input, &output) {
            Ok(()) => {
                report.converted += 1;
                log::info!("converted {} -> {}", input.display(), output.display());
            }
            Err(e) => {
                report.failed += 1;
                log::error!("failed to convert {}: {e}", input.display());
            }
        }
    }

    if report.converted > 0 {
        report.resanitized = resanitize_directory(output_dir);
    }

    Ok(report)
}

/// Re-encode and character-sanitize every text file under `dir`.
///
/// Returns the number of files processed; individual failures are logged
/// and skipped.
pub fn resanitize_directory(dir: &Path) -> usize {
    let mut processed = 0;
    for entry in jwalk::WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("could not walk output directory: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if config::is_binary_file(&path) {
            continue;
        }
        match resanitize_file(&path) {
            Ok(()) => processed += 1,
            Err(e) => log::warn!("could not process {}: {e}", path.display()),
        }
    }
    processed
}

fn resanitize_file(path: &Path) -> ConvertResult<()> {
    let (content, _) = read_with_encoding_fallback(path)?;
    let content = if config::is_html_file(path) {
        sanitize_html_characters(&content)
    } else {
        content
    };
    write_atomic(path, &content)?;
    Ok(())
}

/// Write UTF-8 content through a temp file in the target directory, then
/// rename into place.
fn write_atomic(output: &Path, content: &str) -> std::io::Result<()> {
    let dir = output.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(output).map_err(|e| e.error)?;
    Ok(())
}
