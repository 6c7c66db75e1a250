//! Document loading functionality.
//!
//! This module provides functions to load JSON, JSONL, and YAML documents from
//! files or stdin, converting them into [`Value`] trees that paths can be
//! resolved against. Gzipped input is decompressed transparently.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::value::Value;

/// Document formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    /// Newline-delimited JSON; the document is the sequence of lines
    Jsonl,
    Yaml,
}

/// Loads and parses a document from the filesystem.
///
/// The format is chosen from the file name (see [`detect_format`]), and files
/// ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use quillpath::file::loader::load_document;
///
/// let root = load_document("config.yaml", false).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read or decompressed
/// - The file contents are not valid for the detected format
pub fn load_document<P: AsRef<Path>>(path: P, preserve_numbers: bool) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))?
    };

    let format = detect_format(path_ref);
    log::debug!("loading {} as {:?}", path_ref.display(), format);
    parse_document(&content, format, preserve_numbers)
}

/// Parses document text in the given format.
pub fn parse_document(
    content: &str,
    format: DocumentFormat,
    preserve_numbers: bool,
) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            let json: serde_json::Value =
                serde_json::from_str(content).context("Failed to parse JSON")?;
            Ok(convert_json(json, preserve_numbers))
        }
        DocumentFormat::Jsonl => parse_jsonl_content(content, preserve_numbers),
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).context("Failed to parse YAML")?;
            Ok(if preserve_numbers {
                Value::from_yaml_preserving_numbers(yaml)
            } else {
                Value::from(yaml)
            })
        }
    }
}

/// Parses JSONL content (newline-delimited JSON) into a sequence.
///
/// Each line must be a valid JSON value. Blank lines are skipped.
pub fn parse_jsonl_content(content: &str, preserve_numbers: bool) -> Result<Value> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let json: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(convert_json(json, preserve_numbers));
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Value::Sequence(lines))
}

/// Loads and parses a document from standard input.
///
/// Gzipped input is detected by its magic bytes. The contents are tried as
/// JSON, then JSONL, then YAML.
pub fn load_from_stdin(preserve_numbers: bool) -> Result<Value> {
    load_from_reader(std::io::stdin(), preserve_numbers)
}

/// Loads a document from any reader, detecting the format like
/// [`load_from_stdin`].
pub fn load_from_reader<R: Read>(mut reader: R, preserve_numbers: bool) -> Result<Value> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .context("Failed to read input")?;

    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    if let Ok(value) = parse_document(&content, DocumentFormat::Json, preserve_numbers) {
        return Ok(value);
    }
    if let Ok(value) = parse_jsonl_content(&content, preserve_numbers) {
        return Ok(value);
    }
    parse_document(&content, DocumentFormat::Yaml, preserve_numbers)
        .context("Input is neither valid JSON, JSONL, nor YAML")
}

/// Determines the document format from a file name.
///
/// The `.gz` suffix is ignored. Examples:
/// - `data.yaml`, `data.yml.gz` → YAML
/// - `data.jsonl`, `data.ndjson` → JSONL
/// - anything else → JSON
pub fn detect_format<P: AsRef<Path>>(path: P) -> DocumentFormat {
    let path_str = path.as_ref().to_string_lossy();
    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

    if base.ends_with(".yaml") || base.ends_with(".yml") {
        DocumentFormat::Yaml
    } else if base.ends_with(".jsonl") || base.ends_with(".ndjson") {
        DocumentFormat::Jsonl
    } else {
        DocumentFormat::Json
    }
}

fn convert_json(json: serde_json::Value, preserve_numbers: bool) -> Value {
    if preserve_numbers {
        Value::from_json_preserving_numbers(json)
    } else {
        Value::from(json)
    }
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid gzip format (corrupted)
/// - The decompressed content is not valid UTF-8
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
