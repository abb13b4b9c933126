//! End-to-end samplesheet check: read, validate, group, write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::error::{Result, RowIssue, SamplesheetError};
use crate::header::check_header;
use crate::mapping::SampleMapping;
use crate::row::SampleRow;
use crate::writer::write_samplesheet;

const UTF8_BOM: char = '\u{feff}';

/// Outcome of a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Row count per sample, in output order.
    pub samples: Vec<SampleCount>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCount {
    pub sample_id: String,
    pub rows: usize,
}

impl CheckSummary {
    fn new(input: &Path, output: &Path, mapping: &SampleMapping) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            samples: mapping
                .samples()
                .map(|(sample_id, rows)| SampleCount {
                    sample_id: sample_id.to_string(),
                    rows: rows.len(),
                })
                .collect(),
        }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn row_count(&self) -> usize {
        self.samples.iter().map(|sample| sample.rows).sum()
    }
}

/// Validates `input` and writes its canonical form to `output`.
///
/// Stops at the first problem. Nothing is written unless the whole input
/// passes, and an input with a valid header but no rows is an error.
pub fn check_samplesheet(input: &Path, output: &Path) -> Result<CheckSummary> {
    let span = info_span!("check_samplesheet", input = %input.display());
    let _guard = span.enter();

    let content = read_samplesheet(input)?;
    let mapping = parse_samplesheet(&content)?;
    if mapping.is_empty() {
        return Err(SamplesheetError::NoEntries {
            path: input.to_path_buf(),
        });
    }
    write_samplesheet(&mapping, output)?;
    Ok(CheckSummary::new(input, output, &mapping))
}

/// Reads the input as UTF-8 text, dropping a leading UTF-8 byte-order mark.
///
/// UTF-16 input is rejected up front rather than failing the header check
/// with an unreadable diagnostic.
pub fn read_samplesheet(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            SamplesheetError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SamplesheetError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if let Some(encoding) = utf16_bom(&bytes) {
        return Err(SamplesheetError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding,
        });
    }

    let text = String::from_utf8(bytes).map_err(|err| SamplesheetError::Read {
        path: path.to_path_buf(),
        source: std::io::Error::new(ErrorKind::InvalidData, err),
    })?;
    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Like `str::lines`, but a lone `\r` is also a line break.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + break_len..];
        Some(line)
    })
}

fn utf16_bom(bytes: &[u8]) -> Option<&'static str> {
    match bytes.get(..2)? {
        [0xFF, 0xFE] => Some("UTF-16 LE"),
        [0xFE, 0xFF] => Some("UTF-16 BE"),
        _ => None,
    }
}

/// Checks the header and every data row of samplesheet text.
///
/// Line numbers are 1-based and count blank lines, so the first data line
/// is line 2. `\n`, `\r\n` and a bare `\r` all end a line.
pub fn parse_samplesheet(content: &str) -> Result<SampleMapping> {
    let mut lines = split_lines(content)
        .enumerate()
        .map(|(idx, line)| (idx + 1, line));

    let header = lines.next().map_or("", |(_, line)| line);
    let columns = check_header(header)?;
    debug!(columns = columns.len(), "header accepted");

    let mut mapping = SampleMapping::new();
    for (line_number, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let row = SampleRow::parse(line, line_number)?;
        debug!(line = line_number, sample_id = %row.sample_id, "row accepted");
        if !mapping.insert(row) {
            return Err(SamplesheetError::row(
                RowIssue::DuplicateRow,
                line_number,
                line,
            ));
        }
    }

    info!(
        samples = mapping.sample_count(),
        rows = mapping.row_count(),
        "samplesheet rows validated"
    );
    Ok(mapping)
}
