//! Error types for samplesheet validation.

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::{FASTQ_SUFFIXES, MIN_COLUMNS, MIN_POPULATED_COLUMNS};

/// Errors that abort a samplesheet check.
///
/// Every variant is fatal: the first one encountered ends the run and no
/// output file is produced.
#[derive(Debug, Error)]
pub enum SamplesheetError {
    // === File System Errors ===
    /// Input samplesheet does not exist.
    #[error("samplesheet not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input samplesheet.
    #[error("failed to read samplesheet {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input starts with a byte-order mark for an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in samplesheet {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed while writing the canonical samplesheet.
    #[error("failed to write samplesheet {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Fully written temp file could not be moved onto the target path.
    #[error("failed to move {temp_path} to {path}: {source}")]
    Persist {
        temp_path: PathBuf,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Validation Errors ===
    /// Leading header columns differ from the required header.
    #[error("Please check samplesheet header -> {found} != {expected}")]
    Header { found: String, expected: String },

    /// A data row failed a structural or semantic check.
    #[error("Please check samplesheet -> {issue}\nLine {line_number}: '{line}'")]
    Row {
        issue: RowIssue,
        line_number: usize,
        line: String,
    },

    /// Header was valid but no data rows followed.
    #[error("Please check samplesheet -> No entries to process!\nSamplesheet: '{path}'")]
    NoEntries { path: PathBuf },
}

impl SamplesheetError {
    /// Builds a row error, keeping the whitespace-trimmed raw line.
    pub fn row(issue: RowIssue, line_number: usize, line: &str) -> Self {
        Self::Row {
            issue,
            line_number,
            line: line.trim().to_string(),
        }
    }

    /// Returns the row issue when this is a row error.
    pub fn row_issue(&self) -> Option<RowIssue> {
        match self {
            Self::Row { issue, .. } => Some(*issue),
            _ => None,
        }
    }
}

/// Reasons a single data row is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowIssue {
    #[error("Invalid number of columns (minimum = {})!", MIN_COLUMNS)]
    TooFewColumns,

    #[error(
        "Invalid number of populated columns (minimum = {})!",
        MIN_POPULATED_COLUMNS
    )]
    TooFewPopulatedColumns,

    #[error("Sample ID contains spaces!")]
    SampleIdContainsSpaces,

    #[error("Sample ID not specified!")]
    SampleIdMissing,

    #[error("FastQ file contains spaces!")]
    FastqContainsSpaces,

    #[error(
        "FastQ file does not have extension '{}' or '{}'!",
        FASTQ_SUFFIXES[0],
        FASTQ_SUFFIXES[1]
    )]
    FastqExtension,

    #[error("Samplesheet contains duplicate rows!")]
    DuplicateRow,
}

/// Result type for samplesheet operations.
pub type Result<T> = std::result::Result<T, SamplesheetError>;
