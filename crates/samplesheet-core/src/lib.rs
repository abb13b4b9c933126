//! Samplesheet validation and normalization.
//!
//! A samplesheet is a comma-delimited file listing paired-end FastQ files per
//! sample:
//!
//! ```text
//! sample_id,fastq_1,fastq_2,condition
//! S1,S1_R1.fastq.gz,S1_R2.fastq.gz,healthy
//! ```
//!
//! [`check_samplesheet`] enforces the header and per-row rules, rejects exact
//! duplicate rows, and writes a canonical copy with rows grouped and sorted
//! by `sample_id`. The first failure aborts the whole check.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use samplesheet_core::check_samplesheet;
//!
//! let summary = check_samplesheet(
//!     Path::new("samplesheet.csv"),
//!     Path::new("results/samplesheet.valid.csv"),
//! )?;
//! println!("{} samples", summary.sample_count());
//! ```

mod check;
mod error;
mod header;
mod mapping;
mod row;
pub mod schema;
mod writer;

// === Error Types ===
pub use error::{Result, RowIssue, SamplesheetError};

// === Checking ===
pub use check::{
    CheckSummary, SampleCount, check_samplesheet, parse_samplesheet, read_samplesheet,
};
pub use header::check_header;
pub use row::SampleRow;

// === Grouping and Output ===
pub use mapping::SampleMapping;
pub use writer::{render_canonical, write_canonical, write_samplesheet};
