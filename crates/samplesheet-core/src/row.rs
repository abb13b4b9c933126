//! Data row parsing and per-field checks.

use crate::error::{Result, RowIssue, SamplesheetError};
use crate::schema::{FastqSuffix, MIN_COLUMNS, MIN_POPULATED_COLUMNS, split_fields};

/// A validated paired-end samplesheet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRow {
    pub sample_id: String,
    pub fastq_1: String,
    pub fastq_2: String,
    pub condition: String,
    /// 1-based line in the source file. Not part of record identity.
    pub line_number: usize,
}

impl SampleRow {
    /// Parses and checks one raw data line.
    ///
    /// Columns beyond the fourth are discarded.
    pub fn parse(line: &str, line_number: usize) -> Result<Self> {
        let reject = |issue| SamplesheetError::row(issue, line_number, line);

        let fields = split_fields(line);
        if fields.len() < MIN_COLUMNS {
            return Err(reject(RowIssue::TooFewColumns));
        }
        let required = &fields[..MIN_COLUMNS];
        let populated = required.iter().filter(|field| !field.is_empty()).count();
        if populated < MIN_POPULATED_COLUMNS {
            return Err(reject(RowIssue::TooFewPopulatedColumns));
        }

        let (sample_id, fastq_1, fastq_2, condition) =
            (required[0], required[1], required[2], required[3]);
        if sample_id.contains(' ') {
            return Err(reject(RowIssue::SampleIdContainsSpaces));
        }
        if sample_id.is_empty() {
            return Err(reject(RowIssue::SampleIdMissing));
        }
        for fastq in [fastq_1, fastq_2] {
            if let Some(issue) = fastq_issue(fastq) {
                return Err(reject(issue));
            }
        }

        Ok(Self {
            sample_id: sample_id.to_string(),
            fastq_1: fastq_1.to_string(),
            fastq_2: fastq_2.to_string(),
            condition: condition.to_string(),
            line_number,
        })
    }

    /// The normalized fields in output column order.
    pub fn record(&self) -> [&str; 4] {
        [
            self.sample_id.as_str(),
            self.fastq_1.as_str(),
            self.fastq_2.as_str(),
            self.condition.as_str(),
        ]
    }

    /// True when both rows carry the same fields, whatever their lines.
    pub fn same_record(&self, other: &Self) -> bool {
        self.record() == other.record()
    }
}

fn fastq_issue(fastq: &str) -> Option<RowIssue> {
    if fastq.is_empty() {
        return None;
    }
    if fastq.contains(' ') {
        return Some(RowIssue::FastqContainsSpaces);
    }
    match FastqSuffix::detect(fastq) {
        Some(_) => None,
        None => Some(RowIssue::FastqExtension),
    }
}
