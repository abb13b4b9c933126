//! Samplesheet schema: required columns, limits and file-name rules.

/// Required leading header columns, in order.
pub const HEADER: [&str; 4] = ["sample_id", "fastq_1", "fastq_2", "condition"];

/// Minimum number of fields a data row must have.
pub const MIN_COLUMNS: usize = HEADER.len();

/// Minimum number of non-empty fields among the required columns.
pub const MIN_POPULATED_COLUMNS: usize = 4;

/// Accepted FastQ file suffixes, in matching priority.
pub const FASTQ_SUFFIXES: [&str; 2] = [FastqSuffix::FastqGz.as_str(), FastqSuffix::FqGz.as_str()];

/// Canonical header line written to every output file.
pub fn canonical_header() -> String {
    HEADER.join(",")
}

/// Recognized compressed FastQ extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastqSuffix {
    /// `.fastq.gz`
    FastqGz,
    /// `.fq.gz`
    FqGz,
}

impl FastqSuffix {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FastqGz => ".fastq.gz",
            Self::FqGz => ".fq.gz",
        }
    }

    /// Detects the suffix of a FastQ path, checking `.fastq.gz` first.
    pub fn detect(path: &str) -> Option<Self> {
        [Self::FastqGz, Self::FqGz]
            .into_iter()
            .find(|suffix| path.ends_with(suffix.as_str()))
    }
}

/// Splits a raw line on commas, trimming whitespace, then surrounding
/// double quotes, then whitespace again from each field.
///
/// The second trim keeps the canonical output a fixed point: a quoted
/// `" healthy"` is written unquoted and would otherwise be trimmed on rerun.
///
/// Quoted commas are not special: the samplesheet format never quotes a
/// delimiter, so a quote only wraps a whole field.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.trim()
        .split(',')
        .map(|field| field.trim().trim_matches('"').trim())
        .collect()
}
