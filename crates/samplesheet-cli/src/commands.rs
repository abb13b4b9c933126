use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use samplesheet_core::{CheckSummary, check_samplesheet};

/// Prefix shared by every diagnostic printed for a failed check.
pub const DIAGNOSTIC_PREFIX: &str = "ERROR:";

pub fn run_check(input: &Path, output: &Path) -> Result<CheckSummary> {
    let summary = check_samplesheet(input, output)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        samples = summary.sample_count(),
        rows = summary.row_count(),
        "samplesheet check passed"
    );
    Ok(summary)
}

/// Human-readable diagnostic for a failed check.
///
/// Core errors already carry the offending line, so only the outermost
/// message is rendered.
pub fn diagnostic(failure: &anyhow::Error) -> String {
    error!(error = %failure, "samplesheet check failed");
    format!("{DIAGNOSTIC_PREFIX} {failure}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use samplesheet_core::SamplesheetError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_diagnostic_prefix() {
        let failure = anyhow::Error::from(SamplesheetError::Header {
            found: "sampleid,fastq_1,fastq_2,condition".to_string(),
            expected: "sample_id,fastq_1,fastq_2,condition".to_string(),
        });
        assert_eq!(
            diagnostic(&failure),
            "ERROR: Please check samplesheet header -> sampleid,fastq_1,fastq_2,condition \
             != sample_id,fastq_1,fastq_2,condition"
        );
    }

    #[test]
    fn test_file_system_diagnostic_names_path() {
        let failure = anyhow::Error::from(SamplesheetError::CreateDir {
            path: PathBuf::from("results"),
            source: io::Error::new(io::ErrorKind::NotADirectory, "Not a directory"),
        });
        assert_eq!(
            diagnostic(&failure),
            "ERROR: failed to create output directory results: Not a directory"
        );
    }
}
