//! Header row check.

use crate::error::{Result, SamplesheetError};
use crate::schema::{HEADER, canonical_header, split_fields};

/// Checks the header line and returns the observed column names.
///
/// Only the leading columns are compared, case-sensitively; trailing extra
/// columns are returned but otherwise ignored.
pub fn check_header(line: &str) -> Result<Vec<String>> {
    let columns: Vec<String> = split_fields(line)
        .into_iter()
        .map(str::to_string)
        .collect();
    let matches = columns.len() >= HEADER.len()
        && columns.iter().zip(HEADER).all(|(found, expected)| found == expected);
    if !matches {
        return Err(SamplesheetError::Header {
            found: columns.join(","),
            expected: canonical_header(),
        });
    }
    Ok(columns)
}
