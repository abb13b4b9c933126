//! Canonical samplesheet output.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{Result, SamplesheetError};
use crate::mapping::SampleMapping;
use crate::schema::HEADER;

/// Writes the canonical header and every row, grouped and sorted by sample.
///
/// Fields are written verbatim: no quoting, `\n` line endings.
pub fn write_canonical<W: Write>(mapping: &SampleMapping, writer: W) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    writer.write_record(HEADER)?;
    for row in mapping.rows() {
        writer.write_record(row.record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Renders the canonical samplesheet to a string.
pub fn render_canonical(mapping: &SampleMapping) -> csv::Result<String> {
    let mut buffer = Vec::new();
    write_canonical(mapping, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| {
        csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}

/// Writes the canonical samplesheet to `path`.
///
/// Missing parent directories are created. Content goes to a sibling temp
/// file first and is renamed into place once complete, so the target never
/// holds a partial file.
pub fn write_samplesheet(mapping: &SampleMapping, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SamplesheetError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(source) = write_file(mapping, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(SamplesheetError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        SamplesheetError::Persist {
            temp_path: temp_path.clone(),
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(
        path = %path.display(),
        samples = mapping.sample_count(),
        rows = mapping.row_count(),
        "wrote canonical samplesheet"
    );
    Ok(())
}

fn write_file(mapping: &SampleMapping, path: &Path) -> csv::Result<()> {
    let mut file = File::create(path)?;
    write_canonical(mapping, &mut file)?;
    file.sync_all()?;
    Ok(())
}

/// Hidden `.<name>.<pid>.tmp` next to the target.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    if let Some(file_name) = path.file_name() {
        name.push(file_name);
    }
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::SampleRow;

    fn mapping(lines: &[&str]) -> SampleMapping {
        let mut mapping = SampleMapping::new();
        for (idx, line) in lines.iter().enumerate() {
            assert!(mapping.insert(SampleRow::parse(line, idx + 2).unwrap()));
        }
        mapping
    }

    #[test]
    fn test_render_sorted_output() {
        let mapping = mapping(&[
            "S2,b_R1.fastq.gz,b_R2.fastq.gz,cancer",
            "S1,a_R1.fq.gz,a_R2.fq.gz,healthy",
            "S2,b_L2_R1.fastq.gz,b_L2_R2.fastq.gz,cancer",
        ]);
        let output = render_canonical(&mapping).unwrap();
        insta::assert_snapshot!(output, @r"
        sample_id,fastq_1,fastq_2,condition
        S1,a_R1.fq.gz,a_R2.fq.gz,healthy
        S2,b_R1.fastq.gz,b_R2.fastq.gz,cancer
        S2,b_L2_R1.fastq.gz,b_L2_R2.fastq.gz,cancer
        ");
    }

    #[test]
    fn test_render_never_quotes() {
        let mapping = mapping(&["S1,a_R1.fq.gz,a_R2.fq.gz,say \"hi\""]);
        let output = render_canonical(&mapping).unwrap();
        assert_eq!(
            output,
            "sample_id,fastq_1,fastq_2,condition\nS1,a_R1.fq.gz,a_R2.fq.gz,say \"hi\n"
        );
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let pid = std::process::id();
        assert_eq!(
            temp_path_for(Path::new("out/samplesheet.valid.csv")),
            PathBuf::from(format!("out/.samplesheet.valid.csv.{pid}.tmp"))
        );
        assert_eq!(
            temp_path_for(Path::new("sheet.csv")),
            PathBuf::from(format!(".sheet.csv.{pid}.tmp"))
        );
    }

    #[test]
    fn test_render_empty_mapping_is_header_only() {
        let output = render_canonical(&SampleMapping::new()).unwrap();
        assert_eq!(output, "sample_id,fastq_1,fastq_2,condition\n");
    }
}
