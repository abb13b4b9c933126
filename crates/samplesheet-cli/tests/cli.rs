//! End-to-end tests for the `check-samplesheet` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(input: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-samplesheet"))
        .arg(input)
        .arg(output)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run check-samplesheet")
}

fn input_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("samplesheet.csv");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn valid_samplesheet_is_normalized() {
    let dir = TempDir::new().unwrap();
    let input = input_file(
        &dir,
        "sample_id,fastq_1,fastq_2,condition\n\
         S2,b_R1.fastq.gz,b_R2.fastq.gz,cancer\n\
         S1,a_R1.fq.gz,a_R2.fq.gz,healthy\n",
    );
    let output = dir.path().join("out").join("samplesheet.valid.csv");

    let result = run(&input, &output);

    assert_eq!(result.status.code(), Some(0));
    insta::assert_snapshot!(fs::read_to_string(&output).unwrap(), @r"
    sample_id,fastq_1,fastq_2,condition
    S1,a_R1.fq.gz,a_R2.fq.gz,healthy
    S2,b_R1.fastq.gz,b_R2.fastq.gz,cancer
    ");
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("S1"));
    assert!(!stdout.contains("ERROR"));
}

#[test]
fn bad_header_exits_one_without_output() {
    let dir = TempDir::new().unwrap();
    let input = input_file(
        &dir,
        "sampleid,fastq_1,fastq_2,condition\nS1,a_R1.fq.gz,a_R2.fq.gz,healthy\n",
    );
    let output = dir.path().join("samplesheet.valid.csv");

    let result = run(&input, &output);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
    let stdout = String::from_utf8_lossy(&result.stdout);
    insta::assert_snapshot!(
        stdout.trim_end(),
        @"ERROR: Please check samplesheet header -> sampleid,fastq_1,fastq_2,condition != sample_id,fastq_1,fastq_2,condition"
    );
}

#[test]
fn row_error_names_line() {
    let dir = TempDir::new().unwrap();
    let input = input_file(
        &dir,
        "sample_id,fastq_1,fastq_2,condition\n\
         S1,a_R1.fq.gz,a_R2.fq.gz,healthy\n\
         S 2,b_R1.fq.gz,b_R2.fq.gz,cancer\n",
    );
    let output = dir.path().join("samplesheet.valid.csv");

    let result = run(&input, &output);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
    let stdout = String::from_utf8_lossy(&result.stdout);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    ERROR: Please check samplesheet -> Sample ID contains spaces!
    Line 3: 'S 2,b_R1.fq.gz,b_R2.fq.gz,cancer'
    ");
}

#[test]
fn header_only_reports_no_entries() {
    let dir = TempDir::new().unwrap();
    let input = input_file(&dir, "sample_id,fastq_1,fastq_2,condition\n");
    let output = dir.path().join("samplesheet.valid.csv");

    let result = run(&input, &output);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.starts_with("ERROR: Please check samplesheet -> No entries to process!"));
    assert!(stdout.contains(&format!("Samplesheet: '{}'", input.display())));
}

#[test]
fn blocked_output_dir_reports_path() {
    let dir = TempDir::new().unwrap();
    let input = input_file(
        &dir,
        "sample_id,fastq_1,fastq_2,condition\nS1,a_R1.fq.gz,a_R2.fq.gz,healthy\n",
    );
    let blocker = dir.path().join("results");
    fs::write(&blocker, "not a directory").unwrap();
    let output = blocker.join("samplesheet.valid.csv");

    let result = run(&input, &output);

    assert_eq!(result.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&result.stdout);
    let expected = format!(
        "ERROR: failed to create output directory {}: ",
        blocker.display()
    );
    assert!(stdout.starts_with(&expected), "unexpected diagnostic: {stdout}");
    assert!(!stdout.contains("Please check samplesheet"));
}

#[test]
fn missing_input_reports_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");
    let output = dir.path().join("samplesheet.valid.csv");

    let result = run(&input, &output);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert_eq!(
        stdout.trim_end(),
        format!("ERROR: samplesheet not found: {}", input.display())
    );
}

#[test]
fn missing_arguments_fail() {
    let result = Command::new(env!("CARGO_BIN_EXE_check-samplesheet"))
        .output()
        .expect("failed to run check-samplesheet");
    assert!(!result.status.success());
}
