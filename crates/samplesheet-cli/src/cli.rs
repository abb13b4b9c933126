//! CLI argument definitions for the samplesheet checker.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "check-samplesheet",
    version,
    about = "Reformat samplesheet file and check its contents.",
    long_about = "Reformat samplesheet file and check its contents.\n\n\
                  Requires the header sample_id,fastq_1,fastq_2,condition and one paired-end\n\
                  entry per row. Writes a copy with rows grouped and sorted by sample_id.",
    after_help = "Example usage: check-samplesheet <FILE_IN> <FILE_OUT>"
)]
pub struct Cli {
    /// Input samplesheet file.
    #[arg(value_name = "FILE_IN")]
    pub file_in: PathBuf,

    /// Output file.
    #[arg(value_name = "FILE_OUT")]
    pub file_out: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
