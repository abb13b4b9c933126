//! CLI library components for the samplesheet checker.

pub mod commands;
pub mod logging;
