pub mod report;

use crate::types::GeneratorConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for dcm-fixtures
#[derive(Parser, Debug)]
#[command(name = "dcm-fixtures")]
#[command(about = "Generate DICOM fixtures for each transfer syntax and preamble state")]
#[command(version)]
pub struct Cli {
    /// Directory to write fixtures into
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Also generate Deflated Explicit VR Little Endian fixtures
    #[arg(long)]
    pub include_deflated: bool,

    /// Re-read every fixture after writing it
    #[arg(long)]
    pub verify: bool,

    /// Only verify fixtures already present, write nothing
    #[arg(long, conflicts_with = "verify")]
    pub check_only: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Generator configuration described by these arguments
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_output_dir(&self.output_dir)
            .include_deflated(self.include_deflated)
    }
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
