//! CLI command definitions

use crate::core::collector::parse_key_value;
use crate::core::config::validate_filename;
use crate::core::Variant;
use clap::Args;
use std::path::PathBuf;

/// Render a pipeline definition
#[derive(Debug, Args, Clone)]
pub struct RenderCommand {
    /// Which generator to use
    #[arg(value_enum)]
    pub variant: VariantArg,

    /// YAML or JSON file with field values
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Field overrides (key=value), applied after the values file
    #[arg(long = "set", value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,

    /// Use a custom template instead of the built-in one
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Copy the rendered pipeline to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Save the rendered pipeline to a file
    #[arg(long)]
    pub download: bool,

    /// Directory for --download (defaults to the configured output directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// File name for --download (defaults to Jenkinsfile)
    #[arg(long, value_parser = parse_filename)]
    pub filename: Option<String>,

    /// Don't print the pipeline to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

/// List the fields a generator accepts
#[derive(Debug, Args, Clone)]
pub struct FieldsCommand {
    /// Which generator to describe
    #[arg(value_enum)]
    pub variant: VariantArg,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Print an empty values file for a generator
#[derive(Debug, Args, Clone)]
pub struct InitCommand {
    /// Which generator to describe
    #[arg(value_enum)]
    pub variant: VariantArg,
}

/// Check a custom template against a generator's fields
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Which generator the template is for
    #[arg(value_enum)]
    pub variant: VariantArg,

    /// Path to the template file
    #[arg(short, long)]
    pub template: PathBuf,
}

/// Generator argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VariantArg {
    Simple,
    #[clap(name = "blue-green")]
    BlueGreen,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Simple => Variant::Simple,
            VariantArg::BlueGreen => Variant::BlueGreen,
        }
    }
}

/// Parse a download file name
pub fn parse_filename(s: &str) -> Result<String, String> {
    validate_filename(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
