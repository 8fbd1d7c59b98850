//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{CheckCommand, FieldsCommand, InitCommand, RenderCommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Jenkinsfile generator
#[derive(Debug, Parser, Clone)]
#[command(name = "pipegen")]
#[command(author = "pipegen contributors")]
#[command(version = "0.1.0")]
#[command(about = "Generates Jenkins pipelines from deployment settings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render a pipeline definition
    Render(RenderCommand),

    /// List the fields a generator accepts
    Fields(FieldsCommand),

    /// Print an empty values file
    Init(InitCommand),

    /// Check a custom template
    Check(CheckCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
