//! CLI argument parsing

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer Azure resources and their relationships from a workspace
#[derive(Parser, Debug)]
#[command(name = "infrascan")]
#[command(about = "Infer Azure resources and their relationships from a workspace")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a workspace and print the discovered resources and connections
    Scan {
        /// Workspace root to scan
        path: PathBuf,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory names or glob patterns to exclude (can be repeated)
        #[arg(long)]
        exclude: Vec<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Skip connection inference
        #[arg(long)]
        no_connections: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List every resource kind the scanner can report
    Kinds,

    /// Show version information
    Version,
}
