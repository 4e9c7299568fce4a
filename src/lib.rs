//! Infrascan - infer Azure resource inventories from source workspaces
//!
//! Scans Bicep, Terraform, ARM template and application code files for
//! resource declarations and SDK usage, deduplicates what it finds, and
//! infers likely connections between the resulting resources.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod graph;
pub mod logging;
pub mod output;
pub mod scanner;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use graph::{Connection, DiscoveredResource, ScanResult, SourceLocation};
pub use scanner::{scan_workspace, WorkspaceScanner};
