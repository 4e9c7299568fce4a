//! CLI module for Infrascan

mod args;

pub use args::{Args, Command};

use crate::catalog;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::logging;
use crate::output;
use crate::scanner::WorkspaceScanner;
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Scan {
            path,
            output,
            exclude,
            config,
            format,
            no_connections,
            verbose,
        } => {
            logging::init(verbose);

            // An explicitly named config file must load; the default one is optional
            let mut cfg = match &config {
                Some(config_path) if !config_path.exists() => {
                    return Err(Error::PathNotFound(config_path.clone()));
                }
                Some(config_path) => Config::load(config_path)?,
                None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
            };

            cfg.merge_cli(output, exclude, format, no_connections);

            tracing::debug!(
                path = %path.display(),
                format = ?cfg.output.format,
                exclude_dirs = ?cfg.scan.exclude_dirs,
                exclude = ?cfg.scan.exclude,
                connections = cfg.connections.enabled,
                "Starting scan"
            );

            let scanner = WorkspaceScanner::with_config(&path, &cfg)?.with_verbose(verbose);
            let result = scanner.scan();

            if verbose {
                eprintln!(
                    "Scanned {} files ({} unreadable): {} resources, {} connections",
                    result.files_scanned,
                    result.files_failed,
                    result.resources.len(),
                    result.connections.len()
                );
            }

            let workspace = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("workspace")
                .to_string();

            let rendered = output::render(&result, cfg.output.format, &workspace)?;
            output::write_output(&rendered, cfg.output.path.as_deref())
        }

        Command::Kinds => {
            for kind in catalog::all_kinds() {
                println!("{}", kind);
            }
            Ok(())
        }

        Command::Version => {
            println!("infrascan {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
