// Output generation module

pub mod templates;

pub use templates::*;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::graph::ScanResult;
use std::path::Path;

/// Render a scan result in the requested format
pub fn render(result: &ScanResult, format: OutputFormat, workspace: &str) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Markdown => TemplateEngine::new()?.render_report(result, workspace),
    }
}

/// Write rendered output to a file, or stdout when no path is given
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "Wrote scan output");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
