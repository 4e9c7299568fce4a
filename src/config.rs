use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "infrascan.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
    pub connections: ConnectionConfig,
}

/// Workspace walk settings
///
/// These only ever add exclusions; the built-in directory set is always pruned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extra directory names to prune, matched against whole path segments
    pub exclude_dirs: Vec<String>,
    /// Glob patterns matched against workspace-relative file paths
    pub exclude: Vec<String>,
    /// Extensions (without the dot) scanned for SDK usage
    pub code_extensions: Vec<String>,
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub path: Option<PathBuf>,
}

/// Connection inference settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub enabled: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    #[serde(alias = "md")]
    #[value(alias = "md")]
    Markdown,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: vec![],
            exclude: vec![],
            code_extensions: ["cs", "py", "js", "ts", "java"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ScanConfig {
    /// Compile the configured glob exclusions
    pub fn exclude_patterns(&self) -> Result<Vec<glob::Pattern>> {
        self.exclude
            .iter()
            .map(|p| glob::Pattern::new(p).map_err(Error::from))
            .collect()
    }

    /// Check whether an extension is configured for SDK usage scanning
    pub fn is_code_extension(&self, ext: &str) -> bool {
        self.code_extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
                Self::default()
            }
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    ///
    /// Exclusions containing glob metacharacters become path patterns, anything
    /// else is treated as a directory name.
    pub fn merge_cli(
        &mut self,
        output: Option<PathBuf>,
        exclude: Vec<String>,
        format: Option<OutputFormat>,
        no_connections: bool,
    ) {
        if let Some(out) = output {
            self.output.path = Some(out);
        }

        for item in exclude {
            if item.contains(['*', '?', '[']) {
                self.scan.exclude.push(item);
            } else {
                self.scan.exclude_dirs.push(item);
            }
        }

        if let Some(format) = format {
            self.output.format = format;
        }

        if no_connections {
            self.connections.enabled = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.code_extensions.is_empty() {
            return Err(Error::config_validation(
                "at least one code extension required",
            ));
        }

        if self.scan.exclude_dirs.iter().any(|d| d.trim().is_empty()) {
            return Err(Error::config_validation("exclude_dirs entries must not be blank"));
        }

        self.scan.exclude_patterns()?;

        Ok(())
    }
}
