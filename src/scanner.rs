// Workspace scanning: walk, dispatch, register, infer

use crate::config::{Config, ScanConfig};
use crate::error::Result;
use crate::extract::{Discovery, SourceFormat};
use crate::graph::{ConnectionInferencer, ResourceRegistry, ScanResult};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Directory names never descended into
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".venv",
    "venv",
    "__pycache__",
    "bin",
    "obj",
    "dist",
    "build",
    ".terraform",
    ".next",
];

/// Scans one workspace directory for Azure resources
pub struct WorkspaceScanner {
    root: PathBuf,
    config: ScanConfig,
    exclude_patterns: Vec<glob::Pattern>,
    inferencer: Option<ConnectionInferencer>,
    verbose: bool,
}

impl WorkspaceScanner {
    /// Create a scanner with default settings
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: ScanConfig::default(),
            exclude_patterns: Vec::new(),
            inferencer: Some(ConnectionInferencer::default()),
            verbose: false,
        }
    }

    /// Create a scanner honoring a loaded configuration
    pub fn with_config(root: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: root.into(),
            exclude_patterns: config.scan.exclude_patterns()?,
            config: config.scan.clone(),
            inferencer: config
                .connections
                .enabled
                .then(ConnectionInferencer::default),
            verbose: false,
        })
    }

    /// Show a progress bar while extracting
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the scan
    ///
    /// Never fails: unreadable files contribute nothing and a missing root
    /// yields an empty result.
    pub fn scan(&self) -> ScanResult {
        if !self.root.is_dir() {
            tracing::warn!(root = %self.root.display(), "Workspace directory does not exist");
            return ScanResult::default();
        }

        let files = self.discover_files();
        let extracted = self.extract_all(&files);

        let mut registry = ResourceRegistry::new(&self.root);
        let mut files_failed = 0;
        for ((_, path), discoveries) in files.iter().zip(extracted) {
            let Some(discoveries) = discoveries else {
                files_failed += 1;
                continue;
            };
            for discovery in discoveries {
                registry.register(discovery.kind, &discovery.name, path, discovery.line);
            }
        }

        let connections = match &self.inferencer {
            Some(inferencer) => inferencer.infer(&registry),
            None => Vec::new(),
        };

        tracing::info!(
            root = %self.root.display(),
            files = files.len(),
            failed = files_failed,
            resources = registry.len(),
            connections = connections.len(),
            "Scan complete"
        );

        ScanResult {
            resources: registry.into_resources(),
            connections,
            files_scanned: files.len(),
            files_failed,
        }
    }

    /// Candidate files with their format, in processing order
    ///
    /// Formats are processed Bicep, Terraform, ARM, then code; paths are
    /// sorted within each format so id assignment is reproducible.
    pub fn discover_files(&self) -> Vec<(SourceFormat, PathBuf)> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_type().is_dir() || !self.is_excluded_dir(e.file_name())
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if self.should_exclude(path) {
                continue;
            }

            if let Some(format) = SourceFormat::detect(path, &self.config) {
                files.push((format, path.to_path_buf()));
            }
        }

        files.sort();
        files
    }

    fn is_excluded_dir(&self, name: &OsStr) -> bool {
        let Some(name) = name.to_str() else {
            return false;
        };
        EXCLUDED_DIRS.contains(&name) || self.config.exclude_dirs.iter().any(|d| d == name)
    }

    /// Check a file against the excluded segments and configured globs
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);

        let in_excluded_dir = relative.components().any(|c| match c {
            Component::Normal(segment) => self.is_excluded_dir(segment),
            _ => false,
        });
        if in_excluded_dir {
            return true;
        }

        self.exclude_patterns.iter().any(|p| p.matches_path(relative))
    }

    /// Read and extract every file; `None` marks a file that could not be read
    fn extract_all(&self, files: &[(SourceFormat, PathBuf)]) -> Vec<Option<Vec<Discovery>>> {
        let progress = self.verbose.then(|| {
            let pb = ProgressBar::new(files.len() as u64);
            if let Ok(style) =
                ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        });

        let extracted: Vec<Option<Vec<Discovery>>> = files
            .par_iter()
            .map(|(format, path)| {
                let result = extract_file(*format, path);
                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                result
            })
            .collect();

        if let Some(pb) = progress {
            pb.finish_with_message("Extraction complete");
        }

        extracted
    }
}

fn extract_file(format: SourceFormat, path: &Path) -> Option<Vec<Discovery>> {
    let content = match read_text(path) {
        Ok(content) => content,
        Err(e) if format.is_infrastructure() => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read {:?} file", format);
            return None;
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Failed to read code file");
            return None;
        }
    };

    tracing::debug!(path = %path.display(), format = ?format, "Extracting");
    Some(format.extractor().extract(&content, path))
}

/// Read a file as text, replacing invalid UTF-8 rather than failing
fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Scan a workspace from async code
///
/// The scan runs on the blocking pool and completes as a single unit.
pub async fn scan_workspace(root: impl Into<PathBuf>) -> ScanResult {
    let scanner = WorkspaceScanner::new(root);
    match tokio::task::spawn_blocking(move || scanner.scan()).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Scan task did not complete");
            ScanResult::default()
        }
    }
}
