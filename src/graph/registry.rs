// Resource identity and deduplication

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a resource was first discovered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path relative to the workspace root
    pub file: PathBuf,
    /// 1-based line, absent for whole-document and code-usage discoveries
    pub line: Option<usize>,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file.display(), line),
            None => write!(f, "{}", self.file.display()),
        }
    }
}

/// A cloud resource inferred from the workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredResource {
    pub id: String,
    pub resource_kind: String,
    pub display_name: String,
    pub source_location: SourceLocation,
    /// Reserved for logical grouping; never set by the scanner
    pub group: Option<String>,
    pub rationale: String,
    /// Reserved for downstream consumers; always empty here
    pub related_connection_ids: Vec<String>,
}

/// Assigns ids to discoveries, collapsing repeats of the same (name, kind)
#[derive(Debug)]
pub struct ResourceRegistry {
    workspace_root: PathBuf,
    resources: Vec<DiscoveredResource>,
    counter: usize,
}

impl ResourceRegistry {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            resources: Vec::new(),
            counter: 0,
        }
    }

    /// Register a discovery and return its id
    ///
    /// A resource with the same display name and kind keeps its original id
    /// and location; nothing is recorded for the repeat.
    pub fn register(
        &mut self,
        resource_kind: &str,
        display_name: &str,
        source_file: &Path,
        line: Option<usize>,
    ) -> String {
        if let Some(existing) = self
            .resources
            .iter()
            .find(|r| r.display_name == display_name && r.resource_kind == resource_kind)
        {
            return existing.id.clone();
        }

        self.counter += 1;
        let id = format!("{}_{}", resource_kind.to_lowercase(), self.counter);
        let location = SourceLocation {
            file: self.relative_path(source_file),
            line,
        };

        self.resources.push(DiscoveredResource {
            id: id.clone(),
            resource_kind: resource_kind.to_string(),
            display_name: display_name.to_string(),
            rationale: format!("Discovered in {}", location),
            source_location: location,
            group: None,
            related_connection_ids: Vec::new(),
        });

        id
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.workspace_root)
            .unwrap_or(path)
            .to_path_buf()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DiscoveredResource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Resources in registration order
    pub fn resources(&self) -> &[DiscoveredResource] {
        &self.resources
    }

    /// Resource ids grouped by kind, each list in registration order
    pub fn kind_index(&self) -> HashMap<&str, Vec<&str>> {
        let mut index: HashMap<&str, Vec<&str>> = HashMap::new();
        for resource in &self.resources {
            index
                .entry(resource.resource_kind.as_str())
                .or_default()
                .push(resource.id.as_str());
        }
        index
    }

    pub fn into_resources(self) -> Vec<DiscoveredResource> {
        self.resources
    }
}
