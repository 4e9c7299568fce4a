// Resource graph: identities, edges and the assembled scan result

pub mod connections;
pub mod registry;

pub use connections::*;
pub use registry::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything a single scan produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub resources: Vec<DiscoveredResource>,
    pub connections: Vec<Connection>,
    /// Files handed to an extractor
    #[serde(skip)]
    pub files_scanned: usize,
    /// Files that could not be read
    #[serde(skip)]
    pub files_failed: usize,
}

/// Summary counts for reporting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub resources: usize,
    pub connections: usize,
    pub by_kind: BTreeMap<String, usize>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.connections.is_empty()
    }

    pub fn stats(&self) -> ScanStats {
        let mut by_kind = BTreeMap::new();
        for resource in &self.resources {
            *by_kind.entry(resource.resource_kind.clone()).or_insert(0) += 1;
        }
        ScanStats {
            resources: self.resources.len(),
            connections: self.connections.len(),
            by_kind,
        }
    }

    pub fn resource(&self, id: &str) -> Option<&DiscoveredResource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Split into the (resources, connections) pair consumed by renderers
    pub fn into_parts(self) -> (Vec<DiscoveredResource>, Vec<Connection>) {
        (self.resources, self.connections)
    }
}
