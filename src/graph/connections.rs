// Heuristic relationship inference between registered resources

use super::registry::ResourceRegistry;
use crate::catalog::{self, ConnectionRule};
use serde::{Deserialize, Serialize};

/// A directed, labeled edge between two resource ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    pub label: String,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }
}

/// Applies kind-to-kind rules over a completed registry
///
/// Each rule connects every instance of its source kind to every instance of
/// its target kind. Rules are independent; nothing is deduplicated.
pub struct ConnectionInferencer {
    rules: Vec<ConnectionRule>,
}

impl Default for ConnectionInferencer {
    fn default() -> Self {
        Self::new(catalog::connection_rules().to_vec())
    }
}

impl ConnectionInferencer {
    pub fn new(rules: Vec<ConnectionRule>) -> Self {
        Self { rules }
    }

    pub fn infer(&self, registry: &ResourceRegistry) -> Vec<Connection> {
        let index = registry.kind_index();
        let mut connections = Vec::new();

        for rule in &self.rules {
            let (Some(sources), Some(targets)) = (index.get(rule.source), index.get(rule.target)) else {
                continue;
            };

            for source in sources {
                for target in targets {
                    connections.push(Connection::new(*source, *target, rule.label));
                }
            }
        }

        connections
    }
}
