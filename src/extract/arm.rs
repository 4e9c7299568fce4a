// ARM deployment templates (JSON)

use super::{title_case_identifier, Discovery, Extractor, SourceFormat};
use crate::catalog;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Extracts resources from ARM template documents, including nested child
/// resources at any depth
pub struct ArmTemplateExtractor;

impl ArmTemplateExtractor {
    /// Cheap textual check run before committing to a full JSON parse
    pub fn is_deployment_template(content: &str) -> bool {
        content.contains("\"$schema\"") && content.to_lowercase().contains("deploymenttemplate")
    }

    /// Pre-order walk over `resources` and their nested children
    ///
    /// Uses an explicit stack so nesting depth is bounded only by the document.
    fn walk_resources(resources: &[Value]) -> Vec<Discovery> {
        let mut found = Vec::new();
        let mut pending: Vec<&Value> = resources.iter().rev().collect();

        while let Some(resource) = pending.pop() {
            let Some(entry) = resource.as_object() else {
                continue;
            };

            let resource_type = entry
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_lowercase();

            if let Some(kind) = catalog::lookup_template_type(&resource_type) {
                let name = Self::display_name(entry.get("name"), &resource_type);
                found.push(Discovery::new(kind, name, None));
            }

            if let Some(Value::Array(children)) = entry.get("resources") {
                pending.extend(children.iter().rev());
            }
        }

        found
    }

    /// Literal names are kept; template expressions (`[concat(...)]`) are
    /// replaced by the last type segment
    fn display_name(name: Option<&Value>, resource_type: &str) -> String {
        match name {
            None => "Unknown".to_string(),
            Some(Value::String(s)) if s.starts_with('[') => {
                let last = resource_type.rsplit('/').next().unwrap_or(resource_type);
                title_case_identifier(last)
            }
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl Extractor for ArmTemplateExtractor {
    fn format(&self) -> SourceFormat {
        SourceFormat::ArmTemplate
    }

    fn extract(&self, content: &str, path: &Path) -> Vec<Discovery> {
        if !Self::is_deployment_template(content) {
            return Vec::new();
        }

        let document = match parse_document(content) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Skipping unparseable template");
                return Vec::new();
            }
        };

        let found = match document.get("resources") {
            Some(Value::Array(resources)) => Self::walk_resources(resources),
            _ => Vec::new(),
        };
        release(document);
        found
    }
}

/// Parse JSON without serde_json's recursion limit, growing the stack on demand
fn parse_document(content: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(content);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Drop a document iteratively; `Value`'s own drop recurses once per level
fn release(document: Value) {
    let mut pending = vec![document];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(map) => pending.extend(map.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}
