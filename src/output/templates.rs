// Template engine for the Markdown inventory report

use crate::error::Result;
use crate::graph::ScanResult;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

/// Template engine wrapping Tera with the report template and filters
pub struct TemplateEngine {
    tera: Tera,
}

/// One table row in the report
#[derive(Debug, Serialize)]
struct ResourceRow<'a> {
    id: &'a str,
    kind: &'a str,
    name: &'a str,
    location: String,
}

/// One connection line, with names resolved for readability
#[derive(Debug, Serialize)]
struct ConnectionRow<'a> {
    source: &'a str,
    source_name: &'a str,
    target: &'a str,
    target_name: &'a str,
    label: &'a str,
}

impl TemplateEngine {
    /// Create a template engine with the embedded report template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("report.md", include_str!("../../templates/report.md.tera"))?;

        tera.register_filter("pluralize", pluralize);
        tera.register_filter("md_cell", md_cell);

        Ok(Self { tera })
    }

    /// Render the inventory report for a scan
    pub fn render_report(&self, result: &ScanResult, workspace: &str) -> Result<String> {
        let resources: Vec<ResourceRow> = result
            .resources
            .iter()
            .map(|r| ResourceRow {
                id: &r.id,
                kind: &r.resource_kind,
                name: &r.display_name,
                location: r.source_location.to_string(),
            })
            .collect();

        let connections: Vec<ConnectionRow> = result
            .connections
            .iter()
            .map(|c| ConnectionRow {
                source: &c.source,
                source_name: result.resource(&c.source).map_or(&c.source, |r| &r.display_name),
                target: &c.target,
                target_name: result.resource(&c.target).map_or(&c.target, |r| &r.display_name),
                label: &c.label,
            })
            .collect();

        let mut context = Context::new();
        context.insert("workspace", workspace);
        context.insert("stats", &result.stats());
        context.insert("resources", &resources);
        context.insert("connections", &connections);

        Ok(self.tera.render("report.md", &context)?)
    }
}

/// Pluralize a word based on count
fn pluralize(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let count = value.as_u64().unwrap_or(0);
    let singular = args
        .get("singular")
        .and_then(|v| v.as_str())
        .unwrap_or("item");
    let default_plural = format!("{}s", singular);
    let plural = args
        .get("plural")
        .and_then(|v| v.as_str())
        .unwrap_or(&default_plural);

    if count == 1 {
        Ok(Value::String(format!("{} {}", count, singular)))
    } else {
        Ok(Value::String(format!("{} {}", count, plural)))
    }
}

/// Make a value safe inside a Markdown table cell
fn md_cell(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value.as_str().unwrap_or("");
    Ok(Value::String(escape_cell(s)))
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Connection, ResourceRegistry};
    use std::path::Path;

    fn sample() -> ScanResult {
        let mut reg = ResourceRegistry::new("/w");
        let web = reg.register("AppService", "my-app", Path::new("/w/main.bicep"), Some(3));
        let db = reg.register("SQLDatabase", "orders|prod", Path::new("/w/db.tf"), Some(1));
        ScanResult {
            resources: reg.into_resources(),
            connections: vec![Connection::new(web, db, "Database")],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_report() {
        let engine = TemplateEngine::new().unwrap();
        let report = engine.render_report(&sample(), "demo").unwrap();

        assert!(report.starts_with("# Azure resource inventory: demo"));
        assert!(report.contains("Found 2 resources and 1 connection."));
        assert!(report.contains("| `appservice_1` | AppService | my-app | main.bicep:3 |"));
        assert!(report.contains("orders\\|prod"));
        assert!(report.contains("- AppService: 1"));
        assert!(report.contains("my-app (`appservice_1`) --Database--> orders\\|prod (`sqldatabase_2`)"));
    }

    #[test]
    fn test_render_empty_report() {
        let engine = TemplateEngine::new().unwrap();
        let report = engine.render_report(&ScanResult::default(), "empty").unwrap();
        assert!(report.contains("Found 0 resources and 0 connections."));
        assert!(report.contains("_No resources discovered._"));
        assert!(report.contains("_No connections inferred._"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("line\nbreak"), "line break");
    }

    #[test]
    fn test_pluralize() {
        let mut args = HashMap::new();
        args.insert("singular".to_string(), Value::String("resource".to_string()));
        assert_eq!(pluralize(&Value::Number(1.into()), &args).unwrap(), "1 resource");
        assert_eq!(pluralize(&Value::Number(0.into()), &args).unwrap(), "0 resources");
    }
}
