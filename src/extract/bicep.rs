// Bicep resource declarations: resource <ident> '<type>@<version>' = { ... }

use super::{line_of, title_case_identifier, window, Discovery, Extractor, SourceFormat};
use crate::catalog;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Characters after a declaration searched for its `name:` property
const NAME_WINDOW: usize = 500;

static RESOURCE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"resource\s+(\w+)\s+'([^']+)@[^']+'\s*=").expect("valid bicep resource regex")
});

static NAME_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"name:\s*'([^']+)'").expect("valid bicep name regex"));

/// Extracts resources from `.bicep` files
pub struct BicepExtractor;

impl BicepExtractor {
    fn display_name(content: &str, after: usize, ident: &str) -> String {
        NAME_PROPERTY
            .captures(window(content, after, NAME_WINDOW))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| title_case_identifier(ident))
    }
}

impl Extractor for BicepExtractor {
    fn format(&self) -> SourceFormat {
        SourceFormat::Bicep
    }

    fn extract(&self, content: &str, path: &Path) -> Vec<Discovery> {
        let mut found = Vec::new();

        for caps in RESOURCE_DECL.captures_iter(content) {
            let (Some(whole), Some(ident), Some(resource_type)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            let Some(kind) = catalog::lookup_template_type(resource_type.as_str()) else {
                tracing::trace!(path = %path.display(), resource_type = resource_type.as_str(), "Unmapped bicep type");
                continue;
            };

            let name = Self::display_name(content, whole.end(), ident.as_str());
            found.push(Discovery::new(kind, name, Some(line_of(content, whole.start()))));
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<Discovery> {
        BicepExtractor.extract(content, Path::new("main.bicep"))
    }

    #[test]
    fn test_web_app_with_name() {
        let found = extract(
            "param location string\n\nresource webApp 'Microsoft.Web/sites@2022-03-01' = {\n  name: 'my-app'\n  location: location\n}\n",
        );
        assert_eq!(found, vec![Discovery::new("AppService", "my-app", Some(3))]);
    }

    #[test]
    fn test_fallback_to_identifier() {
        let found = extract("resource app_db 'Microsoft.Sql/servers/databases@2021-11-01' = {\n  location: 'westeurope'\n}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, "SQLDatabase");
        assert_eq!(found[0].name, "App Db");
    }

    #[test]
    fn test_interpolated_name_falls_back() {
        // Only single-quoted literals count as names
        let found = extract("resource kv 'Microsoft.KeyVault/vaults@2023-02-01' = {\n  name: kvName\n}");
        assert_eq!(found[0].name, "Kv");
    }

    #[test]
    fn test_name_outside_window_is_ignored() {
        let padding = " ".repeat(NAME_WINDOW + 10);
        let content = format!(
            "resource sa 'Microsoft.Storage/storageAccounts@2023-01-01' = {{{}name: 'late'\n}}",
            padding
        );
        let found = extract(&content);
        assert_eq!(found[0].name, "Sa");
    }

    #[test]
    fn test_window_measured_in_characters() {
        let comment = "\u{8aac}".repeat(200);
        let content = format!(
            "resource webApp 'Microsoft.Web/sites@2022-03-01' = {{\n  // {}\n  name: 'my-app'\n}}",
            comment
        );
        let found = extract(&content);
        assert_eq!(found[0].name, "my-app");
    }

    #[test]
    fn test_unmapped_type_skipped() {
        let found = extract("resource rg 'Microsoft.Resources/resourceGroups@2021-04-01' = {\n  name: 'rg'\n}");
        assert!(found.is_empty());
    }

    #[test]
    fn test_multiple_resources_with_lines() {
        let content = "resource plan 'Microsoft.Web/serverfarms@2022-03-01' = {\n  name: 'plan'\n}\n\nresource cache 'Microsoft.Cache/redis@2023-04-01' = {\n  name: 'cache'\n}\n";
        let found = extract(content);
        assert_eq!(
            found,
            vec![
                Discovery::new("AppServicePlan", "plan", Some(1)),
                Discovery::new("Redis", "cache", Some(5)),
            ]
        );
    }

    #[test]
    fn test_existing_resource_without_version_is_ignored() {
        assert!(extract("resource x 'Microsoft.Web/sites' existing = {}").is_empty());
    }

    #[test]
    fn test_garbage_input() {
        assert!(extract("\u{0}\u{1}resource resource ' = {{{").is_empty());
    }
}
