// Terraform azurerm resource blocks: resource "<type>" "<name>" { ... }

use super::{line_of, title_case_identifier, window, Discovery, Extractor, SourceFormat};
use crate::catalog;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Characters after a block header searched for its `name` attribute
const NAME_WINDOW: usize = 1000;

static RESOURCE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"resource\s+"(azurerm_\w+)"\s+"(\w+)"\s*\{"#).expect("valid terraform block regex")
});

static NAME_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name\s*=\s*"([^"]+)""#).expect("valid terraform name regex"));

/// Extracts resources from `.tf` files
pub struct TerraformExtractor;

impl TerraformExtractor {
    /// Literal `name` attribute, or the title-cased local name when the value
    /// is missing or interpolated
    fn display_name(content: &str, after: usize, local_name: &str) -> String {
        NAME_ATTRIBUTE
            .captures(window(content, after, NAME_WINDOW))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| !name.contains("${"))
            .map(str::to_string)
            .unwrap_or_else(|| title_case_identifier(local_name))
    }
}

impl Extractor for TerraformExtractor {
    fn format(&self) -> SourceFormat {
        SourceFormat::Terraform
    }

    fn extract(&self, content: &str, path: &Path) -> Vec<Discovery> {
        let mut found = Vec::new();

        for caps in RESOURCE_BLOCK.captures_iter(content) {
            let (Some(whole), Some(tf_type), Some(local_name)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            let Some(kind) = catalog::lookup_terraform_type(tf_type.as_str()) else {
                tracing::trace!(path = %path.display(), resource_type = tf_type.as_str(), "Unmapped terraform type");
                continue;
            };

            let name = Self::display_name(content, whole.end(), local_name.as_str());
            found.push(Discovery::new(kind, name, Some(line_of(content, whole.start()))));
        }

        found
    }
}
