// Static lookup tables mapping platform identifiers to resource kinds
//
// All tables are plain data; extractors consult them through the functions
// below and treat a miss as "not an Azure resource we know about".

mod rules;
mod sdk_patterns;
mod template_types;
mod terraform_types;

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// A static inference rule: every `source` resource talks to every `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionRule {
    pub source: &'static str,
    pub target: &'static str,
    pub label: &'static str,
}

static TEMPLATE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| template_types::TEMPLATE_TYPES.iter().copied().collect());

static TERRAFORM_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| terraform_types::TERRAFORM_TYPES.iter().copied().collect());

static SDK_REGEXES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    sdk_patterns::SDK_PATTERNS
        .iter()
        .map(|(pattern, kind)| {
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("valid SDK pattern");
            (re, *kind)
        })
        .collect()
});

/// Look up a Bicep/ARM type path such as `Microsoft.Web/sites`
pub fn lookup_template_type(resource_type: &str) -> Option<&'static str> {
    TEMPLATE_INDEX
        .get(resource_type.to_lowercase().as_str())
        .copied()
}

/// Look up an `azurerm_*` Terraform resource type
pub fn lookup_terraform_type(resource_type: &str) -> Option<&'static str> {
    TERRAFORM_INDEX
        .get(resource_type.to_lowercase().as_str())
        .copied()
}

/// Every distinct kind whose SDK evidence appears somewhere in `content`
pub fn detect_sdk_kinds(content: &str) -> BTreeSet<&'static str> {
    SDK_REGEXES
        .iter()
        .filter(|(re, _)| re.is_match(content))
        .map(|(_, kind)| *kind)
        .collect()
}

/// Connection rules in declaration order
pub fn connection_rules() -> &'static [ConnectionRule] {
    rules::CONNECTION_RULES
}

/// Every resource kind any table can produce, sorted
pub fn all_kinds() -> Vec<&'static str> {
    let kinds: BTreeSet<&'static str> = template_types::TEMPLATE_TYPES
        .iter()
        .chain(terraform_types::TERRAFORM_TYPES)
        .chain(sdk_patterns::SDK_PATTERNS)
        .map(|(_, kind)| *kind)
        .collect();
    kinds.into_iter().collect()
}
