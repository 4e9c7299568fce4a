// Azure SDK usage and connection-string evidence in application code

use super::{Discovery, Extractor, SourceFormat};
use crate::catalog;
use std::path::Path;

/// Reports each service kind evidenced in a code file once
pub struct SdkUsageExtractor;

impl SdkUsageExtractor {
    pub fn display_name(kind: &str) -> String {
        format!("{} (from code)", kind)
    }
}

impl Extractor for SdkUsageExtractor {
    fn format(&self) -> SourceFormat {
        SourceFormat::Code
    }

    fn extract(&self, content: &str, path: &Path) -> Vec<Discovery> {
        let kinds = catalog::detect_sdk_kinds(content);
        if !kinds.is_empty() {
            tracing::debug!(path = %path.display(), kinds = ?kinds, "SDK usage detected");
        }

        kinds
            .into_iter()
            .map(|kind| Discovery::new(kind, Self::display_name(kind), None))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<Discovery> {
        SdkUsageExtractor.extract(content, Path::new("app.py"))
    }

    #[test]
    fn test_sql_hostname() {
        let found = extract(r#"DB_HOST = "mydb.database.windows.net""#);
        assert_eq!(found, vec![Discovery::new("SQLDatabase", "SQLDatabase (from code)", None)]);
    }

    #[test]
    fn test_each_kind_reported_once() {
        let content = r#"
from azure.storage.blob import BlobServiceClient
a = BlobServiceClient.from_connection_string(x)
b = BlobServiceClient(account_url="https://acct.blob.core.windows.net")
c = BlobServiceClient(account_url="https://other.blob.core.windows.net")
"#;
        let found = extract(content);
        assert_eq!(found, vec![Discovery::new("BlobStorage", "BlobStorage (from code)", None)]);
    }

    #[test]
    fn test_multiple_kinds_sorted() {
        let content = r#"
var client = new SecretClient(new Uri("https://kv.vault.azure.net/"), cred);
var cosmos = new CosmosClient(endpoint);
var sb = new ServiceBusClient(conn);
"#;
        let kinds: Vec<&str> = extract(content).into_iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec!["CosmosDB", "KeyVault", "ServiceBus"]);
    }

    #[test]
    fn test_no_evidence() {
        assert!(extract("print('hello world')").is_empty());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(SdkUsageExtractor::display_name("Redis"), "Redis (from code)");
    }
}
