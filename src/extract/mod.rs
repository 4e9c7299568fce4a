// Per-format extraction of resource declarations
//
// Extractors are pattern matchers over raw text, not parsers. Malformed input
// yields no discoveries instead of an error.

mod arm;
mod bicep;
mod sdk;
mod terraform;

pub use arm::ArmTemplateExtractor;
pub use bicep::BicepExtractor;
pub use sdk::SdkUsageExtractor;
pub use terraform::TerraformExtractor;

use crate::config::ScanConfig;
use serde::Serialize;
use std::path::Path;

/// Input families understood by the scanner
///
/// Variant order is the order in which formats are processed during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Bicep,
    Terraform,
    ArmTemplate,
    Code,
}

impl SourceFormat {
    /// Pick the format for a file by extension
    ///
    /// `.json` files are only candidates; the ARM extractor sniffs content.
    pub fn detect(path: &Path, config: &ScanConfig) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "bicep" => Some(Self::Bicep),
            "tf" => Some(Self::Terraform),
            "json" => Some(Self::ArmTemplate),
            other if config.is_code_extension(other) => Some(Self::Code),
            _ => None,
        }
    }

    /// The extractor responsible for this format
    pub fn extractor(self) -> &'static dyn Extractor {
        match self {
            Self::Bicep => &BicepExtractor,
            Self::Terraform => &TerraformExtractor,
            Self::ArmTemplate => &ArmTemplateExtractor,
            Self::Code => &SdkUsageExtractor,
        }
    }

    /// Whether read failures for this format deserve a warning
    ///
    /// Arbitrary code files are noisy, so their failures are logged at debug.
    pub fn is_infrastructure(self) -> bool {
        !matches!(self, Self::Code)
    }
}

/// One resource found in a file, before identity is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub kind: &'static str,
    pub name: String,
    /// 1-based line of the declaration, when the format has one
    pub line: Option<usize>,
}

impl Discovery {
    pub fn new(kind: &'static str, name: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            kind,
            name: name.into(),
            line,
        }
    }
}

/// Turns file text into discoveries
pub trait Extractor: Send + Sync {
    fn format(&self) -> SourceFormat;

    /// Extract discoveries from `content`; `path` is used for logging only
    fn extract(&self, content: &str, path: &Path) -> Vec<Discovery>;
}

/// Title-case an identifier the way display names are derived
///
/// Underscores become spaces, and every run of cased letters starts upper-case
/// with the remainder lower-cased (`web_app_1` -> `Web App 1`, `webApp` -> `Webapp`).
/// Uncased characters such as CJK ideographs end a run.
pub fn title_case_identifier(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut prev_cased = false;
    for c in ident.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_lowercase() || c.is_uppercase() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }
    out
}

/// 1-based line number of a byte offset
pub fn line_of(content: &str, offset: usize) -> usize {
    let end = floor_char_boundary(content, offset);
    content[..end].matches('\n').count() + 1
}

/// Up to `budget` characters of `content` starting at byte offset `start`
pub fn window(content: &str, start: usize, budget: usize) -> &str {
    let start = floor_char_boundary(content, start);
    let rest = &content[start..];
    let end = rest.char_indices().nth(budget).map_or(rest.len(), |(i, _)| i);
    &rest[..end]
}

fn floor_char_boundary(content: &str, index: usize) -> usize {
    let mut index = index.min(content.len());
    while !content.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_formats() {
        let config = ScanConfig::default();
        let detect = |p: &str| SourceFormat::detect(&PathBuf::from(p), &config);
        assert_eq!(detect("infra/main.bicep"), Some(SourceFormat::Bicep));
        assert_eq!(detect("infra/main.TF"), Some(SourceFormat::Terraform));
        assert_eq!(detect("azuredeploy.json"), Some(SourceFormat::ArmTemplate));
        assert_eq!(detect("src/app.py"), Some(SourceFormat::Code));
        assert_eq!(detect("src/Program.cs"), Some(SourceFormat::Code));
        assert_eq!(detect("README.md"), None);
        assert_eq!(detect("Makefile"), None);
    }

    #[test]
    fn test_format_order() {
        assert!(SourceFormat::Bicep < SourceFormat::Terraform);
        assert!(SourceFormat::Terraform < SourceFormat::ArmTemplate);
        assert!(SourceFormat::ArmTemplate < SourceFormat::Code);
    }

    #[test]
    fn test_extractor_dispatch() {
        for format in [
            SourceFormat::Bicep,
            SourceFormat::Terraform,
            SourceFormat::ArmTemplate,
            SourceFormat::Code,
        ] {
            assert_eq!(format.extractor().format(), format);
        }
    }

    #[test]
    fn test_title_case_identifier() {
        assert_eq!(title_case_identifier("web_app"), "Web App");
        assert_eq!(title_case_identifier("webApp"), "Webapp");
        assert_eq!(title_case_identifier("sa"), "Sa");
        assert_eq!(title_case_identifier("db_2nd"), "Db 2Nd");
        assert_eq!(title_case_identifier(""), "");
    }

    #[test]
    fn test_title_case_uncased_characters_break_words() {
        assert_eq!(title_case_identifier("a\u{4e2d}b"), "A\u{4e2d}B");
        assert_eq!(title_case_identifier("\u{e9}t\u{e9}_app"), "\u{c9}t\u{e9} App");
    }

    #[test]
    fn test_line_of() {
        let text = "a\nb\nc";
        assert_eq!(line_of(text, 0), 1);
        assert_eq!(line_of(text, 2), 2);
        assert_eq!(line_of(text, 4), 3);
        assert_eq!(line_of(text, 100), 3);
    }

    #[test]
    fn test_window_counts_characters() {
        let text = "ab\u{e9}cd";
        // \u{e9} occupies bytes 2..4
        assert_eq!(window(text, 0, 3), "ab\u{e9}");
        assert_eq!(window(text, 0, 4), "ab\u{e9}c");
        assert_eq!(window(text, 3, 10), "\u{e9}cd");
        assert_eq!(window(text, 4, 1), "c");
        assert_eq!(window(text, 10, 10), "");
        assert_eq!(window(text, 0, 0), "");

        let wide = "\u{8aac}".repeat(600);
        assert_eq!(window(&wide, 0, 500).chars().count(), 500);
    }
}
