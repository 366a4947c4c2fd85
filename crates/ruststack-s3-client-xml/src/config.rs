//! Parser configuration.
//!
//! Provides [`ParserConfig`] for tuning how S3 XML responses are read.
//! Values can be loaded from environment variables, following the same
//! conventions as the rest of the RustStack workspace.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// XML response parser configuration.
///
/// # Examples
///
/// ```
/// use ruststack_s3_client_xml::config::ParserConfig;
///
/// let config = ParserConfig::default();
/// assert!(config.sanitize_xml_documents);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    /// Whether listing documents are buffered and have carriage returns
    /// escaped before parsing, so that `\r` inside keys survives XML
    /// end-of-line normalization.
    #[builder(default = true)]
    pub sanitize_xml_documents: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            sanitize_xml_documents: true,
        }
    }
}

impl ParserConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `S3_XML_SANITIZE` | `true` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("S3_XML_SANITIZE") {
            config.sanitize_xml_documents = parse_bool(&v);
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
