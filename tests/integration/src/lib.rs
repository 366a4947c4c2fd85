//! Integration tests for the RustStack S3 XML response parser.
//!
//! Every test feeds a captured S3 response document from `fixtures/` through
//! the public [`XmlResponsesParser`] API, the same way a client would after
//! receiving the HTTP body.
//!
//! Run them with:
//! ```text
//! cargo test -p ruststack-s3-client-integration
//! ```

use std::path::PathBuf;
use std::sync::Once;

use ruststack_s3_client_xml::{ParserConfig, XmlResponsesParser};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Read a fixture document by file name.
#[must_use]
pub fn fixture(name: &str) -> Vec<u8> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "fixtures", name].iter().collect();
    std::fs::read(&path).unwrap_or_else(|e| panic!("read fixture {}: {e}", path.display()))
}

/// A parser with the default configuration (sanitization on).
#[must_use]
pub fn parser() -> XmlResponsesParser {
    init_tracing();
    XmlResponsesParser::default()
}

/// A parser that feeds documents to the event pump untouched.
#[must_use]
pub fn raw_parser() -> XmlResponsesParser {
    init_tracing();
    XmlResponsesParser::new(ParserConfig::builder().sanitize_xml_documents(false).build())
}

mod test_acl;
mod test_config;
mod test_dispatch;
mod test_listing;
mod test_multipart;
mod test_object;
