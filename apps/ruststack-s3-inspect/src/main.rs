//! RustStack S3 Inspect - parse a captured S3 XML response and print it as JSON.
//!
//! # Usage
//!
//! ```text
//! ruststack-s3-inspect <kind> [file]
//! curl -s http://localhost:4566/my-bucket | ruststack-s3-inspect list-objects
//! ```
//!
//! `<kind>` is one of the kebab-case response kinds (`list-objects`, `acl`,
//! `copy-object`, ...). The document is read from `file`, or from stdin when
//! no file is given.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `S3_XML_SANITIZE` | `true` | Preserve carriage returns in element text |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ruststack_s3_client_xml::{ParserConfig, ResponseKind, XmlResponsesParser};

/// Log level used when `LOG_LEVEL` is unset.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolve the log level filter from the `LOG_LEVEL` value, if any.
fn log_level(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned())
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` filter.
/// Logs go to stderr so stdout only carries the JSON result.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

/// A parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    kind: ResponseKind,
    path: Option<PathBuf>,
}

fn usage() -> String {
    let kinds = ResponseKind::ALL
        .iter()
        .map(ResponseKind::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("usage: ruststack-s3-inspect <kind> [file]\n  kinds: {kinds}")
}

fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(kind) = args.next() else {
        bail!("missing response kind\n{}", usage());
    };
    let kind = kind
        .parse::<ResponseKind>()
        .with_context(usage)?;
    let path = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        bail!("unexpected argument: {extra}\n{}", usage());
    }
    Ok(Invocation { kind, path })
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn run<W: Write>(parser: &XmlResponsesParser, invocation: &Invocation, mut out: W) -> Result<()> {
    let input = open_input(invocation.path.as_deref())?;
    let parsed = parser
        .parse_kind(invocation.kind, input)
        .with_context(|| format!("failed to parse {} response", invocation.kind))?;

    serde_json::to_writer_pretty(&mut out, &parsed).context("failed to write JSON")?;
    writeln!(out).context("failed to write JSON")?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing(&log_level(std::env::var("LOG_LEVEL").ok()))?;
    let config = ParserConfig::from_env();

    let invocation = parse_args(std::env::args().skip(1))?;
    info!(
        kind = %invocation.kind,
        sanitize = config.sanitize_xml_documents,
        "inspecting S3 response"
    );

    let parser = XmlResponsesParser::new(config);
    run(&parser, &invocation, io::stdout().lock())
}
