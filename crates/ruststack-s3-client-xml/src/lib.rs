//! Streaming interpreter for S3 REST XML responses.
//!
//! Response bodies returned by the S3 REST API are read as a single forward
//! pass of XML events. A per-operation [`ResponseHandler`] tracks where it is
//! in the document through an [`ElementPath`] and assembles a typed result
//! from `ruststack-s3-client-model`.
//!
//! # Key components
//!
//! - [`XmlResponsesParser`] with one `parse_*_response` method per operation
//! - [`ResponseHandler`] and [`drive`] for pumping a document through a handler
//! - [`policy`] for the numeric and boolean conversion rules of each field
//! - [`sanitize`] for preserving carriage returns inside listing key text
//!
//! # S3 XML conventions
//!
//! - Elements are matched by local name, so the namespace prefix is ignored
//! - Timestamps: ISO 8601 format (`2006-02-03T16:45:09.000Z`)
//! - ETags arrive wrapped in double quotes, which are stripped

pub mod config;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod parser;
pub mod path;
pub mod policy;
pub mod sanitize;

pub use config::ParserConfig;
pub use error::{ResponseParseError, XmlError};
pub use handler::{Attributes, ResponseHandler, drive};
pub use handlers::*;
pub use parser::{ParsedResponse, ResponseKind, UnknownResponseKind, XmlResponsesParser};
pub use path::ElementPath;
