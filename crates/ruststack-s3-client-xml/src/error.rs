//! Error types for S3 XML response parsing.
//!
//! [`XmlError`] is the cause raised inside the event pump and the handlers.
//! [`ResponseParseError`] is what the dispatch layer hands back to callers: it
//! keeps transport failures distinguishable from malformed or unexpected
//! documents, and names the handler that rejected the document.

use std::io;

/// Errors raised while interpreting an S3 XML document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error while reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Document bytes that could not be decoded as UTF-8 text.
    #[error("invalid text encoding: {0}")]
    Encoding(String),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),

    /// The handler reached a state the document should not be able to produce.
    #[error("invalid handler state: {0}")]
    InvalidState(String),
}

/// Errors returned by [`XmlResponsesParser`](crate::XmlResponsesParser).
#[derive(Debug, thiserror::Error)]
pub enum ResponseParseError {
    /// The response stream failed; the underlying error is passed through
    /// untouched so callers can tell transport trouble from bad documents.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The document was malformed or did not match the handler's shape.
    #[error("failed to parse XML document with handler {handler}")]
    Parse {
        /// Name of the handler that rejected the document.
        handler: &'static str,
        /// Underlying cause.
        #[source]
        source: XmlError,
    },

    /// The document could not be sanitized before parsing.
    #[error("failed to sanitize XML document destined for handler {handler}")]
    Sanitize {
        /// Name of the handler the document was destined for.
        handler: &'static str,
        /// Underlying cause.
        #[source]
        source: XmlError,
    },
}

impl ResponseParseError {
    /// Wrap a parse failure, surfacing I/O errors as [`ResponseParseError::Io`].
    pub(crate) fn parse(handler: &'static str, source: XmlError) -> Self {
        match into_io(source) {
            Ok(err) => Self::Io(err),
            Err(source) => Self::Parse { handler, source },
        }
    }

    /// Wrap a sanitization failure, surfacing I/O errors as
    /// [`ResponseParseError::Io`].
    pub(crate) fn sanitize(handler: &'static str, source: XmlError) -> Self {
        match into_io(source) {
            Ok(err) => Self::Io(err),
            Err(source) => Self::Sanitize { handler, source },
        }
    }

    /// Name of the handler involved, if the failure was not an I/O error.
    #[must_use]
    pub fn handler(&self) -> Option<&'static str> {
        match self {
            Self::Io(_) => None,
            Self::Parse { handler, .. } | Self::Sanitize { handler, .. } => Some(handler),
        }
    }
}

/// Extract an I/O error from an [`XmlError`], including ones quick-xml raised
/// while pulling from the reader.
fn into_io(err: XmlError) -> Result<io::Error, XmlError> {
    match err {
        XmlError::Io(e) => Ok(e),
        XmlError::QuickXml(quick_xml::Error::Io(e)) => Ok(match std::sync::Arc::try_unwrap(e) {
            Ok(e) => e,
            Err(shared) => io::Error::new(shared.kind(), shared.to_string()),
        }),
        other => Err(other),
    }
}
