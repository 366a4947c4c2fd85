//! The handler contract and the event pump that drives it.
//!
//! [`drive`] pulls events from quick-xml, keeps the element path and the
//! pending text, and calls back into a [`ResponseHandler`]. Handlers never see
//! raw events: they get the ancestor path, the element's local name, and
//! either its attributes (on start) or its accumulated text (on end).

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};

use crate::error::XmlError;
use crate::path::ElementPath;

/// A consumer of one S3 response shape.
///
/// A handler owns the result under construction plus any scratch objects for
/// child elements. Fresh handlers are created per document; the finished
/// result is moved out by [`ResponseHandler::finish`].
pub trait ResponseHandler {
    /// The result produced once the document has been read.
    type Output;

    /// Name used in error reports and logs.
    const NAME: &'static str;

    /// Whether the document has its carriage returns escaped before parsing
    /// when the parser is configured to sanitize. Only documents whose text
    /// carries object keys need it.
    const SANITIZE: bool = false;

    /// Called for every start tag. `path` holds the element's ancestors.
    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        attributes: &Attributes,
    ) -> Result<(), XmlError> {
        let _ = (path, name, attributes);
        Ok(())
    }

    /// Called for every end tag with the text accumulated since the most
    /// recent start tag. `path` holds the element's ancestors.
    fn element_ended(&mut self, path: &ElementPath, name: &str, text: &str)
    -> Result<(), XmlError>;

    /// Hand over the result once the document has been fully read.
    fn finish(self) -> Result<Self::Output, XmlError>;
}

/// Attributes of a start tag, keyed by qualified name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Value of the attribute whose qualified name matches `qname`, ignoring
    /// case and surrounding whitespace.
    #[must_use]
    pub fn find(&self, qname: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(qname))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the tag carried no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(qualified name, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut entries = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let name = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| XmlError::Encoding(e.to_string()))?
                .to_owned();
            let raw =
                std::str::from_utf8(&attr.value).map_err(|e| XmlError::Encoding(e.to_string()))?;
            let value = quick_xml::escape::unescape(raw)
                .map_err(|e| XmlError::ParseError(e.to_string()))?
                .into_owned();
            entries.push((name, value));
        }
        Ok(Self { entries })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Open element path plus the text seen since the last start tag.
#[derive(Debug, Default)]
struct PathTracker {
    path: ElementPath,
    text: String,
}

impl PathTracker {
    fn start<H: ResponseHandler>(
        &mut self,
        handler: &mut H,
        name: &str,
        attributes: &Attributes,
    ) -> Result<(), XmlError> {
        self.text.clear();
        handler.element_started(&self.path, name, attributes)?;
        self.path.push(name);
        Ok(())
    }

    fn characters(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn end<H: ResponseHandler>(&mut self, handler: &mut H) -> Result<(), XmlError> {
        let name = self.path.pop().ok_or_else(|| {
            XmlError::UnexpectedElement("end tag without a matching start tag".to_owned())
        })?;
        handler.element_ended(&self.path, &name, &self.text)
    }
}

/// Feed a whole document through `handler`.
///
/// Elements are matched by local name, so namespace prefixes are ignored.
/// Character references and the predefined entities are resolved before the
/// text reaches the handler.
pub fn drive<H, R>(handler: &mut H, input: R) -> Result<(), XmlError>
where
    H: ResponseHandler,
    R: BufRead,
{
    let mut reader = Reader::from_reader(input);
    let mut tracker = PathTracker::default();
    let mut buf = Vec::new();
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                let attributes = Attributes::from_start(&e)?;
                seen_root = true;
                tracker.start(handler, &name, &attributes)?;
            }
            Event::Empty(e) => {
                let name = local_name(&e)?;
                let attributes = Attributes::from_start(&e)?;
                seen_root = true;
                tracker.start(handler, &name, &attributes)?;
                tracker.end(handler)?;
            }
            Event::End(_) => tracker.end(handler)?,
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::Encoding(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                tracker.characters(&unescaped);
            }
            Event::CData(e) => {
                let text =
                    std::str::from_utf8(&e).map_err(|err| XmlError::Encoding(err.to_string()))?;
                tracker.characters(text);
            }
            Event::GeneralRef(e) => tracker.characters(&resolve_reference(&e)?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(XmlError::MissingElement("root element".to_owned()));
    }
    if let Some(open) = tracker.path.current() {
        return Err(XmlError::MissingElement(format!(
            "end tag for <{open}> before end of document"
        )));
    }
    Ok(())
}

fn local_name(start: &BytesStart<'_>) -> Result<String, XmlError> {
    let local = start.local_name();
    std::str::from_utf8(local.as_ref())
        .map(str::to_owned)
        .map_err(|e| XmlError::Encoding(e.to_string()))
}

/// Resolve `&#NNN;`, `&#xHH;`, and the five predefined entities.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, XmlError> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|e| XmlError::ParseError(format!("invalid character reference: {e}")))?
    {
        return Ok(ch.to_string());
    }

    let name = reference
        .decode()
        .map_err(|e| XmlError::Encoding(e.to_string()))?;
    quick_xml::escape::resolve_predefined_entity(&name)
        .map(str::to_owned)
        .ok_or_else(|| XmlError::ParseError(format!("unknown entity &{name};")))
}
