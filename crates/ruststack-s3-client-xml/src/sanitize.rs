//! Carriage return protection.
//!
//! XML parsers normalize `\r\n` and lone `\r` to `\n`, which silently changes
//! object keys that contain carriage returns. Escaping every `\r` as a
//! character reference before parsing makes the parser hand it back verbatim.

use std::io::Read;

use crate::error::XmlError;

/// Character reference substituted for each carriage return.
pub const CARRIAGE_RETURN_REFERENCE: &str = "&#013;";

/// Buffer the whole document and escape its carriage returns.
///
/// # Errors
///
/// Returns [`XmlError::Io`] if the stream fails and [`XmlError::Encoding`] if
/// the document is not UTF-8.
pub fn sanitize_xml_document<R: Read>(mut input: R) -> Result<String, XmlError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    let text = String::from_utf8(bytes).map_err(|e| XmlError::Encoding(e.to_string()))?;
    if !text.contains('\r') {
        return Ok(text);
    }
    Ok(text.replace('\r', CARRIAGE_RETURN_REFERENCE))
}
