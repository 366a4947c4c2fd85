//! Error documents embedded in otherwise successful responses.

use serde::Serialize;

/// Contents of a top-level `<Error>` document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ServiceErrorDetails {
    /// S3 error code, e.g. `NoSuchKey`.
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
    /// Extended request ID (`x-amz-id-2`).
    pub host_id: Option<String>,
}

impl std::fmt::Display for ServiceErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (request id: {})",
            self.code.as_deref().unwrap_or("Unknown"),
            self.message.as_deref().unwrap_or(""),
            self.request_id.as_deref().unwrap_or("-"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_error_details() {
        let details = ServiceErrorDetails {
            code: Some("NoSuchKey".to_owned()),
            message: Some("The specified key does not exist.".to_owned()),
            request_id: Some("4442587FB7D0A2F9".to_owned()),
            host_id: None,
        };
        assert_eq!(
            details.to_string(),
            "NoSuchKey: The specified key does not exist. (request id: 4442587FB7D0A2F9)"
        );
    }
}
