//! Multipart upload results.

use serde::Serialize;

use crate::error::ServiceErrorDetails;

/// `<InitiateMultipartUploadResult>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InitiateMultipartUploadResult {
    pub bucket_name: Option<String>,
    pub key: Option<String>,
    pub upload_id: Option<String>,
}

/// `<CompleteMultipartUploadResult>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CompleteMultipartUploadResult {
    pub location: Option<String>,
    pub bucket_name: Option<String>,
    pub key: Option<String>,
    pub e_tag: Option<String>,
}

/// Body of a CompleteMultipartUpload request. As with copies, S3 can report a
/// failure inside a 200 response, so exactly one side is normally populated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CompleteMultipartUploadResponse {
    pub result: Option<CompleteMultipartUploadResult>,
    pub error: Option<ServiceErrorDetails>,
}

impl CompleteMultipartUploadResponse {
    /// Whether the document was an `<Error>` rather than a completion result.
    #[must_use]
    pub fn is_error_response(&self) -> bool {
        self.error.is_some()
    }
}
