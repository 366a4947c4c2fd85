//! Object-level operation results.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ServiceErrorDetails;

/// One `<Deleted>` entry of a DeleteObjects response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeletedObject {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub delete_marker: bool,
    pub delete_marker_version_id: Option<String>,
}

/// One `<Error>` entry of a DeleteObjects response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeleteError {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}

/// `<DeleteResult>`. Per-key failures are reported alongside successes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeleteObjectsResult {
    pub deleted: Vec<DeletedObject>,
    pub errors: Vec<DeleteError>,
}

/// `<CopyObjectResult>` or `<CopyPartResult>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CopyObjectResult {
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Body of a copy request.
///
/// S3 may answer a copy with HTTP 200 and an `<Error>` document, so a copy
/// response is either a result or error details; callers check
/// [`CopyObjectResponse::is_error_response`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CopyObjectResponse {
    pub result: Option<CopyObjectResult>,
    pub error: Option<ServiceErrorDetails>,
}

impl CopyObjectResponse {
    /// Whether the document was an `<Error>` rather than a copy result.
    #[must_use]
    pub fn is_error_response(&self) -> bool {
        self.error.is_some()
    }
}
