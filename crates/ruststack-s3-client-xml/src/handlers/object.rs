//! DeleteObjects and CopyObject / UploadPartCopy results.

use ruststack_s3_client_model::{
    CopyObjectResponse, CopyObjectResult, DeleteError, DeleteObjectsResult, DeletedObject,
    ServiceErrorDetails,
};

use super::{in_progress, take_in_progress};
use crate::error::XmlError;
use crate::handler::{Attributes, ResponseHandler};
use crate::path::ElementPath;
use crate::policy::{Field, parse_flag, parse_timestamp, remove_quotes};

/// Fill error details from a child of a top-level `<Error>` document.
pub(super) fn error_detail(details: &mut ServiceErrorDetails, name: &str, text: &str) {
    let value = Some(text.to_owned());
    match name {
        "Code" => details.code = value,
        "Message" => details.message = value,
        "RequestId" => details.request_id = value,
        "HostId" => details.host_id = value,
        _ => {}
    }
}

/// Handler for `<DeleteResult>` (multi-object delete).
#[derive(Debug, Default)]
pub struct DeleteObjectsHandler {
    result: DeleteObjectsResult,
    current_deleted: Option<DeletedObject>,
    current_error: Option<DeleteError>,
}

impl ResponseHandler for DeleteObjectsHandler {
    type Output = DeleteObjectsResult;
    const NAME: &'static str = "DeleteObjectsHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&["DeleteResult"]) {
            match name {
                "Deleted" => self.current_deleted = Some(DeletedObject::default()),
                "Error" => self.current_error = Some(DeleteError::default()),
                _ => {}
            }
        }
        Ok(())
    }

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&["DeleteResult"]) {
            match name {
                "Deleted" => {
                    let deleted = take_in_progress(&mut self.current_deleted, name)?;
                    self.result.deleted.push(deleted);
                }
                "Error" => {
                    let error = take_in_progress(&mut self.current_error, name)?;
                    self.result.errors.push(error);
                }
                _ => {}
            }
        } else if path.is(&["DeleteResult", "Deleted"]) {
            let deleted = in_progress(&mut self.current_deleted, "Deleted")?;
            match name {
                "Key" => deleted.key = Some(text.to_owned()),
                "VersionId" => deleted.version_id = Some(text.to_owned()),
                "DeleteMarker" => {
                    deleted.delete_marker = parse_flag(Field::DeletedDeleteMarker, text)?;
                }
                "DeleteMarkerVersionId" => {
                    deleted.delete_marker_version_id = Some(text.to_owned());
                }
                _ => {}
            }
        } else if path.is(&["DeleteResult", "Error"]) {
            let error = in_progress(&mut self.current_error, "Error")?;
            let value = Some(text.to_owned());
            match name {
                "Key" => error.key = value,
                "VersionId" => error.version_id = value,
                "Code" => error.code = value,
                "Message" => error.message = value,
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.result)
    }
}

/// Handler for `<CopyObjectResult>`, `<CopyPartResult>`, or the `<Error>`
/// document S3 may return instead with a 200 status.
#[derive(Debug, Default)]
pub struct CopyObjectResultHandler {
    response: CopyObjectResponse,
}

impl ResponseHandler for CopyObjectResultHandler {
    type Output = CopyObjectResponse;
    const NAME: &'static str = "CopyObjectResultHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.at_top_level() {
            match name {
                "CopyObjectResult" | "CopyPartResult" => {
                    self.response = CopyObjectResponse {
                        result: Some(CopyObjectResult::default()),
                        error: None,
                    };
                }
                "Error" => {
                    self.response = CopyObjectResponse {
                        result: None,
                        error: Some(ServiceErrorDetails::default()),
                    };
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&["CopyObjectResult"]) || path.is(&["CopyPartResult"]) {
            let result = in_progress(&mut self.response.result, "CopyObjectResult")?;
            match name {
                "LastModified" => result.last_modified = Some(parse_timestamp(text)?),
                "ETag" => result.e_tag = Some(remove_quotes(text)),
                _ => {}
            }
        } else if path.is(&["Error"]) {
            error_detail(in_progress(&mut self.response.error, "Error")?, name, text);
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.response)
    }
}
