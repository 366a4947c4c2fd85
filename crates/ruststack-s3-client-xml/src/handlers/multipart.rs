//! Multipart upload documents: initiate, complete, and the two listings.

use ruststack_s3_client_model::{
    CompleteMultipartUploadResponse, CompleteMultipartUploadResult,
    InitiateMultipartUploadResult, MultipartUpload, MultipartUploadListing, Owner, PartListing,
    PartSummary, ServiceErrorDetails,
};

use super::object::error_detail;
use super::{EmptyOwnerText, in_progress, owner_field, take_in_progress};
use crate::error::XmlError;
use crate::handler::{Attributes, ResponseHandler};
use crate::path::ElementPath;
use crate::policy::{
    Field, non_empty, parse_flag, parse_int, parse_long, parse_optional_int, parse_timestamp,
    remove_quotes,
};

/// Handler for `<InitiateMultipartUploadResult>`.
#[derive(Debug, Default)]
pub struct InitiateMultipartUploadHandler {
    result: InitiateMultipartUploadResult,
}

impl ResponseHandler for InitiateMultipartUploadHandler {
    type Output = InitiateMultipartUploadResult;
    const NAME: &'static str = "InitiateMultipartUploadHandler";

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&["InitiateMultipartUploadResult"]) {
            let value = Some(text.to_owned());
            match name {
                "Bucket" => self.result.bucket_name = value,
                "Key" => self.result.key = value,
                "UploadId" => self.result.upload_id = value,
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.result)
    }
}

/// Handler for `<CompleteMultipartUploadResult>`, or the `<Error>` document
/// S3 sends when the upload failed to assemble after the 200 was committed.
#[derive(Debug, Default)]
pub struct CompleteMultipartUploadHandler {
    response: CompleteMultipartUploadResponse,
}

impl ResponseHandler for CompleteMultipartUploadHandler {
    type Output = CompleteMultipartUploadResponse;
    const NAME: &'static str = "CompleteMultipartUploadHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.at_top_level() {
            match name {
                "CompleteMultipartUploadResult" => {
                    self.response.result = Some(CompleteMultipartUploadResult::default());
                }
                "Error" => self.response.error = Some(ServiceErrorDetails::default()),
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
        if path.is(&["CompleteMultipartUploadResult"]) {
            let result = in_progress(&mut self.response.result, "CompleteMultipartUploadResult")?;
            match name {
                "Location" => result.location = Some(text.to_owned()),
                "Bucket" => result.bucket_name = Some(text.to_owned()),
                "Key" => result.key = Some(text.to_owned()),
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

const LIST_UPLOADS: &str = "ListMultipartUploadsResult";

/// Handler for `<ListMultipartUploadsResult>`.
#[derive(Debug, Default)]
pub struct ListMultipartUploadsHandler {
    listing: MultipartUploadListing,
    current_upload: Option<MultipartUpload>,
    current_owner: Option<Owner>,
}

impl ResponseHandler for ListMultipartUploadsHandler {
    type Output = MultipartUploadListing;
    const NAME: &'static str = "ListMultipartUploadsHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[LIST_UPLOADS]) {
            if name == "Upload" {
                self.current_upload = Some(MultipartUpload::default());
            }
        } else if path.is(&[LIST_UPLOADS, "Upload"]) && (name == "Owner" || name == "Initiator") {
            self.current_owner = Some(Owner::default());
        }
        Ok(())
    }

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&[LIST_UPLOADS]) {
            let listing = &mut self.listing;
            match name {
                "Bucket" => listing.bucket_name = Some(text.to_owned()),
                "KeyMarker" => listing.key_marker = non_empty(text),
                "Delimiter" => listing.delimiter = non_empty(text),
                "Prefix" => listing.prefix = non_empty(text),
                "UploadIdMarker" => listing.upload_id_marker = non_empty(text),
                "NextKeyMarker" => listing.next_key_marker = non_empty(text),
                "NextUploadIdMarker" => listing.next_upload_id_marker = non_empty(text),
                "MaxUploads" => {
                    listing.max_uploads = Some(parse_int(Field::UploadListingMaxUploads, text)?);
                }
                "EncodingType" => listing.encoding_type = non_empty(text),
                "IsTruncated" => {
                    listing.truncated = parse_flag(Field::UploadListingTruncated, text)?;
                }
                "Upload" => {
                    let upload = take_in_progress(&mut self.current_upload, name)?;
                    listing.multipart_uploads.push(upload);
                }
                _ => {}
            }
        } else if path.is(&[LIST_UPLOADS, "CommonPrefixes"]) {
            if name == "Prefix" {
                self.listing.common_prefixes.push(text.to_owned());
            }
        } else if path.is(&[LIST_UPLOADS, "Upload"]) {
            let upload = in_progress(&mut self.current_upload, "Upload")?;
            match name {
                "Key" => upload.key = Some(text.to_owned()),
                "UploadId" => upload.upload_id = Some(text.to_owned()),
                "Owner" => upload.owner = self.current_owner.take(),
                "Initiator" => upload.initiator = self.current_owner.take(),
                "StorageClass" => upload.storage_class = Some(text.to_owned()),
                "Initiated" => upload.initiated = Some(parse_timestamp(text)?),
                _ => {}
            }
        } else if path.is(&[LIST_UPLOADS, "Upload", "Owner"])
            || path.is(&[LIST_UPLOADS, "Upload", "Initiator"])
        {
            let owner = in_progress(&mut self.current_owner, "Owner")?;
            owner_field(owner, name, text, EmptyOwnerText::Unset);
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.listing)
    }
}

const LIST_PARTS: &str = "ListPartsResult";

/// Handler for `<ListPartsResult>`.
#[derive(Debug, Default)]
pub struct ListPartsHandler {
    listing: PartListing,
    current_part: Option<PartSummary>,
    current_owner: Option<Owner>,
}

impl ResponseHandler for ListPartsHandler {
    type Output = PartListing;
    const NAME: &'static str = "ListPartsHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[LIST_PARTS]) {
            match name {
                "Part" => self.current_part = Some(PartSummary::default()),
                "Owner" | "Initiator" => self.current_owner = Some(Owner::default()),
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
        if path.is(&[LIST_PARTS]) {
            let listing = &mut self.listing;
            match name {
                "Bucket" => listing.bucket_name = Some(text.to_owned()),
                "Key" => listing.key = Some(text.to_owned()),
                "UploadId" => listing.upload_id = Some(text.to_owned()),
                "Owner" => listing.owner = self.current_owner.take(),
                "Initiator" => listing.initiator = self.current_owner.take(),
                "StorageClass" => listing.storage_class = Some(text.to_owned()),
                "PartNumberMarker" => {
                    listing.part_number_marker = parse_optional_int(Field::PartNumberMarker, text)?;
                }
                "NextPartNumberMarker" => {
                    listing.next_part_number_marker =
                        parse_optional_int(Field::NextPartNumberMarker, text)?;
                }
                "MaxParts" => listing.max_parts = parse_optional_int(Field::MaxParts, text)?,
                "EncodingType" => listing.encoding_type = non_empty(text),
                "IsTruncated" => {
                    listing.truncated = parse_flag(Field::PartListingTruncated, text)?;
                }
                "Part" => {
                    let part = take_in_progress(&mut self.current_part, name)?;
                    listing.parts.push(part);
                }
                _ => {}
            }
        } else if path.is(&[LIST_PARTS, "Part"]) {
            let part = in_progress(&mut self.current_part, "Part")?;
            match name {
                "PartNumber" => part.part_number = Some(parse_int(Field::PartNumber, text)?),
                "LastModified" => part.last_modified = Some(parse_timestamp(text)?),
                "ETag" => part.e_tag = Some(remove_quotes(text)),
                "Size" => part.size = Some(parse_long(Field::PartSize, text)?),
                _ => {}
            }
        } else if path.is(&[LIST_PARTS, "Owner"]) || path.is(&[LIST_PARTS, "Initiator"]) {
            let owner = in_progress(&mut self.current_owner, "Owner")?;
            owner_field(owner, name, text, EmptyOwnerText::Unset);
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.listing)
    }
}
