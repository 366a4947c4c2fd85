//! ListObjects, ListObjectVersions and ListBuckets.

use ruststack_s3_client_model::{
    Bucket, BucketListing, ObjectListing, ObjectSummary, Owner, VersionListing, VersionSummary,
};

use super::{EmptyOwnerText, in_progress, owner_field, take_in_progress};
use crate::error::XmlError;
use crate::handler::{Attributes, ResponseHandler};
use crate::path::ElementPath;
use crate::policy::{
    Field, non_empty, parse_flag, parse_int, parse_long, parse_timestamp, remove_quotes,
};

const LIST_BUCKET: &str = "ListBucketResult";
const LIST_VERSIONS: &str = "ListVersionsResult";
const LIST_ALL_MY_BUCKETS: &str = "ListAllMyBucketsResult";

/// Handler for `<ListBucketResult>` (ListObjects).
#[derive(Debug, Default)]
pub struct ListBucketHandler {
    listing: ObjectListing,
    current_object: Option<ObjectSummary>,
    current_owner: Option<Owner>,
}

impl ListBucketHandler {
    /// Fill in `next_marker` when S3 marked the listing truncated but left
    /// the marker out, which it does whenever no delimiter was requested.
    fn synthesize_next_marker(&mut self) {
        if !self.listing.truncated || self.listing.next_marker.is_some() {
            return;
        }

        let listing = &mut self.listing;
        if let Some(last) = listing.object_summaries.last() {
            listing.next_marker.clone_from(&last.key);
        } else if let Some(last) = listing.common_prefixes.last() {
            listing.next_marker = Some(last.clone());
        } else {
            tracing::error!(
                bucket = listing.bucket_name.as_deref().unwrap_or_default(),
                "S3 response indicates truncated results, but contains no object \
                 summaries or common prefixes"
            );
        }
    }
}

impl ResponseHandler for ListBucketHandler {
    type Output = ObjectListing;
    const NAME: &'static str = "ListBucketHandler";
    const SANITIZE: bool = true;

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[LIST_BUCKET]) {
            if name == "Contents" {
                self.current_object = Some(ObjectSummary {
                    bucket_name: self.listing.bucket_name.clone(),
                    ..ObjectSummary::default()
                });
            }
        } else if path.is(&[LIST_BUCKET, "Contents"]) && name == "Owner" {
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
        if path.at_top_level() {
            if name == LIST_BUCKET {
                self.synthesize_next_marker();
            }
        } else if path.is(&[LIST_BUCKET]) {
            let listing = &mut self.listing;
            match name {
                "Name" => {
                    listing.bucket_name = Some(text.to_owned());
                    tracing::debug!(bucket = text, "examining listing for bucket");
                }
                "Prefix" => listing.prefix = non_empty(text),
                "Marker" => listing.marker = non_empty(text),
                "NextMarker" => listing.next_marker = Some(text.to_owned()),
                "MaxKeys" => listing.max_keys = parse_int(Field::ObjectListingMaxKeys, text)?,
                "Delimiter" => listing.delimiter = non_empty(text),
                "EncodingType" => listing.encoding_type = non_empty(text),
                "IsTruncated" => {
                    listing.truncated = parse_flag(Field::ObjectListingTruncated, text)?;
                }
                "Contents" => {
                    let object = take_in_progress(&mut self.current_object, "Contents")?;
                    listing.object_summaries.push(object);
                }
                _ => {}
            }
        } else if path.is(&[LIST_BUCKET, "Contents"]) {
            let object = in_progress(&mut self.current_object, "Contents")?;
            match name {
                "Key" => object.key = Some(text.to_owned()),
                "LastModified" => object.last_modified = Some(parse_timestamp(text)?),
                "ETag" => object.e_tag = Some(remove_quotes(text)),
                "Size" => object.size = parse_long(Field::ObjectSize, text)?,
                "StorageClass" => object.storage_class = Some(text.to_owned()),
                "Owner" => object.owner = self.current_owner.take(),
                _ => {}
            }
        } else if path.is(&[LIST_BUCKET, "Contents", "Owner"]) {
            let owner = in_progress(&mut self.current_owner, "Owner")?;
            owner_field(owner, name, text, EmptyOwnerText::Keep);
        } else if path.is(&[LIST_BUCKET, "CommonPrefixes"]) && name == "Prefix" {
            self.listing.common_prefixes.push(text.to_owned());
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.listing)
    }
}

/// Handler for `<ListVersionsResult>` (ListObjectVersions).
#[derive(Debug, Default)]
pub struct ListVersionsHandler {
    listing: VersionListing,
    current_version: Option<VersionSummary>,
    current_owner: Option<Owner>,
}

fn is_version_entry(name: &str) -> bool {
    name == "Version" || name == "DeleteMarker"
}

fn within_version_entry(path: &ElementPath) -> bool {
    path.is(&[LIST_VERSIONS, "Version"]) || path.is(&[LIST_VERSIONS, "DeleteMarker"])
}

impl ResponseHandler for ListVersionsHandler {
    type Output = VersionListing;
    const NAME: &'static str = "ListVersionsHandler";
    const SANITIZE: bool = true;

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[LIST_VERSIONS]) {
            if is_version_entry(name) {
                self.current_version = Some(VersionSummary {
                    bucket_name: self.listing.bucket_name.clone(),
                    is_delete_marker: name == "DeleteMarker",
                    ..VersionSummary::default()
                });
            }
        } else if within_version_entry(path) && name == "Owner" {
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
        if path.is(&[LIST_VERSIONS]) {
            let listing = &mut self.listing;
            match name {
                "Name" => {
                    listing.bucket_name = Some(text.to_owned());
                    tracing::debug!(bucket = text, "examining version listing for bucket");
                }
                "Prefix" => listing.prefix = non_empty(text),
                "KeyMarker" => listing.key_marker = non_empty(text),
                "VersionIdMarker" => listing.version_id_marker = non_empty(text),
                "MaxKeys" => listing.max_keys = parse_int(Field::VersionListingMaxKeys, text)?,
                "Delimiter" => listing.delimiter = non_empty(text),
                "EncodingType" => listing.encoding_type = non_empty(text),
                "NextKeyMarker" => listing.next_key_marker = Some(text.to_owned()),
                "NextVersionIdMarker" => listing.next_version_id_marker = Some(text.to_owned()),
                "IsTruncated" => {
                    listing.truncated = parse_flag(Field::VersionListingTruncated, text)?;
                }
                entry if is_version_entry(entry) => {
                    let version = take_in_progress(&mut self.current_version, entry)?;
                    listing.version_summaries.push(version);
                }
                _ => {}
            }
        } else if path.is(&[LIST_VERSIONS, "CommonPrefixes"]) {
            if name == "Prefix" {
                self.listing.common_prefixes.push(non_empty(text));
            }
        } else if within_version_entry(path) {
            let version = in_progress(&mut self.current_version, "Version")?;
            match name {
                "Key" => version.key = Some(text.to_owned()),
                "VersionId" => version.version_id = Some(text.to_owned()),
                "IsLatest" => version.is_latest = parse_flag(Field::VersionIsLatest, text)?,
                "LastModified" => version.last_modified = Some(parse_timestamp(text)?),
                "ETag" => version.e_tag = Some(remove_quotes(text)),
                "Size" => version.size = parse_long(Field::VersionSize, text)?,
                "Owner" => version.owner = self.current_owner.take(),
                "StorageClass" => version.storage_class = Some(text.to_owned()),
                _ => {}
            }
        } else if path.is(&[LIST_VERSIONS, "Version", "Owner"])
            || path.is(&[LIST_VERSIONS, "DeleteMarker", "Owner"])
        {
            let owner = in_progress(&mut self.current_owner, "Owner")?;
            owner_field(owner, name, text, EmptyOwnerText::Keep);
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.listing)
    }
}

/// Handler for `<ListAllMyBucketsResult>` (ListBuckets).
#[derive(Debug, Default)]
pub struct ListAllMyBucketsHandler {
    listing: BucketListing,
    current_bucket: Option<Bucket>,
}

impl ResponseHandler for ListAllMyBucketsHandler {
    type Output = BucketListing;
    const NAME: &'static str = "ListAllMyBucketsHandler";
    const SANITIZE: bool = true;

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[LIST_ALL_MY_BUCKETS]) {
            if name == "Owner" {
                self.listing.owner = Some(Owner::default());
            }
        } else if path.is(&[LIST_ALL_MY_BUCKETS, "Buckets"]) && name == "Bucket" {
            self.current_bucket = Some(Bucket {
                owner: self.listing.owner.clone(),
                ..Bucket::default()
            });
        }
        Ok(())
    }

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&[LIST_ALL_MY_BUCKETS, "Owner"]) {
            let owner = in_progress(&mut self.listing.owner, "Owner")?;
            owner_field(owner, name, text, EmptyOwnerText::Keep);
        } else if path.is(&[LIST_ALL_MY_BUCKETS, "Buckets"]) {
            if name == "Bucket" {
                let bucket = take_in_progress(&mut self.current_bucket, "Bucket")?;
                self.listing.buckets.push(bucket);
            }
        } else if path.is(&[LIST_ALL_MY_BUCKETS, "Buckets", "Bucket"]) {
            let bucket = in_progress(&mut self.current_bucket, "Bucket")?;
            match name {
                "Name" => bucket.name = Some(text.to_owned()),
                "CreationDate" => bucket.creation_date = Some(parse_timestamp(text)?),
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.listing)
    }
}
