//! Paginated listing results.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::Owner;

/// One entry of a ListObjects response (`<Contents>`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ObjectSummary {
    /// Bucket the listing was taken from.
    pub bucket_name: Option<String>,
    pub key: Option<String>,
    /// Entity tag with surrounding quotes removed.
    pub e_tag: Option<String>,
    /// Object size in bytes, or -1 when S3 sent a value that is not a number.
    pub size: i64,
    pub last_modified: Option<DateTime<Utc>>,
    pub storage_class: Option<String>,
    pub owner: Option<Owner>,
}

/// ListObjects (`<ListBucketResult>`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ObjectListing {
    pub bucket_name: Option<String>,
    pub prefix: Option<String>,
    pub marker: Option<String>,
    /// Marker for the next page. Filled in from the last key or common prefix
    /// when a truncated response omits it.
    pub next_marker: Option<String>,
    /// Page size, or -1 when S3 sent a value that is not a number.
    pub max_keys: i32,
    pub delimiter: Option<String>,
    pub encoding_type: Option<String>,
    pub truncated: bool,
    pub object_summaries: Vec<ObjectSummary>,
    pub common_prefixes: Vec<String>,
}

/// One `<Version>` or `<DeleteMarker>` of a ListObjectVersions response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VersionSummary {
    pub bucket_name: Option<String>,
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub is_latest: bool,
    pub is_delete_marker: bool,
    pub last_modified: Option<DateTime<Utc>>,
    pub e_tag: Option<String>,
    pub size: i64,
    pub owner: Option<Owner>,
    pub storage_class: Option<String>,
}

/// ListObjectVersions (`<ListVersionsResult>`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VersionListing {
    pub bucket_name: Option<String>,
    pub prefix: Option<String>,
    pub key_marker: Option<String>,
    pub version_id_marker: Option<String>,
    pub max_keys: i32,
    pub delimiter: Option<String>,
    pub encoding_type: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_version_id_marker: Option<String>,
    pub truncated: bool,
    /// Versions and delete markers, interleaved in document order.
    pub version_summaries: Vec<VersionSummary>,
    /// Common prefixes; an empty `<Prefix/>` is kept as `None`.
    pub common_prefixes: Vec<Option<String>>,
}

/// A bucket entry of a ListBuckets response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Bucket {
    pub name: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    /// The account owner, copied onto every bucket of the listing.
    pub owner: Option<Owner>,
}

/// ListBuckets (`<ListAllMyBucketsResult>`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BucketListing {
    pub owner: Option<Owner>,
    pub buckets: Vec<Bucket>,
}

/// One in-progress upload of a ListMultipartUploads response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MultipartUpload {
    pub key: Option<String>,
    pub upload_id: Option<String>,
    pub owner: Option<Owner>,
    pub initiator: Option<Owner>,
    pub storage_class: Option<String>,
    pub initiated: Option<DateTime<Utc>>,
}

/// ListMultipartUploads (`<ListMultipartUploadsResult>`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MultipartUploadListing {
    pub bucket_name: Option<String>,
    pub key_marker: Option<String>,
    pub delimiter: Option<String>,
    pub prefix: Option<String>,
    pub upload_id_marker: Option<String>,
    pub next_key_marker: Option<String>,
    pub next_upload_id_marker: Option<String>,
    pub max_uploads: Option<i32>,
    pub encoding_type: Option<String>,
    pub truncated: bool,
    pub multipart_uploads: Vec<MultipartUpload>,
    pub common_prefixes: Vec<String>,
}

/// One `<Part>` of a ListParts response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PartSummary {
    pub part_number: Option<i32>,
    pub last_modified: Option<DateTime<Utc>>,
    pub e_tag: Option<String>,
    pub size: Option<i64>,
}

/// ListParts (`<ListPartsResult>`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PartListing {
    pub bucket_name: Option<String>,
    pub key: Option<String>,
    pub upload_id: Option<String>,
    pub owner: Option<Owner>,
    pub initiator: Option<Owner>,
    pub storage_class: Option<String>,
    pub part_number_marker: Option<i32>,
    pub next_part_number_marker: Option<i32>,
    pub max_parts: Option<i32>,
    pub encoding_type: Option<String>,
    pub truncated: bool,
    pub parts: Vec<PartSummary>,
}
