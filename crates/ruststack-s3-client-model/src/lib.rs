//! Typed S3 response results for the RustStack S3 client.
//!
//! Every type here is the fully-populated output of one XML response handler
//! in `ruststack-s3-client-xml`. Results are plain data: they are built during
//! a single parse pass and handed to the caller by value.
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

pub mod error;
pub mod output;
pub mod types;

pub use error::ServiceErrorDetails;
pub use output::acl::{AccessControlList, Grant, Grantee};
pub use output::config::{
    BucketCrossOriginConfiguration, BucketLifecycleConfiguration, BucketLoggingConfiguration,
    BucketReplicationConfiguration, BucketTaggingConfiguration, BucketVersioningConfiguration,
    BucketWebsiteConfiguration, CorsRule, LifecycleRule, NoncurrentVersionTransition,
    RedirectRule, ReplicationDestinationConfig, ReplicationRule, RequestPaymentConfiguration,
    RoutingRule, RoutingRuleCondition, Tag, TagSet, Transition,
};
pub use output::list::{
    Bucket, BucketListing, MultipartUpload, MultipartUploadListing, ObjectListing, ObjectSummary,
    PartListing, PartSummary, VersionListing, VersionSummary,
};
pub use output::multipart::{
    CompleteMultipartUploadResponse, CompleteMultipartUploadResult, InitiateMultipartUploadResult,
};
pub use output::object::{
    CopyObjectResponse, CopyObjectResult, DeleteError, DeleteObjectsResult, DeletedObject,
};
pub use types::{AllowedMethod, GroupGrantee, Owner, Payer, Permission, VersioningStatus};
