//! One [`ResponseHandler`](crate::ResponseHandler) per S3 response shape.
//!
//! Every handler follows the same pattern: scratch objects for repeated
//! children are created when the child's start tag is seen, filled from the
//! text of its own children, and attached to the result on the child's end
//! tag. Document order is preserved in every collection.

pub mod acl;
pub mod bucket_config;
pub mod cors;
pub mod lifecycle;
pub mod listing;
pub mod multipart;
pub mod object;
pub mod replication;
pub mod website;

pub use acl::AccessControlListHandler;
pub use bucket_config::{
    BucketLocationHandler, BucketLoggingConfigurationHandler,
    BucketTaggingConfigurationHandler, BucketVersioningConfigurationHandler,
    RequestPaymentConfigurationHandler,
};
pub use cors::BucketCrossOriginConfigurationHandler;
pub use lifecycle::BucketLifecycleConfigurationHandler;
pub use listing::{ListAllMyBucketsHandler, ListBucketHandler, ListVersionsHandler};
pub use multipart::{
    CompleteMultipartUploadHandler, InitiateMultipartUploadHandler, ListMultipartUploadsHandler,
    ListPartsHandler,
};
pub use object::{CopyObjectResultHandler, DeleteObjectsHandler};
pub use replication::BucketReplicationConfigurationHandler;
pub use website::BucketWebsiteConfigurationHandler;

use ruststack_s3_client_model::Owner;

use crate::error::XmlError;
use crate::policy::non_empty;

/// The scratch object for an element whose start tag must already have been
/// seen.
fn in_progress<'a, T>(slot: &'a mut Option<T>, element: &str) -> Result<&'a mut T, XmlError> {
    slot.as_mut()
        .ok_or_else(|| XmlError::InvalidState(format!("no <{element}> in progress")))
}

/// Detach a finished scratch object.
fn take_in_progress<T>(slot: &mut Option<T>, element: &str) -> Result<T, XmlError> {
    slot.take()
        .ok_or_else(|| XmlError::InvalidState(format!("no <{element}> in progress")))
}

/// How empty `<ID/>` and `<DisplayName/>` are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmptyOwnerText {
    Keep,
    Unset,
}

/// Fill an owner from one of its `<ID>` or `<DisplayName>` children.
fn owner_field(owner: &mut Owner, name: &str, text: &str, empty: EmptyOwnerText) {
    let value = match empty {
        EmptyOwnerText::Keep => Some(text.to_owned()),
        EmptyOwnerText::Unset => non_empty(text),
    };
    match name {
        "ID" => owner.id = value,
        "DisplayName" => owner.display_name = value,
        _ => {}
    }
}

#[cfg(test)]
pub(crate) fn run<H>(xml: &[u8]) -> Result<H::Output, XmlError>
where
    H: crate::ResponseHandler + Default,
{
    let mut handler = H::default();
    crate::handler::drive(&mut handler, xml)?;
    handler.finish()
}
