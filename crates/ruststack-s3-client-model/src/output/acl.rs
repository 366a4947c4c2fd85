//! Access control lists (GetBucketAcl / GetObjectAcl).

use serde::Serialize;

use crate::types::{GroupGrantee, Owner, Permission};

/// The holder of a permission in an ACL grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Grantee {
    /// `xsi:type="CanonicalUser"`.
    CanonicalUser {
        id: Option<String>,
        display_name: Option<String>,
    },
    /// `xsi:type="AmazonCustomerByEmail"`.
    EmailAddress(Option<String>),
    /// `xsi:type="Group"`, identified by its URI.
    Group(GroupGrantee),
}

impl Grantee {
    /// The `xsi:type` this grantee is serialized with.
    #[must_use]
    pub fn type_identifier(&self) -> &'static str {
        match self {
            Self::CanonicalUser { .. } => "CanonicalUser",
            Self::EmailAddress(_) => "AmazonCustomerByEmail",
            Self::Group(_) => "Group",
        }
    }

    /// The identifying value: canonical ID, email address, or group URI.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::CanonicalUser { id, .. } => id.as_deref(),
            Self::EmailAddress(address) => address.as_deref(),
            Self::Group(group) => Some(group.uri()),
        }
    }
}

/// A single grantee/permission pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grant {
    pub grantee: Grantee,
    /// `None` when S3 returned a permission this client does not know.
    pub permission: Option<Permission>,
}

/// `<AccessControlPolicy>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AccessControlList {
    pub owner: Option<Owner>,
    /// Grants in document order.
    pub grants: Vec<Grant>,
}

impl AccessControlList {
    /// Permissions granted to the given grantee, in document order.
    pub fn permissions_for<'a>(
        &'a self,
        grantee: &'a Grantee,
    ) -> impl Iterator<Item = Permission> + 'a {
        self.grants
            .iter()
            .filter(move |g| &g.grantee == grantee)
            .filter_map(|g| g.permission)
    }
}
