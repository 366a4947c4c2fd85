//! `<AccessControlPolicy>` documents (GetBucketAcl / GetObjectAcl).

use ruststack_s3_client_model::{
    AccessControlList, Grant, Grantee, GroupGrantee, Owner, Permission,
};

use super::{EmptyOwnerText, in_progress, owner_field};
use crate::error::XmlError;
use crate::handler::{Attributes, ResponseHandler};
use crate::path::ElementPath;

const ROOT: &str = "AccessControlPolicy";
const GRANTEE_TYPE_ATTRIBUTE: &str = "xsi:type";

/// A grantee whose identity is still being read.
///
/// Canonical users and email grantees are known from `xsi:type` on the start
/// tag. Groups are only identified once the `<URI>` text has been read.
#[derive(Debug)]
enum GranteeBuilder {
    CanonicalUser {
        id: Option<String>,
        display_name: Option<String>,
    },
    EmailAddress(Option<String>),
    Group(Option<GroupGrantee>),
}

impl GranteeBuilder {
    fn from_type(grantee_type: Option<&str>) -> Option<Self> {
        match grantee_type? {
            "CanonicalUser" => Some(Self::CanonicalUser {
                id: None,
                display_name: None,
            }),
            "AmazonCustomerByEmail" => Some(Self::EmailAddress(None)),
            "Group" => Some(Self::Group(None)),
            _ => None,
        }
    }

    fn set_identifier(&mut self, element: &str, value: &str) -> Result<(), XmlError> {
        match self {
            Self::CanonicalUser { id, .. } => *id = Some(value.to_owned()),
            Self::EmailAddress(address) => *address = Some(value.to_owned()),
            Self::Group(_) => {
                return Err(XmlError::UnexpectedElement(format!(
                    "<{element}> in a group grantee"
                )));
            }
        }
        Ok(())
    }

    fn build(self) -> Result<Grantee, XmlError> {
        match self {
            Self::CanonicalUser { id, display_name } => {
                Ok(Grantee::CanonicalUser { id, display_name })
            }
            Self::EmailAddress(address) => Ok(Grantee::EmailAddress(address)),
            Self::Group(Some(group)) => Ok(Grantee::Group(group)),
            Self::Group(None) => Err(XmlError::MissingElement(
                "URI of a known grantee group".to_owned(),
            )),
        }
    }
}

/// Handler for `<AccessControlPolicy>`.
#[derive(Debug, Default)]
pub struct AccessControlListHandler {
    acl: AccessControlList,
    current_grantee: Option<GranteeBuilder>,
    current_permission: Option<Permission>,
}

impl ResponseHandler for AccessControlListHandler {
    type Output = AccessControlList;
    const NAME: &'static str = "AccessControlListHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[ROOT]) {
            if name == "Owner" {
                self.acl.owner = Some(Owner::default());
            }
        } else if path.is(&[ROOT, "AccessControlList", "Grant"]) && name == "Grantee" {
            self.current_grantee =
                GranteeBuilder::from_type(attributes.find(GRANTEE_TYPE_ATTRIBUTE));
        }
        Ok(())
    }

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&[ROOT, "Owner"]) {
            let owner = in_progress(&mut self.acl.owner, "Owner")?;
            owner_field(owner, name, text, EmptyOwnerText::Keep);
        } else if path.is(&[ROOT, "AccessControlList"]) {
            if name == "Grant" {
                let grantee = self
                    .current_grantee
                    .take()
                    .ok_or_else(|| {
                        XmlError::MissingElement("Grantee with a known xsi:type".to_owned())
                    })?
                    .build()?;
                self.acl.grants.push(Grant {
                    grantee,
                    permission: self.current_permission.take(),
                });
            }
        } else if path.is(&[ROOT, "AccessControlList", "Grant"]) {
            if name == "Permission" {
                self.current_permission = Permission::parse(text);
            }
        } else if path.is(&[ROOT, "AccessControlList", "Grant", "Grantee"]) {
            match name {
                "ID" | "EmailAddress" => {
                    in_progress(&mut self.current_grantee, "Grantee")?.set_identifier(name, text)?;
                }
                "URI" => {
                    let group = GroupGrantee::from_uri(text);
                    self.current_grantee = Some(GranteeBuilder::Group(group));
                }
                "DisplayName" => match in_progress(&mut self.current_grantee, "Grantee")? {
                    GranteeBuilder::CanonicalUser { display_name, .. } => {
                        *display_name = Some(text.to_owned());
                    }
                    _ => {
                        return Err(XmlError::UnexpectedElement(
                            "<DisplayName> in a grantee that is not a canonical user".to_owned(),
                        ));
                    }
                },
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.acl)
    }
}
