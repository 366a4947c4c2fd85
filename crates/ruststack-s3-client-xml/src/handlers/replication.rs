//! `<ReplicationConfiguration>` documents.

use ruststack_s3_client_model::{
    BucketReplicationConfiguration, ReplicationDestinationConfig, ReplicationRule,
};

use super::{in_progress, take_in_progress};
use crate::error::XmlError;
use crate::handler::{Attributes, ResponseHandler};
use crate::path::ElementPath;

const ROOT: &str = "ReplicationConfiguration";

/// Handler for `<ReplicationConfiguration>`. Every rule must carry a
/// non-blank `<ID>`.
#[derive(Debug, Default)]
pub struct BucketReplicationConfigurationHandler {
    configuration: BucketReplicationConfiguration,
    current_rule_id: Option<String>,
    current_rule: Option<ReplicationRule>,
    current_destination: Option<ReplicationDestinationConfig>,
}

impl ResponseHandler for BucketReplicationConfigurationHandler {
    type Output = BucketReplicationConfiguration;
    const NAME: &'static str = "BucketReplicationConfigurationHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[ROOT]) {
            if name == "Rule" {
                self.current_rule = Some(ReplicationRule::default());
            }
        } else if path.is(&[ROOT, "Rule"]) && name == "Destination" {
            self.current_destination = Some(ReplicationDestinationConfig::default());
        }
        Ok(())
    }

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&[ROOT]) {
            match name {
                "Rule" => {
                    let mut rule = take_in_progress(&mut self.current_rule, name)?;
                    let id = self
                        .current_rule_id
                        .take()
                        .filter(|id| !id.trim().is_empty())
                        .ok_or_else(|| {
                            XmlError::MissingElement("ID of replication rule".to_owned())
                        })?;
                    rule.id = id;
                    self.current_destination = None;
                    self.configuration.add_rule(rule);
                }
                "Role" => self.configuration.role_arn = Some(text.to_owned()),
                _ => {}
            }
        } else if path.is(&[ROOT, "Rule"]) {
            match name {
                "ID" => self.current_rule_id = Some(text.to_owned()),
                "Prefix" => {
                    in_progress(&mut self.current_rule, "Rule")?.prefix = Some(text.to_owned());
                }
                "Status" => {
                    in_progress(&mut self.current_rule, "Rule")?.status = Some(text.to_owned());
                }
                "Destination" => {
                    in_progress(&mut self.current_rule, "Rule")?.destination =
                        self.current_destination.take();
                }
                _ => {}
            }
        } else if path.is(&[ROOT, "Rule", "Destination"]) {
            let destination = in_progress(&mut self.current_destination, "Destination")?;
            match name {
                "Bucket" => destination.bucket_arn = Some(text.to_owned()),
                "StorageClass" => destination.storage_class = Some(text.to_owned()),
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.configuration)
    }
}
