//! Small bucket sub-resource documents: logging, location, versioning,
//! request payment and tagging.

use ruststack_s3_client_model::{
    BucketLoggingConfiguration, BucketTaggingConfiguration, BucketVersioningConfiguration, Payer,
    RequestPaymentConfiguration, TagSet, VersioningStatus,
};

use super::{in_progress, take_in_progress};
use crate::error::XmlError;
use crate::handler::{Attributes, ResponseHandler};
use crate::path::ElementPath;
use crate::policy::non_empty;

/// Handler for `<BucketLoggingStatus>`.
#[derive(Debug, Default)]
pub struct BucketLoggingConfigurationHandler {
    configuration: BucketLoggingConfiguration,
}

impl ResponseHandler for BucketLoggingConfigurationHandler {
    type Output = BucketLoggingConfiguration;
    const NAME: &'static str = "BucketLoggingConfigurationHandler";

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&["BucketLoggingStatus", "LoggingEnabled"]) {
            match name {
                "TargetBucket" => {
                    self.configuration.destination_bucket_name = Some(text.to_owned());
                }
                "TargetPrefix" => self.configuration.log_file_prefix = Some(text.to_owned()),
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.configuration)
    }
}

/// Handler for `<LocationConstraint>`.
///
/// Buckets in US Standard report an empty constraint, which yields `None`.
#[derive(Debug, Default)]
pub struct BucketLocationHandler {
    location: Option<String>,
}

impl ResponseHandler for BucketLocationHandler {
    type Output = Option<String>;
    const NAME: &'static str = "BucketLocationHandler";

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.at_top_level() && name == "LocationConstraint" {
            self.location = non_empty(text);
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.location)
    }
}

/// Handler for `<VersioningConfiguration>`.
#[derive(Debug, Default)]
pub struct BucketVersioningConfigurationHandler {
    configuration: BucketVersioningConfiguration,
}

impl ResponseHandler for BucketVersioningConfigurationHandler {
    type Output = BucketVersioningConfiguration;
    const NAME: &'static str = "BucketVersioningConfigurationHandler";

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&["VersioningConfiguration"]) {
            match name {
                "Status" => self.configuration.status = VersioningStatus::from(text),
                "MfaDelete" => {
                    self.configuration.mfa_delete_enabled = match text {
                        "Disabled" => Some(false),
                        "Enabled" => Some(true),
                        _ => None,
                    };
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.configuration)
    }
}

/// Handler for `<RequestPaymentConfiguration>`. The payer is mandatory.
#[derive(Debug, Default)]
pub struct RequestPaymentConfigurationHandler {
    payer: Option<String>,
}

impl ResponseHandler for RequestPaymentConfigurationHandler {
    type Output = RequestPaymentConfiguration;
    const NAME: &'static str = "RequestPaymentConfigurationHandler";

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&["RequestPaymentConfiguration"]) && name == "Payer" {
            self.payer = Some(text.to_owned());
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        let payer = self
            .payer
            .ok_or_else(|| XmlError::MissingElement("Payer".to_owned()))?;
        let payer = Payer::parse(&payer)
            .ok_or_else(|| XmlError::ParseError(format!("unknown payer '{payer}'")))?;
        Ok(RequestPaymentConfiguration { payer })
    }
}

/// Handler for `<Tagging>`.
#[derive(Debug, Default)]
pub struct BucketTaggingConfigurationHandler {
    configuration: BucketTaggingConfiguration,
    current_tag_set: Option<TagSet>,
    current_key: Option<String>,
    current_value: Option<String>,
}

impl ResponseHandler for BucketTaggingConfigurationHandler {
    type Output = BucketTaggingConfiguration;
    const NAME: &'static str = "BucketTaggingConfigurationHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&["Tagging"]) && name == "TagSet" {
            self.current_tag_set = Some(TagSet::default());
        }
        Ok(())
    }

    fn element_ended(
        &mut self,
        path: &ElementPath,
        name: &str,
        text: &str,
    ) -> Result<(), XmlError> {
        if path.is(&["Tagging"]) {
            if name == "TagSet" {
                let tag_set = take_in_progress(&mut self.current_tag_set, "TagSet")?;
                self.configuration.tag_sets.push(tag_set);
            }
        } else if path.is(&["Tagging", "TagSet"]) {
            if name == "Tag" {
                let key = self.current_key.take();
                let value = self.current_value.take();
                // A tag is only kept when both halves were present.
                if let (Some(key), Some(value)) = (key, value) {
                    in_progress(&mut self.current_tag_set, "TagSet")?.insert(key, value);
                }
            }
        } else if path.is(&["Tagging", "TagSet", "Tag"]) {
            match name {
                "Key" => self.current_key = Some(text.to_owned()),
                "Value" => self.current_value = Some(text.to_owned()),
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.configuration)
    }
}
