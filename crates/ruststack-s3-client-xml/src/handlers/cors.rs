//! `<CORSConfiguration>` documents.

use ruststack_s3_client_model::{AllowedMethod, BucketCrossOriginConfiguration, CorsRule};

use super::{in_progress, take_in_progress};
use crate::error::XmlError;
use crate::handler::{Attributes, ResponseHandler};
use crate::path::ElementPath;
use crate::policy::{Field, parse_int};

const ROOT: &str = "CORSConfiguration";

/// Handler for `<CORSConfiguration>`.
#[derive(Debug, Default)]
pub struct BucketCrossOriginConfigurationHandler {
    configuration: BucketCrossOriginConfiguration,
    current_rule: Option<CorsRule>,
}

impl ResponseHandler for BucketCrossOriginConfigurationHandler {
    type Output = BucketCrossOriginConfiguration;
    const NAME: &'static str = "BucketCrossOriginConfigurationHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[ROOT]) && name == "CORSRule" {
            self.current_rule = Some(CorsRule::default());
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
            if name == "CORSRule" {
                let rule = take_in_progress(&mut self.current_rule, "CORSRule")?;
                self.configuration.rules.push(rule);
            }
        } else if path.is(&[ROOT, "CORSRule"]) {
            let rule = in_progress(&mut self.current_rule, "CORSRule")?;
            match name {
                "ID" => rule.id = Some(text.to_owned()),
                "AllowedOrigin" => rule.allowed_origins.push(text.to_owned()),
                "AllowedMethod" => {
                    let method = AllowedMethod::parse(text).ok_or_else(|| {
                        XmlError::ParseError(format!("unknown CORS method '{text}'"))
                    })?;
                    rule.allowed_methods.push(method);
                }
                "MaxAgeSeconds" => {
                    rule.max_age_seconds = Some(parse_int(Field::CorsMaxAgeSeconds, text)?);
                }
                "ExposeHeader" => rule.exposed_headers.push(text.to_owned()),
                "AllowedHeader" => rule.allowed_headers.push(text.to_owned()),
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.configuration)
    }
}
