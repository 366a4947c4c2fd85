//! `<WebsiteConfiguration>` documents.

use ruststack_s3_client_model::{
    BucketWebsiteConfiguration, RedirectRule, RoutingRule, RoutingRuleCondition,
};

use super::{in_progress, take_in_progress};
use crate::error::XmlError;
use crate::handler::{Attributes, ResponseHandler};
use crate::path::ElementPath;

const ROOT: &str = "WebsiteConfiguration";

/// Handler for `<WebsiteConfiguration>`.
///
/// `<RedirectAllRequestsTo>` and a routing rule's `<Redirect>` share the same
/// shape and are read through the same scratch [`RedirectRule`].
#[derive(Debug, Default)]
pub struct BucketWebsiteConfigurationHandler {
    configuration: BucketWebsiteConfiguration,
    current_condition: Option<RoutingRuleCondition>,
    current_redirect: Option<RedirectRule>,
    current_routing_rule: Option<RoutingRule>,
}

impl ResponseHandler for BucketWebsiteConfigurationHandler {
    type Output = BucketWebsiteConfiguration;
    const NAME: &'static str = "BucketWebsiteConfigurationHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[ROOT]) {
            if name == "RedirectAllRequestsTo" {
                self.current_redirect = Some(RedirectRule::default());
            }
        } else if path.is(&[ROOT, "RoutingRules"]) {
            if name == "RoutingRule" {
                self.current_routing_rule = Some(RoutingRule::default());
            }
        } else if path.is(&[ROOT, "RoutingRules", "RoutingRule"]) {
            match name {
                "Condition" => self.current_condition = Some(RoutingRuleCondition::default()),
                "Redirect" => self.current_redirect = Some(RedirectRule::default()),
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
        if path.is(&[ROOT]) {
            if name == "RedirectAllRequestsTo" {
                self.configuration.redirect_all_requests_to = self.current_redirect.take();
            }
        } else if path.is(&[ROOT, "IndexDocument"]) {
            if name == "Suffix" {
                self.configuration.index_document_suffix = Some(text.to_owned());
            }
        } else if path.is(&[ROOT, "ErrorDocument"]) {
            if name == "Key" {
                self.configuration.error_document = Some(text.to_owned());
            }
        } else if path.is(&[ROOT, "RoutingRules"]) {
            if name == "RoutingRule" {
                let rule = take_in_progress(&mut self.current_routing_rule, name)?;
                self.configuration.routing_rules.push(rule);
            }
        } else if path.is(&[ROOT, "RoutingRules", "RoutingRule"]) {
            let rule = in_progress(&mut self.current_routing_rule, "RoutingRule")?;
            match name {
                "Condition" => rule.condition = self.current_condition.take(),
                "Redirect" => rule.redirect = self.current_redirect.take(),
                _ => {}
            }
        } else if path.is(&[ROOT, "RoutingRules", "RoutingRule", "Condition"]) {
            let condition = in_progress(&mut self.current_condition, "Condition")?;
            match name {
                "KeyPrefixEquals" => condition.key_prefix_equals = Some(text.to_owned()),
                "HttpErrorCodeReturnedEquals" => {
                    condition.http_error_code_returned_equals = Some(text.to_owned());
                }
                _ => {}
            }
        } else if path.is(&[ROOT, "RedirectAllRequestsTo"])
            || path.is(&[ROOT, "RoutingRules", "RoutingRule", "Redirect"])
        {
            let redirect = in_progress(&mut self.current_redirect, "Redirect")?;
            let value = Some(text.to_owned());
            match name {
                "Protocol" => redirect.protocol = value,
                "HostName" => redirect.host_name = value,
                "ReplaceKeyPrefixWith" => redirect.replace_key_prefix_with = value,
                "ReplaceKeyWith" => redirect.replace_key_with = value,
                "HttpRedirectCode" => redirect.http_redirect_code = value,
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, XmlError> {
        Ok(self.configuration)
    }
}
