//! `<LifecycleConfiguration>` documents.

use ruststack_s3_client_model::{
    BucketLifecycleConfiguration, LifecycleRule, NoncurrentVersionTransition, Transition,
};

use super::{in_progress, take_in_progress};
use crate::error::XmlError;
use crate::handler::{Attributes, ResponseHandler};
use crate::path::ElementPath;
use crate::policy::{Field, parse_int, parse_timestamp};

const ROOT: &str = "LifecycleConfiguration";

/// Handler for `<LifecycleConfiguration>`.
#[derive(Debug, Default)]
pub struct BucketLifecycleConfigurationHandler {
    configuration: BucketLifecycleConfiguration,
    current_rule: Option<LifecycleRule>,
    current_transition: Option<Transition>,
    current_noncurrent_transition: Option<NoncurrentVersionTransition>,
}

impl ResponseHandler for BucketLifecycleConfigurationHandler {
    type Output = BucketLifecycleConfiguration;
    const NAME: &'static str = "BucketLifecycleConfigurationHandler";

    fn element_started(
        &mut self,
        path: &ElementPath,
        name: &str,
        _attributes: &Attributes,
    ) -> Result<(), XmlError> {
        if path.is(&[ROOT]) {
            if name == "Rule" {
                self.current_rule = Some(LifecycleRule::default());
            }
        } else if path.is(&[ROOT, "Rule"]) {
            match name {
                "Transition" => self.current_transition = Some(Transition::default()),
                "NoncurrentVersionTransition" => {
                    self.current_noncurrent_transition =
                        Some(NoncurrentVersionTransition::default());
                }
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
            if name == "Rule" {
                let rule = take_in_progress(&mut self.current_rule, "Rule")?;
                self.configuration.rules.push(rule);
            }
        } else if path.is(&[ROOT, "Rule"]) {
            let rule = in_progress(&mut self.current_rule, "Rule")?;
            match name {
                "ID" => rule.id = Some(text.to_owned()),
                "Prefix" => rule.prefix = Some(text.to_owned()),
                "Status" => rule.status = Some(text.to_owned()),
                "Transition" => {
                    let transition = take_in_progress(&mut self.current_transition, name)?;
                    rule.transitions.push(transition);
                }
                "NoncurrentVersionTransition" => {
                    let transition =
                        take_in_progress(&mut self.current_noncurrent_transition, name)?;
                    rule.noncurrent_version_transitions.push(transition);
                }
                _ => {}
            }
        } else if path.is(&[ROOT, "Rule", "Expiration"]) {
            let rule = in_progress(&mut self.current_rule, "Rule")?;
            match name {
                "Date" => rule.expiration_date = Some(parse_timestamp(text)?),
                "Days" => rule.expiration_in_days = Some(parse_int(Field::ExpirationDays, text)?),
                _ => {}
            }
        } else if path.is(&[ROOT, "Rule", "Transition"]) {
            let transition = in_progress(&mut self.current_transition, "Transition")?;
            match name {
                "StorageClass" => transition.storage_class = Some(text.to_owned()),
                "Date" => transition.date = Some(parse_timestamp(text)?),
                "Days" => transition.days = Some(parse_int(Field::TransitionDays, text)?),
                _ => {}
            }
        } else if path.is(&[ROOT, "Rule", "NoncurrentVersionExpiration"]) {
            if name == "NoncurrentDays" {
                let days = parse_int(Field::NoncurrentVersionExpirationDays, text)?;
                in_progress(&mut self.current_rule, "Rule")?
                    .noncurrent_version_expiration_in_days = Some(days);
            }
        } else if path.is(&[ROOT, "Rule", "NoncurrentVersionTransition"]) {
            let transition = in_progress(
                &mut self.current_noncurrent_transition,
                "NoncurrentVersionTransition",
            )?;
            match name {
                "StorageClass" => transition.storage_class = Some(text.to_owned()),
                "NoncurrentDays" => {
                    let days = parse_int(Field::NoncurrentVersionTransitionDays, text)?;
                    transition.days = Some(days);
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

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::handlers::run;

    const LIFECYCLE: &[u8] = br#"<LifecycleConfiguration>
  <Rule>
    <ID>logs-rule</ID>
    <Prefix>logs/</Prefix>
    <Status>Enabled</Status>
    <Transition>
      <Days>30</Days>
      <StorageClass>STANDARD_IA</StorageClass>
    </Transition>
    <Transition>
      <Days>90</Days>
      <StorageClass>GLACIER</StorageClass>
    </Transition>
    <Expiration>
      <Days>365</Days>
    </Expiration>
    <NoncurrentVersionTransition>
      <NoncurrentDays>7</NoncurrentDays>
      <StorageClass>STANDARD_IA</StorageClass>
    </NoncurrentVersionTransition>
    <NoncurrentVersionTransition>
      <NoncurrentDays>14</NoncurrentDays>
      <StorageClass>GLACIER</StorageClass>
    </NoncurrentVersionTransition>
    <NoncurrentVersionExpiration>
      <NoncurrentDays>365</NoncurrentDays>
    </NoncurrentVersionExpiration>
  </Rule>
  <Rule>
    <ID>image-rule</ID>
    <Prefix>image/</Prefix>
    <Status>Enabled</Status>
    <Transition>
      <Date>2012-12-31T00:00:00.000Z</Date>
      <StorageClass>GLACIER</StorageClass>
    </Transition>
    <Expiration>
      <Date>2020-12-31T00:00:00.000Z</Date>
    </Expiration>
  </Rule>
</LifecycleConfiguration>"#;

    #[test]
    fn test_should_parse_lifecycle_rules() {
        let config = run::<BucketLifecycleConfigurationHandler>(LIFECYCLE).expect("lifecycle");
        assert_eq!(config.rules.len(), 2);

        let logs = &config.rules[0];
        assert_eq!(logs.id.as_deref(), Some("logs-rule"));
        assert_eq!(logs.prefix.as_deref(), Some("logs/"));
        assert_eq!(logs.status.as_deref(), Some("Enabled"));
        assert_eq!(logs.expiration_in_days, Some(365));
        assert_eq!(logs.noncurrent_version_expiration_in_days, Some(365));
        let days: Vec<_> = logs.transitions.iter().map(|t| t.days).collect();
        assert_eq!(days, vec![Some(30), Some(90)]);
        assert_eq!(logs.transitions[1].storage_class.as_deref(), Some("GLACIER"));
        let noncurrent: Vec<_> = logs
            .noncurrent_version_transitions
            .iter()
            .map(|t| (t.days, t.storage_class.as_deref()))
            .collect();
        assert_eq!(
            noncurrent,
            vec![(Some(7), Some("STANDARD_IA")), (Some(14), Some("GLACIER"))]
        );

        let images = &config.rules[1];
        assert_eq!(
            images.transitions[0].date,
            Some(Utc.with_ymd_and_hms(2012, 12, 31, 0, 0, 0).unwrap())
        );
        assert_eq!(
            images.expiration_date,
            Some(Utc.with_ymd_and_hms(2020, 12, 31, 0, 0, 0).unwrap())
        );
        assert_eq!(images.expiration_in_days, None);
    }

    #[test]
    fn test_should_reject_non_numeric_days() {
        let xml = b"<LifecycleConfiguration><Rule><Expiration><Days>soon</Days></Expiration></Rule>\
            </LifecycleConfiguration>";
        assert!(run::<BucketLifecycleConfigurationHandler>(xml).is_err());

        let xml = b"<LifecycleConfiguration><Rule><NoncurrentVersionTransition><NoncurrentDays/>\
            </NoncurrentVersionTransition></Rule></LifecycleConfiguration>";
        assert!(run::<BucketLifecycleConfigurationHandler>(xml).is_err());
    }
}
