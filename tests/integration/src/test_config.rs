//! Bucket configuration integration tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ruststack_s3_client_model::AllowedMethod;
    use ruststack_s3_client_xml::ResponseParseError;

    use crate::{fixture, parser};

    #[test]
    fn test_should_parse_lifecycle_rules() {
        let config = parser()
            .parse_bucket_lifecycle_configuration_response(fixture("lifecycle.xml").as_slice())
            .expect("lifecycle");

        assert_eq!(config.rules.len(), 2);
        let archive = &config.rules[0];
        assert_eq!(archive.id.as_deref(), Some("archive-logs"));
        assert_eq!(archive.status.as_deref(), Some("Enabled"));
        assert_eq!(archive.expiration_in_days, Some(365));
        assert_eq!(archive.noncurrent_version_expiration_in_days, Some(40));
        let days: Vec<_> = archive.transitions.iter().map(|t| t.days).collect();
        assert_eq!(days, vec![Some(30), Some(90)]);
        assert_eq!(archive.noncurrent_version_transitions[0].days, Some(10));

        let expire = &config.rules[1];
        assert_eq!(
            expire.expiration_date,
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
        );
        assert!(expire.transitions.is_empty());
    }

    #[test]
    fn test_should_abort_lifecycle_with_non_numeric_days() {
        let body = b"<LifecycleConfiguration><Rule><Expiration><Days>soon</Days></Expiration>\
            </Rule></LifecycleConfiguration>";
        let err = parser()
            .parse_bucket_lifecycle_configuration_response(&body[..])
            .expect_err("days must be numeric");
        assert_eq!(err.handler(), Some("BucketLifecycleConfigurationHandler"));
    }

    #[test]
    fn test_should_parse_cors_rules() {
        let config = parser()
            .parse_bucket_cross_origin_configuration_response(fixture("cors.xml").as_slice())
            .expect("cors");

        assert_eq!(config.rules.len(), 2);
        let web = &config.rules[0];
        assert_eq!(web.id.as_deref(), Some("web"));
        assert_eq!(web.allowed_origins.len(), 2);
        assert_eq!(
            web.allowed_methods,
            vec![AllowedMethod::Put, AllowedMethod::Post, AllowedMethod::Delete]
        );
        assert_eq!(web.max_age_seconds, Some(3000));
        assert_eq!(web.exposed_headers.len(), 2);
        assert_eq!(web.allowed_headers, vec!["*".to_owned()]);

        let public = &config.rules[1];
        assert_eq!(public.id, None);
        assert_eq!(public.max_age_seconds, None);
        assert_eq!(public.allowed_methods, vec![AllowedMethod::Get]);
    }

    #[test]
    fn test_should_parse_website_routing_rules() {
        let config = parser()
            .parse_website_configuration_response(fixture("website.xml").as_slice())
            .expect("website");

        assert_eq!(config.index_document_suffix.as_deref(), Some("index.html"));
        assert_eq!(config.error_document.as_deref(), Some("error.html"));
        assert!(config.redirect_all_requests_to.is_none());
        assert_eq!(config.routing_rules.len(), 2);

        let first = &config.routing_rules[0];
        let condition = first.condition.as_ref().expect("condition");
        assert_eq!(condition.key_prefix_equals.as_deref(), Some("docs/"));
        let redirect = first.redirect.as_ref().expect("redirect");
        assert_eq!(redirect.replace_key_prefix_with.as_deref(), Some("documents/"));
        assert_eq!(redirect.protocol, None);

        let second = &config.routing_rules[1];
        let redirect = second.redirect.as_ref().expect("redirect");
        assert_eq!(redirect.protocol.as_deref(), Some("https"));
        assert_eq!(redirect.http_redirect_code.as_deref(), Some("302"));
    }

    #[test]
    fn test_should_parse_replication_rules_by_id() {
        let config = parser()
            .parse_replication_configuration_response(fixture("replication.xml").as_slice())
            .expect("replication");

        assert_eq!(
            config.role_arn.as_deref(),
            Some("arn:aws:iam::35667example:role/CrossRegionReplicationRoleForS3")
        );
        let rule = config.rule("rule1").expect("rule1");
        assert_eq!(rule.prefix.as_deref(), Some("TaxDocs"));
        let destination = rule.destination.as_ref().expect("destination");
        assert_eq!(destination.bucket_arn.as_deref(), Some("arn:aws:s3:::exampletargetbucket"));
        assert_eq!(destination.storage_class.as_deref(), Some("STANDARD_IA"));

        let rule = config.rule("rule2").expect("rule2");
        assert_eq!(rule.status.as_deref(), Some("Disabled"));
        assert_eq!(
            rule.destination.as_ref().and_then(|d| d.storage_class.as_deref()),
            None
        );
    }

    #[test]
    fn test_should_reject_replication_rule_without_id() {
        let body = b"<ReplicationConfiguration><Rule><Prefix>p</Prefix></Rule>\
            </ReplicationConfiguration>";
        let err = parser()
            .parse_replication_configuration_response(&body[..])
            .expect_err("rule id required");
        assert!(matches!(err, ResponseParseError::Parse { .. }));
    }
}
