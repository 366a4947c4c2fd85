//! Bucket sub-resource configurations returned by the `Get*` bucket APIs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{AllowedMethod, Payer, VersioningStatus};

/// `<BucketLoggingStatus>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BucketLoggingConfiguration {
    pub destination_bucket_name: Option<String>,
    pub log_file_prefix: Option<String>,
}

impl BucketLoggingConfiguration {
    /// Logging is enabled when the document names a target bucket.
    #[must_use]
    pub fn is_logging_enabled(&self) -> bool {
        self.destination_bucket_name.is_some()
    }
}

/// A storage class transition of a lifecycle rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Transition {
    pub days: Option<i32>,
    pub date: Option<DateTime<Utc>>,
    pub storage_class: Option<String>,
}

/// A noncurrent version transition of a lifecycle rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NoncurrentVersionTransition {
    pub days: Option<i32>,
    pub storage_class: Option<String>,
}

/// One `<Rule>` of a lifecycle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LifecycleRule {
    pub id: Option<String>,
    pub prefix: Option<String>,
    pub status: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub expiration_in_days: Option<i32>,
    pub noncurrent_version_expiration_in_days: Option<i32>,
    pub transitions: Vec<Transition>,
    pub noncurrent_version_transitions: Vec<NoncurrentVersionTransition>,
}

/// `<LifecycleConfiguration>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BucketLifecycleConfiguration {
    pub rules: Vec<LifecycleRule>,
}

/// One `<CORSRule>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CorsRule {
    pub id: Option<String>,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<AllowedMethod>,
    pub max_age_seconds: Option<i32>,
    pub exposed_headers: Vec<String>,
    pub allowed_headers: Vec<String>,
}

/// `<CORSConfiguration>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BucketCrossOriginConfiguration {
    pub rules: Vec<CorsRule>,
}

/// `<VersioningConfiguration>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BucketVersioningConfiguration {
    pub status: VersioningStatus,
    /// `None` when MFA delete was never configured.
    pub mfa_delete_enabled: Option<bool>,
}

/// Where a website request is redirected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RedirectRule {
    pub protocol: Option<String>,
    pub host_name: Option<String>,
    pub replace_key_prefix_with: Option<String>,
    pub replace_key_with: Option<String>,
    pub http_redirect_code: Option<String>,
}

/// When a routing rule applies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RoutingRuleCondition {
    pub key_prefix_equals: Option<String>,
    pub http_error_code_returned_equals: Option<String>,
}

/// One `<RoutingRule>` of a website configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RoutingRule {
    pub condition: Option<RoutingRuleCondition>,
    pub redirect: Option<RedirectRule>,
}

/// `<WebsiteConfiguration>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BucketWebsiteConfiguration {
    pub index_document_suffix: Option<String>,
    pub error_document: Option<String>,
    pub redirect_all_requests_to: Option<RedirectRule>,
    pub routing_rules: Vec<RoutingRule>,
}

/// Replication target of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReplicationDestinationConfig {
    pub bucket_arn: Option<String>,
    pub storage_class: Option<String>,
}

/// One `<Rule>` of a replication configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReplicationRule {
    pub id: String,
    pub prefix: Option<String>,
    pub status: Option<String>,
    pub destination: Option<ReplicationDestinationConfig>,
}

/// `<ReplicationConfiguration>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BucketReplicationConfiguration {
    pub role_arn: Option<String>,
    /// Rules in document order; IDs are unique, a later rule replaces an
    /// earlier one with the same ID.
    pub rules: Vec<ReplicationRule>,
}

impl BucketReplicationConfiguration {
    /// Look up a rule by ID.
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&ReplicationRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Insert a rule, replacing any existing rule with the same ID in place.
    pub fn add_rule(&mut self, rule: ReplicationRule) {
        match self.rules.iter_mut().find(|r| r.id == rule.id) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }
}

/// A single key/value tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// One `<TagSet>`; keys are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TagSet {
    pub tags: Vec<Tag>,
}

impl TagSet {
    /// Value for the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }

    /// Set a tag, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: String, value: String) {
        match self.tags.iter_mut().find(|t| t.key == key) {
            Some(existing) => existing.value = value,
            None => self.tags.push(Tag { key, value }),
        }
    }
}

/// `<Tagging>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BucketTaggingConfiguration {
    pub tag_sets: Vec<TagSet>,
}

/// `<RequestPaymentConfiguration>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPaymentConfiguration {
    pub payer: Payer,
}
