//! Top-level entry points.
//!
//! [`XmlResponsesParser`] pairs a response body with a fresh handler, runs the
//! carriage-return sanitization for the listing documents, pumps the document
//! through the handler and returns the finished result. Each call is independent; the
//! parser itself only holds immutable configuration.

use std::io::{BufReader, Read};
use std::str::FromStr;

use ruststack_s3_client_model::{
    AccessControlList, BucketCrossOriginConfiguration, BucketLifecycleConfiguration,
    BucketListing, BucketLoggingConfiguration, BucketReplicationConfiguration,
    BucketTaggingConfiguration, BucketVersioningConfiguration, BucketWebsiteConfiguration,
    CompleteMultipartUploadResponse, CopyObjectResponse, DeleteObjectsResult,
    InitiateMultipartUploadResult, MultipartUploadListing, ObjectListing, PartListing,
    RequestPaymentConfiguration, VersionListing,
};
use serde::Serialize;

use crate::config::ParserConfig;
use crate::error::ResponseParseError;
use crate::handler::{ResponseHandler, drive};
use crate::handlers::{
    AccessControlListHandler, BucketCrossOriginConfigurationHandler,
    BucketLifecycleConfigurationHandler, BucketLocationHandler, BucketLoggingConfigurationHandler,
    BucketReplicationConfigurationHandler, BucketTaggingConfigurationHandler,
    BucketVersioningConfigurationHandler, BucketWebsiteConfigurationHandler,
    CompleteMultipartUploadHandler, CopyObjectResultHandler, DeleteObjectsHandler,
    InitiateMultipartUploadHandler, ListAllMyBucketsHandler, ListBucketHandler,
    ListMultipartUploadsHandler, ListPartsHandler, ListVersionsHandler,
    RequestPaymentConfigurationHandler,
};
use crate::sanitize::sanitize_xml_document;

/// Parses S3 XML response bodies into typed results.
///
/// # Examples
///
/// ```
/// use ruststack_s3_client_xml::XmlResponsesParser;
///
/// let parser = XmlResponsesParser::default();
/// let body = &b"<LocationConstraint>eu-west-1</LocationConstraint>"[..];
/// let location = parser.parse_bucket_location_response(body).expect("valid document");
/// assert_eq!(location.as_deref(), Some("eu-west-1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct XmlResponsesParser {
    config: ParserConfig,
}

impl XmlResponsesParser {
    /// Create a parser with the given configuration.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Create a parser configured from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ParserConfig::from_env())
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `input` with a caller-supplied handler.
    ///
    /// The document is sanitized only when both the configuration and
    /// [`ResponseHandler::SANITIZE`] ask for it. The input is consumed and
    /// dropped before this returns, whether or not parsing succeeded.
    ///
    /// # Errors
    ///
    /// [`ResponseParseError::Io`] when reading `input` fails,
    /// [`ResponseParseError::Sanitize`] when the document cannot be sanitized,
    /// and [`ResponseParseError::Parse`] when it is malformed or rejected by
    /// the handler.
    pub fn parse_with<H, R>(
        &self,
        mut handler: H,
        input: R,
    ) -> Result<H::Output, ResponseParseError>
    where
        H: ResponseHandler,
        R: Read,
    {
        let sanitize = H::SANITIZE && self.config.sanitize_xml_documents;
        tracing::debug!(handler = H::NAME, sanitize, "parsing XML response document");

        let pumped = if sanitize {
            let document = sanitize_xml_document(input)
                .map_err(|e| ResponseParseError::sanitize(H::NAME, e))?;
            drive(&mut handler, document.as_bytes())
        } else {
            drive(&mut handler, BufReader::new(input))
        };

        pumped
            .and_then(|()| handler.finish())
            .map_err(|e| ResponseParseError::parse(H::NAME, e))
    }

    /// Parse the response of a dynamically chosen operation.
    ///
    /// # Errors
    ///
    /// Same as [`XmlResponsesParser::parse_with`].
    pub fn parse_kind<R: Read>(
        &self,
        kind: ResponseKind,
        input: R,
    ) -> Result<ParsedResponse, ResponseParseError> {
        use ParsedResponse as P;

        match kind {
            ResponseKind::ListObjects => self
                .parse_list_bucket_objects_response(input)
                .map(P::ListObjects),
            ResponseKind::ListVersions => self
                .parse_list_versions_response(input)
                .map(P::ListVersions),
            ResponseKind::ListBuckets => self
                .parse_list_my_buckets_response(input)
                .map(P::ListBuckets),
            ResponseKind::Acl => self.parse_access_control_list_response(input).map(P::Acl),
            ResponseKind::Logging => self.parse_logging_status_response(input).map(P::Logging),
            ResponseKind::Location => self.parse_bucket_location_response(input).map(P::Location),
            ResponseKind::Lifecycle => self
                .parse_bucket_lifecycle_configuration_response(input)
                .map(P::Lifecycle),
            ResponseKind::Cors => self
                .parse_bucket_cross_origin_configuration_response(input)
                .map(P::Cors),
            ResponseKind::Versioning => self
                .parse_versioning_configuration_response(input)
                .map(P::Versioning),
            ResponseKind::Website => self
                .parse_website_configuration_response(input)
                .map(P::Website),
            ResponseKind::Replication => self
                .parse_replication_configuration_response(input)
                .map(P::Replication),
            ResponseKind::Tagging => self
                .parse_tagging_configuration_response(input)
                .map(P::Tagging),
            ResponseKind::DeleteObjects => self
                .parse_delete_objects_response(input)
                .map(P::DeleteObjects),
            ResponseKind::CopyObject => self.parse_copy_object_response(input).map(P::CopyObject),
            ResponseKind::InitiateMultipartUpload => self
                .parse_initiate_multipart_upload_response(input)
                .map(P::InitiateMultipartUpload),
            ResponseKind::CompleteMultipartUpload => self
                .parse_complete_multipart_upload_response(input)
                .map(P::CompleteMultipartUpload),
            ResponseKind::ListMultipartUploads => self
                .parse_list_multipart_uploads_response(input)
                .map(P::ListMultipartUploads),
            ResponseKind::ListParts => self.parse_list_parts_response(input).map(P::ListParts),
            ResponseKind::RequestPayment => self
                .parse_request_payment_configuration_response(input)
                .map(P::RequestPayment),
        }
    }

    /// Parse a ListObjects response.
    pub fn parse_list_bucket_objects_response<R: Read>(
        &self,
        input: R,
    ) -> Result<ObjectListing, ResponseParseError> {
        self.parse_with(ListBucketHandler::default(), input)
    }

    /// Parse a ListObjectVersions response.
    pub fn parse_list_versions_response<R: Read>(
        &self,
        input: R,
    ) -> Result<VersionListing, ResponseParseError> {
        self.parse_with(ListVersionsHandler::default(), input)
    }

    /// Parse a ListBuckets response.
    pub fn parse_list_my_buckets_response<R: Read>(
        &self,
        input: R,
    ) -> Result<BucketListing, ResponseParseError> {
        self.parse_with(ListAllMyBucketsHandler::default(), input)
    }

    /// Parse a GetBucketAcl or GetObjectAcl response.
    pub fn parse_access_control_list_response<R: Read>(
        &self,
        input: R,
    ) -> Result<AccessControlList, ResponseParseError> {
        self.parse_with(AccessControlListHandler::default(), input)
    }

    /// Parse a GetBucketLogging response.
    pub fn parse_logging_status_response<R: Read>(
        &self,
        input: R,
    ) -> Result<BucketLoggingConfiguration, ResponseParseError> {
        self.parse_with(BucketLoggingConfigurationHandler::default(), input)
    }

    /// Parse a GetBucketLocation response; `None` means US Standard.
    pub fn parse_bucket_location_response<R: Read>(
        &self,
        input: R,
    ) -> Result<Option<String>, ResponseParseError> {
        self.parse_with(BucketLocationHandler::default(), input)
    }

    /// Parse a GetBucketLifecycle response.
    pub fn parse_bucket_lifecycle_configuration_response<R: Read>(
        &self,
        input: R,
    ) -> Result<BucketLifecycleConfiguration, ResponseParseError> {
        self.parse_with(BucketLifecycleConfigurationHandler::default(), input)
    }

    /// Parse a GetBucketCors response.
    pub fn parse_bucket_cross_origin_configuration_response<R: Read>(
        &self,
        input: R,
    ) -> Result<BucketCrossOriginConfiguration, ResponseParseError> {
        self.parse_with(BucketCrossOriginConfigurationHandler::default(), input)
    }

    /// Parse a GetBucketVersioning response.
    pub fn parse_versioning_configuration_response<R: Read>(
        &self,
        input: R,
    ) -> Result<BucketVersioningConfiguration, ResponseParseError> {
        self.parse_with(BucketVersioningConfigurationHandler::default(), input)
    }

    /// Parse a GetBucketWebsite response.
    pub fn parse_website_configuration_response<R: Read>(
        &self,
        input: R,
    ) -> Result<BucketWebsiteConfiguration, ResponseParseError> {
        self.parse_with(BucketWebsiteConfigurationHandler::default(), input)
    }

    /// Parse a GetBucketReplication response.
    pub fn parse_replication_configuration_response<R: Read>(
        &self,
        input: R,
    ) -> Result<BucketReplicationConfiguration, ResponseParseError> {
        self.parse_with(BucketReplicationConfigurationHandler::default(), input)
    }

    /// Parse a GetBucketTagging response.
    pub fn parse_tagging_configuration_response<R: Read>(
        &self,
        input: R,
    ) -> Result<BucketTaggingConfiguration, ResponseParseError> {
        self.parse_with(BucketTaggingConfigurationHandler::default(), input)
    }

    /// Parse a DeleteObjects response.
    pub fn parse_delete_objects_response<R: Read>(
        &self,
        input: R,
    ) -> Result<DeleteObjectsResult, ResponseParseError> {
        self.parse_with(DeleteObjectsHandler::default(), input)
    }

    /// Parse a CopyObject or UploadPartCopy response.
    pub fn parse_copy_object_response<R: Read>(
        &self,
        input: R,
    ) -> Result<CopyObjectResponse, ResponseParseError> {
        self.parse_with(CopyObjectResultHandler::default(), input)
    }

    /// Parse a CreateMultipartUpload response.
    pub fn parse_initiate_multipart_upload_response<R: Read>(
        &self,
        input: R,
    ) -> Result<InitiateMultipartUploadResult, ResponseParseError> {
        self.parse_with(InitiateMultipartUploadHandler::default(), input)
    }

    /// Parse a CompleteMultipartUpload response.
    pub fn parse_complete_multipart_upload_response<R: Read>(
        &self,
        input: R,
    ) -> Result<CompleteMultipartUploadResponse, ResponseParseError> {
        self.parse_with(CompleteMultipartUploadHandler::default(), input)
    }

    /// Parse a ListMultipartUploads response.
    pub fn parse_list_multipart_uploads_response<R: Read>(
        &self,
        input: R,
    ) -> Result<MultipartUploadListing, ResponseParseError> {
        self.parse_with(ListMultipartUploadsHandler::default(), input)
    }

    /// Parse a ListParts response.
    pub fn parse_list_parts_response<R: Read>(
        &self,
        input: R,
    ) -> Result<PartListing, ResponseParseError> {
        self.parse_with(ListPartsHandler::default(), input)
    }

    /// Parse a GetBucketRequestPayment response.
    pub fn parse_request_payment_configuration_response<R: Read>(
        &self,
        input: R,
    ) -> Result<RequestPaymentConfiguration, ResponseParseError> {
        self.parse_with(RequestPaymentConfigurationHandler::default(), input)
    }
}

/// The response shapes [`XmlResponsesParser::parse_kind`] understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// ListObjects (`<ListBucketResult>`).
    ListObjects,
    /// ListObjectVersions (`<ListVersionsResult>`).
    ListVersions,
    /// ListBuckets (`<ListAllMyBucketsResult>`).
    ListBuckets,
    /// GetBucketAcl / GetObjectAcl (`<AccessControlPolicy>`).
    Acl,
    /// GetBucketLogging (`<BucketLoggingStatus>`).
    Logging,
    /// GetBucketLocation (`<LocationConstraint>`).
    Location,
    /// GetBucketLifecycle (`<LifecycleConfiguration>`).
    Lifecycle,
    /// GetBucketCors (`<CORSConfiguration>`).
    Cors,
    /// GetBucketVersioning (`<VersioningConfiguration>`).
    Versioning,
    /// GetBucketWebsite (`<WebsiteConfiguration>`).
    Website,
    /// GetBucketReplication (`<ReplicationConfiguration>`).
    Replication,
    /// GetBucketTagging (`<Tagging>`).
    Tagging,
    /// DeleteObjects (`<DeleteResult>`).
    DeleteObjects,
    /// CopyObject / UploadPartCopy (`<CopyObjectResult>`, `<CopyPartResult>` or `<Error>`).
    CopyObject,
    /// CreateMultipartUpload (`<InitiateMultipartUploadResult>`).
    InitiateMultipartUpload,
    /// CompleteMultipartUpload (`<CompleteMultipartUploadResult>` or `<Error>`).
    CompleteMultipartUpload,
    /// ListMultipartUploads (`<ListMultipartUploadsResult>`).
    ListMultipartUploads,
    /// ListParts (`<ListPartsResult>`).
    ListParts,
    /// GetBucketRequestPayment (`<RequestPaymentConfiguration>`).
    RequestPayment,
}

impl ResponseKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::ListObjects,
        Self::ListVersions,
        Self::ListBuckets,
        Self::Acl,
        Self::Logging,
        Self::Location,
        Self::Lifecycle,
        Self::Cors,
        Self::Versioning,
        Self::Website,
        Self::Replication,
        Self::Tagging,
        Self::DeleteObjects,
        Self::CopyObject,
        Self::InitiateMultipartUpload,
        Self::CompleteMultipartUpload,
        Self::ListMultipartUploads,
        Self::ListParts,
        Self::RequestPayment,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListObjects => "list-objects",
            Self::ListVersions => "list-versions",
            Self::ListBuckets => "list-buckets",
            Self::Acl => "acl",
            Self::Logging => "logging",
            Self::Location => "location",
            Self::Lifecycle => "lifecycle",
            Self::Cors => "cors",
            Self::Versioning => "versioning",
            Self::Website => "website",
            Self::Replication => "replication",
            Self::Tagging => "tagging",
            Self::DeleteObjects => "delete-objects",
            Self::CopyObject => "copy-object",
            Self::InitiateMultipartUpload => "initiate-multipart-upload",
            Self::CompleteMultipartUpload => "complete-multipart-upload",
            Self::ListMultipartUploads => "list-multipart-uploads",
            Self::ListParts => "list-parts",
            Self::RequestPayment => "request-payment",
        }
    }
}

impl std::fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name that matches no [`ResponseKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown response kind: {0}")]
pub struct UnknownResponseKind(pub String);

impl FromStr for ResponseKind {
    type Err = UnknownResponseKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownResponseKind(s.to_owned()))
    }
}

/// The result of [`XmlResponsesParser::parse_kind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "kebab-case")]
pub enum ParsedResponse {
    /// Result of [`ResponseKind::ListObjects`].
    ListObjects(ObjectListing),
    /// Result of [`ResponseKind::ListVersions`].
    ListVersions(VersionListing),
    /// Result of [`ResponseKind::ListBuckets`].
    ListBuckets(BucketListing),
    /// Result of [`ResponseKind::Acl`].
    Acl(AccessControlList),
    /// Result of [`ResponseKind::Logging`].
    Logging(BucketLoggingConfiguration),
    /// Result of [`ResponseKind::Location`].
    Location(Option<String>),
    /// Result of [`ResponseKind::Lifecycle`].
    Lifecycle(BucketLifecycleConfiguration),
    /// Result of [`ResponseKind::Cors`].
    Cors(BucketCrossOriginConfiguration),
    /// Result of [`ResponseKind::Versioning`].
    Versioning(BucketVersioningConfiguration),
    /// Result of [`ResponseKind::Website`].
    Website(BucketWebsiteConfiguration),
    /// Result of [`ResponseKind::Replication`].
    Replication(BucketReplicationConfiguration),
    /// Result of [`ResponseKind::Tagging`].
    Tagging(BucketTaggingConfiguration),
    /// Result of [`ResponseKind::DeleteObjects`].
    DeleteObjects(DeleteObjectsResult),
    /// Result of [`ResponseKind::CopyObject`].
    CopyObject(CopyObjectResponse),
    /// Result of [`ResponseKind::InitiateMultipartUpload`].
    InitiateMultipartUpload(InitiateMultipartUploadResult),
    /// Result of [`ResponseKind::CompleteMultipartUpload`].
    CompleteMultipartUpload(CompleteMultipartUploadResponse),
    /// Result of [`ResponseKind::ListMultipartUploads`].
    ListMultipartUploads(MultipartUploadListing),
    /// Result of [`ResponseKind::ListParts`].
    ListParts(PartListing),
    /// Result of [`ResponseKind::RequestPayment`].
    RequestPayment(RequestPaymentConfiguration),
}

impl ParsedResponse {
    /// The kind of response this result came from.
    #[must_use]
    pub fn kind(&self) -> ResponseKind {
        match self {
            Self::ListObjects(_) => ResponseKind::ListObjects,
            Self::ListVersions(_) => ResponseKind::ListVersions,
            Self::ListBuckets(_) => ResponseKind::ListBuckets,
            Self::Acl(_) => ResponseKind::Acl,
            Self::Logging(_) => ResponseKind::Logging,
            Self::Location(_) => ResponseKind::Location,
            Self::Lifecycle(_) => ResponseKind::Lifecycle,
            Self::Cors(_) => ResponseKind::Cors,
            Self::Versioning(_) => ResponseKind::Versioning,
            Self::Website(_) => ResponseKind::Website,
            Self::Replication(_) => ResponseKind::Replication,
            Self::Tagging(_) => ResponseKind::Tagging,
            Self::DeleteObjects(_) => ResponseKind::DeleteObjects,
            Self::CopyObject(_) => ResponseKind::CopyObject,
            Self::InitiateMultipartUpload(_) => ResponseKind::InitiateMultipartUpload,
            Self::CompleteMultipartUpload(_) => ResponseKind::CompleteMultipartUpload,
            Self::ListMultipartUploads(_) => ResponseKind::ListMultipartUploads,
            Self::ListParts(_) => ResponseKind::ListParts,
            Self::RequestPayment(_) => ResponseKind::RequestPayment,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::error::XmlError;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionAborted, "connection aborted"))
        }
    }

    fn unsanitized() -> XmlResponsesParser {
        XmlResponsesParser::new(ParserConfig::builder().sanitize_xml_documents(false).build())
    }

    #[test]
    fn test_should_preserve_carriage_returns_when_sanitizing() {
        let xml =
            b"<ListBucketResult><Contents><Key>line1\rline2</Key></Contents></ListBucketResult>";
        let listing = XmlResponsesParser::default()
            .parse_list_bucket_objects_response(&xml[..])
            .expect("sanitized listing");
        assert_eq!(
            listing.object_summaries[0].key.as_deref(),
            Some("line1\rline2")
        );
    }

    #[test]
    fn test_should_parse_crlf_wrapped_grantee_tag_with_default_parser() {
        let xml = b"<AccessControlPolicy><AccessControlList><Grant>\
<Grantee xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\r\n xsi:type=\"Group\">\
<URI>http://acs.amazonaws.com/groups/global/AllUsers</URI></Grantee>\
<Permission>READ</Permission></Grant></AccessControlList></AccessControlPolicy>";
        let acl = XmlResponsesParser::default()
            .parse_access_control_list_response(&xml[..])
            .expect("markup carriage returns left alone");
        assert_eq!(acl.grants.len(), 1);
    }

    #[test]
    fn test_should_only_sanitize_listing_documents() {
        assert!(ListBucketHandler::SANITIZE);
        assert!(ListVersionsHandler::SANITIZE);
        assert!(ListAllMyBucketsHandler::SANITIZE);
        assert!(!AccessControlListHandler::SANITIZE);
        assert!(!BucketTaggingConfigurationHandler::SANITIZE);

        let xml =
            b"<Tagging><TagSet><Tag><Key>k</Key><Value>v\r\n</Value></Tag></TagSet></Tagging>";
        let tagging = XmlResponsesParser::default()
            .parse_tagging_configuration_response(&xml[..])
            .expect("tagging");
        assert_eq!(tagging.tag_sets[0].get("k"), Some("v\r\n"));
    }

    #[test]
    fn test_should_parse_without_sanitization() {
        let xml = b"<ListBucketResult><Name>b</Name></ListBucketResult>";
        let listing = unsanitized()
            .parse_list_bucket_objects_response(&xml[..])
            .expect("listing");
        assert_eq!(listing.bucket_name.as_deref(), Some("b"));
    }

    #[test]
    fn test_should_propagate_io_errors_unchanged() {
        for parser in [XmlResponsesParser::default(), unsanitized()] {
            let err = parser
                .parse_list_bucket_objects_response(FailingReader)
                .expect_err("reader fails");
            assert!(
                matches!(
                    err,
                    ResponseParseError::Io(ref e) if e.kind() == io::ErrorKind::ConnectionAborted
                ),
                "unexpected error: {err:?}"
            );
        }
    }

    #[test]
    fn test_should_report_sanitize_failures_with_handler_name() {
        let err = XmlResponsesParser::default()
            .parse_list_bucket_objects_response(&[0xff, 0xfe][..])
            .expect_err("not utf-8");
        match err {
            ResponseParseError::Sanitize { handler, source } => {
                assert_eq!(handler, "ListBucketHandler");
                assert!(matches!(source, XmlError::Encoding(_)));
            }
            other => panic!("expected sanitize error, got {other:?}"),
        }
    }

    #[test]
    fn test_should_wrap_handler_failures_as_parse_errors() {
        let xml = b"<ListBucketResult><IsTruncated>perhaps</IsTruncated></ListBucketResult>";
        let err = XmlResponsesParser::default()
            .parse_list_bucket_objects_response(&xml[..])
            .expect_err("bad flag");
        assert!(matches!(
            err,
            ResponseParseError::Parse { handler: "ListBucketHandler", .. }
        ));
    }

    #[test]
    fn test_should_wrap_malformed_documents_as_parse_errors() {
        let err = XmlResponsesParser::default()
            .parse_bucket_location_response(&b"<LocationConstraint>EU"[..])
            .expect_err("truncated");
        assert_eq!(err.handler(), Some("BucketLocationHandler"));

        let err = unsanitized()
            .parse_bucket_location_response(&b""[..])
            .expect_err("empty");
        assert!(matches!(err, ResponseParseError::Parse { .. }));
    }

    #[test]
    fn test_should_round_trip_response_kind_names() {
        for kind in ResponseKind::ALL {
            assert_eq!(kind.as_str().parse::<ResponseKind>(), Ok(kind));
        }
        assert_eq!(
            "list-everything".parse::<ResponseKind>(),
            Err(UnknownResponseKind("list-everything".to_owned()))
        );
    }

    #[test]
    fn test_should_dispatch_by_kind() {
        let parser = XmlResponsesParser::default();
        let xml = b"<RequestPaymentConfiguration><Payer>BucketOwner</Payer>\
</RequestPaymentConfiguration>";
        let parsed = parser
            .parse_kind(ResponseKind::RequestPayment, &xml[..])
            .expect("payment");
        assert_eq!(parsed.kind(), ResponseKind::RequestPayment);

        let json = serde_json::to_value(&parsed).expect("serializable");
        assert_eq!(json["kind"], "request-payment");
        assert_eq!(json["result"]["payer"], "BucketOwner");
    }

    #[test]
    fn test_should_be_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<XmlResponsesParser>();
    }
}
