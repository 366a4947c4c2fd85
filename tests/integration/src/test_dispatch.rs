//! Dynamic dispatch integration tests.

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use ruststack_s3_client_xml::{ParsedResponse, ResponseKind, ResponseParseError};

    use crate::{fixture, parser};

    const FIXTURES: &[(&str, &str)] = &[
        ("list-objects", "list_objects.xml"),
        ("list-versions", "list_versions.xml"),
        ("list-buckets", "list_buckets.xml"),
        ("acl", "acl.xml"),
        ("lifecycle", "lifecycle.xml"),
        ("cors", "cors.xml"),
        ("website", "website.xml"),
        ("replication", "replication.xml"),
        ("delete-objects", "delete_objects.xml"),
        ("copy-object", "copy_object_error.xml"),
        ("complete-multipart-upload", "copy_object_error.xml"),
        ("list-multipart-uploads", "list_multipart_uploads.xml"),
        ("list-parts", "list_parts.xml"),
    ];

    /// Yields the document, then fails as a dropped connection would.
    struct TruncatedStream {
        body: io::Cursor<Vec<u8>>,
    }

    impl Read for TruncatedStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.body.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "connection reset")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_should_dispatch_every_fixture_by_name() {
        let parser = parser();
        for (name, file) in FIXTURES {
            let kind: ResponseKind = name.parse().expect("known kind");
            let parsed = parser
                .parse_kind(kind, fixture(file).as_slice())
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(parsed.kind(), kind);

            let json = serde_json::to_value(&parsed).expect("serializable");
            assert_eq!(json["kind"], *name);
        }
    }

    #[test]
    fn test_should_be_deterministic_across_fresh_handlers() {
        let parser = parser();
        for (name, file) in FIXTURES {
            let kind: ResponseKind = name.parse().expect("known kind");
            let body = fixture(file);
            let first = parser.parse_kind(kind, body.as_slice()).expect("first parse");
            let second = parser.parse_kind(kind, body.as_slice()).expect("second parse");
            assert_eq!(first, second, "{name} differs between runs");
        }
    }

    #[test]
    fn test_should_count_one_summary_per_repeated_element() {
        let body = fixture("list_objects.xml");
        let expected = String::from_utf8_lossy(&body).matches("<Contents>").count();
        let parsed = parser()
            .parse_kind(ResponseKind::ListObjects, body.as_slice())
            .expect("listing");
        let ParsedResponse::ListObjects(listing) = parsed else {
            panic!("wrong variant: {parsed:?}");
        };
        assert_eq!(listing.object_summaries.len(), expected);
    }

    #[test]
    fn test_should_pass_transport_errors_through_dispatch() {
        let stream = TruncatedStream {
            body: io::Cursor::new(fixture("list_parts.xml")),
        };
        let err = parser()
            .parse_kind(ResponseKind::ListParts, stream)
            .expect_err("stream fails");
        assert!(matches!(
            err,
            ResponseParseError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof
        ));
    }

    #[test]
    fn test_should_ignore_unrelated_document_shape() {
        let parsed = parser()
            .parse_kind(ResponseKind::Acl, fixture("list_buckets.xml").as_slice())
            .expect("unknown elements are ignored");
        let ParsedResponse::Acl(acl) = parsed else {
            panic!("wrong variant: {parsed:?}");
        };
        assert!(acl.owner.is_none());
        assert!(acl.grants.is_empty());
    }
}
