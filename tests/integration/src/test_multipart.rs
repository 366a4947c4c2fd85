//! Multipart upload integration tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::{fixture, parser};

    #[test]
    fn test_should_parse_initiate_and_complete() {
        let body =
            br#"<InitiateMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Bucket>example-bucket</Bucket>
  <Key>example-object</Key>
  <UploadId>VXBsb2FkIElEIGZvciA2aWWpbmcncyBteS1tb3ZpZS5tMnRzIHVwbG9hZA</UploadId>
</InitiateMultipartUploadResult>"#;
        let initiated = parser()
            .parse_initiate_multipart_upload_response(&body[..])
            .expect("initiate");
        assert_eq!(
            initiated.upload_id.as_deref(),
            Some("VXBsb2FkIElEIGZvciA2aWWpbmcncyBteS1tb3ZpZS5tMnRzIHVwbG9hZA")
        );

        let body =
            br#"<CompleteMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Location>http://Example-Bucket.s3.amazonaws.com/Example-Object</Location>
  <Bucket>Example-Bucket</Bucket>
  <Key>Example-Object</Key>
  <ETag>"3858f62230ac3c915f300c664312c11f-9"</ETag>
</CompleteMultipartUploadResult>"#;
        let completed = parser()
            .parse_complete_multipart_upload_response(&body[..])
            .expect("complete");
        assert!(!completed.is_error_response());
        let result = completed.result.expect("result");
        assert_eq!(result.e_tag.as_deref(), Some("3858f62230ac3c915f300c664312c11f-9"));
        assert_eq!(result.bucket_name.as_deref(), Some("Example-Bucket"));
    }

    #[test]
    fn test_should_surface_error_document_from_complete() {
        let completed = parser()
            .parse_complete_multipart_upload_response(fixture("copy_object_error.xml").as_slice())
            .expect("error documents are not parse failures");
        assert!(completed.is_error_response());
        assert!(completed.result.is_none());
    }

    #[test]
    fn test_should_parse_multipart_upload_listing() {
        let listing = parser()
            .parse_list_multipart_uploads_response(fixture("list_multipart_uploads.xml").as_slice())
            .expect("list uploads");

        assert_eq!(listing.bucket_name.as_deref(), Some("bucket"));
        assert_eq!(listing.key_marker, None);
        assert_eq!(listing.next_key_marker.as_deref(), Some("my-movie.m2ts"));
        assert_eq!(listing.max_uploads, Some(3));
        assert!(listing.truncated);
        assert_eq!(listing.common_prefixes, vec!["photos/".to_owned()]);
        assert_eq!(listing.multipart_uploads.len(), 2);

        let first = &listing.multipart_uploads[0];
        let owner = first.owner.as_ref().expect("owner");
        assert_eq!(owner.display_name, None);
        let initiator = first.initiator.as_ref().expect("initiator");
        assert_eq!(
            initiator.display_name.as_deref(),
            Some("user1-11111a31-17b5-4fb7-9df5-b111111f13de")
        );

        let expected = Utc.with_ymd_and_hms(2010, 11, 10, 20, 48, 33).unwrap();
        assert_eq!(first.initiated, Some(expected));
        assert_eq!(listing.multipart_uploads[1].initiated, Some(expected));
        assert!(listing.multipart_uploads[1].owner.is_none());
    }

    #[test]
    fn test_should_parse_part_listing() {
        let listing = parser()
            .parse_list_parts_response(fixture("list_parts.xml").as_slice())
            .expect("list parts");

        assert_eq!(listing.key.as_deref(), Some("example-object"));
        assert_eq!(listing.part_number_marker, Some(1));
        assert_eq!(listing.next_part_number_marker, Some(3));
        assert_eq!(listing.max_parts, Some(2));
        assert!(listing.truncated);
        assert_eq!(
            listing.owner.as_ref().and_then(|o| o.display_name.as_deref()),
            Some("someName")
        );

        let numbers: Vec<_> = listing.parts.iter().map(|p| p.part_number).collect();
        assert_eq!(numbers, vec![Some(2), Some(3)]);
        assert_eq!(listing.parts[0].size, Some(10_485_760));
        assert_eq!(listing.parts[0].e_tag.as_deref(), Some("7778aef83f66abc1fa1e8477f296d394"));
    }
}
