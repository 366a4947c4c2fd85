//! Listing response integration tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::{fixture, parser, raw_parser};

    #[test]
    fn test_should_parse_truncated_object_listing() {
        let listing = parser()
            .parse_list_bucket_objects_response(fixture("list_objects.xml").as_slice())
            .expect("list objects");

        assert_eq!(listing.bucket_name.as_deref(), Some("example-bucket"));
        assert_eq!(listing.prefix.as_deref(), Some("photos/"));
        assert_eq!(listing.marker, None);
        assert_eq!(listing.delimiter.as_deref(), Some("/"));
        assert_eq!(listing.max_keys, 2);
        assert!(listing.truncated);
        assert_eq!(listing.common_prefixes, vec!["photos/2025/".to_owned()]);

        assert_eq!(listing.object_summaries.len(), 2);
        let first = &listing.object_summaries[0];
        assert_eq!(first.bucket_name.as_deref(), Some("example-bucket"));
        assert_eq!(first.e_tag.as_deref(), Some("828ef3fdfa96f00ad9f27c383fc9ac7f"));
        assert_eq!(first.size, 142_863);
        assert_eq!(
            first.last_modified,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        let owner = first.owner.as_ref().expect("owner");
        assert_eq!(owner.display_name.as_deref(), Some("webfile"));
        assert!(listing.object_summaries[1].owner.is_none());

        // No NextMarker in the body: the last key becomes the next marker.
        assert_eq!(listing.next_marker.as_deref(), Some("photos/2024/img2.jpg"));
    }

    #[test]
    fn test_should_produce_same_listing_with_and_without_sanitization() {
        let body = fixture("list_objects.xml");
        let sanitized = parser()
            .parse_list_bucket_objects_response(body.as_slice())
            .expect("sanitized");
        let raw = raw_parser()
            .parse_list_bucket_objects_response(body.as_slice())
            .expect("raw");
        assert_eq!(sanitized, raw);
    }

    #[test]
    fn test_should_parse_versions_and_delete_markers_in_order() {
        let listing = parser()
            .parse_list_versions_response(fixture("list_versions.xml").as_slice())
            .expect("list versions");

        assert_eq!(listing.bucket_name.as_deref(), Some("bucket"));
        assert_eq!(listing.key_marker, None);
        assert_eq!(listing.version_id_marker, None);
        assert_eq!(listing.max_keys, 5);
        assert!(!listing.truncated);

        let kinds: Vec<(bool, bool)> = listing
            .version_summaries
            .iter()
            .map(|v| (v.is_delete_marker, v.is_latest))
            .collect();
        assert_eq!(kinds, vec![(false, true), (true, true), (false, false)]);

        let marker = &listing.version_summaries[1];
        assert_eq!(marker.key.as_deref(), Some("my-second-image.jpg"));
        assert_eq!(marker.e_tag, None);
        assert_eq!(marker.size, 0);
        assert!(marker.owner.is_some());
        assert!(
            listing
                .version_summaries
                .iter()
                .all(|v| v.bucket_name.as_deref() == Some("bucket"))
        );
    }

    #[test]
    fn test_should_share_owner_across_listed_buckets() {
        let listing = parser()
            .parse_list_my_buckets_response(fixture("list_buckets.xml").as_slice())
            .expect("list buckets");

        let names: Vec<_> = listing.buckets.iter().filter_map(|b| b.name.as_deref()).collect();
        assert_eq!(names, vec!["quotes", "samples"]);
        for bucket in &listing.buckets {
            assert_eq!(bucket.owner, listing.owner);
        }
        assert_eq!(
            listing.buckets[1].creation_date,
            Some(Utc.with_ymd_and_hms(2006, 2, 3, 16, 41, 58).unwrap())
        );
    }
}
