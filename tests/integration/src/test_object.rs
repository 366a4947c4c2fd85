//! Object operation integration tests.

#[cfg(test)]
mod tests {
    use crate::{fixture, parser};

    #[test]
    fn test_should_report_deleted_keys_and_failures() {
        let result = parser()
            .parse_delete_objects_response(fixture("delete_objects.xml").as_slice())
            .expect("delete objects");

        assert_eq!(result.deleted.len(), 2);
        assert!(!result.deleted[0].delete_marker);
        assert_eq!(result.deleted[0].version_id, None);

        let marker = &result.deleted[1];
        assert!(marker.delete_marker);
        assert_eq!(
            marker.delete_marker_version_id.as_deref(),
            Some("NeQt5xeFTfgPJD8B4CGWnkSLtluMr11s")
        );

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].key.as_deref(), Some("sample3.txt"));
        assert_eq!(result.errors[0].code.as_deref(), Some("AccessDenied"));
    }

    #[test]
    fn test_should_surface_error_document_from_copy() {
        let response = parser()
            .parse_copy_object_response(fixture("copy_object_error.xml").as_slice())
            .expect("error documents are not parse failures");

        assert!(response.is_error_response());
        assert!(response.result.is_none());
        let error = response.error.expect("error details");
        assert_eq!(error.code.as_deref(), Some("InternalError"));
        assert_eq!(error.request_id.as_deref(), Some("656c76696e6727732072657175657374"));
        assert_eq!(
            error.host_id.as_deref(),
            Some("Uuag1LuByRx9e6j5Onimru9pO4ZVKnJ2Qz7/C1NPcfTWAtRPfTaOFg==")
        );
    }

    #[test]
    fn test_should_parse_copy_part_result() {
        let body = b"<CopyPartResult><LastModified>2011-04-11T20:34:56.000Z</LastModified>\
            <ETag>\"9b2cf535f27731c974343645a3985328\"</ETag></CopyPartResult>";
        let response = parser()
            .parse_copy_object_response(&body[..])
            .expect("copy part");
        assert!(!response.is_error_response());
        let result = response.result.expect("result");
        assert_eq!(result.e_tag.as_deref(), Some("9b2cf535f27731c974343645a3985328"));
        assert!(result.last_modified.is_some());
    }
}
