//! Access control policy integration tests.

#[cfg(test)]
mod tests {
    use ruststack_s3_client_model::{Grantee, GroupGrantee, Permission};
    use ruststack_s3_client_xml::ResponseParseError;

    use crate::{fixture, parser};

    #[test]
    fn test_should_parse_every_grant_in_order() {
        let acl = parser()
            .parse_access_control_list_response(fixture("acl.xml").as_slice())
            .expect("acl");

        let grants: Vec<_> = acl
            .grants
            .iter()
            .map(|g| (g.grantee.type_identifier(), g.permission))
            .collect();
        assert_eq!(
            grants,
            vec![
                ("CanonicalUser", Some(Permission::FullControl)),
                ("Group", Some(Permission::Read)),
                ("Group", Some(Permission::Write)),
                ("AmazonCustomerByEmail", Some(Permission::ReadAcp)),
            ]
        );
        assert_eq!(acl.grants[2].grantee, Grantee::Group(GroupGrantee::LogDelivery));
        assert_eq!(acl.grants[3].grantee.identifier(), Some("xyz@amazon.com"));
    }

    #[test]
    fn test_should_name_handler_when_grantee_is_unresolvable() {
        let body = br#"<AccessControlPolicy><AccessControlList><Grant>
            <Grantee xsi:type="Group">
                <URI>http://acs.amazonaws.com/groups/global/Nobody</URI>
            </Grantee>
            <Permission>READ</Permission>
        </Grant></AccessControlList></AccessControlPolicy>"#;
        let err = parser()
            .parse_access_control_list_response(&body[..])
            .expect_err("unknown group");
        assert!(matches!(
            err,
            ResponseParseError::Parse { handler: "AccessControlListHandler", .. }
        ));
    }
}
