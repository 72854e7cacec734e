use nimbus_core::{paginated, shape};

use crate::types::{Filter, SecurityGroup};

shape! {
    pub struct DescribeSecurityGroupsRequest => DescribeSecurityGroupsRequestBuilder {
        list filters, set_filters, extend_filters: Filter => "Filters";
        list group_ids, set_group_ids, extend_group_ids: String => "GroupIds";
        /// Default VPC and classic only; use a `group-name` filter elsewhere.
        list group_names, set_group_names, extend_group_names: String => "GroupNames";
        copy dry_run, set_dry_run: bool => "DryRun";
        string next_token, set_next_token: String => "NextToken";
        copy max_results, set_max_results: i32 => "MaxResults";
    }
}

shape! {
    pub struct DescribeSecurityGroupsResult => DescribeSecurityGroupsResultBuilder {
        list security_groups, set_security_groups, extend_security_groups: SecurityGroup => "SecurityGroups";
        string next_token, set_next_token: String => "NextToken";
    }
}

paginated! {
    DescribeSecurityGroupsRequest => DescribeSecurityGroupsResult { items: security_groups: SecurityGroup }
}

#[cfg(test)]
mod tests {
    use nimbus_core::{PaginatedRequest, PaginatedResponse};

    use super::*;

    #[test]
    fn continuation_keeps_names_and_ids() {
        let first = DescribeSecurityGroupsRequest::builder()
            .group_names("default")
            .extend_group_ids(["sg-1", "sg-2"])
            .build();
        let next = first.with_next_token(Some("page-2".into())).with_page_size(5);

        assert_eq!(next.group_names().unwrap(), ["default"]);
        assert_eq!(next.group_ids().unwrap(), ["sg-1", "sg-2"]);
        assert_eq!(next.next_token(), Some("page-2"));
        assert_eq!(next.max_results(), Some(5));
        assert_eq!(next.with_next_token(None).next_token(), None);
    }

    #[test]
    fn page_items_are_the_security_groups() {
        let page = DescribeSecurityGroupsResult::builder()
            .security_groups(SecurityGroup::builder().group_id("sg-1"))
            .next_token("t")
            .build();

        assert_eq!(PaginatedResponse::next_token(&page), Some("t"));
        assert_eq!(page.items().len(), 1);
        assert_eq!(page.items()[0].group_id(), Some("sg-1"));
        assert!(DescribeSecurityGroupsResult::default().items().is_empty());
    }
}
