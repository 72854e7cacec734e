use nimbus_core::{paginated, shape};

use crate::types::{Filter, Reservation};

shape! {
    /// Describes instances, optionally narrowed by ID or filters.
    ///
    /// `instance_ids` and `max_results` cannot be combined in one request.
    pub struct DescribeInstancesRequest => DescribeInstancesRequestBuilder {
        list filters, set_filters, extend_filters: Filter => "Filters";
        list instance_ids, set_instance_ids, extend_instance_ids: String => "InstanceIds";
        copy dry_run, set_dry_run: bool => "DryRun";
        /// 5 to 1000 per page.
        copy max_results, set_max_results: i32 => "MaxResults";
        string next_token, set_next_token: String => "NextToken";
    }
}

shape! {
    pub struct DescribeInstancesResult => DescribeInstancesResultBuilder {
        list reservations, set_reservations, extend_reservations: Reservation => "Reservations";
        string next_token, set_next_token: String => "NextToken";
    }
}

paginated! {
    DescribeInstancesRequest => DescribeInstancesResult { items: reservations: Reservation }
}

#[cfg(test)]
mod tests {
    use nimbus_core::PaginatedRequest;

    use super::*;

    #[test]
    fn filters_and_ids_accumulate_in_call_order() {
        let request = DescribeInstancesRequest::builder()
            .filters(Filter::new("instance-state-name", ["running"]))
            .instance_ids("i-1")
            .extend_instance_ids(["i-2", "i-3"])
            .build();

        assert_eq!(request.instance_ids().unwrap(), ["i-1", "i-2", "i-3"]);
        assert_eq!(
            request.to_string(),
            "{Filters: [{Name: instance-state-name,Values: [running]}],InstanceIds: [i-1, i-2, i-3]}"
        );
    }

    #[test]
    fn next_page_keeps_the_rest_of_the_request() {
        let first = DescribeInstancesRequest::builder().dry_run(false).build();
        let second = first.with_next_token(Some("abc".to_string())).with_page_size(50);

        assert_eq!(second.next_token(), Some("abc"));
        assert_eq!(second.max_results(), Some(50));
        assert_eq!(second.dry_run(), Some(false));
        assert_eq!(first.next_token(), None);
    }
}
