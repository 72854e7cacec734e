use nimbus_core::{paginated, shape};

use crate::types::{Filter, SpotInstanceRequest};

shape! {
    pub struct DescribeSpotInstanceRequestsRequest => DescribeSpotInstanceRequestsRequestBuilder {
        list filters, set_filters, extend_filters: Filter => "Filters";
        copy dry_run, set_dry_run: bool => "DryRun";
        list spot_instance_request_ids, set_spot_instance_request_ids, extend_spot_instance_request_ids: String => "SpotInstanceRequestIds";
        string next_token, set_next_token: String => "NextToken";
        copy max_results, set_max_results: i32 => "MaxResults";
    }
}

shape! {
    pub struct DescribeSpotInstanceRequestsResult => DescribeSpotInstanceRequestsResultBuilder {
        list spot_instance_requests, set_spot_instance_requests, extend_spot_instance_requests: SpotInstanceRequest => "SpotInstanceRequests";
        string next_token, set_next_token: String => "NextToken";
    }
}

paginated! {
    DescribeSpotInstanceRequestsRequest => DescribeSpotInstanceRequestsResult {
        items: spot_instance_requests: SpotInstanceRequest
    }
}
