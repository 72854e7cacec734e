use nimbus_core::{paginated, shape};

use crate::enums::InstanceType;
use crate::types::{Filter, InstanceTypeInfo};

shape! {
    pub struct DescribeInstanceTypesRequest => DescribeInstanceTypesRequestBuilder {
        copy dry_run, set_dry_run: bool => "DryRun";
        list instance_types, set_instance_types, extend_instance_types: InstanceType => "InstanceTypes";
        list filters, set_filters, extend_filters: Filter => "Filters";
        copy max_results, set_max_results: i32 => "MaxResults";
        string next_token, set_next_token: String => "NextToken";
    }
}

shape! {
    pub struct DescribeInstanceTypesResult => DescribeInstanceTypesResultBuilder {
        list instance_types, set_instance_types, extend_instance_types: InstanceTypeInfo => "InstanceTypes";
        string next_token, set_next_token: String => "NextToken";
    }
}

paginated! {
    DescribeInstanceTypesRequest => DescribeInstanceTypesResult { items: instance_types: InstanceTypeInfo }
}
