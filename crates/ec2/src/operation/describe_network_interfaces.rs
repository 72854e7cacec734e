use nimbus_core::{paginated, shape};

use crate::types::{Filter, NetworkInterface};

shape! {
    pub struct DescribeNetworkInterfacesRequest => DescribeNetworkInterfacesRequestBuilder {
        list filters, set_filters, extend_filters: Filter => "Filters";
        copy dry_run, set_dry_run: bool => "DryRun";
        list network_interface_ids, set_network_interface_ids, extend_network_interface_ids: String => "NetworkInterfaceIds";
        string next_token, set_next_token: String => "NextToken";
        copy max_results, set_max_results: i32 => "MaxResults";
    }
}

shape! {
    pub struct DescribeNetworkInterfacesResult => DescribeNetworkInterfacesResultBuilder {
        list network_interfaces, set_network_interfaces, extend_network_interfaces: NetworkInterface => "NetworkInterfaces";
        string next_token, set_next_token: String => "NextToken";
    }
}

paginated! {
    DescribeNetworkInterfacesRequest => DescribeNetworkInterfacesResult {
        items: network_interfaces: NetworkInterface
    }
}
