use nimbus_core::{paginated, shape};

use crate::types::{Filter, RouteTable};

shape! {
    pub struct DescribeRouteTablesRequest => DescribeRouteTablesRequestBuilder {
        list filters, set_filters, extend_filters: Filter => "Filters";
        copy dry_run, set_dry_run: bool => "DryRun";
        list route_table_ids, set_route_table_ids, extend_route_table_ids: String => "RouteTableIds";
        string next_token, set_next_token: String => "NextToken";
        copy max_results, set_max_results: i32 => "MaxResults";
    }
}

shape! {
    pub struct DescribeRouteTablesResult => DescribeRouteTablesResultBuilder {
        list route_tables, set_route_tables, extend_route_tables: RouteTable => "RouteTables";
        string next_token, set_next_token: String => "NextToken";
    }
}

paginated! {
    DescribeRouteTablesRequest => DescribeRouteTablesResult { items: route_tables: RouteTable }
}
