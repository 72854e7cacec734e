use nimbus_core::{idempotent, shape};

use crate::enums::{FlowLogsResourceType, LogDestinationType, TrafficType};
use crate::types::{TagSpecification, UnsuccessfulItem};

shape! {
    /// Starts capturing IP traffic for VPCs, subnets or network interfaces.
    pub struct CreateFlowLogsRequest => CreateFlowLogsRequestBuilder {
        copy dry_run, set_dry_run: bool => "DryRun";
        string client_token, set_client_token: String => "ClientToken";
        string deliver_logs_permission_arn, set_deliver_logs_permission_arn: String => "DeliverLogsPermissionArn";
        string log_group_name, set_log_group_name: String => "LogGroupName";
        list resource_ids, set_resource_ids, extend_resource_ids: String => "ResourceIds";
        value resource_type, set_resource_type: FlowLogsResourceType => "ResourceType";
        value traffic_type, set_traffic_type: TrafficType => "TrafficType";
        value log_destination_type, set_log_destination_type: LogDestinationType => "LogDestinationType";
        string log_destination, set_log_destination: String => "LogDestination";
        string log_format, set_log_format: String => "LogFormat";
        list tag_specifications, set_tag_specifications, extend_tag_specifications: TagSpecification => "TagSpecifications";
        /// Seconds; 60 or 600.
        copy max_aggregation_interval, set_max_aggregation_interval: i32 => "MaxAggregationInterval";
    }
}

shape! {
    pub struct CreateFlowLogsResult => CreateFlowLogsResultBuilder {
        string client_token, set_client_token: String => "ClientToken";
        list flow_log_ids, set_flow_log_ids, extend_flow_log_ids: String => "FlowLogIds";
        list unsuccessful, set_unsuccessful, extend_unsuccessful: UnsuccessfulItem => "Unsuccessful";
    }
}

idempotent!(CreateFlowLogsRequestBuilder);
