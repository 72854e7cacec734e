use chrono::{DateTime, Utc};
use nimbus_core::shape;

use super::{GroupIdentifier, IamInstanceProfileSpecification, Placement, Tag};
use crate::enums::{
    InstanceInterruptionBehavior, InstanceType, SpotInstanceState, SpotInstanceType,
};

shape! {
    pub struct SpotInstanceStatus => SpotInstanceStatusBuilder {
        string code, set_code: String => "Code";
        string message, set_message: String => "Message";
        copy update_time, set_update_time: DateTime<Utc> => "UpdateTime";
    }
}

shape! {
    pub struct LaunchSpecification => LaunchSpecificationBuilder {
        string image_id, set_image_id: String => "ImageId";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        string key_name, set_key_name: String => "KeyName";
        value iam_instance_profile, set_iam_instance_profile: IamInstanceProfileSpecification => "IamInstanceProfile";
        value placement, set_placement: Placement => "Placement";
        list security_groups, set_security_groups, extend_security_groups: GroupIdentifier => "SecurityGroups";
        string subnet_id, set_subnet_id: String => "SubnetId";
    }
}

shape! {
    /// A request for spot capacity.
    pub struct SpotInstanceRequest => SpotInstanceRequestBuilder {
        string actual_block_hourly_price, set_actual_block_hourly_price: String => "ActualBlockHourlyPrice";
        string availability_zone_group, set_availability_zone_group: String => "AvailabilityZoneGroup";
        copy block_duration_minutes, set_block_duration_minutes: i32 => "BlockDurationMinutes";
        copy create_time, set_create_time: DateTime<Utc> => "CreateTime";
        string instance_id, set_instance_id: String => "InstanceId";
        string launch_group, set_launch_group: String => "LaunchGroup";
        value launch_specification, set_launch_specification: LaunchSpecification => "LaunchSpecification";
        string launched_availability_zone, set_launched_availability_zone: String => "LaunchedAvailabilityZone";
        string product_description, set_product_description: String => "ProductDescription";
        string spot_instance_request_id, set_spot_instance_request_id: String => "SpotInstanceRequestId";
        string spot_price, set_spot_price: String => "SpotPrice";
        value state, set_state: SpotInstanceState => "State";
        value status, set_status: SpotInstanceStatus => "Status";
        list tags, set_tags, extend_tags: Tag => "Tags";
        value type_, set_type: SpotInstanceType => "Type";
        copy valid_from, set_valid_from: DateTime<Utc> => "ValidFrom";
        copy valid_until, set_valid_until: DateTime<Utc> => "ValidUntil";
        value instance_interruption_behavior, set_instance_interruption_behavior: InstanceInterruptionBehavior => "InstanceInterruptionBehavior";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_keeps_its_wire_name() {
        let request = SpotInstanceRequest::builder()
            .spot_instance_request_id("sir-1")
            .type_(SpotInstanceType::Persistent)
            .state("open")
            .build();
        assert_eq!(request.type_(), Some(&SpotInstanceType::Persistent));
        assert_eq!(request.to_string(), "{SpotInstanceRequestId: sir-1,State: open,Type: persistent}");
    }
}
