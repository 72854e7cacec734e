use chrono::{DateTime, Utc};
use nimbus_core::shape;

use super::Tag;
use crate::enums::{
    CapacityReservationInstancePlatform, CapacityReservationState, CapacityReservationTenancy,
    EndDateType, InstanceMatchCriteria, InstanceType,
};

shape! {
    /// Reserved capacity for a number of instances in one availability zone.
    pub struct CapacityReservation => CapacityReservationBuilder {
        string capacity_reservation_id, set_capacity_reservation_id: String => "CapacityReservationId";
        string owner_id, set_owner_id: String => "OwnerId";
        string capacity_reservation_arn, set_capacity_reservation_arn: String => "CapacityReservationArn";
        string availability_zone_id, set_availability_zone_id: String => "AvailabilityZoneId";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        value instance_platform, set_instance_platform: CapacityReservationInstancePlatform => "InstancePlatform";
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        value tenancy, set_tenancy: CapacityReservationTenancy => "Tenancy";
        copy total_instance_count, set_total_instance_count: i32 => "TotalInstanceCount";
        copy available_instance_count, set_available_instance_count: i32 => "AvailableInstanceCount";
        copy ebs_optimized, set_ebs_optimized: bool => "EbsOptimized";
        copy ephemeral_storage, set_ephemeral_storage: bool => "EphemeralStorage";
        value state, set_state: CapacityReservationState => "State";
        copy end_date, set_end_date: DateTime<Utc> => "EndDate";
        value end_date_type, set_end_date_type: EndDateType => "EndDateType";
        value instance_match_criteria, set_instance_match_criteria: InstanceMatchCriteria => "InstanceMatchCriteria";
        copy create_date, set_create_date: DateTime<Utc> => "CreateDate";
        list tags, set_tags, extend_tags: Tag => "Tags";
    }
}
