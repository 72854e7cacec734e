use chrono::{DateTime, Utc};
use nimbus_core::{idempotent, shape};

use crate::enums::{
    CapacityReservationInstancePlatform, CapacityReservationTenancy, EndDateType,
    InstanceMatchCriteria, InstanceType,
};
use crate::types::{CapacityReservation, TagSpecification};

shape! {
    pub struct CreateCapacityReservationRequest => CreateCapacityReservationRequestBuilder {
        string client_token, set_client_token: String => "ClientToken";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        value instance_platform, set_instance_platform: CapacityReservationInstancePlatform => "InstancePlatform";
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        string availability_zone_id, set_availability_zone_id: String => "AvailabilityZoneId";
        value tenancy, set_tenancy: CapacityReservationTenancy => "Tenancy";
        copy instance_count, set_instance_count: i32 => "InstanceCount";
        copy ebs_optimized, set_ebs_optimized: bool => "EbsOptimized";
        copy ephemeral_storage, set_ephemeral_storage: bool => "EphemeralStorage";
        /// Required when `end_date_type` is `limited`; must be absent when `unlimited`.
        copy end_date, set_end_date: DateTime<Utc> => "EndDate";
        value end_date_type, set_end_date_type: EndDateType => "EndDateType";
        value instance_match_criteria, set_instance_match_criteria: InstanceMatchCriteria => "InstanceMatchCriteria";
        list tag_specifications, set_tag_specifications, extend_tag_specifications: TagSpecification => "TagSpecifications";
        copy dry_run, set_dry_run: bool => "DryRun";
    }
}

shape! {
    pub struct CreateCapacityReservationResult => CreateCapacityReservationResultBuilder {
        value capacity_reservation, set_capacity_reservation: CapacityReservation => "CapacityReservation";
    }
}

idempotent!(CreateCapacityReservationRequestBuilder);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_text_with_spaces_matches_the_variant() {
        let a = CreateCapacityReservationRequest::builder()
            .instance_platform(CapacityReservationInstancePlatform::WindowsWithSqlServerWeb)
            .instance_count(2)
            .build();
        let b = CreateCapacityReservationRequest::builder()
            .instance_platform("Windows with SQL Server Web")
            .instance_count(2)
            .build();
        assert_eq!(a, b);
        assert_eq!(
            a.to_string(),
            "{InstancePlatform: Windows with SQL Server Web,InstanceCount: 2}"
        );
    }
}
