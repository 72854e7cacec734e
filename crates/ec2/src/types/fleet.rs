//! EC2 Fleet records as returned by fleet descriptions.

use chrono::{DateTime, Utc};
use nimbus_core::{Float64, shape};

use super::Tag;
use crate::enums::{
    DefaultTargetCapacityType, FleetActivityStatus, FleetExcessCapacityTerminationPolicy,
    FleetOnDemandAllocationStrategy, FleetStateCode, FleetType, InstanceInterruptionBehavior,
    InstanceLifecycle, InstanceType, PlatformValues, SpotAllocationStrategy,
};

shape! {
    /// Launch template by id or by name, plus a version (number, `$Latest` or `$Default`).
    pub struct FleetLaunchTemplateSpecification => FleetLaunchTemplateSpecificationBuilder {
        string launch_template_id, set_launch_template_id: String => "LaunchTemplateId";
        string launch_template_name, set_launch_template_name: String => "LaunchTemplateName";
        string version, set_version: String => "Version";
    }
}

shape! {
    pub struct PlacementResponse => PlacementResponseBuilder {
        string group_name, set_group_name: String => "GroupName";
    }
}

shape! {
    pub struct FleetLaunchTemplateOverrides => FleetLaunchTemplateOverridesBuilder {
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        string max_price, set_max_price: String => "MaxPrice";
        string subnet_id, set_subnet_id: String => "SubnetId";
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        copy weighted_capacity, set_weighted_capacity: Float64 => "WeightedCapacity";
        /// Lower values launch first under the `prioritized` strategy.
        copy priority, set_priority: Float64 => "Priority";
        value placement, set_placement: PlacementResponse => "Placement";
    }
}

shape! {
    pub struct FleetLaunchTemplateConfig => FleetLaunchTemplateConfigBuilder {
        value launch_template_specification, set_launch_template_specification: FleetLaunchTemplateSpecification => "LaunchTemplateSpecification";
        list overrides, set_overrides, extend_overrides: FleetLaunchTemplateOverrides => "Overrides";
    }
}

shape! {
    pub struct TargetCapacitySpecification => TargetCapacitySpecificationBuilder {
        copy total_target_capacity, set_total_target_capacity: i32 => "TotalTargetCapacity";
        copy on_demand_target_capacity, set_on_demand_target_capacity: i32 => "OnDemandTargetCapacity";
        copy spot_target_capacity, set_spot_target_capacity: i32 => "SpotTargetCapacity";
        value default_target_capacity_type, set_default_target_capacity_type: DefaultTargetCapacityType => "DefaultTargetCapacityType";
    }
}

shape! {
    pub struct SpotOptions => SpotOptionsBuilder {
        value allocation_strategy, set_allocation_strategy: SpotAllocationStrategy => "AllocationStrategy";
        value instance_interruption_behavior, set_instance_interruption_behavior: InstanceInterruptionBehavior => "InstanceInterruptionBehavior";
        copy instance_pools_to_use_count, set_instance_pools_to_use_count: i32 => "InstancePoolsToUseCount";
        copy single_instance_type, set_single_instance_type: bool => "SingleInstanceType";
        copy single_availability_zone, set_single_availability_zone: bool => "SingleAvailabilityZone";
        copy min_target_capacity, set_min_target_capacity: i32 => "MinTargetCapacity";
        string max_total_price, set_max_total_price: String => "MaxTotalPrice";
    }
}

shape! {
    pub struct OnDemandOptions => OnDemandOptionsBuilder {
        value allocation_strategy, set_allocation_strategy: FleetOnDemandAllocationStrategy => "AllocationStrategy";
        copy single_instance_type, set_single_instance_type: bool => "SingleInstanceType";
        copy single_availability_zone, set_single_availability_zone: bool => "SingleAvailabilityZone";
        copy min_target_capacity, set_min_target_capacity: i32 => "MinTargetCapacity";
        string max_total_price, set_max_total_price: String => "MaxTotalPrice";
    }
}

shape! {
    pub struct LaunchTemplateAndOverridesResponse => LaunchTemplateAndOverridesResponseBuilder {
        value launch_template_specification, set_launch_template_specification: FleetLaunchTemplateSpecification => "LaunchTemplateSpecification";
        value overrides, set_overrides: FleetLaunchTemplateOverrides => "Overrides";
    }
}

shape! {
    /// A launch failure reported for an `instant` fleet.
    pub struct DescribeFleetError => DescribeFleetErrorBuilder {
        value launch_template_and_overrides, set_launch_template_and_overrides: LaunchTemplateAndOverridesResponse => "LaunchTemplateAndOverrides";
        value lifecycle, set_lifecycle: InstanceLifecycle => "Lifecycle";
        string error_code, set_error_code: String => "ErrorCode";
        string error_message, set_error_message: String => "ErrorMessage";
    }
}

shape! {
    pub struct DescribeFleetsInstances => DescribeFleetsInstancesBuilder {
        value launch_template_and_overrides, set_launch_template_and_overrides: LaunchTemplateAndOverridesResponse => "LaunchTemplateAndOverrides";
        value lifecycle, set_lifecycle: InstanceLifecycle => "Lifecycle";
        list instance_ids, set_instance_ids, extend_instance_ids: String => "InstanceIds";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        value platform, set_platform: PlatformValues => "Platform";
    }
}

shape! {
    /// An EC2 Fleet.
    pub struct FleetData => FleetDataBuilder {
        value activity_status, set_activity_status: FleetActivityStatus => "ActivityStatus";
        copy create_time, set_create_time: DateTime<Utc> => "CreateTime";
        string fleet_id, set_fleet_id: String => "FleetId";
        value fleet_state, set_fleet_state: FleetStateCode => "FleetState";
        /// Idempotency token, at most 64 ASCII characters.
        string client_token, set_client_token: String => "ClientToken";
        value excess_capacity_termination_policy, set_excess_capacity_termination_policy: FleetExcessCapacityTerminationPolicy => "ExcessCapacityTerminationPolicy";
        copy fulfilled_capacity, set_fulfilled_capacity: Float64 => "FulfilledCapacity";
        copy fulfilled_on_demand_capacity, set_fulfilled_on_demand_capacity: Float64 => "FulfilledOnDemandCapacity";
        list launch_template_configs, set_launch_template_configs, extend_launch_template_configs: FleetLaunchTemplateConfig => "LaunchTemplateConfigs";
        value target_capacity_specification, set_target_capacity_specification: TargetCapacitySpecification => "TargetCapacitySpecification";
        copy terminate_instances_with_expiration, set_terminate_instances_with_expiration: bool => "TerminateInstancesWithExpiration";
        value type_, set_type: FleetType => "Type";
        copy valid_from, set_valid_from: DateTime<Utc> => "ValidFrom";
        copy valid_until, set_valid_until: DateTime<Utc> => "ValidUntil";
        copy replace_unhealthy_instances, set_replace_unhealthy_instances: bool => "ReplaceUnhealthyInstances";
        value spot_options, set_spot_options: SpotOptions => "SpotOptions";
        value on_demand_options, set_on_demand_options: OnDemandOptions => "OnDemandOptions";
        list tags, set_tags, extend_tags: Tag => "Tags";
        list errors, set_errors, extend_errors: DescribeFleetError => "Errors";
        list instances, set_instances, extend_instances: DescribeFleetsInstances => "Instances";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_state_and_type_use_their_own_spellings() {
        let fleet = FleetData::builder()
            .activity_status("pending_fulfillment")
            .fleet_id("fleet-1")
            .fleet_state(FleetStateCode::DeletedRunning)
            .excess_capacity_termination_policy("no-termination")
            .type_(FleetType::Instant)
            .build();

        assert_eq!(fleet.activity_status(), Some(&FleetActivityStatus::PendingFulfillment));
        assert_eq!(
            fleet.excess_capacity_termination_policy(),
            Some(&FleetExcessCapacityTerminationPolicy::NoTermination)
        );
        assert_eq!(
            fleet.to_string(),
            "{ActivityStatus: pending_fulfillment,FleetId: fleet-1,FleetState: deleted_running,\
             ExcessCapacityTerminationPolicy: no-termination,Type: instant}"
        );
    }

    #[test]
    fn instant_fleet_reports_errors_and_instances() {
        let overrides = LaunchTemplateAndOverridesResponse::builder()
            .launch_template_specification(
                FleetLaunchTemplateSpecification::builder().launch_template_id("lt-1").version("$Latest"),
            )
            .overrides(FleetLaunchTemplateOverrides::builder().instance_type("c5.large").priority(1.0_f64))
            .build();

        let fleet = FleetData::builder()
            .target_capacity_specification(
                TargetCapacitySpecification::builder()
                    .total_target_capacity(4)
                    .default_target_capacity_type(DefaultTargetCapacityType::Spot),
            )
            .errors(
                DescribeFleetError::builder()
                    .launch_template_and_overrides(overrides.clone())
                    .lifecycle("spot")
                    .error_code("InsufficientInstanceCapacity"),
            )
            .instances(
                DescribeFleetsInstances::builder()
                    .launch_template_and_overrides(overrides)
                    .lifecycle(InstanceLifecycle::OnDemand)
                    .extend_instance_ids(["i-1", "i-2"]),
            )
            .build();

        let launched: Vec<_> = fleet
            .instances()
            .unwrap_or_default()
            .iter()
            .flat_map(|i| i.instance_ids().unwrap_or_default())
            .collect();
        assert_eq!(launched, ["i-1", "i-2"]);
        assert_eq!(
            fleet.errors().map(|e| e[0].to_string()).as_deref(),
            Some(
                "{LaunchTemplateAndOverrides: {LaunchTemplateSpecification: {LaunchTemplateId: lt-1,Version: $Latest},\
                 Overrides: {InstanceType: c5.large,Priority: 1}},Lifecycle: spot,ErrorCode: InsufficientInstanceCapacity}"
            )
        );
    }
}
