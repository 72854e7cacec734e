use chrono::{DateTime, Utc};
use nimbus_core::{Float64, shape};

use super::{
    BlockDeviceMapping, FleetLaunchTemplateSpecification, GroupIdentifier,
    IamInstanceProfileSpecification, InstanceNetworkInterfaceSpecification, Tag, TagSpecification,
};
use crate::enums::{
    AllocationStrategy, ExcessCapacityTerminationPolicy, FleetType, InstanceInterruptionBehavior,
    InstanceType, OnDemandAllocationStrategy, ResourceType, Tenancy,
};

shape! {
    pub struct SpotFleetMonitoring => SpotFleetMonitoringBuilder {
        copy enabled, set_enabled: bool => "Enabled";
    }
}

shape! {
    pub struct SpotPlacement => SpotPlacementBuilder {
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        string group_name, set_group_name: String => "GroupName";
        value tenancy, set_tenancy: Tenancy => "Tenancy";
    }
}

shape! {
    pub struct SpotFleetTagSpecification => SpotFleetTagSpecificationBuilder {
        value resource_type, set_resource_type: ResourceType => "ResourceType";
        list tags, set_tags, extend_tags: Tag => "Tags";
    }
}

shape! {
    /// Launch parameters for one spot-fleet pool.
    pub struct SpotFleetLaunchSpecification => SpotFleetLaunchSpecificationBuilder {
        list security_groups, set_security_groups, extend_security_groups: GroupIdentifier => "SecurityGroups";
        string addressing_type, set_addressing_type: String => "AddressingType";
        list block_device_mappings, set_block_device_mappings, extend_block_device_mappings: BlockDeviceMapping => "BlockDeviceMappings";
        copy ebs_optimized, set_ebs_optimized: bool => "EbsOptimized";
        value iam_instance_profile, set_iam_instance_profile: IamInstanceProfileSpecification => "IamInstanceProfile";
        string image_id, set_image_id: String => "ImageId";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        string kernel_id, set_kernel_id: String => "KernelId";
        string key_name, set_key_name: String => "KeyName";
        value monitoring, set_monitoring: SpotFleetMonitoring => "Monitoring";
        list network_interfaces, set_network_interfaces, extend_network_interfaces: InstanceNetworkInterfaceSpecification => "NetworkInterfaces";
        value placement, set_placement: SpotPlacement => "Placement";
        string ramdisk_id, set_ramdisk_id: String => "RamdiskId";
        string spot_price, set_spot_price: String => "SpotPrice";
        string subnet_id, set_subnet_id: String => "SubnetId";
        string user_data, set_user_data: String => "UserData";
        copy weighted_capacity, set_weighted_capacity: Float64 => "WeightedCapacity";
        list tag_specifications, set_tag_specifications, extend_tag_specifications: SpotFleetTagSpecification => "TagSpecifications";
    }
}

shape! {
    pub struct LaunchTemplateOverrides => LaunchTemplateOverridesBuilder {
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        string spot_price, set_spot_price: String => "SpotPrice";
        string subnet_id, set_subnet_id: String => "SubnetId";
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        copy weighted_capacity, set_weighted_capacity: Float64 => "WeightedCapacity";
        copy priority, set_priority: Float64 => "Priority";
    }
}

shape! {
    pub struct LaunchTemplateConfig => LaunchTemplateConfigBuilder {
        value launch_template_specification, set_launch_template_specification: FleetLaunchTemplateSpecification => "LaunchTemplateSpecification";
        list overrides, set_overrides, extend_overrides: LaunchTemplateOverrides => "Overrides";
    }
}

shape! {
    pub struct ClassicLoadBalancer => ClassicLoadBalancerBuilder {
        string name, set_name: String => "Name";
    }
}

shape! {
    pub struct ClassicLoadBalancersConfig => ClassicLoadBalancersConfigBuilder {
        list classic_load_balancers, set_classic_load_balancers, extend_classic_load_balancers: ClassicLoadBalancer => "ClassicLoadBalancers";
    }
}

shape! {
    pub struct TargetGroup => TargetGroupBuilder {
        string arn, set_arn: String => "Arn";
    }
}

shape! {
    pub struct TargetGroupsConfig => TargetGroupsConfigBuilder {
        list target_groups, set_target_groups, extend_target_groups: TargetGroup => "TargetGroups";
    }
}

shape! {
    pub struct LoadBalancersConfig => LoadBalancersConfigBuilder {
        value classic_load_balancers_config, set_classic_load_balancers_config: ClassicLoadBalancersConfig => "ClassicLoadBalancersConfig";
        value target_groups_config, set_target_groups_config: TargetGroupsConfig => "TargetGroupsConfig";
    }
}

shape! {
    /// Configuration of a spot-fleet request.
    pub struct SpotFleetRequestConfigData => SpotFleetRequestConfigDataBuilder {
        value allocation_strategy, set_allocation_strategy: AllocationStrategy => "AllocationStrategy";
        value on_demand_allocation_strategy, set_on_demand_allocation_strategy: OnDemandAllocationStrategy => "OnDemandAllocationStrategy";
        string client_token, set_client_token: String => "ClientToken";
        value excess_capacity_termination_policy, set_excess_capacity_termination_policy: ExcessCapacityTerminationPolicy => "ExcessCapacityTerminationPolicy";
        copy fulfilled_capacity, set_fulfilled_capacity: Float64 => "FulfilledCapacity";
        copy on_demand_fulfilled_capacity, set_on_demand_fulfilled_capacity: Float64 => "OnDemandFulfilledCapacity";
        /// Role that lets the fleet launch and terminate instances on the caller's behalf.
        string iam_fleet_role, set_iam_fleet_role: String => "IamFleetRole";
        list launch_specifications, set_launch_specifications, extend_launch_specifications: SpotFleetLaunchSpecification => "LaunchSpecifications";
        list launch_template_configs, set_launch_template_configs, extend_launch_template_configs: LaunchTemplateConfig => "LaunchTemplateConfigs";
        string spot_price, set_spot_price: String => "SpotPrice";
        copy target_capacity, set_target_capacity: i32 => "TargetCapacity";
        copy on_demand_target_capacity, set_on_demand_target_capacity: i32 => "OnDemandTargetCapacity";
        string on_demand_max_total_price, set_on_demand_max_total_price: String => "OnDemandMaxTotalPrice";
        string spot_max_total_price, set_spot_max_total_price: String => "SpotMaxTotalPrice";
        copy terminate_instances_with_expiration, set_terminate_instances_with_expiration: bool => "TerminateInstancesWithExpiration";
        value type_, set_type: FleetType => "Type";
        copy valid_from, set_valid_from: DateTime<Utc> => "ValidFrom";
        copy valid_until, set_valid_until: DateTime<Utc> => "ValidUntil";
        copy replace_unhealthy_instances, set_replace_unhealthy_instances: bool => "ReplaceUnhealthyInstances";
        value instance_interruption_behavior, set_instance_interruption_behavior: InstanceInterruptionBehavior => "InstanceInterruptionBehavior";
        value load_balancers_config, set_load_balancers_config: LoadBalancersConfig => "LoadBalancersConfig";
        copy instance_pools_to_use_count, set_instance_pools_to_use_count: i32 => "InstancePoolsToUseCount";
        list tag_specifications, set_tag_specifications, extend_tag_specifications: TagSpecification => "TagSpecifications";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_fleet_policies_use_camel_case_text() {
        let config = SpotFleetRequestConfigData::builder()
            .allocation_strategy("capacityOptimized")
            .excess_capacity_termination_policy(ExcessCapacityTerminationPolicy::NoTermination)
            .iam_fleet_role("arn:aws:iam::123456789012:role/fleet")
            .target_capacity(10)
            .type_("maintain")
            .build();

        assert_eq!(config.allocation_strategy(), Some(&AllocationStrategy::CapacityOptimized));
        assert_eq!(config.type_(), Some(&FleetType::Maintain));
        assert_eq!(
            config.to_string(),
            "{AllocationStrategy: capacityOptimized,ExcessCapacityTerminationPolicy: noTermination,\
             IamFleetRole: arn:aws:iam::123456789012:role/fleet,TargetCapacity: 10,Type: maintain}"
        );
    }

    #[test]
    fn launch_specifications_and_load_balancers_nest() {
        let config = SpotFleetRequestConfigData::builder()
            .launch_specifications(
                SpotFleetLaunchSpecification::builder()
                    .image_id("ami-1")
                    .instance_type(InstanceType::C5Large)
                    .weighted_capacity(2.0_f64)
                    .placement(SpotPlacement::builder().availability_zone("us-east-1a")),
            )
            .load_balancers_config(
                LoadBalancersConfig::builder()
                    .target_groups_config(TargetGroupsConfig::builder().target_groups(TargetGroup::builder().arn("tg-1"))),
            )
            .build();

        assert_eq!(
            config.to_string(),
            "{LaunchSpecifications: [{ImageId: ami-1,InstanceType: c5.large,\
             Placement: {AvailabilityZone: us-east-1a},WeightedCapacity: 2}],\
             LoadBalancersConfig: {TargetGroupsConfig: {TargetGroups: [{Arn: tg-1}]}}}"
        );
    }
}
