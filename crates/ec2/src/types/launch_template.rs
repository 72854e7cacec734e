//! Launch template contents: the request form used to create a template version
//! and the response form returned when describing one.

use chrono::{DateTime, Utc};
use nimbus_core::shape;

use super::{
    CapacityReservationTarget, CreditSpecificationRequest, ElasticGpuSpecification,
    ElasticGpuSpecificationResponse, InstanceIpv6Address, InstanceIpv6AddressRequest,
    PrivateIpAddressSpecification, Tag,
};
use crate::enums::{
    CapacityReservationPreference, HttpTokensState, InstanceInterruptionBehavior,
    InstanceMetadataEndpointState, InstanceType, LaunchTemplateInstanceMetadataOptionsState,
    MarketType, ResourceType, ShutdownBehavior, SpotInstanceType, Tenancy, VolumeType,
};

shape! {
    pub struct LaunchTemplateIamInstanceProfileSpecificationRequest => LaunchTemplateIamInstanceProfileSpecificationRequestBuilder {
        string arn, set_arn: String => "Arn";
        string name, set_name: String => "Name";
    }
}

shape! {
    pub struct LaunchTemplateIamInstanceProfileSpecification => LaunchTemplateIamInstanceProfileSpecificationBuilder {
        string arn, set_arn: String => "Arn";
        string name, set_name: String => "Name";
    }
}

shape! {
    pub struct LaunchTemplateEbsBlockDeviceRequest => LaunchTemplateEbsBlockDeviceRequestBuilder {
        copy encrypted, set_encrypted: bool => "Encrypted";
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
        copy iops, set_iops: i32 => "Iops";
        string kms_key_id, set_kms_key_id: String => "KmsKeyId";
        string snapshot_id, set_snapshot_id: String => "SnapshotId";
        copy volume_size, set_volume_size: i32 => "VolumeSize";
        value volume_type, set_volume_type: VolumeType => "VolumeType";
    }
}

shape! {
    pub struct LaunchTemplateEbsBlockDevice => LaunchTemplateEbsBlockDeviceBuilder {
        copy encrypted, set_encrypted: bool => "Encrypted";
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
        copy iops, set_iops: i32 => "Iops";
        string kms_key_id, set_kms_key_id: String => "KmsKeyId";
        string snapshot_id, set_snapshot_id: String => "SnapshotId";
        copy volume_size, set_volume_size: i32 => "VolumeSize";
        value volume_type, set_volume_type: VolumeType => "VolumeType";
    }
}

shape! {
    pub struct LaunchTemplateBlockDeviceMappingRequest => LaunchTemplateBlockDeviceMappingRequestBuilder {
        string device_name, set_device_name: String => "DeviceName";
        string virtual_name, set_virtual_name: String => "VirtualName";
        value ebs, set_ebs: LaunchTemplateEbsBlockDeviceRequest => "Ebs";
        string no_device, set_no_device: String => "NoDevice";
    }
}

shape! {
    pub struct LaunchTemplateBlockDeviceMapping => LaunchTemplateBlockDeviceMappingBuilder {
        string device_name, set_device_name: String => "DeviceName";
        string virtual_name, set_virtual_name: String => "VirtualName";
        value ebs, set_ebs: LaunchTemplateEbsBlockDevice => "Ebs";
        string no_device, set_no_device: String => "NoDevice";
    }
}

shape! {
    pub struct LaunchTemplateInstanceNetworkInterfaceSpecificationRequest => LaunchTemplateInstanceNetworkInterfaceSpecificationRequestBuilder {
        copy associate_public_ip_address, set_associate_public_ip_address: bool => "AssociatePublicIpAddress";
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
        string description, set_description: String => "Description";
        copy device_index, set_device_index: i32 => "DeviceIndex";
        list groups, set_groups, extend_groups: String => "Groups";
        string interface_type, set_interface_type: String => "InterfaceType";
        copy ipv6_address_count, set_ipv6_address_count: i32 => "Ipv6AddressCount";
        list ipv6_addresses, set_ipv6_addresses, extend_ipv6_addresses: InstanceIpv6AddressRequest => "Ipv6Addresses";
        string network_interface_id, set_network_interface_id: String => "NetworkInterfaceId";
        string private_ip_address, set_private_ip_address: String => "PrivateIpAddress";
        list private_ip_addresses, set_private_ip_addresses, extend_private_ip_addresses: PrivateIpAddressSpecification => "PrivateIpAddresses";
        copy secondary_private_ip_address_count, set_secondary_private_ip_address_count: i32 => "SecondaryPrivateIpAddressCount";
        string subnet_id, set_subnet_id: String => "SubnetId";
    }
}

shape! {
    pub struct LaunchTemplateInstanceNetworkInterfaceSpecification => LaunchTemplateInstanceNetworkInterfaceSpecificationBuilder {
        copy associate_public_ip_address, set_associate_public_ip_address: bool => "AssociatePublicIpAddress";
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
        string description, set_description: String => "Description";
        copy device_index, set_device_index: i32 => "DeviceIndex";
        list groups, set_groups, extend_groups: String => "Groups";
        string interface_type, set_interface_type: String => "InterfaceType";
        copy ipv6_address_count, set_ipv6_address_count: i32 => "Ipv6AddressCount";
        list ipv6_addresses, set_ipv6_addresses, extend_ipv6_addresses: InstanceIpv6Address => "Ipv6Addresses";
        string network_interface_id, set_network_interface_id: String => "NetworkInterfaceId";
        string private_ip_address, set_private_ip_address: String => "PrivateIpAddress";
        list private_ip_addresses, set_private_ip_addresses, extend_private_ip_addresses: PrivateIpAddressSpecification => "PrivateIpAddresses";
        copy secondary_private_ip_address_count, set_secondary_private_ip_address_count: i32 => "SecondaryPrivateIpAddressCount";
        string subnet_id, set_subnet_id: String => "SubnetId";
    }
}

shape! {
    pub struct LaunchTemplatesMonitoringRequest => LaunchTemplatesMonitoringRequestBuilder {
        copy enabled, set_enabled: bool => "Enabled";
    }
}

shape! {
    pub struct LaunchTemplatesMonitoring => LaunchTemplatesMonitoringBuilder {
        copy enabled, set_enabled: bool => "Enabled";
    }
}

shape! {
    pub struct LaunchTemplatePlacementRequest => LaunchTemplatePlacementRequestBuilder {
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        string affinity, set_affinity: String => "Affinity";
        string group_name, set_group_name: String => "GroupName";
        string host_id, set_host_id: String => "HostId";
        value tenancy, set_tenancy: Tenancy => "Tenancy";
        string spread_domain, set_spread_domain: String => "SpreadDomain";
        string host_resource_group_arn, set_host_resource_group_arn: String => "HostResourceGroupArn";
        copy partition_number, set_partition_number: i32 => "PartitionNumber";
    }
}

shape! {
    pub struct LaunchTemplatePlacement => LaunchTemplatePlacementBuilder {
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        string affinity, set_affinity: String => "Affinity";
        string group_name, set_group_name: String => "GroupName";
        string host_id, set_host_id: String => "HostId";
        value tenancy, set_tenancy: Tenancy => "Tenancy";
        string spread_domain, set_spread_domain: String => "SpreadDomain";
        string host_resource_group_arn, set_host_resource_group_arn: String => "HostResourceGroupArn";
        copy partition_number, set_partition_number: i32 => "PartitionNumber";
    }
}

shape! {
    pub struct LaunchTemplateTagSpecificationRequest => LaunchTemplateTagSpecificationRequestBuilder {
        value resource_type, set_resource_type: ResourceType => "ResourceType";
        list tags, set_tags, extend_tags: Tag => "Tags";
    }
}

shape! {
    pub struct LaunchTemplateTagSpecification => LaunchTemplateTagSpecificationBuilder {
        value resource_type, set_resource_type: ResourceType => "ResourceType";
        list tags, set_tags, extend_tags: Tag => "Tags";
    }
}

shape! {
    pub struct LaunchTemplateElasticInferenceAccelerator => LaunchTemplateElasticInferenceAcceleratorBuilder {
        string type_, set_type: String => "Type";
        copy count, set_count: i32 => "Count";
    }
}

shape! {
    pub struct LaunchTemplateElasticInferenceAcceleratorResponse => LaunchTemplateElasticInferenceAcceleratorResponseBuilder {
        string type_, set_type: String => "Type";
        copy count, set_count: i32 => "Count";
    }
}

shape! {
    pub struct LaunchTemplateSpotMarketOptionsRequest => LaunchTemplateSpotMarketOptionsRequestBuilder {
        string max_price, set_max_price: String => "MaxPrice";
        value spot_instance_type, set_spot_instance_type: SpotInstanceType => "SpotInstanceType";
        copy block_duration_minutes, set_block_duration_minutes: i32 => "BlockDurationMinutes";
        copy valid_until, set_valid_until: DateTime<Utc> => "ValidUntil";
        value instance_interruption_behavior, set_instance_interruption_behavior: InstanceInterruptionBehavior => "InstanceInterruptionBehavior";
    }
}

shape! {
    pub struct LaunchTemplateSpotMarketOptions => LaunchTemplateSpotMarketOptionsBuilder {
        string max_price, set_max_price: String => "MaxPrice";
        value spot_instance_type, set_spot_instance_type: SpotInstanceType => "SpotInstanceType";
        copy block_duration_minutes, set_block_duration_minutes: i32 => "BlockDurationMinutes";
        copy valid_until, set_valid_until: DateTime<Utc> => "ValidUntil";
        value instance_interruption_behavior, set_instance_interruption_behavior: InstanceInterruptionBehavior => "InstanceInterruptionBehavior";
    }
}

shape! {
    pub struct LaunchTemplateInstanceMarketOptionsRequest => LaunchTemplateInstanceMarketOptionsRequestBuilder {
        value market_type, set_market_type: MarketType => "MarketType";
        value spot_options, set_spot_options: LaunchTemplateSpotMarketOptionsRequest => "SpotOptions";
    }
}

shape! {
    pub struct LaunchTemplateInstanceMarketOptions => LaunchTemplateInstanceMarketOptionsBuilder {
        value market_type, set_market_type: MarketType => "MarketType";
        value spot_options, set_spot_options: LaunchTemplateSpotMarketOptions => "SpotOptions";
    }
}

shape! {
    pub struct CreditSpecification => CreditSpecificationBuilder {
        string cpu_credits, set_cpu_credits: String => "CpuCredits";
    }
}

shape! {
    pub struct LaunchTemplateCpuOptionsRequest => LaunchTemplateCpuOptionsRequestBuilder {
        copy core_count, set_core_count: i32 => "CoreCount";
        copy threads_per_core, set_threads_per_core: i32 => "ThreadsPerCore";
    }
}

shape! {
    pub struct LaunchTemplateCpuOptions => LaunchTemplateCpuOptionsBuilder {
        copy core_count, set_core_count: i32 => "CoreCount";
        copy threads_per_core, set_threads_per_core: i32 => "ThreadsPerCore";
    }
}

shape! {
    pub struct CapacityReservationTargetResponse => CapacityReservationTargetResponseBuilder {
        string capacity_reservation_id, set_capacity_reservation_id: String => "CapacityReservationId";
    }
}

shape! {
    pub struct LaunchTemplateCapacityReservationSpecificationRequest => LaunchTemplateCapacityReservationSpecificationRequestBuilder {
        value capacity_reservation_preference, set_capacity_reservation_preference: CapacityReservationPreference => "CapacityReservationPreference";
        value capacity_reservation_target, set_capacity_reservation_target: CapacityReservationTarget => "CapacityReservationTarget";
    }
}

shape! {
    pub struct LaunchTemplateCapacityReservationSpecificationResponse => LaunchTemplateCapacityReservationSpecificationResponseBuilder {
        value capacity_reservation_preference, set_capacity_reservation_preference: CapacityReservationPreference => "CapacityReservationPreference";
        value capacity_reservation_target, set_capacity_reservation_target: CapacityReservationTargetResponse => "CapacityReservationTarget";
    }
}

shape! {
    pub struct LaunchTemplateLicenseConfigurationRequest => LaunchTemplateLicenseConfigurationRequestBuilder {
        string license_configuration_arn, set_license_configuration_arn: String => "LicenseConfigurationArn";
    }
}

shape! {
    pub struct LaunchTemplateLicenseConfiguration => LaunchTemplateLicenseConfigurationBuilder {
        string license_configuration_arn, set_license_configuration_arn: String => "LicenseConfigurationArn";
    }
}

shape! {
    pub struct LaunchTemplateHibernationOptionsRequest => LaunchTemplateHibernationOptionsRequestBuilder {
        copy configured, set_configured: bool => "Configured";
    }
}

shape! {
    pub struct LaunchTemplateHibernationOptions => LaunchTemplateHibernationOptionsBuilder {
        copy configured, set_configured: bool => "Configured";
    }
}

shape! {
    pub struct LaunchTemplateInstanceMetadataOptionsRequest => LaunchTemplateInstanceMetadataOptionsRequestBuilder {
        value http_tokens, set_http_tokens: HttpTokensState => "HttpTokens";
        copy http_put_response_hop_limit, set_http_put_response_hop_limit: i32 => "HttpPutResponseHopLimit";
        value http_endpoint, set_http_endpoint: InstanceMetadataEndpointState => "HttpEndpoint";
    }
}

shape! {
    pub struct LaunchTemplateInstanceMetadataOptions => LaunchTemplateInstanceMetadataOptionsBuilder {
        /// `pending` until the options have been applied to the instance.
        value state, set_state: LaunchTemplateInstanceMetadataOptionsState => "State";
        value http_tokens, set_http_tokens: HttpTokensState => "HttpTokens";
        copy http_put_response_hop_limit, set_http_put_response_hop_limit: i32 => "HttpPutResponseHopLimit";
        value http_endpoint, set_http_endpoint: InstanceMetadataEndpointState => "HttpEndpoint";
    }
}

shape! {
    /// Instance parameters stored in a new launch template version.
    pub struct RequestLaunchTemplateData => RequestLaunchTemplateDataBuilder {
        string kernel_id, set_kernel_id: String => "KernelId";
        copy ebs_optimized, set_ebs_optimized: bool => "EbsOptimized";
        value iam_instance_profile, set_iam_instance_profile: LaunchTemplateIamInstanceProfileSpecificationRequest => "IamInstanceProfile";
        list block_device_mappings, set_block_device_mappings, extend_block_device_mappings: LaunchTemplateBlockDeviceMappingRequest => "BlockDeviceMappings";
        list network_interfaces, set_network_interfaces, extend_network_interfaces: LaunchTemplateInstanceNetworkInterfaceSpecificationRequest => "NetworkInterfaces";
        string image_id, set_image_id: String => "ImageId";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        string key_name, set_key_name: String => "KeyName";
        value monitoring, set_monitoring: LaunchTemplatesMonitoringRequest => "Monitoring";
        value placement, set_placement: LaunchTemplatePlacementRequest => "Placement";
        string ram_disk_id, set_ram_disk_id: String => "RamDiskId";
        copy disable_api_termination, set_disable_api_termination: bool => "DisableApiTermination";
        value instance_initiated_shutdown_behavior, set_instance_initiated_shutdown_behavior: ShutdownBehavior => "InstanceInitiatedShutdownBehavior";
        /// Base64-encoded user data.
        string user_data, set_user_data: String => "UserData";
        list tag_specifications, set_tag_specifications, extend_tag_specifications: LaunchTemplateTagSpecificationRequest => "TagSpecifications";
        list elastic_gpu_specifications, set_elastic_gpu_specifications, extend_elastic_gpu_specifications: ElasticGpuSpecification => "ElasticGpuSpecifications";
        list elastic_inference_accelerators, set_elastic_inference_accelerators, extend_elastic_inference_accelerators: LaunchTemplateElasticInferenceAccelerator => "ElasticInferenceAccelerators";
        list security_group_ids, set_security_group_ids, extend_security_group_ids: String => "SecurityGroupIds";
        list security_groups, set_security_groups, extend_security_groups: String => "SecurityGroups";
        value instance_market_options, set_instance_market_options: LaunchTemplateInstanceMarketOptionsRequest => "InstanceMarketOptions";
        value credit_specification, set_credit_specification: CreditSpecificationRequest => "CreditSpecification";
        value cpu_options, set_cpu_options: LaunchTemplateCpuOptionsRequest => "CpuOptions";
        value capacity_reservation_specification, set_capacity_reservation_specification: LaunchTemplateCapacityReservationSpecificationRequest => "CapacityReservationSpecification";
        list license_specifications, set_license_specifications, extend_license_specifications: LaunchTemplateLicenseConfigurationRequest => "LicenseSpecifications";
        value hibernation_options, set_hibernation_options: LaunchTemplateHibernationOptionsRequest => "HibernationOptions";
        value metadata_options, set_metadata_options: LaunchTemplateInstanceMetadataOptionsRequest => "MetadataOptions";
    }
}

shape! {
    /// Instance parameters of a described launch template version.
    pub struct ResponseLaunchTemplateData => ResponseLaunchTemplateDataBuilder {
        string kernel_id, set_kernel_id: String => "KernelId";
        copy ebs_optimized, set_ebs_optimized: bool => "EbsOptimized";
        value iam_instance_profile, set_iam_instance_profile: LaunchTemplateIamInstanceProfileSpecification => "IamInstanceProfile";
        list block_device_mappings, set_block_device_mappings, extend_block_device_mappings: LaunchTemplateBlockDeviceMapping => "BlockDeviceMappings";
        list network_interfaces, set_network_interfaces, extend_network_interfaces: LaunchTemplateInstanceNetworkInterfaceSpecification => "NetworkInterfaces";
        string image_id, set_image_id: String => "ImageId";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        string key_name, set_key_name: String => "KeyName";
        value monitoring, set_monitoring: LaunchTemplatesMonitoring => "Monitoring";
        value placement, set_placement: LaunchTemplatePlacement => "Placement";
        string ram_disk_id, set_ram_disk_id: String => "RamDiskId";
        copy disable_api_termination, set_disable_api_termination: bool => "DisableApiTermination";
        value instance_initiated_shutdown_behavior, set_instance_initiated_shutdown_behavior: ShutdownBehavior => "InstanceInitiatedShutdownBehavior";
        string user_data, set_user_data: String => "UserData";
        list tag_specifications, set_tag_specifications, extend_tag_specifications: LaunchTemplateTagSpecification => "TagSpecifications";
        list elastic_gpu_specifications, set_elastic_gpu_specifications, extend_elastic_gpu_specifications: ElasticGpuSpecificationResponse => "ElasticGpuSpecifications";
        list elastic_inference_accelerators, set_elastic_inference_accelerators, extend_elastic_inference_accelerators: LaunchTemplateElasticInferenceAcceleratorResponse => "ElasticInferenceAccelerators";
        list security_group_ids, set_security_group_ids, extend_security_group_ids: String => "SecurityGroupIds";
        list security_groups, set_security_groups, extend_security_groups: String => "SecurityGroups";
        value instance_market_options, set_instance_market_options: LaunchTemplateInstanceMarketOptions => "InstanceMarketOptions";
        value credit_specification, set_credit_specification: CreditSpecification => "CreditSpecification";
        value cpu_options, set_cpu_options: LaunchTemplateCpuOptions => "CpuOptions";
        value capacity_reservation_specification, set_capacity_reservation_specification: LaunchTemplateCapacityReservationSpecificationResponse => "CapacityReservationSpecification";
        list license_specifications, set_license_specifications, extend_license_specifications: LaunchTemplateLicenseConfiguration => "LicenseSpecifications";
        value hibernation_options, set_hibernation_options: LaunchTemplateHibernationOptions => "HibernationOptions";
        value metadata_options, set_metadata_options: LaunchTemplateInstanceMetadataOptions => "MetadataOptions";
    }
}
