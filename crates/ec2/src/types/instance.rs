use chrono::{DateTime, Utc};
use nimbus_core::shape;

use super::{
    CapacityReservationTarget, ElasticGpuAssociation, ElasticInferenceAcceleratorAssociation,
    GroupIdentifier, Placement, ProductCode, StateReason, Tag,
};
use crate::enums::{
    ArchitectureValues, AttachmentStatus, CapacityReservationPreference, DeviceType,
    HttpTokensState, HypervisorType, InstanceLifecycleType, InstanceMetadataEndpointState,
    InstanceMetadataOptionsState, InstanceStateName, InstanceType, MonitoringState,
    NetworkInterfaceStatus, PlatformValues, VirtualizationType,
};

shape! {
    pub struct Monitoring => MonitoringBuilder {
        value state, set_state: MonitoringState => "State";
    }
}

shape! {
    /// Current state of an instance. The low byte of `code` is the state; the
    /// high byte is reserved for internal use.
    pub struct InstanceState => InstanceStateBuilder {
        copy code, set_code: i32 => "Code";
        value name, set_name: InstanceStateName => "Name";
    }
}

shape! {
    pub struct IamInstanceProfile => IamInstanceProfileBuilder {
        string arn, set_arn: String => "Arn";
        string id, set_id: String => "Id";
    }
}

shape! {
    pub struct CpuOptions => CpuOptionsBuilder {
        copy core_count, set_core_count: i32 => "CoreCount";
        copy threads_per_core, set_threads_per_core: i32 => "ThreadsPerCore";
    }
}

shape! {
    pub struct EbsInstanceBlockDevice => EbsInstanceBlockDeviceBuilder {
        copy attach_time, set_attach_time: DateTime<Utc> => "AttachTime";
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
        value status, set_status: AttachmentStatus => "Status";
        string volume_id, set_volume_id: String => "VolumeId";
    }
}

shape! {
    pub struct InstanceBlockDeviceMapping => InstanceBlockDeviceMappingBuilder {
        string device_name, set_device_name: String => "DeviceName";
        value ebs, set_ebs: EbsInstanceBlockDevice => "Ebs";
    }
}

shape! {
    pub struct HibernationOptions => HibernationOptionsBuilder {
        copy configured, set_configured: bool => "Configured";
    }
}

shape! {
    pub struct InstanceMetadataOptionsResponse => InstanceMetadataOptionsResponseBuilder {
        value state, set_state: InstanceMetadataOptionsState => "State";
        value http_tokens, set_http_tokens: HttpTokensState => "HttpTokens";
        copy http_put_response_hop_limit, set_http_put_response_hop_limit: i32 => "HttpPutResponseHopLimit";
        value http_endpoint, set_http_endpoint: InstanceMetadataEndpointState => "HttpEndpoint";
    }
}

shape! {
    pub struct CapacityReservationSpecificationResponse => CapacityReservationSpecificationResponseBuilder {
        value capacity_reservation_preference, set_capacity_reservation_preference: CapacityReservationPreference => "CapacityReservationPreference";
        value capacity_reservation_target, set_capacity_reservation_target: CapacityReservationTarget => "CapacityReservationTarget";
    }
}

shape! {
    pub struct LicenseConfiguration => LicenseConfigurationBuilder {
        string license_configuration_arn, set_license_configuration_arn: String => "LicenseConfigurationArn";
    }
}

shape! {
    pub struct InstanceNetworkInterfaceAttachment => InstanceNetworkInterfaceAttachmentBuilder {
        copy attach_time, set_attach_time: DateTime<Utc> => "AttachTime";
        string attachment_id, set_attachment_id: String => "AttachmentId";
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
        copy device_index, set_device_index: i32 => "DeviceIndex";
        value status, set_status: AttachmentStatus => "Status";
    }
}

shape! {
    /// A network interface as attached to a running instance.
    pub struct InstanceNetworkInterface => InstanceNetworkInterfaceBuilder {
        value attachment, set_attachment: InstanceNetworkInterfaceAttachment => "Attachment";
        string description, set_description: String => "Description";
        list groups, set_groups, extend_groups: GroupIdentifier => "Groups";
        string mac_address, set_mac_address: String => "MacAddress";
        string network_interface_id, set_network_interface_id: String => "NetworkInterfaceId";
        string owner_id, set_owner_id: String => "OwnerId";
        string private_dns_name, set_private_dns_name: String => "PrivateDnsName";
        string private_ip_address, set_private_ip_address: String => "PrivateIpAddress";
        copy source_dest_check, set_source_dest_check: bool => "SourceDestCheck";
        value status, set_status: NetworkInterfaceStatus => "Status";
        string subnet_id, set_subnet_id: String => "SubnetId";
        string vpc_id, set_vpc_id: String => "VpcId";
        string interface_type, set_interface_type: String => "InterfaceType";
    }
}

shape! {
    /// A launched instance.
    pub struct Instance => InstanceBuilder {
        copy ami_launch_index, set_ami_launch_index: i32 => "AmiLaunchIndex";
        string image_id, set_image_id: String => "ImageId";
        string instance_id, set_instance_id: String => "InstanceId";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        string kernel_id, set_kernel_id: String => "KernelId";
        string key_name, set_key_name: String => "KeyName";
        copy launch_time, set_launch_time: DateTime<Utc> => "LaunchTime";
        value monitoring, set_monitoring: Monitoring => "Monitoring";
        value placement, set_placement: Placement => "Placement";
        value platform, set_platform: PlatformValues => "Platform";
        string private_dns_name, set_private_dns_name: String => "PrivateDnsName";
        string private_ip_address, set_private_ip_address: String => "PrivateIpAddress";
        list product_codes, set_product_codes, extend_product_codes: ProductCode => "ProductCodes";
        string public_dns_name, set_public_dns_name: String => "PublicDnsName";
        string public_ip_address, set_public_ip_address: String => "PublicIpAddress";
        string ramdisk_id, set_ramdisk_id: String => "RamdiskId";
        value state, set_state: InstanceState => "State";
        string state_transition_reason, set_state_transition_reason: String => "StateTransitionReason";
        string subnet_id, set_subnet_id: String => "SubnetId";
        string vpc_id, set_vpc_id: String => "VpcId";
        value architecture, set_architecture: ArchitectureValues => "Architecture";
        list block_device_mappings, set_block_device_mappings, extend_block_device_mappings: InstanceBlockDeviceMapping => "BlockDeviceMappings";
        string client_token, set_client_token: String => "ClientToken";
        copy ebs_optimized, set_ebs_optimized: bool => "EbsOptimized";
        copy ena_support, set_ena_support: bool => "EnaSupport";
        value hypervisor, set_hypervisor: HypervisorType => "Hypervisor";
        value iam_instance_profile, set_iam_instance_profile: IamInstanceProfile => "IamInstanceProfile";
        value instance_lifecycle, set_instance_lifecycle: InstanceLifecycleType => "InstanceLifecycle";
        list elastic_gpu_associations, set_elastic_gpu_associations, extend_elastic_gpu_associations: ElasticGpuAssociation => "ElasticGpuAssociations";
        list elastic_inference_accelerator_associations, set_elastic_inference_accelerator_associations, extend_elastic_inference_accelerator_associations: ElasticInferenceAcceleratorAssociation => "ElasticInferenceAcceleratorAssociations";
        list network_interfaces, set_network_interfaces, extend_network_interfaces: InstanceNetworkInterface => "NetworkInterfaces";
        string outpost_arn, set_outpost_arn: String => "OutpostArn";
        string root_device_name, set_root_device_name: String => "RootDeviceName";
        value root_device_type, set_root_device_type: DeviceType => "RootDeviceType";
        list security_groups, set_security_groups, extend_security_groups: GroupIdentifier => "SecurityGroups";
        copy source_dest_check, set_source_dest_check: bool => "SourceDestCheck";
        string spot_instance_request_id, set_spot_instance_request_id: String => "SpotInstanceRequestId";
        string sriov_net_support, set_sriov_net_support: String => "SriovNetSupport";
        value state_reason, set_state_reason: StateReason => "StateReason";
        list tags, set_tags, extend_tags: Tag => "Tags";
        value virtualization_type, set_virtualization_type: VirtualizationType => "VirtualizationType";
        value cpu_options, set_cpu_options: CpuOptions => "CpuOptions";
        string capacity_reservation_id, set_capacity_reservation_id: String => "CapacityReservationId";
        value capacity_reservation_specification, set_capacity_reservation_specification: CapacityReservationSpecificationResponse => "CapacityReservationSpecification";
        value hibernation_options, set_hibernation_options: HibernationOptions => "HibernationOptions";
        list licenses, set_licenses, extend_licenses: LicenseConfiguration => "Licenses";
        value metadata_options, set_metadata_options: InstanceMetadataOptionsResponse => "MetadataOptions";
    }
}

shape! {
    /// Instances launched together by one launch request.
    pub struct Reservation => ReservationBuilder {
        list groups, set_groups, extend_groups: GroupIdentifier => "Groups";
        list instances, set_instances, extend_instances: Instance => "Instances";
        string owner_id, set_owner_id: String => "OwnerId";
        string requester_id, set_requester_id: String => "RequesterId";
        string reservation_id, set_reservation_id: String => "ReservationId";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_accepts_enum_or_text() {
        let a = InstanceState::builder().code(16).name(InstanceStateName::Running).build();
        let b = InstanceState::builder().code(16).name("running").build();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "{Code: 16,Name: running}");
    }

    #[test]
    fn instance_renders_nested_records_in_declaration_order() {
        let instance = Instance::builder()
            .instance_id("i-0abc")
            .instance_type("t3.micro")
            .state(InstanceState::builder().name("stopped").build())
            .tags(Tag::new("Name", "web"))
            .build();

        assert_eq!(
            instance.to_string(),
            "{InstanceId: i-0abc,InstanceType: t3.micro,State: {Name: stopped},Tags: [{Key: Name,Value: web}]}"
        );
        assert_eq!(instance.instance_type(), Some(&InstanceType::T3Micro));
    }

    #[test]
    fn accelerator_associations_render_between_lifecycle_and_interfaces() {
        let instance = Instance::builder()
            .instance_lifecycle("spot")
            .elastic_gpu_associations(
                ElasticGpuAssociation::builder()
                    .elastic_gpu_id("egpu-1")
                    .elastic_gpu_association_state("ASSOCIATED"),
            )
            .extend_elastic_inference_accelerator_associations(Vec::<ElasticInferenceAcceleratorAssociation>::new())
            .network_interfaces(InstanceNetworkInterface::builder().network_interface_id("eni-1"))
            .build();

        assert_eq!(
            instance.to_string(),
            "{InstanceLifecycle: spot,\
             ElasticGpuAssociations: [{ElasticGpuId: egpu-1,ElasticGpuAssociationState: ASSOCIATED}],\
             ElasticInferenceAcceleratorAssociations: [],\
             NetworkInterfaces: [{NetworkInterfaceId: eni-1}]}"
        );
        assert_eq!(instance.elastic_inference_accelerator_associations(), Some(&[][..]));
    }

    #[test]
    fn reservation_collects_instances() {
        let reservation = Reservation::builder()
            .reservation_id("r-1")
            .instances(Instance::builder().instance_id("i-1").build())
            .instances(Instance::builder().instance_id("i-2").build())
            .build();

        let ids: Vec<_> = reservation
            .instances()
            .unwrap_or_default()
            .iter()
            .filter_map(Instance::instance_id)
            .collect();
        assert_eq!(ids, ["i-1", "i-2"]);
    }
}
