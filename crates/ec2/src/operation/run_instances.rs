use nimbus_core::{idempotent, shape};

use crate::enums::{InstanceType, ShutdownBehavior};
use crate::types::{
    BlockDeviceMapping, CapacityReservationSpecification, CpuOptionsRequest,
    CreditSpecificationRequest, ElasticGpuSpecification, ElasticInferenceAccelerator,
    HibernationOptionsRequest, IamInstanceProfileSpecification, InstanceIpv6Address,
    InstanceMarketOptionsRequest, InstanceMetadataOptionsRequest,
    InstanceNetworkInterfaceSpecification, LaunchTemplateSpecification,
    LicenseConfigurationRequest, Placement, Reservation, RunInstancesMonitoringEnabled,
    TagSpecification,
};

shape! {
    /// Launches between `min_count` and `max_count` instances of one image.
    pub struct RunInstancesRequest => RunInstancesRequestBuilder {
        list block_device_mappings, set_block_device_mappings, extend_block_device_mappings: BlockDeviceMapping => "BlockDeviceMappings";
        string image_id, set_image_id: String => "ImageId";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        copy ipv6_address_count, set_ipv6_address_count: i32 => "Ipv6AddressCount";
        list ipv6_addresses, set_ipv6_addresses, extend_ipv6_addresses: InstanceIpv6Address => "Ipv6Addresses";
        string kernel_id, set_kernel_id: String => "KernelId";
        string key_name, set_key_name: String => "KeyName";
        copy max_count, set_max_count: i32 => "MaxCount";
        copy min_count, set_min_count: i32 => "MinCount";
        value monitoring, set_monitoring: RunInstancesMonitoringEnabled => "Monitoring";
        value placement, set_placement: Placement => "Placement";
        string ramdisk_id, set_ramdisk_id: String => "RamdiskId";
        list security_group_ids, set_security_group_ids, extend_security_group_ids: String => "SecurityGroupIds";
        list security_groups, set_security_groups, extend_security_groups: String => "SecurityGroups";
        string subnet_id, set_subnet_id: String => "SubnetId";
        /// Base64-encoded user data.
        string user_data, set_user_data: String => "UserData";
        string additional_info, set_additional_info: String => "AdditionalInfo";
        /// Idempotency token, at most 64 ASCII characters.
        string client_token, set_client_token: String => "ClientToken";
        copy disable_api_termination, set_disable_api_termination: bool => "DisableApiTermination";
        copy dry_run, set_dry_run: bool => "DryRun";
        copy ebs_optimized, set_ebs_optimized: bool => "EbsOptimized";
        value iam_instance_profile, set_iam_instance_profile: IamInstanceProfileSpecification => "IamInstanceProfile";
        value instance_initiated_shutdown_behavior, set_instance_initiated_shutdown_behavior: ShutdownBehavior => "InstanceInitiatedShutdownBehavior";
        list network_interfaces, set_network_interfaces, extend_network_interfaces: InstanceNetworkInterfaceSpecification => "NetworkInterfaces";
        string private_ip_address, set_private_ip_address: String => "PrivateIpAddress";
        list elastic_gpu_specification, set_elastic_gpu_specification, extend_elastic_gpu_specification: ElasticGpuSpecification => "ElasticGpuSpecification";
        list elastic_inference_accelerators, set_elastic_inference_accelerators, extend_elastic_inference_accelerators: ElasticInferenceAccelerator => "ElasticInferenceAccelerators";
        list tag_specifications, set_tag_specifications, extend_tag_specifications: TagSpecification => "TagSpecifications";
        value launch_template, set_launch_template: LaunchTemplateSpecification => "LaunchTemplate";
        value instance_market_options, set_instance_market_options: InstanceMarketOptionsRequest => "InstanceMarketOptions";
        value credit_specification, set_credit_specification: CreditSpecificationRequest => "CreditSpecification";
        value cpu_options, set_cpu_options: CpuOptionsRequest => "CpuOptions";
        value capacity_reservation_specification, set_capacity_reservation_specification: CapacityReservationSpecification => "CapacityReservationSpecification";
        value hibernation_options, set_hibernation_options: HibernationOptionsRequest => "HibernationOptions";
        list license_specifications, set_license_specifications, extend_license_specifications: LicenseConfigurationRequest => "LicenseSpecifications";
        value metadata_options, set_metadata_options: InstanceMetadataOptionsRequest => "MetadataOptions";
    }
}

impl RunInstancesRequest {
    /// Request for exactly `count` instances of `image_id`.
    pub fn launch(image_id: impl Into<String>, count: i32) -> RunInstancesRequestBuilder {
        Self::builder().image_id(image_id).min_count(count).max_count(count)
    }
}

shape! {
    pub struct RunInstancesResult => RunInstancesResultBuilder {
        value reservation, set_reservation: Reservation => "Reservation";
    }
}

idempotent!(RunInstancesRequestBuilder);

#[cfg(test)]
mod tests {
    use nimbus_core::IdempotentRequest;

    use super::*;
    use crate::enums::{ResourceType, Tenancy};
    use crate::types::Tag;

    #[test]
    fn launch_sets_both_counts() {
        let request = RunInstancesRequest::launch("ami-1", 3).build();
        assert_eq!(request.min_count(), Some(3));
        assert_eq!(request.max_count(), Some(3));
        assert_eq!(request.to_string(), "{ImageId: ami-1,MaxCount: 3,MinCount: 3}");
    }

    #[test]
    fn ensure_client_token_keeps_a_caller_token() {
        let request = RunInstancesRequest::launch("ami-1", 1)
            .client_token("retry-42")
            .ensure_client_token()
            .build();
        assert_eq!(request.client_token(), Some("retry-42"));
    }

    #[test]
    fn ensure_client_token_fills_an_absent_token() {
        let builder = RunInstancesRequest::launch("ami-1", 1).ensure_client_token();
        let first = builder.clone().build();
        let retried = builder.build();

        let token = first.client_token().unwrap();
        assert!(!token.is_empty());
        assert_eq!(retried.client_token(), Some(token));
    }

    #[test]
    fn nested_shapes_accept_builders() {
        let request = RunInstancesRequest::launch("ami-1", 1)
            .placement(Placement::builder().tenancy(Tenancy::Dedicated))
            .tag_specifications(
                TagSpecification::builder()
                    .resource_type(ResourceType::Instance)
                    .tags(Tag::new("Name", "batch")),
            )
            .build();

        assert_eq!(
            request.placement().and_then(Placement::tenancy),
            Some(&Tenancy::Dedicated)
        );
        assert_eq!(request.tag_specifications().map(<[_]>::len), Some(1));
    }

    #[test]
    fn ipv6_and_accelerator_fields_keep_declaration_order() {
        let request = RunInstancesRequest::launch("ami-1", 1)
            .ipv6_addresses(InstanceIpv6Address::builder().ipv6_address("2001:db8::10"))
            .private_ip_address("10.0.0.5")
            .elastic_gpu_specification(ElasticGpuSpecification::builder().type_("eg1.medium"))
            .elastic_inference_accelerators(
                ElasticInferenceAccelerator::builder().type_("eia1.large").count(2),
            )
            .build();

        assert_eq!(
            request.to_string(),
            "{ImageId: ami-1,Ipv6Addresses: [{Ipv6Address: 2001:db8::10}],MaxCount: 1,MinCount: 1,\
             PrivateIpAddress: 10.0.0.5,ElasticGpuSpecification: [{Type: eg1.medium}],\
             ElasticInferenceAccelerators: [{Type: eia1.large,Count: 2}]}"
        );
        assert_eq!(
            request.elastic_inference_accelerators().and_then(|a| a[0].count()),
            Some(2)
        );
    }

    #[test]
    fn check_client_token_is_opt_in() {
        let overlong = RunInstancesRequest::launch("ami-1", 1).client_token("x".repeat(65));
        assert!(overlong.check_client_token().is_err());
        assert_eq!(overlong.build().client_token().map(str::len), Some(65));

        let generated = RunInstancesRequest::launch("ami-1", 1).ensure_client_token();
        assert_eq!(generated.check_client_token(), Ok(()));
        assert_eq!(RunInstancesRequest::builder().check_client_token(), Ok(()));
    }
}
