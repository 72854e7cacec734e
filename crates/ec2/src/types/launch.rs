//! Launch-time parameters (request side of instance creation).

use chrono::{DateTime, Utc};
use nimbus_core::shape;

use crate::enums::{
    CapacityReservationPreference, HttpTokensState, InstanceInterruptionBehavior,
    InstanceMetadataEndpointState, MarketType, SpotInstanceType, VolumeType,
};

shape! {
    pub struct RunInstancesMonitoringEnabled => RunInstancesMonitoringEnabledBuilder {
        copy enabled, set_enabled: bool => "Enabled";
    }
}

shape! {
    /// Instance profile by ARN or by name.
    pub struct IamInstanceProfileSpecification => IamInstanceProfileSpecificationBuilder {
        string arn, set_arn: String => "Arn";
        string name, set_name: String => "Name";
    }
}

shape! {
    pub struct CpuOptionsRequest => CpuOptionsRequestBuilder {
        copy core_count, set_core_count: i32 => "CoreCount";
        copy threads_per_core, set_threads_per_core: i32 => "ThreadsPerCore";
    }
}

shape! {
    pub struct EbsBlockDevice => EbsBlockDeviceBuilder {
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
        copy iops, set_iops: i32 => "Iops";
        string snapshot_id, set_snapshot_id: String => "SnapshotId";
        copy volume_size, set_volume_size: i32 => "VolumeSize";
        value volume_type, set_volume_type: VolumeType => "VolumeType";
        string kms_key_id, set_kms_key_id: String => "KmsKeyId";
        copy encrypted, set_encrypted: bool => "Encrypted";
    }
}

shape! {
    pub struct BlockDeviceMapping => BlockDeviceMappingBuilder {
        string device_name, set_device_name: String => "DeviceName";
        string virtual_name, set_virtual_name: String => "VirtualName";
        value ebs, set_ebs: EbsBlockDevice => "Ebs";
        /// Suppresses the device named in the image's mapping (the service expects an empty string).
        string no_device, set_no_device: String => "NoDevice";
    }
}

shape! {
    pub struct HibernationOptionsRequest => HibernationOptionsRequestBuilder {
        copy configured, set_configured: bool => "Configured";
    }
}

shape! {
    pub struct InstanceMetadataOptionsRequest => InstanceMetadataOptionsRequestBuilder {
        value http_tokens, set_http_tokens: HttpTokensState => "HttpTokens";
        copy http_put_response_hop_limit, set_http_put_response_hop_limit: i32 => "HttpPutResponseHopLimit";
        value http_endpoint, set_http_endpoint: InstanceMetadataEndpointState => "HttpEndpoint";
    }
}

shape! {
    /// Launch template by ID or name, optionally pinned to a version.
    pub struct LaunchTemplateSpecification => LaunchTemplateSpecificationBuilder {
        string launch_template_id, set_launch_template_id: String => "LaunchTemplateId";
        string launch_template_name, set_launch_template_name: String => "LaunchTemplateName";
        string version, set_version: String => "Version";
    }
}

shape! {
    pub struct CapacityReservationTarget => CapacityReservationTargetBuilder {
        string capacity_reservation_id, set_capacity_reservation_id: String => "CapacityReservationId";
    }
}

shape! {
    pub struct CapacityReservationSpecification => CapacityReservationSpecificationBuilder {
        value capacity_reservation_preference, set_capacity_reservation_preference: CapacityReservationPreference => "CapacityReservationPreference";
        value capacity_reservation_target, set_capacity_reservation_target: CapacityReservationTarget => "CapacityReservationTarget";
    }
}

shape! {
    pub struct LicenseConfigurationRequest => LicenseConfigurationRequestBuilder {
        string license_configuration_arn, set_license_configuration_arn: String => "LicenseConfigurationArn";
    }
}

shape! {
    pub struct SpotMarketOptions => SpotMarketOptionsBuilder {
        string max_price, set_max_price: String => "MaxPrice";
        value spot_instance_type, set_spot_instance_type: SpotInstanceType => "SpotInstanceType";
        copy block_duration_minutes, set_block_duration_minutes: i32 => "BlockDurationMinutes";
        copy valid_until, set_valid_until: DateTime<Utc> => "ValidUntil";
        value instance_interruption_behavior, set_instance_interruption_behavior: InstanceInterruptionBehavior => "InstanceInterruptionBehavior";
    }
}

shape! {
    pub struct InstanceMarketOptionsRequest => InstanceMarketOptionsRequestBuilder {
        value market_type, set_market_type: MarketType => "MarketType";
        value spot_options, set_spot_options: SpotMarketOptions => "SpotOptions";
    }
}

shape! {
    /// Credit option for burstable instances (`standard` or `unlimited`).
    pub struct CreditSpecificationRequest => CreditSpecificationRequestBuilder {
        string cpu_credits, set_cpu_credits: String => "CpuCredits";
    }
}

shape! {
    pub struct PrivateIpAddressSpecification => PrivateIpAddressSpecificationBuilder {
        copy primary, set_primary: bool => "Primary";
        string private_ip_address, set_private_ip_address: String => "PrivateIpAddress";
    }
}

shape! {
    /// A network interface to create or attach at launch.
    pub struct InstanceNetworkInterfaceSpecification => InstanceNetworkInterfaceSpecificationBuilder {
        copy associate_public_ip_address, set_associate_public_ip_address: bool => "AssociatePublicIpAddress";
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
        string description, set_description: String => "Description";
        copy device_index, set_device_index: i32 => "DeviceIndex";
        list groups, set_groups, extend_groups: String => "Groups";
        copy ipv6_address_count, set_ipv6_address_count: i32 => "Ipv6AddressCount";
        string network_interface_id, set_network_interface_id: String => "NetworkInterfaceId";
        string private_ip_address, set_private_ip_address: String => "PrivateIpAddress";
        list private_ip_addresses, set_private_ip_addresses, extend_private_ip_addresses: PrivateIpAddressSpecification => "PrivateIpAddresses";
        copy secondary_private_ip_address_count, set_secondary_private_ip_address_count: i32 => "SecondaryPrivateIpAddressCount";
        string subnet_id, set_subnet_id: String => "SubnetId";
        string interface_type, set_interface_type: String => "InterfaceType";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_device_empty_string_is_present() {
        let mapping = BlockDeviceMapping::builder()
            .device_name("/dev/sdb")
            .no_device("")
            .build();
        assert_eq!(mapping.no_device(), Some(""));
        assert_eq!(mapping.to_string(), "{DeviceName: /dev/sdb,NoDevice: }");
    }

    #[test]
    fn spot_options_nest_under_market_options() {
        let options = InstanceMarketOptionsRequest::builder()
            .market_type(MarketType::Spot)
            .spot_options(
                SpotMarketOptions::builder()
                    .max_price("0.05")
                    .instance_interruption_behavior("hibernate"),
            )
            .build();

        let spot = options.spot_options().unwrap();
        assert_eq!(
            spot.instance_interruption_behavior(),
            Some(&InstanceInterruptionBehavior::Hibernate)
        );
        assert_eq!(
            options.to_string(),
            "{MarketType: spot,SpotOptions: {MaxPrice: 0.05,InstanceInterruptionBehavior: hibernate}}"
        );
    }
}
