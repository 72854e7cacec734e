use nimbus_core::{Float64, shape};

use crate::enums::{
    ArchitectureValues, DiskType, EbsEncryptionSupport, EbsOptimizedSupport, EnaSupport,
    InstanceType, InstanceTypeHypervisor, PlacementGroupStrategy, RootDeviceType, UsageClassType,
    VirtualizationType,
};

shape! {
    pub struct ProcessorInfo => ProcessorInfoBuilder {
        list supported_architectures, set_supported_architectures, extend_supported_architectures: ArchitectureValues => "SupportedArchitectures";
        copy sustained_clock_speed_in_ghz, set_sustained_clock_speed_in_ghz: Float64 => "SustainedClockSpeedInGhz";
    }
}

shape! {
    pub struct VCpuInfo => VCpuInfoBuilder {
        copy default_v_cpus, set_default_v_cpus: i32 => "DefaultVCpus";
        copy default_cores, set_default_cores: i32 => "DefaultCores";
        copy default_threads_per_core, set_default_threads_per_core: i32 => "DefaultThreadsPerCore";
        list valid_cores, set_valid_cores, extend_valid_cores: i32 => "ValidCores";
        list valid_threads_per_core, set_valid_threads_per_core, extend_valid_threads_per_core: i32 => "ValidThreadsPerCore";
    }
}

shape! {
    pub struct MemoryInfo => MemoryInfoBuilder {
        copy size_in_mib, set_size_in_mib: i64 => "SizeInMiB";
    }
}

shape! {
    pub struct DiskInfo => DiskInfoBuilder {
        copy size_in_gb, set_size_in_gb: i64 => "SizeInGB";
        copy count, set_count: i32 => "Count";
        value type_, set_type: DiskType => "Type";
    }
}

shape! {
    /// Local instance-store disks.
    pub struct InstanceStorageInfo => InstanceStorageInfoBuilder {
        copy total_size_in_gb, set_total_size_in_gb: i64 => "TotalSizeInGB";
        list disks, set_disks, extend_disks: DiskInfo => "Disks";
    }
}

shape! {
    pub struct EbsInfo => EbsInfoBuilder {
        value ebs_optimized_support, set_ebs_optimized_support: EbsOptimizedSupport => "EbsOptimizedSupport";
        value encryption_support, set_encryption_support: EbsEncryptionSupport => "EncryptionSupport";
    }
}

shape! {
    pub struct NetworkInfo => NetworkInfoBuilder {
        /// Free text such as `Up to 10 Gigabit`.
        string network_performance, set_network_performance: String => "NetworkPerformance";
        copy maximum_network_interfaces, set_maximum_network_interfaces: i32 => "MaximumNetworkInterfaces";
        copy ipv4_addresses_per_interface, set_ipv4_addresses_per_interface: i32 => "Ipv4AddressesPerInterface";
        copy ipv6_addresses_per_interface, set_ipv6_addresses_per_interface: i32 => "Ipv6AddressesPerInterface";
        copy ipv6_supported, set_ipv6_supported: bool => "Ipv6Supported";
        value ena_support, set_ena_support: EnaSupport => "EnaSupport";
    }
}

shape! {
    pub struct GpuDeviceMemoryInfo => GpuDeviceMemoryInfoBuilder {
        copy size_in_mib, set_size_in_mib: i32 => "SizeInMiB";
    }
}

shape! {
    pub struct GpuDeviceInfo => GpuDeviceInfoBuilder {
        string name, set_name: String => "Name";
        string manufacturer, set_manufacturer: String => "Manufacturer";
        copy count, set_count: i32 => "Count";
        value memory_info, set_memory_info: GpuDeviceMemoryInfo => "MemoryInfo";
    }
}

shape! {
    pub struct GpuInfo => GpuInfoBuilder {
        list gpus, set_gpus, extend_gpus: GpuDeviceInfo => "Gpus";
        copy total_gpu_memory_in_mib, set_total_gpu_memory_in_mib: i32 => "TotalGpuMemoryInMiB";
    }
}

shape! {
    pub struct FpgaDeviceMemoryInfo => FpgaDeviceMemoryInfoBuilder {
        copy size_in_mib, set_size_in_mib: i32 => "SizeInMiB";
    }
}

shape! {
    pub struct FpgaDeviceInfo => FpgaDeviceInfoBuilder {
        string name, set_name: String => "Name";
        string manufacturer, set_manufacturer: String => "Manufacturer";
        copy count, set_count: i32 => "Count";
        value memory_info, set_memory_info: FpgaDeviceMemoryInfo => "MemoryInfo";
    }
}

shape! {
    pub struct FpgaInfo => FpgaInfoBuilder {
        list fpgas, set_fpgas, extend_fpgas: FpgaDeviceInfo => "Fpgas";
        copy total_fpga_memory_in_mib, set_total_fpga_memory_in_mib: i32 => "TotalFpgaMemoryInMiB";
    }
}

shape! {
    pub struct PlacementGroupInfo => PlacementGroupInfoBuilder {
        list supported_strategies, set_supported_strategies, extend_supported_strategies: PlacementGroupStrategy => "SupportedStrategies";
    }
}

shape! {
    pub struct InferenceDeviceInfo => InferenceDeviceInfoBuilder {
        copy count, set_count: i32 => "Count";
        string name, set_name: String => "Name";
        string manufacturer, set_manufacturer: String => "Manufacturer";
    }
}

shape! {
    pub struct InferenceAcceleratorInfo => InferenceAcceleratorInfoBuilder {
        list accelerators, set_accelerators, extend_accelerators: InferenceDeviceInfo => "Accelerators";
    }
}

shape! {
    /// Capabilities of one instance type.
    pub struct InstanceTypeInfo => InstanceTypeInfoBuilder {
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        copy current_generation, set_current_generation: bool => "CurrentGeneration";
        copy free_tier_eligible, set_free_tier_eligible: bool => "FreeTierEligible";
        list supported_usage_classes, set_supported_usage_classes, extend_supported_usage_classes: UsageClassType => "SupportedUsageClasses";
        list supported_root_device_types, set_supported_root_device_types, extend_supported_root_device_types: RootDeviceType => "SupportedRootDeviceTypes";
        list supported_virtualization_types, set_supported_virtualization_types, extend_supported_virtualization_types: VirtualizationType => "SupportedVirtualizationTypes";
        copy bare_metal, set_bare_metal: bool => "BareMetal";
        value hypervisor, set_hypervisor: InstanceTypeHypervisor => "Hypervisor";
        value processor_info, set_processor_info: ProcessorInfo => "ProcessorInfo";
        value v_cpu_info, set_v_cpu_info: VCpuInfo => "VCpuInfo";
        value memory_info, set_memory_info: MemoryInfo => "MemoryInfo";
        copy instance_storage_supported, set_instance_storage_supported: bool => "InstanceStorageSupported";
        value instance_storage_info, set_instance_storage_info: InstanceStorageInfo => "InstanceStorageInfo";
        value ebs_info, set_ebs_info: EbsInfo => "EbsInfo";
        value network_info, set_network_info: NetworkInfo => "NetworkInfo";
        value gpu_info, set_gpu_info: GpuInfo => "GpuInfo";
        value fpga_info, set_fpga_info: FpgaInfo => "FpgaInfo";
        value placement_group_info, set_placement_group_info: PlacementGroupInfo => "PlacementGroupInfo";
        value inference_accelerator_info, set_inference_accelerator_info: InferenceAcceleratorInfo => "InferenceAcceleratorInfo";
        copy hibernation_supported, set_hibernation_supported: bool => "HibernationSupported";
        copy burstable_performance_supported, set_burstable_performance_supported: bool => "BurstablePerformanceSupported";
        copy dedicated_hosts_supported, set_dedicated_hosts_supported: bool => "DedicatedHostsSupported";
        copy auto_recovery_supported, set_auto_recovery_supported: bool => "AutoRecoverySupported";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_lists_append_from_text_or_variant() {
        let a = InstanceTypeInfo::builder()
            .supported_usage_classes(UsageClassType::OnDemand)
            .supported_usage_classes("spot")
            .build();
        let b = InstanceTypeInfo::builder()
            .extend_supported_usage_classes(["on-demand", "spot"])
            .build();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "{SupportedUsageClasses: [on-demand, spot]}");
    }

    #[test]
    fn integer_lists_render_like_text_lists() {
        let info = VCpuInfo::builder()
            .default_v_cpus(2)
            .extend_valid_cores([1, 2])
            .build();
        assert_eq!(info.to_string(), "{DefaultVCpus: 2,ValidCores: [1, 2]}");
    }

    #[test]
    fn hardware_details_render_after_storage_flag() {
        let info = InstanceTypeInfo::builder()
            .instance_type(InstanceType::G4dnXlarge)
            .instance_storage_supported(true)
            .instance_storage_info(
                InstanceStorageInfo::builder()
                    .total_size_in_gb(125)
                    .disks(DiskInfo::builder().size_in_gb(125).count(1).type_(DiskType::Ssd)),
            )
            .ebs_info(EbsInfo::builder().ebs_optimized_support("default"))
            .network_info(NetworkInfo::builder().network_performance("Up to 25 Gigabit").ena_support(EnaSupport::Required))
            .gpu_info(
                GpuInfo::builder()
                    .gpus(
                        GpuDeviceInfo::builder()
                            .name("T4")
                            .manufacturer("NVIDIA")
                            .count(1)
                            .memory_info(GpuDeviceMemoryInfo::builder().size_in_mib(16384)),
                    )
                    .total_gpu_memory_in_mib(16384),
            )
            .placement_group_info(PlacementGroupInfo::builder().extend_supported_strategies(["cluster", "spread"]))
            .hibernation_supported(false)
            .build();

        assert_eq!(
            info.to_string(),
            "{InstanceType: g4dn.xlarge,InstanceStorageSupported: true,\
             InstanceStorageInfo: {TotalSizeInGB: 125,Disks: [{SizeInGB: 125,Count: 1,Type: ssd}]},\
             EbsInfo: {EbsOptimizedSupport: default},\
             NetworkInfo: {NetworkPerformance: Up to 25 Gigabit,EnaSupport: required},\
             GpuInfo: {Gpus: [{Name: T4,Manufacturer: NVIDIA,Count: 1,MemoryInfo: {SizeInMiB: 16384}}],TotalGpuMemoryInMiB: 16384},\
             PlacementGroupInfo: {SupportedStrategies: [cluster, spread]},\
             HibernationSupported: false}"
        );
        assert_eq!(
            info.ebs_info().and_then(EbsInfo::ebs_optimized_support),
            Some(&EbsOptimizedSupport::Default)
        );
        assert_eq!(info.fpga_info(), None);
    }
}
