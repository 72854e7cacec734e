use nimbus_core::shape;

use super::{BlockDeviceMapping, ProductCode, StateReason, Tag};
use crate::enums::{
    ArchitectureValues, DeviceType, HypervisorType, ImageState, ImageTypeValues, PlatformValues,
    VirtualizationType,
};

shape! {
    /// A machine image.
    pub struct Image => ImageBuilder {
        value architecture, set_architecture: ArchitectureValues => "Architecture";
        /// Creation timestamp exactly as the service reports it.
        string creation_date, set_creation_date: String => "CreationDate";
        string image_id, set_image_id: String => "ImageId";
        string image_location, set_image_location: String => "ImageLocation";
        value image_type, set_image_type: ImageTypeValues => "ImageType";
        copy public, set_public: bool => "Public";
        string kernel_id, set_kernel_id: String => "KernelId";
        string owner_id, set_owner_id: String => "OwnerId";
        value platform, set_platform: PlatformValues => "Platform";
        string platform_details, set_platform_details: String => "PlatformDetails";
        string usage_operation, set_usage_operation: String => "UsageOperation";
        list product_codes, set_product_codes, extend_product_codes: ProductCode => "ProductCodes";
        string ramdisk_id, set_ramdisk_id: String => "RamdiskId";
        value state, set_state: ImageState => "State";
        list block_device_mappings, set_block_device_mappings, extend_block_device_mappings: BlockDeviceMapping => "BlockDeviceMappings";
        string description, set_description: String => "Description";
        copy ena_support, set_ena_support: bool => "EnaSupport";
        value hypervisor, set_hypervisor: HypervisorType => "Hypervisor";
        string image_owner_alias, set_image_owner_alias: String => "ImageOwnerAlias";
        string name, set_name: String => "Name";
        string root_device_name, set_root_device_name: String => "RootDeviceName";
        value root_device_type, set_root_device_type: DeviceType => "RootDeviceType";
        string sriov_net_support, set_sriov_net_support: String => "SriovNetSupport";
        value state_reason, set_state_reason: StateReason => "StateReason";
        list tags, set_tags, extend_tags: Tag => "Tags";
        value virtualization_type, set_virtualization_type: VirtualizationType => "VirtualizationType";
    }
}
