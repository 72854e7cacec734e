use nimbus_core::shape;

use crate::enums::{ProductCodeValues, ResourceType, Tenancy};

shape! {
    /// A key/value tag on a resource.
    pub struct Tag => TagBuilder {
        string key, set_key: String => "Key";
        string value, set_value: String => "Value";
    }
}

impl Tag {
    /// Shorthand for a fully populated tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::builder().key(key).value(value).build()
    }
}

shape! {
    /// A filter name and its accepted values (values are OR-ed).
    pub struct Filter => FilterBuilder {
        string name, set_name: String => "Name";
        list values, set_values, extend_values: String => "Values";
    }
}

impl Filter {
    pub fn new<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::builder().name(name).extend_values(values).build()
    }
}

shape! {
    /// Tags to apply to a resource created by the request.
    pub struct TagSpecification => TagSpecificationBuilder {
        value resource_type, set_resource_type: ResourceType => "ResourceType";
        list tags, set_tags, extend_tags: Tag => "Tags";
    }
}

shape! {
    pub struct Placement => PlacementBuilder {
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        string affinity, set_affinity: String => "Affinity";
        string group_name, set_group_name: String => "GroupName";
        copy partition_number, set_partition_number: i32 => "PartitionNumber";
        string host_id, set_host_id: String => "HostId";
        value tenancy, set_tenancy: Tenancy => "Tenancy";
        string spread_domain, set_spread_domain: String => "SpreadDomain";
        string host_resource_group_arn, set_host_resource_group_arn: String => "HostResourceGroupArn";
    }
}

shape! {
    pub struct GroupIdentifier => GroupIdentifierBuilder {
        string group_name, set_group_name: String => "GroupName";
        string group_id, set_group_id: String => "GroupId";
    }
}

shape! {
    pub struct ProductCode => ProductCodeBuilder {
        string product_code_id, set_product_code_id: String => "ProductCodeId";
        value product_code_type, set_product_code_type: ProductCodeValues => "ProductCodeType";
    }
}

shape! {
    /// Why a resource changed state most recently.
    pub struct StateReason => StateReasonBuilder {
        string code, set_code: String => "Code";
        string message, set_message: String => "Message";
    }
}
