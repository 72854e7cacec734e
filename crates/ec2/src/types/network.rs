use nimbus_core::shape;

use super::{GroupIdentifier, Tag};
use crate::enums::{AttachmentStatus, NetworkInterfaceStatus, NetworkInterfaceType, RouteOrigin, RouteState};

shape! {
    pub struct InstanceIpv6Address => InstanceIpv6AddressBuilder {
        string ipv6_address, set_ipv6_address: String => "Ipv6Address";
    }
}

shape! {
    pub struct InstanceIpv6AddressRequest => InstanceIpv6AddressRequestBuilder {
        string ipv6_address, set_ipv6_address: String => "Ipv6Address";
    }
}

shape! {
    pub struct IpRange => IpRangeBuilder {
        string cidr_ip, set_cidr_ip: String => "CidrIp";
        string description, set_description: String => "Description";
    }
}

shape! {
    pub struct UserIdGroupPair => UserIdGroupPairBuilder {
        string description, set_description: String => "Description";
        string group_id, set_group_id: String => "GroupId";
        string group_name, set_group_name: String => "GroupName";
        string user_id, set_user_id: String => "UserId";
        string vpc_id, set_vpc_id: String => "VpcId";
    }
}

shape! {
    /// One ingress or egress rule. A protocol of `-1` means every protocol.
    pub struct IpPermission => IpPermissionBuilder {
        copy from_port, set_from_port: i32 => "FromPort";
        string ip_protocol, set_ip_protocol: String => "IpProtocol";
        list ip_ranges, set_ip_ranges, extend_ip_ranges: IpRange => "IpRanges";
        copy to_port, set_to_port: i32 => "ToPort";
        list user_id_group_pairs, set_user_id_group_pairs, extend_user_id_group_pairs: UserIdGroupPair => "UserIdGroupPairs";
    }
}

shape! {
    pub struct SecurityGroup => SecurityGroupBuilder {
        string description, set_description: String => "Description";
        string group_name, set_group_name: String => "GroupName";
        list ip_permissions, set_ip_permissions, extend_ip_permissions: IpPermission => "IpPermissions";
        string owner_id, set_owner_id: String => "OwnerId";
        string group_id, set_group_id: String => "GroupId";
        list ip_permissions_egress, set_ip_permissions_egress, extend_ip_permissions_egress: IpPermission => "IpPermissionsEgress";
        list tags, set_tags, extend_tags: Tag => "Tags";
        string vpc_id, set_vpc_id: String => "VpcId";
    }
}

shape! {
    pub struct NetworkInterfaceAttachment => NetworkInterfaceAttachmentBuilder {
        string attachment_id, set_attachment_id: String => "AttachmentId";
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
        copy device_index, set_device_index: i32 => "DeviceIndex";
        string instance_id, set_instance_id: String => "InstanceId";
        string instance_owner_id, set_instance_owner_id: String => "InstanceOwnerId";
        value status, set_status: AttachmentStatus => "Status";
    }
}

shape! {
    /// An elastic network interface.
    pub struct NetworkInterface => NetworkInterfaceBuilder {
        value attachment, set_attachment: NetworkInterfaceAttachment => "Attachment";
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        string description, set_description: String => "Description";
        list groups, set_groups, extend_groups: GroupIdentifier => "Groups";
        value interface_type, set_interface_type: NetworkInterfaceType => "InterfaceType";
        string mac_address, set_mac_address: String => "MacAddress";
        string network_interface_id, set_network_interface_id: String => "NetworkInterfaceId";
        string owner_id, set_owner_id: String => "OwnerId";
        string private_dns_name, set_private_dns_name: String => "PrivateDnsName";
        string private_ip_address, set_private_ip_address: String => "PrivateIpAddress";
        copy requester_managed, set_requester_managed: bool => "RequesterManaged";
        copy source_dest_check, set_source_dest_check: bool => "SourceDestCheck";
        value status, set_status: NetworkInterfaceStatus => "Status";
        string subnet_id, set_subnet_id: String => "SubnetId";
        /// Wire name differs from the other resources (`TagSet`).
        list tag_set, set_tag_set, extend_tag_set: Tag => "TagSet";
        string vpc_id, set_vpc_id: String => "VpcId";
    }
}

shape! {
    pub struct Route => RouteBuilder {
        string destination_cidr_block, set_destination_cidr_block: String => "DestinationCidrBlock";
        string destination_ipv6_cidr_block, set_destination_ipv6_cidr_block: String => "DestinationIpv6CidrBlock";
        string gateway_id, set_gateway_id: String => "GatewayId";
        string instance_id, set_instance_id: String => "InstanceId";
        string nat_gateway_id, set_nat_gateway_id: String => "NatGatewayId";
        string network_interface_id, set_network_interface_id: String => "NetworkInterfaceId";
        value origin, set_origin: RouteOrigin => "Origin";
        value state, set_state: RouteState => "State";
        string vpc_peering_connection_id, set_vpc_peering_connection_id: String => "VpcPeeringConnectionId";
    }
}

shape! {
    pub struct RouteTableAssociation => RouteTableAssociationBuilder {
        copy main, set_main: bool => "Main";
        string route_table_association_id, set_route_table_association_id: String => "RouteTableAssociationId";
        string route_table_id, set_route_table_id: String => "RouteTableId";
        string subnet_id, set_subnet_id: String => "SubnetId";
        string gateway_id, set_gateway_id: String => "GatewayId";
    }
}

shape! {
    pub struct RouteTable => RouteTableBuilder {
        list associations, set_associations, extend_associations: RouteTableAssociation => "Associations";
        string route_table_id, set_route_table_id: String => "RouteTableId";
        list routes, set_routes, extend_routes: Route => "Routes";
        list tags, set_tags, extend_tags: Tag => "Tags";
        string vpc_id, set_vpc_id: String => "VpcId";
        string owner_id, set_owner_id: String => "OwnerId";
    }
}

shape! {
    pub struct UnsuccessfulItemError => UnsuccessfulItemErrorBuilder {
        string code, set_code: String => "Code";
        string message, set_message: String => "Message";
    }
}

shape! {
    /// A resource a batch operation could not process.
    pub struct UnsuccessfulItem => UnsuccessfulItemBuilder {
        value error, set_error: UnsuccessfulItemError => "Error";
        string resource_id, set_resource_id: String => "ResourceId";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_interface_tags_use_tag_set() {
        let eni = NetworkInterface::builder()
            .network_interface_id("eni-1")
            .interface_type(NetworkInterfaceType::Efa)
            .tag_set(Tag::new("team", "hpc"))
            .build();
        assert_eq!(
            eni.to_string(),
            "{InterfaceType: efa,NetworkInterfaceId: eni-1,TagSet: [{Key: team,Value: hpc}]}"
        );
    }

    #[test]
    fn ingress_rule_with_empty_ranges_differs_from_absent_ranges() {
        let any = IpPermission::builder().ip_protocol("-1").build();
        let none = any.to_builder().set_ip_ranges(Some(Vec::new())).build();
        assert_ne!(any, none);
        assert_eq!(none.to_string(), "{IpProtocol: -1,IpRanges: []}");
    }
}
