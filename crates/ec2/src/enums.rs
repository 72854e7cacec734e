//! Closed value sets of the compute API.
//!
//! Every enumeration converts from its canonical text and keeps unrecognised
//! text in an `Unknown` variant (see [`nimbus_core::wire_enum!`]).

use nimbus_core::wire_enum;

wire_enum! {
    /// Instance size. Types introduced after this list was generated round-trip
    /// through `Unknown`.
    pub enum InstanceType {
        T1Micro => "t1.micro",
        T2Nano => "t2.nano",
        T2Micro => "t2.micro",
        T2Small => "t2.small",
        T2Medium => "t2.medium",
        T2Large => "t2.large",
        T2Xlarge => "t2.xlarge",
        T22xlarge => "t2.2xlarge",
        T3Nano => "t3.nano",
        T3Micro => "t3.micro",
        T3Small => "t3.small",
        T3Medium => "t3.medium",
        T3Large => "t3.large",
        T3Xlarge => "t3.xlarge",
        T32xlarge => "t3.2xlarge",
        T3aNano => "t3a.nano",
        T3aMicro => "t3a.micro",
        T3aSmall => "t3a.small",
        T3aMedium => "t3a.medium",
        T3aLarge => "t3a.large",
        T3aXlarge => "t3a.xlarge",
        T3a2xlarge => "t3a.2xlarge",
        M1Small => "m1.small",
        M1Medium => "m1.medium",
        M1Large => "m1.large",
        M1Xlarge => "m1.xlarge",
        M3Medium => "m3.medium",
        M3Large => "m3.large",
        M3Xlarge => "m3.xlarge",
        M32xlarge => "m3.2xlarge",
        M4Large => "m4.large",
        M4Xlarge => "m4.xlarge",
        M42xlarge => "m4.2xlarge",
        M44xlarge => "m4.4xlarge",
        M410xlarge => "m4.10xlarge",
        M416xlarge => "m4.16xlarge",
        M2Xlarge => "m2.xlarge",
        M22xlarge => "m2.2xlarge",
        M24xlarge => "m2.4xlarge",
        Cr18xlarge => "cr1.8xlarge",
        R3Large => "r3.large",
        R3Xlarge => "r3.xlarge",
        R32xlarge => "r3.2xlarge",
        R34xlarge => "r3.4xlarge",
        R38xlarge => "r3.8xlarge",
        R4Large => "r4.large",
        R4Xlarge => "r4.xlarge",
        R42xlarge => "r4.2xlarge",
        R44xlarge => "r4.4xlarge",
        R48xlarge => "r4.8xlarge",
        R416xlarge => "r4.16xlarge",
        R5Large => "r5.large",
        R5Xlarge => "r5.xlarge",
        R52xlarge => "r5.2xlarge",
        R54xlarge => "r5.4xlarge",
        R58xlarge => "r5.8xlarge",
        R512xlarge => "r5.12xlarge",
        R516xlarge => "r5.16xlarge",
        R524xlarge => "r5.24xlarge",
        R5Metal => "r5.metal",
        R5aLarge => "r5a.large",
        R5aXlarge => "r5a.xlarge",
        R5a2xlarge => "r5a.2xlarge",
        R5a4xlarge => "r5a.4xlarge",
        R5a8xlarge => "r5a.8xlarge",
        R5a12xlarge => "r5a.12xlarge",
        R5a16xlarge => "r5a.16xlarge",
        R5a24xlarge => "r5a.24xlarge",
        R5dLarge => "r5d.large",
        R5dXlarge => "r5d.xlarge",
        R5d2xlarge => "r5d.2xlarge",
        R5d4xlarge => "r5d.4xlarge",
        R5d8xlarge => "r5d.8xlarge",
        R5d12xlarge => "r5d.12xlarge",
        R5d16xlarge => "r5d.16xlarge",
        R5d24xlarge => "r5d.24xlarge",
        R5dMetal => "r5d.metal",
        R5adLarge => "r5ad.large",
        R5adXlarge => "r5ad.xlarge",
        R5ad2xlarge => "r5ad.2xlarge",
        R5ad4xlarge => "r5ad.4xlarge",
        R5ad8xlarge => "r5ad.8xlarge",
        R5ad12xlarge => "r5ad.12xlarge",
        R5ad16xlarge => "r5ad.16xlarge",
        R5ad24xlarge => "r5ad.24xlarge",
        X116xlarge => "x1.16xlarge",
        X132xlarge => "x1.32xlarge",
        X1eXlarge => "x1e.xlarge",
        X1e2xlarge => "x1e.2xlarge",
        X1e4xlarge => "x1e.4xlarge",
        X1e8xlarge => "x1e.8xlarge",
        X1e16xlarge => "x1e.16xlarge",
        X1e32xlarge => "x1e.32xlarge",
        I2Xlarge => "i2.xlarge",
        I22xlarge => "i2.2xlarge",
        I24xlarge => "i2.4xlarge",
        I28xlarge => "i2.8xlarge",
        I3Large => "i3.large",
        I3Xlarge => "i3.xlarge",
        I32xlarge => "i3.2xlarge",
        I34xlarge => "i3.4xlarge",
        I38xlarge => "i3.8xlarge",
        I316xlarge => "i3.16xlarge",
        I3Metal => "i3.metal",
        I3enLarge => "i3en.large",
        I3enXlarge => "i3en.xlarge",
        I3en2xlarge => "i3en.2xlarge",
        I3en3xlarge => "i3en.3xlarge",
        I3en6xlarge => "i3en.6xlarge",
        I3en12xlarge => "i3en.12xlarge",
        I3en24xlarge => "i3en.24xlarge",
        I3enMetal => "i3en.metal",
        Hi14xlarge => "hi1.4xlarge",
        Hs18xlarge => "hs1.8xlarge",
        C1Medium => "c1.medium",
        C1Xlarge => "c1.xlarge",
        C3Large => "c3.large",
        C3Xlarge => "c3.xlarge",
        C32xlarge => "c3.2xlarge",
        C34xlarge => "c3.4xlarge",
        C38xlarge => "c3.8xlarge",
        C4Large => "c4.large",
        C4Xlarge => "c4.xlarge",
        C42xlarge => "c4.2xlarge",
        C44xlarge => "c4.4xlarge",
        C48xlarge => "c4.8xlarge",
        C5Large => "c5.large",
        C5Xlarge => "c5.xlarge",
        C52xlarge => "c5.2xlarge",
        C54xlarge => "c5.4xlarge",
        C59xlarge => "c5.9xlarge",
        C512xlarge => "c5.12xlarge",
        C518xlarge => "c5.18xlarge",
        C524xlarge => "c5.24xlarge",
        C5Metal => "c5.metal",
        C5aLarge => "c5a.large",
        C5aXlarge => "c5a.xlarge",
        C5a2xlarge => "c5a.2xlarge",
        C5a4xlarge => "c5a.4xlarge",
        C5a8xlarge => "c5a.8xlarge",
        C5a12xlarge => "c5a.12xlarge",
        C5a16xlarge => "c5a.16xlarge",
        C5a24xlarge => "c5a.24xlarge",
        C5dLarge => "c5d.large",
        C5dXlarge => "c5d.xlarge",
        C5d2xlarge => "c5d.2xlarge",
        C5d4xlarge => "c5d.4xlarge",
        C5d9xlarge => "c5d.9xlarge",
        C5d12xlarge => "c5d.12xlarge",
        C5d18xlarge => "c5d.18xlarge",
        C5d24xlarge => "c5d.24xlarge",
        C5dMetal => "c5d.metal",
        C5nLarge => "c5n.large",
        C5nXlarge => "c5n.xlarge",
        C5n2xlarge => "c5n.2xlarge",
        C5n4xlarge => "c5n.4xlarge",
        C5n9xlarge => "c5n.9xlarge",
        C5n18xlarge => "c5n.18xlarge",
        Cc14xlarge => "cc1.4xlarge",
        Cc28xlarge => "cc2.8xlarge",
        G22xlarge => "g2.2xlarge",
        G28xlarge => "g2.8xlarge",
        G34xlarge => "g3.4xlarge",
        G38xlarge => "g3.8xlarge",
        G316xlarge => "g3.16xlarge",
        G3sXlarge => "g3s.xlarge",
        G4dnXlarge => "g4dn.xlarge",
        G4dn2xlarge => "g4dn.2xlarge",
        G4dn4xlarge => "g4dn.4xlarge",
        G4dn8xlarge => "g4dn.8xlarge",
        G4dn12xlarge => "g4dn.12xlarge",
        G4dn16xlarge => "g4dn.16xlarge",
        G4dnMetal => "g4dn.metal",
        Cg14xlarge => "cg1.4xlarge",
        P2Xlarge => "p2.xlarge",
        P28xlarge => "p2.8xlarge",
        P216xlarge => "p2.16xlarge",
        P32xlarge => "p3.2xlarge",
        P38xlarge => "p3.8xlarge",
        P316xlarge => "p3.16xlarge",
        P3dn24xlarge => "p3dn.24xlarge",
        D2Xlarge => "d2.xlarge",
        D22xlarge => "d2.2xlarge",
        D24xlarge => "d2.4xlarge",
        D28xlarge => "d2.8xlarge",
        F12xlarge => "f1.2xlarge",
        F14xlarge => "f1.4xlarge",
        F116xlarge => "f1.16xlarge",
        M5Large => "m5.large",
        M5Xlarge => "m5.xlarge",
        M52xlarge => "m5.2xlarge",
        M54xlarge => "m5.4xlarge",
        M58xlarge => "m5.8xlarge",
        M512xlarge => "m5.12xlarge",
        M516xlarge => "m5.16xlarge",
        M524xlarge => "m5.24xlarge",
        M5Metal => "m5.metal",
        M5aLarge => "m5a.large",
        M5aXlarge => "m5a.xlarge",
        M5a2xlarge => "m5a.2xlarge",
        M5a4xlarge => "m5a.4xlarge",
        M5a8xlarge => "m5a.8xlarge",
        M5a12xlarge => "m5a.12xlarge",
        M5a16xlarge => "m5a.16xlarge",
        M5a24xlarge => "m5a.24xlarge",
        M5dLarge => "m5d.large",
        M5dXlarge => "m5d.xlarge",
        M5d2xlarge => "m5d.2xlarge",
        M5d4xlarge => "m5d.4xlarge",
        M5d8xlarge => "m5d.8xlarge",
        M5d12xlarge => "m5d.12xlarge",
        M5d16xlarge => "m5d.16xlarge",
        M5d24xlarge => "m5d.24xlarge",
        M5dMetal => "m5d.metal",
        M5adLarge => "m5ad.large",
        M5adXlarge => "m5ad.xlarge",
        M5ad2xlarge => "m5ad.2xlarge",
        M5ad4xlarge => "m5ad.4xlarge",
        M5ad8xlarge => "m5ad.8xlarge",
        M5ad12xlarge => "m5ad.12xlarge",
        M5ad16xlarge => "m5ad.16xlarge",
        M5ad24xlarge => "m5ad.24xlarge",
        H12xlarge => "h1.2xlarge",
        H14xlarge => "h1.4xlarge",
        H18xlarge => "h1.8xlarge",
        H116xlarge => "h1.16xlarge",
        Z1dLarge => "z1d.large",
        Z1dXlarge => "z1d.xlarge",
        Z1d2xlarge => "z1d.2xlarge",
        Z1d3xlarge => "z1d.3xlarge",
        Z1d6xlarge => "z1d.6xlarge",
        Z1d12xlarge => "z1d.12xlarge",
        Z1dMetal => "z1d.metal",
        U6tb1Metal => "u-6tb1.metal",
        U9tb1Metal => "u-9tb1.metal",
        U12tb1Metal => "u-12tb1.metal",
        U18tb1Metal => "u-18tb1.metal",
        U24tb1Metal => "u-24tb1.metal",
        A1Medium => "a1.medium",
        A1Large => "a1.large",
        A1Xlarge => "a1.xlarge",
        A12xlarge => "a1.2xlarge",
        A14xlarge => "a1.4xlarge",
        A1Metal => "a1.metal",
        M5dnLarge => "m5dn.large",
        M5dnXlarge => "m5dn.xlarge",
        M5dn2xlarge => "m5dn.2xlarge",
        M5dn4xlarge => "m5dn.4xlarge",
        M5dn8xlarge => "m5dn.8xlarge",
        M5dn12xlarge => "m5dn.12xlarge",
        M5dn16xlarge => "m5dn.16xlarge",
        M5dn24xlarge => "m5dn.24xlarge",
        M5nLarge => "m5n.large",
        M5nXlarge => "m5n.xlarge",
        M5n2xlarge => "m5n.2xlarge",
        M5n4xlarge => "m5n.4xlarge",
        M5n8xlarge => "m5n.8xlarge",
        M5n12xlarge => "m5n.12xlarge",
        M5n16xlarge => "m5n.16xlarge",
        M5n24xlarge => "m5n.24xlarge",
        R5dnLarge => "r5dn.large",
        R5dnXlarge => "r5dn.xlarge",
        R5dn2xlarge => "r5dn.2xlarge",
        R5dn4xlarge => "r5dn.4xlarge",
        R5dn8xlarge => "r5dn.8xlarge",
        R5dn12xlarge => "r5dn.12xlarge",
        R5dn16xlarge => "r5dn.16xlarge",
        R5dn24xlarge => "r5dn.24xlarge",
        R5nLarge => "r5n.large",
        R5nXlarge => "r5n.xlarge",
        R5n2xlarge => "r5n.2xlarge",
        R5n4xlarge => "r5n.4xlarge",
        R5n8xlarge => "r5n.8xlarge",
        R5n12xlarge => "r5n.12xlarge",
        R5n16xlarge => "r5n.16xlarge",
        R5n24xlarge => "r5n.24xlarge",
        Inf1Xlarge => "inf1.xlarge",
        Inf12xlarge => "inf1.2xlarge",
        Inf16xlarge => "inf1.6xlarge",
        Inf124xlarge => "inf1.24xlarge",
        M6gMetal => "m6g.metal",
        M6gMedium => "m6g.medium",
        M6gLarge => "m6g.large",
        M6gXlarge => "m6g.xlarge",
        M6g2xlarge => "m6g.2xlarge",
        M6g4xlarge => "m6g.4xlarge",
        M6g8xlarge => "m6g.8xlarge",
        M6g12xlarge => "m6g.12xlarge",
        M6g16xlarge => "m6g.16xlarge",
    }
}

wire_enum! {
    pub enum InstanceStateName {
        Pending => "pending",
        Running => "running",
        ShuttingDown => "shutting-down",
        Terminated => "terminated",
        Stopping => "stopping",
        Stopped => "stopped",
    }
}

wire_enum! {
    pub enum ArchitectureValues {
        I386 => "i386",
        X86_64 => "x86_64",
        Arm64 => "arm64",
    }
}

wire_enum! {
    pub enum PlatformValues {
        Windows => "Windows",
    }
}

wire_enum! {
    pub enum DeviceType {
        Ebs => "ebs",
        InstanceStore => "instance-store",
    }
}

wire_enum! {
    pub enum RootDeviceType {
        Ebs => "ebs",
        InstanceStore => "instance-store",
    }
}

wire_enum! {
    pub enum VirtualizationType {
        Hvm => "hvm",
        Paravirtual => "paravirtual",
    }
}

wire_enum! {
    pub enum HypervisorType {
        Ovm => "ovm",
        Xen => "xen",
    }
}

wire_enum! {
    pub enum InstanceTypeHypervisor {
        Nitro => "nitro",
        Xen => "xen",
    }
}

wire_enum! {
    pub enum InstanceLifecycleType {
        Spot => "spot",
        Scheduled => "scheduled",
    }
}

wire_enum! {
    /// What happens when an instance shuts itself down.
    pub enum ShutdownBehavior {
        Stop => "stop",
        Terminate => "terminate",
    }
}

wire_enum! {
    pub enum Tenancy {
        Default => "default",
        Dedicated => "dedicated",
        Host => "host",
    }
}

wire_enum! {
    pub enum MonitoringState {
        Disabled => "disabled",
        Disabling => "disabling",
        Enabled => "enabled",
        Pending => "pending",
    }
}

wire_enum! {
    pub enum ProductCodeValues {
        Devpay => "devpay",
        Marketplace => "marketplace",
    }
}

wire_enum! {
    /// Taggable resource kinds (used by tag specifications).
    pub enum ResourceType {
        ClientVpnEndpoint => "client-vpn-endpoint",
        CustomerGateway => "customer-gateway",
        DedicatedHost => "dedicated-host",
        DhcpOptions => "dhcp-options",
        ElasticIp => "elastic-ip",
        Fleet => "fleet",
        FpgaImage => "fpga-image",
        HostReservation => "host-reservation",
        Image => "image",
        Instance => "instance",
        InternetGateway => "internet-gateway",
        KeyPair => "key-pair",
        LaunchTemplate => "launch-template",
        Natgateway => "natgateway",
        NetworkAcl => "network-acl",
        NetworkInterface => "network-interface",
        PlacementGroup => "placement-group",
        ReservedInstances => "reserved-instances",
        RouteTable => "route-table",
        SecurityGroup => "security-group",
        Snapshot => "snapshot",
        SpotFleetRequest => "spot-fleet-request",
        SpotInstancesRequest => "spot-instances-request",
        Subnet => "subnet",
        TransitGateway => "transit-gateway",
        Volume => "volume",
        Vpc => "vpc",
        VpcFlowLog => "vpc-flow-log",
        VpcPeeringConnection => "vpc-peering-connection",
        VpnConnection => "vpn-connection",
        VpnGateway => "vpn-gateway",
    }
}

wire_enum! {
    pub enum VolumeType {
        Standard => "standard",
        Io1 => "io1",
        Gp2 => "gp2",
        Sc1 => "sc1",
        St1 => "st1",
    }
}

wire_enum! {
    pub enum VolumeState {
        Creating => "creating",
        Available => "available",
        InUse => "in-use",
        Deleting => "deleting",
        Deleted => "deleted",
        Error => "error",
    }
}

wire_enum! {
    pub enum VolumeAttachmentState {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
        Busy => "busy",
    }
}

wire_enum! {
    pub enum AttachmentStatus {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
    }
}

wire_enum! {
    pub enum ImageState {
        Pending => "pending",
        Available => "available",
        Invalid => "invalid",
        Deregistered => "deregistered",
        Transient => "transient",
        Failed => "failed",
        Error => "error",
    }
}

wire_enum! {
    pub enum ImageTypeValues {
        Machine => "machine",
        Kernel => "kernel",
        Ramdisk => "ramdisk",
    }
}

wire_enum! {
    /// Operating system a capacity reservation is sized for.
    pub enum CapacityReservationInstancePlatform {
        LinuxUnix => "Linux/UNIX",
        RedHatEnterpriseLinux => "Red Hat Enterprise Linux",
        SuseLinux => "SUSE Linux",
        Windows => "Windows",
        WindowsWithSqlServer => "Windows with SQL Server",
        WindowsWithSqlServerEnterprise => "Windows with SQL Server Enterprise",
        WindowsWithSqlServerStandard => "Windows with SQL Server Standard",
        WindowsWithSqlServerWeb => "Windows with SQL Server Web",
        LinuxWithSqlServerStandard => "Linux with SQL Server Standard",
        LinuxWithSqlServerWeb => "Linux with SQL Server Web",
        LinuxWithSqlServerEnterprise => "Linux with SQL Server Enterprise",
    }
}

wire_enum! {
    pub enum CapacityReservationTenancy {
        Default => "default",
        Dedicated => "dedicated",
    }
}

wire_enum! {
    pub enum CapacityReservationState {
        Active => "active",
        Expired => "expired",
        Cancelled => "cancelled",
        Pending => "pending",
        Failed => "failed",
    }
}

wire_enum! {
    pub enum EndDateType {
        Unlimited => "unlimited",
        Limited => "limited",
    }
}

wire_enum! {
    pub enum InstanceMatchCriteria {
        Open => "open",
        Targeted => "targeted",
    }
}

wire_enum! {
    pub enum CapacityReservationPreference {
        Open => "open",
        None => "none",
    }
}

wire_enum! {
    pub enum FlowLogsResourceType {
        Vpc => "VPC",
        Subnet => "Subnet",
        NetworkInterface => "NetworkInterface",
    }
}

wire_enum! {
    pub enum TrafficType {
        Accept => "ACCEPT",
        Reject => "REJECT",
        All => "ALL",
    }
}

wire_enum! {
    pub enum LogDestinationType {
        CloudWatchLogs => "cloud-watch-logs",
        S3 => "s3",
    }
}

wire_enum! {
    pub enum UsageClassType {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

wire_enum! {
    pub enum MarketType {
        Spot => "spot",
    }
}

wire_enum! {
    pub enum SpotInstanceType {
        OneTime => "one-time",
        Persistent => "persistent",
    }
}

wire_enum! {
    pub enum SpotInstanceState {
        Open => "open",
        Active => "active",
        Closed => "closed",
        Cancelled => "cancelled",
        Failed => "failed",
    }
}

wire_enum! {
    pub enum InstanceInterruptionBehavior {
        Hibernate => "hibernate",
        Stop => "stop",
        Terminate => "terminate",
    }
}

wire_enum! {
    pub enum HttpTokensState {
        Optional => "optional",
        Required => "required",
    }
}

wire_enum! {
    pub enum InstanceMetadataEndpointState {
        Disabled => "disabled",
        Enabled => "enabled",
    }
}

wire_enum! {
    pub enum InstanceMetadataOptionsState {
        Pending => "pending",
        Applied => "applied",
    }
}

wire_enum! {
    pub enum NetworkInterfaceStatus {
        Available => "available",
        Associated => "associated",
        Attaching => "attaching",
        InUse => "in-use",
        Detaching => "detaching",
    }
}

wire_enum! {
    pub enum NetworkInterfaceType {
        Interface => "interface",
        NatGateway => "natGateway",
        Efa => "efa",
    }
}

wire_enum! {
    pub enum OfferingClassType {
        Standard => "standard",
        Convertible => "convertible",
    }
}

wire_enum! {
    pub enum OfferingTypeValues {
        HeavyUtilization => "Heavy Utilization",
        MediumUtilization => "Medium Utilization",
        LightUtilization => "Light Utilization",
        NoUpfront => "No Upfront",
        PartialUpfront => "Partial Upfront",
        AllUpfront => "All Upfront",
    }
}

wire_enum! {
    /// Reserved-instance product description.
    pub enum RIProductDescription {
        LinuxUnix => "Linux/UNIX",
        LinuxUnixAmazonVpc => "Linux/UNIX (Amazon VPC)",
        Windows => "Windows",
        WindowsAmazonVpc => "Windows (Amazon VPC)",
    }
}

wire_enum! {
    pub enum CurrencyCodeValues {
        Usd => "USD",
    }
}

wire_enum! {
    pub enum Scope {
        AvailabilityZone => "Availability Zone",
        Region => "Region",
    }
}

wire_enum! {
    pub enum RouteState {
        Active => "active",
        Blackhole => "blackhole",
    }
}

wire_enum! {
    pub enum RouteOrigin {
        CreateRouteTable => "CreateRouteTable",
        CreateRoute => "CreateRoute",
        EnableVgwRoutePropagation => "EnableVgwRoutePropagation",
    }
}

wire_enum! {
    pub enum ReservedInstanceState {
        PaymentPending => "payment-pending",
        Active => "active",
        PaymentFailed => "payment-failed",
        Retired => "retired",
        Queued => "queued",
        QueuedDeleted => "queued-deleted",
    }
}

wire_enum! {
    pub enum FleetActivityStatus {
        Error => "error",
        PendingFulfillment => "pending_fulfillment",
        PendingTermination => "pending_termination",
        Fulfilled => "fulfilled",
    }
}

wire_enum! {
    pub enum FleetStateCode {
        Submitted => "submitted",
        Active => "active",
        Deleted => "deleted",
        Failed => "failed",
        DeletedRunning => "deleted_running",
        DeletedTerminating => "deleted_terminating",
        Modifying => "modifying",
    }
}

wire_enum! {
    /// Fleet-level policy (hyphenated spelling).
    pub enum FleetExcessCapacityTerminationPolicy {
        NoTermination => "no-termination",
        Termination => "termination",
    }
}

wire_enum! {
    /// Spot-fleet policy (camel-case spelling).
    pub enum ExcessCapacityTerminationPolicy {
        NoTermination => "noTermination",
        Default => "default",
    }
}

wire_enum! {
    pub enum FleetType {
        Request => "request",
        Maintain => "maintain",
        Instant => "instant",
    }
}

wire_enum! {
    pub enum DefaultTargetCapacityType {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

wire_enum! {
    /// Whether a fleet instance or error came from the spot or on-demand pool.
    pub enum InstanceLifecycle {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

wire_enum! {
    /// Spot-fleet allocation strategy.
    pub enum AllocationStrategy {
        LowestPrice => "lowestPrice",
        Diversified => "diversified",
        CapacityOptimized => "capacityOptimized",
    }
}

wire_enum! {
    pub enum OnDemandAllocationStrategy {
        LowestPrice => "lowestPrice",
        Prioritized => "prioritized",
    }
}

wire_enum! {
    /// EC2 Fleet spot allocation strategy.
    pub enum SpotAllocationStrategy {
        LowestPrice => "lowest-price",
        Diversified => "diversified",
        CapacityOptimized => "capacity-optimized",
    }
}

wire_enum! {
    pub enum FleetOnDemandAllocationStrategy {
        LowestPrice => "lowest-price",
        Prioritized => "prioritized",
    }
}

wire_enum! {
    pub enum DiskType {
        Hdd => "hdd",
        Ssd => "ssd",
    }
}

wire_enum! {
    pub enum EbsOptimizedSupport {
        Unsupported => "unsupported",
        Supported => "supported",
        Default => "default",
    }
}

wire_enum! {
    pub enum EbsEncryptionSupport {
        Unsupported => "unsupported",
        Supported => "supported",
    }
}

wire_enum! {
    pub enum EnaSupport {
        Unsupported => "unsupported",
        Supported => "supported",
        Required => "required",
    }
}

wire_enum! {
    pub enum PlacementGroupStrategy {
        Cluster => "cluster",
        Partition => "partition",
        Spread => "spread",
    }
}

wire_enum! {
    pub enum LaunchTemplateInstanceMetadataOptionsState {
        Pending => "pending",
        Applied => "applied",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texts_with_spaces_and_slashes_are_canonical() {
        assert_eq!(
            CapacityReservationInstancePlatform::from("Linux/UNIX"),
            CapacityReservationInstancePlatform::LinuxUnix
        );
        assert_eq!(Scope::AvailabilityZone.as_str(), "Availability Zone");
        assert_eq!(
            RIProductDescription::from("Windows (Amazon VPC)"),
            RIProductDescription::WindowsAmazonVpc
        );
    }

    #[test]
    fn same_text_in_two_enumerations_stays_distinct_types() {
        assert_eq!(DeviceType::Ebs.as_str(), RootDeviceType::Ebs.as_str());
        assert_eq!(
            Tenancy::from("dedicated").as_str(),
            CapacityReservationTenancy::Dedicated.as_str()
        );
    }

    #[test]
    fn unlisted_instance_types_round_trip() {
        let t = InstanceType::from("z9.mega");
        assert!(!t.is_known());
        assert_eq!(t.to_string(), "z9.mega");
        assert!(InstanceType::try_parse("z9.mega").is_err());
        assert_eq!(InstanceType::try_parse("t2.micro"), Ok(InstanceType::T2Micro));
    }

    #[test]
    fn every_generation_of_instance_type_is_known() {
        for text in ["m5.8xlarge", "c5.12xlarge", "r5.metal", "t3a.xlarge", "m5a.large", "u-24tb1.metal", "m6g.16xlarge"] {
            let parsed = InstanceType::try_parse(text);
            assert!(parsed.is_ok(), "{text} should be known");
            assert_eq!(parsed.map(|t| t.to_string()).ok().as_deref(), Some(text));
        }
        assert_eq!(InstanceType::U24tb1Metal.as_str(), "u-24tb1.metal");
        assert_eq!(InstanceType::values().len(), 289);
    }

    #[test]
    fn preference_none_is_a_regular_variant() {
        assert_eq!(
            CapacityReservationPreference::from("none"),
            CapacityReservationPreference::None
        );
        assert!(CapacityReservationPreference::None.is_known());
    }

    #[test]
    fn value_lists_follow_declaration_order() {
        assert_eq!(
            InstanceStateName::values(),
            &["pending", "running", "shutting-down", "terminated", "stopping", "stopped"]
        );
        assert_eq!(TrafficType::values(), &["ACCEPT", "REJECT", "ALL"]);
    }
}
