use nimbus_core::shape;

shape! {
    /// Permitted phase 1 encryption algorithm (for example `AES256`).
    pub struct Phase1EncryptionAlgorithmsRequestListValue => Phase1EncryptionAlgorithmsRequestListValueBuilder {
        string value, set_value: String => "Value";
    }
}

shape! {
    pub struct Phase2EncryptionAlgorithmsRequestListValue => Phase2EncryptionAlgorithmsRequestListValueBuilder {
        string value, set_value: String => "Value";
    }
}

shape! {
    /// Permitted phase 1 integrity algorithm (for example `SHA2-256`).
    pub struct Phase1IntegrityAlgorithmsRequestListValue => Phase1IntegrityAlgorithmsRequestListValueBuilder {
        string value, set_value: String => "Value";
    }
}

shape! {
    pub struct Phase2IntegrityAlgorithmsRequestListValue => Phase2IntegrityAlgorithmsRequestListValueBuilder {
        string value, set_value: String => "Value";
    }
}

shape! {
    pub struct Phase1DHGroupNumbersRequestListValue => Phase1DHGroupNumbersRequestListValueBuilder {
        copy value, set_value: i32 => "Value";
    }
}

shape! {
    pub struct Phase2DHGroupNumbersRequestListValue => Phase2DHGroupNumbersRequestListValueBuilder {
        copy value, set_value: i32 => "Value";
    }
}

shape! {
    /// Permitted IKE version (`ikev1` or `ikev2`).
    pub struct IKEVersionsRequestListValue => IKEVersionsRequestListValueBuilder {
        string value, set_value: String => "Value";
    }
}

shape! {
    /// Options for one tunnel of a VPN connection. Every field is optional; the
    /// service applies its defaults to the ones left absent.
    pub struct VpnTunnelOptionsSpecification => VpnTunnelOptionsSpecificationBuilder {
        /// A /30 in 169.254.0.0/16.
        string tunnel_inside_cidr, set_tunnel_inside_cidr: String => "TunnelInsideCidr";
        string pre_shared_key, set_pre_shared_key: String => "PreSharedKey";
        /// Between 900 and 28,800.
        copy phase1_lifetime_seconds, set_phase1_lifetime_seconds: i32 => "Phase1LifetimeSeconds";
        /// Between 900 and 3,600, below the phase 1 lifetime.
        copy phase2_lifetime_seconds, set_phase2_lifetime_seconds: i32 => "Phase2LifetimeSeconds";
        copy rekey_margin_time_seconds, set_rekey_margin_time_seconds: i32 => "RekeyMarginTimeSeconds";
        copy rekey_fuzz_percentage, set_rekey_fuzz_percentage: i32 => "RekeyFuzzPercentage";
        copy replay_window_size, set_replay_window_size: i32 => "ReplayWindowSize";
        copy dpd_timeout_seconds, set_dpd_timeout_seconds: i32 => "DPDTimeoutSeconds";
        list phase1_encryption_algorithms, set_phase1_encryption_algorithms, extend_phase1_encryption_algorithms: Phase1EncryptionAlgorithmsRequestListValue => "Phase1EncryptionAlgorithms";
        list phase2_encryption_algorithms, set_phase2_encryption_algorithms, extend_phase2_encryption_algorithms: Phase2EncryptionAlgorithmsRequestListValue => "Phase2EncryptionAlgorithms";
        list phase1_integrity_algorithms, set_phase1_integrity_algorithms, extend_phase1_integrity_algorithms: Phase1IntegrityAlgorithmsRequestListValue => "Phase1IntegrityAlgorithms";
        list phase2_integrity_algorithms, set_phase2_integrity_algorithms, extend_phase2_integrity_algorithms: Phase2IntegrityAlgorithmsRequestListValue => "Phase2IntegrityAlgorithms";
        list phase1_dh_group_numbers, set_phase1_dh_group_numbers, extend_phase1_dh_group_numbers: Phase1DHGroupNumbersRequestListValue => "Phase1DHGroupNumbers";
        list phase2_dh_group_numbers, set_phase2_dh_group_numbers, extend_phase2_dh_group_numbers: Phase2DHGroupNumbersRequestListValue => "Phase2DHGroupNumbers";
        list ike_versions, set_ike_versions, extend_ike_versions: IKEVersionsRequestListValue => "IKEVersions";
    }
}
