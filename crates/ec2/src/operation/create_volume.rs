use nimbus_core::shape;

use crate::enums::VolumeType;
use crate::types::{TagSpecification, Volume};

shape! {
    pub struct CreateVolumeRequest => CreateVolumeRequestBuilder {
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        copy encrypted, set_encrypted: bool => "Encrypted";
        /// Provisioned IOPS (`io1` volumes only).
        copy iops, set_iops: i32 => "Iops";
        string kms_key_id, set_kms_key_id: String => "KmsKeyId";
        string outpost_arn, set_outpost_arn: String => "OutpostArn";
        /// Size in GiB.
        copy size, set_size: i32 => "Size";
        string snapshot_id, set_snapshot_id: String => "SnapshotId";
        value volume_type, set_volume_type: VolumeType => "VolumeType";
        copy dry_run, set_dry_run: bool => "DryRun";
        list tag_specifications, set_tag_specifications, extend_tag_specifications: TagSpecification => "TagSpecifications";
        copy multi_attach_enabled, set_multi_attach_enabled: bool => "MultiAttachEnabled";
    }
}

shape! {
    pub struct CreateVolumeResult => CreateVolumeResultBuilder {
        value volume, set_volume: Volume => "Volume";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_type_accepts_enum_or_text() {
        let a = CreateVolumeRequest::builder()
            .availability_zone("us-east-1a")
            .size(100)
            .volume_type(VolumeType::Gp2)
            .build();
        let b = CreateVolumeRequest::builder()
            .availability_zone("us-east-1a")
            .size(100)
            .volume_type("gp2")
            .build();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }
}
