use chrono::{DateTime, Utc};
use nimbus_core::shape;

use super::Tag;
use crate::enums::{VolumeAttachmentState, VolumeState, VolumeType};

shape! {
    pub struct VolumeAttachment => VolumeAttachmentBuilder {
        copy attach_time, set_attach_time: DateTime<Utc> => "AttachTime";
        string device, set_device: String => "Device";
        string instance_id, set_instance_id: String => "InstanceId";
        value state, set_state: VolumeAttachmentState => "State";
        string volume_id, set_volume_id: String => "VolumeId";
        copy delete_on_termination, set_delete_on_termination: bool => "DeleteOnTermination";
    }
}

shape! {
    /// A block-storage volume.
    pub struct Volume => VolumeBuilder {
        list attachments, set_attachments, extend_attachments: VolumeAttachment => "Attachments";
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        copy create_time, set_create_time: DateTime<Utc> => "CreateTime";
        copy encrypted, set_encrypted: bool => "Encrypted";
        string kms_key_id, set_kms_key_id: String => "KmsKeyId";
        string outpost_arn, set_outpost_arn: String => "OutpostArn";
        /// Size in GiB.
        copy size, set_size: i32 => "Size";
        string snapshot_id, set_snapshot_id: String => "SnapshotId";
        value state, set_state: VolumeState => "State";
        string volume_id, set_volume_id: String => "VolumeId";
        copy iops, set_iops: i32 => "Iops";
        list tags, set_tags, extend_tags: Tag => "Tags";
        value volume_type, set_volume_type: VolumeType => "VolumeType";
        copy fast_restored, set_fast_restored: bool => "FastRestored";
        copy multi_attach_enabled, set_multi_attach_enabled: bool => "MultiAttachEnabled";
    }
}
