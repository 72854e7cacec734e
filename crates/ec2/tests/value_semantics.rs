use std::collections::HashSet;

use nimbus_ec2::enums::{InstanceStateName, InstanceType, VolumeType};
use nimbus_ec2::operation::{
    CreateVolumeRequest, DescribeImagesRequest, DescribeInstancesRequest,
    DescribeSecurityGroupsRequest, RunInstancesRequest,
};
use nimbus_ec2::types::{Filter, Instance, InstanceState, Tag};
use nimbus_ec2::{ErasedShape, ValueObject};

#[test]
fn fresh_records_have_every_field_absent() {
    let request = DescribeImagesRequest::default();
    assert_eq!(request.executable_users(), None);
    assert_eq!(request.filters(), None);
    assert_eq!(request.image_ids(), None);
    assert_eq!(request.owners(), None);
    assert_eq!(request.dry_run(), None);
    assert_eq!(request.to_string(), "{}");

    let instance = Instance::default();
    assert_eq!(instance.instance_id(), None);
    assert_eq!(instance.launch_time(), None);
    assert_eq!(instance.tags(), None);
    assert!(instance.is_empty());
}

#[test]
fn set_then_get_returns_the_value() {
    let request = CreateVolumeRequest::builder()
        .availability_zone("eu-west-1b")
        .encrypted(true)
        .size(8)
        .volume_type(VolumeType::Io1)
        .iops(3000)
        .build();

    assert_eq!(request.availability_zone(), Some("eu-west-1b"));
    assert_eq!(request.encrypted(), Some(true));
    assert_eq!(request.size(), Some(8));
    assert_eq!(request.volume_type(), Some(&VolumeType::Io1));
    assert_eq!(request.iops(), Some(3000));
}

#[test]
fn stored_lists_do_not_track_the_caller_source() {
    let mut ids = vec!["i-1".to_string(), "i-2".to_string()];
    let request = DescribeInstancesRequest::builder()
        .set_instance_ids(Some(ids.clone()))
        .build();

    ids.push("i-3".to_string());
    ids[0].clear();
    assert_eq!(request.instance_ids().unwrap(), ["i-1", "i-2"]);
}

#[test]
fn element_setter_appends() {
    let request = DescribeImagesRequest::builder()
        .owners("self")
        .owners("amazon")
        .build();
    assert_eq!(request.owners().unwrap(), ["self", "amazon"]);

    let extended = request.to_builder().owners("aws-marketplace").build();
    assert_eq!(extended.owners().unwrap(), ["self", "amazon", "aws-marketplace"]);
    assert_eq!(request.owners().map(<[_]>::len), Some(2));
}

#[test]
fn enum_and_canonical_text_are_interchangeable() {
    let by_enum = RunInstancesRequest::builder()
        .instance_type(InstanceType::T2Micro)
        .build();
    let by_text = RunInstancesRequest::builder().instance_type("t2.micro").build();
    assert_eq!(by_enum, by_text);
    assert_eq!(by_enum.structural_hash(), by_text.structural_hash());
    assert_eq!(by_enum.to_string(), by_text.to_string());

    let state = InstanceState::builder().name("shutting-down").build();
    assert_eq!(state.name(), Some(&InstanceStateName::ShuttingDown));
}

#[test]
fn equal_records_hash_equally() {
    let build = || {
        Instance::builder()
            .instance_id("i-1")
            .tags(Tag::new("a", "1"))
            .tags(Tag::new("b", "2"))
            .build()
    };
    let (a, b) = (build(), build());
    assert_eq!(a, b);
    assert_eq!(a.structural_hash(), b.structural_hash());

    let set: HashSet<_> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn tag_order_is_significant() {
    let ab = Instance::builder().tags(Tag::new("a", "1")).tags(Tag::new("b", "2")).build();
    let ba = Instance::builder().tags(Tag::new("b", "2")).tags(Tag::new("a", "1")).build();
    assert_ne!(ab, ba);
}

#[test]
fn records_of_different_shapes_never_compare_equal() {
    let images = DescribeImagesRequest::builder().dry_run(true).build();
    let groups = DescribeSecurityGroupsRequest::builder().dry_run(true).build();
    assert_eq!(images.to_string(), groups.to_string());
    assert!(!images.dyn_eq(&groups));
    assert!(!DescribeImagesRequest::default().dyn_eq(&DescribeSecurityGroupsRequest::default()));

    let erased: Vec<Box<dyn ErasedShape>> = vec![Box::new(images.clone()), Box::new(groups)];
    assert!(erased[0].dyn_eq(&images));
    assert!(!erased[1].dyn_eq(&images));
    assert_eq!(erased[1].shape_name(), "DescribeSecurityGroupsRequest");
}

#[test]
fn absent_fields_never_render_but_empty_ones_do() {
    let request = DescribeImagesRequest::builder()
        .set_owners(Some(Vec::new()))
        .filters(Filter::builder().name("").build())
        .build();
    let rendered = request.to_string();
    assert_eq!(rendered, "{Filters: [{Name: }],Owners: []}");
    assert!(!rendered.contains("ImageIds"));
    assert!(!rendered.contains("DryRun"));
    assert!(!rendered.contains("null"));
}

#[test]
fn chained_appends_equal_the_replacing_form() {
    let appended = DescribeImagesRequest::builder()
        .image_ids("ami-1")
        .image_ids("ami-2")
        .image_ids("ami-3")
        .dry_run(true)
        .build();

    let replaced = DescribeImagesRequest::builder()
        .set_image_ids(Some(vec!["ami-1".into(), "ami-2".into(), "ami-3".into()]))
        .dry_run(true)
        .build();

    assert_eq!(appended, replaced);
    assert_eq!(appended.to_string(), replaced.to_string());
    assert_eq!(appended.to_string(), "{ImageIds: [ami-1, ami-2, ami-3],DryRun: true}");
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn instance_type() -> impl Strategy<Value = String> {
        prop_oneof![
            proptest::sample::select(InstanceType::values()).prop_map(str::to_string),
            "[a-z][a-z0-9]{0,3}\\.[a-z0-9]{1,8}",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        /// Property: text and parsed enum store the same value.
        #[test]
        fn text_and_enum_forms_agree(text in instance_type()) {
            let parsed = InstanceType::from(text.as_str());
            let by_text = RunInstancesRequest::builder().instance_type(text.as_str()).build();
            let by_enum = RunInstancesRequest::builder().instance_type(parsed.clone()).build();

            prop_assert_eq!(&by_text, &by_enum);
            prop_assert_eq!(parsed.as_str(), text.as_str());
            prop_assert_eq!(parsed.is_known(), InstanceType::values().contains(&text.as_str()));
        }

        /// Property: building the same values in any setter order yields equal records.
        #[test]
        fn setter_order_does_not_matter(
            ids in proptest::collection::vec("ami-[0-9a-f]{4}", 0..5),
            dry_run in proptest::option::of(any::<bool>()),
        ) {
            let a = DescribeImagesRequest::builder()
                .set_image_ids(Some(ids.clone()))
                .set_dry_run(dry_run)
                .build();
            let b = DescribeImagesRequest::builder()
                .set_dry_run(dry_run)
                .extend_image_ids(ids)
                .build();

            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.structural_hash(), b.structural_hash());
            prop_assert_eq!(a.to_string(), b.to_string());
        }
    }
}
