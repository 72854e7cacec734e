use nimbus_core::shape;

use crate::types::{Filter, Image};

shape! {
    /// Describes images visible to the caller.
    pub struct DescribeImagesRequest => DescribeImagesRequestBuilder {
        /// Accounts with launch permission (`self`, `all` or an account ID).
        list executable_users, set_executable_users, extend_executable_users: String => "ExecutableUsers";
        list filters, set_filters, extend_filters: Filter => "Filters";
        list image_ids, set_image_ids, extend_image_ids: String => "ImageIds";
        /// Owner account IDs or aliases (`self`, `amazon`, `aws-marketplace`).
        list owners, set_owners, extend_owners: String => "Owners";
        copy dry_run, set_dry_run: bool => "DryRun";
    }
}

shape! {
    pub struct DescribeImagesResult => DescribeImagesResultBuilder {
        list images, set_images, extend_images: Image => "Images";
    }
}
