//! `nimbus-ec2` — request, result and data shapes of the compute API.
//!
//! Every record is an immutable value built through its builder:
//!
//! ```ignore
//! use nimbus_ec2::operation::DescribeImagesRequest;
//!
//! let request = DescribeImagesRequest::builder()
//!     .owners("self")
//!     .image_ids("ami-0abc")
//!     .dry_run(true)
//!     .build();
//! assert_eq!(request.to_string(), "{ImageIds: [ami-0abc],Owners: [self],DryRun: true}");
//! ```
//!
//! Transport, signing and retries are out of scope: records serialize with
//! `serde` using the service's member names and are otherwise plain data.

pub mod enums;
pub mod operation;
pub mod types;

pub use nimbus_core::{
    ErasedShape, Float64, IdempotentRequest, ModelError, ModelResult, PaginatedRequest,
    PaginatedResponse, PaginationError, Paginator, PaginatorConfig, ValueObject,
};
