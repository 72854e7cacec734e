//! `nimbus-core` — value-object foundation for the compute API model.
//!
//! This crate contains the record contract and the code-generation templates the
//! concrete shapes are declared with. It performs no I/O.

pub mod error;
pub mod idempotency;
pub mod number;
pub mod paginate;
pub mod render;
pub mod shape;
pub mod value_object;
pub mod wire_enum;

pub use error::{ModelError, ModelResult, PaginationError};
pub use idempotency::IdempotentRequest;
pub use number::Float64;
pub use paginate::{PaginatedRequest, PaginatedResponse, Paginator, PaginatorConfig};
pub use value_object::{ErasedShape, ValueObject};
pub use wire_enum::UnknownValue;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use tracing;
}
