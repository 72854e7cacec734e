//! One module per API operation, each holding the request and result shapes.
//!
//! List operations that page their results implement
//! [`PaginatedRequest`](nimbus_core::PaginatedRequest) /
//! [`PaginatedResponse`](nimbus_core::PaginatedResponse); mutating operations
//! that accept a `ClientToken` implement
//! [`IdempotentRequest`](nimbus_core::IdempotentRequest) on their builders.

pub mod create_capacity_reservation;
pub mod create_flow_logs;
pub mod create_volume;
pub mod describe_capacity_reservations;
pub mod describe_images;
pub mod describe_instance_types;
pub mod describe_instances;
pub mod describe_network_interfaces;
pub mod describe_reserved_instances_offerings;
pub mod describe_route_tables;
pub mod describe_security_groups;
pub mod describe_spot_instance_requests;
pub mod run_instances;

pub use create_capacity_reservation::*;
pub use create_flow_logs::*;
pub use create_volume::*;
pub use describe_capacity_reservations::*;
pub use describe_images::*;
pub use describe_instance_types::*;
pub use describe_instances::*;
pub use describe_network_interfaces::*;
pub use describe_reserved_instances_offerings::*;
pub use describe_route_tables::*;
pub use describe_security_groups::*;
pub use describe_spot_instance_requests::*;
pub use run_instances::*;
