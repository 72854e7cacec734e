//! Nested data types shared by request and result shapes.

mod capacity;
mod common;
mod elastic;
mod fleet;
mod image;
mod instance;
mod instance_type;
mod launch;
mod launch_template;
mod network;
mod reserved;
mod spot;
mod spot_fleet;
mod volume;
mod vpn;

pub use capacity::*;
pub use common::*;
pub use elastic::*;
pub use fleet::*;
pub use image::*;
pub use instance::*;
pub use instance_type::*;
pub use launch::*;
pub use launch_template::*;
pub use network::*;
pub use reserved::*;
pub use spot::*;
pub use spot_fleet::*;
pub use volume::*;
pub use vpn::*;
