//! Tagalong Core - Math primitives shared by the Tagalong crates
//!
//! This crate provides the foundational types used throughout Tagalong:
//! - Mathematical primitives (re-exported from glam)
//! - Transform for tracked targets and followers
//! - Vector helpers with defined behavior on degenerate input
//! - Frame clock for per-frame delta time

pub mod math;
pub mod time;
pub mod types;

pub use glam::{Quat, Vec3};
pub use math::{angle_degrees, clamp_band, look_rotation, WORLD_FORWARD, WORLD_UP};
pub use time::{FrameClock, FrameClockConfig};
pub use types::Transform;
