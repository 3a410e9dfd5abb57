//! Tagalong Solver - View cone constraint
//!
//! Computes, once per frame, where a followed element should be and how it
//! should be oriented so that it stays inside an angular cone and a distance
//! band around a moving reference frame (usually the viewer's head).
//!
//! The solver only produces goals. Smoothing the element toward those goals
//! over time is the caller's job.

mod config;
mod constraint;
mod frame;
mod orientation;
mod view;

pub use config::{ConfigWarning, RadialViewConfig, ReferenceDirectionMode};
pub use constraint::{clamp_position, DEGENERATE_DIRECTION};
pub use frame::{MovementHistory, ReferenceFrame, TrackedTarget, TrackingSource};
pub use orientation::goal_orientation;
pub use view::{update, Goal, RadialView};
