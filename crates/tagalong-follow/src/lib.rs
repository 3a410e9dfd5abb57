//! Tagalong Follow - The pieces around the view cone solver
//!
//! Provides goal smoothing, the head movement history and the per-frame
//! follow loop that ties them to [`tagalong_solver::RadialView`].

pub mod config;
mod error;
mod follower;
mod history;
mod interpolator;

pub use config::FollowConfig;
pub use error::ConfigError;
pub use follower::Follower;
pub use history::{HeadMovementHistory, MovementHistoryConfig};
pub use interpolator::{Interpolator, InterpolatorConfig, SmoothingMode};
