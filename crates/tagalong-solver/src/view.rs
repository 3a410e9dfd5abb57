//! Per-frame entry point

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::RadialViewConfig;
use crate::constraint::clamp_position;
use crate::frame::{MovementHistory, ReferenceFrame, TrackedTarget};
use crate::orientation::goal_orientation;

/// Goal pose handed to the smoothing layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub position: Vec3,
    /// May be non-unit in gravity-aligned mode
    pub orientation: Quat,
}

/// View cone constraint with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct RadialView {
    pub config: RadialViewConfig,
}

impl RadialView {
    pub fn new(config: RadialViewConfig) -> Self {
        Self { config }
    }

    /// Compute this frame's goal from the element's current working position.
    ///
    /// Pure: identical inputs always give identical goals.
    pub fn solve(
        &self,
        current: Vec3,
        target: Option<&TrackedTarget>,
        history: Option<&dyn MovementHistory>,
    ) -> Goal {
        update(current, target, history, &self.config)
    }

    /// Resolve the reference frame this configuration would use
    pub fn reference_frame(
        &self,
        target: Option<&TrackedTarget>,
        history: Option<&dyn MovementHistory>,
    ) -> ReferenceFrame {
        ReferenceFrame::resolve(self.config.reference_direction_mode, target, history)
    }
}

/// Resolve the frame, clamp the position and orient the element.
pub fn update(
    current: Vec3,
    target: Option<&TrackedTarget>,
    history: Option<&dyn MovementHistory>,
    config: &RadialViewConfig,
) -> Goal {
    let frame = ReferenceFrame::resolve(config.reference_direction_mode, target, history);
    let position = clamp_position(current, &frame, config);
    let orientation = goal_orientation(position, &frame, target, config);

    Goal {
        position,
        orientation,
    }
}
