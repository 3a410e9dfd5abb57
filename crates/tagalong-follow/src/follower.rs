//! Per-frame follow loop
//!
//! Glues a [`RadialView`] to an [`Interpolator`]: each frame the element's
//! working position goes into the solver and the solver's goal goes back
//! into the interpolator.

use glam::Vec3;
use tagalong_core::Transform;
use tagalong_solver::{Goal, RadialView, TrackedTarget};
use tracing::debug;

use crate::config::FollowConfig;
use crate::history::HeadMovementHistory;
use crate::interpolator::Interpolator;

/// An element that tags along with a tracked target
#[derive(Debug, Clone)]
pub struct Follower {
    pub view: RadialView,
    pub interpolator: Interpolator,
    pub history: HeadMovementHistory,
    /// Goal computed by the most recent update
    last_goal: Option<Goal>,
}

impl Follower {
    pub fn new(view: RadialView, interpolator: Interpolator, history: HeadMovementHistory) -> Self {
        Self {
            view,
            interpolator,
            history,
            last_goal: None,
        }
    }

    pub fn from_config(config: &FollowConfig) -> Self {
        Self::new(
            RadialView::new(config.solver.clone()),
            Interpolator::new(config.smoothing.clone()),
            HeadMovementHistory::new(config.history.clone()),
        )
    }

    /// Place the element before the first update
    pub fn place(&mut self, position: Vec3) {
        self.interpolator.teleport(Transform::from_position(position));
        self.last_goal = None;
    }

    pub fn last_goal(&self) -> Option<Goal> {
        self.last_goal
    }

    /// Working pose of the element
    pub fn transform(&self) -> Transform {
        self.interpolator.transform()
    }

    /// Run one frame and return the element's new working pose.
    ///
    /// The first update snaps straight to the goal.
    pub fn update(&mut self, target: Option<&TrackedTarget>, dt: f32) -> Transform {
        if let Some(head) = target.filter(|t| t.is_head()) {
            self.history.record(head.transform.position);
        }

        let current = self.interpolator.position();
        let goal = self.view.solve(current, target, Some(&self.history));
        self.interpolator.set_goal(goal);

        if self.last_goal.is_none() {
            debug!(position = ?goal.position, "Follower snapped to first goal");
            self.interpolator.snap_to_goal();
        }
        self.last_goal = Some(goal);

        self.interpolator.update(dt)
    }
}

impl Default for Follower {
    fn default() -> Self {
        Self::from_config(&FollowConfig::default())
    }
}
