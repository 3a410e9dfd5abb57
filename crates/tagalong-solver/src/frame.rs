//! Reference frame resolution
//!
//! Turns the tracked target (if any) and the configured
//! [`ReferenceDirectionMode`] into the point and axes the view cone is built
//! around. An unbound target degrades to world-space defaults.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tagalong_core::{Transform, WORLD_FORWARD, WORLD_UP};

use crate::config::ReferenceDirectionMode;

/// What kind of thing the tracked target is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackingSource {
    /// The viewer's head (camera)
    #[default]
    Head,
    /// A hand-held motion controller
    Controller,
    /// Any other transform
    Custom,
}

/// Transform the view cone follows, tagged with its source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedTarget {
    pub transform: Transform,
    pub source: TrackingSource,
}

impl TrackedTarget {
    pub fn new(transform: Transform, source: TrackingSource) -> Self {
        Self { transform, source }
    }

    /// Track the viewer's head
    pub fn head(transform: Transform) -> Self {
        Self::new(transform, TrackingSource::Head)
    }

    pub fn is_head(&self) -> bool {
        self.source == TrackingSource::Head
    }
}

/// Source of the head's smoothed recent travel direction
pub trait MovementHistory {
    /// Recent movement direction, or `None` when there is no confident estimate
    fn movement_direction(&self) -> Option<Vec3>;
}

/// Point and axes the view cone is centered on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    /// Cone apex
    pub point: Vec3,
    /// Cone axis, unit length
    pub forward: Vec3,
    /// Disambiguates the vertical meridian for aspect scaling
    pub up: Vec3,
    /// Travel direction that drove `forward`, when movement was used
    pub movement_direction: Option<Vec3>,
}

impl ReferenceFrame {
    /// Frame with explicit axes
    pub fn new(point: Vec3, forward: Vec3, up: Vec3) -> Self {
        Self {
            point,
            forward,
            up,
            movement_direction: None,
        }
    }

    /// World-space frame at the origin, used when nothing is tracked
    pub fn world() -> Self {
        Self::new(Vec3::ZERO, WORLD_FORWARD, WORLD_UP)
    }

    /// Resolve the frame for `mode` from the tracked target and movement history
    pub fn resolve(
        mode: ReferenceDirectionMode,
        target: Option<&TrackedTarget>,
        history: Option<&dyn MovementHistory>,
    ) -> Self {
        match mode {
            ReferenceDirectionMode::ObjectOriented => object_oriented(target),
            ReferenceDirectionMode::FacingWorldUp | ReferenceDirectionMode::GravityAligned => {
                facing_world_up(target)
            }
            ReferenceDirectionMode::HeadMoveDirection => head_move_direction(target, history),
        }
    }
}

fn target_point(target: Option<&TrackedTarget>) -> Vec3 {
    target.map_or(Vec3::ZERO, |t| t.transform.position)
}

fn target_forward(target: Option<&TrackedTarget>) -> Vec3 {
    target.map_or(WORLD_FORWARD, |t| t.transform.forward())
}

/// Forward and up taken from the target
fn object_oriented(target: Option<&TrackedTarget>) -> ReferenceFrame {
    ReferenceFrame::new(
        target_point(target),
        target_forward(target),
        target.map_or(WORLD_UP, |t| t.transform.up()),
    )
}

/// Forward from the target, world up
fn facing_world_up(target: Option<&TrackedTarget>) -> ReferenceFrame {
    ReferenceFrame::new(target_point(target), target_forward(target), WORLD_UP)
}

/// Forward from the head's movement history, world up.
///
/// Only a head target consults the history. Anything else, or a history
/// without a usable direction, falls back to the target's forward axis.
fn head_move_direction(
    target: Option<&TrackedTarget>,
    history: Option<&dyn MovementHistory>,
) -> ReferenceFrame {
    let movement = match (target, history) {
        (Some(t), Some(history)) if t.is_head() => history
            .movement_direction()
            .and_then(|direction| direction.try_normalize()),
        _ => None,
    };

    let mut frame = facing_world_up(target);
    if let Some(direction) = movement {
        frame.forward = direction;
        frame.movement_direction = Some(direction);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    struct FixedHistory(Option<Vec3>);

    impl MovementHistory for FixedHistory {
        fn movement_direction(&self) -> Option<Vec3> {
            self.0
        }
    }

    fn rolled_head() -> TrackedTarget {
        // Yawed a quarter turn and rolled, so forward and up both differ from world axes
        let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)
            * Quat::from_rotation_z(0.3);
        TrackedTarget::head(Transform::from_position_rotation(
            Vec3::new(1.0, 1.6, 2.0),
            rotation,
        ))
    }

    #[test]
    fn unbound_target_degrades_to_world() {
        for mode in [
            ReferenceDirectionMode::ObjectOriented,
            ReferenceDirectionMode::FacingWorldUp,
            ReferenceDirectionMode::HeadMoveDirection,
            ReferenceDirectionMode::GravityAligned,
        ] {
            let frame = ReferenceFrame::resolve(mode, None, None);
            assert_eq!(frame, ReferenceFrame::world(), "mode {:?}", mode);
        }
    }

    #[test]
    fn object_oriented_uses_target_axes() {
        let head = rolled_head();
        let frame = ReferenceFrame::resolve(ReferenceDirectionMode::ObjectOriented, Some(&head), None);
        assert_eq!(frame.point, head.transform.position);
        assert!(frame.forward.distance(head.transform.forward()) < 1e-6);
        assert!(frame.up.distance(head.transform.up()) < 1e-6);
    }

    #[test]
    fn facing_world_up_keeps_forward_only() {
        let head = rolled_head();
        let frame = ReferenceFrame::resolve(ReferenceDirectionMode::FacingWorldUp, Some(&head), None);
        assert!(frame.forward.distance(head.transform.forward()) < 1e-6);
        assert_eq!(frame.up, WORLD_UP);

        let gravity = ReferenceFrame::resolve(ReferenceDirectionMode::GravityAligned, Some(&head), None);
        assert_eq!(gravity, frame);
    }

    #[test]
    fn head_move_direction_uses_history() {
        let head = rolled_head();
        let history = FixedHistory(Some(Vec3::new(0.0, 0.0, 2.0)));
        let frame = ReferenceFrame::resolve(
            ReferenceDirectionMode::HeadMoveDirection,
            Some(&head),
            Some(&history),
        );
        assert_eq!(frame.forward, Vec3::Z);
        assert_eq!(frame.movement_direction, Some(Vec3::Z));
        assert_eq!(frame.up, WORLD_UP);
    }

    #[test]
    fn head_move_direction_ignores_history_for_non_head() {
        let mut controller = rolled_head();
        controller.source = TrackingSource::Controller;
        let history = FixedHistory(Some(Vec3::Z));
        let frame = ReferenceFrame::resolve(
            ReferenceDirectionMode::HeadMoveDirection,
            Some(&controller),
            Some(&history),
        );
        assert!(frame.forward.distance(controller.transform.forward()) < 1e-6);
        assert_eq!(frame.movement_direction, None);
    }

    #[test]
    fn head_move_direction_falls_back_without_direction() {
        let head = rolled_head();
        for history in [FixedHistory(None), FixedHistory(Some(Vec3::ZERO))] {
            let frame = ReferenceFrame::resolve(
                ReferenceDirectionMode::HeadMoveDirection,
                Some(&head),
                Some(&history),
            );
            assert!(frame.forward.distance(head.transform.forward()) < 1e-6);
        }
    }
}
