//! Goal orientation for the followed element

use glam::{Quat, Vec3};
use tagalong_core::{look_rotation, WORLD_UP};

use crate::config::{RadialViewConfig, ReferenceDirectionMode};
use crate::frame::{ReferenceFrame, TrackedTarget};

/// Orientation for an element placed at `desired`.
///
/// Looks along the reference forward when `orient_to_reference_direction`
/// is set, otherwise along the ray from the reference point to `desired`.
/// In [`ReferenceDirectionMode::GravityAligned`] the result may be non-unit,
/// with its x and z components zeroed.
pub fn goal_orientation(
    desired: Vec3,
    frame: &ReferenceFrame,
    target: Option<&TrackedTarget>,
    config: &RadialViewConfig,
) -> Quat {
    let mode = config.reference_direction_mode;
    let up = if mode.uses_target_up() {
        target.map_or(WORLD_UP, |t| t.transform.up())
    } else {
        WORLD_UP
    };

    let look = if config.orient_to_reference_direction {
        frame.forward
    } else {
        desired - frame.point
    };

    post_process(look_rotation(look, up), mode)
}

fn post_process(orientation: Quat, mode: ReferenceDirectionMode) -> Quat {
    match mode {
        ReferenceDirectionMode::GravityAligned => gravity_align(orientation),
        _ => orientation,
    }
}

/// Zero the x and z components in place, keeping y and w.
///
/// An approximation that suppresses pitch and roll while keeping yaw. The
/// result is not renormalized; consumers that need a unit quaternion must
/// normalize it themselves.
fn gravity_align(orientation: Quat) -> Quat {
    Quat::from_xyzw(0.0, orientation.y, 0.0, orientation.w)
}
