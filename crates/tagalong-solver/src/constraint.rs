//! Angular and distance clamp
//!
//! Keeps a position inside the view cone around a [`ReferenceFrame`]'s
//! forward axis and inside the configured distance band. When nothing needs
//! clamping the input position is returned untouched.

use glam::Vec3;
use tagalong_core::{angle_degrees, clamp_band};
use tracing::trace;

use crate::config::RadialViewConfig;
use crate::frame::ReferenceFrame;

/// Direction used when the element sits exactly on the reference point
pub const DEGENERATE_DIRECTION: Vec3 = Vec3::splat(0.577_350_26);

/// Clamp `current` into the view cone and distance band of `frame`.
pub fn clamp_position(current: Vec3, frame: &ReferenceFrame, config: &RadialViewConfig) -> Vec3 {
    match (config.ignore_angle_clamp, config.ignore_distance_clamp) {
        (true, true) => current,
        (true, false) => clamp_distance_only(current, frame, config),
        (false, _) => clamp_angle_and_distance(current, frame, config),
    }
}

/// Offset from the reference point split into length and unit direction
fn offset(current: Vec3, point: Vec3) -> (Vec3, f32, Vec3) {
    let delta = current - point;
    let distance = delta.length();
    let direction = if distance > 0.0 && distance.is_finite() {
        delta / distance
    } else {
        // Length overflowed or is zero: rescale before normalizing
        (delta / delta.abs().max_element())
            .try_normalize()
            .unwrap_or(DEGENERATE_DIRECTION)
    };
    (delta, distance, direction)
}

fn clamped_distance(distance: f32, config: &RadialViewConfig) -> f32 {
    if config.ignore_distance_clamp {
        distance
    } else {
        clamp_band(distance, config.min_distance, config.max_distance)
    }
}

fn clamp_distance_only(current: Vec3, frame: &ReferenceFrame, config: &RadialViewConfig) -> Vec3 {
    let (_, distance, direction) = offset(current, frame.point);
    let clamped = clamped_distance(distance, config);

    if clamped != distance {
        trace!(distance, clamped, "radial view: distance clamp");
        frame.point + direction * clamped
    } else {
        current
    }
}

fn clamp_angle_and_distance(
    current: Vec3,
    frame: &ReferenceFrame,
    config: &RadialViewConfig,
) -> Vec3 {
    let (delta, distance, direction) = offset(current, frame.point);
    let forward = frame.forward;

    // Behind the reference: the perpendicular basis is ill-defined near 180
    // degrees, so snap in front instead of rotating.
    if delta.dot(forward) < 0.0 {
        trace!("radial view: element behind reference, snapping forward");
        return frame.point + forward;
    }

    let clamped = clamped_distance(distance, config);

    // Unit vector perpendicular to the axis, toward the element. `None` when
    // the element is on the axis: angle 0, no angular correction possible.
    let towards = direction - forward;
    let perpendicular = (towards - forward * towards.dot(forward)).try_normalize();

    if let Some(perpendicular) = perpendicular {
        let meridian = angle_degrees(perpendicular, frame.up).to_radians();
        let aspect_scale = lerp(config.aspect_v, 1.0, meridian.sin().abs());

        let angle = angle_degrees(direction, forward);
        let clamped_angle = clamp_band(
            angle,
            config.min_view_degrees * aspect_scale,
            config.max_view_degrees * aspect_scale,
        );

        if clamped_angle != angle {
            trace!(angle, clamped_angle, aspect_scale, "radial view: angle clamp");
            let (sin, cos) = clamped_angle.to_radians().sin_cos();
            return frame.point + (forward * cos + perpendicular * sin) * clamped;
        }
    }

    if clamped != distance {
        trace!(distance, clamped, "radial view: distance clamp");
        frame.point + direction * clamped
    } else {
        current
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
