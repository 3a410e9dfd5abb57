//! Vector helpers with defined results on degenerate input
//!
//! Per-frame solvers cannot afford a NaN. Every helper here returns a usable
//! value for zero-length or parallel vectors instead of propagating NaN.

use glam::{Mat3, Quat, Vec3};

/// World up axis
pub const WORLD_UP: Vec3 = Vec3::Y;

/// World forward axis (engine convention: -Z)
pub const WORLD_FORWARD: Vec3 = Vec3::NEG_Z;

/// Squared length below which a vector is treated as zero
const DEGENERATE_LENGTH_SQUARED: f32 = 1e-12;

/// Rotation whose local forward (-Z) points along `forward` with local +Y
/// as close to `up` as possible.
///
/// A zero `forward` yields identity. When `up` is parallel to `forward`
/// a fixed fallback axis is used to build the basis.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(forward) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };

    let mut right = forward.cross(up);
    if right.length_squared() < DEGENERATE_LENGTH_SQUARED {
        let fallback = if forward.z.abs() < 0.999 { Vec3::Z } else { Vec3::X };
        right = forward.cross(fallback);
    }
    let right = right.normalize();
    let up = right.cross(forward);

    Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
}

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// Returns 0 when either vector is (near) zero length.
pub fn angle_degrees(a: Vec3, b: Vec3) -> f32 {
    let denominator = (a.length_squared() * b.length_squared()).sqrt();
    if denominator < DEGENERATE_LENGTH_SQUARED {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Clamp `value` into `[min, max]` without requiring `min <= max`.
///
/// Values below `min` become `min`, values above `max` become `max`. With
/// swapped bounds the result is deterministic but not meaningful: anything
/// not below `min` collapses to `max`.
pub fn clamp_band(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
