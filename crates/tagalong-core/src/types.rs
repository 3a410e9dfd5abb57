//! Core types used throughout Tagalong

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::look_rotation;

/// Rigid transform of a tracked target or a follower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Create a transform at `position` looking along `forward`
    pub fn looking(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        Self {
            position,
            rotation: look_rotation(forward, up),
        }
    }

    /// Get the forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get the right direction (positive X in local space)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction (positive Y in local space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Rotate by the given quaternion (applied in world space)
    pub fn rotate(&mut self, rotation: Quat) {
        self.rotation = (rotation * self.rotation).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axes() {
        let transform = Transform::default();
        assert_eq!(transform.forward(), -Vec3::Z);
        assert_eq!(transform.up(), Vec3::Y);
        assert_eq!(transform.right(), Vec3::X);
    }

    #[test]
    fn test_looking_matches_forward() {
        let forward = Vec3::new(1.0, 0.0, -1.0).normalize();
        let transform = Transform::looking(Vec3::ONE, forward, Vec3::Y);
        assert!(transform.forward().distance(forward) < 1e-5);
        assert_eq!(transform.position, Vec3::ONE);
    }

    #[test]
    fn test_rotate_yaw() {
        let mut transform = Transform::default();
        transform.rotate(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        // Quarter turn left about +Y takes -Z to -X
        assert!(transform.forward().distance(-Vec3::X) < 1e-5);
    }
}
