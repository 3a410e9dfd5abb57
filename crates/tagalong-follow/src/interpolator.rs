//! Goal smoothing
//!
//! The solver produces a goal every frame; the interpolator advances a
//! working pose toward it over time so the followed element glides instead
//! of jumping.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use tagalong_core::Transform;
use tagalong_solver::Goal;

/// Distance under which the working position counts as arrived
const POSITION_EPSILON: f32 = 1e-4;

/// Angle (radians) under which the working orientation counts as arrived
const ROTATION_EPSILON: f32 = 1e-3;

/// How the working pose approaches the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SmoothingMode {
    /// Constant speed, capped by `position_per_second` and `rotation_degrees_per_second`
    Linear,
    /// Critically damped spring: fast approach, no overshoot
    #[default]
    CriticallyDamped,
}

/// Interpolator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolatorConfig {
    pub mode: SmoothingMode,
    /// Linear mode: maximum travel per second in world units
    pub position_per_second: f32,
    /// Linear mode: maximum rotation per second in degrees
    pub rotation_degrees_per_second: f32,
    /// Damped mode: approximate time to reach the goal in seconds
    pub smooth_time: f32,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        Self {
            mode: SmoothingMode::default(),
            position_per_second: 2.0,
            rotation_degrees_per_second: 360.0,
            smooth_time: 0.2,
        }
    }
}

/// Goal and working pose of one followed element
#[derive(Debug, Clone)]
pub struct Interpolator {
    pub config: InterpolatorConfig,
    goal_position: Vec3,
    goal_orientation: Quat,
    position: Vec3,
    orientation: Quat,
    /// Spring velocity for the damped mode
    velocity: Vec3,
}

impl Interpolator {
    pub fn new(config: InterpolatorConfig) -> Self {
        Self {
            config,
            goal_position: Vec3::ZERO,
            goal_orientation: Quat::IDENTITY,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
        }
    }

    /// Current working position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current working orientation (always unit length)
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn goal_position(&self) -> Vec3 {
        self.goal_position
    }

    pub fn goal_orientation(&self) -> Quat {
        self.goal_orientation
    }

    /// Working pose as a transform
    pub fn transform(&self) -> Transform {
        Transform::from_position_rotation(self.position, self.orientation)
    }

    pub fn set_goal_position(&mut self, position: Vec3) {
        self.goal_position = position;
    }

    /// Set the goal orientation. Non-unit goals are accepted as-is.
    pub fn set_goal_orientation(&mut self, orientation: Quat) {
        self.goal_orientation = orientation;
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.set_goal_position(goal.position);
        self.set_goal_orientation(goal.orientation);
    }

    /// Move the working pose and goal to `transform` immediately
    pub fn teleport(&mut self, transform: Transform) {
        self.position = transform.position;
        self.goal_position = transform.position;
        self.orientation = unit(transform.rotation).unwrap_or(Quat::IDENTITY);
        self.goal_orientation = transform.rotation;
        self.velocity = Vec3::ZERO;
    }

    /// Jump the working pose to the goal
    pub fn snap_to_goal(&mut self) {
        self.position = self.goal_position;
        if let Some(goal) = unit(self.goal_orientation) {
            self.orientation = goal;
        }
        self.velocity = Vec3::ZERO;
    }

    /// Whether the working pose still differs from the goal
    pub fn is_running(&self) -> bool {
        if self.position.distance(self.goal_position) > POSITION_EPSILON {
            return true;
        }
        unit(self.goal_orientation)
            .is_some_and(|goal| self.orientation.angle_between(goal) > ROTATION_EPSILON)
    }

    /// Advance the working pose by `dt` seconds and return it
    pub fn update(&mut self, dt: f32) -> Transform {
        if dt <= 0.0 {
            return self.transform();
        }

        match self.config.mode {
            SmoothingMode::Linear => {
                self.position = move_towards(
                    self.position,
                    self.goal_position,
                    self.config.position_per_second * dt,
                );
                if let Some(goal) = unit(self.goal_orientation) {
                    let max_radians = self.config.rotation_degrees_per_second.to_radians() * dt;
                    self.orientation = rotate_towards(self.orientation, goal, max_radians);
                }
            }
            SmoothingMode::CriticallyDamped => {
                let smooth_time = self.config.smooth_time.max(1e-4);
                self.position = smooth_damp(
                    self.position,
                    self.goal_position,
                    &mut self.velocity,
                    smooth_time,
                    dt,
                );
                if let Some(goal) = unit(self.goal_orientation) {
                    let t = 1.0 - (-dt * 2.0 / smooth_time).exp();
                    self.orientation = self.orientation.slerp(goal, t).normalize();
                }
            }
        }

        self.transform()
    }
}

impl Default for Interpolator {
    fn default() -> Self {
        Self::new(InterpolatorConfig::default())
    }
}

/// Normalize a possibly non-unit goal. `None` for a (near) zero quaternion.
fn unit(q: Quat) -> Option<Quat> {
    let length = q.length();
    if length > 1e-6 && length.is_finite() {
        Some(q * (1.0 / length))
    } else {
        None
    }
}

fn move_towards(current: Vec3, target: Vec3, max_step: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_step || distance <= f32::EPSILON {
        target
    } else {
        current + to_target / distance * max_step
    }
}

fn rotate_towards(current: Quat, target: Quat, max_radians: f32) -> Quat {
    let angle = current.angle_between(target);
    if angle <= max_radians || angle <= f32::EPSILON {
        target
    } else {
        current.slerp(target, max_radians / angle).normalize()
    }
}

/// Critically damped spring step (Game Programming Gems 4, 1.10).
fn smooth_damp(current: Vec3, target: Vec3, velocity: &mut Vec3, smooth_time: f32, dt: f32) -> Vec3 {
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * decay;
    let mut output = target + (change + temp) * decay;

    // Passed the target: stop there
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec3::ZERO;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear() -> Interpolator {
        Interpolator::new(InterpolatorConfig {
            mode: SmoothingMode::Linear,
            position_per_second: 1.0,
            rotation_degrees_per_second: 90.0,
            ..Default::default()
        })
    }

    #[test]
    fn linear_caps_speed() {
        let mut interpolator = linear();
        interpolator.set_goal_position(Vec3::new(10.0, 0.0, 0.0));

        interpolator.update(0.5);
        assert!(interpolator.position().distance(Vec3::new(0.5, 0.0, 0.0)) < 1e-5);
        assert!(interpolator.is_running());

        for _ in 0..40 {
            interpolator.update(0.5);
        }
        assert_eq!(interpolator.position(), Vec3::new(10.0, 0.0, 0.0));
        assert!(!interpolator.is_running());
    }

    #[test]
    fn linear_caps_rotation() {
        let mut interpolator = linear();
        interpolator.set_goal_orientation(Quat::from_rotation_y(std::f32::consts::PI * 0.75));

        interpolator.update(1.0);
        let turned = interpolator.orientation().angle_between(Quat::IDENTITY);
        assert!((turned - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn damped_converges_without_overshoot() {
        let mut interpolator = Interpolator::default();
        let goal = Vec3::new(0.0, 0.0, -2.0);
        interpolator.set_goal_position(goal);

        let mut last = f32::MAX;
        for _ in 0..120 {
            interpolator.update(1.0 / 60.0);
            let position = interpolator.position();
            assert!(position.z >= goal.z - 1e-5, "overshot: {:?}", position);
            let remaining = position.distance(goal);
            assert!(remaining <= last + 1e-6);
            last = remaining;
        }
        assert!(last < 0.01, "remaining {}", last);
    }

    #[test]
    fn non_unit_goal_orientation_is_normalized() {
        let mut interpolator = Interpolator::default();
        // Gravity-aligned style goal: yaw only, scaled down
        let goal = Quat::from_xyzw(0.0, 0.3, 0.0, 0.4);
        interpolator.set_goal_orientation(goal);
        interpolator.snap_to_goal();
        assert!((interpolator.orientation().length() - 1.0).abs() < 1e-5);
        assert!(!interpolator.is_running());

        // A zero goal leaves the working orientation alone
        interpolator.set_goal_orientation(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
        let before = interpolator.orientation();
        interpolator.update(0.1);
        assert_eq!(interpolator.orientation(), before);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut interpolator = Interpolator::default();
        interpolator.set_goal_position(Vec3::ONE);
        interpolator.update(0.0);
        interpolator.update(-1.0);
        assert_eq!(interpolator.position(), Vec3::ZERO);
    }

    #[test]
    fn teleport_resets_goal_and_velocity() {
        let mut interpolator = Interpolator::default();
        interpolator.set_goal_position(Vec3::new(5.0, 0.0, 0.0));
        interpolator.update(0.1);

        interpolator.teleport(Transform::from_position(Vec3::Y));
        assert_eq!(interpolator.position(), Vec3::Y);
        assert_eq!(interpolator.goal_position(), Vec3::Y);
        assert!(!interpolator.is_running());
        interpolator.update(0.1);
        assert_eq!(interpolator.position(), Vec3::Y);
    }
}
