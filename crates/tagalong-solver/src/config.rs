//! Radial view configuration

use serde::{Deserialize, Serialize};

/// How the reference frame's axes are derived from the tracked target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferenceDirectionMode {
    /// Forward and up both come from the tracked target
    ObjectOriented,
    /// Forward from the tracked target, up is world up
    #[default]
    FacingWorldUp,
    /// Forward follows the head's recent travel direction, up is world up
    HeadMoveDirection,
    /// Like `FacingWorldUp`, with roll and pitch stripped from the goal orientation
    GravityAligned,
}

impl ReferenceDirectionMode {
    /// Whether the reference up axis comes from the tracked target
    pub fn uses_target_up(self) -> bool {
        matches!(self, ReferenceDirectionMode::ObjectOriented)
    }
}

/// Radial view configuration
///
/// Bands are not validated: a `min` above its `max` clamps deterministically
/// but meaninglessly. Use [`RadialViewConfig::lint`] to report such mistakes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialViewConfig {
    /// Selects how forward/up are resolved and whether orientation is gravity aligned
    pub reference_direction_mode: ReferenceDirectionMode,
    /// Closest the element may be to the reference point (world units)
    pub min_distance: f32,
    /// Farthest the element may be from the reference point (world units)
    pub max_distance: f32,
    /// Smallest allowed angle from the cone axis in degrees
    pub min_view_degrees: f32,
    /// Largest allowed angle from the cone axis in degrees
    pub max_view_degrees: f32,
    /// Scale applied to the angular limits along the vertical meridian
    pub aspect_v: f32,
    /// Skip the angular clamp
    pub ignore_angle_clamp: bool,
    /// Skip the distance clamp
    pub ignore_distance_clamp: bool,
    /// Face along the reference forward instead of away from the reference point
    pub orient_to_reference_direction: bool,
}

impl Default for RadialViewConfig {
    fn default() -> Self {
        Self {
            reference_direction_mode: ReferenceDirectionMode::default(),
            min_distance: 1.0,
            max_distance: 2.0,
            min_view_degrees: 0.0,
            max_view_degrees: 15.0,
            aspect_v: 1.0,
            ignore_angle_clamp: false,
            ignore_distance_clamp: false,
            orient_to_reference_direction: false,
        }
    }
}

/// Suspicious configuration values. Reported, never corrected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigWarning {
    #[error("min_distance ({min}) is greater than max_distance ({max})")]
    DistanceBandInverted { min: f32, max: f32 },

    #[error("min_view_degrees ({min}) is greater than max_view_degrees ({max})")]
    ViewBandInverted { min: f32, max: f32 },

    #[error("aspect_v ({0}) is not positive, vertical limits collapse or flip")]
    NonPositiveAspect(f32),
}

impl RadialViewConfig {
    /// Report values that produce surprising (but still deterministic) results
    pub fn lint(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if !self.ignore_distance_clamp && self.min_distance > self.max_distance {
            warnings.push(ConfigWarning::DistanceBandInverted {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if !self.ignore_angle_clamp {
            if self.min_view_degrees > self.max_view_degrees {
                warnings.push(ConfigWarning::ViewBandInverted {
                    min: self.min_view_degrees,
                    max: self.max_view_degrees,
                });
            }
            if self.aspect_v <= 0.0 {
                warnings.push(ConfigWarning::NonPositiveAspect(self.aspect_v));
            }
        }

        warnings
    }
}
