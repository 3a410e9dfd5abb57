//! Frame timing
//!
//! Tracks per-frame delta time for hosts that drive the follow loop.

use serde::{Deserialize, Serialize};

use crate::math::clamp_band;

/// Configuration for the frame clock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameClockConfig {
    /// How many scaled seconds pass per real second (negative counts as 0)
    pub time_scale: f32,
    /// Maximum delta time, so a long stall does not teleport followers
    pub max_delta_time: f32,
}

impl Default for FrameClockConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: 0.25,
        }
    }
}

/// Per-frame time tracking
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Configuration
    pub config: FrameClockConfig,
    /// Scaled time since the clock started, in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Delta time before scaling
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
}

impl FrameClock {
    /// Create a new frame clock with custom config
    pub fn new(config: FrameClockConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance the clock with the raw delta from the previous frame.
    ///
    /// Never produces a negative or NaN delta, whatever the config holds.
    pub fn tick(&mut self, raw_delta: f32) {
        let max_delta = non_negative(self.config.max_delta_time);
        self.unscaled_delta_time = clamp_band(non_negative(raw_delta), 0.0, max_delta);
        self.frame_count += 1;

        self.delta_time = self.unscaled_delta_time * non_negative(self.config.time_scale);
        self.total_time += self.delta_time as f64;
    }
}

/// Negative and NaN become 0
fn non_negative(value: f32) -> f32 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}
