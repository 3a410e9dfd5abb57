//! Simulation settings with persistence
//!
//! Settings are read from the path given on the command line, or from
//! `~/.config/tagalong/settings.toml`.

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tagalong_core::FrameClockConfig;
use tagalong_follow::{config::load_toml, FollowConfig};
use tracing::{info, warn};

/// All simulation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `[solver]`, `[smoothing]` and `[history]` tables
    #[serde(flatten)]
    pub follow: FollowConfig,
    pub simulation: SimulationSettings,
    pub clock: FrameClockConfig,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tagalong"))
    }

    /// Get the default settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from `explicit` or the default location, falling back to defaults
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let Some(path) = Self::settings_path() else {
                    warn!("Could not determine config directory");
                    return Self::default();
                };
                if !path.exists() {
                    info!("No settings file found, using defaults");
                    return Self::default();
                }
                path
            }
        };

        match load_toml::<Settings>(&path) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }
}

/// Scripted head path and output options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Number of frames to simulate
    pub frames: u32,
    /// Simulated frames per second
    pub frame_rate: f32,
    /// Head walking speed in meters per second
    pub walk_speed: f32,
    /// Head yaw rate in degrees per second
    pub turn_rate_degrees: f32,
    /// Random head position noise per frame in meters
    pub jitter: f32,
    /// Seed for the jitter; random when unset
    pub seed: Option<u64>,
    /// Head starting position
    pub head_start: Vec3,
    /// Where the follower is placed before the first frame
    pub follower_start: Vec3,
    /// Print every frame as a JSON line on stdout
    pub emit_json: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_rate: 60.0,
            walk_speed: 1.2,
            turn_rate_degrees: 30.0,
            jitter: 0.002,
            seed: None,
            head_start: Vec3::new(0.0, 1.6, 0.0),
            follower_start: Vec3::new(0.0, 1.6, -1.5),
            emit_json: false,
        }
    }
}

impl SimulationSettings {
    /// Fixed frame delta in seconds
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.frame_rate.max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tagalong_solver::ReferenceDirectionMode;

    #[test]
    fn loads_nested_and_flattened_tables() {
        let path = std::env::temp_dir().join(format!("tagalong-settings-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
            [solver]
            reference_direction_mode = "HeadMoveDirection"

            [simulation]
            frames = 12
            seed = 7
            "#
        )
        .unwrap();
        drop(file);

        let settings = Settings::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            settings.follow.solver.reference_direction_mode,
            ReferenceDirectionMode::HeadMoveDirection
        );
        assert_eq!(settings.simulation.frames, 12);
        assert_eq!(settings.simulation.seed, Some(7));
        assert_eq!(settings.simulation.frame_rate, 60.0);
    }

    #[test]
    fn unreadable_file_falls_back_to_defaults() {
        let settings = Settings::load(Some(Path::new("/nonexistent/tagalong/settings.toml")));
        assert_eq!(settings.simulation.frames, SimulationSettings::default().frames);
    }
}
