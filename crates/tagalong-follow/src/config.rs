//! Follow configuration
//!
//! Everything a [`Follower`](crate::Follower) needs, loadable from TOML.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tagalong_solver::RadialViewConfig;
use tracing::warn;

use crate::error::ConfigError;
use crate::history::MovementHistoryConfig;
use crate::interpolator::InterpolatorConfig;

/// Solver, smoothing and movement history settings for one follower
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowConfig {
    pub solver: RadialViewConfig,
    pub smoothing: InterpolatorConfig,
    pub history: MovementHistoryConfig,
}

impl FollowConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        parse_toml(content)
    }

    /// Log solver settings that will behave surprisingly
    pub fn warn_suspicious(&self) {
        for warning in self.solver.lint() {
            warn!("Radial view config: {}", warning);
        }
    }
}

/// Parse any TOML-backed settings type
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a TOML file
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content)
}
