//! Head movement history
//!
//! Keeps a short window of head positions and derives the direction the head
//! has been travelling in. Feeds [`ReferenceDirectionMode::HeadMoveDirection`].
//!
//! [`ReferenceDirectionMode::HeadMoveDirection`]: tagalong_solver::ReferenceDirectionMode::HeadMoveDirection

use std::collections::VecDeque;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tagalong_solver::MovementHistory;

/// Movement history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementHistoryConfig {
    /// Number of samples kept (at least 2)
    pub capacity: usize,
    /// Displacement across the window needed before a direction is trusted
    pub min_displacement: f32,
    /// Ignore vertical travel (crouching, stairs)
    pub planar: bool,
}

impl Default for MovementHistoryConfig {
    fn default() -> Self {
        Self {
            capacity: 16,
            min_displacement: 0.05,
            planar: true,
        }
    }
}

/// Ring of recent head positions
#[derive(Debug, Clone)]
pub struct HeadMovementHistory {
    config: MovementHistoryConfig,
    samples: VecDeque<Vec3>,
    /// Last direction that passed the displacement threshold
    direction: Option<Vec3>,
}

impl HeadMovementHistory {
    pub fn new(config: MovementHistoryConfig) -> Self {
        let capacity = config.capacity.max(2);
        Self {
            config: MovementHistoryConfig { capacity, ..config },
            samples: VecDeque::with_capacity(capacity),
            direction: None,
        }
    }

    /// Record this frame's head position
    pub fn record(&mut self, position: Vec3) {
        if self.samples.len() == self.config.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(position);

        if let (Some(oldest), Some(newest)) = (self.samples.front(), self.samples.back()) {
            let mut displacement = *newest - *oldest;
            if self.config.planar {
                displacement.y = 0.0;
            }
            if displacement.length() >= self.config.min_displacement {
                if let Some(direction) = displacement.try_normalize() {
                    self.direction = Some(direction);
                }
            }
        }
    }

    /// Forget all samples and the last direction
    pub fn clear(&mut self) {
        self.samples.clear();
        self.direction = None;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for HeadMovementHistory {
    fn default() -> Self {
        Self::new(MovementHistoryConfig::default())
    }
}

impl MovementHistory for HeadMovementHistory {
    fn movement_direction(&self) -> Option<Vec3> {
        self.direction
    }
}
