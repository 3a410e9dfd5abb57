//! Scripted head path driving a follower
//!
//! Walks a head forward while it yaws at a constant rate and feeds it to a
//! [`Follower`] once per frame.

use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tagalong_core::{angle_degrees, FrameClock, Transform};
use tagalong_follow::Follower;
use tagalong_solver::{Goal, TrackedTarget};
use tracing::info;

use crate::settings::{Settings, SimulationSettings};

/// One simulated frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub time: f64,
    pub head: Transform,
    pub goal: Goal,
    pub follower: Transform,
    /// Angle between the head's forward and the ray to the follower
    pub view_angle_degrees: f32,
    pub distance: f32,
}

/// Aggregate over a whole run
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub frames: u64,
    pub max_view_angle_degrees: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

/// Head walking and turning with optional noise
struct HeadPath {
    position: Vec3,
    yaw: f32,
    settings: SimulationSettings,
    rng: StdRng,
}

impl HeadPath {
    fn new(settings: &SimulationSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            position: settings.head_start,
            yaw: 0.0,
            settings: settings.clone(),
            rng,
        }
    }

    fn advance(&mut self, dt: f32) -> TrackedTarget {
        self.yaw += self.settings.turn_rate_degrees.to_radians() * dt;
        let rotation = Quat::from_rotation_y(self.yaw);
        self.position += rotation * Vec3::NEG_Z * self.settings.walk_speed * dt;

        let jitter = self.settings.jitter;
        if jitter > 0.0 {
            self.position += Vec3::new(
                self.rng.gen_range(-jitter..=jitter),
                self.rng.gen_range(-jitter..=jitter),
                self.rng.gen_range(-jitter..=jitter),
            );
        }

        TrackedTarget::head(Transform::from_position_rotation(self.position, rotation))
    }
}

/// Run the configured simulation, handing every frame to `on_frame`
pub fn run<F>(settings: &Settings, mut on_frame: F) -> anyhow::Result<Summary>
where
    F: FnMut(&FrameRecord) -> anyhow::Result<()>,
{
    let sim = &settings.simulation;
    let mut clock = FrameClock::new(settings.clock.clone());
    let mut head = HeadPath::new(sim);
    let mut follower = Follower::from_config(&settings.follow);
    follower.place(sim.follower_start);

    let log_every = (sim.frame_rate.round() as u64).max(1);
    let mut summary = Summary {
        min_distance: f32::MAX,
        ..Default::default()
    };

    for _ in 0..sim.frames {
        clock.tick(sim.frame_delta());
        let target = head.advance(clock.delta_time);
        let pose = follower.update(Some(&target), clock.delta_time);
        let goal = follower.last_goal().unwrap_or(Goal {
            position: pose.position,
            orientation: pose.rotation,
        });

        let offset = pose.position - target.transform.position;
        let record = FrameRecord {
            frame: clock.frame_count,
            time: clock.total_time,
            head: target.transform,
            goal,
            follower: pose,
            view_angle_degrees: angle_degrees(offset, target.transform.forward()),
            distance: offset.length(),
        };

        summary.frames = record.frame;
        summary.max_view_angle_degrees = summary.max_view_angle_degrees.max(record.view_angle_degrees);
        summary.min_distance = summary.min_distance.min(record.distance);
        summary.max_distance = summary.max_distance.max(record.distance);

        if record.frame % log_every == 0 {
            info!(
                "t={:.2}s follower at {:.2?} ({:.1} deg, {:.2} m from head)",
                record.time, record.follower.position, record.view_angle_degrees, record.distance
            );
        }

        on_frame(&record)?;
    }

    if summary.frames == 0 {
        summary.min_distance = 0.0;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagalong_solver::RadialViewConfig;

    fn still_settings() -> Settings {
        let mut settings = Settings::default();
        settings.simulation = SimulationSettings {
            frames: 240,
            walk_speed: 0.0,
            turn_rate_degrees: 0.0,
            jitter: 0.0,
            seed: Some(1),
            follower_start: Vec3::new(4.0, 1.6, 3.0),
            ..Default::default()
        };
        settings.follow.solver = RadialViewConfig {
            max_view_degrees: 20.0,
            ..Default::default()
        };
        settings
    }

    #[test]
    fn still_head_ends_inside_cone() {
        let settings = still_settings();
        let mut last = None;
        let summary = run(&settings, |record| {
            last = Some(record.clone());
            Ok(())
        })
        .unwrap();

        assert_eq!(summary.frames, 240);
        let last = last.unwrap();
        assert!(last.view_angle_degrees <= 20.0 + 1e-2, "{}", last.view_angle_degrees);
        assert!(last.distance >= 1.0 - 1e-3 && last.distance <= 2.0 + 1e-3);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut settings = Settings::default();
        settings.simulation.frames = 90;
        settings.simulation.seed = Some(42);
        settings.simulation.jitter = 0.01;

        let collect = |settings: &Settings| {
            let mut positions = Vec::new();
            run(settings, |record| {
                positions.push(record.follower.position);
                Ok(())
            })
            .unwrap();
            positions
        };
        assert_eq!(collect(&settings), collect(&settings));
    }

    #[test]
    fn callback_errors_stop_the_run() {
        let settings = still_settings();
        let mut seen = 0;
        let result = run(&settings, |_| {
            seen += 1;
            anyhow::bail!("stop")
        });
        assert!(result.is_err());
        assert_eq!(seen, 1);
    }
}
