//! Tagalong - follow a moving viewer with a view cone constraint
//!
//! Runs a scripted head path through a follower and reports where the
//! follower ended up each second. Pass a settings file path as the first
//! argument to override the defaults.

mod settings;
mod simulation;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use settings::Settings;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting Tagalong simulation...");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref());
    settings.follow.warn_suspicious();

    info!(
        "Mode {:?}, {} frames at {} fps",
        settings.follow.solver.reference_direction_mode,
        settings.simulation.frames,
        settings.simulation.frame_rate
    );

    let emit_json = settings.simulation.emit_json;
    let mut out = BufWriter::new(io::stdout().lock());

    let summary = simulation::run(&settings, |record| {
        if emit_json {
            serde_json::to_writer(&mut out, record).context("Failed to encode frame record")?;
            writeln!(out).context("Failed to write frame record")?;
        }
        Ok(())
    })?;
    out.flush().context("Failed to flush output")?;

    info!(
        "Simulated {} frames: widest view angle {:.1} deg, distance {:.2}..{:.2} m",
        summary.frames, summary.max_view_angle_degrees, summary.min_distance, summary.max_distance
    );

    Ok(())
}
