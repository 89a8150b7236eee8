//! Pillar Hop headless runner
//!
//! Drives the simulation with a random autopilot at a fixed frame rate,
//! feeding the same raw events a window would. Useful for soak testing
//! tuning files:
//!
//! ```text
//! RUST_LOG=info pillar-hop --seed 42 --seconds 120 --tuning hard.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use pillar_hop::Settings;
use pillar_hop::Tuning;
use pillar_hop::frame::FrameSnapshot;
use pillar_hop::input::{Key, RawEvent};
use pillar_hop::sim::{GameState, handle_event, tick};

const FRAME_DT: f32 = 1.0 / 60.0;
const WINDOW_HEIGHT: f32 = 720.0;
/// Decorrelates the autopilot stream from the pillar stream
const PILOT_STREAM_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Command-line arguments for the headless runner.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Seed for the pillar drop stream (the autopilot derives its own).
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
    /// Simulated seconds to run at 60 frames per second.
    #[arg(long, value_name = "SECONDS", default_value_t = 60.0)]
    seconds: f32,
    /// JSON gameplay tuning; missing fields keep their defaults.
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,
    /// JSON player settings (key bindings, camera); unreadable contents fall back to defaults.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

fn load_tuning(path: Option<&Path>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning {}", path.display()))?;
    let tuning =
        Tuning::from_json(&json).with_context(|| format!("parsing tuning {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let json = path
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("reading settings {}", path.display()))
        })
        .transpose()?;
    Ok(Settings::load_or_default(json.as_deref()))
}

fn run(args: CliArgs) -> Result<()> {
    let tuning = load_tuning(args.tuning.as_deref())?;
    let settings = load_settings(args.settings.as_deref())?;
    let mut state = GameState::with_tuning(tuning, args.seed)?;
    log::info!("Game initialized with seed: {}", args.seed);

    // Autopilot has its own stream so it never perturbs pillar drops
    let mut pilot = Pcg32::seed_from_u64(args.seed ^ PILOT_STREAM_SALT);
    let keys = [
        settings.bindings.up,
        settings.bindings.down,
        settings.bindings.left,
        settings.bindings.right,
    ];

    let frames = (args.seconds / FRAME_DT).max(0.0) as u64;
    let mut deaths = 0u32;
    let mut best = 0.0f32;

    for _ in 0..frames {
        if !state.is_alive() {
            deaths += 1;
            best = best.max(state.time_survived);
            let restart = RawEvent::KeyDown(Key::Char(settings.bindings.restart));
            handle_event(&mut state, &restart, &settings, WINDOW_HEIGHT);
        } else if !state.player.is_moving() && pilot.random_bool(0.2) {
            let key = Key::Char(keys[pilot.random_range(0..keys.len())]);
            handle_event(&mut state, &RawEvent::KeyDown(key), &settings, WINDOW_HEIGHT);
            handle_event(&mut state, &RawEvent::KeyUp(key), &settings, WINDOW_HEIGHT);
        }
        tick(&mut state, FRAME_DT);
    }
    best = best.max(state.time_survived);

    log::info!(
        "Ran {} frames: {} deaths, best run {:.1}s",
        frames,
        deaths,
        best
    );

    let snapshot = FrameSnapshot::capture(&state);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Pillar Hop (headless) starting...");

    run(CliArgs::parse())
}
