//! Meteor Storm headless runner
//!
//! Drives the simulation for a fixed number of ticks without a window.
//! Useful for soak-testing tuning files and checking determinism between
//! builds (same seed + same flags = same final state).

use std::path::PathBuf;

use clap::Parser;

use meteor_storm::render::{draw_list, layout, score_text};
use meteor_storm::sim::{GameEvent, GameState, SpriteAtlas, TickInput, tick};
use meteor_storm::{ConfigError, SimConfig};

#[derive(Parser, Debug)]
#[command(about = "Run the meteor shooter simulation headless", version)]
struct Args {
    /// RNG seed (defaults to a time-derived seed)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// JSON tuning file
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON sprite atlas
    #[arg(long)]
    atlas: Option<PathBuf>,
    /// Hold fire and sweep the ship clockwise instead of idling
    #[arg(long)]
    autopilot: bool,
    /// Print the final state as JSON
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<(), ConfigError> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let atlas = match &args.atlas {
        Some(path) => SpriteAtlas::load(path)?,
        None => SpriteAtlas::default(),
    };
    let seed = args.seed.unwrap_or_else(time_seed);
    let (width, height) = layout(&config, 0, 0);

    log::info!(
        "Meteor Storm (headless) starting: seed={} ticks={} screen={}x{}",
        seed,
        args.ticks,
        width,
        height
    );

    let input = if args.autopilot {
        TickInput {
            right: true,
            fire: true,
            ..Default::default()
        }
    } else {
        TickInput::default()
    };

    let mut state = GameState::with_config(seed, config, atlas)?;
    let mut best_score = 0;
    let mut deaths = 0u32;
    for _ in 0..args.ticks {
        tick(&mut state, &input);
        best_score = best_score.max(state.score);
        for event in &state.events {
            if let GameEvent::PlayerDestroyed { final_score } = event {
                deaths += 1;
                best_score = best_score.max(*final_score);
            }
        }
    }

    log::info!(
        "Finished at tick {}: {} | best {} | deaths {} | meteors {} | bullets {} | draw calls {}",
        state.time_ticks,
        score_text(state.score),
        best_score,
        deaths,
        state.meteors.len(),
        state.bullets.len(),
        draw_list(&state).len()
    );

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    Ok(())
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
