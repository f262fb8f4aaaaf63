//! Hardest Game headless runner
//!
//! Drives the simulation with the autopilot and logs lifecycle events.
//! Rendering and keyboard capture belong to a host front end; this binary
//! exercises the core at the configured tick rate without a window.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hardest_game::sim::{GameEvent, GamePhase, GameState, tick};
use hardest_game::{Autopilot, LevelSet, Settings};

#[derive(Debug, Parser)]
#[command(name = "hardest-game", version, about = "Headless obstacle-avoidance game runner")]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// JSON level set (overrides the settings file and the built-in levels)
    #[arg(short, long)]
    levels: Option<PathBuf>,

    /// Maximum number of ticks to simulate
    #[arg(short, long, default_value_t = 36_000)]
    ticks: u64,

    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Print the final frame as JSON
    #[arg(long)]
    dump_frame: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Hardest Game (headless) starting...");

    let settings = match Settings::load_or_default(args.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let levels_path = args.levels.or_else(|| settings.levels_path.clone());
    let levels = match levels_path {
        Some(path) => match LevelSet::load(&path) {
            Ok(levels) => levels,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => LevelSet::builtin(),
    };

    let mut state = match GameState::new(levels, &settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to start game: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut pilot = Autopilot::new(args.seed);
    let mut ticks = 0u64;

    while ticks < args.ticks {
        let input = pilot.next_input(&state);
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::PlayerDied { deaths } => log::info!("Died (deaths: {})", deaths),
                GameEvent::CoinCollected { remaining } => {
                    log::info!("Coin collected, {} to go", remaining)
                }
                GameEvent::LevelCompleted { is_final_level } => {
                    log::info!(
                        "Level {} complete at {:.1}s",
                        state.current_level,
                        settings.ticks_to_secs(ticks)
                    );
                    if !is_final_level {
                        if let Err(e) = state.next_level() {
                            log::error!("{}", e);
                            return ExitCode::FAILURE;
                        }
                    }
                }
            }
        }
        ticks += 1;

        if state.phase == GamePhase::GameComplete {
            break;
        }
    }

    log::info!(
        "Finished after {} ticks on level {} ({:?}), {} deaths",
        ticks,
        state.current_level,
        state.phase,
        state.deaths
    );

    if args.dump_frame {
        match serde_json::to_string_pretty(&state.frame()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize frame: {}", e),
        }
    }

    ExitCode::SUCCESS
}
