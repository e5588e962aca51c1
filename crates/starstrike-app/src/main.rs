use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use starstrike_app::game_loop;
use starstrike_app::input;
use starstrike_app::state::{AppState, GameLoopCommand};
use starstrike_sim::SimConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    log::info!(
        "starstrike: seed {}, {:?}, type `start` to begin",
        config.seed,
        config.spawn_policy
    );

    let latest_snapshot = Arc::new(Mutex::new(None));
    let (command_tx, handle) = match game_loop::spawn_game_loop(config, latest_snapshot.clone()) {
        Ok(spawned) => spawned,
        Err(e) => {
            log::error!("failed to start game loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let state = AppState {
        command_tx,
        latest_snapshot,
    };

    input::forward_lines(std::io::stdin().lock(), &state);

    let _ = state.command_tx.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        log::error!("game loop panicked");
        return ExitCode::FAILURE;
    }
    log::info!("final score: {}", state.latest_score().unwrap_or(0));
    ExitCode::SUCCESS
}
