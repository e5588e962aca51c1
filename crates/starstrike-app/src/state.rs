//! State shared between the input thread, the game loop thread and `main`.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use starstrike_core::commands::PlayerCommand;
use starstrike_core::state::GameStateSnapshot;

/// Commands sent from the input reader to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles owned by `main` while the game loop runs.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot, updated by the game loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl AppState {
    /// Forward a player command. Returns false once the game loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Score of the most recent frame, if any frame has run.
    pub fn latest_score(&self) -> Option<u64> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.as_ref().map(|snap| snap.score))
    }
}
