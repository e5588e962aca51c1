//! Player commands sent from input collaborators to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the Idle phase and start the frame loop.
    Start,
    /// Request a shot. Dropped if the fire cooldown has not elapsed.
    Fire,
    /// Press or release a movement direction.
    Move {
        direction: MoveDirection,
        pressed: bool,
    },
    /// Turn the view by the given deltas (radians).
    Aim { delta_yaw: f64, delta_pitch: f64 },
}
