//! Game state snapshot: the complete visible state handed out after each frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Aim, SimTime};

/// Complete simulation state after one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u64,
    pub player: PlayerView,
    pub ships: Vec<ShipView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    /// Events raised during this frame, in emission order.
    pub events: Vec<SimEvent>,
}

/// Player viewpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec3,
    pub aim: Aim,
}

/// A live ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub id: u64,
    pub archetype: ArchetypeId,
    pub position: DVec3,
    pub pattern_time: f64,
}

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: DVec3,
    pub velocity: DVec3,
}

/// A live explosion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u64,
    pub origin: DVec3,
    /// Lifetime fraction in [0, 1).
    pub progress: f64,
    pub particle_count: usize,
}
