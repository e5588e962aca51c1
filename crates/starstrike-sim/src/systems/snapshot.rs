//! Snapshot system: builds a complete GameStateSnapshot from the live collections.
//!
//! This system is read-only.

use starstrike_core::components::{Explosion, Player, Projectile, Ship};
use starstrike_core::enums::GamePhase;
use starstrike_core::events::SimEvent;
use starstrike_core::state::*;
use starstrike_core::types::SimTime;

use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    player: &Player,
    ships: &[Ship],
    projectiles: &[Projectile],
    explosions: &[Explosion],
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score: score.score,
        player: PlayerView {
            position: player.position,
            aim: player.aim,
        },
        ships: ships
            .iter()
            .map(|ship| ShipView {
                id: ship.id,
                archetype: ship.archetype,
                position: ship.position,
                pattern_time: ship.pattern.time,
            })
            .collect(),
        projectiles: projectiles
            .iter()
            .map(|p| ProjectileView {
                id: p.id,
                position: p.position,
                velocity: p.velocity,
            })
            .collect(),
        explosions: build_explosions(explosions, time.now()),
        events,
    }
}

fn build_explosions(explosions: &[Explosion], now: f64) -> Vec<ExplosionView> {
    explosions
        .iter()
        .map(|e| ExplosionView {
            id: e.id,
            origin: e.origin,
            progress: e.progress(now).min(1.0),
            particle_count: e.particles.len(),
        })
        .collect()
}
