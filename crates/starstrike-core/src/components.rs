//! Entity records owned by the simulation's live collections.
//!
//! Each record carries only the fields its kind needs. Archetype parameters
//! are looked up from the archetype table, never copied per instance.
//! Game logic lives in systems; records hold data plus a few pure accessors.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Aim, Color, RenderHandle};

/// Pattern-local state for a ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternState {
    /// Pattern time. Starts at a random offset and only increases.
    pub time: f64,
    /// Spawn position, the anchor for recomputed and offset patterns.
    pub origin: DVec3,
    /// Unit travel heading for reflecting patterns (zero otherwise).
    pub heading: DVec3,
}

/// A hostile ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Creation sequence number (monotonic per engine).
    pub id: u64,
    pub handle: RenderHandle,
    pub archetype: ArchetypeId,
    pub position: DVec3,
    /// Accumulated idle tumble (radians). Visual only.
    pub rotation: DVec3,
    /// Idle tumble rate per axis (radians per frame).
    pub spin: DVec3,
    pub pattern: PatternState,
}

/// A player projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u64,
    pub handle: RenderHandle,
    pub position: DVec3,
    /// Per-frame displacement, frozen at creation.
    pub velocity: DVec3,
    /// Muzzle position.
    pub origin: DVec3,
    /// Clock time at creation (seconds).
    pub fired_at: f64,
}

impl Projectile {
    /// Distance covered since leaving the muzzle.
    pub fn travelled(&self) -> f64 {
        self.position.distance(self.origin)
    }
}

/// Free-flight state of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleMotion {
    /// Per-frame displacement.
    pub velocity: DVec3,
    /// Per-frame rotation increment.
    pub spin: DVec3,
}

/// One visual element of an explosion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub handle: RenderHandle,
    pub role: ParticleRole,
    pub position: DVec3,
    pub rotation: DVec3,
    /// Present only for particles that move.
    pub motion: Option<ParticleMotion>,
    /// Opacity at progress 0.
    pub base_opacity: f64,
    pub opacity: f64,
    pub scale: f64,
}

/// A timed particle burst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub id: u64,
    /// Impact point.
    pub origin: DVec3,
    pub color: Color,
    /// Clock time at creation (seconds).
    pub started_at: f64,
    pub duration_secs: f64,
    /// Flash first, then fragments, then the shockwave. Fixed at creation.
    pub particles: Vec<Particle>,
}

impl Explosion {
    /// Fraction of the lifetime elapsed at `now`. Not clamped above 1.
    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.started_at) / self.duration_secs).max(0.0)
    }

    /// Number of particles with the given role.
    pub fn count(&self, role: ParticleRole) -> usize {
        self.particles.iter().filter(|p| p.role == role).count()
    }
}

/// Buffered held-direction flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveState {
    pub fn set(&mut self, direction: MoveDirection, pressed: bool) {
        match direction {
            MoveDirection::Up => self.up = pressed,
            MoveDirection::Down => self.down = pressed,
            MoveDirection::Left => self.left = pressed,
            MoveDirection::Right => self.right = pressed,
        }
    }

    /// Unit-per-axis displacement implied by the held directions.
    /// Opposing directions cancel.
    pub fn axis(&self) -> DVec3 {
        let x = f64::from(u8::from(self.right)) - f64::from(u8::from(self.left));
        let y = f64::from(u8::from(self.up)) - f64::from(u8::from(self.down));
        DVec3::new(x, y, 0.0)
    }
}

/// The player viewpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: DVec3,
    pub aim: Aim,
    pub movement: MoveState,
}
