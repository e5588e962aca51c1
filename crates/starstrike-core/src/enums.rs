//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Simulation lifecycle phase. Idle → Running happens once; there is no way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start signal. No entity updates run.
    #[default]
    Idle,
    /// Steady frame loop.
    Running,
}

/// Hostile ship class. Static parameters live in the archetype table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchetypeId {
    Scout,
    Fighter,
    Carrier,
    Dart,
    Sentinel,
    Patroller,
}

impl ArchetypeId {
    /// Every archetype, in table order.
    pub const ALL: [ArchetypeId; 6] = [
        ArchetypeId::Scout,
        ArchetypeId::Fighter,
        ArchetypeId::Carrier,
        ArchetypeId::Dart,
        ArchetypeId::Sentinel,
        ArchetypeId::Patroller,
    ];

    /// Lookup key used in configuration files and logs.
    pub fn name(self) -> &'static str {
        match self {
            ArchetypeId::Scout => "scout",
            ArchetypeId::Fighter => "fighter",
            ArchetypeId::Carrier => "carrier",
            ArchetypeId::Dart => "dart",
            ArchetypeId::Sentinel => "sentinel",
            ArchetypeId::Patroller => "patroller",
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an archetype name is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown archetype: {0}")]
pub struct UnknownArchetype(pub String);

impl FromStr for ArchetypeId {
    type Err = UnknownArchetype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArchetypeId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownArchetype(s.to_string()))
    }
}

/// Movement pattern with its shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MovementPattern {
    /// Constant depth advance with optional sinusoidal lateral drift.
    Straight { drift: f64 },
    /// Depth advance plus `sin(t) * amplitude` lateral accumulation.
    SineWeave { amplitude: f64 },
    /// Depth advance plus `cos(t)`/`sin(t)` accumulation on both lateral axes.
    Circular { amplitude: f64 },
    /// Lateral offset `sin(2t) * amplitude` from the origin; depth wraps to the far plane.
    Zigzag { amplitude: f64 },
    /// Fixed-radius orbit around the spawn point, recomputed each frame.
    Orbit { radius: f64 },
    /// Constant-speed travel along a heading reflected at the lateral bounds.
    Bounce,
}

impl MovementPattern {
    /// Patterns that never change depth, so a ship using one is never
    /// removed at the depth boundary.
    pub fn holds_depth(&self) -> bool {
        matches!(self, MovementPattern::Orbit { .. } | MovementPattern::Bounce)
    }
}

/// Role of a particle within an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleRole {
    /// Bright sphere at the impact point.
    Flash,
    /// Outward-flying debris.
    Fragment,
    /// Expanding ring perpendicular to view-up.
    Shockwave,
}

/// What a renderable represents, so the presenter can pick a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderKind {
    Ship(ArchetypeId),
    Projectile,
    Particle(ParticleRole),
}

/// Player movement input direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}
