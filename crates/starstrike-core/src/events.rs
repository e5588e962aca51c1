//! Events emitted by the simulation for UI feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::ArchetypeId;

/// Something that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A ship entered the field.
    ShipSpawned { ship_id: u64, archetype: ArchetypeId },
    /// A projectile left the muzzle.
    ShotFired { projectile_id: u64 },
    /// A projectile destroyed a ship.
    ShipDestroyed {
        ship_id: u64,
        projectile_id: u64,
        archetype: ArchetypeId,
        points: u32,
        position: DVec3,
    },
    /// A ship left the permitted depth interval without being hit.
    ShipEscaped { ship_id: u64, archetype: ArchetypeId },
    /// An explosion reached the end of its lifetime and was removed.
    ExplosionFinished { explosion_id: u64 },
    /// The running score changed.
    ScoreChanged { score: u64 },
}
