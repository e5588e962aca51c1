//! Static archetype table.
//!
//! Every ship references exactly one entry for its whole lifetime. Speeds
//! are per reference frame.

use starstrike_core::enums::{ArchetypeId, MovementPattern};
use starstrike_core::types::Color;

/// Immutable template for one class of hostile ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub id: ArchetypeId,
    pub color: Color,
    /// Hull edge length.
    pub size: f64,
    /// Base travel per frame.
    pub speed: f64,
    /// Score awarded when destroyed.
    pub points: u32,
    /// A projectile strictly closer than this destroys the ship.
    pub hit_radius: f64,
    pub pattern: MovementPattern,
}

static SCOUT: Archetype = Archetype {
    id: ArchetypeId::Scout,
    color: Color(0x00ff00),
    size: 2.5,
    speed: 0.05,
    points: 10,
    hit_radius: 6.0,
    pattern: MovementPattern::Straight { drift: 0.0 },
};

static FIGHTER: Archetype = Archetype {
    id: ArchetypeId::Fighter,
    color: Color(0xff0000),
    size: 3.0,
    speed: 0.03,
    points: 20,
    hit_radius: 7.0,
    pattern: MovementPattern::SineWeave { amplitude: 0.1 },
};

static CARRIER: Archetype = Archetype {
    id: ArchetypeId::Carrier,
    color: Color(0x0000ff),
    size: 3.5,
    speed: 0.02,
    points: 30,
    hit_radius: 8.0,
    pattern: MovementPattern::Circular { amplitude: 0.1 },
};

static DART: Archetype = Archetype {
    id: ArchetypeId::Dart,
    color: Color(0xffff00),
    size: 2.0,
    speed: 0.08,
    points: 40,
    hit_radius: 5.0,
    pattern: MovementPattern::Zigzag { amplitude: 8.0 },
};

static SENTINEL: Archetype = Archetype {
    id: ArchetypeId::Sentinel,
    color: Color(0xff00ff),
    size: 3.0,
    speed: 0.0,
    points: 50,
    hit_radius: 7.0,
    pattern: MovementPattern::Orbit { radius: 6.0 },
};

static PATROLLER: Archetype = Archetype {
    id: ArchetypeId::Patroller,
    color: Color(0x00ffff),
    size: 2.8,
    speed: 0.15,
    points: 25,
    hit_radius: 6.0,
    pattern: MovementPattern::Bounce,
};

/// Look up the template for an archetype.
pub fn get_archetype(id: ArchetypeId) -> &'static Archetype {
    match id {
        ArchetypeId::Scout => &SCOUT,
        ArchetypeId::Fighter => &FIGHTER,
        ArchetypeId::Carrier => &CARRIER,
        ArchetypeId::Dart => &DART,
        ArchetypeId::Sentinel => &SENTINEL,
        ArchetypeId::Patroller => &PATROLLER,
    }
}
