//! Ship spawning: archetype choice, placement, and the per-frame arrival policy.

use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starstrike_core::components::{PatternState, Ship};
use starstrike_core::constants::{PATTERN_TIME_SPREAD, SHIP_SPIN_MAX};
use starstrike_core::enums::{ArchetypeId, MovementPattern, RenderKind};
use starstrike_core::events::SimEvent;
use starstrike_core::types::{RenderStyle, Transform};

use crate::archetypes::get_archetype;
use crate::config::{SimConfig, SpawnPolicy, SpawnRegion};
use crate::presenter::Presenter;

/// Apply the configured arrival policy for one frame.
pub fn run(
    ships: &mut Vec<Ship>,
    next_ship_id: &mut u64,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    presenter: &mut impl Presenter,
    events: &mut Vec<SimEvent>,
) {
    match config.spawn_policy {
        SpawnPolicy::Stochastic { probability } => {
            if rng.gen_bool(probability.clamp(0.0, 1.0)) {
                spawn_ship(ships, next_ship_id, rng, config, presenter, events);
            }
        }
        SpawnPolicy::FixedPopulation { count } => {
            while ships.len() < count {
                spawn_ship(ships, next_ship_id, rng, config, presenter, events);
            }
        }
    }
}

/// Spawn one ship of a random roster archetype at a random position in the spawn region.
pub fn spawn_ship(
    ships: &mut Vec<Ship>,
    next_ship_id: &mut u64,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    presenter: &mut impl Presenter,
    events: &mut Vec<SimEvent>,
) -> u64 {
    let archetype = pick_archetype(rng, config.roster_or_table());
    let position = spawn_position(rng, &config.arena.spawn_region);

    // Random pattern phase so ships of one archetype do not move in lockstep.
    let time = rng.gen_range(0.0..PATTERN_TIME_SPREAD);
    let heading_angle: f64 = rng.gen_range(0.0..TAU);
    let spin = DVec3::new(
        rng.gen_range(-SHIP_SPIN_MAX..=SHIP_SPIN_MAX),
        rng.gen_range(-SHIP_SPIN_MAX..=SHIP_SPIN_MAX),
        rng.gen_range(-SHIP_SPIN_MAX..=SHIP_SPIN_MAX),
    );

    let heading = match get_archetype(archetype).pattern {
        MovementPattern::Bounce => DVec3::new(heading_angle.cos(), heading_angle.sin(), 0.0),
        _ => DVec3::ZERO,
    };

    let pattern = PatternState {
        time,
        origin: position,
        heading,
    };
    let id = insert_ship(ships, next_ship_id, presenter, archetype, position, pattern, spin);
    log::trace!("spawned {archetype} #{id} at {position}");
    events.push(SimEvent::ShipSpawned {
        ship_id: id,
        archetype,
    });
    id
}

/// Register a fully specified ship and request its renderable.
pub fn insert_ship(
    ships: &mut Vec<Ship>,
    next_ship_id: &mut u64,
    presenter: &mut impl Presenter,
    archetype: ArchetypeId,
    position: DVec3,
    pattern: PatternState,
    spin: DVec3,
) -> u64 {
    let template = get_archetype(archetype);
    let handle = presenter.create_renderable(
        RenderKind::Ship(archetype),
        &RenderStyle {
            color: template.color,
            size: template.size,
            opacity: 1.0,
        },
    );
    presenter.set_transform(handle, &Transform::at(position));

    let id = *next_ship_id;
    *next_ship_id += 1;
    ships.push(Ship {
        id,
        handle,
        archetype,
        position,
        rotation: DVec3::ZERO,
        spin,
        pattern,
    });
    id
}

/// Uniform draw from a non-empty pool.
fn pick_archetype(rng: &mut ChaCha8Rng, pool: &[ArchetypeId]) -> ArchetypeId {
    pool[rng.gen_range(0..pool.len())]
}

/// Uniform draw from the spawn region.
fn spawn_position(rng: &mut ChaCha8Rng, region: &SpawnRegion) -> DVec3 {
    match *region {
        SpawnRegion::FarPlane { half_extent, depth } => DVec3::new(
            rng.gen_range(-half_extent..=half_extent),
            rng.gen_range(-half_extent..=half_extent),
            depth,
        ),
        SpawnRegion::Cube { half_extent } => DVec3::new(
            rng.gen_range(-half_extent..=half_extent),
            rng.gen_range(-half_extent..=half_extent),
            rng.gen_range(-half_extent..=half_extent),
        ),
    }
}
