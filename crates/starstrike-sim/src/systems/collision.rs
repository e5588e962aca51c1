//! Projectile vs ship hit resolution.
//!
//! A hit is a strict center distance below the target archetype's hit
//! radius. Each projectile destroys at most one ship per frame; the first
//! ship found in reverse creation order wins.

use glam::DVec3;

use starstrike_core::components::{Projectile, Ship};
use starstrike_core::enums::ArchetypeId;
use starstrike_core::types::Color;

use crate::archetypes::get_archetype;
use crate::presenter::Presenter;

/// A confirmed projectile/ship hit. Both entities are already gone when this is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    pub ship_id: u64,
    pub projectile_id: u64,
    pub archetype: ArchetypeId,
    pub points: u32,
    /// Ship position at the moment of the hit.
    pub position: DVec3,
    pub color: Color,
}

/// Test every projectile against every ship, removing both sides of each hit.
pub fn resolve(
    projectiles: &mut Vec<Projectile>,
    ships: &mut Vec<Ship>,
    presenter: &mut impl Presenter,
) -> Vec<HitEvent> {
    let mut hits = Vec::new();

    for p in (0..projectiles.len()).rev() {
        let shot = projectiles[p].position;
        let Some(s) = (0..ships.len()).rev().find(|&s| is_hit(shot, &ships[s])) else {
            continue;
        };

        let ship = ships.remove(s);
        let projectile = projectiles.remove(p);
        presenter.remove_renderable(ship.handle);
        presenter.remove_renderable(projectile.handle);

        let archetype = get_archetype(ship.archetype);
        hits.push(HitEvent {
            ship_id: ship.id,
            projectile_id: projectile.id,
            archetype: ship.archetype,
            points: archetype.points,
            position: ship.position,
            color: archetype.color,
        });
    }

    hits
}

/// Strict sphere test against the ship's archetype radius.
pub fn is_hit(point: DVec3, ship: &Ship) -> bool {
    point.distance(ship.position) < get_archetype(ship.archetype).hit_radius
}
