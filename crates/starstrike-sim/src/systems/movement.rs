//! Kinematic integration for the player, projectiles and ships.
//!
//! `scale` is the per-frame step multiplier from the pattern clock: 1.0 for
//! fixed per-frame stepping, `dt * 60` for wall-clock stepping.

use glam::DVec3;

use starstrike_core::components::{Player, Projectile, Ship};
use starstrike_core::constants::{PATTERN_TIME_STEP, ZIGZAG_FREQUENCY};
use starstrike_core::enums::MovementPattern;
use starstrike_core::events::SimEvent;

use crate::archetypes::get_archetype;
use crate::config::ArenaConfig;
use crate::presenter::Presenter;

/// Move the player by the held directions.
pub fn apply_player_input(player: &mut Player, step: f64, scale: f64) {
    player.position += player.movement.axis() * step * scale;
}

/// position += velocity for every projectile. Velocity is never re-derived.
pub fn advance_projectiles(projectiles: &mut [Projectile], scale: f64) {
    for projectile in projectiles {
        projectile.position += projectile.velocity * scale;
    }
}

/// Advance every ship along its pattern and remove ships that left the depth interval.
/// Removal is not scored. Returns the number of ships removed.
pub fn advance_ships(
    ships: &mut Vec<Ship>,
    arena: &ArenaConfig,
    scale: f64,
    presenter: &mut impl Presenter,
    events: &mut Vec<SimEvent>,
) -> usize {
    let mut escaped = 0;
    for i in (0..ships.len()).rev() {
        step_ship(&mut ships[i], arena, scale);

        let depth = ships[i].position.z;
        if depth < arena.depth_min || depth > arena.depth_max {
            let ship = ships.remove(i);
            presenter.remove_renderable(ship.handle);
            log::trace!("{} #{} left the field at depth {depth}", ship.archetype, ship.id);
            events.push(SimEvent::ShipEscaped {
                ship_id: ship.id,
                archetype: ship.archetype,
            });
            escaped += 1;
        }
    }
    escaped
}

/// Advance one ship by one frame along its archetype's pattern.
pub fn step_ship(ship: &mut Ship, arena: &ArenaConfig, scale: f64) {
    let archetype = get_archetype(ship.archetype);
    step_pattern(ship, &archetype.pattern, archetype.speed, arena, scale);
}

/// Advance a ship by one frame along `pattern` at `speed` per reference frame.
/// Pure function of the ship's own state.
pub fn step_pattern(
    ship: &mut Ship,
    pattern: &MovementPattern,
    speed: f64,
    arena: &ArenaConfig,
    scale: f64,
) {
    ship.pattern.time += PATTERN_TIME_STEP * scale;

    let t = ship.pattern.time;
    let advance = speed * scale;
    let pos = &mut ship.position;

    match *pattern {
        MovementPattern::Straight { drift } => {
            pos.z += advance;
            pos.x += t.sin() * drift * scale;
        }
        MovementPattern::SineWeave { amplitude } => {
            pos.z += advance;
            pos.x += t.sin() * amplitude * scale;
        }
        MovementPattern::Circular { amplitude } => {
            pos.z += advance;
            pos.x += t.cos() * amplitude * scale;
            pos.y += t.sin() * amplitude * scale;
        }
        MovementPattern::Zigzag { amplitude } => {
            pos.x = ship.pattern.origin.x + (t * ZIGZAG_FREQUENCY).sin() * amplitude;
            pos.z += advance;
            if pos.z > arena.depth_max {
                pos.z = arena.far_depth();
            }
        }
        MovementPattern::Orbit { radius } => {
            let origin = ship.pattern.origin;
            *pos = origin + DVec3::new(t.cos() * radius, t.sin() * radius, 0.0);
        }
        MovementPattern::Bounce => {
            *pos += ship.pattern.heading * advance;
            reflect(*pos, &mut ship.pattern.heading, arena.lateral_bound);
        }
    }

    ship.rotation += ship.spin * scale;
}

/// Negate each lateral heading component whose coordinate is past the bound
/// and still moving outward.
fn reflect(position: DVec3, heading: &mut DVec3, bound: f64) {
    if (position.x > bound && heading.x > 0.0) || (position.x < -bound && heading.x < 0.0) {
        heading.x = -heading.x;
    }
    if (position.y > bound && heading.y > 0.0) || (position.y < -bound && heading.y < 0.0) {
        heading.y = -heading.y;
    }
}
