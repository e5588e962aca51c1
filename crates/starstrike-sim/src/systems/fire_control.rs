//! Fire control: cooldown gating and projectile launch.

use starstrike_core::components::{Player, Projectile};
use starstrike_core::constants::{PROJECTILE_COLOR, PROJECTILE_OPACITY, PROJECTILE_SIZE};
use starstrike_core::enums::RenderKind;
use starstrike_core::events::SimEvent;
use starstrike_core::types::{Color, RenderStyle, Transform};

use crate::presenter::Presenter;
use crate::score::ScoreState;

/// Cooldown gate. Requests inside the cooldown window are dropped, not queued.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FireControl {
    /// Clock time of the last accepted shot.
    pub last_fire: Option<f64>,
}

impl FireControl {
    pub fn ready(&self, now: f64, cooldown_secs: f64) -> bool {
        match self.last_fire {
            None => true,
            Some(last) => now - last >= cooldown_secs,
        }
    }
}

/// Tunables for a launch, pulled from the simulation config.
#[derive(Debug, Clone, Copy)]
pub struct Launcher {
    pub cooldown_secs: f64,
    /// Travel per frame.
    pub speed: f64,
}

/// Launch one projectile from the player along the current aim if the cooldown allows.
/// Returns the new projectile id.
#[allow(clippy::too_many_arguments)]
pub fn try_fire(
    control: &mut FireControl,
    launcher: Launcher,
    player: &Player,
    now: f64,
    projectiles: &mut Vec<Projectile>,
    next_projectile_id: &mut u64,
    presenter: &mut impl Presenter,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
) -> Option<u64> {
    if !control.ready(now, launcher.cooldown_secs) {
        log::trace!("fire request at {now:.3}s dropped by cooldown");
        return None;
    }
    control.last_fire = Some(now);

    let handle = presenter.create_renderable(
        RenderKind::Projectile,
        &RenderStyle {
            color: Color(PROJECTILE_COLOR),
            size: PROJECTILE_SIZE,
            opacity: PROJECTILE_OPACITY,
        },
    );
    presenter.set_transform(handle, &Transform::at(player.position));

    let id = *next_projectile_id;
    *next_projectile_id += 1;
    projectiles.push(Projectile {
        id,
        handle,
        position: player.position,
        velocity: player.aim.direction() * launcher.speed,
        origin: player.position,
        fired_at: now,
    });
    score.shots_fired += 1;
    events.push(SimEvent::ShotFired { projectile_id: id });
    Some(id)
}
