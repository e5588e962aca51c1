//! Explosion lifecycle: particle burst creation, per-frame animation, and
//! atomic teardown once the lifetime has elapsed.
//!
//! Lifetime is measured on the simulation clock, so an explosion lasts the
//! same wall time at any frame rate. Particle drift is per frame, scaled by
//! the pattern clock like everything else that moves.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starstrike_core::components::{Explosion, Particle, ParticleMotion};
use starstrike_core::constants::{
    FLASH_SIZE, FRAGMENT_SIZE_MAX, FRAGMENT_SIZE_MIN, FRAGMENT_SPIN_MAX, PARTICLE_OPACITY,
    SHOCKWAVE_OPACITY, SHOCKWAVE_SIZE,
};
use starstrike_core::enums::{ParticleRole, RenderKind};
use starstrike_core::events::SimEvent;
use starstrike_core::types::{Color, RenderStyle, Transform};

use crate::config::ExplosionConfig;
use crate::presenter::Presenter;

/// Create an explosion at `origin`: one flash, `fragment_count` fragments, one shockwave.
#[allow(clippy::too_many_arguments)]
pub fn spawn(
    explosions: &mut Vec<Explosion>,
    next_explosion_id: &mut u64,
    origin: DVec3,
    color: Color,
    now: f64,
    config: &ExplosionConfig,
    rng: &mut ChaCha8Rng,
    presenter: &mut impl Presenter,
) -> u64 {
    let mut particles = Vec::with_capacity(config.fragment_count + 2);

    particles.push(make_particle(
        presenter,
        ParticleRole::Flash,
        origin,
        DVec3::ZERO,
        None,
        RenderStyle {
            color,
            size: FLASH_SIZE,
            opacity: PARTICLE_OPACITY,
        },
    ));

    for _ in 0..config.fragment_count {
        let direction = random_direction(rng);
        let speed = rng.gen_range(config.fragment_speed_min..=config.fragment_speed_max);
        let spin = DVec3::new(
            rng.gen_range(-FRAGMENT_SPIN_MAX..=FRAGMENT_SPIN_MAX),
            rng.gen_range(-FRAGMENT_SPIN_MAX..=FRAGMENT_SPIN_MAX),
            rng.gen_range(-FRAGMENT_SPIN_MAX..=FRAGMENT_SPIN_MAX),
        );
        let size = rng.gen_range(FRAGMENT_SIZE_MIN..=FRAGMENT_SIZE_MAX);
        particles.push(make_particle(
            presenter,
            ParticleRole::Fragment,
            origin,
            DVec3::ZERO,
            Some(ParticleMotion {
                velocity: direction * speed,
                spin,
            }),
            RenderStyle {
                color,
                size,
                opacity: PARTICLE_OPACITY,
            },
        ));
    }

    // Ring lies flat in the XZ plane.
    particles.push(make_particle(
        presenter,
        ParticleRole::Shockwave,
        origin,
        DVec3::new(FRAC_PI_2, 0.0, 0.0),
        None,
        RenderStyle {
            color,
            size: SHOCKWAVE_SIZE,
            opacity: SHOCKWAVE_OPACITY,
        },
    ));

    let id = *next_explosion_id;
    *next_explosion_id += 1;
    explosions.push(Explosion {
        id,
        origin,
        color,
        started_at: now,
        duration_secs: config.duration_secs,
        particles,
    });
    log::trace!("explosion #{id} at {origin}");
    id
}

fn make_particle(
    presenter: &mut impl Presenter,
    role: ParticleRole,
    position: DVec3,
    rotation: DVec3,
    motion: Option<ParticleMotion>,
    style: RenderStyle,
) -> Particle {
    let handle = presenter.create_renderable(RenderKind::Particle(role), &style);
    presenter.set_transform(
        handle,
        &Transform {
            position,
            rotation,
            scale: 1.0,
        },
    );
    Particle {
        handle,
        role,
        position,
        rotation,
        motion,
        base_opacity: style.opacity,
        opacity: style.opacity,
        scale: 1.0,
    }
}

/// Uniform unit vector on the sphere.
fn random_direction(rng: &mut ChaCha8Rng) -> DVec3 {
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let phi: f64 = rng.gen_range(0.0..TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    DVec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Animate live explosions and tear down the finished ones.
pub fn run(
    explosions: &mut Vec<Explosion>,
    now: f64,
    scale: f64,
    shockwave_growth: f64,
    presenter: &mut impl Presenter,
    events: &mut Vec<SimEvent>,
) {
    for i in (0..explosions.len()).rev() {
        let progress = explosions[i].progress(now);

        if progress >= 1.0 {
            let explosion = explosions.remove(i);
            for particle in &explosion.particles {
                presenter.remove_renderable(particle.handle);
            }
            log::debug!("explosion #{} finished", explosion.id);
            events.push(SimEvent::ExplosionFinished {
                explosion_id: explosion.id,
            });
            continue;
        }

        for particle in &mut explosions[i].particles {
            if let Some(motion) = particle.motion {
                particle.position += motion.velocity * scale;
                particle.rotation += motion.spin * scale;
            }
            particle.opacity = fade(particle.base_opacity, progress);
            presenter.set_opacity(particle.handle, particle.opacity);
            if particle.role == ParticleRole::Shockwave {
                particle.scale = 1.0 + progress * shockwave_growth;
            }
        }
    }
}

/// Linear fade from `base` at progress 0 to zero at progress 1.
pub fn fade(base: f64, progress: f64) -> f64 {
    base * (1.0 - progress.clamp(0.0, 1.0))
}
