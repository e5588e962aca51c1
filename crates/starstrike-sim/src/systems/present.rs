//! Push end-of-frame transforms for every live entity to the presenter.

use starstrike_core::components::{Explosion, Projectile, Ship};
use starstrike_core::types::Transform;

use crate::presenter::Presenter;

pub fn run(
    ships: &[Ship],
    projectiles: &[Projectile],
    explosions: &[Explosion],
    presenter: &mut impl Presenter,
) {
    for ship in ships {
        presenter.set_transform(
            ship.handle,
            &Transform {
                position: ship.position,
                rotation: ship.rotation,
                scale: 1.0,
            },
        );
    }

    for projectile in projectiles {
        presenter.set_transform(projectile.handle, &Transform::at(projectile.position));
    }

    for particle in explosions.iter().flat_map(|e| &e.particles) {
        presenter.set_transform(
            particle.handle,
            &Transform {
                position: particle.position,
                rotation: particle.rotation,
                scale: particle.scale,
            },
        );
    }
}
