//! Cleanup system: drops projectiles that have flown past their range.

use starstrike_core::components::Projectile;

use crate::presenter::Presenter;

/// Remove projectiles whose travelled distance exceeds `range`, releasing their renderables.
/// Returns the number removed.
pub fn run(projectiles: &mut Vec<Projectile>, range: f64, presenter: &mut impl Presenter) -> usize {
    let mut removed = 0;
    for i in (0..projectiles.len()).rev() {
        if projectiles[i].travelled() > range {
            let projectile = projectiles.remove(i);
            presenter.remove_renderable(projectile.handle);
            removed += 1;
        }
    }
    removed
}
