//! Projectile lifecycle: prune spent projectiles

use glam::Vec2;

use super::geometry::would_stay_in_bounds;
use super::state::Projectile;

/// Whether a projectile should be removed this tick: it has collided, or its
/// next displacement would carry it out of the arena.
pub fn is_spent(projectile: &Projectile, speed: f32, arena: Vec2) -> bool {
    projectile.collided()
        || !would_stay_in_bounds(&projectile.bounds(), projectile.direction().velocity(speed), arena)
}

/// Remove every spent projectile. Returns how many were removed.
pub fn prune_projectiles(projectiles: &mut Vec<Projectile>, speed: f32, arena: Vec2) -> usize {
    let before = projectiles.len();
    projectiles.retain(|p| !is_spent(p, speed, arena));
    let removed = before - projectiles.len();
    if removed > 0 {
        log::trace!("Pruned {removed} projectile(s), {} in flight", projectiles.len());
    }
    removed
}
