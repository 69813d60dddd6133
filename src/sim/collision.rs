//! Collision detection and damage resolution
//!
//! Projectiles threaten only the ship they fly toward, and only collide with
//! projectiles travelling the opposite way. Detection uses the positions at
//! the start of the pass, so the outcome does not depend on iteration order.

use super::geometry::overlaps;
use super::state::{GameEvent, Projectile, Ship};

/// Advance every projectile by its fixed per-tick displacement
pub fn advance_projectiles(projectiles: &mut [Projectile], speed: f32) {
    for projectile in projectiles.iter_mut() {
        projectile.pos += projectile.direction().velocity(speed);
    }
}

/// Flag collisions and apply damage. Returns the events raised.
///
/// A projectile that strikes its target ship skips its own interception
/// checks, but oncoming projectiles still test against it. A ship alive at the
/// start of the pass absorbs every shot that reaches it this tick.
pub fn resolve_collisions(projectiles: &mut [Projectile], ships: &mut [Ship; 2]) -> Vec<GameEvent> {
    let mut events = Vec::new();
    // Projectiles that were already inert take no part
    let live: Vec<bool> = projectiles.iter().map(|p| !p.collided()).collect();
    let alive = [ships[0].is_alive(), ships[1].is_alive()];
    let mut struck_ship = vec![false; projectiles.len()];

    // Projectile vs the ship it is flying toward
    for (i, projectile) in projectiles.iter_mut().enumerate() {
        if !live[i] {
            continue;
        }
        let index = projectile.direction().target().index();
        let target = &mut ships[index];
        if alive[index] && overlaps(&projectile.bounds(), &target.bounds()) {
            projectile.mark_collided();
            struck_ship[i] = true;
            target.take_hit();
            log::debug!("{} hit, {} health left", target.player.label(), target.health);
            events.push(GameEvent::ShipHit {
                player: target.player,
                health: target.health,
            });
        }
    }

    // Projectile vs oncoming projectiles, each pair once
    let mut intercepted = 0usize;
    for i in 0..projectiles.len() {
        if !live[i] {
            continue;
        }
        for j in (i + 1)..projectiles.len() {
            if !live[j] || projectiles[j].direction() == projectiles[i].direction() {
                continue;
            }
            if struck_ship[i] && struck_ship[j] {
                continue;
            }
            if overlaps(&projectiles[i].bounds(), &projectiles[j].bounds()) {
                projectiles[i].mark_collided();
                projectiles[j].mark_collided();
                intercepted += 1;
                events.push(GameEvent::ProjectilesCollided);
            }
        }
    }

    if intercepted > 0 {
        log::debug!("{intercepted} projectile pair(s) intercepted");
    }
    events
}
