//! Ship movement and projectile spawning
//!
//! One implementation serves both players; the ship's slot decides where it
//! fires from and which way its projectiles travel.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::would_stay_in_bounds;
use super::state::{Projectile, Ship};
use crate::tuning::Tuning;

/// Held keys for one ship during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipControls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl ShipControls {
    /// Horizontal intent: -1, 0 or 1. Opposing keys cancel out.
    pub fn steer(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Move a ship according to its controls, keeping it inside the arena.
///
/// Both keys are read before anything moves, so holding left and right
/// together leaves the ship in place with `moved == false`.
pub fn move_ship(ship: &mut Ship, controls: &ShipControls, tuning: &Tuning) {
    ship.moved = false;

    let steer = controls.steer();
    if steer == 0.0 {
        return;
    }

    let offset = Vec2::new(steer * tuning.ship_velocity, 0.0);
    if would_stay_in_bounds(&ship.bounds(), offset, tuning.arena_size()) {
        ship.pos += offset;
        ship.moved = true;
    }
}

/// Spawn a projectile if the fire key is held and the cooldown has elapsed.
///
/// Returns the new projectile; the caller owns the collection.
pub fn try_fire(
    ship: &mut Ship,
    controls: &ShipControls,
    now: Duration,
    tuning: &Tuning,
) -> Option<Projectile> {
    if !controls.fire || !ship.can_fire(now) {
        return None;
    }

    let size = tuning.projectile_size();
    let projectile = Projectile::new(ship.muzzle(size), size, ship.facing());
    ship.last_shot = Some(now);
    ship.has_fired_before = true;
    log::debug!(
        "{} fired {:?} at x={:.1} (cooldown {:.4}s)",
        ship.player.label(),
        projectile.direction(),
        projectile.pos.x,
        ship.cooldown_rate
    );
    Some(projectile)
}
