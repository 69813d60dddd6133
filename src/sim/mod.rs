//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed per-tick displacements
//! - Time only enters through the `now` passed to [`tick`]
//! - No rendering or platform dependencies

pub mod collision;
pub mod cooldown;
pub mod geometry;
pub mod lifecycle;
pub mod movement;
pub mod state;
pub mod tick;

pub use collision::{advance_projectiles, resolve_collisions};
pub use cooldown::{update_cooldown, update_cooldowns};
pub use geometry::{Rect, overlaps, would_stay_in_bounds};
pub use lifecycle::{is_spent, prune_projectiles};
pub use movement::{ShipControls, move_ship, try_fire};
pub use state::{Direction, GameEvent, GameState, Player, Projectile, Scene, Ship};
pub use tick::{TickInput, tick};
