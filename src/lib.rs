//! Toasty Duels - A two-player vertical arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, cooldowns, collisions, scenes)
//! - `renderer`: Rectangle-based scene composition and the terminal canvas
//! - `platform`: Keyboard abstraction and terminal key tracking
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (matches the window's drawable area)
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Frame cap; one simulation tick per rendered frame
    pub const FRAME_LIMIT: u32 = 60;

    /// Horizontal ship displacement per tick while a movement key is held
    pub const SHIP_VELOCITY: f32 = 10.0;
    /// Vertical projectile displacement per tick
    pub const PROJECTILE_VELOCITY: f32 = 4.0;
    pub const MAX_HEALTH: u32 = 10;

    /// Ship sprite bounds
    pub const SHIP_WIDTH: f32 = 80.0;
    pub const SHIP_HEIGHT: f32 = 50.0;
    /// Projectile sprite bounds
    pub const PROJECTILE_WIDTH: f32 = 8.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;

    /// Starting rows: ship A at the top, ship B near the bottom
    pub const SHIP_A_START_Y: f32 = 25.0;
    pub const SHIP_B_START_Y: f32 = 440.0;

    /// Shot cooldown bounds (seconds between shots)
    pub const MIN_COOLDOWN: f32 = 0.3;
    pub const MAX_COOLDOWN: f32 = 12.0;
    /// Passive cooldown growth per tick once a ship has fired
    pub const COOLDOWN_STEP: f32 = 0.0005;
    /// How much faster moving pulls the cooldown down than idling pushes it up
    pub const DECAY_MULTIPLIER: f32 = 4.0;

    /// Seconds the result screen stays up before returning to the title
    pub const RESULT_SCREEN_DELAY: f32 = 2.5;

    /// Health bar: width per remaining health point, and bar height
    pub const HEALTH_BAR_WIDTH: f32 = 100.0;
    pub const HEALTH_BAR_HEIGHT: f32 = 10.0;
}
