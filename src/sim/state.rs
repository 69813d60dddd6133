//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; there is no
//! process-wide state.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::tuning::Tuning;

/// Which scene is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    /// Title screen, waiting for confirm
    Start,
    /// Active duel
    Gameplay,
    /// A ship was destroyed; shown until the delay expires
    Result {
        winner: Player,
        /// Monotonic time the result was reached
        since: Duration,
    },
}

/// Player slot. Ship A holds the top of the arena, ship B the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Direction this player's shots travel
    pub fn facing(self) -> Direction {
        match self {
            Player::A => Direction::Down,
            Player::B => Direction::Up,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Player::A => "Player 1",
            Player::B => "Player 2",
        }
    }
}

/// Notable things that happened during a tick, for logging and presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Shot { player: Player },
    ShipHit { player: Player, health: u32 },
    ProjectilesCollided,
    SceneChanged { scene: Scene },
}

/// Vertical travel direction of a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Per-tick displacement for the given speed
    pub fn velocity(self, speed: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -speed),
            Direction::Down => Vec2::new(0.0, speed),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The ship this direction threatens
    pub fn target(self) -> Player {
        match self {
            Direction::Up => Player::A,
            Direction::Down => Player::B,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    direction: Direction,
    collided: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, size: Vec2, direction: Direction) -> Self {
        Self {
            pos,
            size,
            direction,
            collided: false,
        }
    }

    /// Fixed at spawn
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Once set the projectile is inert and pending removal
    #[inline]
    pub fn collided(&self) -> bool {
        self.collided
    }

    pub fn mark_collided(&mut self) {
        self.collided = true;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub player: Player,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub health: u32,
    /// Seconds that must pass between shots
    pub cooldown_rate: f32,
    /// Monotonic time of the last shot this episode
    pub last_shot: Option<Duration>,
    /// Changed position during this tick's input phase
    pub moved: bool,
    pub has_fired_before: bool,
    /// Took a hit this tick
    pub player_hit: bool,
}

impl Ship {
    pub fn new(player: Player, tuning: &Tuning) -> Self {
        let start_y = match player {
            Player::A => tuning.ship_a_start_y,
            Player::B => tuning.ship_b_start_y,
        };
        let x = (tuning.arena_width - tuning.ship_width) / 2.0;
        Self {
            player,
            pos: Vec2::new(x, start_y),
            size: tuning.ship_size(),
            health: tuning.max_health,
            cooldown_rate: tuning.min_cooldown,
            last_shot: None,
            moved: false,
            has_fired_before: false,
            player_hit: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn facing(&self) -> Direction {
        self.player.facing()
    }

    /// Remove one health point, never going below zero
    pub fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
        self.player_hit = true;
    }

    /// Whether the shot cooldown has strictly elapsed at `now`
    pub fn can_fire(&self, now: Duration) -> bool {
        match self.last_shot {
            None => true,
            Some(at) => now.saturating_sub(at).as_secs_f32() > self.cooldown_rate,
        }
    }

    /// Where a new projectile of `size` appears: centered horizontally,
    /// flush against the edge the ship faces.
    pub fn muzzle(&self, size: Vec2) -> Vec2 {
        let x = self.pos.x + (self.size.x - size.x) / 2.0;
        let y = match self.facing() {
            Direction::Down => self.pos.y + self.size.y,
            Direction::Up => self.pos.y - size.y,
        };
        Vec2::new(x, y)
    }

    /// Health bar rectangle: width scales with remaining health. Ship A's bar
    /// sits on the top edge of the arena, ship B's on the bottom edge.
    pub fn health_bar(&self, arena: Vec2, width_per_point: f32, height: f32) -> Rect {
        let top = match self.player {
            Player::A => 0.0,
            Player::B => arena.y - height,
        };
        Rect::new(0.0, top, self.health as f32 * width_per_point, height)
    }
}

/// Complete simulation context for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub scene: Scene,
    /// Indexed by [`Player::index`]
    pub ships: [Ship; 2],
    /// Unordered; insertion order is incidental
    pub projectiles: Vec<Projectile>,
    /// Gameplay ticks simulated this episode
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        let ships = [Ship::new(Player::A, &tuning), Ship::new(Player::B, &tuning)];
        Self {
            tuning,
            scene: Scene::Start,
            ships,
            projectiles: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Restore both ships to their starting state and clear all projectiles
    pub fn reset(&mut self) {
        self.ships = [
            Ship::new(Player::A, &self.tuning),
            Ship::new(Player::B, &self.tuning),
        ];
        self.projectiles.clear();
        self.time_ticks = 0;
    }

    pub fn ship(&self, player: Player) -> &Ship {
        &self.ships[player.index()]
    }

    pub fn ship_mut(&mut self, player: Player) -> &mut Ship {
        &mut self.ships[player.index()]
    }

    /// Winner once either ship is out of health. Ship A is checked first, so a
    /// double knockout goes to ship B.
    pub fn winner(&self) -> Option<Player> {
        if !self.ship(Player::A).is_alive() {
            Some(Player::B)
        } else if !self.ship(Player::B).is_alive() {
            Some(Player::A)
        } else {
            None
        }
    }
}
