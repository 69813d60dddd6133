//! Platform abstraction layer
//!
//! The simulation only ever asks "is this key down right now?". Anything
//! that can answer that implements [`KeySource`]; the terminal front end
//! lives in [`terminal`].

pub mod terminal;

pub use terminal::KeyTracker;

use crate::sim::{Player, ShipControls, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    RightShift,
    A,
    D,
    Space,
    Enter,
    Escape,
    R,
}

/// Anything that can report held keys
pub trait KeySource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Fixed movement/fire keys for one ship
#[derive(Debug, Clone, Copy)]
pub struct ShipBindings {
    pub left: Key,
    pub right: Key,
    pub fire: Key,
}

impl ShipBindings {
    pub const fn for_player(player: Player) -> Self {
        match player {
            Player::A => Self {
                left: Key::Left,
                right: Key::Right,
                fire: Key::RightShift,
            },
            Player::B => Self {
                left: Key::A,
                right: Key::D,
                fire: Key::Space,
            },
        }
    }

    pub fn sample(&self, keys: &impl KeySource) -> ShipControls {
        ShipControls {
            left: keys.is_key_down(self.left),
            right: keys.is_key_down(self.right),
            fire: keys.is_key_down(self.fire),
        }
    }
}

/// Sample every bound key once and build this tick's input
pub fn poll_input(keys: &impl KeySource) -> TickInput {
    TickInput {
        ships: Player::ALL.map(|player| ShipBindings::for_player(player).sample(keys)),
        confirm: keys.is_key_down(Key::Enter),
        cancel: keys.is_key_down(Key::Escape),
        restart: keys.is_key_down(Key::R),
    }
}
