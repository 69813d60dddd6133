//! Shot cooldown controller
//!
//! Moving pulls a ship's cooldown down toward the minimum; once a ship has
//! fired, every tick pushes it back up toward the maximum by a smaller step.
//! Both nudges are guarded by threshold checks rather than clamped.

use super::state::Ship;
use crate::tuning::Tuning;

/// Adjust one ship's cooldown for this tick
pub fn update_cooldown(ship: &mut Ship, tuning: &Tuning) {
    if ship.moved && ship.cooldown_rate > tuning.min_cooldown {
        ship.cooldown_rate -= tuning.cooldown_step * tuning.decay_multiplier;
    }
    if ship.has_fired_before && ship.cooldown_rate < tuning.max_cooldown {
        ship.cooldown_rate += tuning.cooldown_step;
    }
}

/// Run the controller for both ships, after movement and spawning
pub fn update_cooldowns(ships: &mut [Ship], tuning: &Tuning) {
    for ship in ships.iter_mut() {
        update_cooldown(ship, tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Player;

    fn ship(tuning: &Tuning) -> Ship {
        Ship::new(Player::A, tuning)
    }

    #[test]
    fn test_idle_unfired_ship_keeps_minimum() {
        let tuning = Tuning::default();
        let mut s = ship(&tuning);
        for _ in 0..100 {
            update_cooldown(&mut s, &tuning);
        }
        assert_eq!(s.cooldown_rate, tuning.min_cooldown);
    }

    #[test]
    fn test_fired_ship_grows_each_tick() {
        let tuning = Tuning::default();
        let mut s = ship(&tuning);
        s.has_fired_before = true;
        update_cooldown(&mut s, &tuning);
        let expected = tuning.min_cooldown + tuning.cooldown_step;
        assert!((s.cooldown_rate - expected).abs() < 1e-6);
    }

    #[test]
    fn test_moving_fired_ship_nets_decrease() {
        let tuning = Tuning::default();
        let mut s = ship(&tuning);
        s.has_fired_before = true;
        s.cooldown_rate = 1.0;
        s.moved = true;
        update_cooldown(&mut s, &tuning);
        let expected = 1.0 - tuning.cooldown_step * tuning.decay_multiplier + tuning.cooldown_step;
        assert!((s.cooldown_rate - expected).abs() < 1e-6);
        assert!(s.cooldown_rate < 1.0);
    }

    #[test]
    fn test_moving_at_minimum_does_not_decay() {
        let tuning = Tuning::default();
        let mut s = ship(&tuning);
        s.moved = true;
        update_cooldown(&mut s, &tuning);
        assert_eq!(s.cooldown_rate, tuning.min_cooldown);
    }

    #[test]
    fn test_growth_stops_at_maximum() {
        let tuning = Tuning::default();
        let mut s = ship(&tuning);
        s.has_fired_before = true;
        s.cooldown_rate = tuning.max_cooldown;
        update_cooldown(&mut s, &tuning);
        assert_eq!(s.cooldown_rate, tuning.max_cooldown);
    }

    #[test]
    fn test_out_of_range_value_is_only_nudged() {
        let tuning = Tuning::default();
        let mut s = ship(&tuning);
        s.moved = true;
        s.cooldown_rate = 50.0;
        update_cooldown(&mut s, &tuning);
        let expected = 50.0 - tuning.cooldown_step * tuning.decay_multiplier;
        assert!((s.cooldown_rate - expected).abs() < 1e-4);
    }
}
