//! Simulation tick
//!
//! One call per rendered frame. Runs the scene state machine and, during
//! gameplay, the full pipeline: movement and spawning, cooldowns, projectile
//! flight, collisions, pruning, then the win check.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::collision::{advance_projectiles, resolve_collisions};
use super::cooldown::update_cooldowns;
use super::lifecycle::prune_projectiles;
use super::movement::{ShipControls, move_ship, try_fire};
use super::state::{GameEvent, GameState, Player, Scene};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held keys per ship, indexed by [`Player::index`]
    pub ships: [ShipControls; 2],
    /// Start the duel from the title screen
    pub confirm: bool,
    /// Abandon the duel and return to the title screen
    pub cancel: bool,
    /// Ask to restart from the result screen (the result screen is timed and
    /// does not act on it)
    pub restart: bool,
}

impl TickInput {
    pub fn controls(&self, player: Player) -> &ShipControls {
        &self.ships[player.index()]
    }
}

/// Advance the game by one tick at monotonic time `now`
pub fn tick(state: &mut GameState, input: &TickInput, now: Duration) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.scene {
        Scene::Start => {
            if input.confirm {
                state.reset();
                change_scene(state, Scene::Gameplay, &mut events);
            }
        }
        Scene::Gameplay => {
            if input.cancel {
                state.reset();
                change_scene(state, Scene::Start, &mut events);
                return events;
            }
            simulate(state, input, now, &mut events);
        }
        Scene::Result { since, .. } => {
            if input.restart {
                log::debug!("Restart ignored while the result is shown");
            }
            let shown = now.saturating_sub(since).as_secs_f32();
            if shown >= state.tuning.result_screen_delay {
                state.reset();
                change_scene(state, Scene::Start, &mut events);
            }
        }
    }

    events
}

fn simulate(state: &mut GameState, input: &TickInput, now: Duration, events: &mut Vec<GameEvent>) {
    state.time_ticks += 1;
    let tuning = &state.tuning;

    // Movement and spawning, each ship on its own controls
    for player in Player::ALL {
        let ship = &mut state.ships[player.index()];
        let controls = input.controls(player);
        ship.player_hit = false;
        move_ship(ship, controls, tuning);
        if let Some(projectile) = try_fire(ship, controls, now, tuning) {
            state.projectiles.push(projectile);
            events.push(GameEvent::Shot { player });
        }
    }
    update_cooldowns(&mut state.ships, tuning);

    // Flight, collisions, pruning
    advance_projectiles(&mut state.projectiles, tuning.projectile_velocity);
    events.extend(resolve_collisions(&mut state.projectiles, &mut state.ships));
    prune_projectiles(
        &mut state.projectiles,
        tuning.projectile_velocity,
        tuning.arena_size(),
    );

    if let Some(winner) = state.winner() {
        log::info!(
            "{} wins ({} health left) after {} ticks",
            winner.label(),
            state.ship(winner).health,
            state.time_ticks
        );
        change_scene(state, Scene::Result { winner, since: now }, events);
    }
}

fn change_scene(state: &mut GameState, scene: Scene, events: &mut Vec<GameEvent>) {
    log::info!("Scene {:?} -> {:?}", state.scene, scene);
    state.scene = scene;
    events.push(GameEvent::SceneChanged { scene });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Direction, Projectile};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn playing() -> GameState {
        let mut state = GameState::new(Tuning::default());
        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        tick(&mut state, &confirm, Duration::ZERO);
        assert_eq!(state.scene, Scene::Gameplay);
        state
    }

    fn fire(player: Player) -> TickInput {
        let mut input = TickInput::default();
        input.ships[player.index()].fire = true;
        input
    }

    #[test]
    fn test_start_waits_for_confirm() {
        let mut state = GameState::new(Tuning::default());
        let events = tick(&mut state, &fire(Player::A), Duration::ZERO);
        assert!(events.is_empty());
        assert_eq!(state.scene, Scene::Start);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_confirm_enters_gameplay_with_clean_slate() {
        let mut state = GameState::new(Tuning::default());
        state.ships[0].health = 2;
        state.projectiles.push(Projectile::new(Vec2::new(10.0, 300.0), Vec2::new(8.0, 20.0), Direction::Up));

        let confirm = TickInput {
            confirm: true,
            ..Default::default()
        };
        let events = tick(&mut state, &confirm, Duration::ZERO);

        assert_eq!(state.scene, Scene::Gameplay);
        assert_eq!(events, vec![GameEvent::SceneChanged { scene: Scene::Gameplay }]);
        assert!(state.projectiles.is_empty());
        assert!(state.ships.iter().all(|s| s.health == state.tuning.max_health));
    }

    #[test]
    fn test_cancel_returns_to_start() {
        let mut state = playing();
        tick(&mut state, &fire(Player::B), FRAME);
        assert_eq!(state.projectiles.len(), 1);

        let cancel = TickInput {
            cancel: true,
            ..Default::default()
        };
        tick(&mut state, &cancel, FRAME * 2);
        assert_eq!(state.scene, Scene::Start);
        assert!(state.projectiles.is_empty());
        assert!(!state.ship(Player::B).has_fired_before);
    }

    #[test]
    fn test_shot_is_spawned_and_advanced() {
        let mut state = playing();
        let events = tick(&mut state, &fire(Player::A), FRAME);
        assert_eq!(events, vec![GameEvent::Shot { player: Player::A }]);

        let ship = state.ship(Player::A);
        let projectile = &state.projectiles[0];
        assert_eq!(projectile.direction(), Direction::Down);
        assert_eq!(projectile.pos.y, ship.pos.y + ship.size.y + state.tuning.projectile_velocity);
    }

    #[test]
    fn test_held_fire_waits_for_cooldown() {
        let mut state = playing();
        let input = fire(Player::B);
        // Ten frames is well under the 0.3s minimum cooldown
        for i in 1..=10 {
            tick(&mut state, &input, FRAME * i);
        }
        assert_eq!(state.projectiles.len(), 1);
        assert!(state.ship(Player::B).cooldown_rate > state.tuning.min_cooldown);
    }

    #[test]
    fn test_ship_a_knockout_goes_to_result() {
        let mut state = playing();
        state.ship_mut(Player::A).health = 1;
        state.ship_mut(Player::B).health = 3;
        let a = state.ship(Player::A).bounds();
        // Will overlap ship A after one step upward
        state.projectiles.push(Projectile::new(
            Vec2::new(a.left + 10.0, a.bottom() - 2.0),
            Vec2::new(8.0, 20.0),
            Direction::Up,
        ));

        let now = Duration::from_secs(7);
        let events = tick(&mut state, &TickInput::default(), now);

        assert_eq!(state.ship(Player::A).health, 0);
        assert_eq!(
            state.scene,
            Scene::Result {
                winner: Player::B,
                since: now
            }
        );
        assert!(events.contains(&GameEvent::ShipHit {
            player: Player::A,
            health: 0
        }));
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_result_is_timed_and_ignores_input() {
        let mut state = playing();
        let since = Duration::from_secs(10);
        state.scene = Scene::Result {
            winner: Player::A,
            since,
        };
        state.ship_mut(Player::B).health = 0;

        let restart = TickInput {
            restart: true,
            confirm: true,
            cancel: true,
            ..Default::default()
        };
        tick(&mut state, &restart, since + Duration::from_secs(1));
        assert!(matches!(state.scene, Scene::Result { .. }));
        assert_eq!(state.ship(Player::B).health, 0);

        let events = tick(&mut state, &TickInput::default(), since + Duration::from_millis(2500));
        assert_eq!(state.scene, Scene::Start);
        assert_eq!(events, vec![GameEvent::SceneChanged { scene: Scene::Start }]);
        assert_eq!(state.ship(Player::B).health, state.tuning.max_health);
    }

    #[test]
    fn test_intercepted_projectiles_are_removed() {
        let mut state = playing();
        let size = Vec2::new(8.0, 20.0);
        state.projectiles.push(Projectile::new(Vec2::new(300.0, 300.0), size, Direction::Up));
        state.projectiles.push(Projectile::new(Vec2::new(302.0, 280.0), size, Direction::Down));

        let events = tick(&mut state, &TickInput::default(), FRAME);

        assert!(events.contains(&GameEvent::ProjectilesCollided));
        assert!(state.projectiles.is_empty());
        assert!(state.ships.iter().all(|s| s.health == state.tuning.max_health));
    }

    #[test]
    fn test_player_hit_lasts_one_tick() {
        let mut state = playing();
        let b = state.ship(Player::B).bounds();
        state.projectiles.push(Projectile::new(
            Vec2::new(b.left + 5.0, b.top - 10.0),
            Vec2::new(8.0, 20.0),
            Direction::Down,
        ));
        tick(&mut state, &TickInput::default(), FRAME);
        assert!(state.ship(Player::B).player_hit);
        tick(&mut state, &TickInput::default(), FRAME * 2);
        assert!(!state.ship(Player::B).player_hit);
    }

    fn arb_controls() -> impl Strategy<Value = ShipControls> {
        (any::<bool>(), any::<bool>(), any::<bool>())
            .prop_map(|(left, right, fire)| ShipControls { left, right, fire })
    }

    proptest! {
        #[test]
        fn prop_gameplay_invariants_hold(
            frames in prop::collection::vec((arb_controls(), arb_controls(), 1u64..400), 1..200)
        ) {
            let mut state = playing();
            let mut now = Duration::ZERO;

            for (a, b, step_ms) in frames {
                now += Duration::from_millis(step_ms);
                let before: Vec<u32> = state.ships.iter().map(|s| s.health).collect();
                let input = TickInput { ships: [a, b], ..Default::default() };
                tick(&mut state, &input, now);

                if state.scene != Scene::Gameplay {
                    break;
                }
                for (ship, prev) in state.ships.iter().zip(before) {
                    prop_assert!(ship.health <= prev);
                    let bounds = ship.bounds();
                    prop_assert!(bounds.left >= 0.0 && bounds.right() <= state.tuning.arena_width);
                    // Opposing keys never count as movement
                    let controls = input.controls(ship.player);
                    if controls.left && controls.right {
                        prop_assert!(!ship.moved);
                    }
                }
                // Spent projectiles never survive a tick
                for projectile in &state.projectiles {
                    prop_assert!(!projectile.collided());
                }
            }
        }
    }
}
