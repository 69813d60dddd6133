//! Scene composition: turns game state into canvas calls

use glam::Vec2;

use super::{Canvas, Paint};
use crate::consts::{HEALTH_BAR_HEIGHT, HEALTH_BAR_WIDTH};
use crate::sim::{Direction, GameState, Player, Rect, Scene};

const TITLE: &str = "TOASTY DUELS!";
const TITLE_POS: Vec2 = Vec2::new(200.0, 200.0);
const INSTRUCTIONS_POS: Vec2 = Vec2::new(200.0, 300.0);
const INSTRUCTIONS: [&str; 4] = [
    "Player 1 (top):    <- -> move, Right Shift (or /) fires",
    "Player 2 (bottom): A D move, Space fires",
    "Moving keeps your guns hot. Standing still cools them.",
    "Press Enter to start, Escape to give up",
];
const LINE_SPACING: f32 = 40.0;
const RESULT_TEXT_POS: Vec2 = Vec2::new(420.0, 500.0);

/// Draw one complete frame for the current scene
pub fn draw_frame(canvas: &mut impl Canvas, state: &GameState) {
    let arena = state.tuning.arena_size();
    canvas.fill_rect(Rect::from_pos_size(Vec2::ZERO, arena), Paint::Backdrop);

    match state.scene {
        Scene::Start => draw_title(canvas),
        Scene::Gameplay => draw_gameplay(canvas, state),
        Scene::Result { winner, .. } => draw_result(canvas, winner),
    }
}

fn draw_title(canvas: &mut impl Canvas) {
    canvas.draw_text(TITLE_POS, TITLE, Paint::Title);
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        let pos = INSTRUCTIONS_POS + Vec2::new(0.0, i as f32 * LINE_SPACING);
        canvas.draw_text(pos, line, Paint::Text);
    }
}

fn draw_gameplay(canvas: &mut impl Canvas, state: &GameState) {
    // Collided projectiles are inert and never drawn
    for projectile in state.projectiles.iter().filter(|p| !p.collided()) {
        let paint = match projectile.direction() {
            Direction::Up => Paint::ProjectileUp,
            Direction::Down => Paint::ProjectileDown,
        };
        canvas.fill_rect(projectile.bounds(), paint);
    }

    let arena = state.tuning.arena_size();
    for ship in &state.ships {
        if ship.is_alive() {
            let paint = match (ship.player_hit, ship.player) {
                (true, _) => Paint::ShipHit,
                (false, Player::A) => Paint::ShipA,
                (false, Player::B) => Paint::ShipB,
            };
            canvas.fill_rect(ship.bounds(), paint);
        }

        let bar = ship.health_bar(arena, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT);
        if bar.width > 0.0 {
            let paint = match ship.player {
                Player::A => Paint::HealthA,
                Player::B => Paint::HealthB,
            };
            canvas.fill_rect(bar, paint);
        }
    }
}

fn draw_result(canvas: &mut impl Canvas, winner: Player) {
    canvas.draw_text(RESULT_TEXT_POS, &format!("{} Wins!", winner.label()), Paint::Winner);
}
