//! Rendering module
//!
//! Scenes are composed from positioned rectangles and text labels in arena
//! coordinates. A [`Canvas`] decides how those reach the screen; the
//! terminal implementation lives in [`terminal`].

pub mod scene;
pub mod terminal;

pub use scene::draw_frame;
pub use terminal::TerminalCanvas;

use glam::Vec2;

use crate::sim::Rect;

/// Semantic colors; canvases map them to whatever their backend supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    Backdrop,
    ShipA,
    ShipB,
    /// A ship flashing from a hit this tick
    ShipHit,
    ProjectileUp,
    ProjectileDown,
    HealthA,
    HealthB,
    Title,
    Text,
    Winner,
}

/// Drawing surface in arena coordinates
pub trait Canvas {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    /// Draw a text label with its top-left corner at `pos`
    fn draw_text(&mut self, pos: Vec2, text: &str, paint: Paint);
}
