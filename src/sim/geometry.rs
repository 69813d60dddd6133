//! Axis-aligned rectangle geometry
//!
//! Screen space: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (left, top, width, height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// The same box moved by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.left + offset.x, self.top + offset.y, self.width, self.height)
    }
}

/// Whether two boxes share any area
///
/// Strict comparisons: boxes that only touch along an edge do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left < b.right() && b.left < a.right() && a.top < b.bottom() && b.top < a.bottom()
}

/// Whether `bounds` moved by `offset` still lies inside `[0, arena.x] × [0, arena.y]`
pub fn would_stay_in_bounds(bounds: &Rect, offset: Vec2, arena: Vec2) -> bool {
    let moved = bounds.translated(offset);
    moved.top >= 0.0 && moved.left >= 0.0 && moved.right() <= arena.x && moved.bottom() <= arena.y
}
