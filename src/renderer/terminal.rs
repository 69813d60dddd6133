//! Terminal canvas - all terminal drawing lives here.
//!
//! The arena is scaled onto a character grid. A frame is composed into the
//! grid first and then written out in one pass.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};
use glam::Vec2;

use super::{Canvas, Paint};
use crate::sim::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    glyph: char,
    paint: Paint,
}

const BLANK: Cell = Cell {
    glyph: ' ',
    paint: Paint::Backdrop,
};

fn glyph(paint: Paint) -> char {
    match paint {
        Paint::Backdrop => ' ',
        Paint::ShipA | Paint::ShipB | Paint::ShipHit => '█',
        Paint::ProjectileUp | Paint::ProjectileDown => '│',
        Paint::HealthA | Paint::HealthB => '▬',
        Paint::Title | Paint::Text | Paint::Winner => '▒',
    }
}

fn color(paint: Paint) -> Color {
    match paint {
        Paint::Backdrop => Color::DarkBlue,
        Paint::ShipA => Color::Grey,
        Paint::ShipB => Color::White,
        Paint::ShipHit => Color::Red,
        Paint::ProjectileUp => Color::Yellow,
        Paint::ProjectileDown => Color::Cyan,
        Paint::HealthA => Color::Red,
        Paint::HealthB => Color::Yellow,
        Paint::Title => Color::Cyan,
        Paint::Text => Color::Grey,
        Paint::Winner => Color::Red,
    }
}

/// A character-grid canvas sized to the terminal
pub struct TerminalCanvas {
    cols: u16,
    rows: u16,
    arena: Vec2,
    cells: Vec<Cell>,
}

impl TerminalCanvas {
    pub fn new(cols: u16, rows: u16, arena: Vec2) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            arena,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    /// Follow a terminal resize
    pub fn resize(&mut self, cols: u16, rows: u16) {
        *self = Self::new(cols, rows, self.arena);
    }

    fn col(&self, x: f32) -> f32 {
        x * self.cols as f32 / self.arena.x
    }

    fn row(&self, y: f32) -> f32 {
        y * self.rows as f32 / self.arena.y
    }

    /// Cell span `[start, end)` covered by an arena interval; never empty for
    /// an interval that starts on screen
    fn span(start: f32, end: f32, limit: u16) -> (usize, usize) {
        let limit = limit as usize;
        let first = (start.max(0.0).floor() as usize).min(limit);
        let last = (end.max(0.0).ceil() as usize).clamp(first, limit);
        if first == last && first < limit {
            (first, first + 1)
        } else {
            (first, last)
        }
    }

    fn put(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.cols as usize && row < self.rows as usize {
            self.cells[row * self.cols as usize + col] = cell;
        }
    }

    fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.cols as usize + col]
    }

    /// Glyph at a grid position, for inspection
    pub fn glyph_at(&self, col: u16, row: u16) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cell(col as usize, row as usize).glyph)
        } else {
            None
        }
    }

    /// Write the composed frame to the terminal
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(terminal::BeginSynchronizedUpdate)?;
        for row in 0..self.rows as usize {
            out.queue(cursor::MoveTo(0, row as u16))?;
            let mut current: Option<Paint> = None;
            for col in 0..self.cols as usize {
                let cell = self.cell(col, row);
                if current != Some(cell.paint) {
                    out.queue(style::SetForegroundColor(color(cell.paint)))?;
                    current = Some(cell.paint);
                }
                out.queue(Print(cell.glyph))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.queue(terminal::EndSynchronizedUpdate)?;
        out.flush()
    }
}

impl Canvas for TerminalCanvas {
    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        if rect.left >= self.arena.x || rect.top >= self.arena.y {
            return;
        }
        let (c0, c1) = Self::span(self.col(rect.left), self.col(rect.right()), self.cols);
        let (r0, r1) = Self::span(self.row(rect.top), self.row(rect.bottom()), self.rows);
        let cell = Cell {
            glyph: glyph(paint),
            paint,
        };
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, cell);
            }
        }
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, paint: Paint) {
        let row = self.row(pos.y).max(0.0) as usize;
        let start = self.col(pos.x).max(0.0) as usize;
        for (i, glyph) in text.chars().enumerate() {
            self.put(start + i, row, Cell { glyph, paint });
        }
    }
}
