//! Held-key tracking for terminals
//!
//! Terminals report key presses, not key state. Terminals that support the
//! keyboard enhancement protocol also send releases, so a key is held from
//! press to release. Elsewhere only presses and OS auto-repeat arrive, so a
//! key counts as held while its last press is younger than the hold window.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, ModifierKeyCode};

use super::{Key, KeySource};

/// Frames a press keeps a key held when no release is reported. Must cover
/// the OS auto-repeat delay (about half a second) at 60 Hz.
pub const CLASSIC_HOLD_WINDOW_FRAMES: u64 = 30;

/// Translate a terminal key code to a game key
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Modifier(ModifierKeyCode::RightShift) => Some(Key::RightShift),
        // Most terminals never report a bare shift; '/' sits beside it
        KeyCode::Char('/') | KeyCode::Char('?') => Some(Key::RightShift),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::A),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::D),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::R),
        _ => None,
    }
}

/// Tracks which game keys are currently held
#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Frame each key was last pressed or repeated
    last_seen: HashMap<Key, u64>,
    frame: u64,
    hold_window: u64,
}

impl KeyTracker {
    /// `reports_release` is whether the terminal sends key-release events
    pub fn new(reports_release: bool) -> Self {
        let hold_window = if reports_release {
            // Held until the release arrives
            u64::MAX
        } else {
            CLASSIC_HOLD_WINDOW_FRAMES
        };
        Self::with_hold_window(hold_window)
    }

    pub fn with_hold_window(hold_window: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            frame: 0,
            hold_window,
        }
    }

    /// Advance to the next frame
    pub fn next_frame(&mut self) {
        self.frame += 1;
    }

    /// Feed one terminal key event
    pub fn handle(&mut self, event: &KeyEvent) {
        let Some(key) = map_key(event.code) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(key, self.frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&key);
            }
        }
    }

    /// Feed one terminal event. Releases are not delivered while the terminal
    /// is unfocused, so losing focus drops every held key.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle(key),
            Event::FocusLost => {
                log::debug!("Focus lost, releasing held keys");
                self.clear();
            }
            _ => {}
        }
    }

    /// Forget every held key
    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

impl KeySource for KeyTracker {
    fn is_key_down(&self, key: Key) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }
}
