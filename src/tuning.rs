//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults reproduce the reference balance in [`crate::consts`]; a JSON file
//! can override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or saving a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to access tuning file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tuning file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize tuning for '{path}': {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ships ===
    pub ship_velocity: f32,
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_a_start_y: f32,
    pub ship_b_start_y: f32,
    pub max_health: u32,

    // === Projectiles ===
    pub projectile_velocity: f32,
    pub projectile_width: f32,
    pub projectile_height: f32,

    // === Shot cooldown ===
    pub min_cooldown: f32,
    pub max_cooldown: f32,
    pub cooldown_step: f32,
    pub decay_multiplier: f32,

    // === Scenes ===
    pub result_screen_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ship_velocity: SHIP_VELOCITY,
            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_a_start_y: SHIP_A_START_Y,
            ship_b_start_y: SHIP_B_START_Y,
            max_health: MAX_HEALTH,

            projectile_velocity: PROJECTILE_VELOCITY,
            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,

            min_cooldown: MIN_COOLDOWN,
            max_cooldown: MAX_COOLDOWN,
            cooldown_step: COOLDOWN_STEP,
            decay_multiplier: DECAY_MULTIPLIER,

            result_screen_delay: RESULT_SCREEN_DELAY,
        }
    }
}

impl Tuning {
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    pub fn ship_size(&self) -> Vec2 {
        Vec2::new(self.ship_width, self.ship_height)
    }

    pub fn projectile_size(&self) -> Vec2 {
        Vec2::new(self.projectile_width, self.projectile_height)
    }

    /// Check the values the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let sizes = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("ship_velocity", self.ship_velocity),
            ("projectile_velocity", self.projectile_velocity),
        ];
        for (name, value) in sizes {
            if !(value > 0.0) {
                return Err(TuningError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.max_health == 0 {
            return Err(TuningError::Invalid("max_health must be at least 1".into()));
        }
        if !(self.min_cooldown >= 0.0) || self.min_cooldown > self.max_cooldown {
            return Err(TuningError::Invalid(format!(
                "cooldown range [{}, {}] is empty",
                self.min_cooldown, self.max_cooldown
            )));
        }
        // Moving while firing must net a decrease
        if !(self.decay_multiplier > 1.0) {
            return Err(TuningError::Invalid(format!(
                "decay_multiplier must exceed 1, got {}",
                self.decay_multiplier
            )));
        }

        let ship_rows = [self.ship_a_start_y, self.ship_b_start_y];
        for y in ship_rows {
            if y < 0.0 || y + self.ship_height > self.arena_height {
                return Err(TuningError::Invalid(format!(
                    "ship row {y} does not fit in arena height {}",
                    self.arena_height
                )));
            }
        }
        // Ship A fires down, so it must start above ship B
        if self.ship_a_start_y >= self.ship_b_start_y {
            return Err(TuningError::Invalid(format!(
                "ship A row {} must be above ship B row {}",
                self.ship_a_start_y, self.ship_b_start_y
            )));
        }
        if self.ship_width > self.arena_width {
            return Err(TuningError::Invalid("ships are wider than the arena".into()));
        }

        Ok(())
    }

    /// Parse and validate a tuning document
    pub fn from_json(json: &str, origin: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|source| TuningError::Parse {
            path: origin.to_string(),
            source,
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json, &path.display().to_string())?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Save tuning as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TuningError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| TuningError::Serialize {
            path: path.display().to_string(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Tuning saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_health": 3, "ship_velocity": 6.5 }"#, "inline")
            .expect("partial tuning should parse");
        assert_eq!(tuning.max_health, 3);
        assert_eq!(tuning.ship_velocity, 6.5);
        assert_eq!(tuning.min_cooldown, MIN_COOLDOWN);
        assert_eq!(tuning.arena_width, ARENA_WIDTH);
    }

    #[test]
    fn test_rejects_inverted_cooldown_range() {
        let result = Tuning::from_json(r#"{ "min_cooldown": 5.0, "max_cooldown": 1.0 }"#, "inline");
        assert!(matches!(result, Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_rejects_weak_decay_multiplier() {
        let result = Tuning::from_json(r#"{ "decay_multiplier": 1.0 }"#, "inline");
        assert!(matches!(result, Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_rejects_swapped_ship_rows() {
        let result = Tuning::from_json(r#"{ "ship_a_start_y": 440.0, "ship_b_start_y": 25.0 }"#, "inline");
        assert!(matches!(result, Err(TuningError::Invalid(_))));

        let result = Tuning::from_json(r#"{ "ship_a_start_y": 200.0, "ship_b_start_y": 200.0 }"#, "inline");
        assert!(matches!(result, Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_serialize_error_is_not_reported_as_parse() {
        let source = serde_json::from_str::<Tuning>("[").expect_err("truncated json");
        let err = TuningError::Serialize {
            path: "out.json".into(),
            source,
        };
        assert!(err.to_string().starts_with("failed to serialize tuning for 'out.json'"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = Tuning::from_json("{ max_health: ", "inline");
        assert!(matches!(result, Err(TuningError::Parse { .. })));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("toasty_duels_tuning_{}.json", std::process::id()));
        let mut tuning = Tuning::default();
        tuning.max_health = 4;
        tuning.save(&path).expect("save");
        let loaded = Tuning::load(&path).expect("load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, tuning);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Tuning::load("/definitely/not/here/tuning.json");
        assert!(matches!(result, Err(TuningError::Io { .. })));
    }
}
