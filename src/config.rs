//! Simulation tuning
//!
//! All gameplay constants live in one serde struct so a host can load
//! them from JSON. Missing fields fall back to the defaults in `consts`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Simulation tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Screen ===
    /// Logical screen width
    pub screen_width: f32,
    /// Logical screen height
    pub screen_height: f32,
    /// Logical ticks per second
    pub ticks_per_second: u32,

    // === Player ===
    /// Thrust speed (pixels/s)
    pub player_speed: f32,
    /// Turn rate (radians/s)
    pub player_turn_rate: f32,
    /// Minimum time between shots (ms, whole seconds only)
    pub fire_cooldown_ms: u64,

    // === Bullets ===
    /// Bullet speed (pixels/s)
    pub bullet_speed: f32,
    /// Bullets leaving the screen by more than this are dropped (None keeps them forever)
    pub bullet_cull_margin: Option<f32>,

    // === Meteors ===
    /// Time between meteor spawns (ms, whole seconds only)
    pub meteor_spawn_interval_ms: u64,
    /// Distance outside the screen where meteors appear
    pub meteor_spawn_margin: f32,
    /// Speed range (pixels/tick), min inclusive, max exclusive
    pub meteor_min_speed: f32,
    pub meteor_max_speed: f32,
    /// Spin range (radians/tick), min inclusive, max exclusive
    pub meteor_min_spin: f32,
    pub meteor_max_spin: f32,
    /// Meteors leaving the screen by more than this are dropped (None keeps them forever)
    pub meteor_cull_margin: Option<f32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ticks_per_second: TICKS_PER_SECOND,

            player_speed: PLAYER_SPEED,
            player_turn_rate: PLAYER_TURN_RATE,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,

            bullet_speed: BULLET_SPEED,
            bullet_cull_margin: Some(BULLET_CULL_MARGIN),

            meteor_spawn_interval_ms: METEOR_SPAWN_INTERVAL_MS,
            meteor_spawn_margin: METEOR_SPAWN_MARGIN,
            meteor_min_speed: METEOR_MIN_SPEED,
            meteor_max_speed: METEOR_MAX_SPEED,
            meteor_min_spin: METEOR_MIN_SPIN,
            meteor_max_spin: METEOR_MAX_SPIN,
            meteor_cull_margin: Some(METEOR_CULL_MARGIN),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(invalid("ticks_per_second", "must be at least 1"));
        }
        for (name, extent) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
        ] {
            if !extent.is_finite() || extent <= 0.0 {
                return Err(invalid(name, "must be finite and positive"));
            }
        }
        for (name, speed) in [
            ("player_speed", self.player_speed),
            ("bullet_speed", self.bullet_speed),
        ] {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(invalid(name, "must be finite and positive"));
            }
        }
        if self.bullet_speed_per_tick() <= self.player_speed_per_tick() {
            return Err(invalid("bullet_speed", "must exceed player_speed"));
        }
        if !self.player_turn_rate.is_finite() {
            return Err(invalid("player_turn_rate", "must be finite"));
        }
        if !self.meteor_spawn_margin.is_finite() || self.meteor_spawn_margin <= 0.0 {
            return Err(invalid("meteor_spawn_margin", "must be finite and positive"));
        }
        for (name, value) in [
            ("meteor_min_speed", self.meteor_min_speed),
            ("meteor_max_speed", self.meteor_max_speed),
            ("meteor_min_spin", self.meteor_min_spin),
            ("meteor_max_spin", self.meteor_max_spin),
        ] {
            if !value.is_finite() {
                return Err(invalid(name, "must be finite"));
            }
        }
        if self.meteor_min_speed <= 0.0 || self.meteor_min_speed >= self.meteor_max_speed {
            return Err(invalid("meteor_min_speed/meteor_max_speed", "need 0 < min < max"));
        }
        if self.meteor_min_spin >= self.meteor_max_spin {
            return Err(invalid("meteor_min_spin/meteor_max_spin", "need min < max"));
        }
        for (name, margin) in [
            ("bullet_cull_margin", self.bullet_cull_margin),
            ("meteor_cull_margin", self.meteor_cull_margin),
        ] {
            if let Some(m) = margin {
                if !m.is_finite() || m < 0.0 {
                    return Err(invalid(name, "must be finite and non-negative"));
                }
            }
        }
        if let Some(m) = self.meteor_cull_margin {
            if m <= self.meteor_spawn_margin {
                return Err(invalid("meteor_cull_margin", "must exceed meteor_spawn_margin"));
            }
        }
        Ok(())
    }

    /// Thrust distance per tick
    pub fn player_speed_per_tick(&self) -> f32 {
        self.player_speed / self.ticks_per_second as f32
    }

    /// Turn angle per tick
    pub fn player_turn_per_tick(&self) -> f32 {
        self.player_turn_rate / self.ticks_per_second as f32
    }

    /// Bullet travel per tick
    pub fn bullet_speed_per_tick(&self) -> f32 {
        self.bullet_speed / self.ticks_per_second as f32
    }

    pub fn fire_cooldown(&self) -> Duration {
        Duration::from_millis(self.fire_cooldown_ms)
    }

    pub fn meteor_spawn_interval(&self) -> Duration {
        Duration::from_millis(self.meteor_spawn_interval_ms)
    }
}

fn invalid(name: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue { name, reason }
}
