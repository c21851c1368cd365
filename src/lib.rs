//! Meteor Storm - A top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, session state)
//! - `render`: Read-only draw command extraction for an external renderer
//! - `config`: Data-driven tuning constants
//! - `error`: Startup validation errors

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::SimConfig;
pub use error::ConfigError;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical screen size (independent of window size)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed logical tick rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Player thrust speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 300.0;
    /// Player turn rate (radians/s, half a turn per second)
    pub const PLAYER_TURN_RATE: f32 = std::f32::consts::PI;
    /// Bullet speed (pixels/s)
    pub const BULLET_SPEED: f32 = 1000.0;

    /// Fire cooldown and meteor spawn interval (ms)
    pub const FIRE_COOLDOWN_MS: u64 = 1000;
    pub const METEOR_SPAWN_INTERVAL_MS: u64 = 1000;

    /// How far outside the screen meteors appear
    pub const METEOR_SPAWN_MARGIN: f32 = 100.0;
    /// Meteor speed range (pixels/tick)
    pub const METEOR_MIN_SPEED: f32 = 0.25;
    pub const METEOR_MAX_SPEED: f32 = 2.25;
    /// Meteor spin range (radians/tick)
    pub const METEOR_MIN_SPIN: f32 = -0.02;
    pub const METEOR_MAX_SPIN: f32 = 0.04;

    /// Off-screen cull margins
    pub const BULLET_CULL_MARGIN: f32 = 50.0;
    pub const METEOR_CULL_MARGIN: f32 = 200.0;
}

/// Unit facing vector for a rotation (0 = up, clockwise in screen space)
#[inline]
pub fn heading(rotation: f32) -> Vec2 {
    Vec2::new(rotation.sin(), -rotation.cos())
}

/// Direction from `from` toward `to` with unit length.
///
/// The points must differ; a zero-length direction has no heading.
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    debug_assert!(delta.length_squared() > 0.0, "direction between identical points");
    delta.normalize()
}
