//! The player's ship

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::sprites::{Sprite, SpriteSource};
use super::tick::TickInput;
use super::timer::Timer;
use crate::config::SimConfig;
use crate::heading;

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the sprite box
    pub pos: Vec2,
    /// Radians, 0 = up, grows clockwise. Never wrapped.
    pub rotation: f32,
    /// Cooldown between shots
    pub fire_timer: Timer,
    /// Set only on the tick a shot is released
    pub firing: bool,
    pub sprite: Sprite,
}

impl Player {
    pub fn new(pos: Vec2, sprite: Sprite, fire_timer: Timer) -> Self {
        Self {
            pos,
            rotation: 0.0,
            fire_timer,
            firing: false,
            sprite,
        }
    }

    /// Fresh ship centered on screen with a random sprite
    pub fn spawn<S, R>(config: &SimConfig, sprites: &S, rng: &mut R) -> Self
    where
        S: SpriteSource,
        R: Rng + ?Sized,
    {
        let sprite = sprites.random_player(rng);
        Self::new(
            Self::spawn_position(config, sprite),
            sprite,
            Timer::from_duration(config.fire_cooldown(), config.ticks_per_second),
        )
    }

    /// Top-left position that centers `sprite` on screen
    pub fn spawn_position(config: &SimConfig, sprite: Sprite) -> Vec2 {
        Vec2::new(config.screen_width, config.screen_height) / 2.0 - sprite.half_size()
    }

    /// Apply one tick of input
    pub fn update(&mut self, input: &TickInput, config: &SimConfig) {
        let turn = config.player_turn_per_tick();
        if input.left {
            self.rotation -= turn;
        }
        if input.right {
            self.rotation += turn;
        }
        // No inertia: without thrust the ship stays put
        if input.thrust {
            self.pos += heading(self.rotation) * config.player_speed_per_tick();
        }

        self.fire_timer.tick();
        self.firing = input.fire && self.fire_timer.is_ready();
        if self.firing {
            self.fire_timer.reset();
        }
    }

    /// Center of the bullet spawn point, just ahead of the ship's nose
    pub fn muzzle(&self) -> Vec2 {
        let side = self.sprite.size.x.min(self.sprite.size.y);
        self.center() + heading(self.rotation) * (1.0 + side / 2.0)
    }
}

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn sprite(&self) -> Sprite {
        self.sprite
    }
}
