//! Player projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind, Movable};
use super::player::Player;
use super::sprites::Sprite;
use crate::heading;

/// A bullet travelling in a straight line at constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Fixed at fire time
    pub rotation: f32,
    /// Distance per tick
    pub speed: f32,
    pub sprite: Sprite,
}

impl Bullet {
    pub fn new(pos: Vec2, rotation: f32, speed: f32, sprite: Sprite) -> Self {
        Self {
            pos,
            rotation,
            speed,
            sprite,
        }
    }

    /// Bullet centered on the player's muzzle, facing the player's heading
    pub fn fired_by(player: &Player, speed: f32, sprite: Sprite) -> Self {
        Self::new(player.muzzle() - sprite.half_size(), player.rotation, speed, sprite)
    }
}

impl Entity for Bullet {
    fn kind(&self) -> EntityKind {
        EntityKind::Bullet
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

impl Movable for Bullet {
    fn advance(&mut self) {
        self.pos += heading(self.rotation) * self.speed;
    }
}
