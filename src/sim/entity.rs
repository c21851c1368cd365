//! Shared entity shape
//!
//! Player, bullets and meteors all have a sprite placed at a top-left
//! position and rotated about its center. Collision and drawing only go
//! through this trait.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::sprites::Sprite;

/// Entity category (draw order and logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Bullet,
    Meteor,
}

/// Anything that can be drawn and collided
pub trait Entity {
    fn kind(&self) -> EntityKind;

    /// Top-left corner of the sprite box
    fn position(&self) -> Vec2;

    /// Rotation in radians (0 = up)
    fn rotation(&self) -> f32;

    fn sprite(&self) -> Sprite;

    /// Visual center of the sprite
    fn center(&self) -> Vec2 {
        self.position() + self.sprite().half_size()
    }

    /// Square collider inside the sprite box
    fn collider(&self) -> Aabb {
        let pos = self.position();
        let size = self.sprite().size;
        Aabb::square_within(pos.x, pos.y, size.x, size.y)
    }
}

/// Entities that advance on their own every tick
pub trait Movable: Entity {
    fn advance(&mut self);
}
