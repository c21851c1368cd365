//! Drifting meteors

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind, Movable};
use super::sprites::Sprite;

/// A meteor moving in a straight line and spinning at a constant rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteor {
    pub pos: Vec2,
    /// Cosmetic, accumulates without wrapping
    pub rotation: f32,
    /// Radians per tick
    pub spin: f32,
    /// Displacement per tick
    pub movement: Vec2,
    pub sprite: Sprite,
}

impl Meteor {
    pub fn new(pos: Vec2, movement: Vec2, spin: f32, sprite: Sprite) -> Self {
        Self {
            pos,
            rotation: 0.0,
            spin,
            movement,
            sprite,
        }
    }
}

impl Entity for Meteor {
    fn kind(&self) -> EntityKind {
        EntityKind::Meteor
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

impl Movable for Meteor {
    fn advance(&mut self) {
        self.pos += self.movement;
        self.rotation += self.spin;
    }
}
