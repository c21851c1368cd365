//! Sprite dimensions supplied by the host
//!
//! The simulation never touches image data. It only needs each sprite's
//! pixel size (for colliders and muzzle offsets) and an opaque id the
//! renderer maps back to an image.

use std::path::Path;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A sprite handle plus its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: u32,
    pub size: Vec2,
}

impl Sprite {
    pub fn new(id: u32, width: f32, height: f32) -> Self {
        Self {
            id,
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// Provider of the sprite sets entity factories pick from.
///
/// Player and meteor sets must be non-empty.
pub trait SpriteSource {
    fn player_sprites(&self) -> &[Sprite];
    fn bullet_sprite(&self) -> Sprite;
    fn meteor_sprites(&self) -> &[Sprite];

    /// Uniformly random player sprite
    fn random_player<R: Rng + ?Sized>(&self, rng: &mut R) -> Sprite
    where
        Self: Sized,
    {
        pick(self.player_sprites(), rng)
    }

    /// Uniformly random meteor sprite
    fn random_meteor<R: Rng + ?Sized>(&self, rng: &mut R) -> Sprite
    where
        Self: Sized,
    {
        pick(self.meteor_sprites(), rng)
    }
}

fn pick<R: Rng + ?Sized>(sprites: &[Sprite], rng: &mut R) -> Sprite {
    debug_assert!(!sprites.is_empty(), "cannot pick from an empty sprite set");
    sprites[rng.random_range(0..sprites.len())]
}

/// Sprite table loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteAtlas {
    pub players: Vec<Sprite>,
    pub bullet: Sprite,
    pub meteors: Vec<Sprite>,
}

impl Default for SpriteAtlas {
    /// Sizes of the stock space shooter sheet (three ships, one laser, ten meteors)
    fn default() -> Self {
        Self {
            players: vec![
                Sprite::new(0, 99.0, 75.0),
                Sprite::new(1, 112.0, 75.0),
                Sprite::new(2, 98.0, 75.0),
            ],
            bullet: Sprite::new(100, 9.0, 54.0),
            meteors: vec![
                Sprite::new(200, 101.0, 84.0),
                Sprite::new(201, 120.0, 98.0),
                Sprite::new(202, 89.0, 82.0),
                Sprite::new(203, 98.0, 96.0),
                Sprite::new(204, 43.0, 43.0),
                Sprite::new(205, 45.0, 40.0),
                Sprite::new(206, 28.0, 28.0),
                Sprite::new(207, 29.0, 26.0),
                Sprite::new(208, 18.0, 18.0),
                Sprite::new(209, 16.0, 15.0),
            ],
        }
    }
}

impl SpriteAtlas {
    /// Build an atlas, rejecting empty sprite sets
    pub fn new(
        players: Vec<Sprite>,
        bullet: Sprite,
        meteors: Vec<Sprite>,
    ) -> Result<Self, ConfigError> {
        let atlas = Self {
            players,
            bullet,
            meteors,
        };
        atlas.validate()?;
        Ok(atlas)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let atlas: Self = serde_json::from_str(json)?;
        atlas.validate()?;
        Ok(atlas)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let atlas = Self::from_json(&json)?;
        log::info!(
            "Loaded sprite atlas from {} ({} ships, {} meteors)",
            path.as_ref().display(),
            atlas.players.len(),
            atlas.meteors.len()
        );
        Ok(atlas)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::EmptySpriteSet("players"));
        }
        if self.meteors.is_empty() {
            return Err(ConfigError::EmptySpriteSet("meteors"));
        }
        Ok(())
    }
}

impl SpriteSource for SpriteAtlas {
    fn player_sprites(&self) -> &[Sprite] {
        &self.players
    }

    fn bullet_sprite(&self) -> Sprite {
        self.bullet
    }

    fn meteor_sprites(&self) -> &[Sprite] {
        &self.meteors
    }
}
