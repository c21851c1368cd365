//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod bullet;
pub mod collision;
pub mod entity;
pub mod meteor;
pub mod player;
pub mod spawner;
pub mod sprites;
pub mod state;
pub mod tick;
pub mod timer;

pub use aabb::Aabb;
pub use bullet::Bullet;
pub use collision::{HitPair, cull_outside, find_bullet_hits, player_hit, resolve_bullet_hits};
pub use entity::{Entity, EntityKind, Movable};
pub use meteor::Meteor;
pub use player::Player;
pub use spawner::{Edge, spawn_meteor};
pub use sprites::{Sprite, SpriteAtlas, SpriteSource};
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
pub use timer::Timer;
