//! Procedural meteor spawning
//!
//! Meteors appear just outside a random screen edge and head for a random
//! point in the middle of the screen, so most of them cross the area the
//! player usually occupies.

use glam::Vec2;
use rand::Rng;

use super::meteor::Meteor;
use super::sprites::SpriteSource;
use crate::config::SimConfig;
use crate::direction_to;

/// Screen edge a meteor enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Random point in the central 50% x 50% of the screen
pub fn random_target<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Vec2 {
    let (w, h) = (config.screen_width, config.screen_height);
    Vec2::new(
        w / 4.0 + rng.random::<f32>() * w / 2.0,
        h / 4.0 + rng.random::<f32>() * h / 2.0,
    )
}

/// Random point `margin` outside the given edge, jittered along it
pub fn edge_position<R: Rng + ?Sized>(edge: Edge, config: &SimConfig, rng: &mut R) -> Vec2 {
    let (w, h) = (config.screen_width, config.screen_height);
    let m = config.meteor_spawn_margin;
    let along_x = rng.random::<f32>() * (w + 2.0 * m) - m;
    let along_y = rng.random::<f32>() * (h + 2.0 * m) - m;
    match edge {
        Edge::Top => Vec2::new(along_x, -m),
        Edge::Right => Vec2::new(w + m, along_y),
        Edge::Bottom => Vec2::new(along_x, h + m),
        Edge::Left => Vec2::new(-m, along_y),
    }
}

/// Create a meteor off-screen, aimed at the middle of the play area
pub fn spawn_meteor<S, R>(config: &SimConfig, sprites: &S, rng: &mut R) -> Meteor
where
    S: SpriteSource,
    R: Rng + ?Sized,
{
    let target = random_target(config, rng);
    let edge = Edge::random(rng);
    let pos = edge_position(edge, config, rng);

    let speed = rng.random_range(config.meteor_min_speed..config.meteor_max_speed);
    // The spawn point is always off-screen and the target on-screen, so they differ
    let movement = direction_to(pos, target) * speed;

    let sprite = sprites.random_meteor(rng);
    let spin = rng.random_range(config.meteor_min_spin..config.meteor_max_spin);

    log::debug!(
        "Meteor spawned on {:?} edge at ({:.0}, {:.0}) heading for ({:.0}, {:.0}) at {:.2}/tick",
        edge,
        pos.x,
        pos.y,
        target.x,
        target.y,
        speed
    );

    Meteor::new(pos, movement, spin, sprite)
}
