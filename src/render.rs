//! Render boundary
//!
//! The simulation does not draw. Each frame the host asks for a list of
//! draw requests and hands them to whatever sprite backend it uses.
//! Everything here takes `&GameState`.

use glam::Vec2;
use serde::Serialize;

use crate::config::SimConfig;
use crate::sim::{Entity, EntityKind, GameState};

/// Where the score text is drawn (top-left of the text box)
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(20.0, 30.0);

/// "Draw sprite X here" request for one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    pub kind: EntityKind,
    pub sprite_id: u32,
    /// Top-left of the unrotated sprite
    pub pos: Vec2,
    /// Rotation in radians, applied about `pivot`
    pub rotation: f32,
    /// Rotation pivot relative to `pos` (the sprite center)
    pub pivot: Vec2,
}

impl DrawCommand {
    pub fn for_entity<E: Entity>(entity: &E) -> Self {
        let sprite = entity.sprite();
        Self {
            kind: entity.kind(),
            sprite_id: sprite.id,
            pos: entity.position(),
            rotation: entity.rotation(),
            pivot: sprite.half_size(),
        }
    }
}

/// Draw requests in painter's order: player, meteors, bullets
pub fn draw_list(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(1 + state.meteors.len() + state.bullets.len());
    commands.push(DrawCommand::for_entity(&state.player));
    commands.extend(state.meteors.iter().map(DrawCommand::for_entity));
    commands.extend(state.bullets.iter().map(DrawCommand::for_entity));
    commands
}

/// HUD score line
pub fn score_text(score: u64) -> String {
    format!("SCORE: {:06}", score)
}

/// Logical resolution from the active tuning, whatever the window size
pub fn layout(config: &SimConfig, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
    (config.screen_width as u32, config.screen_height as u32)
}
