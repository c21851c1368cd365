//! Session state
//!
//! Everything the tick mutates lives here. The renderer only ever borrows
//! it immutably.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::bullet::Bullet;
use super::meteor::Meteor;
use super::player::Player;
use super::spawner::spawn_meteor;
use super::sprites::{SpriteAtlas, SpriteSource};
use super::timer::Timer;
use crate::config::SimConfig;
use crate::error::ConfigError;

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A meteor entered play at the given top-left position
    MeteorSpawned { pos: Vec2 },
    /// The player fired a bullet from the given muzzle point
    BulletFired { pos: Vec2 },
    /// A bullet destroyed a meteor centered at `pos`; `score` is the new total
    MeteorDestroyed { pos: Vec2, score: u64 },
    /// The player hit a meteor and the session restarted
    PlayerDestroyed { final_score: u64 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    /// Tuning in effect
    pub config: SimConfig,
    /// Injected sprite dimensions
    pub sprites: SpriteAtlas,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
    /// Sessions started, including the current one
    pub session: u32,
    /// Meteors destroyed this session
    pub score: u64,
    pub player: Player,
    /// Live meteors in spawn order
    pub meteors: Vec<Meteor>,
    /// Live bullets in fire order
    pub bullets: Vec<Bullet>,
    /// Interval between meteor spawns
    pub spawn_timer: Timer,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// New session with default tuning and sprites
    pub fn new(seed: u64) -> Self {
        Self::build(seed, SimConfig::default(), SpriteAtlas::default())
    }

    /// New session with injected tuning and sprites
    pub fn with_config(
        seed: u64,
        config: SimConfig,
        sprites: SpriteAtlas,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        sprites.validate()?;
        Ok(Self::build(seed, config, sprites))
    }

    /// Callers guarantee `config` and `sprites` pass validation
    fn build(seed: u64, config: SimConfig, sprites: SpriteAtlas) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::spawn(&config, &sprites, &mut rng);
        let spawn_timer =
            Timer::from_duration(config.meteor_spawn_interval(), config.ticks_per_second);

        log::info!(
            "New game: seed={} spawn every {} ticks, fire every {} ticks",
            seed,
            spawn_timer.target_ticks(),
            player.fire_timer.target_ticks()
        );

        Self {
            seed,
            config,
            sprites,
            time_ticks: 0,
            session: 1,
            score: 0,
            player,
            meteors: Vec::new(),
            bullets: Vec::new(),
            spawn_timer,
            events: Vec::new(),
            rng,
        }
    }

    /// Start over after the player dies: new ship at center, empty field, zero score
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.config, &self.sprites, &mut self.rng);
        self.meteors.clear();
        self.bullets.clear();
        self.score = 0;
        self.spawn_timer.reset();
        self.session += 1;
        log::info!("Session {} started at tick {}", self.session, self.time_ticks);
    }

    /// Create a meteor from the state's RNG and add it to play
    pub fn spawn_meteor(&mut self) -> &Meteor {
        let meteor = spawn_meteor(&self.config, &self.sprites, &mut self.rng);
        self.events.push(GameEvent::MeteorSpawned { pos: meteor.pos });
        self.meteors.push(meteor);
        &self.meteors[self.meteors.len() - 1]
    }

    /// Fire a bullet from the player's muzzle along the current heading
    pub fn fire_bullet(&mut self) {
        let bullet = Bullet::fired_by(
            &self.player,
            self.config.bullet_speed_per_tick(),
            self.sprites.bullet_sprite(),
        );
        log::trace!(
            "Bullet fired at tick {} heading {:.2}",
            self.time_ticks,
            bullet.rotation
        );
        self.events.push(GameEvent::BulletFired {
            pos: self.player.muzzle(),
        });
        self.bullets.push(bullet);
    }

    /// The logical screen rectangle
    pub fn screen(&self) -> Aabb {
        Aabb::new(0.0, 0.0, self.config.screen_width, self.config.screen_height)
    }

    /// Where a freshly spawned player's sprite is placed
    pub fn player_spawn_position(&self) -> Vec2 {
        Player::spawn_position(&self.config, self.player.sprite)
    }
}
