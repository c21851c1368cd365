//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically. The order
//! of the steps matters: a bullet fired this tick moves and is checked
//! against meteors that have also just moved.

use serde::{Deserialize, Serialize};

use super::collision::{cull_outside, player_hit, resolve_bullet_hits};
use super::entity::{Entity, Movable};
use super::state::{GameEvent, GameState};

/// Key states sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Rotate counter-clockwise
    pub left: bool,
    /// Rotate clockwise
    pub right: bool,
    /// Move forward along the current heading
    pub thrust: bool,
    /// Fire when the cooldown allows
    pub fire: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    // Player movement and fire cooldown
    state.player.update(input, &state.config);

    // Meteor spawning
    state.spawn_timer.tick();
    if state.spawn_timer.is_ready() {
        state.spawn_timer.reset();
        state.spawn_meteor();
    }

    if state.player.firing {
        state.fire_bullet();
    }

    for bullet in &mut state.bullets {
        bullet.advance();
    }
    for meteor in &mut state.meteors {
        meteor.advance();
    }

    // Bullet vs meteor
    let destroyed = resolve_bullet_hits(&mut state.bullets, &mut state.meteors);
    for meteor in destroyed {
        state.score += 1;
        log::debug!("Meteor destroyed, score {}", state.score);
        state.events.push(GameEvent::MeteorDestroyed {
            pos: meteor.center(),
            score: state.score,
        });
    }

    cull_offscreen(state);

    // Player vs meteor
    if let Some(index) = player_hit(&state.player, &state.meteors) {
        let final_score = state.score;
        log::info!(
            "Player hit meteor {} at tick {} with score {}",
            index,
            state.time_ticks,
            final_score
        );
        state.events.push(GameEvent::PlayerDestroyed { final_score });
        state.reset();
    }
}

/// Drop bullets and meteors that have drifted past their cull margins
fn cull_offscreen(state: &mut GameState) {
    let screen = state.screen();
    if let Some(margin) = state.config.bullet_cull_margin {
        cull_outside(&mut state.bullets, &screen.expanded(margin));
    }
    if let Some(margin) = state.config.meteor_cull_margin {
        let culled = cull_outside(&mut state.meteors, &screen.expanded(margin));
        if culled > 0 {
            log::debug!("Culled {} off-screen meteors", culled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::bullet::Bullet;
    use crate::sim::meteor::Meteor;
    use crate::sim::sprites::{Sprite, SpriteAtlas};
    use glam::Vec2;

    /// Config with spawning pushed far beyond any test's length
    fn quiet_config() -> SimConfig {
        SimConfig {
            meteor_spawn_interval_ms: 3_600_000,
            ..Default::default()
        }
    }

    fn quiet_state(seed: u64) -> GameState {
        GameState::with_config(seed, quiet_config(), SpriteAtlas::default())
            .expect("quiet config is valid")
    }

    const FIRE: TickInput = TickInput {
        left: false,
        right: false,
        thrust: false,
        fire: true,
    };

    #[test]
    fn test_idle_session_stays_put() {
        let mut state = quiet_state(12345);
        let start = state.player.pos;
        for _ in 0..1000 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.score, 0);
        assert_eq!(state.session, 1);
        assert_eq!(state.player.pos, start);
        assert!(state.meteors.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.time_ticks, 1000);
    }

    #[test]
    fn test_meteor_spawns_on_interval() {
        let mut state = GameState::new(7);
        for _ in 0..59 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.meteors.is_empty());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.meteors.len(), 1);
        assert!(matches!(state.events[0], GameEvent::MeteorSpawned { .. }));
        assert_eq!(state.spawn_timer.elapsed_ticks(), 0);
    }

    #[test]
    fn test_fire_appends_exactly_one_bullet() {
        let mut state = quiet_state(1);
        // Let the cooldown fill without firing
        for _ in 0..state.config.ticks_per_second {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.player.fire_timer.is_ready());

        tick(&mut state, &FIRE);
        assert_eq!(state.bullets.len(), 1);
        assert!(!state.player.fire_timer.is_ready());
        assert!(state.events.iter().any(|e| matches!(e, GameEvent::BulletFired { .. })));

        // Holding fire on the next tick does not add another
        tick(&mut state, &FIRE);
        assert_eq!(state.bullets.len(), 1);
        assert!(!state.player.firing);
    }

    #[test]
    fn test_held_fire_repeats_once_per_cooldown() {
        let mut state = quiet_state(2);
        state.config.bullet_cull_margin = None;
        let tps = state.config.ticks_per_second as usize;
        for _ in 0..tps * 5 {
            tick(&mut state, &FIRE);
        }
        assert_eq!(state.bullets.len(), 5);
    }

    #[test]
    fn test_new_bullet_moves_on_fire_tick() {
        let mut state = quiet_state(3);
        state.player.fire_timer = crate::sim::Timer::new(0);
        tick(&mut state, &FIRE);
        let bullet = &state.bullets[0];
        let step = crate::heading(0.0) * state.config.bullet_speed_per_tick();
        let expected = state.player.muzzle() + step;
        assert!((bullet.center() - expected).length() < 1e-3);
    }

    #[test]
    fn test_bullet_meteor_collision_scores_one() {
        let mut state = quiet_state(4);
        let meteor_sprite = Sprite::new(200, 40.0, 40.0);
        let bullet_sprite = state.sprites.bullet;
        state.meteors.push(Meteor::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 0.0, meteor_sprite));
        state.meteors.push(Meteor::new(Vec2::new(600.0, 100.0), Vec2::ZERO, 0.0, meteor_sprite));
        // Stationary bullet sitting inside the first meteor
        state.bullets.push(Bullet::new(Vec2::new(110.0, 90.0), 0.0, 0.0, bullet_sprite));
        state.bullets.push(Bullet::new(Vec2::new(300.0, 50.0), 0.0, 0.0, bullet_sprite));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert_eq!(state.meteors.len(), 1);
        assert_eq!(state.meteors[0].pos, Vec2::new(600.0, 100.0));
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(
            state.events,
            vec![GameEvent::MeteorDestroyed {
                pos: Vec2::new(120.0, 120.0),
                score: 1
            }]
        );
    }

    #[test]
    fn test_player_collision_resets_session() {
        let mut state = quiet_state(5);
        state.score = 7;
        state.bullets.push(Bullet::new(Vec2::new(10.0, 10.0), 0.0, 0.0, state.sprites.bullet));
        let sprite = Sprite::new(200, 40.0, 40.0);
        state
            .meteors
            .push(Meteor::new(Vec2::new(700.0, 500.0), Vec2::ZERO, 0.0, sprite));
        // Meteor parked on the ship
        let on_ship = state.player.center() - Vec2::splat(20.0);
        state.meteors.push(Meteor::new(on_ship, Vec2::ZERO, 0.0, sprite));
        state.player.rotation = 1.0;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 0);
        assert!(state.meteors.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.session, 2);
        assert_eq!(state.player.pos, state.player_spawn_position());
        assert_eq!(state.player.rotation, 0.0);
        assert_eq!(state.spawn_timer.elapsed_ticks(), 0);
        assert_eq!(state.events.last(), Some(&GameEvent::PlayerDestroyed { final_score: 7 }));
    }

    #[test]
    fn test_offscreen_bullets_culled() {
        let mut state = quiet_state(6);
        state.player.fire_timer = crate::sim::Timer::new(0);
        tick(&mut state, &FIRE);
        assert_eq!(state.bullets.len(), 1);
        // Straight up from the center leaves the culled area in well under a second
        for _ in 0..60 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_unbounded_bullets_when_cull_disabled() {
        let mut state = quiet_state(6);
        state.config.bullet_cull_margin = None;
        state.player.fire_timer = crate::sim::Timer::new(0);
        for _ in 0..120 {
            tick(&mut state, &FIRE);
        }
        assert_eq!(state.bullets.len(), 120);
    }

    #[test]
    fn test_meteor_culled_after_crossing() {
        let mut state = quiet_state(8);
        // Fast meteor crossing the top of the screen, clear of the ship
        state.meteors.push(Meteor::new(
            Vec2::new(-100.0, 20.0),
            Vec2::new(20.0, 0.0),
            0.0,
            Sprite::new(200, 40.0, 40.0),
        ));
        for _ in 0..40 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.meteors.len(), 1);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.meteors.is_empty());
        assert_eq!(state.session, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                right: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                thrust: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..2000 {
            let input = &inputs[(i / 45) % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.session, state2.session);
        assert_eq!(state1.meteors.len(), state2.meteors.len());
        assert_eq!(state1.bullets.len(), state2.bullets.len());
        assert_eq!(state1.player.pos, state2.player.pos);
        for (a, b) in state1.meteors.iter().zip(&state2.meteors) {
            assert_eq!(a.pos, b.pos);
        }
    }

    #[test]
    fn test_score_never_decreases_within_session() {
        let mut state = GameState::new(31337);
        let input = TickInput {
            right: true,
            fire: true,
            ..Default::default()
        };
        let mut last = (state.session, state.score);
        for _ in 0..5000 {
            tick(&mut state, &input);
            if state.session == last.0 {
                assert!(state.score >= last.1);
            } else {
                assert_eq!(state.score, 0);
            }
            last = (state.session, state.score);
        }
    }
}
