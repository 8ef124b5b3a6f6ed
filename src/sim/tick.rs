//! Per-frame world step
//!
//! Update order: player, frogs (with contact checks), friends, hive. The
//! camera always eases, even after the level is complete.

use glam::Vec2;

use super::player::HitOutcome;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Joystick vector, each component in [-1, 1], magnitude <= 1
    pub stick: Vec2,
    /// Demo mode - Andrea flies herself
    pub autopilot: bool,
}

impl TickInput {
    pub fn stick(stick: Vec2) -> Self {
        Self {
            stick,
            autopilot: false,
        }
    }
}

/// Advance the world by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    if !state.level_complete {
        let stick = if input.autopilot {
            autopilot_stick(state)
        } else {
            input.stick.clamp_length_max(1.0)
        };

        state.time_ticks += 1;
        state.player.update(dt, stick);
        update_enemies(state, dt);

        let player_pos = state.player.pos;
        for companion in &mut state.companions {
            companion.update(dt, player_pos);
        }

        check_goal(state);
    }

    state.camera.update(dt, state.player.pos.x);
}

fn update_enemies(state: &mut GameState, dt: f32) {
    let camera_x = state.camera.x;
    let mut events = Vec::new();

    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        let was_active = enemy.is_active();
        let airborne = enemy.update(dt, camera_x, &mut state.cooldowns);
        if !was_active && enemy.is_active() {
            log::debug!("{:?} {} woke at x={:.0}", enemy.kind, index, enemy.anchor_x);
            events.push(GameEvent::EnemyWoke { index });
        }

        let player = &mut state.player;
        if !airborne || player.is_invulnerable() || player.is_dead() {
            continue;
        }
        if enemy.touches(player.pos) {
            match player.hit() {
                HitOutcome::Damaged { health } => {
                    log::debug!("Andrea hit by {:?}, {} hp left", enemy.kind, health);
                    events.push(GameEvent::PlayerHit { health });
                }
                HitOutcome::KnockedOut => {
                    log::info!("Andrea knocked out by {:?}", enemy.kind);
                    events.push(GameEvent::PlayerKnockedOut);
                }
                HitOutcome::Ignored => {}
            }
        }
    }

    for event in events {
        state.push_event(event);
    }
}

fn check_goal(state: &mut GameState) {
    if state.level_complete || state.player.is_dead() {
        return;
    }
    if state.hive.reached_by(state.player.pos) {
        state.level_complete = true;
        log::info!(
            "Level {} complete after {} ticks",
            state.level,
            state.time_ticks
        );
        state.push_event(GameEvent::LevelComplete { level: state.level });
    }
}

/// Cruising altitude for the autopilot: just below the fatigue line
const AUTOPILOT_CRUISE_Y: f32 = VIEW_H / 2.0 + 30.0;

/// Simple demo steering: cruise low toward the hive, back off from
/// airborne frogs ahead, climb only for the final approach.
fn autopilot_stick(state: &GameState) -> Vec2 {
    let player = &state.player;
    let to_hive = state.hive.pos - player.pos;

    let target_y = if to_hive.x < 250.0 {
        state.hive.pos.y
    } else {
        AUTOPILOT_CRUISE_Y
    };

    let threat_ahead = state.enemies.iter().any(|e| {
        let dx = e.pos.x - player.pos.x;
        e.is_jumping() && dx > -60.0 && dx < 220.0
    });

    let x = if threat_ahead { -0.6 } else { to_hive.x.signum() };
    let y = ((target_y - player.pos.y) / 50.0).clamp(-1.0, 1.0);
    Vec2::new(x, y).clamp_length_max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::EnemyPhase;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_input_moves_player() {
        let mut state = GameState::new(1).unwrap();
        tick(&mut state, &TickInput::stick(Vec2::new(1.0, 0.0)), 0.1);
        assert_eq!(state.player.pos.x, PLAYER_SPAWN_X + 20.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_oversized_input_is_clamped() {
        let mut state = GameState::new(1).unwrap();
        tick(&mut state, &TickInput::stick(Vec2::new(3.0, 0.0)), 0.1);
        assert!((state.player.pos.x - (PLAYER_SPAWN_X + 20.0)).abs() < 1e-3);
    }

    #[test]
    fn test_frog_contact_hits_once() {
        let mut state = GameState::new(1).unwrap();
        state.drain_events();
        let frog = &mut state.enemies[0];
        frog.phase = EnemyPhase::Jumping { elapsed: FROG_JUMP_DURATION / 2.0 };
        frog.jump_start_x = 700.0;
        state.player.pos = frog.arc_position(0.5);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.player.health, PLAYER_START_HEALTH - 1);
        assert!(state.drain_events().contains(&GameEvent::PlayerHit { health: 1 }));

        // Still overlapping, but invulnerable now
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.player.health, PLAYER_START_HEALTH - 1);
    }

    #[test]
    fn test_goal_threshold() {
        let mut state = GameState::new(1).unwrap();
        state.player.pos = Vec2::new(0.0, HIVE_Y);
        tick(&mut state, &TickInput::default(), 0.0);
        assert!(!state.level_complete);

        state.player.pos = Vec2::new(HIVE_X - 89.0, HIVE_Y);
        tick(&mut state, &TickInput::default(), 0.0);
        assert!(state.level_complete);
        assert!(state.drain_events().contains(&GameEvent::LevelComplete { level: 1 }));
    }

    #[test]
    fn test_dead_player_cannot_finish() {
        let mut state = GameState::new(1).unwrap();
        state.player.hit();
        state.player.invulnerable = 0.0;
        state.player.hit();
        state.player.pos = state.hive.pos;
        tick(&mut state, &TickInput::default(), DT);
        assert!(!state.level_complete);
    }

    #[test]
    fn test_complete_freezes_world_but_not_camera() {
        let mut state = GameState::new(5).unwrap();
        // Warm up so frogs and friends are mid-motion
        for _ in 0..120 {
            tick(&mut state, &TickInput::stick(Vec2::new(1.0, 0.2)), DT);
        }
        state.level_complete = true;
        state.player.pos.x = 2500.0;

        let player = state.player.clone();
        let enemies = state.enemies.clone();
        let companions = state.companions.clone();
        let camera = state.camera.x;

        for _ in 0..60 {
            tick(&mut state, &TickInput::stick(Vec2::new(-1.0, -1.0)), DT);
        }
        assert_eq!(state.player, player);
        assert_eq!(state.enemies, enemies);
        assert_eq!(state.companions, companions);
        assert!(state.camera.x > camera);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(2).unwrap();
        let mut b = GameState::new(2).unwrap();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..1800 {
            tick(&mut a, &input, DT);
            tick(&mut b, &input, DT);
        }
        assert_eq!(a.player, b.player);
        assert_eq!(a.enemies, b.enemies);
        assert_eq!(a.companions, b.companions);
        assert_eq!(a.camera, b.camera);
        assert_eq!(a.drain_events(), b.drain_events());
    }

    #[test]
    fn test_autopilot_makes_progress() {
        let mut state = GameState::new(1).unwrap();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state, &input, DT);
        }
        assert!(state.player.pos.x > PLAYER_SPAWN_X + 300.0);
        assert!(state.player.fatigue == 0.0);
    }
}
