//! Read-only view of the world for rendering, audio and HUD

use glam::Vec2;
use serde::Serialize;

use super::level::{CompanionKind, EnemyKind};
use super::player::Facing;
use super::state::{GameEvent, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub facing: Facing,
    pub landed: bool,
    pub dead: bool,
    pub damaged: bool,
    /// Seconds of invulnerability left, drives the damage blink
    pub damage_timer: f32,
    pub health: u8,
    pub wing_phase: f32,
    pub fatigue: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub size: Vec2,
    pub jump_height: f32,
    pub active: bool,
    pub jumping: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanionView {
    pub kind: CompanionKind,
    pub pos: Vec2,
    pub hover_phase: f32,
    pub wing_phase: f32,
    pub shadow_y: f32,
    pub size_scale: f32,
}

/// Everything the presentation layer may look at after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub level: u32,
    pub level_complete: bool,
    pub game_finished: bool,
    pub camera_x: f32,
    pub hive_pos: Vec2,
    pub hive_size: Vec2,
    pub player: PlayerView,
    /// Only frogs that are awake and mid-jump
    pub enemies: Vec<EnemyView>,
    pub companions: Vec<CompanionView>,
    pub events: Vec<GameEvent>,
}

impl WorldSnapshot {
    /// Capture the current state and drain its pending events
    pub fn capture(state: &mut GameState) -> Self {
        let events = state.drain_events();
        let player = &state.player;
        Self {
            level: state.level,
            level_complete: state.level_complete,
            game_finished: state.game_finished(),
            camera_x: state.camera.x,
            hive_pos: state.hive.pos,
            hive_size: state.hive.size,
            player: PlayerView {
                pos: player.pos,
                facing: player.facing,
                landed: player.is_landed(),
                dead: player.is_dead(),
                damaged: player.is_invulnerable(),
                damage_timer: player.invulnerable,
                health: player.health,
                wing_phase: player.wing_phase,
                fatigue: player.fatigue,
            },
            enemies: state
                .enemies
                .iter()
                .filter(|e| e.is_active() && e.is_jumping())
                .map(|e| EnemyView {
                    pos: e.pos,
                    kind: e.kind,
                    size: e.size,
                    jump_height: e.jump_height,
                    active: e.is_active(),
                    jumping: e.is_jumping(),
                })
                .collect(),
            companions: state
                .companions
                .iter()
                .map(|c| CompanionView {
                    kind: c.kind,
                    pos: c.pos,
                    hover_phase: c.hover_phase,
                    wing_phase: c.wing_phase,
                    shadow_y: c.shadow_y,
                    size_scale: c.size_scale(),
                })
                .collect(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_only_jumping_enemies_listed() {
        let mut state = GameState::new(4).unwrap();
        let snapshot = WorldSnapshot::capture(&mut state);
        let awake = state.enemies.iter().filter(|e| e.is_jumping()).count();
        assert_eq!(snapshot.enemies.len(), awake);
        assert!(snapshot.enemies.iter().all(|e| e.active && e.jumping));
        assert_eq!(snapshot.companions.len(), 3);
    }

    #[test]
    fn test_capture_drains_events() {
        let mut state = GameState::new(1).unwrap();
        let first = WorldSnapshot::capture(&mut state);
        assert_eq!(first.events, vec![GameEvent::LevelStarted { level: 1 }]);
        tick(&mut state, &TickInput::default(), 0.0);
        let second = WorldSnapshot::capture(&mut state);
        assert!(!second.events.contains(&GameEvent::LevelStarted { level: 1 }));
    }

    #[test]
    fn test_serializes() {
        let mut state = GameState::new(6).unwrap();
        let json = serde_json::to_string(&WorldSnapshot::capture(&mut state)).unwrap();
        assert!(json.contains("\"level\":6"));
    }
}
