//! Level session state
//!
//! Everything the simulation mutates lives in `GameState`; a level
//! (re)start rebuilds it wholesale.

use rand_pcg::Pcg32;
use thiserror::Error;

use super::camera::Camera;
use super::companion::{Companion, spawn_companions};
use super::enemy::{Enemy, spawn_enemies};
use super::goal::Hive;
use super::level::{FINAL_LEVEL, LevelConfig, next_level};
use super::player::Player;
use super::rng::cooldown_rng;
use super::scenery::Scenery;

/// Things that happened during a tick, for audio/HUD/logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum GameEvent {
    LevelStarted { level: u32 },
    EnemyWoke { index: usize },
    PlayerHit { health: u8 },
    PlayerKnockedOut,
    LevelComplete { level: u32 },
}

/// Rejected level commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("level {0} is not configured")]
    UnknownLevel(u32),
    #[error("level {0} is still in progress")]
    LevelInProgress(u32),
}

/// One level session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current level (1-based)
    pub level: u32,
    pub level_complete: bool,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub companions: Vec<Companion>,
    pub camera: Camera,
    pub hive: Hive,
    pub scenery: Scenery,
    /// Jump cooldown stream, reseeded per level
    pub(crate) cooldowns: Pcg32,
    /// Simulation ticks since the level started
    pub time_ticks: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session at the given level
    pub fn new(level: u32) -> Result<Self, SessionError> {
        let config = LevelConfig::get(level).ok_or(SessionError::UnknownLevel(level))?;
        log::info!(
            "Level {} start: {} friends, {} x {:?}",
            level,
            config.companions.len(),
            config.enemy_count,
            config.enemy_kind
        );
        Ok(Self {
            level,
            level_complete: false,
            player: Player::default(),
            enemies: spawn_enemies(level, config),
            companions: spawn_companions(level, config.companions),
            camera: Camera::default(),
            hive: Hive::default(),
            scenery: Scenery::generate(level),
            cooldowns: cooldown_rng(level),
            time_ticks: 0,
            events: vec![GameEvent::LevelStarted { level }],
        })
    }

    /// Reset everything for level `level`. The only reset path.
    pub fn init_level(&mut self, level: u32) -> Result<(), SessionError> {
        *self = Self::new(level)?;
        Ok(())
    }

    /// Continue after a completed level; the final level wraps to 1
    pub fn request_next_level(&mut self) -> Result<(), SessionError> {
        self.ensure_complete()?;
        self.init_level(next_level(self.level))
    }

    /// Jump to a specific level after completing the current one
    pub fn request_level(&mut self, level: u32) -> Result<(), SessionError> {
        self.ensure_complete()?;
        self.init_level(level)
    }

    /// Start over from level 1 after completing the current level
    pub fn request_restart(&mut self) -> Result<(), SessionError> {
        self.request_level(1)
    }

    /// True once the final level has been completed
    pub fn game_finished(&self) -> bool {
        self.level_complete && self.level == FINAL_LEVEL
    }

    fn ensure_complete(&self) -> Result<(), SessionError> {
        if self.level_complete {
            Ok(())
        } else {
            Err(SessionError::LevelInProgress(self.level))
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
