//! Hive Flight - A side-scrolling wasp flight game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, frogs, friends, camera, goal)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Letterbox viewport and asset readiness
//! - `input`: Virtual joystick
//! - `audio`: Wing buzz tone
//! - `ui`: HUD text

pub mod audio;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical screen size (world units visible at once)
    pub const VIEW_W: f32 = 800.0;
    pub const VIEW_H: f32 = 600.0;
    /// Total scrollable world width
    pub const WORLD_W: f32 = 4000.0;

    /// Largest step the clock will hand to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Horizon: sky covers the top 62.5% of the screen
    pub const SKY_RATIO: f32 = 0.625;
    pub const GRASS_Y: f32 = VIEW_H * SKY_RATIO;
    /// Ground line (middle of the grass band) for landing and shadows
    pub const GROUND_Y: f32 = GRASS_Y + (VIEW_H - GRASS_Y) / 2.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_W: f32 = 64.0;
    pub const PLAYER_H: f32 = 48.0;
    pub const PLAYER_SPAWN_X: f32 = 200.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;
    pub const PLAYER_START_HEALTH: u8 = 2;
    /// Seconds of invulnerability after a hit
    pub const INVULNERABLE_SECS: f32 = 1.0;
    /// Stick magnitude below this counts as no input
    pub const STICK_DEAD_ZONE: f32 = 0.05;
    /// Horizontal input needed to flip facing
    pub const FACING_HYSTERESIS: f32 = 0.1;
    /// Wing beats per second while airborne
    pub const PLAYER_WING_HZ: f32 = 20.0;

    /// Fatigue tuning
    pub const FATIGUE_GRACE_SECS: f32 = 5.0;
    pub const FATIGUE_RAMP_SECS: f32 = 10.0;
    pub const FATIGUE_MAX_FALL_SPEED: f32 = 80.0;
    pub const HIGH_ALT_DECAY_RATE: f32 = 2.0;
    pub const FATIGUE_DECAY_RATE: f32 = 0.3;

    /// Frog defaults
    pub const FROG_W: f32 = 100.0;
    pub const FROG_H: f32 = 120.0;
    pub const FROG_JUMP_SPEED: f32 = 250.0;
    pub const FROG_JUMP_HEIGHT: f32 = 240.0;
    pub const FROG_JUMP_DURATION: f32 = 1.2;
    /// Boss frog is double size, double jump
    pub const BOSS_W: f32 = 200.0;
    pub const BOSS_H: f32 = 240.0;
    pub const BOSS_JUMP_HEIGHT: f32 = 480.0;
    /// Cooldown between jumps (seconds)
    pub const FROG_COOLDOWN_MIN: f32 = 1.5;
    pub const FROG_COOLDOWN_MAX: f32 = 2.5;

    /// Hive (goal)
    pub const HIVE_W: f32 = PLAYER_W * 3.0;
    pub const HIVE_H: f32 = PLAYER_H * 3.0;
    pub const HIVE_X: f32 = WORLD_W - 200.0;
    pub const HIVE_Y: f32 = 200.0;

    /// Friends are slightly smaller than Andrea
    pub const FRIEND_W: f32 = PLAYER_W * 0.9;
    pub const FRIEND_H: f32 = PLAYER_H * 0.9;

    /// Circular proximity tests use this fraction of the summed widths
    pub const CONTACT_FACTOR: f32 = 0.35;

    /// Camera leads the player by this share of the screen
    pub const CAMERA_LEAD: f32 = 0.3;
    /// Camera smoothing rate (1/s)
    pub const CAMERA_EASE: f32 = 8.0;
}

/// True if two bodies of the given widths are close enough to touch
#[inline]
pub fn in_contact(a: Vec2, b: Vec2, width_a: f32, width_b: f32) -> bool {
    a.distance(b) < (width_a + width_b) * consts::CONTACT_FACTOR
}

/// Move `current` toward `target` by `rate * dt` of the remaining gap
#[inline]
pub fn ease_toward(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * rate * dt
}
