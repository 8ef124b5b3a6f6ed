//! Andrea, the player-controlled wasp
//!
//! Flight model: free 2D movement from the stick, landing on the ground
//! line, and fatigue that drags her down after too long up high.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which way the sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Flight state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightState {
    Flying,
    Landed,
    /// Knocked out; terminal until the level is re-initialized
    Dead,
}

/// Result of a `hit` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Invulnerable or already down
    Ignored,
    Damaged { health: u8 },
    KnockedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub facing: Facing,
    pub state: FlightState,
    pub health: u8,
    /// Seconds of invulnerability left; > 0 means damaged and flashing
    pub invulnerable: f32,
    /// 0-1, builds when flying high
    pub fatigue: f32,
    /// Seconds spent above the screen midline
    pub time_at_high_alt: f32,
    /// Wing flap phase (radians)
    pub wing_phase: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            facing: Facing::Right,
            state: FlightState::Flying,
            health: PLAYER_START_HEALTH,
            invulnerable: 0.0,
            fatigue: 0.0,
            time_at_high_alt: 0.0,
            wing_phase: 0.0,
        }
    }
}

impl Player {
    pub fn is_dead(&self) -> bool {
        self.state == FlightState::Dead
    }

    pub fn is_landed(&self) -> bool {
        matches!(self.state, FlightState::Landed | FlightState::Dead)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0.0
    }

    /// Advance one step with the given stick vector
    pub fn update(&mut self, dt: f32, stick: Vec2) {
        if self.is_dead() {
            return;
        }

        if self.invulnerable > 0.0 {
            self.invulnerable = (self.invulnerable - dt).max(0.0);
        }

        let moving = stick.length() > STICK_DEAD_ZONE;
        if moving {
            self.pos += stick * PLAYER_SPEED * dt;
            self.state = FlightState::Flying;
            if stick.x < -FACING_HYSTERESIS {
                self.facing = Facing::Left;
            } else if stick.x > FACING_HYSTERESIS {
                self.facing = Facing::Right;
            }
        }

        self.update_fatigue(dt);

        // Fatigue drags her down even without input
        if self.fatigue > 0.0 && !self.is_landed() {
            self.pos.y += self.fatigue * FATIGUE_MAX_FALL_SPEED * dt;
        }

        self.pos = Self::clamp_to_bounds(self.pos);

        if self.pos.y >= GROUND_Y - 1.0 && !moving {
            self.pos.y = GROUND_Y;
            self.state = FlightState::Landed;
        }

        if !self.is_landed() {
            self.wing_phase += dt * PLAYER_WING_HZ * std::f32::consts::TAU;
        }
    }

    fn update_fatigue(&mut self, dt: f32) {
        let high = self.pos.y < VIEW_H / 2.0;
        if high && !self.is_landed() {
            self.time_at_high_alt += dt;
            if self.time_at_high_alt > FATIGUE_GRACE_SECS {
                let excess = self.time_at_high_alt - FATIGUE_GRACE_SECS;
                self.fatigue = (excess / FATIGUE_RAMP_SECS).min(1.0);
            }
        } else {
            // Recovery is slower than the build-up
            self.time_at_high_alt = (self.time_at_high_alt - dt * HIGH_ALT_DECAY_RATE).max(0.0);
            self.fatigue = (self.fatigue - dt * FATIGUE_DECAY_RATE).max(0.0);
        }
    }

    /// Clamp a position into the flyable area
    pub fn clamp_to_bounds(pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x.clamp(PLAYER_W / 2.0, WORLD_W - PLAYER_W / 2.0),
            pos.y.clamp(PLAYER_H / 2.0, GROUND_Y),
        )
    }

    /// Take one point of damage unless invulnerable or down
    pub fn hit(&mut self) -> HitOutcome {
        if self.is_invulnerable() || self.is_dead() {
            return HitOutcome::Ignored;
        }
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.state = FlightState::Dead;
            self.pos.y = GROUND_Y;
            HitOutcome::KnockedOut
        } else {
            self.invulnerable = INVULNERABLE_SECS;
            HitOutcome::Damaged {
                health: self.health,
            }
        }
    }
}
