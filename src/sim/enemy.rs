//! Jumping frogs
//!
//! Each frog sleeps until the camera comes near, then leaps right-to-left
//! along a parabola, rests for a random cooldown and leaps again from its
//! anchor. The cooldown is counted down inside the tick so a level switch
//! simply drops it along with the frog.

use glam::Vec2;
use rand::Rng;

use super::level::{EnemyKind, LevelConfig};
use super::rng::{LevelRng, Purpose};
use crate::consts::*;
use crate::in_contact;

/// Activity phase of a frog
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyPhase {
    /// Waiting for the camera to come close
    Dormant,
    /// Mid-jump, `elapsed` seconds into it
    Jumping { elapsed: f32 },
    /// Resting on the ground until the next jump
    Cooldown { remaining: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// World x the jump cycle is anchored to
    pub anchor_x: f32,
    pub size: Vec2,
    /// Peak height above the ground line
    pub jump_height: f32,
    pub pos: Vec2,
    pub phase: EnemyPhase,
    /// Where the current jump started
    pub jump_start_x: f32,
}

impl Enemy {
    pub fn frog(anchor_x: f32, jump_height: f32) -> Self {
        Self::with_kind(EnemyKind::Frog, anchor_x, Vec2::new(FROG_W, FROG_H), jump_height)
    }

    /// The boss waits one screen before the hive
    pub fn boss() -> Self {
        Self::with_kind(
            EnemyKind::Boss,
            WORLD_W - VIEW_W - 200.0,
            Vec2::new(BOSS_W, BOSS_H),
            BOSS_JUMP_HEIGHT,
        )
    }

    fn with_kind(kind: EnemyKind, anchor_x: f32, size: Vec2, jump_height: f32) -> Self {
        Self {
            kind,
            anchor_x,
            size,
            jump_height,
            pos: Vec2::new(0.0, GROUND_Y),
            phase: EnemyPhase::Dormant,
            jump_start_x: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != EnemyPhase::Dormant
    }

    pub fn is_jumping(&self) -> bool {
        matches!(self.phase, EnemyPhase::Jumping { .. })
    }

    /// True when the anchor is inside the camera's wake-up window
    pub fn in_activation_window(&self, camera_x: f32) -> bool {
        let screen_dist = self.anchor_x - camera_x;
        screen_dist < VIEW_W * 1.2 && screen_dist > -VIEW_W * 0.5
    }

    /// Position along the jump for normalized time `t` in [0, 1]
    pub fn arc_position(&self, t: f32) -> Vec2 {
        Vec2::new(
            self.jump_start_x - FROG_JUMP_SPEED * FROG_JUMP_DURATION * t,
            GROUND_Y - self.jump_height * 4.0 * t * (1.0 - t),
        )
    }

    fn start_jump(&mut self) {
        self.jump_start_x = self.anchor_x + VIEW_W * 0.6;
        self.pos = Vec2::new(self.jump_start_x, GROUND_Y);
        self.phase = EnemyPhase::Jumping { elapsed: 0.0 };
    }

    /// Advance the jump cycle.
    ///
    /// Returns true when the frog is airborne after this step and may
    /// collide with the player.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, camera_x: f32, cooldowns: &mut R) -> bool {
        if self.phase == EnemyPhase::Dormant && self.in_activation_window(camera_x) {
            self.start_jump();
        }

        match self.phase {
            EnemyPhase::Dormant => false,
            EnemyPhase::Cooldown { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.start_jump();
                } else {
                    self.phase = EnemyPhase::Cooldown { remaining };
                }
                false
            }
            EnemyPhase::Jumping { elapsed } => {
                let elapsed = elapsed + dt;
                let t = elapsed / FROG_JUMP_DURATION;
                if t >= 1.0 {
                    self.pos = self.arc_position(1.0);
                    self.phase = EnemyPhase::Cooldown {
                        remaining: cooldowns.random_range(FROG_COOLDOWN_MIN..FROG_COOLDOWN_MAX),
                    };
                    return false;
                }
                self.phase = EnemyPhase::Jumping { elapsed };
                self.pos = self.arc_position(t);
                true
            }
        }
    }

    /// Circular proximity test against the player
    pub fn touches(&self, player_pos: Vec2) -> bool {
        in_contact(self.pos, player_pos, self.size.x, PLAYER_W)
    }
}

/// Build the frogs for a level
pub fn spawn_enemies(level: u32, config: &LevelConfig) -> Vec<Enemy> {
    match config.enemy_kind {
        EnemyKind::Boss => vec![Enemy::boss()],
        EnemyKind::Frog => {
            let mut rng = LevelRng::for_level(level, Purpose::Enemies);
            let spacing = WORLD_W / (config.enemy_count + 1) as f32;
            (0..config.enemy_count)
                .map(|i| {
                    let anchor_x = spacing * (i + 1) as f32 + rng.jitter(300.0);
                    let jump_height = FROG_JUMP_HEIGHT + rng.jitter(100.0);
                    Enemy::frog(anchor_x, jump_height)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::cooldown_rng;

    fn airborne_frog() -> Enemy {
        let mut frog = Enemy::frog(1000.0, 240.0);
        frog.start_jump();
        frog
    }

    #[test]
    fn test_trajectory_endpoints_and_peak() {
        let frog = airborne_frog();
        assert_eq!(frog.arc_position(0.0).y, GROUND_Y);
        assert_eq!(frog.arc_position(1.0).y, GROUND_Y);
        assert_eq!(frog.arc_position(0.5).y, GROUND_Y - 240.0);
        assert_eq!(frog.arc_position(0.0).x, 1000.0 + VIEW_W * 0.6);
        assert_eq!(frog.arc_position(1.0).x, 1000.0 + VIEW_W * 0.6 - 300.0);
    }

    #[test]
    fn test_activation_window() {
        let frog = Enemy::frog(1000.0, 240.0);
        assert!(!frog.in_activation_window(0.0)); // 1000 ahead > 960
        assert!(frog.in_activation_window(100.0));
        assert!(frog.in_activation_window(1390.0));
        assert!(!frog.in_activation_window(1400.0)); // 400 behind
    }

    #[test]
    fn test_dormant_until_camera_near() {
        let mut rng = cooldown_rng(1);
        let mut frog = Enemy::frog(2000.0, 240.0);
        assert!(!frog.update(0.1, 0.0, &mut rng));
        assert!(!frog.is_active());

        // Activation starts the jump in the same step
        assert!(frog.update(0.1, 1200.0, &mut rng));
        assert!(frog.is_active() && frog.is_jumping());
        assert!(frog.pos.y < GROUND_Y);
    }

    #[test]
    fn test_cycle_cooldown_and_rearm() {
        let mut rng = cooldown_rng(1);
        let mut frog = Enemy::frog(500.0, 240.0);
        let dt = 0.05;
        let mut steps = 0;
        while frog.is_jumping() || !frog.is_active() {
            frog.update(dt, 0.0, &mut rng);
            steps += 1;
            assert!(steps < 100);
        }
        let EnemyPhase::Cooldown { remaining } = frog.phase else {
            panic!("expected cooldown, got {:?}", frog.phase);
        };
        assert!((FROG_COOLDOWN_MIN..FROG_COOLDOWN_MAX).contains(&remaining));
        assert_eq!(frog.pos.y, GROUND_Y);

        // Rests for the cooldown, then jumps again from the anchor
        let rest_steps = (remaining / dt).ceil() as u32;
        for _ in 0..rest_steps - 1 {
            assert!(!frog.update(dt, 0.0, &mut rng));
            assert!(!frog.is_jumping());
        }
        frog.update(dt, 0.0, &mut rng);
        assert!(frog.is_jumping());
        assert_eq!(frog.pos, Vec2::new(500.0 + VIEW_W * 0.6, GROUND_Y));
    }

    #[test]
    fn test_touches_player() {
        let frog = airborne_frog();
        // 0.35 * (100 + 64) = 57.4
        assert!(frog.touches(frog.pos + Vec2::new(57.0, 0.0)));
        assert!(!frog.touches(frog.pos + Vec2::new(0.0, 58.0)));
    }

    #[test]
    fn test_boss_level() {
        let config = LevelConfig::get(6).unwrap();
        let enemies = spawn_enemies(6, config);
        assert_eq!(enemies.len(), 1);
        let boss = &enemies[0];
        assert_eq!(boss.kind, EnemyKind::Boss);
        assert_eq!(boss.size, Vec2::new(FROG_W, FROG_H) * 2.0);
        assert_eq!(boss.jump_height, FROG_JUMP_HEIGHT * 2.0);
        assert_eq!(boss.anchor_x, 3000.0);
    }

    #[test]
    fn test_frog_spawn_is_deterministic() {
        let config = LevelConfig::get(4).unwrap();
        let a = spawn_enemies(4, config);
        let b = spawn_enemies(4, config);
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        for (i, frog) in a.iter().enumerate() {
            let slot = WORLD_W / 5.0 * (i + 1) as f32;
            assert!((frog.anchor_x - slot).abs() <= 150.0);
            assert!((frog.jump_height - FROG_JUMP_HEIGHT).abs() <= 50.0);
        }
    }
}
