//! Friends hovering near the hive
//!
//! The leader flies out to meet Andrea at her own speed; followers drift
//! a little toward her when she is close and otherwise hover at home.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::CompanionKind;
use super::rng::{LevelRng, Purpose};
use crate::consts::*;
use crate::ease_toward;

/// Leader pursuit starts inside this horizontal distance
pub const LEADER_APPROACH_RADIUS: f32 = 800.0;
/// Followers feel Andrea's pull inside this horizontal distance
pub const FOLLOWER_ATTRACT_RADIUS: f32 = 600.0;
/// Where the leader tries to sit relative to Andrea
pub const LEADER_OFFSET: Vec2 = Vec2::new(-80.0, -30.0);
/// Leader stops chasing once this close to its target
pub const LEADER_STOP_DIST: f32 = 5.0;
/// How far the shadow bobs around the ground line
pub const SHADOW_RANGE: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanionRole {
    /// Actively flies to Andrea
    Leader,
    /// Hovers near home with a weak pull toward Andrea
    Follower,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Companion {
    pub kind: CompanionKind,
    pub role: CompanionRole,
    /// Resting position
    pub base: Vec2,
    pub pos: Vec2,
    pub hover_phase: f32,
    /// Drives the shadow only
    pub vert_phase: f32,
    pub wing_phase: f32,
    /// Shadow y, decoupled from the body to fake depth
    pub shadow_y: f32,
}

/// Pull strength on a follower at the given horizontal distance
pub fn follower_attraction(distance: f32) -> f32 {
    if distance < FOLLOWER_ATTRACT_RADIUS {
        1.0 - distance / FOLLOWER_ATTRACT_RADIUS
    } else {
        0.0
    }
}

impl Companion {
    pub fn size_scale(&self) -> f32 {
        self.kind.size_scale()
    }

    pub fn update(&mut self, dt: f32, player_pos: Vec2) {
        self.hover_phase += dt * 2.0;
        self.vert_phase += dt * 1.5;
        self.wing_phase += dt * 15.0 * TAU;

        let distance = (player_pos.x - self.base.x).abs();
        match self.role {
            CompanionRole::Leader => self.pursue(dt, player_pos, distance),
            CompanionRole::Follower => self.hover(dt, player_pos, distance),
        }

        let shadow_target = GROUND_Y + self.vert_phase.sin() * SHADOW_RANGE;
        self.shadow_y = ease_toward(self.shadow_y, shadow_target, 3.0, dt);
    }

    fn pursue(&mut self, dt: f32, player_pos: Vec2, distance: f32) {
        if distance < LEADER_APPROACH_RADIUS {
            // Speed-matched chase, not a lagging lerp
            let to_target = player_pos + LEADER_OFFSET - self.pos;
            let gap = to_target.length();
            if gap > LEADER_STOP_DIST {
                self.pos += to_target / gap * PLAYER_SPEED * dt;
            }
        } else {
            self.ease_to(self.base, 1.5, dt);
        }
    }

    fn hover(&mut self, dt: f32, player_pos: Vec2, distance: f32) {
        let pull = follower_attraction(distance);
        let target = if pull > 0.0 {
            self.base + (player_pos - self.base) * Vec2::new(0.15, 0.1) * pull
        } else {
            self.base
        };
        self.ease_to(target, 2.0, dt);
    }

    fn ease_to(&mut self, target: Vec2, rate: f32, dt: f32) {
        self.pos.x = ease_toward(self.pos.x, target.x, rate, dt);
        self.pos.y = ease_toward(self.pos.y, target.y, rate, dt);
    }
}

/// Build the level's friends; the first in the roster leads
pub fn spawn_companions(level: u32, roster: &[CompanionKind]) -> Vec<Companion> {
    let mut rng = LevelRng::for_level(level, Purpose::Companions);
    let home = Vec2::new(HIVE_X - 300.0, HIVE_Y);
    roster
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let base = home + Vec2::new(rng.jitter(400.0), rng.jitter(200.0));
            let pos = home + Vec2::new(rng.jitter(400.0), rng.jitter(200.0));
            let role = if i == 0 {
                CompanionRole::Leader
            } else {
                CompanionRole::Follower
            };
            let i = i as f32;
            Companion {
                kind,
                role,
                base,
                pos,
                hover_phase: i * PI / 2.0,
                vert_phase: i * PI / 3.0,
                wing_phase: i * PI / 4.0,
                shadow_y: GROUND_Y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn pair() -> (Companion, Companion) {
        let roster = [CompanionKind::VillagerOne, CompanionKind::VillagerTwo];
        let mut friends = spawn_companions(3, &roster);
        for friend in &mut friends {
            friend.base = Vec2::new(3000.0, 200.0);
            friend.pos = friend.base;
        }
        let follower = friends.pop().unwrap();
        let leader = friends.pop().unwrap();
        (leader, follower)
    }

    #[test]
    fn test_single_leader() {
        let roster = [
            CompanionKind::VillagerOne,
            CompanionKind::VillagerTwo,
            CompanionKind::Child,
            CompanionKind::Queen,
        ];
        let friends = spawn_companions(5, &roster);
        let leaders = friends
            .iter()
            .filter(|f| f.role == CompanionRole::Leader)
            .count();
        assert_eq!(leaders, 1);
        assert_eq!(friends[0].role, CompanionRole::Leader);
        assert_eq!(friends[3].size_scale(), 1.5);
        assert_eq!(friends, spawn_companions(5, &roster));
    }

    #[test]
    fn test_attraction_strength() {
        assert_eq!(follower_attraction(300.0), 0.5);
        assert_eq!(follower_attraction(0.0), 1.0);
        assert_eq!(follower_attraction(600.0), 0.0);
        assert_eq!(follower_attraction(1000.0), 0.0);
    }

    #[test]
    fn test_leader_waits_outside_radius() {
        let (mut leader, _) = pair();
        let player = Vec2::new(2000.0, 300.0); // 1000 away
        for _ in 0..60 {
            leader.update(DT, player);
        }
        assert_eq!(leader.pos, leader.base);
    }

    #[test]
    fn test_leader_chases_at_player_speed() {
        let (mut leader, _) = pair();
        let player = Vec2::new(2300.0, 300.0); // 700 away
        let before = leader.pos;
        leader.update(DT, player);
        let step = leader.pos.distance(before);
        assert!((step - PLAYER_SPEED * DT).abs() < 1e-3);
        assert!(leader.pos.x < before.x);

        // Reaches the spot behind Andrea and stops there
        for _ in 0..600 {
            leader.update(DT, player);
        }
        assert!(leader.pos.distance(player + LEADER_OFFSET) <= LEADER_STOP_DIST);
    }

    #[test]
    fn test_follower_pulled_toward_player() {
        let (_, mut follower) = pair();
        let player = Vec2::new(2700.0, 400.0); // 300 away, pull 0.5
        for _ in 0..1200 {
            follower.update(DT, player);
        }
        let expected = Vec2::new(3000.0 - 300.0 * 0.15 * 0.5, 200.0 + 200.0 * 0.1 * 0.5);
        assert!(follower.pos.distance(expected) < 0.01);
    }

    #[test]
    fn test_shadow_stays_near_ground() {
        let (mut leader, _) = pair();
        for _ in 0..2000 {
            leader.update(DT, Vec2::new(200.0, 300.0));
            assert!((leader.shadow_y - GROUND_Y).abs() <= SHADOW_RANGE);
        }
    }
}
