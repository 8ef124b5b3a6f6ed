//! The hive: reaching it completes the level

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::in_contact;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hive {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Default for Hive {
    fn default() -> Self {
        Self {
            pos: Vec2::new(HIVE_X, HIVE_Y),
            size: Vec2::new(HIVE_W, HIVE_H),
        }
    }
}

impl Hive {
    /// Distance under which the player counts as home
    pub fn reach_distance(&self) -> f32 {
        (self.size.x + PLAYER_W) * CONTACT_FACTOR
    }

    pub fn reached_by(&self, player_pos: Vec2) -> bool {
        in_contact(self.pos, player_pos, self.size.x, PLAYER_W)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reach_distance() {
        let hive = Hive::default();
        assert!((hive.reach_distance() - 89.6).abs() < 1e-4);
    }

    #[test]
    fn test_far_player_does_not_reach() {
        let hive = Hive::default();
        assert!(!hive.reached_by(Vec2::new(0.0, HIVE_Y)));
        assert!(!hive.reached_by(Vec2::new(HIVE_X - 90.0, HIVE_Y)));
        assert!(hive.reached_by(Vec2::new(HIVE_X - 89.0, HIVE_Y)));
        assert!(hive.reached_by(Vec2::new(HIVE_X, HIVE_Y + 60.0)));
    }
}
