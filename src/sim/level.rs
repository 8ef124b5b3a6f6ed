//! Level table
//!
//! Static per-level roster of friends and frogs.

use serde::{Deserialize, Serialize};

/// Number of configured levels; finishing the last one wraps to level 1
pub const FINAL_LEVEL: u32 = 6;

/// Friends waiting near the hive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanionKind {
    VillagerOne,
    VillagerTwo,
    Child,
    Queen,
}

impl CompanionKind {
    /// Draw scale relative to a regular friend
    pub fn size_scale(self) -> f32 {
        match self {
            CompanionKind::Child => 0.6,
            CompanionKind::Queen => 1.5,
            CompanionKind::VillagerOne | CompanionKind::VillagerTwo => 1.0,
        }
    }
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Frog,
    Boss,
}

/// Immutable level descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    /// Friends in roster order; the first one leads
    pub companions: &'static [CompanionKind],
    pub enemy_kind: EnemyKind,
    pub enemy_count: u32,
}

use CompanionKind::*;

const FULL_ROSTER: &[CompanionKind] = &[VillagerOne, VillagerTwo, Child, Queen];

static LEVELS: [LevelConfig; FINAL_LEVEL as usize] = [
    LevelConfig {
        companions: &[],
        enemy_kind: EnemyKind::Frog,
        enemy_count: 3,
    },
    LevelConfig {
        companions: &[VillagerOne],
        enemy_kind: EnemyKind::Frog,
        enemy_count: 3,
    },
    LevelConfig {
        companions: &[VillagerOne, VillagerTwo],
        enemy_kind: EnemyKind::Frog,
        enemy_count: 3,
    },
    LevelConfig {
        companions: &[VillagerOne, VillagerTwo, Child],
        enemy_kind: EnemyKind::Frog,
        enemy_count: 4,
    },
    LevelConfig {
        companions: FULL_ROSTER,
        enemy_kind: EnemyKind::Frog,
        enemy_count: 4,
    },
    LevelConfig {
        companions: FULL_ROSTER,
        enemy_kind: EnemyKind::Boss,
        enemy_count: 1,
    },
];

impl LevelConfig {
    /// Look up a 1-based level index
    pub fn get(level: u32) -> Option<&'static LevelConfig> {
        let index = level.checked_sub(1)?;
        LEVELS.get(index as usize)
    }
}

/// Level that follows `level`, wrapping after the final one
pub fn next_level(level: u32) -> u32 {
    if level >= FINAL_LEVEL { 1 } else { level + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_bounds() {
        assert!(LevelConfig::get(0).is_none());
        assert!(LevelConfig::get(FINAL_LEVEL + 1).is_none());
        for level in 1..=FINAL_LEVEL {
            assert!(LevelConfig::get(level).is_some());
        }
    }

    #[test]
    fn test_roster_grows() {
        let counts: Vec<usize> = (1..=FINAL_LEVEL)
            .filter_map(LevelConfig::get)
            .map(|c| c.companions.len())
            .collect();
        assert_eq!(counts, vec![0, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn test_final_level_is_boss() {
        let last = LevelConfig::get(FINAL_LEVEL).unwrap();
        assert_eq!(last.enemy_kind, EnemyKind::Boss);
        assert_eq!(last.enemy_count, 1);
    }

    #[test]
    fn test_next_level_wraps() {
        assert_eq!(next_level(1), 2);
        assert_eq!(next_level(5), 6);
        assert_eq!(next_level(6), 1);
    }

    #[test]
    fn test_size_scale() {
        assert_eq!(CompanionKind::Child.size_scale(), 0.6);
        assert_eq!(CompanionKind::Queen.size_scale(), 1.5);
        assert_eq!(CompanionKind::VillagerTwo.size_scale(), 1.0);
    }
}
