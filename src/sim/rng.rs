//! Seeded level generator
//!
//! Park-Miller "minimal standard" LCG. Level layouts are regenerated from
//! `level * 1000 + purpose` instead of being stored, so the recurrence is
//! pure integer math and identical on every platform.

use rand::SeedableRng;
use rand_pcg::Pcg32;

const MULTIPLIER: u64 = 16_807;
const MODULUS: u64 = 2_147_483_647;

/// What a random stream is used for. Each purpose gets its own seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Clouds,
    BackgroundGrass,
    ForegroundGrass,
    Trees,
    Enemies,
    Companions,
    Cooldowns,
}

impl Purpose {
    pub fn offset(self) -> u32 {
        match self {
            Purpose::Clouds => 1,
            Purpose::BackgroundGrass => 2,
            Purpose::ForegroundGrass => 3,
            Purpose::Trees => 4,
            Purpose::Enemies => 5,
            Purpose::Companions => 6,
            Purpose::Cooldowns => 7,
        }
    }
}

/// Seed for a (level, purpose) pair
#[inline]
pub fn level_seed(level: u32, purpose: Purpose) -> u32 {
    level * 1000 + purpose.offset()
}

/// Deterministic generator producing values in [0, 1)
#[derive(Debug, Clone)]
pub struct LevelRng {
    state: u64,
}

impl LevelRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed) % MODULUS,
        }
    }

    pub fn for_level(level: u32, purpose: Purpose) -> Self {
        Self::new(level_seed(level, purpose))
    }

    /// Next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    pub fn next_f32(&mut self) -> f32 {
        self.next_f64() as f32
    }

    /// Symmetric jitter in [-span/2, span/2)
    pub fn jitter(&mut self, span: f32) -> f32 {
        (self.next_f32() - 0.5) * span
    }
}

/// Runtime stream for non-layout randomness (jump cooldowns)
pub fn cooldown_rng(level: u32) -> Pcg32 {
    Pcg32::seed_from_u64(u64::from(level_seed(level, Purpose::Cooldowns)))
}
