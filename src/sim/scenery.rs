//! Decorative props regenerated per level
//!
//! Nothing here affects gameplay; it only needs to look the same every
//! time a level is entered.

use serde::Serialize;

use super::rng::{LevelRng, Purpose};
use crate::consts::*;

/// Number of clouds in the sky
pub const CLOUD_COUNT: usize = 12;
/// Average spacing between grass tufts near the horizon
pub const BG_GRASS_SPACING: f32 = 180.0;
/// Average spacing between large foreground tufts
pub const FG_GRASS_SPACING: f32 = 300.0;
/// Foreground tufts scroll faster, so they cover more than the world
pub const FG_PARALLAX: f32 = 1.4;
/// Clouds scroll slower than the ground
pub const CLOUD_PARALLAX: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrassTuft {
    pub x: f32,
    pub y_offset: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tree {
    pub x: f32,
    pub scale: f32,
}

/// All decorative props for one level
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scenery {
    pub clouds: Vec<Cloud>,
    pub background_grass: Vec<GrassTuft>,
    pub foreground_grass: Vec<GrassTuft>,
    pub trees: Vec<Tree>,
}

impl Scenery {
    pub fn generate(level: u32) -> Self {
        Self {
            clouds: clouds(level),
            background_grass: background_grass(level),
            foreground_grass: foreground_grass(level),
            trees: trees(level),
        }
    }

    /// Background tufts close to a tree are drawn lower so the trunk shows
    pub fn tuft_near_tree(&self, tuft: &GrassTuft) -> bool {
        self.trees.iter().any(|t| (tuft.x - t.x).abs() < 200.0)
    }
}

fn clouds(level: u32) -> Vec<Cloud> {
    let mut rng = LevelRng::for_level(level, Purpose::Clouds);
    (0..CLOUD_COUNT)
        .map(|_| Cloud {
            x: rng.next_f32() * WORLD_W,
            y: 40.0 + rng.next_f32() * (GRASS_Y * 0.5),
            w: 80.0 + rng.next_f32() * 120.0,
            h: 30.0 + rng.next_f32() * 30.0,
        })
        .collect()
}

fn background_grass(level: u32) -> Vec<GrassTuft> {
    let mut rng = LevelRng::for_level(level, Purpose::BackgroundGrass);
    let mut tufts = Vec::new();
    let mut x = rng.next_f32() * BG_GRASS_SPACING * 0.5;
    while x < WORLD_W {
        tufts.push(GrassTuft {
            x,
            // Biased down
            y_offset: rng.next_f32() * 30.0 - 20.0,
            scale: 0.85 + rng.next_f32() * 0.3,
        });
        x += BG_GRASS_SPACING * 0.5 + rng.next_f32() * BG_GRASS_SPACING;
    }
    tufts
}

fn foreground_grass(level: u32) -> Vec<GrassTuft> {
    let mut rng = LevelRng::for_level(level, Purpose::ForegroundGrass);
    let mut tufts = Vec::new();
    let mut x = rng.next_f32() * FG_GRASS_SPACING;
    while x < WORLD_W * FG_PARALLAX {
        tufts.push(GrassTuft {
            x,
            // Biased up
            y_offset: rng.next_f32() * 60.0 - 40.0,
            scale: 0.8 + rng.next_f32() * 0.4,
        });
        x += FG_GRASS_SPACING * 0.5 + rng.next_f32() * FG_GRASS_SPACING;
    }
    tufts
}

fn trees(level: u32) -> Vec<Tree> {
    let mut rng = LevelRng::for_level(level, Purpose::Trees);
    let count = 3 + (rng.next_f32() * 2.0) as u32;
    let slot = WORLD_W / (count + 1) as f32;
    let mut trees: Vec<Tree> = (0..count)
        .map(|i| Tree {
            x: slot * (i + 1) as f32 + rng.jitter(400.0),
            scale: 0.8 + rng.next_f32() * 0.3,
        })
        .collect();
    // The hive always hangs from a tree
    trees.push(Tree {
        x: HIVE_X,
        scale: 1.0,
    });
    trees
}
