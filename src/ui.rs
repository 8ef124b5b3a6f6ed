//! HUD text
//!
//! Pure string building from a `WorldSnapshot`; the wasm entry point pushes
//! these into DOM elements.

use crate::sim::{FINAL_LEVEL, WorldSnapshot};

const HEART: char = '❤';

/// Health line, e.g. `HP: ❤❤`
pub fn hp_text(snapshot: &WorldSnapshot) -> String {
    if snapshot.player.dead {
        return "KNOCKED OUT!".to_string();
    }
    let hearts: String = std::iter::repeat_n(HEART, snapshot.player.health as usize).collect();
    format!("HP: {hearts}")
}

pub fn level_text(snapshot: &WorldSnapshot) -> String {
    format!("Level {}", snapshot.level)
}

/// Text shown over the frozen world once the hive is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOverlay {
    pub title: String,
    pub lines: Vec<String>,
    pub button: Option<String>,
}

impl CompletionOverlay {
    /// `None` while the level is still running
    pub fn from_snapshot(snapshot: &WorldSnapshot) -> Option<Self> {
        if !snapshot.level_complete {
            return None;
        }
        if snapshot.game_finished {
            return Some(Self {
                title: "CONGRATULATIONS!".to_string(),
                lines: vec![
                    "Andrea saved the hive!".to_string(),
                    format!("All {FINAL_LEVEL} levels completed"),
                ],
                button: Some("PLAY AGAIN".to_string()),
            });
        }
        Some(Self {
            title: "LEVEL COMPLETE!".to_string(),
            lines: vec![format!("Tap to continue to level {}", snapshot.level + 1)],
            button: None,
        })
    }
}

/// Frames per second, averaged over one-second windows
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: u32,
}

impl FpsCounter {
    /// Count a frame. Returns true when the displayed value changed window.
    pub fn frame(&mut self, dt: f32) -> bool {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < 1.0 {
            return false;
        }
        self.fps = (self.frames as f32 / self.elapsed).round() as u32;
        self.frames = 0;
        self.elapsed = 0.0;
        true
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
