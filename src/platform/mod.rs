//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Letterboxing the fixed logical screen into the window
//! - Asset readiness (sprites may still be loading)

use glam::Vec2;

use crate::consts::{VIEW_H, VIEW_W};

/// Fits the logical screen into a window, preserving aspect ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Window pixels per logical unit
    pub scale: f32,
    /// Top-left of the letterboxed area in window pixels
    pub offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::fit(VIEW_W, VIEW_H)
    }
}

impl Viewport {
    pub fn fit(window_w: f32, window_h: f32) -> Self {
        let ratio = VIEW_W / VIEW_H;
        let (w, h) = if window_w / window_h > ratio {
            (window_h * ratio, window_h)
        } else {
            (window_w, window_w / ratio)
        };
        Self {
            scale: w / VIEW_W,
            offset: Vec2::new((window_w - w) / 2.0, (window_h - h) / 2.0),
        }
    }

    /// Size of the letterboxed area in window pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(VIEW_W, VIEW_H) * self.scale
    }

    pub fn screen_to_logical(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }
}

/// Sprites the presentation layer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Andrea,
    Frog,
    Boss,
    Hive,
    Grass,
    Tree,
    Friend,
}

/// Capability query for asset readiness. The simulation never asks; the
/// renderer skips anything that is not ready yet.
pub trait AssetStatus {
    fn is_ready(&self, asset: Asset) -> bool;
}

/// Everything drawn procedurally, always ready
#[derive(Debug, Clone, Copy, Default)]
pub struct Procedural;

impl AssetStatus for Procedural {
    fn is_ready(&self, _asset: Asset) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_window_pillarboxes() {
        let vp = Viewport::fit(1600.0, 600.0);
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset, Vec2::new(400.0, 0.0));
        assert_eq!(vp.screen_to_logical(Vec2::new(400.0, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn test_tall_window_letterboxes() {
        let vp = Viewport::fit(400.0, 900.0);
        assert_eq!(vp.scale, 0.5);
        assert_eq!(vp.offset, Vec2::new(0.0, 300.0));
        assert_eq!(vp.size(), Vec2::new(400.0, 300.0));
        assert_eq!(
            vp.screen_to_logical(Vec2::new(200.0, 450.0)),
            Vec2::new(400.0, 300.0)
        );
    }
}
