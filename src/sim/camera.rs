//! Horizontal follow camera

use crate::consts::*;

/// Largest camera offset; the view never scrolls past the world edge
pub const CAMERA_MAX_X: f32 = WORLD_W - VIEW_W;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    /// World x of the left screen edge
    pub x: f32,
}

impl Camera {
    /// Ease toward keeping the player 30% into the screen.
    ///
    /// Exponential smoothing on `dt`, so the follow feels the same at any
    /// frame rate.
    pub fn update(&mut self, dt: f32, player_x: f32) {
        let target = player_x - VIEW_W * CAMERA_LEAD;
        self.x += (target - self.x) * (1.0 - (-CAMERA_EASE * dt).exp());
        self.x = self.x.clamp(0.0, CAMERA_MAX_X);
    }

    /// Screen x of a world x
    pub fn to_screen(&self, world_x: f32) -> f32 {
        world_x - self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_dt_holds_still() {
        let mut camera = Camera { x: 500.0 };
        camera.update(0.0, 3000.0);
        assert_eq!(camera.x, 500.0);
    }

    #[test]
    fn test_converges_on_target() {
        let mut camera = Camera::default();
        for _ in 0..300 {
            camera.update(1.0 / 60.0, 1200.0);
        }
        assert!((camera.x - 960.0).abs() < 0.01);
    }

    #[test]
    fn test_frame_rate_independent() {
        let mut fast = Camera::default();
        let mut slow = Camera::default();
        for _ in 0..4 {
            fast.update(0.025, 2000.0);
        }
        slow.update(0.1, 2000.0);
        assert!((fast.x - slow.x).abs() < 0.01);
    }

    proptest! {
        #[test]
        fn prop_camera_stays_in_world(
            path in proptest::collection::vec((-1000.0f32..6000.0, 0.0f32..0.1), 1..200)
        ) {
            let mut camera = Camera::default();
            for (player_x, dt) in path {
                camera.update(dt, player_x);
                prop_assert!(camera.x >= 0.0 && camera.x <= CAMERA_MAX_X);
            }
        }
    }
}
