//! Frame clock
//!
//! Turns host frame timestamps into bounded simulation steps.

use crate::consts::MAX_FRAME_DT;

/// Converts monotonically increasing frame timestamps (ms) into `dt` seconds
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame, clamped to [0, MAX_FRAME_DT].
    ///
    /// The first call after construction or `reset` returns 0 and only
    /// records the timestamp.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Forget the last timestamp (level restart, tab resumed)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
