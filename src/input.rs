//! Virtual joystick
//!
//! A touch/pointer stick that appears where the finger lands in the lower
//! part of the screen. Works in logical coordinates; map raw screen
//! positions through `platform::Viewport` first.

use glam::Vec2;

use crate::consts::VIEW_H;

/// Default base radius in logical units
pub const DEFAULT_STICK_RADIUS: f32 = 50.0;
/// Only touches below this share of the screen grab the stick
const GRAB_ZONE_TOP: f32 = 0.4;

/// What a pointer-down did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    /// The level-complete screen was tapped
    Continue,
    /// The stick is now anchored under this pointer
    Grabbed,
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VirtualJoystick {
    pointer: Option<i32>,
    pub base: Vec2,
    pub knob: Vec2,
    pub radius: f32,
    /// Normalized output vector
    value: Vec2,
}

impl Default for VirtualJoystick {
    fn default() -> Self {
        Self::new(DEFAULT_STICK_RADIUS)
    }
}

impl VirtualJoystick {
    pub fn new(radius: f32) -> Self {
        Self {
            pointer: None,
            base: Vec2::ZERO,
            knob: Vec2::ZERO,
            radius: radius.max(1.0),
            value: Vec2::ZERO,
        }
    }

    pub fn is_active(&self) -> bool {
        self.pointer.is_some()
    }

    /// Current stick vector, magnitude <= 1
    pub fn value(&self) -> Vec2 {
        self.value
    }

    pub fn pointer_down(&mut self, id: i32, pos: Vec2, level_complete: bool) -> PointerDown {
        if level_complete {
            return PointerDown::Continue;
        }
        if self.is_active() || pos.y < VIEW_H * GRAB_ZONE_TOP {
            return PointerDown::Ignored;
        }
        self.pointer = Some(id);
        self.base = pos;
        self.knob = pos;
        self.value = Vec2::ZERO;
        PointerDown::Grabbed
    }

    pub fn pointer_move(&mut self, id: i32, pos: Vec2) {
        if self.pointer != Some(id) {
            return;
        }
        let offset = (pos - self.base).clamp_length_max(self.radius);
        self.knob = self.base + offset;
        self.value = offset / self.radius;
    }

    /// Pointer released or cancelled
    pub fn pointer_up(&mut self, id: i32) {
        if self.pointer != Some(id) {
            return;
        }
        self.pointer = None;
        self.value = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grab_zone() {
        let mut stick = VirtualJoystick::default();
        assert_eq!(
            stick.pointer_down(1, Vec2::new(400.0, 100.0), false),
            PointerDown::Ignored
        );
        assert_eq!(
            stick.pointer_down(1, Vec2::new(400.0, 400.0), false),
            PointerDown::Grabbed
        );
        // A second finger does not steal it
        assert_eq!(
            stick.pointer_down(2, Vec2::new(100.0, 500.0), false),
            PointerDown::Ignored
        );
    }

    #[test]
    fn test_continue_on_complete() {
        let mut stick = VirtualJoystick::default();
        assert_eq!(
            stick.pointer_down(1, Vec2::new(400.0, 400.0), true),
            PointerDown::Continue
        );
        assert!(!stick.is_active());
    }

    #[test]
    fn test_normalized_and_clamped() {
        let mut stick = VirtualJoystick::default();
        stick.pointer_down(7, Vec2::new(400.0, 400.0), false);
        stick.pointer_move(7, Vec2::new(425.0, 400.0));
        assert_eq!(stick.value(), Vec2::new(0.5, 0.0));

        stick.pointer_move(7, Vec2::new(400.0, 700.0));
        assert!((stick.value().length() - 1.0).abs() < 1e-6);
        assert_eq!(stick.knob, Vec2::new(400.0, 450.0));

        // Other pointers are ignored
        stick.pointer_move(8, Vec2::new(0.0, 0.0));
        stick.pointer_up(8);
        assert!(stick.is_active());

        stick.pointer_up(7);
        assert_eq!(stick.value(), Vec2::ZERO);
        assert!(!stick.is_active());
    }
}
