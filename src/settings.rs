//! Player preferences
//!
//! Persisted as JSON in LocalStorage on wasm; native builds use defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::DEFAULT_STICK_RADIUS;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings JSON is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("joystick radius must be positive, got {0}")]
    InvalidJoystickRadius(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Wing buzz while flying
    pub buzz_enabled: bool,
    /// Mute when the tab is hidden or loses focus
    pub mute_on_blur: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Virtual joystick base radius in logical units
    pub joystick_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            buzz_enabled: true,
            mute_on_blur: true,
            show_fps: false,
            joystick_radius: DEFAULT_STICK_RADIUS,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "hive_flight_settings";

    /// Decode stored settings. Volume is clamped into range; a non-positive
    /// joystick radius is rejected.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Self = serde_json::from_str(json)?;
        if settings.joystick_radius.is_nan() || settings.joystick_radius <= 0.0 {
            return Err(SettingsError::InvalidJoystickRadius(
                settings.joystick_radius,
            ));
        }
        settings.master_volume = if settings.master_volume.is_finite() {
            settings.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Ok(settings)
    }

    /// Effective buzz volume
    pub fn buzz_volume(&self) -> f32 {
        if self.buzz_enabled {
            self.master_volume
        } else {
            0.0
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(Ok(Some(json))) = storage.map(|s| s.get_item(Self::STORAGE_KEY)) {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring stored settings: {e}"),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match serde_json::to_string(self) {
                Ok(json) => {
                    let _ = storage.set_item(Self::STORAGE_KEY, &json);
                    log::info!("Settings saved");
                }
                Err(e) => log::warn!("Failed to encode settings: {e}"),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        log::debug!("Settings not persisted on native ({})", Self::STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{"show_fps": true}"#).unwrap();
        assert!(settings.show_fps);
        assert_eq!(settings.joystick_radius, DEFAULT_STICK_RADIUS);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_volume_clamped() {
        let loud = Settings::from_json(r#"{"master_volume": 3.5}"#).unwrap();
        assert_eq!(loud.master_volume, 1.0);
        let negative = Settings::from_json(r#"{"master_volume": -1}"#).unwrap();
        assert_eq!(negative.master_volume, 0.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Settings::from_json(r#"{"joystick_radius": 0}"#),
            Err(SettingsError::InvalidJoystickRadius(_))
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Malformed(_))
        ));
    }

    #[test]
    fn test_buzz_volume() {
        let mut settings = Settings::default();
        assert_eq!(settings.buzz_volume(), 0.8);
        settings.buzz_enabled = false;
        assert_eq!(settings.buzz_volume(), 0.0);
    }
}
