//! Wing buzz
//!
//! A single sawtooth oscillator whose volume follows flight and whose
//! pitch follows stick speed. `BuzzModel` is the pure parameter curve;
//! `BuzzVoice` (wasm only) feeds it into Web Audio.

use crate::sim::WorldSnapshot;

/// Base pitch (Hz)
pub const BUZZ_BASE_FREQ: f32 = 180.0;
/// Extra pitch at full stick
pub const BUZZ_SPEED_FREQ: f32 = 40.0;
/// Gain while airborne
pub const BUZZ_FLYING_GAIN: f32 = 0.07;
/// Per-frame share of the gap closed by the gain
const BUZZ_GAIN_EASE: f32 = 0.15;

/// Oscillator parameters, updated once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuzzModel {
    pub gain: f32,
    pub frequency: f32,
}

impl Default for BuzzModel {
    fn default() -> Self {
        Self {
            gain: 0.0,
            frequency: BUZZ_BASE_FREQ,
        }
    }
}

impl BuzzModel {
    /// Follow the snapshot. `stick_speed` is the input magnitude,
    /// `volume` the user's master volume.
    pub fn update(&mut self, snapshot: &WorldSnapshot, stick_speed: f32, volume: f32) {
        let target = if snapshot.player.landed {
            0.0
        } else {
            BUZZ_FLYING_GAIN * volume.clamp(0.0, 1.0)
        };
        self.gain += (target - self.gain) * BUZZ_GAIN_EASE;
        self.frequency = BUZZ_BASE_FREQ + stick_speed.clamp(0.0, 1.0) * BUZZ_SPEED_FREQ;
    }
}

#[cfg(target_arch = "wasm32")]
pub use voice::BuzzVoice;

#[cfg(target_arch = "wasm32")]
mod voice {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{BUZZ_BASE_FREQ, BuzzModel};

    /// Long-running oscillator driven by `BuzzModel`
    pub struct BuzzVoice {
        ctx: AudioContext,
        osc: OscillatorNode,
        gain: GainNode,
    }

    impl BuzzVoice {
        /// Must be called from a user gesture (browsers block autoplay)
        pub fn start() -> Option<Self> {
            let ctx = match AudioContext::new() {
                Ok(ctx) => ctx,
                Err(_) => {
                    log::warn!("Failed to create AudioContext - audio disabled");
                    return None;
                }
            };
            let gain = ctx.create_gain().ok()?;
            gain.gain().set_value(0.0);
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            let osc = ctx.create_oscillator().ok()?;
            osc.set_type(OscillatorType::Sawtooth);
            osc.frequency().set_value(BUZZ_BASE_FREQ);
            osc.connect_with_audio_node(&gain).ok()?;
            osc.start().ok()?;

            Some(Self { ctx, osc, gain })
        }

        pub fn apply(&self, model: &BuzzModel) {
            if self.ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = self.ctx.resume();
            }
            self.gain.gain().set_value(model.gain);
            self.osc.frequency().set_value(model.frequency);
        }

        pub fn silence(&self) {
            self.gain.gain().set_value(0.0);
        }
    }
}
