use crate::input::{ChannelHold, CHANNEL_COUNT};

use super::normalized_hold;

/// The four committed 8-bit color channels (R, G, B, A).
///
/// Holding a channel key cycles its value: the hold duration maps to a delta
/// of up to 255 over three seconds, previewed live and committed modulo 256
/// on release. Cycling wraps rather than clamps, so two full three-second
/// holds land one short of where they started (255 + 255 mod 256 = 254).
#[derive(Debug, Clone, Copy)]
pub struct ColorChannels {
    committed: [u8; CHANNEL_COUNT],
}

/// Delta added to a channel for a hold of `elapsed_ms`, saturating at 255
/// after the three-second window.
pub fn hold_delta(elapsed_ms: f64) -> u8 {
    (normalized_hold(elapsed_ms) * 255.0).floor() as u8
}

impl ColorChannels {
    /// Full white, full opacity.
    pub fn new() -> Self {
        Self {
            committed: [255; CHANNEL_COUNT],
        }
    }

    pub fn committed(&self) -> [u8; CHANNEL_COUNT] {
        self.committed
    }

    /// Per-channel preview values for this frame: the committed value plus
    /// the live hold delta for channels currently held, wrapped modulo 256.
    pub fn preview(&self, holds: &[ChannelHold; CHANNEL_COUNT], now_ms: f64) -> [u8; CHANNEL_COUNT] {
        let mut out = self.committed;
        for (value, hold) in out.iter_mut().zip(holds.iter()) {
            if hold.holding {
                *value = value.wrapping_add(hold_delta(hold.elapsed(now_ms)));
            }
        }
        out
    }

    /// Commit a finished hold: apply the delta for the elapsed duration to
    /// the channel, wrapping modulo 256.
    pub fn commit(&mut self, channel: usize, elapsed_ms: f64) {
        if channel < CHANNEL_COUNT {
            self.committed[channel] =
                self.committed[channel].wrapping_add(hold_delta(elapsed_ms));
        }
    }
}

impl Default for ColorChannels {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert committed channel bytes to linear RGBA in [0, 1].
pub fn rgba_to_f32(color: [u8; 4]) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        color[3] as f32 / 255.0,
    ]
}
