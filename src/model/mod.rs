//! # Interaction Parameter Models
//!
//! The pure timing-to-parameter mappings at the heart of the interaction:
//! hold durations become color deltas ([`color`]) and object size/roundness
//! ([`creation`]). Both saturate at the same three-second hold.

pub mod color;
pub mod creation;

/// Hold duration at which every hold-driven parameter saturates.
pub const HOLD_SATURATION_MS: f64 = 3000.0;

/// Normalize a hold duration against the saturation window, in [0, 1].
pub(crate) fn normalized_hold(elapsed_ms: f64) -> f64 {
    elapsed_ms.clamp(0.0, HOLD_SATURATION_MS) / HOLD_SATURATION_MS
}

pub use color::ColorChannels;
pub use creation::{CreationSession, MAX_SIZE, MIN_SIZE, ROUNDED_BOX_SEGMENTS};
