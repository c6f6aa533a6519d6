//! # Ambient Audio
//!
//! A looping ambient source placed procedurally near the look-at target,
//! with its volume driven every frame by the camera-to-target distance.
//! Loading is fire-and-forget: any failure (missing device, missing file,
//! decode error) degrades to "ambient sound absent" and never blocks the
//! scene.

use std::f32::consts::TAU;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use cgmath::Vector3;
use log::info;
use rand::Rng;
use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;

/// Distance at which the ambient volume is at its maximum.
pub const NEAR_DISTANCE: f32 = 40.0;
/// Distance at which the ambient volume reaches its floor.
pub const FAR_DISTANCE: f32 = 1000.0;
/// Volume floor; the source stays audible at maximum camera distance.
pub const MIN_VOLUME: f32 = 0.2;
/// Fraction of volume lost across the full distance range.
const FALLOFF: f32 = 0.9;

/// Radius range for the procedural emitter ring around the target.
const EMITTER_RING: std::ops::Range<f32> = 80.0..160.0;

/// Volume for a camera-to-target distance: linear falloff from 1.0 at
/// [`NEAR_DISTANCE`] down to the [`MIN_VOLUME`] floor, monotonic
/// non-increasing and clamped at both ends.
pub fn distance_volume(distance: f32) -> f32 {
    let normalized = ((distance - NEAR_DISTANCE) / (FAR_DISTANCE - NEAR_DISTANCE)).clamp(0.0, 1.0);
    (1.0 - normalized * FALLOFF).clamp(MIN_VOLUME, 1.0)
}

/// Errors that can occur while bringing up the ambient source. All of them
/// are caught at the edge and logged; none is fatal to the scene.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Output(#[from] rodio::StreamError),
    #[error("audio sink: {0}")]
    Play(#[from] rodio::PlayError),
    #[error("audio decode: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("audio file: {0}")]
    Io(#[from] std::io::Error),
}

/// The looping ambient source and its world position.
pub struct AmbientAudio {
    // Dropping the stream stops playback; keep it alive with the sink.
    _stream: OutputStream,
    sink: Sink,
    position: Vector3<f32>,
}

impl AmbientAudio {
    /// Open the default output device, decode the asset, and start it
    /// looping at a procedurally chosen position around `target`.
    pub fn load(path: &Path, target: Vector3<f32>) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;

        let file = BufReader::new(File::open(path)?);
        let source = Decoder::new(file)?;
        sink.append(source.repeat_infinite());

        let position = emitter_position(target);
        info!(
            "ambient audio looping from {:?} at ({:.0}, {:.0}, {:.0})",
            path, position.x, position.y, position.z
        );

        Ok(Self {
            _stream: stream,
            sink,
            position,
        })
    }

    /// World position of the emitter, for hosts that spatialize.
    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    /// Apply the distance-mapped volume for this frame.
    pub fn apply_distance(&self, distance: f32) {
        self.sink.set_volume(distance_volume(distance));
    }
}

/// Pick a position on a ring around the target at the water's height band.
fn emitter_position(target: Vector3<f32>) -> Vector3<f32> {
    let mut rng = rand::rng();
    let angle: f32 = rng.random_range(0.0..TAU);
    let radius: f32 = rng.random_range(EMITTER_RING);
    target + Vector3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Zero};

    #[test]
    fn test_volume_at_near_distance_is_full() {
        assert_eq!(distance_volume(NEAR_DISTANCE), 1.0);
    }

    #[test]
    fn test_volume_at_far_distance_hits_floor() {
        assert_eq!(distance_volume(FAR_DISTANCE), MIN_VOLUME);
    }

    #[test]
    fn test_volume_clamps_outside_range() {
        assert_eq!(distance_volume(0.0), 1.0);
        assert_eq!(distance_volume(-5.0), 1.0);
        assert_eq!(distance_volume(50_000.0), MIN_VOLUME);
    }

    #[test]
    fn test_volume_monotonic_non_increasing() {
        let mut last = f32::INFINITY;
        for d in 0..200 {
            let v = distance_volume(d as f32 * 10.0);
            assert!(v <= last);
            assert!((MIN_VOLUME..=1.0).contains(&v));
            last = v;
        }
    }

    #[test]
    fn test_emitter_sits_on_ring() {
        let target = Vector3::new(0.0, 10.0, 0.0);
        for _ in 0..32 {
            let position = emitter_position(target);
            let radial = (position - target).magnitude();
            assert!((EMITTER_RING.start..EMITTER_RING.end).contains(&radial));
            assert_eq!(position.y, target.y);
        }
    }

    #[test]
    fn test_missing_asset_is_a_reported_error() {
        let result = AmbientAudio::load(Path::new("/nonexistent/ambient.ogg"), Vector3::zero());
        assert!(result.is_err());
    }
}
