use cgmath::Vector3;

use super::normalized_hold;

/// Object size for an instantaneous pointer release (world units).
pub const MIN_SIZE: f32 = 5.0;
/// Object size after the hold saturates (world units).
pub const MAX_SIZE: f32 = 50.0;
/// Edge subdivisions used for every rounded-box mesh.
pub const ROUNDED_BOX_SEGMENTS: u32 = 8;

/// Size for a pointer hold of `elapsed_ms`: linear from [`MIN_SIZE`] to
/// [`MAX_SIZE`] over the three-second window, saturating after it.
pub fn hold_size(elapsed_ms: f64) -> f32 {
    MIN_SIZE + (MAX_SIZE - MIN_SIZE) * normalized_hold(elapsed_ms) as f32
}

/// Live (size, roundness) output of a creation session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreationParams {
    pub size: f32,
    pub roundness: f32,
}

/// One pointer-hold session, from pointer-down to pointer-up.
///
/// Size grows with the total hold duration. Roundness only advances while
/// the modifier key is held, expressed relative to the current half-size, so
/// pressing the modifier at different sizes changes the growth curve. The
/// highest roundness reached is frozen when the modifier is released and
/// never decays; it is what gets committed at pointer-up, regardless of the
/// modifier state at that instant.
#[derive(Debug, Clone, Copy)]
pub struct CreationSession {
    start_ms: f64,
    anchor: Vector3<f32>,
    max_roundness: f32,
}

impl CreationSession {
    /// Start a session at the resolved anchor position. Max-roundness starts
    /// over at zero for every new session.
    pub fn begin(start_ms: f64, anchor: Vector3<f32>) -> Self {
        Self {
            start_ms,
            anchor,
            max_roundness: 0.0,
        }
    }

    pub fn anchor(&self) -> Vector3<f32> {
        self.anchor
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Per-frame live parameters. Advances max-roundness while the modifier
    /// is held; reports the frozen value while it is not.
    pub fn live(&mut self, now_ms: f64, modifier_held: bool) -> CreationParams {
        let elapsed = (now_ms - self.start_ms).max(0.0);
        let size = hold_size(elapsed);

        if modifier_held {
            let current = (size * 0.5) * normalized_hold(elapsed) as f32;
            self.max_roundness = self.max_roundness.max(current);
        }

        CreationParams {
            size,
            roundness: self.max_roundness,
        }
    }

    /// Final parameters at pointer-up. Identical to a last `live` reading at
    /// the release instant.
    pub fn finish(mut self, now_ms: f64, modifier_held: bool) -> CreationParams {
        self.live(now_ms, modifier_held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;

    #[test]
    fn test_size_formula() {
        assert_eq!(hold_size(0.0), 5.0);
        assert_eq!(hold_size(1500.0), 27.5);
        assert_eq!(hold_size(3000.0), 50.0);
        assert_eq!(hold_size(10_000.0), 50.0);
        assert_eq!(hold_size(-50.0), 5.0);
    }

    #[test]
    fn test_size_non_decreasing() {
        let mut last = 0.0;
        for d in 0..400 {
            let size = hold_size(d as f64 * 10.0);
            assert!(size >= last);
            assert!((MIN_SIZE..=MAX_SIZE).contains(&size));
            last = size;
        }
    }

    #[test]
    fn test_instant_release_is_minimal_plain_box() {
        let session = CreationSession::begin(100.0, Vector3::zero());
        let params = session.finish(100.0, false);
        assert_eq!(params.size, MIN_SIZE);
        assert_eq!(params.roundness, 0.0);
    }

    #[test]
    fn test_saturated_hold_with_modifier_reaches_half_size() {
        let mut session = CreationSession::begin(0.0, Vector3::zero());
        // Frame ticks every 16ms for 3.2 seconds with the modifier held
        let mut t = 0.0;
        while t < 3200.0 {
            session.live(t, true);
            t += 16.0;
        }
        let params = session.finish(3200.0, true);
        assert_eq!(params.size, MAX_SIZE);
        assert!((params.roundness - MAX_SIZE / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_roundness_never_exceeds_half_size() {
        let mut session = CreationSession::begin(0.0, Vector3::zero());
        let mut t = 0.0;
        while t < 5000.0 {
            let params = session.live(t, true);
            assert!(params.roundness <= params.size / 2.0 + 1e-5);
            t += 16.0;
        }
    }

    #[test]
    fn test_roundness_freezes_at_modifier_release() {
        let mut session = CreationSession::begin(0.0, Vector3::zero());

        // Modifier held for the first 750ms of a 1500ms hold
        let mut t = 0.0;
        while t <= 750.0 {
            session.live(t, true);
            t += 15.0;
        }
        let frozen = session.live(750.0, true).roundness;
        let expected = (hold_size(750.0) / 2.0) * 0.25;
        assert!((frozen - expected).abs() < 1e-4);

        // Modifier released for the rest; preview roundness must not move
        while t <= 1500.0 {
            let params = session.live(t, false);
            assert_eq!(params.roundness, frozen);
            t += 15.0;
        }

        let committed = session.finish(1500.0, false);
        assert_eq!(committed.roundness, frozen);
        assert_eq!(committed.size, hold_size(1500.0));
    }

    #[test]
    fn test_repressed_modifier_resumes_from_frozen_value() {
        let mut session = CreationSession::begin(0.0, Vector3::zero());
        session.live(600.0, true);
        let frozen = session.live(600.0, false).roundness;

        // Re-pressing later computes from the larger current size, so the
        // max can only grow from the frozen value
        let resumed = session.live(2000.0, true).roundness;
        assert!(resumed >= frozen);
    }

    #[test]
    fn test_new_session_resets_max_roundness() {
        let mut first = CreationSession::begin(0.0, Vector3::zero());
        first.live(3000.0, true);

        let second = CreationSession::begin(5000.0, Vector3::zero());
        assert_eq!(second.finish(5000.0, false).roundness, 0.0);
    }
}
