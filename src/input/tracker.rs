use log::debug;

/// Number of color channels tracked by number keys (R, G, B, A).
pub const CHANNEL_COUNT: usize = 4;

/// Logical keys the tracker cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedKey {
    /// One of the four channel keys, by channel index (0 = R .. 3 = A).
    Channel(usize),
    /// The roundness-enable modifier.
    Modifier,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

/// Hold state for one color-channel key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelHold {
    pub holding: bool,
    pub start_ms: f64,
}

impl ChannelHold {
    /// Elapsed hold duration at `now_ms`, clamped to zero if the host clock
    /// ever runs backwards.
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }
}

/// A finished channel hold, reported on key-up.
#[derive(Debug, Clone, Copy)]
pub struct ChannelRelease {
    pub channel: usize,
    pub elapsed_ms: f64,
}

/// Which arrow directions are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrowState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl ArrowState {
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    /// Azimuth direction: right positive, left negative, both cancel.
    pub fn horizontal(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Polar direction: down positive (toward the horizon), up negative
    /// (toward the zenith).
    pub fn vertical(&self) -> f32 {
        (self.down as i32 - self.up as i32) as f32
    }
}

/// Tracks key hold states for the lifetime of the scene.
///
/// Key-repeat events for channel keys must not reset the hold start; the
/// `holding` guard ensures hold duration is measured from the first press,
/// not from every repeat the platform emits. Releasing a key with no prior
/// press is a no-op by construction.
pub struct InputTracker {
    channels: [ChannelHold; CHANNEL_COUNT],
    arrows: ArrowState,
    modifier_held: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            channels: [ChannelHold::default(); CHANNEL_COUNT],
            arrows: ArrowState::default(),
            modifier_held: false,
        }
    }

    pub fn key_down(&mut self, key: TrackedKey, now_ms: f64) {
        match key {
            TrackedKey::Channel(c) if c < CHANNEL_COUNT => {
                let hold = &mut self.channels[c];
                // Repeats while holding keep the original start time
                if !hold.holding {
                    hold.holding = true;
                    hold.start_ms = now_ms;
                    debug!("channel {} hold started at {:.1}ms", c, now_ms);
                }
            }
            TrackedKey::Channel(_) => {}
            TrackedKey::Modifier => self.modifier_held = true,
            TrackedKey::ArrowLeft => self.arrows.left = true,
            TrackedKey::ArrowRight => self.arrows.right = true,
            TrackedKey::ArrowUp => self.arrows.up = true,
            TrackedKey::ArrowDown => self.arrows.down = true,
        }
    }

    /// Process a key release. Returns the finished hold when a channel key
    /// that was actually held goes up.
    pub fn key_up(&mut self, key: TrackedKey, now_ms: f64) -> Option<ChannelRelease> {
        match key {
            TrackedKey::Channel(c) if c < CHANNEL_COUNT => {
                let hold = &mut self.channels[c];
                if !hold.holding {
                    return None;
                }
                let elapsed_ms = hold.elapsed(now_ms);
                *hold = ChannelHold::default();
                Some(ChannelRelease {
                    channel: c,
                    elapsed_ms,
                })
            }
            TrackedKey::Channel(_) => None,
            TrackedKey::Modifier => {
                self.modifier_held = false;
                None
            }
            TrackedKey::ArrowLeft => {
                self.arrows.left = false;
                None
            }
            TrackedKey::ArrowRight => {
                self.arrows.right = false;
                None
            }
            TrackedKey::ArrowUp => {
                self.arrows.up = false;
                None
            }
            TrackedKey::ArrowDown => {
                self.arrows.down = false;
                None
            }
        }
    }

    pub fn channels(&self) -> &[ChannelHold; CHANNEL_COUNT] {
        &self.channels
    }

    pub fn arrows(&self) -> &ArrowState {
        &self.arrows
    }

    pub fn modifier_held(&self) -> bool {
        self.modifier_held
    }

    /// Drop every active hold without committing anything. Used when the
    /// window loses focus mid-hold, where matching release events may never
    /// arrive.
    pub fn clear_holds(&mut self) {
        self.channels = [ChannelHold::default(); CHANNEL_COUNT];
        self.arrows = ArrowState::default();
        self.modifier_held = false;
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_events_keep_first_press_time() {
        let mut tracker = InputTracker::new();
        tracker.key_down(TrackedKey::Channel(0), 100.0);
        // Platform key-repeat storm
        for t in [150.0, 200.0, 250.0, 900.0] {
            tracker.key_down(TrackedKey::Channel(0), t);
        }
        let release = tracker.key_up(TrackedKey::Channel(0), 1100.0).unwrap();
        assert_eq!(release.channel, 0);
        assert!((release.elapsed_ms - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut tracker = InputTracker::new();
        assert!(tracker.key_up(TrackedKey::Channel(2), 500.0).is_none());
    }

    #[test]
    fn test_backwards_clock_clamps_to_zero() {
        let mut tracker = InputTracker::new();
        tracker.key_down(TrackedKey::Channel(1), 1000.0);
        let release = tracker.key_up(TrackedKey::Channel(1), 400.0).unwrap();
        assert_eq!(release.elapsed_ms, 0.0);
    }

    #[test]
    fn test_arrow_and_modifier_toggles() {
        let mut tracker = InputTracker::new();
        tracker.key_down(TrackedKey::ArrowLeft, 0.0);
        tracker.key_down(TrackedKey::Modifier, 0.0);
        assert!(tracker.arrows().left);
        assert!(tracker.modifier_held());
        assert!((tracker.arrows().horizontal() + 1.0).abs() < f32::EPSILON);

        tracker.key_up(TrackedKey::ArrowLeft, 10.0);
        tracker.key_up(TrackedKey::Modifier, 10.0);
        assert!(!tracker.arrows().any());
        assert!(!tracker.modifier_held());
    }

    #[test]
    fn test_opposed_arrows_cancel() {
        let mut tracker = InputTracker::new();
        tracker.key_down(TrackedKey::ArrowUp, 0.0);
        tracker.key_down(TrackedKey::ArrowDown, 0.0);
        assert_eq!(tracker.arrows().vertical(), 0.0);
        assert!(tracker.arrows().any());
    }

    #[test]
    fn test_clear_holds_resets_everything() {
        let mut tracker = InputTracker::new();
        tracker.key_down(TrackedKey::Channel(3), 0.0);
        tracker.key_down(TrackedKey::Modifier, 0.0);
        tracker.key_down(TrackedKey::ArrowRight, 0.0);
        tracker.clear_holds();
        assert!(!tracker.channels()[3].holding);
        assert!(!tracker.modifier_held());
        assert!(!tracker.arrows().any());
        // A release after the clear commits nothing
        assert!(tracker.key_up(TrackedKey::Channel(3), 100.0).is_none());
    }

    #[test]
    fn test_out_of_range_channel_ignored() {
        let mut tracker = InputTracker::new();
        tracker.key_down(TrackedKey::Channel(9), 0.0);
        assert!(tracker.key_up(TrackedKey::Channel(9), 100.0).is_none());
    }
}
