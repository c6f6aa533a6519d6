//! # Channel Readout
//!
//! Output surface for the four color channels: committed values plus their
//! hold-adjusted previews, refreshed every frame. The readout is owned by
//! whoever runs the frame loop and passed into the per-frame update, so the
//! input logic never holds a display handle of its own.

use log::debug;

/// Receives the channel values each frame.
pub trait ChannelReadout {
    fn refresh(&mut self, committed: [u8; 4], preview: [u8; 4]);
}

/// Default readout: logs the channels whenever they change.
pub struct LogReadout {
    last: Option<([u8; 4], [u8; 4])>,
}

impl LogReadout {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl Default for LogReadout {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelReadout for LogReadout {
    fn refresh(&mut self, committed: [u8; 4], preview: [u8; 4]) {
        let current = (committed, preview);
        if self.last != Some(current) {
            debug!(
                "channels R:{}({}) G:{}({}) B:{}({}) A:{}({})",
                committed[0],
                preview[0],
                committed[1],
                preview[1],
                committed[2],
                preview[2],
                committed[3],
                preview[3],
            );
            self.last = Some(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingReadout {
        refreshes: usize,
        last_preview: [u8; 4],
    }

    impl ChannelReadout for CountingReadout {
        fn refresh(&mut self, _committed: [u8; 4], preview: [u8; 4]) {
            self.refreshes += 1;
            self.last_preview = preview;
        }
    }

    #[test]
    fn test_readout_receives_preview_values() {
        let mut readout = CountingReadout {
            refreshes: 0,
            last_preview: [0; 4],
        };
        readout.refresh([255; 4], [10, 20, 30, 40]);
        assert_eq!(readout.refreshes, 1);
        assert_eq!(readout.last_preview, [10, 20, 30, 40]);
    }
}
