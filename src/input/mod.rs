//! # Input State Tracking
//!
//! Converts raw key and pointer events into the discrete hold states the
//! interaction models read: four color-channel holds with start timestamps,
//! the arrow-key direction set, and the roundness modifier.
//!
//! The tracker is host-agnostic; [`bindings`] maps winit events onto the
//! logical keys it understands. A hold with no matching release event simply
//! stays active until focus loss clears it.

pub mod bindings;
pub mod tracker;

pub use bindings::{is_primary_button, tracked_key};
pub use tracker::{ArrowState, ChannelHold, ChannelRelease, InputTracker, TrackedKey, CHANNEL_COUNT};
