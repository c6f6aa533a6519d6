//! Mapping from winit input events to the tracker's logical keys.
//!
//! Number keys 1-4 drive the R/G/B/A channel holds, Shift is the roundness
//! modifier, and the arrow keys orbit the camera. Only the primary (left)
//! mouse button starts a creation session; winit has no native context menu,
//! so the context-menu suppression a browser host needs has no counterpart
//! here and secondary buttons are simply ignored.

use winit::event::MouseButton;
use winit::keyboard::{KeyCode, PhysicalKey};

use super::tracker::TrackedKey;

/// Map a physical key to its tracked role, if it has one.
pub fn tracked_key(key: PhysicalKey) -> Option<TrackedKey> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    match code {
        KeyCode::Digit1 => Some(TrackedKey::Channel(0)),
        KeyCode::Digit2 => Some(TrackedKey::Channel(1)),
        KeyCode::Digit3 => Some(TrackedKey::Channel(2)),
        KeyCode::Digit4 => Some(TrackedKey::Channel(3)),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(TrackedKey::Modifier),
        KeyCode::ArrowLeft => Some(TrackedKey::ArrowLeft),
        KeyCode::ArrowRight => Some(TrackedKey::ArrowRight),
        KeyCode::ArrowUp => Some(TrackedKey::ArrowUp),
        KeyCode::ArrowDown => Some(TrackedKey::ArrowDown),
        _ => None,
    }
}

/// Whether this mouse button starts/ends a creation session.
pub fn is_primary_button(button: MouseButton) -> bool {
    button == MouseButton::Left
}
