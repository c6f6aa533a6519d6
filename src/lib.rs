// src/lib.rs
//! Flotsam
//!
//! The interactive core of an explorable ocean scene: hold the pointer to
//! grow a box at the point under the cursor (Shift rounds its corners),
//! hold the 1-4 keys to cycle the R/G/B/A color channels with a live
//! preview, and orbit the camera with the arrow keys while a procedurally
//! placed ambient source fades with camera distance.
//!
//! Rendering, asset textures, and the water/sky shaders live outside this
//! crate, behind the [`gfx::host::RenderHost`] interface.

pub mod app;
pub mod audio;
pub mod display;
pub mod gfx;
pub mod input;
pub mod model;
pub mod prelude;
pub mod scene;

// Re-export main types for convenience
pub use app::FlotsamApp;

/// Creates a default flotsam application instance
pub fn default() -> FlotsamApp {
    FlotsamApp::new()
}
