//! # Flotsam Prelude
//!
//! Imports the types most applications need in one line:
//!
//! ```rust
//! use flotsam::prelude::*;
//! ```
//!
//! A minimal host looks like:
//!
//! ```no_run
//! use flotsam::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut app = flotsam::default();
//!     app.set_ambient_sound("assets/ambient.ogg");
//!     app.run()
//! }
//! ```

// Re-export core application types
pub use crate::app::{FlotsamApp, FrameClock, FrameTick};
pub use crate::default;

// Re-export scene and interaction types
pub use crate::model::{ColorChannels, CreationSession, MAX_SIZE, MIN_SIZE};
pub use crate::scene::{Scene, SpawnedObject};

// Re-export the collaborator interfaces
pub use crate::display::{ChannelReadout, LogReadout};
pub use crate::gfx::host::{EntityHandle, MaterialDesc, NullRenderHost, RenderHost, Transform};
pub use crate::gfx::picking::SurfaceRaycaster;

// Re-export camera types
pub use crate::gfx::camera::{CameraController, CameraManager, OrbitCamera};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3, Zero};
