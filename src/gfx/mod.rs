//! # Graphics Module
//!
//! Graphics-side functionality for the interactive scene core: the orbit
//! camera, procedural geometry for spawned shapes, pointer raycasting, and
//! the interface to the external rendering collaborator.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Orbit camera driven by arrow keys,
//!   clamped in polar angle and distance
//! - **Geometry** ([`geometry`]) - Procedural box and rounded-box meshes
//! - **Picking** ([`picking`]) - Screen-to-world rays and the anchor
//!   resolution chain (water, fallback plane, origin)
//! - **Render Host** ([`host`]) - The entity create/update/remove surface the
//!   external renderer implements; rendering itself lives outside this crate
//!
//! [`camera`]: camera
//! [`host`]: host

pub mod camera;
pub mod geometry;
pub mod host;
pub mod picking;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use host::{EntityHandle, MaterialDesc, NullRenderHost, RenderHost, Transform};
