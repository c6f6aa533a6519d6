//! # Procedural Geometry Generation
//!
//! Generates the box and rounded-box meshes that back spawned and preview
//! objects, so no external model files are needed.
//!
//! ## Supported Primitives
//!
//! - **Box**: axis-aligned cube of a given edge length
//! - **Rounded Box**: cube with edges and corners rounded by a radius,
//!   built from subdivided faces projected onto the rounded hull
//!
//! ## Usage
//!
//! ```rust
//! use flotsam::gfx::geometry::{generate_box, generate_rounded_box};
//!
//! // A plain 10-unit cube
//! let box_data = generate_box(10.0);
//!
//! // A 10-unit cube with 8 segments per edge and a 2-unit corner radius
//! let rounded = generate_rounded_box(10.0, 8, 2.0);
//! ```

pub mod primitives;

pub use primitives::*;

/// Represents generated geometry data ready for upload by the render host
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
