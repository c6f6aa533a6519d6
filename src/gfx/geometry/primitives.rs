//! # Primitive Shape Generation
//!
//! This module contains the mesh generators for the two shape classes a
//! creation session can commit: a plain box and a rounded box. All shapes
//! are generated with proper normals and texture coordinates, centered at
//! the origin.

/// Threshold below which a corner radius is treated as zero length.
const MIN_RADIUS: f32 = 1e-4;

use super::GeometryData;

/// Generate an axis-aligned box with the given edge length
///
/// Returns a cube with vertices from -size/2 to size/2 on all axes.
/// Each face has proper normals pointing outward and UV coordinates from 0 to 1.
pub fn generate_box(size: f32) -> GeometryData {
    let mut data = GeometryData::new();
    let h = size * 0.5;

    // Box vertices, four per face
    let positions = [
        // Front face
        [-h, -h, h],
        [h, -h, h],
        [h, h, h],
        [-h, h, h],
        // Back face
        [-h, -h, -h],
        [-h, h, -h],
        [h, h, -h],
        [h, -h, -h],
        // Left face
        [-h, -h, -h],
        [-h, -h, h],
        [-h, h, h],
        [-h, h, -h],
        // Right face
        [h, -h, h],
        [h, -h, -h],
        [h, h, -h],
        [h, h, h],
        // Top face
        [-h, h, h],
        [h, h, h],
        [h, h, -h],
        [-h, h, -h],
        // Bottom face
        [-h, -h, -h],
        [h, -h, -h],
        [h, -h, h],
        [-h, -h, h],
    ];

    // Texture coordinates (same layout for each face)
    let tex_coords = [
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
        [0.0, 0.0],
        [1.0, 0.0],
        [0.0, 0.0],
        [0.0, 1.0],
        [1.0, 1.0],
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
        [0.0, 1.0],
        [1.0, 1.0],
        [1.0, 0.0],
        [0.0, 0.0],
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [0.0, 1.0],
    ];

    // Face normals
    let normals = [
        // Front face (positive Z)
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
        // Back face (negative Z)
        [0.0, 0.0, -1.0],
        [0.0, 0.0, -1.0],
        [0.0, 0.0, -1.0],
        [0.0, 0.0, -1.0],
        // Left face (negative X)
        [-1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        // Right face (positive X)
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        // Top face (positive Y)
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        // Bottom face (negative Y)
        [0.0, -1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    data.vertices = positions.to_vec();
    data.tex_coords = tex_coords.to_vec();
    data.normals = normals.to_vec();

    // Indices for each face (2 triangles per face, counter-clockwise)
    data.indices = vec![
        0, 1, 2, 2, 3, 0, // front
        4, 5, 6, 6, 7, 4, // back
        8, 9, 10, 10, 11, 8, // left
        12, 13, 14, 14, 15, 12, // right
        16, 17, 18, 18, 19, 16, // top
        20, 21, 22, 22, 23, 20, // bottom
    ];

    data
}

/// Generate a rounded box with the given edge length and corner radius
///
/// # Arguments
/// * `size` - Edge length of the box
/// * `segments` - Subdivisions per face edge (higher is smoother)
/// * `radius` - Corner rounding radius, clamped to half the edge length
///
/// Each of the six faces is built as a subdivided grid; every grid point is
/// clamped to the inner box (half-extent minus radius) and pushed back out
/// along the clamp direction by the radius. Face interiors stay flat, edges
/// and corners become cylindrical and spherical sections. The mesh is always
/// inscribed in the plain box of the same size.
pub fn generate_rounded_box(size: f32, segments: u32, radius: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let h = size * 0.5;
    let r = radius.clamp(MIN_RADIUS, h.max(MIN_RADIUS));
    let segs = segments.max(1);
    let inner = (h - r).max(0.0);

    // (normal, u axis, v axis) per face, chosen so that cross(u, v) == normal
    // keeps the winding counter-clockwise when viewed from outside.
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];

    for (normal, u_axis, v_axis) in faces.iter() {
        let base = data.vertices.len() as u32;

        for i in 0..=segs {
            let fu = -h + size * (i as f32 / segs as f32);
            for j in 0..=segs {
                let fv = -h + size * (j as f32 / segs as f32);

                // Point on the sharp cube surface
                let px = normal[0] * h + u_axis[0] * fu + v_axis[0] * fv;
                let py = normal[1] * h + u_axis[1] * fu + v_axis[1] * fv;
                let pz = normal[2] * h + u_axis[2] * fu + v_axis[2] * fv;

                // Clamp to the inner box, then push back out by the radius
                let cx = px.clamp(-inner, inner);
                let cy = py.clamp(-inner, inner);
                let cz = pz.clamp(-inner, inner);

                let dx = px - cx;
                let dy = py - cy;
                let dz = pz - cz;
                let len = (dx * dx + dy * dy + dz * dz).sqrt();

                let (nx, ny, nz) = if len > MIN_RADIUS {
                    (dx / len, dy / len, dz / len)
                } else {
                    (normal[0], normal[1], normal[2])
                };

                data.vertices.push([cx + nx * r, cy + ny * r, cz + nz * r]);
                data.normals.push([nx, ny, nz]);
                data.tex_coords
                    .push([i as f32 / segs as f32, j as f32 / segs as f32]);
            }
        }

        for i in 0..segs {
            for j in 0..segs {
                let first = base + i * (segs + 1) + j;
                let second = first + segs + 1;

                data.indices.push(first);
                data.indices.push(second);
                data.indices.push(second + 1);

                data.indices.push(first);
                data.indices.push(second + 1);
                data.indices.push(first + 1);
            }
        }
    }

    data
}
