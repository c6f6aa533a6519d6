//! # Scene Management
//!
//! Owns everything the interaction core places in the world: the orbit
//! camera, the committed objects with their bob/precession animation, and
//! the single live preview. Spawning and preview updates go through the
//! render host collaborator; this module decides shape class, resting
//! position, and material opacity.

pub mod object;
pub mod preview;

use cgmath::Vector3;
use log::info;

use crate::gfx::camera::CameraManager;
use crate::gfx::geometry::{generate_box, generate_rounded_box, GeometryData};
use crate::gfx::host::{MaterialDesc, RenderHost, Transform};
use crate::model::color::rgba_to_f32;
use crate::model::creation::{CreationParams, ROUNDED_BOX_SEGMENTS};

pub use object::SpawnedObject;
pub use preview::PreviewManager;

/// Geometry for a (size, roundness) pair: a rounded box when roundness is
/// positive (radius clamped to half the size), otherwise a plain box.
pub fn creation_geometry(size: f32, roundness: f32) -> GeometryData {
    if roundness > 0.0 {
        generate_rounded_box(size, ROUNDED_BOX_SEGMENTS, roundness.min(size / 2.0))
    } else {
        generate_box(size)
    }
}

/// Material for a creation-colored entity. The preview renders at half the
/// committed opacity so it reads as tentative next to identical committed
/// objects.
pub fn creation_material(color: [u8; 4], preview: bool) -> MaterialDesc {
    let mut rgba = rgba_to_f32(color);
    if preview {
        rgba[3] *= 0.5;
    }
    MaterialDesc::new(rgba)
}

/// Transform that rests a box of the given size on the anchor: the anchor
/// point with Y raised by half the size.
pub fn resting_transform(anchor: Vector3<f32>, size: f32) -> Transform {
    Transform::at(anchor + Vector3::new(0.0, size / 2.0, 0.0))
}

/// Main scene containing the camera, committed objects, and the preview
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<SpawnedObject>,
    pub preview: PreviewManager,
    /// Height of the water plane the pointer raycasts against.
    pub water_height: f32,
}

impl Scene {
    /// Creates a new scene with the given camera manager
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            preview: PreviewManager::new(),
            water_height: 0.0,
        }
    }

    /// Commit a finished creation session into a persistent object.
    pub fn spawn(
        &mut self,
        host: &mut dyn RenderHost,
        anchor: Vector3<f32>,
        params: CreationParams,
        color: [u8; 4],
        now_ms: f64,
    ) {
        let geometry = creation_geometry(params.size, params.roundness);
        let material = creation_material(color, false);
        let transform = resting_transform(anchor, params.size);

        let handle = host.create(&geometry, &material, &transform);
        info!(
            "spawned object size {:.1} roundness {:.2} at ({:.1}, {:.1}, {:.1})",
            params.size, params.roundness, anchor.x, anchor.y, anchor.z
        );
        self.objects.push(SpawnedObject {
            handle,
            size: params.size,
            roundness: params.roundness.min(params.size / 2.0),
            color,
            base_position: transform.position,
            spawn_ms: now_ms,
        });
    }

    /// Advance the per-frame animation of every committed object.
    pub fn update(&mut self, host: &mut dyn RenderHost, now_ms: f64) {
        for object in &self.objects {
            object.animate(host, now_ms);
        }
    }
}
