use cgmath::Vector3;
use log::debug;

use crate::gfx::host::{EntityHandle, RenderHost};

use super::{creation_geometry, creation_material, resting_transform};

/// Size/roundness change below which the preview keeps its current mesh and
/// only updates transform and material.
pub const REBUILD_EPSILON: f32 = 0.01;

struct PreviewEntity {
    handle: EntityHandle,
    size: f32,
    roundness: f32,
}

/// Owns the single ephemeral preview entity that mirrors the live creation
/// parameters while the pointer is held.
///
/// The mesh is replaced on change: when size or roundness moved past
/// [`REBUILD_EPSILON`] since the last build (or the shape class flipped
/// between plain and rounded), the old entity is removed - releasing its
/// geometry and material - and a fresh one is created. The entity is torn
/// down the moment the session ends.
pub struct PreviewManager {
    entity: Option<PreviewEntity>,
}

impl PreviewManager {
    pub fn new() -> Self {
        Self { entity: None }
    }

    pub fn is_active(&self) -> bool {
        self.entity.is_some()
    }

    /// Mirror this frame's live parameters onto the preview entity.
    pub fn update(
        &mut self,
        host: &mut dyn RenderHost,
        anchor: Vector3<f32>,
        size: f32,
        roundness: f32,
        color: [u8; 4],
    ) {
        let transform = resting_transform(anchor, size);
        let material = creation_material(color, true);

        if let Some(entity) = &mut self.entity {
            let same_shape = (entity.size - size).abs() <= REBUILD_EPSILON
                && (entity.roundness - roundness).abs() <= REBUILD_EPSILON
                && (entity.roundness > 0.0) == (roundness > 0.0);
            if same_shape {
                host.set_transform(entity.handle, &transform);
                host.set_material(entity.handle, &material);
                return;
            }
            host.remove(entity.handle);
            self.entity = None;
        }

        let geometry = creation_geometry(size, roundness);
        let handle = host.create(&geometry, &material, &transform);
        self.entity = Some(PreviewEntity {
            handle,
            size,
            roundness,
        });
    }

    /// Destroy the preview entity and release its resources. No-op when no
    /// preview exists.
    pub fn teardown(&mut self, host: &mut dyn RenderHost) {
        if let Some(entity) = self.entity.take() {
            debug!("preview torn down at size {:.2}", entity.size);
            host.remove(entity.handle);
        }
    }
}

impl Default for PreviewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::host::NullRenderHost;
    use cgmath::Zero;

    const WHITE: [u8; 4] = [255; 4];

    #[test]
    fn test_preview_is_single_entity() {
        let mut host = NullRenderHost::new();
        let mut preview = PreviewManager::new();

        preview.update(&mut host, Vector3::zero(), 5.0, 0.0, WHITE);
        assert!(preview.is_active());
        assert_eq!(host.live_count(), 1);

        // A growing hold rebuilds but never accumulates entities
        preview.update(&mut host, Vector3::zero(), 12.0, 0.0, WHITE);
        preview.update(&mut host, Vector3::zero(), 20.0, 3.0, WHITE);
        assert_eq!(host.live_count(), 1);
        assert_eq!(host.created_count(), 3);
        assert_eq!(host.removed_count(), 2);
    }

    #[test]
    fn test_tiny_deltas_skip_rebuild() {
        let mut host = NullRenderHost::new();
        let mut preview = PreviewManager::new();

        preview.update(&mut host, Vector3::zero(), 10.0, 2.0, WHITE);
        preview.update(&mut host, Vector3::zero(), 10.001, 2.001, WHITE);
        assert_eq!(host.created_count(), 1);
        assert_eq!(host.removed_count(), 0);
    }

    #[test]
    fn test_shape_class_flip_forces_rebuild() {
        let mut host = NullRenderHost::new();
        let mut preview = PreviewManager::new();

        preview.update(&mut host, Vector3::zero(), 10.0, 0.0, WHITE);
        // Roundness steps from zero by less than the epsilon, but the shape
        // class changed from plain to rounded
        preview.update(&mut host, Vector3::zero(), 10.0, 0.005, WHITE);
        assert_eq!(host.created_count(), 2);
    }

    #[test]
    fn test_teardown_releases_entity() {
        let mut host = NullRenderHost::new();
        let mut preview = PreviewManager::new();

        preview.update(&mut host, Vector3::zero(), 15.0, 0.0, WHITE);
        preview.teardown(&mut host);
        assert!(!preview.is_active());
        assert_eq!(host.live_count(), 0);

        // Tearing down again is harmless
        preview.teardown(&mut host);
        assert_eq!(host.removed_count(), 1);
    }
}
