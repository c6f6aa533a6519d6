//! # Render Host Interface
//!
//! The rendering pipeline is a collaborator, not part of this crate. This
//! module defines the narrow surface the interaction core needs from it:
//! create a renderable entity from geometry + material + transform, move it,
//! recolor it, and remove it (releasing its GPU-side resources).
//!
//! [`NullRenderHost`] is a headless implementation with live-entity
//! accounting, used for tests and for running the interaction loop without a
//! renderer attached.

use std::collections::HashSet;

use cgmath::{Vector3, Zero};
use log::warn;

use super::geometry::GeometryData;

/// Opaque identifier for a renderable entity owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub u64);

/// Position and Euler rotation (radians) for a renderable entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
}

impl Transform {
    /// Create a transform at the given position with no rotation.
    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            rotation: Vector3::zero(),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vector3::zero())
    }
}

/// Material description: RGBA color with alpha as opacity, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialDesc {
    pub color: [f32; 4],
}

impl MaterialDesc {
    pub fn new(color: [f32; 4]) -> Self {
        Self { color }
    }
}

/// Interface to the rendering collaborator.
///
/// `remove` must release the entity's geometry and material resources as
/// well as the entity itself; the preview rebuilds its geometry while a hold
/// is active, so hosts that defer disposal will leak a geometry per frame.
pub trait RenderHost {
    fn create(
        &mut self,
        geometry: &GeometryData,
        material: &MaterialDesc,
        transform: &Transform,
    ) -> EntityHandle;

    fn set_transform(&mut self, handle: EntityHandle, transform: &Transform);

    fn set_material(&mut self, handle: EntityHandle, material: &MaterialDesc);

    fn remove(&mut self, handle: EntityHandle);
}

/// Headless render host that only tracks entity lifetimes.
pub struct NullRenderHost {
    next_id: u64,
    live: HashSet<EntityHandle>,
    created: u64,
    removed: u64,
}

impl NullRenderHost {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            live: HashSet::new(),
            created: 0,
            removed: 0,
        }
    }

    /// Number of entities currently alive.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total entities ever created.
    pub fn created_count(&self) -> u64 {
        self.created
    }

    /// Total entities removed (and disposed).
    pub fn removed_count(&self) -> u64 {
        self.removed
    }
}

impl Default for NullRenderHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderHost for NullRenderHost {
    fn create(
        &mut self,
        _geometry: &GeometryData,
        _material: &MaterialDesc,
        _transform: &Transform,
    ) -> EntityHandle {
        let handle = EntityHandle(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.live.insert(handle);
        handle
    }

    fn set_transform(&mut self, handle: EntityHandle, _transform: &Transform) {
        if !self.live.contains(&handle) {
            warn!("set_transform on dead entity {:?}", handle);
        }
    }

    fn set_material(&mut self, handle: EntityHandle, _material: &MaterialDesc) {
        if !self.live.contains(&handle) {
            warn!("set_material on dead entity {:?}", handle);
        }
    }

    fn remove(&mut self, handle: EntityHandle) {
        if self.live.remove(&handle) {
            self.removed += 1;
        } else {
            warn!("remove on unknown entity {:?}", handle);
        }
    }
}
