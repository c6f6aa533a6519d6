use cgmath::Vector3;

use crate::gfx::host::{EntityHandle, RenderHost, Transform};

/// Vertical bob amplitude for spawned objects (world units).
pub const BOB_AMPLITUDE: f32 = 20.0;
/// Rotation rate around X (radians per second).
pub const ROT_X_RATE: f32 = 0.5;
/// Rotation rate around Z (radians per second). Deliberately mismatched with
/// the X rate so the spin precesses instead of locking to a fixed axis.
pub const ROT_Z_RATE: f32 = 0.51;

/// A committed object, spawned at pointer-up and never mutated afterwards
/// except through its time-derived animation.
#[derive(Debug, Clone, Copy)]
pub struct SpawnedObject {
    pub handle: EntityHandle,
    pub size: f32,
    pub roundness: f32,
    pub color: [u8; 4],
    pub base_position: Vector3<f32>,
    pub spawn_ms: f64,
}

impl SpawnedObject {
    /// Transform for this object at the given frame time: base position with
    /// a sinusoidal vertical offset plus two slow independent rotations, all
    /// driven by seconds since spawn.
    pub fn transform_at(&self, now_ms: f64) -> Transform {
        let t = ((now_ms - self.spawn_ms).max(0.0) / 1000.0) as f32;
        Transform {
            position: Vector3::new(
                self.base_position.x,
                self.base_position.y + t.sin() * BOB_AMPLITUDE,
                self.base_position.z,
            ),
            rotation: Vector3::new(t * ROT_X_RATE, 0.0, t * ROT_Z_RATE),
        }
    }

    /// Push this frame's animated transform to the render host.
    pub fn animate(&self, host: &mut dyn RenderHost, now_ms: f64) {
        host.set_transform(self.handle, &self.transform_at(now_ms));
    }
}
