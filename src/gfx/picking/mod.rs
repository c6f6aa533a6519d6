//! # Anchor Raycasting
//!
//! Converts a pointer screen position into the world-space anchor for a
//! creation session.
//!
//! ## How it works
//!
//! 1. **Screen to Ray**: unproject the screen coordinate through the inverse
//!    view-projection matrix into a world-space ray
//! 2. **Water intersection**: cast the ray against the water surface
//!    collaborator
//! 3. **Fallbacks**: if the water is missed, intersect the horizontal plane
//!    at the look-at target's height; if that is missed too, anchor at the
//!    origin
//!
//! Anchor resolution never fails; the fallback chain is the error handling.

use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};

use crate::gfx::camera::orbit_camera::OrbitCamera;

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// A surface the pointer can be cast against (the water, for this scene).
pub trait SurfaceRaycaster {
    fn intersect(&self, ray: &Ray) -> Option<Vector3<f32>>;
}

/// Flat water: a horizontal plane at a fixed height.
pub struct FlatWater {
    pub height: f32,
}

impl SurfaceRaycaster for FlatWater {
    fn intersect(&self, ray: &Ray) -> Option<Vector3<f32>> {
        intersect_horizontal_plane(ray, self.height)
    }
}

/// Convert screen coordinates to a world-space ray through the camera.
pub fn screen_to_ray(
    screen_pos: (f32, f32),
    screen_size: (f32, f32),
    camera: &OrbitCamera,
) -> Ray {
    let (mouse_x, mouse_y) = screen_pos;
    let (screen_width, screen_height) = screen_size;

    // Convert screen coordinates to normalized device coordinates (-1 to 1)
    let ndc_x = (2.0 * mouse_x) / screen_width - 1.0;
    let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height; // Flip Y axis

    let view_proj = camera.build_view_projection_matrix();
    let inv_view_proj = view_proj.invert().unwrap_or(Matrix4::from_scale(1.0));

    // Transform near and far points from NDC to world space
    let near_point = Vector4::new(ndc_x, ndc_y, -1.0, 1.0);
    let far_point = Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

    let world_near = inv_view_proj * near_point;
    let world_far = inv_view_proj * far_point;

    let near_3d = world_near.truncate() / world_near.w;
    let far_3d = world_far.truncate() / world_far.w;

    Ray::new(near_3d, far_3d - near_3d)
}

/// Intersect a ray with the horizontal plane `y = height`.
///
/// Returns the intersection point, or `None` when the ray is parallel to the
/// plane or the intersection lies behind the origin.
pub fn intersect_horizontal_plane(ray: &Ray, height: f32) -> Option<Vector3<f32>> {
    if ray.direction.y.abs() < 1e-6 {
        return None;
    }
    let t = (height - ray.origin.y) / ray.direction.y;
    if t < 0.0 {
        return None;
    }
    Some(ray.point_at(t))
}

/// Resolve the world-space anchor for a pointer-down event.
///
/// Tries the water surface first, then the horizontal plane at the target's
/// height, then degrades to the origin.
pub fn resolve_anchor(
    ray: &Ray,
    water: &dyn SurfaceRaycaster,
    target_height: f32,
) -> Vector3<f32> {
    water
        .intersect(ray)
        .or_else(|| intersect_horizontal_plane(ray, target_height))
        .unwrap_or_else(Vector3::zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoHit;

    impl SurfaceRaycaster for NoHit {
        fn intersect(&self, _ray: &Ray) -> Option<Vector3<f32>> {
            None
        }
    }

    #[test]
    fn test_plane_intersection() {
        let ray = Ray::new(Vector3::new(0.0, 100.0, 0.0), Vector3::new(0.0, -1.0, 1.0));
        let hit = intersect_horizontal_plane(&ray, 0.0).unwrap();
        assert!(hit.y.abs() < 1e-4);
        assert!((hit.z - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_plane_missed_when_looking_up() {
        let ray = Ray::new(Vector3::new(0.0, 100.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(intersect_horizontal_plane(&ray, 0.0).is_none());
    }

    #[test]
    fn test_plane_missed_when_parallel() {
        let ray = Ray::new(Vector3::new(0.0, 100.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(intersect_horizontal_plane(&ray, 0.0).is_none());
    }

    #[test]
    fn test_anchor_prefers_water() {
        let ray = Ray::new(Vector3::new(0.0, 100.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let water = FlatWater { height: 2.0 };
        let anchor = resolve_anchor(&ray, &water, 10.0);
        assert!((anchor.y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_anchor_falls_back_to_target_plane() {
        let ray = Ray::new(Vector3::new(0.0, 100.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let anchor = resolve_anchor(&ray, &NoHit, 10.0);
        assert!((anchor.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_anchor_degrades_to_origin() {
        // Looking straight up misses both water and fallback plane
        let ray = Ray::new(Vector3::new(5.0, 100.0, 5.0), Vector3::new(0.0, 1.0, 0.0));
        let water = FlatWater { height: 0.0 };
        let anchor = resolve_anchor(&ray, &water, 10.0);
        assert_eq!(anchor, Vector3::zero());
    }

    #[test]
    fn test_screen_center_ray_points_at_target() {
        let camera = OrbitCamera::new(200.0, 1.2, 0.4, Vector3::new(0.0, 10.0, 0.0), 1.5);
        let ray = screen_to_ray((600.0, 400.0), (1200.0, 800.0), &camera);
        // The center ray should pass close to the look-at target
        let to_target = camera.target - ray.origin;
        let along = to_target.dot(ray.direction);
        let closest = ray.point_at(along);
        assert!((closest - camera.target).magnitude() < 1.0);
    }
}
