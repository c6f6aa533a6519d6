use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, Vector3};

/// Lower clamp for the polar angle, keeps the camera off the zenith.
pub const MIN_POLAR: f32 = 0.1;
/// Upper clamp for the polar angle, keeps the camera above the horizon.
pub const MAX_POLAR: f32 = std::f32::consts::PI * 0.495;

/// A camera orbiting a fixed look-at target.
///
/// The orbit state is implicit: it lives in `eye` relative to `target` and
/// is re-derived as spherical coordinates whenever the controller moves the
/// camera. Y is up; the polar angle is measured from the +Y axis.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub bounds: OrbitCameraBounds,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    /// Create a camera at the given spherical offset from `target`.
    ///
    /// `polar` is clamped to the orbit bounds; `distance` is clamped to the
    /// distance bounds.
    pub fn new(distance: f32, polar: f32, azimuth: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let bounds = OrbitCameraBounds::default();
        let distance = bounds.clamp_distance(distance);
        let polar = bounds.clamp_polar(polar);

        Self {
            eye: target + spherical_to_cartesian(distance, polar, azimuth),
            target,
            up: Vector3::unit_y(),
            bounds,
            aspect,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 1.0,
            zfar: 20000.0,
        }
    }

    /// Distance from the eye to the look-at target.
    pub fn distance(&self) -> f32 {
        (self.eye - self.target).magnitude()
    }

    /// Move the eye along the view direction, clamped to the distance bounds.
    pub fn add_distance(&mut self, delta: f32) {
        let offset = self.eye - self.target;
        let distance = offset.magnitude();
        if distance <= f32::EPSILON {
            return;
        }
        let clamped = self.bounds.clamp_distance(distance + delta);
        self.eye = self.target + offset * (clamped / distance);
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(
            Point3::from_vec(self.eye),
            Point3::from_vec(self.target),
            self.up,
        );
        let proj = cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    /// Update the projection aspect ratio after a window resize.
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Bounds on the orbit: distance range and polar angle range.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCameraBounds {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl OrbitCameraBounds {
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }

    pub fn clamp_polar(&self, polar: f32) -> f32 {
        polar.clamp(self.min_polar, self.max_polar)
    }
}

impl Default for OrbitCameraBounds {
    fn default() -> Self {
        Self {
            min_distance: 40.0,
            max_distance: 1000.0,
            min_polar: MIN_POLAR,
            max_polar: MAX_POLAR,
        }
    }
}

/// Convert spherical coordinates (radius, polar from +Y, azimuth around Y)
/// to a Cartesian offset vector.
pub fn spherical_to_cartesian(radius: f32, polar: f32, azimuth: f32) -> Vector3<f32> {
    Vector3::new(
        radius * polar.sin() * azimuth.cos(),
        radius * polar.cos(),
        radius * polar.sin() * azimuth.sin(),
    )
}

/// Decompose a Cartesian offset into (radius, polar, azimuth).
///
/// Returns `None` for a zero-length offset, where the angles are undefined.
pub fn cartesian_to_spherical(offset: Vector3<f32>) -> Option<(f32, f32, f32)> {
    let radius = offset.magnitude();
    if radius <= f32::EPSILON {
        return None;
    }
    let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
    let azimuth = offset.z.atan2(offset.x);
    Some((radius, polar, azimuth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;

    #[test]
    fn test_spherical_round_trip() {
        let offset = spherical_to_cartesian(100.0, 1.2, 0.7);
        let (r, polar, azimuth) = cartesian_to_spherical(offset).unwrap();
        assert!((r - 100.0).abs() < 1e-3);
        assert!((polar - 1.2).abs() < 1e-4);
        assert!((azimuth - 0.7).abs() < 1e-4);
    }

    #[test]
    fn test_zero_offset_has_no_angles() {
        assert!(cartesian_to_spherical(Vector3::zero()).is_none());
    }

    #[test]
    fn test_distance_clamped_to_bounds() {
        let mut camera = OrbitCamera::new(100.0, 1.2, 0.0, Vector3::zero(), 1.5);
        camera.add_distance(-500.0);
        assert!((camera.distance() - camera.bounds.min_distance).abs() < 1e-3);
        camera.add_distance(5000.0);
        assert!((camera.distance() - camera.bounds.max_distance).abs() < 1e-3);
    }

    #[test]
    fn test_new_clamps_initial_state() {
        let camera = OrbitCamera::new(5.0, 3.0, 0.0, Vector3::new(0.0, 10.0, 0.0), 1.0);
        assert!((camera.distance() - camera.bounds.min_distance).abs() < 1e-3);
        let (_, polar, _) = cartesian_to_spherical(camera.eye - camera.target).unwrap();
        assert!(polar <= MAX_POLAR + 1e-4);
    }
}
