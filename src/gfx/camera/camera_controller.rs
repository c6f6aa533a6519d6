use super::orbit_camera::{cartesian_to_spherical, spherical_to_cartesian, OrbitCamera};
use crate::input::ArrowState;

/// Arrow-key orbit controller.
///
/// Each frame with any arrow direction active, the offset from target to eye
/// is re-derived as spherical coordinates, the azimuth (left/right) and polar
/// angle (up/down) are advanced by `rotate_speed * dt`, the polar angle is
/// clamped to the camera bounds, and the eye is written back. The radius is
/// never touched here; zoom is handled separately. An idle frame leaves the
/// camera untouched.
pub struct CameraController {
    pub rotate_speed: f32,
}

impl CameraController {
    pub fn new(rotate_speed: f32) -> Self {
        Self { rotate_speed }
    }

    pub fn update(&self, arrows: &ArrowState, dt_secs: f32, camera: &mut OrbitCamera) {
        if !arrows.any() {
            return;
        }

        let Some((radius, polar, azimuth)) = cartesian_to_spherical(camera.eye - camera.target)
        else {
            return;
        };

        let azimuth = azimuth + arrows.horizontal() * self.rotate_speed * dt_secs;
        let polar = camera
            .bounds
            .clamp_polar(polar + arrows.vertical() * self.rotate_speed * dt_secs);

        camera.eye = camera.target + spherical_to_cartesian(radius, polar, azimuth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::orbit_camera::{cartesian_to_spherical, MAX_POLAR, MIN_POLAR};
    use cgmath::{InnerSpace, Vector3};

    fn camera() -> OrbitCamera {
        OrbitCamera::new(100.0, 1.2, 0.3, Vector3::new(0.0, 10.0, 0.0), 1.5)
    }

    fn polar_of(camera: &OrbitCamera) -> f32 {
        cartesian_to_spherical(camera.eye - camera.target).unwrap().1
    }

    #[test]
    fn test_idle_frame_is_a_noop() {
        let mut cam = camera();
        let before = cam.eye;
        CameraController::new(1.0).update(&ArrowState::default(), 0.016, &mut cam);
        assert_eq!(before, cam.eye);
    }

    #[test]
    fn test_orbit_preserves_radius() {
        let mut cam = camera();
        let controller = CameraController::new(1.0);
        let arrows = ArrowState {
            right: true,
            up: true,
            ..Default::default()
        };
        for _ in 0..100 {
            controller.update(&arrows, 0.016, &mut cam);
        }
        assert!((cam.distance() - 100.0).abs() < 1e-2);
    }

    #[test]
    fn test_polar_clamped_no_matter_how_long_held() {
        let mut cam = camera();
        let controller = CameraController::new(1.0);

        let down = ArrowState {
            down: true,
            ..Default::default()
        };
        for _ in 0..1000 {
            controller.update(&down, 0.016, &mut cam);
        }
        assert!(polar_of(&cam) <= MAX_POLAR + 1e-4);

        let up = ArrowState {
            up: true,
            ..Default::default()
        };
        for _ in 0..1000 {
            controller.update(&up, 0.016, &mut cam);
        }
        assert!(polar_of(&cam) >= MIN_POLAR - 1e-4);
    }

    #[test]
    fn test_horizontal_orbit_moves_eye_around_target() {
        let mut cam = camera();
        let before = cam.eye;
        let arrows = ArrowState {
            left: true,
            ..Default::default()
        };
        CameraController::new(1.0).update(&arrows, 0.1, &mut cam);
        assert!((cam.eye - before).magnitude() > 1e-3);
        // Height above target is unchanged by a pure azimuth move
        assert!((cam.eye.y - before.y).abs() < 1e-3);
    }
}
