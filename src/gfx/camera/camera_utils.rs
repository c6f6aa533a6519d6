use crate::input::ArrowState;

use super::{camera_controller::CameraController, orbit_camera::OrbitCamera};

/// Bundles the orbit camera with its arrow-key controller.
pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    /// Advance the orbit for one frame from the current arrow state.
    pub fn update(&mut self, arrows: &ArrowState, dt_secs: f32) {
        self.controller.update(arrows, dt_secs, &mut self.camera);
    }

    /// Get the view projection matrix from the camera
    pub fn get_view_proj_matrix(&self) -> cgmath::Matrix4<f32> {
        self.camera.build_view_projection_matrix()
    }
}
