//! Orbit camera for viewing the particle cloud.

use glam::{Mat4, Vec3};

use crate::config::ViewConfig;

/// Damped orbit camera looking at a fixed target.
///
/// Drag input adds angular velocity, which decays by `damping` each frame,
/// so the view keeps gliding briefly after the mouse is released.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    min_distance: f32,
    max_distance: f32,
    damping: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
}

/// Pitch limit just short of straight up/down, where `look_at` degenerates.
const MAX_PITCH: f32 = 1.5;

impl OrbitCamera {
    /// Camera on the +Z axis at the configured distance.
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: config
                .camera_distance
                .clamp(config.min_distance, config.max_distance),
            target: Vec3::ZERO,
            fov_y: config.fov_degrees.to_radians(),
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            damping: config.damping,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Perspective projection for the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, 0.1, 100.0)
    }

    /// Feed a mouse drag, in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw_velocity -= dx * 0.005;
        self.pitch_velocity += dy * 0.005;
    }

    /// Feed a scroll amount; positive zooms in.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance - scroll * 0.3).clamp(self.min_distance, self.max_distance);
    }

    /// Apply and decay the orbit velocity. Call once per frame.
    pub fn update(&mut self) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity).clamp(-MAX_PITCH, MAX_PITCH);

        let keep = 1.0 - self.damping;
        self.yaw_velocity *= keep;
        self.pitch_velocity *= keep;
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}
