//! GPU-facing data for drawing a [`ParticleField`](crate::field::ParticleField).
//!
//! The field's position and color arrays are uploaded as two per-instance
//! vertex buffers of `Float32x3`. Each instance expands to a 6-vertex quad in
//! the vertex shader.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::camera::OrbitCamera;
use crate::config::ViewConfig;

/// WGSL source for the sprite pipeline (`vs_main` / `fs_main`).
pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");

/// Vertices emitted per particle.
pub const VERTICES_PER_PARTICLE: u32 = 6;

/// Byte stride of one position or color entry.
pub const ATTRIBUTE_STRIDE: u64 = (3 * std::mem::size_of::<f32>()) as u64;

/// Uniform block shared by both shader stages. Mirrors `Uniforms` in WGSL.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// Clip-space half-extent of a sprite at unit view depth.
    pub point_scale: [f32; 2],
    pub opacity: f32,
    pub _padding: f32,
}

impl Uniforms {
    /// Build the uniform block for one frame.
    pub fn new(camera: &OrbitCamera, aspect: f32, model: Mat4, view: &ViewConfig) -> Self {
        let proj = camera.projection(aspect);
        let view_proj = proj * camera.view_matrix();
        let half = view.point_size * 0.5;

        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            point_scale: [proj.x_axis.x * half, proj.y_axis.y * half],
            opacity: view.opacity,
            _padding: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates WGSL code using naga.
    fn validate_wgsl(code: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_shader_is_valid_wgsl() {
        if let Err(e) = validate_wgsl(SHADER_SOURCE) {
            panic!("{}", e);
        }
    }

    #[test]
    fn test_shader_entry_points() {
        assert!(SHADER_SOURCE.contains("fn vs_main"));
        assert!(SHADER_SOURCE.contains("fn fs_main"));
    }

    #[test]
    fn test_uniform_layout() {
        // WGSL pads uniform structs to 16 bytes.
        assert_eq!(std::mem::size_of::<Uniforms>(), 144);
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
    }

    #[test]
    fn test_point_scale_follows_aspect() {
        let camera = OrbitCamera::default();
        let view = ViewConfig::default();
        let wide = Uniforms::new(&camera, 2.0, Mat4::IDENTITY, &view);
        let square = Uniforms::new(&camera, 1.0, Mat4::IDENTITY, &view);
        assert!((wide.point_scale[0] * 2.0 - square.point_scale[0]).abs() < 1e-6);
        assert_eq!(wide.point_scale[1], square.point_scale[1]);
        assert_eq!(wide.opacity, 0.9);
    }
}
