//! Runtime configuration.
//!
//! Everything has a default, so an empty JSON object (or no file at all) is a
//! valid configuration:
//!
//! ```json
//! {
//!     "field": { "count": 20000, "time_based": true },
//!     "view": { "initial_solid": "torus", "initial_palette": "cool" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::palette::{PaletteMode, DEFAULT_JITTER};
use crate::solid::Solid;

/// Top-level configuration for the viewer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field: FieldConfig,
    pub view: ViewConfig,
}

impl Config {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field.validate()?;
        self.view.validate()
    }
}

/// Simulation parameters for a [`ParticleField`](crate::field::ParticleField).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles, fixed for the life of the field.
    pub count: usize,
    /// Fraction of the remaining distance covered per step.
    pub lerp_factor: f32,
    /// Peak-to-peak amplitude of the color twinkle.
    pub jitter: f32,
    /// Rotation added per step about X and Y, in radians.
    pub rotation_speed: [f32; 2],
    /// Fixed RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Scale each step by elapsed time instead of assuming one step per frame.
    pub time_based: bool,
    /// Step rate the per-step constants were tuned for.
    pub reference_hz: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 8000,
            lerp_factor: 0.08,
            jitter: DEFAULT_JITTER,
            rotation_speed: [0.001, 0.002],
            seed: None,
            time_based: false,
            reference_hz: 60.0,
        }
    }
}

impl FieldConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of particles.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the per-step approach rate.
    pub fn with_lerp_factor(mut self, lerp_factor: f32) -> Self {
        self.lerp_factor = lerp_factor;
        self
    }

    /// Set the color twinkle amplitude. `0.0` disables it.
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the per-step rotation about X and Y.
    pub fn with_rotation_speed(mut self, x: f32, y: f32) -> Self {
        self.rotation_speed = [x, y];
        self
    }

    /// Seed the field's RNG for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use elapsed time rather than frame count to pace the simulation.
    pub fn with_time_based(mut self, time_based: bool) -> Self {
        self.time_based = time_based;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::Invalid("field.count must be at least 1".into()));
        }
        if !(self.lerp_factor > 0.0 && self.lerp_factor <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "field.lerp_factor must be in (0, 1], got {}",
                self.lerp_factor
            )));
        }
        if !self.jitter.is_finite() || self.jitter < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "field.jitter must be a non-negative number, got {}",
                self.jitter
            )));
        }
        if self.rotation_speed.iter().any(|s| !s.is_finite()) {
            return Err(ConfigError::Invalid("field.rotation_speed must be finite".into()));
        }
        if !(self.reference_hz.is_finite() && self.reference_hz > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "field.reference_hz must be positive, got {}",
                self.reference_hz
            )));
        }
        Ok(())
    }
}

/// Presentation settings for the viewer window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Solid selected at startup.
    pub initial_solid: Solid,
    /// Palette selected at startup.
    pub initial_palette: PaletteMode,
    /// Sprite diameter in world units.
    pub point_size: f32,
    /// Sprite opacity before additive blending.
    pub opacity: f32,
    /// Clear color (RGB, 0.0-1.0).
    pub background: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Initial camera distance from the origin.
    pub camera_distance: f32,
    /// Closest the camera may zoom.
    pub min_distance: f32,
    /// Farthest the camera may zoom.
    pub max_distance: f32,
    /// Fraction of orbit velocity kept each frame is `1 - damping`.
    pub damping: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_solid: Solid::Sphere,
            initial_palette: PaletteMode::Rainbow,
            point_size: 0.06,
            opacity: 0.9,
            background: [0.02, 0.02, 0.02],
            fov_degrees: 45.0,
            camera_distance: 8.0,
            min_distance: 4.0,
            max_distance: 15.0,
            damping: 0.05,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.point_size > 0.0) {
            return Err(ConfigError::Invalid("view.point_size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::Invalid("view.opacity must be in [0, 1]".into()));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid("view.fov_degrees must be in (0, 180)".into()));
        }
        if !(self.min_distance > 0.0 && self.min_distance <= self.max_distance) {
            return Err(ConfigError::Invalid(
                "view.min_distance must be positive and not above view.max_distance".into(),
            ));
        }
        if !(self.min_distance..=self.max_distance).contains(&self.camera_distance) {
            return Err(ConfigError::Invalid(format!(
                "view.camera_distance must be in [{}, {}], got {}",
                self.min_distance, self.max_distance, self.camera_distance
            )));
        }
        if !self.background.iter().all(|c| (0.0..=1.0).contains(c)) {
            return Err(ConfigError::Invalid(
                "view.background channels must be in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::Invalid("view.damping must be in [0, 1]".into()));
        }
        Ok(())
    }
}
