//! The particle field: every particle's position, target and color.
//!
//! Particles are stored column-wise, one `Vec<Vec3>` per attribute, so the
//! renderer can upload positions and colors as flat `f32` slices without any
//! repacking.
//!
//! # Lifecycle
//!
//! ```ignore
//! let mut field = ParticleField::new(8000, Solid::Sphere);
//! field.retarget(Solid::Cube);          // on user input
//! loop {
//!     field.advance(PaletteMode::Warm); // once per frame
//!     upload(field.position_data(), field.color_data());
//! }
//! ```
//!
//! A retarget only rewrites the targets. Positions drift toward the new
//! targets over the following steps, so re-targeting mid-transition is fine.

use std::f32::consts::TAU;
use std::sync::Arc;

use glam::{EulerRot, Mat4, Vec2};
use parking_lot::{Mutex, MutexGuard};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::palette::{color_with_jitter, PaletteMode};
use crate::sampler::sample_sphere;
use crate::solid::Solid;
use crate::Vec3;

/// Radius of the sphere every field starts out on.
pub const INITIAL_RADIUS: f32 = 2.0;

/// A fixed-size cloud of particles morphing toward a [`Solid`].
///
/// The position, target and color arrays always hold exactly
/// [`count`](Self::count) entries; indices are stable for the field's lifetime.
#[derive(Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    targets: Vec<Vec3>,
    colors: Vec<Vec3>,
    /// Solid the targets were last sampled from.
    solid: Solid,
    /// Accumulated display rotation about X (`.x`) and Y (`.y`).
    rotation: Vec2,
    lerp_factor: f32,
    jitter: f32,
    rotation_speed: Vec2,
    reference_hz: f32,
    rng: SmallRng,
}

impl ParticleField {
    /// Create a field of `count` particles with default settings.
    pub fn new(count: usize, initial_solid: Solid) -> Self {
        Self::build(&FieldConfig::default().with_count(count), initial_solid)
    }

    /// Create a field from a [`FieldConfig`].
    ///
    /// Positions and targets start on a sphere of radius [`INITIAL_RADIUS`]
    /// whatever `initial_solid` is; the owner retargets to its selection
    /// afterwards. Colors start white.
    ///
    /// Returns [`ConfigError::Invalid`] if the config fails
    /// [`FieldConfig::validate`].
    pub fn from_config(config: &FieldConfig, initial_solid: Solid) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, initial_solid))
    }

    fn build(config: &FieldConfig, initial_solid: Solid) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(clock_seed(config.count as u64)),
        };

        let positions: Vec<Vec3> = (0..config.count)
            .map(|_| sample_sphere(&mut rng, INITIAL_RADIUS))
            .collect();
        let targets = positions.clone();
        let colors = vec![Vec3::ONE; config.count];

        log::info!(
            "Created particle field: {} particles, initial solid {}",
            config.count,
            initial_solid
        );

        Self {
            positions,
            targets,
            colors,
            solid: initial_solid,
            rotation: Vec2::ZERO,
            lerp_factor: config.lerp_factor,
            jitter: config.jitter,
            rotation_speed: Vec2::from(config.rotation_speed),
            reference_hz: config.reference_hz,
            rng,
        }
    }

    /// Number of particles. Never changes.
    #[inline]
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Solid the targets were last sampled from.
    #[inline]
    pub fn solid(&self) -> Solid {
        self.solid
    }

    /// Resample every particle's target on the surface of `solid`.
    ///
    /// Positions and colors are left alone.
    pub fn retarget(&mut self, solid: Solid) {
        let shape = solid.shape();
        for target in self.targets.iter_mut() {
            *target = shape.sample(&mut self.rng);
        }
        self.solid = solid;
        log::debug!("Retargeted {} particles to {}", self.count(), solid);
    }

    /// One simulation step at the configured per-step rate.
    ///
    /// Each position covers `lerp_factor` of its remaining distance and is
    /// then recolored. The rate is per call, so convergence speed follows the
    /// caller's frame rate. Use [`advance_timed`](Self::advance_timed) to pace
    /// by elapsed time instead.
    pub fn advance(&mut self, mode: PaletteMode) {
        self.step(mode, self.lerp_factor, 1.0);
    }

    /// One simulation step covering `dt` seconds.
    ///
    /// Equivalent to `dt * reference_hz` calls of [`advance`](Self::advance)
    /// for motion and rotation, with a single recolor. At
    /// `dt = 1 / reference_hz` it matches `advance` exactly.
    pub fn advance_timed(&mut self, mode: PaletteMode, dt: f32) {
        // A non-finite dt would poison the accumulated rotation for good.
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let steps = dt * self.reference_hz;
        let factor = 1.0 - (1.0 - self.lerp_factor).powf(steps);
        self.step(mode, factor, steps);
    }

    fn step(&mut self, mode: PaletteMode, factor: f32, rotation_steps: f32) {
        let jitter = self.jitter;
        for ((position, target), color) in self
            .positions
            .iter_mut()
            .zip(self.targets.iter())
            .zip(self.colors.iter_mut())
        {
            *position += (*target - *position) * factor;
            *color = color_with_jitter(*position, mode, jitter, &mut self.rng);
        }

        let rotation = self.rotation + self.rotation_speed * rotation_steps;
        self.rotation = Vec2::new(rotation.x.rem_euclid(TAU), rotation.y.rem_euclid(TAU));
    }

    /// Current positions.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Current targets.
    #[inline]
    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    /// Current colors, each channel in `[0, 1]`.
    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Positions as interleaved `x, y, z` floats, `3 * count` long.
    #[inline]
    pub fn position_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as interleaved `r, g, b` floats, `3 * count` long.
    #[inline]
    pub fn color_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Accumulated rotation about X and Y in radians, wrapped to `[0, TAU)`.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Model transform applying the accumulated rotation (X then Y).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    /// Largest distance between any particle and its target.
    pub fn max_distance_to_target(&self) -> f32 {
        self.positions
            .iter()
            .zip(self.targets.iter())
            .map(|(p, t)| p.distance(*t))
            .fold(0.0, f32::max)
    }

    /// Whether every particle is within `epsilon` of its target.
    pub fn is_converged(&self, epsilon: f32) -> bool {
        self.max_distance_to_target() < epsilon
    }

    /// Copy out the minimal wire representation of the field.
    pub fn snapshot(&self, palette: PaletteMode) -> FieldSnapshot {
        FieldSnapshot {
            solid: self.solid,
            palette,
            positions: self.position_data().to_vec(),
        }
    }
}

/// Seed mixing the wall clock with `salt`, different on every run.
fn clock_seed(salt: u64) -> u64 {
    salt ^ std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

/// Serializable state of a field: its solid, palette and interleaved positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub solid: Solid,
    pub palette: PaletteMode,
    pub positions: Vec<f32>,
}

impl FieldSnapshot {
    /// Number of particles in the snapshot.
    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A [`ParticleField`] that input and render threads can share.
///
/// `retarget` and `advance` each hold the lock for the whole pass, so a
/// reader never sees a half-resampled target array or a half-stepped frame.
#[derive(Clone)]
pub struct SharedField {
    inner: Arc<Mutex<ParticleField>>,
}

impl SharedField {
    pub fn new(field: ParticleField) -> Self {
        Self {
            inner: Arc::new(Mutex::new(field)),
        }
    }

    pub fn retarget(&self, solid: Solid) {
        self.inner.lock().retarget(solid);
    }

    pub fn advance(&self, mode: PaletteMode) {
        self.inner.lock().advance(mode);
    }

    pub fn advance_timed(&self, mode: PaletteMode, dt: f32) {
        self.inner.lock().advance_timed(mode, dt);
    }

    /// Run `f` with consistent position and color data, e.g. for a GPU upload.
    pub fn with_buffers<T>(&self, f: impl FnOnce(&[f32], &[f32]) -> T) -> T {
        let field = self.inner.lock();
        f(field.position_data(), field.color_data())
    }

    /// Lock the field for arbitrary access.
    pub fn lock(&self) -> MutexGuard<'_, ParticleField> {
        self.inner.lock()
    }
}
