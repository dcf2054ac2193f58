//! # particle-shift
//!
//! A particle cloud that morphs between parametric solids and recolors itself
//! under position-driven palettes.
//!
//! The simulation is plain CPU code with no GPU or window dependency in its
//! core types; the bundled viewer binary is one possible frame driver.
//!
//! ## Quick Start
//!
//! ```ignore
//! use particle_shift::prelude::*;
//!
//! let mut field = ParticleField::new(8000, Solid::Sphere);
//! field.retarget(Solid::Torus);
//!
//! // once per display refresh:
//! field.advance(PaletteMode::Cool);
//! let positions: &[f32] = field.position_data(); // 3 * count floats
//! let colors: &[f32] = field.color_data();
//! ```
//!
//! ## Core Concepts
//!
//! ### Solids
//!
//! | Solid | Published size |
//! |-------|----------------|
//! | [`Solid::Sphere`] | radius 2.5 |
//! | [`Solid::Cube`] | edge 3.5 |
//! | [`Solid::Pyramid`] | base 4, height 4 |
//! | [`Solid::Torus`] | radius 2.5, tube 0.8 |
//!
//! [`SurfaceShape::sample`] draws one point on any shape's surface.
//!
//! ### Stepping
//!
//! [`ParticleField::advance`] moves every particle 8% of the way to its target,
//! recolors it with the active [`PaletteMode`], and adds a slow display
//! rotation. Because the rate is per step, the transition speed follows the
//! frame rate; [`ParticleField::advance_timed`] is the elapsed-time variant.
//!
//! ### Threads
//!
//! A field is a single owned value mutated through `&mut self`. Hosts that
//! receive input on a different thread than they render on can wrap it in a
//! [`SharedField`].

pub mod camera;
pub mod config;
pub mod controls;
pub mod error;
pub mod field;
pub mod palette;
pub mod render;
pub mod sampler;
pub mod solid;
pub mod time;

pub use glam::{Vec2, Vec3};

pub use camera::OrbitCamera;
pub use config::{Config, FieldConfig, ViewConfig};
pub use controls::{ControlEvent, Controls};
pub use error::{ConfigError, GpuError, ParseError, ViewerError};
pub use field::{FieldSnapshot, ParticleField, SharedField};
pub use palette::{base_color, color_for, PaletteMode};
pub use solid::{Solid, SurfaceShape};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use particle_shift::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Config, FieldConfig, ViewConfig};
    pub use crate::controls::{ControlEvent, Controls};
    pub use crate::field::{FieldSnapshot, ParticleField, SharedField};
    pub use crate::palette::{base_color, color_for, PaletteMode};
    pub use crate::solid::{Solid, SurfaceShape};
    pub use crate::time::FrameClock;
    pub use crate::{Vec2, Vec3};
}
