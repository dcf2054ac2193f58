//! Position-driven particle coloring.
//!
//! Each [`PaletteMode`] turns a particle's current position into a base RGB
//! color. [`color_for`] then adds a small twinkle: one random offset shared by
//! all three channels, followed by a clamp to `[0, 1]`.
//!
//! The coefficients are hand-tuned for looks over roughly `[-2, 2]` per axis
//! and are not colorimetrically meaningful.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::Vec3;

/// Default peak-to-peak amplitude of the per-particle twinkle.
pub const DEFAULT_JITTER: f32 = 0.05;

/// Coloring schemes for the particle cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    /// Position mapped straight to RGB.
    #[default]
    Rainbow,
    /// Reds through yellows, graded by height.
    Warm,
    /// Blues and cyans, graded along X.
    Cool,
    /// Greens, graded by height.
    Nature,
}

impl PaletteMode {
    /// All palette modes.
    pub const ALL: [PaletteMode; 4] = [
        PaletteMode::Rainbow,
        PaletteMode::Warm,
        PaletteMode::Cool,
        PaletteMode::Nature,
    ];

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PaletteMode::Rainbow => "rainbow",
            PaletteMode::Warm => "warm",
            PaletteMode::Cool => "cool",
            PaletteMode::Nature => "nature",
        }
    }

    /// Noise-free color for a particle at `position`.
    pub fn base_color(&self, position: Vec3) -> Vec3 {
        match self {
            PaletteMode::Rainbow => {
                let n = position / 4.0 + Vec3::splat(0.5);
                Vec3::new(n.x, n.y, n.z + 0.2)
            }
            PaletteMode::Warm => {
                let t = position.y / 4.0 + 0.5;
                Vec3::new(1.0, 0.5 + t * 0.5, 0.1)
            }
            PaletteMode::Cool => {
                let t = position.x / 4.0 + 0.5;
                Vec3::new(0.1 + t * 0.4, 0.5 + t * 0.5, 1.0)
            }
            PaletteMode::Nature => {
                let t = (position.y + 2.0) / 4.0;
                Vec3::new(0.1, 0.6 + t * 0.4, 0.2 + t * 0.2)
            }
        }
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownPalette(s.to_string()))
    }
}

impl TryFrom<u32> for PaletteMode {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PaletteMode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| ParseError::UnknownPalette(value.to_string()))
    }
}

/// Noise-free color, equivalent to [`PaletteMode::base_color`].
#[inline]
pub fn base_color(position: Vec3, mode: PaletteMode) -> Vec3 {
    mode.base_color(position)
}

/// Twinkled color with the default jitter amplitude.
pub fn color_for<R: Rng + ?Sized>(position: Vec3, mode: PaletteMode, rng: &mut R) -> Vec3 {
    color_with_jitter(position, mode, DEFAULT_JITTER, rng)
}

/// Base color plus `(rand - 0.5) * jitter` on every channel, clamped to `[0, 1]`.
///
/// The same offset is applied to R, G and B so the twinkle changes brightness
/// without shifting hue.
pub fn color_with_jitter<R: Rng + ?Sized>(
    position: Vec3,
    mode: PaletteMode,
    jitter: f32,
    rng: &mut R,
) -> Vec3 {
    let noise = (rng.gen::<f32>() - 0.5) * jitter;
    (mode.base_color(position) + Vec3::splat(noise)).clamp(Vec3::ZERO, Vec3::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_warm_at_origin() {
        let c = base_color(Vec3::ZERO, PaletteMode::Warm);
        assert!(approx(c, Vec3::new(1.0, 0.75, 0.1)));
    }

    #[test]
    fn test_base_colors_at_known_points() {
        assert!(approx(
            PaletteMode::Rainbow.base_color(Vec3::new(2.0, -2.0, 0.0)),
            Vec3::new(1.0, 0.0, 0.7)
        ));
        assert!(approx(
            PaletteMode::Cool.base_color(Vec3::new(2.0, 0.0, 0.0)),
            Vec3::new(0.5, 1.0, 1.0)
        ));
        assert!(approx(
            PaletteMode::Nature.base_color(Vec3::new(0.0, -2.0, 0.0)),
            Vec3::new(0.1, 0.6, 0.2)
        ));
    }

    #[test]
    fn test_colors_stay_in_unit_cube() {
        let mut rng = SmallRng::seed_from_u64(9);
        let steps = [-5.0, -2.5, -1.0, 0.0, 1.0, 2.5, 5.0];
        for mode in PaletteMode::ALL {
            for &x in &steps {
                for &y in &steps {
                    for &z in &steps {
                        let c = color_for(Vec3::new(x, y, z), mode, &mut rng);
                        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_jitter_is_shared_across_channels() {
        let mut rng = SmallRng::seed_from_u64(11);
        // Warm at the origin is unclamped in every channel.
        let base = PaletteMode::Warm.base_color(Vec3::ZERO);
        for _ in 0..100 {
            let d = color_for(Vec3::ZERO, PaletteMode::Warm, &mut rng) - base;
            // Red is clamped at 1.0, so compare green and blue only.
            assert!((d.y - d.z).abs() < 1e-6);
            assert!(d.y.abs() <= DEFAULT_JITTER / 2.0 + 1e-6);
        }
    }

    #[test]
    fn test_zero_jitter_matches_base() {
        let mut rng = SmallRng::seed_from_u64(12);
        let p = Vec3::new(0.3, -0.7, 1.1);
        let c = color_with_jitter(p, PaletteMode::Nature, 0.0, &mut rng);
        assert!(approx(c, PaletteMode::Nature.base_color(p)));
    }

    #[test]
    fn test_parse_palette() {
        assert_eq!("Cool".parse::<PaletteMode>().unwrap(), PaletteMode::Cool);
        assert!("sepia".parse::<PaletteMode>().is_err());
        assert_eq!(PaletteMode::try_from(3).unwrap(), PaletteMode::Nature);
    }
}
