//! The solids a particle cloud can morph into.
//!
//! A [`Solid`] is just the identity of a shape. Its size lives in a
//! [`SurfaceShape`], and [`Solid::shape`] hands out the published dimensions
//! the cloud uses when retargeting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One of the four target shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Solid {
    #[default]
    Sphere,
    Cube,
    Pyramid,
    Torus,
}

impl Solid {
    /// All solids in cycling order.
    pub const ALL: [Solid; 4] = [Solid::Sphere, Solid::Cube, Solid::Pyramid, Solid::Torus];

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Solid::Sphere => "sphere",
            Solid::Cube => "cube",
            Solid::Pyramid => "pyramid",
            Solid::Torus => "torus",
        }
    }

    /// Capitalized name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Solid::Sphere => "Sphere",
            Solid::Cube => "Cube",
            Solid::Pyramid => "Pyramid",
            Solid::Torus => "Torus",
        }
    }

    /// Position in [`Solid::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The next solid, wrapping from torus back to sphere.
    pub fn next(&self) -> Solid {
        Solid::ALL[(self.index() + 1) % Solid::ALL.len()]
    }

    /// The previous solid, wrapping from sphere to torus.
    pub fn previous(&self) -> Solid {
        let len = Solid::ALL.len();
        Solid::ALL[(self.index() + len - 1) % len]
    }

    /// The published dimensions used when the cloud retargets to this solid.
    pub fn shape(&self) -> SurfaceShape {
        match self {
            Solid::Sphere => SurfaceShape::Sphere { radius: 2.5 },
            Solid::Cube => SurfaceShape::Cube { size: 3.5 },
            Solid::Pyramid => SurfaceShape::Pyramid {
                size: 4.0,
                height: 4.0,
            },
            Solid::Torus => SurfaceShape::Torus {
                radius: 2.5,
                tube: 0.8,
            },
        }
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Solid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Solid::ALL
            .iter()
            .copied()
            .find(|solid| solid.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownSolid(s.to_string()))
    }
}

impl TryFrom<u32> for Solid {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Solid::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| ParseError::UnknownSolid(value.to_string()))
    }
}

/// A solid together with its size parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SurfaceShape {
    /// Sphere centered at the origin.
    Sphere { radius: f32 },
    /// Axis-aligned cube centered at the origin, `size` is the edge length.
    Cube { size: f32 },
    /// Square pyramid, base at `y = -height / 3`, apex at `y = 2 * height / 3`.
    Pyramid { size: f32, height: f32 },
    /// Torus in the XY plane around the Z axis.
    Torus { radius: f32, tube: f32 },
}

impl SurfaceShape {
    /// Which solid this shape is an instance of.
    pub fn solid(&self) -> Solid {
        match self {
            SurfaceShape::Sphere { .. } => Solid::Sphere,
            SurfaceShape::Cube { .. } => Solid::Cube,
            SurfaceShape::Pyramid { .. } => Solid::Pyramid,
            SurfaceShape::Torus { .. } => Solid::Torus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_solid() {
        let mut solid = Solid::Sphere;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(solid);
            solid = solid.next();
        }
        assert_eq!(seen, Solid::ALL.to_vec());
        assert_eq!(solid, Solid::Sphere);
        assert_eq!(Solid::Sphere.previous(), Solid::Torus);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("cube".parse::<Solid>().unwrap(), Solid::Cube);
        assert_eq!(" Torus ".parse::<Solid>().unwrap(), Solid::Torus);
        assert_eq!(
            "cone".parse::<Solid>(),
            Err(ParseError::UnknownSolid("cone".into()))
        );
    }

    #[test]
    fn test_try_from_index() {
        assert_eq!(Solid::try_from(2).unwrap(), Solid::Pyramid);
        assert!(Solid::try_from(4).is_err());
    }

    #[test]
    fn test_published_shapes_match_solid() {
        for solid in Solid::ALL {
            assert_eq!(solid.shape().solid(), solid);
        }
        assert_eq!(Solid::Cube.shape(), SurfaceShape::Cube { size: 3.5 });
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Solid::Pyramid).unwrap();
        assert_eq!(json, "\"pyramid\"");
    }
}
