//! Random points on the surface of each solid.
//!
//! Every function here is stateless: the caller passes the RNG, so two
//! threads with their own generators can sample concurrently.
//!
//! ```ignore
//! let mut rng = rand::thread_rng();
//! let p = Solid::Torus.shape().sample(&mut rng);
//! ```

use rand::Rng;
use std::f32::consts::TAU;

use crate::solid::SurfaceShape;
use crate::Vec3;

/// Probability that a pyramid sample lands on the square base.
const PYRAMID_BASE_CHANCE: f32 = 0.2;

impl SurfaceShape {
    /// One random point on this shape's surface.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        match *self {
            SurfaceShape::Sphere { radius } => sample_sphere(rng, radius),
            SurfaceShape::Cube { size } => sample_cube(rng, size),
            SurfaceShape::Pyramid { size, height } => sample_pyramid(rng, size, height),
            SurfaceShape::Torus { radius, tube } => sample_torus(rng, radius, tube),
        }
    }

    /// Geometric centre the samples average out to.
    ///
    /// The pyramid's value is the centroid of its sampling distribution
    /// (20% base, 80% lateral fan), not of the solid body.
    pub fn centroid(&self) -> Vec3 {
        match *self {
            SurfaceShape::Pyramid { height, .. } => {
                let base_y = -height / 3.0;
                let apex_y = height * 2.0 / 3.0;
                // Lateral faces: r = sqrt(u) puts the mean at r = 2/3.
                let lateral_y = apex_y + (base_y - apex_y) * (2.0 / 3.0);
                let y = PYRAMID_BASE_CHANCE * base_y + (1.0 - PYRAMID_BASE_CHANCE) * lateral_y;
                Vec3::new(0.0, y, 0.0)
            }
            _ => Vec3::ZERO,
        }
    }
}

/// Area-uniform point on a sphere of given radius.
///
/// `phi = acos(2v - 1)` instead of a uniform `phi` keeps points from bunching
/// at the poles.
pub fn sample_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();

    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Point on one of the six faces of an origin-centred cube.
pub fn sample_cube<R: Rng + ?Sized>(rng: &mut R, size: f32) -> Vec3 {
    let half = size / 2.0;
    let face = rng.gen_range(0..6u32);
    let u = (rng.gen::<f32>() * 2.0 - 1.0) * half;
    let v = (rng.gen::<f32>() * 2.0 - 1.0) * half;

    match face {
        0 => Vec3::new(half, u, v),
        1 => Vec3::new(-half, u, v),
        2 => Vec3::new(u, half, v),
        3 => Vec3::new(u, -half, v),
        4 => Vec3::new(u, v, half),
        _ => Vec3::new(u, v, -half),
    }
}

/// Point on a square pyramid: the base 20% of the time, otherwise a lateral face.
///
/// Lateral points are a lerp from the apex to a random point on one base edge,
/// with `sqrt(u)` remapping so the fan fills each triangle evenly. Faces are
/// not weighted by area, which is close enough for a point cloud.
pub fn sample_pyramid<R: Rng + ?Sized>(rng: &mut R, size: f32, height: f32) -> Vec3 {
    let half_base = size / 2.0;
    let base_y = -height / 3.0;
    let apex_y = height * 2.0 / 3.0;

    if rng.gen::<f32>() < PYRAMID_BASE_CHANCE {
        return Vec3::new(
            (rng.gen::<f32>() * 2.0 - 1.0) * half_base,
            base_y,
            (rng.gen::<f32>() * 2.0 - 1.0) * half_base,
        );
    }

    let side = rng.gen_range(0..4u32);
    let t = rng.gen::<f32>() * 2.0 - 1.0;
    let (edge_x, edge_z) = match side {
        0 => (t * half_base, half_base),
        1 => (half_base, t * half_base),
        2 => (t * half_base, -half_base),
        _ => (-half_base, t * half_base),
    };

    let r = rng.gen::<f32>().sqrt();
    Vec3::new(edge_x * r, apex_y + (base_y - apex_y) * r, edge_z * r)
}

/// Point on a torus from two uniform angles.
///
/// Slightly denser on the inner equator than an area-uniform sampler.
pub fn sample_torus<R: Rng + ?Sized>(rng: &mut R, radius: f32, tube: f32) -> Vec3 {
    let u = rng.gen::<f32>() * TAU;
    let v = rng.gen::<f32>() * TAU;
    let ring = radius + tube * v.cos();

    Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin())
}
