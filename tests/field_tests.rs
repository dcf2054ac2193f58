//! Integration tests for the particle field.
//!
//! These drive the public API the way a frame driver does: construct,
//! retarget on input, advance once per frame.

use particle_shift::prelude::*;
use particle_shift::sampler::sample_cube;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn field(count: usize, seed: u64) -> ParticleField {
    ParticleField::from_config(&FieldConfig::new().with_count(count).with_seed(seed), Solid::Sphere)
        .unwrap()
}

/// Distance from `p` to the surface of an origin-centred cube.
fn distance_to_cube_surface(p: Vec3, half: f32) -> f32 {
    let q = p.abs() - Vec3::splat(half);
    let outside = q.max(Vec3::ZERO).length();
    let inside = q.max_element().min(0.0);
    (outside + inside).abs()
}

// ============================================================================
// Motion
// ============================================================================

#[test]
fn test_advance_never_moves_away_from_target() {
    for solid in Solid::ALL {
        let mut field = field(500, 21);
        field.retarget(solid);
        let before: Vec<f32> = field
            .positions()
            .iter()
            .zip(field.targets())
            .map(|(p, t)| p.distance(*t))
            .collect();

        field.advance(PaletteMode::Rainbow);

        for ((p, t), old) in field.positions().iter().zip(field.targets()).zip(&before) {
            let new = p.distance(*t);
            assert!(new <= *old, "{}: {} > {}", solid, new, old);
            if *old > 1e-3 {
                assert!(new < *old);
            }
        }
    }
}

#[test]
fn test_repeated_advance_converges() {
    let mut field = field(300, 22);
    field.retarget(Solid::Torus);
    for _ in 0..200 {
        field.advance(PaletteMode::Cool);
    }
    assert!(field.is_converged(1e-4), "max distance {}", field.max_distance_to_target());
}

#[test]
fn test_cube_scenario() {
    let mut field = ParticleField::new(100, Solid::Sphere);
    field.retarget(Solid::Cube);
    for _ in 0..50 {
        field.advance(PaletteMode::Rainbow);
    }
    for p in field.positions() {
        let d = distance_to_cube_surface(*p, 1.75);
        assert!(d < 0.1, "{:?} is {} from the cube surface", p, d);
    }
}

#[test]
fn test_retarget_mid_transition() {
    let mut field = field(200, 23);
    field.retarget(Solid::Cube);
    for _ in 0..5 {
        field.advance(PaletteMode::Warm);
    }
    field.retarget(Solid::Pyramid);
    field.retarget(Solid::Sphere);
    assert_eq!(field.count(), 200);
    for _ in 0..200 {
        field.advance(PaletteMode::Warm);
    }
    assert!(field
        .positions()
        .iter()
        .all(|p| (p.length() - 2.5).abs() < 1e-3));
}

#[test]
fn test_timed_steps_converge_like_frames() {
    let config = FieldConfig::new().with_count(50).with_seed(24).with_time_based(true);
    let mut field = ParticleField::from_config(&config, Solid::Sphere).unwrap();
    field.retarget(Solid::Cube);
    // Ten 0.1 s steps cover as much ground as sixty 60 Hz frames.
    for _ in 0..10 {
        field.advance_timed(PaletteMode::Nature, 0.1);
    }
    let timed = field.max_distance_to_target();

    let mut frames = ParticleField::from_config(&config, Solid::Sphere).unwrap();
    frames.retarget(Solid::Cube);
    for _ in 0..60 {
        frames.advance(PaletteMode::Nature);
    }
    assert!((timed - frames.max_distance_to_target()).abs() < 1e-3);
}

// ============================================================================
// Color
// ============================================================================

#[test]
fn test_colors_in_unit_range_after_steps() {
    for mode in PaletteMode::ALL {
        let mut field = field(400, 25);
        field.retarget(Solid::Torus);
        for _ in 0..3 {
            field.advance(mode);
        }
        assert!(field
            .color_data()
            .iter()
            .all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn test_warm_palette_at_origin() {
    let c = base_color(Vec3::ZERO, PaletteMode::Warm);
    assert!((c.x - 1.0).abs() < 1e-6);
    assert!((c.y - 0.75).abs() < 1e-6);
    assert!((c.z - 0.1).abs() < 1e-6);
}

#[test]
fn test_color_tracks_position() {
    let config = FieldConfig::new().with_count(20).with_seed(26).with_jitter(0.0);
    let mut field = ParticleField::from_config(&config, Solid::Sphere).unwrap();
    field.retarget(Solid::Pyramid);
    field.advance(PaletteMode::Nature);
    for (p, c) in field.positions().iter().zip(field.colors()) {
        let expected = PaletteMode::Nature.base_color(*p).clamp(Vec3::ZERO, Vec3::ONE);
        assert!(c.abs_diff_eq(expected, 1e-6));
    }
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn test_cube_samples_on_exactly_one_face() {
    let mut rng = SmallRng::seed_from_u64(27);
    let half = 1.75;
    for _ in 0..10_000 {
        let p = sample_cube(&mut rng, 3.5);
        let on_face = p
            .to_array()
            .iter()
            .filter(|c| c.abs() == half)
            .count();
        // Edge points are measure-zero; a random draw landing on one is a bug.
        assert_eq!(on_face, 1, "{:?}", p);
    }
}

#[test]
fn test_sample_centroids_for_published_shapes() {
    let mut rng = SmallRng::seed_from_u64(28);
    for solid in Solid::ALL {
        let shape = solid.shape();
        let n = 10_000;
        let sum: Vec3 = (0..n).map(|_| shape.sample(&mut rng)).sum();
        let offset = sum / n as f32 - shape.centroid();
        assert!(offset.length() < 0.1, "{}: {:?}", solid, offset);
    }
}

// ============================================================================
// Shell
// ============================================================================

#[test]
fn test_controls_drive_retarget() {
    let mut controls = Controls::default();
    let mut field = field(64, 29);

    if let ControlEvent::SolidChanged(solid) = controls.next_solid() {
        field.retarget(solid);
    }
    assert_eq!(field.solid(), Solid::Cube);
    assert!(field
        .targets()
        .iter()
        .all(|t| t.abs().max_element() > 1.75 - 1e-5));
}

#[test]
fn test_unknown_names_fail_fast() {
    assert!(matches!(
        "dodecahedron".parse::<Solid>(),
        Err(particle_shift::ParseError::UnknownSolid(_))
    ));
    assert!(matches!(
        "sepia".parse::<PaletteMode>(),
        Err(particle_shift::ParseError::UnknownPalette(_))
    ));
}
