// Host-side tests for the blob particle: creation, forces, drift bounds.

use ambient_core::surface::{DrawCommand, DrawList, Paint};
use ambient_core::{AttractionTarget, Particle, ParticleParams};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn still_particle(at: Vec2, mass: f32) -> Particle {
    Particle {
        index: 0,
        position: at,
        base_position: at,
        velocity: Vec2::ZERO,
        mass,
        radius: 0.3,
        drift_amplitude: 0.0,
        angular_speed: 0.0005,
        phase_x: 0.0,
        phase_y: 0.0,
        color_index: 0,
    }
}

#[test]
fn apply_force_is_scaled_by_mass() {
    let mut light = still_particle(Vec2::splat(0.5), 1.0);
    light.apply_force(0.03, -0.02);
    assert_eq!(light.velocity, Vec2::new(0.03, -0.02));

    let mut heavy = still_particle(Vec2::splat(0.5), 2.0);
    heavy.apply_force(0.03, -0.02);
    assert_eq!(heavy.velocity, Vec2::new(0.03 / 2.0, -0.02 / 2.0));
}

#[test]
fn apply_force_does_not_move_position() {
    let mut p = still_particle(Vec2::new(0.2, 0.8), 0.7);
    p.apply_force(0.5, 0.5);
    assert_eq!(p.position, Vec2::new(0.2, 0.8));
    assert_eq!(p.base_position, Vec2::new(0.2, 0.8));
}

#[test]
fn create_samples_wash_ranges() {
    let params = ParticleParams::wash();
    let mut rng = StdRng::seed_from_u64(7);
    for i in 0..64 {
        let p = Particle::create(i, &params, &mut rng);
        assert!((0.0..1.0).contains(&p.position.x) && (0.0..1.0).contains(&p.position.y));
        assert_eq!(p.position, p.base_position);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!((0.30..0.55).contains(&p.radius), "radius {}", p.radius);
        assert!((0.0004..0.0006).contains(&p.angular_speed));
        assert!((0.06..0.10).contains(&p.drift_amplitude));
        assert!((0.5..1.0).contains(&p.mass));
        assert!((0.0..=std::f32::consts::TAU).contains(&p.phase_x));
        assert_eq!(p.color_index, i % params.palette.len());
    }
}

#[test]
fn reset_with_same_seed_reproduces_creation() {
    let params = ParticleParams::wash();
    let created = Particle::create(3, &params, &mut StdRng::seed_from_u64(99));

    let mut p = created.clone();
    p.velocity = Vec2::new(0.4, 0.4);
    for t in 0..50 {
        p.update(t, Vec2::new(0.1, 0.9), &params);
    }
    p.reset(&params, &mut StdRng::seed_from_u64(99));
    assert_eq!(p, created);

    // Safe to call repeatedly.
    p.reset(&params, &mut StdRng::seed_from_u64(99));
    assert_eq!(p, created);
}

#[test]
fn anchor_stays_inside_overscan_under_constant_input() {
    for params in [ParticleParams::wash(), ParticleParams::glow()] {
        let (min, max) = params.overscan;
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = Particle::create(0, &params, &mut rng);
        p.apply_force(0.2, -0.15);
        for t in 1..=5_000 {
            p.update(t, Vec2::new(0.5, 0.5), &params);
            assert!(
                (min..=max).contains(&p.base_position.x) && (min..=max).contains(&p.base_position.y),
                "frame {t}: anchor {:?} escaped [{min}, {max}]",
                p.base_position
            );
        }
    }
}

#[test]
fn drift_is_bounded_by_amplitude_sum() {
    for params in [ParticleParams::wash(), ParticleParams::glow()] {
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Particle::create(1, &params, &mut rng);
        let bound = p.drift_amplitude * params.drift_gain() + 1e-5;
        // Pointer far outside the attraction radius.
        let far = Vec2::new(40.0, 40.0);
        for t in 0..20_000 {
            p.update(t, far, &params);
            let d = p.position - p.base_position;
            assert!(d.x.abs() <= bound && d.y.abs() <= bound, "frame {t}: drift {d:?} > {bound}");
        }
    }
}

#[test]
fn wash_drift_matches_single_sine_cosine_pair() {
    let params = ParticleParams::wash();
    let mut p = still_particle(Vec2::splat(0.5), 1.0);
    p.drift_amplitude = 0.08;
    p.phase_x = 0.3;
    p.phase_y = 1.1;
    let t = 1234_u64;
    let off = p.drift_offset(t, params.harmonics);
    let ex = ((t as f64 * 0.0005f32 as f64 + 0.3f32 as f64).sin() as f32) * 0.08;
    let ey = ((t as f64 * 0.0005f32 as f64 * 0.7f32 as f64 + 1.1f32 as f64).cos() as f32) * 0.08;
    assert!((off.x - ex).abs() < 1e-6);
    assert!((off.y - ey).abs() < 1e-6);
}

#[test]
fn anchor_attraction_moves_the_anchor() {
    let params = ParticleParams::wash();
    assert_eq!(params.attraction.target, AttractionTarget::Anchor);
    let mut p = still_particle(Vec2::splat(0.5), 1.0);
    p.update(1, Vec2::new(0.7, 0.5), &params);
    let expected = 0.5 + 0.2 * (0.5 - 0.2) * 0.015;
    assert!((p.base_position.x - expected).abs() < 1e-6);
    assert!((p.base_position.y - 0.5).abs() < 1e-6);
}

#[test]
fn position_attraction_leaves_the_anchor_alone() {
    let params = ParticleParams::glow();
    assert_eq!(params.attraction.target, AttractionTarget::Position);
    let mut p = still_particle(Vec2::splat(0.5), 1.0);
    p.update(1, Vec2::new(0.7, 0.5), &params);
    assert_eq!(p.base_position, Vec2::splat(0.5));
    assert!(p.position.x > 0.5);
}

#[test]
fn attraction_skips_pointer_on_top_and_out_of_range() {
    let params = ParticleParams::wash();
    let mut on_top = still_particle(Vec2::splat(0.5), 1.0);
    on_top.update(1, Vec2::new(0.505, 0.5), &params);
    assert_eq!(on_top.base_position, Vec2::splat(0.5));

    let mut far = still_particle(Vec2::splat(0.2), 1.0);
    far.update(1, Vec2::new(0.9, 0.9), &params);
    assert_eq!(far.base_position, Vec2::splat(0.2));
}

#[test]
fn draw_emits_one_radial_disc() {
    let params = ParticleParams::wash();
    let p = still_particle(Vec2::new(0.25, 0.5), 1.0);
    let mut list = DrawList::new();
    p.draw(&mut list, 800.0, 600.0, &params);
    assert_eq!(list.len(), 1);
    match &list.commands()[0] {
        DrawCommand::FillCircle {
            center,
            radius,
            paint: Paint::Radial { stops, .. },
        } => {
            assert_eq!(*center, Vec2::new(200.0, 300.0));
            assert!((radius - 0.3 * 600.0).abs() < 1e-3);
            let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
            assert_eq!(offsets, vec![0.0, 0.4, 0.7, 1.0]);
            let alphas: Vec<f32> = stops.iter().map(|s| s.color.a).collect();
            assert_eq!(alphas, params.alpha_profile.to_vec());
            assert!(stops.iter().all(|s| s.color.r == params.palette[0].r));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn glow_radius_uses_long_side() {
    let params = ParticleParams::glow();
    let p = still_particle(Vec2::splat(0.5), 1.0);
    let mut list = DrawList::new();
    p.draw(&mut list, 800.0, 600.0, &params);
    match &list.commands()[0] {
        DrawCommand::FillCircle { radius, .. } => assert!((radius - 0.3 * 800.0).abs() < 1e-3),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn presets_validate() {
    assert!(ParticleParams::wash().validate().is_ok());
    assert!(ParticleParams::glow().validate().is_ok());

    let mut bad = ParticleParams::wash();
    bad.friction = 0.9;
    assert!(bad.validate().is_err());

    let mut bad = ParticleParams::wash();
    bad.harmonics = 4;
    assert!(bad.validate().is_err());

    let mut bad = ParticleParams::wash();
    bad.overscan = (0.1, 1.4);
    assert!(bad.validate().is_err());
}
