// Host-side tests for the reactive light rig and particle field.

mod common;

use common::approx;
use fest_core::constants::*;
use fest_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

#[test]
fn rig_has_six_lights_aimed_at_the_stage() {
    let rig = ReactiveLightRig::new();
    assert_eq!(rig.lights.len(), 6);
    for l in &rig.lights {
        assert!(approx(l.position.y, LIGHT_HEIGHT));
        let ring = glam::Vec2::new(l.position.x, l.position.z - STAGE_CENTER[2]).length();
        assert!((ring - LIGHT_RING_RADIUS).abs() < 1e-4);
        assert_eq!(l.target, glam::Vec3::from(STAGE_CENTER));
        assert!(approx(l.intensity, 2.0));
        assert!(approx(l.angle, PI / 8.0));
    }
}

#[test]
fn idle_intensity_stays_in_shimmer_band() {
    for step in 0..2000 {
        let t = step as f32 * 0.013;
        for i in 0..LIGHT_COUNT {
            let v = idle_intensity(t, i);
            assert!((0.6..=1.0).contains(&v), "t={t} i={i} v={v}");
            assert!(v >= 0.8 - 1e-6);
        }
    }
}

#[test]
fn active_intensity_grows_with_low_energy() {
    for i in 0..LIGHT_COUNT {
        let t = 1.7;
        let mut prev = active_intensity(t, i, 0.0);
        for k in 1..=20 {
            let v = active_intensity(t, i, k as f32 / 20.0);
            assert!(v > prev);
            prev = v;
        }
    }
}

#[test]
fn half_low_at_time_zero_gives_four_point_two() {
    let mut rig = ReactiveLightRig::new();
    rig.update(0.0, &Reactivity::Active(BandEnergy { low: 0.5, mid: 0.2 }));
    assert!((rig.lights[0].intensity - 4.2).abs() < 1e-5);
    assert!((rig.lights[0].angle - (PI / 16.0 + 0.012)).abs() < 1e-6);
    let c = rig.lights[0].color;
    assert!(approx(c.h, 0.55));
    assert!(approx(c.s, 0.8));
    assert!(approx(c.l, 0.625));
}

#[test]
fn active_hue_steps_across_the_rig() {
    let mut rig = ReactiveLightRig::new();
    rig.update(3.0, &Reactivity::Active(BandEnergy { low: 0.0, mid: 0.0 }));
    for (i, l) in rig.lights.iter().enumerate() {
        assert!(approx(l.color.h, 0.55 + i as f32 / 6.0 * 0.08));
        assert!(approx(l.color.l, 0.5));
    }
}

#[test]
fn idle_keeps_last_active_angle_and_color() {
    let mut rig = ReactiveLightRig::new();
    rig.update(1.0, &Reactivity::Active(BandEnergy { low: 0.9, mid: 1.0 }));
    let angles: Vec<f32> = rig.lights.iter().map(|l| l.angle).collect();
    let colors: Vec<Hsl> = rig.lights.iter().map(|l| l.color).collect();
    rig.update(2.0, &Reactivity::Idle);
    for (i, l) in rig.lights.iter().enumerate() {
        assert_eq!(l.angle, angles[i]);
        assert_eq!(l.color, colors[i]);
        assert!(approx(l.intensity, idle_intensity(2.0, i)));
    }
}

#[test]
fn particles_are_scattered_inside_their_volume() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ReactiveParticleField::scatter(PARTICLE_COUNT, &mut rng);
    assert_eq!(field.positions().len(), 120);
    for p in field.positions() {
        assert!(p.x >= -20.0 && p.x <= 20.0);
        assert!(p.y >= 1.0 && p.y <= 7.0);
        assert!(p.z >= -21.0 && p.z <= 9.0);
    }
    assert!(approx(field.scale_y, 1.0));
    assert!(approx(field.point_size, 0.16));
}

#[test]
fn particles_follow_band_energy_when_active() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = ReactiveParticleField::scatter(8, &mut rng);
    let before = field.positions().to_vec();
    field.update(0.5, &Reactivity::Active(BandEnergy { low: 0.5, mid: 0.5 }));
    assert!(approx(field.scale_y, 1.9));
    assert!(approx(field.point_size, 0.16));
    assert_eq!(field.positions(), &before[..]);
}

#[test]
fn idle_particles_oscillate_and_keep_scale() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut field = ReactiveParticleField::scatter(4, &mut rng);
    field.update(0.0, &Reactivity::Active(BandEnergy { low: 1.0, mid: 0.0 }));
    let scale = field.scale_y;
    for step in 0..500 {
        let t = step as f32 * 0.031;
        field.update(t, &Reactivity::Idle);
        assert!(approx(field.point_size, 0.12 + (t * 2.0).sin() * 0.06));
        assert!(field.point_size >= 0.06 - 1e-6 && field.point_size <= 0.18 + 1e-6);
        assert_eq!(field.scale_y, scale);
    }
}
