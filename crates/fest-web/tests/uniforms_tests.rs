// Host-side tests for GPU packing.
// The web crate is wasm-only, so the wgpu-free module is included directly.

#![allow(dead_code)]
mod uniforms {
    include!("../src/render/uniforms.rs");
}

use fest_core::constants::{AVATAR_START, LIGHT_COUNT};
use fest_core::scene::{Atmosphere, MeshKind, SceneLayout};
use fest_core::{BandEnergy, Camera, ReactiveLightRig, ReactiveParticleField, Reactivity};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uniforms::*;

const EPS: f32 = 1e-5;

#[test]
fn uniform_blocks_keep_their_gpu_sizes() {
    assert_eq!(std::mem::size_of::<SpotPacked>(), 64);
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 512);
    assert_eq!(std::mem::size_of::<InstanceRaw>(), 96);
    assert_eq!(std::mem::size_of::<PointsUniforms>(), 160);
    // WGSL uniform structs are 16-byte aligned
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    assert_eq!(std::mem::size_of::<PointsUniforms>() % 16, 0);
}

#[test]
fn spot_points_at_its_target_with_inner_cone_inside_outer() {
    let rig = ReactiveLightRig::new();
    for light in &rig.lights {
        let s = pack_spot(light);
        let dir = Vec3::new(
            s.direction_cos_outer[0],
            s.direction_cos_outer[1],
            s.direction_cos_outer[2],
        );
        assert!((dir.length() - 1.0).abs() < EPS);
        let expected = (light.target - light.position).normalize();
        assert!((dir - expected).length() < EPS);
        let cos_outer = s.direction_cos_outer[3];
        let cos_inner = s.params[0];
        assert!(cos_inner > cos_outer, "penumbra widens past the inner cone");
        assert_eq!(s.position_range[3], light.range);
        assert_eq!(s.params[1], light.decay);
    }
}

#[test]
fn negative_intensity_is_clamped_when_packed() {
    let mut rig = ReactiveLightRig::new();
    rig.lights[0].intensity = -1.0;
    assert_eq!(pack_spot(&rig.lights[0]).color_intensity[3], 0.0);
}

#[test]
fn scene_packs_every_rig_light() {
    let rig = ReactiveLightRig::new();
    let camera = Camera::default();
    let atmosphere = Atmosphere::default();
    let scene = pack_scene(&camera, &atmosphere, &rig.lights);
    assert_eq!(LIGHT_COUNT, MAX_SPOTS);
    for spot in &scene.spots {
        assert!(spot.color_intensity[3] > 0.0);
    }
    assert_eq!(scene.camera_pos_fog[3], atmosphere.fog_density);
    assert_eq!(scene.sky_color_intensity[3], atmosphere.hemi_intensity);
}

#[test]
fn points_follow_particle_state() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ReactiveParticleField::scatter(8, &mut rng);
    field.update(
        0.0,
        &Reactivity::Active(BandEnergy { low: 0.5, mid: 0.5 }),
    );
    let camera = Camera::default();
    let p = pack_points(&camera, &Atmosphere::default(), &field);
    assert!((p.params[0] - field.point_size).abs() < EPS);
    assert!((p.params[1] - field.scale_y).abs() < EPS);
    // billboard axes are orthonormal
    let right = Vec3::from_slice(&p.camera_right[..3]);
    let up = Vec3::from_slice(&p.camera_up[..3]);
    assert!((right.length() - 1.0).abs() < 1e-4);
    assert!((up.length() - 1.0).abs() < 1e-4);
    assert!(right.dot(up).abs() < 1e-4);
}

#[test]
fn instance_plan_puts_translucent_glow_last() {
    let mut rng = StdRng::seed_from_u64(11);
    let layout = SceneLayout::festival(&mut rng);
    let plan = plan_instances(&layout);

    assert_eq!(plan.instances.len(), layout.objects.len() + 1);
    let last = plan.batches.last().copied().unwrap();
    assert!(last.translucent);
    assert_eq!(last.kind, MeshKind::Cone);
    assert_eq!(last.first + last.count, plan.instances.len() as u32);

    // opaque batches precede every translucent one
    let first_translucent = plan.batches.iter().position(|b| b.translucent).unwrap();
    assert!(plan.batches[first_translucent..].iter().all(|b| b.translucent));

    // batches tile the buffer without gaps
    let mut next = 0;
    for b in &plan.batches {
        assert_eq!(b.first, next);
        next += b.count;
    }
    assert_eq!(next as usize, plan.instances.len());
}

#[test]
fn avatar_slot_starts_at_spawn() {
    let mut rng = StdRng::seed_from_u64(2);
    let layout = SceneLayout::festival(&mut rng);
    let plan = plan_instances(&layout);
    let model = plan.instances[plan.avatar_slot].model;
    let translation = Vec3::new(model[3][0], model[3][1], model[3][2]);
    assert!((translation - Vec3::from(AVATAR_START)).length() < EPS);
    let batch = plan
        .batches
        .iter()
        .find(|b| b.first as usize == plan.avatar_slot)
        .unwrap();
    assert_eq!(batch.kind, MeshKind::Sphere);
    assert_eq!(batch.count, 1);
}
