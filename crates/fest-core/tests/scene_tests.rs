// Host-side tests for scene layout, meshes, colors and the song library.

mod common;

use common::approx;
use fest_core::color::{hex_to_linear, hex_to_srgb};
use fest_core::constants::*;
use fest_core::geometry::*;
use fest_core::scene::*;
use fest_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn festival_layout_has_expected_objects() {
    let mut rng = StdRng::seed_from_u64(3);
    let layout = SceneLayout::festival(&mut rng);
    let cubes = layout
        .objects
        .iter()
        .filter(|o| o.kind == MeshKind::Cube)
        .count();
    // stage + 13 x 6 crowd grid
    assert_eq!(cubes, 1 + 13 * 6);
    let planes = layout
        .objects
        .iter()
        .filter(|o| o.kind == MeshKind::Plane)
        .count();
    assert_eq!(planes, 2);
    let glow: Vec<_> = layout
        .objects
        .iter()
        .filter(|o| o.material.is_transparent())
        .collect();
    assert_eq!(glow.len(), 1);
    assert_eq!(glow[0].kind, MeshKind::Cone);
    assert!(glow[0].material.unlit);
}

#[test]
fn crowd_boxes_stand_on_the_floor() {
    let mut rng = StdRng::seed_from_u64(9);
    let layout = SceneLayout::festival(&mut rng);
    let max_height = CROWD_MIN_HEIGHT + CROWD_HEIGHT_SPAN;
    for o in layout.objects.iter().skip(3).filter(|o| o.kind == MeshKind::Cube) {
        let (scale, _, t) = o.transform.to_scale_rotation_translation();
        assert!(approx(scale.x, CROWD_WIDTH));
        assert!(scale.y >= CROWD_MIN_HEIGHT - 1e-5 && scale.y <= max_height + 1e-5);
        assert!(approx(t.y, scale.y / 2.0));
        assert!(t.z >= CROWD_Z_FROM + CROWD_Z_SHIFT - 1e-5);
        assert!(t.z <= CROWD_Z_TO + CROWD_Z_SHIFT + 1e-5);
    }
}

#[test]
fn crowd_grid_follows_layout_constants() {
    let mut rng = StdRng::seed_from_u64(5);
    let layout = SceneLayout::festival(&mut rng);
    let crowd: Vec<_> = layout
        .objects
        .iter()
        .filter(|o| o.kind == MeshKind::Cube)
        .skip(1)
        .map(|o| o.transform.to_scale_rotation_translation().2)
        .collect();
    let columns = ((CROWD_X.1 - CROWD_X.0) / CROWD_X.2 + 1) as usize;
    let rows = ((CROWD_Z_TO - CROWD_Z_FROM) / CROWD_Z_STEP).floor() as usize + 1;
    assert_eq!(crowd.len(), columns * rows);
    let half_jitter = CROWD_JITTER / 2.0 + 1e-5;
    assert!(crowd.iter().all(|t| t.x >= CROWD_X.0 as f32 - half_jitter));
    assert!(crowd.iter().all(|t| t.x <= CROWD_X.1 as f32 + half_jitter));
}

#[test]
fn floor_faces_up() {
    let mut rng = StdRng::seed_from_u64(0);
    let layout = SceneLayout::festival(&mut rng);
    let floor = &layout.objects[0];
    let n = floor.transform.transform_vector3(glam::Vec3::Z).normalize();
    assert!((n - glam::Vec3::Y).length() < 1e-5);
}

#[test]
fn meshes_have_valid_indices_and_unit_normals() {
    for mesh in [
        unit_cube(),
        unit_plane(),
        unit_sphere(16, 12),
        unit_open_cone(32),
    ] {
        assert!(!mesh.indices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
        assert!(mesh
            .indices
            .iter()
            .all(|&i| (i as usize) < mesh.vertices.len()));
        for v in &mesh.vertices {
            let n = glam::Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }
    assert_eq!(unit_cube().vertices.len(), 24);
}

#[test]
fn cube_faces_wind_counter_clockwise_outward() {
    let m = unit_cube();
    for tri in m.indices.chunks(3) {
        let [a, b, c] =
            [tri[0], tri[1], tri[2]].map(|i| glam::Vec3::from(m.vertices[i as usize].position));
        let n = glam::Vec3::from(m.vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn hex_and_hsl_conversions_round_trip_the_rig_color() {
    let rgb = hex_to_srgb(0x7dd3fc);
    let hsl = Hsl::from_rgb(rgb);
    assert!((hsl.h - 0.554).abs() < 0.01);
    let back = hsl.to_rgb();
    assert!((back - rgb).length() < 1e-4);
    assert_eq!(hex_to_linear(0x000000), glam::Vec3::ZERO);
    assert!((hex_to_linear(0xffffff) - glam::Vec3::ONE).length() < 1e-5);
}

#[test]
fn gray_hsl_has_no_saturation() {
    let hsl = Hsl::from_rgb(glam::Vec3::splat(0.5));
    assert_eq!(hsl.s, 0.0);
    assert!((Hsl::new(0.3, 0.0, 0.25).to_rgb() - glam::Vec3::splat(0.25)).length() < 1e-6);
}

#[test]
fn library_starts_with_defaults_and_accepts_uploads() {
    let mut lib = SongLibrary::with_defaults();
    assert_eq!(lib.len(), 1);
    assert_eq!(lib.entries()[0].origin, SongOrigin::Default);
    assert_eq!(lib.entries()[0].origin.label(), "local");
    let idx = lib.add("mix.mp3", "blob:abc", SongOrigin::Uploaded);
    assert_eq!(idx, 1);
    let e = lib.get(idx).expect("entry");
    assert_eq!(e.src, "blob:abc");
    assert_eq!(e.origin.label(), "uploaded");
    assert!(lib.get(5).is_none());
}
