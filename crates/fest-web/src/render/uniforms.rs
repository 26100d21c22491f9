// GPU-side layouts for the scene and particle passes, plus the packing from
// core state. Kept free of wgpu so host tests can include it directly.

use fest_core::color::srgb_to_linear;
use fest_core::constants::AVATAR_START;
use fest_core::scene::{Atmosphere, Material, MeshKind, SceneLayout};
use fest_core::{Camera, LightState, ReactiveParticleField};
use glam::{Mat4, Vec3};

pub const MAX_SPOTS: usize = 6;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotPacked {
    pub position_range: [f32; 4],
    pub direction_cos_outer: [f32; 4],
    pub color_intensity: [f32; 4],
    // x = cos of the inner (full-strength) cone, y = decay exponent
    pub params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos_fog: [f32; 4],
    pub fog_color: [f32; 4],
    pub sky_color_intensity: [f32; 4],
    pub ground_color: [f32; 4],
    pub spots: [SpotPacked; MAX_SPOTS],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    // x = unlit flag, y = roughness, z = metalness
    pub material: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointsUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    pub camera_pos_fog: [f32; 4],
    pub fog_color: [f32; 4],
    // x = point size, y = vertical scale, z = opacity
    pub params: [f32; 4],
    pub color: [f32; 4],
}

pub fn pack_spot(light: &LightState) -> SpotPacked {
    let dir = (light.target - light.position).normalize_or_zero();
    let inner = light.angle * (1.0 - light.penumbra);
    let rgb = srgb_to_linear(light.color.to_rgb());
    SpotPacked {
        position_range: [
            light.position.x,
            light.position.y,
            light.position.z,
            light.range,
        ],
        direction_cos_outer: [dir.x, dir.y, dir.z, light.angle.cos()],
        color_intensity: [rgb.x, rgb.y, rgb.z, light.intensity.max(0.0)],
        params: [inner.cos(), light.decay, 0.0, 0.0],
    }
}

pub fn pack_scene(
    camera: &Camera,
    atmosphere: &Atmosphere,
    lights: &[LightState],
) -> SceneUniforms {
    let mut spots = [SpotPacked::default(); MAX_SPOTS];
    for (slot, light) in spots.iter_mut().zip(lights) {
        *slot = pack_spot(light);
    }
    let eye = camera.eye;
    SceneUniforms {
        view_proj: camera.view_projection().to_cols_array_2d(),
        camera_pos_fog: [eye.x, eye.y, eye.z, atmosphere.fog_density],
        fog_color: atmosphere.fog_color.extend(1.0).to_array(),
        sky_color_intensity: atmosphere
            .sky_color
            .extend(atmosphere.hemi_intensity)
            .to_array(),
        ground_color: atmosphere.ground_color.extend(1.0).to_array(),
        spots,
    }
}

pub fn pack_instance(transform: Mat4, material: &Material) -> InstanceRaw {
    InstanceRaw {
        model: transform.to_cols_array_2d(),
        color: material.color.extend(material.opacity).to_array(),
        material: [
            if material.unlit { 1.0 } else { 0.0 },
            material.roughness,
            material.metalness,
            0.0,
        ],
    }
}

pub fn pack_points(
    camera: &Camera,
    atmosphere: &Atmosphere,
    particles: &ReactiveParticleField,
) -> PointsUniforms {
    let view = camera.view_matrix();
    let right: Vec3 = view.row(0).truncate();
    let up: Vec3 = view.row(1).truncate();
    let eye = camera.eye;
    PointsUniforms {
        view_proj: camera.view_projection().to_cols_array_2d(),
        camera_right: right.extend(0.0).to_array(),
        camera_up: up.extend(0.0).to_array(),
        camera_pos_fog: [eye.x, eye.y, eye.z, atmosphere.fog_density],
        fog_color: atmosphere.fog_color.extend(1.0).to_array(),
        params: [particles.point_size.max(0.0), particles.scale_y, 1.0, 0.0],
        color: [1.0, 1.0, 1.0, 1.0],
    }
}

/// A contiguous run of instances drawn with one mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Batch {
    pub kind: MeshKind,
    pub first: u32,
    pub count: u32,
    pub translucent: bool,
}

pub struct InstancePlan {
    pub instances: Vec<InstanceRaw>,
    pub batches: Vec<Batch>,
    /// Index of the avatar instance, rewritten every frame.
    pub avatar_slot: usize,
}

const OPAQUE_ORDER: [MeshKind; 4] = [
    MeshKind::Plane,
    MeshKind::Cube,
    MeshKind::Sphere,
    MeshKind::Cone,
];

/// Lay out the static objects and the avatar in one instance buffer.
///
/// Opaque objects are grouped by mesh; the avatar gets its own batch so its
/// slot is known; translucent objects keep scene order and come last.
pub fn plan_instances(layout: &SceneLayout) -> InstancePlan {
    let mut instances = Vec::with_capacity(layout.objects.len() + 1);
    let mut batches: Vec<Batch> = Vec::new();

    for kind in OPAQUE_ORDER {
        let first = instances.len() as u32;
        instances.extend(
            layout
                .objects
                .iter()
                .filter(|o| o.kind == kind && !o.material.is_transparent())
                .map(|o| pack_instance(o.transform, &o.material)),
        );
        let count = instances.len() as u32 - first;
        if count > 0 {
            batches.push(Batch {
                kind,
                first,
                count,
                translucent: false,
            });
        }
    }

    let avatar_slot = instances.len();
    instances.push(pack_instance(
        SceneLayout::avatar_transform(Vec3::from(AVATAR_START)),
        &layout.avatar_material,
    ));
    batches.push(Batch {
        kind: MeshKind::Sphere,
        first: avatar_slot as u32,
        count: 1,
        translucent: false,
    });

    for o in layout
        .objects
        .iter()
        .filter(|o| o.material.is_transparent())
    {
        let idx = instances.len() as u32;
        instances.push(pack_instance(o.transform, &o.material));
        match batches.last_mut() {
            Some(b) if b.translucent && b.kind == o.kind => b.count += 1,
            _ => batches.push(Batch {
                kind: o.kind,
                first: idx,
                count: 1,
                translucent: true,
            }),
        }
    }

    InstancePlan {
        instances,
        batches,
        avatar_slot,
    }
}
