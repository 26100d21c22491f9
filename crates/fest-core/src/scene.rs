//! Static festival layout: floor, stage, screen, crowd and glow.
//!
//! Built once at startup. Only the avatar, lights and particles change per
//! frame and they live in their own modules.

use crate::color::hex_to_linear;
use crate::constants::*;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Cube,
    Sphere,
    Plane,
    Cone,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Linear RGB.
    pub color: Vec3,
    pub opacity: f32,
    pub unlit: bool,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub fn standard(hex: u32, roughness: f32, metalness: f32) -> Self {
        Self {
            color: hex_to_linear(hex),
            opacity: 1.0,
            unlit: false,
            roughness,
            metalness,
        }
    }

    pub fn basic(hex: u32, opacity: f32) -> Self {
        Self {
            color: hex_to_linear(hex),
            opacity,
            unlit: true,
            roughness: 1.0,
            metalness: 0.0,
        }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub kind: MeshKind,
    pub transform: Mat4,
    pub material: Material,
}

#[derive(Clone, Copy, Debug)]
pub struct Atmosphere {
    pub fog_color: Vec3,
    pub fog_density: f32,
    pub sky_color: Vec3,
    pub ground_color: Vec3,
    pub hemi_intensity: f32,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            fog_color: hex_to_linear(FOG_COLOR),
            fog_density: FOG_DENSITY,
            sky_color: hex_to_linear(HEMI_SKY_COLOR),
            ground_color: hex_to_linear(HEMI_GROUND_COLOR),
            hemi_intensity: HEMI_INTENSITY,
        }
    }
}

pub struct SceneLayout {
    pub objects: Vec<SceneObject>,
    pub atmosphere: Atmosphere,
    pub avatar_material: Material,
}

impl SceneLayout {
    pub fn festival<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut objects = Vec::new();

        objects.push(SceneObject {
            kind: MeshKind::Plane,
            transform: Mat4::from_rotation_x(-FRAC_PI_2)
                * Mat4::from_scale(Vec3::new(FLOOR_SIZE, FLOOR_SIZE, 1.0)),
            material: Material::standard(FLOOR_COLOR, 0.9, 0.0),
        });
        objects.push(SceneObject {
            kind: MeshKind::Cube,
            transform: Mat4::from_scale_rotation_translation(
                Vec3::from(STAGE_SIZE),
                Quat::IDENTITY,
                Vec3::from(STAGE_CENTER),
            ),
            material: Material::standard(STAGE_COLOR, 0.2, 0.3),
        });
        objects.push(SceneObject {
            kind: MeshKind::Plane,
            transform: Mat4::from_scale_rotation_translation(
                Vec3::new(SCREEN_SIZE[0], SCREEN_SIZE[1], 1.0),
                Quat::IDENTITY,
                Vec3::from(SCREEN_CENTER),
            ),
            material: Material::basic(SCREEN_COLOR, 1.0),
        });

        let mut x = CROWD_X.0;
        while x <= CROWD_X.1 {
            let mut z = CROWD_Z_FROM;
            while z <= CROWD_Z_TO {
                let h = rng.gen::<f32>() * CROWD_HEIGHT_SPAN + CROWD_MIN_HEIGHT;
                let jitter = (rng.gen::<f32>() - 0.5) * CROWD_JITTER;
                objects.push(SceneObject {
                    kind: MeshKind::Cube,
                    transform: Mat4::from_scale_rotation_translation(
                        Vec3::new(CROWD_WIDTH, h, CROWD_WIDTH),
                        Quat::IDENTITY,
                        Vec3::new(x as f32 + jitter, h / 2.0, z + CROWD_Z_SHIFT),
                    ),
                    material: Material::standard(CROWD_COLOR, 1.0, 0.0),
                });
                z += CROWD_Z_STEP;
            }
            x += CROWD_X.2;
        }

        objects.push(SceneObject {
            kind: MeshKind::Cone,
            transform: Mat4::from_scale_rotation_translation(
                Vec3::new(GLOW_RADIUS, GLOW_HEIGHT, GLOW_RADIUS),
                Quat::IDENTITY,
                Vec3::from(GLOW_CENTER),
            ),
            material: Material::basic(GLOW_COLOR, GLOW_OPACITY),
        });

        Self {
            objects,
            atmosphere: Atmosphere::default(),
            avatar_material: Material::standard(AVATAR_COLOR, 0.6, 0.3),
        }
    }

    /// Transform of the avatar sphere at `position`.
    pub fn avatar_transform(position: Vec3) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(AVATAR_RADIUS), Quat::IDENTITY, position)
    }
}
