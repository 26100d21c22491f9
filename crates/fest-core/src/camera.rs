//! Perspective camera and the lagging third-person follow.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_START_EYE),
            target: Vec3::from(CAMERA_START_TARGET),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Viewport changed; zero-sized viewports are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Moves the camera a fixed fraction toward its goal each rendered frame.
///
/// The factor is per frame, not per second, so the lag depends on the
/// display refresh rate.
#[derive(Clone, Debug)]
pub struct CameraFollower {
    pub camera: Camera,
    pub factor: f32,
}

impl Default for CameraFollower {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            factor: CAMERA_LERP_PER_FRAME,
        }
    }
}

impl CameraFollower {
    #[inline]
    pub fn goal_eye(avatar: Vec3) -> Vec3 {
        avatar + Vec3::from(CAMERA_FOLLOW_OFFSET)
    }

    #[inline]
    pub fn goal_target(avatar: Vec3) -> Vec3 {
        avatar + Vec3::from(CAMERA_TARGET_OFFSET)
    }

    pub fn update(&mut self, avatar: Vec3) {
        let f = self.factor;
        self.camera.eye = self.camera.eye.lerp(Self::goal_eye(avatar), f);
        self.camera.target = self.camera.target.lerp(Self::goal_target(avatar), f);
    }
}
