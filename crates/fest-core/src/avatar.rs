//! Keyboard-steered avatar clamped to the playfield.

use crate::constants::{AVATAR_SPEED, AVATAR_START, PLAYFIELD_X, PLAYFIELD_Z};
use glam::Vec3;

/// Held-key direction per axis, each in {-1, 0, 1}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: i8,
    pub right: i8,
}

impl MoveIntent {
    pub const fn new(forward: i8, right: i8) -> Self {
        Self {
            forward: forward.signum(),
            right: right.signum(),
        }
    }

    #[inline]
    pub fn is_still(&self) -> bool {
        self.forward == 0 && self.right == 0
    }
}

#[derive(Clone, Debug)]
pub struct AvatarController {
    pub position: Vec3,
    pub speed: f32,
}

impl Default for AvatarController {
    fn default() -> Self {
        Self::at(Vec3::from(AVATAR_START))
    }
}

impl AvatarController {
    pub fn at(position: Vec3) -> Self {
        let mut a = Self {
            position,
            speed: AVATAR_SPEED,
        };
        a.clamp_to_playfield();
        a
    }

    /// Move by `intent` for `dt` seconds; forward is -z, right is +x.
    pub fn step(&mut self, dt: f32, intent: MoveIntent) {
        self.position.x += intent.right as f32 * self.speed * dt;
        self.position.z -= intent.forward as f32 * self.speed * dt;
        self.clamp_to_playfield();
    }

    fn clamp_to_playfield(&mut self) {
        self.position.x = self.position.x.clamp(PLAYFIELD_X.0, PLAYFIELD_X.1);
        self.position.z = self.position.z.clamp(PLAYFIELD_Z.0, PLAYFIELD_Z.1);
    }
}
