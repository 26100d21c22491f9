//! Static point cloud whose vertical scale and point size pulse with audio.

use crate::bands::Reactivity;
use crate::constants::*;
use glam::Vec3;
use rand::Rng;

pub struct ReactiveParticleField {
    positions: Vec<Vec3>,
    pub scale_y: f32,
    pub point_size: f32,
}

impl ReactiveParticleField {
    /// Scatter `count` points above the floor, in front of the stage.
    pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_X,
                    rng.gen::<f32>() * PARTICLE_SPAN_Y + PARTICLE_MIN_Y,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_Z + PARTICLE_CENTER_Z,
                )
            })
            .collect();
        Self {
            positions,
            scale_y: 1.0,
            point_size: PARTICLE_START_SIZE,
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn update(&mut self, t: f32, mode: &Reactivity) {
        match mode {
            Reactivity::Active(energy) => {
                self.scale_y = 1.0 + energy.low * PARTICLE_ACTIVE_SCALE_LOW_GAIN;
                self.point_size =
                    PARTICLE_ACTIVE_SIZE_BASE + energy.mid * PARTICLE_ACTIVE_SIZE_MID_GAIN;
            }
            Reactivity::Idle => {
                self.point_size = idle_point_size(t);
            }
        }
    }
}

#[inline]
pub fn idle_point_size(t: f32) -> f32 {
    PARTICLE_IDLE_SIZE_BASE + (t * PARTICLE_IDLE_RATE).sin() * PARTICLE_IDLE_SIZE_SWING
}
