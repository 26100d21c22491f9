//! Six stage spot lights driven by band energy or an idle shimmer.

use crate::bands::Reactivity;
use crate::color::{hex_to_srgb, Hsl};
use crate::constants::*;
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct LightState {
    pub position: Vec3,
    pub target: Vec3,
    pub intensity: f32,
    /// Beam half-angle in radians.
    pub angle: f32,
    pub color: Hsl,
    pub penumbra: f32,
    pub range: f32,
    pub decay: f32,
}

pub struct ReactiveLightRig {
    pub lights: Vec<LightState>,
}

impl Default for ReactiveLightRig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactiveLightRig {
    /// Ring of lights above the stage, all aimed at its center.
    pub fn new() -> Self {
        let start_color = Hsl::from_rgb(hex_to_srgb(LIGHT_START_COLOR));
        let target = Vec3::from(STAGE_CENTER);
        let lights = (0..LIGHT_COUNT)
            .map(|i| {
                let a = i as f32 / LIGHT_COUNT as f32 * TAU;
                LightState {
                    position: Vec3::new(
                        a.cos() * LIGHT_RING_RADIUS,
                        LIGHT_HEIGHT,
                        a.sin() * LIGHT_RING_RADIUS + STAGE_CENTER[2],
                    ),
                    target,
                    intensity: LIGHT_START_INTENSITY,
                    angle: LIGHT_START_ANGLE,
                    color: start_color,
                    penumbra: LIGHT_PENUMBRA,
                    range: LIGHT_RANGE,
                    decay: LIGHT_DECAY,
                }
            })
            .collect();
        Self { lights }
    }

    /// Recompute every light for time `t` (seconds).
    ///
    /// Idle only touches intensity; angle and color keep whatever the last
    /// active frame left behind.
    pub fn update(&mut self, t: f32, mode: &Reactivity) {
        for (i, light) in self.lights.iter_mut().enumerate() {
            match mode {
                Reactivity::Active(energy) => {
                    light.intensity = active_intensity(t, i, energy.low);
                    light.angle = active_angle(energy.mid);
                    light.color = active_color(i, energy.low);
                }
                Reactivity::Idle => {
                    light.intensity = idle_intensity(t, i);
                }
            }
        }
    }
}

#[inline]
fn shimmer(t: f32, i: usize) -> f32 {
    (t + i as f32).sin().abs()
}

#[inline]
pub fn active_intensity(t: f32, i: usize, low: f32) -> f32 {
    ACTIVE_INTENSITY_BASE
        + low * ACTIVE_INTENSITY_LOW_GAIN
        + shimmer(t, i) * ACTIVE_INTENSITY_SHIMMER
}

#[inline]
pub fn active_angle(mid: f32) -> f32 {
    ACTIVE_ANGLE_BASE + mid * ACTIVE_ANGLE_MID_GAIN
}

#[inline]
pub fn active_color(i: usize, low: f32) -> Hsl {
    Hsl::new(
        ACTIVE_HUE_BASE + (i as f32 / LIGHT_COUNT as f32) * ACTIVE_HUE_SPREAD,
        ACTIVE_SATURATION,
        ACTIVE_LIGHTNESS_BASE + low * ACTIVE_LIGHTNESS_LOW_GAIN,
    )
}

#[inline]
pub fn idle_intensity(t: f32, i: usize) -> f32 {
    IDLE_INTENSITY_BASE + shimmer(t, i) * IDLE_INTENSITY_SHIMMER
}
