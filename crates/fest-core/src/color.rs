//! Small color helpers: hex/HSL conversion and sRGB → linear.

use glam::Vec3;

/// Split a `0xRRGGBB` literal into normalized sRGB components.
#[inline]
pub fn hex_to_srgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[inline]
pub fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    Vec3::new(
        srgb_channel_to_linear(c.x),
        srgb_channel_to_linear(c.y),
        srgb_channel_to_linear(c.z),
    )
}

/// Hex literal straight to linear RGB, the space the shaders light in.
#[inline]
pub fn hex_to_linear(hex: u32) -> Vec3 {
    srgb_to_linear(hex_to_srgb(hex))
}

/// HSL triple, all components in \[0, 1\]. Hue wraps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    pub fn from_rgb(rgb: Vec3) -> Self {
        let max = rgb.max_element();
        let min = rgb.min_element();
        let l = (max + min) * 0.5;
        if (max - min).abs() < f32::EPSILON {
            return Self::new(0.0, 0.0, l);
        }
        let d = max - min;
        let s = if l <= 0.5 {
            d / (max + min)
        } else {
            d / (2.0 - max - min)
        };
        let h = if max == rgb.x {
            (rgb.y - rgb.z) / d + if rgb.y < rgb.z { 6.0 } else { 0.0 }
        } else if max == rgb.y {
            (rgb.z - rgb.x) / d + 2.0
        } else {
            (rgb.x - rgb.y) / d + 4.0
        };
        Self::new(h / 6.0, s, l)
    }

    pub fn to_rgb(self) -> Vec3 {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        if s == 0.0 {
            return Vec3::splat(l);
        }
        let q = if l <= 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;
        Vec3::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}
