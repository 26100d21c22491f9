use std::f32::consts::PI;

// Shared scene/reactive tuning constants used by the core and the web frontend.

// Avatar
pub const AVATAR_SPEED: f32 = 6.0; // world units per second
pub const AVATAR_RADIUS: f32 = 0.6;
pub const AVATAR_START: [f32; 3] = [0.0, 0.6, 3.0];
pub const PLAYFIELD_X: (f32, f32) = (-30.0, 30.0);
pub const PLAYFIELD_Z: (f32, f32) = (-20.0, 20.0);

// Camera follow
pub const CAMERA_FOLLOW_OFFSET: [f32; 3] = [0.0, 6.5, 12.0];
pub const CAMERA_TARGET_OFFSET: [f32; 3] = [0.0, 2.0, 0.0];
pub const CAMERA_LERP_PER_FRAME: f32 = 0.08; // applied once per rendered frame
pub const CAMERA_START_EYE: [f32; 3] = [0.0, 6.0, 16.0];
pub const CAMERA_START_TARGET: [f32; 3] = [0.0, 2.0, 0.0];
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 2000.0;

// Analysis
pub const FFT_SIZE: usize = 256; // yields FFT_SIZE / 2 frequency bins
pub const LOW_BAND: (usize, usize) = (0, 6);
pub const MID_BAND: (usize, usize) = (6, 20);

// Spot light rig
pub const LIGHT_COUNT: usize = 6;
pub const LIGHT_RING_RADIUS: f32 = 8.0;
pub const LIGHT_HEIGHT: f32 = 10.0;
pub const LIGHT_RANGE: f32 = 40.0;
pub const LIGHT_PENUMBRA: f32 = 0.2;
pub const LIGHT_DECAY: f32 = 1.0;
pub const LIGHT_START_INTENSITY: f32 = 2.0;
pub const LIGHT_START_ANGLE: f32 = PI / 8.0;
pub const LIGHT_START_COLOR: u32 = 0x7dd3fc;

pub const ACTIVE_INTENSITY_BASE: f32 = 1.2;
pub const ACTIVE_INTENSITY_LOW_GAIN: f32 = 6.0;
pub const ACTIVE_INTENSITY_SHIMMER: f32 = 0.4;
pub const ACTIVE_ANGLE_BASE: f32 = PI / 16.0;
pub const ACTIVE_ANGLE_MID_GAIN: f32 = 0.06;
pub const ACTIVE_HUE_BASE: f32 = 0.55;
pub const ACTIVE_HUE_SPREAD: f32 = 0.08; // hue step across the whole rig
pub const ACTIVE_SATURATION: f32 = 0.8;
pub const ACTIVE_LIGHTNESS_BASE: f32 = 0.5;
pub const ACTIVE_LIGHTNESS_LOW_GAIN: f32 = 0.25;

pub const IDLE_INTENSITY_BASE: f32 = 0.8;
pub const IDLE_INTENSITY_SHIMMER: f32 = 0.2;

// Particle field
pub const PARTICLE_COUNT: usize = 120;
pub const PARTICLE_START_SIZE: f32 = 0.16;
pub const PARTICLE_SPREAD_X: f32 = 40.0;
pub const PARTICLE_SPREAD_Z: f32 = 30.0;
pub const PARTICLE_CENTER_Z: f32 = -6.0;
pub const PARTICLE_MIN_Y: f32 = 1.0;
pub const PARTICLE_SPAN_Y: f32 = 6.0;

pub const PARTICLE_ACTIVE_SCALE_LOW_GAIN: f32 = 1.8;
pub const PARTICLE_ACTIVE_SIZE_BASE: f32 = 0.06;
pub const PARTICLE_ACTIVE_SIZE_MID_GAIN: f32 = 0.2;
pub const PARTICLE_IDLE_SIZE_BASE: f32 = 0.12;
pub const PARTICLE_IDLE_SIZE_SWING: f32 = 0.06;
pub const PARTICLE_IDLE_RATE: f32 = 2.0; // radians per second

// Stage layout
pub const STAGE_CENTER: [f32; 3] = [0.0, 0.8, -6.0];
pub const STAGE_SIZE: [f32; 3] = [16.0, 1.6, 6.0];
pub const SCREEN_CENTER: [f32; 3] = [0.0, 3.4, -8.2];
pub const SCREEN_SIZE: [f32; 2] = [9.0, 4.0];
pub const FLOOR_SIZE: f32 = 120.0;
pub const GLOW_CENTER: [f32; 3] = [0.0, 6.0, -6.0];
pub const GLOW_RADIUS: f32 = 9.0;
pub const GLOW_HEIGHT: f32 = 18.0;
pub const GLOW_OPACITY: f32 = 0.035;

// Crowd grid: integer x columns, z rows shifted toward the stage.
pub const CROWD_X: (i32, i32, i32) = (-12, 12, 2); // from, to (inclusive), step
pub const CROWD_Z_FROM: f32 = 4.0;
pub const CROWD_Z_TO: f32 = 18.0;
pub const CROWD_Z_STEP: f32 = 2.5;
pub const CROWD_Z_SHIFT: f32 = -6.0;
pub const CROWD_WIDTH: f32 = 0.6;
pub const CROWD_MIN_HEIGHT: f32 = 0.2;
pub const CROWD_HEIGHT_SPAN: f32 = 1.4;
pub const CROWD_JITTER: f32 = 0.4;

// Atmosphere
pub const FOG_COLOR: u32 = 0x050607;
pub const FOG_DENSITY: f32 = 0.02;
pub const HEMI_SKY_COLOR: u32 = 0xffffff;
pub const HEMI_GROUND_COLOR: u32 = 0x222222;
pub const HEMI_INTENSITY: f32 = 0.6;

// Palette
pub const FLOOR_COLOR: u32 = 0x0b1116;
pub const STAGE_COLOR: u32 = 0x111417;
pub const SCREEN_COLOR: u32 = 0x101019;
pub const AVATAR_COLOR: u32 = 0xffb86b;
pub const CROWD_COLOR: u32 = 0x162028;
pub const GLOW_COLOR: u32 = 0x7dd3fc;
