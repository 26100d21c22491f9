//! Per-refresh driver: input → avatar → camera → analysis → lights and
//! particles → render.

use crate::avatar::AvatarController;
use crate::bands::{BandRanges, Reactivity};
use crate::camera::{Camera, CameraFollower};
use crate::constants::PARTICLE_COUNT;
use crate::input::InputQueue;
use crate::lights::{LightState, ReactiveLightRig};
use crate::particles::ReactiveParticleField;
use crate::session::{PlaybackEngine, SessionManager};
use glam::Vec3;
use instant::Instant;
use rand::Rng;

/// Everything that moves, owned in one place and advanced by the scheduler.
pub struct World {
    pub avatar: AvatarController,
    pub follower: CameraFollower,
    pub rig: ReactiveLightRig,
    pub particles: ReactiveParticleField,
}

impl World {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            avatar: AvatarController::default(),
            follower: CameraFollower::default(),
            rig: ReactiveLightRig::new(),
            particles: ReactiveParticleField::scatter(PARTICLE_COUNT, rng),
        }
    }

    pub fn view(&self, time_sec: f32, mode: Reactivity) -> FrameView<'_> {
        FrameView {
            time_sec,
            mode,
            camera: &self.follower.camera,
            avatar: self.avatar.position,
            lights: &self.rig.lights,
            particles: &self.particles,
        }
    }
}

/// Read-only snapshot handed to the renderer once per frame.
pub struct FrameView<'a> {
    pub time_sec: f32,
    pub mode: Reactivity,
    pub camera: &'a Camera,
    pub avatar: Vec3,
    pub lights: &'a [LightState],
    pub particles: &'a ReactiveParticleField,
}

/// The rendering engine as seen from the frame loop.
pub trait SceneRenderer {
    type Error: std::fmt::Debug;
    fn render(&mut self, view: &FrameView<'_>) -> Result<(), Self::Error>;
}

/// Wall clock split into frame delta and time since start, in seconds.
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }
}

impl FrameClock {
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        (dt, (now - self.start).as_secs_f32())
    }
}

pub struct FrameScheduler<E: PlaybackEngine> {
    pub world: World,
    pub sessions: SessionManager<E>,
    pub input: InputQueue,
    bands: BandRanges,
    clock: FrameClock,
    frames: u64,
}

impl<E: PlaybackEngine> FrameScheduler<E> {
    pub fn new(world: World, sessions: SessionManager<E>) -> Self {
        let bands = sessions.params().bands.clone();
        Self {
            world,
            sessions,
            input: InputQueue::new(),
            bands,
            clock: FrameClock::default(),
            frames: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.world.follower.camera.set_viewport(width, height);
    }

    /// One display refresh using the wall clock.
    pub fn frame<R: SceneRenderer>(&mut self, renderer: &mut R) -> Reactivity {
        let (dt, t) = self.clock.tick();
        self.advance(dt, t, renderer)
    }

    /// One display refresh with explicit timing.
    ///
    /// Avatar and camera settle before the reactive effects, and all of them
    /// before the render call. Render errors are logged and the loop goes on.
    pub fn advance<R: SceneRenderer>(&mut self, dt: f32, t: f32, renderer: &mut R) -> Reactivity {
        self.sessions.pump();

        let intent = self.input.consume();
        self.world.avatar.step(dt, intent);
        self.world.follower.update(self.world.avatar.position);

        let mode = Reactivity::from_spectrum(self.sessions.current_buffer(), &self.bands);
        self.world.rig.update(t, &mode);
        self.world.particles.update(t, &mode);

        if let Err(e) = renderer.render(&self.world.view(t, mode)) {
            log::error!("[render] frame {} failed: {:?}", self.frames, e);
        }
        self.frames += 1;
        mode
    }
}
