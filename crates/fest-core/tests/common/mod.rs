// Test doubles for the playback engine, analysis tap and renderer.
#![allow(dead_code)]

use fest_core::*;
use std::cell::RefCell;
use std::rc::Rc;

pub const EPS: f32 = 1e-5;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

pub struct FakeTap {
    pub data: Rc<RefCell<Vec<u8>>>,
}

impl AnalysisTap for FakeTap {
    fn bin_count(&self) -> usize {
        self.data.borrow().len()
    }
    fn read_bytes(&self, out: &mut [u8]) {
        let data = self.data.borrow();
        let n = out.len().min(data.len());
        out[..n].copy_from_slice(&data[..n]);
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FakeHandle(pub SessionId);

pub struct FakeEngine {
    pub ops: Vec<String>,
    pub playing: Vec<SessionId>,
    pub live: Vec<SessionId>,
    pub events: Vec<(SessionId, PlaybackEvent)>,
    pub spectrum: Rc<RefCell<Vec<u8>>>,
    pub fail_tap: bool,
    pub fail_src: Option<String>,
    pub tap_calls: usize,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            playing: Vec::new(),
            live: Vec::new(),
            events: Vec::new(),
            spectrum: Rc::new(RefCell::new(vec![0; 128])),
            fail_tap: false,
            fail_src: None,
            tap_calls: 0,
        }
    }

    pub fn with_spectrum(value: u8) -> Self {
        let e = Self::new();
        e.spectrum.borrow_mut().iter_mut().for_each(|v| *v = value);
        e
    }
}

impl PlaybackEngine for FakeEngine {
    type Handle = FakeHandle;
    type Tap = FakeTap;

    fn load(&mut self, id: SessionId, src: &str) -> Result<FakeHandle, FestError> {
        self.ops.push(format!("load {}", id));
        if self.fail_src.as_deref() == Some(src) {
            return Err(FestError::Load {
                src: src.to_string(),
                reason: "decode error".to_string(),
            });
        }
        self.live.push(id);
        Ok(FakeHandle(id))
    }

    fn play(&mut self, handle: &FakeHandle) {
        self.ops.push(format!("play {}", handle.0));
        if !self.playing.contains(&handle.0) {
            self.playing.push(handle.0);
        }
        self.events.push((handle.0, PlaybackEvent::Played));
    }

    fn pause(&mut self, handle: &FakeHandle) {
        self.ops.push(format!("pause {}", handle.0));
        self.playing.retain(|&id| id != handle.0);
        self.events.push((handle.0, PlaybackEvent::Paused));
    }

    fn stop(&mut self, handle: FakeHandle) {
        self.ops.push(format!("stop {}", handle.0));
        self.playing.retain(|&id| id != handle.0);
        self.live.retain(|&id| id != handle.0);
    }

    fn is_playing(&self, handle: &FakeHandle) -> bool {
        self.playing.contains(&handle.0)
    }

    fn create_tap(&mut self, _params: &AnalysisParams) -> Result<FakeTap, FestError> {
        self.tap_calls += 1;
        if self.fail_tap {
            return Err(FestError::TapUnavailable("no AnalyserNode".to_string()));
        }
        Ok(FakeTap {
            data: self.spectrum.clone(),
        })
    }

    fn poll_events(&mut self, out: &mut Vec<(SessionId, PlaybackEvent)>) {
        out.append(&mut self.events);
    }
}

#[derive(Clone, Debug)]
pub struct Rendered {
    pub time_sec: f32,
    pub mode: Reactivity,
    pub avatar: glam::Vec3,
    pub eye: glam::Vec3,
    pub intensities: Vec<f32>,
    pub angles: Vec<f32>,
    pub point_size: f32,
    pub scale_y: f32,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Rendered>,
    pub fail: bool,
}

impl SceneRenderer for RecordingRenderer {
    type Error = String;

    fn render(&mut self, view: &FrameView<'_>) -> Result<(), String> {
        self.frames.push(Rendered {
            time_sec: view.time_sec,
            mode: view.mode,
            avatar: view.avatar,
            eye: view.camera.eye,
            intensities: view.lights.iter().map(|l| l.intensity).collect(),
            angles: view.lights.iter().map(|l| l.angle).collect(),
            point_size: view.particles.point_size,
            scale_y: view.particles.scale_y,
        });
        if self.fail {
            Err("surface lost".to_string())
        } else {
            Ok(())
        }
    }
}
