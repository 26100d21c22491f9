//! Track selection and playback lifecycle.
//!
//! `SessionManager` owns the playback engine, the single current session and
//! the lazily created analysis tap. Loading a track always stops and discards
//! the previous one first, so at most one session is ever audible.

use crate::analyzer::{AnalysisTap, FrequencyAnalyzer};
use crate::bands::AnalysisParams;
use crate::error::FestError;

pub type SessionId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    Loaded,
    Playing,
    Paused,
    Ended,
    Stalled,
}

/// Asynchronous notifications from the playback engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    Played,
    Paused,
    Ended,
    Stalled,
}

/// The audio playback engine the core drives.
///
/// Implementations own decoding and output; the core only starts, pauses and
/// stops handles, asks whether one is audible, and taps the shared mix.
pub trait PlaybackEngine {
    type Handle;
    type Tap: AnalysisTap;

    fn load(&mut self, id: SessionId, src: &str) -> Result<Self::Handle, FestError>;
    fn play(&mut self, handle: &Self::Handle);
    fn pause(&mut self, handle: &Self::Handle);
    /// Stop and release the handle; it is never used again.
    fn stop(&mut self, handle: Self::Handle);
    fn is_playing(&self, handle: &Self::Handle) -> bool;
    /// Attach an analysis tap to the shared output mix.
    fn create_tap(&mut self, params: &AnalysisParams) -> Result<Self::Tap, FestError>;
    /// Move queued events into `out`.
    fn poll_events(&mut self, out: &mut Vec<(SessionId, PlaybackEvent)>);
}

pub struct PlaybackSession<H> {
    pub id: SessionId,
    pub name: String,
    pub src: String,
    pub status: PlaybackStatus,
    handle: H,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayLabel {
    Play,
    Pause,
}

impl PlayLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayLabel::Play => "play",
            PlayLabel::Pause => "pause",
        }
    }
}

/// Text shown next to the song list and on the play/pause button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiStatus {
    pub now: String,
    pub button: PlayLabel,
}

impl Default for UiStatus {
    fn default() -> Self {
        Self {
            now: "no song loaded".to_string(),
            button: PlayLabel::Play,
        }
    }
}

pub struct SessionManager<E: PlaybackEngine> {
    engine: E,
    current: Option<PlaybackSession<E::Handle>>,
    analyzer: FrequencyAnalyzer<E::Tap>,
    params: AnalysisParams,
    next_id: SessionId,
    status: UiStatus,
    status_dirty: bool,
    scratch: Vec<(SessionId, PlaybackEvent)>,
}

impl<E: PlaybackEngine> SessionManager<E> {
    pub fn new(engine: E, params: AnalysisParams) -> Self {
        Self {
            engine,
            current: None,
            analyzer: FrequencyAnalyzer::new(),
            params,
            next_id: 1,
            status: UiStatus::default(),
            status_dirty: true,
            scratch: Vec::new(),
        }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn current(&self) -> Option<&PlaybackSession<E::Handle>> {
        self.current.as_ref()
    }

    pub fn analyzer(&self) -> &FrequencyAnalyzer<E::Tap> {
        &self.analyzer
    }

    /// Replace the current track. Never autoplays.
    pub fn load_song(&mut self, src: &str, name: &str) {
        self.stop_current();
        self.set_status(format!("loading: {}", name), PlayLabel::Play);
        let id = self.next_id;
        self.next_id += 1;
        match self.engine.load(id, src) {
            Ok(handle) => {
                self.current = Some(PlaybackSession {
                    id,
                    name: name.to_string(),
                    src: src.to_string(),
                    status: PlaybackStatus::Loaded,
                    handle,
                });
                let params = &self.params;
                let engine = &mut self.engine;
                self.analyzer.ensure_tap(|| engine.create_tap(params));
                log::info!("[session] loaded #{} '{}'", id, name);
                self.set_status(format!("loaded: {} — press play", name), PlayLabel::Play);
            }
            Err(e) => {
                log::warn!("[session] {}", e);
                self.set_status(format!("stalled: {}", name), PlayLabel::Play);
            }
        }
    }

    pub fn toggle_play_pause(&mut self) {
        let Some(session) = self.current.as_mut() else {
            return;
        };
        if self.engine.is_playing(&session.handle) {
            self.engine.pause(&session.handle);
            session.status = PlaybackStatus::Paused;
            let now = self.status.now.clone();
            self.set_status(now, PlayLabel::Play);
        } else {
            self.engine.play(&session.handle);
            let now = self.status.now.clone();
            self.set_status(now, PlayLabel::Pause);
        }
    }

    /// Stop and discard the current session, if any.
    pub fn stop_current(&mut self) {
        if let Some(session) = self.current.take() {
            log::info!("[session] stopping #{} '{}'", session.id, session.name);
            self.engine.stop(session.handle);
        }
        self.set_status("no song loaded".to_string(), PlayLabel::Play);
    }

    pub fn is_playing(&self) -> bool {
        self.current
            .as_ref()
            .map(|s| self.engine.is_playing(&s.handle))
            .unwrap_or(false)
    }

    /// Latest spectrum of the playing session, empty otherwise.
    pub fn current_buffer(&mut self) -> &[u8] {
        let playing = self.is_playing();
        self.analyzer.current_buffer(playing)
    }

    /// Apply engine events; those for discarded sessions are ignored.
    pub fn pump(&mut self) {
        let mut events = std::mem::take(&mut self.scratch);
        self.engine.poll_events(&mut events);
        for (id, ev) in events.drain(..) {
            let Some(session) = self.current.as_mut() else {
                continue;
            };
            if session.id != id {
                log::debug!("[session] dropping {:?} for stale #{}", ev, id);
                continue;
            }
            let name = session.name.clone();
            match ev {
                PlaybackEvent::Played => {
                    session.status = PlaybackStatus::Playing;
                    self.set_status(format!("playing: {}", name), PlayLabel::Pause);
                }
                PlaybackEvent::Paused => {
                    session.status = PlaybackStatus::Paused;
                    let now = self.status.now.clone();
                    self.set_status(now, PlayLabel::Play);
                }
                PlaybackEvent::Ended => {
                    session.status = PlaybackStatus::Ended;
                    self.set_status(format!("ended: {}", name), PlayLabel::Play);
                }
                PlaybackEvent::Stalled => {
                    session.status = PlaybackStatus::Stalled;
                    log::warn!("[session] playback stalled for '{}'", name);
                    self.set_status(format!("stalled: {}", name), PlayLabel::Play);
                }
            }
        }
        self.scratch = events;
    }

    pub fn status(&self) -> &UiStatus {
        &self.status
    }

    /// The status, once per change.
    pub fn take_status_change(&mut self) -> Option<UiStatus> {
        if self.status_dirty {
            self.status_dirty = false;
            Some(self.status.clone())
        } else {
            None
        }
    }

    fn set_status(&mut self, now: String, button: PlayLabel) {
        if self.status.now != now || self.status.button != button {
            self.status = UiStatus { now, button };
            self.status_dirty = true;
        }
    }
}
