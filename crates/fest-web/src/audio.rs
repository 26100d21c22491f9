//! WebAudio playback: one `<audio>` element per session, all routed through a
//! shared master gain that the analyser taps.

use crate::constants::MASTER_GAIN;
use fest_core::{AnalysisParams, AnalysisTap, FestError, PlaybackEngine, PlaybackEvent, SessionId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type EventQueue = Rc<RefCell<Vec<(SessionId, PlaybackEvent)>>>;

// Element events forwarded to the session manager.
const FORWARDED: [(&str, PlaybackEvent); 4] = [
    ("play", PlaybackEvent::Played),
    ("pause", PlaybackEvent::Paused),
    ("ended", PlaybackEvent::Ended),
    ("error", PlaybackEvent::Stalled),
];

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(anyhow::anyhow!("{} GainNode error", label))
        }
    }
}

pub struct WebAudioEngine {
    ctx: web::AudioContext,
    master: web::GainNode,
    events: EventQueue,
}

impl WebAudioEngine {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = create_gain(&ctx, MASTER_GAIN, "Master")?;
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("master -> destination: {:?}", e))?;
        Ok(Self {
            ctx,
            master,
            events: Rc::new(RefCell::new(Vec::new())),
        })
    }
}

pub struct AudioHandle {
    id: SessionId,
    element: web::HtmlAudioElement,
    source: web::MediaElementAudioSourceNode,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

impl PlaybackEngine for WebAudioEngine {
    type Handle = AudioHandle;
    type Tap = WebTap;

    fn load(&mut self, id: SessionId, src: &str) -> Result<AudioHandle, FestError> {
        let load_err = |e: wasm_bindgen::JsValue| FestError::Load {
            src: src.to_string(),
            reason: format!("{:?}", e),
        };
        let element = web::HtmlAudioElement::new_with_src(src).map_err(load_err)?;
        element.set_preload("auto");
        let source = self
            .ctx
            .create_media_element_source(&element)
            .map_err(load_err)?;
        source
            .connect_with_audio_node(&self.master)
            .map_err(load_err)?;

        let mut listeners = Vec::with_capacity(FORWARDED.len());
        for (name, event) in FORWARDED {
            let queue = self.events.clone();
            let closure = Closure::wrap(Box::new(move || {
                queue.borrow_mut().push((id, event));
            }) as Box<dyn FnMut()>);
            element
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
                .map_err(load_err)?;
            listeners.push((name, closure));
        }
        Ok(AudioHandle {
            id,
            element,
            source,
            listeners,
        })
    }

    fn play(&mut self, handle: &AudioHandle) {
        // Contexts start suspended until a user gesture; play is always one.
        _ = self.ctx.resume();
        let promise: js_sys::Promise = match handle.element.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[session] play() threw: {:?}", e);
                return;
            }
        };
        let queue = self.events.clone();
        let id = handle.id;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[session] play() rejected: {:?}", e);
                queue.borrow_mut().push((id, PlaybackEvent::Stalled));
            }
        });
    }

    fn pause(&mut self, handle: &AudioHandle) {
        _ = handle.element.pause();
    }

    fn stop(&mut self, handle: AudioHandle) {
        let AudioHandle {
            id,
            element,
            source,
            listeners,
        } = handle;
        for (name, closure) in &listeners {
            _ = element.remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        log::debug!("[session] released element for #{}", id);
        _ = element.pause();
        element.set_current_time(0.0);
        _ = source.disconnect();
        _ = element.remove_attribute("src");
        element.load();
    }

    fn is_playing(&self, handle: &AudioHandle) -> bool {
        !handle.element.paused() && !handle.element.ended()
    }

    fn create_tap(&mut self, params: &AnalysisParams) -> Result<WebTap, FestError> {
        let unavailable = |e: wasm_bindgen::JsValue| FestError::TapUnavailable(format!("{:?}", e));
        let analyser = web::AnalyserNode::new(&self.ctx).map_err(unavailable)?;
        analyser.set_fft_size(params.fft_size as u32);
        self.master
            .connect_with_audio_node(&analyser)
            .map_err(unavailable)?;
        log::info!(
            "[analyser] fft={} bins={}",
            params.fft_size,
            analyser.frequency_bin_count()
        );
        Ok(WebTap { analyser })
    }

    fn poll_events(&mut self, out: &mut Vec<(SessionId, PlaybackEvent)>) {
        out.append(&mut self.events.borrow_mut());
    }
}

pub struct WebTap {
    analyser: web::AnalyserNode,
}

impl AnalysisTap for WebTap {
    fn bin_count(&self) -> usize {
        self.analyser.frequency_bin_count() as usize
    }

    fn read_bytes(&self, out: &mut [u8]) {
        self.analyser.get_byte_frequency_data(out);
    }
}
