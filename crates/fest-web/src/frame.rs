use crate::audio::WebAudioEngine;
use crate::render;
use crate::ui::StatusView;
use fest_core::scene::SceneLayout;
use fest_core::{FrameScheduler, FrameView, SceneRenderer};
use glam::Vec3;
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedScheduler = Rc<RefCell<FrameScheduler<WebAudioEngine>>>;

/// Stand-in when WebGPU is unavailable; the scene still simulates and the
/// audio UI keeps working.
struct Headless;

impl SceneRenderer for Headless {
    type Error = Infallible;

    fn render(&mut self, _view: &FrameView<'_>) -> Result<(), Infallible> {
        Ok(())
    }
}

pub struct FrameContext {
    pub scheduler: SharedScheduler,
    pub canvas: web::HtmlCanvasElement,
    pub status: StatusView,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let mut scheduler = self.scheduler.borrow_mut();
        scheduler.set_viewport(width, height);
        match self.gpu.as_mut() {
            Some(gpu) => {
                gpu.resize_if_needed(width, height);
                scheduler.frame(gpu);
            }
            None => {
                scheduler.frame(&mut Headless);
            }
        }
        if let Some(status) = scheduler.sessions.take_status_change() {
            self.status.apply(&status);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    layout: &SceneLayout,
    particle_positions: &[Vec3],
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, layout, particle_positions).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
