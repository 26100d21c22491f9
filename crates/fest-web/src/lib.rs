#![cfg(target_arch = "wasm32")]
use fest_core::scene::SceneLayout;
use fest_core::{AnalysisParams, FrameScheduler, SessionManager, SongLibrary, World};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fest-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, constants::CANVAS_ID)?;
    wire_canvas_resize(&canvas);

    let mut rng = StdRng::from_entropy();
    let layout = SceneLayout::festival(&mut rng);
    let world = World::new(&mut rng);
    let particle_positions: Vec<Vec3> = world.particles.positions().to_vec();

    let engine = audio::WebAudioEngine::new()?;
    let sessions = SessionManager::new(engine, AnalysisParams::default());
    let scheduler: frame::SharedScheduler =
        Rc::new(RefCell::new(FrameScheduler::new(world, sessions)));
    let library = Rc::new(RefCell::new(SongLibrary::with_defaults()));

    ui::populate_songs(&document, &library, &scheduler)?;
    ui::wire_upload(&document, library.clone(), scheduler.clone())?;
    ui::wire_play_button(&document, scheduler.clone());
    events::wire_movement_keys(scheduler.clone());
    let status = ui::StatusView::find(&document)?;

    let gpu = frame::init_gpu(&canvas, &layout, &particle_positions).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scheduler,
        canvas,
        status,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
