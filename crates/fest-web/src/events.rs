use crate::frame::SharedScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Movement keys are queued here and folded into the avatar intent once per
/// frame by the scheduler.
pub fn wire_movement_keys(scheduler: SharedScheduler) {
    let Some(window) = web::window() else {
        return;
    };

    let sched_down = scheduler.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let mut sched = sched_down.borrow_mut();
        if sched.input.key_down(&ev.key(), ev.repeat()) {
            // Arrow keys would otherwise scroll the page.
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let sched_up = scheduler.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        sched_up.borrow_mut().input.key_up(&ev.key());
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // Key-ups are lost while the window is unfocused.
    let blur = Closure::wrap(Box::new(move || {
        scheduler.borrow_mut().input.release_all();
        log::debug!("[keys] window blurred, movement released");
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
