use crate::constants::{NOW_PLAYING_ID, PLAY_BUTTON_ID, SONG_LIST_ID, UPLOAD_ID};
use crate::dom;
use crate::frame::SharedScheduler;
use fest_core::{SongEntry, SongLibrary, SongOrigin, UiStatus};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The two text surfaces that mirror the session status.
pub struct StatusView {
    now: web::Element,
    button: web::Element,
}

impl StatusView {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            now: dom::element_by_id(document, NOW_PLAYING_ID)?,
            button: dom::element_by_id(document, PLAY_BUTTON_ID)?,
        })
    }

    pub fn apply(&self, status: &UiStatus) {
        self.now.set_text_content(Some(&status.now));
        self.button.set_text_content(Some(status.button.as_str()));
    }
}

fn song_list(document: &web::Document) -> anyhow::Result<web::Element> {
    dom::element_by_id(document, SONG_LIST_ID)
}

/// Append one clickable `<li>` for `entry`.
///
/// Names come from user files, so they are set as text and never parsed.
pub fn add_song_entry(
    document: &web::Document,
    list: &web::Element,
    entry: &SongEntry,
    scheduler: &SharedScheduler,
) -> anyhow::Result<()> {
    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let li = document.create_element("li").map_err(js)?;
    li.set_attribute("data-src", &entry.src).map_err(js)?;
    let name = document.create_element("span").map_err(js)?;
    name.set_text_content(Some(&entry.name));
    let meta = document.create_element("span").map_err(js)?;
    meta.set_class_name("meta");
    meta.set_text_content(Some(entry.origin.label()));
    li.append_child(&name).map_err(js)?;
    li.append_child(&meta).map_err(js)?;

    let scheduler = scheduler.clone();
    let (src, title) = (entry.src.clone(), entry.name.clone());
    let closure = Closure::wrap(Box::new(move || {
        log::info!("[ui] selected '{}'", title);
        scheduler.borrow_mut().sessions.load_song(&src, &title);
    }) as Box<dyn FnMut()>);
    li.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(js)?;
    closure.forget();

    list.append_child(&li).map_err(js)?;
    Ok(())
}

pub fn populate_songs(
    document: &web::Document,
    library: &Rc<RefCell<SongLibrary>>,
    scheduler: &SharedScheduler,
) -> anyhow::Result<()> {
    let list = song_list(document)?;
    for entry in library.borrow().entries() {
        add_song_entry(document, &list, entry, scheduler)?;
    }
    Ok(())
}

/// Uploaded files join the list and load straight away.
pub fn wire_upload(
    document: &web::Document,
    library: Rc<RefCell<SongLibrary>>,
    scheduler: SharedScheduler,
) -> anyhow::Result<()> {
    let input: web::HtmlInputElement = dom::element_by_id(document, UPLOAD_ID)?;
    let list = song_list(document)?;
    let doc = document.clone();
    let input_cb = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(file) = input_cb.files().and_then(|files| files.get(0)) else {
            return;
        };
        let url = match web::Url::create_object_url_with_blob(&file) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("[ui] object url for '{}' failed: {:?}", file.name(), e);
                return;
            }
        };
        let name = file.name();
        let index = library.borrow_mut().add(&name, &url, SongOrigin::Uploaded);
        if let Some(entry) = library.borrow().get(index) {
            if let Err(e) = add_song_entry(&doc, &list, entry, &scheduler) {
                log::warn!("[ui] could not list '{}': {:?}", name, e);
            }
        }
        scheduler.borrow_mut().sessions.load_song(&url, &name);
        // Picking the same file again should still fire `change`.
        input_cb.set_value("");
    }) as Box<dyn FnMut(_)>);
    input
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

pub fn wire_play_button(document: &web::Document, scheduler: SharedScheduler) {
    dom::add_click_listener(document, PLAY_BUTTON_ID, move || {
        scheduler.borrow_mut().sessions.toggle_play_pause();
    });
}
