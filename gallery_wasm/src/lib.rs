// Browser front-end for the games gallery: loads older months as the user scrolls down.
//
// Expected page layout (selectors are configurable, see `GalleryConfig`):
//   - `.monthGames` receives one new child per loaded month;
//   - `.loader` gets the `show` class while a request is in flight;
//   - a global `renderBoard(element, fen)` function draws a board.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate console_error_panic_hook;
extern crate wasm_bindgen;

extern crate chess_gallery;

pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;
pub mod web_fetch;
pub mod web_gallery;
pub mod web_pause;

use std::rc::Rc;

use chess_gallery::{GalleryConfig, PageKey, PaginatedLoader};
use log::info;
use wasm_bindgen::prelude::*;

use crate::web_document::{WebDocument, web_document};
use crate::web_element_ext::WebEventTargetExt;
use crate::web_error_handling::{JsResult, set_panic_hook};
use crate::web_fetch::FetchGamesSource;
use crate::web_gallery::WebGalleryView;
use crate::web_pause::TimeoutPause;


type WebLoader = PaginatedLoader<FetchGamesSource, WebGalleryView, TimeoutPause>;

// Entry point. `config_json` is a JSON-serialized `GalleryConfig`; missing fields (or a missing
// config altogether) take default values.
#[wasm_bindgen]
pub fn start_gallery(config_json: Option<String>) -> JsResult<()> {
    set_panic_hook();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let config = match config_json {
        Some(json) => GalleryConfig::from_json(&json)
            .map_err(|err| rust_error!("Invalid gallery config: {}", err))?,
        None => GalleryConfig::default(),
    };
    let document = web_document()?;
    let view = WebGalleryView::new(document.clone(), &config)?;
    let first_key = PageKey::current_month();
    info!("Starting games gallery at {first_key}");
    let loader = Rc::new(PaginatedLoader::new(
        FetchGamesSource::new(config.clone()),
        view,
        TimeoutPause,
        config,
        first_key,
    ));

    install_scroll_listener(Rc::clone(&loader), document)?;
    if let Some(key) = loader.start() {
        spawn_load(loader, key);
    }
    Ok(())
}

fn spawn_load(loader: Rc<WebLoader>, key: PageKey) {
    wasm_bindgen_futures::spawn_local(async move {
        loader.load_month_games(key).await;
    });
}

fn install_scroll_listener(loader: Rc<WebLoader>, document: WebDocument) -> JsResult<()> {
    let window = web_sys::window().ok_or_else(|| rust_error!("Cannot find window"))?;
    window.add_passive_event_listener_and_forget("scroll", move |_: web_sys::Event| {
        let metrics = document.scroll_metrics()?;
        if let Some(key) = loader.on_scroll(metrics) {
            spawn_load(Rc::clone(&loader), key);
        }
        Ok(())
    })
}
