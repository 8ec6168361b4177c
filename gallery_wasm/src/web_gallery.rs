use chess_gallery::batch::board_selector;
use chess_gallery::{GalleryConfig, GalleryView, GameBoard, ViewResult};
use wasm_bindgen::prelude::*;

use crate::web_document::WebDocument;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::{JsResult, js_error_message};


// Board widget provided by the page. Draws the position given as FEN inside `element`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = renderBoard, catch)]
    fn render_board_js(element: &web_sys::Element, fen: &str) -> Result<(), JsValue>;
}

pub struct WebGalleryView {
    document: WebDocument,
    gallery: web_sys::Element,
    loader: web_sys::Element,
    loader_visible_class: String,
    fragment_tag: String,
    fragment_class: String,
    board_selector_prefix: String,
}

impl WebGalleryView {
    pub fn new(document: WebDocument, config: &GalleryConfig) -> JsResult<Self> {
        let gallery = document.query_selector_existing(&config.gallery_selector)?;
        let loader = document.query_selector_existing(&config.loader_selector)?;
        Ok(WebGalleryView {
            document,
            gallery,
            loader,
            loader_visible_class: config.loader_visible_class.clone(),
            fragment_tag: config.fragment_tag.clone(),
            fragment_class: config.fragment_class.clone(),
            board_selector_prefix: config.board_selector_prefix.clone(),
        })
    }

    fn set_loader_visible(&self, visible: bool) -> ViewResult {
        self.loader
            .set_class_present(&self.loader_visible_class, visible)
            .map_err(|err| js_error_message(&err))
    }

    fn try_append_fragment(&self, html: &str) -> JsResult<()> {
        let fragment = self
            .document
            .create_element(&self.fragment_tag)?
            .with_classes([self.fragment_class.as_str()])?;
        fragment.set_inner_html(html);
        self.gallery.append_element(fragment)
    }

    fn try_render_board(&self, game: &GameBoard) -> JsResult<()> {
        let selector = board_selector(&self.board_selector_prefix, &game.chess_game_id);
        let placeholder = self.document.query_selector_existing(&selector)?;
        render_board_js(&placeholder, &game.fen)
    }
}

impl GalleryView for WebGalleryView {
    fn show_loader(&self) -> ViewResult { self.set_loader_visible(true) }
    fn hide_loader(&self) -> ViewResult { self.set_loader_visible(false) }

    fn append_fragment(&self, html: &str) -> ViewResult {
        self.try_append_fragment(html).map_err(|err| js_error_message(&err))
    }

    fn render_board(&self, game: &GameBoard) -> ViewResult {
        self.try_render_board(game).map_err(|err| js_error_message(&err))
    }
}
