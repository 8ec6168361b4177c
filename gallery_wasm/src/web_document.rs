use chess_gallery::ScrollMetrics;

use crate::rust_error;
use crate::web_error_handling::JsResult;


#[derive(Clone)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn query_selector_existing(&self, selectors: &str) -> JsResult<web_sys::Element> {
        self.0.query_selector(selectors).and_then(|e| {
            e.ok_or_else(|| rust_error!("Cannot find element by selectors \"{}\"", selectors))
        })
    }

    pub fn create_element(&self, local_name: &str) -> JsResult<web_sys::Element> {
        self.0.create_element(local_name)
    }

    // Reads the position from the root element, same as `document.documentElement.scrollTop` etc.
    pub fn scroll_metrics(&self) -> JsResult<ScrollMetrics> {
        let root = self
            .0
            .document_element()
            .ok_or_else(|| rust_error!("Cannot find document element"))?;
        Ok(ScrollMetrics {
            scroll_top: root.scroll_top().into(),
            scroll_height: root.scroll_height().into(),
            client_height: root.client_height().into(),
        })
    }
}

pub fn web_document() -> JsResult<WebDocument> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| rust_error!("Cannot find document"))?;
    Ok(WebDocument(document))
}
