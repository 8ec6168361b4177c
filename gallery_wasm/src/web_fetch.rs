use async_trait::async_trait;
use chess_gallery::{GalleryConfig, GamesBatch, GamesSource, LoadError, PageKey};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::web_error_handling::js_error_message;


// Requests batches with the browser `fetch` API.
pub struct FetchGamesSource {
    config: GalleryConfig,
}

impl FetchGamesSource {
    pub fn new(config: GalleryConfig) -> Self { FetchGamesSource { config } }
}

fn network_error(err: JsValue) -> LoadError { LoadError::Network(js_error_message(&err)) }

#[async_trait(?Send)]
impl GamesSource for FetchGamesSource {
    async fn fetch_month_games(&self, key: PageKey) -> Result<GamesBatch, LoadError> {
        let url = self.config.monthgames_url(key)?;
        let window =
            web_sys::window().ok_or_else(|| LoadError::Network("No window object".to_owned()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        let request = Request::new_with_str_and_init(url.as_str(), &opts).map_err(network_error)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(|_| LoadError::Network("Response is not a Response object".to_owned()))?;
        if !response.ok() {
            return Err(LoadError::Http { status: response.status() });
        }

        let body = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?
            .as_string()
            .ok_or_else(|| LoadError::Decode("Response body is not a string".to_owned()))?;
        GamesBatch::from_json(&body)
    }
}
