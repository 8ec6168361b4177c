use std::time::Duration;

use async_trait::async_trait;
use chess_gallery::Pause;
use log::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::web_error_handling::js_error_message;


// `setTimeout` as a future.
pub struct TimeoutPause;

#[async_trait(?Send)]
impl Pause for TimeoutPause {
    async fn pause(&self, duration: Duration) {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().is_some_and(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                    .is_ok()
            });
            if !scheduled {
                // No timer: continue right away rather than stall the gallery.
                if let Err(err) = resolve.call0(&JsValue::UNDEFINED) {
                    warn!("Cannot resolve pause: {}", js_error_message(&err));
                }
            }
        });
        if let Err(err) = JsFuture::from(promise).await {
            warn!("Pause interrupted: {}", js_error_message(&err));
        }
    }
}
