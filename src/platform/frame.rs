//! Display-synchronized frame signal
//!
//! `requestAnimationFrame` wrapped in a promise so the game loop can
//! `.await` the next refresh instead of rescheduling itself from a callback.

use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolve on the next animation frame with its timestamp (ms)
pub async fn next_animation_frame() -> Result<f64, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let mut request_error = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Err(err) = window.request_animation_frame(&resolve) {
            request_error = Some(err);
        }
    });
    if let Some(err) = request_error {
        return Err(err);
    }

    let timestamp = JsFuture::from(promise).await?;
    timestamp
        .as_f64()
        .ok_or_else(|| JsValue::from_str("frame timestamp is not a number"))
}
