use crate::model::Viewport;

pub(super) fn measure() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|value| value.as_f64()).map(|value| value as i32)
            };
            return Viewport {
                width: read(window.inner_width()).unwrap_or(Viewport::FALLBACK.width),
                height: read(window.inner_height()).unwrap_or(Viewport::FALLBACK.height),
            };
        }
    }

    Viewport::FALLBACK
}
