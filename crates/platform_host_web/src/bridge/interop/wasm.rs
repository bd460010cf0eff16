use std::{cell::RefCell, collections::HashMap};

use js_sys::Promise;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, Response};

use super::*;

thread_local! {
    static AUDIO_ELEMENTS: RefCell<HashMap<String, HtmlAudioElement>> =
        RefCell::new(HashMap::new());
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

pub async fn fetch_manifest(url: &str) -> Result<FetchReply<DirectoryManifest>, String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let value = await_promise(window.fetch_with_str(url)).await?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| "fetch did not resolve to a Response".to_string())?;

    if !response.ok() {
        return Ok(FetchReply::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let body = match response.json() {
        Ok(promise) => await_promise(promise).await,
        Err(err) => Err(js_error_to_string(err)),
    };
    Ok(match body.and_then(|json| from_value(json).map_err(|err| err.to_string())) {
        Ok(manifest) => FetchReply::Body(manifest),
        Err(message) => FetchReply::Undecodable(message),
    })
}

fn audio_element(url: &str) -> Result<HtmlAudioElement, String> {
    AUDIO_ELEMENTS.with(|elements| {
        if let Some(existing) = elements.borrow().get(url) {
            return Ok(existing.clone());
        }
        let element = HtmlAudioElement::new_with_src(url).map_err(js_error_to_string)?;
        elements
            .borrow_mut()
            .insert(url.to_string(), element.clone());
        Ok(element)
    })
}

pub async fn play_audio(url: &str) -> Result<(), String> {
    let element = audio_element(url)?;
    element.set_current_time(0.0);
    let promise = element.play().map_err(js_error_to_string)?;
    await_promise(promise).await.map(|_| ())
}
