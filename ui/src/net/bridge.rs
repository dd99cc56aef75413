//! Host bridge: the only module that touches the `uproot` global.
//!
//! The host framework exposes `uproot.invoke(method, ...args) -> Promise`,
//! `uproot.onCustomEvent(name, handler)`, `uproot.onReady(callback)` and a
//! `uproot.vars` bag of per-participant page variables. Everything crossing
//! that boundary is JSON; conversion goes through `js_sys::JSON` so the rest
//! of the crate only ever sees `serde_json::Value`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Error crossing the host boundary.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The host rejected the RPC promise.
    #[error("{method} failed: {message}")]
    Rpc {
        /// RPC method name.
        method: &'static str,
        /// Host-provided rejection description.
        message: String,
    },
    /// The host resolved the RPC but the payload did not match the schema.
    #[error("{method} returned an unexpected payload: {message}")]
    Response {
        /// RPC method name.
        method: &'static str,
        /// Underlying decode failure.
        message: String,
    },
    /// A host value could not be converted to or from JSON.
    #[error("host value was not valid JSON: {0}")]
    Json(String),
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = uproot, js_name = invoke)]
    fn host_invoke0(method: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = uproot, js_name = invoke)]
    fn host_invoke1(method: &str, arg: JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = uproot, js_name = onCustomEvent)]
    fn host_on_custom_event(name: &str, handler: &js_sys::Function);

    #[wasm_bindgen(js_namespace = uproot, js_name = onReady)]
    fn host_on_ready(callback: &js_sys::Function);
}

/// Call a host RPC method that takes no argument.
///
/// # Errors
///
/// Returns [`BridgeError::Rpc`] when the host rejects and
/// [`BridgeError::Json`] when the resolved value is not JSON.
pub async fn invoke(method: &'static str) -> Result<Value, BridgeError> {
    settle(method, host_invoke0(method)).await
}

/// Call a host RPC method with one JSON argument.
///
/// # Errors
///
/// As [`invoke`], plus [`BridgeError::Json`] when the argument cannot be
/// handed to the host.
pub async fn invoke_with(method: &'static str, arg: &Value) -> Result<Value, BridgeError> {
    let encoded = json_to_js(arg)?;
    settle(method, host_invoke1(method, encoded)).await
}

async fn settle(method: &'static str, promise: js_sys::Promise) -> Result<Value, BridgeError> {
    let resolved = JsFuture::from(promise)
        .await
        .map_err(|rejection| BridgeError::Rpc { method, message: describe(&rejection) })?;
    js_to_json(&resolved)
}

/// Subscribe to a host custom event; the handler receives the JSON payload
/// under `event.detail.data`.
///
/// The subscription lives for the rest of the page; the closure is leaked
/// on purpose.
pub fn on_custom_event(name: &str, mut handler: impl FnMut(Value) + 'static) {
    let event_name = name.to_owned();
    let closure = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(move |event: web_sys::CustomEvent| {
        let data = js_sys::Reflect::get(&event.detail(), &JsValue::from_str("data"))
            .unwrap_or(JsValue::UNDEFINED);
        match js_to_json(&data) {
            Ok(value) => handler(value),
            Err(err) => leptos::logging::warn!("dropping malformed {event_name} event: {err}"),
        }
    });
    host_on_custom_event(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run a callback once the host page is fully initialized. RPC must not be
/// issued before this fires.
pub fn on_ready(callback: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(callback);
    host_on_ready(closure.unchecked_ref());
}

/// Read a typed page variable from `uproot.vars`.
///
/// Returns `None` when the host or the variable is absent, or when the value
/// does not deserialize as `T`.
#[must_use]
pub fn page_var<T: DeserializeOwned>(name: &str) -> Option<T> {
    let host = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("uproot")).ok()?;
    let vars = js_sys::Reflect::get(&host, &JsValue::from_str("vars")).ok()?;
    let raw = js_sys::Reflect::get(&vars, &JsValue::from_str(name)).ok()?;
    let json = js_to_json(&raw).ok()?;
    serde_json::from_value(json).ok()
}

fn json_to_js(value: &Value) -> Result<JsValue, BridgeError> {
    js_sys::JSON::parse(&value.to_string()).map_err(|err| BridgeError::Json(describe(&err)))
}

fn js_to_json(value: &JsValue) -> Result<Value, BridgeError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    let text = js_sys::JSON::stringify(value)
        .map(String::from)
        .map_err(|err| BridgeError::Json(describe(&err)))?;
    serde_json::from_str(&text).map_err(|err| BridgeError::Json(err.to_string()))
}

/// Best-effort human-readable form of an arbitrary JS error value.
fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
