//! Configuration supplied by the host page.
//!
//! The page may define a global `DROPZONE_CONFIG` holding either a JSON
//! string or a plain object with [`WidgetConfig`] overrides. Anything
//! missing or invalid falls back to the defaults, with a warning.

use dioxus::logger::tracing::{debug, warn};
use dropzone_core::WidgetConfig;
use wasm_bindgen::JsValue;

/// Name of the global the host page may define.
pub const CONFIG_GLOBAL: &str = "DROPZONE_CONFIG";

/// Read the widget configuration from `window.DROPZONE_CONFIG`.
#[must_use]
pub fn load_config() -> WidgetConfig {
    let Some(json) = read_global_json() else {
        debug!("no {CONFIG_GLOBAL} on window, using default widget configuration");
        return WidgetConfig::default();
    };

    match WidgetConfig::from_json(&json) {
        Ok(config) => {
            debug!(endpoint = %config.endpoint, "loaded widget configuration");
            config
        }
        Err(e) => {
            warn!("ignoring {CONFIG_GLOBAL}: {e}");
            WidgetConfig::default()
        }
    }
}

/// The global as a JSON string, stringifying objects.
fn read_global_json() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(text) = value.as_string() {
        return Some(text);
    }
    js_sys::JSON::stringify(&value).ok()?.as_string()
}
