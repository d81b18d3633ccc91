//! Conversion of thrown JavaScript values into [`Failure`]s

use gltf_viewer_model::Failure;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

/// Capture the shape of whatever the rendering library threw
///
/// Reads the `message` field, the value's string conversion, and the `src`
/// of `target` when the failure is an image load event.
pub fn failure_from_js(value: &JsValue) -> Failure {
    let (message, image_src) = if value.is_object() {
        (
            property(value, "message").and_then(|m| m.as_string()),
            property(value, "target")
                .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
                .map(|img| img.src()),
        )
    } else {
        (None, None)
    };

    Failure {
        message,
        description: describe(value),
        image_src,
    }
}

fn property(value: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// String conversion of an arbitrary JS value
fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.to_string());
    }
    if value.is_object() {
        return String::from(value.unchecked_ref::<js_sys::Object>().to_string());
    }
    format!("{:?}", value)
}
