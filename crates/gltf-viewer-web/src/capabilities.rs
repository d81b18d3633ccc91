//! Browser feature detection

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, Window};

/// Globals needed to read dropped or picked files
const FILE_APIS: [&str; 4] = ["File", "FileReader", "FileList", "Blob"];

/// A browser feature the viewer depends on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsupported {
    FileApi,
    WebGl,
}

impl Unsupported {
    pub fn message(&self) -> &'static str {
        match self {
            Unsupported::FileApi => "The File APIs are not fully supported in this browser.",
            Unsupported::WebGl => "WebGL is not supported in this browser.",
        }
    }
}

/// First missing feature, if any
pub fn detect(window: &Window) -> Option<Unsupported> {
    if !has_file_apis(window) {
        Some(Unsupported::FileApi)
    } else if !webgl_available(window) {
        Some(Unsupported::WebGl)
    } else {
        None
    }
}

/// Log a missing feature; startup continues regardless
pub fn report(window: &Window) {
    if let Some(missing) = detect(window) {
        log::error!("{}", missing.message());
    }
}

pub fn has_file_apis(window: &Window) -> bool {
    FILE_APIS
        .iter()
        .all(|name| Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false))
}

/// Whether a throwaway canvas can create a WebGL2 or WebGL context
pub fn webgl_available(window: &Window) -> bool {
    let Some(canvas) = window
        .document()
        .and_then(|d| d.create_element("canvas").ok())
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return false;
    };

    ["webgl2", "webgl"]
        .iter()
        .any(|kind| matches!(canvas.get_context(kind), Ok(Some(_))))
}
