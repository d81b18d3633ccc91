//! glTF Viewer web app
//!
//! WASM entry point. Drives the page's JavaScript `Viewer` and `Validator`
//! through [`gltf_viewer_core::AppController`].
//!
//! The page loads the module, waits for `DOMContentLoaded`, then calls
//! `startViewer(document.body)` and keeps the returned `AppContext`.

pub mod app;
pub mod bridge;
pub mod capabilities;
pub mod failure;
pub mod shell;

pub use app::{AppContext, WebController};
pub use failure::failure_from_js;

use gltf_viewer_model::{debug_requested, AppError};
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Module start: panic hook, logging and feature detection
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();

    if let Some(window) = web_sys::window() {
        capabilities::report(&window);
    }
}

/// Log at debug level with `?debug=1`, info otherwise
fn init_logging() {
    let debug = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| debug_requested(&search))
        .unwrap_or(false);
    let level = if debug { log::Level::Debug } else { log::Level::Info };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::debug!("[Viewer] Debug logging enabled via URL");
}

/// Start the viewer inside `root`
///
/// `root` must contain a `.spinner` and a `.dropzone` element.
#[wasm_bindgen(js_name = startViewer)]
pub fn start_viewer(root: Element) -> Result<AppContext, JsValue> {
    let window = web_sys::window().ok_or_else(|| to_js_error(AppError::NoWindow))?;
    let location = window.location();

    let controller = app::mount(&window, &root, &location).map_err(to_js_error)?;
    log::info!("[Viewer] Started; keep the returned AppContext for debugging");

    Ok(AppContext::new(controller))
}

fn to_js_error(error: AppError) -> JsValue {
    log::error!("[Viewer] {}", error);
    js_sys::Error::new(&error.to_string()).into()
}
