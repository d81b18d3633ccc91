//! Application setup and the context handed back to the page

use crate::bridge::{JsValidator, WebValidator};
use crate::shell::DomShell;
use gltf_viewer_core::{AppController, ViewOutcome};
use gltf_viewer_model::{AppError, LoadRequest, Locator, Options, ViewerConfig};
use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, Location, Window};

/// Controller wired to the browser
pub type WebController = AppController<DomShell, WebValidator>;

/// Build the controller for `root` and start loading the default asset
///
/// Options come from the location fragment, the debug flag from its query
/// string. Fails if `root` lacks the spinner or the content container.
pub fn mount(window: &Window, root: &Element, location: &Location) -> Result<Rc<WebController>, AppError> {
    let search = location.search().unwrap_or_default();
    let fragment = location
        .hash()
        .map_err(|e| AppError::js(format!("{:?}", e)))?;

    let config = ViewerConfig::from_search(&search);
    let options = Options::from_fragment(&fragment);

    let shell = DomShell::locate(window, root, &config)?;
    let validator = JsValidator::new(root)
        .map(WebValidator::new)
        .map_err(|e| AppError::js(format!("Validator: {:?}", e)))?;

    let controller = Rc::new(AppController::new(options, config, shell, validator));
    spawn_default_load(&controller);
    Ok(controller)
}

fn spawn_default_load(controller: &Rc<WebController>) {
    let controller = Rc::clone(controller);
    spawn_local(async move {
        log_outcome(controller.load_default_asset().await);
    });
}

fn log_outcome(outcome: ViewOutcome<JsValue>) {
    match outcome {
        ViewOutcome::Displayed(_) => log::debug!("[Viewer] Load complete"),
        ViewOutcome::Failed(error) => log::debug!("[Viewer] Load ended with {} error", error.kind()),
        ViewOutcome::Superseded => log::debug!("[Viewer] Load superseded"),
    }
}

/// Handle to the running viewer, returned to the hosting page
///
/// Replaces a global debugging object: the page keeps this value and can
/// inspect or drive the viewer through it.
#[wasm_bindgen]
pub struct AppContext {
    controller: Rc<WebController>,
}

impl AppContext {
    pub fn new(controller: Rc<WebController>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &Rc<WebController> {
        &self.controller
    }
}

#[wasm_bindgen]
impl AppContext {
    /// Options parsed from the URL fragment
    pub fn options(&self) -> Result<JsValue, JsValue> {
        self.controller
            .options()
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(JsValue::from)
    }

    /// Current load state: `idle`, `loading`, `displayed` or `failed`
    pub fn state(&self) -> String {
        self.controller.state().as_str().to_string()
    }

    /// Load the default asset again
    pub fn reload(&self) {
        spawn_default_load(&self.controller);
    }

    /// Display a file the page obtained itself (file picker, drop handler)
    #[wasm_bindgen(js_name = viewFile)]
    pub fn view_file(&self, file: File, root_path: String) {
        let controller = Rc::clone(&self.controller);
        spawn_local(async move {
            let request = LoadRequest::<File>::new(Locator::File(file), root_path);
            let outcome = controller.view_request(request).await;
            log_outcome(outcome);
        });
    }
}
