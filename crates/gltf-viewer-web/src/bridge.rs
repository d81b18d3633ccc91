//! Bridge to the JavaScript `Viewer` and `Validator`
//!
//! Both classes come from the page's three.js bundle and are expected on the
//! global scope. Failures thrown or rejected by them are captured as
//! [`Failure`]s for the controller to classify.

use crate::failure::failure_from_js;
use futures_util::future::{FutureExt, LocalBoxFuture};
use gltf_viewer_model::{Failure, FileMap, Validator, ViewerHost};
use js_sys::{Map, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, File};

// JavaScript FFI
#[wasm_bindgen]
extern "C" {
    /// Rendering surface mounted on a container element
    #[wasm_bindgen(js_name = Viewer)]
    pub type JsViewer;

    #[wasm_bindgen(constructor, js_class = "Viewer", catch)]
    pub fn new(el: &Element, options: &JsValue) -> Result<JsViewer, JsValue>;

    /// Remove the current model from the scene
    #[wasm_bindgen(method, js_class = "Viewer")]
    pub fn clear(this: &JsViewer);

    /// Load a model; resolves with the parsed glTF
    #[wasm_bindgen(method, js_class = "Viewer", catch)]
    pub fn load(
        this: &JsViewer,
        url: &str,
        root_path: &str,
        file_map: &Map,
    ) -> Result<Promise, JsValue>;

    /// glTF-Validator report panel
    #[wasm_bindgen(js_name = Validator)]
    pub type JsValidator;

    #[wasm_bindgen(constructor, js_class = "Validator", catch)]
    pub fn new(el: &Element) -> Result<JsValidator, JsValue>;

    #[wasm_bindgen(method, js_class = "Validator")]
    pub fn validate(
        this: &JsValidator,
        url: &str,
        root_path: &str,
        file_map: &Map,
        gltf: &JsValue,
    ) -> JsValue;
}

/// Copy a file map into a JS `Map<string, File>`
pub fn to_js_map(resources: &FileMap<File>) -> Map {
    let map = Map::new();
    for (name, file) in resources {
        map.set(&JsValue::from_str(name), file.as_ref());
    }
    map
}

/// [`ViewerHost`] backed by a JS `Viewer` instance
pub struct WebViewer {
    inner: JsViewer,
    element: Element,
}

impl WebViewer {
    pub fn new(inner: JsViewer, element: Element) -> Self {
        Self { inner, element }
    }

    /// Element the viewer renders into
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl ViewerHost for WebViewer {
    type File = File;
    type Scene = JsValue;

    fn clear(&self) {
        self.inner.clear();
    }

    fn load<'a>(
        &'a self,
        url: &'a str,
        base_path: &'a str,
        resources: &'a FileMap<File>,
    ) -> LocalBoxFuture<'a, Result<JsValue, Failure>> {
        let promise = self.inner.load(url, base_path, &to_js_map(resources));
        async move {
            let promise = promise.map_err(|e| failure_from_js(&e))?;
            JsFuture::from(promise)
                .await
                .map_err(|e| failure_from_js(&e))
        }
        .boxed_local()
    }
}

/// [`Validator`] backed by a JS `Validator` instance
pub struct WebValidator {
    inner: JsValidator,
}

impl WebValidator {
    pub fn new(inner: JsValidator) -> Self {
        Self { inner }
    }
}

impl Validator<File, JsValue> for WebValidator {
    fn validate(&self, url: &str, base_path: &str, resources: &FileMap<File>, scene: &JsValue) {
        let result = self
            .inner
            .validate(url, base_path, &to_js_map(resources), scene);

        // The report is shown by the validator; only surface a rejection in the log
        if let Ok(promise) = result.dyn_into::<Promise>() {
            let url = url.to_string();
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!(
                        "[Validator] Validation of {} failed: {}",
                        url,
                        failure_from_js(&e)
                    );
                }
            });
        }
    }
}
