//! DOM side of the viewer: spinner, content container, alerts, object URLs

use crate::bridge::{JsViewer, WebViewer};
use crate::failure::failure_from_js;
use gltf_viewer_model::{AppError, Failure, Options, Shell, ViewerConfig};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, File, HtmlElement, Url, Window};

/// CSS class of the element the viewer renders into
const VIEWER_CLASS: &str = "viewer";

/// Page elements the viewer works with
pub struct DomShell {
    window: Window,
    document: Document,
    spinner: HtmlElement,
    content: Element,
}

impl DomShell {
    /// Find the spinner and content container inside `root`
    ///
    /// Both are required; a page without them cannot host the viewer.
    pub fn locate(window: &Window, root: &Element, config: &ViewerConfig) -> Result<Self, AppError> {
        let document = window.document().ok_or(AppError::NoDocument)?;
        let spinner = find(root, &config.spinner_selector)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| AppError::missing_element(&config.spinner_selector))?;
        let content = find(root, &config.content_selector)?;

        Ok(Self {
            window: window.clone(),
            document,
            spinner,
            content,
        })
    }

    pub fn spinner(&self) -> &HtmlElement {
        &self.spinner
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    /// Replace the content container's children with a fresh viewer element
    fn mount_viewer_element(&self) -> Result<Element, JsValue> {
        let element = self.document.create_element("div")?;
        element.class_list().add_1(VIEWER_CLASS)?;
        self.content.set_inner_html("");
        self.content.append_child(&element)?;
        Ok(element)
    }
}

fn find(root: &Element, selector: &str) -> Result<Element, AppError> {
    root.query_selector(selector)
        .map_err(|e| AppError::js(format!("{:?}", e)))?
        .ok_or_else(|| AppError::missing_element(selector))
}

impl Shell for DomShell {
    type File = File;
    type Viewer = WebViewer;

    fn create_viewer(&self, options: &Options) -> Result<WebViewer, Failure> {
        let element = self
            .mount_viewer_element()
            .map_err(|e| failure_from_js(&e))?;
        let options = options
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| Failure::new(e.to_string()))?;
        let inner = JsViewer::new(&element, &options).map_err(|e| failure_from_js(&e))?;
        Ok(WebViewer::new(inner, element))
    }

    fn create_object_url(&self, file: &File) -> Result<String, Failure> {
        Url::create_object_url_with_blob(file).map_err(|e| failure_from_js(&e))
    }

    fn revoke_object_url(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("[Viewer] Could not revoke {}: {:?}", url, e);
        }
    }

    fn set_spinner_visible(&self, visible: bool) {
        let display = if visible { "" } else { "none" };
        if let Err(e) = self.spinner.style().set_property("display", display) {
            log::warn!("[Viewer] Could not update spinner: {:?}", e);
        }
    }

    fn show_message(&self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            log::warn!("[Viewer] alert() unavailable, message was: {}", message);
        }
    }
}
