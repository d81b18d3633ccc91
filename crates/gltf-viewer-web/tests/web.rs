//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use gltf_viewer_model::{AppError, Shell, ViewError, ViewerConfig};
use gltf_viewer_web::app::mount;
use gltf_viewer_web::shell::DomShell;
use gltf_viewer_web::{failure_from_js, AppContext};
use js_sys::{Array, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

// Stand-ins for the page's three.js bundle
#[wasm_bindgen(inline_js = "
export function install_viewer_stubs() {
    globalThis.__validated = [];
    globalThis.Viewer = class {
        constructor(el, options) { this.el = el; this.options = options; }
        clear() {}
        load(url, rootPath, fileMap) { return Promise.resolve({ url }); }
    };
    globalThis.Validator = class {
        constructor(el) { this.el = el; }
        validate(url, rootPath, fileMap, gltf) { globalThis.__validated.push(url); }
    };
}
")]
extern "C" {
    fn install_viewer_stubs();
}

fn validated_urls() -> Vec<String> {
    let list = Reflect::get(&js_sys::global(), &"__validated".into()).unwrap();
    Array::from(&list)
        .iter()
        .filter_map(|url| url.as_string())
        .collect()
}

/// Yield to a timer task so pending microtasks run
async fn next_tick() {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Tick until the context leaves the loading state
async fn settle(context: &AppContext) -> String {
    for _ in 0..20 {
        next_tick().await;
        let state = context.state();
        if state != "loading" {
            return state;
        }
    }
    context.state()
}

fn spinner_display(root: &Element) -> String {
    root.query_selector(".spinner")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn mounted() -> (Element, AppContext) {
    install_viewer_stubs();
    let window = web_sys::window().unwrap();
    let root = root_with(r#"<div class="spinner"></div><div class="dropzone"></div>"#);
    let controller = mount(&window, &root, &window.location()).unwrap();
    (root, AppContext::new(controller))
}

fn root_with(html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    root
}

#[wasm_bindgen_test]
fn error_object_message_is_captured() {
    let error: JsValue = js_sys::Error::new("Unexpected token } in JSON").into();
    let failure = failure_from_js(&error);

    assert_eq!(failure.message.as_deref(), Some("Unexpected token } in JSON"));
    assert!(matches!(ViewError::classify(&failure), ViewError::Parse { .. }));
}

#[wasm_bindgen_test]
fn thrown_string_uses_string_conversion() {
    let failure = failure_from_js(&JsValue::from_str("custom failure"));

    assert_eq!(failure.message, None);
    assert_eq!(ViewError::classify(&failure).to_string(), "custom failure");
}

#[wasm_bindgen_test]
fn image_event_is_missing_texture() {
    let image = HtmlImageElement::new().unwrap();
    image.set_src("http://x/y/tex.png");
    let event = Object::new();
    Reflect::set(&event, &"target".into(), &image).unwrap();

    let failure = failure_from_js(&event.into());

    assert_eq!(
        ViewError::classify(&failure).to_string(),
        "Missing texture: tex.png"
    );
}

#[wasm_bindgen_test]
fn non_image_target_is_not_a_texture() {
    let event = Object::new();
    Reflect::set(&event, &"target".into(), &Object::new()).unwrap();

    let failure = failure_from_js(&event.into());

    assert_eq!(failure.image_src, None);
}

#[wasm_bindgen_test]
fn locate_requires_spinner() {
    let window = web_sys::window().unwrap();
    let root = root_with(r#"<div class="dropzone"></div>"#);

    let result = DomShell::locate(&window, &root, &ViewerConfig::default());

    assert_eq!(result.err(), Some(AppError::missing_element(".spinner")));
}

#[wasm_bindgen_test]
fn locate_requires_content_container() {
    let window = web_sys::window().unwrap();
    let root = root_with(r#"<div class="spinner"></div>"#);

    let result = DomShell::locate(&window, &root, &ViewerConfig::default());

    assert_eq!(result.err(), Some(AppError::missing_element(".dropzone")));
}

#[wasm_bindgen_test]
fn spinner_visibility_toggles_display() {
    let window = web_sys::window().unwrap();
    let root = root_with(r#"<div class="spinner"></div><div class="dropzone"></div>"#);
    let shell = DomShell::locate(&window, &root, &ViewerConfig::default()).unwrap();

    shell.set_spinner_visible(false);
    assert_eq!(shell.spinner().style().get_property_value("display").unwrap(), "none");

    shell.set_spinner_visible(true);
    assert_eq!(shell.spinner().style().get_property_value("display").unwrap(), "");
}

#[wasm_bindgen_test]
fn object_urls_are_blob_urls() {
    let window = web_sys::window().unwrap();
    let root = root_with(r#"<div class="spinner"></div><div class="dropzone"></div>"#);
    let shell = DomShell::locate(&window, &root, &ViewerConfig::default()).unwrap();
    let parts = js_sys::Array::of1(&JsValue::from_str("glTF"));
    let file = web_sys::File::new_with_str_sequence(&parts, "model.glb").unwrap();

    let url = shell.create_object_url(&file).unwrap();

    assert!(url.starts_with("blob:"));
    shell.revoke_object_url(&url);
}

#[wasm_bindgen_test]
async fn mount_hides_spinner_and_displays_default_asset() {
    let (root, context) = mounted();
    assert_eq!(spinner_display(&root), "none");

    assert_eq!(settle(&context).await, "displayed");
    assert_eq!(spinner_display(&root), "none");
    assert!(context.controller().has_viewer());
    assert_eq!(validated_urls(), vec!["gold_dress.glb".to_string()]);
    assert!(root.query_selector(".dropzone .viewer").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn reload_displays_default_asset_again() {
    let (root, context) = mounted();
    assert_eq!(settle(&context).await, "displayed");
    let first = context.controller().generation();

    context.reload();

    assert_eq!(settle(&context).await, "displayed");
    assert_eq!(context.controller().generation(), first + 1);
    assert_eq!(spinner_display(&root), "none");
    assert_eq!(validated_urls().len(), 2);
}

#[wasm_bindgen_test]
async fn view_file_loads_through_blob_url() {
    let (root, context) = mounted();
    assert_eq!(settle(&context).await, "displayed");
    let parts = Array::of1(&JsValue::from_str("glTF"));
    let file = web_sys::File::new_with_str_sequence(&parts, "model.glb").unwrap();

    context.view_file(file, String::new());

    assert_eq!(settle(&context).await, "displayed");
    assert_eq!(spinner_display(&root), "none");
    let urls = validated_urls();
    assert_eq!(urls.len(), 2);
    assert!(urls[1].starts_with("blob:"));
}

#[wasm_bindgen_test]
fn mount_requires_spinner() {
    install_viewer_stubs();
    let window = web_sys::window().unwrap();
    let root = root_with(r#"<div class="dropzone"></div>"#);

    let result = mount(&window, &root, &window.location());

    assert_eq!(result.err(), Some(AppError::missing_element(".spinner")));
}
