#![cfg(target_arch = "wasm32")]

use spinview_web::ImageRingViewer;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(existing) = document.get_element_by_id(id) {
        existing.remove();
    }
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    let result = ImageRingViewer::with_config(r#"{ "canvasId": "no-such-canvas" }"#);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn invalid_config_is_an_error() {
    add_canvas("bad-config");
    let result = ImageRingViewer::with_config(r#"{ "canvasId": "bad-config", "imageScale": -1 }"#);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn construction_sizes_canvas_from_viewport() {
    let canvas = add_canvas("sized");
    let viewer = ImageRingViewer::with_config(r#"{ "canvasId": "sized" }"#).unwrap();

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    assert_eq!(canvas.width(), (width / 1.2) as u32);
    assert_eq!(viewer.frame_count(), 36);
    assert_eq!(viewer.frame_index(), 0);
    assert_eq!(viewer.phase(), "uninitialized");
    viewer.dispose();
}

#[wasm_bindgen_test]
fn resize_event_refits_canvas_and_keeps_frame() {
    let canvas = add_canvas("resized");
    let viewer = ImageRingViewer::with_config(r#"{ "canvasId": "resized" }"#).unwrap();
    canvas.set_width(1);
    canvas.set_height(1);

    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();

    let width = window.inner_width().unwrap().as_f64().unwrap();
    let height = window.inner_height().unwrap().as_f64().unwrap();
    assert_eq!(canvas.width(), (width / 1.2) as u32);
    assert_eq!(canvas.height(), (height / 1.2) as u32);
    assert_eq!(viewer.frame_index(), 0);
    assert_eq!(viewer.phase(), "uninitialized");
    viewer.dispose();
}

#[wasm_bindgen_test(async)]
async fn empty_ring_becomes_ready_with_forced_input_mode() {
    add_canvas("empty-ring");
    let viewer = ImageRingViewer::with_config(
        r#"{ "canvasId": "empty-ring", "frameCount": 0, "inputMode": "touch" }"#,
    )
    .unwrap();

    JsFuture::from(viewer.init()).await.unwrap();
    assert_eq!(viewer.phase(), "ready");
    assert_eq!(viewer.input_mode().as_deref(), Some("touch"));

    viewer.dispose();
    assert_eq!(viewer.phase(), "disposed");
}

#[wasm_bindgen_test(async)]
async fn missing_texture_rejects_init() {
    add_canvas("broken-ring");
    let viewer = ImageRingViewer::with_config(
        r#"{ "canvasId": "broken-ring", "frameCount": 3, "basePath": "/spinview-missing-assets" }"#,
    )
    .unwrap();

    let result = JsFuture::from(viewer.init()).await;
    assert!(result.is_err());
    assert_eq!(viewer.phase(), "failed");
    assert_eq!(viewer.input_mode(), None);
    assert_eq!(viewer.frame_index(), 0);
}
