use spinview::{DrawSurface, FrameImage};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// A decoded frame held by the browser.
#[derive(Clone, Debug)]
pub(crate) struct LoadedImage(pub HtmlImageElement);

impl FrameImage for LoadedImage {
    fn width(&self) -> f64 {
        self.0.natural_width() as f64
    }

    fn height(&self) -> f64 {
        self.0.natural_height() as f64
    }
}

pub(crate) struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub(crate) fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface<'_> {
    type Image = LoadedImage;
    type Error = JsValue;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.translate(x, y)
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.scale(x, y)
    }

    fn draw_image(&mut self, image: &LoadedImage, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.draw_image_with_html_image_element(&image.0, x, y)
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

pub(crate) fn element_by_id<T: JsCast>(
    document: &web_sys::Document,
    id: &str,
) -> Result<T, JsValue> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?;
    el.dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has unexpected type")))
}

pub(crate) fn context_2d(
    canvas: &HtmlCanvasElement,
) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))
}

/// `innerWidth`/`innerHeight` of the window, in CSS pixels.
pub(crate) fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}
