use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use spinview::{DragMove, DragPhase, InputMode, RingViewer, ViewerConfig, ViewerPhase};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::canvas::{CanvasSurface, LoadedImage, context_2d, element_by_id, viewport_size};
use crate::preload::preload_all;

pub(crate) fn js_error(e: spinview::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))
}

/// A queued deferred redraw. Dropping an animation frame cancels it.
enum PendingRedraw {
    Idle(u32),
    AnimationFrame(AnimationFrame),
}

/// Everything the DOM callbacks share.
///
/// Callbacks hold a [`Weak`] back-reference so the viewer handle is the only owner.
pub(crate) struct Shared {
    pub(crate) core: RingViewer<LoadedImage>,
    this: Weak<RefCell<Shared>>,
    window: web_sys::Window,
    canvas: HtmlCanvasElement,
    context: web_sys::CanvasRenderingContext2d,
    pub(crate) listeners: Vec<EventListener>,
    idle_callback: Option<Closure<dyn FnMut()>>,
    pending_redraw: Option<PendingRedraw>,
}

impl Shared {
    fn redraw(&self) -> Result<bool, JsValue> {
        log::debug!("drawing frame {}", self.core.frame_index());
        self.core.redraw(&mut CanvasSurface::new(&self.context))
    }

    fn run_scheduled_redraw(&mut self) -> Result<bool, JsValue> {
        self.pending_redraw = None;
        log::debug!("drawing frame {}", self.core.frame_index());
        self.core
            .run_scheduled_redraw(&mut CanvasSurface::new(&self.context))
    }

    /// Resizes the canvas backing store from the current viewport and redraws.
    fn fit_to_viewport(&mut self) -> Result<(), JsValue> {
        let (width, height) = viewport_size(&self.window);
        let size = self.core.resize(width, height);
        self.canvas.set_width(size.pixel_width());
        self.canvas.set_height(size.pixel_height());
        self.redraw()?;
        Ok(())
    }

    fn schedule_redraw(&mut self) -> Result<(), JsValue> {
        let has_idle_callback =
            js_sys::Reflect::has(&self.window, &JsValue::from_str("requestIdleCallback"))
                .unwrap_or(false);
        if !has_idle_callback {
            let this = self.this.clone();
            let frame = request_animation_frame(move |_timestamp| run_deferred_redraw(&this));
            self.pending_redraw = Some(PendingRedraw::AnimationFrame(frame));
            return Ok(());
        }

        let this = self.this.clone();
        let callback = self.idle_callback.get_or_insert_with(|| {
            Closure::wrap(Box::new(move || run_deferred_redraw(&this)) as Box<dyn FnMut()>)
        });
        let options = web_sys::IdleRequestOptions::new();
        options.set_timeout(self.core.config().redraw_timeout_ms);
        let scheduled = self
            .window
            .request_idle_callback_with_options(callback.as_ref().unchecked_ref(), &options);
        match scheduled {
            Ok(handle) => {
                self.pending_redraw = Some(PendingRedraw::Idle(handle));
                Ok(())
            }
            Err(e) => {
                log::warn!("deferring redraw failed, drawing now: {e:?}");
                self.run_scheduled_redraw().map(|_| ())
            }
        }
    }

    fn cancel_pending_redraw(&mut self) {
        match self.pending_redraw.take() {
            Some(PendingRedraw::Idle(handle)) => self.window.cancel_idle_callback(handle),
            // Dropping the handle cancels the frame.
            Some(PendingRedraw::AnimationFrame(_)) | None => {}
        }
    }

    fn handle_drag_event(&mut self, phase: DragPhase, event: &Event) -> Result<(), JsValue> {
        let Some(mode) = self.core.input_mode() else {
            return Ok(());
        };
        let x = match (phase, event_x(mode, event)) {
            (_, Some(x)) => x,
            (DragPhase::End, None) => 0,
            (_, None) => return Ok(()),
        };

        let outcome = self.core.handle_drag(phase, x);
        if let DragMove::Moved { step, frame_index } = outcome.drag {
            log::debug!("{} x={x} step={step:?} frame={frame_index}", event.type_());
        }
        if outcome.schedule_redraw {
            self.schedule_redraw()?;
        }
        Ok(())
    }

    /// Stops the core, cancels a queued redraw and hands back the DOM hooks for dropping.
    fn teardown(&mut self) -> (Vec<EventListener>, Option<Closure<dyn FnMut()>>) {
        self.core.dispose();
        self.cancel_pending_redraw();
        (
            std::mem::take(&mut self.listeners),
            self.idle_callback.take(),
        )
    }
}

fn run_deferred_redraw(shared: &Weak<RefCell<Shared>>) {
    let Some(shared) = shared.upgrade() else {
        return;
    };
    let Ok(mut st) = shared.try_borrow_mut() else {
        return;
    };
    if let Err(e) = st.run_scheduled_redraw() {
        log::error!("redraw: {e:?}");
    }
}

/// Horizontal client coordinate of a drag event; the first changed touch for touch input.
pub(crate) fn event_x(mode: InputMode, event: &Event) -> Option<i32> {
    match mode {
        InputMode::Touch => event
            .dyn_ref::<TouchEvent>()
            .and_then(|e| e.changed_touches().get(0))
            .map(|touch| touch.client_x()),
        InputMode::Pointer => event.dyn_ref::<MouseEvent>().map(|e| e.client_x()),
    }
}

/// Drag-to-spin viewer bound to a canvas element.
#[wasm_bindgen]
pub struct ImageRingViewer {
    pub(crate) shared: Rc<RefCell<Shared>>,
}

#[wasm_bindgen]
impl ImageRingViewer {
    /// Binds to `<canvas id="canvas">` with the default 36-frame ring under `/assets`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ImageRingViewer, JsValue> {
        Self::create(ViewerConfig::default())
    }

    /// Like the constructor, with settings from a JSON object. Missing keys keep their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<ImageRingViewer, JsValue> {
        Self::create(ViewerConfig::from_json_str(json).map_err(js_error)?)
    }

    fn create(config: ViewerConfig) -> Result<ImageRingViewer, JsValue> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("missing document"))?;
        let canvas: HtmlCanvasElement = element_by_id(&document, &config.canvas_id)?;
        let context = context_2d(&canvas)?;
        let core = RingViewer::new(config).map_err(js_error)?;

        let shared = Rc::new_cyclic(|this| {
            RefCell::new(Shared {
                core,
                this: this.clone(),
                window: window.clone(),
                canvas,
                context,
                listeners: Vec::new(),
                idle_callback: None,
                pending_redraw: None,
            })
        });

        let resize = {
            let shared = Rc::downgrade(&shared);
            EventListener::new(&window, "resize", move |_e: &Event| {
                let Some(shared) = shared.upgrade() else {
                    return;
                };
                let Ok(mut st) = shared.try_borrow_mut() else {
                    return;
                };
                if let Err(e) = st.fit_to_viewport() {
                    log::error!("resize: {e:?}");
                }
            })
        };

        {
            let mut st = shared.borrow_mut();
            st.listeners.push(resize);
            st.fit_to_viewport()?;
        }

        Ok(ImageRingViewer { shared })
    }

    /// Loads every frame, draws the first one and starts listening for drags.
    ///
    /// The returned promise rejects with the first texture error; the viewer then stays blank
    /// and ignores input.
    pub fn init(&self) -> js_sys::Promise {
        let shared = self.shared.clone();
        future_to_promise(async move {
            match run(&shared).await {
                Ok(()) => Ok(JsValue::UNDEFINED),
                Err(e) => {
                    log::error!("spinview init failed: {e:?}");
                    Err(e)
                }
            }
        })
    }

    /// Draws the current frame immediately.
    pub fn redraw(&self) -> Result<(), JsValue> {
        let st = self
            .shared
            .try_borrow()
            .map_err(|_| JsValue::from_str("viewer is busy"))?;
        st.redraw().map(|_| ())
    }

    /// Removes every listener and cancels a queued redraw. The viewer ignores input afterwards.
    ///
    /// Freeing the viewer from JS does the same.
    pub fn dispose(&self) {
        let Ok(mut st) = self.shared.try_borrow_mut() else {
            log::warn!("dispose called while the viewer was busy");
            return;
        };
        let (listeners, idle_callback) = st.teardown();
        drop(st);

        if !listeners.is_empty() {
            log::info!("disposed {} listeners", listeners.len());
        }
        drop(listeners);
        drop(idle_callback);
    }

    #[wasm_bindgen(getter, js_name = frameIndex)]
    pub fn frame_index(&self) -> usize {
        self.shared.borrow().core.frame_index()
    }

    #[wasm_bindgen(getter, js_name = frameCount)]
    pub fn frame_count(&self) -> usize {
        self.shared.borrow().core.textures().len()
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.shared.borrow().core.phase().to_string()
    }

    /// `"touch"` or `"pointer"` once input is attached.
    #[wasm_bindgen(getter, js_name = inputMode)]
    pub fn input_mode(&self) -> Option<String> {
        self.shared
            .borrow()
            .core
            .input_mode()
            .map(|mode| mode.to_string())
    }
}

async fn run(shared: &Rc<RefCell<Shared>>) -> Result<(), JsValue> {
    preload_all(shared).await?;

    let mode = {
        let mut st = shared.borrow_mut();
        if st.core.phase() != ViewerPhase::Ready {
            return Err(JsValue::from_str(&format!(
                "viewer is {} after preload",
                st.core.phase()
            )));
        }
        st.redraw()?;
        let user_agent = st.window.navigator().user_agent().unwrap_or_default();
        st.core.activate(&user_agent).map_err(js_error)?
    };
    log::info!(
        "loaded {} frames, using {mode} input",
        shared.borrow().core.textures().len()
    );

    attach_input(shared, mode);
    Ok(())
}

fn attach_input(shared: &Rc<RefCell<Shared>>, mode: InputMode) {
    let canvas = shared.borrow().canvas.clone();
    let listeners = mode
        .bindings()
        .iter()
        .map(|&(event, phase)| {
            let shared = Rc::downgrade(shared);
            EventListener::new(&canvas, event, move |e: &Event| {
                let Some(shared) = shared.upgrade() else {
                    return;
                };
                let Ok(mut st) = shared.try_borrow_mut() else {
                    return;
                };
                if let Err(err) = st.handle_drag_event(phase, e) {
                    log::error!("{}: {err:?}", e.type_());
                }
            })
        })
        .collect::<Vec<_>>();
    log::debug!(
        "listening for {:?}",
        mode.bindings().iter().map(|&(event, _)| event).collect::<Vec<_>>()
    );

    shared.borrow_mut().listeners.extend(listeners);
}

impl Drop for ImageRingViewer {
    fn drop(&mut self) {
        self.dispose();
    }
}
