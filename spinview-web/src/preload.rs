use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use spinview::PreloadSignal;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlImageElement};

use crate::canvas::LoadedImage;
use crate::viewer::{Shared, js_error};

/// Image elements of an in-flight preload, with their load callbacks.
#[derive(Default)]
struct Loads {
    images: Vec<HtmlImageElement>,
    callbacks: Vec<Closure<dyn FnMut(Event)>>,
}

impl Drop for Loads {
    fn drop(&mut self) {
        // Loads still in flight after a failure must not reach the dropped closures.
        for image in &self.images {
            image.set_onload(None);
            image.set_onerror(None);
        }
    }
}

/// Starts loading every frame at once and resolves when all of them decoded, or rejects with
/// the first failure.
pub(crate) async fn preload_all(shared: &Rc<RefCell<Shared>>) -> Result<(), JsValue> {
    let mut loads = Loads::default();
    let mut issued = Ok(());
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        issued = issue_loads(shared, &mut loads, resolve, reject);
    });
    issued?;

    let result = JsFuture::from(promise).await;
    drop(loads);
    result.map(|_| ())
}

fn issue_loads(
    shared: &Rc<RefCell<Shared>>,
    loads: &mut Loads,
    resolve: Function,
    reject: Function,
) -> Result<(), JsValue> {
    let (signal, textures) = {
        let mut st = shared.borrow_mut();
        let signal = st.core.begin_preload().map_err(js_error)?;
        let textures = st
            .core
            .textures()
            .iter()
            .map(|(index, url)| (index, url.to_string()))
            .collect::<Vec<_>>();
        (signal, textures)
    };
    log::info!("preloading {} frames", textures.len());
    report(Ok(signal), &resolve, &reject);

    for (index, url) in textures {
        let image = HtmlImageElement::new()?;

        let onload = {
            let shared = shared.clone();
            let image = image.clone();
            let resolve = resolve.clone();
            let reject = reject.clone();
            Closure::wrap(Box::new(move |_e: Event| {
                let Ok(mut st) = shared.try_borrow_mut() else {
                    log::warn!("frame {index} loaded while the viewer was busy");
                    return;
                };
                let signal = st.core.texture_loaded(index, LoadedImage(image.clone()));
                drop(st);
                report(signal, &resolve, &reject);
            }) as Box<dyn FnMut(_)>)
        };

        let onerror = {
            let shared = shared.clone();
            let resolve = resolve.clone();
            let reject = reject.clone();
            Closure::wrap(Box::new(move |_e: Event| {
                let Ok(mut st) = shared.try_borrow_mut() else {
                    log::warn!("frame {index} failed while the viewer was busy");
                    return;
                };
                let signal = st
                    .core
                    .texture_failed(index, "image could not be loaded or decoded");
                drop(st);
                report(signal, &resolve, &reject);
            }) as Box<dyn FnMut(_)>)
        };

        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        image.set_src(&url);

        loads.images.push(image);
        loads.callbacks.push(onload);
        loads.callbacks.push(onerror);
    }
    Ok(())
}

fn report(signal: Result<PreloadSignal, spinview::Error>, resolve: &Function, reject: &Function) {
    let settled = match signal {
        Ok(PreloadSignal::Pending { remaining }) => {
            log::debug!("{remaining} frames left to load");
            return;
        }
        Ok(PreloadSignal::Ignored) => return,
        Ok(PreloadSignal::Complete) => resolve.call0(&JsValue::UNDEFINED),
        Ok(PreloadSignal::Failed(e)) | Err(e) => reject.call1(&JsValue::UNDEFINED, &js_error(e)),
    };
    if let Err(e) = settled {
        log::error!("settling preload failed: {e:?}");
    }
}
