//! Browser front-end for the `spinview` image ring viewer.
//!
//! Build for `wasm32-unknown-unknown` (e.g. with Trunk or wasm-pack). The host page provides a
//! `<canvas id="canvas">`, then does:
//!
//! ```js
//! const viewer = new ImageRingViewer();
//! await viewer.init();
//! // ...
//! viewer.dispose();
//! ```

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod preload;
#[cfg(target_arch = "wasm32")]
mod viewer;


#[cfg(target_arch = "wasm32")]
pub use viewer::ImageRingViewer;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

// This crate is intended to be built for `wasm32-unknown-unknown`. On other targets it is empty
// so `cargo test` for the workspace stays green.
