//! Renderer-agnostic core for a drag-to-spin image ring viewer.
//!
//! A ring is a fixed, ordered set of still frames (for example a turntable shot of a product).
//! Dragging horizontally steps through the ring one frame per move event, wrapping from the last
//! frame back to the first. Browser bindings live in a separate crate (`spinview-web`); this
//! crate only holds the state, policies and drawing order so it can be tested natively.

#![forbid(unsafe_code)]

mod config;
mod error;
mod frames;
mod input;
mod phase;
mod render;
mod schedule;
mod state;
mod textures;
mod viewer;

pub use config::*;
pub use error::*;
pub use frames::*;
pub use input::*;
pub use phase::*;
pub use render::*;
pub use schedule::*;
pub use state::*;
pub use textures::*;
pub use viewer::*;

#[cfg(test)]
mod config_tests;




#[cfg(test)]
mod state_tests;
