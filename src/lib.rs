//! Perspective and translation matrices for a small GPU front end.
//!
//! The matrix code in [`math`] is independent of the renderer: it produces
//! row-major `f64` buffers that [`view::Uniforms`] transposes for upload.

mod app;
mod app_state;
mod event_handler;
mod renderer;
mod state;
mod vertex;

pub mod config;
pub mod error;
pub mod math;
pub mod view;

pub use app::run;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = run() {
        log::error!("{:#}", e);
    }
}
