//! lifegrid-engine - Interactive Game of Life for canvas hosts
//!
//! The host (JS) owns the requestAnimationFrame loop and the canvas; the
//! engine owns all simulation state:
//! - grid/       - Double-buffered cell storage
//! - rules/      - B3/S23 generation step
//! - camera/     - Zoom + pan, screen<->grid mapping
//! - input/      - Pointer state
//! - clock/      - Fixed-step timing, decoupled from frame rate
//! - simulation/ - Orchestration and the wasm facade
//!
//! Each tick the engine rebuilds a flat (x, y, size) rect buffer of the
//! live cells in screen space; the host reads it via `rects_ptr()` and
//! fills one square per triplet.

pub mod camera;
pub mod clock;
pub mod config;
pub mod grid;
pub mod input;
pub mod render;
pub mod rules;
pub mod simulation;

use wasm_bindgen::prelude::*;

pub use camera::Camera;
pub use clock::SimClock;
pub use config::EngineConfig;
pub use grid::GridBuffer;
pub use input::PointerState;
pub use render::{CellSurface, RectBuffer};
pub use simulation::{Engine, EngineCore, TickStats};

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"lifegrid WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
