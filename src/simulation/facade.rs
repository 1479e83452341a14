use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::render::RectBuffer;

use super::perf_stats::TickStats;
use super::EngineCore;

#[wasm_bindgen]
pub struct Engine {
    core: EngineCore,
    frame: RectBuffer,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine with the given grid dimensions (cells)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: EngineCore::new(width, height),
            frame: RectBuffer::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.core.population() }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f32 { self.core.zoom() }

    /// Replace the engine tunables with a (possibly partial) JSON object
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        let config = EngineConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.core.apply_config(&config);
        Ok(())
    }

    /// Current tunables as JSON, for the host's settings form
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> TickStats {
        self.core.get_perf_stats()
    }

    // === Host events (forwarded DOM events) ===

    pub fn on_pointer_down(&mut self, x: f32, y: f32, modifier: bool) {
        self.core.on_pointer_down(x, y, modifier);
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.core.on_pointer_move(x, y);
    }

    /// Wheel scroll; pass the raw DOM deltaY
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.core.on_wheel(delta_y);
    }

    // === Live controls ===

    /// Generation steps per second; 0 pauses the simulation
    pub fn set_speed(&mut self, speed_hz: f64) {
        self.core.set_speed(speed_hz);
    }

    pub fn set_erase(&mut self, erase_mode: bool) {
        self.core.set_erase(erase_mode);
    }

    /// Push the canvas pixel size; call whenever the window resizes
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32) {
        self.core.resize(viewport_w, viewport_h);
    }

    // === Discrete user actions ===

    /// Reset button: all cells DEAD
    pub fn clear_cells(&mut self) {
        self.core.clear_cells();
    }

    /// Randomize button: Bernoulli draw per cell
    pub fn randomize_cells(&mut self) {
        self.core.randomize_cells();
    }

    /// Restore the startup zoom and pan
    pub fn reset_view(&mut self) {
        self.core.reset_view();
    }

    /// Direct cell write, bounds-safe (out-of-range is a no-op)
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        self.core.set_cell(x, y, alive);
    }

    // === The loop ===

    /// Advance one frame; the host calls this once per animation frame
    /// with the elapsed milliseconds since the previous call
    pub fn tick(&mut self, dt_ms: f64) {
        let Self { core, frame } = self;
        core.tick(dt_ms, frame);
    }

    /// Pointer to the (x, y, size) f32 triplets of this frame's live
    /// cells (for JS rendering)
    pub fn rects_ptr(&self) -> *const f32 {
        self.frame.ptr()
    }

    /// Length of the rect buffer in f32 elements (3 per cell)
    pub fn rects_len(&self) -> usize {
        self.frame.len()
    }
}
