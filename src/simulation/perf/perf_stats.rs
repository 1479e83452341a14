use wasm_bindgen::prelude::*;

/// Wall-clock milliseconds. `Date.now()` on wasm, unix time elsewhere;
/// only ever used for differences within one tick.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TickTimer {
    start_ms: f64,
}

impl TickTimer {
    pub(crate) fn start() -> Self {
        TickTimer { start_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        now_ms() - self.start_ms
    }
}

/// Per-tick timing snapshot, populated only while perf metrics are
/// enabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct TickStats {
    pub(super) tick_ms: f64,
    pub(super) step_ms: f64,
    pub(super) draw_ms: f64,
    pub(super) steps: u32,
    pub(super) population: u32,
    pub(super) grid_size: u32,
}

impl TickStats {
    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn draw_ms(&self) -> f64 { self.draw_ms }
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }
    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.population }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
