//! Simulation loop - the engine's single explicit context object
//!
//! `EngineCore` owns every piece of mutable simulation state (grid,
//! camera, pointer, clock) and is the only thing the host-facing facade
//! wraps. It only orchestrates; the actual work lives in the submodules:
//! - commands/ - pointer events, edits, live-control setters
//! - step/     - the per-tick pipeline
//! - init/     - construction and the RNG
//! - perf/     - opt-in tick timing

use crate::camera::Camera;
use crate::clock::SimClock;
use crate::config::EngineConfig;
use crate::grid::GridBuffer;
use crate::input::PointerState;
use crate::render::CellSurface;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;

pub use facade::Engine;
pub use perf_stats::TickStats;

use perf_stats::TickTimer;

/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    random::xorshift32(state)
}

/// The simulation context
pub struct EngineCore {
    grid: GridBuffer,
    camera: Camera,
    pointer: PointerState,
    clock: SimClock,

    // Live controls (owned by the host UI, pushed through setters)
    speed_hz: f64,
    erase_mode: bool,

    // Viewport, pushed by the host whenever the canvas resizes
    viewport_w: f32,
    viewport_h: f32,

    // Tunables
    randomize_density: f32,
    initial_zoom: f32,
    zoom_sensitivity: f32,

    // State
    generation: u64,
    population: u32,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: TickStats,
}

impl EngineCore {
    /// Create an engine with default tunables and an all-DEAD grid.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_engine_core(width, height, &EngineConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: &EngineConfig) -> Self {
        init::create_engine_core(width, height, config)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn population(&self) -> u32 { self.population }

    pub fn zoom(&self) -> f32 { self.camera.zoom() }

    /// Re-apply tunables mid-flight. Grid contents are untouched.
    pub fn apply_config(&mut self, config: &EngineConfig) {
        init::apply_config(self, config);
    }

    /// Current tunables, for the host's settings form.
    pub fn config(&self) -> EngineConfig {
        init::snapshot_config(self)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> TickStats {
        self.perf_stats.clone()
    }

    // === Host events ===

    pub fn on_pointer_down(&mut self, x: f32, y: f32, modifier: bool) {
        commands::on_pointer_down(self, x, y, modifier);
    }

    pub fn on_pointer_up(&mut self) {
        commands::on_pointer_up(self);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        commands::on_pointer_move(self, x, y);
    }

    /// Wheel scroll; positive `delta_y` (scroll down) zooms out.
    pub fn on_wheel(&mut self, delta_y: f32) {
        commands::on_wheel(self, delta_y);
    }

    // === Live controls ===

    pub fn set_speed(&mut self, speed_hz: f64) {
        commands::set_speed(self, speed_hz);
    }

    pub fn set_erase(&mut self, erase_mode: bool) {
        commands::set_erase(self, erase_mode);
    }

    /// Host pushes the canvas pixel size whenever it changes.
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32) {
        commands::resize(self, viewport_w, viewport_h);
    }

    // === Discrete user actions ===

    /// Reset: every cell DEAD, counters back to zero.
    pub fn clear_cells(&mut self) {
        commands::clear_cells(self);
    }

    /// Randomize: independent Bernoulli draw per cell.
    pub fn randomize_cells(&mut self) {
        commands::randomize_cells(self);
    }

    /// Restore the startup view (zoom and pan).
    pub fn reset_view(&mut self) {
        commands::reset_view(self);
    }

    /// Direct cell write, bounds-safe.
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        commands::set_cell(self, x, y, alive);
    }

    // === The loop ===

    /// One frame: the host calls this once per display refresh with the
    /// elapsed milliseconds since the previous call.
    pub fn tick(&mut self, dt_ms: f64, surface: &mut dyn CellSurface) {
        step::tick(self, dt_ms, surface);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
