use crate::camera::Camera;
use crate::clock::SimClock;
use crate::config::EngineConfig;
use crate::grid::GridBuffer;
use crate::input::PointerState;

use super::perf_stats::TickStats;
use super::EngineCore;

pub(super) fn create_engine_core(width: u32, height: u32, config: &EngineConfig) -> EngineCore {
    EngineCore {
        grid: GridBuffer::new(width, height),
        camera: Camera::new(config.initial_zoom, config.zoom_sensitivity),
        pointer: PointerState::new(),
        clock: SimClock::new(),
        speed_hz: config.speed_hz,
        erase_mode: config.erase_mode,
        viewport_w: 0.0,
        viewport_h: 0.0,
        randomize_density: config.randomize_density,
        initial_zoom: config.initial_zoom,
        zoom_sensitivity: config.zoom_sensitivity,
        generation: 0,
        population: 0,
        rng_state: 0xDEAD_BEEF,
        perf_enabled: false,
        perf_stats: TickStats::default(),
    }
}

pub(super) fn apply_config(core: &mut EngineCore, config: &EngineConfig) {
    core.speed_hz = config.speed_hz;
    core.erase_mode = config.erase_mode;
    core.randomize_density = config.randomize_density;
    core.initial_zoom = config.initial_zoom;
    core.zoom_sensitivity = config.zoom_sensitivity;
    // New view tunables take effect immediately; this resets pan/zoom.
    core.camera = Camera::new(config.initial_zoom, config.zoom_sensitivity);
}

pub(super) fn snapshot_config(core: &EngineCore) -> EngineConfig {
    EngineConfig {
        speed_hz: core.speed_hz,
        erase_mode: core.erase_mode,
        initial_zoom: core.initial_zoom,
        zoom_sensitivity: core.zoom_sensitivity,
        randomize_density: core.randomize_density,
    }
}
