use crate::render::CellSurface;
use crate::rules;

use super::commands;
use super::{EngineCore, TickTimer};

/// One frame of the simulation loop:
/// 1. accumulate the frame delta,
/// 2. apply the held-pointer edit (paint rate is tied to render rate),
/// 3. clear the surface,
/// 4. advance a generation if the step interval elapsed,
/// 5. draw every live cell of the current buffer through the camera.
///
/// The picture is redrawn every tick even when no step fired, so pans,
/// zooms, and edits show up between generation steps.
pub(super) fn tick(core: &mut EngineCore, dt_ms: f64, surface: &mut dyn CellSurface) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.population = core.population;
        core.perf_stats.grid_size = core.grid.size() as u32;
    }
    let tick_start = if perf_on { Some(TickTimer::start()) } else { None };

    core.clock.advance(dt_ms);

    if core.pointer.painting() {
        commands::paint_at_pointer(core);
    }

    surface.clear(core.viewport_w, core.viewport_h);

    if core.clock.try_consume_step(core.speed_hz) {
        if perf_on {
            let t0 = TickTimer::start();
            core.population = rules::advance(&mut core.grid);
            core.perf_stats.step_ms = t0.elapsed_ms();
            core.perf_stats.steps = 1;
        } else {
            core.population = rules::advance(&mut core.grid);
        }
        core.generation += 1;
    }

    if perf_on {
        let t0 = TickTimer::start();
        draw(core, surface);
        core.perf_stats.draw_ms = t0.elapsed_ms();
    } else {
        draw(core, surface);
    }

    if let Some(t) = tick_start {
        core.perf_stats.tick_ms = t.elapsed_ms();
        core.perf_stats.population = core.population;
    }
}

fn draw(core: &EngineCore, surface: &mut dyn CellSurface) {
    let (grid_w, grid_h) = (core.grid.width(), core.grid.height());
    let zoom = core.camera.zoom();

    for gy in 0..grid_h {
        for gx in 0..grid_w {
            if !core.grid.is_alive(gx as i32, gy as i32) {
                continue;
            }
            let (px, py) = core.camera.grid_to_screen(
                gx,
                gy,
                core.viewport_w,
                core.viewport_h,
                grid_w,
                grid_h,
            );
            surface.fill_cell(px, py, zoom);
        }
    }
}
