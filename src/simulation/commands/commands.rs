use crate::grid::{CELL_ALIVE, CELL_DEAD};

use super::EngineCore;

pub(super) fn on_pointer_down(core: &mut EngineCore, x: f32, y: f32, modifier: bool) {
    core.pointer.move_to(x, y);
    core.pointer.press(modifier);
}

pub(super) fn on_pointer_up(core: &mut EngineCore) {
    core.pointer.release();
}

pub(super) fn on_pointer_move(core: &mut EngineCore, x: f32, y: f32) {
    let (dx, dy) = core.pointer.move_to(x, y);
    // Pan applies per move event; painting is handled per tick instead,
    // so several coalesced moves still produce one edit per frame.
    if core.pointer.panning() {
        core.camera.apply_pan(dx, dy);
    }
}

pub(super) fn on_wheel(core: &mut EngineCore, delta_y: f32) {
    // DOM wheel deltas grow downward; scrolling down zooms out.
    core.camera.apply_zoom_delta(-delta_y);
}

pub(super) fn set_speed(core: &mut EngineCore, speed_hz: f64) {
    core.speed_hz = speed_hz;
}

pub(super) fn set_erase(core: &mut EngineCore, erase_mode: bool) {
    core.erase_mode = erase_mode;
}

pub(super) fn resize(core: &mut EngineCore, viewport_w: f32, viewport_h: f32) {
    core.viewport_w = viewport_w;
    core.viewport_h = viewport_h;
}

pub(super) fn set_cell(core: &mut EngineCore, x: i32, y: i32, alive: bool) {
    if !core.grid.in_bounds(x, y) {
        return;
    }
    let state = if alive { CELL_ALIVE } else { CELL_DEAD };
    let prev = core.grid.get(x, y);
    core.grid.set(x, y, state);

    if prev == CELL_DEAD && state == CELL_ALIVE {
        core.population += 1;
    } else if prev == CELL_ALIVE && state == CELL_DEAD {
        core.population -= 1;
    }
}

/// Write the cell under the pointer, honoring erase mode. Pointer
/// positions outside the scaled grid are silently ignored.
pub(super) fn paint_at_pointer(core: &mut EngineCore) {
    let (px, py) = core.pointer.position();
    let hit = core.camera.screen_to_grid(
        px,
        py,
        core.viewport_w,
        core.viewport_h,
        core.grid.width(),
        core.grid.height(),
    );
    if let Some((gx, gy)) = hit {
        set_cell(core, gx, gy, !core.erase_mode);
    }
}

pub(super) fn clear_cells(core: &mut EngineCore) {
    core.grid.clear_all();
    core.population = 0;
    core.generation = 0;
}

pub(super) fn randomize_cells(core: &mut EngineCore) {
    let density = core.randomize_density;
    core.grid.randomize_all(&mut core.rng_state, density);
    core.population = core.grid.population();
    core.generation = 0;
}

pub(super) fn reset_view(core: &mut EngineCore) {
    core.camera.reset();
}
