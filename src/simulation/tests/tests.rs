use super::*;
use crate::grid::{CELL_ALIVE, CELL_DEAD};
use crate::render::RectBuffer;
use crate::rules;

/// Core with a host-sized viewport already pushed, paused simulation.
fn test_core(width: u32, height: u32) -> EngineCore {
    let mut core = EngineCore::new(width, height);
    core.resize(800.0, 600.0);
    core.set_speed(0.0);
    core
}

#[test]
fn all_dead_grid_is_a_fixed_point() {
    let mut core = test_core(16, 16);
    let pop = rules::advance(&mut core.grid);
    assert_eq!(pop, 0);
    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(core.grid.get(x, y), CELL_DEAD);
        }
    }
}

#[test]
fn three_neighbors_mean_birth_regardless_of_current_state() {
    let mut core = test_core(16, 16);
    // Dead center cell surrounded by exactly 3 live neighbors.
    core.set_cell(4, 4, true);
    core.set_cell(6, 4, true);
    core.set_cell(5, 6, true);
    assert_eq!(core.grid.get(5, 5), CELL_DEAD);

    rules::advance(&mut core.grid);
    assert_eq!(core.grid.get(5, 5), CELL_ALIVE);
}

#[test]
fn two_neighbors_pass_the_current_state_through() {
    let mut core = test_core(16, 16);
    // (5,5) alive with 2 live neighbors -> survives.
    core.set_cell(5, 5, true);
    core.set_cell(4, 4, true);
    core.set_cell(6, 4, true);
    // (10,10) dead with 2 live neighbors -> stays dead.
    core.set_cell(9, 9, true);
    core.set_cell(11, 9, true);

    rules::advance(&mut core.grid);
    assert_eq!(core.grid.get(5, 5), CELL_ALIVE);
    assert_eq!(core.grid.get(10, 10), CELL_DEAD);
}

#[test]
fn outside_two_or_three_neighbors_means_death() {
    let mut core = test_core(16, 16);
    // Lone pair: each cell has 1 neighbor, both die.
    core.set_cell(2, 2, true);
    core.set_cell(3, 2, true);
    // Overcrowded center: 4 neighbors.
    core.set_cell(10, 10, true);
    core.set_cell(9, 9, true);
    core.set_cell(11, 9, true);
    core.set_cell(9, 11, true);
    core.set_cell(11, 11, true);

    rules::advance(&mut core.grid);
    assert_eq!(core.grid.get(2, 2), CELL_DEAD);
    assert_eq!(core.grid.get(3, 2), CELL_DEAD);
    assert_eq!(core.grid.get(10, 10), CELL_DEAD);
}

#[test]
fn boundary_reads_fail_closed() {
    let core = test_core(8, 8);
    assert_eq!(core.grid.get(-1, 0), CELL_DEAD);
    assert_eq!(core.grid.get(0, -1), CELL_DEAD);
    assert_eq!(core.grid.get(8, 0), CELL_DEAD);
    assert_eq!(core.grid.get(0, 8), CELL_DEAD);
}

#[test]
fn corner_cell_counts_no_phantom_neighbors() {
    let mut core = test_core(8, 8);
    // A lone live cell at (0,0): every Moore lookup off the edge reads
    // DEAD, so it dies of isolation instead of ghost-surviving.
    core.set_cell(0, 0, true);
    rules::advance(&mut core.grid);
    assert_eq!(core.grid.get(0, 0), CELL_DEAD);
}

#[test]
fn out_of_bounds_writes_are_ignored() {
    let mut core = test_core(8, 8);
    core.set_cell(-1, 3, true);
    core.set_cell(3, 8, true);
    assert_eq!(core.population(), 0);
}

#[test]
fn block_still_life_is_stable() {
    let mut core = test_core(16, 16);
    for &(x, y) in &[(5, 5), (6, 5), (5, 6), (6, 6)] {
        core.set_cell(x, y, true);
    }

    for _ in 0..5 {
        let pop = rules::advance(&mut core.grid);
        assert_eq!(pop, 4);
    }
    for &(x, y) in &[(5, 5), (6, 5), (5, 6), (6, 6)] {
        assert_eq!(core.grid.get(x, y), CELL_ALIVE);
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut core = test_core(8, 8);
    // Vertical blinker.
    core.set_cell(1, 0, true);
    core.set_cell(1, 1, true);
    core.set_cell(1, 2, true);

    rules::advance(&mut core.grid);
    // Horizontal phase.
    assert_eq!(core.grid.get(0, 1), CELL_ALIVE);
    assert_eq!(core.grid.get(1, 1), CELL_ALIVE);
    assert_eq!(core.grid.get(2, 1), CELL_ALIVE);
    assert_eq!(core.grid.get(1, 0), CELL_DEAD);
    assert_eq!(core.grid.get(1, 2), CELL_DEAD);

    rules::advance(&mut core.grid);
    // Back to vertical.
    assert_eq!(core.grid.get(1, 0), CELL_ALIVE);
    assert_eq!(core.grid.get(1, 1), CELL_ALIVE);
    assert_eq!(core.grid.get(1, 2), CELL_ALIVE);
    assert_eq!(core.grid.get(0, 1), CELL_DEAD);
    assert_eq!(core.grid.get(2, 1), CELL_DEAD);
}

#[test]
fn clear_leaves_every_cell_dead() {
    let mut core = test_core(16, 16);
    core.randomize_cells();
    core.clear_cells();

    assert_eq!(core.population(), 0);
    assert_eq!(core.generation(), 0);
    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(core.grid.get(x, y), CELL_DEAD);
        }
    }
}

#[test]
fn randomize_is_a_real_bernoulli_draw() {
    // The reference implementation rounded its distribution down to an
    // always-dead grid; the engine must not.
    let mut core = test_core(32, 32);
    core.randomize_cells();

    let pop = core.population();
    assert!(pop > 0, "randomize produced an empty grid");
    assert!(pop < 32 * 32, "randomize produced a full grid");
    assert_eq!(pop, core.grid.population());
}

#[test]
fn zoom_never_leaves_its_clamp_range() {
    let mut core = test_core(8, 8);
    for _ in 0..1_000 {
        core.on_wheel(120.0);
    }
    assert!(core.zoom() >= crate::camera::ZOOM_MIN);

    for _ in 0..1_000 {
        core.on_wheel(-120.0);
    }
    assert!(core.zoom() <= crate::camera::ZOOM_MAX);
}

#[test]
fn screen_grid_round_trip_is_identity() {
    let mut core = test_core(12, 9);
    core.camera.apply_pan(13.5, -7.25);

    let (vw, vh) = (800.0, 600.0);
    let (gw, gh) = (core.grid.width(), core.grid.height());
    let zoom = core.camera.zoom();

    for gy in 0..gh {
        for gx in 0..gw {
            let (px, py) = core.camera.grid_to_screen(gx, gy, vw, vh, gw, gh);
            // Probe the center of the cell's square to stay clear of the
            // flooring boundary.
            let hit = core
                .camera
                .screen_to_grid(px + zoom / 2.0, py + zoom / 2.0, vw, vh, gw, gh);
            assert_eq!(hit, Some((gx as i32, gy as i32)));
        }
    }
}

#[test]
fn speed_zero_never_steps() {
    let mut core = test_core(8, 8);
    core.set_cell(1, 0, true);
    core.set_cell(1, 1, true);
    core.set_cell(1, 2, true);
    core.set_speed(0.0);

    let mut frame = RectBuffer::new();
    for _ in 0..100 {
        core.tick(16.0, &mut frame);
    }
    assert_eq!(core.generation(), 0);
    // The blinker is still in its initial phase.
    assert_eq!(core.grid.get(1, 0), CELL_ALIVE);
}

#[test]
fn step_fires_on_interval_and_resets_the_accumulator() {
    let mut core = test_core(8, 8);
    core.set_speed(10.0); // 100ms interval

    let mut frame = RectBuffer::new();
    core.tick(50.0, &mut frame);
    assert_eq!(core.generation(), 0);

    core.tick(60.0, &mut frame);
    assert_eq!(core.generation(), 1);
    assert_eq!(core.clock.accumulated_ms(), 0.0);

    core.tick(50.0, &mut frame);
    assert_eq!(core.generation(), 1);
}

#[test]
fn paint_while_held_edits_every_tick() {
    let mut core = test_core(10, 10);
    // 10x10 grid at zoom 10 in an 800x600 viewport: origin (350, 250).
    core.on_pointer_down(355.0, 255.0, false);

    let mut frame = RectBuffer::new();
    core.tick(16.0, &mut frame);
    assert_eq!(core.grid.get(0, 0), CELL_ALIVE);
    assert_eq!(core.population(), 1);

    // Still held; pointer glides to another cell and keeps painting.
    core.on_pointer_move(375.0, 275.0);
    core.tick(16.0, &mut frame);
    assert_eq!(core.grid.get(2, 2), CELL_ALIVE);
    assert_eq!(core.population(), 2);

    // Released: no more edits.
    core.on_pointer_up();
    core.on_pointer_move(395.0, 295.0);
    core.tick(16.0, &mut frame);
    assert_eq!(core.grid.get(4, 4), CELL_DEAD);
}

#[test]
fn erase_mode_paints_dead() {
    let mut core = test_core(10, 10);
    core.set_cell(0, 0, true);
    core.set_erase(true);

    core.on_pointer_down(355.0, 255.0, false);
    let mut frame = RectBuffer::new();
    core.tick(16.0, &mut frame);

    assert_eq!(core.grid.get(0, 0), CELL_DEAD);
    assert_eq!(core.population(), 0);
}

#[test]
fn modifier_drag_pans_without_editing() {
    let mut core = test_core(10, 10);
    core.on_pointer_down(400.0, 300.0, true);
    core.on_pointer_move(410.0, 280.0);

    assert_eq!(core.camera.offset(), (10.0, -20.0));

    let mut frame = RectBuffer::new();
    core.tick(16.0, &mut frame);
    assert_eq!(core.population(), 0);
}

#[test]
fn clicks_outside_the_grid_are_ignored() {
    let mut core = test_core(10, 10);
    // Well outside the 100x100 centered grid rectangle.
    core.on_pointer_down(10.0, 10.0, false);

    let mut frame = RectBuffer::new();
    core.tick(16.0, &mut frame);
    assert_eq!(core.population(), 0);
}

#[test]
fn draw_pass_emits_one_rect_per_live_cell() {
    let mut core = test_core(10, 10);
    core.set_cell(3, 3, true);
    core.set_cell(4, 3, true);
    core.set_cell(5, 3, true);

    let mut frame = RectBuffer::new();
    core.tick(1.0, &mut frame);
    assert_eq!(frame.rect_count(), 3);
    assert_eq!(frame.viewport(), (800.0, 600.0));

    // No step fired; the next tick redraws the identical picture.
    core.tick(1.0, &mut frame);
    assert_eq!(frame.rect_count(), 3);
}

#[test]
fn generation_and_population_track_steps() {
    let mut core = test_core(8, 8);
    core.set_cell(1, 0, true);
    core.set_cell(1, 1, true);
    core.set_cell(1, 2, true);
    assert_eq!(core.population(), 3);

    core.set_speed(1000.0);
    let mut frame = RectBuffer::new();
    core.tick(10.0, &mut frame);

    assert_eq!(core.generation(), 1);
    assert_eq!(core.population(), 3);
    assert_eq!(core.population(), core.grid.population());
}
