//! Rule engine - Conway's B3/S23 applied over the whole grid
//!
//! Reads the current buffer through the bounds-safe `get` (out-of-grid
//! neighbors count as DEAD, no wraparound), writes the scratch buffer,
//! then swaps. O(width * height) with 8 bounded lookups per cell and no
//! per-cell allocation.

use crate::grid::{GridBuffer, CELL_ALIVE, CELL_DEAD};

/// Live cells in the Moore neighborhood of (x, y).
#[inline]
fn alive_neighbors(grid: &GridBuffer, x: i32, y: i32) -> u8 {
    grid.get(x - 1, y - 1)
        + grid.get(x, y - 1)
        + grid.get(x + 1, y - 1)
        + grid.get(x - 1, y)
        + grid.get(x + 1, y)
        + grid.get(x - 1, y + 1)
        + grid.get(x, y + 1)
        + grid.get(x + 1, y + 1)
}

/// Advance the grid one generation in place. Returns the live-cell count
/// of the new generation.
pub fn advance(grid: &mut GridBuffer) -> u32 {
    let (w, h) = (grid.width(), grid.height());
    let mut population = 0u32;

    for y in 0..h {
        for x in 0..w {
            let count = alive_neighbors(grid, x as i32, y as i32);
            let next = match count {
                // Exactly 2: passthrough. Live stays live, dead stays dead.
                2 => grid.get(x as i32, y as i32),
                // Exactly 3: birth or survival.
                3 => CELL_ALIVE,
                // Isolation or overcrowding.
                _ => CELL_DEAD,
            };
            if next == CELL_ALIVE {
                population += 1;
            }
            grid.set_next(x, y, next);
        }
    }

    grid.swap_buffers();
    population
}
