//! GridBuffer - double-buffered cell storage
//!
//! Flat `width * height` array indexed by `x + y * width`, plus an
//! equal-size scratch buffer the rule engine writes the next generation
//! into. A generation step never reads and writes the same buffer;
//! `swap_buffers` exchanges ownership of the two allocations, it never
//! copies cells.

/// Cell states. A cell is a `u8` so the buffer stays a flat byte array.
pub type CellState = u8;

pub const CELL_DEAD: CellState = 0;
pub const CELL_ALIVE: CellState = 1;

pub struct GridBuffer {
    width: u32,
    height: u32,
    size: usize,

    cells: Vec<CellState>,
    scratch: Vec<CellState>,
}

impl GridBuffer {
    /// Create an all-DEAD grid. Dimensions are fixed for the buffer's
    /// lifetime; it is never resized.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            size,
            cells: vec![CELL_DEAD; size],
            scratch: vec![CELL_DEAD; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    // === Cell access ===
    /// Bounds-safe read. Out-of-range coordinates read as DEAD: edge
    /// cells behave as if surrounded by permanent void, which is the
    /// boundary policy the rule engine counts neighbors through.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> CellState {
        if !self.in_bounds(x, y) { return CELL_DEAD; }
        self.cells[self.index(x as u32, y as u32)]
    }

    #[inline]
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == CELL_ALIVE
    }

    /// Bounds-safe write; out-of-range coordinates are a no-op.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        if !self.in_bounds(x, y) { return; }
        let idx = self.index(x as u32, y as u32);
        self.cells[idx] = state;
    }

    /// Write into the next-generation buffer. Caller guarantees bounds.
    #[inline]
    pub fn set_next(&mut self, x: u32, y: u32, state: CellState) {
        let idx = self.index(x, y);
        self.scratch[idx] = state;
    }

    /// Promote the next-generation buffer to current (and recycle the old
    /// current as the new scratch).
    #[inline]
    pub fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    // === Bulk operations ===
    pub fn clear_all(&mut self) {
        self.cells.fill(CELL_DEAD);
    }

    /// Independent Bernoulli draw per cell: ALIVE with probability
    /// `density`, using the caller's xorshift state.
    pub fn randomize_all(&mut self, rng_state: &mut u32, density: f32) {
        for cell in self.cells.iter_mut() {
            let draw = crate::simulation::xorshift32(rng_state) as f32 / u32::MAX as f32;
            *cell = if draw < density { CELL_ALIVE } else { CELL_DEAD };
        }
    }

    /// Count live cells in the current buffer.
    pub fn population(&self) -> u32 {
        self.cells.iter().filter(|&&c| c == CELL_ALIVE).count() as u32
    }
}
