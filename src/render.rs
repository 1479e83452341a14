//! Render surface contract and the wasm transfer buffer
//!
//! The core never touches a canvas. It draws through `CellSurface`, and
//! the wasm delivery implements that with `RectBuffer`: a flat f32 array
//! of (x, y, size) triplets rebuilt every tick, handed to JS as a
//! pointer + length pair so the host can fill one square per triplet
//! without copying.

/// The draw target the simulation renders into each tick.
pub trait CellSurface {
    /// Start a new frame for a viewport of the given pixel size.
    fn clear(&mut self, viewport_w: f32, viewport_h: f32);

    /// Fill a `size_px`-sided square with its top-left corner at (px, py).
    fn fill_cell(&mut self, px: f32, py: f32, size_px: f32);
}

/// Screen-space rects of the live cells, in host-readable form.
pub struct RectBuffer {
    rects: Vec<f32>,
    viewport_w: f32,
    viewport_h: f32,
}

impl RectBuffer {
    pub fn new() -> Self {
        Self {
            rects: Vec::new(),
            viewport_w: 0.0,
            viewport_h: 0.0,
        }
    }

    /// Number of (x, y, size) triplets in the current frame.
    pub fn rect_count(&self) -> usize {
        self.rects.len() / 3
    }

    pub fn ptr(&self) -> *const f32 {
        self.rects.as_ptr()
    }

    /// Length in f32 elements (3 per rect).
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.viewport_w, self.viewport_h)
    }
}

impl Default for RectBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellSurface for RectBuffer {
    fn clear(&mut self, viewport_w: f32, viewport_h: f32) {
        // Keeps the allocation; the triplet count is stable between steps.
        self.rects.clear();
        self.viewport_w = viewport_w;
        self.viewport_h = viewport_h;
    }

    fn fill_cell(&mut self, px: f32, py: f32, size_px: f32) {
        self.rects.push(px);
        self.rects.push(py);
        self.rects.push(size_px);
    }
}
