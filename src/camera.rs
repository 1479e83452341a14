//! Camera - zoom + pan and the screen<->grid mapping
//!
//! The grid is centered in the viewport at the current zoom, then shifted
//! by the accumulated pan offset. Zoom is cells-to-pixels scale, clamped
//! to [ZOOM_MIN, ZOOM_MAX] before it is ever applied, so no invalid zoom
//! state is reachable.

pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 16.0;

pub struct Camera {
    zoom: f32,
    offset_x: f32,
    offset_y: f32,

    initial_zoom: f32,
    zoom_sensitivity: f32,
}

impl Camera {
    pub fn new(initial_zoom: f32, zoom_sensitivity: f32) -> Self {
        Self {
            zoom: initial_zoom.clamp(ZOOM_MIN, ZOOM_MAX),
            offset_x: 0.0,
            offset_y: 0.0,
            initial_zoom,
            zoom_sensitivity,
        }
    }

    #[inline]
    pub fn zoom(&self) -> f32 { self.zoom }

    #[inline]
    pub fn offset(&self) -> (f32, f32) { (self.offset_x, self.offset_y) }

    /// Top-left screen position of grid cell (0, 0): viewport center,
    /// minus half the scaled grid, plus the pan offset.
    #[inline]
    pub fn origin(&self, viewport_w: f32, viewport_h: f32, grid_w: u32, grid_h: u32) -> (f32, f32) {
        let origin_x = viewport_w / 2.0 - (grid_w as f32 * self.zoom) / 2.0 + self.offset_x;
        let origin_y = viewport_h / 2.0 - (grid_h as f32 * self.zoom) / 2.0 + self.offset_y;
        (origin_x, origin_y)
    }

    /// Map a device pixel to the grid cell under it, or `None` when the
    /// pointer is outside the scaled grid rectangle.
    pub fn screen_to_grid(
        &self,
        px: f32,
        py: f32,
        viewport_w: f32,
        viewport_h: f32,
        grid_w: u32,
        grid_h: u32,
    ) -> Option<(i32, i32)> {
        let (origin_x, origin_y) = self.origin(viewport_w, viewport_h, grid_w, grid_h);

        let inside = px >= origin_x
            && px < origin_x + grid_w as f32 * self.zoom
            && py >= origin_y
            && py < origin_y + grid_h as f32 * self.zoom;
        if !inside {
            return None;
        }

        let gx = ((px - origin_x) / self.zoom).floor() as i32;
        let gy = ((py - origin_y) / self.zoom).floor() as i32;
        Some((gx, gy))
    }

    /// Inverse affine mapping, used by the draw pass: the top-left pixel
    /// of the `zoom`-sized square for cell (gx, gy).
    #[inline]
    pub fn grid_to_screen(
        &self,
        gx: u32,
        gy: u32,
        viewport_w: f32,
        viewport_h: f32,
        grid_w: u32,
        grid_h: u32,
    ) -> (f32, f32) {
        let (origin_x, origin_y) = self.origin(viewport_w, viewport_h, grid_w, grid_h);
        (gx as f32 * self.zoom + origin_x, gy as f32 * self.zoom + origin_y)
    }

    /// Scale a raw wheel delta by the sensitivity and clamp. The clamp
    /// guarantees zoom stays in [ZOOM_MIN, ZOOM_MAX] for any delta
    /// sequence.
    pub fn apply_zoom_delta(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta * self.zoom_sensitivity).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Accumulate a pan gesture delta. Offsets are unbounded.
    pub fn apply_pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Back to the startup view: initial zoom, no pan.
    pub fn reset(&mut self) {
        self.zoom = self.initial_zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}
