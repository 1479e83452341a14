//! PointerState - last-value-wins pointer tracking
//!
//! Updated by the host on every raw pointer event; the previous position
//! exists only to produce pan deltas, there is no event queue or history.
//! Within a tick the simulation reads whatever the latest values are.

#[derive(Default)]
pub struct PointerState {
    x: f32,
    y: f32,
    prev_x: f32,
    prev_y: f32,
    pressed: bool,
    modifier: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> (f32, f32) { (self.x, self.y) }

    #[inline]
    pub fn pressed(&self) -> bool { self.pressed }

    /// Button down with the pan modifier held -> drag gestures pan.
    #[inline]
    pub fn panning(&self) -> bool {
        self.pressed && self.modifier
    }

    /// Plain button down -> the pointed cell is an edit target every
    /// tick while held, not just on the press transition.
    #[inline]
    pub fn painting(&self) -> bool {
        self.pressed && !self.modifier
    }

    /// The modifier is latched at press time, matching the gesture the
    /// user started.
    pub fn press(&mut self, modifier: bool) {
        self.pressed = true;
        self.modifier = modifier;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Record a new position and return the delta since the previous one.
    pub fn move_to(&mut self, x: f32, y: f32) -> (f32, f32) {
        self.prev_x = self.x;
        self.prev_y = self.y;
        self.x = x;
        self.y = y;
        (self.x - self.prev_x, self.y - self.prev_y)
    }
}
