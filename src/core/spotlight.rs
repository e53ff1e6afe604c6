use glam::Vec2;

/// Trailing glow that chases the pointer.
///
/// Pointer samples and ticks are decoupled: any number of samples may arrive
/// between two ticks and only the latest one counts. Each tick moves the glow
/// `factor` of the remaining distance toward that sample (exponential
/// smoothing), so for `0 < factor < 1` it never overshoots.
#[derive(Clone, Debug)]
pub struct SpotlightTracker {
    pointer: Vec2,
    position: Vec2,
    factor: f32,
}

impl SpotlightTracker {
    /// Both the sample and the glow start at the viewport origin.
    pub fn new(factor: f32) -> Self {
        Self {
            pointer: Vec2::ZERO,
            position: Vec2::ZERO,
            factor,
        }
    }

    /// Record the latest pointer position. Values are taken as-is.
    #[inline]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn tick(&mut self) -> Vec2 {
        self.position += (self.pointer - self.position) * self.factor;
        self.position
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Whether the glow is within `epsilon` px of the pointer.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.position.distance(self.pointer) <= epsilon
    }
}
