use super::observable::Observable;
use super::tiers::DifficultyTier;
use glam::Vec2;

/// Everything the rendering layer reads. Renderers subscribe to the fields
/// instead of polling shared globals.
pub struct LandingViewModel {
    pub spotlight: Observable<Vec2>,
    pub selected_tier: Observable<DifficultyTier>,
}

impl LandingViewModel {
    pub fn new(initial_tier: DifficultyTier) -> Self {
        Self {
            spotlight: Observable::new(Vec2::ZERO),
            selected_tier: Observable::new(initial_tier),
        }
    }

    /// Drop every subscriber.
    pub fn detach_all(&mut self) {
        self.spotlight.clear();
        self.selected_tier.clear();
    }
}
