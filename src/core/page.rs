use super::clock::{ActiveFlag, Clock, TickLoop};
use super::reveal::{ElementId, GeometricWatcher, Rect, RevealObserver, Revealed, Viewport};
use super::spotlight::SpotlightTracker;
use super::tiers::{DifficultyTier, SelectionState};
use super::view_model::LandingViewModel;
use crate::config::PageConfig;
use std::ops::ControlFlow;

/// State of one page view, from mount to unmount.
///
/// Every entry point is a no-op once [`LandingPage::unmount`] has run, so
/// events that race with teardown cannot change anything.
pub struct LandingPage<C> {
    config: PageConfig,
    mounted: ActiveFlag,
    spotlight: SpotlightTracker,
    ticks: TickLoop<C>,
    reveal: RevealObserver<GeometricWatcher>,
    selection: SelectionState,
    view_model: LandingViewModel,
}

impl<C: Clock> LandingPage<C> {
    pub fn mount(config: PageConfig, clock: C) -> Self {
        log::info!(
            "[page] mount factor={:.2} threshold={:.2} tier={}",
            config.smoothing_factor,
            config.reveal_threshold,
            config.default_tier
        );
        let ticks = TickLoop::new(clock, config.tick_interval);
        Self {
            mounted: ticks.active_flag(),
            spotlight: SpotlightTracker::new(config.smoothing_factor),
            ticks,
            reveal: RevealObserver::new(GeometricWatcher::new(config.reveal_threshold)),
            selection: SelectionState::new(config.default_tier),
            view_model: LandingViewModel::new(config.default_tier),
            config,
        }
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_active()
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn register_revealable(&mut self, bounds: Rect) -> Option<ElementId> {
        if !self.is_mounted() {
            return None;
        }
        self.reveal.register(bounds)
    }

    pub fn refresh_bounds(&mut self, element: ElementId, bounds: Rect) {
        if self.is_mounted() {
            self.reveal.refresh_bounds(element, bounds);
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.is_mounted() {
            self.spotlight.on_pointer_move(x, y);
        }
    }

    /// Run one animation frame. `Continue` means "schedule another".
    pub fn frame(&mut self) -> ControlFlow<()> {
        let spotlight = &mut self.spotlight;
        let view_model = &mut self.view_model;
        self.ticks.poll(|_| {
            let pos = spotlight.tick();
            view_model.spotlight.set(pos);
        })
    }

    pub fn viewport_changed(&mut self, viewport: &Viewport) -> Revealed {
        if !self.is_mounted() {
            return Revealed::new();
        }
        self.reveal.update(viewport)
    }

    pub fn select(&mut self, tier: DifficultyTier) {
        if !self.is_mounted() {
            return;
        }
        if let Some(previous) = self.selection.select(tier) {
            log::info!("[select] {} -> {}", previous, tier);
            self.view_model.selected_tier.set(tier);
        }
    }

    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.ticks.stop();
        self.reveal.disconnect();
        self.view_model.detach_all();
        log::info!(
            "[page] unmount after {} ticks, {}/{} revealed",
            self.ticks.ticks(),
            self.reveal.revealed_count(),
            self.reveal.registered()
        );
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn spotlight(&self) -> &SpotlightTracker {
        &self.spotlight
    }

    pub fn reveal(&self) -> &RevealObserver<GeometricWatcher> {
        &self.reveal
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.ticks()
    }

    pub fn view_model(&self) -> &LandingViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut LandingViewModel {
        &mut self.view_model
    }
}
