pub mod clock;
pub mod observable;
pub mod page;
pub mod reveal;
pub mod spotlight;
pub mod tiers;
pub mod view_model;

pub use clock::{ActiveFlag, Clock, ManualClock, SystemClock, TickInfo, TickLoop};
pub use observable::{Observable, SubscriptionId};
pub use page::LandingPage;
pub use reveal::{
    visible_ratio, ElementId, GeometricWatcher, Rect, RevealObserver, RevealableElement,
    Revealed, Viewport, VisibilityEvent, VisibilityWatcher,
};
pub use spotlight::SpotlightTracker;
pub use tiers::{DifficultyTier, SelectionState, TierParseError, TierSpec};
pub use view_model::LandingViewModel;
