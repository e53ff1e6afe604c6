/// Effect tuning and DOM naming constants.
///
/// These constants express intended behavior (smoothing, visibility rule) and
/// the markup contract with `index.html`, keeping magic strings out of the code.
// Fraction of the remaining distance the spotlight covers per tick
pub const SPOTLIGHT_SMOOTHING_FACTOR: f32 = 0.1;

// Minimum visible fraction of an element's area before it reveals
pub const REVEAL_THRESHOLD: f32 = 0.1;

// Zero means "every display refresh"; the browser decides the cadence
pub const TICK_INTERVAL_MS: u64 = 0;

// Nominal refresh period used when a host drives ticks itself (~60 Hz)
pub const NOMINAL_FRAME_MS: u64 = 16;

// Distance (px) under which the spotlight counts as settled
pub const SPOTLIGHT_SETTLE_EPSILON: f32 = 0.01;

// Markup contract
pub const ROOT_ID: &str = "landing-root";
pub const SPOTLIGHT_ID: &str = "spotlight";
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const TIER_CARD_SELECTOR: &str = ".card[data-tier]";
pub const TIER_ATTRIBUTE: &str = "data-tier";

pub const VISIBLE_CLASS: &str = "visible";
// Set on the root once reveal tracking runs; CSS only hides content under it
pub const REVEAL_READY_CLASS: &str = "reveal-ready";
pub const SELECTED_CLASS: &str = "selected";

// Style variables consumed by the glow's CSS
pub const SPOTLIGHT_VAR_X: &str = "--spotlight-x";
pub const SPOTLIGHT_VAR_Y: &str = "--spotlight-y";

// Optional configuration attributes on the root element
pub const ATTR_SPOTLIGHT_FACTOR: &str = "data-spotlight-factor";
pub const ATTR_REVEAL_THRESHOLD: &str = "data-reveal-threshold";
pub const ATTR_DEFAULT_TIER: &str = "data-default-tier";
