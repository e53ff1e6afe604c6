use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DifficultyTier {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

/// Static display attributes of a tier card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierSpec {
    pub level: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub colors: &'static str,
    pub regions: &'static str,
    pub time_estimate: &'static str,
}

const BEGINNER: TierSpec = TierSpec {
    level: 1,
    icon: "🌱",
    title: "Beginner",
    blurb: "Simple shapes and fewer colors. Perfect for newcomers and quick projects.",
    colors: "20-30 colors",
    regions: "Large regions",
    time_estimate: "2-3 hours",
};

const INTERMEDIATE: TierSpec = TierSpec {
    level: 2,
    icon: "🎨",
    title: "Intermediate",
    blurb: "Balanced detail with richer colors. Great for weekend projects.",
    colors: "40-60 colors",
    regions: "Medium regions",
    time_estimate: "5-8 hours",
};

const EXPERT: TierSpec = TierSpec {
    level: 3,
    icon: "🏆",
    title: "Expert",
    blurb: "High detail with intricate regions. For experienced painters.",
    colors: "80-120 colors",
    regions: "Small regions",
    time_estimate: "15+ hours",
};

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 3] = [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Expert,
    ];

    pub fn spec(self) -> &'static TierSpec {
        match self {
            DifficultyTier::Beginner => &BEGINNER,
            DifficultyTier::Intermediate => &INTERMEDIATE,
            DifficultyTier::Expert => &EXPERT,
        }
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.spec().level
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(DifficultyTier::Beginner),
            2 => Some(DifficultyTier::Intermediate),
            3 => Some(DifficultyTier::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty tier `{0}` (expected 1, 2, 3 or a tier name)")]
pub struct TierParseError(pub String);

impl FromStr for DifficultyTier {
    type Err = TierParseError;

    /// Accepts the card level (`"1"`..`"3"`) or the tier name in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Self::from_level(level).ok_or_else(|| TierParseError(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|t| t.spec().title.eq_ignore_ascii_case(s))
            .ok_or_else(|| TierParseError(s.to_string()))
    }
}

/// The tier currently highlighted on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: DifficultyTier,
}

impl SelectionState {
    pub fn new(initial: DifficultyTier) -> Self {
        Self { selected: initial }
    }

    #[inline]
    pub fn selected(&self) -> DifficultyTier {
        self.selected
    }

    #[inline]
    pub fn is_selected(&self, tier: DifficultyTier) -> bool {
        self.selected == tier
    }

    /// Overwrite the selection. Returns the previous tier if it changed.
    pub fn select(&mut self, tier: DifficultyTier) -> Option<DifficultyTier> {
        if self.selected == tier {
            return None;
        }
        Some(std::mem::replace(&mut self.selected, tier))
    }
}
