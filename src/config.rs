use crate::constants::*;
use crate::core::{DifficultyTier, TierParseError};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("smoothing factor must lie in (0, 1), got {0}")]
    SmoothingFactor(f32),
    #[error("reveal threshold must lie in [0, 1], got {0}")]
    RevealThreshold(f32),
    #[error("attribute {attribute} is not a number: `{value}`")]
    NotANumber {
        attribute: &'static str,
        value: String,
    },
    #[error(transparent)]
    Tier(#[from] TierParseError),
}

/// Tunables for one page view.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub smoothing_factor: f32,
    pub reveal_threshold: f32,
    pub tick_interval: Duration,
    pub default_tier: DifficultyTier,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: SPOTLIGHT_SMOOTHING_FACTOR,
            reveal_threshold: REVEAL_THRESHOLD,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            default_tier: DifficultyTier::default(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = self.smoothing_factor;
        if !(f > 0.0 && f < 1.0) {
            return Err(ConfigError::SmoothingFactor(f));
        }
        let t = self.reveal_threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(ConfigError::RevealThreshold(t));
        }
        Ok(())
    }

    /// Defaults overlaid with whatever `lookup` returns for the `data-*`
    /// configuration attributes.
    pub fn from_attributes(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ATTR_SPOTLIGHT_FACTOR) {
            cfg.smoothing_factor = parse_f32(ATTR_SPOTLIGHT_FACTOR, &v)?;
        }
        if let Some(v) = lookup(ATTR_REVEAL_THRESHOLD) {
            cfg.reveal_threshold = parse_f32(ATTR_REVEAL_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ATTR_DEFAULT_TIER) {
            cfg.default_tier = v.parse()?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_f32(attribute: &'static str, value: &str) -> Result<f32, ConfigError> {
    value
        .trim()
        .parse::<f32>()
        .map_err(|_| ConfigError::NotANumber {
            attribute,
            value: value.to_string(),
        })
}
