use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use technical_analysis::MIN_FIBONACCI_BARS;

use crate::composite::BlendWeights;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    // Blend without news (must sum to 1.0)
    pub fundamental_weight: f64, // 0.75
    pub technical_weight: f64,   // 0.25

    // News sentiment
    pub enable_news_sentiment: bool, // false
    pub news_weight: f64,            // 0.20, taken proportionally from the other two

    // Structural analysis
    pub fibonacci_period: usize, // 50 bars
}

impl ScoringConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`ScoringConfig::from_env`] over any variable lookup.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let config = Self {
            fundamental_weight: var("FUNDAMENTAL_WEIGHT", "0.75")
                .parse()
                .context("FUNDAMENTAL_WEIGHT must be a number")?,
            technical_weight: var("TECHNICAL_WEIGHT", "0.25")
                .parse()
                .context("TECHNICAL_WEIGHT must be a number")?,
            enable_news_sentiment: var("ENABLE_NEWS_SENTIMENT", "false")
                .parse()
                .context("ENABLE_NEWS_SENTIMENT must be true or false")?,
            news_weight: var("NEWS_WEIGHT", "0.20")
                .parse()
                .context("NEWS_WEIGHT must be a number")?,
            fibonacci_period: var("FIBONACCI_PERIOD", "50")
                .parse()
                .context("FIBONACCI_PERIOD must be a positive integer")?,
        };

        Ok(config)
    }

    /// Effective blend: news takes its share only when enabled.
    pub fn blend_weights(&self) -> BlendWeights {
        let base = BlendWeights::new(self.fundamental_weight, self.technical_weight, 0.0);
        if self.enable_news_sentiment {
            base.with_news(self.news_weight)
        } else {
            base
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.news_weight) {
            bail!("NEWS_WEIGHT must be within [0, 1), got {}", self.news_weight);
        }
        if self.fibonacci_period < MIN_FIBONACCI_BARS {
            bail!(
                "FIBONACCI_PERIOD must be at least {}, got {}",
                MIN_FIBONACCI_BARS,
                self.fibonacci_period
            );
        }
        self.blend_weights()
            .validate()
            .context("FUNDAMENTAL_WEIGHT and TECHNICAL_WEIGHT must sum to 1")?;
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fundamental_weight: 0.75,
            technical_weight: 0.25,
            enable_news_sentiment: false,
            news_weight: 0.20,
            fibonacci_period: 50,
        }
    }
}
