//! Market data read from a JSON file instead of a live provider.

use analysis_core::{AnalysisError, Bar, FundamentalSnapshot, MarketDataProvider, NewsArticle, NewsSource};
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub symbol: String,
    #[serde(default)]
    pub fundamentals: Option<FundamentalSnapshot>,
    /// Second fundamentals source reconciled against `fundamentals`.
    #[serde(default)]
    pub cross_check: Option<FundamentalSnapshot>,
    #[serde(default)]
    pub bars: Vec<Bar>,
    #[serde(default)]
    pub news: Vec<NewsArticle>,
}

pub struct JsonFileProvider {
    fixture: Fixture,
}

impl JsonFileProvider {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let fixture: Fixture = serde_json::from_str(raw).context("invalid fixture JSON")?;
        Ok(Self { fixture })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read fixture {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn symbol(&self) -> &str {
        &self.fixture.symbol
    }

    fn check_symbol(&self, symbol: &str) -> Result<(), AnalysisError> {
        if symbol.eq_ignore_ascii_case(&self.fixture.symbol) {
            Ok(())
        } else {
            Err(AnalysisError::Provider(format!(
                "fixture holds {}, not {}",
                self.fixture.symbol, symbol
            )))
        }
    }
}

#[async_trait]
impl MarketDataProvider for JsonFileProvider {
    async fn fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot, AnalysisError> {
        self.check_symbol(symbol)?;
        self.fixture
            .fundamentals
            .clone()
            .ok_or_else(|| AnalysisError::Provider(format!("{}: fixture has no fundamentals", symbol)))
    }

    async fn daily_bars(&self, symbol: &str) -> Result<Vec<Bar>, AnalysisError> {
        self.check_symbol(symbol)?;
        let mut bars = self.fixture.bars.clone();
        bars.sort_by_key(|b| b.timestamp);
        Ok(bars)
    }

    async fn cross_check_fundamentals(&self, symbol: &str) -> Result<Option<FundamentalSnapshot>, AnalysisError> {
        self.check_symbol(symbol)?;
        Ok(self.fixture.cross_check.clone())
    }
}

#[async_trait]
impl NewsSource for JsonFileProvider {
    async fn recent_articles(&self, _query: &str) -> Result<Vec<NewsArticle>, AnalysisError> {
        Ok(self.fixture.news.clone())
    }
}
