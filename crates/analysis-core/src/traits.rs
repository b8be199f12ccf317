use async_trait::async_trait;
use crate::{AnalysisError, Bar, FundamentalSnapshot, NewsArticle, SentimentProbabilities};

/// Supplier of price history and fundamentals for an instrument.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot, AnalysisError>;

    /// Daily bars in chronological order.
    async fn daily_bars(&self, symbol: &str) -> Result<Vec<Bar>, AnalysisError>;

    /// Fundamentals from an independent source, used to cross-check
    /// [`MarketDataProvider::fundamentals`]. Most providers have none.
    async fn cross_check_fundamentals(&self, _symbol: &str) -> Result<Option<FundamentalSnapshot>, AnalysisError> {
        Ok(None)
    }
}

/// Supplier of recent news for a company.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn recent_articles(&self, query: &str) -> Result<Vec<NewsArticle>, AnalysisError>;
}

/// Pretrained text classifier returning class probabilities.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<SentimentProbabilities, AnalysisError>;
}
