use analysis_core::{compute_axis_score, AnalysisError, Axis, MarketDataProvider, SectorGroup};
use chrono::{DateTime, Utc};
use fundamental_analysis::{reconcile_snapshot, FundamentalAnalysisEngine, FundamentalReport};
use sentiment_analysis::{NewsSentimentEngine, SentimentScore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use technical_analysis::{TechnicalAnalysisEngine, TechnicalReport};

pub mod composite;
pub mod config;

pub use composite::{compute_final_score, BlendComponent, BlendWeights, CompositeScore, Recommendation};
pub use config::ScoringConfig;

/// Everything known about one instrument after a full evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentEvaluation {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub current_price: Option<f64>,
    pub sector_group: Option<SectorGroup>,
    pub fundamental: Option<FundamentalReport>,
    pub technical: Option<TechnicalReport>,
    pub sentiment: Option<SentimentScore>,
    pub composite: CompositeScore,
}

pub struct AnalysisOrchestrator {
    market_data: Arc<dyn MarketDataProvider>,
    fundamental_analyzer: FundamentalAnalysisEngine,
    technical_analyzer: TechnicalAnalysisEngine,
    /// Only consulted when the blend gives news a share.
    news_analyzer: Option<NewsSentimentEngine>,
    weights: BlendWeights,
}

impl AnalysisOrchestrator {
    pub fn new(market_data: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            market_data,
            fundamental_analyzer: FundamentalAnalysisEngine::new(),
            technical_analyzer: TechnicalAnalysisEngine::new(),
            news_analyzer: None,
            weights: BlendWeights::default(),
        }
    }

    /// Orchestrator set up from validated configuration.
    pub fn from_config(market_data: Arc<dyn MarketDataProvider>, config: &ScoringConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::new(market_data)
            .with_weights(config.blend_weights())
            .with_fibonacci_period(config.fibonacci_period))
    }

    pub fn with_weights(mut self, weights: BlendWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_fibonacci_period(mut self, period: usize) -> Self {
        self.technical_analyzer = TechnicalAnalysisEngine::new().with_fibonacci_period(period);
        self
    }

    pub fn with_news(mut self, engine: NewsSentimentEngine) -> Self {
        self.news_analyzer = Some(engine);
        self
    }

    pub fn weights(&self) -> &BlendWeights {
        &self.weights
    }

    /// Fetch inputs, score every axis that has data, and blend.
    ///
    /// A failed provider call degrades the matching axis instead of failing
    /// the evaluation; an error is returned only when no axis can be scored.
    pub async fn evaluate(&self, symbol: &str) -> Result<InstrumentEvaluation, AnalysisError> {
        tracing::info!("Starting evaluation for {}", symbol);

        let (fundamentals_result, cross_check_result, bars_result) = tokio::join!(
            self.market_data.fundamentals(symbol),
            self.market_data.cross_check_fundamentals(symbol),
            self.market_data.daily_bars(symbol),
        );

        let cross_check = cross_check_result.unwrap_or_else(|e| {
            tracing::warn!("{}: cross-check fundamentals unavailable: {}", symbol, e);
            None
        });

        let mut quoted_price = None;
        let fundamental = match fundamentals_result {
            Ok(mut snapshot) => {
                if let Some(secondary) = &cross_check {
                    tracing::debug!("{}: reconciling fundamentals with cross-check source", symbol);
                    snapshot = reconcile_snapshot(snapshot, secondary);
                }
                if snapshot.symbol.is_empty() {
                    snapshot.symbol = symbol.to_string();
                }
                quoted_price = snapshot.current_price;
                Some(self.fundamental_analyzer.analyze(&snapshot))
            }
            Err(e) => {
                tracing::warn!("{}: fundamentals unavailable: {}", symbol, e);
                None
            }
        };

        let bars = bars_result.unwrap_or_else(|e| {
            tracing::warn!("{}: price history unavailable: {}", symbol, e);
            Vec::new()
        });
        let bars: Vec<_> = bars.into_iter().filter(|b| b.is_finite()).collect();

        let technical = match self.technical_analyzer.analyze(symbol, &bars) {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!("{}: technical analysis skipped: {}", symbol, e);
                None
            }
        };

        let sentiment = match &self.news_analyzer {
            Some(engine) if self.weights.news > 0.0 => match engine.score(symbol).await {
                Ok(score) => Some(score),
                Err(e) => {
                    tracing::warn!("{}: news sentiment unavailable: {}", symbol, e);
                    None
                }
            },
            _ => None,
        };

        let fundamental_axis = fundamental
            .as_ref()
            .map(|r| r.axis.clone())
            .unwrap_or_else(|| compute_axis_score(Axis::Fundamental, Vec::new()));
        let technical_axis = technical
            .as_ref()
            .map(|r| r.axis.clone())
            .unwrap_or_else(|| compute_axis_score(Axis::Technical, Vec::new()));

        let composite = compute_final_score(
            &fundamental_axis,
            &technical_axis,
            sentiment.as_ref().map(|s| s.score),
            &self.weights,
        )?;

        // quoted price first, last close otherwise
        let current_price = quoted_price.or_else(|| bars.last().map(|b| b.close));

        tracing::info!(
            "{}: final score {:.1}/100 - {}",
            symbol,
            composite.score,
            composite.label
        );

        Ok(InstrumentEvaluation {
            symbol: symbol.to_string(),
            timestamp: Utc::now(),
            current_price,
            sector_group: fundamental.as_ref().map(|r| r.sector_group),
            fundamental,
            technical,
            sentiment,
            composite,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::{Bar, FundamentalSnapshot, NewsArticle, NewsSource};
    use approx::assert_relative_eq;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};

    struct InMemoryMarket {
        snapshot: Option<FundamentalSnapshot>,
        bars: Option<Vec<Bar>>,
    }

    struct CrossCheckedMarket {
        inner: InMemoryMarket,
        secondary: FundamentalSnapshot,
    }

    #[async_trait]
    impl MarketDataProvider for CrossCheckedMarket {
        async fn fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot, AnalysisError> {
            self.inner.fundamentals(symbol).await
        }

        async fn daily_bars(&self, symbol: &str) -> Result<Vec<Bar>, AnalysisError> {
            self.inner.daily_bars(symbol).await
        }

        async fn cross_check_fundamentals(&self, _symbol: &str) -> Result<Option<FundamentalSnapshot>, AnalysisError> {
            Ok(Some(self.secondary.clone()))
        }
    }

    #[async_trait]
    impl MarketDataProvider for InMemoryMarket {
        async fn fundamentals(&self, symbol: &str) -> Result<FundamentalSnapshot, AnalysisError> {
            self.snapshot
                .clone()
                .ok_or_else(|| AnalysisError::Provider(format!("no fundamentals for {}", symbol)))
        }

        async fn daily_bars(&self, symbol: &str) -> Result<Vec<Bar>, AnalysisError> {
            self.bars
                .clone()
                .ok_or_else(|| AnalysisError::Provider(format!("no bars for {}", symbol)))
        }
    }

    struct StaticNews(Vec<NewsArticle>);

    #[async_trait]
    impl NewsSource for StaticNews {
        async fn recent_articles(&self, _query: &str) -> Result<Vec<NewsArticle>, AnalysisError> {
            Ok(self.0.clone())
        }
    }

    fn bars(n: usize) -> Vec<Bar> {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        (0..n)
            .map(|i| {
                let c = 100.0 + (i as f64 * 0.15).sin() * 6.0;
                Bar {
                    timestamp: start + Duration::days(i as i64),
                    open: c,
                    high: c * 1.01,
                    low: c * 0.99,
                    close: c,
                    volume: 2_000_000.0 + (i % 5) as f64 * 50_000.0,
                }
            })
            .collect()
    }

    fn snapshot() -> FundamentalSnapshot {
        FundamentalSnapshot {
            sector: Some("Industrials".to_string()),
            current_price: Some(101.5),
            return_on_equity: Some(0.18),
            return_on_assets: Some(0.07),
            forward_pe: Some(16.0),
            trailing_pe: Some(19.0),
            debt_to_equity: Some(70.0),
            current_ratio: Some(1.6),
            profit_margin: Some(0.11),
            beta: Some(1.05),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_full_evaluation() {
        let market = Arc::new(InMemoryMarket {
            snapshot: Some(snapshot()),
            bars: Some(bars(260)),
        });
        let eval = AnalysisOrchestrator::new(market).evaluate("ACME").await.unwrap();

        assert_eq!(eval.symbol, "ACME");
        assert_eq!(eval.sector_group, Some(SectorGroup::Industrials));
        assert_eq!(eval.current_price, Some(101.5));
        assert_eq!(eval.composite.components.len(), 2);

        let fundamental = eval.fundamental.as_ref().unwrap().axis.value;
        let technical = eval.technical.as_ref().unwrap().axis.value;
        assert_relative_eq!(eval.composite.score, 0.75 * fundamental + 0.25 * technical, epsilon = 1e-9);
        assert_eq!(eval.fundamental.unwrap().symbol, "ACME");
    }

    #[tokio::test]
    async fn test_cross_check_fundamentals_are_reconciled() {
        let mut primary = snapshot();
        primary.beta = None;
        primary.sector = None;
        let market = Arc::new(CrossCheckedMarket {
            inner: InMemoryMarket {
                snapshot: Some(primary),
                bars: Some(bars(260)),
            },
            secondary: FundamentalSnapshot {
                sector: Some("Industrials".to_string()),
                beta: Some(1.05),
                // percent form on the cross-check side, 18% against 0.18
                return_on_equity: Some(18.0),
                ..Default::default()
            },
        });
        let reconciled = AnalysisOrchestrator::new(market).evaluate("ACME").await.unwrap();

        let plain = Arc::new(InMemoryMarket {
            snapshot: Some(snapshot()),
            bars: Some(bars(260)),
        });
        let expected = AnalysisOrchestrator::new(plain).evaluate("ACME").await.unwrap();

        assert_eq!(reconciled.sector_group, Some(SectorGroup::Industrials));
        let fundamental = reconciled.fundamental.unwrap();
        let beta = fundamental.axis.contributing.iter().find(|s| s.name == "Beta").unwrap();
        assert_eq!(beta.raw_value, Some(1.05));
        assert_relative_eq!(
            fundamental.axis.value,
            expected.fundamental.unwrap().axis.value,
            epsilon = 1e-9
        );
    }

    #[tokio::test]
    async fn test_missing_bars_degrades_to_fundamentals() {
        let market = Arc::new(InMemoryMarket {
            snapshot: Some(snapshot()),
            bars: None,
        });
        let eval = AnalysisOrchestrator::new(market).evaluate("ACME").await.unwrap();

        assert!(eval.technical.is_none());
        assert_eq!(eval.current_price, Some(101.5));
        let fundamental = eval.fundamental.unwrap().axis.value;
        assert_relative_eq!(eval.composite.score, fundamental, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn test_price_falls_back_to_last_close() {
        let history = bars(120);
        let last_close = history.last().unwrap().close;
        let market = Arc::new(InMemoryMarket {
            snapshot: None,
            bars: Some(history),
        });
        let eval = AnalysisOrchestrator::new(market).evaluate("ACME").await.unwrap();

        assert!(eval.fundamental.is_none());
        assert_eq!(eval.current_price, Some(last_close));
        assert_eq!(eval.composite.components.len(), 1);
    }

    #[tokio::test]
    async fn test_nothing_scorable_is_an_error() {
        let market = Arc::new(InMemoryMarket {
            snapshot: None,
            bars: Some(bars(10)),
        });
        let result = AnalysisOrchestrator::new(market).evaluate("ACME").await;
        assert!(matches!(result, Err(AnalysisError::InsufficientData(_))));
    }

    #[tokio::test]
    async fn test_news_enters_blend_when_enabled() {
        let market = Arc::new(InMemoryMarket {
            snapshot: Some(snapshot()),
            bars: Some(bars(260)),
        });
        let news = NewsSentimentEngine::with_lexicon(Arc::new(StaticNews(vec![NewsArticle {
            title: "Record profit and strong growth".to_string(),
            published_utc: None,
            url: None,
            content: None,
        }])));
        let config = ScoringConfig {
            enable_news_sentiment: true,
            ..Default::default()
        };

        let eval = AnalysisOrchestrator::from_config(market, &config)
            .unwrap()
            .with_news(news)
            .evaluate("ACME")
            .await
            .unwrap();

        let sentiment = eval.sentiment.unwrap();
        assert!(sentiment.score > 60.0);
        assert_eq!(eval.composite.components.len(), 3);
    }

    #[tokio::test]
    async fn test_news_ignored_without_weight() {
        let market = Arc::new(InMemoryMarket {
            snapshot: Some(snapshot()),
            bars: Some(bars(260)),
        });
        let news = NewsSentimentEngine::with_lexicon(Arc::new(StaticNews(Vec::new())));
        let eval = AnalysisOrchestrator::new(market)
            .with_news(news)
            .evaluate("ACME")
            .await
            .unwrap();

        assert!(eval.sentiment.is_none());
        assert_eq!(eval.composite.components.len(), 2);
    }
}
