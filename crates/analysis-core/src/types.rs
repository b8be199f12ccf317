use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// OHLCV bar data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

/// Coarse industry classification that selects interpretation ladders and weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectorGroup {
    Technology,
    Healthcare,
    FinancialServices,
    Energy,
    Utilities,
    RealEstate,
    ConsumerCyclical,
    ConsumerDefensive,
    CommunicationServices,
    Industrials,
    BasicMaterials,
    General,
}

impl SectorGroup {
    pub const ALL: [SectorGroup; 12] = [
        SectorGroup::Technology,
        SectorGroup::Healthcare,
        SectorGroup::FinancialServices,
        SectorGroup::Energy,
        SectorGroup::Utilities,
        SectorGroup::RealEstate,
        SectorGroup::ConsumerCyclical,
        SectorGroup::ConsumerDefensive,
        SectorGroup::CommunicationServices,
        SectorGroup::Industrials,
        SectorGroup::BasicMaterials,
        SectorGroup::General,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectorGroup::Technology => "Technology",
            SectorGroup::Healthcare => "Healthcare",
            SectorGroup::FinancialServices => "Financial Services",
            SectorGroup::Energy => "Energy",
            SectorGroup::Utilities => "Utilities",
            SectorGroup::RealEstate => "Real Estate",
            SectorGroup::ConsumerCyclical => "Consumer Cyclical",
            SectorGroup::ConsumerDefensive => "Consumer Defensive",
            SectorGroup::CommunicationServices => "Communication Services",
            SectorGroup::Industrials => "Industrials",
            SectorGroup::BasicMaterials => "Basic Materials",
            SectorGroup::General => "General",
        }
    }
}

impl fmt::Display for SectorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The dimension an indicator contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Fundamental,
    Technical,
    Sentiment,
}

/// One scored indicator, immutable once built.
///
/// `score` is always within [0, 10]. When the raw input was missing,
/// `available` is false and `score` carries the indicator's fallback value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorScore {
    pub name: String,
    pub display_value: String,
    pub raw_value: Option<f64>,
    pub score: f64,
    pub available: bool,
    pub interpretation: String,
    /// Contribution to the axis, in percent. Zero means informational only.
    pub weight: f64,
}

impl IndicatorScore {
    pub fn new(
        name: impl Into<String>,
        raw_value: Option<f64>,
        display_value: impl Into<String>,
        score: f64,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_value: display_value.into(),
            raw_value,
            score: clamp_score(score),
            available: raw_value.is_some(),
            interpretation: interpretation.into(),
            weight: 0.0,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight.clamp(0.0, 100.0);
        self
    }

    /// Weighted points on the 0-100 scale: `score * weight / 10`.
    pub fn weighted_points(&self) -> f64 {
        self.score * self.weight / 10.0
    }
}

/// Clamp to the [0, 10] indicator range. NaN collapses to 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 10.0)
    }
}

/// Normalized 0-100 result for one axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisScore {
    pub axis: Axis,
    pub value: f64,
    /// Sum of the weights that actually took part in `value`.
    pub applied_weight: f64,
    pub contributing: Vec<IndicatorScore>,
}

impl AxisScore {
    pub fn is_empty(&self) -> bool {
        self.applied_weight <= 0.0
    }
}

/// Direction of the structural price move over an analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl Trend {
    pub fn name(&self) -> &'static str {
        match self {
            Trend::Bullish => "bullish",
            Trend::Bearish => "bearish",
            Trend::Neutral => "neutral",
        }
    }
}

/// Raw fundamentals for one instrument as delivered by a market-data provider.
///
/// Ratios use the provider's conventions: ROE/ROA/margins/yields as fractions
/// (0.15 = 15%), except `debt_to_equity` and `dividend_yield` which arrive in
/// percent form (150.0 = 1.5x, 3.2 = 3.2%).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FundamentalSnapshot {
    pub symbol: String,
    pub sector: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,

    pub return_on_equity: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub forward_pe: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub beta: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub profit_margin: Option<f64>,
    pub operating_margin: Option<f64>,
    pub gross_margin: Option<f64>,
    pub earnings_growth: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub free_cash_flow: Option<f64>,
    pub operating_cash_flow: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub payout_ratio: Option<f64>,

    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,

    pub analyst_mean_rating: Option<f64>,
    pub analyst_count: Option<u32>,

    pub total_debt: Option<f64>,
    pub total_assets: Option<f64>,
    pub total_equity: Option<f64>,
    pub current_liabilities: Option<f64>,
    pub ebitda: Option<f64>,
    pub ebit: Option<f64>,
    pub interest_expense: Option<f64>,
}

/// News article handed to the sentiment classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub published_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewsArticle {
    /// Text fed to the classifier: title plus body when present.
    pub fn text(&self) -> String {
        match &self.content {
            Some(body) if !body.trim().is_empty() => format!("{}. {}", self.title, body),
            _ => self.title.clone(),
        }
    }
}

/// Class probabilities returned by a sentiment classifier for one article.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentProbabilities {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentProbabilities {
    /// Signed polarity in [-1, 1].
    pub fn polarity(&self) -> f64 {
        (self.positive - self.negative).clamp(-1.0, 1.0)
    }
}
