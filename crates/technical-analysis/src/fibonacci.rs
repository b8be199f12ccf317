//! Fibonacci structural analysis over a trailing price window.
//!
//! Derives retracement and extension levels from the window's high/low, reads
//! the trend, and turns it into support/resistance, an entry zone, a stop,
//! reward targets and a 0-10 position score.

use analysis_core::stats::mean;
use analysis_core::{Bar, Trend};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FIBONACCI_PERIOD: usize = 50;
pub const MIN_FIBONACCI_BARS: usize = 10;

/// Window range must be at least this fraction of the price.
const MIN_RANGE_RATIO: f64 = 0.02;
const TREND_CHANGE_THRESHOLD: f64 = 0.05;
const TREND_SMA_THRESHOLD: f64 = 0.02;
const SHORT_SMA_PERIOD: usize = 10;
/// Level-matching tolerance as a fraction of range.
const LEVEL_TOLERANCE: f64 = 0.01;
const STOP_BUFFER: f64 = 0.01;
const NEUTRAL_ZONE_WIDTH: f64 = 0.02;
const KEY_LEVEL_PROXIMITY: f64 = 0.03;
const MAX_TARGETS: usize = 5;
const NEUTRAL_POSITION_SCORE: f64 = 5.0;

pub const RETRACEMENT_RATIOS: [(&str, f64); 7] = [
    ("100%", 1.0),
    ("78.6%", 0.786),
    ("61.8%", 0.618),
    ("50%", 0.5),
    ("38.2%", 0.382),
    ("23.6%", 0.236),
    ("0%", 0.0),
];

pub const EXTENSION_RATIOS: [(&str, f64); 4] = [
    ("127.2%", 1.272),
    ("141.4%", 1.414),
    ("161.8%", 1.618),
    ("200%", 2.0),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FibonacciLevel {
    pub label: String,
    pub ratio: f64,
    pub price: f64,
}

/// Levels for one window. Retracements are ordered from the low (100%) up to
/// the high (0%); extensions all sit above the high.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FibonacciLevelSet {
    pub high: f64,
    pub low: f64,
    pub range: f64,
    pub retracements: Vec<FibonacciLevel>,
    pub extensions: Vec<FibonacciLevel>,
}

impl FibonacciLevelSet {
    pub fn from_range(high: f64, low: f64) -> Self {
        let range = high - low;
        let retracements = RETRACEMENT_RATIOS
            .iter()
            .map(|&(label, ratio)| FibonacciLevel {
                label: label.to_string(),
                ratio,
                price: high - range * ratio,
            })
            .collect();
        let extensions = EXTENSION_RATIOS
            .iter()
            .map(|&(label, ratio)| FibonacciLevel {
                label: label.to_string(),
                ratio,
                price: low + range * ratio,
            })
            .collect();

        Self { high, low, range, retracements, extensions }
    }

    /// Retracement price for one of the standard ratios.
    pub fn retracement(&self, ratio: f64) -> Option<f64> {
        self.retracements
            .iter()
            .find(|l| (l.ratio - ratio).abs() < 1e-9)
            .map(|l| l.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Resistance,
    Extension,
    Support,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub level: f64,
    pub label: String,
    pub kind: TargetKind,
    /// Expected gain in percent, framed from the trade's direction.
    pub gain_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryZone {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralAnalysis {
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    pub entry_zone: EntryZone,
    pub stop_loss: f64,
    pub targets: Vec<Target>,
    pub risk_reward_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionQuality {
    Excellent,
    Good,
    Moderate,
    Unfavorable,
}

impl PositionQuality {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 7.5 => PositionQuality::Excellent,
            s if s >= 6.0 => PositionQuality::Good,
            s if s >= 4.0 => PositionQuality::Moderate,
            _ => PositionQuality::Unfavorable,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PositionQuality::Excellent => "Excellent",
            PositionQuality::Good => "Good",
            PositionQuality::Moderate => "Moderate",
            PositionQuality::Unfavorable => "Unfavorable",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FibonacciAnalysis {
    pub valid: bool,
    pub period_used: usize,
    pub current_price: Option<f64>,
    pub trend: Trend,
    pub levels: Option<FibonacciLevelSet>,
    pub structure: Option<StructuralAnalysis>,
    pub position_score: f64,
    pub position_quality: PositionQuality,
    pub interpretation: String,
}

impl FibonacciAnalysis {
    fn invalid(period_used: usize, current_price: Option<f64>, reason: &str) -> Self {
        Self {
            valid: false,
            period_used,
            current_price,
            trend: Trend::Neutral,
            levels: None,
            structure: None,
            position_score: NEUTRAL_POSITION_SCORE,
            position_quality: PositionQuality::from_score(NEUTRAL_POSITION_SCORE),
            interpretation: reason.to_string(),
        }
    }
}

/// Run the analysis over the trailing `period` bars (fewer if history is shorter).
///
/// Never fails: insufficient or degenerate windows come back with
/// `valid == false` and a neutral position score.
pub fn analyze_fibonacci(bars: &[Bar], period: usize) -> FibonacciAnalysis {
    let period_used = period.min(bars.len());
    let window = &bars[bars.len() - period_used..];
    let current_price = window.last().map(|b| b.close).filter(|p| p.is_finite());

    if period_used < MIN_FIBONACCI_BARS {
        return FibonacciAnalysis::invalid(
            period_used,
            current_price,
            "Not enough price history for Fibonacci analysis",
        );
    }
    if window.iter().any(|b| !b.is_finite()) {
        return FibonacciAnalysis::invalid(period_used, None, "Price history contains invalid values");
    }

    let price = window[window.len() - 1].close;
    let high = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let low = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let range = high - low;

    if price <= 0.0 || range <= 0.0 || range / price < MIN_RANGE_RATIO {
        return FibonacciAnalysis::invalid(
            period_used,
            Some(price),
            "Price range too narrow for meaningful Fibonacci levels",
        );
    }

    let levels = FibonacciLevelSet::from_range(high, low);
    let trend = detect_trend(window);
    let structure = build_structure(&levels, trend, price);
    let position_score = position_score(&levels, trend, price, structure.risk_reward_ratio);
    let position_quality = PositionQuality::from_score(position_score);
    let interpretation = describe(position_quality, trend, &levels, price, period_used, &structure);

    FibonacciAnalysis {
        valid: true,
        period_used,
        current_price: Some(price),
        trend,
        levels: Some(levels),
        structure: Some(structure),
        position_score,
        position_quality,
        interpretation,
    }
}

fn detect_trend(window: &[Bar]) -> Trend {
    let closes: Vec<f64> = window.iter().map(|b| b.close).collect();
    let first = closes[0];
    let last = closes[closes.len() - 1];

    let change = if first != 0.0 { (last - first) / first } else { 0.0 };

    let long_sma = mean(&closes);
    let short_sma = mean(&closes[closes.len().saturating_sub(SHORT_SMA_PERIOD)..]);
    let sma_gap = if long_sma != 0.0 { (short_sma - long_sma) / long_sma } else { 0.0 };

    if change > TREND_CHANGE_THRESHOLD && sma_gap > TREND_SMA_THRESHOLD {
        Trend::Bullish
    } else if change < -TREND_CHANGE_THRESHOLD && sma_gap < -TREND_SMA_THRESHOLD {
        Trend::Bearish
    } else {
        Trend::Neutral
    }
}

fn build_structure(levels: &FibonacciLevelSet, trend: Trend, price: f64) -> StructuralAnalysis {
    let tolerance = levels.range * LEVEL_TOLERANCE;

    let support = levels
        .retracements
        .iter()
        .map(|l| l.price)
        .filter(|&p| p < price - tolerance)
        .reduce(f64::max);
    let resistance = levels
        .retracements
        .iter()
        .map(|l| l.price)
        .filter(|&p| p > price + tolerance)
        .reduce(f64::min);

    let above: Vec<&FibonacciLevel> = levels
        .retracements
        .iter()
        .filter(|l| l.price > price + tolerance)
        .collect();

    let (entry_zone, stop_loss, targets): (EntryZone, f64, Vec<Target>) = match trend {
        Trend::Bullish => {
            let zone = EntryZone {
                low: levels.retracement(0.618).unwrap_or(levels.low),
                high: levels.retracement(0.382).unwrap_or(levels.high),
            };
            let floor = support
                .and_then(|s| {
                    levels
                        .retracements
                        .iter()
                        .map(|l| l.price)
                        .filter(|&p| p < s)
                        .reduce(f64::max)
                })
                .unwrap_or(levels.low);
            let targets = above
                .iter()
                .map(|l| long_target(l, TargetKind::Resistance, price))
                .chain(levels.extensions.iter().map(|l| long_target(l, TargetKind::Extension, price)))
                .take(MAX_TARGETS)
                .collect();
            (zone, floor * (1.0 - STOP_BUFFER), targets)
        }
        Trend::Bearish => {
            let bounce = resistance.map(|r| price + 0.5 * (r - price)).unwrap_or(price);
            let zone = EntryZone { low: price, high: bounce };
            let ceiling = resistance.unwrap_or(levels.high);
            let targets = levels
                .retracements
                .iter()
                .rev()
                .filter(|l| l.price < price - tolerance)
                .take(MAX_TARGETS)
                .map(|l| Target {
                    level: l.price,
                    label: l.label.clone(),
                    kind: TargetKind::Support,
                    gain_percent: (price - l.price) / price * 100.0,
                })
                .collect();
            (zone, ceiling * (1.0 + STOP_BUFFER), targets)
        }
        Trend::Neutral => {
            let mid = levels.retracement(0.5).unwrap_or(levels.low + levels.range / 2.0);
            let zone = EntryZone {
                low: mid * (1.0 - NEUTRAL_ZONE_WIDTH),
                high: mid * (1.0 + NEUTRAL_ZONE_WIDTH),
            };
            let floor = support.unwrap_or(levels.low);
            let targets = above
                .iter()
                .take(MAX_TARGETS)
                .map(|l| long_target(l, TargetKind::Resistance, price))
                .collect();
            (zone, floor * (1.0 - STOP_BUFFER), targets)
        }
    };

    let risk_reward_ratio = risk_reward(price, stop_loss, targets.first());

    StructuralAnalysis {
        support,
        resistance,
        entry_zone,
        stop_loss,
        targets,
        risk_reward_ratio,
    }
}

fn long_target(level: &FibonacciLevel, kind: TargetKind, price: f64) -> Target {
    Target {
        level: level.price,
        label: level.label.clone(),
        kind,
        gain_percent: (level.price - price) / price * 100.0,
    }
}

fn risk_reward(price: f64, stop: f64, first_target: Option<&Target>) -> Option<f64> {
    let target = first_target?;
    let risk = (price - stop).abs();
    if risk <= 0.0 {
        return None;
    }
    Some((target.level - price).abs() / risk)
}

fn position_score(levels: &FibonacciLevelSet, trend: Trend, price: f64, risk_reward: Option<f64>) -> f64 {
    let mut score = NEUTRAL_POSITION_SCORE;

    let depth = (levels.high - price) / levels.range * 100.0;
    if trend == Trend::Bullish && (35.0..=65.0).contains(&depth) {
        score += 1.5;
    }

    let position_in_range = (price - levels.low) / levels.range * 100.0;
    if position_in_range >= 80.0 {
        score -= 1.5;
    }

    let proximity = levels.range * KEY_LEVEL_PROXIMITY;
    let near_key_level = [0.5, 0.618]
        .iter()
        .filter_map(|&r| levels.retracement(r))
        .any(|level| (price - level).abs() <= proximity);
    if near_key_level {
        score += 1.0;
    }

    match risk_reward {
        Some(rr) if rr > 2.0 => score += 1.5,
        Some(rr) if rr < 1.0 => score -= 1.0,
        _ => {}
    }

    score.clamp(0.0, 10.0)
}

fn describe(
    quality: PositionQuality,
    trend: Trend,
    levels: &FibonacciLevelSet,
    price: f64,
    period: usize,
    structure: &StructuralAnalysis,
) -> String {
    let position_in_range = (price - levels.low) / levels.range * 100.0;
    let mut text = format!(
        "{} position: {} trend, price at {:.0}% of the {}-bar range",
        quality.name(),
        trend.name(),
        position_in_range,
        period
    );
    if let Some(rr) = structure.risk_reward_ratio {
        text.push_str(&format!(", risk/reward {:.2}", rr));
    }
    text
}
