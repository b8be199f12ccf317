use analysis_core::stats::mean;
use analysis_core::{compute_axis_score, AnalysisError, Axis, AxisScore, Bar};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::evaluator::*;
use crate::fibonacci::{analyze_fibonacci, FibonacciAnalysis, DEFAULT_FIBONACCI_PERIOD};
use crate::indicators::*;

/// MACD(12, 26, 9) needs 26 + 9 - 1 closes before its first signal value.
pub const MIN_TECHNICAL_BARS: usize = 34;

const RSI_PERIOD: usize = 14;
const STOCH_K_PERIOD: usize = 14;
const STOCH_D_PERIOD: usize = 3;
const MACD_FAST: usize = 12;
const MACD_SLOW: usize = 26;
const MACD_SIGNAL: usize = 9;
const BOLLINGER_PERIOD: usize = 20;
const BOLLINGER_STD: f64 = 2.0;
const EMA_TREND_PERIOD: usize = 200;
const ADX_PERIOD: usize = 14;
const OBV_RECENT: usize = 5;
const OBV_PREVIOUS: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalReport {
    pub symbol: String,
    pub axis: AxisScore,
    pub outlook: String,
    pub readings: Vec<TechnicalReading>,
    pub fibonacci: FibonacciAnalysis,
    pub metrics: serde_json::Value,
}

pub struct TechnicalAnalysisEngine {
    fibonacci_period: usize,
}

impl TechnicalAnalysisEngine {
    pub fn new() -> Self {
        Self {
            fibonacci_period: DEFAULT_FIBONACCI_PERIOD,
        }
    }

    pub fn with_fibonacci_period(mut self, period: usize) -> Self {
        self.fibonacci_period = period;
        self
    }

    /// Latest reading of every indicator whose warm-up is satisfied by `bars`.
    pub fn readings(&self, bars: &[Bar]) -> Vec<TechnicalReading> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let Some(&close) = closes.last() else {
            return Vec::new();
        };

        let mut readings = Vec::new();

        if let Some(&value) = rsi(&closes, RSI_PERIOD).last() {
            readings.push(TechnicalReading::Rsi(value));
        }

        if let Some((k, d)) = stochastic(bars, STOCH_K_PERIOD, STOCH_D_PERIOD).latest() {
            readings.push(TechnicalReading::Stochastic { k, d });
        }

        if let Some((lower, middle, upper)) = bollinger_bands(&closes, BOLLINGER_PERIOD, BOLLINGER_STD).latest() {
            readings.push(TechnicalReading::Bollinger { close, lower, middle, upper });
        }

        if let Some((macd, signal)) = macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL).latest() {
            readings.push(TechnicalReading::Macd { macd, signal });
        }

        let obv_values = obv(bars);
        if obv_values.len() >= OBV_RECENT + OBV_PREVIOUS {
            let n = obv_values.len();
            let recent = mean(&obv_values[n - OBV_RECENT..]);
            let previous = mean(&obv_values[n - OBV_RECENT - OBV_PREVIOUS..n - OBV_RECENT]);
            readings.push(TechnicalReading::Obv { recent, previous });
        }

        if let Some(&ema) = ema(&closes, EMA_TREND_PERIOD).last() {
            readings.push(TechnicalReading::Ema200 { close, ema });
        }

        if let Some(&value) = adx(bars, ADX_PERIOD).adx.last() {
            readings.push(TechnicalReading::Adx(value));
        }

        readings
    }

    pub fn analyze(&self, symbol: &str, bars: &[Bar]) -> Result<TechnicalReport, AnalysisError> {
        if bars.len() < MIN_TECHNICAL_BARS {
            return Err(AnalysisError::InsufficientData(format!(
                "Need at least {} bars for technical analysis, got {}",
                MIN_TECHNICAL_BARS,
                bars.len()
            )));
        }

        let readings = self.readings(bars);
        let scores = readings.iter().map(score_technical_indicator).collect();
        let axis = compute_axis_score(Axis::Technical, scores);
        let outlook = technical_outlook(axis.value, &axis.contributing);

        tracing::debug!(
            "{}: technical score {:.1} from {} indicators",
            symbol,
            axis.value,
            axis.contributing.len()
        );

        let fibonacci = analyze_fibonacci(bars, self.fibonacci_period);
        if !fibonacci.valid {
            tracing::warn!("{}: {}", symbol, fibonacci.interpretation);
        }

        let metrics = build_metrics(&readings, &fibonacci);

        Ok(TechnicalReport {
            symbol: symbol.to_string(),
            axis,
            outlook,
            readings,
            fibonacci,
            metrics,
        })
    }
}

fn build_metrics(readings: &[TechnicalReading], fibonacci: &FibonacciAnalysis) -> serde_json::Value {
    let mut metrics = serde_json::Map::new();

    for reading in readings {
        let value = match *reading {
            TechnicalReading::Rsi(v) | TechnicalReading::Adx(v) => json!(v),
            TechnicalReading::Stochastic { k, d } => json!({ "k": k, "d": d }),
            TechnicalReading::Bollinger { lower, middle, upper, .. } => {
                json!({ "lower": lower, "middle": middle, "upper": upper })
            }
            TechnicalReading::Macd { macd, signal } => json!({ "macd": macd, "signal": signal }),
            TechnicalReading::Obv { recent, previous } => {
                json!({ "variation_pct": obv_variation(recent, previous) })
            }
            TechnicalReading::Ema200 { close, ema } => {
                json!({ "ema": ema, "discount_pct": ema200_discount(close, ema) })
            }
        };
        metrics.insert(reading.name().to_lowercase().replace(' ', "_"), value);
    }

    metrics.insert("fibonacci_valid".to_string(), json!(fibonacci.valid));
    metrics.insert("fibonacci_trend".to_string(), json!(fibonacci.trend.name()));
    metrics.insert("fibonacci_position_score".to_string(), json!(fibonacci.position_score));

    serde_json::Value::Object(metrics)
}

impl Default for TechnicalAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
