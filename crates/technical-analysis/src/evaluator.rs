//! Sector-independent scoring of technical readings.
//!
//! Each reading maps to a 0-10 score with a fixed weight; the seven weights
//! sum to 100. Scores favor oversold, discounted setups.

use analysis_core::ladder::{above, at_least, below, outcome};
use analysis_core::{IndicatorScore, Ladder, Outcome};
use serde::{Deserialize, Serialize};

pub const RSI_WEIGHT: f64 = 22.0;
pub const STOCHASTIC_WEIGHT: f64 = 5.0;
pub const BOLLINGER_WEIGHT: f64 = 20.0;
pub const MACD_WEIGHT: f64 = 22.0;
pub const OBV_WEIGHT: f64 = 5.0;
pub const EMA200_WEIGHT: f64 = 21.0;
pub const ADX_WEIGHT: f64 = 5.0;

const UNAVAILABLE: Outcome = outcome(5.0, "Indicator unavailable");

/// Latest value(s) of one technical indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TechnicalReading {
    Rsi(f64),
    Stochastic { k: f64, d: f64 },
    Bollinger { close: f64, lower: f64, middle: f64, upper: f64 },
    Macd { macd: f64, signal: f64 },
    /// Mean OBV over the last 5 sessions vs the 15 before them.
    Obv { recent: f64, previous: f64 },
    Ema200 { close: f64, ema: f64 },
    Adx(f64),
}

impl TechnicalReading {
    pub fn name(&self) -> &'static str {
        match self {
            TechnicalReading::Rsi(_) => "RSI",
            TechnicalReading::Stochastic { .. } => "Stochastic",
            TechnicalReading::Bollinger { .. } => "Bollinger Bands",
            TechnicalReading::Macd { .. } => "MACD",
            TechnicalReading::Obv { .. } => "OBV",
            TechnicalReading::Ema200 { .. } => "EMA200",
            TechnicalReading::Adx(_) => "ADX",
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            TechnicalReading::Rsi(_) => RSI_WEIGHT,
            TechnicalReading::Stochastic { .. } => STOCHASTIC_WEIGHT,
            TechnicalReading::Bollinger { .. } => BOLLINGER_WEIGHT,
            TechnicalReading::Macd { .. } => MACD_WEIGHT,
            TechnicalReading::Obv { .. } => OBV_WEIGHT,
            TechnicalReading::Ema200 { .. } => EMA200_WEIGHT,
            TechnicalReading::Adx(_) => ADX_WEIGHT,
        }
    }

    fn values(&self) -> Vec<f64> {
        match *self {
            TechnicalReading::Rsi(v) | TechnicalReading::Adx(v) => vec![v],
            TechnicalReading::Stochastic { k, d } => vec![k, d],
            TechnicalReading::Bollinger { close, lower, middle, upper } => vec![close, lower, middle, upper],
            TechnicalReading::Macd { macd, signal } => vec![macd, signal],
            TechnicalReading::Obv { recent, previous } => vec![recent, previous],
            TechnicalReading::Ema200 { close, ema } => vec![close, ema],
        }
    }

    fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}

static RSI_LADDER: Ladder = Ladder::new(
    &[
        below(22.0, 10.0, "Extreme oversold, panic selling: exceptional opportunity"),
        below(28.0, 9.0, "Deeply oversold: strong rebound potential"),
        below(30.0, 8.0, "Oversold"),
        below(35.0, 7.0, "Approaching oversold"),
        below(45.0, 6.0, "Weak momentum, slight discount"),
        below(50.0, 5.0, "Neutral, slightly soft"),
        below(55.0, 4.0, "Neutral, slightly firm"),
        below(65.0, 3.0, "Strong momentum, limited upside"),
    ],
    outcome(1.0, "Overbought: elevated pullback risk"),
    UNAVAILABLE,
);

static OBV_LADDER: Ladder = Ladder::new(
    &[
        above(8.0, 9.0, "Strong accumulation"),
        above(3.0, 7.0, "Moderate accumulation"),
        above(1.0, 5.0, "Mild inflow"),
        at_least(-1.0, 4.0, "Stable volume flow"),
        at_least(-3.0, 3.0, "Light outflow"),
    ],
    outcome(1.0, "Heavy distribution"),
    UNAVAILABLE,
);

static EMA200_LADDER: Ladder = Ladder::new(
    &[
        below(-18.0, 10.0, "Deep discount to the 200-day trend"),
        below(-10.0, 9.0, "Strong discount to the 200-day trend"),
        below(-5.0, 7.0, "Moderate discount to the 200-day trend"),
        below(-2.5, 6.0, "Slightly below the 200-day trend"),
        below(0.0, 5.0, "Just below the 200-day trend"),
        below(2.5, 4.0, "Just above the 200-day trend"),
        below(5.0, 3.0, "Premium to the 200-day trend"),
    ],
    outcome(1.0, "Extended well above the 200-day trend"),
    UNAVAILABLE,
);

static ADX_LADDER: Ladder = Ladder::new(
    &[
        below(10.0, 8.0, "No trend: range conditions"),
        below(20.0, 7.0, "Weak trend"),
        below(30.0, 5.0, "Established trend"),
        below(40.0, 3.0, "Strong trend"),
    ],
    outcome(1.0, "Very strong trend, likely exhausted"),
    UNAVAILABLE,
);

pub fn rate_rsi(rsi: f64) -> Outcome {
    RSI_LADDER.evaluate(Some(rsi))
}

pub fn rate_stochastic(k: f64, d: f64) -> Outcome {
    if k < 15.0 && k > d {
        outcome(9.0, "Oversold with bullish %K/%D cross")
    } else if k < 25.0 {
        outcome(8.0, "Oversold")
    } else if k <= 40.0 {
        outcome(6.0, "Low zone")
    } else if k <= 65.0 {
        outcome(4.0, "Neutral zone")
    } else if k <= 80.0 {
        outcome(3.0, "High zone")
    } else {
        outcome(1.0, "Overbought")
    }
}

pub fn rate_bollinger(close: f64, lower: f64, middle: f64, upper: f64) -> Outcome {
    if close < lower * 0.97 {
        outcome(10.0, "Well below the lower band: strong oversold signal")
    } else if close < lower {
        outcome(8.0, "Below the lower band")
    } else if close < middle {
        outcome(6.0, "Between lower band and midline")
    } else if close < upper {
        outcome(4.0, "Between midline and upper band")
    } else {
        outcome(2.0, "At or above the upper band")
    }
}

pub fn rate_macd(macd: f64, signal: f64) -> Outcome {
    let bullish = macd > signal;
    if bullish && macd < -0.6 {
        outcome(10.0, "Bullish cross deep below zero: early reversal")
    } else if bullish && macd < -0.3 {
        outcome(9.0, "Bullish cross below zero")
    } else if bullish && macd < 0.0 {
        outcome(7.0, "Bullish cross near zero")
    } else if bullish {
        outcome(5.0, "Bullish above zero: trend already priced in")
    } else if macd < signal && macd < -0.3 {
        outcome(3.0, "Bearish below zero")
    } else {
        outcome(2.0, "Bearish momentum")
    }
}

/// OBV change in percent between the two averaging windows; 0 when the base is 0.
pub fn obv_variation(recent: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (recent - previous) / previous.abs() * 100.0
    }
}

pub fn rate_obv(recent: f64, previous: f64) -> Outcome {
    OBV_LADDER.evaluate(Some(obv_variation(recent, previous)))
}

/// Percent distance of `close` from the 200-day EMA; `None` for a non-positive EMA.
pub fn ema200_discount(close: f64, ema: f64) -> Option<f64> {
    if ema <= 0.0 {
        return None;
    }
    Some((close - ema) / ema * 100.0)
}

pub fn rate_ema200(close: f64, ema: f64) -> Outcome {
    EMA200_LADDER.evaluate(ema200_discount(close, ema))
}

pub fn rate_adx(adx: f64) -> Outcome {
    ADX_LADDER.evaluate(Some(adx))
}

fn display_value(reading: &TechnicalReading) -> String {
    match *reading {
        TechnicalReading::Rsi(v) | TechnicalReading::Adx(v) => format!("{:.1}", v),
        TechnicalReading::Stochastic { k, d } => format!("K {:.1} / D {:.1}", k, d),
        TechnicalReading::Bollinger { close, lower, upper, .. } => {
            format!("{:.2} in [{:.2}, {:.2}]", close, lower, upper)
        }
        TechnicalReading::Macd { macd, signal } => format!("{:.3} / {:.3}", macd, signal),
        TechnicalReading::Obv { recent, previous } => {
            format!("{:+.1}%", obv_variation(recent, previous))
        }
        TechnicalReading::Ema200 { close, ema } => match ema200_discount(close, ema) {
            Some(d) => format!("{:+.1}%", d),
            None => "N/A".to_string(),
        },
    }
}

/// Score one reading. Non-finite inputs yield an unavailable, zero-weight score.
pub fn score_technical_indicator(reading: &TechnicalReading) -> IndicatorScore {
    if !reading.is_finite() {
        return IndicatorScore::new(reading.name(), None, "N/A", UNAVAILABLE.score, UNAVAILABLE.label);
    }

    let rated = match *reading {
        TechnicalReading::Rsi(v) => rate_rsi(v),
        TechnicalReading::Stochastic { k, d } => rate_stochastic(k, d),
        TechnicalReading::Bollinger { close, lower, middle, upper } => rate_bollinger(close, lower, middle, upper),
        TechnicalReading::Macd { macd, signal } => rate_macd(macd, signal),
        TechnicalReading::Obv { recent, previous } => rate_obv(recent, previous),
        TechnicalReading::Ema200 { close, ema } => rate_ema200(close, ema),
        TechnicalReading::Adx(v) => rate_adx(v),
    };

    let primary = reading.values()[0];
    IndicatorScore::new(reading.name(), Some(primary), display_value(reading), rated.score, rated.label)
        .with_weight(reading.weight())
}

/// Plain-language reading of a technical axis score.
pub fn technical_outlook(score: f64, contributing: &[IndicatorScore]) -> String {
    let base = if score >= 90.0 {
        "Exceptional technical setup: strongly oversold across indicators"
    } else if score >= 80.0 {
        "Very favorable technical setup"
    } else if score >= 70.0 {
        "Favorable technical setup"
    } else if score >= 60.0 {
        "Moderately favorable, some positive signals"
    } else if score >= 50.0 {
        "Neutral technical picture"
    } else if score >= 40.0 {
        "Mildly unfavorable, wait for a better entry"
    } else {
        "Unfavorable: overbought or extended"
    };

    let strong = contributing.iter().filter(|s| s.score >= 7.0).count();
    if strong >= 3 && score >= 70.0 {
        format!("{}; several indicators converge", base)
    } else if strong <= 1 && score < 50.0 {
        format!("{}; few supportive signals", base)
    } else {
        base.to_string()
    }
}
