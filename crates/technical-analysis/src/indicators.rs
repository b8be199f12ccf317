use analysis_core::stats::population_std_dev;
use analysis_core::Bar;

/// Simple Moving Average
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![];
    }

    let mut result = Vec::with_capacity(data.len() - period + 1);
    for i in period - 1..data.len() {
        let sum: f64 = data[i + 1 - period..=i].iter().sum();
        result.push(sum / period as f64);
    }
    result
}

/// Exponential Moving Average, seeded with the SMA of the first `period` values.
///
/// `result[0]` lines up with `data[period - 1]`; the output has
/// `data.len() - period + 1` values, or none when data is too short.
pub fn ema(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![];
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut result = Vec::with_capacity(data.len() - period + 1);

    let seed = data[..period].iter().sum::<f64>() / period as f64;
    result.push(seed);

    for value in &data[period..] {
        let prev = result[result.len() - 1];
        result.push((value - prev) * multiplier + prev);
    }

    result
}

/// Relative Strength Index (Wilder smoothing)
pub fn rsi(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period + 1 {
        return vec![];
    }

    let mut gains = Vec::with_capacity(data.len() - 1);
    let mut losses = Vec::with_capacity(data.len() - 1);

    for window in data.windows(2) {
        let change = window[1] - window[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;

    let mut rsi_values = Vec::with_capacity(gains.len() - period + 1);
    rsi_values.push(rsi_from_averages(avg_gain, avg_loss));

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        rsi_values.push(rsi_from_averages(avg_gain, avg_loss));
    }

    rsi_values
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return if avg_gain == 0.0 { 50.0 } else { 100.0 };
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// MACD (Moving Average Convergence Divergence)
#[derive(Debug, Clone)]
pub struct MacdResult {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl MacdResult {
    /// Most recent (macd, signal) pair.
    pub fn latest(&self) -> Option<(f64, f64)> {
        Some((*self.macd_line.last()?, *self.signal_line.last()?))
    }
}

pub fn macd(data: &[f64], fast_period: usize, slow_period: usize, signal_period: usize) -> MacdResult {
    let empty = MacdResult { macd_line: vec![], signal_line: vec![], histogram: vec![] };
    if fast_period == 0 || signal_period == 0 || slow_period <= fast_period {
        return empty;
    }

    let ema_fast = ema(data, fast_period);
    let ema_slow = ema(data, slow_period);
    if ema_slow.is_empty() {
        return empty;
    }

    // ema_fast[i] and ema_slow[i - offset] refer to the same bar
    let offset = slow_period - fast_period;
    let macd_line: Vec<f64> = (offset..ema_fast.len())
        .map(|i| ema_fast[i] - ema_slow[i - offset])
        .collect();

    let signal_line = ema(&macd_line, signal_period);

    let hist_offset = macd_line.len().saturating_sub(signal_line.len());
    let histogram = signal_line
        .iter()
        .enumerate()
        .map(|(i, s)| macd_line[i + hist_offset] - s)
        .collect();

    MacdResult {
        macd_line,
        signal_line,
        histogram,
    }
}

/// Bollinger Bands
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

impl BollingerBands {
    /// Most recent (lower, middle, upper) bands.
    pub fn latest(&self) -> Option<(f64, f64, f64)> {
        Some((*self.lower.last()?, *self.middle.last()?, *self.upper.last()?))
    }
}

pub fn bollinger_bands(data: &[f64], period: usize, std_dev: f64) -> BollingerBands {
    if period == 0 || data.len() < period {
        return BollingerBands { upper: vec![], middle: vec![], lower: vec![] };
    }

    let middle = sma(data, period);
    let mut upper = Vec::with_capacity(middle.len());
    let mut lower = Vec::with_capacity(middle.len());

    for (i, mean) in middle.iter().enumerate() {
        let std = population_std_dev(&data[i..i + period]);
        upper.push(mean + std_dev * std);
        lower.push(mean - std_dev * std);
    }

    BollingerBands {
        upper,
        middle,
        lower,
    }
}

/// Stochastic Oscillator
#[derive(Debug, Clone)]
pub struct StochasticResult {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

impl StochasticResult {
    /// Most recent (%K, %D) pair.
    pub fn latest(&self) -> Option<(f64, f64)> {
        Some((*self.k.last()?, *self.d.last()?))
    }
}

pub fn stochastic(bars: &[Bar], k_period: usize, d_period: usize) -> StochasticResult {
    if k_period == 0 || bars.len() < k_period {
        return StochasticResult { k: vec![], d: vec![] };
    }

    let k_values: Vec<f64> = bars
        .windows(k_period)
        .map(|slice| {
            let highest = slice.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
            let lowest = slice.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
            let close = slice[slice.len() - 1].close;
            if highest == lowest {
                50.0
            } else {
                100.0 * (close - lowest) / (highest - lowest)
            }
        })
        .collect();

    let d_values = sma(&k_values, d_period);

    StochasticResult {
        k: k_values,
        d: d_values,
    }
}

/// On-Balance Volume
pub fn obv(bars: &[Bar]) -> Vec<f64> {
    let Some(first) = bars.first() else {
        return vec![];
    };

    let mut obv_values = Vec::with_capacity(bars.len());
    obv_values.push(first.volume);

    for pair in bars.windows(2) {
        let prev_obv = obv_values[obv_values.len() - 1];
        let (prev, bar) = (&pair[0], &pair[1]);
        let new_obv = if bar.close > prev.close {
            prev_obv + bar.volume
        } else if bar.close < prev.close {
            prev_obv - bar.volume
        } else {
            prev_obv
        };
        obv_values.push(new_obv);
    }

    obv_values
}

/// Average Directional Index (ADX), trend strength on a 0-100 scale
#[derive(Debug, Clone)]
pub struct AdxResult {
    pub adx: Vec<f64>,
    pub plus_di: Vec<f64>,
    pub minus_di: Vec<f64>,
}

pub fn adx(bars: &[Bar], period: usize) -> AdxResult {
    if period == 0 || bars.len() < period * 2 + 1 {
        return AdxResult { adx: vec![], plus_di: vec![], minus_di: vec![] };
    }

    let mut plus_dm = Vec::with_capacity(bars.len() - 1);
    let mut minus_dm = Vec::with_capacity(bars.len() - 1);
    let mut true_range = Vec::with_capacity(bars.len() - 1);

    for pair in bars.windows(2) {
        let (prev, bar) = (&pair[0], &pair[1]);
        let up_move = bar.high - prev.high;
        let down_move = prev.low - bar.low;

        plus_dm.push(if up_move > down_move && up_move > 0.0 { up_move } else { 0.0 });
        minus_dm.push(if down_move > up_move && down_move > 0.0 { down_move } else { 0.0 });

        let hl = bar.high - bar.low;
        let hc = (bar.high - prev.close).abs();
        let lc = (bar.low - prev.close).abs();
        true_range.push(hl.max(hc).max(lc));
    }

    // Wilder smoothing
    let mut smoothed_plus_dm = plus_dm[..period].iter().sum::<f64>();
    let mut smoothed_minus_dm = minus_dm[..period].iter().sum::<f64>();
    let mut smoothed_tr = true_range[..period].iter().sum::<f64>();

    let mut plus_di_values = Vec::new();
    let mut minus_di_values = Vec::new();
    let mut dx_values = Vec::new();

    for i in period..plus_dm.len() {
        smoothed_plus_dm = smoothed_plus_dm - smoothed_plus_dm / period as f64 + plus_dm[i];
        smoothed_minus_dm = smoothed_minus_dm - smoothed_minus_dm / period as f64 + minus_dm[i];
        smoothed_tr = smoothed_tr - smoothed_tr / period as f64 + true_range[i];

        let pdi = if smoothed_tr > 0.0 { 100.0 * smoothed_plus_dm / smoothed_tr } else { 0.0 };
        let mdi = if smoothed_tr > 0.0 { 100.0 * smoothed_minus_dm / smoothed_tr } else { 0.0 };

        plus_di_values.push(pdi);
        minus_di_values.push(mdi);

        let di_sum = pdi + mdi;
        let dx = if di_sum > 0.0 { 100.0 * (pdi - mdi).abs() / di_sum } else { 0.0 };
        dx_values.push(dx);
    }

    if dx_values.len() < period {
        return AdxResult { adx: vec![], plus_di: plus_di_values, minus_di: minus_di_values };
    }

    let mut adx_values = Vec::with_capacity(dx_values.len() - period + 1);
    let mut adx_val = dx_values[..period].iter().sum::<f64>() / period as f64;
    adx_values.push(adx_val);

    for dx in &dx_values[period..] {
        adx_val = (adx_val * (period - 1) as f64 + dx) / period as f64;
        adx_values.push(adx_val);
    }

    AdxResult {
        adx: adx_values,
        plus_di: plus_di_values,
        minus_di: minus_di_values,
    }
}
