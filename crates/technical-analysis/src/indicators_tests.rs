#[cfg(test)]
mod tests {
    use super::super::indicators::*;
    use analysis_core::Bar;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone, Utc};

    fn sample_prices() -> Vec<f64> {
        vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ]
    }

    /// Gently oscillating series long enough for the slow indicators.
    fn wave(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0 + i as f64 * 0.05)
            .collect()
    }

    fn bars_from(ohlc: &[(f64, f64, f64, f64)]) -> Vec<Bar> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        ohlc.iter()
            .enumerate()
            .map(|(i, &(open, high, low, close))| Bar {
                timestamp: start + Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1_000_000.0,
            })
            .collect()
    }

    fn rising_bars(n: usize) -> Vec<Bar> {
        let ohlc: Vec<_> = (0..n)
            .map(|i| {
                let base = 100.0 + i as f64;
                (base, base + 2.0, base - 1.0, base + 1.0)
            })
            .collect();
        bars_from(&ohlc)
    }

    #[test]
    fn test_sma_basic() {
        let result = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(result.len(), 3);
        assert_relative_eq!(result[0], 2.0);
        assert_relative_eq!(result[2], 4.0);
    }

    #[test]
    fn test_sma_insufficient_data() {
        assert!(sma(&[1.0, 2.0], 5).is_empty());
    }

    #[test]
    fn test_ema_is_seeded_with_sma() {
        let data = vec![22.0, 24.0, 23.0, 25.0, 26.0];
        let result = ema(&data, 3);

        assert_eq!(result.len(), 3);
        assert_relative_eq!(result[0], 23.0);
        // (25 - 23) * 0.5 + 23
        assert_relative_eq!(result[1], 24.0);
        assert_relative_eq!(result[2], 25.0);
    }

    #[test]
    fn test_ema_short_or_empty_data() {
        assert!(ema(&[], 5).is_empty());
        assert!(ema(&[1.0, 2.0], 5).is_empty());
    }

    #[test]
    fn test_ema_increases_with_uptrend() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let result = ema(&data, 3);
        for pair in result.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_rsi_bounds() {
        let result = rsi(&sample_prices(), 14);
        assert_eq!(result.len(), 6);
        for &value in &result {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_insufficient_data() {
        assert!(rsi(&[1.0, 2.0, 3.0], 14).is_empty());
    }

    #[test]
    fn test_rsi_extremes() {
        let up: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        assert_relative_eq!(*rsi(&up, 14).last().unwrap(), 100.0);

        let down: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        assert_relative_eq!(*rsi(&down, 14).last().unwrap(), 0.0);

        let flat = vec![50.0; 30];
        assert_relative_eq!(*rsi(&flat, 14).last().unwrap(), 50.0);
    }

    #[test]
    fn test_macd_needs_slow_window() {
        let result = macd(&sample_prices(), 12, 26, 9);
        assert!(result.macd_line.is_empty());
        assert!(result.latest().is_none());
    }

    #[test]
    fn test_macd_lengths_and_histogram() {
        let prices = wave(120);
        let result = macd(&prices, 12, 26, 9);

        assert_eq!(result.macd_line.len(), 120 - 26 + 1);
        assert_eq!(result.signal_line.len(), result.macd_line.len() - 9 + 1);
        assert_eq!(result.histogram.len(), result.signal_line.len());

        let offset = result.macd_line.len() - result.signal_line.len();
        for (i, &hist) in result.histogram.iter().enumerate() {
            assert_relative_eq!(hist, result.macd_line[i + offset] - result.signal_line[i]);
        }
    }

    #[test]
    fn test_macd_aligns_fast_and_slow() {
        let prices = wave(60);
        let result = macd(&prices, 12, 26, 9);
        let fast = ema(&prices, 12);
        let slow = ema(&prices, 26);
        assert_relative_eq!(
            *result.macd_line.last().unwrap(),
            fast.last().unwrap() - slow.last().unwrap()
        );
    }

    #[test]
    fn test_macd_positive_in_uptrend() {
        let prices: Vec<f64> = (0..80).map(|i| 100.0 + i as f64).collect();
        let (macd_value, _) = macd(&prices, 12, 26, 9).latest().unwrap();
        assert!(macd_value > 0.0);
    }

    #[test]
    fn test_bollinger_bands_ordering() {
        let result = bollinger_bands(&sample_prices(), 10, 2.0);
        assert_eq!(result.upper.len(), result.middle.len());
        for i in 0..result.upper.len() {
            assert!(result.upper[i] > result.middle[i]);
            assert!(result.middle[i] > result.lower[i]);
        }
    }

    #[test]
    fn test_bollinger_bands_flat_prices() {
        let result = bollinger_bands(&vec![100.0; 20], 10, 2.0);
        let (lower, middle, upper) = result.latest().unwrap();
        assert_relative_eq!(lower, 100.0);
        assert_relative_eq!(middle, 100.0);
        assert_relative_eq!(upper, 100.0);
    }

    #[test]
    fn test_stochastic_bounds() {
        let bars = rising_bars(20);
        let result = stochastic(&bars, 14, 3);

        assert_eq!(result.k.len(), 7);
        assert_eq!(result.d.len(), 5);
        for &value in result.k.iter().chain(result.d.iter()) {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_stochastic_insufficient_data() {
        let result = stochastic(&rising_bars(5), 14, 3);
        assert!(result.k.is_empty());
        assert!(result.latest().is_none());
    }

    #[test]
    fn test_obv_direction() {
        let up = rising_bars(15);
        let result = obv(&up);
        assert_eq!(result.len(), up.len());
        for pair in result.windows(2) {
            assert!(pair[1] > pair[0]);
        }

        let mut down = rising_bars(15);
        down.reverse();
        let result = obv(&down);
        for pair in result.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_obv_empty() {
        assert!(obv(&[]).is_empty());
    }

    #[test]
    fn test_adx_strong_trend() {
        let bars = rising_bars(60);
        let result = adx(&bars, 14);

        assert!(!result.adx.is_empty());
        assert!(*result.adx.last().unwrap() > 40.0);
        assert!(result.plus_di.last().unwrap() > result.minus_di.last().unwrap());
    }

    #[test]
    fn test_adx_insufficient_data() {
        let result = adx(&rising_bars(20), 14);
        assert!(result.adx.is_empty());
    }
}
