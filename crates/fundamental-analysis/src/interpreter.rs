use analysis_core::{IndicatorScore, SectorGroup};

use crate::indicator::FundamentalIndicator;
use crate::ladders::{ladder_for, ANALYST_CONSENSUS};
use crate::weights::weight_of;

/// Rate one fundamental indicator for a company in `group` and attach its
/// sector weight. Missing or non-finite values get the indicator's fallback.
///
/// `Position52Week` expects the position already expressed as a percent of
/// the range (see [`interpret_52w_position`]). `AnalystRating` expects the
/// 1-5 consensus mean and is rated as if no analyst count were reported;
/// use [`score_analyst_consensus`] when the count is known.
pub fn score_fundamental_indicator(
    indicator: FundamentalIndicator,
    raw: Option<f64>,
    group: SectorGroup,
) -> IndicatorScore {
    if indicator == FundamentalIndicator::AnalystRating {
        return score_analyst_consensus(raw, None, group);
    }

    let raw = raw.filter(|v| v.is_finite());
    let rated = ladder_for(indicator, group).evaluate(raw.map(|v| indicator.ladder_input(v)));

    IndicatorScore::new(
        indicator.name(),
        raw,
        indicator.format_value(raw),
        rated.score,
        rated.label,
    )
    .with_weight(weight_of(group, indicator) as f64)
}

/// Where the price sits in its 52-week range, in percent, with its score.
/// Returns `(None, 5.0, "Insufficient data")` when the range is unusable.
pub fn interpret_52w_position(
    price: Option<f64>,
    low: Option<f64>,
    high: Option<f64>,
    group: SectorGroup,
) -> (Option<f64>, f64, String) {
    let position = match (price, low, high) {
        (Some(p), Some(l), Some(h)) if p.is_finite() && l.is_finite() && h.is_finite() && h > l => {
            Some((p - l) / (h - l) * 100.0)
        }
        _ => None,
    };

    let rated = ladder_for(FundamentalIndicator::Position52Week, group).evaluate(position);
    (position, rated.score, rated.label.to_string())
}

/// Grade, score and text for an analyst consensus on the 1 (strong buy) to
/// 5 (strong sell) scale.
pub fn interpret_analyst_rating(
    mean: Option<f64>,
    analysts: Option<u32>,
    group: SectorGroup,
) -> (String, f64, String) {
    let Some(mean) = mean.filter(|m| m.is_finite()) else {
        let missing = ANALYST_CONSENSUS.missing;
        return ("N/A".to_string(), missing.score, missing.label.to_string());
    };

    let base = ANALYST_CONSENSUS.evaluate(Some(mean));
    let mut text = base.label.to_string();
    let mut score = base.score;

    // unknown coverage counts as no coverage
    let (adjusted, note) = adjust_for_coverage(score, analysts.unwrap_or(0));
    score = adjusted;
    if let Some(note) = note {
        text.push_str(&format!("; {}", note));
    }

    let score = score.clamp(1.0, 10.0);
    if let Some(context) = sector_context(score, group) {
        text.push_str(&format!("; {}", context));
    }

    (format!("{:.1}/5", mean), score, text)
}

/// [`interpret_analyst_rating`] packaged as a weighted indicator score.
pub fn score_analyst_consensus(mean: Option<f64>, analysts: Option<u32>, group: SectorGroup) -> IndicatorScore {
    let mean = mean.filter(|m| m.is_finite());
    let (grade, score, text) = interpret_analyst_rating(mean, analysts, group);
    IndicatorScore::new(FundamentalIndicator::AnalystRating.name(), mean, grade, score, text)
        .with_weight(weight_of(group, FundamentalIndicator::AnalystRating) as f64)
}

fn adjust_for_coverage(score: f64, analysts: u32) -> (f64, Option<String>) {
    match analysts {
        n if n < 2 => ((score - 3.0).max(1.0), Some(format!("Very few ratings ({})", n))),
        n if n < 4 => (score - 2.0, Some(format!("Limited coverage ({} analysts)", n))),
        n if n < 8 => (score - 1.0, Some(format!("Moderate coverage ({} analysts)", n))),
        n if n < 15 => (score, None),
        n => ((score + 1.0).min(10.0), Some(format!("Strong consensus ({} analysts)", n))),
    }
}

fn sector_context(score: f64, group: SectorGroup) -> Option<&'static str> {
    match group {
        SectorGroup::Technology | SectorGroup::Healthcare if score >= 7.0 => Some("strong support for growth"),
        SectorGroup::FinancialServices | SectorGroup::Energy if score >= 7.0 => Some("sector confidence"),
        SectorGroup::ConsumerDefensive | SectorGroup::Utilities if score <= 3.0 => {
            Some("unusual for a defensive sector")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWEEP: [f64; 16] = [
        f64::NEG_INFINITY,
        -1e9,
        -50.0,
        -1.0,
        -0.05,
        0.0,
        0.005,
        0.15,
        0.5,
        1.0,
        2.5,
        15.0,
        150.0,
        1e9,
        f64::INFINITY,
        f64::NAN,
    ];

    #[test]
    fn test_scores_stay_in_range_over_sweep() {
        let all = FundamentalIndicator::CORE.into_iter().chain(FundamentalIndicator::SUPPLEMENTARY);
        for indicator in all {
            for group in SectorGroup::ALL {
                for value in SWEEP.iter().copied().map(Some).chain([None]) {
                    let s = score_fundamental_indicator(indicator, value, group);
                    assert!((0.0..=10.0).contains(&s.score), "{} {} {:?} -> {}", indicator, group, value, s.score);
                }
            }
        }
    }

    #[test]
    fn test_non_finite_is_unavailable() {
        let s = score_fundamental_indicator(FundamentalIndicator::Roe, Some(f64::NAN), SectorGroup::Technology);
        assert!(!s.available);
        assert_eq!(s.score, 4.0);
        assert_eq!(s.display_value, "N/A");
        assert_eq!(s.interpretation, "Data unavailable");
    }

    #[test]
    fn test_roe_is_sector_aware() {
        let tech = score_fundamental_indicator(FundamentalIndicator::Roe, Some(0.30), SectorGroup::Technology);
        let fin = score_fundamental_indicator(FundamentalIndicator::Roe, Some(0.30), SectorGroup::FinancialServices);
        assert_eq!(tech.score, 10.0);
        assert_eq!(fin.score, 10.0);
        assert_eq!(tech.weight, 12.0);
        assert_eq!(fin.weight, 22.0);

        let fin = score_fundamental_indicator(FundamentalIndicator::Roe, Some(0.16), SectorGroup::FinancialServices);
        let general = score_fundamental_indicator(FundamentalIndicator::Roe, Some(0.16), SectorGroup::General);
        assert_eq!(fin.score, 9.0);
        assert_eq!(general.score, 8.0);
    }

    #[test]
    fn test_missing_fallbacks() {
        let g = SectorGroup::General;
        assert_eq!(score_fundamental_indicator(FundamentalIndicator::ForwardPe, None, g).score, 4.0);
        assert_eq!(score_fundamental_indicator(FundamentalIndicator::DebtToEquity, None, g).score, 3.0);

        let dividend = score_fundamental_indicator(FundamentalIndicator::DividendYield, None, g);
        assert_eq!(dividend.score, 2.0);
        assert_eq!(dividend.interpretation, "No dividend");

        assert_eq!(score_fundamental_indicator(FundamentalIndicator::QuickRatio, None, g).score, 5.0);
        assert_eq!(score_fundamental_indicator(FundamentalIndicator::AnalystRating, None, g).score, 3.0);
    }

    #[test]
    fn test_supplementary_percent_scaling() {
        // 0.20 operating margin is 20% on the tech ladder: > 18 -> 9
        let s = score_fundamental_indicator(FundamentalIndicator::OperatingMargin, Some(0.20), SectorGroup::Technology);
        assert_eq!(s.score, 9.0);
        assert_eq!(s.weight, 0.0);
        assert_eq!(s.display_value, "20.00%");

        let s = score_fundamental_indicator(FundamentalIndicator::EarningsGrowth, Some(-0.12), SectorGroup::General);
        assert_eq!(s.score, 3.0);
    }

    #[test]
    fn test_52w_position() {
        let (pos, score, _) = interpret_52w_position(Some(105.0), Some(100.0), Some(150.0), SectorGroup::General);
        assert_eq!(pos, Some(10.0));
        // 10% is not below 10, so the second rung applies
        assert_eq!(score, 9.0);

        let (pos, score, _) = interpret_52w_position(Some(149.0), Some(100.0), Some(150.0), SectorGroup::Technology);
        assert_eq!(pos, Some(98.0));
        assert_eq!(score, 2.0);
    }

    #[test]
    fn test_52w_position_insufficient_data() {
        for (price, low, high) in [
            (None, Some(1.0), Some(2.0)),
            (Some(1.5), None, Some(2.0)),
            (Some(1.5), Some(2.0), Some(2.0)),
            (Some(f64::NAN), Some(1.0), Some(2.0)),
        ] {
            let (pos, score, text) = interpret_52w_position(price, low, high, SectorGroup::General);
            assert_eq!(pos, None);
            assert_eq!(score, 5.0);
            assert_eq!(text, "Insufficient data");
        }
    }

    #[test]
    fn test_analyst_rating_coverage() {
        let (grade, score, _) = interpret_analyst_rating(Some(1.9), Some(10), SectorGroup::Industrials);
        assert_eq!(grade, "1.9/5");
        assert_eq!(score, 7.0);

        let (_, score, text) = interpret_analyst_rating(Some(1.9), Some(1), SectorGroup::Industrials);
        assert_eq!(score, 4.0);
        assert!(text.contains("Very few ratings (1)"));

        let (_, score, _) = interpret_analyst_rating(Some(1.9), Some(3), SectorGroup::Industrials);
        assert_eq!(score, 5.0);

        let (_, score, _) = interpret_analyst_rating(Some(1.9), Some(6), SectorGroup::Industrials);
        assert_eq!(score, 6.0);

        let (_, score, text) = interpret_analyst_rating(Some(1.1), Some(30), SectorGroup::Industrials);
        assert_eq!(score, 10.0);
        assert!(text.contains("Strong consensus"));
    }

    #[test]
    fn test_analyst_rating_unknown_count_is_penalized() {
        let (_, unknown, text) = interpret_analyst_rating(Some(1.1), None, SectorGroup::General);
        let (_, zero, _) = interpret_analyst_rating(Some(1.1), Some(0), SectorGroup::General);
        assert_eq!(unknown, zero);
        assert_eq!(unknown, 7.0);
        assert!(text.contains("Very few ratings (0)"));

        let s = score_fundamental_indicator(FundamentalIndicator::AnalystRating, Some(1.1), SectorGroup::General);
        assert_eq!(s.score, 7.0);
    }

    #[test]
    fn test_analyst_rating_floor_and_context() {
        let (_, score, text) = interpret_analyst_rating(Some(4.9), Some(20), SectorGroup::Utilities);
        assert_eq!(score, 1.0);
        assert!(text.contains("unusual for a defensive sector"));

        let (_, _, text) = interpret_analyst_rating(Some(1.4), Some(20), SectorGroup::Technology);
        assert!(text.contains("strong support for growth"));

        let (_, _, text) = interpret_analyst_rating(Some(1.4), Some(20), SectorGroup::Energy);
        assert!(text.contains("sector confidence"));
    }

    #[test]
    fn test_analyst_missing() {
        let (grade, score, _) = interpret_analyst_rating(None, Some(12), SectorGroup::General);
        assert_eq!(grade, "N/A");
        assert_eq!(score, 3.0);

        let s = score_analyst_consensus(None, None, SectorGroup::General);
        assert!(!s.available);
        assert_eq!(s.display_value, "N/A");
        assert_eq!(s.weight, 10.0);
    }
}
