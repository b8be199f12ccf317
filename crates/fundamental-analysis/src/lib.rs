pub mod indicator;
pub mod interpreter;
pub mod ladders;
pub mod reconcile;
pub mod sector;
pub mod weights;

pub use indicator::{FundamentalIndicator, ValueFormat};
pub use interpreter::{
    interpret_52w_position, interpret_analyst_rating, score_analyst_consensus, score_fundamental_indicator,
};
pub use reconcile::{reconcile_snapshot, reconcile_values};
pub use sector::classify_sector;
pub use weights::{weight_of, weights_for};

use analysis_core::{compute_axis_score, Axis, AxisScore, FundamentalSnapshot, IndicatorScore, SectorGroup};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalReport {
    pub symbol: String,
    pub sector_group: SectorGroup,
    pub axis: AxisScore,
    /// Supplementary indicators: rated and reported, never weighted.
    pub informational: Vec<IndicatorScore>,
    pub metrics: serde_json::Value,
}

pub struct FundamentalAnalysisEngine;

impl FundamentalAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    fn calculate_fcf_yield(&self, free_cash_flow: f64, market_cap: f64) -> Option<f64> {
        if market_cap > 0.0 {
            Some(free_cash_flow / market_cap)
        } else {
            None
        }
    }

    fn calculate_ocf_ratio(&self, operating_cash_flow: f64, current_liabilities: f64) -> Option<f64> {
        if current_liabilities > 0.0 {
            Some(operating_cash_flow / current_liabilities)
        } else {
            None
        }
    }

    fn calculate_debt_to_ebitda(&self, total_debt: f64, ebitda: f64) -> Option<f64> {
        if ebitda > 0.0 {
            Some(total_debt / ebitda)
        } else {
            None
        }
    }

    fn calculate_asset_share(&self, part: f64, total_assets: f64) -> Option<f64> {
        if total_assets > 0.0 {
            Some(part / total_assets)
        } else {
            None
        }
    }

    fn calculate_interest_coverage(&self, ebit: f64, interest_expense: f64) -> Option<f64> {
        if interest_expense != 0.0 {
            Some(ebit / interest_expense.abs())
        } else {
            None
        }
    }

    /// Raw value for a core indicator. The outer `None` means a derived
    /// ratio whose inputs are missing, which leaves the indicator out of
    /// the axis instead of scoring it with a fallback.
    fn core_value(&self, snapshot: &FundamentalSnapshot, indicator: FundamentalIndicator) -> Option<Option<f64>> {
        use FundamentalIndicator as I;

        let value = match indicator {
            I::Roe => snapshot.return_on_equity,
            I::Roa => snapshot.return_on_assets,
            I::ForwardPe => snapshot.forward_pe,
            I::TrailingPe => snapshot.trailing_pe,
            I::PriceToBook => snapshot.price_to_book,
            I::Beta => snapshot.beta,
            I::DebtToEquity => snapshot.debt_to_equity,
            I::CurrentRatio => snapshot.current_ratio,
            I::ProfitMargin => snapshot.profit_margin,
            I::DividendYield => snapshot.dividend_yield,
            I::PayoutRatio => snapshot.payout_ratio,
            I::FcfYield => {
                let (fcf, cap) = (snapshot.free_cash_flow?, snapshot.market_cap?);
                return Some(Some(self.calculate_fcf_yield(fcf, cap)?));
            }
            _ => return None,
        };
        Some(value)
    }

    fn supplementary_value(&self, snapshot: &FundamentalSnapshot, indicator: FundamentalIndicator) -> Option<Option<f64>> {
        use FundamentalIndicator as I;

        let value = match indicator {
            I::OperatingMargin => snapshot.operating_margin,
            I::GrossMargin => snapshot.gross_margin,
            I::EarningsGrowth => snapshot.earnings_growth,
            I::QuickRatio => snapshot.quick_ratio,
            I::PegRatio => snapshot.peg_ratio,
            I::OcfRatio => {
                let (ocf, liabilities) = (snapshot.operating_cash_flow?, snapshot.current_liabilities?);
                return Some(Some(self.calculate_ocf_ratio(ocf, liabilities)?));
            }
            I::DebtToEbitda => {
                let (debt, ebitda) = (snapshot.total_debt?, snapshot.ebitda?);
                return Some(Some(self.calculate_debt_to_ebitda(debt, ebitda)?));
            }
            I::DebtToAssets => {
                let (debt, assets) = (snapshot.total_debt?, snapshot.total_assets?);
                return Some(Some(self.calculate_asset_share(debt, assets)?));
            }
            I::EquityRatio => {
                let (equity, assets) = (snapshot.total_equity?, snapshot.total_assets?);
                return Some(Some(self.calculate_asset_share(equity, assets)?));
            }
            I::InterestCoverage => {
                let (ebit, interest) = (snapshot.ebit?, snapshot.interest_expense?);
                return Some(Some(self.calculate_interest_coverage(ebit, interest)?));
            }
            _ => return None,
        };
        Some(value)
    }

    pub fn analyze(&self, snapshot: &FundamentalSnapshot) -> FundamentalReport {
        let symbol = snapshot.symbol.as_str();
        let group = snapshot
            .sector
            .as_deref()
            .map(classify_sector)
            .unwrap_or(SectorGroup::General);

        let mut metrics_map = serde_json::Map::new();
        metrics_map.insert("sector_group".to_string(), json!(group.name()));

        let mut core = Vec::new();
        for indicator in FundamentalIndicator::CORE {
            if weight_of(group, indicator) == 0 {
                continue;
            }

            let scored = match indicator {
                FundamentalIndicator::Position52Week => {
                    let (position, score, text) = interpret_52w_position(
                        snapshot.current_price,
                        snapshot.fifty_two_week_low,
                        snapshot.fifty_two_week_high,
                        group,
                    );
                    let Some(position) = position else {
                        tracing::debug!("{}: 52-week range unavailable, omitted", symbol);
                        continue;
                    };
                    IndicatorScore::new(indicator.name(), Some(position), indicator.format_value(Some(position)), score, text)
                        .with_weight(weight_of(group, indicator) as f64)
                }
                FundamentalIndicator::AnalystRating => {
                    score_analyst_consensus(snapshot.analyst_mean_rating, snapshot.analyst_count, group)
                }
                _ => {
                    let Some(raw) = self.core_value(snapshot, indicator) else {
                        tracing::debug!("{}: {} inputs unavailable, omitted", symbol, indicator);
                        continue;
                    };
                    score_fundamental_indicator(indicator, raw, group)
                }
            };

            tracing::debug!(
                "{}: {} = {} -> {:.1} ({})",
                symbol,
                scored.name,
                scored.display_value,
                scored.score,
                scored.interpretation
            );
            if let Some(raw) = scored.raw_value {
                metrics_map.insert(metric_key(indicator), json!(raw));
            }
            core.push(scored);
        }

        let mut informational = Vec::new();
        for indicator in FundamentalIndicator::SUPPLEMENTARY {
            let Some(raw) = self.supplementary_value(snapshot, indicator) else {
                continue;
            };
            let scored = score_fundamental_indicator(indicator, raw, group);
            if let Some(raw) = scored.raw_value {
                metrics_map.insert(metric_key(indicator), json!(raw));
            }
            informational.push(scored);
        }

        let axis = compute_axis_score(Axis::Fundamental, core);
        if axis.is_empty() {
            tracing::warn!("{}: no weighted fundamental indicator could be scored", symbol);
        } else {
            tracing::info!(
                "{}: fundamental score {:.1} ({}, {} indicators)",
                symbol,
                axis.value,
                group,
                axis.contributing.len()
            );
        }

        FundamentalReport {
            symbol: symbol.to_string(),
            sector_group: group,
            axis,
            informational,
            metrics: serde_json::Value::Object(metrics_map),
        }
    }
}

fn metric_key(indicator: FundamentalIndicator) -> String {
    indicator
        .name()
        .to_lowercase()
        .replace(['/', ' '], "_")
}

impl Default for FundamentalAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tech_snapshot() -> FundamentalSnapshot {
        FundamentalSnapshot {
            symbol: "TECH".to_string(),
            sector: Some("Technology".to_string()),
            current_price: Some(150.0),
            market_cap: Some(1_000_000_000.0),
            return_on_equity: Some(0.30),
            return_on_assets: Some(0.16),
            forward_pe: Some(10.0),
            trailing_pe: Some(12.0),
            beta: Some(0.5),
            debt_to_equity: Some(3.0),
            profit_margin: Some(0.35),
            free_cash_flow: Some(120_000_000.0),
            fifty_two_week_low: Some(140.0),
            fifty_two_week_high: Some(300.0),
            analyst_mean_rating: Some(1.1),
            analyst_count: Some(20),
            ..Default::default()
        }
    }

    #[test]
    fn test_excellent_tech_company_scores_100() {
        let report = FundamentalAnalysisEngine::new().analyze(&tech_snapshot());
        assert_eq!(report.sector_group, SectorGroup::Technology);
        assert_eq!(report.axis.contributing.len(), 10);
        assert_eq!(report.axis.applied_weight, 100.0);
        assert_relative_eq!(report.axis.value, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_derived_indicators_omitted_without_inputs() {
        let mut snapshot = tech_snapshot();
        snapshot.market_cap = None;
        snapshot.fifty_two_week_high = None;

        let report = FundamentalAnalysisEngine::new().analyze(&snapshot);
        let names: Vec<&str> = report.axis.contributing.iter().map(|s| s.name.as_str()).collect();
        assert!(!names.contains(&"FCF Yield"));
        assert!(!names.contains(&"52W Position"));
        assert_eq!(report.axis.applied_weight, 100.0 - 20.0 - 11.0);
        assert_relative_eq!(report.axis.value, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_analyst_count_takes_coverage_penalty() {
        let mut snapshot = tech_snapshot();
        snapshot.analyst_count = None;

        let report = FundamentalAnalysisEngine::new().analyze(&snapshot);
        let analysts = report.axis.contributing.iter().find(|s| s.name == FundamentalIndicator::AnalystRating.name()).unwrap();
        assert_eq!(analysts.score, 7.0);
        assert!(report.axis.value < 100.0);
    }

    #[test]
    fn test_missing_direct_field_uses_fallback() {
        let mut snapshot = tech_snapshot();
        snapshot.beta = None;

        let report = FundamentalAnalysisEngine::new().analyze(&snapshot);
        let beta = report.axis.contributing.iter().find(|s| s.name == "Beta").unwrap();
        assert!(!beta.available);
        assert_eq!(beta.score, 4.0);
        assert!(report.axis.value < 100.0);
    }

    #[test]
    fn test_unknown_sector_uses_general_table() {
        let snapshot = FundamentalSnapshot {
            symbol: "X".to_string(),
            sector: Some("Conglomerates".to_string()),
            ..Default::default()
        };
        let report = FundamentalAnalysisEngine::new().analyze(&snapshot);
        assert_eq!(report.sector_group, SectorGroup::General);
        // FCF yield and 52W position cannot be derived from an empty snapshot
        assert_eq!(report.axis.applied_weight, 100.0 - 10.0 - 10.0);
    }

    #[test]
    fn test_supplementary_are_informational() {
        let mut snapshot = tech_snapshot();
        snapshot.operating_margin = Some(0.30);
        snapshot.total_debt = Some(50.0);
        snapshot.ebitda = Some(100.0);
        snapshot.total_assets = Some(400.0);
        snapshot.total_equity = Some(300.0);

        let report = FundamentalAnalysisEngine::new().analyze(&snapshot);
        assert_relative_eq!(report.axis.value, 100.0, epsilon = 1e-9);
        assert!(report.informational.iter().all(|s| s.weight == 0.0));

        let names: Vec<&str> = report.informational.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"Debt/EBITDA"));
        assert!(names.contains(&"Equity Ratio"));
        assert!(!names.contains(&"Interest Coverage"));
        assert!(!names.contains(&"OCF Ratio"));

        let equity = report.informational.iter().find(|s| s.name == "Equity Ratio").unwrap();
        assert_relative_eq!(equity.raw_value.unwrap(), 0.75);
        assert_eq!(equity.score, 10.0);
    }

    #[test]
    fn test_metrics_keys() {
        let report = FundamentalAnalysisEngine::new().analyze(&tech_snapshot());
        assert!(report.metrics.get("roe").is_some());
        assert!(report.metrics.get("fcf_yield").is_some());
        assert!(report.metrics.get("52w_position").is_some());
        assert_eq!(report.metrics["sector_group"], "Technology");
    }
}
