use analysis_core::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fundamental indicators the interpreter knows how to rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundamentalIndicator {
    Roe,
    Roa,
    ForwardPe,
    TrailingPe,
    PriceToBook,
    Beta,
    /// Percent form: 150 means 1.5x.
    DebtToEquity,
    CurrentRatio,
    ProfitMargin,
    FcfYield,
    /// Percent form: 3.2 means 3.2%.
    DividendYield,
    PayoutRatio,
    Position52Week,
    AnalystRating,
    OperatingMargin,
    GrossMargin,
    EarningsGrowth,
    QuickRatio,
    OcfRatio,
    DebtToEbitda,
    PegRatio,
    DebtToAssets,
    InterestCoverage,
    EquityRatio,
}

/// How a raw value is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Fraction shown as a percentage (0.153 -> "15.30%").
    Fraction,
    /// Already in percent units (3.2 -> "3.20%").
    Percent,
    /// Plain number (24.5 -> "24.50").
    Number,
}

impl FundamentalIndicator {
    pub const CORE: [FundamentalIndicator; 14] = [
        FundamentalIndicator::Roe,
        FundamentalIndicator::Roa,
        FundamentalIndicator::ForwardPe,
        FundamentalIndicator::TrailingPe,
        FundamentalIndicator::PriceToBook,
        FundamentalIndicator::Beta,
        FundamentalIndicator::DebtToEquity,
        FundamentalIndicator::CurrentRatio,
        FundamentalIndicator::ProfitMargin,
        FundamentalIndicator::FcfYield,
        FundamentalIndicator::DividendYield,
        FundamentalIndicator::PayoutRatio,
        FundamentalIndicator::Position52Week,
        FundamentalIndicator::AnalystRating,
    ];

    /// Rated and reported, never weighted.
    pub const SUPPLEMENTARY: [FundamentalIndicator; 10] = [
        FundamentalIndicator::OperatingMargin,
        FundamentalIndicator::GrossMargin,
        FundamentalIndicator::EarningsGrowth,
        FundamentalIndicator::QuickRatio,
        FundamentalIndicator::OcfRatio,
        FundamentalIndicator::DebtToEbitda,
        FundamentalIndicator::PegRatio,
        FundamentalIndicator::DebtToAssets,
        FundamentalIndicator::InterestCoverage,
        FundamentalIndicator::EquityRatio,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FundamentalIndicator::Roe => "ROE",
            FundamentalIndicator::Roa => "ROA",
            FundamentalIndicator::ForwardPe => "Forward P/E",
            FundamentalIndicator::TrailingPe => "Trailing P/E",
            FundamentalIndicator::PriceToBook => "Price/Book",
            FundamentalIndicator::Beta => "Beta",
            FundamentalIndicator::DebtToEquity => "Debt/Equity",
            FundamentalIndicator::CurrentRatio => "Current Ratio",
            FundamentalIndicator::ProfitMargin => "Net Margin",
            FundamentalIndicator::FcfYield => "FCF Yield",
            FundamentalIndicator::DividendYield => "Dividend Yield",
            FundamentalIndicator::PayoutRatio => "Payout Ratio",
            FundamentalIndicator::Position52Week => "52W Position",
            FundamentalIndicator::AnalystRating => "Analyst Rating",
            FundamentalIndicator::OperatingMargin => "Operating Margin",
            FundamentalIndicator::GrossMargin => "Gross Margin",
            FundamentalIndicator::EarningsGrowth => "Earnings Growth",
            FundamentalIndicator::QuickRatio => "Quick Ratio",
            FundamentalIndicator::OcfRatio => "OCF Ratio",
            FundamentalIndicator::DebtToEbitda => "Debt/EBITDA",
            FundamentalIndicator::PegRatio => "PEG Ratio",
            FundamentalIndicator::DebtToAssets => "Debt/Assets",
            FundamentalIndicator::InterestCoverage => "Interest Coverage",
            FundamentalIndicator::EquityRatio => "Equity Ratio",
        }
    }

    pub fn value_format(&self) -> ValueFormat {
        match self {
            FundamentalIndicator::Roe
            | FundamentalIndicator::Roa
            | FundamentalIndicator::ProfitMargin
            | FundamentalIndicator::FcfYield
            | FundamentalIndicator::PayoutRatio
            | FundamentalIndicator::OperatingMargin
            | FundamentalIndicator::GrossMargin
            | FundamentalIndicator::EarningsGrowth
            | FundamentalIndicator::DebtToAssets
            | FundamentalIndicator::EquityRatio => ValueFormat::Fraction,
            FundamentalIndicator::DividendYield | FundamentalIndicator::Position52Week => ValueFormat::Percent,
            _ => ValueFormat::Number,
        }
    }

    /// Supplementary ladders are written in percent; their fractions are scaled first.
    pub(crate) fn ladder_input(&self, raw: f64) -> f64 {
        match self {
            FundamentalIndicator::OperatingMargin
            | FundamentalIndicator::GrossMargin
            | FundamentalIndicator::EarningsGrowth
            | FundamentalIndicator::DebtToAssets
            | FundamentalIndicator::EquityRatio => raw * 100.0,
            _ => raw,
        }
    }

    pub fn format_value(&self, raw: Option<f64>) -> String {
        match raw.filter(|v| v.is_finite()) {
            None => "N/A".to_string(),
            Some(v) => match self.value_format() {
                ValueFormat::Fraction => format!("{:.2}%", v * 100.0),
                ValueFormat::Percent => format!("{:.2}%", v),
                ValueFormat::Number => format!("{:.2}", v),
            },
        }
    }
}

impl fmt::Display for FundamentalIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for FundamentalIndicator {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        let mut all = Self::CORE.iter().chain(Self::SUPPLEMENTARY.iter());
        if let Some(found) = all.find(|i| normalize(i.name()) == key) {
            return Ok(*found);
        }

        let alias = match key.as_str() {
            "pe" | "peratio" | "trailingpe" => Some(FundamentalIndicator::TrailingPe),
            "forwardpe" | "fpe" => Some(FundamentalIndicator::ForwardPe),
            "pb" | "pricetobook" => Some(FundamentalIndicator::PriceToBook),
            "de" | "debttoequity" => Some(FundamentalIndicator::DebtToEquity),
            "profitmargin" | "netprofitmargin" => Some(FundamentalIndicator::ProfitMargin),
            "freecashflowyield" => Some(FundamentalIndicator::FcfYield),
            "payout" => Some(FundamentalIndicator::PayoutRatio),
            "position52w" | "52weekposition" | "fiftytwoweekposition" => {
                Some(FundamentalIndicator::Position52Week)
            }
            "analysts" | "analystconsensus" | "recommendationmean" => Some(FundamentalIndicator::AnalystRating),
            "peg" => Some(FundamentalIndicator::PegRatio),
            _ => None,
        };

        alias.ok_or_else(|| AnalysisError::UnknownIndicator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        for indicator in FundamentalIndicator::CORE.iter().chain(FundamentalIndicator::SUPPLEMENTARY.iter()) {
            assert_eq!(indicator.name().parse::<FundamentalIndicator>().unwrap(), *indicator);
        }
        assert_eq!("roe".parse::<FundamentalIndicator>().unwrap(), FundamentalIndicator::Roe);
        assert_eq!("P/B".parse::<FundamentalIndicator>().unwrap(), FundamentalIndicator::PriceToBook);
        assert_eq!("forward_pe".parse::<FundamentalIndicator>().unwrap(), FundamentalIndicator::ForwardPe);
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "Sharpe".parse::<FundamentalIndicator>().unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownIndicator(name) if name == "Sharpe"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(FundamentalIndicator::Roe.format_value(Some(0.1534)), "15.34%");
        assert_eq!(FundamentalIndicator::DividendYield.format_value(Some(3.2)), "3.20%");
        assert_eq!(FundamentalIndicator::Beta.format_value(Some(1.234)), "1.23");
        assert_eq!(FundamentalIndicator::Beta.format_value(None), "N/A");
        assert_eq!(FundamentalIndicator::Beta.format_value(Some(f64::NAN)), "N/A");
    }
}
