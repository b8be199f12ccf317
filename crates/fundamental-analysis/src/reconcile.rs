use analysis_core::FundamentalSnapshot;

use crate::indicator::FundamentalIndicator;

const AGREEMENT_GAP: f64 = 0.10;
const BLEND_GAP: f64 = 0.30;
const PRIMARY_BLEND: f64 = 0.8;

/// Pick one value out of a primary provider reading and a cross-check.
///
/// Close readings keep the primary; moderate disagreement blends 80/20
/// toward the primary; wide disagreement distrusts the cross-check and keeps
/// the primary. A missing side yields the other.
pub fn reconcile_values(
    primary: Option<f64>,
    secondary: Option<f64>,
    indicator: FundamentalIndicator,
) -> Option<f64> {
    let primary = primary.filter(|v| v.is_finite());
    let secondary = secondary.filter(|v| v.is_finite());

    let (p, mut s) = match (primary, secondary) {
        (Some(p), Some(s)) => (p, s),
        (p, s) => return p.or(s),
    };

    // cross-check sources often quote returns in percent
    if s > 1.0 && matches!(indicator, FundamentalIndicator::Roe | FundamentalIndicator::Roa) {
        s /= 100.0;
    }

    if p == 0.0 {
        return Some(p);
    }

    let gap = (p - s).abs() / p.abs();
    if gap < AGREEMENT_GAP {
        Some(p)
    } else if gap < BLEND_GAP {
        Some(PRIMARY_BLEND * p + (1.0 - PRIMARY_BLEND) * s)
    } else {
        Some(p)
    }
}

/// Merge a cross-check snapshot into the primary one.
///
/// Rated ratios go through [`reconcile_values`]; every other field only
/// fills gaps in the primary.
pub fn reconcile_snapshot(primary: FundamentalSnapshot, secondary: &FundamentalSnapshot) -> FundamentalSnapshot {
    use FundamentalIndicator as I;

    let s = secondary;
    FundamentalSnapshot {
        symbol: if primary.symbol.is_empty() { s.symbol.clone() } else { primary.symbol },
        sector: primary.sector.or_else(|| s.sector.clone()),
        current_price: primary.current_price.or(s.current_price),
        market_cap: primary.market_cap.or(s.market_cap),
        return_on_equity: reconcile_values(primary.return_on_equity, s.return_on_equity, I::Roe),
        return_on_assets: reconcile_values(primary.return_on_assets, s.return_on_assets, I::Roa),
        forward_pe: reconcile_values(primary.forward_pe, s.forward_pe, I::ForwardPe),
        trailing_pe: reconcile_values(primary.trailing_pe, s.trailing_pe, I::TrailingPe),
        price_to_book: reconcile_values(primary.price_to_book, s.price_to_book, I::PriceToBook),
        beta: reconcile_values(primary.beta, s.beta, I::Beta),
        debt_to_equity: reconcile_values(primary.debt_to_equity, s.debt_to_equity, I::DebtToEquity),
        current_ratio: reconcile_values(primary.current_ratio, s.current_ratio, I::CurrentRatio),
        quick_ratio: reconcile_values(primary.quick_ratio, s.quick_ratio, I::QuickRatio),
        profit_margin: reconcile_values(primary.profit_margin, s.profit_margin, I::ProfitMargin),
        operating_margin: reconcile_values(primary.operating_margin, s.operating_margin, I::OperatingMargin),
        gross_margin: reconcile_values(primary.gross_margin, s.gross_margin, I::GrossMargin),
        earnings_growth: reconcile_values(primary.earnings_growth, s.earnings_growth, I::EarningsGrowth),
        peg_ratio: reconcile_values(primary.peg_ratio, s.peg_ratio, I::PegRatio),
        free_cash_flow: primary.free_cash_flow.or(s.free_cash_flow),
        operating_cash_flow: primary.operating_cash_flow.or(s.operating_cash_flow),
        dividend_yield: reconcile_values(primary.dividend_yield, s.dividend_yield, I::DividendYield),
        payout_ratio: reconcile_values(primary.payout_ratio, s.payout_ratio, I::PayoutRatio),
        fifty_two_week_low: primary.fifty_two_week_low.or(s.fifty_two_week_low),
        fifty_two_week_high: primary.fifty_two_week_high.or(s.fifty_two_week_high),
        analyst_mean_rating: primary.analyst_mean_rating.or(s.analyst_mean_rating),
        analyst_count: primary.analyst_count.or(s.analyst_count),
        total_debt: primary.total_debt.or(s.total_debt),
        total_assets: primary.total_assets.or(s.total_assets),
        total_equity: primary.total_equity.or(s.total_equity),
        current_liabilities: primary.current_liabilities.or(s.current_liabilities),
        ebitda: primary.ebitda.or(s.ebitda),
        ebit: primary.ebit.or(s.ebit),
        interest_expense: primary.interest_expense.or(s.interest_expense),
    }
}
