//! Interpretation tables for fundamental indicators, one per sector family.

use analysis_core::ladder::{above, at_least, at_most, below, outcome};
use analysis_core::{Ladder, Outcome, SectorGroup};
use SectorGroup::*;

use crate::indicator::FundamentalIndicator;

const UNAVAILABLE: Outcome = outcome(4.0, "Data unavailable");
const UNAVAILABLE_LEVERAGE: Outcome = outcome(3.0, "Data unavailable");
const NO_DIVIDEND: Outcome = outcome(2.0, "No dividend");
const UNAVAILABLE_NEUTRAL: Outcome = outcome(5.0, "Data unavailable");

// ROE ---------------------------------------------------------------------

static ROE_TECHNOLOGY: Ladder = Ladder::new(
    &[
        above(0.25, 10.0, "Exceptional ROE for tech"),
        above(0.18, 9.0, "Excellent ROE"),
        above(0.13, 8.0, "Very good ROE"),
        above(0.09, 7.0, "Good ROE"),
        above(0.05, 6.0, "Average ROE"),
        above(0.0, 4.0, "Low ROE"),
    ],
    outcome(2.0, "Negative ROE"),
    UNAVAILABLE,
);

static ROE_FINANCIAL: Ladder = Ladder::new(
    &[
        above(0.18, 10.0, "Exceptional ROE for a financial"),
        above(0.14, 9.0, "Excellent banking ROE"),
        above(0.10, 8.0, "Solid banking ROE"),
        above(0.07, 7.0, "Acceptable banking ROE"),
        above(0.04, 6.0, "Weak banking ROE"),
        above(0.0, 4.0, "Very low ROE"),
    ],
    outcome(1.0, "Negative ROE"),
    UNAVAILABLE,
);

static ROE_HEALTHCARE: Ladder = Ladder::new(
    &[
        above(0.20, 10.0, "Exceptional ROE for healthcare"),
        above(0.15, 9.0, "Excellent ROE"),
        above(0.11, 8.0, "Very good ROE"),
        above(0.07, 7.0, "Good ROE"),
        above(0.04, 6.0, "Average ROE"),
        above(0.0, 4.0, "Low ROE"),
    ],
    outcome(2.0, "Negative ROE"),
    UNAVAILABLE,
);

static ROE_ENERGY: Ladder = Ladder::new(
    &[
        above(0.18, 10.0, "Exceptional ROE for energy"),
        above(0.14, 9.0, "Excellent ROE"),
        above(0.10, 8.0, "Very good ROE"),
        above(0.06, 7.0, "Good ROE"),
        above(0.03, 6.0, "Average ROE"),
        above(0.0, 4.0, "Low ROE"),
    ],
    outcome(2.0, "Negative ROE"),
    UNAVAILABLE,
);

static ROE_GENERAL: Ladder = Ladder::new(
    &[
        above(0.25, 10.0, "Exceptional ROE"),
        above(0.20, 9.0, "Excellent ROE"),
        above(0.15, 8.0, "Very good ROE"),
        above(0.12, 7.0, "Good ROE"),
        above(0.08, 6.0, "Correct ROE"),
        above(0.05, 5.0, "Average ROE"),
        above(0.02, 4.0, "Weak ROE"),
        above(0.0, 3.0, "Very weak ROE"),
    ],
    outcome(1.0, "Negative ROE"),
    UNAVAILABLE,
);

// ROA ---------------------------------------------------------------------

static ROA_FINANCIAL: Ladder = Ladder::new(
    &[
        above(0.015, 10.0, "Exceptional banking ROA"),
        above(0.012, 9.0, "Excellent banking ROA"),
        above(0.009, 8.0, "Very good banking ROA"),
        above(0.006, 7.0, "Good banking ROA"),
        above(0.004, 6.0, "Average banking ROA"),
        above(0.002, 5.0, "Weak banking ROA"),
        above(0.0, 4.0, "Very weak banking ROA"),
    ],
    outcome(2.0, "Negative ROA"),
    UNAVAILABLE,
);

static ROA_TECHNOLOGY: Ladder = Ladder::new(
    &[
        above(0.15, 10.0, "Exceptional asset efficiency"),
        above(0.11, 9.0, "Excellent ROA"),
        above(0.08, 8.0, "Very good ROA"),
        above(0.05, 7.0, "Good ROA"),
        above(0.03, 6.0, "Average ROA"),
        above(0.01, 5.0, "Weak ROA"),
        above(0.0, 4.0, "Very weak ROA"),
    ],
    outcome(2.0, "Negative ROA"),
    UNAVAILABLE,
);

static ROA_HEALTHCARE: Ladder = Ladder::new(
    &[
        above(0.12, 10.0, "Exceptional ROA"),
        above(0.09, 9.0, "Excellent ROA"),
        above(0.07, 8.0, "Very good ROA"),
        above(0.05, 7.0, "Good ROA"),
        above(0.03, 6.0, "Average ROA"),
        above(0.01, 5.0, "Weak ROA"),
        above(0.0, 4.0, "Very weak ROA"),
    ],
    outcome(2.0, "Negative ROA"),
    UNAVAILABLE,
);

static ROA_ENERGY: Ladder = Ladder::new(
    &[
        above(0.13, 10.0, "Exceptional ROA"),
        above(0.10, 9.0, "Excellent ROA"),
        above(0.07, 8.0, "Very good ROA"),
        above(0.05, 7.0, "Good ROA"),
        above(0.03, 6.0, "Average ROA"),
        above(0.01, 5.0, "Weak ROA"),
        above(0.0, 4.0, "Very weak ROA"),
    ],
    outcome(2.0, "Negative ROA"),
    UNAVAILABLE,
);

static ROA_GENERAL: Ladder = Ladder::new(
    &[
        above(0.15, 10.0, "Exceptional ROA"),
        above(0.12, 9.0, "Excellent ROA"),
        above(0.09, 8.0, "Very good ROA"),
        above(0.06, 7.0, "Good ROA"),
        above(0.04, 6.0, "Correct ROA"),
        above(0.02, 5.0, "Average ROA"),
        above(0.01, 4.0, "Weak ROA"),
        above(0.0, 3.0, "Very weak ROA"),
    ],
    outcome(1.0, "Negative ROA"),
    UNAVAILABLE,
);

// P/E ---------------------------------------------------------------------

static FORWARD_PE_GROWTH: Ladder = Ladder::new(
    &[
        below(12.0, 10.0, "Very cheap for a growth sector"),
        below(18.0, 9.0, "Attractive valuation"),
        below(25.0, 8.0, "Reasonable valuation"),
        below(35.0, 7.0, "Fair growth valuation"),
        below(45.0, 6.0, "Demanding valuation"),
        below(60.0, 5.0, "Expensive"),
        below(80.0, 4.0, "Very expensive"),
        below(120.0, 3.0, "Speculative valuation"),
    ],
    outcome(1.0, "Extreme valuation"),
    UNAVAILABLE,
);

static FORWARD_PE_VALUE: Ladder = Ladder::new(
    &[
        below(5.0, 10.0, "Deep value"),
        below(7.0, 9.0, "Very cheap"),
        below(10.0, 8.0, "Cheap"),
        below(13.0, 7.0, "Fair valuation"),
        below(18.0, 6.0, "Full valuation"),
        below(22.0, 5.0, "Expensive for the sector"),
        below(30.0, 4.0, "Very expensive for the sector"),
        below(45.0, 3.0, "Overvalued"),
    ],
    outcome(1.0, "Strongly overvalued"),
    UNAVAILABLE,
);

static FORWARD_PE_GENERAL: Ladder = Ladder::new(
    &[
        below(7.0, 10.0, "Very cheap"),
        below(10.0, 9.0, "Cheap"),
        below(14.0, 8.0, "Attractive valuation"),
        below(18.0, 7.0, "Fair valuation"),
        below(22.0, 6.0, "Full valuation"),
        below(28.0, 5.0, "Slightly expensive"),
        below(35.0, 4.0, "Expensive"),
        below(45.0, 3.0, "Very expensive"),
        below(60.0, 2.0, "Overvalued"),
    ],
    outcome(1.0, "Strongly overvalued"),
    UNAVAILABLE,
);

static TRAILING_PE_GROWTH: Ladder = Ladder::new(
    &[
        below(15.0, 10.0, "Very cheap for a growth sector"),
        below(20.0, 9.0, "Attractive valuation"),
        below(28.0, 8.0, "Reasonable valuation"),
        below(36.0, 7.0, "Fair growth valuation"),
        below(46.0, 6.0, "Demanding valuation"),
        below(60.0, 5.0, "Expensive"),
        below(75.0, 4.0, "Very expensive"),
        below(100.0, 3.0, "Speculative valuation"),
    ],
    outcome(1.0, "Extreme valuation"),
    UNAVAILABLE,
);

static TRAILING_PE_VALUE: Ladder = Ladder::new(
    &[
        below(5.0, 10.0, "Deep value"),
        below(8.0, 9.0, "Very cheap"),
        below(12.0, 8.0, "Cheap"),
        below(16.0, 7.0, "Fair valuation"),
        below(20.0, 6.0, "Full valuation"),
        below(26.0, 5.0, "Expensive for the sector"),
        below(34.0, 4.0, "Very expensive for the sector"),
        below(45.0, 3.0, "Overvalued"),
    ],
    outcome(1.0, "Strongly overvalued"),
    UNAVAILABLE,
);

static TRAILING_PE_GENERAL: Ladder = Ladder::new(
    &[
        below(7.0, 10.0, "Very cheap"),
        below(11.0, 9.0, "Cheap"),
        below(15.0, 8.0, "Attractive valuation"),
        below(20.0, 7.0, "Fair valuation"),
        below(25.0, 6.0, "Full valuation"),
        below(32.0, 5.0, "Slightly expensive"),
        below(42.0, 4.0, "Expensive"),
        below(55.0, 3.0, "Very expensive"),
    ],
    outcome(1.0, "Overvalued"),
    UNAVAILABLE,
);

// Price/Book --------------------------------------------------------------

static PRICE_TO_BOOK_ASSET_HEAVY: Ladder = Ladder::new(
    &[
        below(0.4, 10.0, "Deep discount to book"),
        below(0.7, 9.0, "Strong discount to book"),
        below(0.95, 8.0, "Below book value"),
        below(1.2, 7.0, "Around book value"),
        below(1.6, 6.0, "Modest premium to book"),
        below(2.2, 5.0, "Premium to book"),
        below(3.0, 4.0, "High premium to book"),
        below(4.0, 3.0, "Very high premium"),
    ],
    outcome(1.0, "Extreme premium to book"),
    UNAVAILABLE,
);

static PRICE_TO_BOOK_TECHNOLOGY: Ladder = Ladder::new(
    &[
        below(1.5, 10.0, "Very low for tech"),
        below(3.0, 9.0, "Low for tech"),
        below(5.0, 8.0, "Reasonable for tech"),
        below(8.0, 7.0, "Typical for tech"),
        below(12.0, 6.0, "Elevated"),
        below(18.0, 5.0, "High"),
        below(25.0, 4.0, "Very high"),
        below(35.0, 3.0, "Excessive"),
    ],
    outcome(1.0, "Extreme"),
    UNAVAILABLE,
);

static PRICE_TO_BOOK_GENERAL: Ladder = Ladder::new(
    &[
        below(0.6, 10.0, "Deep discount to book"),
        below(0.9, 9.0, "Below book value"),
        below(1.2, 8.0, "Around book value"),
        below(1.6, 7.0, "Modest premium"),
        below(2.2, 6.0, "Fair premium"),
        below(3.0, 5.0, "Premium"),
        below(4.0, 4.0, "High premium"),
        below(6.0, 3.0, "Very high premium"),
        below(10.0, 2.0, "Excessive premium"),
    ],
    outcome(1.0, "Extreme premium"),
    UNAVAILABLE,
);

// Beta --------------------------------------------------------------------

static BETA_HIGH_VOLATILITY: Ladder = Ladder::new(
    &[
        below(0.6, 10.0, "Very stable for the sector"),
        below(0.85, 9.0, "Stable"),
        below(1.1, 8.0, "Market-like volatility"),
        below(1.3, 7.0, "Normal for the sector"),
        below(1.6, 6.0, "Volatile"),
        below(1.9, 5.0, "Very volatile"),
        below(2.3, 4.0, "Highly volatile"),
    ],
    outcome(2.0, "Extreme volatility"),
    UNAVAILABLE,
);

static BETA_DEFENSIVE: Ladder = Ladder::new(
    &[
        below(0.3, 10.0, "Very defensive"),
        below(0.6, 9.0, "Defensive"),
        below(0.85, 8.0, "Low volatility"),
        below(1.05, 7.0, "Market-like volatility"),
        below(1.25, 6.0, "Volatile for a defensive name"),
        below(1.6, 5.0, "Very volatile for the sector"),
        below(2.0, 4.0, "Unusual volatility"),
    ],
    outcome(3.0, "Abnormal volatility"),
    UNAVAILABLE,
);

static BETA_GENERAL: Ladder = Ladder::new(
    &[
        below(0.4, 10.0, "Very low volatility"),
        below(0.7, 9.0, "Low volatility"),
        below(0.9, 8.0, "Moderate volatility"),
        below(1.1, 7.0, "Market-like volatility"),
        below(1.3, 6.0, "Slightly volatile"),
        below(1.6, 5.0, "Volatile"),
        below(2.0, 4.0, "Very volatile"),
        below(2.5, 3.0, "Highly volatile"),
    ],
    outcome(1.0, "Extreme volatility"),
    UNAVAILABLE,
);

// Debt/Equity (percent form) ------------------------------------------------

static DEBT_TO_EQUITY_LEVERAGED: Ladder = Ladder::new(
    &[
        below(100.0, 10.0, "Very low leverage for the sector"),
        below(200.0, 9.0, "Low leverage"),
        below(350.0, 8.0, "Moderate leverage"),
        below(550.0, 7.0, "Normal sector leverage"),
        below(800.0, 6.0, "Elevated leverage"),
        below(1100.0, 5.0, "High leverage"),
        below(1500.0, 4.0, "Very high leverage"),
        below(2000.0, 3.0, "Excessive leverage"),
    ],
    outcome(2.0, "Extreme leverage"),
    UNAVAILABLE_LEVERAGE,
);

static DEBT_TO_EQUITY_UTILITIES: Ladder = Ladder::new(
    &[
        below(40.0, 10.0, "Very low debt for a utility"),
        below(80.0, 9.0, "Low debt"),
        below(130.0, 8.0, "Moderate debt"),
        below(200.0, 7.0, "Normal utility debt"),
        below(280.0, 6.0, "Elevated debt"),
        below(400.0, 5.0, "High debt"),
        below(600.0, 4.0, "Very high debt"),
    ],
    outcome(3.0, "Excessive debt"),
    UNAVAILABLE_LEVERAGE,
);

static DEBT_TO_EQUITY_TECHNOLOGY: Ladder = Ladder::new(
    &[
        below(5.0, 10.0, "Virtually debt-free"),
        below(15.0, 9.0, "Very low debt"),
        below(30.0, 8.0, "Low debt"),
        below(60.0, 7.0, "Moderate debt"),
        below(100.0, 6.0, "Notable debt"),
        below(150.0, 5.0, "High debt for tech"),
        below(220.0, 4.0, "Very high debt"),
    ],
    outcome(3.0, "Excessive debt"),
    UNAVAILABLE_LEVERAGE,
);

static DEBT_TO_EQUITY_GENERAL: Ladder = Ladder::new(
    &[
        below(10.0, 10.0, "Virtually debt-free"),
        below(25.0, 9.0, "Very low debt"),
        below(50.0, 8.0, "Low debt"),
        below(80.0, 7.0, "Moderate debt"),
        below(120.0, 6.0, "Acceptable debt"),
        below(180.0, 5.0, "Elevated debt"),
        below(250.0, 4.0, "High debt"),
        below(350.0, 3.0, "Very high debt"),
    ],
    outcome(2.0, "Excessive debt"),
    UNAVAILABLE_LEVERAGE,
);

// Current ratio -----------------------------------------------------------

static CURRENT_RATIO_FINANCIAL: Ladder = Ladder::new(
    &[
        above(1.3, 10.0, "Excellent liquidity for a financial"),
        above(1.1, 9.0, "Very good liquidity"),
        above(0.9, 8.0, "Adequate liquidity"),
        above(0.7, 6.0, "Acceptable liquidity"),
        above(0.5, 4.0, "Tight liquidity"),
        above(0.3, 3.0, "Weak liquidity"),
    ],
    outcome(2.0, "Critical liquidity"),
    UNAVAILABLE,
);

static CURRENT_RATIO_GROWTH: Ladder = Ladder::new(
    &[
        above(3.0, 10.0, "Excellent liquidity"),
        above(2.5, 9.0, "Very good liquidity"),
        above(2.0, 8.0, "Good liquidity"),
        above(1.5, 7.0, "Adequate liquidity"),
        above(1.2, 6.0, "Acceptable liquidity"),
        above(1.0, 5.0, "Tight liquidity"),
        above(0.8, 4.0, "Weak liquidity"),
    ],
    outcome(3.0, "Insufficient liquidity"),
    UNAVAILABLE,
);

static CURRENT_RATIO_UTILITIES: Ladder = Ladder::new(
    &[
        above(2.0, 10.0, "Excellent liquidity for a utility"),
        above(1.5, 9.0, "Very good liquidity"),
        above(1.2, 8.0, "Good liquidity"),
        above(1.0, 7.0, "Adequate liquidity"),
        above(0.8, 6.0, "Normal for the sector"),
        above(0.6, 4.0, "Tight liquidity"),
    ],
    outcome(3.0, "Weak liquidity"),
    UNAVAILABLE,
);

static CURRENT_RATIO_GENERAL: Ladder = Ladder::new(
    &[
        above(3.0, 10.0, "Excellent liquidity"),
        above(2.5, 9.0, "Very good liquidity"),
        above(2.0, 8.0, "Good liquidity"),
        above(1.5, 7.0, "Adequate liquidity"),
        above(1.2, 6.0, "Acceptable liquidity"),
        above(1.0, 5.0, "Tight liquidity"),
        above(0.8, 4.0, "Weak liquidity"),
        above(0.6, 3.0, "Very weak liquidity"),
    ],
    outcome(2.0, "Critical liquidity"),
    UNAVAILABLE,
);

// Net margin --------------------------------------------------------------

static PROFIT_MARGIN_TECHNOLOGY: Ladder = Ladder::new(
    &[
        above(0.30, 10.0, "Exceptional margin"),
        above(0.22, 9.0, "Excellent margin"),
        above(0.15, 8.0, "Very good margin"),
        above(0.10, 7.0, "Good margin"),
        above(0.05, 6.0, "Average margin"),
        above(0.02, 4.0, "Thin margin"),
    ],
    outcome(1.0, "Negative or negligible margin"),
    UNAVAILABLE,
);

static PROFIT_MARGIN_HEALTHCARE: Ladder = Ladder::new(
    &[
        above(0.25, 10.0, "Exceptional margin"),
        above(0.18, 9.0, "Excellent margin"),
        above(0.12, 8.0, "Very good margin"),
        above(0.08, 7.0, "Good margin"),
        above(0.04, 6.0, "Average margin"),
        above(0.01, 4.0, "Thin margin"),
    ],
    outcome(1.0, "Negative or negligible margin"),
    UNAVAILABLE,
);

static PROFIT_MARGIN_HIGH_MARGIN: Ladder = Ladder::new(
    &[
        above(0.35, 10.0, "Exceptional margin"),
        above(0.25, 9.0, "Excellent margin"),
        above(0.18, 8.0, "Very good margin"),
        above(0.12, 7.0, "Good margin"),
        above(0.07, 6.0, "Average margin"),
        above(0.03, 4.0, "Thin margin"),
    ],
    outcome(1.0, "Negative or negligible margin"),
    UNAVAILABLE,
);

static PROFIT_MARGIN_GENERAL: Ladder = Ladder::new(
    &[
        above(0.30, 10.0, "Exceptional margin"),
        above(0.22, 9.0, "Excellent margin"),
        above(0.15, 8.0, "Very good margin"),
        above(0.10, 7.0, "Good margin"),
        above(0.06, 6.0, "Correct margin"),
        above(0.03, 4.0, "Thin margin"),
        above(0.0, 3.0, "Very thin margin"),
    ],
    outcome(1.0, "Negative margin"),
    UNAVAILABLE,
);

// FCF yield ---------------------------------------------------------------

static FCF_YIELD_GROWTH: Ladder = Ladder::new(
    &[
        above(0.10, 10.0, "Exceptional cash generation"),
        above(0.07, 9.0, "Excellent FCF yield"),
        above(0.05, 8.0, "Very good FCF yield"),
        above(0.03, 6.0, "Good FCF yield"),
        above(0.02, 5.0, "Average FCF yield"),
        above(0.01, 4.0, "Low FCF yield"),
    ],
    outcome(1.0, "Negative or negligible FCF"),
    UNAVAILABLE,
);

static FCF_YIELD_ENERGY: Ladder = Ladder::new(
    &[
        above(0.15, 10.0, "Exceptional cash generation"),
        above(0.10, 9.0, "Excellent FCF yield"),
        above(0.07, 8.0, "Very good FCF yield"),
        above(0.04, 6.0, "Average FCF yield"),
        above(0.02, 4.0, "Low FCF yield"),
    ],
    outcome(1.0, "Negative or negligible FCF"),
    UNAVAILABLE,
);

static FCF_YIELD_GENERAL: Ladder = Ladder::new(
    &[
        above(0.12, 10.0, "Exceptional cash generation"),
        above(0.08, 9.0, "Excellent FCF yield"),
        above(0.06, 8.0, "Very good FCF yield"),
        above(0.04, 6.0, "Good FCF yield"),
        above(0.02, 4.0, "Low FCF yield"),
    ],
    outcome(1.0, "Negative or negligible FCF"),
    UNAVAILABLE,
);

// Dividend yield (percent form) ----------------------------------------------

static DIVIDEND_YIELD_INCOME: Ladder = Ladder::new(
    &[
        above(10.0, 8.0, "Very high yield: check sustainability"),
        above(7.0, 9.0, "Excellent yield"),
        above(5.0, 8.0, "Very good yield"),
        above(4.0, 7.0, "Good yield"),
        above(3.0, 6.0, "Average yield for the sector"),
        above(2.0, 5.0, "Low yield for the sector"),
        above(1.0, 4.0, "Weak yield"),
        above(0.0, 3.0, "Very weak yield"),
    ],
    outcome(1.0, "No dividend"),
    NO_DIVIDEND,
);

static DIVIDEND_YIELD_GROWTH: Ladder = Ladder::new(
    &[
        above(4.0, 8.0, "High yield for a growth sector"),
        above(2.5, 7.0, "Good yield"),
        above(1.5, 6.0, "Moderate yield"),
        above(0.8, 5.0, "Modest yield"),
        above(0.3, 4.0, "Symbolic yield"),
        above(0.0, 3.0, "Negligible yield"),
    ],
    outcome(5.0, "No dividend, normal for a growth sector"),
    NO_DIVIDEND,
);

static DIVIDEND_YIELD_GENERAL: Ladder = Ladder::new(
    &[
        above(8.0, 10.0, "Exceptional yield"),
        above(6.0, 9.0, "Excellent yield"),
        above(4.5, 8.0, "Very good yield"),
        above(4.0, 7.0, "Good yield"),
        above(3.0, 6.0, "Correct yield"),
        above(2.0, 5.0, "Average yield"),
        above(1.0, 4.0, "Low yield"),
        above(0.5, 3.0, "Weak yield"),
        above(0.0, 2.0, "Very weak yield"),
    ],
    outcome(1.0, "No dividend"),
    NO_DIVIDEND,
);

// Payout ratio ------------------------------------------------------------

static PAYOUT_INCOME: Ladder = Ladder::new(
    &[
        above(0.95, 4.0, "Payout above 95%: dividend at risk"),
        above(0.80, 8.0, "High but sustainable payout"),
        at_least(0.60, 10.0, "Optimal payout for the sector"),
        at_least(0.50, 9.0, "Solid payout"),
        at_least(0.30, 7.0, "Moderate payout"),
    ],
    outcome(6.0, "Low payout for the sector"),
    UNAVAILABLE,
);

static PAYOUT_GROWTH: Ladder = Ladder::new(
    &[
        below(0.20, 10.0, "Low payout, earnings reinvested"),
        below(0.35, 9.0, "Moderate payout"),
        below(0.50, 8.0, "Balanced payout"),
        below(0.70, 6.0, "High payout for a growth sector"),
    ],
    outcome(3.0, "Excessive payout for a growth sector"),
    UNAVAILABLE,
);

static PAYOUT_GENERAL: Ladder = Ladder::new(
    &[
        above(0.90, 1.0, "Unsustainable payout"),
        above(0.75, 3.0, "Very high payout"),
        above(0.60, 6.0, "High payout"),
        above(0.45, 8.0, "Comfortable payout"),
        at_least(0.25, 10.0, "Balanced payout"),
    ],
    outcome(7.0, "Low payout"),
    UNAVAILABLE,
);

// 52-week position (percent of range) ----------------------------------------

static POSITION_52W_GROWTH: Ladder = Ladder::new(
    &[
        below(20.0, 10.0, "Near the 52-week low"),
        below(35.0, 9.0, "Lower part of the range"),
        below(50.0, 8.0, "Below mid-range"),
        below(65.0, 7.0, "Around mid-range"),
        below(75.0, 6.0, "Upper-middle of the range"),
        below(85.0, 5.0, "Upper part of the range"),
        below(92.0, 4.0, "Close to the 52-week high"),
        below(97.0, 3.0, "Very close to the 52-week high"),
    ],
    outcome(2.0, "At the 52-week high"),
    outcome(5.0, "Insufficient data"),
);

static POSITION_52W_CYCLICAL: Ladder = Ladder::new(
    &[
        below(15.0, 10.0, "Near the 52-week low"),
        below(25.0, 9.0, "Lower part of the range"),
        below(40.0, 8.0, "Below mid-range"),
        below(55.0, 7.0, "Around mid-range"),
        below(65.0, 6.0, "Upper-middle of the range"),
        below(75.0, 5.0, "Upper part of the range"),
        below(85.0, 4.0, "Close to the 52-week high"),
        below(95.0, 3.0, "Very close to the 52-week high"),
    ],
    outcome(2.0, "At the 52-week high"),
    outcome(5.0, "Insufficient data"),
);

static POSITION_52W_GENERAL: Ladder = Ladder::new(
    &[
        below(10.0, 10.0, "At the 52-week low"),
        below(20.0, 9.0, "Near the 52-week low"),
        below(30.0, 8.0, "Lower part of the range"),
        below(40.0, 7.0, "Below mid-range"),
        below(50.0, 6.0, "Slightly below mid-range"),
        below(60.0, 5.0, "Slightly above mid-range"),
        below(70.0, 4.0, "Upper part of the range"),
        below(80.0, 3.0, "High in the range"),
        below(90.0, 2.0, "Close to the 52-week high"),
    ],
    outcome(1.0, "At the 52-week high"),
    outcome(5.0, "Insufficient data"),
);

// Analyst consensus (1 = strong buy, 5 = strong sell) -------------------------

pub(crate) static ANALYST_CONSENSUS: Ladder = Ladder::new(
    &[
        at_most(1.2, 10.0, "Unanimous strong buy"),
        at_most(1.5, 9.0, "Strong buy"),
        at_most(1.7, 8.0, "Buy"),
        at_most(2.0, 7.0, "Moderate buy"),
        at_most(2.5, 6.0, "Cautious buy"),
        at_most(3.0, 5.0, "Hold"),
        at_most(3.3, 4.0, "Cautious hold"),
        at_most(3.7, 3.0, "Underweight"),
        at_most(4.2, 2.0, "Sell"),
        at_most(4.5, 1.0, "Strong sell"),
    ],
    outcome(0.0, "Unanimous sell"),
    outcome(3.0, "No analyst coverage"),
);

// Supplementary -----------------------------------------------------------

static OPERATING_MARGIN_TECHNOLOGY: Ladder = Ladder::new(
    &[
        above(25.0, 10.0, "Exceptional operating margin"),
        above(18.0, 9.0, "Excellent operating margin"),
        above(12.0, 8.0, "Very good operating margin"),
        above(8.0, 7.0, "Good operating margin"),
        above(4.0, 6.0, "Average operating margin"),
        above(0.0, 4.0, "Thin operating margin"),
    ],
    outcome(2.0, "Operating loss"),
    UNAVAILABLE_NEUTRAL,
);

static OPERATING_MARGIN_HEALTHCARE: Ladder = Ladder::new(
    &[
        above(22.0, 10.0, "Exceptional operating margin"),
        above(15.0, 9.0, "Excellent operating margin"),
        above(10.0, 8.0, "Very good operating margin"),
        above(6.0, 7.0, "Good operating margin"),
        above(3.0, 5.0, "Average operating margin"),
        above(0.0, 3.0, "Thin operating margin"),
    ],
    outcome(1.0, "Operating loss"),
    UNAVAILABLE_NEUTRAL,
);

static OPERATING_MARGIN_FINANCIAL: Ladder = Ladder::new(
    &[
        above(40.0, 10.0, "Exceptional operating margin"),
        above(30.0, 9.0, "Excellent operating margin"),
        above(22.0, 8.0, "Very good operating margin"),
        above(15.0, 7.0, "Good operating margin"),
        above(10.0, 5.0, "Average operating margin"),
        above(0.0, 3.0, "Thin operating margin"),
    ],
    outcome(1.0, "Operating loss"),
    UNAVAILABLE_NEUTRAL,
);

static OPERATING_MARGIN_ENERGY: Ladder = Ladder::new(
    &[
        above(18.0, 10.0, "Exceptional operating margin"),
        above(12.0, 9.0, "Excellent operating margin"),
        above(8.0, 8.0, "Very good operating margin"),
        above(5.0, 7.0, "Good operating margin"),
        above(2.0, 5.0, "Average operating margin"),
        above(0.0, 3.0, "Thin operating margin"),
    ],
    outcome(1.0, "Operating loss"),
    UNAVAILABLE_NEUTRAL,
);

static OPERATING_MARGIN_GENERAL: Ladder = Ladder::new(
    &[
        above(20.0, 10.0, "Exceptional operating margin"),
        above(14.0, 9.0, "Excellent operating margin"),
        above(10.0, 8.0, "Very good operating margin"),
        above(6.0, 7.0, "Good operating margin"),
        above(3.0, 5.0, "Average operating margin"),
        above(0.0, 3.0, "Thin operating margin"),
    ],
    outcome(1.0, "Operating loss"),
    UNAVAILABLE_NEUTRAL,
);

static GROSS_MARGIN_CONSUMER: Ladder = Ladder::new(
    &[
        above(50.0, 10.0, "Exceptional pricing power"),
        above(40.0, 9.0, "Excellent gross margin"),
        above(32.0, 8.0, "Very good gross margin"),
        above(25.0, 7.0, "Good gross margin"),
        above(18.0, 5.0, "Average gross margin"),
        above(0.0, 3.0, "Thin gross margin"),
    ],
    outcome(1.0, "Negative gross margin"),
    UNAVAILABLE_NEUTRAL,
);

static GROSS_MARGIN_GENERAL: Ladder = Ladder::new(
    &[
        above(45.0, 10.0, "Exceptional gross margin"),
        above(35.0, 9.0, "Excellent gross margin"),
        above(28.0, 8.0, "Very good gross margin"),
        above(20.0, 7.0, "Good gross margin"),
        above(15.0, 5.0, "Average gross margin"),
        above(0.0, 3.0, "Thin gross margin"),
    ],
    outcome(1.0, "Negative gross margin"),
    UNAVAILABLE_NEUTRAL,
);

static EARNINGS_GROWTH: Ladder = Ladder::new(
    &[
        below(-30.0, 1.0, "Earnings collapse"),
        below(-20.0, 2.0, "Sharp earnings decline"),
        below(-10.0, 3.0, "Significant earnings decline"),
        below(-5.0, 4.0, "Moderate earnings decline"),
        below(0.0, 5.0, "Slight earnings decline"),
        below(5.0, 6.0, "Modest growth"),
        below(15.0, 7.0, "Solid growth"),
        below(25.0, 8.0, "Strong growth"),
        below(50.0, 9.0, "Very strong growth"),
    ],
    outcome(10.0, "Exceptional growth"),
    UNAVAILABLE_NEUTRAL,
);

static QUICK_RATIO_FINANCIAL: Ladder = Ladder::new(
    &[
        above(1.0, 10.0, "Excellent immediate liquidity"),
        above(0.8, 9.0, "Very good immediate liquidity"),
        above(0.6, 8.0, "Good immediate liquidity"),
        above(0.5, 6.0, "Adequate immediate liquidity"),
        above(0.4, 4.0, "Tight immediate liquidity"),
        above(0.3, 3.0, "Weak immediate liquidity"),
    ],
    outcome(2.0, "Critical immediate liquidity"),
    UNAVAILABLE_NEUTRAL,
);

static QUICK_RATIO_GROWTH: Ladder = Ladder::new(
    &[
        above(2.5, 10.0, "Excellent immediate liquidity"),
        above(2.0, 9.0, "Very good immediate liquidity"),
        above(1.5, 8.0, "Good immediate liquidity"),
        above(1.0, 7.0, "Adequate immediate liquidity"),
        above(0.8, 6.0, "Acceptable immediate liquidity"),
        above(0.6, 5.0, "Tight immediate liquidity"),
        above(0.4, 4.0, "Weak immediate liquidity"),
    ],
    outcome(3.0, "Insufficient immediate liquidity"),
    UNAVAILABLE_NEUTRAL,
);

static QUICK_RATIO_UTILITIES: Ladder = Ladder::new(
    &[
        above(1.5, 10.0, "Excellent immediate liquidity"),
        above(1.2, 9.0, "Very good immediate liquidity"),
        above(1.0, 8.0, "Good immediate liquidity"),
        above(0.8, 7.0, "Adequate immediate liquidity"),
        above(0.6, 6.0, "Normal for the sector"),
        above(0.5, 4.0, "Tight immediate liquidity"),
    ],
    outcome(3.0, "Weak immediate liquidity"),
    UNAVAILABLE_NEUTRAL,
);

static QUICK_RATIO_GENERAL: Ladder = Ladder::new(
    &[
        above(2.0, 10.0, "Excellent immediate liquidity"),
        above(1.5, 9.0, "Very good immediate liquidity"),
        above(1.2, 8.0, "Good immediate liquidity"),
        above(1.0, 7.0, "Adequate immediate liquidity"),
        above(0.8, 6.0, "Acceptable immediate liquidity"),
        above(0.6, 5.0, "Tight immediate liquidity"),
        above(0.5, 4.0, "Weak immediate liquidity"),
    ],
    outcome(3.0, "Insufficient immediate liquidity"),
    UNAVAILABLE_NEUTRAL,
);

static OCF_RATIO: Ladder = Ladder::new(
    &[
        above(2.5, 10.0, "Operating cash flow covers short-term debt many times"),
        above(2.0, 9.0, "Excellent cash coverage"),
        above(1.5, 8.0, "Very good cash coverage"),
        above(1.0, 7.0, "Good cash coverage"),
        above(0.7, 6.0, "Adequate cash coverage"),
        above(0.5, 5.0, "Limited cash coverage"),
        above(0.3, 3.0, "Weak cash coverage"),
    ],
    outcome(1.0, "Insufficient cash coverage"),
    UNAVAILABLE_NEUTRAL,
);

static DEBT_TO_EBITDA_GROWTH: Ladder = Ladder::new(
    &[
        below(1.0, 10.0, "Negligible debt load"),
        below(2.0, 9.0, "Low debt load"),
        below(3.0, 8.0, "Moderate debt load"),
        below(4.0, 7.0, "Acceptable debt load"),
        below(5.5, 5.0, "High debt load"),
        below(7.0, 3.0, "Very high debt load"),
    ],
    outcome(1.0, "Excessive debt load"),
    UNAVAILABLE_NEUTRAL,
);

static DEBT_TO_EBITDA_ASSET_HEAVY: Ladder = Ladder::new(
    &[
        below(3.0, 10.0, "Low debt load for the sector"),
        below(4.5, 9.0, "Moderate debt load"),
        below(6.0, 8.0, "Normal sector debt load"),
        below(7.5, 7.0, "Elevated debt load"),
        below(9.0, 5.0, "High debt load"),
        below(11.0, 3.0, "Very high debt load"),
    ],
    outcome(1.0, "Excessive debt load"),
    UNAVAILABLE_NEUTRAL,
);

static DEBT_TO_EBITDA_GENERAL: Ladder = Ladder::new(
    &[
        below(1.5, 10.0, "Low debt load"),
        below(2.5, 9.0, "Moderate debt load"),
        below(3.5, 8.0, "Acceptable debt load"),
        below(5.0, 7.0, "Elevated debt load"),
        below(6.5, 5.0, "High debt load"),
        below(8.0, 3.0, "Very high debt load"),
    ],
    outcome(1.0, "Excessive debt load"),
    UNAVAILABLE_NEUTRAL,
);

static PEG_RATIO: Ladder = Ladder::new(
    &[
        at_most(0.0, 2.0, "Negative growth: PEG not meaningful"),
        below(0.5, 10.0, "Strongly undervalued relative to growth"),
        below(0.8, 9.0, "Undervalued relative to growth"),
        below(1.0, 8.0, "Attractive relative to growth"),
        below(1.3, 7.0, "Fair relative to growth"),
        below(1.7, 6.0, "Slightly expensive relative to growth"),
        below(2.0, 5.0, "Expensive relative to growth"),
        below(2.5, 4.0, "Very expensive relative to growth"),
        below(3.0, 3.0, "Overvalued relative to growth"),
    ],
    outcome(1.0, "Strongly overvalued relative to growth"),
    UNAVAILABLE_NEUTRAL,
);

static DEBT_TO_ASSETS_FINANCIAL: Ladder = Ladder::new(
    &[
        below(30.0, 10.0, "Very low leverage for a financial"),
        below(45.0, 9.0, "Low leverage"),
        below(60.0, 8.0, "Moderate leverage"),
        below(70.0, 7.0, "Normal sector leverage"),
        below(80.0, 5.0, "High leverage"),
        below(88.0, 3.0, "Very high leverage"),
    ],
    outcome(1.0, "Excessive leverage"),
    UNAVAILABLE_NEUTRAL,
);

static DEBT_TO_ASSETS_ASSET_HEAVY: Ladder = Ladder::new(
    &[
        below(25.0, 10.0, "Very low leverage"),
        below(40.0, 9.0, "Low leverage"),
        below(55.0, 8.0, "Moderate leverage"),
        below(65.0, 7.0, "Normal sector leverage"),
        below(75.0, 5.0, "High leverage"),
        below(82.0, 3.0, "Very high leverage"),
    ],
    outcome(1.0, "Excessive leverage"),
    UNAVAILABLE_NEUTRAL,
);

static DEBT_TO_ASSETS_GROWTH: Ladder = Ladder::new(
    &[
        below(15.0, 10.0, "Very low leverage"),
        below(25.0, 9.0, "Low leverage"),
        below(35.0, 8.0, "Moderate leverage"),
        below(45.0, 7.0, "Acceptable leverage"),
        below(55.0, 5.0, "High leverage"),
        below(65.0, 3.0, "Very high leverage"),
    ],
    outcome(1.0, "Excessive leverage"),
    UNAVAILABLE_NEUTRAL,
);

static DEBT_TO_ASSETS_GENERAL: Ladder = Ladder::new(
    &[
        below(20.0, 10.0, "Very low leverage"),
        below(30.0, 9.0, "Low leverage"),
        below(40.0, 8.0, "Moderate leverage"),
        below(50.0, 7.0, "Acceptable leverage"),
        below(60.0, 6.0, "Elevated leverage"),
        below(70.0, 5.0, "High leverage"),
        below(80.0, 3.0, "Very high leverage"),
    ],
    outcome(1.0, "Excessive leverage"),
    UNAVAILABLE_NEUTRAL,
);

static INTEREST_COVERAGE_STABLE: Ladder = Ladder::new(
    &[
        above(8.0, 10.0, "Excellent interest coverage"),
        above(5.0, 9.0, "Very good interest coverage"),
        above(3.5, 8.0, "Good interest coverage"),
        above(2.5, 7.0, "Adequate interest coverage"),
        above(2.0, 6.0, "Acceptable interest coverage"),
        above(1.5, 5.0, "Tight interest coverage"),
        above(1.0, 3.0, "Weak interest coverage"),
        above(0.0, 2.0, "Critical interest coverage"),
    ],
    outcome(1.0, "Earnings do not cover interest"),
    UNAVAILABLE_NEUTRAL,
);

static INTEREST_COVERAGE_GROWTH: Ladder = Ladder::new(
    &[
        above(15.0, 10.0, "Excellent interest coverage"),
        above(10.0, 9.0, "Very good interest coverage"),
        above(7.0, 8.0, "Good interest coverage"),
        above(5.0, 7.0, "Adequate interest coverage"),
        above(3.0, 6.0, "Acceptable interest coverage"),
        above(2.0, 5.0, "Tight interest coverage"),
        above(1.2, 3.0, "Weak interest coverage"),
        above(0.0, 2.0, "Critical interest coverage"),
    ],
    outcome(1.0, "Earnings do not cover interest"),
    UNAVAILABLE_NEUTRAL,
);

static INTEREST_COVERAGE_GENERAL: Ladder = Ladder::new(
    &[
        above(10.0, 10.0, "Excellent interest coverage"),
        above(6.0, 9.0, "Very good interest coverage"),
        above(4.0, 8.0, "Good interest coverage"),
        above(3.0, 7.0, "Adequate interest coverage"),
        above(2.0, 6.0, "Acceptable interest coverage"),
        above(1.5, 5.0, "Tight interest coverage"),
        above(1.0, 3.0, "Weak interest coverage"),
        above(0.0, 2.0, "Critical interest coverage"),
    ],
    outcome(1.0, "Earnings do not cover interest"),
    UNAVAILABLE_NEUTRAL,
);

static EQUITY_RATIO_LEVERAGED: Ladder = Ladder::new(
    &[
        above(20.0, 10.0, "Very strong capital base for the sector"),
        above(15.0, 9.0, "Strong capital base"),
        above(12.0, 8.0, "Solid capital base"),
        above(10.0, 7.0, "Adequate capital base"),
        above(8.0, 6.0, "Normal for the sector"),
        above(6.0, 5.0, "Thin capital base"),
        above(4.0, 3.0, "Weak capital base"),
        above(0.0, 2.0, "Very weak capital base"),
    ],
    outcome(1.0, "Negative equity"),
    UNAVAILABLE_NEUTRAL,
);

static EQUITY_RATIO_ASSET_HEAVY: Ladder = Ladder::new(
    &[
        above(50.0, 10.0, "Very strong capital base"),
        above(40.0, 9.0, "Strong capital base"),
        above(35.0, 8.0, "Solid capital base"),
        above(30.0, 7.0, "Adequate capital base"),
        above(25.0, 6.0, "Normal for the sector"),
        above(20.0, 5.0, "Thin capital base"),
        above(15.0, 3.0, "Weak capital base"),
        above(0.0, 2.0, "Very weak capital base"),
    ],
    outcome(1.0, "Negative equity"),
    UNAVAILABLE_NEUTRAL,
);

static EQUITY_RATIO_GENERAL: Ladder = Ladder::new(
    &[
        above(65.0, 10.0, "Very strong capital base"),
        above(55.0, 9.0, "Strong capital base"),
        above(45.0, 8.0, "Solid capital base"),
        above(40.0, 7.0, "Good capital base"),
        above(35.0, 6.0, "Adequate capital base"),
        above(30.0, 5.0, "Average capital base"),
        above(25.0, 4.0, "Thin capital base"),
        above(20.0, 3.0, "Weak capital base"),
        above(0.0, 2.0, "Very weak capital base"),
    ],
    outcome(1.0, "Negative equity"),
    UNAVAILABLE_NEUTRAL,
);

/// Table used to rate `indicator` for a company in `group`.
pub fn ladder_for(indicator: FundamentalIndicator, group: SectorGroup) -> &'static Ladder {
    use FundamentalIndicator as I;

    match indicator {
        I::Roe => match group {
            Technology => &ROE_TECHNOLOGY,
            FinancialServices => &ROE_FINANCIAL,
            Healthcare => &ROE_HEALTHCARE,
            Energy => &ROE_ENERGY,
            _ => &ROE_GENERAL,
        },
        I::Roa => match group {
            FinancialServices => &ROA_FINANCIAL,
            Technology => &ROA_TECHNOLOGY,
            Healthcare => &ROA_HEALTHCARE,
            Energy => &ROA_ENERGY,
            _ => &ROA_GENERAL,
        },
        I::ForwardPe => match group {
            Technology | Healthcare => &FORWARD_PE_GROWTH,
            FinancialServices | Energy | RealEstate => &FORWARD_PE_VALUE,
            _ => &FORWARD_PE_GENERAL,
        },
        I::TrailingPe => match group {
            Technology | Healthcare => &TRAILING_PE_GROWTH,
            FinancialServices | Energy | RealEstate => &TRAILING_PE_VALUE,
            _ => &TRAILING_PE_GENERAL,
        },
        I::PriceToBook => match group {
            FinancialServices | RealEstate => &PRICE_TO_BOOK_ASSET_HEAVY,
            Technology => &PRICE_TO_BOOK_TECHNOLOGY,
            _ => &PRICE_TO_BOOK_GENERAL,
        },
        I::Beta => match group {
            Technology | ConsumerCyclical => &BETA_HIGH_VOLATILITY,
            ConsumerDefensive | Utilities => &BETA_DEFENSIVE,
            _ => &BETA_GENERAL,
        },
        I::DebtToEquity => match group {
            FinancialServices | RealEstate => &DEBT_TO_EQUITY_LEVERAGED,
            Utilities => &DEBT_TO_EQUITY_UTILITIES,
            Technology => &DEBT_TO_EQUITY_TECHNOLOGY,
            _ => &DEBT_TO_EQUITY_GENERAL,
        },
        I::CurrentRatio => match group {
            FinancialServices => &CURRENT_RATIO_FINANCIAL,
            Technology | Healthcare => &CURRENT_RATIO_GROWTH,
            Utilities => &CURRENT_RATIO_UTILITIES,
            _ => &CURRENT_RATIO_GENERAL,
        },
        I::ProfitMargin => match group {
            Technology => &PROFIT_MARGIN_TECHNOLOGY,
            Healthcare => &PROFIT_MARGIN_HEALTHCARE,
            FinancialServices | Energy => &PROFIT_MARGIN_HIGH_MARGIN,
            _ => &PROFIT_MARGIN_GENERAL,
        },
        I::FcfYield => match group {
            Technology | Healthcare => &FCF_YIELD_GROWTH,
            Energy => &FCF_YIELD_ENERGY,
            _ => &FCF_YIELD_GENERAL,
        },
        I::DividendYield => match group {
            Utilities | Energy | RealEstate => &DIVIDEND_YIELD_INCOME,
            Technology | Healthcare => &DIVIDEND_YIELD_GROWTH,
            _ => &DIVIDEND_YIELD_GENERAL,
        },
        I::PayoutRatio => match group {
            Utilities | RealEstate => &PAYOUT_INCOME,
            Technology | Healthcare => &PAYOUT_GROWTH,
            _ => &PAYOUT_GENERAL,
        },
        I::Position52Week => match group {
            Technology | Healthcare => &POSITION_52W_GROWTH,
            Energy | FinancialServices => &POSITION_52W_CYCLICAL,
            _ => &POSITION_52W_GENERAL,
        },
        I::AnalystRating => &ANALYST_CONSENSUS,
        I::OperatingMargin => match group {
            Technology => &OPERATING_MARGIN_TECHNOLOGY,
            Healthcare => &OPERATING_MARGIN_HEALTHCARE,
            FinancialServices => &OPERATING_MARGIN_FINANCIAL,
            Energy => &OPERATING_MARGIN_ENERGY,
            _ => &OPERATING_MARGIN_GENERAL,
        },
        I::GrossMargin => match group {
            ConsumerCyclical | ConsumerDefensive => &GROSS_MARGIN_CONSUMER,
            _ => &GROSS_MARGIN_GENERAL,
        },
        I::EarningsGrowth => &EARNINGS_GROWTH,
        I::QuickRatio => match group {
            FinancialServices => &QUICK_RATIO_FINANCIAL,
            Technology | Healthcare => &QUICK_RATIO_GROWTH,
            Utilities => &QUICK_RATIO_UTILITIES,
            _ => &QUICK_RATIO_GENERAL,
        },
        I::OcfRatio => &OCF_RATIO,
        I::DebtToEbitda => match group {
            Technology | Healthcare => &DEBT_TO_EBITDA_GROWTH,
            Utilities | RealEstate => &DEBT_TO_EBITDA_ASSET_HEAVY,
            _ => &DEBT_TO_EBITDA_GENERAL,
        },
        I::PegRatio => &PEG_RATIO,
        I::DebtToAssets => match group {
            FinancialServices => &DEBT_TO_ASSETS_FINANCIAL,
            Utilities | RealEstate => &DEBT_TO_ASSETS_ASSET_HEAVY,
            Technology | Healthcare => &DEBT_TO_ASSETS_GROWTH,
            _ => &DEBT_TO_ASSETS_GENERAL,
        },
        I::InterestCoverage => match group {
            Utilities | RealEstate | Energy => &INTEREST_COVERAGE_STABLE,
            Technology | Healthcare => &INTEREST_COVERAGE_GROWTH,
            _ => &INTEREST_COVERAGE_GENERAL,
        },
        I::EquityRatio => match group {
            FinancialServices | RealEstate => &EQUITY_RATIO_LEVERAGED,
            Utilities | Energy => &EQUITY_RATIO_ASSET_HEAVY,
            _ => &EQUITY_RATIO_GENERAL,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_indicators() -> impl Iterator<Item = FundamentalIndicator> {
        FundamentalIndicator::CORE
            .into_iter()
            .chain(FundamentalIndicator::SUPPLEMENTARY)
    }

    #[test]
    fn test_every_table_stays_in_range() {
        for indicator in all_indicators() {
            for group in SectorGroup::ALL {
                for score in ladder_for(indicator, group).scores() {
                    assert!(
                        (0.0..=10.0).contains(&score),
                        "{} / {} yields {}",
                        indicator,
                        group,
                        score
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_table_handles_missing() {
        for indicator in all_indicators() {
            for group in SectorGroup::ALL {
                let rated = ladder_for(indicator, group).evaluate(None);
                assert!(!rated.label.is_empty());
            }
        }
    }

    #[test]
    fn test_roe_differs_by_sector() {
        assert_eq!(ladder_for(FundamentalIndicator::Roe, Technology).evaluate(Some(0.30)).score, 10.0);
        assert_eq!(ladder_for(FundamentalIndicator::Roe, FinancialServices).evaluate(Some(0.30)).score, 10.0);
        assert_eq!(ladder_for(FundamentalIndicator::Roe, FinancialServices).evaluate(Some(0.16)).score, 9.0);
        assert_eq!(ladder_for(FundamentalIndicator::Roe, General).evaluate(Some(0.16)).score, 8.0);
        assert_eq!(ladder_for(FundamentalIndicator::Roe, Industrials).evaluate(Some(-0.05)).score, 1.0);
    }

    #[test]
    fn test_payout_bands() {
        let general = ladder_for(FundamentalIndicator::PayoutRatio, General);
        assert_eq!(general.evaluate(Some(0.10)).score, 7.0);
        assert_eq!(general.evaluate(Some(0.25)).score, 10.0);
        assert_eq!(general.evaluate(Some(0.45)).score, 10.0);
        assert_eq!(general.evaluate(Some(0.50)).score, 8.0);
        assert_eq!(general.evaluate(Some(0.70)).score, 6.0);
        assert_eq!(general.evaluate(Some(0.85)).score, 3.0);
        assert_eq!(general.evaluate(Some(1.20)).score, 1.0);

        let utilities = ladder_for(FundamentalIndicator::PayoutRatio, Utilities);
        assert_eq!(utilities.evaluate(Some(0.20)).score, 6.0);
        assert_eq!(utilities.evaluate(Some(0.40)).score, 7.0);
        assert_eq!(utilities.evaluate(Some(0.55)).score, 9.0);
        assert_eq!(utilities.evaluate(Some(0.70)).score, 10.0);
        assert_eq!(utilities.evaluate(Some(0.80)).score, 10.0);
        assert_eq!(utilities.evaluate(Some(0.90)).score, 8.0);
        assert_eq!(utilities.evaluate(Some(0.99)).score, 4.0);
    }

    #[test]
    fn test_dividend_absence_depends_on_sector() {
        let tech = ladder_for(FundamentalIndicator::DividendYield, Technology);
        assert_eq!(tech.evaluate(Some(0.0)).score, 5.0);
        assert_eq!(tech.evaluate(None).score, 2.0);

        let utilities = ladder_for(FundamentalIndicator::DividendYield, Utilities);
        assert_eq!(utilities.evaluate(Some(12.0)).score, 8.0);
        assert_eq!(utilities.evaluate(Some(8.0)).score, 9.0);
    }

    #[test]
    fn test_leverage_fallbacks() {
        let de = ladder_for(FundamentalIndicator::DebtToEquity, Technology);
        assert_eq!(de.evaluate(None).score, 3.0);
        assert_eq!(de.evaluate(Some(3.0)).score, 10.0);
        assert_eq!(ladder_for(FundamentalIndicator::DebtToEquity, FinancialServices).evaluate(Some(450.0)).score, 7.0);
    }

    #[test]
    fn test_peg_non_positive() {
        let peg = ladder_for(FundamentalIndicator::PegRatio, General);
        assert_eq!(peg.evaluate(Some(-1.0)).score, 2.0);
        assert_eq!(peg.evaluate(Some(0.0)).score, 2.0);
        assert_eq!(peg.evaluate(Some(0.4)).score, 10.0);
    }

    #[test]
    fn test_analyst_consensus_base() {
        assert_eq!(ANALYST_CONSENSUS.evaluate(Some(1.2)).score, 10.0);
        assert_eq!(ANALYST_CONSENSUS.evaluate(Some(2.0)).score, 7.0);
        assert_eq!(ANALYST_CONSENSUS.evaluate(Some(4.8)).score, 0.0);
    }
}
