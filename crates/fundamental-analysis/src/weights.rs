use analysis_core::SectorGroup;

use crate::indicator::FundamentalIndicator::{self, *};

type WeightRow = (FundamentalIndicator, u32);

const TECHNOLOGY: &[WeightRow] = &[
    (Roe, 12),
    (Roa, 6),
    (ForwardPe, 12),
    (TrailingPe, 5),
    (FcfYield, 20),
    (ProfitMargin, 10),
    (Beta, 5),
    (DebtToEquity, 6),
    (AnalystRating, 13),
    (Position52Week, 11),
];

const HEALTHCARE: &[WeightRow] = &[
    (Roe, 10),
    (Roa, 6),
    (ForwardPe, 9),
    (TrailingPe, 6),
    (FcfYield, 18),
    (ProfitMargin, 14),
    (Beta, 4),
    (DebtToEquity, 8),
    (AnalystRating, 10),
    (Position52Week, 15),
];

const FINANCIAL_SERVICES: &[WeightRow] = &[
    (Roe, 22),
    (Roa, 10),
    (PriceToBook, 20),
    (DividendYield, 10),
    (PayoutRatio, 10),
    (DebtToEquity, 7),
    (AnalystRating, 7),
    (Beta, 4),
    (ForwardPe, 6),
    (TrailingPe, 4),
];

const ENERGY: &[WeightRow] = &[
    (Roe, 8),
    (Roa, 3),
    (FcfYield, 20),
    (DividendYield, 14),
    (PayoutRatio, 6),
    (TrailingPe, 5),
    (ForwardPe, 6),
    (Beta, 5),
    (DebtToEquity, 13),
    (CurrentRatio, 7),
    (Position52Week, 6),
    (AnalystRating, 7),
];

const CONSUMER_CYCLICAL: &[WeightRow] = &[
    (Roe, 9),
    (Roa, 6),
    (ForwardPe, 11),
    (TrailingPe, 6),
    (FcfYield, 13),
    (ProfitMargin, 11),
    (Beta, 5),
    (DebtToEquity, 6),
    (CurrentRatio, 7),
    (Position52Week, 12),
    (AnalystRating, 14),
];

const CONSUMER_DEFENSIVE: &[WeightRow] = &[
    (Roe, 8),
    (Roa, 7),
    (ProfitMargin, 16),
    (DividendYield, 15),
    (PayoutRatio, 10),
    (FcfYield, 10),
    (TrailingPe, 6),
    (Beta, 4),
    (DebtToEquity, 7),
    (CurrentRatio, 7),
    (Position52Week, 5),
    (AnalystRating, 5),
];

const COMMUNICATION_SERVICES: &[WeightRow] = &[
    (Roe, 10),
    (Roa, 10),
    (ForwardPe, 10),
    (TrailingPe, 5),
    (FcfYield, 14),
    (ProfitMargin, 12),
    (Beta, 5),
    (AnalystRating, 12),
    (Position52Week, 10),
    (DebtToEquity, 6),
    (PriceToBook, 6),
];

const INDUSTRIALS: &[WeightRow] = &[
    (Roe, 9),
    (Roa, 7),
    (ProfitMargin, 10),
    (FcfYield, 11),
    (TrailingPe, 6),
    (ForwardPe, 8),
    (DividendYield, 7),
    (PayoutRatio, 5),
    (Beta, 5),
    (DebtToEquity, 9),
    (CurrentRatio, 8),
    (AnalystRating, 7),
    (Position52Week, 8),
];

const REAL_ESTATE: &[WeightRow] = &[
    (Roe, 7),
    (Roa, 4),
    (FcfYield, 12),
    (DividendYield, 15),
    (PayoutRatio, 10),
    (PriceToBook, 18),
    (TrailingPe, 4),
    (Beta, 5),
    (DebtToEquity, 12),
    (CurrentRatio, 5),
    (Position52Week, 4),
    (AnalystRating, 4),
];

const GENERAL: &[WeightRow] = &[
    (Roe, 9),
    (Roa, 7),
    (ForwardPe, 7),
    (TrailingPe, 5),
    (PriceToBook, 6),
    (ProfitMargin, 9),
    (FcfYield, 10),
    (DebtToEquity, 8),
    (CurrentRatio, 6),
    (Beta, 5),
    (AnalystRating, 10),
    (DividendYield, 5),
    (PayoutRatio, 3),
    (Position52Week, 10),
];

/// Per-sector weight table. Groups without a dedicated table use `General`.
pub fn weights_for(group: SectorGroup) -> &'static [WeightRow] {
    match group {
        SectorGroup::Technology => TECHNOLOGY,
        SectorGroup::Healthcare => HEALTHCARE,
        SectorGroup::FinancialServices => FINANCIAL_SERVICES,
        SectorGroup::Energy => ENERGY,
        SectorGroup::ConsumerCyclical => CONSUMER_CYCLICAL,
        SectorGroup::ConsumerDefensive => CONSUMER_DEFENSIVE,
        SectorGroup::CommunicationServices => COMMUNICATION_SERVICES,
        SectorGroup::Industrials => INDUSTRIALS,
        SectorGroup::RealEstate => REAL_ESTATE,
        SectorGroup::Utilities | SectorGroup::BasicMaterials | SectorGroup::General => GENERAL,
    }
}

/// Weight of one indicator in a group; 0 when the group does not use it.
pub fn weight_of(group: SectorGroup, indicator: FundamentalIndicator) -> u32 {
    weights_for(group)
        .iter()
        .find(|(i, _)| *i == indicator)
        .map(|(_, w)| *w)
        .unwrap_or(0)
}
