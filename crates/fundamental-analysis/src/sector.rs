use analysis_core::SectorGroup;

/// Keyword table, checked top to bottom. The first group with a keyword
/// contained in the lower-cased label wins.
const SECTOR_KEYWORDS: &[(SectorGroup, &[&str])] = &[
    (SectorGroup::Technology, &["tech", "information technology"]),
    (SectorGroup::Healthcare, &["health", "pharma", "bio", "medical"]),
    (SectorGroup::FinancialServices, &["financial", "bank", "insurance", "finance"]),
    (SectorGroup::Energy, &["energy", "oil", "gas"]),
    (SectorGroup::Utilities, &["utilities", "utility"]),
    (SectorGroup::ConsumerCyclical, &["cyclical", "discretionary"]),
    (SectorGroup::ConsumerDefensive, &["defensive", "staples"]),
    (SectorGroup::CommunicationServices, &["communication", "media", "telecom"]),
    (SectorGroup::Industrials, &["industrial", "construction", "manufacturing"]),
    (SectorGroup::RealEstate, &["real estate", "reit"]),
    (SectorGroup::BasicMaterials, &["basic materials", "materials", "chemical", "mining", "steel"]),
];

/// Map a free-form sector label to its group. Unknown or empty labels are `General`.
pub fn classify_sector(label: &str) -> SectorGroup {
    let lowered = label.to_lowercase();
    if lowered.trim().is_empty() {
        return SectorGroup::General;
    }

    SECTOR_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(group, _)| *group)
        .unwrap_or(SectorGroup::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_labels() {
        assert_eq!(classify_sector("Technology"), SectorGroup::Technology);
        assert_eq!(classify_sector("Information Technology"), SectorGroup::Technology);
        assert_eq!(classify_sector("Healthcare"), SectorGroup::Healthcare);
        assert_eq!(classify_sector("Financial Services"), SectorGroup::FinancialServices);
        assert_eq!(classify_sector("Regional Banks"), SectorGroup::FinancialServices);
        assert_eq!(classify_sector("Energy"), SectorGroup::Energy);
        assert_eq!(classify_sector("Utilities"), SectorGroup::Utilities);
        assert_eq!(classify_sector("Consumer Cyclical"), SectorGroup::ConsumerCyclical);
        assert_eq!(classify_sector("Consumer Discretionary"), SectorGroup::ConsumerCyclical);
        assert_eq!(classify_sector("Consumer Defensive"), SectorGroup::ConsumerDefensive);
        assert_eq!(classify_sector("Consumer Staples"), SectorGroup::ConsumerDefensive);
        assert_eq!(classify_sector("Communication Services"), SectorGroup::CommunicationServices);
        assert_eq!(classify_sector("Industrials"), SectorGroup::Industrials);
        assert_eq!(classify_sector("Real Estate"), SectorGroup::RealEstate);
        assert_eq!(classify_sector("Basic Materials"), SectorGroup::BasicMaterials);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_sector("TECHNOLOGY"), SectorGroup::Technology);
        assert_eq!(classify_sector("real estate investment trust"), SectorGroup::RealEstate);
    }

    #[test]
    fn test_first_match_wins() {
        // "tech" is checked before "bio"
        assert_eq!(classify_sector("Biotechnology"), SectorGroup::Technology);
        // "gas" is checked before "utilities"
        assert_eq!(classify_sector("Utilities - Regulated Gas"), SectorGroup::Energy);
        // "financial" before "media"
        assert_eq!(classify_sector("Financial Media"), SectorGroup::FinancialServices);
    }

    #[test]
    fn test_unknown_falls_back_to_general() {
        assert_eq!(classify_sector(""), SectorGroup::General);
        assert_eq!(classify_sector("   "), SectorGroup::General);
        assert_eq!(classify_sector("Conglomerates"), SectorGroup::General);
    }
}
