/// Rank tier configuration for the Rumble playlist
///
/// Thresholds are approximate and come from the tracker's published
/// distribution. When the season distribution shifts, update the
/// thresholds here and re-run `convert` to regenerate the chart data.
#[derive(Debug, Clone)]
pub struct TierConfig {
    pub threshold: i64,
    pub label: &'static str,
}

impl TierConfig {
    pub fn new(threshold: i64, label: &'static str) -> Self {
        Self { threshold, label }
    }
}

/// Span assumed above the topmost tier when splitting it into divisions
pub const TOP_TIER_SPAN: i64 = 200;

/// Chart band color for ranks outside every known family
pub const FALLBACK_BAND_COLOR: &str = "rgba(100, 100, 100, 0.25)";

/// Get the Rumble rank tiers, highest first
pub fn get_rank_tiers() -> Vec<TierConfig> {
    vec![
        TierConfig::new(1862, "Supersonic Legend"),
        TierConfig::new(1635, "Grand Champion III"),
        TierConfig::new(1535, "Grand Champion II"),
        TierConfig::new(1435, "Grand Champion I"),
        TierConfig::new(1176, "Champion III"),
        TierConfig::new(1096, "Champion II"),
        TierConfig::new(1016, "Champion I"),
        TierConfig::new(936, "Diamond III"),
        TierConfig::new(856, "Diamond II"),
        TierConfig::new(776, "Diamond I"),
        TierConfig::new(696, "Platinum III"),
        TierConfig::new(616, "Platinum II"),
        TierConfig::new(556, "Platinum I"),
        TierConfig::new(496, "Gold III"),
        TierConfig::new(436, "Gold II"),
        TierConfig::new(376, "Gold I"),
        TierConfig::new(316, "Silver III"),
        TierConfig::new(256, "Silver II"),
        TierConfig::new(196, "Silver I"),
        TierConfig::new(136, "Bronze III"),
        TierConfig::new(76, "Bronze II"),
        TierConfig::new(0, "Bronze I"),
    ]
}

/// Get the band colors per rank family, matched by label prefix in order
pub fn get_family_colors() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Bronze", "rgba(139, 90, 43, 0.25)"),
        ("Silver", "rgba(169, 169, 169, 0.25)"),
        ("Gold", "rgba(212, 175, 55, 0.25)"),
        ("Platinum", "rgba(0, 182, 182, 0.25)"),
        ("Diamond", "rgba(37, 161, 213, 0.25)"),
        ("Champion", "rgba(142, 89, 225, 0.25)"),
        ("Grand Champion", "rgba(227, 150, 68, 0.25)"),
        ("Supersonic Legend", "rgba(251, 163, 177, 0.25)"),
    ]
}
