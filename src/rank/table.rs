use crate::config::{FALLBACK_BAND_COLOR, TOP_TIER_SPAN, get_family_colors, get_rank_tiers};

use super::types::{Mmr, RankTier};

#[derive(Debug, Clone, PartialEq)]
struct FamilyColor {
    prefix: String,
    color: String,
}

/// Immutable rank threshold table, ordered highest threshold first
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    tiers: Vec<RankTier>,
    colors: Vec<FamilyColor>,
}

impl RankTable {
    pub fn new(mut tiers: Vec<RankTier>, colors: Vec<(String, String)>) -> Self {
        tiers.sort_by(|a, b| b.threshold.cmp(&a.threshold));

        let colors = colors
            .into_iter()
            .map(|(prefix, color)| FamilyColor { prefix, color })
            .collect();

        Self { tiers, colors }
    }

    /// Build the Rumble table from the static configuration
    pub fn rumble() -> Self {
        let tiers = get_rank_tiers()
            .into_iter()
            .map(|tier| RankTier::new(tier.threshold, tier.label))
            .collect();

        let colors = get_family_colors()
            .into_iter()
            .map(|(prefix, color)| (prefix.to_string(), color.to_string()))
            .collect();

        Self::new(tiers, colors)
    }

    pub fn tiers(&self) -> &[RankTier] {
        &self.tiers
    }

    /// Exclusive upper bound of the tier at `index`: the next higher
    /// threshold, or a fixed span above the topmost tier.
    pub fn upper_bound(&self, index: usize) -> Mmr {
        match index.checked_sub(1).and_then(|above| self.tiers.get(above)) {
            Some(higher) => higher.threshold,
            None => self.tiers[index].threshold.saturating_add(TOP_TIER_SPAN),
        }
    }

    pub fn threshold_of(&self, label: &str) -> Option<Mmr> {
        self.tiers
            .iter()
            .find(|tier| tier.label == label)
            .map(|tier| tier.threshold)
    }

    pub fn color_for(&self, label: &str) -> &str {
        self.colors
            .iter()
            .find(|family| label.starts_with(&family.prefix))
            .map(|family| family.color.as_str())
            .unwrap_or(FALLBACK_BAND_COLOR)
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::rumble()
    }
}
