use super::table::RankTable;
use super::types::{DIVISIONS_PER_TIER, Division, Mmr, RankPosition, RankTier};

pub fn resolve_rank(table: &RankTable, mmr: Mmr) -> RankPosition {
    table
        .tiers()
        .iter()
        .enumerate()
        .find(|(_, tier)| mmr >= tier.threshold)
        .map(|(idx, tier)| build_position(tier, mmr, table.upper_bound(idx)))
        .unwrap_or_else(RankPosition::unranked)
}

fn build_position(tier: &RankTier, mmr: Mmr, upper_bound: Mmr) -> RankPosition {
    RankPosition {
        label: tier.label.clone(),
        division: compute_division(mmr, tier.threshold, upper_bound),
    }
}

/// Splits `[threshold, upper_bound)` into four equal sub-bands.
fn compute_division(mmr: Mmr, threshold: Mmr, upper_bound: Mmr) -> Division {
    let divisions = i128::from(DIVISIONS_PER_TIER);
    let width = i128::from(upper_bound) - i128::from(threshold);

    if width <= 0 {
        return DIVISIONS_PER_TIER;
    }

    let offset = (i128::from(mmr) - i128::from(threshold)).min(width);
    let division = (1 + offset * divisions / width).min(divisions);

    division as Division
}
