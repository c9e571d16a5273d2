use std::collections::HashSet;

use crate::domain::RankBand;

use super::table::RankTable;
use super::types::Mmr;

/// Rating margin added on both sides of the observed range
pub const BAND_MARGIN: Mmr = 50;

/// Build chart background bands for every tier touching `[lo, hi]` widened
/// by the margin, one per label, lowest first.
pub fn build_bands(table: &RankTable, lo: Mmr, hi: Mmr) -> Vec<RankBand> {
    let window_lo = lo.saturating_sub(BAND_MARGIN);
    let window_hi = hi.saturating_add(BAND_MARGIN);
    let mut seen = HashSet::new();
    let mut bands = Vec::new();

    for (idx, tier) in table.tiers().iter().enumerate() {
        let upper = table.upper_bound(idx);

        if !touches_window(tier.threshold, upper, window_lo, window_hi) {
            continue;
        }

        if !seen.insert(tier.label.as_str()) {
            continue;
        }

        bands.push(RankBand {
            name: tier.label.clone(),
            min_mmr: tier.threshold,
            max_mmr: upper,
            color: table.color_for(&tier.label).to_string(),
        });
    }

    bands.reverse();
    bands
}

fn touches_window(threshold: Mmr, upper: Mmr, window_lo: Mmr, window_hi: Mmr) -> bool {
    upper >= window_lo && threshold <= window_hi
}

/// Bands for the range covered by a set of ratings, empty when there are none
pub fn build_bands_for_ratings<I>(table: &RankTable, ratings: I) -> Vec<RankBand>
where
    I: IntoIterator<Item = Mmr>,
{
    let mut range: Option<(Mmr, Mmr)> = None;

    for mmr in ratings {
        range = Some(match range {
            Some((lo, hi)) => (lo.min(mmr), hi.max(mmr)),
            None => (mmr, mmr),
        });
    }

    match range {
        Some((lo, hi)) => build_bands(table, lo, hi),
        None => Vec::new(),
    }
}
