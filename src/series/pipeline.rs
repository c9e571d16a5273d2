use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::{CurrentRating, DisplayDocument, Observation, Profile, RankMilestones};
use crate::errors::SourceError;
use crate::rank::{RankTable, build_bands_for_ratings, resolve_rank};

use super::consolidate::consolidate_runs;
use super::dedup::dedup_daily;
use super::gaps::fill_gaps;

/// Everything besides the archive that goes into the chart document
pub struct DocumentInputs<'a> {
    pub table: &'a RankTable,
    pub profile: Profile,
    pub milestones: RankMilestones,
    pub matches: usize,
    pub now: DateTime<Utc>,
}

/// Chart-ready series: one point per day, plateaus over gaps, flat runs collapsed
pub fn normalize_for_display(archive: &[Observation]) -> Vec<Observation> {
    let daily = dedup_daily(archive);
    let filled = fill_gaps(&daily);
    consolidate_runs(&filled)
}

pub fn build_display_document(
    archive: &[Observation],
    inputs: DocumentInputs<'_>,
) -> Result<DisplayDocument, SourceError> {
    let series = normalize_for_display(archive);
    let latest = series.last().ok_or(SourceError::EmptyArchive)?;

    let current_rating = build_current_rating(latest, inputs.table, inputs.matches);
    let rank_bands = build_bands_for_ratings(inputs.table, series.iter().map(|o| o.mmr));

    Ok(DisplayDocument {
        profile: inputs.profile,
        current_rating,
        rank_thresholds: inputs.milestones,
        rank_bands,
        data_points: series,
        last_updated: format_timestamp(inputs.now),
    })
}

fn build_current_rating(latest: &Observation, table: &RankTable, matches: usize) -> CurrentRating {
    let position = resolve_rank(table, latest.mmr);

    CurrentRating {
        mmr: latest.mmr,
        division: position.division_label(),
        rank: position.label,
        matches,
    }
}

/// RFC 3339 UTC timestamp with a `Z` suffix
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
