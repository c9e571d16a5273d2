use std::collections::BTreeMap;

use log::warn;

use crate::domain::Observation;
use crate::rank::RankTable;

/// Result of merging a run's observations into the stored history
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub observations: Vec<Observation>,
    pub added: usize,
    pub updated: usize,
}

impl MergeOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.updated == 0
    }
}

/// Merge incoming observations into the archive, one entry per day.
///
/// Days are never removed. When a day is supplied more than once, the
/// observation merged last replaces the stored one, regardless of which
/// timestamp is later.
pub fn merge_into_archive(existing: &[Observation], incoming: &[Observation]) -> MergeOutcome {
    let stored: BTreeMap<String, Observation> = existing
        .iter()
        .map(|observation| (observation.day_key().to_string(), observation.clone()))
        .collect();

    let mut by_day = stored.clone();
    for observation in incoming {
        by_day.insert(observation.day_key().to_string(), observation.clone());
    }

    let added = by_day.keys().filter(|day| !stored.contains_key(*day)).count();
    let updated = stored
        .iter()
        .filter(|(day, observation)| by_day.get(*day) != Some(*observation))
        .count();

    MergeOutcome {
        observations: by_day.into_values().collect(),
        added,
        updated,
    }
}

/// Drop stored entries with unusable dates and re-derive rank fields
///
/// Rank labels are never trusted from disk so a threshold change is picked
/// up on the next run.
pub fn sanitize_archive(points: Vec<Observation>, table: &RankTable) -> Vec<Observation> {
    let total = points.len();
    let valid: Vec<Observation> = points
        .into_iter()
        .filter(|point| point.calendar_day().is_some())
        .map(|point| Observation::new(point.date, point.mmr, table))
        .collect();

    if valid.len() < total {
        warn!("Dropped {} archive entries with invalid dates", total - valid.len());
    }

    valid
}
