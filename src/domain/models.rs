use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rank::{Division, Mmr, RankTable, resolve_rank};

/// Length of the `YYYY-MM-DD` prefix used as the per-day key
pub const DAY_KEY_LEN: usize = 10;

/// One rating sample; `rank` and `division` are always derived from `mmr`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub date: String,
    pub mmr: Mmr,
    pub rank: String,
    pub division: Division,
}

impl Observation {
    pub fn new(date: impl Into<String>, mmr: Mmr, table: &RankTable) -> Self {
        let position = resolve_rank(table, mmr);
        Self {
            date: date.into(),
            mmr,
            rank: position.label,
            division: position.division,
        }
    }

    pub fn day_key(&self) -> &str {
        self.date.get(..DAY_KEY_LEN).unwrap_or(&self.date)
    }

    pub fn calendar_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.day_key(), "%Y-%m-%d").ok()
    }

    /// Same rating under a different timestamp
    pub fn carried_to(&self, date: String) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }
}

/// Permanent per-day rating history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    #[serde(default)]
    pub data_points: Vec<Observation>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankBand {
    pub name: String,
    pub min_mmr: Mmr,
    pub max_mmr: Mmr,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub platform: String,
    pub platform_username: String,
    pub playlist: String,
    pub playlist_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentRating {
    pub mmr: Mmr,
    pub rank: String,
    pub division: String,
    pub matches: usize,
}

/// Fixed Grand Champion and Supersonic Legend markers drawn on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankMilestones {
    pub gc1: Mmr,
    pub gc2: Mmr,
    pub gc3: Mmr,
    pub ssl: Mmr,
}

impl RankMilestones {
    pub const GC1: &'static str = "Grand Champion I";
    pub const GC2: &'static str = "Grand Champion II";
    pub const GC3: &'static str = "Grand Champion III";
    pub const SSL: &'static str = "Supersonic Legend";

    /// Read the markers from the tier table; a missing tier marks 0
    pub fn from_table(table: &RankTable) -> Self {
        let threshold = |label: &str| table.threshold_of(label).unwrap_or_default();
        Self {
            gc1: threshold(Self::GC1),
            gc2: threshold(Self::GC2),
            gc3: threshold(Self::GC3),
            ssl: threshold(Self::SSL),
        }
    }
}

/// Chart document consumed by the site front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayDocument {
    pub profile: Profile,
    pub current_rating: CurrentRating,
    pub rank_thresholds: RankMilestones,
    pub rank_bands: Vec<RankBand>,
    pub data_points: Vec<Observation>,
    pub last_updated: String,
}
