pub type Mmr = i64;
pub type Division = u8;

pub const UNRANKED: &str = "Unranked";
pub const DIVISIONS_PER_TIER: Division = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTier {
    pub threshold: Mmr,
    pub label: String,
}

impl RankTier {
    pub fn new(threshold: Mmr, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }
}

/// A resolved rank label with its 1-4 division, or `Unranked` with division 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankPosition {
    pub label: String,
    pub division: Division,
}

impl RankPosition {
    pub fn unranked() -> Self {
        Self {
            label: UNRANKED.to_string(),
            division: 0,
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.division > 0
    }

    pub fn division_label(&self) -> String {
        format!("Division {}", self.division)
    }
}
