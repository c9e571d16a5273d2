use std::path::{Path, PathBuf};

use crate::domain::RankMilestones;
use crate::rank::RankTable;

pub struct ProfileSettings {
    pub platform: String,
    pub username: String,
    pub playlist_name: String,
    pub playlist_id: u32,
    pub tracker_player_id: u64,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            platform: "epic".to_string(),
            username: "MaGnetBear".to_string(),
            playlist_name: "Rumble".to_string(),
            playlist_id: 28,
            tracker_player_id: 41100349,
        }
    }
}

/// File locations, relative to the site repository root
pub struct PathSettings {
    pub raw_export: PathBuf,
    pub display: PathBuf,
    pub archive: PathBuf,
    pub posts: PathBuf,
    pub updates: PathBuf,
    pub signatures: PathBuf,
    pub cookies: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            raw_export: PathBuf::from("data/trn-raw.json"),
            display: PathBuf::from("data/mmr-data.json"),
            archive: PathBuf::from("data/mmr-history.json"),
            posts: PathBuf::from("data/posts.json"),
            updates: PathBuf::from("data/updates.json"),
            signatures: PathBuf::from("signatures.json"),
            cookies: PathBuf::from("tools/cookies.txt"),
        }
    }
}

pub struct TrackerSettings {
    pub api_url: String,
    pub page_url: String,
    pub origin: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl TrackerSettings {
    fn for_profile(profile: &ProfileSettings) -> Self {
        Self {
            api_url: format!(
                "https://api.tracker.gg/api/v1/rocket-league/player-history/mmr/{}",
                profile.tracker_player_id
            ),
            page_url: format!(
                "https://rocketleague.tracker.network/rocket-league/profile/{}/{}/mmr?playlist={}",
                profile.platform,
                urlencoding::encode(&profile.username),
                profile.playlist_id
            ),
            origin: "https://rocketleague.tracker.network".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            timeout_secs: 30,
        }
    }
}

/// Budget for the manual export fallback
pub struct WatchSettings {
    pub timeout_secs: u64,
    pub poll_interval_ms: u64,
    pub settle_ms: u64,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 300,
            poll_interval_ms: 1000,
            settle_ms: 500,
        }
    }
}

pub struct SignatureSettings {
    pub csv_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub status_column: &'static str,
    pub name_column: &'static str,
    pub approved_statuses: Vec<String>,
    pub preview_count: usize,
}

impl Default for SignatureSettings {
    fn default() -> Self {
        Self {
            csv_url: concat!(
                "https://docs.google.com/spreadsheets/d/e/",
                "2PACX-1vQ2OBJcuF8Ou9z2a9-68cLtIEV1nDSuWFhJpvhbbVsR9Z4Ez4m3HbtiKjUmKOsqaNXJjeM9Xs_zsyPa",
                "/pub?gid=867923593&single=true&output=csv"
            )
            .to_string(),
            user_agent: "MaGnetBear-SignatureUpdater/1.0",
            timeout_secs: 30,
            status_column: "approval_status",
            name_column: "public_display_name",
            approved_statuses: vec!["approved".to_string(), "auto_approved".to_string()],
            preview_count: 10,
        }
    }
}

pub struct AppConfig {
    pub repo_root: PathBuf,
    pub profile: ProfileSettings,
    pub paths: PathSettings,
    pub tracker: TrackerSettings,
    pub watch: WatchSettings,
    pub signatures: SignatureSettings,
    pub ranks: RankTable,
    pub milestones: RankMilestones,
}

impl AppConfig {
    pub fn new<P: AsRef<Path>>(repo_root: P) -> Self {
        let profile = ProfileSettings::default();
        let tracker = TrackerSettings::for_profile(&profile);

        let ranks = RankTable::rumble();
        let milestones = RankMilestones::from_table(&ranks);

        let mut config = Self {
            repo_root: repo_root.as_ref().to_path_buf(),
            profile,
            paths: PathSettings::default(),
            tracker,
            watch: WatchSettings::default(),
            signatures: SignatureSettings::default(),
            ranks,
            milestones,
        };
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = env_override("TRACKER_URL") {
            self.tracker.page_url = url;
        }
        if let Some(url) = env_override("TRACKER_API_URL") {
            self.tracker.api_url = url;
        }
        if let Some(url) = env_override("SIGNATURES_CSV_URL") {
            self.signatures.csv_url = url;
        }
    }

    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.repo_root.join(relative)
    }
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_urls_follow_profile() {
        let profile = ProfileSettings::default();
        let tracker = TrackerSettings::for_profile(&profile);

        assert!(tracker.api_url.ends_with("/mmr/41100349"));
        assert_eq!(
            tracker.page_url,
            "https://rocketleague.tracker.network/rocket-league/profile/epic/MaGnetBear/mmr?playlist=28"
        );
    }

    #[test]
    fn test_page_url_encodes_username() {
        let profile = ProfileSettings {
            username: "Some Player".to_string(),
            ..ProfileSettings::default()
        };
        let tracker = TrackerSettings::for_profile(&profile);

        assert!(tracker.page_url.contains("/Some%20Player/"));
    }

    #[test]
    fn test_resolve_joins_repo_root() {
        let config = AppConfig::new("/srv/site");
        let display = config.resolve(&config.paths.display);

        assert_eq!(display, PathBuf::from("/srv/site/data/mmr-data.json"));
    }

    #[test]
    fn test_milestones_come_from_rank_table() {
        let config = AppConfig::new("/srv/site");

        assert_eq!(config.milestones.gc1, 1435);
        assert_eq!(config.milestones.gc2, 1535);
        assert_eq!(config.milestones.gc3, 1635);
        assert_eq!(config.milestones.ssl, 1862);
        assert_eq!(
            config.ranks.threshold_of(RankMilestones::SSL),
            Some(config.milestones.ssl)
        );
    }
}
