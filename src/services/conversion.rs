use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde_json::Value;
use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::config::AppConfig;
use crate::domain::{
    Archive, DisplayDocument, Observation, Profile, extract_observations, select_playlist,
};
use crate::errors::{SourceError, with_parse_context};
use crate::series::{DocumentInputs, build_display_document, merge_into_archive, sanitize_archive};
use crate::store::JsonStore;

/// What a conversion run wrote
#[derive(Debug)]
pub struct ConversionReport {
    pub document: DisplayDocument,
    pub added: usize,
    pub updated: usize,
    pub archived: usize,
}

/// Turns a raw tracker payload into the archive and the chart document
pub struct ConversionService<'a> {
    config: &'a AppConfig,
    store: JsonStore,
}

impl<'a> ConversionService<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            store: JsonStore::new(&config.repo_root),
        }
    }

    /// Convert from `--input`, piped stdin, or the default raw export, in that order
    pub fn run(&self, input: Option<&Path>) -> Result<ConversionReport> {
        info!("=== Starting Conversion ===\n");

        let payload = self.read_payload(input)?;
        let report = self.convert(&payload, Utc::now())?;

        info!("=== Conversion Complete ===");
        Ok(report)
    }

    /// Merge one payload into the archive and rewrite both output files.
    /// Nothing is written unless every step succeeds.
    pub fn convert(&self, payload: &Value, now: DateTime<Utc>) -> Result<ConversionReport> {
        let ranks = &self.config.ranks;

        info!("Step 1: Selecting playlist...");
        let history = select_playlist(payload, self.config.profile.playlist_id)?;

        info!("Step 2: Extracting observations...");
        let incoming = extract_observations(&history.entries, ranks);
        if incoming.is_empty() {
            return Err(SourceError::NoDataPoints(history.playlist_id).into());
        }
        info!("  → {} observations in payload\n", incoming.len());

        info!("Step 3: Merging into archive...");
        let existing = self.load_archive()?;
        let merged = merge_into_archive(&existing, &incoming);
        if merged.is_unchanged() {
            info!("  → Archive already up to date");
        }
        info!(
            "  → {} added, {} updated, {} total\n",
            merged.added,
            merged.updated,
            merged.observations.len()
        );

        info!("Step 4: Building chart document...");
        let document = build_display_document(
            &merged.observations,
            DocumentInputs {
                table: ranks,
                profile: self.profile(),
                milestones: self.config.milestones.clone(),
                matches: incoming.len(),
                now,
            },
        )?;
        info!("  → {} chart points\n", document.data_points.len());

        info!("Step 5: Saving...");
        let archive = Archive {
            data_points: merged.observations,
            last_updated: Some(document.last_updated.clone()),
        };
        self.store.save(&self.config.paths.archive, &archive)?;
        self.store.save(&self.config.paths.display, &document)?;

        Ok(ConversionReport {
            document,
            added: merged.added,
            updated: merged.updated,
            archived: archive.data_points.len(),
        })
    }

    fn load_archive(&self) -> Result<Vec<Observation>> {
        let archive: Archive = self
            .store
            .load(&self.config.paths.archive)?
            .unwrap_or_default();
        Ok(sanitize_archive(archive.data_points, &self.config.ranks))
    }

    fn profile(&self) -> Profile {
        let profile = &self.config.profile;
        Profile {
            platform: profile.platform.clone(),
            platform_username: profile.username.clone(),
            playlist: profile.playlist_name.clone(),
            playlist_id: profile.playlist_id,
        }
    }

    fn read_payload(&self, input: Option<&Path>) -> Result<Value> {
        if let Some(path) = input {
            info!("Reading from {}...", path.display());
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return parse_payload(&text);
        }

        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            info!("Reading from stdin...");
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            return parse_payload(&text);
        }

        let raw_export = &self.config.paths.raw_export;
        let Some(text) = self.store.read_text(raw_export)? else {
            anyhow::bail!(
                "Input file not found: {}\n\n\
                 To get the data:\n\
                 \x20 1. Open the tracker profile page in your browser\n\
                 \x20 2. F12 -> Network tab -> F5 refresh\n\
                 \x20 3. Filter: player-history, click the request, open the Response tab\n\
                 \x20 4. Copy the JSON and save it to {}",
                self.store.path(raw_export).display(),
                raw_export.display()
            );
        };
        info!("Reading from {}...", self.store.path(raw_export).display());
        parse_payload(&text)
    }
}

pub fn parse_payload(text: &str) -> Result<Value> {
    with_parse_context(serde_json::from_str(text), "tracker payload")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use std::path::PathBuf;

    fn scratch_repo(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "campaign_tools_conversion_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn payload(points: &[(&str, i64)]) -> Value {
        let entries: Vec<Value> = points
            .iter()
            .map(|(date, rating)| json!({"collectDate": date, "rating": rating}))
            .collect();
        json!({"data": {"28": entries}})
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_convert_writes_archive_and_document() {
        let repo = scratch_repo("writes");
        let config = AppConfig::new(&repo);
        let service = ConversionService::new(&config);

        let report = service
            .convert(
                &payload(&[
                    ("2025-01-01T10:00:00Z", 1400),
                    ("2025-01-03T10:00:00Z", 1440),
                ]),
                now(),
            )
            .unwrap();

        assert_eq!(report.added, 2);
        assert_eq!(report.archived, 2);
        assert_eq!(report.document.current_rating.mmr, 1440);
        assert_eq!(report.document.current_rating.matches, 2);
        assert_eq!(report.document.last_updated, "2025-01-10T12:00:00.000Z");

        let store = JsonStore::new(&repo);
        let archive: Archive = store.load(&config.paths.archive).unwrap().unwrap();
        assert_eq!(archive.data_points.len(), 2);
        let document: DisplayDocument = store.load(&config.paths.display).unwrap().unwrap();
        assert_eq!(document, report.document);

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn test_second_run_keeps_history() {
        let repo = scratch_repo("history");
        let config = AppConfig::new(&repo);
        let service = ConversionService::new(&config);

        service
            .convert(&payload(&[("2025-01-01T10:00:00Z", 1400)]), now())
            .unwrap();
        let report = service
            .convert(
                &payload(&[
                    ("2025-01-01T10:00:00Z", 1410),
                    ("2025-01-02T10:00:00Z", 1420),
                ]),
                now(),
            )
            .unwrap();

        assert_eq!(report.added, 1);
        assert_eq!(report.updated, 1);
        assert_eq!(report.archived, 2);

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn test_empty_playlist_writes_nothing() {
        let repo = scratch_repo("empty");
        let config = AppConfig::new(&repo);
        let service = ConversionService::new(&config);

        let err = service
            .convert(&json!({"data": {"28": [{"rating": 1400}]}}), now())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SourceError>(),
            Some(SourceError::NoDataPoints(_))
        ));
        assert!(!JsonStore::new(&repo).exists(&config.paths.display));
        assert!(!JsonStore::new(&repo).exists(&config.paths.archive));
    }

    #[test]
    fn test_parse_payload_reports_context() {
        let err = parse_payload("not json").unwrap_err();

        assert!(err.to_string().contains("tracker payload"));
    }
}
