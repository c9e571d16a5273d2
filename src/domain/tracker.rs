use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::SourceError;
use crate::rank::{Mmr, RankTable};

use super::models::Observation;

/// One playlist's raw rating entries taken from a tracker payload
#[derive(Debug, Clone)]
pub struct PlaylistHistory {
    pub playlist_id: String,
    pub entries: Vec<Value>,
}

/// Raw history entry as sent by the tracker; every field may be absent
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    rating: Option<f64>,
    collect_date: Option<String>,
}

/// Pick the preferred playlist from a tracker payload.
///
/// Accepts both `{data: {"28": [...]}}` and
/// `{data: [{attributes: {playlistId: 28}, data: [...]}]}`. When the
/// preferred playlist is missing or empty, the first playlist with entries
/// is used instead.
pub fn select_playlist(payload: &Value, preferred: u32) -> Result<PlaylistHistory, SourceError> {
    let history = match payload.get("data") {
        Some(Value::Object(playlists)) => select_keyed(playlists, preferred),
        Some(Value::Array(playlists)) => select_listed(playlists, preferred),
        _ => None,
    };

    let history = history.ok_or(SourceError::NoPlaylistData)?;

    if history.playlist_id != preferred.to_string() {
        info!("  Using playlist {}", history.playlist_id);
    }

    Ok(history)
}

fn select_keyed(
    playlists: &serde_json::Map<String, Value>,
    preferred: u32,
) -> Option<PlaylistHistory> {
    let preferred_key = preferred.to_string();

    if let Some(entries) = playlists.get(&preferred_key).and_then(non_empty_array) {
        return Some(PlaylistHistory {
            playlist_id: preferred_key,
            entries,
        });
    }

    playlists.iter().find_map(|(key, value)| {
        non_empty_array(value).map(|entries| PlaylistHistory {
            playlist_id: key.clone(),
            entries,
        })
    })
}

fn select_listed(playlists: &[Value], preferred: u32) -> Option<PlaylistHistory> {
    let preferred_match = playlists
        .iter()
        .find(|playlist| listed_playlist_id(playlist) == Some(u64::from(preferred)))
        .and_then(listed_history);

    preferred_match.or_else(|| playlists.iter().find_map(listed_history))
}

fn listed_history(playlist: &Value) -> Option<PlaylistHistory> {
    let entries = playlist.get("data").and_then(non_empty_array)?;
    let playlist_id = listed_playlist_id(playlist)
        .map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    Some(PlaylistHistory {
        playlist_id,
        entries,
    })
}

fn listed_playlist_id(playlist: &Value) -> Option<u64> {
    playlist.get("attributes")?.get("playlistId")?.as_u64()
}

fn non_empty_array(value: &Value) -> Option<Vec<Value>> {
    value.as_array().filter(|items| !items.is_empty()).cloned()
}

/// Turn raw entries into observations sorted by full timestamp.
///
/// Entries without a usable rating or date are skipped.
pub fn extract_observations(entries: &[Value], table: &RankTable) -> Vec<Observation> {
    let mut stamped: Vec<(DateTime<Utc>, Observation)> = entries
        .iter()
        .filter_map(|entry| parse_entry(entry, table))
        .collect();

    let skipped = entries.len() - stamped.len();
    if skipped > 0 {
        debug!("Skipped {} malformed history entries", skipped);
    }

    stamped.sort_by(|a, b| a.0.cmp(&b.0));
    stamped.into_iter().map(|(_, observation)| observation).collect()
}

fn parse_entry(entry: &Value, table: &RankTable) -> Option<(DateTime<Utc>, Observation)> {
    let raw: RawEntry = serde_json::from_value(entry.clone()).ok()?;
    let mmr = rating_to_mmr(raw.rating?)?;
    let date = raw.collect_date?;
    let timestamp = parse_timestamp(&date)?;

    Some((timestamp, Observation::new(date, mmr, table)))
}

fn rating_to_mmr(rating: f64) -> Option<Mmr> {
    if rating.is_finite() {
        Some(rating.round() as Mmr)
    } else {
        None
    }
}

/// Parse the timestamp formats the tracker and manual exports produce
pub fn parse_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    // RFC3339 (with timezone)
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    // Naive datetime, with or without fractional seconds
    let naive = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date_str, format).ok());
    if let Some(naive) = naive {
        return Some(naive.and_utc());
    }

    // Bare calendar day, taken as midnight UTC
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keyed_payload_prefers_configured_playlist() {
        let payload = json!({
            "data": {
                "10": [{"rating": 900, "collectDate": "2025-01-01T00:00:00Z"}],
                "28": [{"rating": 1400, "collectDate": "2025-01-01T00:00:00Z"}]
            }
        });

        let history = select_playlist(&payload, 28).unwrap();

        assert_eq!(history.playlist_id, "28");
        assert_eq!(history.entries.len(), 1);
    }

    #[test]
    fn test_keyed_payload_falls_back_to_first_non_empty() {
        let payload = json!({
            "data": {
                "11": [],
                "13": [{"rating": 900, "collectDate": "2025-01-01T00:00:00Z"}],
                "28": []
            }
        });

        let history = select_playlist(&payload, 28).unwrap();

        assert_eq!(history.playlist_id, "13");
    }

    #[test]
    fn test_listed_payload_matches_attributes() {
        let payload = json!({
            "data": [
                {"attributes": {"playlistId": 11}, "data": [{"rating": 800, "collectDate": "2025-01-01T00:00:00Z"}]},
                {"attributes": {"playlistId": 28}, "data": [{"rating": 1400, "collectDate": "2025-01-01T00:00:00Z"}]}
            ]
        });

        let history = select_playlist(&payload, 28).unwrap();

        assert_eq!(history.playlist_id, "28");
        assert_eq!(history.entries[0]["rating"], 1400);
    }

    #[test]
    fn test_missing_playlist_data_is_an_error() {
        let empty = json!({"data": {"28": []}});
        let missing = json!({"errors": []});

        assert!(matches!(select_playlist(&empty, 28), Err(SourceError::NoPlaylistData)));
        assert!(matches!(select_playlist(&missing, 28), Err(SourceError::NoPlaylistData)));
    }

    #[test]
    fn test_extract_skips_malformed_and_sorts() {
        let table = RankTable::rumble();
        let entries = vec![
            json!({"rating": 1450, "collectDate": "2025-01-03T08:00:00Z"}),
            json!({"rating": 1400}),
            json!({"collectDate": "2025-01-02T08:00:00Z"}),
            json!({"rating": 1410, "collectDate": "not a date"}),
            json!("garbage"),
            json!({"rating": 1420.4, "collectDate": "2025-01-01T08:00:00+00:00"}),
        ];

        let observations = extract_observations(&entries, &table);

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].mmr, 1420);
        assert_eq!(observations[0].date, "2025-01-01T08:00:00+00:00");
        assert_eq!(observations[1].mmr, 1450);
        assert_eq!(observations[1].rank, "Grand Champion I");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2025-01-01T08:00:00Z").is_some());
        assert!(parse_timestamp("2025-01-01T08:00:00.123+02:00").is_some());
        assert!(parse_timestamp("2025-01-01T08:00:00").is_some());
        assert!(parse_timestamp("2025-01-01T08:00:00.5").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_date_only_entries_are_kept() {
        let table = RankTable::rumble();
        let entries = vec![
            json!({"rating": 1420, "collectDate": "2025-01-06T09:00:00Z"}),
            json!({"rating": 1400, "collectDate": "2025-01-05"}),
        ];

        let observations = extract_observations(&entries, &table);

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].date, "2025-01-05");
        assert_eq!(observations[0].day_key(), "2025-01-05");
        assert_eq!(
            parse_timestamp("2025-01-05"),
            parse_timestamp("2025-01-05T00:00:00Z")
        );
        assert!(parse_timestamp("2025-13-05").is_none());
    }
}
