use std::collections::BTreeMap;

use crate::domain::Observation;

/// Keep one observation per calendar day, the last one seen in input order.
///
/// Callers sort by full timestamp first when "last" should mean "latest".
/// Output is ascending by day.
pub fn dedup_daily(observations: &[Observation]) -> Vec<Observation> {
    let mut by_day: BTreeMap<&str, &Observation> = BTreeMap::new();

    for observation in observations {
        by_day.insert(observation.day_key(), observation);
    }

    by_day.into_values().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::RankTable;

    fn obs(date: &str, mmr: i64) -> Observation {
        Observation::new(date, mmr, &RankTable::rumble())
    }

    #[test]
    fn test_last_observation_per_day_wins() {
        let input = vec![
            obs("2025-01-01T08:00:00Z", 1400),
            obs("2025-01-01T20:00:00Z", 1410),
            obs("2025-01-02T08:00:00Z", 1420),
        ];

        let daily = dedup_daily(&input);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].mmr, 1410);
        assert_eq!(daily[1].mmr, 1420);
    }

    #[test]
    fn test_input_order_not_timestamp_decides() {
        let input = vec![
            obs("2025-01-01T20:00:00Z", 1410),
            obs("2025-01-01T08:00:00Z", 1400),
        ];

        let daily = dedup_daily(&input);

        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].mmr, 1400);
    }

    #[test]
    fn test_output_sorted_by_day() {
        let input = vec![
            obs("2025-01-03T08:00:00Z", 1430),
            obs("2025-01-01T08:00:00Z", 1400),
            obs("2025-01-02T08:00:00Z", 1420),
        ];

        let days: Vec<String> = dedup_daily(&input)
            .iter()
            .map(|o| o.day_key().to_string())
            .collect();

        assert_eq!(days, vec!["2025-01-01", "2025-01-02", "2025-01-03"]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let input = vec![
            obs("2025-01-02T08:00:00Z", 1420),
            obs("2025-01-01T08:00:00Z", 1400),
            obs("2025-01-02T09:00:00Z", 1425),
            obs("2025-01-05T08:00:00Z", 1380),
        ];

        let once = dedup_daily(&input);
        let twice = dedup_daily(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_daily(&[]).is_empty());
    }
}
