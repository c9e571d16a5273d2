use crate::domain::Observation;

/// Collapse each run of equal ratings to its first and last point.
pub fn consolidate_runs(series: &[Observation]) -> Vec<Observation> {
    series
        .iter()
        .enumerate()
        .filter(|(idx, _)| is_run_boundary(series, *idx))
        .map(|(_, observation)| observation.clone())
        .collect()
}

fn is_run_boundary(series: &[Observation], idx: usize) -> bool {
    let mmr = series[idx].mmr;
    let same_as_prev = idx > 0 && series[idx - 1].mmr == mmr;
    let same_as_next = series.get(idx + 1).is_some_and(|next| next.mmr == mmr);

    !(same_as_prev && same_as_next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::RankTable;

    fn series(values: &[i64]) -> Vec<Observation> {
        let table = RankTable::rumble();
        values
            .iter()
            .enumerate()
            .map(|(day, &mmr)| {
                Observation::new(format!("2025-01-{:02}T00:00:00Z", day + 1), mmr, &table)
            })
            .collect()
    }

    fn ratings(series: &[Observation]) -> Vec<i64> {
        series.iter().map(|o| o.mmr).collect()
    }

    #[test]
    fn test_interior_points_of_run_removed() {
        let input = series(&[1400, 1400, 1400, 1400, 1500]);

        let result = consolidate_runs(&input);

        assert_eq!(ratings(&result), vec![1400, 1400, 1500]);
        assert_eq!(result[0].day_key(), "2025-01-01");
        assert_eq!(result[1].day_key(), "2025-01-04");
    }

    #[test]
    fn test_run_of_two_kept() {
        let input = series(&[1400, 1500, 1500, 1600]);

        assert_eq!(consolidate_runs(&input), input);
    }

    #[test]
    fn test_distinct_values_unchanged() {
        let input = series(&[1400, 1410, 1405, 1420]);

        assert_eq!(consolidate_runs(&input), input);
    }

    #[test]
    fn test_whole_series_flat() {
        let input = series(&[1400, 1400, 1400]);

        let result = consolidate_runs(&input);

        assert_eq!(result.len(), 2);
        assert_eq!(result.first(), input.first());
        assert_eq!(result.last(), input.last());
    }

    #[test]
    fn test_single_point_kept() {
        let input = series(&[1400]);

        assert_eq!(consolidate_runs(&input), input);
    }

    #[test]
    fn test_repeated_value_after_change_is_new_run() {
        let input = series(&[1400, 1400, 1400, 1500, 1400, 1400, 1400]);

        let days: Vec<String> = consolidate_runs(&input)
            .iter()
            .map(|o| o.day_key().to_string())
            .collect();

        assert_eq!(
            days,
            vec!["2025-01-01", "2025-01-03", "2025-01-04", "2025-01-05", "2025-01-07"]
        );
    }
}
