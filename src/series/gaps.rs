use chrono::NaiveDate;

use crate::domain::{DAY_KEY_LEN, Observation};

/// Insert one carried-forward point before every multi-day gap.
///
/// The synthetic point is dated the day before the next real observation and
/// repeats the earlier observation's rating, so the chart draws a plateau
/// instead of a slope across the gap.
pub fn fill_gaps(series: &[Observation]) -> Vec<Observation> {
    let Some(first) = series.first() else {
        return Vec::new();
    };

    let mut filled = Vec::with_capacity(series.len());
    filled.push(first.clone());

    for pair in series.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);

        if let Some(plateau) = plateau_point(prev, next) {
            filled.push(plateau);
        }
        filled.push(next.clone());
    }

    filled
}

fn plateau_point(prev: &Observation, next: &Observation) -> Option<Observation> {
    let prev_day = prev.calendar_day()?;
    let next_day = next.calendar_day()?;

    if (next_day - prev_day).num_days() <= 1 {
        return None;
    }

    let day_before = next_day.pred_opt()?;
    Some(prev.carried_to(restamp(&next.date, day_before)))
}

/// Replace the day part of `template`, keeping its time-of-day suffix
fn restamp(template: &str, day: NaiveDate) -> String {
    let suffix = template.get(DAY_KEY_LEN..).unwrap_or("");
    format!("{}{}", day.format("%Y-%m-%d"), suffix)
}
