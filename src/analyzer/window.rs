use crate::model::TimeSeries;
use chrono::{Duration, NaiveDate};

/// Trailing 365-day window ending at `today`. Keeps every row with
/// `date >= today - 365d` in original order; an entirely-older series
/// yields an empty result, not an error. Idempotent for the same `today`.
pub fn last_year(series: &TimeSeries, today: NaiveDate) -> TimeSeries {
    let cutoff = today - Duration::days(365);
    series
        .points()
        .iter()
        .copied()
        .filter(|p| p.date >= cutoff)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeriesPoint;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(rows: &[(NaiveDate, f64)]) -> TimeSeries {
        rows.iter()
            .map(|&(date, value)| SeriesPoint { date, value })
            .collect()
    }

    #[test]
    fn keeps_only_rows_within_365_days() {
        let today = day(2022, 8, 3);
        let s = series(&[
            (day(2000, 5, 24), 1.0),
            (day(2021, 8, 2), 180.5),  // 366 days back, dropped
            (day(2021, 8, 3), 181.0),  // exactly on the cutoff, kept
            (day(2022, 8, 3), 298.0),
        ]);

        let filtered = last_year(&s, today);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.points()[0].date, day(2021, 8, 3));
        assert_eq!(filtered.points()[1].date, day(2022, 8, 3));
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let today = day(2022, 8, 3);
        let s = series(&[(day(2021, 12, 1), 1.0), (day(2022, 6, 1), 2.0)]);

        let once = last_year(&s, today);
        let twice = last_year(&once, today);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_series_stays_empty() {
        let filtered = last_year(&TimeSeries::default(), day(2022, 8, 3));
        assert!(filtered.is_empty());
    }

    #[test]
    fn series_entirely_older_than_a_year_becomes_empty() {
        let s = series(&[(day(2019, 1, 1), 40.0), (day(2019, 6, 1), 45.0)]);
        assert!(last_year(&s, day(2022, 8, 3)).is_empty());
    }
}
