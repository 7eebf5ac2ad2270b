use crate::model::{InsufficientDataError, TimeSeries};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Winning Friday-ending week: `start = end - 4 days`, `end` is the
/// bucket's Friday label, `range` the max−min spread inside the bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub range: f64,
}

/// Week with the widest max−min value range, over Friday-ending buckets.
/// A row belongs to the bucket of the next Friday on or after its date.
/// Ties go to the bucket whose Friday label sorts latest: ranges are
/// sorted descending and the first element wins.
pub fn widest_week(series: &TimeSeries) -> Result<WeekRange, InsufficientDataError> {
    let points = series.points();
    if points.is_empty() {
        return Err(InsufficientDataError { needed: 1, got: 0 });
    }

    // (min, max) per Friday label; transient to this analyzer.
    let mut buckets: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for p in points {
        let friday = friday_on_or_after(p.date);
        let entry = buckets.entry(friday).or_insert((p.value, p.value));
        entry.0 = entry.0.min(p.value);
        entry.1 = entry.1.max(p.value);
    }

    let mut ranges: Vec<(NaiveDate, f64)> = buckets
        .into_iter()
        .map(|(friday, (min, max))| (friday, max - min))
        .collect();
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1).then(b.0.cmp(&a.0)));

    let (end, range) = ranges[0];
    Ok(WeekRange {
        start: end - Duration::days(4),
        end,
        range,
    })
}

fn friday_on_or_after(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday() as i64;
    date + Duration::days((4 - weekday).rem_euclid(7))
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
    fn rows_bin_to_the_next_friday_on_or_after() {
        // 2022-07-22 is a Friday.
        assert_eq!(friday_on_or_after(day(2022, 7, 22)), day(2022, 7, 22));
        assert_eq!(friday_on_or_after(day(2022, 7, 18)), day(2022, 7, 22)); // Monday
        assert_eq!(friday_on_or_after(day(2022, 7, 23)), day(2022, 7, 29)); // Saturday
        assert_eq!(friday_on_or_after(day(2022, 7, 24)), day(2022, 7, 29)); // Sunday
    }

    #[test]
    fn single_bucket_range_is_max_minus_min() {
        // Mon..Wed of the week ending Friday 2022-07-22.
        let s = series(&[
            (day(2022, 7, 18), 100.0),
            (day(2022, 7, 19), 150.0),
            (day(2022, 7, 20), 90.0),
        ]);

        let week = widest_week(&s).unwrap();
        assert_eq!(week.end, day(2022, 7, 22));
        assert_eq!(week.start, day(2022, 7, 18));
        assert_eq!(week.range, 60.0);
    }

    #[test]
    fn widest_bucket_wins_across_weeks() {
        let s = series(&[
            (day(2022, 7, 18), 100.0),
            (day(2022, 7, 19), 110.0),
            (day(2022, 7, 25), 100.0),
            (day(2022, 7, 26), 180.0),
        ]);

        let week = widest_week(&s).unwrap();
        assert_eq!(week.end, day(2022, 7, 29));
        assert_eq!(week.range, 80.0);
    }

    #[test]
    fn ties_go_to_the_latest_friday_label() {
        let s = series(&[
            (day(2022, 7, 18), 100.0),
            (day(2022, 7, 19), 120.0),
            (day(2022, 7, 25), 200.0),
            (day(2022, 7, 26), 220.0),
        ]);

        let week = widest_week(&s).unwrap();
        assert_eq!(week.end, day(2022, 7, 29));
        assert_eq!(week.range, 20.0);
    }

    #[test]
    fn empty_series_is_insufficient() {
        assert_eq!(
            widest_week(&TimeSeries::default()).unwrap_err(),
            InsufficientDataError { needed: 1, got: 0 }
        );
    }
}
