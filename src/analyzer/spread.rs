use crate::model::{InsufficientDataError, TimeSeries};
use chrono::NaiveDate;

/// Day with the largest spread value in the (already window-filtered)
/// series. On equal values the earliest date wins, matching the source
/// order of the response.
pub fn peak_day(series: &TimeSeries) -> Result<NaiveDate, InsufficientDataError> {
    let points = series.points();
    if points.is_empty() {
        return Err(InsufficientDataError { needed: 1, got: 0 });
    }

    let max = points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let winner = points
        .iter()
        .find(|p| p.value == max)
        .map(|p| p.date)
        .unwrap_or(points[0].date);
    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeriesPoint;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn returns_the_date_of_the_maximum_value() {
        let s: TimeSeries = [
            (day(2022, 3, 4), 5.4726),
            (day(2022, 3, 5), 6.5327),
            (day(2022, 3, 6), 4.3902),
        ]
        .into_iter()
        .map(|(date, value)| SeriesPoint { date, value })
        .collect();

        assert_eq!(peak_day(&s).unwrap(), day(2022, 3, 5));
    }

    #[test]
    fn first_occurrence_wins_on_ties() {
        let s: TimeSeries = [(day(2022, 1, 1), 7.0), (day(2022, 1, 2), 7.0)]
            .into_iter()
            .map(|(date, value)| SeriesPoint { date, value })
            .collect();

        assert_eq!(peak_day(&s).unwrap(), day(2022, 1, 1));
    }

    #[test]
    fn empty_window_is_insufficient() {
        let err = peak_day(&TimeSeries::default()).unwrap_err();
        assert_eq!(err, InsufficientDataError { needed: 1, got: 0 });
    }
}
