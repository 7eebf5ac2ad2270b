use crate::model::{InsufficientDataError, TimeSeries};
use chrono::NaiveDate;

/// Day-over-day volatility: `|ln(v[i] / v[i-1])|`. The value column is
/// dropped from the result on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayVolatility {
    pub date: NaiveDate,
    pub volatility: f64,
}

const TOP: usize = 5;

/// Top five most volatile days of a window-filtered series, sorted
/// descending by volatility. The first row of the window has no previous
/// value and is never ranked; ties keep ascending date order (the stable
/// sort preserves the series order).
pub fn top_volatility(series: &TimeSeries) -> Result<Vec<DayVolatility>, InsufficientDataError> {
    let points = series.points();
    if points.len() < 2 {
        return Err(InsufficientDataError {
            needed: 2,
            got: points.len(),
        });
    }

    let mut days: Vec<DayVolatility> = points
        .windows(2)
        .map(|w| DayVolatility {
            date: w[1].date,
            volatility: (w[1].value / w[0].value).ln().abs(),
        })
        .collect();

    days.sort_by(|a, b| b.volatility.total_cmp(&a.volatility));
    days.truncate(TOP);
    Ok(days)
}
