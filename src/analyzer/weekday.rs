use crate::model::TimeSeries;
use chrono::Datelike;

/// Display names for weekday numbers 0..4 (Monday..Friday).
pub const WEEKDAY_NAMES: [&str; 5] = ["Lunes", "Martes", "Miercoles", "Jueves", "Viernes"];

/// Mean value per weekday over a window-filtered series, sorted descending
/// by mean. Weekend rows are excluded: the market series carry no Saturday
/// or Sunday quotes and those days have no display name. An empty input
/// yields an empty result, silently.
pub fn weekday_averages(series: &TimeSeries) -> Vec<(&'static str, f64)> {
    let mut sums = [0.0_f64; 5];
    let mut counts = [0_usize; 5];

    for p in series.points() {
        let weekday = p.date.weekday().num_days_from_monday() as usize;
        if weekday < 5 {
            sums[weekday] += p.value;
            counts[weekday] += 1;
        }
    }

    let mut means: Vec<(&'static str, f64)> = (0..5)
        .filter(|&i| counts[i] > 0)
        .map(|i| (WEEKDAY_NAMES[i], sums[i] / counts[i] as f64))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means
}
