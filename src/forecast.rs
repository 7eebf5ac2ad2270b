// Log-linear trend forecast. Prices grow near-exponentially, so the fit
// runs over ln(v) against the proleptic ordinal day.
use crate::model::{InsufficientDataError, TimeSeries};

use chrono::{Datelike, Months, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Fixed seed of the holdout partition. The split must be reproducible so
/// that the reported errors are stable for the same input.
const SPLIT_SEED: u64 = 50;
const TEST_FRACTION: f64 = 0.25;

/// Ordinary least squares line over `(ordinal_date, ln v)`. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionModel {
    /// OLS fit. `xs` and `ys` must be non-empty and equally long, with at
    /// least two distinct x values.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Self {
        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let mut num = 0.0;
        let mut den = 0.0;
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            num += (x - mean_x) * (y - mean_y);
            den += (x - mean_x) * (x - mean_x);
        }

        let slope = if den.abs() < f64::EPSILON { 0.0 } else { num / den };
        RegressionModel {
            slope,
            intercept: mean_y - slope * mean_x,
        }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[derive(Debug, Clone)]
pub struct ForecastReport {
    pub months: u32,
    /// Point forecast in value space (the log transform already inverted).
    pub prediction: f64,
    pub train_mse: f64,
    pub test_mse: f64,
    pub r2_test: f64,
    pub r2_train: f64,
    pub model: RegressionModel,
}

impl ForecastReport {
    /// Console summary. Verbose adds errors and scores over the holdout
    /// split; otherwise only the point forecast line is printed.
    pub fn summary(&self, verbose: bool) -> String {
        let prediction = format!("Prediccion a {} meses: {:.2}", self.months, self.prediction);
        if verbose {
            format!(
                "Error en Train: {:.2} \nError en Test: {:.2} \nScore test: {:.2} \nScore train: {:.2} \n\n{}",
                self.train_mse, self.test_mse, self.r2_test, self.r2_train, prediction
            )
        } else {
            prediction
        }
    }
}

/// Fits the trend on the full history (never window-filtered) and projects
/// `months` calendar months past `today`, with the day-of-month clamped to
/// the target month's last valid day.
///
/// The coefficients come from a fit over the FULL dataset while the train
/// and test metrics are computed against the seeded 25% holdout split of
/// that same data. The asymmetry is deliberate; the tests pin it down.
pub fn forecast(
    series: &TimeSeries,
    months: u32,
    today: NaiveDate,
) -> Result<ForecastReport, InsufficientDataError> {
    let points = series.points();
    if points.len() < 2 {
        return Err(InsufficientDataError {
            needed: 2,
            got: points.len(),
        });
    }

    let xs: Vec<f64> = points.iter().map(|p| ordinal(p.date)).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.value.ln()).collect();

    let (train_idx, test_idx) = holdout_split(points.len());
    let model = RegressionModel::fit(&xs, &ys);

    let (train_mse, r2_train) = score_subset(&model, &xs, &ys, &train_idx);
    let (test_mse, r2_test) = score_subset(&model, &xs, &ys, &test_idx);

    let target = today + Months::new(months);
    let prediction = model.predict(ordinal(target)).exp();

    Ok(ForecastReport {
        months,
        prediction,
        train_mse,
        test_mse,
        r2_test,
        r2_train,
        model,
    })
}

/// Days since 0001-01-01 in the proleptic Gregorian calendar.
fn ordinal(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Deterministic Fisher-Yates partition: the first quarter (rounded up) of
/// the shuffled indices is the test set, the rest is the train set.
fn holdout_split(n: usize) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(SPLIT_SEED);
    indices.shuffle(&mut rng);

    let n_test = ((n as f64) * TEST_FRACTION).ceil() as usize;
    let test = indices[..n_test].to_vec();
    let train = indices[n_test..].to_vec();
    (train, test)
}

/// MSE and R² of the model over the subset of rows named by `idx`.
fn score_subset(
    model: &RegressionModel,
    xs: &[f64],
    ys: &[f64],
    idx: &[usize],
) -> (f64, f64) {
    let n = idx.len() as f64;
    let mean_y = idx.iter().map(|&i| ys[i]).sum::<f64>() / n;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for &i in idx {
        let residual = ys[i] - model.predict(xs[i]);
        ss_res += residual * residual;
        ss_tot += (ys[i] - mean_y) * (ys[i] - mean_y);
    }

    let mse = ss_res / n;
    let r2 = if ss_tot == 0.0 { 0.0 } else { 1.0 - ss_res / ss_tot };
    (mse, r2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeriesPoint;
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// v = exp(a + b * ordinal), sampled daily.
    fn exponential_series(a: f64, b: f64, start: NaiveDate, days: usize) -> TimeSeries {
        (0..days)
            .map(|i| {
                let date = start + Duration::days(i as i64);
                SeriesPoint {
                    date,
                    value: (a + b * ordinal(date)).exp(),
                }
            })
            .collect()
    }

    #[test]
    fn recovers_coefficients_of_synthetic_exponential_data() {
        // a offsets the huge ordinal so ln(v) stays in a sane range.
        let (a, b) = (-738.0, 0.001);
        let series = exponential_series(a, b, day(2022, 1, 1), 40);

        let report = forecast(&series, 6, day(2022, 2, 10)).unwrap();
        assert!((report.model.slope - b).abs() < 1e-9);
        assert!((report.model.intercept - a).abs() < 1e-3);
        assert!(report.train_mse < 1e-12);
        assert!(report.test_mse < 1e-12);
    }

    #[test]
    fn zero_month_horizon_predicts_today() {
        let (a, b) = (-738.0, 0.001);
        let today = day(2022, 2, 9);
        let series = exponential_series(a, b, day(2022, 1, 1), 40);

        let report = forecast(&series, 0, today).unwrap();
        let expected = (a + b * ordinal(today)).exp();
        assert!((report.prediction - expected).abs() / expected < 1e-6);
    }

    #[test]
    fn horizon_clamps_to_the_last_day_of_short_months() {
        // 2022-01-31 + 1 month lands on 2022-02-28.
        assert_eq!(day(2022, 1, 31) + Months::new(1), day(2022, 2, 28));
    }

    #[test]
    fn split_is_deterministic_disjoint_and_complete() {
        let (train_a, test_a) = holdout_split(10);
        let (train_b, test_b) = holdout_split(10);
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);

        assert_eq!(test_a.len(), 3); // ceil(10 * 0.25)
        assert_eq!(train_a.len(), 7);
        let mut all: Vec<usize> = train_a.iter().chain(test_a.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn coefficients_come_from_the_full_fit_not_the_train_split() {
        // Metrics use the split, the coefficients never do.
        let series: TimeSeries = [
            (day(2022, 1, 3), 100.0),
            (day(2022, 1, 4), 130.0),
            (day(2022, 1, 5), 90.0),
            (day(2022, 1, 6), 160.0),
            (day(2022, 1, 7), 95.0),
            (day(2022, 1, 10), 180.0),
        ]
        .into_iter()
        .map(|(date, value)| SeriesPoint { date, value })
        .collect();

        let xs: Vec<f64> = series.points().iter().map(|p| ordinal(p.date)).collect();
        let ys: Vec<f64> = series.points().iter().map(|p| p.value.ln()).collect();
        let full_fit = RegressionModel::fit(&xs, &ys);

        let report = forecast(&series, 1, day(2022, 1, 10)).unwrap();
        assert_eq!(report.model, full_fit);
    }

    #[test]
    fn fewer_than_two_rows_is_insufficient() {
        let one: TimeSeries = [SeriesPoint {
            date: day(2022, 1, 1),
            value: 100.0,
        }]
        .into_iter()
        .collect();

        assert_eq!(
            forecast(&one, 3, day(2022, 1, 1)).unwrap_err(),
            InsufficientDataError { needed: 2, got: 1 }
        );
    }
}
