// Plot collaborator: turns already-computed tables into PNG artifacts.
// The analytical core never calls into this module.
use crate::forecast::RegressionModel;
use crate::model::{Milestone, PlotError, TimeSeries};

use chrono::{Datelike, NaiveDate};
use plotters::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Parallel vs official series bucketed into calendar months, with
/// vertical markers at presidential milestones and the other milestone
/// kinds as dots along the bottom.
pub fn render_series_comparison(
    path: &Path,
    blue: &TimeSeries,
    official: &TimeSeries,
    milestones: &[Milestone],
) -> Result<(), PlotError> {
    let monthly = monthly_means(blue, official);
    if monthly.len() < 2 {
        return Err(PlotError::Render(
            "need at least two months of overlapping data".to_string(),
        ));
    }

    let x_min = monthly[0].0;
    let x_max = monthly[monthly.len() - 1].0;
    let y_max = monthly
        .iter()
        .flat_map(|&(_, b, o)| [b, o])
        .fold(f64::NEG_INFINITY, f64::max)
        * 1.1;

    let root = BitMapBackend::new(path, (1024, 640)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Dolar vs eventos politicos", ("sans-serif", 30.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .y_desc("ARS por USD")
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    for m in milestones {
        if m.date < x_min || m.date > x_max {
            continue;
        }
        if m.kind == "pres" {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(m.date, 0.0), (m.date, y_max)],
                    RGBColor(0, 128, 128).mix(0.6),
                )))
                .map_err(|e| PlotError::Render(e.to_string()))?;
        } else {
            chart
                .draw_series(std::iter::once(Circle::new(
                    (m.date, y_max * 0.02),
                    3,
                    RGBColor(119, 136, 153).filled(),
                )))
                .map_err(|e| PlotError::Render(e.to_string()))?;
        }
    }

    chart
        .draw_series(LineSeries::new(
            monthly.iter().map(|&(month, b, _)| (month, b)),
            &BLACK,
        ))
        .map_err(|e| PlotError::Render(e.to_string()))?
        .label("Dolar blue")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    chart
        .draw_series(LineSeries::new(
            monthly.iter().map(|&(month, _, o)| (month, o)),
            &RGBColor(128, 128, 128),
        ))
        .map_err(|e| PlotError::Render(e.to_string()))?
        .label("Dolar oficial")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(128, 128, 128)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    root.present().map_err(|e| PlotError::Render(e.to_string()))
}

/// ln-value history in grey with the fitted regression line on top.
pub fn render_regression(
    path: &Path,
    series: &TimeSeries,
    model: &RegressionModel,
) -> Result<(), PlotError> {
    let points = series.points();
    if points.len() < 2 {
        return Err(PlotError::Render(
            "need at least two rows to draw the fit".to_string(),
        ));
    }

    let x_min = points[0].date;
    let x_max = points[points.len() - 1].date;
    let log_values: Vec<(NaiveDate, f64)> =
        points.iter().map(|p| (p.date, p.value.ln())).collect();
    let y_min = log_values.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min) - 0.5;
    let y_max = log_values
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max)
        + 0.5;

    let root = BitMapBackend::new(path, (1024, 640)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Regresion log-lineal", ("sans-serif", 30.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .y_desc("ln(precio)")
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            log_values,
            &RGBColor(128, 128, 128),
        ))
        .map_err(|e| PlotError::Render(e.to_string()))?
        .label("ln(v)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(128, 128, 128)));
    chart
        .draw_series(LineSeries::new(
            [x_min, x_max].into_iter().map(|date| {
                (date, model.predict(date.num_days_from_ce() as f64))
            }),
            &BLACK,
        ))
        .map_err(|e| PlotError::Render(e.to_string()))?
        .label("Ajuste")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    root.present().map_err(|e| PlotError::Render(e.to_string()))
}

/// Inner join of the two series on date, bucketed by first-of-month label,
/// arithmetic mean per side. Sorted ascending by month.
fn monthly_means(blue: &TimeSeries, official: &TimeSeries) -> Vec<(NaiveDate, f64, f64)> {
    let official_by_date: HashMap<NaiveDate, f64> = official
        .points()
        .iter()
        .map(|p| (p.date, p.value))
        .collect();

    let mut buckets: HashMap<NaiveDate, (f64, f64, usize)> = HashMap::new();
    for p in blue.points() {
        let Some(&official_value) = official_by_date.get(&p.date) else {
            continue;
        };
        let month = p.date.with_day(1).unwrap_or(p.date);
        let entry = buckets.entry(month).or_insert((0.0, 0.0, 0));
        entry.0 += p.value;
        entry.1 += official_value;
        entry.2 += 1;
    }

    let mut monthly: Vec<(NaiveDate, f64, f64)> = buckets
        .into_iter()
        .map(|(month, (b, o, n))| (month, b / n as f64, o / n as f64))
        .collect();
    monthly.sort_by_key(|&(month, _, _)| month);
    monthly
}
