// Console report: fixed sections answering the five consignas.
use crate::analyzer::{DayVolatility, WeekRange};
use chrono::NaiveDate;
use std::fmt::Write;

const DATE_FMT: &str = "%Y-%m-%d";
const COLUMN_WIDTH: usize = 34;

pub struct ReportInputs<'a> {
    pub peak_day: NaiveDate,
    pub blue_volatility: &'a [DayVolatility],
    pub official_volatility: &'a [DayVolatility],
    pub week: WeekRange,
    pub weekday_means: &'a [(&'static str, f64)],
    pub blue_forecast: String,
    pub official_forecast: String,
}

pub fn render(inputs: &ReportInputs<'_>) -> String {
    let mut out = String::new();

    out.push_str("\n[ * ] Respuestas a las consignas propuestas [ * ]\n\n");
    out.push_str("DATA últimos 365 días:\n");
    out.push_str("---------------------\n\n");

    out.push_str("[>] Dia con mayor variacion\n    entre dolar blue y dolar oficial\n\n");
    let _ = writeln!(out, "{}\n", inputs.peak_day.format(DATE_FMT));

    out.push_str("[>] Top 5 dias con mayor volatilidad\n    comparando el dolar blue con el oficial\n\n");
    let _ = writeln!(
        out,
        "{:<width$}{}",
        "Dolar blue",
        "Dolar Oficial",
        width = COLUMN_WIDTH
    );
    let _ = writeln!(
        out,
        "{:<width$}{}",
        "----------",
        "-------------",
        width = COLUMN_WIDTH
    );
    out.push_str(&side_by_side(
        inputs.blue_volatility,
        inputs.official_volatility,
    ));

    out.push_str("\n[>] Semana con mayor variación en la brecha\n\n");
    out.push_str(&week_lines(&inputs.week));

    out.push_str("\n[>] Día de la semana donde hay mayor variación\n    en la brecha el ultimo año\n\n");
    for (name, mean) in inputs.weekday_means {
        let _ = writeln!(out, "{:<10} {:>10.6}", name, mean);
    }

    out.push_str("\nRegresion Lineal\n----------------\n\n");
    let _ = writeln!(out, "[>] Dolar blue\n\n{}\n", inputs.blue_forecast);
    let _ = writeln!(out, "[>] Dolar oficial\n\n{}", inputs.official_forecast);

    out
}

/// The two top-5 tables zipped line by line into one block.
fn side_by_side(left: &[DayVolatility], right: &[DayVolatility]) -> String {
    let rows = left.len().max(right.len());
    let mut out = String::new();
    for i in 0..rows {
        let left_cell = left.get(i).map(volatility_cell).unwrap_or_default();
        let right_cell = right.get(i).map(volatility_cell).unwrap_or_default();
        let _ = writeln!(out, "{:<width$}{}", left_cell, right_cell, width = COLUMN_WIDTH);
    }
    out
}

fn volatility_cell(row: &DayVolatility) -> String {
    format!("{}    {:.6}", row.date.format(DATE_FMT), row.volatility)
}

fn week_lines(week: &WeekRange) -> String {
    format!(
        "Desde {} hasta {}\nCon una variacion de {:.2}%\n",
        week.start.format(DATE_FMT),
        week.end.format(DATE_FMT),
        week.range
    )
}
