// Raw API payloads -> typed tables. Response order is preserved; rows are
// neither deduplicated nor re-sorted beyond what the source guarantees.
use crate::model::{DataFormatError, Milestone, SeriesPoint, TimeSeries};

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Converts an array of `{"d": date, "v": number}` records into a series.
pub fn to_series(raw: &Value) -> Result<TimeSeries, DataFormatError> {
    let records = raw.as_array().ok_or(DataFormatError::NotAnArray)?;

    let mut points = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let date = parse_date(field(record, "d", index)?)?;
        let value = parse_value(field(record, "v", index)?)?;
        points.push(SeriesPoint { date, value });
    }
    Ok(TimeSeries::new(points))
}

/// Converts event records (`"d"`, `"e"`, `"t"`) into a milestone table.
/// This is the typed rendition of the source's column-rename mapping:
/// `e` becomes the event name, `t` its issuing entity.
pub fn to_milestones(raw: &Value) -> Result<Vec<Milestone>, DataFormatError> {
    let records = raw.as_array().ok_or(DataFormatError::NotAnArray)?;

    let mut milestones = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let date = parse_date(field(record, "d", index)?)?;
        let name = text(field(record, "e", index)?);
        let kind = text(field(record, "t", index)?);
        milestones.push(Milestone { date, name, kind });
    }
    Ok(milestones)
}

fn field<'a>(
    record: &'a Value,
    name: &'static str,
    index: usize,
) -> Result<&'a Value, DataFormatError> {
    record
        .get(name)
        .ok_or(DataFormatError::MissingField { field: name, index })
}

/// Dates arrive either as epoch milliseconds or as ISO strings; both are
/// accepted and truncated to a calendar date.
fn parse_date(raw: &Value) -> Result<NaiveDate, DataFormatError> {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| DataFormatError::BadDate(raw.to_string())),
        Value::String(s) => {
            if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return Ok(date);
            }
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Ok(dt.date_naive());
            }
            Err(DataFormatError::BadDate(s.clone()))
        }
        _ => Err(DataFormatError::BadDate(raw.to_string())),
    }
}

fn parse_value(raw: &Value) -> Result<f64, DataFormatError> {
    match raw {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| DataFormatError::BadValue(raw.to_string())),
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|_| DataFormatError::BadValue(s.clone())),
        _ => Err(DataFormatError::BadValue(raw.to_string())),
    }
}

fn text(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
