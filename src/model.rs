// Core structs: SeriesPoint, TimeSeries, Milestone, error kinds
use chrono::NaiveDate;
use thiserror::Error;

/// One observation of a series: calendar date (no time component) and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Date-ascending sequence of observations. Immutable once built:
/// analyzers derive new series, they never mutate their input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<SeriesPoint>,
}

impl TimeSeries {
    /// Wraps rows in response order. The API guarantees ascending dates;
    /// we preserve its order and do not dedup or re-sort.
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }
}

impl FromIterator<SeriesPoint> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = SeriesPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Dated political/administrative event from the `milestones` endpoint,
/// used to annotate plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub date: NaiveDate,
    /// Event description (field `e` in the raw record).
    pub name: String,
    /// Issuing entity: `pres`, `econ`, `bcra`, `fina`, `trea`, `misc`
    /// (field `t` in the raw record).
    pub kind: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("endpoint `{endpoint}` returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("endpoint `{endpoint}` returned a non-JSON body: {reason}")]
    Body {
        endpoint: &'static str,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("response is not an array of records")]
    NotAnArray,
    #[error("record {index} is missing field `{field}`")]
    MissingField { field: &'static str, index: usize },
    #[error("unparsable date `{0}`")]
    BadDate(String),
    #[error("unparsable value `{0}`")]
    BadValue(String),
}

/// An analyzer received fewer rows than its algorithm requires.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("insufficient data: need at least {needed} rows, got {got}")]
pub struct InsufficientDataError {
    pub needed: usize,
    pub got: usize,
}

/// Typed lookup failure on the series set (no silent fallback).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no series named `{0}` in the set")]
pub struct KeyNotFoundError(pub String);

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("plot rendering failed: {0}")]
    Render(String),
}

/// Top-level error for the whole pipeline: any component failure aborts
/// the run, there is no partial-result mode.
#[derive(Debug, Error)]
pub enum RadarError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Data(#[from] DataFormatError),
    #[error(transparent)]
    Insufficient(#[from] InsufficientDataError),
    #[error(transparent)]
    Key(#[from] KeyNotFoundError),
    #[error(transparent)]
    Plot(#[from] PlotError),
}
