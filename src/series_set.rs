use crate::endpoints::Endpoint;
use crate::fetcher::SeriesFetcher;
use crate::model::{KeyNotFoundError, Milestone, RadarError, TimeSeries};
use crate::normalizer;

use std::collections::HashMap;
use tracing::{info, warn};

/// All series of one analysis run, keyed by endpoint. Populated once from a
/// fetch batch and read-only thereafter.
///
/// Idempotence rule: calling [`SeriesSet::populate`] on a set that already
/// holds data is a no-op. Callers wanting fresh data must construct a fresh
/// set per run.
#[derive(Default)]
pub struct SeriesSet {
    series: HashMap<Endpoint, TimeSeries>,
    milestones: Vec<Milestone>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches every endpoint concurrently and normalizes the batch.
    /// Any single fetch or normalization failure aborts the whole call and
    /// leaves the set empty; there is no partial population.
    pub async fn populate(
        &mut self,
        fetcher: &dyn SeriesFetcher,
        points: &[Endpoint],
    ) -> Result<(), RadarError> {
        if !self.series.is_empty() || !self.milestones.is_empty() {
            warn!("series set already populated, ignoring repeated populate call");
            return Ok(());
        }

        let batch = fetcher.fetch_many(points).await?;

        let mut series = HashMap::with_capacity(points.len());
        let mut milestones = Vec::new();
        for (&point, raw) in points.iter().zip(batch.iter()) {
            if point == Endpoint::Milestones {
                milestones = normalizer::to_milestones(raw)?;
            } else {
                series.insert(point, normalizer::to_series(raw)?);
            }
        }

        info!(series = series.len(), milestones = milestones.len(), "series set populated");
        self.series = series;
        self.milestones = milestones;
        Ok(())
    }

    /// Typed lookup. Unknown names fail loudly instead of falling back.
    pub fn get(&self, point: Endpoint) -> Result<&TimeSeries, KeyNotFoundError> {
        self.series
            .get(&point)
            .ok_or_else(|| KeyNotFoundError(point.as_str().to_string()))
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.milestones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FetchError;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubFetcher {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl SeriesFetcher for StubFetcher {
        async fn fetch_many(&self, points: &[Endpoint]) -> Result<Vec<Value>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(points
                .iter()
                .map(|p| match p {
                    Endpoint::Milestones => {
                        json!([{"d": "2019-12-10", "e": "Asume Alberto", "t": "pres"}])
                    }
                    _ => json!([{"d": "2022-07-28", "v": 314.0}]),
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn populate_fills_series_and_milestones() {
        let fetcher = StubFetcher { calls: AtomicUsize::new(0) };
        let mut set = SeriesSet::new();
        set.populate(&fetcher, &[Endpoint::Usd, Endpoint::Milestones])
            .await
            .unwrap();

        assert_eq!(set.get(Endpoint::Usd).unwrap().len(), 1);
        assert_eq!(set.milestones().len(), 1);
    }

    #[tokio::test]
    async fn repeated_populate_is_a_no_op() {
        let fetcher = StubFetcher { calls: AtomicUsize::new(0) };
        let mut set = SeriesSet::new();
        set.populate(&fetcher, &[Endpoint::Usd]).await.unwrap();
        set.populate(&fetcher, &[Endpoint::Usd, Endpoint::UsdOf])
            .await
            .unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert!(set.get(Endpoint::UsdOf).is_err());
    }

    #[tokio::test]
    async fn unknown_series_lookup_fails_with_key_error() {
        let fetcher = StubFetcher { calls: AtomicUsize::new(0) };
        let mut set = SeriesSet::new();
        set.populate(&fetcher, &[Endpoint::Usd]).await.unwrap();

        let err = set.get(Endpoint::Merval).unwrap_err();
        assert_eq!(err, KeyNotFoundError("merval".to_string()));
    }
}
