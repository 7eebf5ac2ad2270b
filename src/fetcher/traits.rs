use crate::endpoints::Endpoint;
use crate::model::FetchError;
use serde_json::Value;

/// Remote fetch collaborator. One raw payload per endpoint, in request
/// order. Batch semantics: if any single endpoint fails, the whole call
/// fails and no partial results are delivered.
#[async_trait::async_trait]
pub trait SeriesFetcher: Send + Sync {
    async fn fetch_many(&self, points: &[Endpoint]) -> Result<Vec<Value>, FetchError>;
}
