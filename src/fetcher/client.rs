use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::fetcher::traits::SeriesFetcher;
use crate::model::FetchError;

use futures::future::try_join_all;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// HTTP client for api.estadisticasbcra.com with bearer-token auth.
/// Timeout and retry policy live here, never in the analytical core.
pub struct BcraClient {
    client: Client,
    config: ClientConfig,
}

impl BcraClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("bcra-radar/0.1")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint_url(&self, point: Endpoint) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            point.as_str()
        )
    }

    async fn get_json(&self, point: Endpoint) -> Result<Value, FetchError> {
        let url = self.endpoint_url(point);
        debug!(endpoint = point.as_str(), "GET {}", url);

        let response = self
            .client
            .get(&url)
            // The API expects this exact uppercase scheme name.
            .header("Authorization", format!("BEARER {}", self.config.token))
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                endpoint: point.as_str(),
                status: response.status().as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| FetchError::Body {
            endpoint: point.as_str(),
            reason: e.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl SeriesFetcher for BcraClient {
    /// Launches one request per endpoint and awaits them all; the first
    /// failure aborts the batch.
    async fn fetch_many(&self, points: &[Endpoint]) -> Result<Vec<Value>, FetchError> {
        try_join_all(points.iter().map(|&p| self.get_json(p))).await
    }
}
