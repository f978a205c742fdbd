//! HTTP client for the scoring API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    ActionResponse, CryptoKey, KeyInventoryResponse, RiskInput, ScoredLogsPage,
    VulnerabilityResponse,
};

/// HTTP client for making network requests to the scoring API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    page_limit: u32,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
        }
    }

    /// The configured scored-logs page size
    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    // ========== Scoring API ==========

    /// Fetch the full key inventory, in the order the API returns it.
    pub async fn key_inventory(&self) -> ClientResult<Vec<CryptoKey>> {
        tracing::debug!("fetching key inventory");
        let response: KeyInventoryResponse = self.get("keys/inventory").await?;
        Ok(response.keys)
    }

    /// Score one key. Callers issue these concurrently and catch failures
    /// per key, so one failing key never blanks the rest.
    pub async fn predict_vulnerability(&self, key: &CryptoKey) -> ClientResult<f64> {
        tracing::debug!(key_id = %key.key_id, "predicting vulnerability");
        let response: VulnerabilityResponse = self.post("predict_vulnerability", key).await?;
        Ok(response.predicted_vulnerability_score)
    }

    /// Fetch one page of anomaly-scored access logs.
    pub async fn scored_logs(&self, page: u32) -> ClientResult<ScoredLogsPage> {
        tracing::debug!(page, limit = self.page_limit, "fetching scored logs");
        self.get(&format!(
            "logs/scored?page={}&limit={}",
            page, self.page_limit
        ))
        .await
    }

    /// Ask the policy endpoint for a remediation action given a risk score.
    pub async fn recommended_action(&self, input: RiskInput) -> ClientResult<String> {
        tracing::debug!(score = input.score(), "requesting recommended action");
        let response: ActionResponse = self.post("get_action", &input).await?;
        Ok(response.recommended_action)
    }
}
