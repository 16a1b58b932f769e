use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{OptimizerError, Result};
use crate::lookup::NutritionLookup;
use crate::models::FoodSearchPage;

const DEFAULT_BASE_URL: &str = "https://api.studio93.io/food/search";

/// Request timeout. A hung lookup degrades to an absence entry for that one
/// food; this bound keeps it from stalling a batch longer.
const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// First page, 20 candidates — the search defaults.
const PAGE_NUMBER: &str = "0";
const MAX_RESULTS: &str = "20";

/// Envelope the food API wraps every payload in; only `data` matters here.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    data: FoodSearchPage,
}

/// HTTP client for the food search API.
pub struct NutritionClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl NutritionClient {
    /// Build a client with pooled connections and fixed timeouts.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Build a client against a custom endpoint (tests, staging).
    ///
    /// Fails if the underlying HTTP client cannot be constructed; a client
    /// without its timeouts is worse than no client.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client,
        })
    }
}

#[async_trait]
impl NutritionLookup for NutritionClient {
    async fn search(&self, food_name: &str) -> Result<FoodSearchPage> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("food_name", food_name),
                ("page_number", PAGE_NUMBER),
                ("max_results", MAX_RESULTS),
            ])
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OptimizerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: ApiEnvelope = serde_json::from_str(&body)?;
        if envelope.data.foods.is_empty() {
            return Err(OptimizerError::NoResults(food_name.to_string()));
        }
        Ok(envelope.data)
    }
}
