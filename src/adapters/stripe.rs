//! Stripe list-charges client.

use crate::domain::model::{ChargeList, RawCharge};
use crate::domain::ports::DEFAULT_API_ENDPOINT;
use crate::utils::error::{ExportError, Result};
use reqwest::{Client, Response};
use serde::Deserialize;

/// Error envelope Stripe returns with non-2xx responses.
#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl StripeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_API_ENDPOINT)
    }

    /// Point the client at a different list-charges URL (test servers, proxies).
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch a single page of charges. `limit` is passed through as-is;
    /// anything past the first page is not requested.
    pub async fn list_charges(&self, limit: u32) -> Result<ChargeList> {
        tracing::debug!("Making API request to: {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .bearer_auth(&self.api_key)
            .query(&[("limit", limit)])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        Self::handle_response(response).await
    }

    pub async fn fetch_transactions(&self, limit: u32) -> Result<Vec<RawCharge>> {
        tracing::info!("Fetching up to {} transactions from Stripe...", limit);

        let list = match self.list_charges(limit).await {
            Ok(list) => list,
            Err(e) => {
                tracing::error!("Error fetching transactions: {}", e);
                return Err(e);
            }
        };

        if list.has_more() {
            tracing::warn!(
                "More charges are available than the limit of {}; only the first page is exported",
                limit
            );
        }

        let charges = list.into_charges();
        tracing::info!("Successfully fetched {} transactions", charges.len());
        Ok(charges)
    }

    async fn handle_response(response: Response) -> Result<ChargeList> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<StripeErrorResponse>(&body) {
                Ok(StripeErrorResponse { error }) => {
                    let error_type = error.error_type.unwrap_or_else(|| "api_error".to_string());
                    match error.message {
                        Some(message) => format!("{} ({})", message, error_type),
                        None => error_type,
                    }
                }
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };

            return Err(ExportError::HttpStatusError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let list: ChargeList = serde_json::from_slice(&body)?;
        Ok(list)
    }
}

/// Fetch up to `limit` charges from the production Stripe endpoint.
pub async fn fetch_transactions(api_key: &str, limit: u32) -> Result<Vec<RawCharge>> {
    StripeClient::new(api_key).fetch_transactions(limit).await
}
