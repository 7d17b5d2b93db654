use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use url::Url;

use lakoe_web_core::OrderReadinessRecord;

/// Client for the order service endpoints consumed by the seller pages.
#[derive(Clone)]
pub struct OrderClient {
    http: Client,
    base_url: Url,
}

impl OrderClient {
    /// Creates a new order service client with the provided configuration.
    pub fn new(base_url: Url, http: Client) -> Self {
        Self { http, base_url }
    }

    /// Fetches the products whose orders are ready to ship.
    pub async fn products_ready_to_ship(
        &self,
    ) -> Result<Vec<OrderReadinessRecord>, DataSourceError> {
        let url = self.base_url.join("products/ready-to-ship")?;
        let response = self.http.get(url).send().await?;

        parse_json::<ReadyToShipResponse>(response)
            .await
            .map(|body| body.data)
    }
}

#[derive(Debug, Deserialize)]
struct ReadyToShipResponse {
    data: Vec<OrderReadinessRecord>,
}

/// Errors produced by the order service client.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to build order service url: {0}")]
    Url(#[from] url::ParseError),
    #[error("order service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("order service returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

async fn parse_json<T>(response: Response) -> Result<T, DataSourceError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<unavailable>"));
        return Err(DataSourceError::Status { status, body });
    }

    Ok(response.json().await?)
}
