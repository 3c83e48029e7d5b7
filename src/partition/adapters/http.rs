//! HTTP status provider backed by a JSON todo-style endpoint.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::partition::{
    domain::ItemStatus,
    ports::{StatusProvider, StatusProviderError, StatusProviderResult},
};

/// Base URL of the public endpoint the provider queries by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Status provider issuing `GET {base_url}/{id}` and decoding a JSON body
/// with a boolean `completed` field.
///
/// No timeout or retry policy is applied; a slow or failed request surfaces
/// as an ordinary lookup error.
#[derive(Debug, Clone)]
pub struct HttpStatusProvider {
    client: Client,
    base_url: String,
}

impl HttpStatusProvider {
    /// Creates a provider for `base_url` using a fresh HTTP client.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a provider sharing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self {
            client,
            base_url: raw.trim_end_matches('/').to_owned(),
        }
    }

    /// Returns the base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the URL queried for item `id`.
    #[must_use]
    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }
}

impl Default for HttpStatusProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl StatusProvider for HttpStatusProvider {
    async fn fetch_status(&self, id: i64) -> StatusProviderResult<ItemStatus> {
        let url = self.item_url(id);
        debug!(%url, "requesting item status");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| StatusProviderError::transport(id, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusProviderError::UnexpectedStatus {
                id,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| StatusProviderError::transport(id, err))?;
        serde_json::from_slice(&body).map_err(|err| StatusProviderError::decode(id, err))
    }
}
