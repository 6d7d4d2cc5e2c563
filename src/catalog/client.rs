//! Async catalog API client
//!
//! Issues the single signed GET that retrieves one page of comics.
//! Uses reqwest for HTTP; the caller supplies the tokio runtime.

use reqwest::{Client, StatusCode, Url};

use super::auth::Credentials;
use super::types::ComicRecord;
use super::wire::parse_catalog;
use crate::config::ApiConfig;
use crate::error::ComiqError;

/// Catalog API client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
    limit: u32,
}

impl CatalogClient {
    /// Create a client from API configuration
    ///
    /// Fails with `MissingCredentials` unless both keys are configured.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ComiqError> {
        let credentials = config.credentials().ok_or(ComiqError::MissingCredentials)?;
        Ok(Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            credentials,
            limit: config.limit,
        })
    }

    /// Build the signed request URL for timestamp `ts`
    pub fn request_url(&self, ts: &str) -> Result<Url, ComiqError> {
        let limit = self.limit.to_string();
        let auth = self.credentials.query_params(ts);
        let params = auth
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .chain(std::iter::once(("limit", limit.as_str())));

        Url::parse_with_params(&self.base_url, params)
            .map_err(|e| ComiqError::Network(format!("invalid catalog URL: {}", e)))
    }

    /// Fetch one page of comics
    pub async fn fetch(&self) -> Result<Vec<ComicRecord>, ComiqError> {
        let ts = chrono::Utc::now().timestamp().to_string();
        let url = self.request_url(&ts)?;

        #[cfg(debug_assertions)]
        log::debug!("Fetching catalog from {} (limit {})", self.base_url, self.limit);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ComiqError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ComiqError::Network(e.to_string()))?;

        classify(status, &body)
    }
}

/// Decode a response body, falling back to the HTTP status for error bodies
/// that carry no envelope
fn classify(status: StatusCode, body: &str) -> Result<Vec<ComicRecord>, ComiqError> {
    match parse_catalog(body) {
        Err(ComiqError::InvalidJson(_)) if !status.is_success() => Err(ComiqError::Api {
            code: status.as_u16().to_string(),
            message: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        }),
        result => result,
    }
}
