// Catalog API configuration type definitions

use serde::Deserialize;

use crate::catalog::Credentials;

/// Default catalog endpoint
pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com:443/v1/public/comics";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default page size requested from the catalog
fn default_limit() -> u32 {
    100
}

/// Catalog API configuration section
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Public API identifier, sent as `apikey`
    pub public_key: Option<String>,
    /// Private signing key, only used to compute the request hash
    pub private_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            public_key: None,
            private_key: None,
            base_url: default_base_url(),
            limit: default_limit(),
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("limit", &self.limit)
            .finish()
    }
}

impl ApiConfig {
    /// Both keys, when both are present and non-empty
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.public_key, &self.private_key) {
            (Some(public), Some(private)) if !public.is_empty() && !private.is_empty() => {
                Some(Credentials::new(public.clone(), private.clone()))
            }
            _ => None,
        }
    }

    /// Apply command line / environment values on top of the file values
    pub fn with_overrides(
        mut self,
        public_key: Option<String>,
        private_key: Option<String>,
        limit: Option<u32>,
    ) -> Self {
        if public_key.is_some() {
            self.public_key = public_key;
        }
        if private_key.is_some() {
            self.private_key = private_key;
        }
        if let Some(limit) = limit {
            self.limit = limit;
        }
        self
    }
}
