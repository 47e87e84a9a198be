//! Civic Information REST API client implementation.
//!
//! The [`CivicClient`] issues authenticated GET requests against the
//! civic-information endpoints and returns the parsed JSON body as a
//! [`serde_json::Value`] tree.
//!
//! # Example
//!
//! ```rust,ignore
//! use civic_sdk::api::{CivicClient, QueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CivicClient::new("my-api-key")?;
//!
//!     // List current elections
//!     let elections = client.elections(&QueryOptions::new()).await?;
//!     println!("kind: {}", elections["kind"]);
//!
//!     // Look up a voter's polling information
//!     let info = client
//!         .voter_info(2000, "1263 Pacific Ave. Kansas City KS", &QueryOptions::new())
//!         .await?;
//!     println!("election: {}", info["election"]["name"]);
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::api::error::{CivicError, CivicResult, ErrorResponse};
use crate::api::query::QueryOptions;
use crate::network::DEFAULT_API_URL;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring [`CivicClient`].
#[derive(Debug, Clone)]
pub struct CivicClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl CivicClientBuilder {
    /// Create a new builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the API base URL (trailing slashes are trimmed).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`CivicError::Transport`] if the HTTP client cannot be
    /// initialized.
    pub fn build(self) -> CivicResult<CivicClient> {
        let http_client = Client::builder().timeout(self.timeout).build()?;

        Ok(CivicClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
        })
    }
}

/// Google Civic Information API client.
///
/// Holds the API credential and exposes the election, voter-info, and
/// representative lookup endpoints. The key is injected into every
/// request as the `key` query parameter; no validation of the key is
/// performed locally, so an invalid key surfaces as the server's 403.
///
/// The client holds no mutable state, so a single instance (or cheap
/// clones of it) can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct CivicClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl CivicClient {
    /// Create a new client with the given API key and default settings
    /// (production base URL, 30s timeout).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(api_key: impl Into<String>) -> CivicResult<Self> {
        CivicClientBuilder::new(api_key).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(api_key: impl Into<String>) -> CivicClientBuilder {
        CivicClientBuilder::new(api_key)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Election endpoints
    // =========================================================================

    /// List the elections the API currently knows about.
    ///
    /// See <https://developers.google.com/civic-information/docs/v2/elections/electionQuery>
    pub async fn elections(&self, options: &QueryOptions) -> CivicResult<Value> {
        self.get("elections", options).await
    }

    /// Look up information relevant to a voter based on the voter's
    /// registered address.
    ///
    /// `election_id` comes from [`elections`](Self::elections);
    /// `address` is the voter's registered address. Both override
    /// same-named caller options.
    ///
    /// See <https://developers.google.com/civic-information/docs/v2/elections/voterInfoQuery>
    pub async fn voter_info(
        &self,
        election_id: i64,
        address: &str,
        options: &QueryOptions,
    ) -> CivicResult<Value> {
        let params = options.merged([
            ("electionId", election_id.to_string()),
            ("address", address.to_string()),
        ]);
        self.get("voterinfo", &params).await
    }

    // =========================================================================
    // Representative endpoints
    // =========================================================================

    /// Look up political geography and representative information for an
    /// address. The positional `address` overrides a same-named caller
    /// option.
    ///
    /// See <https://developers.google.com/civic-information/docs/v2/representatives/representativeInfoByAddress>
    pub async fn representative_info_by_address(
        &self,
        address: &str,
        options: &QueryOptions,
    ) -> CivicResult<Value> {
        let params = options.merged([("address", address)]);
        self.get("representatives", &params).await
    }

    /// Look up representative information for a division identified by an
    /// Open Civic Data ID (e.g. `ocd-division/country:us/state:nc/county:durham`).
    ///
    /// The OCD ID is embedded in the request path and percent-encoded, so
    /// the `/` and `:` characters inside it stay part of one path segment.
    ///
    /// See <https://developers.google.com/civic-information/docs/v2/representatives/representativeInfoByDivision>
    pub async fn representative_info_by_division(
        &self,
        ocd_id: &str,
        options: &QueryOptions,
    ) -> CivicResult<Value> {
        let path = format!("representatives/{}", urlencoding::encode(ocd_id));
        self.get(&path, options).await
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Issue a GET against `{base_url}/{path}` with the stored API key
    /// injected as the `key` query parameter.
    ///
    /// One request per call, no retries. The key never appears in log
    /// output.
    async fn get(&self, path: &str, options: &QueryOptions) -> CivicResult<Value> {
        let query = options
            .merged([("key", self.api_key.as_str())])
            .to_query_string();
        let url = format!("{}/{}?{}", self.base_url, path, query);

        tracing::debug!(endpoint = path, "issuing GET request");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(
                endpoint = path,
                status = status.as_u16(),
                "request rejected by server"
            );
            return Err(Self::error_for_status(status.as_u16(), body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Map a non-success status and raw body to [`CivicError::Api`].
    ///
    /// The message is taken from the `{"error": {"message": ...}}`
    /// envelope when the body parses as one, otherwise the raw body text
    /// (or `HTTP <status>` when the body is empty).
    fn error_for_status(status: u16, body: String) -> CivicError {
        let parsed_body: Option<Value> = serde_json::from_str(&body).ok();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|envelope| envelope.message())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {status}")
                } else {
                    body.clone()
                }
            });

        CivicError::Api {
            status,
            message,
            body: parsed_body,
        }
    }
}
