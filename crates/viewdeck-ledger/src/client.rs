//! HTTP client for the ledger REST API.
//!
//! Wraps `reqwest` with token management and typed response
//! deserialization. The API signals application-level failures with
//! `"success": false` in the JSON envelope; those surface as
//! [`LedgerError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::LedgerError;
use crate::types::{RawTransaction, TransactionsResponse};

const DEFAULT_BASE_URL: &str = "https://api.adesk.ru/v1/";

/// Client for the ledger REST API.
///
/// Use [`LedgerClient::new`] for production or
/// [`LedgerClient::with_base_url`] to point at a mock server in tests.
pub struct LedgerClient {
    client: Client,
    api_token: String,
    base_url: Url,
}

impl LedgerClient {
    /// Creates a new client pointed at the production ledger API.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_token: &str, timeout_secs: u64) -> Result<Self, LedgerError> {
        Self::with_base_url(api_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LedgerError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, LedgerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("viewdeck/0.1 (ledger-sync)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the endpoint rather than replacing the last path
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| LedgerError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(LedgerError::ApiError(format!(
                "invalid base URL '{base_url}': cannot be a base"
            )));
        }

        Ok(Self {
            client,
            api_token: api_token.to_owned(),
            base_url,
        })
    }

    /// Fetches all transactions booked against a ledger project.
    ///
    /// The returned sequence is unordered; [`crate::normalize::ingest`]
    /// sorts it chronologically.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::ApiError`] if the API reports failure.
    /// - [`LedgerError::Http`] on network failure or non-2xx HTTP status.
    /// - [`LedgerError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_transactions(
        &self,
        project_id: i64,
    ) -> Result<Vec<RawTransaction>, LedgerError> {
        let url = self.build_url("transactions", &[("project", &project_id.to_string())]);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let parsed: TransactionsResponse =
            serde_json::from_value(body).map_err(|e| LedgerError::Deserialize {
                context: format!("transactions(project={project_id})"),
                source: e,
            })?;

        Ok(parsed.transactions)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters; the API token rides along as `api_token`.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            // SAFETY: with_base_url only accepts URLs that can be a base.
            let mut path = url
                .path_segments_mut()
                .expect("base URL validated in with_base_url");
            path.pop_if_empty().push(endpoint);
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_token", &self.api_token);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, LedgerError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LedgerError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Checks the `"success"` field and returns an error if the API
    /// reported failure.
    fn check_api_error(body: &serde_json::Value) -> Result<(), LedgerError> {
        if body.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
            let msg = body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(LedgerError::ApiError(msg));
        }
        Ok(())
    }
}
