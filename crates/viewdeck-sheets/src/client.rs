//! HTTP client for the spreadsheet values API.
//!
//! Wraps `reqwest` with typed error handling and optional API-key
//! authentication. Transient errors (429, network failures) are retried
//! with exponential backoff; everything else surfaces as a typed
//! [`SheetsError`] so callers can decide what to skip.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::SheetsError;
use crate::retry::retry_with_backoff;
use crate::types::{SheetInfo, SpreadsheetResponse, ValueRangeResponse};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4/";

/// Client for the spreadsheet values API.
///
/// Use [`SheetsClient::new`] for production or
/// [`SheetsClient::with_base_url`] to point at a mock server in tests.
pub struct SheetsClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff: `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl SheetsClient {
    /// Creates a client pointed at the production spreadsheet API.
    ///
    /// `api_key` is appended as the `key` query parameter when present;
    /// public read-only spreadsheets need nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SheetsError> {
        Self::with_base_url(
            api_key,
            timeout_secs,
            max_retries,
            backoff_base_secs,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SheetsError::InvalidBaseUrl`] if
    /// `base_url` is not a usable URL base.
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_secs: u64,
        base_url: &str,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("viewdeck/0.1 (metrics-collection)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // appended path segments extend the path rather than replacing the
        // last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| SheetsError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(SheetsError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "URL cannot be a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            api_key: api_key.map(str::to_owned),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Lists all tabs of a spreadsheet, with automatic retry on transient
    /// errors.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`SheetsError::NotFound`] — HTTP 404 (not retried).
    /// - [`SheetsError::UnexpectedStatus`] — any other non-2xx status (not retried).
    /// - [`SheetsError::Http`] — network failure after all retries exhausted.
    /// - [`SheetsError::Deserialize`] — response body does not match the
    ///   expected shape (not retried).
    pub async fn list_sheets(&self, spreadsheet_id: &str) -> Result<Vec<SheetInfo>, SheetsError> {
        let url = self.spreadsheet_url(spreadsheet_id);

        let response: SpreadsheetResponse = retry_with_backoff(
            self.max_retries,
            self.backoff_base_secs,
            || self.request_json(url.clone(), format!("spreadsheet meta {spreadsheet_id}")),
        )
        .await?;

        Ok(response
            .sheets
            .into_iter()
            .map(|s| SheetInfo {
                title: s.properties.title,
                gid: s.properties.sheet_id,
            })
            .collect())
    }

    /// Fetches all cell values of one tab, with automatic retry on
    /// transient errors.
    ///
    /// The first returned row is the header row. An empty tab yields an
    /// empty vec (the upstream API omits `values` entirely in that case).
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::list_sheets`].
    pub async fn fetch_values(
        &self,
        spreadsheet_id: &str,
        tab_title: &str,
    ) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = self.values_url(spreadsheet_id, tab_title);

        let response: ValueRangeResponse = retry_with_backoff(
            self.max_retries,
            self.backoff_base_secs,
            || {
                self.request_json(
                    url.clone(),
                    format!("values of '{tab_title}' in {spreadsheet_id}"),
                )
            },
        )
        .await?;

        Ok(response.values)
    }

    /// Builds `GET /spreadsheets/{id}?fields=sheets.properties`.
    fn spreadsheet_url(&self, spreadsheet_id: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            // SAFETY: with_base_url rejected cannot-be-a-base URLs.
            let mut path = url
                .path_segments_mut()
                .expect("base URL validated in with_base_url");
            path.pop_if_empty().push("spreadsheets").push(spreadsheet_id);
        }
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties");
        self.append_key(&mut url);
        url
    }

    /// Builds `GET /spreadsheets/{id}/values/{tab}`.
    ///
    /// The tab title is pushed as a path segment, which percent-encodes
    /// spaces and other reserved characters.
    fn values_url(&self, spreadsheet_id: &str, tab_title: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            // SAFETY: with_base_url rejected cannot-be-a-base URLs.
            let mut path = url
                .path_segments_mut()
                .expect("base URL validated in with_base_url");
            path.pop_if_empty()
                .push("spreadsheets")
                .push(spreadsheet_id)
                .push("values")
                .push(tab_title);
        }
        self.append_key(&mut url);
        url
    }

    fn append_key(&self, url: &mut Url) {
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
    }

    /// Sends a GET request, triages the HTTP status, and parses the body.
    ///
    /// # Errors
    ///
    /// Returns the typed error for 429/404/non-2xx statuses, network
    /// failures, and bodies that do not match `T`.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: String,
    ) -> Result<T, SheetsError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(SheetsError::RateLimited { retry_after_secs });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SheetsError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(SheetsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| SheetsError::Deserialize {
            context,
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
