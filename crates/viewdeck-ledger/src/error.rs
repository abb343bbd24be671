use thiserror::Error;

/// Errors returned by the ledger API client and normalizer.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The ledger API returned `"success": false` with a message.
    #[error("ledger API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A transaction amount could not be parsed as a decimal. This aborts
    /// the whole project's ingestion: a malformed amount is a
    /// data-integrity problem worth surfacing, unlike a malformed view
    /// counter.
    #[error("unparseable amount {raw} in transaction dated {date}")]
    InvalidAmount { date: String, raw: String },
}
