//! Retry with exponential backoff for transient spreadsheet API errors.
//!
//! Non-retriable errors (parse failures, 404s, unexpected statuses) are
//! propagated immediately without retrying.

use std::future::Future;
use std::time::Duration;

use crate::error::SheetsError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable errors:
/// - [`SheetsError::RateLimited`] — HTTP 429; the server has asked us to back off.
/// - [`SheetsError::Http`] — network-level failure (connection reset, timeout, etc.).
///
/// Everything else is propagated immediately: a 404 or a malformed body
/// will not get better on a second attempt.
fn is_retriable(err: &SheetsError) -> bool {
    matches!(
        err,
        SheetsError::RateLimited { .. } | SheetsError::Http(_)
    )
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps for
/// `backoff_base_secs * 2^attempt` seconds and tries again, up to
/// `max_retries` additional attempts after the first try. If all retries
/// are exhausted the last error is returned. Non-retriable errors are
/// returned immediately without sleeping.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, SheetsError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SheetsError>>,
{
    let mut last_err;
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                last_err = err;
            }
        }

        // Exponential backoff: base * 2^attempt seconds, capped against overflow.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %last_err,
            "transient spreadsheet API error — retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
