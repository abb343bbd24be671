use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any env var value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any env var value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("VIEWDECK_ENV", "development"));
    let log_level = or_default("VIEWDECK_LOG_LEVEL", "info");
    let projects_path = PathBuf::from(or_default(
        "VIEWDECK_PROJECTS_PATH",
        "./config/projects.yaml",
    ));
    let metrics_data_path = PathBuf::from(or_default(
        "VIEWDECK_METRICS_DATA_PATH",
        "./data/projects_data.json",
    ));
    let ledger_data_path = PathBuf::from(or_default(
        "VIEWDECK_LEDGER_DATA_PATH",
        "./data/ledger_data.json",
    ));

    let sheets_base_url = or_default(
        "VIEWDECK_SHEETS_BASE_URL",
        "https://sheets.googleapis.com/v4",
    );
    let sheets_api_key = lookup("VIEWDECK_SHEETS_API_KEY").ok();
    let sheets_request_timeout_secs = parse_u64("VIEWDECK_SHEETS_REQUEST_TIMEOUT_SECS", "30")?;
    // 60 requests/minute upstream limit; 1100 ms keeps a full-project run
    // just under it.
    let sheets_pacing_delay_ms = parse_u64("VIEWDECK_SHEETS_PACING_DELAY_MS", "1100")?;
    let sheets_max_retries = parse_u32("VIEWDECK_SHEETS_MAX_RETRIES", "3")?;
    let sheets_retry_backoff_base_secs =
        parse_u64("VIEWDECK_SHEETS_RETRY_BACKOFF_BASE_SECS", "5")?;

    let ledger_base_url = or_default("VIEWDECK_LEDGER_BASE_URL", "https://api.adesk.ru/v1");
    let ledger_api_token = lookup("VIEWDECK_LEDGER_API_TOKEN").ok();
    let ledger_request_timeout_secs = parse_u64("VIEWDECK_LEDGER_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        env,
        log_level,
        projects_path,
        metrics_data_path,
        ledger_data_path,
        sheets_base_url,
        sheets_api_key,
        sheets_request_timeout_secs,
        sheets_pacing_delay_ms,
        sheets_max_retries,
        sheets_retry_backoff_base_secs,
        ledger_base_url,
        ledger_api_token,
        ledger_request_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
