use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub projects_path: PathBuf,
    pub metrics_data_path: PathBuf,
    pub ledger_data_path: PathBuf,
    pub sheets_base_url: String,
    pub sheets_api_key: Option<String>,
    pub sheets_request_timeout_secs: u64,
    pub sheets_pacing_delay_ms: u64,
    pub sheets_max_retries: u32,
    pub sheets_retry_backoff_base_secs: u64,
    pub ledger_base_url: String,
    pub ledger_api_token: Option<String>,
    pub ledger_request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("projects_path", &self.projects_path)
            .field("metrics_data_path", &self.metrics_data_path)
            .field("ledger_data_path", &self.ledger_data_path)
            .field("sheets_base_url", &self.sheets_base_url)
            .field(
                "sheets_api_key",
                &self.sheets_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "sheets_request_timeout_secs",
                &self.sheets_request_timeout_secs,
            )
            .field("sheets_pacing_delay_ms", &self.sheets_pacing_delay_ms)
            .field("sheets_max_retries", &self.sheets_max_retries)
            .field(
                "sheets_retry_backoff_base_secs",
                &self.sheets_retry_backoff_base_secs,
            )
            .field("ledger_base_url", &self.ledger_base_url)
            .field(
                "ledger_api_token",
                &self.ledger_api_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "ledger_request_timeout_secs",
                &self.ledger_request_timeout_secs,
            )
            .finish()
    }
}
