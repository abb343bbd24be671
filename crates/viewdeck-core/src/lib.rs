use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod ledger;
pub mod metrics;
pub mod projects;
pub mod series;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use ledger::{ProjectLedger, TransactionKind, TransactionRecord};
pub use metrics::{ChannelRecord, DailySnapshot, Platform};
pub use projects::{load_projects, ProjectConfig, ProjectsFile};
pub use series::{aggregate, compute_deltas, ProjectSeries, SeriesError, SnapshotTotals};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read projects file {path}: {source}")]
    ProjectsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse projects file: {0}")]
    ProjectsFileParse(#[from] serde_yaml::Error),

    #[error("projects validation error: {0}")]
    Validation(String),
}
