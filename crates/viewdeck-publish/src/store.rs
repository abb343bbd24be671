//! Persisted JSON documents.
//!
//! Both documents are value objects rebuilt fully on each pipeline run:
//! a collect run derives everything from upstream and replaces the file
//! wholesale. There is no incremental mutation of persisted state.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use viewdeck_core::{ChannelRecord, ProjectLedger, ProjectSeries};

use crate::error::PublishError;

/// The metrics document: one entry per project, keyed by project name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsDocument {
    pub generated_at: String,
    pub projects: BTreeMap<String, ProjectEntry>,
}

/// Everything the dashboard needs for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    /// Spreadsheet identifier the data was collected from.
    pub source_id: String,
    pub color: String,
    pub budget: u64,
    /// Channel roster as of the most recent labeled tab.
    pub channels: Vec<ChannelRecord>,
    /// The full daily snapshot series, deltas included.
    pub daily: ProjectSeries,
    pub updated_at: String,
}

/// The financial document: one ledger per project, keyed by project name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub updated_at: String,
    pub projects: BTreeMap<String, ProjectLedger>,
}

impl MetricsDocument {
    /// Reads the document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] if the file cannot be read or
    /// [`PublishError::Json`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, PublishError> {
        load_json(path)
    }

    /// Writes the document to `path`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] on filesystem failure.
    pub fn save(&self, path: &Path) -> Result<(), PublishError> {
        save_json(path, self)
    }
}

impl LedgerDocument {
    /// Reads the document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] if the file cannot be read or
    /// [`PublishError::Json`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, PublishError> {
        load_json(path)
    }

    /// Writes the document to `path`, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] on filesystem failure.
    pub fn save(&self, path: &Path) -> Result<(), PublishError> {
        save_json(path, self)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, PublishError> {
    let content = std::fs::read_to_string(path).map_err(|e| PublishError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PublishError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PublishError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    std::fs::write(path, content).map_err(|e| PublishError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
