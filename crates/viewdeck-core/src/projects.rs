use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One tracked project, as configured in `projects.yaml`.
///
/// The roster replaces any process-wide project list: the pipeline entry
/// points take the loaded configuration explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    /// Identifier of the spreadsheet holding this project's metric tabs.
    pub spreadsheet_id: String,
    /// Display color for the dashboard, `#rrggbb`.
    pub color: String,
    /// Campaign budget in whole currency units.
    pub budget: u64,
    /// Project ID in the ledger system; projects without one are skipped
    /// by `collect ledger`.
    #[serde(default)]
    pub ledger_project_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsFile {
    pub projects: Vec<ProjectConfig>,
}

/// Load and validate the project roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_projects(path: &Path) -> Result<ProjectsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProjectsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let projects_file: ProjectsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::ProjectsFileParse)?;

    validate_projects(&projects_file)?;

    Ok(projects_file)
}

fn validate_projects(projects_file: &ProjectsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for project in &projects_file.projects {
        if project.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "project name must be non-empty".to_string(),
            ));
        }

        if project.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "project '{}' has an empty spreadsheet_id",
                project.name
            )));
        }

        if !is_hex_color(&project.color) {
            return Err(ConfigError::Validation(format!(
                "project '{}' has invalid color '{}'; expected #rrggbb",
                project.name, project.color
            )));
        }

        let lower_name = project.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate project name: '{}'",
                project.name
            )));
        }
    }

    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
