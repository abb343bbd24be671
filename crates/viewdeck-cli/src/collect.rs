//! Metrics collection command.
//!
//! Per-project failures are logged and skipped rather than propagated so
//! a single bad spreadsheet does not abort the full run; the document is
//! written once at the end from whatever succeeded.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use viewdeck_core::{AppConfig, ChannelRecord, DailySnapshot, ProjectConfig, ProjectSeries};
use viewdeck_publish::{MetricsDocument, ProjectEntry};
use viewdeck_sheets::{parse_channels, partition_date_tabs, SheetsClient};

/// Resolves the projects to process for a collect run.
///
/// If `filter` is `Some(name)`, selects that single project (matched
/// case-insensitively) and errors if it is not in the roster. If `None`,
/// returns the full roster.
pub(crate) fn filter_projects(
    all: Vec<ProjectConfig>,
    filter: Option<&str>,
) -> anyhow::Result<Vec<ProjectConfig>> {
    match filter {
        Some(name) => {
            let selected: Vec<ProjectConfig> = all
                .into_iter()
                .filter(|p| p.name.eq_ignore_ascii_case(name))
                .collect();
            if selected.is_empty() {
                anyhow::bail!("project '{name}' not found in roster");
            }
            Ok(selected)
        }
        None => Ok(all),
    }
}

/// Collect spreadsheet metrics for the configured projects and rebuild
/// the metrics document from scratch.
///
/// When `dry_run` is `true` the function prints what would be collected
/// and returns without fetching anything.
///
/// # Errors
///
/// Returns an error if the roster cannot be loaded, the filter resolves
/// to nothing, the client cannot be constructed, or the final document
/// write fails. Per-project fetch/series failures are logged and skipped,
/// not propagated.
pub(crate) async fn run_collect_metrics(
    config: &AppConfig,
    project_filter: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let roster = viewdeck_core::load_projects(&config.projects_path)?;
    let projects = filter_projects(roster.projects, project_filter)?;

    if dry_run {
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        println!(
            "dry-run: would collect metrics for {} projects: [{}]",
            projects.len(),
            names.join(", ")
        );
        return Ok(());
    }

    let client = SheetsClient::with_base_url(
        config.sheets_api_key.as_deref(),
        config.sheets_request_timeout_secs,
        config.sheets_max_retries,
        config.sheets_retry_backoff_base_secs,
        &config.sheets_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build sheets client: {e}"))?;

    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut document = MetricsDocument {
        generated_at: generated_at.clone(),
        projects: BTreeMap::new(),
    };

    let project_count = projects.len();
    let mut failed = 0usize;

    for project in &projects {
        match collect_project(&client, config, project, &generated_at).await {
            Ok(entry) => {
                let days = entry.daily.len();
                let total = entry.daily.latest().map_or(0, |s| s.total_views);
                println!("  {}: {days} days, {total} total views", project.name);
                document.projects.insert(project.name.clone(), entry);
            }
            Err(e) => {
                failed += 1;
                eprintln!("error: failed to collect metrics for {}: {e}", project.name);
            }
        }
    }

    document.save(&config.metrics_data_path)?;

    println!(
        "collected {} of {project_count} projects into {}",
        project_count - failed,
        config.metrics_data_path.display()
    );

    Ok(())
}

/// Collects one project: lists tabs, fetches every date-labeled tab in
/// ascending label order with the configured pacing delay, and assembles
/// the snapshot series.
///
/// Per-tab fetch failures are logged and skipped; the series is built
/// from the tabs that succeeded. A duplicate date label fails the whole
/// project — aggregating the same day twice would double-count.
async fn collect_project(
    client: &SheetsClient,
    config: &AppConfig,
    project: &ProjectConfig,
    updated_at: &str,
) -> anyhow::Result<ProjectEntry> {
    let sheets = client.list_sheets(&project.spreadsheet_id).await?;
    let (dated, other) = partition_date_tabs(sheets);
    tracing::info!(
        project = %project.name,
        dated_tabs = dated.len(),
        other_tabs = other.len(),
        "listed spreadsheet tabs"
    );

    let mut snapshots: Vec<DailySnapshot> = Vec::with_capacity(dated.len());
    // Roster as of the most recent labeled tab that fetched successfully.
    let mut latest_channels: Vec<ChannelRecord> = Vec::new();
    let mut is_first_fetch = true;

    for tab in &dated {
        if !is_first_fetch && config.sheets_pacing_delay_ms > 0 {
            // 60 req/min upstream limit; pacing applies per sheet fetched.
            tokio::time::sleep(Duration::from_millis(config.sheets_pacing_delay_ms)).await;
        }
        is_first_fetch = false;

        let rows = match client.fetch_values(&project.spreadsheet_id, &tab.title).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(
                    project = %project.name,
                    tab = %tab.title,
                    error = %e,
                    "skipping tab — fetch failed"
                );
                continue;
            }
        };

        let channels = parse_channels(&rows);
        tracing::debug!(
            project = %project.name,
            tab = %tab.title,
            channels = channels.len(),
            "parsed tab"
        );
        snapshots.push(DailySnapshot::from_records(tab.title.trim(), &channels));
        latest_channels = channels;
    }

    let daily = ProjectSeries::from_snapshots(snapshots)?;

    Ok(ProjectEntry {
        name: project.name.clone(),
        source_id: project.spreadsheet_id.clone(),
        color: project.color.clone(),
        budget: project.budget,
        channels: latest_channels,
        daily,
        updated_at: updated_at.to_owned(),
    })
}
