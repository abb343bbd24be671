//! Ledger collection command.
//!
//! Per-project failures are reported and skipped; a malformed amount in
//! one project's transactions aborts only that project's ingestion.

use std::collections::BTreeMap;

use chrono::Utc;
use viewdeck_core::{AppConfig, ProjectLedger};
use viewdeck_ledger::{expense_total, income_total, ingest, LedgerClient};
use viewdeck_publish::LedgerDocument;

use crate::collect::filter_projects;

/// Fetch and normalize ledger transactions for the configured projects,
/// rebuilding the ledger document from scratch.
///
/// # Errors
///
/// Returns an error if the roster cannot be loaded, the filter resolves
/// to nothing, no API token is configured, the client cannot be
/// constructed, or the final document write fails. Per-project failures
/// are reported and skipped.
pub(crate) async fn run_collect_ledger(
    config: &AppConfig,
    project_filter: Option<&str>,
) -> anyhow::Result<()> {
    let roster = viewdeck_core::load_projects(&config.projects_path)?;
    let projects = filter_projects(roster.projects, project_filter)?;

    let token = config
        .ledger_api_token
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("VIEWDECK_LEDGER_API_TOKEN is not set"))?;

    let client = LedgerClient::with_base_url(
        token,
        config.ledger_request_timeout_secs,
        &config.ledger_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build ledger client: {e}"))?;

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let mut document = LedgerDocument {
        updated_at: today.clone(),
        projects: BTreeMap::new(),
    };

    for project in &projects {
        let Some(ledger_id) = project.ledger_project_id else {
            tracing::warn!(
                project = %project.name,
                "skipping project — no ledger_project_id configured"
            );
            continue;
        };

        let transactions = match client.fetch_transactions(ledger_id).await {
            Ok(raw) => match ingest(&raw) {
                Ok(transactions) => transactions,
                Err(e) => {
                    eprintln!("error: failed to ingest ledger for {}: {e}", project.name);
                    continue;
                }
            },
            Err(e) => {
                eprintln!("error: failed to fetch ledger for {}: {e}", project.name);
                continue;
            }
        };

        println!(
            "  {}: {} transactions, income {}, expense {}",
            project.name,
            transactions.len(),
            income_total(&transactions),
            expense_total(&transactions)
        );

        document.projects.insert(
            project.name.clone(),
            ProjectLedger {
                updated_at: today.clone(),
                transactions,
            },
        );
    }

    document.save(&config.ledger_data_path)?;

    println!(
        "collected ledgers for {} projects into {}",
        document.projects.len(),
        config.ledger_data_path.display()
    );

    Ok(())
}
