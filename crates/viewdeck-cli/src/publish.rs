//! Publish command: inject serialized payloads into the static dashboard
//! documents.
//!
//! Three anchors are rewritten per target: `PROJECTS_DATA`, `LEDGER_DATA`
//! and `UPDATED_AT`. A missing anchor is a warning, not a silent no-op —
//! the command exits non-zero if any substitution failed, so a broken
//! template cannot keep shipping stale data unnoticed.

use viewdeck_core::AppConfig;
use viewdeck_publish::{
    merge_assignment, to_compact_json, LedgerDocument, MetricsDocument, PublishError,
};

pub(crate) fn run_publish(config: &AppConfig, targets: &[String]) -> anyhow::Result<()> {
    let metrics = MetricsDocument::load(&config.metrics_data_path)?;
    let metrics_payload = to_compact_json(&metrics.projects)?;
    let updated_payload = to_compact_json(&metrics.generated_at)?;

    // The ledger document is optional: publishing metrics-only is fine as
    // long as the template has no LEDGER_DATA anchor or accepts a stale one.
    let ledger_payload = match LedgerDocument::load(&config.ledger_data_path) {
        Ok(doc) => Some(to_compact_json(&doc.projects)?),
        Err(e) => {
            tracing::warn!(
                path = %config.ledger_data_path.display(),
                error = %e,
                "ledger document unavailable — LEDGER_DATA anchors left unchanged"
            );
            None
        }
    };

    let mut payloads: Vec<(&str, &str)> = vec![
        ("PROJECTS_DATA", metrics_payload.as_str()),
        ("UPDATED_AT", updated_payload.as_str()),
    ];
    if let Some(ledger) = ledger_payload.as_deref() {
        payloads.push(("LEDGER_DATA", ledger));
    }

    let mut missing = 0usize;

    for target in targets {
        let original = std::fs::read_to_string(target)
            .map_err(|e| anyhow::anyhow!("failed to read publish target {target}: {e}"))?;

        let mut current = original;
        for (name, payload) in &payloads {
            match merge_assignment(&current, name, payload) {
                Ok(updated) => current = updated,
                Err(PublishError::PlaceholderMissing { name }) => {
                    missing += 1;
                    tracing::warn!(path = %target, anchor = %name, "placeholder not found in publish target");
                }
                Err(e) => return Err(e.into()),
            }
        }

        std::fs::write(target, current)
            .map_err(|e| anyhow::anyhow!("failed to write publish target {target}: {e}"))?;
        println!("  {target} — updated");
    }

    if missing > 0 {
        anyhow::bail!("{missing} placeholder(s) missing across {} target(s)", targets.len());
    }

    Ok(())
}
