//! Check command handler
//!
//! Compares every selected host against the local artifact without copying.

use std::path::PathBuf;

use anyhow::Result;

use droid::{check_all, Comparison, FleetOptions, HostReport};

use super::{error_json, Workspace};

/// Returns whether every host could be compared; stale hosts are not failures
pub fn cmd_check(
    ws: &Workspace,
    artifact: Option<PathBuf>,
    host_names: &[String],
    json: bool,
) -> Result<bool> {
    let synchroniser = ws.synchroniser(artifact);
    let digest = synchroniser.digest()?;
    let hosts = ws.hosts(host_names)?;

    let reports = check_all(&synchroniser, &hosts, &FleetOptions::default());
    let all_ok = reports.iter().all(HostReport::is_success);

    if json {
        let items: Vec<_> = reports
            .iter()
            .map(|r| match &r.result {
                Ok(comparison) => serde_json::json!({
                    "host": r.host,
                    "status": if comparison.is_match() { "current" } else { "stale" },
                }),
                Err(err) => serde_json::json!({
                    "host": r.host,
                    "status": "failed",
                    "error": error_json(err),
                }),
            })
            .collect();
        let out = serde_json::json!({
            "command": "check",
            "digest": digest.as_str(),
            "remote_path": synchroniser.remote_target().artifact_path(),
            "hosts": items,
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(all_ok);
    }

    let width = reports.iter().map(|r| r.host.len()).max().unwrap_or(0);
    for report in &reports {
        match &report.result {
            Ok(Comparison::Match) => println!("✓ {:width$}  up to date", report.host),
            Ok(Comparison::Mismatch) => println!("• {:width$}  stale", report.host),
            Err(err) => println!("✗ {:width$}  {}", report.host, err),
        }
    }

    Ok(all_ok)
}
