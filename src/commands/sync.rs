//! Sync command handler
//!
//! Brings every selected host up to date with the local artifact.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use droid::{sync_all, FleetOptions, HostReport, SyncOutcome};

use super::{error_json, Workspace};

pub struct SyncArgs {
    pub artifact: Option<PathBuf>,
    pub hosts: Vec<String>,
    pub retries: u32,
    pub retry_delay: u64,
}

/// Returns whether every host ended up in sync
pub fn cmd_sync(ws: &Workspace, args: SyncArgs, json: bool) -> Result<bool> {
    let synchroniser = ws.synchroniser(args.artifact);
    // Local artifact problems are the same for every host; report them once
    let digest = synchroniser.digest()?;
    let hosts = ws.hosts(&args.hosts)?;

    let options = FleetOptions {
        retries: args.retries,
        retry_delay: Duration::from_secs(args.retry_delay),
    };
    let reports = sync_all(&synchroniser, &hosts, &options);
    let all_ok = reports.iter().all(HostReport::is_success);

    if json {
        let items: Vec<_> = reports
            .iter()
            .map(|r| match &r.result {
                Ok(outcome) => serde_json::json!({
                    "host": r.host,
                    "status": outcome,
                    "attempts": r.attempts,
                }),
                Err(err) => serde_json::json!({
                    "host": r.host,
                    "status": "failed",
                    "attempts": r.attempts,
                    "error": error_json(err),
                }),
            })
            .collect();
        let out = serde_json::json!({
            "command": "sync",
            "artifact": synchroniser.artifact().map(|p| p.display().to_string()),
            "remote_path": synchroniser.remote_target().artifact_path(),
            "digest": digest.as_str(),
            "finished_at": chrono::Utc::now(),
            "success": all_ok,
            "hosts": items,
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(all_ok);
    }

    let width = reports.iter().map(|r| r.host.len()).max().unwrap_or(0);
    let (mut skipped, mut copied, mut failed) = (0, 0, 0);
    for report in &reports {
        match &report.result {
            Ok(SyncOutcome::Skipped) => {
                skipped += 1;
                println!("✓ {:width$}  up to date", report.host);
            }
            Ok(SyncOutcome::Copied) => {
                copied += 1;
                println!("✓ {:width$}  copied", report.host);
            }
            Err(err) => {
                failed += 1;
                println!("✗ {:width$}  {}", report.host, err);
            }
        }
    }
    println!(
        "\n{} up to date, {} copied, {} failed ({})",
        skipped,
        copied,
        failed,
        digest.as_str()
    );

    Ok(all_ok)
}
