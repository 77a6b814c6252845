//! Fleet runner
//!
//! Runs the synchroniser against many hosts at once. Each host gets its own
//! scoped thread; hosts that share a name are only visited once so two calls
//! never race on the same remote manifest. Retries live here, around whole
//! `sync` calls, never inside the synchroniser.

use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use super::synchroniser::{Comparison, SyncOutcome, Synchroniser};
use crate::domain::ports::{Host, TransportError};
use crate::error::{SyncError, SyncResult};

/// Caller-level retry policy
#[derive(Debug, Clone, Default)]
pub struct FleetOptions {
    /// Extra attempts after the first failure
    pub retries: u32,
    /// Pause between attempts
    pub retry_delay: Duration,
}

/// Result for one host
#[derive(Debug)]
pub struct HostReport<T> {
    pub host: String,
    pub attempts: u32,
    pub result: SyncResult<T>,
}

impl<T> HostReport<T> {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Sync every host in parallel, in input order.
pub fn sync_all<H: Host>(
    synchroniser: &Synchroniser,
    hosts: &[H],
    options: &FleetOptions,
) -> Vec<HostReport<SyncOutcome>> {
    run_all(hosts, options, |host| synchroniser.sync(host))
}

/// Compare every host in parallel without copying.
pub fn check_all<H: Host>(
    synchroniser: &Synchroniser,
    hosts: &[H],
    options: &FleetOptions,
) -> Vec<HostReport<Comparison>> {
    run_all(hosts, options, |host| synchroniser.check(host))
}

fn run_all<H, T, F>(hosts: &[H], options: &FleetOptions, op: F) -> Vec<HostReport<T>>
where
    H: Host,
    T: Send,
    F: Fn(&H) -> SyncResult<T> + Sync,
{
    let mut seen = HashSet::new();
    let unique: Vec<&H> = hosts
        .iter()
        .filter(|host| {
            let fresh = seen.insert(host.name());
            if !fresh {
                warn!(host = host.name(), "host listed more than once, ignoring duplicate");
            }
            fresh
        })
        .collect();

    let op = &op;
    thread::scope(|scope| {
        let handles: Vec<_> = unique
            .iter()
            .map(|host| scope.spawn(move || with_retries(*host, options, op)))
            .collect();

        handles
            .into_iter()
            .zip(&unique)
            .map(|(handle, host)| {
                handle.join().unwrap_or_else(|_| HostReport {
                    host: host.name().to_string(),
                    attempts: 1,
                    result: Err(SyncError::Transport {
                        host: host.name().to_string(),
                        source: TransportError::Panicked,
                    }),
                })
            })
            .collect()
    })
}

fn with_retries<H, T, F>(host: &H, options: &FleetOptions, op: &F) -> HostReport<T>
where
    H: Host,
    F: Fn(&H) -> SyncResult<T>,
{
    let mut attempts = 0;
    loop {
        attempts += 1;
        let result = op(host);

        let retry = attempts <= options.retries
            && matches!(&result, Err(err) if is_retryable(err));
        if !retry {
            if attempts > 1 && result.is_ok() {
                info!(host = host.name(), attempts, "succeeded after retry");
            }
            return HostReport {
                host: host.name().to_string(),
                attempts,
                result,
            };
        }

        if let Err(err) = &result {
            warn!(host = host.name(), attempt = attempts, error = %err, "attempt failed, retrying");
        }
        if !options.retry_delay.is_zero() {
            thread::sleep(options.retry_delay);
        }
    }
}

/// Local artifact problems will not fix themselves between attempts.
fn is_retryable(err: &SyncError) -> bool {
    matches!(
        err,
        SyncError::UploadFailure { .. } | SyncError::Transport { .. }
    )
}
