//! Synchroniser
//!
//! Makes sure a remote host holds the same bytes as the local artifact before
//! anything on that host depends on it. The protocol per call:
//!
//! 1. Digest the local artifact (SHA-1, recomputed every call)
//! 2. Write a manifest on the host and verify it there, in one SSH command
//! 3. Exit 0 means the copy is current: done, SCP is never opened
//! 4. Otherwise copy the artifact over SCP and check the copy's exit code
//!
//! A missing remote artifact fails verification just like a stale one, so both
//! take the copy path.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::ports::Host;
use crate::domain::value_objects::{
    ContentDigest, RemoteTarget, DEFAULT_ARTIFACT_NAME, DEFAULT_REMOTE_DIR,
};
use crate::error::{SyncError, SyncResult};

/// Successful result of one `sync` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncOutcome {
    /// Remote digest matched, nothing copied
    Skipped,
    /// Remote digest differed, artifact copied
    Copied,
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::Skipped => f.write_str("skipped"),
            SyncOutcome::Copied => f.write_str("copied"),
        }
    }
}

/// Result of comparing without copying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Match,
    Mismatch,
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

/// Keeps remote hosts supplied with the current local artifact.
///
/// Holds no per-host state, so one instance may serve many hosts from
/// many threads. Two calls against the *same* host race on its manifest
/// and must be serialised by the caller.
#[derive(Debug, Clone, Default)]
pub struct Synchroniser {
    artifact: Option<PathBuf>,
    remote: RemoteTarget,
}

impl Synchroniser {
    /// Synchroniser for `artifact`, targeting `/tmp/<file name>` remotely.
    ///
    /// The path is not checked here; it may not exist yet.
    pub fn new(artifact: impl Into<PathBuf>) -> Self {
        let artifact: PathBuf = artifact.into();
        if artifact.as_os_str().is_empty() {
            return Self::default();
        }
        let name = artifact_name(&artifact);
        let remote = RemoteTarget::in_directory(DEFAULT_REMOTE_DIR, &name);
        Self {
            artifact: Some(artifact),
            remote,
        }
    }

    /// Replace the remote layout
    pub fn with_remote_target(mut self, remote: RemoteTarget) -> Self {
        self.remote = remote;
        self
    }

    pub fn artifact(&self) -> Option<&Path> {
        self.artifact.as_deref()
    }

    pub fn remote_target(&self) -> &RemoteTarget {
        &self.remote
    }

    /// Digest of the local artifact as it is right now
    pub fn digest(&self) -> SyncResult<ContentDigest> {
        let path = self.local_artifact()?;
        let unreadable = || SyncError::UnreadableArtifact {
            path: path.to_path_buf(),
        };

        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(unreadable()),
        }
        ContentDigest::from_file(path).map_err(|_| unreadable())
    }

    /// Compare the remote copy against the local artifact without copying.
    pub fn check(&self, host: &dyn Host) -> SyncResult<Comparison> {
        let digest = self.digest()?;
        self.compare(host, &digest)
    }

    /// Bring `host` up to date with the local artifact.
    pub fn sync(&self, host: &dyn Host) -> SyncResult<SyncOutcome> {
        let digest = self.digest()?;

        if self.compare(host, &digest)?.is_match() {
            info!(host = host.name(), "remote artifact up to date, skipping copy");
            return Ok(SyncOutcome::Skipped);
        }

        let local = self.local_artifact()?;
        let destination = self.copy_destination(host, local);
        info!(
            host = host.name(),
            destination = %destination,
            "remote artifact stale or missing, copying"
        );

        let mut scp = host.scp_client();
        scp.copy(local, &destination)
            .map_err(|source| SyncError::Transport {
                host: host.name().to_string(),
                source,
            })?;

        if scp.exit_code() != 0 {
            warn!(host = host.name(), exit_code = scp.exit_code(), "copy failed");
            return Err(SyncError::UploadFailure {
                host: host.name().to_string(),
                output: scp.error_output().to_string(),
            });
        }

        Ok(SyncOutcome::Copied)
    }

    fn compare(&self, host: &dyn Host, digest: &ContentDigest) -> SyncResult<Comparison> {
        let command = self.remote.compare_command(digest);
        debug!(host = host.name(), %digest, command = %command, "comparing remote artifact");

        let mut ssh = host.ssh_client();
        ssh.exec(&[command]).map_err(|source| SyncError::Transport {
            host: host.name().to_string(),
            source,
        })?;

        let code = ssh.exit_code();
        debug!(host = host.name(), exit_code = code, "digest verification finished");
        Ok(if code == 0 {
            Comparison::Match
        } else {
            Comparison::Mismatch
        })
    }

    fn local_artifact(&self) -> SyncResult<&Path> {
        self.artifact
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(SyncError::MissingLocalArtifact)
    }

    /// scp keeps the source file name when the destination is a directory,
    /// so copy into the directory when the names agree and to the full path
    /// otherwise.
    fn copy_destination(&self, host: &dyn Host, local: &Path) -> String {
        let local_name = local.file_name().map(|n| n.to_string_lossy());
        match self.remote.directory() {
            Some(dir) if local_name.as_deref() == Some(self.remote.file_name()) => {
                host.resolve_remote_path(dir)
            }
            _ => host.resolve_remote_path(self.remote.artifact_path()),
        }
    }
}

fn artifact_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_ARTIFACT_NAME.to_string())
}
