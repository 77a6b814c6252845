//! Error types for Droid
//!
//! Uses `thiserror` for library errors; the CLI wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::TransportError;

/// Result type alias for synchronisation
pub type SyncResult<T> = Result<T, SyncError>;

/// Failure of a single `sync` call.
///
/// Every variant is fatal to the call that raised it; nothing is retried
/// inside the synchroniser.
#[derive(Error, Debug)]
pub enum SyncError {
    /// No local artifact path was configured
    #[error("Local artifact is missing")]
    MissingLocalArtifact,

    /// The configured artifact does not exist, is not a file, or cannot be read
    #[error("Unable to read the artifact file {}.", path.display())]
    UnreadableArtifact { path: PathBuf },

    /// The copy capability reported a non-zero exit code
    #[error("Unable to upload artifact to {host}: {output}")]
    UploadFailure { host: String, output: String },

    /// A capability could not run at all
    #[error("Transport failure on {host}: {source}")]
    Transport {
        host: String,
        #[source]
        source: TransportError,
    },
}

impl SyncError {
    /// Short machine-readable kind, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::MissingLocalArtifact => "missing_local_artifact",
            SyncError::UnreadableArtifact { .. } => "unreadable_artifact",
            SyncError::UploadFailure { .. } => "upload_failure",
            SyncError::Transport { .. } => "transport",
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("invalid config in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Host selected on the command line is not in the inventory
    #[error("unknown host '{name}'")]
    UnknownHost { name: String },
}
