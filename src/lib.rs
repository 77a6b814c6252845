//! Droid - project automation with remote binary synchronisation
//!
//! Before remote work runs on a host, Droid makes sure the host holds the
//! same artifact as the local build. A SHA-1 digest is compared remotely in a
//! single SSH command and the artifact is copied over SCP only when the
//! remote copy is missing or stale.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    check_all, sync_all, Comparison, FleetOptions, HostReport, SyncOutcome, Synchroniser,
};
pub use config::{Config, ConfigWarning, HostConfig};
pub use domain::ports::{Host, ScpClient, SshClient, TransportError};
pub use domain::value_objects::{ChecksumTool, ContentDigest, RemoteTarget};
pub use error::{ConfigError, SyncError, SyncResult};
pub use infrastructure::{SystemHost, TransportOptions};
