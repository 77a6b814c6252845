//! Host Port
//!
//! Abstracts a single remote machine as a set of capabilities: run a shell
//! command over SSH, copy a file over SCP, and turn a remote path into a
//! transport-qualified address. The synchroniser only ever talks to these
//! traits, so tests can substitute recording fakes for the real transport.

use std::path::Path;

use thiserror::Error;

/// Error raised when a capability cannot run at all.
///
/// A remote command that runs and exits non-zero is *not* a transport error;
/// the exit code is recorded on the client instead.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The transport program could not be started
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The worker driving this host panicked
    #[error("worker thread panicked")]
    Panicked,
}

/// Capability to execute a command on the remote host.
pub trait SshClient {
    /// Run `command` on the remote host and record its exit code.
    ///
    /// The elements are joined by the remote shell, so a single element
    /// containing `&&` runs as one atomic invocation.
    fn exec(&mut self, command: &[String]) -> Result<(), TransportError>;

    /// Exit code of the last `exec` call (`-1` if the process died on a signal)
    fn exit_code(&self) -> i32;
}

/// Capability to copy a local file onto the remote host.
pub trait ScpClient {
    /// Copy `local` to `remote`, recording the exit code and error output.
    fn copy(&mut self, local: &Path, remote: &str) -> Result<(), TransportError>;

    /// Exit code of the last `copy` call
    fn exit_code(&self) -> i32;

    /// Captured error output of the last `copy` call
    fn error_output(&self) -> &str;
}

/// A remote machine the synchroniser can target.
///
/// Implementations:
/// - `SystemHost` - OpenSSH `ssh`/`scp` binaries
/// - recording fakes in tests
pub trait Host: Send + Sync {
    /// Host identity, used in logs and failure messages
    fn name(&self) -> &str;

    /// Open the SSH capability
    fn ssh_client(&self) -> Box<dyn SshClient + '_>;

    /// Open the SCP capability
    fn scp_client(&self) -> Box<dyn ScpClient + '_>;

    /// Resolve a remote path into a transport-qualified address
    /// (e.g. `/tmp/` -> `user@host:/tmp/`)
    fn resolve_remote_path(&self, path: &str) -> String;
}
