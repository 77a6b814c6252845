//! `scp` file upload

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::SystemHost;
use crate::domain::ports::{ScpClient, TransportError};

/// Copies files onto a `SystemHost` through the `scp` binary
pub struct SystemScpClient<'a> {
    host: &'a SystemHost,
    exit_code: i32,
    stderr: String,
}

impl<'a> SystemScpClient<'a> {
    pub fn new(host: &'a SystemHost) -> Self {
        Self {
            host,
            exit_code: -1,
            stderr: String::new(),
        }
    }
}

impl ScpClient for SystemScpClient<'_> {
    fn copy(&mut self, local: &Path, remote: &str) -> Result<(), TransportError> {
        let program = &self.host.options().scp_program;
        let output = Command::new(program)
            .args(self.host.scp_args())
            .arg(local)
            .arg(remote)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .output()
            .map_err(|source| TransportError::Spawn {
                program: program.clone(),
                source,
            })?;

        self.exit_code = output.status.code().unwrap_or(-1);
        // Trailing newline only; the rest is reported as scp wrote it
        self.stderr = String::from_utf8_lossy(&output.stderr)
            .trim_end()
            .to_string();
        debug!(
            local = %local.display(),
            remote,
            exit_code = self.exit_code,
            "scp finished"
        );
        Ok(())
    }

    fn exit_code(&self) -> i32 {
        self.exit_code
    }

    fn error_output(&self) -> &str {
        &self.stderr
    }
}
