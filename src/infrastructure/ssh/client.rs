//! `ssh` command execution

use std::process::{Command, Stdio};

use tracing::debug;

use super::SystemHost;
use crate::domain::ports::{SshClient, TransportError};

/// Runs commands on a `SystemHost` through the `ssh` binary
pub struct SystemSshClient<'a> {
    host: &'a SystemHost,
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl<'a> SystemSshClient<'a> {
    pub fn new(host: &'a SystemHost) -> Self {
        Self {
            host,
            exit_code: -1,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Captured standard output of the last command
    pub fn output(&self) -> &str {
        &self.stdout
    }

    /// Captured standard error of the last command
    pub fn error_output(&self) -> &str {
        &self.stderr
    }
}

impl SshClient for SystemSshClient<'_> {
    fn exec(&mut self, command: &[String]) -> Result<(), TransportError> {
        let program = &self.host.options().ssh_program;
        let output = Command::new(program)
            .args(self.host.ssh_args())
            .args(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| TransportError::Spawn {
                program: program.clone(),
                source,
            })?;

        self.exit_code = output.status.code().unwrap_or(-1);
        self.stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        self.stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(
            destination = %self.host.destination(),
            exit_code = self.exit_code,
            "ssh finished"
        );
        Ok(())
    }

    fn exit_code(&self) -> i32 {
        self.exit_code
    }
}
