//! OpenSSH transport
//!
//! Implements the `Host` port by shelling out to the system `ssh` and `scp`
//! binaries, so the user's `~/.ssh/config`, agent and known hosts apply.
//! Timeouts belong here, not to the synchroniser: every invocation carries
//! `ConnectTimeout`, and `BatchMode` keeps a password prompt from hanging it.

mod client;
mod copy;

pub use client::SystemSshClient;
pub use copy::SystemScpClient;

use crate::domain::ports::{Host, ScpClient, SshClient};

/// Options shared by every `ssh`/`scp` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    /// Seconds before giving up on connecting
    pub connect_timeout: u64,
    /// Refuse interactive authentication
    pub batch_mode: bool,
    pub ssh_program: String,
    pub scp_program: String,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: 10,
            batch_mode: true,
            ssh_program: "ssh".to_string(),
            scp_program: "scp".to_string(),
        }
    }
}

/// A host reached through the system OpenSSH client
#[derive(Debug, Clone)]
pub struct SystemHost {
    name: String,
    address: String,
    user: Option<String>,
    port: Option<u16>,
    options: TransportOptions,
}

impl SystemHost {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            user: None,
            port: None,
            options: TransportOptions::default(),
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_options(mut self, options: TransportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    /// `user@address`, or just `address` when no user is set
    pub fn destination(&self) -> String {
        match &self.user {
            Some(user) => format!("{}@{}", user, self.address),
            None => self.address.clone(),
        }
    }

    /// `-o` options common to `ssh` and `scp`
    fn common_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.options.batch_mode {
            args.push("-o".to_string());
            args.push("BatchMode=yes".to_string());
        }
        args.push("-o".to_string());
        args.push(format!("ConnectTimeout={}", self.options.connect_timeout));
        args
    }

    /// Arguments for `ssh`, ending with the destination; the command follows
    pub(crate) fn ssh_args(&self) -> Vec<String> {
        let mut args = self.common_args();
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        args.push(self.destination());
        args
    }

    /// Arguments for `scp`, before the source and destination
    pub(crate) fn scp_args(&self) -> Vec<String> {
        let mut args = self.common_args();
        if let Some(port) = self.port {
            args.push("-P".to_string());
            args.push(port.to_string());
        }
        args
    }
}

impl Host for SystemHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn ssh_client(&self) -> Box<dyn SshClient + '_> {
        Box::new(SystemSshClient::new(self))
    }

    fn scp_client(&self) -> Box<dyn ScpClient + '_> {
        Box::new(SystemScpClient::new(self))
    }

    fn resolve_remote_path(&self, path: &str) -> String {
        format!("{}:{}", self.destination(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_includes_user_when_set() {
        let host = SystemHost::new("web1", "web1.example.com").with_user("deploy");
        assert_eq!(host.destination(), "deploy@web1.example.com");
    }

    #[test]
    fn destination_is_address_without_user() {
        let host = SystemHost::new("web1", "10.0.0.5");
        assert_eq!(host.destination(), "10.0.0.5");
    }

    #[test]
    fn resolve_remote_path_qualifies_with_destination() {
        let host = SystemHost::new("web1", "host").with_user("user");
        assert_eq!(host.resolve_remote_path("/tmp/"), "user@host:/tmp/");
    }

    #[test]
    fn ssh_args_carry_timeout_batch_mode_and_port() {
        let host = SystemHost::new("web1", "host").with_port(2222);
        assert_eq!(
            host.ssh_args(),
            vec![
                "-o",
                "BatchMode=yes",
                "-o",
                "ConnectTimeout=10",
                "-p",
                "2222",
                "host"
            ]
        );
    }

    #[test]
    fn scp_args_use_capital_p_for_port() {
        let host = SystemHost::new("web1", "host").with_port(2222);
        let args = host.scp_args();
        assert_eq!(&args[args.len() - 2..], ["-P", "2222"]);
    }

    #[test]
    fn batch_mode_can_be_disabled() {
        let host = SystemHost::new("web1", "host").with_options(TransportOptions {
            batch_mode: false,
            connect_timeout: 3,
            ..TransportOptions::default()
        });
        assert_eq!(host.ssh_args(), vec!["-o", "ConnectTimeout=3", "host"]);
    }

    #[test]
    fn name_is_independent_of_address() {
        let host = SystemHost::new("web1", "10.0.0.5");
        assert_eq!(Host::name(&host), "web1");
    }
}
