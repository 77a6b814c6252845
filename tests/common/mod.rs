//! Common test utilities for Droid integration tests.
//!
//! `FakeRemote` stands in for a remote machine without any network access:
//! a fake `ssh` runs the remote command through the local `sh`, and a fake
//! `scp` copies with `cp` after stripping the `host:` prefix. The "remote"
//! filesystem is a directory inside the test's temp dir.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

pub struct FakeRemote {
    pub root: TempDir,
}

impl FakeRemote {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("bin")).unwrap();
        fs::create_dir_all(root.path().join("remote")).unwrap();
        fs::create_dir_all(root.path().join("local")).unwrap();

        let remote = Self { root };
        remote.write_ssh();
        remote.write_scp(None);
        remote
    }

    /// Make every copy fail with `message` on stderr
    pub fn failing_scp(self, message: &str) -> Self {
        self.write_scp(Some(message));
        self
    }

    pub fn ssh_program(&self) -> PathBuf {
        self.root.path().join("bin/ssh")
    }

    pub fn scp_program(&self) -> PathBuf {
        self.root.path().join("bin/scp")
    }

    /// Directory playing the remote host's `/tmp/`, with trailing slash
    pub fn remote_dir(&self) -> String {
        format!("{}/", self.root.path().join("remote").display())
    }

    pub fn remote_file(&self, name: &str) -> PathBuf {
        self.root.path().join("remote").join(name)
    }

    /// Write a local artifact and return its path
    pub fn artifact(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.root.path().join("local").join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn ssh_log(&self) -> String {
        fs::read_to_string(self.root.path().join("ssh.log")).unwrap_or_default()
    }

    pub fn scp_log(&self) -> String {
        fs::read_to_string(self.root.path().join("scp.log")).unwrap_or_default()
    }

    fn write_ssh(&self) {
        let script = format!(
            r#"#!/bin/sh
for arg; do cmd="$arg"; done
echo "$@" >> "{log}"
exec sh -c "$cmd"
"#,
            log = self.root.path().join("ssh.log").display()
        );
        write_executable(&self.ssh_program(), &script);
    }

    fn write_scp(&self, failure: Option<&str>) {
        let body = match failure {
            Some(message) => format!("echo \"{}\" >&2\nexit 1\n", message),
            None => "cp \"$src\" \"${dest#*:}\"\n".to_string(),
        };
        let script = format!(
            r#"#!/bin/sh
n=$#
i=0
for arg; do
  i=$((i+1))
  if [ "$i" -eq $((n-1)) ]; then src="$arg"; fi
  dest="$arg"
done
echo "$src $dest" >> "{log}"
{body}"#,
            log = self.root.path().join("scp.log").display(),
            body = body
        );
        write_executable(&self.scp_program(), &script);
    }
}

fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// The fake remote verifies with the local `sha1sum`; skip where it is absent.
pub fn sha1sum_available() -> bool {
    Command::new("sha1sum")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
