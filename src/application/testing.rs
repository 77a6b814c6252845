//! Recording fake host for synchroniser tests

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::domain::ports::{Host, ScpClient, SshClient, TransportError};

/// Everything the synchroniser asked of a `FakeHost`
#[derive(Debug, Default, Clone)]
pub struct Calls {
    pub ssh_clients: usize,
    pub scp_clients: usize,
    pub commands: Vec<Vec<String>>,
    pub resolved: Vec<String>,
    pub copies: Vec<(PathBuf, String)>,
}

/// Host whose exit codes are scripted and whose calls are recorded.
///
/// `compare_exits` / `copy_exits` are consumed front to back; the last value
/// repeats once the list runs out.
pub struct FakeHost {
    name: String,
    compare_exits: Mutex<Vec<i32>>,
    copy_exits: Mutex<Vec<i32>>,
    copy_error: String,
    ssh_unavailable: bool,
    calls: Mutex<Calls>,
}

impl FakeHost {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            compare_exits: Mutex::new(vec![0]),
            copy_exits: Mutex::new(vec![0]),
            copy_error: String::new(),
            ssh_unavailable: false,
            calls: Mutex::new(Calls::default()),
        }
    }

    pub fn compare_exit(self, code: i32) -> Self {
        self.compare_exits_seq(&[code])
    }

    pub fn compare_exits_seq(self, codes: &[i32]) -> Self {
        *self.compare_exits.lock().unwrap() = codes.to_vec();
        self
    }

    pub fn copy_exit(self, code: i32) -> Self {
        self.copy_exits_seq(&[code])
    }

    pub fn copy_exits_seq(self, codes: &[i32]) -> Self {
        *self.copy_exits.lock().unwrap() = codes.to_vec();
        self
    }

    pub fn copy_error(mut self, output: &str) -> Self {
        self.copy_error = output.to_string();
        self
    }

    pub fn ssh_unavailable(mut self) -> Self {
        self.ssh_unavailable = true;
        self
    }

    pub fn calls(&self) -> Calls {
        self.record().clone()
    }

    fn record(&self) -> MutexGuard<'_, Calls> {
        self.calls.lock().unwrap()
    }
}

fn next_exit(codes: &Mutex<Vec<i32>>) -> i32 {
    let mut codes = codes.lock().unwrap();
    if codes.len() > 1 {
        codes.remove(0)
    } else {
        codes.first().copied().unwrap_or(0)
    }
}

impl Host for FakeHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn ssh_client(&self) -> Box<dyn SshClient + '_> {
        self.record().ssh_clients += 1;
        Box::new(FakeSsh {
            host: self,
            exit_code: -1,
        })
    }

    fn scp_client(&self) -> Box<dyn ScpClient + '_> {
        self.record().scp_clients += 1;
        Box::new(FakeScp {
            host: self,
            exit_code: -1,
            error_output: String::new(),
        })
    }

    fn resolve_remote_path(&self, path: &str) -> String {
        self.record().resolved.push(path.to_string());
        format!("user@host:{}", path)
    }
}

struct FakeSsh<'a> {
    host: &'a FakeHost,
    exit_code: i32,
}

impl SshClient for FakeSsh<'_> {
    fn exec(&mut self, command: &[String]) -> Result<(), TransportError> {
        if self.host.ssh_unavailable {
            return Err(TransportError::Spawn {
                program: "ssh".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "ssh not installed"),
            });
        }
        self.host.record().commands.push(command.to_vec());
        self.exit_code = next_exit(&self.host.compare_exits);
        Ok(())
    }

    fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

struct FakeScp<'a> {
    host: &'a FakeHost,
    exit_code: i32,
    error_output: String,
}

impl ScpClient for FakeScp<'_> {
    fn copy(&mut self, local: &Path, remote: &str) -> Result<(), TransportError> {
        self.host
            .record()
            .copies
            .push((local.to_path_buf(), remote.to_string()));
        self.exit_code = next_exit(&self.host.copy_exits);
        if self.exit_code != 0 {
            self.error_output = self.host.copy_error.clone();
        }
        Ok(())
    }

    fn exit_code(&self) -> i32 {
        self.exit_code
    }

    fn error_output(&self) -> &str {
        &self.error_output
    }
}
