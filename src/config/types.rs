//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    ChecksumTool, RemoteTarget, DEFAULT_ARTIFACT_NAME, DEFAULT_REMOTE_DIR,
};
use crate::error::ConfigError;

use super::loader::{self, ConfigWarning};

/// Remote layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_dir")]
    pub directory: String,

    /// Full remote artifact path; defaults to `<directory><artifact file name>`
    #[serde(default)]
    pub artifact_path: Option<String>,

    /// Defaults to `<artifact_path>.sha1`
    #[serde(default)]
    pub manifest_path: Option<String>,

    #[serde(default)]
    pub checksum_tool: ChecksumTool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            directory: default_remote_dir(),
            artifact_path: None,
            manifest_path: None,
            checksum_tool: ChecksumTool::default(),
        }
    }
}

fn default_remote_dir() -> String {
    DEFAULT_REMOTE_DIR.to_string()
}

/// SSH/SCP invocation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    #[serde(default = "default_true")]
    pub batch_mode: bool,

    #[serde(default = "default_ssh_program")]
    pub ssh_program: String,

    #[serde(default = "default_scp_program")]
    pub scp_program: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            batch_mode: true,
            ssh_program: default_ssh_program(),
            scp_program: default_scp_program(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_ssh_program() -> String {
    "ssh".to_string()
}

fn default_scp_program() -> String {
    "scp".to_string()
}

/// One entry of the host inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    pub name: String,

    /// Hostname or IP; the name is used when omitted
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,
}

impl HostConfig {
    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or(&self.name)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Local artifact to keep in sync
    #[serde(default)]
    pub artifact: Option<PathBuf>,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default)]
    pub hosts: Vec<HostConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Apply `DROID_*` environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Remote layout for `artifact`
    pub fn remote_target(&self, artifact: Option<&Path>) -> RemoteTarget {
        let target = match &self.remote.artifact_path {
            Some(path) => RemoteTarget::new(path.clone()),
            None => {
                let name = artifact
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| DEFAULT_ARTIFACT_NAME.to_string());
                RemoteTarget::in_directory(&self.remote.directory, &name)
            }
        };
        let target = match &self.remote.manifest_path {
            Some(manifest) => target.with_manifest_path(manifest.clone()),
            None => target,
        };
        target.with_checksum_tool(self.remote.checksum_tool)
    }

    /// Look up a host by name
    pub fn host(&self, name: &str) -> Option<&HostConfig> {
        self.hosts.iter().find(|h| h.name == name)
    }

    /// Hosts named in `names`, or every host when `names` is empty
    pub fn select_hosts(&self, names: &[String]) -> Result<Vec<&HostConfig>, ConfigError> {
        if names.is_empty() {
            return Ok(self.hosts.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                self.host(name)
                    .ok_or_else(|| ConfigError::UnknownHost { name: name.clone() })
            })
            .collect()
    }
}
