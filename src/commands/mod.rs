//! Command handlers

pub mod check;
pub mod digest;
pub mod hosts;
pub mod sync;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use droid::config::{resolve_config_path, Config, ConfigWarning, HostConfig};
use droid::{Synchroniser, SystemHost, TransportOptions};

/// Configuration resolved for one CLI invocation
pub struct Workspace {
    pub config: Config,
    pub config_path: Option<PathBuf>,
}

impl Workspace {
    pub fn load(explicit: Option<&Path>, json: bool) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config_path = resolve_config_path(explicit, &cwd);

        let config = match &config_path {
            Some(path) => {
                let (config, warnings) = Config::load_with_warnings(path)
                    .with_context(|| format!("failed to load {}", path.display()))?;
                if !json {
                    print_config_warnings(path, &warnings);
                }
                config
            }
            None => Config::default(),
        };
        tracing::debug!(config = ?config_path, "configuration loaded");

        Ok(Self {
            config: config.with_env_overrides(),
            config_path,
        })
    }

    /// Synchroniser for the configured artifact, or `artifact` when given
    pub fn synchroniser(&self, artifact: Option<PathBuf>) -> Synchroniser {
        let artifact = artifact.or_else(|| self.config.artifact.clone());
        let remote = self.config.remote_target(artifact.as_deref());
        let synchroniser = match artifact {
            Some(path) => Synchroniser::new(path),
            None => Synchroniser::default(),
        };
        synchroniser.with_remote_target(remote)
    }

    /// System hosts for `names` (all configured hosts when empty)
    pub fn hosts(&self, names: &[String]) -> Result<Vec<SystemHost>> {
        let selected = self.config.select_hosts(names)?;
        if selected.is_empty() {
            anyhow::bail!(
                "no hosts configured; add [[hosts]] entries to {}",
                self.config_path
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| droid::config::PROJECT_CONFIG_FILE.to_string())
            );
        }
        Ok(selected
            .into_iter()
            .map(|host| system_host(host, &self.transport_options()))
            .collect())
    }

    fn transport_options(&self) -> TransportOptions {
        let transport = &self.config.transport;
        TransportOptions {
            connect_timeout: transport.connect_timeout,
            batch_mode: transport.batch_mode,
            ssh_program: transport.ssh_program.clone(),
            scp_program: transport.scp_program.clone(),
        }
    }
}

pub fn system_host(host: &HostConfig, options: &TransportOptions) -> SystemHost {
    let mut system = SystemHost::new(host.name.clone(), host.address()).with_options(options.clone());
    if let Some(user) = &host.user {
        system = system.with_user(user.clone());
    }
    if let Some(port) = host.port {
        system = system.with_port(port);
    }
    system
}

fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// JSON shape of a per-host error
pub fn error_json(err: &droid::SyncError) -> serde_json::Value {
    serde_json::json!({
        "kind": err.kind(),
        "message": err.to_string(),
    })
}
