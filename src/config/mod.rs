//! Configuration module for Droid
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DROID_*)
//! 3. Config file (`--config`, `DROID_CONFIG`, `./droid.toml`, `~/.config/droid/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{resolve_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, HostConfig, RemoteConfig, TransportConfig};
