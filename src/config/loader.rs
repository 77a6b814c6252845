//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::Config;

/// Name of the project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "droid.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file to load.
///
/// Order: explicit `--config`, `DROID_CONFIG`, `./droid.toml`, then the user
/// config `<config dir>/droid/config.toml`. Explicit paths are returned even
/// when missing so the caller reports them; the fallbacks only when present.
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    resolve_config_path_from(explicit, cwd, |key| std::env::var(key).ok(), user_config_dir())
}

pub(crate) fn resolve_config_path_from<F>(
    explicit: Option<&Path>,
    cwd: &Path,
    env: F,
    user_dir: Option<PathBuf>,
) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env("DROID_CONFIG").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    user_dir
        .map(|dir| dir.join("droid").join("config.toml"))
        .filter(|p| p.is_file())
}

/// Apply environment variable overrides (DROID_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from<F>(mut config: Config, env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // DROID_ARTIFACT
    if let Some(artifact) = env("DROID_ARTIFACT").filter(|v| !v.is_empty()) {
        config.artifact = Some(PathBuf::from(artifact));
    }

    // DROID_REMOTE_DIR
    if let Some(dir) = env("DROID_REMOTE_DIR").filter(|v| !v.is_empty()) {
        config.remote.directory = dir;
    }

    // DROID_CONNECT_TIMEOUT (seconds); unparsable values are ignored
    if let Some(timeout) = env("DROID_CONNECT_TIMEOUT").and_then(|v| v.trim().parse().ok()) {
        config.transport.connect_timeout = timeout;
    }

    config
}

fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "artifact",
        "remote",
        "directory",
        "artifact_path",
        "manifest_path",
        "checksum_tool",
        "transport",
        "connect_timeout",
        "batch_mode",
        "ssh_program",
        "scp_program",
        "hosts",
        "name",
        "address",
        "user",
        "port",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
