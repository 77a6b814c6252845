//! Remote Target Value Object
//!
//! Where the artifact lives on a remote host, where the transient checksum
//! manifest is written, and which tool verifies it.

use serde::{Deserialize, Serialize};

use super::ContentDigest;

/// Directory used when nothing else is configured
pub const DEFAULT_REMOTE_DIR: &str = "/tmp/";

/// Suffix appended to the remote artifact path to name the manifest
pub const MANIFEST_SUFFIX: &str = ".sha1";

/// Artifact name used when the local path has no file name
pub const DEFAULT_ARTIFACT_NAME: &str = "droid";

/// Remote utility that checks a `sha1sum`-format manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumTool {
    /// GNU coreutils
    #[default]
    Sha1sum,
    /// Perl `shasum` (BSD, macOS)
    Shasum,
}

impl ChecksumTool {
    /// Invocation that verifies a manifest and reports only through its exit status
    pub fn verify_invocation(&self) -> &'static str {
        match self {
            ChecksumTool::Sha1sum => "sha1sum --status -c",
            ChecksumTool::Shasum => "shasum -a 1 -s -c",
        }
    }
}

/// Remote layout for one synchronised artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    artifact_path: String,
    manifest_path: String,
    checksum_tool: ChecksumTool,
}

impl RemoteTarget {
    /// `<dir><name>` plus its `.sha1` sibling
    pub fn in_directory(dir: &str, artifact_name: &str) -> Self {
        let artifact_path = format!("{}/{}", dir.trim_end_matches('/'), artifact_name);
        Self::new(artifact_path)
    }

    /// Target with the manifest next to `artifact_path`
    pub fn new(artifact_path: impl Into<String>) -> Self {
        let artifact_path = artifact_path.into();
        let manifest_path = format!("{}{}", artifact_path, MANIFEST_SUFFIX);
        Self {
            artifact_path,
            manifest_path,
            checksum_tool: ChecksumTool::default(),
        }
    }

    pub fn with_manifest_path(mut self, manifest_path: impl Into<String>) -> Self {
        self.manifest_path = manifest_path.into();
        self
    }

    pub fn with_checksum_tool(mut self, tool: ChecksumTool) -> Self {
        self.checksum_tool = tool;
        self
    }

    pub fn artifact_path(&self) -> &str {
        &self.artifact_path
    }

    pub fn manifest_path(&self) -> &str {
        &self.manifest_path
    }

    pub fn checksum_tool(&self) -> ChecksumTool {
        self.checksum_tool
    }

    /// Directory of the remote artifact, with its trailing `/`
    pub fn directory(&self) -> Option<&str> {
        self.artifact_path
            .rfind('/')
            .map(|idx| &self.artifact_path[..=idx])
    }

    /// File name of the remote artifact
    pub fn file_name(&self) -> &str {
        match self.artifact_path.rfind('/') {
            Some(idx) => &self.artifact_path[idx + 1..],
            None => &self.artifact_path,
        }
    }

    /// Single shell invocation that writes the manifest and verifies it.
    ///
    /// Exits 0 only when the remote artifact exists and matches `digest`.
    pub fn compare_command(&self, digest: &ContentDigest) -> String {
        format!(
            "echo {} > {} && {} {}",
            shell_quote(&digest.manifest_line(&self.artifact_path)),
            shell_quote(&self.manifest_path),
            self.checksum_tool.verify_invocation(),
            shell_quote(&self.manifest_path),
        )
    }
}

impl Default for RemoteTarget {
    fn default() -> Self {
        Self::in_directory(DEFAULT_REMOTE_DIR, DEFAULT_ARTIFACT_NAME)
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
