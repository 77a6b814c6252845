//! Content Digest Value Object
//!
//! SHA-1 fingerprint of an artifact's bytes, in the 40-character lowercase hex
//! form that `sha1sum` prints and `sha1sum -c` expects.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use sha1::{Digest, Sha1};

/// SHA-1 content digest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Length of the hex form
    pub const HEX_LEN: usize = 40;

    /// Compute the digest of an in-memory buffer
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha1::digest(content)))
    }

    /// Compute the digest of everything `reader` yields
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = Sha1::new();
        io::copy(&mut reader, &mut hasher)?;
        Ok(Self(format!("{:x}", hasher.finalize())))
    }

    /// Compute the digest of a file, streaming its contents
    pub fn from_file(path: &Path) -> io::Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Parse a hex digest, accepting upper or lower case
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        if hex.len() == Self::HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(hex.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Line in `sha1sum` manifest format: digest, two spaces, path
    pub fn manifest_line(&self, path: &str) -> String {
        format!("{}  {}", self.0, path)
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
