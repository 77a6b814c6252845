//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod digest;
mod remote_target;

pub use digest::ContentDigest;
pub use remote_target::{
    ChecksumTool, RemoteTarget, DEFAULT_ARTIFACT_NAME, DEFAULT_REMOTE_DIR, MANIFEST_SUFFIX,
};
