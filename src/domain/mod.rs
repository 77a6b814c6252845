//! Domain Layer
//!
//! Value types and capability contracts of the synchroniser.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ContentDigest, RemoteTarget)
//! - `ports/` - Interface definitions for infrastructure (Host, SshClient, ScpClient)

pub mod ports;
pub mod value_objects;
