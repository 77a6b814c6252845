//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod host;

pub use host::{Host, ScpClient, SshClient, TransportError};
