//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod ssh;

pub use ssh::{SystemHost, SystemScpClient, SystemSshClient, TransportOptions};
