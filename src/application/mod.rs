//! Application Layer
//!
//! Use cases that orchestrate the synchronisation flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Synchroniser` - Compare one host against the local artifact, copy on mismatch
//! - `sync_all` / `check_all` - Run the synchroniser across hosts in parallel, with retries

pub mod fleet;
pub mod synchroniser;

#[cfg(test)]
pub(crate) mod testing;

pub use fleet::{check_all, sync_all, FleetOptions, HostReport};
pub use synchroniser::{Comparison, SyncOutcome, Synchroniser};
