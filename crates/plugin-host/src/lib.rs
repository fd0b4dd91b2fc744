//! Reference host for issue plugins
//!
//! Real hosts keep project options and identity associations in their own
//! databases. This crate provides the same seams backed by memory, with a
//! TOML snapshot so a command-line host can persist them between runs:
//!
//! ```toml
//! [projects.backend.github]
//! repo = "acme/widgets"
//!
//! [identities.alice.github]
//! access_token = "ghp_..."
//! ```

mod error;
mod memory;
mod state;

pub use error::HostError;
pub use memory::MemoryHost;
pub use state::{HostState, IdentityRecord};
