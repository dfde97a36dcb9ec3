//! Infrastructure layer for lunch-poll
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileAuditConfig, FileConfig, FileDataConfig, FileVotingConfig};
pub use logging::JsonlVoteAuditLog;
pub use store::{DataFile, DataFileError, InMemoryStore};
