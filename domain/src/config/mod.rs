//! Configuration-related domain types.
//!
//! - [`issue::ConfigIssue`] — a problem found while reading configuration

pub mod issue;

pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
