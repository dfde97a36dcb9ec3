//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`] — typed entity identifiers

pub mod ids;
