//! Audit log configuration from TOML (`[audit]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw audit configuration from TOML
///
/// ```toml
/// [audit]
/// enabled = true
/// path = "lunch-poll.audit.jsonl"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    /// Write a JSONL line for every vote attempt
    pub enabled: bool,
    /// Audit file location
    pub path: PathBuf,
}

impl Default for FileAuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("lunch-poll.audit.jsonl"),
        }
    }
}
