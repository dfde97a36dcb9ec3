//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! String-typed fields are parsed into domain/application types on demand,
//! reporting a [`ConfigIssue`] instead of failing.

mod audit;
mod data;
mod voting;

pub use audit::FileAuditConfig;
pub use data::FileDataConfig;
pub use voting::FileVotingConfig;

use lunch_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Voting window and result scoping
    pub voting: FileVotingConfig,
    /// Data file location
    pub data: FileDataConfig,
    /// Vote audit log settings
    pub audit: FileAuditConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// 1. Voting window and result scope values
    /// 2. Empty file paths
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Voting parse validation
        issues.extend(self.voting.to_voting_params().1);

        // 2. Paths
        if self.data.path.as_os_str().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyPath {
                    field: "data.path".to_string(),
                },
                "data.path must not be empty",
            ));
        }
        if self.audit.enabled && self.audit.path.as_os_str().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyPath {
                    field: "audit.path".to_string(),
                },
                "audit.path must not be empty when audit.enabled = true",
            ));
        }

        issues
    }
}
