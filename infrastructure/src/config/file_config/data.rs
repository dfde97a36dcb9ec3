//! Data file configuration from TOML (`[data]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw data configuration from TOML
///
/// ```toml
/// [data]
/// path = "lunch-poll.data.toml"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// Where employees, polls, dishes and results are read from and saved to
    pub path: PathBuf,
}

impl Default for FileDataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("lunch-poll.data.toml"),
        }
    }
}
