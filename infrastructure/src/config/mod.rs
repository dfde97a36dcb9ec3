//! Configuration file loading for lunch-poll
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LUNCH_POLL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./lunch-poll.toml` or `./.lunch-poll.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/lunch-poll/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileAuditConfig, FileConfig, FileDataConfig, FileVotingConfig};
pub use loader::ConfigLoader;
