//! Presentation layer for lunch-poll
//!
//! This crate contains the CLI definition and the console / JSON
//! output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{ChooseArgs, Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
