//! CLI command definitions

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, coloured output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for lunch-poll
#[derive(Parser, Debug)]
#[command(name = "lunch-poll")]
#[command(author, version, about = "Employee lunch poll - vote for a dish from the poll menu")]
#[command(long_about = r#"
lunch-poll records employee votes for lunch dishes.

A vote is accepted only when:
  - the employee has not voted in the poll yet
  - the employee may view and participate in polls
  - the poll is active and the dish is on its menu
  - the vote falls inside the voting window (Monday 06:00-22:00 by default)

Configuration files are loaded from (in priority order):
1. --config <path>                          Explicit config file
2. ./lunch-poll.toml                        Project-level config
3. ~/.config/lunch-poll/config.toml         Global config
Environment variables prefixed LUNCH_POLL_ override all files.

Example:
  lunch-poll choose --employee 1 --poll 1 --dish 2
  lunch-poll choose --employee 1 --poll 1 --dish 2 --at 2024-01-01T12:30
  lunch-poll results --poll 1 -o json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Data file to read and update (overrides `data.path`)
    #[arg(long, value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Vote for a dish in a poll
    Choose(ChooseArgs),

    /// List the recorded votes of a poll
    Results {
        /// Poll id
        #[arg(long, value_name = "ID")]
        poll: u64,
    },

    /// Show configuration file locations and the effective voting settings
    ShowConfig,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ChooseArgs {
    /// Employee id
    #[arg(long, value_name = "ID")]
    pub employee: u64,

    /// Poll id
    #[arg(long, value_name = "ID")]
    pub poll: u64,

    /// Dish id
    #[arg(long, value_name = "ID")]
    pub dish: u64,

    /// Local time of the vote (defaults to now)
    #[arg(long, value_name = "YYYY-MM-DDTHH:MM[:SS]", value_parser = parse_local_datetime)]
    pub at: Option<NaiveDateTime>,
}

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a local wall-clock timestamp given on the command line
pub fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, String> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| format!("invalid timestamp '{}', expected YYYY-MM-DDTHH:MM[:SS]", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};

    #[test]
    fn test_parse_choose() {
        let cli = Cli::try_parse_from([
            "lunch-poll", "choose", "--employee", "1", "--poll", "2", "--dish", "3",
        ])
        .unwrap();

        match cli.command {
            Command::Choose(args) => {
                assert_eq!(args.employee, 1);
                assert_eq!(args.poll, 2);
                assert_eq!(args.dish, 3);
                assert!(args.at.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_choose_with_timestamp() {
        let cli = Cli::try_parse_from([
            "lunch-poll",
            "choose",
            "--employee",
            "1",
            "--poll",
            "1",
            "--dish",
            "1",
            "--at",
            "2024-01-01T12:30",
        ])
        .unwrap();

        let Command::Choose(args) = cli.command else {
            panic!("expected choose");
        };
        let at = args.at.unwrap();
        assert_eq!(at.weekday(), Weekday::Mon);
        assert_eq!(at.hour(), 12);
        assert_eq!(at.minute(), 30);
    }

    #[test]
    fn test_choose_requires_all_ids() {
        assert!(Cli::try_parse_from(["lunch-poll", "choose", "--employee", "1"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "lunch-poll", "results", "--poll", "4", "-vv", "-o", "json", "--data", "votes.toml",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Results { poll: 4 }));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.data, Some(PathBuf::from("votes.toml")));
    }

    #[test]
    fn test_show_config() {
        let cli = Cli::try_parse_from(["lunch-poll", "--no-config", "show-config"]).unwrap();
        assert!(matches!(cli.command, Command::ShowConfig));
        assert!(cli.no_config);
    }

    #[test]
    fn test_parse_local_datetime_formats() {
        assert!(parse_local_datetime("2024-01-01T06:00:00").is_ok());
        assert!(parse_local_datetime("2024-01-01 21:59").is_ok());
        let err = parse_local_datetime("monday noon").unwrap_err();
        assert!(err.contains("monday noon"));
    }
}
