//! Voting configuration from TOML (`[voting]` section)

use chrono::Weekday;
use lunch_application::{ResultScope, VotingParams};
use lunch_domain::{ConfigIssue, ConfigIssueCode, VotingWindow};
use serde::{Deserialize, Serialize};

/// Raw voting configuration from TOML
///
/// # Example
///
/// ```toml
/// [voting]
/// weekday = "monday"       # "mon".."sun" or full names
/// start_hour = 6           # first hour votes are accepted
/// end_hour = 22            # votes stop at the start of this hour
/// result_scope = "poll"    # "poll" or "global"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVotingConfig {
    /// Day of the week on which votes are accepted
    pub weekday: String,
    /// Start of the voting hours (inclusive)
    pub start_hour: u32,
    /// End of the voting hours (exclusive)
    pub end_hour: u32,
    /// Which results count as an earlier vote: "poll" or "global"
    pub result_scope: String,
}

impl Default for FileVotingConfig {
    fn default() -> Self {
        Self {
            weekday: "monday".to_string(),
            start_hour: VotingWindow::DEFAULT_START_HOUR,
            end_hour: VotingWindow::DEFAULT_END_HOUR,
            result_scope: "poll".to_string(),
        }
    }
}

impl FileVotingConfig {
    /// Parse weekday string, returning warnings on failure.
    pub fn parse_weekday(&self) -> (Weekday, Vec<ConfigIssue>) {
        match self.weekday.parse::<Weekday>() {
            Ok(day) => (day, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "voting.weekday".to_string(),
                        value: self.weekday.clone(),
                        valid_values: [
                            "monday",
                            "tuesday",
                            "wednesday",
                            "thursday",
                            "friday",
                            "saturday",
                            "sunday",
                        ]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                    },
                    format!(
                        "voting.weekday: unknown value '{}', falling back to 'monday'",
                        self.weekday
                    ),
                );
                (VotingWindow::DEFAULT_WEEKDAY, vec![issue])
            }
        }
    }

    /// Parse result_scope string into [`ResultScope`]
    pub fn parse_result_scope(&self) -> (ResultScope, Vec<ConfigIssue>) {
        match self.result_scope.parse::<ResultScope>() {
            Ok(scope) => (scope, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "voting.result_scope".to_string(),
                        value: self.result_scope.clone(),
                        valid_values: vec!["poll".to_string(), "global".to_string()],
                    },
                    format!(
                        "voting.result_scope: unknown value '{}', falling back to 'poll'",
                        self.result_scope
                    ),
                );
                (ResultScope::default(), vec![issue])
            }
        }
    }

    /// Build the voting window; a bad hour range falls back to the default hours
    pub fn parse_window(&self) -> (VotingWindow, Vec<ConfigIssue>) {
        let (weekday, mut issues) = self.parse_weekday();

        let window = match VotingWindow::new(weekday, self.start_hour, self.end_hour) {
            Some(window) => window,
            None => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidHourRange {
                        start_hour: self.start_hour,
                        end_hour: self.end_hour,
                    },
                    format!(
                        "voting: hours {}-{} do not form a range within a day, falling back to {}-{}",
                        self.start_hour,
                        self.end_hour,
                        VotingWindow::DEFAULT_START_HOUR,
                        VotingWindow::DEFAULT_END_HOUR
                    ),
                ));
                VotingWindow::new(
                    weekday,
                    VotingWindow::DEFAULT_START_HOUR,
                    VotingWindow::DEFAULT_END_HOUR,
                )
                .unwrap_or_default()
            }
        };

        (window, issues)
    }

    /// Convert to [`VotingParams`], collecting every issue found on the way
    pub fn to_voting_params(&self) -> (VotingParams, Vec<ConfigIssue>) {
        let (window, mut issues) = self.parse_window();
        let (scope, scope_issues) = self.parse_result_scope();
        issues.extend(scope_issues);

        let params = VotingParams::default()
            .with_window(window)
            .with_result_scope(scope);
        (params, issues)
    }
}
