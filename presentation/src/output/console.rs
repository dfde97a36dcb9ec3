//! Console output formatter for votes and poll results

use colored::Colorize;
use lunch_application::{ChooseDishError, VotingParams};
use lunch_domain::{DishId, PollId, PollResult};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a freshly recorded vote
    pub fn format_result(result: &PollResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Vote recorded".green().bold()));
        output.push_str(&format!(
            "  {} {}\n",
            "Poll:".cyan().bold(),
            result.poll().id()
        ));
        output.push_str(&format!(
            "  {} {} (#{}, floor {})\n",
            "Employee:".cyan().bold(),
            result.employee().surname(),
            result.employee().id(),
            result.floor()
        ));
        output.push_str(&format!(
            "  {} {} (#{})\n",
            "Dish:".cyan().bold(),
            result.dish().title(),
            result.dish().id()
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "Result id:".cyan().bold(),
            result.id()
        ));

        output
    }

    /// Format the votes of one poll, followed by a per-dish tally
    pub fn format_results(poll_id: PollId, results: &[PollResult]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Poll {} results", poll_id)));
        output.push('\n');

        if results.is_empty() {
            output.push_str(&format!("\n{}\n", "No votes yet.".dimmed()));
            return output;
        }

        for result in results {
            output.push_str(&format!(
                "  {:>4}  {:<20} floor {:>3}  {} {}\n",
                format!("#{}", result.id()).dimmed(),
                result.employee().surname(),
                result.floor(),
                "->".dimmed(),
                result.dish().title()
            ));
        }

        output.push_str(&Self::section_header("Tally"));
        let mut tally: BTreeMap<DishId, (&str, usize)> = BTreeMap::new();
        for result in results {
            tally
                .entry(result.dish().id())
                .or_insert((result.dish().title(), 0))
                .1 += 1;
        }
        for (title, count) in tally.values() {
            output.push_str(&format!(
                "  {:<24} {}\n",
                title,
                count.to_string().yellow().bold()
            ));
        }

        output
    }

    /// Format a refused or failed vote
    pub fn format_rejection(error: &ChooseDishError) -> String {
        let label = match error {
            ChooseDishError::Rejected(_) => "Vote rejected:",
            ChooseDishError::Provider(_) => "Vote failed:",
        };
        format!(
            "{} {} {}",
            label.red().bold(),
            error,
            format!("[{}]", error.code()).dimmed()
        )
    }

    /// Format the effective voting settings for `show-config`
    pub fn format_settings(params: &VotingParams, data_path: &str, audit_path: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Voting window:".cyan().bold(),
            params.window
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Result scope:".cyan().bold(),
            params.result_scope
        ));
        output.push_str(&format!("{} {}\n", "Data file:".cyan().bold(), data_path));
        output.push_str(&format!(
            "{} {}\n",
            "Audit log:".cyan().bold(),
            audit_path.unwrap_or("disabled")
        ));

        output
    }

    /// Format any serializable value as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an error as a JSON object with a stable code
    pub fn format_error_json(code: &str, message: &str) -> String {
        Self::format_json(&json!({
            "error": {
                "code": code,
                "message": message,
            }
        }))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(32))
    }
}
