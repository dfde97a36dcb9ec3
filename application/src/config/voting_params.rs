//! Voting parameters — use case policy knobs.
//!
//! [`VotingParams`] groups the settings that shape how
//! [`ChooseDishUseCase`](crate::use_cases::choose_dish::ChooseDishUseCase)
//! applies the voting rules. The rules themselves live in the domain layer.

use lunch_domain::{PollId, PollResult, VotingWindow};
use serde::{Deserialize, Serialize};

/// Which existing results count when checking "already voted"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultScope {
    /// Only results of the poll being voted on (default)
    #[default]
    Poll,
    /// Every result in the system: one vote per employee overall
    Global,
}

impl ResultScope {
    /// Whether `result` takes part in the uniqueness check for `poll_id`
    pub fn includes(&self, result: &PollResult, poll_id: PollId) -> bool {
        match self {
            ResultScope::Poll => result.poll().id() == poll_id,
            ResultScope::Global => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultScope::Poll => "poll",
            ResultScope::Global => "global",
        }
    }
}

impl std::fmt::Display for ResultScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResultScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "poll" => Ok(ResultScope::Poll),
            "global" | "all" => Ok(ResultScope::Global),
            _ => Err(format!("Unknown result scope: {}", s)),
        }
    }
}

/// Voting policy parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingParams {
    /// When votes are accepted.
    pub window: VotingWindow,
    /// Which results are checked for an earlier vote by the same employee.
    pub result_scope: ResultScope,
}

impl VotingParams {
    // ==================== Builder Methods ====================

    pub fn with_window(mut self, window: VotingWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_result_scope(mut self, scope: ResultScope) -> Self {
        self.result_scope = scope;
        self
    }
}
