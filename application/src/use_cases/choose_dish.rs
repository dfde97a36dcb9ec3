//! Choose Dish use case
//!
//! An employee votes for one dish of a poll's menu. The vote is checked
//! against every voting rule before anything is written.

use crate::config::VotingParams;
use crate::ports::providers::{
    DishProvider, EmployeeProvider, PollProvider, PollResultProvider, ProviderError,
};
use crate::ports::vote_audit::{NoVoteAudit, VoteAuditEvent, VoteAuditLog};
use chrono::NaiveDateTime;
use lunch_domain::voting::rules;
use lunch_domain::{DishId, EmployeeId, PollId, PollResult, RuleViolation};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while choosing a dish
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChooseDishError {
    /// The vote broke a voting rule
    #[error(transparent)]
    Rejected(#[from] RuleViolation),

    /// A provider failed (including unknown ids)
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ChooseDishError {
    /// The rule that refused the vote, if any
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            ChooseDishError::Rejected(violation) => Some(violation),
            ChooseDishError::Provider(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ChooseDishError::Provider(e) if e.is_not_found())
    }

    /// Stable machine-readable code, e.g. `access_denied` or `not_found`
    pub fn code(&self) -> &'static str {
        match self {
            ChooseDishError::Rejected(violation) => violation.code(),
            ChooseDishError::Provider(e) => e.code(),
        }
    }
}

/// Input for the [`ChooseDishUseCase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChooseDishInput {
    pub employee_id: EmployeeId,
    pub poll_id: PollId,
    pub dish_id: DishId,
    /// Local wall-clock time of the vote.
    pub at: NaiveDateTime,
}

impl ChooseDishInput {
    pub fn new(employee_id: EmployeeId, poll_id: PollId, dish_id: DishId, at: NaiveDateTime) -> Self {
        Self {
            employee_id,
            poll_id,
            dish_id,
            at,
        }
    }
}

/// Use case for an employee choosing a dish in a poll.
///
/// Runs in a fixed order and stops at the first failure:
/// 1. Fetch all poll results, then the employee, poll and dish
/// 2. Employee has not voted yet (results scoped by [`VotingParams::result_scope`])
/// 3. User may view active polls
/// 4. Poll is active
/// 5. User may participate in polls
/// 6. Dish is on the poll's menu
/// 7. Timestamp is inside [`VotingParams::window`]
/// 8. Create the [`PollResult`]
///
/// Step 8 is the only write. The order decides which error is reported when
/// several rules fail at once.
pub struct ChooseDishUseCase {
    employees: Arc<dyn EmployeeProvider>,
    polls: Arc<dyn PollProvider>,
    dishes: Arc<dyn DishProvider>,
    poll_results: Arc<dyn PollResultProvider>,
    params: VotingParams,
    audit_log: Arc<dyn VoteAuditLog>,
}

impl Clone for ChooseDishUseCase {
    fn clone(&self) -> Self {
        Self {
            employees: self.employees.clone(),
            polls: self.polls.clone(),
            dishes: self.dishes.clone(),
            poll_results: self.poll_results.clone(),
            params: self.params,
            audit_log: self.audit_log.clone(),
        }
    }
}

impl ChooseDishUseCase {
    pub fn new(
        employees: Arc<dyn EmployeeProvider>,
        polls: Arc<dyn PollProvider>,
        dishes: Arc<dyn DishProvider>,
        poll_results: Arc<dyn PollResultProvider>,
    ) -> Self {
        Self {
            employees,
            polls,
            dishes,
            poll_results,
            params: VotingParams::default(),
            audit_log: Arc::new(NoVoteAudit),
        }
    }

    /// Create with custom voting parameters.
    pub fn with_params(mut self, params: VotingParams) -> Self {
        self.params = params;
        self
    }

    /// Create with an audit log.
    pub fn with_audit_log(mut self, audit_log: Arc<dyn VoteAuditLog>) -> Self {
        self.audit_log = audit_log;
        self
    }

    pub fn params(&self) -> &VotingParams {
        &self.params
    }

    /// Execute the use case and return the recorded vote.
    pub async fn execute(&self, input: ChooseDishInput) -> Result<PollResult, ChooseDishError> {
        info!(
            "Employee {} choosing dish {} in poll {}",
            input.employee_id, input.dish_id, input.poll_id
        );

        let outcome = self.choose(&input).await;

        match &outcome {
            Ok(result) => {
                info!(
                    "Recorded poll result {} (floor {})",
                    result.id(),
                    result.floor()
                );
                self.audit_log.record(VoteAuditEvent::recorded(result));
            }
            Err(ChooseDishError::Rejected(violation)) => {
                warn!("Vote rejected: {}", violation);
                self.audit_log.record(VoteAuditEvent::rejected(
                    input.employee_id,
                    input.poll_id,
                    input.dish_id,
                    violation.code(),
                    &violation.to_string(),
                ));
            }
            Err(ChooseDishError::Provider(e)) => {
                warn!("Vote could not be evaluated: {}", e);
                self.audit_log.record(VoteAuditEvent::failed(
                    input.employee_id,
                    input.poll_id,
                    input.dish_id,
                    &e.to_string(),
                ));
            }
        }

        outcome
    }

    async fn choose(&self, input: &ChooseDishInput) -> Result<PollResult, ChooseDishError> {
        let all_results = self.poll_results.get_poll_results().await?;
        let employee = self.employees.get_employee(input.employee_id).await?;
        let poll = self.polls.get_poll(input.poll_id).await?;
        let dish = self.dishes.get_dish(input.dish_id).await?;
        let dish_list = poll.dishes();

        let scope = self.params.result_scope;
        let poll_results: Vec<PollResult> = all_results
            .into_iter()
            .filter(|r| scope.includes(r, poll.id()))
            .collect();
        debug!(
            "Checking {} existing results (scope: {})",
            poll_results.len(),
            scope
        );

        rules::ensure_employee_can_choose(&employee, &poll_results)?;
        rules::ensure_can_view_polls(employee.user())?;
        rules::ensure_poll_is_active(&poll)?;
        rules::ensure_can_participate(employee.user())?;
        rules::ensure_dish_in_list(dish_list, &dish)?;
        rules::ensure_allowed_datetime(&self.params.window, &input.at)?;
        debug!("All voting rules passed");

        let result = self
            .poll_results
            .create_poll_result(&poll, &employee, &dish)
            .await?;
        Ok(result)
    }
}
