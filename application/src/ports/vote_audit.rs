//! Port for the vote audit trail.
//!
//! Defines the [`VoteAuditLog`] trait for recording the outcome of every
//! choose-dish attempt (accepted or refused) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port keeps a
//! machine-readable record of who voted for what and why votes were refused.

use lunch_domain::{DishId, EmployeeId, PollId, PollResult};
use serde_json::{Value, json};

/// A structured audit event.
///
/// Each event has a type string and a JSON payload with event-specific fields.
/// The timestamp is added by the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteAuditEvent {
    /// Event type identifier (`vote_recorded`, `vote_rejected`, `vote_failed`).
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl VoteAuditEvent {
    pub const RECORDED: &'static str = "vote_recorded";
    pub const REJECTED: &'static str = "vote_rejected";
    pub const FAILED: &'static str = "vote_failed";

    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A vote passed every rule and was stored
    pub fn recorded(result: &PollResult) -> Self {
        Self::new(
            Self::RECORDED,
            json!({
                "poll_result_id": result.id(),
                "poll_id": result.poll().id(),
                "employee_id": result.employee().id(),
                "dish_id": result.dish().id(),
                "floor": result.floor(),
            }),
        )
    }

    /// A vote broke a rule; `reason` is the violation code
    pub fn rejected(
        employee_id: EmployeeId,
        poll_id: PollId,
        dish_id: DishId,
        reason: &str,
        message: &str,
    ) -> Self {
        Self::new(
            Self::REJECTED,
            json!({
                "poll_id": poll_id,
                "employee_id": employee_id,
                "dish_id": dish_id,
                "reason": reason,
                "message": message,
            }),
        )
    }

    /// A vote could not be evaluated because a provider failed
    pub fn failed(employee_id: EmployeeId, poll_id: PollId, dish_id: DishId, error: &str) -> Self {
        Self::new(
            Self::FAILED,
            json!({
                "poll_id": poll_id,
                "employee_id": employee_id,
                "dish_id": dish_id,
                "error": error,
            }),
        )
    }
}

/// Port for recording vote audit events.
///
/// `record` is synchronous and infallible so that audit problems never change
/// the outcome of a vote. Writers swallow their own I/O errors.
pub trait VoteAuditLog: Send + Sync {
    fn record(&self, event: VoteAuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoVoteAudit;

impl VoteAuditLog for NoVoteAudit {
    fn record(&self, _event: VoteAuditEvent) {}
}
