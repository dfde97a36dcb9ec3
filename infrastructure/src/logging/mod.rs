//! Logging infrastructure — structured vote audit logging.
//!
//! Provides [`JsonlVoteAuditLog`], a JSONL file writer that implements
//! the [`VoteAuditLog`](lunch_application::VoteAuditLog) port.

mod jsonl_audit;

pub use jsonl_audit::JsonlVoteAuditLog;
