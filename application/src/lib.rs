//! Application layer for lunch-poll
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ResultScope, VotingParams};
pub use ports::{
    providers::{
        DishProvider, EmployeeProvider, EntityKind, PollProvider, PollResultProvider,
        ProviderError,
    },
    vote_audit::{NoVoteAudit, VoteAuditEvent, VoteAuditLog},
};
pub use use_cases::choose_dish::{ChooseDishError, ChooseDishInput, ChooseDishUseCase};
pub use use_cases::list_poll_results::ListPollResultsUseCase;
