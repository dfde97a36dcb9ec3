//! Application-level configuration.
//!
//! - [`VotingParams`] — voting window and result scoping for the choose-dish use case

pub mod voting_params;

pub use voting_params::{ResultScope, VotingParams};
