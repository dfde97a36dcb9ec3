//! List Poll Results use case
//!
//! Returns the votes recorded for one poll, oldest first.

use crate::ports::providers::{PollProvider, PollResultProvider, ProviderError};
use lunch_domain::{PollId, PollResult};
use std::sync::Arc;
use tracing::debug;

/// Use case for listing the recorded votes of a poll
pub struct ListPollResultsUseCase {
    polls: Arc<dyn PollProvider>,
    poll_results: Arc<dyn PollResultProvider>,
}

impl ListPollResultsUseCase {
    pub fn new(polls: Arc<dyn PollProvider>, poll_results: Arc<dyn PollResultProvider>) -> Self {
        Self {
            polls,
            poll_results,
        }
    }

    /// Fails with [`ProviderError::NotFound`] if the poll does not exist
    pub async fn execute(&self, poll_id: PollId) -> Result<Vec<PollResult>, ProviderError> {
        let poll = self.polls.get_poll(poll_id).await?;

        let mut results: Vec<PollResult> = self
            .poll_results
            .get_poll_results()
            .await?
            .into_iter()
            .filter(|r| r.poll().id() == poll.id())
            .collect();
        results.sort_by_key(|r| r.id());

        debug!("Poll {} has {} results", poll.id(), results.len());
        Ok(results)
    }
}
