//! Data provider ports
//!
//! Defines how the application layer reads employees, polls and dishes, and
//! how it reads and records poll results. Implementations (adapters) live in
//! the infrastructure layer.

use async_trait::async_trait;
use lunch_domain::{Dish, DishId, Employee, EmployeeId, Poll, PollId, PollResult, PollResultId};
use thiserror::Error;

/// Kind of entity a provider serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    Poll,
    Dish,
    PollResult,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Employee => "Employee",
            EntityKind::Poll => "Poll",
            EntityKind::Dish => "Dish",
            EntityKind::PollResult => "Poll result",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur while talking to a provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: u64 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

impl ProviderError {
    pub fn not_found(entity: EntityKind, id: impl Into<u64>) -> Self {
        ProviderError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound { .. })
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ProviderError::NotFound { .. } => "not_found",
            ProviderError::Conflict(_) => "conflict",
            ProviderError::Unavailable(_) => "unavailable",
        }
    }
}

/// Port for looking up employees
#[async_trait]
pub trait EmployeeProvider: Send + Sync {
    /// Fails with [`ProviderError::NotFound`] if there is no such employee
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, ProviderError>;
}

/// Port for looking up polls
#[async_trait]
pub trait PollProvider: Send + Sync {
    /// Fails with [`ProviderError::NotFound`] if there is no such poll
    async fn get_poll(&self, id: PollId) -> Result<Poll, ProviderError>;
}

/// Port for looking up dishes
#[async_trait]
pub trait DishProvider: Send + Sync {
    /// Fails with [`ProviderError::NotFound`] if there is no such dish
    async fn get_dish(&self, id: DishId) -> Result<Dish, ProviderError>;
}

/// Port for reading and recording poll results
#[async_trait]
pub trait PollResultProvider: Send + Sync {
    /// All recorded results, across every poll
    async fn get_poll_results(&self) -> Result<Vec<PollResult>, ProviderError>;

    /// Fails with [`ProviderError::NotFound`] if there is no such result
    async fn get_poll_result(&self, id: PollResultId) -> Result<PollResult, ProviderError>;

    /// Persist a new result and return it
    ///
    /// The implementation assigns a fresh id and copies the employee's
    /// current floor onto the result.
    async fn create_poll_result(
        &self,
        poll: &Poll,
        employee: &Employee,
        dish: &Dish,
    ) -> Result<PollResult, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = ProviderError::not_found(EntityKind::Employee, EmployeeId::new(7));
        assert_eq!(error.to_string(), "Employee 7 not found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_poll_result_display() {
        let error = ProviderError::not_found(EntityKind::PollResult, PollResultId::new(3));
        assert_eq!(error.to_string(), "Poll result 3 not found");
    }

    #[test]
    fn test_conflict_is_not_not_found() {
        let error = ProviderError::Conflict("duplicate".to_string());
        assert!(!error.is_not_found());
        assert_eq!(error.code(), "conflict");
    }
}
