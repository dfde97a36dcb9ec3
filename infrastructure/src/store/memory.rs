//! In-memory provider adapter.
//!
//! Serves every provider port from maps held in memory. Recorded results are
//! kept behind a `Mutex`; the `(poll, employee)` uniqueness check and the
//! insert happen under the same lock, so two racing votes cannot both land.

use async_trait::async_trait;
use lunch_application::ports::providers::{
    DishProvider, EmployeeProvider, EntityKind, PollProvider, PollResultProvider, ProviderError,
};
use lunch_domain::{
    Dish, DishId, Employee, EmployeeId, Poll, PollId, PollResult, PollResultId,
};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Provider adapter backed by in-memory maps
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: BTreeMap<EmployeeId, Employee>,
    polls: BTreeMap<PollId, Poll>,
    dishes: BTreeMap<DishId, Dish>,
    results: Mutex<Vec<PollResult>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder Methods ====================

    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.insert(employee.id(), employee);
        self
    }

    pub fn with_poll(mut self, poll: Poll) -> Self {
        self.polls.insert(poll.id(), poll);
        self
    }

    pub fn with_dish(mut self, dish: Dish) -> Self {
        self.dishes.insert(dish.id(), dish);
        self
    }

    pub fn with_result(self, result: PollResult) -> Self {
        if let Ok(mut results) = self.results.lock() {
            results.push(result);
        }
        self
    }

    /// Copy of every stored result, ordered by id
    pub fn results_snapshot(&self) -> Result<Vec<PollResult>, ProviderError> {
        let mut results = self.lock_results()?.clone();
        results.sort_by_key(|r| r.id());
        Ok(results)
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn poll_count(&self) -> usize {
        self.polls.len()
    }

    fn lock_results(&self) -> Result<MutexGuard<'_, Vec<PollResult>>, ProviderError> {
        self.results
            .lock()
            .map_err(|_| ProviderError::Unavailable("result store lock poisoned".to_string()))
    }
}

#[async_trait]
impl EmployeeProvider for InMemoryStore {
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, ProviderError> {
        self.employees
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(EntityKind::Employee, id))
    }
}

#[async_trait]
impl PollProvider for InMemoryStore {
    async fn get_poll(&self, id: PollId) -> Result<Poll, ProviderError> {
        self.polls
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(EntityKind::Poll, id))
    }
}

#[async_trait]
impl DishProvider for InMemoryStore {
    async fn get_dish(&self, id: DishId) -> Result<Dish, ProviderError> {
        self.dishes
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(EntityKind::Dish, id))
    }
}

#[async_trait]
impl PollResultProvider for InMemoryStore {
    async fn get_poll_results(&self) -> Result<Vec<PollResult>, ProviderError> {
        Ok(self.lock_results()?.clone())
    }

    async fn get_poll_result(&self, id: PollResultId) -> Result<PollResult, ProviderError> {
        self.lock_results()?
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(EntityKind::PollResult, id))
    }

    async fn create_poll_result(
        &self,
        poll: &Poll,
        employee: &Employee,
        dish: &Dish,
    ) -> Result<PollResult, ProviderError> {
        let mut results = self.lock_results()?;

        if results
            .iter()
            .any(|r| r.poll().id() == poll.id() && r.employee().id() == employee.id())
        {
            return Err(ProviderError::Conflict(format!(
                "employee {} already has a result in poll {}",
                employee.id(),
                poll.id()
            )));
        }

        let next_id = results.iter().map(|r| r.id().value()).max().unwrap_or(0) + 1;
        let result = PollResult::new(
            PollResultId::new(next_id),
            poll.clone(),
            employee.clone(),
            dish.clone(),
            employee.floor(),
        );
        results.push(result.clone());
        debug!("Stored poll result {}", next_id);

        Ok(result)
    }
}
