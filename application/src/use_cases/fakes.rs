//! In-test fake providers shared by the use case tests.

use crate::ports::providers::{
    DishProvider, EmployeeProvider, EntityKind, PollProvider, PollResultProvider, ProviderError,
};
use crate::ports::vote_audit::{VoteAuditEvent, VoteAuditLog};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use lunch_domain::{
    Dish, DishId, DishList, Employee, EmployeeId, Floor, Menu, MenuId, Permission,
    PermissionList, Poll, PollId, PollResult, PollResultId, User, UserId,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One fake that serves every provider port from a single snapshot.
#[derive(Default)]
pub(crate) struct FakeProviders {
    employee: Mutex<Option<Employee>>,
    poll: Mutex<Option<Poll>>,
    dish: Mutex<Option<Dish>>,
    poll_results: Mutex<Vec<PollResult>>,
    create_calls: AtomicUsize,
}

impl FakeProviders {
    pub(crate) fn new(employee: Employee, poll: Poll, dish: Dish, poll_results: Vec<PollResult>) -> Self {
        Self {
            employee: Mutex::new(Some(employee)),
            poll: Mutex::new(Some(poll)),
            dish: Mutex::new(Some(dish)),
            poll_results: Mutex::new(poll_results),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeProvider for FakeProviders {
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, ProviderError> {
        self.employee
            .lock()
            .unwrap()
            .clone()
            .filter(|e| e.id() == id)
            .ok_or_else(|| ProviderError::not_found(EntityKind::Employee, id))
    }
}

#[async_trait]
impl PollProvider for FakeProviders {
    async fn get_poll(&self, id: PollId) -> Result<Poll, ProviderError> {
        self.poll
            .lock()
            .unwrap()
            .clone()
            .filter(|p| p.id() == id)
            .ok_or_else(|| ProviderError::not_found(EntityKind::Poll, id))
    }
}

#[async_trait]
impl DishProvider for FakeProviders {
    async fn get_dish(&self, id: DishId) -> Result<Dish, ProviderError> {
        self.dish
            .lock()
            .unwrap()
            .clone()
            .filter(|d| d.id() == id)
            .ok_or_else(|| ProviderError::not_found(EntityKind::Dish, id))
    }
}

#[async_trait]
impl PollResultProvider for FakeProviders {
    async fn get_poll_results(&self) -> Result<Vec<PollResult>, ProviderError> {
        Ok(self.poll_results.lock().unwrap().clone())
    }

    async fn get_poll_result(&self, id: PollResultId) -> Result<PollResult, ProviderError> {
        self.poll_results
            .lock()
            .unwrap()
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
        let calls = self.create_calls.fetch_add(1, Ordering::SeqCst) as u64;
        Ok(PollResult::new(
            PollResultId::new(100 + calls),
            poll.clone(),
            employee.clone(),
            dish.clone(),
            employee.floor(),
        ))
    }
}

/// Audit log that keeps every event in memory.
#[derive(Default)]
pub(crate) struct RecordingAudit {
    events: Mutex<Vec<VoteAuditEvent>>,
}

impl RecordingAudit {
    pub(crate) fn events(&self) -> Vec<VoteAuditEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl VoteAuditLog for RecordingAudit {
    fn record(&self, event: VoteAuditEvent) {
        self.events.lock().unwrap().push(event);
    }
}

// ==================== Fixtures ====================

pub(crate) fn user_with(permissions: &[Permission]) -> User {
    User::new(UserId::new(1), PermissionList::new(permissions.iter().copied()))
}

pub(crate) fn employee_with(id: u64, permissions: &[Permission]) -> Employee {
    Employee::new(
        EmployeeId::new(id),
        user_with(permissions),
        Floor::new(4),
        "Surname",
    )
}

pub(crate) fn dish(id: u64) -> Dish {
    Dish::new(
        DishId::new(id),
        format!("some random title{}", id),
        format!("some random description{}", id),
    )
}

pub(crate) fn poll(id: u64, active: bool) -> Poll {
    Poll::new(
        PollId::new(id),
        active,
        Menu::new(MenuId::new(1), "title", DishList::new(vec![dish(1)])),
    )
}

pub(crate) fn poll_result(id: u64, poll: Poll, employee: Employee) -> PollResult {
    let floor = employee.floor();
    PollResult::new(PollResultId::new(id), poll, employee, dish(1), floor)
}

/// 2024-01-01 is a Monday
pub(crate) fn monday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub(crate) fn friday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 5)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}
