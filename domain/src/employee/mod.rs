//! Employees

use crate::core::ids::EmployeeId;
use crate::user::User;
use serde::{Deserialize, Serialize};

/// The floor an employee works on (Value Object)
///
/// Captured on every [`PollResult`](crate::poll::PollResult) so that dishes can
/// be delivered to the right place even if the employee later moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Floor(i32);

impl Floor {
    pub const fn new(level: i32) -> Self {
        Self(level)
    }

    pub const fn level(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee taking part in lunch polls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    user: User,
    floor: Floor,
    surname: String,
}

impl Employee {
    pub fn new(id: EmployeeId, user: User, floor: Floor, surname: impl Into<String>) -> Self {
        Self {
            id,
            user,
            floor,
            surname: surname.into(),
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }
}
