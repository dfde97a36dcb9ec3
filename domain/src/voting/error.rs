//! Rule violation errors

use crate::core::ids::{DishId, EmployeeId, PollId};
use crate::user::Permission;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Why a vote was refused
///
/// Each variant corresponds to exactly one voting rule. Callers map
/// [`RuleViolation::code`] to user-facing responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Dishes cannot be chosen at {at}")]
    OutOfTimeChooseDish { at: NaiveDateTime },

    #[error("Employee {employee} has already chosen a dish")]
    EmployeeAlreadyChoseDish { employee: EmployeeId },

    #[error("Access denied: missing permission {missing}")]
    AccessDenied { missing: Permission },

    #[error("Poll {poll} is not active")]
    PollIsNotActive { poll: PollId },

    #[error("Dish {dish} is not on the poll's menu")]
    DishMissingInDishList { dish: DishId },
}

impl RuleViolation {
    /// Stable machine-readable code for this violation
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::OutOfTimeChooseDish { .. } => "out_of_time_choose_dish",
            RuleViolation::EmployeeAlreadyChoseDish { .. } => "employee_already_chose_dish",
            RuleViolation::AccessDenied { .. } => "access_denied",
            RuleViolation::PollIsNotActive { .. } => "poll_is_not_active",
            RuleViolation::DishMissingInDishList { .. } => "dish_missing_in_dish_list",
        }
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, RuleViolation::AccessDenied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_names_permission() {
        let error = RuleViolation::AccessDenied {
            missing: Permission::ParticipationInPolls,
        };
        assert_eq!(
            error.to_string(),
            "Access denied: missing permission PARTICIPATION_IN_POLLS"
        );
        assert!(error.is_access_denied());
    }

    #[test]
    fn test_codes_are_distinct() {
        let violations = [
            RuleViolation::OutOfTimeChooseDish {
                at: NaiveDateTime::default(),
            },
            RuleViolation::EmployeeAlreadyChoseDish {
                employee: EmployeeId::new(1),
            },
            RuleViolation::AccessDenied {
                missing: Permission::ViewActivePolls,
            },
            RuleViolation::PollIsNotActive { poll: PollId::new(1) },
            RuleViolation::DishMissingInDishList { dish: DishId::new(1) },
        ];
        let mut codes: Vec<_> = violations.iter().map(RuleViolation::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), violations.len());
    }
}
