//! Voting rules
//!
//! Each function checks exactly one rule and fails fast with the matching
//! [`RuleViolation`]. They are pure: no I/O, no clock access.
//!
//! The order in which they run is decided by the caller
//! (see `ChooseDishUseCase` in the application layer).

use super::error::RuleViolation;
use super::window::VotingWindow;
use crate::employee::Employee;
use crate::menu::{Dish, DishList};
use crate::poll::{Poll, PollResult};
use crate::user::{Permission, User};
use chrono::NaiveDateTime;

/// The timestamp must fall inside the voting window
pub fn ensure_allowed_datetime(
    window: &VotingWindow,
    at: &NaiveDateTime,
) -> Result<(), RuleViolation> {
    if window.contains(at) {
        Ok(())
    } else {
        Err(RuleViolation::OutOfTimeChooseDish { at: *at })
    }
}

/// The employee must not appear in any of the given results
///
/// `poll_results` is expected to be scoped already; matching is by employee id.
pub fn ensure_employee_can_choose(
    employee: &Employee,
    poll_results: &[PollResult],
) -> Result<(), RuleViolation> {
    if poll_results
        .iter()
        .any(|result| result.employee().id() == employee.id())
    {
        return Err(RuleViolation::EmployeeAlreadyChoseDish {
            employee: employee.id(),
        });
    }
    Ok(())
}

/// The user must hold [`Permission::ViewActivePolls`]
pub fn ensure_can_view_polls(user: &User) -> Result<(), RuleViolation> {
    require_permission(user, Permission::ViewActivePolls)
}

/// The user must hold [`Permission::ParticipationInPolls`]
pub fn ensure_can_participate(user: &User) -> Result<(), RuleViolation> {
    require_permission(user, Permission::ParticipationInPolls)
}

pub fn ensure_poll_is_active(poll: &Poll) -> Result<(), RuleViolation> {
    if poll.is_active() {
        Ok(())
    } else {
        Err(RuleViolation::PollIsNotActive { poll: poll.id() })
    }
}

/// The dish must be on the list (matched by id)
pub fn ensure_dish_in_list(dishes: &DishList, dish: &Dish) -> Result<(), RuleViolation> {
    if dishes.has_dish(dish.id()) {
        Ok(())
    } else {
        Err(RuleViolation::DishMissingInDishList { dish: dish.id() })
    }
}

fn require_permission(user: &User, permission: Permission) -> Result<(), RuleViolation> {
    if user.permissions().has_permission(permission) {
        Ok(())
    } else {
        Err(RuleViolation::AccessDenied {
            missing: permission,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::{DishId, EmployeeId, MenuId, PollId, PollResultId, UserId};
    use crate::employee::Floor;
    use crate::menu::Menu;
    use crate::user::PermissionList;
    use chrono::NaiveDate;

    // ==================== Helpers ====================

    // 2024-01-01 is a Monday
    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn user(permissions: &[Permission]) -> User {
        User::new(UserId::new(1), PermissionList::new(permissions.iter().copied()))
    }

    fn employee(id: u64) -> Employee {
        Employee::new(
            EmployeeId::new(id),
            user(&Permission::ALL),
            Floor::new(4),
            "Surname",
        )
    }

    fn dish(id: u64) -> Dish {
        Dish::new(DishId::new(id), "some random title", "some random description")
    }

    fn poll(active: bool) -> Poll {
        Poll::new(
            PollId::new(1),
            active,
            Menu::new(MenuId::new(1), "title", DishList::new(vec![dish(1)])),
        )
    }

    fn result_for(employee: Employee) -> PollResult {
        let floor = employee.floor();
        PollResult::new(PollResultId::new(1), poll(true), employee, dish(1), floor)
    }

    // ==================== Allowed datetime ====================

    #[test]
    fn test_datetime_monday_six_succeeds() {
        assert!(ensure_allowed_datetime(&VotingWindow::default(), &at(1, 6)).is_ok());
    }

    #[test]
    fn test_datetime_correct_day_bad_time_fails() {
        let result = ensure_allowed_datetime(&VotingWindow::default(), &at(1, 22));
        assert_eq!(
            result,
            Err(RuleViolation::OutOfTimeChooseDish { at: at(1, 22) })
        );
    }

    #[test]
    fn test_datetime_bad_day_correct_time_fails() {
        // Sunday 15:00
        assert!(ensure_allowed_datetime(&VotingWindow::default(), &at(7, 15)).is_err());
    }

    #[test]
    fn test_datetime_bad_day_bad_time_fails() {
        // Tuesday 03:00
        assert!(ensure_allowed_datetime(&VotingWindow::default(), &at(2, 3)).is_err());
    }

    #[test]
    fn test_datetime_every_hour_of_the_week() {
        let window = VotingWindow::default();
        for day in 1..=7 {
            for hour in 0..24 {
                let expected = day == 1 && (6..22).contains(&hour);
                assert_eq!(
                    ensure_allowed_datetime(&window, &at(day, hour)).is_ok(),
                    expected,
                    "day {day} hour {hour}"
                );
            }
        }
    }

    // ==================== Employee can choose ====================

    #[test]
    fn test_empty_results_succeed() {
        assert!(ensure_employee_can_choose(&employee(1), &[]).is_ok());
    }

    #[test]
    fn test_other_employee_result_succeeds() {
        let results = vec![result_for(employee(1))];
        assert!(ensure_employee_can_choose(&employee(2), &results).is_ok());
    }

    #[test]
    fn test_existing_result_fails() {
        let results = vec![result_for(employee(2)), result_for(employee(1))];
        assert_eq!(
            ensure_employee_can_choose(&employee(1), &results),
            Err(RuleViolation::EmployeeAlreadyChoseDish {
                employee: EmployeeId::new(1)
            })
        );
    }

    #[test]
    fn test_existing_result_matched_by_id_not_value() {
        let stored = result_for(employee(1));
        let changed = Employee::new(
            EmployeeId::new(1),
            user(&[]),
            Floor::new(9),
            "Married Name",
        );
        assert!(ensure_employee_can_choose(&changed, &[stored]).is_err());
    }

    // ==================== Permissions ====================

    #[test]
    fn test_view_polls_requires_permission() {
        assert!(ensure_can_view_polls(&user(&[Permission::ViewActivePolls])).is_ok());
        assert_eq!(
            ensure_can_view_polls(&user(&[Permission::ParticipationInPolls])),
            Err(RuleViolation::AccessDenied {
                missing: Permission::ViewActivePolls
            })
        );
    }

    #[test]
    fn test_participate_requires_permission() {
        assert!(ensure_can_participate(&user(&[Permission::ParticipationInPolls])).is_ok());
        assert_eq!(
            ensure_can_participate(&user(&[Permission::ViewActivePolls])),
            Err(RuleViolation::AccessDenied {
                missing: Permission::ParticipationInPolls
            })
        );
    }

    #[test]
    fn test_no_permissions_denies_both() {
        let nobody = user(&[]);
        assert!(ensure_can_view_polls(&nobody).is_err());
        assert!(ensure_can_participate(&nobody).is_err());
    }

    // ==================== Poll / dish ====================

    #[test]
    fn test_poll_is_active() {
        assert!(ensure_poll_is_active(&poll(true)).is_ok());
        assert_eq!(
            ensure_poll_is_active(&poll(false)),
            Err(RuleViolation::PollIsNotActive {
                poll: PollId::new(1)
            })
        );
    }

    #[test]
    fn test_dish_in_list() {
        let poll = poll(true);
        assert!(ensure_dish_in_list(poll.dishes(), &dish(1)).is_ok());
        assert_eq!(
            ensure_dish_in_list(poll.dishes(), &dish(2)),
            Err(RuleViolation::DishMissingInDishList {
                dish: DishId::new(2)
            })
        );
    }

    #[test]
    fn test_dish_in_empty_list_fails() {
        assert!(ensure_dish_in_list(&DishList::default(), &dish(1)).is_err());
    }
}
