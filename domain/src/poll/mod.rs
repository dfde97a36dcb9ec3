//! Polls and recorded votes

use crate::core::ids::{PollId, PollResultId};
use crate::employee::{Employee, Floor};
use crate::menu::{Dish, DishList, Menu};
use serde::{Deserialize, Serialize};

/// A lunch poll offering one menu
///
/// Whether a poll is active is decided outside the voting workflow;
/// nothing in this crate flips the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    id: PollId,
    active: bool,
    menu: Menu,
}

impl Poll {
    pub fn new(id: PollId, active: bool, menu: Menu) -> Self {
        Self { id, active, menu }
    }

    pub fn id(&self) -> PollId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Shortcut for `poll.menu().dishes()`
    pub fn dishes(&self) -> &DishList {
        self.menu.dishes()
    }
}

/// A recorded vote: one employee choosing one dish in one poll
///
/// The employee's floor is copied at vote time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResult {
    id: PollResultId,
    poll: Poll,
    employee: Employee,
    dish: Dish,
    floor: Floor,
}

impl PollResult {
    pub fn new(id: PollResultId, poll: Poll, employee: Employee, dish: Dish, floor: Floor) -> Self {
        Self {
            id,
            poll,
            employee,
            dish,
            floor,
        }
    }

    pub fn id(&self) -> PollResultId {
        self.id
    }

    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn dish(&self) -> &Dish {
        &self.dish
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::{DishId, EmployeeId, MenuId, UserId};
    use crate::user::{PermissionList, User};

    fn dish() -> Dish {
        Dish::new(DishId::new(1), "Pasta", "Carbonara")
    }

    fn poll(active: bool) -> Poll {
        Poll::new(
            PollId::new(1),
            active,
            Menu::new(MenuId::new(1), "title", DishList::new(vec![dish()])),
        )
    }

    #[test]
    fn test_poll_dishes_shortcut() {
        let poll = poll(true);
        assert!(poll.is_active());
        assert!(poll.dishes().has_dish(DishId::new(1)));
    }

    #[test]
    fn test_poll_result_keeps_floor_at_vote_time() {
        let employee = Employee::new(
            EmployeeId::new(1),
            User::new(UserId::new(1), PermissionList::empty()),
            Floor::new(4),
            "Surname",
        );
        let result = PollResult::new(PollResultId::new(1), poll(true), employee, dish(), Floor::new(2));

        assert_eq!(result.floor(), Floor::new(2));
        assert_eq!(result.employee().floor(), Floor::new(4));
        assert_eq!(result.poll().id(), PollId::new(1));
        assert_eq!(result.dish().id(), DishId::new(1));
    }
}
