//! Voting rules for choosing a dish
//!
//! A vote is accepted only when every rule passes:
//!
//! | Rule                         | Violation                    |
//! |------------------------------|------------------------------|
//! | employee has not voted yet   | `EmployeeAlreadyChoseDish`   |
//! | user may view active polls   | `AccessDenied`               |
//! | poll is active               | `PollIsNotActive`            |
//! | user may participate         | `AccessDenied`               |
//! | dish is on the poll's menu   | `DishMissingInDishList`      |
//! | inside the voting window     | `OutOfTimeChooseDish`        |

pub mod error;
pub mod rules;
pub mod window;

pub use error::RuleViolation;
pub use rules::{
    ensure_allowed_datetime, ensure_can_participate, ensure_can_view_polls, ensure_dish_in_list,
    ensure_employee_can_choose, ensure_poll_is_active,
};
pub use window::VotingWindow;
