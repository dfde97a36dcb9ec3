//! Domain layer for lunch-poll
//!
//! This crate contains the entities, value objects and voting rules.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Poll
//!
//! A [`Poll`] offers one [`Menu`]; an [`Employee`] votes by choosing one
//! [`Dish`] from it. Each accepted vote becomes a [`PollResult`].
//!
//! ## Voting rules
//!
//! The [`voting`] module holds one function per business rule. Each returns
//! `Result<(), RuleViolation>` and never touches I/O.

pub mod config;
pub mod core;
pub mod employee;
pub mod menu;
pub mod poll;
pub mod user;
pub mod voting;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::ids::{DishId, EmployeeId, MenuId, PollId, PollResultId, UserId};
pub use employee::{Employee, Floor};
pub use menu::{Dish, DishList, Menu};
pub use poll::{Poll, PollResult};
pub use user::{Permission, PermissionList, User};
pub use voting::{RuleViolation, VotingWindow};
