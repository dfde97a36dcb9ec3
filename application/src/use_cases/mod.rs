//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod choose_dish;
pub mod list_poll_results;

#[cfg(test)]
mod fakes;
