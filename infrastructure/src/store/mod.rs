//! Provider adapters
//!
//! - [`InMemoryStore`] — serves all provider ports from memory
//! - [`DataFile`] — TOML file the store is loaded from and saved back to

mod data_file;
mod memory;

pub use data_file::{
    DataFile, DataFileError, DishRecord, EmployeeRecord, MenuRecord, PollRecord, ResultRecord,
    UserRecord,
};
pub use memory::InMemoryStore;
