//! TOML data file for the in-memory adapter.
//!
//! Entities refer to each other by id:
//!
//! ```toml
//! [[users]]
//! id = 1
//! permissions = ["VIEW_ACTIVE_POLLS", "PARTICIPATION_IN_POLLS"]
//!
//! [[employees]]
//! id = 1
//! user = 1
//! floor = 4
//! surname = "Surname"
//!
//! [[dishes]]
//! id = 1
//! title = "Pasta"
//! description = "Carbonara"
//!
//! [[menus]]
//! id = 1
//! title = "Monday menu"
//! dishes = [1]
//!
//! [[polls]]
//! id = 1
//! active = true
//! menu = 1
//!
//! [[results]]
//! id = 1
//! poll = 1
//! employee = 1
//! dish = 1
//! floor = 4
//! ```

use super::memory::InMemoryStore;
use lunch_domain::{
    Dish, DishId, DishList, Employee, EmployeeId, Floor, Menu, MenuId, PermissionList, Poll,
    PollId, PollResult, PollResultId, User, UserId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading or writing the data file
#[derive(Error, Debug)]
pub enum DataFileError {
    #[error("Could not access data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid data file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize data: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{entity} {id} referenced by {referenced_by} does not exist")]
    DanglingReference {
        entity: &'static str,
        id: u64,
        referenced_by: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub permissions: PermissionList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub user: UserId,
    pub floor: Floor,
    pub surname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    pub id: DishId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: MenuId,
    pub title: String,
    #[serde(default)]
    pub dishes: Vec<DishId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollRecord {
    pub id: PollId,
    pub active: bool,
    pub menu: MenuId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: PollResultId,
    pub poll: PollId,
    pub employee: EmployeeId,
    pub dish: DishId,
    pub floor: Floor,
}

impl From<&PollResult> for ResultRecord {
    fn from(result: &PollResult) -> Self {
        Self {
            id: result.id(),
            poll: result.poll().id(),
            employee: result.employee().id(),
            dish: result.dish().id(),
            floor: result.floor(),
        }
    }
}

/// Raw contents of the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub employees: Vec<EmployeeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dishes: Vec<DishRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menus: Vec<MenuRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polls: Vec<PollRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<ResultRecord>,
}

impl DataFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DataFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::parse(&content)?;
        debug!(
            "Loaded data file {} ({} employees, {} polls, {} results)",
            path.display(),
            data.employees.len(),
            data.polls.len(),
            data.results.len()
        );
        Ok(data)
    }

    pub fn parse(content: &str) -> Result<Self, DataFileError> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DataFileError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        let io_error = |source| DataFileError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(path, content).map_err(io_error)?;
        debug!("Saved data file {}", path.display());
        Ok(())
    }

    /// Replace the stored results
    pub fn set_results(&mut self, results: &[PollResult]) {
        self.results = results.iter().map(ResultRecord::from).collect();
    }

    /// Resolve every reference and build the in-memory adapter
    pub fn to_store(&self) -> Result<InMemoryStore, DataFileError> {
        let users: HashMap<UserId, User> = self
            .users
            .iter()
            .map(|u| (u.id, User::new(u.id, u.permissions.clone())))
            .collect();
        let dishes: HashMap<DishId, Dish> = self
            .dishes
            .iter()
            .map(|d| (d.id, Dish::new(d.id, d.title.clone(), d.description.clone())))
            .collect();

        let mut employees = HashMap::new();
        for record in &self.employees {
            let user = lookup(&users, record.user, "User", || {
                format!("employee {}", record.id)
            })?;
            let employee = Employee::new(record.id, user.clone(), record.floor, record.surname.clone());
            employees.insert(record.id, employee);
        }

        let mut menus = HashMap::new();
        for record in &self.menus {
            let menu_dishes = record
                .dishes
                .iter()
                .map(|id| {
                    lookup(&dishes, *id, "Dish", || format!("menu {}", record.id)).cloned()
                })
                .collect::<Result<Vec<_>, _>>()?;
            let menu = Menu::new(record.id, record.title.clone(), DishList::new(menu_dishes));
            menus.insert(record.id, menu);
        }

        let mut polls = HashMap::new();
        for record in &self.polls {
            let menu = lookup(&menus, record.menu, "Menu", || format!("poll {}", record.id))?;
            polls.insert(record.id, Poll::new(record.id, record.active, menu.clone()));
        }

        let mut store = InMemoryStore::new();
        for record in &self.results {
            let by = || format!("result {}", record.id);
            let result = PollResult::new(
                record.id,
                lookup(&polls, record.poll, "Poll", by)?.clone(),
                lookup(&employees, record.employee, "Employee", by)?.clone(),
                lookup(&dishes, record.dish, "Dish", by)?.clone(),
                record.floor,
            );
            store = store.with_result(result);
        }

        for employee in employees.into_values() {
            store = store.with_employee(employee);
        }
        for poll in polls.into_values() {
            store = store.with_poll(poll);
        }
        for dish in dishes.into_values() {
            store = store.with_dish(dish);
        }

        Ok(store)
    }
}

fn lookup<'a, K, V>(
    map: &'a HashMap<K, V>,
    id: K,
    entity: &'static str,
    referenced_by: impl FnOnce() -> String,
) -> Result<&'a V, DataFileError>
where
    K: std::hash::Hash + Eq + Copy + Into<u64>,
{
    map.get(&id).ok_or_else(|| DataFileError::DanglingReference {
        entity,
        id: id.into(),
        referenced_by: referenced_by(),
    })
}
