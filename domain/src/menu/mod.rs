//! Menus and the dishes on them

use crate::core::ids::{DishId, MenuId};
use serde::{Deserialize, Serialize};

/// A dish that can be chosen in a poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    id: DishId,
    title: String,
    description: String,
}

impl Dish {
    pub fn new(id: DishId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> DishId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Ordered list of dishes belonging to a [`Menu`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishList {
    dishes: Vec<Dish>,
}

impl DishList {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    /// Whether a dish with the given id is on this list
    pub fn has_dish(&self, id: DishId) -> bool {
        self.dishes.iter().any(|d| d.id() == id)
    }

    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

impl FromIterator<Dish> for DishList {
    fn from_iter<I: IntoIterator<Item = Dish>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A named set of dishes offered by a poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    id: MenuId,
    title: String,
    dishes: DishList,
}

impl Menu {
    pub fn new(id: MenuId, title: impl Into<String>, dishes: DishList) -> Self {
        Self {
            id,
            title: title.into(),
            dishes,
        }
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dishes(&self) -> &DishList {
        &self.dishes
    }
}
