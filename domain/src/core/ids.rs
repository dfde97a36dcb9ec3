//! Entity identifiers
//!
//! Every entity gets its own newtype so that, for example, a [`DishId`]
//! can never be passed where a [`PollId`] is expected.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a [`User`](crate::user::User)
    UserId
);
entity_id!(
    /// Identity of an [`Employee`](crate::employee::Employee)
    EmployeeId
);
entity_id!(
    /// Identity of a [`Dish`](crate::menu::Dish)
    DishId
);
entity_id!(
    /// Identity of a [`Menu`](crate::menu::Menu)
    MenuId
);
entity_id!(
    /// Identity of a [`Poll`](crate::poll::Poll)
    PollId
);
entity_id!(
    /// Identity of a [`PollResult`](crate::poll::PollResult)
    PollResultId
);
