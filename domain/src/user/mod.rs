//! Users and their permissions

mod permission;

pub use permission::{Permission, PermissionList};

use crate::core::ids::UserId;
use serde::{Deserialize, Serialize};

/// An authenticated user and the permissions granted to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    permissions: PermissionList,
}

impl User {
    pub fn new(id: UserId, permissions: PermissionList) -> Self {
        Self { id, permissions }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn permissions(&self) -> &PermissionList {
        &self.permissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_exposes_permissions() {
        let user = User::new(
            UserId::new(1),
            PermissionList::new([Permission::ParticipationInPolls]),
        );
        assert_eq!(user.id(), UserId::new(1));
        assert!(user.permissions().has_permission(Permission::ParticipationInPolls));
    }
}
