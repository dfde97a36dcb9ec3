//! Permission value objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A capability that can be granted to a [`User`](super::User)
///
/// Permissions compare by code. The code is the wire representation used in
/// data files and error messages.
///
/// # Example
///
/// ```
/// use lunch_domain::Permission;
///
/// let permission: Permission = "VIEW_ACTIVE_POLLS".parse().unwrap();
/// assert_eq!(permission, Permission::ViewActivePolls);
/// assert_eq!(permission.code(), "VIEW_ACTIVE_POLLS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// May see polls that are currently open
    ViewActivePolls,
    /// May cast a vote in a poll
    ParticipationInPolls,
}

impl Permission {
    /// All known permissions
    pub const ALL: [Permission; 2] = [Permission::ViewActivePolls, Permission::ParticipationInPolls];

    /// Stable code for this permission
    pub fn code(&self) -> &'static str {
        match self {
            Permission::ViewActivePolls => "VIEW_ACTIVE_POLLS",
            Permission::ParticipationInPolls => "PARTICIPATION_IN_POLLS",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown permission: {}", s))
    }
}

/// The set of permissions held by a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionList {
    permissions: BTreeSet<Permission>,
}

impl PermissionList {
    pub fn new(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
        }
    }

    /// A list with no permissions
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.permissions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl FromIterator<Permission> for PermissionList {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "participation_in_polls".parse::<Permission>().unwrap(),
            Permission::ParticipationInPolls
        );
        assert!("ADMIN".parse::<Permission>().is_err());
    }

    #[test]
    fn test_has_permission() {
        let list = PermissionList::new([Permission::ViewActivePolls]);
        assert!(list.has_permission(Permission::ViewActivePolls));
        assert!(!list.has_permission(Permission::ParticipationInPolls));
    }

    #[test]
    fn test_duplicates_collapse() {
        let list = PermissionList::new([Permission::ViewActivePolls, Permission::ViewActivePolls]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let list = PermissionList::empty();
        assert!(list.is_empty());
        assert!(Permission::ALL.iter().all(|p| !list.has_permission(*p)));
    }

    #[test]
    fn test_serialize_as_codes() {
        let list: PermissionList = Permission::ALL.into_iter().collect();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["VIEW_ACTIVE_POLLS","PARTICIPATION_IN_POLLS"]"#);
    }
}
