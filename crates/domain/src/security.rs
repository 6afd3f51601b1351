use std::collections::BTreeSet;
use concierge_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Identifier of an external calling system, for example `supply-chain-system`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemId(String);

impl SystemId {
    /// Creates a system identifier from a non-empty value.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation("system id must not be empty".to_owned()));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for SystemId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Free-text capability tag such as `manager` or `finance`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleName(String);

impl RoleName {
    /// Creates a role name, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> AppResult<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "role name must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Deduplicated set of role names held by one user in one business unit.
///
/// Ordering is not significant to callers; names are kept sorted so that
/// snapshots and responses are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(BTreeSet<RoleName>);

impl RoleSet {
    /// Creates an empty role set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a role set from transport values, collapsing duplicates.
    pub fn from_names<I, S>(names: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(RoleName::new)
            .collect::<AppResult<BTreeSet<_>>>()
            .map(Self)
    }

    /// Returns the union of both sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Returns the roles of `self` not present in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Returns whether the set holds the given role name.
    #[must_use]
    pub fn contains(&self, role_name: &str) -> bool {
        self.0.iter().any(|role| role.as_str() == role_name)
    }

    /// Returns whether the set holds no roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of distinct roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over role names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleName> {
        self.0.iter()
    }

    /// Returns role names as owned transport strings.
    #[must_use]
    pub fn to_names(&self) -> Vec<String> {
        self.0.iter().map(|role| role.as_str().to_owned()).collect()
    }
}

/// Audit action tag recorded for each role mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleAuditAction {
    /// Roles were merged into the existing set.
    Add,
    /// Roles were removed from the existing set.
    Remove,
    /// The set was replaced wholesale.
    Sync,
}

impl RoleAuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Sync => "sync",
        }
    }
}

/// A requested change to the role set of one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleChange {
    /// Merge the roles into the current set.
    Add(RoleSet),
    /// Remove the roles from the current set; absent names are ignored.
    Remove(RoleSet),
    /// Replace the current set with exactly these roles.
    Sync(RoleSet),
}

impl RoleChange {
    /// Computes the role set produced by applying this change to `current`.
    #[must_use]
    pub fn apply(&self, current: &RoleSet) -> RoleSet {
        match self {
            Self::Add(roles) => current.union(roles),
            Self::Remove(roles) => current.difference(roles),
            Self::Sync(roles) => roles.clone(),
        }
    }

    /// Returns the audit action recorded for this change.
    #[must_use]
    pub fn action(&self) -> RoleAuditAction {
        match self {
            Self::Add(_) => RoleAuditAction::Add,
            Self::Remove(_) => RoleAuditAction::Remove,
            Self::Sync(_) => RoleAuditAction::Sync,
        }
    }

    /// Returns whether the change is only valid against an existing assignment.
    #[must_use]
    pub fn requires_existing_assignment(&self) -> bool {
        matches!(self, Self::Remove(_))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{RoleAuditAction, RoleChange, RoleSet};

    fn roles(names: &[&str]) -> RoleSet {
        RoleSet::from_names(names.iter().copied()).unwrap_or_else(|_| unreachable!())
    }

    fn role_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,8}", 0..8)
    }

    #[test]
    fn duplicate_names_collapse() {
        let set = roles(&["manager", "finance", "manager", " finance "]);
        assert_eq!(set.to_names(), vec!["finance", "manager"]);
    }

    #[test]
    fn blank_role_name_is_rejected() {
        assert!(RoleSet::from_names(["manager", "  "]).is_err());
    }

    #[test]
    fn remove_ignores_unknown_names() {
        let current = roles(&["manager", "inventory"]);
        let next = RoleChange::Remove(roles(&["finance", "inventory"])).apply(&current);
        assert_eq!(next.to_names(), vec!["manager"]);
    }

    #[test]
    fn sync_to_empty_clears_the_set() {
        let current = roles(&["manager"]);
        let next = RoleChange::Sync(RoleSet::new()).apply(&current);
        assert!(next.is_empty());
    }

    #[test]
    fn only_remove_requires_existing_assignment() {
        assert!(RoleChange::Remove(RoleSet::new()).requires_existing_assignment());
        assert!(!RoleChange::Add(RoleSet::new()).requires_existing_assignment());
        assert!(!RoleChange::Sync(RoleSet::new()).requires_existing_assignment());
    }

    #[test]
    fn change_maps_to_audit_action() {
        let actions: Vec<&str> = [
            RoleChange::Add(RoleSet::new()),
            RoleChange::Remove(RoleSet::new()),
            RoleChange::Sync(RoleSet::new()),
        ]
        .iter()
        .map(|change| change.action().as_str())
        .collect();

        assert_eq!(actions, ["add", "remove", "sync"]);
        assert_eq!(RoleChange::Add(RoleSet::new()).action(), RoleAuditAction::Add);
    }

    proptest! {
        #[test]
        fn add_is_idempotent(names in role_names()) {
            let incoming = RoleSet::from_names(&names).unwrap_or_default();
            let once = RoleChange::Add(incoming.clone()).apply(&RoleSet::new());
            let twice = RoleChange::Add(incoming).apply(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn add_order_does_not_matter(left in role_names(), right in role_names()) {
            let left = RoleSet::from_names(&left).unwrap_or_default();
            let right = RoleSet::from_names(&right).unwrap_or_default();
            let left_first = RoleChange::Add(right.clone())
                .apply(&RoleChange::Add(left.clone()).apply(&RoleSet::new()));
            let right_first = RoleChange::Add(left)
                .apply(&RoleChange::Add(right).apply(&RoleSet::new()));
            prop_assert_eq!(left_first, right_first);
        }

        #[test]
        fn remove_leaves_no_removed_role(current in role_names(), removed in role_names()) {
            let current = RoleSet::from_names(&current).unwrap_or_default();
            let removed = RoleSet::from_names(&removed).unwrap_or_default();
            let next = RoleChange::Remove(removed.clone()).apply(&current);
            for role in removed.iter() {
                prop_assert!(!next.contains(role.as_str()));
            }
            for role in next.iter() {
                prop_assert!(current.contains(role.as_str()));
            }
        }

        #[test]
        fn sync_ignores_prior_state(current in role_names(), incoming in role_names()) {
            let current = RoleSet::from_names(&current).unwrap_or_default();
            let incoming = RoleSet::from_names(&incoming).unwrap_or_default();
            prop_assert_eq!(RoleChange::Sync(incoming.clone()).apply(&current), incoming);
        }
    }
}
