use std::collections::BTreeSet;

use concierge_core::{AppError, AppResult};
use concierge_domain::{BusinessUnitId, SystemId};

/// Calling systems accepted when no allow-list is configured.
pub const DEFAULT_ALLOWED_SYSTEM_IDS: &[&str] = &[
    "supply-chain-system",
    "property-management-system",
    "finance-system",
];

/// Business unit identifier prefix used when none is configured.
pub const DEFAULT_BUSINESS_UNIT_PREFIX: &str = "BU-";

/// Static rules applied to every role request before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequestPolicy {
    allowed_system_ids: BTreeSet<String>,
    business_unit_prefix: String,
}

impl RoleRequestPolicy {
    /// Creates a policy from an allow-list of calling systems and a business
    /// unit identifier prefix.
    pub fn new<I, S>(allowed_system_ids: I, business_unit_prefix: impl Into<String>) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_system_ids: BTreeSet<String> = allowed_system_ids
            .into_iter()
            .map(|value| value.as_ref().trim().to_owned())
            .filter(|value| !value.is_empty())
            .collect();
        if allowed_system_ids.is_empty() {
            return Err(AppError::Validation(
                "at least one allowed system id is required".to_owned(),
            ));
        }

        let business_unit_prefix = business_unit_prefix.into();
        if business_unit_prefix.trim().is_empty() {
            return Err(AppError::Validation(
                "business unit id prefix must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            allowed_system_ids,
            business_unit_prefix,
        })
    }

    /// Returns whether the calling system is allow-listed.
    #[must_use]
    pub fn is_allowed_system(&self, system_id: &SystemId) -> bool {
        self.allowed_system_ids.contains(system_id.as_str())
    }

    /// Returns whether the business unit identifier follows the prefix convention.
    #[must_use]
    pub fn accepts_business_unit(&self, business_unit_id: &BusinessUnitId) -> bool {
        business_unit_id.has_prefix(self.business_unit_prefix.as_str())
    }

    /// Returns the configured business unit prefix.
    #[must_use]
    pub fn business_unit_prefix(&self) -> &str {
        self.business_unit_prefix.as_str()
    }

    /// Iterates over allow-listed system identifiers in sorted order.
    pub fn allowed_system_ids(&self) -> impl Iterator<Item = &str> {
        self.allowed_system_ids.iter().map(String::as_str)
    }
}

impl Default for RoleRequestPolicy {
    fn default() -> Self {
        Self {
            allowed_system_ids: DEFAULT_ALLOWED_SYSTEM_IDS
                .iter()
                .map(|value| (*value).to_owned())
                .collect(),
            business_unit_prefix: DEFAULT_BUSINESS_UNIT_PREFIX.to_owned(),
        }
    }
}
