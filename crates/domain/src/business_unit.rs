use concierge_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Identifier of a business unit (a single hotel or resort property).
///
/// Business unit identifiers are opaque strings tagged with a fixed prefix,
/// for example `BU-1234`. The prefix is a deployment convention, so it is
/// checked with [`BusinessUnitId::has_prefix`] rather than at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BusinessUnitId(String);

impl BusinessUnitId {
    /// Creates a business unit identifier from a non-empty value.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "business unit id must not be empty".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns whether the identifier carries the given prefix followed by
    /// at least one character.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0
            .strip_prefix(prefix)
            .is_some_and(|suffix| !suffix.is_empty())
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for BusinessUnitId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}
