//! User directory types.
//!
//! Users are owned by the directory; the role subsystem only reads them to
//! check that an assignment targets a known user.

use concierge_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a user record, for example `U-1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a user identifier from a non-empty value.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation("user id must not be empty".to_owned()));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated, lowercased email address.
    ///
    /// Performs basic structural validation: exactly one `@`, non-empty local
    /// part, and a domain containing at least one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        };

        if local.is_empty() || domain.contains('@') {
            return Err(AppError::Validation(format!(
                "invalid email address '{trimmed}'"
            )));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Lifecycle status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Account can sign in.
    Active,
    /// Account is disabled.
    Inactive,
}

impl UserStatus {
    /// Returns the storage string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Read-only user entity exposed by the user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: NonEmptyString,
    email: EmailAddress,
    status: UserStatus,
    platform_role: Option<NonEmptyString>,
}

impl User {
    /// Creates a validated user entity.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        status: UserStatus,
        platform_role: Option<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: UserId::new(id)?,
            name: NonEmptyString::new(name)?,
            email: EmailAddress::new(email)?,
            status,
            platform_role: platform_role.map(NonEmptyString::new).transpose()?,
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the account status.
    #[must_use]
    pub fn status(&self) -> UserStatus {
        self.status
    }

    /// Returns the platform-wide role, if any.
    #[must_use]
    pub fn platform_role(&self) -> Option<&str> {
        self.platform_role.as_ref().map(NonEmptyString::as_str)
    }
}
