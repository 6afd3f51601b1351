use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult};

/// Identity of an external calling system, resolved from request headers.
///
/// Holds only the declared system identifier. The accompanying API key is
/// checked for presence at the HTTP boundary and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemIdentity {
    system_id: String,
}

impl SystemIdentity {
    /// Creates a caller identity from a declared system identifier.
    pub fn new(system_id: impl Into<String>) -> AppResult<Self> {
        let system_id = system_id.into();
        if system_id.trim().is_empty() {
            return Err(AppError::Unauthorized(
                "system identifier must not be empty".to_owned(),
            ));
        }

        Ok(Self { system_id })
    }

    /// Returns the declared system identifier.
    #[must_use]
    pub fn system_id(&self) -> &str {
        self.system_id.as_str()
    }
}
