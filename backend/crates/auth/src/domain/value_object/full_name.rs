//! Full Name Value Object
//!
//! Display-only free text; the UI owns any richer format rules, the domain
//! only insists on non-emptiness and a sane upper bound.

use crate::error::{AuthError, AuthResult};
use serde::{Deserialize, Serialize};

const FULL_NAME_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName(String);

impl FullName {
    pub fn new(name: impl Into<String>) -> AuthResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AuthError::Validation("ФИО не может быть пустым".to_string()));
        }

        if name.chars().count() > FULL_NAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "ФИО не может быть длиннее {} символов",
                FULL_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
