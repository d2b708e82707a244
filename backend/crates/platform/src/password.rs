//! Password Hashing and Verification
//!
//! bcrypt-based credential handling:
//! - Per-call random salt (two hashes of the same input differ)
//! - Tunable work factor, default cost 10
//! - Zeroization of plaintext material on drop
//! - Verification never fails past the boundary: a malformed digest
//!   verifies as `false`
//!
//! Digests must never be compared with plain equality; always go through
//! [`HashedPassword::verify`].

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in Unicode code points
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Default bcrypt work factor
pub const DEFAULT_COST: u32 = 10;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Securely erased from memory when dropped. Does not implement `Clone`,
/// and Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// The input is NFKC-normalized before validation. Length limits are
    /// counted in Unicode code points, not bytes.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(normalized))
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password with bcrypt
    ///
    /// Each call generates a fresh random salt, so hashing the same input
    /// twice yields different digests.
    ///
    /// ## Arguments
    /// * `cost` - bcrypt work factor ([`DEFAULT_COST`] for production use)
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let digest = bcrypt::hash(self.as_bytes(), cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { digest })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (safe to store)
// ============================================================================

/// Hashed password in bcrypt modular crypt format
///
/// The digest string embeds the algorithm version, the cost and the salt,
/// so verification needs nothing but the digest itself.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    digest: String,
}

impl HashedPassword {
    /// Create from a stored digest string (e.g. from the database)
    ///
    /// The digest is not parsed here; a corrupted value simply fails
    /// verification.
    pub fn from_digest(digest: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
        }
    }

    /// Get the digest string for storage
    pub fn as_str(&self) -> &str {
        &self.digest
    }

    /// Verify a password against this digest
    ///
    /// Recomputes with the salt embedded in the digest. Returns `false`
    /// for a non-matching password AND for a malformed digest; this
    /// function never errors past the boundary.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        bcrypt::verify(password.as_bytes(), &self.digest).unwrap_or(false)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("digest", &"[DIGEST]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
