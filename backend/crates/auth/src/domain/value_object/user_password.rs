//! User Password Value Object
//!
//! Domain wrappers around `platform::password`. `RawPassword` is the
//! validated plaintext (zeroized on drop, redacted Debug); `PasswordDigest`
//! is the stored bcrypt digest. Plaintext crosses the trust boundary only
//! inside the credential use cases.

use crate::error::AuthResult;
use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

// ============================================================================
// Raw Password (user input)
// ============================================================================

/// Raw password from user input
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create with validation (non-empty, 6..=128 code points,
    /// NFKC-normalized)
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw)?;
        Ok(Self(clear_text))
    }

    pub(crate) fn into_inner(self) -> ClearTextPassword {
        self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Digest (hashed, for storage)
// ============================================================================

/// Hashed password for database storage
///
/// Never compare digests with equality; salting makes equal passwords
/// produce distinct digests. Always verify through the hasher.
#[derive(Clone)]
pub struct PasswordDigest(HashedPassword);

impl PasswordDigest {
    /// Wrap a freshly computed hash
    pub fn from_hashed(hashed: HashedPassword) -> Self {
        Self(hashed)
    }

    /// Create from a stored digest string (from the database)
    pub fn from_digest(digest: impl Into<String>) -> Self {
        Self(HashedPassword::from_digest(digest))
    }

    /// Get the digest string for storage
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Verify a plaintext password against this digest.
    /// Malformed digests verify false; this never errors.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        self.0.verify(password)
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("digest", &"[DIGEST]")
            .finish()
    }
}
