use super::errors::PasswordError;

/// Work factor for newly created digests. Existing digests embed their own
/// cost, so verification is unaffected by changes here.
const COST: u32 = 10;

/// Password hashing implementation.
///
/// Produces salted bcrypt digests. The digest string embeds the algorithm
/// version, cost, and salt, so verification needs no side-channel lookup.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, COST).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored digest.
    ///
    /// Recomputes the hash using the salt and cost embedded in `digest` and
    /// compares in constant time. Returns false on mismatch.
    ///
    /// # Errors
    /// * `VerificationFailed` - Digest format is invalid
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, digest)
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
