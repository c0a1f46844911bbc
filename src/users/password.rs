use crate::error::AuthError;
use tracing::error;

/// Hash a plaintext password with a fresh random salt.
///
/// The bcrypt output string embeds both salt and cost, so
/// verification needs nothing beyond the stored hash itself.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(plain, cost).map_err(|e| {
        error!(error = %e, "bcrypt hash error");
        AuthError::Hashing(e.to_string())
    })
}

/// Check a plaintext password against a stored hash.
///
/// A mismatch is `Ok(false)`; only a malformed stored hash errors.
pub fn verify_password(plain: &str, stored: &str) -> Result<bool, AuthError> {
    bcrypt::verify(plain, stored).map_err(|e| {
        error!(error = %e, "bcrypt verify error");
        AuthError::Hashing(e.to_string())
    })
}
